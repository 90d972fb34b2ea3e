use crate::config::has_extension_in;
use anyhow::{Context, Result};
use log::{debug, info, warn};
use std::collections::{BTreeMap, HashSet};
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};
use walkdir::WalkDir;

/// 掃描過程中遇到、但不中斷掃描的錯誤
#[derive(Debug, Clone)]
pub struct ScanError {
    pub path: Option<PathBuf>,
    pub message: String,
}

/// 掃描結果：以檔案大小分組的影片路徑
#[derive(Debug, Default)]
pub struct ScanResult {
    /// Key 是檔案大小，Value 是該大小的所有檔案（依走訪順序）
    pub size_map: BTreeMap<u64, Vec<PathBuf>>,
    pub total_files: usize,
    pub errors: Vec<ScanError>,
    pub interrupted: bool,
}

impl ScanResult {
    pub fn insert(&mut self, size: u64, path: PathBuf) {
        self.size_map.entry(size).or_default().push(path);
        self.total_files += 1;
    }

    /// 有兩個以上檔案的大小群組，由小到大
    pub fn duplicate_size_groups(&self) -> impl Iterator<Item = (u64, &[PathBuf])> {
        self.size_map
            .iter()
            .filter(|(_, paths)| paths.len() > 1)
            .map(|(size, paths)| (*size, paths.as_slice()))
    }

    #[must_use]
    pub fn has_size_duplicates(&self) -> bool {
        self.duplicate_size_groups().next().is_some()
    }

    /// 每個大小群組只留一份時可省下的空間
    #[must_use]
    pub fn potential_savings(&self) -> u64 {
        self.duplicate_size_groups()
            .map(|(size, paths)| (paths.len() as u64 - 1).saturating_mul(size))
            .fold(0u64, u64::saturating_add)
    }
}

/// 遞迴掃描目錄下符合副檔名的檔案，並依大小分組
///
/// 無法存取的項目會記錄在 `errors` 中，掃描繼續進行；
/// 只有根目錄本身無法讀取時才回傳錯誤。
pub fn scan_video_files(
    directory: &Path,
    extensions: &HashSet<String>,
    shutdown_signal: &AtomicBool,
) -> Result<ScanResult> {
    info!("開始掃描目錄: {}", directory.display());

    let mut result = ScanResult::default();

    for entry in WalkDir::new(directory)
        .follow_links(false)
        .sort_by_file_name()
    {
        if shutdown_signal.load(Ordering::SeqCst) {
            warn!("收到中斷訊號，停止掃描");
            result.interrupted = true;
            break;
        }

        let entry = match entry {
            Ok(entry) => entry,
            // 根目錄本身無法讀取時整個掃描沒有意義
            Err(e) if e.depth() == 0 => {
                return Err(e)
                    .with_context(|| format!("cannot read directory {}", directory.display()));
            }
            Err(e) => {
                warn!("無法存取路徑: {e}");
                result.errors.push(ScanError {
                    path: e.path().map(Path::to_path_buf),
                    message: e.to_string(),
                });
                continue;
            }
        };

        if !entry.file_type().is_file() || !has_extension_in(entry.path(), extensions) {
            continue;
        }

        match entry.metadata() {
            Ok(metadata) => {
                debug!("{} ({} bytes)", entry.path().display(), metadata.len());
                result.insert(metadata.len(), entry.into_path());
            }
            Err(e) => {
                warn!("無法讀取檔案資訊 {}: {e}", entry.path().display());
                result.errors.push(ScanError {
                    path: Some(entry.into_path()),
                    message: e.to_string(),
                });
            }
        }
    }

    info!(
        "掃描完成 - 影片: {}, 大小群組: {}, 錯誤: {}",
        result.total_files,
        result.size_map.len(),
        result.errors.len()
    );

    Ok(result)
}
