use anyhow::Result;
use log::warn;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// 無法計算 hash 的檔案
#[derive(Debug)]
pub struct HashFailure {
    pub path: PathBuf,
    pub error: anyhow::Error,
}

/// 同一大小群組內，依 hash 分組的結果
///
/// 群組順序與群組內的檔案順序都保持第一次出現的順序，
/// 因此每組的第一個檔案就是要保留的檔案。
#[derive(Debug, Default)]
pub struct HashGrouping {
    groups: Vec<(String, Vec<PathBuf>)>,
    pub failures: Vec<HashFailure>,
}

impl HashGrouping {
    fn push(&mut self, index: &mut HashMap<String, usize>, hash: String, path: PathBuf) {
        if let Some(&i) = index.get(&hash) {
            self.groups[i].1.push(path);
        } else {
            index.insert(hash.clone(), self.groups.len());
            self.groups.push((hash, vec![path]));
        }
    }

    /// 只回傳有兩個以上檔案的 hash 群組
    pub fn duplicates(&self) -> impl Iterator<Item = (&str, &[PathBuf])> {
        self.groups
            .iter()
            .filter(|(_, paths)| paths.len() > 1)
            .map(|(hash, paths)| (hash.as_str(), paths.as_slice()))
    }

    #[must_use]
    pub fn hashed_count(&self) -> usize {
        self.groups.iter().map(|(_, paths)| paths.len()).sum()
    }
}

/// 對每個路徑計算 hash 並分組，失敗的檔案記錄後略過
pub fn group_by_hash<F>(paths: &[PathBuf], mut hasher: F) -> HashGrouping
where
    F: FnMut(&Path) -> Result<String>,
{
    let mut grouping = HashGrouping::default();
    let mut index = HashMap::new();

    for path in paths {
        match hasher(path) {
            Ok(hash) => grouping.push(&mut index, hash, path.clone()),
            Err(error) => {
                warn!("計算 hash 失敗 {}: {error:#}", path.display());
                grouping.failures.push(HashFailure {
                    path: path.clone(),
                    error,
                });
            }
        }
    }

    grouping
}
