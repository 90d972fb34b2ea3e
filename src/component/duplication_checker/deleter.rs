use super::hash_grouper::group_by_hash;
use crate::tools::ScanResult;
use anyhow::{Context, Result};
use console::style;
use indicatif::{ProgressBar, ProgressStyle};
use log::{error, info, warn};
use rust_i18n::t;
use std::fs;
use std::path::Path;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

/// 刪除階段的統計
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct DeletionSummary {
    pub size_groups_checked: usize,
    pub files_hashed: usize,
    pub hash_errors: usize,
    pub duplicate_groups: usize,
    pub kept: usize,
    pub deleted: usize,
    pub skipped: usize,
    pub delete_errors: usize,
    pub bytes_freed: u64,
    pub interrupted: bool,
}

/// 逐一確認並刪除內容相同的重複檔案
///
/// 每個 hash 群組的第一個檔案一定保留，其餘檔案只有在 `confirm` 回傳
/// `true` 時才會被刪除。
pub struct DuplicateDeleter {
    shutdown_signal: Arc<AtomicBool>,
    show_progress: bool,
}

impl DuplicateDeleter {
    pub const fn new(shutdown_signal: Arc<AtomicBool>) -> Self {
        Self {
            shutdown_signal,
            show_progress: true,
        }
    }

    #[must_use]
    pub const fn with_progress(mut self, show_progress: bool) -> Self {
        self.show_progress = show_progress;
        self
    }

    fn interrupted(&self) -> bool {
        self.shutdown_signal.load(Ordering::SeqCst)
    }

    pub fn run<H, C>(&self, scan: &ScanResult, mut hasher: H, mut confirm: C) -> Result<DeletionSummary>
    where
        H: FnMut(&Path) -> Result<String>,
        C: FnMut(&Path) -> Result<bool>,
    {
        let mut summary = DeletionSummary::default();

        for (size, files) in scan.duplicate_size_groups() {
            if self.interrupted() {
                warn!("收到中斷訊號，停止刪除流程");
                summary.interrupted = true;
                break;
            }

            summary.size_groups_checked += 1;
            println!(
                "\n{}",
                style(t!("deleter.processing_size", size = size)).cyan()
            );

            let progress_bar = self.hash_progress_bar(files.len());
            let grouping = group_by_hash(files, |path| {
                let hash = hasher(path);
                progress_bar.inc(1);
                hash
            });
            progress_bar.finish_and_clear();

            summary.files_hashed += grouping.hashed_count();
            summary.hash_errors += grouping.failures.len();
            for failure in &grouping.failures {
                println!(
                    "  {}",
                    style(t!(
                        "deleter.hash_error",
                        path = failure.path.display(),
                        error = format!("{:#}", failure.error)
                    ))
                    .red()
                );
            }

            for (hash, duplicates) in grouping.duplicates() {
                if self.interrupted() {
                    summary.interrupted = true;
                    break;
                }
                summary.duplicate_groups += 1;
                println!("{}", t!("deleter.duplicate_hash", hash = hash));

                let (keep, rest) = duplicates
                    .split_first()
                    .context("duplicate group is empty")?;
                summary.kept += 1;
                println!(
                    "  {} {}",
                    style(t!("deleter.keeping")).green(),
                    keep.display()
                );

                for file in rest {
                    if self.interrupted() {
                        summary.interrupted = true;
                        break;
                    }

                    if !confirm(file)? {
                        summary.skipped += 1;
                        println!(
                            "  {} {}",
                            style(t!("deleter.skipped")).dim(),
                            file.display()
                        );
                        continue;
                    }

                    match delete_file(file) {
                        Ok(()) => {
                            summary.deleted += 1;
                            summary.bytes_freed = summary.bytes_freed.saturating_add(size);
                            info!("已刪除重複檔案: {} (保留 {})", file.display(), keep.display());
                            println!(
                                "  {} {}",
                                style(t!("deleter.deleted")).yellow(),
                                file.display()
                            );
                        }
                        Err(e) => {
                            summary.delete_errors += 1;
                            error!("刪除檔案失敗 {}: {e:#}", file.display());
                            println!(
                                "  {}",
                                style(t!(
                                    "deleter.delete_error",
                                    path = file.display(),
                                    error = format!("{e:#}")
                                ))
                                .red()
                            );
                        }
                    }
                }
            }
        }

        info!(
            "刪除流程完成 - 重複群組: {}, 刪除: {}, 略過: {}, 錯誤: {}",
            summary.duplicate_groups,
            summary.deleted,
            summary.skipped,
            summary.hash_errors + summary.delete_errors
        );

        Ok(summary)
    }

    fn hash_progress_bar(&self, len: usize) -> ProgressBar {
        if !self.show_progress {
            return ProgressBar::hidden();
        }
        let progress_bar = ProgressBar::new(len as u64);
        if let Ok(progress_style) = ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} {msg}")
        {
            progress_bar.set_style(progress_style.progress_chars("#>-"));
        }
        progress_bar.set_message(t!("deleter.hashing").to_string());
        progress_bar
    }
}

fn delete_file(path: &Path) -> Result<()> {
    fs::remove_file(path).with_context(|| format!("cannot delete {}", path.display()))
}
