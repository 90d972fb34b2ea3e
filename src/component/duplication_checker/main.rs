use super::deleter::{DeletionSummary, DuplicateDeleter};
use super::report::{print_deletion_summary, print_savings, print_scan_errors, print_size_table};
use crate::config::Config;
use crate::tools::{ScanResult, calculate_file_hash, scan_video_files, validate_directory_exists};
use anyhow::Result;
use console::style;
use dialoguer::{Confirm, Input};
use log::{info, warn};
use rust_i18n::t;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::sync::atomic::AtomicBool;

/// 與使用者互動的介面
pub trait Prompt {
    /// 詢問要掃描的資料夾，空白輸入回傳 `None`
    fn input_path(&mut self) -> Result<Option<PathBuf>>;
    fn confirm(&mut self, prompt: &str) -> Result<bool>;
}

/// 終端機互動（dialoguer）
pub struct TerminalPrompt;

impl Prompt for TerminalPrompt {
    fn input_path(&mut self) -> Result<Option<PathBuf>> {
        let path: String = Input::new()
            .with_prompt(t!("checker.prompt_path"))
            .allow_empty(true)
            .interact_text()?;
        let path = path.trim();

        if path.is_empty() {
            Ok(None)
        } else {
            Ok(Some(PathBuf::from(path)))
        }
    }

    fn confirm(&mut self, prompt: &str) -> Result<bool> {
        let confirm = Confirm::new()
            .with_prompt(prompt)
            .default(false)
            .interact()?;
        Ok(confirm)
    }
}

/// `run` 結束的原因
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunOutcome {
    NoDirectory,
    Interrupted,
    NoDuplicates,
    Cancelled,
    Completed(DeletionSummary),
}

pub struct DuplicationChecker<P: Prompt = TerminalPrompt> {
    config: Config,
    shutdown_signal: Arc<AtomicBool>,
    prompt: P,
}

impl DuplicationChecker<TerminalPrompt> {
    pub const fn new(config: Config, shutdown_signal: Arc<AtomicBool>) -> Self {
        Self::with_prompt(config, shutdown_signal, TerminalPrompt)
    }
}

impl<P: Prompt> DuplicationChecker<P> {
    pub const fn with_prompt(config: Config, shutdown_signal: Arc<AtomicBool>, prompt: P) -> Self {
        Self {
            config,
            shutdown_signal,
            prompt,
        }
    }

    /// 掃描、列出相同大小的影片，並在使用者同意後逐一刪除重複檔案
    ///
    /// `directory` 為 `None` 時會互動詢問；`extensions` 非空時覆蓋設定中的副檔名。
    pub fn run(&mut self, directory: Option<PathBuf>, extensions: &[String]) -> Result<RunOutcome> {
        println!("{}", style(t!("checker.title")).cyan().bold());

        let directory = match directory {
            Some(directory) => directory,
            None => match self.prompt.input_path()? {
                Some(directory) => directory,
                None => {
                    println!("{}", style(t!("checker.no_directory")).yellow());
                    return Ok(RunOutcome::NoDirectory);
                }
            },
        };

        validate_directory_exists(&directory)?;

        println!("{}", style(t!("checker.scanning")).dim());
        let scan = self.scan(&directory, extensions)?;

        print_scan_errors(&scan);

        // 不完整的掃描結果不能拿來判斷重複
        if scan.interrupted {
            warn!("掃描被中斷，略過報表與刪除");
            println!("{}", style(t!("report.interrupted")).yellow());
            return Ok(RunOutcome::Interrupted);
        }

        println!(
            "{}",
            style(t!("checker.found_videos", count = scan.total_files)).green()
        );

        if !scan.has_size_duplicates() {
            println!("{}", style(t!("checker.no_duplicates")).green());
            return Ok(RunOutcome::NoDuplicates);
        }

        println!("\n{}", t!("checker.same_size_title"));
        print_size_table(&scan)?;
        print_savings(scan.potential_savings())?;

        if !self.prompt.confirm(&t!("checker.confirm_bulk"))? {
            println!("{}", style(t!("checker.cancelled")).yellow());
            return Ok(RunOutcome::Cancelled);
        }

        let summary = self.delete_duplicates(&scan)?;
        print_deletion_summary(&summary);

        Ok(RunOutcome::Completed(summary))
    }

    fn scan(&self, directory: &Path, extensions: &[String]) -> Result<ScanResult> {
        let extensions = self.config.scan_extensions(extensions);
        let mut sorted: Vec<&String> = extensions.iter().collect();
        sorted.sort();
        info!("掃描副檔名: {sorted:?}");

        scan_video_files(directory, &extensions, &self.shutdown_signal)
    }

    fn delete_duplicates(&mut self, scan: &ScanResult) -> Result<DeletionSummary> {
        let prompt = &mut self.prompt;
        DuplicateDeleter::new(Arc::clone(&self.shutdown_signal)).run(
            scan,
            calculate_file_hash,
            |file| prompt.confirm(&t!("checker.confirm_delete", path = file.display())),
        )
    }
}
