//! 重複影片檢查與刪除元件
//!
//! 先以檔案大小分組，再以 BLAKE3 hash 確認內容相同，逐一詢問是否刪除

mod deleter;
mod hash_grouper;
mod main;
mod report;

pub use deleter::{DeletionSummary, DuplicateDeleter};
pub use hash_grouper::{HashFailure, HashGrouping, group_by_hash};
pub use main::{DuplicationChecker, Prompt, RunOutcome, TerminalPrompt};
pub use report::{
    print_deletion_summary, print_savings, print_scan_errors, print_size_table, write_savings,
    write_size_table,
};
