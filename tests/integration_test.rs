//! 整合測試 - 掃描、分組、刪除的完整流程

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::sync::atomic::AtomicBool;

use dupe_video_cleaner::component::duplication_checker::DuplicateDeleter;
use dupe_video_cleaner::config::normalize_extension;
use dupe_video_cleaner::tools::{calculate_file_hash, scan_video_files};
use tempfile::TempDir;

fn video_extensions() -> HashSet<String> {
    ["mp4", "mkv"].iter().map(|e| normalize_extension(e)).collect()
}

fn write(path: &Path, content: &[u8]) -> PathBuf {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, content).unwrap();
    path.to_path_buf()
}

/// 建立測試資料夾：
/// - movie_a 與兩份副本（其中一份在子資料夾、副檔名大寫）
/// - 與 movie_a 同大小但內容不同的 other
/// - 唯一大小的 unique
/// - 內容與 movie_a 相同但不是影片的 notes.txt
struct Fixture {
    _temp_dir: TempDir,
    root: PathBuf,
    original: PathBuf,
    copy_1: PathBuf,
    copy_2: PathBuf,
    same_size_other: PathBuf,
    unique: PathBuf,
    not_video: PathBuf,
}

fn fixture() -> Fixture {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path().to_path_buf();

    let content = b"fake video payload 0123456789";
    let other = b"fake video payload 9876543210";
    assert_eq!(content.len(), other.len());

    Fixture {
        original: write(&root.join("a_movie.mp4"), content),
        copy_1: write(&root.join("b_copy.mkv"), content),
        copy_2: write(&root.join("sub/c_copy.MP4"), content),
        same_size_other: write(&root.join("d_other.mp4"), other),
        unique: write(&root.join("unique.mp4"), b"short"),
        not_video: write(&root.join("notes.txt"), content),
        root,
        _temp_dir: temp_dir,
    }
}

#[test]
fn test_scan_filters_and_groups_by_size() {
    let f = fixture();
    let signal = AtomicBool::new(false);

    let scan = scan_video_files(&f.root, &video_extensions(), &signal).unwrap();

    assert_eq!(scan.total_files, 5, "notes.txt 不應被掃描");
    let groups: Vec<_> = scan.duplicate_size_groups().collect();
    assert_eq!(groups.len(), 1);
    let (size, files) = groups[0];
    assert_eq!(size, 29);
    assert_eq!(files.len(), 4);
    assert!(!files.contains(&f.unique));
    assert!(!files.contains(&f.not_video));
    assert_eq!(scan.potential_savings(), 3 * 29);
}

#[test]
fn test_full_flow_deletes_only_confirmed_duplicates() {
    let f = fixture();
    let signal = Arc::new(AtomicBool::new(false));

    let scan = scan_video_files(&f.root, &video_extensions(), &signal).unwrap();
    let summary = DuplicateDeleter::new(Arc::clone(&signal))
        .with_progress(false)
        .run(&scan, calculate_file_hash, |_| Ok(true))
        .unwrap();

    // 依檔名排序走訪，a_movie.mp4 是第一個，因此被保留
    assert!(f.original.exists());
    assert!(!f.copy_1.exists());
    assert!(!f.copy_2.exists());

    assert!(f.same_size_other.exists(), "同大小不同內容不應被刪除");
    assert!(f.unique.exists(), "唯一大小的檔案不應被處理");
    assert!(f.not_video.exists());

    assert_eq!(summary.duplicate_groups, 1);
    assert_eq!(summary.kept, 1);
    assert_eq!(summary.deleted, 2);
    assert_eq!(summary.files_hashed, 4);
    assert_eq!(summary.bytes_freed, 2 * 29);
}

#[test]
fn test_partial_confirmation() {
    let f = fixture();
    let signal = Arc::new(AtomicBool::new(false));

    let scan = scan_video_files(&f.root, &video_extensions(), &signal).unwrap();
    let copy_1 = f.copy_1.clone();
    let summary = DuplicateDeleter::new(Arc::clone(&signal))
        .with_progress(false)
        .run(&scan, calculate_file_hash, |path| Ok(path == copy_1))
        .unwrap();

    assert!(f.original.exists());
    assert!(!f.copy_1.exists());
    assert!(f.copy_2.exists());
    assert_eq!(summary.deleted, 1);
    assert_eq!(summary.skipped, 1);
}

#[test]
fn test_second_run_finds_nothing_to_delete() {
    let f = fixture();
    let signal = Arc::new(AtomicBool::new(false));
    let deleter = DuplicateDeleter::new(Arc::clone(&signal)).with_progress(false);

    let scan = scan_video_files(&f.root, &video_extensions(), &signal).unwrap();
    deleter.run(&scan, calculate_file_hash, |_| Ok(true)).unwrap();

    let rescan = scan_video_files(&f.root, &video_extensions(), &signal).unwrap();
    let summary = deleter
        .run(&rescan, calculate_file_hash, |_| {
            panic!("不應再詢問刪除");
        })
        .unwrap();

    assert_eq!(rescan.total_files, 3);
    assert_eq!(summary.duplicate_groups, 0);
    assert_eq!(summary.deleted, 0);
}
