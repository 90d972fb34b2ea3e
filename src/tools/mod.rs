mod file_hasher;
mod file_scanner;
mod path_validator;

pub use file_hasher::{calculate_file_hash, hash_reader};
pub use file_scanner::{ScanError, ScanResult, scan_video_files};
pub use path_validator::validate_directory_exists;
