use anyhow::{Result, bail};
use rust_i18n::t;
use std::path::Path;

pub fn validate_directory_exists(path: &Path) -> Result<()> {
    if !path.exists() {
        bail!("{}", t!("errors.path_not_found", path = path.display()));
    }
    if !path.is_dir() {
        bail!("{}", t!("errors.not_a_directory", path = path.display()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::{NamedTempFile, TempDir};

    #[test]
    fn test_existing_directory_is_valid() {
        let temp_dir = TempDir::new().unwrap();
        assert!(validate_directory_exists(temp_dir.path()).is_ok());
    }

    #[test]
    fn test_missing_path_is_rejected() {
        assert!(validate_directory_exists(Path::new("/nonexistent/videos")).is_err());
    }

    #[test]
    fn test_file_is_rejected() {
        let temp_file = NamedTempFile::new().unwrap();
        assert!(validate_directory_exists(temp_file.path()).is_err());
    }
}
