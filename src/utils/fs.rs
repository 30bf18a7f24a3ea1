//! File system utility functions
//!
//! Provides raw file reads with errors that name the failing step and path.

use crate::error::{CliError, Result};
use std::fs::File;
use std::io::Read;
use std::path::Path;
use tracing::{debug, instrument};

/// Utility struct for file system operations
#[derive(Debug)]
pub struct FileSystemUtils;

impl FileSystemUtils {
    /// Create a new file system utilities instance
    pub fn new() -> Self {
        Self
    }

    /// Read the whole file as raw bytes
    ///
    /// The handle is dropped before returning on every path.
    #[instrument(skip(self))]
    pub fn read_file<P: AsRef<Path> + std::fmt::Debug>(&self, path: P) -> Result<Vec<u8>> {
        let path = path.as_ref();
        debug!("Reading file: {}", path.display());

        let mut file =
            File::open(path).map_err(|e| CliError::file_system("unable to open", path, e))?;

        let mut contents = Vec::new();
        let bytes_read = file
            .read_to_end(&mut contents)
            .map_err(|e| CliError::file_system("reading", path, e))?;

        debug!("Read {} bytes", bytes_read);
        Ok(contents)
    }
}

impl Default for FileSystemUtils {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_read_file() {
        let temp_dir = TempDir::new().unwrap();
        let fs_utils = FileSystemUtils::new();

        let file_path = temp_dir.path().join("banner.txt");
        fs::write(&file_path, "  /\\_/\\\n ( o.o )\n").unwrap();

        let content = fs_utils.read_file(&file_path).unwrap();
        assert_eq!(content, b"  /\\_/\\\n ( o.o )\n");
    }

    #[test]
    fn test_read_file_latin1() {
        let temp_dir = TempDir::new().unwrap();
        let fs_utils = FileSystemUtils::new();

        let file_path = temp_dir.path().join("latin1.txt");
        fs::write(&file_path, b"se\xf1or caf\xe9\n").unwrap();

        assert_eq!(
            fs_utils.read_file(&file_path).unwrap(),
            b"se\xf1or caf\xe9\n"
        );
    }

    #[test]
    fn test_read_empty_file() {
        let temp_dir = TempDir::new().unwrap();
        let fs_utils = FileSystemUtils::new();

        let file_path = temp_dir.path().join("empty.txt");
        fs::write(&file_path, "").unwrap();

        assert!(fs_utils.read_file(&file_path).unwrap().is_empty());
    }

    #[test]
    fn test_missing_file_reports_open_failure() {
        let temp_dir = TempDir::new().unwrap();
        let fs_utils = FileSystemUtils::new();

        let file_path = temp_dir.path().join("missing.txt");
        let err = fs_utils.read_file(&file_path).unwrap_err();

        match &err {
            CliError::FileSystem {
                operation, source, ..
            } => {
                assert_eq!(operation, "unable to open");
                assert_eq!(source.kind(), std::io::ErrorKind::NotFound);
            }
            other => panic!("Expected FileSystem error, got {other:?}"),
        }
        assert!(err.to_string().contains("missing.txt"));
    }

    #[test]
    fn test_directory_is_not_readable() {
        let temp_dir = TempDir::new().unwrap();
        let fs_utils = FileSystemUtils::new();

        assert!(fs_utils.read_file(temp_dir.path()).is_err());
    }
}
