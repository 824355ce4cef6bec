//! FileSystem port - abstraction over file I/O operations
//!
//! This trait lets the cleanup procedure run against local disk in
//! production and an in-memory fake in tests.

use std::path::{Path, PathBuf};

/// Result type for file system operations
pub type FsResult<T> = Result<T, FsError>;

/// File system operation errors
#[derive(Debug)]
pub enum FsError {
    /// Entry not found
    NotFound(PathBuf),
    /// Permission denied
    PermissionDenied(PathBuf),
    /// I/O error
    Io(std::io::Error),
    /// Other error
    Other(String),
}

impl FsError {
    /// Classify an `io::Error` for `path`, keeping the path in the variant.
    pub fn from_io(err: std::io::Error, path: &Path) -> Self {
        match err.kind() {
            std::io::ErrorKind::NotFound => FsError::NotFound(path.to_path_buf()),
            std::io::ErrorKind::PermissionDenied => {
                FsError::PermissionDenied(path.to_path_buf())
            }
            _ => FsError::Io(err),
        }
    }
}

impl std::fmt::Display for FsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FsError::NotFound(path) => write!(f, "not found: {}", path.display()),
            FsError::PermissionDenied(path) => {
                write!(f, "permission denied: {}", path.display())
            }
            FsError::Io(err) => write!(f, "I/O error: {}", err),
            FsError::Other(msg) => write!(f, "{}", msg),
        }
    }
}

impl std::error::Error for FsError {}

/// Abstract file system interface
///
/// Implementations:
/// - `LocalFs` - standard file I/O
/// - in-memory fakes in unit tests
pub trait FileSystem {
    /// Check if a path exists
    fn exists(&self, path: &Path) -> bool;

    /// Check if a path is a directory
    fn is_dir(&self, path: &Path) -> bool;

    /// Remove a file
    fn remove_file(&self, path: &Path) -> FsResult<()>;

    /// Remove a directory and everything under it
    fn remove_dir_all(&self, path: &Path) -> FsResult<()>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fs_error_display_includes_path() {
        let err = FsError::NotFound(PathBuf::from("missing.txt"));
        assert!(err.to_string().contains("missing.txt"));
    }

    #[test]
    fn fs_error_from_io_classifies_permission_denied() {
        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let fs_err = FsError::from_io(io_err, Path::new("locked.log"));
        assert!(matches!(fs_err, FsError::PermissionDenied(_)));
    }

    #[test]
    fn fs_error_from_io_keeps_other_kinds_as_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::Interrupted, "interrupted");
        let fs_err = FsError::from_io(io_err, Path::new("busy.log"));
        assert!(matches!(fs_err, FsError::Io(_)));
    }
}
