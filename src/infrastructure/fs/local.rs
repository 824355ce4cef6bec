//! Local File System Implementation
//!
//! Implements the FileSystem port for local disk operations.

use std::path::Path;

use crate::domain::ports::file_system::{FileSystem, FsError, FsResult};

/// Local file system implementation
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalFs;

impl LocalFs {
    /// Create a new LocalFs instance
    pub fn new() -> Self {
        Self
    }
}

impl FileSystem for LocalFs {
    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn is_dir(&self, path: &Path) -> bool {
        path.is_dir()
    }

    fn remove_file(&self, path: &Path) -> FsResult<()> {
        std::fs::remove_file(path).map_err(|e| FsError::from_io(e, path))
    }

    fn remove_dir_all(&self, path: &Path) -> FsResult<()> {
        std::fs::remove_dir_all(path).map_err(|e| FsError::from_io(e, path))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn local_fs_exists() {
        let dir = tempdir().unwrap();
        let file = dir.path().join("exists.txt");
        let fs = LocalFs::new();

        assert!(!fs.exists(&file));

        std::fs::write(&file, "content").unwrap();
        assert!(fs.exists(&file));
    }

    #[test]
    fn local_fs_is_dir() {
        let dir = tempdir().unwrap();
        let file = dir.path().join("plain.txt");
        std::fs::write(&file, "content").unwrap();
        let fs = LocalFs::new();

        assert!(fs.is_dir(dir.path()));
        assert!(!fs.is_dir(&file));
    }

    #[test]
    fn local_fs_remove_file() {
        let dir = tempdir().unwrap();
        let file = dir.path().join("remove.txt");
        std::fs::write(&file, "content").unwrap();
        let fs = LocalFs::new();

        fs.remove_file(&file).unwrap();
        assert!(!file.exists());
    }

    #[test]
    fn local_fs_remove_file_missing_is_not_found() {
        let dir = tempdir().unwrap();
        let fs = LocalFs::new();

        let err = fs.remove_file(&dir.path().join("absent.txt")).unwrap_err();
        assert!(matches!(err, FsError::NotFound(_)));
    }

    #[test]
    fn local_fs_remove_dir_all_is_recursive() {
        let dir = tempdir().unwrap();
        let nested = dir.path().join("cache").join("deep");
        std::fs::create_dir_all(&nested).unwrap();
        std::fs::write(nested.join("entry.bin"), "x").unwrap();
        let fs = LocalFs::new();

        fs.remove_dir_all(&dir.path().join("cache")).unwrap();
        assert!(!dir.path().join("cache").exists());
    }
}
