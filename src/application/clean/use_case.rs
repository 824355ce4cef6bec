//! Clean Use Case
//!
//! Walks the manifest in order and removes whatever is present. A missing
//! target is never an error; a failed removal is recorded and the walk
//! continues, so the caller can always render a complete summary.

use std::path::Path;

use crate::domain::ports::FileSystem;
use crate::manifest::{ArtifactKind, Manifest};

use super::options::CleanOptions;
use super::result::{CleanResult, SkipReason};

/// Clean use case - removes manifest targets from a workspace
pub struct CleanUseCase<FS>
where
    FS: FileSystem,
{
    fs: FS,
}

impl<FS> CleanUseCase<FS>
where
    FS: FileSystem,
{
    /// Create a new clean use case
    pub fn new(fs: FS) -> Self {
        Self { fs }
    }

    /// Execute the cleanup (preview mode - doesn't actually delete)
    ///
    /// Returns what would be removed, allowing the caller to confirm
    /// before the actual deletion.
    pub fn execute(&self, root: &Path, manifest: &Manifest) -> CleanResult {
        self.process(root, manifest, false)
    }

    /// Execute the cleanup with actual deletion
    ///
    /// This should be called after the caller confirmed the preview.
    pub fn execute_confirmed(
        &self,
        root: &Path,
        manifest: &Manifest,
        options: &CleanOptions,
    ) -> CleanResult {
        self.process(root, manifest, !options.dry_run)
    }

    fn process(&self, root: &Path, manifest: &Manifest, actually_delete: bool) -> CleanResult {
        let mut result = CleanResult::new();

        for artifact in &manifest.artifacts {
            let path = root.join(&artifact.path);

            if !self.fs.exists(&path) {
                result.add_skipped(path, SkipReason::Missing);
                continue;
            }

            // The on-disk type wins over the manifest's expectation, so a
            // target declared as a file is still removed correctly if
            // something recreated it as a directory.
            let kind = if self.fs.is_dir(&path) {
                ArtifactKind::Directory
            } else {
                ArtifactKind::File
            };

            if actually_delete {
                let removed = match kind {
                    ArtifactKind::Directory => self.fs.remove_dir_all(&path),
                    ArtifactKind::File => self.fs.remove_file(&path),
                };
                if let Err(e) = removed {
                    result.add_error(format!("failed to remove {}: {}", path.display(), e));
                    continue;
                }
            }

            result.add_removed(path, kind);
        }

        result
    }
}
