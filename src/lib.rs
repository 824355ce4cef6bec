//! Sweep - post-refactor workspace cleanup tool
//!
//! Sweep removes the obsolete artifacts a refactor leaves behind (test
//! scripts, logs, generated data, bytecode caches) from a workspace,
//! then reports what was removed and what was deliberately kept.

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod manifest;

// Re-exports for convenience
pub use application::clean::{CleanOptions, CleanResult, CleanUseCase, SkipReason};
pub use config::{ColorMode, Config, ConfigWarning};
pub use domain::ports::{FileSystem, FsError, FsResult};
pub use error::{SweepError, SweepResult};
pub use infrastructure::LocalFs;
pub use manifest::{Artifact, ArtifactKind, Manifest};
