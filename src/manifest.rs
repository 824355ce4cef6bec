//! Cleanup manifest
//!
//! The manifest describes what a cleanup run operates on: the artifacts to
//! remove, the files that are deliberately kept, and the command hint shown
//! after a run. The built-in defaults cover the dashboard workspace this
//! tool was written for; a `sweep.toml` can override any of the lists.

use std::path::PathBuf;

use crate::config::Config;

/// Artifacts removed when no config overrides them.
const DEFAULT_FILE_TARGETS: &[&str] =
    &["test_refactor.py", "moduleo_app.log", "dashboard_data.csv"];

/// Directories removed recursively when no config overrides them.
const DEFAULT_DIR_TARGETS: &[&str] = &["__pycache__"];

/// Files named in the summary as intentionally kept.
const DEFAULT_RETAINED: &[&str] = &["app.py", "config.py", "utils.py", "pipeline.py"];

/// Launch hint shown at the end of the summary.
const DEFAULT_RUN_HINT: &str = "streamlit run app.py";

/// How an artifact is removed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArtifactKind {
    /// Removed with a plain file delete
    File,
    /// Removed recursively, without confirmation
    Directory,
}

impl std::fmt::Display for ArtifactKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ArtifactKind::File => write!(f, "file"),
            ArtifactKind::Directory => write!(f, "directory"),
        }
    }
}

/// A single cleanup target, relative to the cleaned directory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artifact {
    pub path: PathBuf,
    pub kind: ArtifactKind,
}

impl Artifact {
    pub fn file(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            kind: ArtifactKind::File,
        }
    }

    pub fn directory(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            kind: ArtifactKind::Directory,
        }
    }
}

/// Everything a cleanup run needs to know about its workspace
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Manifest {
    /// Targets to remove, processed in order
    pub artifacts: Vec<Artifact>,
    /// Files listed in the summary as kept
    pub retained: Vec<String>,
    /// Command to launch the retained application
    pub run_hint: Option<String>,
}

impl Default for Manifest {
    fn default() -> Self {
        let mut artifacts: Vec<Artifact> =
            DEFAULT_FILE_TARGETS.iter().map(Artifact::file).collect();
        artifacts.extend(DEFAULT_DIR_TARGETS.iter().map(Artifact::directory));

        Self {
            artifacts,
            retained: DEFAULT_RETAINED.iter().map(|s| s.to_string()).collect(),
            run_hint: Some(DEFAULT_RUN_HINT.to_string()),
        }
    }
}

impl Manifest {
    /// Build a manifest from config, falling back to the built-in lists
    /// for every section the config does not set.
    pub fn from_config(config: &Config) -> Self {
        let defaults = Self::default();

        let artifacts = match (&config.artifacts.files, &config.artifacts.dirs) {
            (None, None) => defaults.artifacts,
            (files, dirs) => {
                let mut artifacts: Vec<Artifact> = files
                    .as_deref()
                    .map(|fs| fs.iter().map(Artifact::file).collect())
                    .unwrap_or_else(|| {
                        DEFAULT_FILE_TARGETS.iter().map(Artifact::file).collect()
                    });
                artifacts.extend(
                    dirs.as_deref()
                        .map(|ds| ds.iter().map(Artifact::directory).collect::<Vec<_>>())
                        .unwrap_or_else(|| {
                            DEFAULT_DIR_TARGETS
                                .iter()
                                .map(Artifact::directory)
                                .collect()
                        }),
                );
                artifacts
            }
        };

        Self {
            artifacts,
            retained: config.retain.files.clone().unwrap_or(defaults.retained),
            run_hint: config.retain.run.clone().or(defaults.run_hint),
        }
    }

    /// Check whether a path is one of the manifest's targets.
    pub fn is_target(&self, path: &std::path::Path) -> bool {
        self.artifacts.iter().any(|a| a.path == path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    #[test]
    fn default_manifest_lists_known_artifacts() {
        let manifest = Manifest::default();

        let paths: Vec<&Path> = manifest.artifacts.iter().map(|a| a.path.as_path()).collect();
        assert_eq!(
            paths,
            vec![
                Path::new("test_refactor.py"),
                Path::new("moduleo_app.log"),
                Path::new("dashboard_data.csv"),
                Path::new("__pycache__"),
            ]
        );
    }

    #[test]
    fn default_manifest_marks_pycache_as_directory() {
        let manifest = Manifest::default();
        let pycache = manifest
            .artifacts
            .iter()
            .find(|a| a.path == Path::new("__pycache__"))
            .unwrap();
        assert_eq!(pycache.kind, ArtifactKind::Directory);
    }

    #[test]
    fn default_manifest_retains_application_modules() {
        let manifest = Manifest::default();
        assert!(manifest.retained.contains(&"app.py".to_string()));
        assert!(manifest.retained.contains(&"pipeline.py".to_string()));
        assert_eq!(manifest.run_hint.as_deref(), Some("streamlit run app.py"));
    }

    #[test]
    fn from_config_overrides_file_targets_only() {
        let mut config = Config::default();
        config.artifacts.files = Some(vec!["stale.log".to_string()]);

        let manifest = Manifest::from_config(&config);

        let paths: Vec<&Path> = manifest.artifacts.iter().map(|a| a.path.as_path()).collect();
        assert_eq!(paths, vec![Path::new("stale.log"), Path::new("__pycache__")]);
    }

    #[test]
    fn from_config_overrides_retained_and_run_hint() {
        let mut config = Config::default();
        config.retain.files = Some(vec!["main.py".to_string()]);
        config.retain.run = Some("python main.py".to_string());

        let manifest = Manifest::from_config(&config);

        assert_eq!(manifest.retained, vec!["main.py".to_string()]);
        assert_eq!(manifest.run_hint.as_deref(), Some("python main.py"));
    }

    #[test]
    fn is_target_matches_manifest_paths_only() {
        let manifest = Manifest::default();
        assert!(manifest.is_target(Path::new("__pycache__")));
        assert!(!manifest.is_target(Path::new("app.py")));
    }
}
