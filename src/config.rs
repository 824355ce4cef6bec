//! Configuration module for Sweep
//!
//! Configuration hierarchy:
//! 1. CLI flags (highest priority)
//! 2. Environment variables (SWEEP_*)
//! 3. Project config (<dir>/sweep.toml)
//! 4. User config (~/.config/sweep/config.toml)
//! 5. Built-in defaults (lowest priority)

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::SweepResult;

/// Color output mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    /// Follow terminal capabilities (default)
    #[default]
    Auto,
    Always,
    Never,
}

/// Output rendering configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    #[serde(default)]
    pub color: ColorMode,

    #[serde(default = "default_unicode")]
    pub unicode: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            color: ColorMode::default(),
            unicode: default_unicode(),
        }
    }
}

fn default_unicode() -> bool {
    true
}

/// Artifact list overrides
///
/// `None` means "use the built-in list"; an empty list disables that
/// category entirely.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ArtifactsConfig {
    #[serde(default)]
    pub files: Option<Vec<String>>,

    #[serde(default)]
    pub dirs: Option<Vec<String>>,
}

/// Retained-files summary overrides
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct RetainConfig {
    #[serde(default)]
    pub files: Option<Vec<String>>,

    /// Command hint printed after cleanup
    #[serde(default)]
    pub run: Option<String>,
}

/// Root configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub artifacts: ArtifactsConfig,

    #[serde(default)]
    pub retain: RetainConfig,

    #[serde(default)]
    pub output: OutputConfig,
}

/// Non-fatal configuration warning surfaced to CLI users.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    pub key: String,
    pub file: PathBuf,
    pub line: Option<usize>,
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> SweepResult<Self> {
        let (config, _warnings) = Self::load_with_warnings(path)?;
        Ok(config)
    }

    /// Load configuration and collect non-fatal warnings (e.g. unknown keys).
    pub fn load_with_warnings(path: &Path) -> SweepResult<(Self, Vec<ConfigWarning>)> {
        let content = fs::read_to_string(path)?;

        let mut unknown_paths: Vec<String> = Vec::new();
        let deserializer = toml::de::Deserializer::new(&content);

        let config: Self = serde_ignored::deserialize(deserializer, |path| {
            unknown_paths.push(path.to_string());
        })
        .map_err(|e| crate::error::SweepError::InvalidConfig {
            file: path.to_path_buf(),
            message: e.to_string(),
        })?;

        let warnings = unknown_paths
            .into_iter()
            .map(|path_str| {
                let key = path_str
                    .split('.')
                    .next_back()
                    .unwrap_or(path_str.as_str())
                    .to_string();
                ConfigWarning {
                    line: find_line_number(&content, &key),
                    key,
                    file: path.to_path_buf(),
                }
            })
            .collect();

        Ok((config, warnings))
    }

    /// Load from project config, user config, or defaults
    pub fn load_or_default(dir: Option<&Path>) -> Self {
        Self::load_or_default_with_warnings(dir).0
    }

    /// Same as [`Config::load_or_default`], but keeps the unknown-key
    /// warnings from whichever file actually loaded.
    pub fn load_or_default_with_warnings(dir: Option<&Path>) -> (Self, Vec<ConfigWarning>) {
        // Project config first
        if let Some(root) = dir {
            let project_config = root.join("sweep.toml");
            if project_config.exists() {
                if let Ok((config, warnings)) = Self::load_with_warnings(&project_config) {
                    return (config.with_env_overrides(), warnings);
                }
            }
        }

        // Then user config
        if let Some(config_dir) = dirs::config_dir() {
            let user_config = config_dir.join("sweep/config.toml");
            if user_config.exists() {
                if let Ok((config, warnings)) = Self::load_with_warnings(&user_config) {
                    return (config.with_env_overrides(), warnings);
                }
            }
        }

        (Self::default().with_env_overrides(), Vec::new())
    }

    /// Apply SWEEP_* environment variable overrides
    pub fn with_env_overrides(mut self) -> Self {
        if std::env::var("SWEEP_NO_COLOR").is_ok() {
            self.output.color = ColorMode::Never;
        }
        self
    }
}

fn find_line_number(content: &str, key: &str) -> Option<usize> {
    content
        .lines()
        .position(|line| {
            let trimmed = line.trim_start();
            trimmed.starts_with(key)
                && trimmed[key.len()..]
                    .trim_start()
                    .starts_with(['=', ']'].as_ref())
        })
        .map(|idx| idx + 1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn default_config_uses_auto_color_and_unicode() {
        let config = Config::default();
        assert_eq!(config.output.color, ColorMode::Auto);
        assert!(config.output.unicode);
        assert!(config.artifacts.files.is_none());
        assert!(config.retain.files.is_none());
    }

    #[test]
    fn load_valid_config() {
        let dir = tempdir().unwrap();
        let config_path = dir.path().join("sweep.toml");
        fs::write(
            &config_path,
            r#"
[artifacts]
files = ["old.log"]
dirs = []

[retain]
files = ["main.py"]
run = "python main.py"

[output]
color = "never"
"#,
        )
        .unwrap();

        let config = Config::load(&config_path).unwrap();

        assert_eq!(config.artifacts.files, Some(vec!["old.log".to_string()]));
        assert_eq!(config.artifacts.dirs, Some(Vec::new()));
        assert_eq!(config.retain.run.as_deref(), Some("python main.py"));
        assert_eq!(config.output.color, ColorMode::Never);
    }

    #[test]
    fn load_missing_config_errors() {
        let result = Config::load(Path::new("/nonexistent/sweep.toml"));
        assert!(result.is_err());
    }

    #[test]
    fn load_invalid_toml_reports_file() {
        let dir = tempdir().unwrap();
        let config_path = dir.path().join("sweep.toml");
        fs::write(&config_path, "artifacts = not valid").unwrap();

        let err = Config::load(&config_path).unwrap_err();
        assert!(err.to_string().contains("sweep.toml"));
    }

    #[test]
    fn load_with_warnings_detects_unknown_keys() {
        let dir = tempdir().unwrap();
        let config_path = dir.path().join("sweep.toml");
        fs::write(
            &config_path,
            r#"
[artifacts]
files = []
colour = "typo"
"#,
        )
        .unwrap();

        let (_, warnings) = Config::load_with_warnings(&config_path).unwrap();

        assert_eq!(warnings.len(), 1);
        assert_eq!(warnings[0].key, "colour");
        assert_eq!(warnings[0].line, Some(4));
    }

    #[test]
    fn load_or_default_reads_project_config() {
        let dir = tempdir().unwrap();
        fs::write(
            dir.path().join("sweep.toml"),
            "[retain]\nrun = \"python app.py\"\n",
        )
        .unwrap();

        let config = Config::load_or_default(Some(dir.path()));
        assert_eq!(config.retain.run.as_deref(), Some("python app.py"));
    }

    #[test]
    fn load_or_default_returns_defaults_without_files() {
        let dir = tempdir().unwrap();
        let config = Config::load_or_default(Some(dir.path()));
        assert!(config.artifacts.files.is_none());
    }
}
