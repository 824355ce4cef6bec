//! Common test utilities for sweep integration tests.
//!
//! Provides `TestEnv`: an isolated workspace in a temp directory plus
//! helpers to run the sweep binary against it.

use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tempfile::TempDir;

/// Result of running a sweep CLI command
#[derive(Debug)]
pub struct TestResult {
    pub success: bool,
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

impl TestResult {
    /// Combine stdout and stderr
    pub fn combined_output(&self) -> String {
        format!("{}\n{}", self.stdout, self.stderr)
    }
}

/// Isolated workspace for exercising the binary.
pub struct TestEnv {
    pub workspace: TempDir,
}

impl TestEnv {
    /// Create an empty workspace
    pub fn new() -> Self {
        Self {
            workspace: TempDir::new().expect("Failed to create workspace temp dir"),
        }
    }

    /// Create a workspace populated with every default cleanup target
    /// plus the retained application modules.
    pub fn with_default_artifacts() -> Self {
        let env = Self::new();
        env.write_file("test_refactor.py", "print('smoke test')\n");
        env.write_file("moduleo_app.log", "2025-07-01 INFO pipeline done\n");
        env.write_file("dashboard_data.csv", "affaire;devis;factures\n");
        env.create_dir("__pycache__");
        env.write_file("__pycache__/utils.cpython-311.pyc", "\u{0}\u{0}");

        env.write_file("app.py", "import streamlit as st\n");
        env.write_file("config.py", "API_BASE_URL = ''\n");
        env.write_file("utils.py", "def setup_logging(): ...\n");
        env.write_file("pipeline.py", "class Pipeline: ...\n");
        env
    }

    /// Get path relative to the workspace root
    pub fn path(&self, relative: &str) -> PathBuf {
        self.workspace.path().join(relative)
    }

    /// Write a file into the workspace
    pub fn write_file(&self, relative: &str, content: &str) {
        let full_path = self.path(relative);
        if let Some(parent) = full_path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create directories");
        }
        std::fs::write(&full_path, content).expect("Failed to write file");
    }

    /// Create a directory inside the workspace
    pub fn create_dir(&self, relative: &str) {
        std::fs::create_dir_all(self.path(relative)).expect("Failed to create directory");
    }

    /// Run sweep in the workspace
    pub fn run(&self, args: &[&str]) -> TestResult {
        self.run_from(self.workspace.path(), args)
    }

    /// Run sweep from a specific directory
    pub fn run_from(&self, cwd: &Path, args: &[&str]) -> TestResult {
        let output = Command::new(env!("CARGO_BIN_EXE_sweep"))
            .current_dir(cwd)
            .args(args)
            .env("SWEEP_NO_COLOR", "1")
            .output()
            .expect("Failed to execute sweep");

        output_to_result(output)
    }
}

impl Default for TestEnv {
    fn default() -> Self {
        Self::new()
    }
}

fn output_to_result(output: Output) -> TestResult {
    TestResult {
        success: output.status.success(),
        exit_code: output.status.code().unwrap_or(-1),
        stdout: String::from_utf8_lossy(&output.stdout).to_string(),
        stderr: String::from_utf8_lossy(&output.stderr).to_string(),
    }
}
