//! Shared testing utilities for vpack CLI tests.

use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Testing harness providing an isolated workspace for CLI exercises.
#[allow(dead_code)]
pub struct TestContext {
    root: TempDir,
    work_dir: PathBuf,
}

#[allow(dead_code)]
impl TestContext {
    /// Create a new isolated environment.
    pub fn new() -> Self {
        let root = TempDir::new().expect("Failed to create temp directory for tests");
        let work_dir = root.path().join("work");
        fs::create_dir_all(&work_dir).expect("Failed to create test work directory");
        Self { root, work_dir }
    }

    /// Path to the workspace directory used for CLI invocations.
    pub fn work_dir(&self) -> &Path {
        &self.work_dir
    }

    /// Build a command for invoking the compiled `vpack` binary within the workspace.
    pub fn cli(&self) -> Command {
        self.cli_in(self.work_dir())
    }

    /// Build a command for invoking the compiled `vpack` binary within a custom directory.
    pub fn cli_in<P: AsRef<Path>>(&self, dir: P) -> Command {
        let mut cmd = Command::cargo_bin("vpack").expect("Failed to locate vpack binary");
        cmd.current_dir(dir.as_ref()).env_remove("RUST_LOG");
        cmd
    }

    /// Create empty files under `dir` (relative to the workspace), creating `dir` as needed.
    pub fn touch_files(&self, dir: &str, names: &[&str]) -> PathBuf {
        let target = self.work_dir.join(dir);
        fs::create_dir_all(&target).expect("Failed to create fixture directory");
        for name in names {
            fs::write(target.join(name), "").expect("Failed to write fixture file");
        }
        target
    }

    /// Path to the default skin pack folder.
    pub fn skin_pack_dir(&self) -> PathBuf {
        self.work_dir.join("data").join("skinPacks")
    }

    /// Write `vpack.toml` at the workspace root.
    pub fn write_config(&self, content: &str) {
        fs::write(self.work_dir.join("vpack.toml"), content).expect("Failed to write vpack.toml");
    }
}
