//! Shared testing utilities for zonedir CLI tests.

use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

#[allow(dead_code)]
pub const ONE_ZONE_CATALOG: &str =
    r#"{"acts":[{"name":"Act 1","zones":[{"code":"G1_1","name":"The Riverbank"}]}]}"#;

/// Testing harness providing an isolated environment for CLI exercises.
#[allow(dead_code)]
pub struct TestContext {
    root: TempDir,
    work_dir: PathBuf,
}

#[allow(dead_code)]
impl TestContext {
    /// Create a new isolated environment with an empty `layouts/` base.
    pub fn new() -> Self {
        let root = TempDir::new().expect("Failed to create temp directory for tests");
        let work_dir = root.path().join("work");
        fs::create_dir_all(work_dir.join("layouts")).expect("Failed to create layouts directory");

        Self { root, work_dir }
    }

    /// Directory used as the working directory for CLI invocations.
    pub fn work_dir(&self) -> &Path {
        &self.work_dir
    }

    /// Base directory the zone directories are created in.
    pub fn base(&self) -> PathBuf {
        self.work_dir.join("layouts")
    }

    /// Build a command for invoking the compiled `zonedir` binary in the work directory.
    pub fn cli(&self) -> Command {
        let mut cmd = Command::cargo_bin("zonedir").expect("Failed to locate zonedir binary");
        cmd.current_dir(self.work_dir());
        cmd
    }

    /// Write a file relative to the work directory.
    pub fn write(&self, relative: &str, content: &str) -> PathBuf {
        let path = self.work_dir.join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        fs::write(&path, content).expect("Failed to write test file");
        path
    }

    /// Write the single-zone catalog as `zones.json`.
    pub fn write_one_zone_catalog(&self) -> PathBuf {
        self.write("zones.json", ONE_ZONE_CATALOG)
    }

    /// Sorted directory names under the base.
    pub fn zone_dirs(&self) -> Vec<String> {
        let mut names: Vec<String> = fs::read_dir(self.base())
            .expect("Failed to read base directory")
            .map(|entry| entry.expect("bad dir entry").file_name().to_string_lossy().into_owned())
            .collect();
        names.sort();
        names
    }
}
