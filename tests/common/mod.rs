#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

/// Creates an `assert_cmd` Command for the insights-dash binary.
#[macro_export]
macro_rules! insights_dash {
    () => {
        assert_cmd::Command::new(assert_cmd::cargo::cargo_bin!("insights-dash"))
    };
}

/// Port nothing listens on, for commands that must fail to reach the API.
pub const UNREACHABLE_API: &str = "http://127.0.0.1:9/api";

/// Temporary working directory for integration tests.
pub struct TestFixture {
    pub dir: TempDir,
}

impl TestFixture {
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("Failed to create temp directory"),
        }
    }

    /// Creates a file with the given content in the temp directory.
    pub fn create_file(&self, relative_path: &str, content: &str) -> PathBuf {
        let path = self.dir.path().join(relative_path);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directories");
        }
        fs::write(&path, content).expect("Failed to write file");
        path
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn read(&self, relative_path: &str) -> String {
        fs::read_to_string(self.dir.path().join(relative_path)).expect("Failed to read file")
    }

    /// Writes a local `.insights-dash.toml`.
    pub fn create_config(&self, content: &str) -> PathBuf {
        self.create_file(".insights-dash.toml", content)
    }

    /// Config pointing the API at a closed port with a short timeout.
    pub fn create_unreachable_config(&self) -> PathBuf {
        self.create_file(
            "unreachable.toml",
            &format!("[api]\nbase_url = \"{UNREACHABLE_API}\"\ntimeout_secs = 2\n"),
        )
    }
}
