//! Shared test environment for integration tests.
//!
//! Each test gets an isolated temporary directory used as both the working
//! directory and the fake home, so config lookups under `~/.testplate` never
//! leak into or out of the developer's real environment.

#![allow(dead_code)]

use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;
use testplate_cli::test_utils::init_test_logging;

/// Isolated environment for driving the `testplate` binary.
pub struct TestEnvironment {
    temp: TempDir,
}

impl TestEnvironment {
    /// Create a fresh environment.
    pub fn new() -> std::io::Result<Self> {
        init_test_logging(None);
        Ok(Self {
            temp: TempDir::new()?,
        })
    }

    /// The environment's root directory.
    pub fn path(&self) -> &Path {
        self.temp.path()
    }

    /// A `testplate` command rooted in this environment.
    pub fn testplate_command(&self) -> Command {
        let mut cmd = Command::cargo_bin("testplate").expect("binary builds");
        cmd.current_dir(self.temp.path());
        cmd.env("HOME", self.temp.path());
        cmd.env_remove("TESTPLATE_CONFIG");
        cmd.env_remove("RUST_LOG");
        cmd
    }

    /// Write a file under the environment root, creating parent directories.
    pub fn write_file(&self, relative: &str, content: &str) -> PathBuf {
        let path = self.temp.path().join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("create parent dirs");
        }
        fs::write(&path, content).expect("write file");
        path
    }

    /// Read a file under the environment root.
    pub fn read_file(&self, relative: &str) -> String {
        fs::read_to_string(self.temp.path().join(relative)).expect("read file")
    }
}

/// The embedded template text, for verbatim-output assertions.
pub const TEMPLATE_TEXT: &str =
    include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/templates/pytest-unit.template.py"));

/// A minimal single-section template used by custom-template tests.
pub const SINGLE_SECTION_TEMPLATE: &str = "import pytest\n\n\nclass TestOnly:\n    def test_works(self):\n        assert helper_under_test(1) == 1\n";
