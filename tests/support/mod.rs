//! Test support utilities for secretfile integration tests.
//!
//! Provides an isolated working directory and helpers to build configs and
//! run the binary against it.

#![allow(dead_code)]

pub mod commands;

#[allow(unused_imports)]
pub use assertions::*;
#[allow(unused_imports)]
pub use fixtures::*;

use std::path::PathBuf;

use tempfile::TempDir;

/// Test environment with an isolated temp directory for target files.
///
/// No process-global state is mutated; child processes get their
/// environment through `Command::env`, so tests can run in parallel.
pub struct Test {
    /// Temporary directory that targets are written into
    pub dir: TempDir,
}

impl Test {
    pub fn new() -> Self {
        let dir = TempDir::new().expect("failed to create temp dir");
        Self { dir }
    }

    /// Absolute path of `name` inside the test directory.
    pub fn target(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }

    /// Absolute path of `name` as a JSON-safe string.
    pub fn target_str(&self, name: &str) -> String {
        self.target(name).display().to_string()
    }

    /// Read a written target.
    pub fn read(&self, name: &str) -> String {
        std::fs::read_to_string(self.target(name))
            .unwrap_or_else(|e| panic!("failed to read {}: {}", name, e))
    }

    /// Number of files in the test directory.
    pub fn file_count(&self) -> usize {
        std::fs::read_dir(self.dir.path())
            .expect("failed to read temp dir")
            .count()
    }

    /// Build an array-form config entry pointing into the test directory.
    pub fn entry(&self, name: &str, file: &str, template: &str) -> serde_json::Value {
        serde_json::json!({
            "name": name,
            "target": self.target_str(file),
            "template": template,
        })
    }
}
