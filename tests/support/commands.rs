//! Command helper methods for Test.

use super::{fixtures, Test};
use assert_cmd::Command;
use std::process::Output;

impl Test {
    /// Create a secretfile command with a clean environment.
    ///
    /// Returns a Command configured with:
    /// - SECRETFILE_CONFIG and SECRETFILE_STUB_SECRETS cleared
    /// - NO_COLOR set so output is plain text
    /// - Current directory set to the test directory
    pub fn cmd(&self) -> Command {
        #[allow(deprecated)]
        let mut cmd = Command::cargo_bin("secretfile").expect("failed to find secretfile binary");
        cmd.env_remove("SECRETFILE_CONFIG");
        cmd.env_remove("SECRETFILE_STUB_SECRETS");
        cmd.env_remove("SECRETFILE_LOG");
        cmd.env("NO_COLOR", "1");
        cmd.current_dir(self.dir.path());
        cmd
    }

    /// Run with `--config <base64(json)>`.
    pub fn run_json(&self, json: &str) -> Output {
        self.cmd()
            .args(["--config", &fixtures::encode(json)])
            .output()
            .expect("failed to run secretfile")
    }

    /// Run with `--check --config <base64(json)>`.
    pub fn check_json(&self, json: &str) -> Output {
        self.cmd()
            .args(["--check", "--config", &fixtures::encode(json)])
            .output()
            .expect("failed to run secretfile --check")
    }

    /// Run against stub secrets (requires the `test-store` feature).
    pub fn run_with_secrets(&self, json: &str, secrets: &str) -> Output {
        self.cmd()
            .env("SECRETFILE_STUB_SECRETS", secrets)
            .args(["--config", &fixtures::encode(json)])
            .output()
            .expect("failed to run secretfile")
    }
}
