//! Isolated environment for running the giftbox binary.

use std::fs;
use std::path::PathBuf;
use std::process::Command;

use tempfile::TempDir;

/// Result of running a giftbox CLI command
#[derive(Debug)]
pub struct TestResult {
    pub success: bool,
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

impl TestResult {
    /// Parse stdout as a JSON document (for `--json` runs)
    pub fn json(&self) -> serde_json::Value {
        serde_json::from_str(&self.stdout)
            .unwrap_or_else(|e| panic!("stdout is not JSON ({e}):\n{}", self.stdout))
    }
}

/// Temp working directory with its own HOME and config dir, so no user
/// config or `GIFTBOX_*` variable leaks into a test.
pub struct TestEnv {
    pub root: TempDir,
    env: Vec<(String, String)>,
}

impl TestEnv {
    pub fn new() -> Self {
        Self {
            root: tempfile::tempdir().expect("create temp dir"),
            env: Vec::new(),
        }
    }

    /// Environment with `gift.json` already written
    pub fn with_gift(gift: &str) -> Self {
        let env = Self::new();
        env.write("gift.json", gift);
        env
    }

    pub fn path(&self, relative: &str) -> PathBuf {
        self.root.path().join(relative)
    }

    pub fn write(&self, relative: &str, content: &str) -> PathBuf {
        let path = self.path(relative);
        fs::write(&path, content).expect("write fixture");
        path
    }

    pub fn env(mut self, key: &str, value: &str) -> Self {
        self.env.push((key.to_string(), value.to_string()));
        self
    }

    /// Run giftbox from the temp directory
    pub fn run(&self, args: &[&str]) -> TestResult {
        let home = self.path("home");
        let mut cmd = Command::new(env!("CARGO_BIN_EXE_giftbox"));
        cmd.args(args)
            .current_dir(self.root.path())
            .env("HOME", &home)
            .env("XDG_CONFIG_HOME", home.join(".config"))
            .env("APPDATA", &home)
            .env_remove("RUST_LOG");

        for key in [
            "GIFTBOX_MAX_ITEM_COUNT",
            "GIFTBOX_MAX_SUGAR_WEIGHT",
            "GIFTBOX_CURRENCY",
            "GIFTBOX_DEFAULT_ORDER",
            "GIFTBOX_VERBOSITY",
        ] {
            cmd.env_remove(key);
        }
        for (key, value) in &self.env {
            cmd.env(key, value);
        }

        let output = cmd.output().expect("run giftbox");
        TestResult {
            success: output.status.success(),
            exit_code: output.status.code().unwrap_or(-1),
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        }
    }
}
