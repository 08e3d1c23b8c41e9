//! Isolated test environment for running the green-habits binary.

use std::path::{Path, PathBuf};
use std::process::Command;

use tempfile::TempDir;

/// Result of running a green-habits CLI command
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

/// Temp working directory plus temp HOME, so neither the data file nor the
/// user config of the machine running the tests leaks in.
pub struct TestEnv {
    pub work_dir: TempDir,
    pub home_dir: TempDir,
    bin: PathBuf,
}

impl TestEnv {
    pub fn new() -> Self {
        Self {
            work_dir: tempfile::tempdir().unwrap(),
            home_dir: tempfile::tempdir().unwrap(),
            bin: PathBuf::from(env!("CARGO_BIN_EXE_green-habits")),
        }
    }

    /// Path relative to the working directory
    pub fn path(&self, relative: &str) -> PathBuf {
        self.work_dir.path().join(relative)
    }

    /// The default data file, `user_data.json` in the working directory
    pub fn data_file(&self) -> PathBuf {
        self.path("user_data.json")
    }

    pub fn write_file(&self, relative: &str, content: &str) -> PathBuf {
        let path = self.path(relative);
        std::fs::write(&path, content).unwrap();
        path
    }

    pub fn read_file(&self, relative: &str) -> String {
        std::fs::read_to_string(self.path(relative)).unwrap()
    }

    /// Read the default data file as a JSON object
    pub fn stored(&self) -> serde_json::Map<String, serde_json::Value> {
        let content = std::fs::read_to_string(self.data_file()).unwrap();
        match serde_json::from_str(&content).unwrap() {
            serde_json::Value::Object(map) => map,
            other => panic!("expected a JSON object, got {other}"),
        }
    }

    /// Run the binary with plain, uncolored output.
    pub fn run(&self, args: &[&str]) -> TestResult {
        self.run_with_env(args, &[])
    }

    pub fn run_with_env(&self, args: &[&str], env: &[(&str, &str)]) -> TestResult {
        let mut cmd = Command::new(&self.bin);
        cmd.args(args)
            .current_dir(self.work_dir.path())
            .env("HOME", self.home_dir.path())
            .env("XDG_CONFIG_HOME", self.home_dir.path().join(".config"))
            .env("NO_COLOR", "1")
            .env("LANG", "C")
            .env_remove("LC_ALL")
            .env_remove("GREEN_HABITS_DATA_FILE")
            .env_remove("GREEN_HABITS_COLOR")
            .env_remove("GREEN_HABITS_LOG");
        for (key, value) in env {
            cmd.env(key, value);
        }

        let output = cmd.output().unwrap();
        TestResult {
            success: output.status.success(),
            exit_code: output.status.code().unwrap_or(-1),
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        }
    }

    pub fn work_path(&self) -> &Path {
        self.work_dir.path()
    }
}
