//! Common test utilities for CLI integration tests.
//!
//! This module provides shared helpers for CLI testing, including:
//! - Test environment setup with temporary directories
//! - Command builders with an isolated data directory
//! - Fixtures that register clients, rooms and stays through the CLI

use assert_cmd::Command;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Environment variables the CLI reads; cleared so the host cannot leak in.
const HOTELBAO_ENV: &[&str] = &[
    "HOTELBAO_DATA_DIR",
    "HOTELBAO_BUSY_TIMEOUT",
    "HOTELBAO_DISABLE_AUTOINIT",
    "HOTELBAO_ROLE",
    "HOTELBAO_AS_CLIENT",
    "HOTELBAO_LOG_MODE",
    "HOTELBAO_MAXIMUM_LOCK_WAIT_SECONDS",
    "HOTELBAO_CURRENCY_SYMBOL",
    "HOTELBAO_DATE_FORMAT",
    "HOTELBAO_OUTPUT_FORMAT",
];

/// Test environment with isolated data directory.
pub struct TestEnv {
    /// Temporary directory (kept alive for the duration of the test)
    #[allow(dead_code)]
    temp_dir: TempDir,
    /// Path to the temporary directory
    pub temp_path: PathBuf,
    /// Path to the hotelbao data directory
    pub data_dir: PathBuf,
}

#[allow(dead_code)]
impl TestEnv {
    /// Create a new test environment.
    ///
    /// The data directory is not created; the CLI creates it on first use.
    pub fn new() -> Self {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
        let temp_path = temp_dir.path().to_path_buf();
        let data_dir = temp_path.join("hotelbao-data");

        Self {
            temp_dir,
            temp_path,
            data_dir,
        }
    }

    /// Get a command builder without `--data-dir`.
    ///
    /// Runs inside the temporary directory with every `HOTELBAO_*` variable
    /// removed.
    pub fn command_bare(&self) -> Command {
        let mut cmd = Command::cargo_bin("hotelbao").expect("Failed to find hotelbao binary");
        cmd.current_dir(&self.temp_path);
        for key in HOTELBAO_ENV {
            cmd.env_remove(key);
        }
        cmd
    }

    /// Get a command builder with the data directory pre-configured.
    pub fn command(&self) -> Command {
        let mut cmd = self.command_bare();
        cmd.arg("--data-dir").arg(&self.data_dir);
        cmd
    }

    /// Get a command acting as the given client.
    pub fn command_as_client(&self, client: i64) -> Command {
        let mut cmd = self.command();
        cmd.args(["--role", "client", "--as-client", &client.to_string()]);
        cmd
    }

    /// Get the temp path.
    pub fn path(&self) -> &Path {
        &self.temp_path
    }

    /// Path of the database file.
    pub fn database_path(&self) -> PathBuf {
        self.data_dir.join("hotelbao.db")
    }

    /// Initialize the data directory.
    pub fn init(&self) {
        self.command().arg("init").assert().success();
    }

    /// Run a command that prints a record id and return it.
    ///
    /// # Panics
    /// Panics if the command fails or stdout is not an id.
    pub fn run_for_id(&self, mut cmd: Command) -> i64 {
        let output = cmd.output().expect("Failed to run command");
        assert!(
            output.status.success(),
            "Command failed: {}",
            String::from_utf8_lossy(&output.stderr)
        );
        String::from_utf8(output.stdout)
            .expect("Invalid UTF-8 in output")
            .trim()
            .parse()
            .expect("Output is not a record id")
    }

    /// Register a client with address and city filled in.
    pub fn add_client(&self, name: &str, email: &str) -> i64 {
        let mut cmd = self.command();
        cmd.args([
            "client",
            "add",
            "--name",
            name,
            "--email",
            email,
            "--password-hash",
            "$2a$10$hash",
            "--address",
            "Rua A, 10",
            "--city",
            "Formiga",
        ]);
        self.run_for_id(cmd)
    }

    /// Add an accommodation.
    pub fn add_room(&self, description: &str, value: &str) -> i64 {
        let mut cmd = self.command();
        cmd.args([
            "accommodation",
            "add",
            "--value",
            value,
            "--description",
            description,
        ]);
        self.run_for_id(cmd)
    }

    /// Command that books `room` for `client`; not yet run.
    pub fn book_command(&self, client: i64, room: i64, check_in: &str, check_out: &str) -> Command {
        let mut cmd = self.command();
        cmd.args([
            "reservation",
            "create",
            "--client",
            &client.to_string(),
            "--accommodation",
            &room.to_string(),
            "--check-in",
            check_in,
            "--check-out",
            check_out,
        ]);
        cmd
    }

    /// Book a stay and return the reservation id.
    pub fn book(&self, client: i64, room: i64, check_in: &str, check_out: &str) -> i64 {
        self.run_for_id(self.book_command(client, room, check_in, check_out))
    }

    /// Write a project configuration file in the temp directory.
    pub fn write_project_config(&self, content: &str) {
        std::fs::write(self.temp_path.join("hotelbao.yaml"), content)
            .expect("Failed to write project config");
    }
}
