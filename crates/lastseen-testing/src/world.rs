//! TestWorld pattern for integration test setup: an isolated data
//! directory with a ready schema and a preconfigured CLI command.

use assert_cmd::Command;
use lastseen_store::Database;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

use crate::fixtures;

pub struct TestWorld {
    _temp_dir: TempDir,
    data_dir: PathBuf,
}

impl Default for TestWorld {
    fn default() -> Self {
        Self::new()
    }
}

impl TestWorld {
    /// Create a new isolated test environment with an empty database.
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let data_dir = temp_dir.path().join(".lastseen");
        fs::create_dir_all(&data_dir).expect("Failed to create data dir");

        // Opening once creates the schema, so fixtures can insert rows.
        Database::open(&data_dir.join("lastseen.db")).expect("Failed to init database");

        Self {
            _temp_dir: temp_dir,
            data_dir,
        }
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    pub fn db_path(&self) -> PathBuf {
        self.data_dir.join("lastseen.db")
    }

    pub fn seed_last_login(&self, user_id: &str, value: Option<i64>) -> &Self {
        fixtures::seed_last_login(&self.db_path(), user_id, value)
            .expect("Failed to seed last login");
        self
    }

    pub fn seed_account(&self, user_id: &str, display_name: &str, email: &str) -> &Self {
        fixtures::seed_account(&self.db_path(), user_id, display_name, email)
            .expect("Failed to seed account");
        self
    }

    /// CLI command pointed at this world's data directory.
    pub fn command(&self) -> Command {
        let mut cmd = Command::cargo_bin("lastseen").expect("Failed to find lastseen binary");
        cmd.arg("--data-dir").arg(&self.data_dir);
        cmd
    }
}
