use anyhow::{Context, Result};
use rusqlite::Connection;
use std::path::Path;

/// Handle on the server's SQLite database. Everything the CLI does with it
/// is a read; `init_schema` only creates missing tables so a fresh data
/// directory yields an empty report instead of an error.
pub struct Database {
    pub(crate) conn: Connection,
}

impl Database {
    pub fn open(db_path: &Path) -> Result<Self> {
        let conn = Connection::open(db_path)
            .with_context(|| format!("Failed to open database: {}", db_path.display()))?;

        let db = Self { conn };
        db.init_schema()?;
        Ok(db)
    }

    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        let db = Self { conn };
        db.init_schema()?;
        Ok(db)
    }

    pub fn init_schema(&self) -> Result<()> {
        self.conn.execute_batch(
            r#"
            CREATE TABLE IF NOT EXISTS accounts (
                userid      TEXT PRIMARY KEY,
                displayname TEXT NOT NULL DEFAULT '',
                email       TEXT NOT NULL DEFAULT ''
            );

            CREATE TABLE IF NOT EXISTS preferences (
                userid      TEXT NOT NULL,
                appid       TEXT NOT NULL,
                configkey   TEXT NOT NULL,
                configvalue TEXT,
                PRIMARY KEY (userid, appid, configkey)
            );

            CREATE INDEX IF NOT EXISTS idx_preferences_key ON preferences(appid, configkey);
            "#,
        )?;

        Ok(())
    }
}
