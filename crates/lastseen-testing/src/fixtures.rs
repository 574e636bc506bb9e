//! Raw-SQL seeding helpers.
//!
//! The CLI itself never writes user data, so tests insert rows the way the
//! server's login flow would: straight into the `preferences` and
//! `accounts` tables.

use anyhow::Result;
use rusqlite::{Connection, params};
use std::path::Path;

/// Insert a last-login preference row. `value` of `None` stores a NULL
/// configvalue: the row exists but no login was ever recorded.
pub fn seed_last_login(db_path: &Path, user_id: &str, value: Option<i64>) -> Result<()> {
    let conn = Connection::open(db_path)?;
    conn.execute(
        "INSERT INTO preferences (userid, appid, configkey, configvalue)
         VALUES (?1, 'login', 'lastLogin', ?2)",
        params![user_id, value.map(|v| v.to_string())],
    )?;
    Ok(())
}

/// Insert an account directory row.
pub fn seed_account(db_path: &Path, user_id: &str, display_name: &str, email: &str) -> Result<()> {
    let conn = Connection::open(db_path)?;
    conn.execute(
        "INSERT INTO accounts (userid, displayname, email) VALUES (?1, ?2, ?3)",
        params![user_id, display_name, email],
    )?;
    Ok(())
}
