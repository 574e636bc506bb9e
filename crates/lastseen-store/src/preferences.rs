use crate::db::Database;
use anyhow::Result;
use lastseen_types::LastLoginSource;
use rusqlite::OptionalExtension;

/// App namespace the login flow writes its bookkeeping under.
pub const LOGIN_APP: &str = "login";
/// Preference key holding the epoch-seconds last-login value.
pub const LAST_LOGIN_KEY: &str = "lastLogin";

impl Database {
    /// Raw value of one (user, app, key) preference cell. `None` if the row
    /// is missing or stores NULL.
    pub fn get_preference(
        &self,
        user_id: &str,
        app_id: &str,
        config_key: &str,
    ) -> Result<Option<String>> {
        let value = self
            .conn
            .query_row(
                r#"
            SELECT configvalue
            FROM preferences
            WHERE userid = ?1 AND appid = ?2 AND configkey = ?3
            "#,
                [user_id, app_id, config_key],
                |row| row.get::<_, Option<String>>(0),
            )
            .optional()?;

        Ok(value.flatten())
    }

    /// Every (user, value) pair stored under an (app, key) cell.
    ///
    /// Ordered by rowid, which pins "the store's retrieval order" to
    /// insertion order; callers sort on top of this.
    pub fn list_preferences(
        &self,
        app_id: &str,
        config_key: &str,
    ) -> Result<Vec<(String, Option<String>)>> {
        let mut stmt = self.conn.prepare(
            r#"
            SELECT userid, configvalue
            FROM preferences
            WHERE appid = ?1 AND configkey = ?2
            ORDER BY rowid
            "#,
        )?;

        let rows = stmt
            .query_map([app_id, config_key], |row| {
                Ok((
                    row.get::<_, String>(0)?,
                    row.get::<_, Option<String>>(1)?,
                ))
            })?
            .collect::<Result<Vec<_>, _>>()?;

        Ok(rows)
    }
}

/// Coerce a stored preference value to epoch seconds. NULL, empty, and
/// non-numeric text all count as "no recorded login" rather than an error;
/// the store is external input and a malformed row must not kill a report.
fn parse_epoch(value: Option<String>) -> Option<i64> {
    value.as_deref().and_then(|v| v.trim().parse::<i64>().ok())
}

impl LastLoginSource for Database {
    fn last_login(&self, user_id: &str) -> Result<Option<i64>> {
        let value = self.get_preference(user_id, LOGIN_APP, LAST_LOGIN_KEY)?;
        Ok(parse_epoch(value))
    }

    fn all_last_logins(&self) -> Result<Vec<(String, Option<i64>)>> {
        let rows = self.list_preferences(LOGIN_APP, LAST_LOGIN_KEY)?;
        Ok(rows
            .into_iter()
            .map(|(user_id, value)| (user_id, parse_epoch(value)))
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seed(db: &Database, user_id: &str, value: Option<&str>) {
        db.conn
            .execute(
                "INSERT INTO preferences (userid, appid, configkey, configvalue)
                 VALUES (?1, 'login', 'lastLogin', ?2)",
                rusqlite::params![user_id, value],
            )
            .unwrap();
    }

    #[test]
    fn test_get_preference_missing_row() {
        let db = Database::open_in_memory().unwrap();
        assert_eq!(db.get_preference("ghost", LOGIN_APP, LAST_LOGIN_KEY).unwrap(), None);
    }

    #[test]
    fn test_get_preference_null_value() {
        let db = Database::open_in_memory().unwrap();
        seed(&db, "alice", None);
        assert_eq!(db.get_preference("alice", LOGIN_APP, LAST_LOGIN_KEY).unwrap(), None);
    }

    #[test]
    fn test_last_login_parses_epoch() {
        let db = Database::open_in_memory().unwrap();
        seed(&db, "alice", Some("1474453520"));
        assert_eq!(db.last_login("alice").unwrap(), Some(1474453520));
    }

    #[test]
    fn test_last_login_tolerates_garbage_value() {
        let db = Database::open_in_memory().unwrap();
        seed(&db, "alice", Some("not-a-number"));
        seed(&db, "bob", Some(""));
        assert_eq!(db.last_login("alice").unwrap(), None);
        assert_eq!(db.last_login("bob").unwrap(), None);
    }

    #[test]
    fn test_all_last_logins_keeps_insertion_order() {
        let db = Database::open_in_memory().unwrap();
        seed(&db, "user", None);
        seed(&db, "user1", Some("1474453520"));
        seed(&db, "user2", Some("1473067798"));

        let rows = db.all_last_logins().unwrap();
        assert_eq!(
            rows,
            vec![
                ("user".to_string(), None),
                ("user1".to_string(), Some(1474453520)),
                ("user2".to_string(), Some(1473067798)),
            ]
        );
    }

    #[test]
    fn test_other_preference_keys_ignored() {
        let db = Database::open_in_memory().unwrap();
        db.conn
            .execute(
                "INSERT INTO preferences (userid, appid, configkey, configvalue)
                 VALUES ('alice', 'files', 'quota', '100')",
                [],
            )
            .unwrap();

        assert!(db.all_last_logins().unwrap().is_empty());
    }
}
