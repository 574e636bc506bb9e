use crate::db::Database;
use anyhow::Result;
use lastseen_types::{UserDirectory, UserProfile};
use rusqlite::OptionalExtension;

/// One row of the account directory.
#[derive(Debug, Clone)]
pub struct AccountRecord {
    pub user_id: String,
    pub display_name: String,
    pub email: String,
}

impl Database {
    pub fn get_account(&self, user_id: &str) -> Result<Option<AccountRecord>> {
        let account = self
            .conn
            .query_row(
                r#"
            SELECT userid, displayname, email
            FROM accounts
            WHERE userid = ?1
            "#,
                [user_id],
                |row| {
                    Ok(AccountRecord {
                        user_id: row.get(0)?,
                        display_name: row.get(1)?,
                        email: row.get(2)?,
                    })
                },
            )
            .optional()?;

        Ok(account)
    }
}

impl UserDirectory for Database {
    fn find_user(&self, user_id: &str) -> Result<Option<UserProfile>> {
        Ok(self.get_account(user_id)?.map(|account| UserProfile {
            display_name: account.display_name,
            email: account.email,
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seed_account(db: &Database, user_id: &str, display_name: &str, email: &str) {
        db.conn
            .execute(
                "INSERT INTO accounts (userid, displayname, email) VALUES (?1, ?2, ?3)",
                rusqlite::params![user_id, display_name, email],
            )
            .unwrap();
    }

    #[test]
    fn test_find_user_known() {
        let db = Database::open_in_memory().unwrap();
        seed_account(&db, "user1", "User1 Name", "user1@e.mail");

        let profile = db.find_user("user1").unwrap().unwrap();
        assert_eq!(profile.display_name, "User1 Name");
        assert_eq!(profile.email, "user1@e.mail");
    }

    #[test]
    fn test_find_user_unknown() {
        let db = Database::open_in_memory().unwrap();
        assert!(db.find_user("ghost").unwrap().is_none());
    }

    #[test]
    fn test_find_user_empty_fields_pass_through() {
        let db = Database::open_in_memory().unwrap();
        seed_account(&db, "bare", "", "");

        let profile = db.find_user("bare").unwrap().unwrap();
        assert_eq!(profile.display_name, "");
        assert_eq!(profile.email, "");
    }
}
