use crate::record::UserProfile;
use anyhow::Result;

/// Read-only view of the preference rows that carry last-login timestamps.
pub trait LastLoginSource {
    /// Timestamp for one user, `None` if nothing is recorded.
    fn last_login(&self, user_id: &str) -> Result<Option<i64>>;

    /// Every recorded (user, timestamp) pair, in the store's own retrieval
    /// order. Callers impose their own ordering on top of it.
    fn all_last_logins(&self) -> Result<Vec<(String, Option<i64>)>>;
}

/// Identity lookup against the account directory.
pub trait UserDirectory {
    /// `None` when the directory has no account for `user_id`.
    fn find_user(&self, user_id: &str) -> Result<Option<UserProfile>>;
}
