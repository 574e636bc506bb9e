/// One row of the last-login report before identity resolution: a user id
/// and the epoch-seconds timestamp of their last login. `None` means the
/// store has no recorded login for this user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LastSeenRecord {
    pub user_id: String,
    pub last_login: Option<i64>,
}

/// Identity fields the user directory stores for a known user.
///
/// Either field may be an empty string if the directory holds an empty
/// value; a user the directory does not know is represented by the absence
/// of the whole profile, never by emptied fields here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserProfile {
    pub display_name: String,
    pub email: String,
}

/// A `LastSeenRecord` merged with the directory lookup result.
///
/// `profile` is `None` exactly when the directory does not know the user,
/// so display name and email are always absent together or present
/// together.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedUserRecord {
    pub user_id: String,
    pub profile: Option<UserProfile>,
    pub last_login: Option<i64>,
}
