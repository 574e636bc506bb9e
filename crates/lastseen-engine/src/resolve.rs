use anyhow::Result;
use lastseen_types::{LastSeenRecord, ResolvedUserRecord, UserDirectory};

/// Attach directory identities to selected records, one lookup per record,
/// preserving the input order. A user the directory does not know keeps a
/// `None` profile and does not abort the batch; directory I/O failures do.
pub fn resolve_records(
    directory: &dyn UserDirectory,
    records: Vec<LastSeenRecord>,
) -> Result<Vec<ResolvedUserRecord>> {
    records
        .into_iter()
        .map(|record| {
            let profile = directory.find_user(&record.user_id)?;
            Ok(ResolvedUserRecord {
                user_id: record.user_id,
                profile,
                last_login: record.last_login,
            })
        })
        .collect()
}
