use anyhow::Result;
use lastseen_types::{LastLoginSource, LastSeenRecord, SelectionCriteria};

/// Sort key for a possibly-absent timestamp. Absent maps to `i64::MIN` so
/// never-logged-in users sort before any real timestamp, and the comparator
/// itself stays uniform.
fn sort_key(last_login: Option<i64>) -> i64 {
    last_login.unwrap_or(i64::MIN)
}

/// Turn selection criteria into the ordered list of records to report.
///
/// Batch modes sort ascending by timestamp with a stable sort, so ties
/// (including several users with no recorded login) keep the source's
/// retrieval order. The limit is applied after filtering and sorting.
pub fn select_records(
    source: &dyn LastLoginSource,
    criteria: &SelectionCriteria,
) -> Result<Vec<LastSeenRecord>> {
    match criteria {
        SelectionCriteria::SingleUser { user_id } => {
            let last_login = source.last_login(user_id)?;
            Ok(vec![LastSeenRecord {
                user_id: user_id.clone(),
                last_login,
            }])
        }

        SelectionCriteria::LeastRecentlySeen { limit } => {
            let mut records = read_all(source)?;
            records.sort_by_key(|record| sort_key(record.last_login));
            records.truncate(*limit);
            Ok(records)
        }

        SelectionCriteria::SeenBefore { cutoff, limit } => {
            let mut records: Vec<_> = read_all(source)?
                .into_iter()
                .filter(|record| matches!(record.last_login, Some(ts) if ts < *cutoff))
                .collect();
            records.sort_by_key(|record| sort_key(record.last_login));
            records.truncate(*limit);
            Ok(records)
        }
    }
}

fn read_all(source: &dyn LastLoginSource) -> Result<Vec<LastSeenRecord>> {
    Ok(source
        .all_last_logins()?
        .into_iter()
        .map(|(user_id, last_login)| LastSeenRecord {
            user_id,
            last_login,
        })
        .collect())
}
