use anyhow::Result;
use lastseen_types::{ResolvedUserRecord, format_utc_timestamp};
use serde::Serialize;

/// Wire shape of one report row. Field order is part of the output
/// contract: displayname, email, lastLogin, userid.
#[derive(Serialize)]
struct ReportRow<'a> {
    displayname: Option<&'a str>,
    email: Option<&'a str>,
    #[serde(rename = "lastLogin")]
    last_login: Option<String>,
    userid: &'a str,
}

impl<'a> From<&'a ResolvedUserRecord> for ReportRow<'a> {
    fn from(record: &'a ResolvedUserRecord) -> Self {
        Self {
            displayname: record.profile.as_ref().map(|p| p.display_name.as_str()),
            email: record.profile.as_ref().map(|p| p.email.as_str()),
            last_login: record.last_login.map(format_utc_timestamp),
            userid: &record.user_id,
        }
    }
}

/// Emit the whole report as one array on a single line, so consumers can
/// parse stdout line-wise.
pub fn print_json(records: &[ResolvedUserRecord]) -> Result<()> {
    let rows: Vec<ReportRow> = records.iter().map(ReportRow::from).collect();
    println!("{}", serde_json::to_string(&rows)?);
    Ok(())
}
