use lastseen_types::{ResolvedUserRecord, format_plain_timestamp};
use owo_colors::OwoColorize;

/// Identity columns of users the directory does not know.
const MISSING_FIELD: &str = "-";
const NEVER_LOGGED_IN: &str = "never logged in";

struct PlainRow {
    user_id: String,
    display_name: String,
    email: String,
    last_seen: Option<String>,
}

/// One aligned line per record:
/// `<userid>  <displayname>  <email>  <last seen>`.
pub fn print_plain(records: &[ResolvedUserRecord], enable_color: bool) {
    if records.is_empty() {
        println!("No users found");
        return;
    }

    let rows: Vec<PlainRow> = records
        .iter()
        .map(|record| PlainRow {
            user_id: record.user_id.clone(),
            display_name: record
                .profile
                .as_ref()
                .map(|p| p.display_name.clone())
                .unwrap_or_else(|| MISSING_FIELD.to_string()),
            email: record
                .profile
                .as_ref()
                .map(|p| p.email.clone())
                .unwrap_or_else(|| MISSING_FIELD.to_string()),
            last_seen: record.last_login.map(format_plain_timestamp),
        })
        .collect();

    let uid_width = column_width(rows.iter().map(|r| r.user_id.as_str()));
    let name_width = column_width(rows.iter().map(|r| r.display_name.as_str()));
    let email_width = column_width(rows.iter().map(|r| r.email.as_str()));

    for row in &rows {
        let last_seen = match &row.last_seen {
            Some(ts) => ts.clone(),
            None if enable_color => format!("{}", NEVER_LOGGED_IN.bright_black()),
            None => NEVER_LOGGED_IN.to_string(),
        };

        println!(
            "{:<uid_width$}  {:<name_width$}  {:<email_width$}  {}",
            row.user_id, row.display_name, row.email, last_seen
        );
    }
}

fn column_width<'a>(values: impl Iterator<Item = &'a str>) -> usize {
    values.map(|v| v.chars().count()).max().unwrap_or(0)
}
