use anyhow::{Result, bail};
use chrono::{DateTime, Duration, NaiveDate, NaiveDateTime, Utc};

/// Parse a `--before` expression into absolute epoch seconds (UTC).
///
/// Accepted forms, tried in order: raw epoch seconds, RFC 3339,
/// `YYYY-MM-DD HH:MM:SS`, `YYYY-MM-DD` (midnight UTC), `yesterday`, and
/// `N <seconds|minutes|hours|days|weeks|months|years> ago`.
pub fn parse_cutoff(expr: &str) -> Result<i64> {
    let expr = expr.trim();

    if let Ok(epoch) = expr.parse::<i64>() {
        return Ok(epoch);
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(expr) {
        return Ok(dt.timestamp());
    }

    if let Ok(dt) = NaiveDateTime::parse_from_str(expr, "%Y-%m-%d %H:%M:%S") {
        return Ok(dt.and_utc().timestamp());
    }

    if let Ok(date) = NaiveDate::parse_from_str(expr, "%Y-%m-%d")
        && let Some(dt) = date.and_hms_opt(0, 0, 0)
    {
        // Midnight at the start of the given day.
        return Ok(dt.and_utc().timestamp());
    }

    if let Some(cutoff) = parse_relative(expr) {
        return Ok(cutoff);
    }

    bail!("unrecognized date expression: '{}'", expr)
}

/// Relative forms anchored at the current time.
fn parse_relative(expr: &str) -> Option<i64> {
    let now = Utc::now();

    if expr.eq_ignore_ascii_case("yesterday") {
        return Some((now - Duration::days(1)).timestamp());
    }

    let tokens: Vec<&str> = expr.split_whitespace().collect();
    let [count, unit, tail] = tokens.as_slice() else {
        return None;
    };
    if !tail.eq_ignore_ascii_case("ago") {
        return None;
    }

    let count: i64 = count.parse().ok()?;
    // Checked constructors: an absurd count yields an error, not a panic.
    let delta = match unit.to_ascii_lowercase().trim_end_matches('s') {
        "second" => Duration::try_seconds(count),
        "minute" => Duration::try_minutes(count),
        "hour" => Duration::try_hours(count),
        "day" => Duration::try_days(count),
        "week" => Duration::try_weeks(count),
        "month" => Duration::try_days(30i64.checked_mul(count)?),
        "year" => Duration::try_days(365i64.checked_mul(count)?),
        _ => None,
    }?;

    Some(now.checked_sub_signed(delta)?.timestamp())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_epoch_passthrough() {
        assert_eq!(parse_cutoff("1474453520").unwrap(), 1474453520);
    }

    #[test]
    fn test_rfc3339() {
        assert_eq!(parse_cutoff("2016-09-21T10:25:20Z").unwrap(), 1474453520);
    }

    #[test]
    fn test_date_with_time() {
        assert_eq!(parse_cutoff("2016-09-21 10:25:20").unwrap(), 1474453520);
    }

    #[test]
    fn test_bare_date_is_midnight_utc() {
        assert_eq!(parse_cutoff("2016-09-21").unwrap(), 1474416000);
    }

    #[test]
    fn test_relative_days_ago() {
        let expected = (Utc::now() - Duration::days(2)).timestamp();
        let parsed = parse_cutoff("2 days ago").unwrap();
        assert!((parsed - expected).abs() <= 2);
    }

    #[test]
    fn test_relative_singular_unit() {
        let expected = (Utc::now() - Duration::hours(1)).timestamp();
        let parsed = parse_cutoff("1 hour ago").unwrap();
        assert!((parsed - expected).abs() <= 2);
    }

    #[test]
    fn test_yesterday() {
        let expected = (Utc::now() - Duration::days(1)).timestamp();
        let parsed = parse_cutoff("yesterday").unwrap();
        assert!((parsed - expected).abs() <= 2);
    }

    #[test]
    fn test_garbage_is_rejected() {
        assert!(parse_cutoff("soonish").is_err());
        assert!(parse_cutoff("five days ago").is_err());
        assert!(parse_cutoff("2 fortnights ago").is_err());
    }
}
