use chrono::{SecondsFormat, TimeZone, Utc};

/// Render epoch seconds in the ISO-8601 UTC form used by the JSON report,
/// e.g. `2016-09-21T10:25:20Z`.
pub fn format_utc_timestamp(epoch: i64) -> String {
    match Utc.timestamp_opt(epoch, 0).single() {
        Some(dt) => dt.to_rfc3339_opts(SecondsFormat::Secs, true),
        None => epoch.to_string(),
    }
}

/// Render epoch seconds in the short day-first form used by the plain
/// report, e.g. `21.09.2016 10:25`. UTC, so the same row renders the same
/// everywhere.
pub fn format_plain_timestamp(epoch: i64) -> String {
    match Utc.timestamp_opt(epoch, 0).single() {
        Some(dt) => dt.format("%d.%m.%Y %H:%M").to_string(),
        None => epoch.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_utc_timestamp_format() {
        assert_eq!(format_utc_timestamp(1474453520), "2016-09-21T10:25:20Z");
        assert_eq!(format_utc_timestamp(1473067798), "2016-09-05T09:29:58Z");
    }

    #[test]
    fn test_plain_timestamp_format() {
        assert_eq!(format_plain_timestamp(1474453520), "21.09.2016 10:25");
        assert_eq!(format_plain_timestamp(1473067798), "05.09.2016 09:29");
    }

    #[test]
    fn test_epoch_zero() {
        assert_eq!(format_utc_timestamp(0), "1970-01-01T00:00:00Z");
        assert_eq!(format_plain_timestamp(0), "01.01.1970 00:00");
    }
}
