use chrono::{DateTime, NaiveDate, NaiveTime, Utc};

pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Parse a `YYYY-MM-DD` string to UTC midnight.
pub fn parse_date(date_str: &str) -> anyhow::Result<DateTime<Utc>> {
    let naive_date = NaiveDate::parse_from_str(date_str.trim(), DATE_FORMAT)?;
    Ok(naive_date.and_time(NaiveTime::MIN).and_utc())
}

pub fn format_date(date: DateTime<Utc>) -> String {
    date.format(DATE_FORMAT).to_string()
}

/// UTC midnight of the calendar day containing `millis` (Unix epoch ms).
///
/// Daily aggregates are often stamped at the exchange's local midnight, which
/// lands a few hours into the UTC day; truncating keeps one bar per date.
pub fn day_from_millis(millis: i64) -> Option<DateTime<Utc>> {
    DateTime::<Utc>::from_timestamp_millis(millis)
        .map(|ts| ts.date_naive().and_time(NaiveTime::MIN).and_utc())
}
