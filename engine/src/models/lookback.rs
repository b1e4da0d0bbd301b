use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::errors::{IndicatorError, Result};

pub const DEFAULT_LOOKBACK_DAYS: u32 = 365;

/// Longest accepted lookback, about a century of calendar days.
pub const MAX_LOOKBACK_DAYS: u32 = 36_500;

/// Inclusive calendar-date range `[start, end]` for one price request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LookbackWindow {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl LookbackWindow {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        if start <= end {
            Self { start, end }
        } else {
            Self { start: end, end: start }
        }
    }

    /// The `days` calendar days ending on `end`.
    ///
    /// `days` must lie in `1..=MAX_LOOKBACK_DAYS`.
    pub fn trailing(end: NaiveDate, days: u32) -> Result<Self> {
        check_days(days)?;
        let start = end
            .checked_sub_signed(Duration::days(i64::from(days)))
            .ok_or_else(|| {
                IndicatorError::invalid(format!("lookback of {days} days before {end} is out of range"))
            })?;
        Ok(Self { start, end })
    }

    pub fn days(&self) -> i64 {
        (self.end - self.start).num_days()
    }

    pub fn describe(&self) -> String {
        format!("{} to {}", self.start.format("%Y-%m-%d"), self.end.format("%Y-%m-%d"))
    }
}

/// Reject a lookback length outside `1..=MAX_LOOKBACK_DAYS`.
pub fn check_days(days: u32) -> Result<()> {
    if days == 0 || days > MAX_LOOKBACK_DAYS {
        return Err(IndicatorError::invalid(format!(
            "lookback days must be between 1 and {MAX_LOOKBACK_DAYS}, got {days}"
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trailing_window_spans_requested_days() {
        let end = NaiveDate::from_ymd_opt(2024, 6, 30).unwrap();
        let window = LookbackWindow::trailing(end, DEFAULT_LOOKBACK_DAYS).unwrap();
        assert_eq!(window.start, NaiveDate::from_ymd_opt(2023, 7, 1).unwrap());
        assert_eq!(window.end, end);
        assert_eq!(window.days(), 365);
    }

    #[test]
    fn trailing_rejects_zero_and_oversized_lengths() {
        let end = NaiveDate::from_ymd_opt(2024, 6, 30).unwrap();
        assert!(LookbackWindow::trailing(end, 0).is_err());
        assert!(LookbackWindow::trailing(end, MAX_LOOKBACK_DAYS + 1).is_err());
        assert!(LookbackWindow::trailing(end, 200_000_000).is_err());
        assert!(LookbackWindow::trailing(end, u32::MAX).is_err());
        assert_eq!(
            LookbackWindow::trailing(end, MAX_LOOKBACK_DAYS).unwrap().days(),
            i64::from(MAX_LOOKBACK_DAYS)
        );
    }

    #[test]
    fn trailing_near_the_calendar_floor_is_an_error() {
        let end = NaiveDate::MIN + Duration::days(10);
        let err = LookbackWindow::trailing(end, 11).unwrap_err();
        assert!(err.to_string().contains("out of range"));
        assert_eq!(LookbackWindow::trailing(end, 10).unwrap().start, NaiveDate::MIN);
    }

    #[test]
    fn new_swaps_inverted_bounds() {
        let a = NaiveDate::from_ymd_opt(2024, 1, 10).unwrap();
        let b = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        let window = LookbackWindow::new(a, b);
        assert_eq!(window.start, b);
        assert_eq!(window.describe(), "2024-01-01 to 2024-01-10");
    }
}
