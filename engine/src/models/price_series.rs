use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::ops::Deref;

use crate::errors::{IndicatorError, Result};
use crate::models::PriceBar;

/// Time-ordered daily bars: strictly increasing timestamps, no duplicates.
///
/// The only way to build one is [`PriceSeries::new`], so holding a
/// `PriceSeries` means the ordering invariant has been checked.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct PriceSeries {
    bars: Vec<PriceBar>,
}

impl PriceSeries {
    pub fn new(bars: Vec<PriceBar>) -> Result<Self> {
        check_ordering(&bars)?;
        Ok(Self { bars })
    }

    /// Sort by timestamp and drop repeated timestamps (first one wins), then
    /// build the series. For provider payloads that may arrive unordered.
    pub fn from_unordered(mut bars: Vec<PriceBar>) -> Self {
        bars.sort_by_key(|bar| bar.timestamp);
        bars.dedup_by_key(|bar| bar.timestamp);
        Self { bars }
    }

    pub fn bars(&self) -> &[PriceBar] {
        &self.bars
    }

    pub fn closes(&self) -> Vec<f64> {
        closes(&self.bars)
    }

    /// Bars whose date falls within `[start, end]`.
    pub fn between(&self, start: NaiveDate, end: NaiveDate) -> PriceSeries {
        let bars = self
            .bars
            .iter()
            .filter(|bar| {
                let date = bar.date();
                date >= start && date <= end
            })
            .cloned()
            .collect();
        PriceSeries { bars }
    }
}

impl Deref for PriceSeries {
    type Target = [PriceBar];

    fn deref(&self) -> &Self::Target {
        &self.bars
    }
}

impl AsRef<[PriceBar]> for PriceSeries {
    fn as_ref(&self) -> &[PriceBar] {
        &self.bars
    }
}

impl<'de> Deserialize<'de> for PriceSeries {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let bars = Vec::<PriceBar>::deserialize(deserializer)?;
        PriceSeries::new(bars).map_err(serde::de::Error::custom)
    }
}

/// Closing prices of `bars`, in order.
pub fn closes(bars: &[PriceBar]) -> Vec<f64> {
    bars.iter().map(|bar| bar.close).collect()
}

/// Timestamps must strictly increase; an equal neighbour is a duplicate.
pub fn check_ordering(bars: &[PriceBar]) -> Result<()> {
    for (index, pair) in bars.windows(2).enumerate() {
        let (prev, next) = (&pair[0], &pair[1]);
        if next.timestamp == prev.timestamp {
            return Err(IndicatorError::invalid(format!(
                "duplicate timestamp {} at index {}",
                next.timestamp.format("%Y-%m-%d"),
                index + 1
            )));
        }
        if next.timestamp < prev.timestamp {
            return Err(IndicatorError::invalid(format!(
                "timestamps not increasing at index {} ({} after {})",
                index + 1,
                next.timestamp.format("%Y-%m-%d"),
                prev.timestamp.format("%Y-%m-%d")
            )));
        }
    }
    Ok(())
}

/// Full input check used by every indicator: non-empty and strictly ordered.
pub fn validate_bars(bars: &[PriceBar]) -> Result<()> {
    if bars.is_empty() {
        return Err(IndicatorError::invalid("price series is empty"));
    }
    check_ordering(bars)
}
