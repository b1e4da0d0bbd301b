//! Descriptive statistics shown next to the chart: latest price, period
//! high/low, change over the window and the most recent indicator reading.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::errors::{IndicatorError, Result};
use crate::indicators::{MacdTrend, RsiZone};
use crate::models::{validate_bars, IndicatorSeries, PriceBar};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceSummary {
    pub first_date: NaiveDate,
    pub last_date: NaiveDate,
    pub bar_count: usize,
    pub latest_close: f64,
    pub period_high: f64,
    pub period_low: f64,
    /// First open to last close, in percent.
    pub change_percent: f64,
    pub average_volume: f64,
    pub latest: LatestReading,
}

/// Indicator values on the last bar.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LatestReading {
    pub sma20: Option<f64>,
    pub sma50: Option<f64>,
    pub rsi14: Option<f64>,
    pub rsi_zone: Option<RsiZone>,
    pub macd: Option<f64>,
    pub signal: Option<f64>,
    pub macd_trend: Option<MacdTrend>,
}

impl PriceSummary {
    pub fn from_series(bars: &[PriceBar], indicators: &IndicatorSeries) -> Result<Self> {
        validate_bars(bars)?;
        if indicators.len() != bars.len() {
            return Err(IndicatorError::invalid(format!(
                "indicator series has {} points for {} bars",
                indicators.len(),
                bars.len()
            )));
        }

        // validate_bars guarantees at least one bar
        let first = &bars[0];
        let last = &bars[bars.len() - 1];

        let period_high = bars.iter().map(|b| b.high).fold(f64::NEG_INFINITY, f64::max);
        let period_low = bars.iter().map(|b| b.low).fold(f64::INFINITY, f64::min);
        let change_percent = if first.open != 0.0 {
            (last.close - first.open) / first.open * 100.0
        } else {
            0.0
        };
        let average_volume =
            bars.iter().map(|b| b.volume as f64).sum::<f64>() / bars.len() as f64;

        let latest = indicators
            .latest()
            .map(|point| LatestReading {
                sma20: point.sma20,
                sma50: point.sma50,
                rsi14: point.rsi14,
                rsi_zone: point.rsi14.map(RsiZone::classify),
                macd: point.macd,
                signal: point.signal,
                macd_trend: match (point.macd, point.signal) {
                    (Some(m), Some(s)) => Some(MacdTrend::classify(m, s)),
                    _ => None,
                },
            })
            .unwrap_or_default();

        Ok(Self {
            first_date: first.date(),
            last_date: last.date(),
            bar_count: bars.len(),
            latest_close: last.close,
            period_high,
            period_low,
            change_percent,
            average_volume,
            latest,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::indicators::test_support::{bars_from_closes, wavy_closes};
    use crate::indicators::IndicatorEngine;

    #[test]
    fn summarises_price_window() {
        let bars = bars_from_closes(&[10.0, 12.0, 11.0, 15.0, 14.0]);
        let indicators = IndicatorEngine::new().compute(&bars).unwrap();
        let summary = PriceSummary::from_series(&bars, &indicators).unwrap();

        assert_eq!(summary.bar_count, 5);
        assert_eq!(summary.latest_close, 14.0);
        assert!((summary.period_high - 15.0 * 1.01).abs() < 1e-9);
        assert!((summary.period_low - 10.0 * 0.99).abs() < 1e-9);
        assert!((summary.change_percent - 40.0).abs() < 1e-9);
        assert_eq!(summary.first_date.to_string(), "2024-01-01");
        assert_eq!(summary.last_date.to_string(), "2024-01-05");
        assert!(summary.latest.sma20.is_none());
        assert!(summary.latest.rsi_zone.is_none());
        assert!(summary.latest.macd_trend.is_some());
    }

    #[test]
    fn latest_reading_labels_rsi() {
        let closes: Vec<f64> = (1..=60).map(|x| 50.0 + x as f64).collect();
        let bars = bars_from_closes(&closes);
        let indicators = IndicatorEngine::new().compute(&bars).unwrap();
        let summary = PriceSummary::from_series(&bars, &indicators).unwrap();
        assert_eq!(summary.latest.rsi_zone, Some(RsiZone::Overbought));
        assert_eq!(summary.latest.macd_trend, Some(MacdTrend::Bullish));
        assert!(summary.latest.sma50.is_some());
    }

    #[test]
    fn rejects_misaligned_indicators() {
        let bars = bars_from_closes(&wavy_closes(30));
        let indicators = IndicatorEngine::new().compute(&bars[..20]).unwrap();
        assert!(PriceSummary::from_series(&bars, &indicators).is_err());
    }

    #[test]
    fn rejects_empty_series() {
        assert!(PriceSummary::from_series(&[], &IndicatorSeries::default()).is_err());
    }
}
