use tracing::debug;

use crate::errors::Result;
use crate::indicators::{macd, relative_strength_index, simple_moving_average, MacdParams};
use crate::models::{validate_bars, IndicatorPoint, IndicatorSeries, PriceBar};
use crate::utils::Timer;

pub const SMA_SHORT_WINDOW: usize = 20;
pub const SMA_LONG_WINDOW: usize = 50;
pub const RSI_PERIOD: usize = 14;

/// Turns a price series into the aligned indicator series used for display.
///
/// Stateless; every call recomputes from scratch.
#[derive(Debug, Clone, Copy, Default)]
pub struct IndicatorEngine {
    macd: MacdParams,
}

impl IndicatorEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// SMA20, SMA50, RSI14 and MACD/signal for every bar.
    pub fn compute(&self, bars: &[PriceBar]) -> Result<IndicatorSeries> {
        validate_bars(bars)?;
        let timer = Timer::start("indicator computation");

        let sma20 = simple_moving_average(bars, SMA_SHORT_WINDOW)?;
        let sma50 = simple_moving_average(bars, SMA_LONG_WINDOW)?;
        let rsi14 = relative_strength_index(bars, RSI_PERIOD)?;
        let macd = macd(bars, self.macd)?;

        let points = bars
            .iter()
            .enumerate()
            .map(|(i, bar)| IndicatorPoint {
                timestamp: bar.timestamp,
                sma20: sma20[i],
                sma50: sma50[i],
                rsi14: rsi14[i],
                macd: Some(macd.macd[i]),
                signal: Some(macd.signal[i]),
                histogram: Some(macd.histogram[i]),
            })
            .collect();

        debug!(bars = bars.len(), elapsed_ms = timer.elapsed_ms(), "Computed indicators");
        Ok(IndicatorSeries::new(points))
    }
}
