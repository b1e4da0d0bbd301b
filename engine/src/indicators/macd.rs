//! MACD (Moving Average Convergence Divergence).
//!
//! `macd = EMA(close, fast) - EMA(close, slow)`, `signal = EMA(macd, signal_span)`,
//! `histogram = macd - signal`. All three are defined from the first bar.

use serde::{Deserialize, Serialize};

use crate::errors::{IndicatorError, Result};
use crate::indicators::moving_average::ema_values;
use crate::models::{closes, validate_bars, PriceBar};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MacdParams {
    pub fast: usize,
    pub slow: usize,
    pub signal_span: usize,
}

impl Default for MacdParams {
    fn default() -> Self {
        Self {
            fast: 12,
            slow: 26,
            signal_span: 9,
        }
    }
}

impl MacdParams {
    pub fn new(fast: usize, slow: usize, signal_span: usize) -> Self {
        Self {
            fast,
            slow,
            signal_span,
        }
    }

    fn validate(&self) -> Result<()> {
        if self.fast == 0 || self.slow == 0 || self.signal_span == 0 {
            return Err(IndicatorError::invalid(format!(
                "MACD spans must be positive (fast={}, slow={}, signal={})",
                self.fast, self.slow, self.signal_span
            )));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct MacdSeries {
    pub macd: Vec<f64>,
    pub signal: Vec<f64>,
    pub histogram: Vec<f64>,
}

pub fn macd(bars: &[PriceBar], params: MacdParams) -> Result<MacdSeries> {
    validate_bars(bars)?;
    params.validate()?;

    let closes = closes(bars);
    let fast = ema_values(&closes, params.fast)?;
    let slow = ema_values(&closes, params.slow)?;

    let macd: Vec<f64> = fast.iter().zip(slow.iter()).map(|(f, s)| f - s).collect();
    let signal = ema_values(&macd, params.signal_span)?;
    let histogram = macd.iter().zip(signal.iter()).map(|(m, s)| m - s).collect();

    Ok(MacdSeries {
        macd,
        signal,
        histogram,
    })
}

/// Position of the MACD line relative to its signal line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MacdTrend {
    Bullish,
    Bearish,
    Flat,
}

impl MacdTrend {
    pub fn classify(macd: f64, signal: f64) -> Self {
        if macd > signal {
            MacdTrend::Bullish
        } else if macd < signal {
            MacdTrend::Bearish
        } else {
            MacdTrend::Flat
        }
    }
}
