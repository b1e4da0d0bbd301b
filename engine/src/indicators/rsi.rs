// =============================================================================
// Relative Strength Index (RSI), simple-average variant
// =============================================================================
//
// Step 1: delta_t = close_t - close_{t-1}  (undefined at t = 0)
// Step 2: gain_t = max(delta_t, 0), loss_t = max(-delta_t, 0)
// Step 3: avg_gain / avg_loss = simple moving average over `period` deltas
// Step 4: RS  = avg_gain / avg_loss   (RS = +inf when avg_loss == 0)
//         RSI = 100 - 100 / (1 + RS)
//
// Thresholds:  RSI >= 70 => OVERBOUGHT,  RSI <= 30 => OVERSOLD.
// =============================================================================

use serde::{Deserialize, Serialize};

use crate::errors::{IndicatorError, Result};
use crate::indicators::moving_average::sma_values;
use crate::models::{validate_bars, PriceBar};

pub const RSI_OVERBOUGHT: f64 = 70.0;
pub const RSI_OVERSOLD: f64 = 30.0;

/// Relative strength index aligned with `bars`.
///
/// Index `i` is `None` while fewer than `period` deltas exist (`i < period`).
pub fn relative_strength_index(bars: &[PriceBar], period: usize) -> Result<Vec<Option<f64>>> {
    validate_bars(bars)?;
    if period == 0 {
        return Err(IndicatorError::invalid("RSI period must be positive"));
    }

    // Deltas start at bar 1, so delta j belongs to bar j + 1.
    let (gains, losses): (Vec<f64>, Vec<f64>) = bars
        .windows(2)
        .map(|w| {
            let delta = w[1].close - w[0].close;
            (delta.max(0.0), (-delta).max(0.0))
        })
        .unzip();

    let avg_gains = sma_values(&gains, period)?;
    let avg_losses = sma_values(&losses, period)?;

    let mut result = Vec::with_capacity(bars.len());
    result.push(None);
    for (avg_gain, avg_loss) in avg_gains.into_iter().zip(avg_losses) {
        let rsi = match (avg_gain, avg_loss) {
            (Some(gain), Some(loss)) => Some(rsi_from_averages(gain, loss)),
            _ => None,
        };
        result.push(rsi);
    }
    Ok(result)
}

/// Convert average gain / average loss into an RSI value in [0, 100].
fn rsi_from_averages(avg_gain: f64, avg_loss: f64) -> f64 {
    if avg_loss == 0.0 {
        return 100.0;
    }
    let rs = avg_gain / avg_loss;
    100.0 - 100.0 / (1.0 + rs)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RsiZone {
    Overbought,
    Oversold,
    Neutral,
}

impl RsiZone {
    pub fn classify(rsi: f64) -> Self {
        if rsi >= RSI_OVERBOUGHT {
            RsiZone::Overbought
        } else if rsi <= RSI_OVERSOLD {
            RsiZone::Oversold
        } else {
            RsiZone::Neutral
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            RsiZone::Overbought => "OVERBOUGHT",
            RsiZone::Oversold => "OVERSOLD",
            RsiZone::Neutral => "NEUTRAL",
        }
    }
}
