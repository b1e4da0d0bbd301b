// =============================================================================
// Moving Averages (SMA / EMA)
// =============================================================================
//
// SMA_t = mean(close_{t-window+1} .. close_t), undefined until `window` closes
//         exist.
//
// EMA:  alpha = 2 / (span + 1)
//       EMA_0 = close_0
//       EMA_t = alpha * close_t + (1 - alpha) * EMA_{t-1}
//
// The EMA is seeded with the first close rather than an SMA, so it is defined
// from the very first bar. Early values carry warm-up bias.
// =============================================================================

use crate::errors::{IndicatorError, Result};
use crate::models::{closes, validate_bars, PriceBar};

/// Simple moving average of the closes over a trailing `window`.
///
/// Output is aligned with `bars`; the first `window - 1` entries are `None`.
pub fn simple_moving_average(bars: &[PriceBar], window: usize) -> Result<Vec<Option<f64>>> {
    validate_bars(bars)?;
    sma_values(&closes(bars), window)
}

/// Exponential moving average of the closes with smoothing `span`.
pub fn exponential_moving_average(bars: &[PriceBar], span: usize) -> Result<Vec<f64>> {
    validate_bars(bars)?;
    ema_values(&closes(bars), span)
}

/// Trailing-window mean over an arbitrary value slice.
///
/// An empty slice yields an empty output; only `window == 0` is rejected.
pub fn sma_values(values: &[f64], window: usize) -> Result<Vec<Option<f64>>> {
    if window == 0 {
        return Err(IndicatorError::invalid("moving average window must be positive"));
    }

    let divisor = window as f64;
    let mut result = Vec::with_capacity(values.len());
    for index in 0..values.len() {
        if index + 1 < window {
            result.push(None);
            continue;
        }
        let sum: f64 = values[index + 1 - window..=index].iter().sum();
        result.push(Some(sum / divisor));
    }
    Ok(result)
}

/// Recursive exponential smoothing seeded with the first value.
pub fn ema_values(values: &[f64], span: usize) -> Result<Vec<f64>> {
    if span == 0 {
        return Err(IndicatorError::invalid("EMA span must be positive"));
    }

    let alpha = 2.0 / (span as f64 + 1.0);
    let mut result = Vec::with_capacity(values.len());
    let mut previous: Option<f64> = None;
    for &value in values {
        let ema = match previous {
            None => value,
            Some(prev) => alpha * value + (1.0 - alpha) * prev,
        };
        result.push(ema);
        previous = Some(ema);
    }
    Ok(result)
}

// =============================================================================
// Unit Tests
// =============================================================================
#[cfg(test)]
mod tests {
    use super::*;
    use crate::indicators::test_support::{bars_from_closes, wavy_closes};

    // ---- simple_moving_average -------------------------------------------

    #[test]
    fn sma_known_values() {
        let bars = bars_from_closes(&[10.0, 11.0, 12.0, 11.0, 10.0]);
        let sma = simple_moving_average(&bars, 3).unwrap();
        assert_eq!(sma.len(), 5);
        assert_eq!(sma[0], None);
        assert_eq!(sma[1], None);
        assert!((sma[2].unwrap() - 11.0).abs() < 1e-10);
        assert!((sma[3].unwrap() - 34.0 / 3.0).abs() < 1e-10);
        assert!((sma[3].unwrap() - 11.33).abs() < 0.01);
        assert!((sma[4].unwrap() - 11.0).abs() < 1e-10);
    }

    #[test]
    fn sma_matches_window_mean_everywhere() {
        let closes = wavy_closes(120);
        let bars = bars_from_closes(&closes);
        for window in [1, 5, 20, 50] {
            let sma = simple_moving_average(&bars, window).unwrap();
            for (i, value) in sma.iter().enumerate() {
                if i + 1 < window {
                    assert!(value.is_none(), "window {window} index {i} should be undefined");
                } else {
                    let slice = &closes[i + 1 - window..=i];
                    let expected = slice.iter().sum::<f64>() / window as f64;
                    assert!((value.unwrap() - expected).abs() < 1e-9);
                }
            }
        }
    }

    #[test]
    fn sma_window_longer_than_series_is_all_undefined() {
        let bars = bars_from_closes(&[1.0, 2.0, 3.0]);
        let sma = simple_moving_average(&bars, 20).unwrap();
        assert_eq!(sma, vec![None, None, None]);
    }

    #[test]
    fn sma_rejects_zero_window() {
        let bars = bars_from_closes(&[1.0, 2.0, 3.0]);
        assert!(matches!(
            simple_moving_average(&bars, 0),
            Err(IndicatorError::InvalidInput(_))
        ));
    }

    #[test]
    fn sma_rejects_empty_series() {
        assert!(matches!(
            simple_moving_average(&[], 3),
            Err(IndicatorError::InvalidInput(_))
        ));
    }

    // ---- exponential_moving_average --------------------------------------

    #[test]
    fn ema_span_one_is_identity() {
        let closes = wavy_closes(40);
        let bars = bars_from_closes(&closes);
        let ema = exponential_moving_average(&bars, 1).unwrap();
        for (a, b) in ema.iter().zip(closes.iter()) {
            assert!((a - b).abs() < 1e-12);
        }
    }

    #[test]
    fn ema_seeds_with_first_close() {
        let closes: Vec<f64> = (1..=10).map(|x| x as f64).collect();
        let bars = bars_from_closes(&closes);
        let ema = exponential_moving_average(&bars, 5).unwrap();
        assert_eq!(ema.len(), closes.len());
        assert_eq!(ema[0], 1.0);

        let alpha = 2.0 / 6.0;
        let mut expected = closes[0];
        for (i, &close) in closes.iter().enumerate().skip(1) {
            expected = alpha * close + (1.0 - alpha) * expected;
            assert!((ema[i] - expected).abs() < 1e-10, "index {i}");
        }
    }

    #[test]
    fn ema_of_constant_series_is_constant() {
        let bars = bars_from_closes(&[42.0; 30]);
        let ema = exponential_moving_average(&bars, 12).unwrap();
        assert!(ema.iter().all(|v| (v - 42.0).abs() < 1e-12));
    }

    #[test]
    fn ema_rejects_zero_span_and_empty_series() {
        let bars = bars_from_closes(&[1.0, 2.0]);
        assert!(exponential_moving_average(&bars, 0).is_err());
        assert!(exponential_moving_average(&[], 12).is_err());
    }

    #[test]
    fn slice_helpers_accept_empty_input() {
        assert!(sma_values(&[], 3).unwrap().is_empty());
        assert!(ema_values(&[], 3).unwrap().is_empty());
    }
}
