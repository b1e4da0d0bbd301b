//! CSV import of daily bars and export of bars joined with their indicators.
//!
//! Input format (header required):
//! ```text
//! date,open,high,low,close,volume
//! 2024-01-02,187.15,188.44,183.89,185.64,82488700
//! ```

use serde::{Deserialize, Serialize};
use std::{
    fs::File,
    io::{Read, Write},
    path::Path,
};
use tracing::{debug, warn};

use crate::{
    errors::{DataError, IndicatorError},
    models::{IndicatorSeries, PriceBar, PriceSeries},
    utils::{format_date, parse_date},
};

#[derive(Debug, Deserialize)]
struct RawPriceRow {
    date: String,
    open: f64,
    high: f64,
    low: f64,
    close: f64,
    volume: u64,
}

#[derive(Debug, Serialize)]
struct IndicatorRow {
    date: String,
    open: f64,
    high: f64,
    low: f64,
    close: f64,
    volume: u64,
    sma20: Option<f64>,
    sma50: Option<f64>,
    rsi14: Option<f64>,
    macd: Option<f64>,
    signal: Option<f64>,
    histogram: Option<f64>,
}

/// Parse bars from CSV and validate the series ordering.
pub fn read_price_series<R: Read>(reader: R) -> Result<PriceSeries, DataError> {
    let mut reader = csv::ReaderBuilder::new().trim(csv::Trim::All).from_reader(reader);
    let mut bars = Vec::new();

    for (index, result) in reader.deserialize().enumerate() {
        let raw: RawPriceRow = result?;
        // header is line 1
        let row = index + 2;
        let timestamp = parse_date(&raw.date).map_err(|_| DataError::InvalidDate {
            value: raw.date.clone(),
            row,
        })?;

        let bar = PriceBar::new(timestamp, raw.open, raw.high, raw.low, raw.close, raw.volume);
        if !bar.is_consistent() {
            warn!(row, date = %raw.date, "Inconsistent OHLC values in CSV row");
        }
        bars.push(bar);
    }

    debug!(rows = bars.len(), "Parsed price CSV");
    Ok(PriceSeries::new(bars)?)
}

pub fn read_price_file(path: impl AsRef<Path>) -> Result<PriceSeries, DataError> {
    let file = File::open(path.as_ref())?;
    read_price_series(file)
}

/// One row per bar: OHLCV followed by every indicator column.
/// Undefined indicator values are written as empty cells.
pub fn write_indicator_csv<W: Write>(
    writer: W,
    bars: &[PriceBar],
    indicators: &IndicatorSeries,
) -> Result<(), DataError> {
    if bars.len() != indicators.len() {
        return Err(IndicatorError::invalid(format!(
            "cannot export {} bars with {} indicator points",
            bars.len(),
            indicators.len()
        ))
        .into());
    }

    let mut writer = csv::Writer::from_writer(writer);
    for (bar, point) in bars.iter().zip(indicators.iter()) {
        writer.serialize(IndicatorRow {
            date: format_date(bar.timestamp),
            open: bar.open,
            high: bar.high,
            low: bar.low,
            close: bar.close,
            volume: bar.volume,
            sma20: point.sma20,
            sma50: point.sma50,
            rsi14: point.rsi14,
            macd: point.macd,
            signal: point.signal,
            histogram: point.histogram,
        })?;
    }
    writer.flush()?;
    Ok(())
}

pub fn write_indicator_file(
    path: impl AsRef<Path>,
    bars: &[PriceBar],
    indicators: &IndicatorSeries,
) -> Result<(), DataError> {
    let file = File::create(path.as_ref())?;
    write_indicator_csv(file, bars, indicators)
}
