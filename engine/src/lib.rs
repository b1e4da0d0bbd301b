//! # stockscope-engine - daily price series and technical indicators
//!
//! The numerical core of stockscope:
//! - A validated daily price series model (`PriceBar`, `PriceSeries`)
//! - Indicator computations aligned with the input (SMA, EMA, RSI, MACD)
//! - Descriptive price statistics for the summary view
//! - CSV import/export of bars and indicators
//!
//! ## Quick Start
//!
//! ```rust
//! use stockscope_engine::prelude::*;
//! use chrono::NaiveDate;
//!
//! let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
//! let bars: Vec<PriceBar> = [10.0, 11.0, 12.0, 11.0, 10.0]
//!     .iter()
//!     .enumerate()
//!     .map(|(i, &c)| PriceBar::on_date(start + chrono::Duration::days(i as i64), c, c, c, c, 100))
//!     .collect();
//! let series = PriceSeries::new(bars).unwrap();
//!
//! let sma3 = simple_moving_average(&series, 3).unwrap();
//! assert_eq!(sma3[2], Some(11.0));
//!
//! let indicators = IndicatorEngine::new().compute(&series).unwrap();
//! assert_eq!(indicators.len(), series.len());
//! ```

pub mod errors;
pub mod indicators;
pub mod models;
pub mod services;
pub mod summary;
pub mod utils;

pub mod prelude {
    //! Prelude module for convenient imports
    //!
    //! ```rust
    //! use stockscope_engine::prelude::*;
    //! ```

    pub use crate::errors::{DataError, IndicatorError};
    pub use crate::indicators::{
        exponential_moving_average, macd, relative_strength_index, simple_moving_average,
        IndicatorEngine, MacdParams, MacdSeries, MacdTrend, RsiZone,
    };
    pub use crate::models::{
        IndicatorPoint, IndicatorSeries, LookbackWindow, PriceBar, PriceSeries,
        DEFAULT_LOOKBACK_DAYS, MAX_LOOKBACK_DAYS,
    };
    pub use crate::summary::{LatestReading, PriceSummary};
}

pub use utils::{init_logger, Timer};
