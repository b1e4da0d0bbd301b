// =============================================================================
// Technical Indicators Module
// =============================================================================
//
// Pure, side-effect-free indicator computations over a daily price series.
// Every output is aligned index-for-index with the input bars and depends only
// on bars at or before its index. Invalid input (empty series, zero window,
// unordered or duplicated timestamps) is rejected with `InvalidInput`.

pub mod engine;
pub mod macd;
pub mod moving_average;
pub mod rsi;

pub use engine::*;
pub use macd::*;
pub use moving_average::*;
pub use rsi::*;
