use thiserror::Error;

/// Errors produced by the indicator engine.
///
/// The engine never recovers from these internally: an invalid series is a
/// contract violation by the caller.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum IndicatorError {
    /// Empty series, zero window/period/span, or a broken ordering invariant.
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

impl IndicatorError {
    pub fn invalid(message: impl Into<String>) -> Self {
        IndicatorError::InvalidInput(message.into())
    }
}

/// Errors raised while loading or exporting price data.
#[derive(Debug, Error)]
pub enum DataError {
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid date '{value}' on row {row}")]
    InvalidDate { value: String, row: usize },

    #[error(transparent)]
    Indicator(#[from] IndicatorError),
}

pub type Result<T, E = IndicatorError> = std::result::Result<T, E>;
