use thiserror::Error;

/// Failures that prevent the pipeline from producing any output.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum IndicatorError {
    #[error("candle series is empty")]
    EmptySeries,

    #[error("insufficient history: {actual} candles, at least {required} required")]
    InsufficientHistory {
        required: usize,
        actual: usize,
    },

    #[error("invalid indicator configuration: {0}")]
    InvalidConfiguration(String),

    #[error("invalid candle at index {index}: {reason}")]
    InvalidCandle {
        index: usize,
        reason: String,
    },
}
