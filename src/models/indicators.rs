use serde::{Deserialize, Serialize};

use super::candle::Candle;

/// A candle with every indicator column populated.
///
/// Rows are only ever produced past the warm-up window, so no field carries a
/// placeholder. Values are still plain `f64` so callers can build rows by hand
/// (tests, replays); the signal engine treats non-finite values as missing.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EnrichedCandle {
    #[serde(flatten)]
    pub candle: Candle,
    pub ema_short: f64,
    pub ema_long: f64,
    pub macd_line: f64,
    pub macd_signal: f64,
    pub macd_histogram: f64,
    pub rsi: f64,
    pub atr: f64,
    pub obv: f64,
}

impl EnrichedCandle {
    pub fn timestamp(&self) -> i64 {
        self.candle.timestamp
    }

    pub fn close(&self) -> f64 {
        self.candle.close
    }

    /// ATR when it is usable as a risk unit.
    pub fn atr_value(&self) -> Option<f64> {
        (self.atr.is_finite() && self.atr > 0.0).then_some(self.atr)
    }
}
