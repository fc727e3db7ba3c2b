//! EMA (Exponential Moving Average) indicator

use crate::common::math;
use crate::models::Candle;

/// Index of the first defined EMA value for `period`.
pub fn ema_lookback(period: usize) -> usize {
    period.saturating_sub(1)
}

/// EMA of closes, `None` inside the warm-up window.
pub fn calculate_ema(candles: &[Candle], period: usize) -> Vec<Option<f64>> {
    let closes: Vec<f64> = candles.iter().map(|c| c.close).collect();
    mask_warmup(math::ema(&closes, period), ema_lookback(period))
}

/// Replace the first `lookback` values with `None`.
pub(crate) fn mask_warmup(values: Vec<f64>, lookback: usize) -> Vec<Option<f64>> {
    values
        .into_iter()
        .enumerate()
        .map(|(i, v)| (i >= lookback).then_some(v))
        .collect()
}
