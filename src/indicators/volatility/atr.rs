//! ATR (Average True Range) indicator

use crate::common::math;
use crate::models::Candle;

/// Index of the first defined ATR value for `period`.
pub fn atr_lookback(period: usize) -> usize {
    period.saturating_sub(1)
}

/// Calculate ATR with Wilder's smoothing
///
/// The first value is the mean of the first `period` true ranges (the very
/// first true range is `high - low`), then
/// `atr[t] = (atr[t-1] * (period - 1) + tr[t]) / period`.
pub fn calculate_atr(candles: &[Candle], period: usize) -> Vec<Option<f64>> {
    let n = candles.len();
    let mut out = vec![None; n];
    if period == 0 || n < period {
        return out;
    }

    let mut tr_values = Vec::with_capacity(n);
    let mut prev_close: Option<f64> = None;
    for candle in candles {
        tr_values.push(math::true_range(candle.high, candle.low, prev_close));
        prev_close = Some(candle.close);
    }

    let seed_index = atr_lookback(period);
    let Some(mut atr) = math::mean(&tr_values[..period]) else {
        return out;
    };
    out[seed_index] = Some(atr);

    let p = period as f64;
    for i in period..n {
        atr = (atr * (p - 1.0) + tr_values[i]) / p;
        out[i] = Some(atr);
    }

    out
}
