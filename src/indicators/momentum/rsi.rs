//! RSI (Relative Strength Index) indicator

use crate::common::math;
use crate::indicators::trend::ema::mask_warmup;
use crate::models::Candle;

/// Index of the first defined RSI value for `period`.
pub fn rsi_lookback(period: usize) -> usize {
    period.saturating_sub(1)
}

/// Wilder RSI of closes.
///
/// RSI = 100 - (100 / (1 + RS)), RS = avg gain / avg loss, both averages
/// Wilder-smoothed. The first row has no prior close and counts as an
/// unchanged bar. A zero average loss gives 100.
pub fn calculate_rsi(candles: &[Candle], period: usize) -> Vec<Option<f64>> {
    let mut gains = Vec::with_capacity(candles.len());
    let mut losses = Vec::with_capacity(candles.len());

    let mut prev_close: Option<f64> = None;
    for candle in candles {
        let change = prev_close.map_or(0.0, |pc| candle.close - pc);
        gains.push(change.max(0.0));
        losses.push((-change).max(0.0));
        prev_close = Some(candle.close);
    }

    let avg_gain = math::wilder(&gains, period);
    let avg_loss = math::wilder(&losses, period);

    let rsi = avg_gain
        .iter()
        .zip(&avg_loss)
        .map(|(&gain, &loss)| rsi_from_averages(gain, loss))
        .collect();

    mask_warmup(rsi, rsi_lookback(period))
}

fn rsi_from_averages(avg_gain: f64, avg_loss: f64) -> f64 {
    if avg_loss == 0.0 {
        return 100.0;
    }
    let rs = avg_gain / avg_loss;
    (100.0 - 100.0 / (1.0 + rs)).clamp(0.0, 100.0)
}
