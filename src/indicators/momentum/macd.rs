//! MACD (Moving Average Convergence Divergence) indicator

use crate::common::math;
use crate::models::Candle;

/// MACD columns aligned with the input candles.
#[derive(Debug, Clone, PartialEq)]
pub struct MacdSeries {
    pub macd: Vec<Option<f64>>,
    pub signal: Vec<Option<f64>>,
    pub histogram: Vec<Option<f64>>,
}

/// Index of the first defined MACD line value.
pub fn macd_line_lookback(slow_period: usize) -> usize {
    slow_period.saturating_sub(1)
}

/// Index of the first defined signal/histogram value.
pub fn macd_signal_lookback(slow_period: usize, signal_period: usize) -> usize {
    macd_line_lookback(slow_period) + signal_period.saturating_sub(1)
}

/// Calculate MACD
///
/// MACD = EMA(fast) - EMA(slow), defined once the slow EMA is.
/// Signal = EMA(signal) of MACD, seeded on the first defined MACD value.
/// Histogram = MACD - Signal
pub fn calculate_macd(
    candles: &[Candle],
    fast_period: usize,
    slow_period: usize,
    signal_period: usize,
) -> MacdSeries {
    let n = candles.len();
    let closes: Vec<f64> = candles.iter().map(|c| c.close).collect();

    let fast = math::ema(&closes, fast_period);
    let slow = math::ema(&closes, slow_period);

    let line_start = macd_line_lookback(slow_period).min(n);
    let signal_start = macd_signal_lookback(slow_period, signal_period);

    let line: Vec<f64> = fast.iter().zip(&slow).map(|(f, s)| f - s).collect();
    let signal_tail = math::ema(&line[line_start..], signal_period);

    let mut series = MacdSeries {
        macd: vec![None; n],
        signal: vec![None; n],
        histogram: vec![None; n],
    };

    for i in line_start..n {
        series.macd[i] = Some(line[i]);
        if i >= signal_start {
            let signal = signal_tail[i - line_start];
            series.signal[i] = Some(signal);
            series.histogram[i] = Some(line[i] - signal);
        }
    }

    series
}
