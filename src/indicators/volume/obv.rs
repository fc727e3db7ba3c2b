//! OBV (On-Balance Volume) indicator

use crate::models::Candle;

/// Running volume total signed by close-to-close direction, zero on the
/// first row. Defined on every row.
pub fn calculate_obv(candles: &[Candle]) -> Vec<f64> {
    let mut out = Vec::with_capacity(candles.len());
    let mut obv = 0.0;
    let mut prev_close: Option<f64> = None;

    for candle in candles {
        if let Some(pc) = prev_close {
            if candle.close > pc {
                obv += candle.base_volume;
            } else if candle.close < pc {
                obv -= candle.base_volume;
            }
        }
        out.push(obv);
        prev_close = Some(candle.close);
    }

    out
}
