//! Candle series validation

use crate::indicators::error::IndicatorError;
use crate::models::Candle;

/// Check ordering and value constraints on the raw series.
///
/// Timestamps must be strictly increasing, OHLC finite and positive, volume
/// finite and non-negative.
pub fn validate_series(candles: &[Candle]) -> Result<(), IndicatorError> {
    if candles.is_empty() {
        return Err(IndicatorError::EmptySeries);
    }

    let mut prev_ts: Option<i64> = None;
    for (index, candle) in candles.iter().enumerate() {
        validate_candle(candle).map_err(|reason| IndicatorError::InvalidCandle { index, reason })?;

        if let Some(prev) = prev_ts {
            if candle.timestamp <= prev {
                return Err(IndicatorError::InvalidCandle {
                    index,
                    reason: format!(
                        "timestamp {} does not follow previous timestamp {}",
                        candle.timestamp, prev
                    ),
                });
            }
        }
        prev_ts = Some(candle.timestamp);
    }

    Ok(())
}

fn validate_candle(candle: &Candle) -> Result<(), String> {
    let prices = [
        ("open", candle.open),
        ("high", candle.high),
        ("low", candle.low),
        ("close", candle.close),
    ];
    for (name, value) in prices {
        if !value.is_finite() || value <= 0.0 {
            return Err(format!("{name} must be a finite positive price, got {value}"));
        }
    }
    if !candle.base_volume.is_finite() || candle.base_volume < 0.0 {
        return Err(format!(
            "base_volume must be finite and non-negative, got {}",
            candle.base_volume
        ));
    }
    Ok(())
}
