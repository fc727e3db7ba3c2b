//! Numeric kernels shared by the indicator implementations.

/// Smoothing factor of an EMA over `period` samples.
pub fn ema_alpha(period: usize) -> f64 {
    2.0 / (period as f64 + 1.0)
}

/// One EMA step from the previous value.
pub fn ema_from_previous(value: f64, previous: f64, alpha: f64) -> f64 {
    value * alpha + previous * (1.0 - alpha)
}

/// Recursive EMA over the whole slice, seeded with the first value.
///
/// `ema[0] = values[0]`, `ema[t] = values[t] * a + ema[t-1] * (1 - a)`,
/// `a = 2 / (period + 1)`. Every position gets a number; callers mask the
/// warm-up window themselves.
pub fn ema(values: &[f64], period: usize) -> Vec<f64> {
    smoothed(values, ema_alpha(period))
}

/// Wilder smoothing (`a = 1 / period`), seeded with the first value.
pub fn wilder(values: &[f64], period: usize) -> Vec<f64> {
    smoothed(values, 1.0 / period as f64)
}

fn smoothed(values: &[f64], alpha: f64) -> Vec<f64> {
    let mut out = Vec::with_capacity(values.len());
    let mut previous: Option<f64> = None;
    for &value in values {
        let next = match previous {
            Some(prev) => ema_from_previous(value, prev, alpha),
            None => value,
        };
        out.push(next);
        previous = Some(next);
    }
    out
}

/// Simple mean of the slice; `None` when empty.
pub fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    Some(values.iter().sum::<f64>() / values.len() as f64)
}

/// True range against the previous close. Without one it is `high - low`.
pub fn true_range(high: f64, low: f64, prev_close: Option<f64>) -> f64 {
    let range = high - low;
    match prev_close {
        Some(pc) => range.max((high - pc).abs()).max((low - pc).abs()),
        None => range,
    }
}

/// Round to `decimals` places (currency precision at output boundaries).
pub fn round_to(value: f64, decimals: u32) -> f64 {
    let factor = 10f64.powi(decimals as i32);
    (value * factor).round() / factor
}
