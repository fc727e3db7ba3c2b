use serde::{Deserialize, Serialize};

/// Snapshot of the latest enriched rows for presentation and alerting.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MarketSummary {
    pub timestamp: i64,
    pub current_price: f64,
    pub price_change: f64,
    pub price_change_pct: f64,
    pub volume: f64,
    pub rsi: f64,
    pub macd: f64,
    pub macd_signal: f64,
    pub ema_short: f64,
    pub ema_long: f64,
    pub atr: f64,
    pub obv: f64,
}

impl MarketSummary {
    /// One-line market update: price, signed change, volume and RSI.
    pub fn format_update(&self, symbol: &str) -> String {
        format!(
            "{}: ${:.2} ({:+.2}%) | Volume: {:.0} | RSI: {:.1}",
            symbol, self.current_price, self.price_change_pct, self.volume, self.rsi
        )
    }
}
