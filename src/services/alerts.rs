//! Alert formatting and dispatch seams.

use std::fmt::Write as _;

use chrono::DateTime;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::models::{MarketSummary, Signal, TradeParams};

/// A new actionable signal ready for delivery.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Alert {
    pub sequence: u64,
    pub signal: Signal,
    pub trade: TradeParams,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<MarketSummary>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rule: Option<String>,
}

impl Alert {
    pub fn format_text(&self) -> String {
        let mut text = String::new();
        let _ = writeln!(text, "Trading Signal #{}: {}", self.sequence, self.signal);
        let _ = writeln!(text, "Entry Price: ${:.2}", self.trade.entry);
        let _ = writeln!(text, "Stop Loss: ${:.2}", self.trade.stop_loss);
        let _ = writeln!(text, "Take Profit: ${:.2}", self.trade.take_profit);
        let _ = writeln!(text, "Risk/Reward: {:.2}:1", self.trade.risk_reward_ratio());

        if let Some(summary) = &self.summary {
            let obv_bias = match self.signal {
                Signal::Long => "Bullish",
                Signal::Short => "Bearish",
                Signal::Hold => "Neutral",
            };
            let _ = writeln!(text, "RSI: {:.1}", summary.rsi);
            let _ = writeln!(text, "EMA short: ${:.2}", summary.ema_short);
            let _ = writeln!(text, "EMA long: ${:.2}", summary.ema_long);
            let _ = writeln!(text, "MACD: {:.4}", summary.macd);
            let _ = writeln!(text, "OBV: {obv_bias}");
            if let Some(at) = DateTime::from_timestamp(summary.timestamp, 0) {
                let _ = writeln!(text, "Candle time: {}", at.format("%Y-%m-%d %H:%M:%S UTC"));
            }
        }

        text
    }
}

pub trait AlertDispatcher {
    fn dispatch(&self, alert: &Alert) -> Result<(), Box<dyn std::error::Error>>;
}

/// Delivers alerts to the log.
pub struct LogAlertDispatcher;

impl AlertDispatcher for LogAlertDispatcher {
    fn dispatch(&self, alert: &Alert) -> Result<(), Box<dyn std::error::Error>> {
        info!(
            sequence = alert.sequence,
            signal = %alert.signal,
            entry = alert.trade.entry,
            stop_loss = alert.trade.stop_loss,
            take_profit = alert.trade.take_profit,
            "{}",
            alert.format_text()
        );
        Ok(())
    }
}
