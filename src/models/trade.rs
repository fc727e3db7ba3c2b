use serde::{Deserialize, Serialize};

use super::signal::Signal;

/// Entry, stop and target levels for an actionable signal.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TradeParams {
    pub entry: f64,
    pub stop_loss: f64,
    pub take_profit: f64,
}

impl TradeParams {
    /// Distance from entry to stop.
    pub fn risk(&self) -> f64 {
        (self.entry - self.stop_loss).abs()
    }

    /// Distance from entry to target.
    pub fn reward(&self) -> f64 {
        (self.take_profit - self.entry).abs()
    }

    pub fn risk_reward_ratio(&self) -> f64 {
        let risk = self.risk();
        if risk > 0.0 {
            self.reward() / risk
        } else {
            0.0
        }
    }

    /// Direction implied by the level ordering.
    pub fn direction(&self) -> Signal {
        if self.stop_loss < self.entry && self.entry < self.take_profit {
            Signal::Long
        } else if self.take_profit < self.entry && self.entry < self.stop_loss {
            Signal::Short
        } else {
            Signal::Hold
        }
    }
}

/// Either concrete trade levels or an explicit "no trade".
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TradeSuggestion {
    Trade(TradeParams),
    NoTrade,
}

impl TradeSuggestion {
    pub fn params(&self) -> Option<&TradeParams> {
        match self {
            TradeSuggestion::Trade(params) => Some(params),
            TradeSuggestion::NoTrade => None,
        }
    }

    pub fn into_option(self) -> Option<TradeParams> {
        match self {
            TradeSuggestion::Trade(params) => Some(params),
            TradeSuggestion::NoTrade => None,
        }
    }
}
