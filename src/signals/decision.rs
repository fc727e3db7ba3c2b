//! Stop-loss / take-profit derivation from ATR

use tracing::{debug, warn};

use crate::common::math::round_to;
use crate::config::RiskConfig;
use crate::models::{EnrichedCandle, Signal, TradeParams, TradeSuggestion};

/// Turns a signal and the latest row into entry, stop and target levels.
#[derive(Debug, Clone, Copy, Default)]
pub struct TradeParameterAdvisor {
    risk: RiskConfig,
}

impl TradeParameterAdvisor {
    pub fn new(risk: RiskConfig) -> Self {
        Self { risk }
    }

    /// Levels for LONG/SHORT, `NoTrade` for HOLD.
    ///
    /// Entry is the close. The stop sits `stop_atr_multiple` risk units away,
    /// the target `reward_risk_ratio` times the stop distance on the other
    /// side. The risk unit is ATR, or `fallback_risk_pct` of entry when ATR is
    /// unusable. Rounding happens only on the returned levels.
    pub fn suggest(&self, latest: &EnrichedCandle, signal: Signal) -> TradeSuggestion {
        if !signal.is_actionable() {
            return TradeSuggestion::NoTrade;
        }

        let entry = latest.close();
        let unit = match latest.atr_value() {
            Some(atr) => atr,
            None => {
                warn!(entry, "ATR unavailable, using fallback risk unit");
                entry * self.risk.fallback_risk_pct
            }
        };

        self.levels(entry, unit, signal)
    }

    /// Levels for an explicit entry and risk unit.
    pub fn levels(&self, entry: f64, unit: f64, signal: Signal) -> TradeSuggestion {
        let stop_distance = self.risk.stop_atr_multiple * unit;
        let (stop_loss, take_profit) = match signal {
            Signal::Long => {
                let stop_loss = entry - stop_distance;
                (stop_loss, entry + self.risk.reward_risk_ratio * (entry - stop_loss))
            }
            Signal::Short => {
                let stop_loss = entry + stop_distance;
                (stop_loss, entry - self.risk.reward_risk_ratio * (stop_loss - entry))
            }
            Signal::Hold => return TradeSuggestion::NoTrade,
        };

        let decimals = self.risk.price_decimals;
        let params = TradeParams {
            entry: round_to(entry, decimals),
            stop_loss: round_to(stop_loss, decimals),
            take_profit: round_to(take_profit, decimals),
        };

        if !is_valid(&params, signal) {
            debug!(?params, %signal, "trade levels out of range, no trade");
            return TradeSuggestion::NoTrade;
        }

        TradeSuggestion::Trade(params)
    }
}

fn is_valid(params: &TradeParams, signal: Signal) -> bool {
    let levels = [params.entry, params.stop_loss, params.take_profit];
    levels.iter().all(|v| v.is_finite() && *v > 0.0) && params.direction() == signal
}
