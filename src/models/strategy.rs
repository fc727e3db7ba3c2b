//! Rule-set data model for the signal engine

use serde::{Deserialize, Serialize};

use super::indicators::EnrichedCandle;
use super::signal::Signal;

/// A named predicate over the (current, previous) pair of enriched rows.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "threshold", rename_all = "snake_case")]
pub enum Condition {
    /// Short EMA moves from at-or-below to strictly above the long EMA.
    BullishCrossover,
    /// Short EMA moves from at-or-above to strictly below the long EMA.
    BearishCrossover,
    MacdAboveSignal,
    MacdBelowSignal,
    RsiBelow(f64),
    RsiAbove(f64),
    ObvRising,
    ObvFalling,
}

impl Condition {
    pub fn is_met(&self, current: &EnrichedCandle, previous: &EnrichedCandle) -> bool {
        match *self {
            Condition::BullishCrossover => {
                previous.ema_short <= previous.ema_long && current.ema_short > current.ema_long
            }
            Condition::BearishCrossover => {
                previous.ema_short >= previous.ema_long && current.ema_short < current.ema_long
            }
            Condition::MacdAboveSignal => current.macd_line > current.macd_signal,
            Condition::MacdBelowSignal => current.macd_line < current.macd_signal,
            Condition::RsiBelow(threshold) => current.rsi < threshold,
            Condition::RsiAbove(threshold) => current.rsi > threshold,
            Condition::ObvRising => current.obv > previous.obv,
            Condition::ObvFalling => current.obv < previous.obv,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Condition::BullishCrossover => "bullish_crossover",
            Condition::BearishCrossover => "bearish_crossover",
            Condition::MacdAboveSignal => "macd_above_signal",
            Condition::MacdBelowSignal => "macd_below_signal",
            Condition::RsiBelow(_) => "rsi_below",
            Condition::RsiAbove(_) => "rsi_above",
            Condition::ObvRising => "obv_rising",
            Condition::ObvFalling => "obv_falling",
        }
    }
}

/// All conditions must hold for the group to emit its signal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RuleGroup {
    pub name: String,
    pub signal: Signal,
    pub conditions: Vec<Condition>,
}

impl RuleGroup {
    pub fn new(name: impl Into<String>, signal: Signal, conditions: Vec<Condition>) -> Self {
        Self {
            name: name.into(),
            signal,
            conditions,
        }
    }

    pub fn matches(&self, current: &EnrichedCandle, previous: &EnrichedCandle) -> bool {
        !self.conditions.is_empty() && self.conditions.iter().all(|c| c.is_met(current, previous))
    }
}

/// Ordered rule groups. The first matching group wins; nothing matching means
/// HOLD.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RuleSet {
    pub groups: Vec<RuleGroup>,
}

impl RuleSet {
    pub fn new(groups: Vec<RuleGroup>) -> Self {
        Self { groups }
    }

    /// EMA crossover confirmed by MACD, an RSI ceiling/floor and OBV direction.
    pub fn crossover_confirmation(rsi_overbought: f64, rsi_oversold: f64) -> Self {
        Self::new(vec![
            RuleGroup::new(
                "long_entry",
                Signal::Long,
                vec![
                    Condition::BullishCrossover,
                    Condition::MacdAboveSignal,
                    Condition::RsiBelow(rsi_overbought),
                    Condition::ObvRising,
                ],
            ),
            RuleGroup::new(
                "short_entry",
                Signal::Short,
                vec![
                    Condition::BearishCrossover,
                    Condition::MacdBelowSignal,
                    Condition::RsiAbove(rsi_oversold),
                    Condition::ObvFalling,
                ],
            ),
        ])
    }

    /// First group whose conditions all hold.
    pub fn first_match(
        &self,
        current: &EnrichedCandle,
        previous: &EnrichedCandle,
    ) -> Option<&RuleGroup> {
        self.groups.iter().find(|g| g.matches(current, previous))
    }
}

impl Default for RuleSet {
    fn default() -> Self {
        Self::crossover_confirmation(70.0, 30.0)
    }
}
