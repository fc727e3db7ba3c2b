//! Signal decision engine over the two most recent enriched rows.

use thiserror::Error;
use tracing::{debug, info};

use crate::config::DecisionThresholds;
use crate::models::{EnrichedCandle, RuleSet, Signal, SignalDecision};

/// An indicator the decision rule needs was not a finite number.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("missing indicator value '{field}' on {row} row")]
pub struct MissingIndicatorValue {
    pub field: &'static str,
    pub row: &'static str,
}

/// Stateless rule evaluator. The same pair of rows always yields the same
/// signal; tracking whether a signal is new belongs to the caller.
#[derive(Debug, Clone, Default)]
pub struct SignalEngine {
    rules: RuleSet,
}

impl SignalEngine {
    pub fn new(rules: RuleSet) -> Self {
        Self { rules }
    }

    pub fn with_thresholds(thresholds: &DecisionThresholds) -> Self {
        Self::new(RuleSet::crossover_confirmation(
            thresholds.rsi_overbought,
            thresholds.rsi_oversold,
        ))
    }

    /// LONG, SHORT or HOLD for the (current, previous) pair. Never fails:
    /// absent rows or missing indicator values give HOLD.
    pub fn decide(
        &self,
        current: Option<&EnrichedCandle>,
        previous: Option<&EnrichedCandle>,
    ) -> Signal {
        self.evaluate(current, previous).signal
    }

    /// Decide on the last two rows of `series`; HOLD with fewer than two.
    pub fn decide_latest(&self, series: &[EnrichedCandle]) -> Signal {
        self.evaluate_latest(series).signal
    }

    pub fn evaluate_latest(&self, series: &[EnrichedCandle]) -> SignalDecision {
        match series {
            [.., previous, current] => self.evaluate(Some(current), Some(previous)),
            _ => SignalDecision::hold(),
        }
    }

    /// Like [`decide`](Self::decide) but also names the matching rule group.
    pub fn evaluate(
        &self,
        current: Option<&EnrichedCandle>,
        previous: Option<&EnrichedCandle>,
    ) -> SignalDecision {
        let (Some(current), Some(previous)) = (current, previous) else {
            return SignalDecision::hold();
        };

        let checked =
            check_inputs(current, "current").and_then(|_| check_inputs(previous, "previous"));
        if let Err(missing) = checked {
            debug!(error = %missing, "indicator value missing, holding");
            return SignalDecision::hold();
        }

        match self.rules.first_match(current, previous) {
            Some(group) => {
                info!(signal = %group.signal, rule = %group.name, "signal generated");
                SignalDecision {
                    signal: group.signal,
                    rule: Some(group.name.clone()),
                }
            }
            None => SignalDecision::hold(),
        }
    }
}

fn check_inputs(row: &EnrichedCandle, label: &'static str) -> Result<(), MissingIndicatorValue> {
    let fields = [
        ("ema_short", row.ema_short),
        ("ema_long", row.ema_long),
        ("macd_line", row.macd_line),
        ("macd_signal", row.macd_signal),
        ("rsi", row.rsi),
        ("obv", row.obv),
    ];
    match fields.iter().find(|(_, value)| !value.is_finite()) {
        Some((field, _)) => Err(MissingIndicatorValue {
            field: *field,
            row: label,
        }),
        None => Ok(()),
    }
}
