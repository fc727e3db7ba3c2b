//! One evaluation cycle over a candle series.

use serde::Serialize;
use tracing::{debug, info};

use crate::config::EngineConfig;
use crate::indicators::{IndicatorError, IndicatorPipeline};
use crate::models::{Candle, EnrichedCandle, MarketSummary, Signal, SignalDecision, TradeSuggestion};
use crate::services::alerts::Alert;
use crate::signals::summary::snapshot;
use crate::signals::tracker::{HistoryEntry, SignalState, TrackerEvent};
use crate::signals::{SignalEngine, TradeParameterAdvisor};

/// Everything derived from one candle series.
#[derive(Debug, Clone, Serialize)]
pub struct Analysis {
    #[serde(skip)]
    pub enriched: Vec<EnrichedCandle>,
    pub signal: Signal,
    pub decision: SignalDecision,
    pub trade: TradeSuggestion,
    pub summary: Option<MarketSummary>,
}

/// Result of a cycle: the analysis, the caller's next state and an alert
/// when the signal is new.
#[derive(Debug, Clone)]
pub struct CycleOutcome {
    pub analysis: Analysis,
    pub event: TrackerEvent,
    pub state: SignalState,
    pub alert: Option<Alert>,
}

/// Wires the pipeline, engine and advisor together. Holds configuration
/// only; signal state is passed in and returned by the caller.
#[derive(Debug, Clone)]
pub struct SignalRuntime {
    config: EngineConfig,
    engine: SignalEngine,
    advisor: TradeParameterAdvisor,
}

impl SignalRuntime {
    pub fn new(config: EngineConfig) -> Self {
        let engine = SignalEngine::with_thresholds(&config.thresholds);
        let advisor = TradeParameterAdvisor::new(config.risk);
        Self {
            config,
            engine,
            advisor,
        }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Enrich, decide, size and summarise without touching any state.
    pub fn analyze(&self, candles: &[Candle]) -> Result<Analysis, IndicatorError> {
        let enriched = IndicatorPipeline::compute(candles, &self.config.indicators)?;
        let decision = self.engine.evaluate_latest(&enriched);
        let trade = match enriched.last() {
            Some(latest) => self.advisor.suggest(latest, decision.signal),
            None => TradeSuggestion::NoTrade,
        };
        let summary = snapshot(&enriched);

        Ok(Analysis {
            signal: decision.signal,
            decision,
            trade,
            summary,
            enriched,
        })
    }

    /// Analyse `candles` and advance `state`.
    pub fn run_cycle(
        &self,
        candles: &[Candle],
        state: &SignalState,
    ) -> Result<CycleOutcome, IndicatorError> {
        let analysis = self.analyze(candles)?;
        let (tracker, event) = state.tracker.observe(analysis.signal);

        let mut history = state.history.clone();
        let latest = analysis.enriched.last().filter(|_| analysis.signal.is_actionable());
        if let Some(latest) = latest {
            let (next, recorded) = history.record(HistoryEntry {
                signal: analysis.signal,
                price: latest.close(),
                timestamp: latest.timestamp(),
            });
            debug!(recorded, "signal history updated");
            history = next;
        }

        let alert = match (event, analysis.trade.params()) {
            (TrackerEvent::NewSignal { signal, sequence }, Some(trade)) => {
                info!(%signal, sequence, "new signal");
                Some(Alert {
                    sequence,
                    signal,
                    trade: *trade,
                    summary: analysis.summary,
                    rule: analysis.decision.rule.clone(),
                })
            }
            (TrackerEvent::Ended { previous }, _) => {
                info!(%previous, "signal ended");
                None
            }
            _ => None,
        };

        Ok(CycleOutcome {
            analysis,
            event,
            state: SignalState { tracker, history },
            alert,
        })
    }
}

impl Default for SignalRuntime {
    fn default() -> Self {
        Self::new(EngineConfig::default())
    }
}
