//! Trendsignal CLI
//!
//! Reads a JSON array of candles, runs one evaluation cycle and prints the
//! analysis as JSON on stdout.
//!
//! Usage: `trendsignal <candles.json>` (or `CANDLES_PATH`).

use dotenvy::dotenv;
use std::env;
use tracing::{info, warn};
use trendsignal::config::{get_environment, EngineConfig};
use trendsignal::core::runtime::SignalRuntime;
use trendsignal::logging;
use trendsignal::services::{
    AlertDispatcher, JsonFileProvider, LogAlertDispatcher, MarketDataProvider,
};
use trendsignal::signals::SignalState;

const DEFAULT_CANDLE_LIMIT: usize = 100;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv().ok();
    logging::init_logging();

    let path = env::args()
        .nth(1)
        .or_else(|| env::var("CANDLES_PATH").ok())
        .ok_or("usage: trendsignal <candles.json> (or set CANDLES_PATH)")?;

    let limit: usize = env::var("CANDLE_LIMIT")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(DEFAULT_CANDLE_LIMIT);

    let config = EngineConfig::from_env()?;
    info!(environment = %get_environment(), ?config, "starting trendsignal");

    let provider = JsonFileProvider::new(&path);
    let candles = provider.get_candles(limit)?;

    let runtime = SignalRuntime::new(config);
    let state = SignalState::new(&runtime.config().tracker);
    let outcome = runtime.run_cycle(&candles, &state)?;

    if let Some(alert) = &outcome.alert {
        if let Err(e) = LogAlertDispatcher.dispatch(alert) {
            warn!(error = %e, "failed to dispatch alert");
        }
    }

    if let Some(summary) = &outcome.analysis.summary {
        info!("{}", summary.format_update("market"));
    }

    println!("{}", serde_json::to_string_pretty(&outcome.analysis)?);
    Ok(())
}
