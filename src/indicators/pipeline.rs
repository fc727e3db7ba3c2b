//! Raw candles to enriched indicator rows.

use tracing::debug;

use crate::config::IndicatorConfig;
use crate::indicators::error::IndicatorError;
use crate::indicators::momentum::{calculate_macd, calculate_rsi};
use crate::indicators::trend::calculate_ema;
use crate::indicators::validation::validate_series;
use crate::indicators::volatility::calculate_atr;
use crate::indicators::volume::calculate_obv;
use crate::models::{Candle, EnrichedCandle};

pub struct IndicatorPipeline;

impl IndicatorPipeline {
    /// Compute every indicator column and drop the warm-up rows.
    ///
    /// The returned rows are `warmup..len` of the input, in order, each with
    /// all indicator fields defined. The input slice is not modified.
    pub fn compute(
        candles: &[Candle],
        config: &IndicatorConfig,
    ) -> Result<Vec<EnrichedCandle>, IndicatorError> {
        config.validate()?;
        if candles.is_empty() {
            return Err(IndicatorError::EmptySeries);
        }

        let warmup = config.warmup();
        // A series no longer than the warm-up leaves no row to decide on, so it
        // is reported as short history rather than returned as an empty frame.
        let required = config.required_history().max(warmup + 1);
        if candles.len() < required {
            return Err(IndicatorError::InsufficientHistory {
                required,
                actual: candles.len(),
            });
        }
        validate_series(candles)?;

        let ema_short = calculate_ema(candles, config.ema_short);
        let ema_long = calculate_ema(candles, config.ema_long);
        let macd = calculate_macd(candles, config.macd_fast, config.macd_slow, config.macd_signal);
        let rsi = calculate_rsi(candles, config.rsi_period);
        let atr = calculate_atr(candles, config.atr_period);
        let obv = calculate_obv(candles);

        let rows: Vec<EnrichedCandle> = candles
            .iter()
            .enumerate()
            .filter_map(|(i, candle)| {
                Some(EnrichedCandle {
                    candle: *candle,
                    ema_short: ema_short[i]?,
                    ema_long: ema_long[i]?,
                    macd_line: macd.macd[i]?,
                    macd_signal: macd.signal[i]?,
                    macd_histogram: macd.histogram[i]?,
                    rsi: rsi[i]?,
                    atr: atr[i]?,
                    obv: obv[i],
                })
            })
            .collect();

        debug!(
            input = candles.len(),
            rows = rows.len(),
            dropped = candles.len() - rows.len(),
            "indicator pipeline computed"
        );

        Ok(rows)
    }
}
