//! Unit tests for the indicator pipeline

use trendsignal::config::IndicatorConfig;
use trendsignal::indicators::{IndicatorError, IndicatorPipeline};
use trendsignal::models::Candle;

fn create_test_candles(count: usize) -> Vec<Candle> {
    (0..count)
        .map(|i| {
            let price = 100.0 + (i as f64 * 0.4).sin() * 5.0 + i as f64 * 0.1;
            Candle::new(
                1_700_000_000 + i as i64 * 300,
                price - 0.2,
                price + 1.0,
                price - 1.0,
                price,
                1000.0 + (i % 5) as f64 * 50.0,
            )
        })
        .collect()
}

fn small_config() -> IndicatorConfig {
    IndicatorConfig {
        ema_short: 3,
        ema_long: 5,
        rsi_period: 3,
        atr_period: 3,
        macd_fast: 4,
        macd_slow: 8,
        macd_signal: 5,
    }
}

#[test]
fn test_empty_series() {
    let result = IndicatorPipeline::compute(&[], &IndicatorConfig::default());
    assert_eq!(result, Err(IndicatorError::EmptySeries));
}

#[test]
fn test_insufficient_history() {
    let result = IndicatorPipeline::compute(&create_test_candles(49), &IndicatorConfig::default());
    assert_eq!(
        result,
        Err(IndicatorError::InsufficientHistory {
            required: 50,
            actual: 49
        })
    );
}

#[test]
fn test_insufficient_history_counts_signal_warmup() {
    let config = small_config();
    assert_eq!(config.warmup(), 11);
    let result = IndicatorPipeline::compute(&create_test_candles(11), &config);
    assert_eq!(
        result,
        Err(IndicatorError::InsufficientHistory {
            required: 12,
            actual: 11
        })
    );
}

#[test]
fn test_signal_warmup_can_exceed_longest_period() {
    let config = IndicatorConfig {
        ema_long: 30,
        macd_slow: 30,
        macd_signal: 12,
        ..IndicatorConfig::default()
    };
    assert_eq!(config.required_history(), 30);
    assert_eq!(config.warmup(), 40);

    let result = IndicatorPipeline::compute(&create_test_candles(35), &config);
    assert_eq!(
        result,
        Err(IndicatorError::InsufficientHistory {
            required: 41,
            actual: 35
        })
    );
    let rows = IndicatorPipeline::compute(&create_test_candles(41), &config).unwrap();
    assert_eq!(rows.len(), 1);
}

#[test]
fn test_invalid_configuration() {
    let candles = create_test_candles(100);

    let fast_not_faster = IndicatorConfig {
        macd_fast: 26,
        ..IndicatorConfig::default()
    };
    assert!(matches!(
        IndicatorPipeline::compute(&candles, &fast_not_faster),
        Err(IndicatorError::InvalidConfiguration(_))
    ));

    let zero_period = IndicatorConfig {
        rsi_period: 0,
        ..IndicatorConfig::default()
    };
    assert!(matches!(
        IndicatorPipeline::compute(&candles, &zero_period),
        Err(IndicatorError::InvalidConfiguration(_))
    ));
}

#[test]
fn test_duplicate_timestamp_rejected() {
    let mut candles = create_test_candles(60);
    candles[30].timestamp = candles[29].timestamp;
    assert!(matches!(
        IndicatorPipeline::compute(&candles, &IndicatorConfig::default()),
        Err(IndicatorError::InvalidCandle { index: 30, .. })
    ));
}

#[test]
fn test_non_positive_price_rejected() {
    let mut candles = create_test_candles(60);
    candles[5].low = 0.0;
    assert!(matches!(
        IndicatorPipeline::compute(&candles, &IndicatorConfig::default()),
        Err(IndicatorError::InvalidCandle { index: 5, .. })
    ));
}

#[test]
fn test_row_count_and_order() {
    let candles = create_test_candles(120);
    let config = IndicatorConfig::default();
    let rows = IndicatorPipeline::compute(&candles, &config).unwrap();

    assert_eq!(rows.len(), 120 - config.warmup());
    for (row, candle) in rows.iter().zip(&candles[config.warmup()..]) {
        assert_eq!(row.candle, *candle);
    }
    assert!(rows.windows(2).all(|w| w[0].timestamp() < w[1].timestamp()));
}

#[test]
fn test_rows_fully_defined() {
    let rows = IndicatorPipeline::compute(&create_test_candles(40), &small_config()).unwrap();
    assert_eq!(rows.len(), 29);
    for row in &rows {
        let values = [
            row.ema_short,
            row.ema_long,
            row.macd_line,
            row.macd_signal,
            row.macd_histogram,
            row.rsi,
            row.atr,
            row.obv,
        ];
        assert!(values.iter().all(|v| v.is_finite()));
    }
}

#[test]
fn test_input_not_mutated_and_output_repeatable() {
    let candles = create_test_candles(80);
    let snapshot = candles.clone();
    let first = IndicatorPipeline::compute(&candles, &IndicatorConfig::default()).unwrap();
    let second = IndicatorPipeline::compute(&candles, &IndicatorConfig::default()).unwrap();
    assert_eq!(candles, snapshot);
    assert_eq!(first, second);
    assert_eq!(
        serde_json::to_string(&first).unwrap(),
        serde_json::to_string(&second).unwrap()
    );
}

#[test]
fn test_enriched_row_serializes_flat() {
    let rows =
        IndicatorPipeline::compute(&create_test_candles(50), &IndicatorConfig::default()).unwrap();
    let value = serde_json::to_value(&rows[0]).unwrap();
    for key in [
        "timestamp",
        "open",
        "high",
        "low",
        "close",
        "base_volume",
        "ema_short",
        "ema_long",
        "macd_line",
        "macd_signal",
        "macd_histogram",
        "rsi",
        "atr",
        "obv",
    ] {
        assert!(value.get(key).is_some(), "missing {key}");
    }
}
