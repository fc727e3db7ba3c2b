//! Market snapshot from the latest enriched rows

use crate::models::{EnrichedCandle, MarketSummary};

/// Project the last two rows into a [`MarketSummary`]; `None` with fewer
/// than two rows.
pub fn snapshot(series: &[EnrichedCandle]) -> Option<MarketSummary> {
    let [.., previous, latest] = series else {
        return None;
    };

    let price_change = latest.close() - previous.close();
    let price_change_pct = if previous.close() != 0.0 {
        price_change / previous.close() * 100.0
    } else {
        0.0
    };

    Some(MarketSummary {
        timestamp: latest.timestamp(),
        current_price: latest.close(),
        price_change,
        price_change_pct,
        volume: latest.candle.base_volume,
        rsi: latest.rsi,
        macd: latest.macd_line,
        macd_signal: latest.macd_signal,
        ema_short: latest.ema_short,
        ema_long: latest.ema_long,
        atr: latest.atr,
        obv: latest.obv,
    })
}
