//! Candle sources feeding the engine.

use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::info;

use crate::models::Candle;

#[derive(Debug, Error)]
pub enum MarketDataError {
    #[error("failed to read candles from {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to decode candles from {path}: {source}")]
    Decode {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

pub trait MarketDataProvider {
    /// Most recent `limit` candles, oldest first.
    fn get_candles(&self, limit: usize) -> Result<Vec<Candle>, MarketDataError>;
}

/// Reads a JSON array of candle records from disk.
pub struct JsonFileProvider {
    path: PathBuf,
}

impl JsonFileProvider {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }
}

impl MarketDataProvider for JsonFileProvider {
    fn get_candles(&self, limit: usize) -> Result<Vec<Candle>, MarketDataError> {
        let raw = fs::read_to_string(&self.path).map_err(|source| MarketDataError::Io {
            path: self.path.clone(),
            source,
        })?;
        let mut candles: Vec<Candle> =
            serde_json::from_str(&raw).map_err(|source| MarketDataError::Decode {
                path: self.path.clone(),
                source,
            })?;

        candles.sort_by_key(|c| c.timestamp);
        if candles.len() > limit {
            candles.drain(..candles.len() - limit);
        }

        info!(path = %self.path.display(), count = candles.len(), "loaded candles");
        Ok(candles)
    }
}
