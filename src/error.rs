use thiserror::Error;

use crate::config::ConfigError;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("invalid timestamp {timestamp:?}: {source}")]
    Timestamp {
        timestamp: String,
        #[source]
        source: chrono::ParseError,
    },

    #[error("local time {timestamp:?} does not map to a single instant in {timezone}")]
    AmbiguousLocalTime { timestamp: String, timezone: String },

    #[error("ephemeris failure: {0}")]
    Ephemeris(#[from] solar_positioning::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to serialize report: {0}")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Config(#[from] ConfigError),
}
