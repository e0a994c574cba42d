//! Exporter error types

use pgn_core::error::ReplayError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ExportError {
    #[error("Round {round_slug} not found in event {event_id}")]
    RoundNotFound {
        round_slug: String,
        event_id: String,
    },

    #[error("Unsupported source URL: {0}")]
    SourceUrl(String),

    #[error("Request error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("HTTP {status} from {url}")]
    UpstreamStatus {
        status: reqwest::StatusCode,
        url: String,
    },

    #[error("JSON decode error: {0}")]
    Decode(#[from] serde_json::Error),

    #[error(transparent)]
    Replay(#[from] ReplayError),
}
