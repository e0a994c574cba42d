//! Replay error types

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ReplayError {
    #[error("Malformed move encoding: {0}")]
    BadEncoding(String),

    #[error("Invalid SAN: {0}")]
    InvalidSan(String),

    #[error("Illegal move {san} at ply {ply}")]
    IllegalMove { san: String, ply: usize },
}
