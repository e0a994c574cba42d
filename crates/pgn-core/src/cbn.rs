//! CBN is the broadcast API's composite move field: long algebraic and
//! standard algebraic notation for the same move, joined by an underscore
//! (e.g. "e2e4_e4"). Only the SAN half is needed for replay.

use crate::error::ReplayError;

/// Extract the SAN component of a composite `cbn` move string.
/// The long algebraic half before the underscore is discarded.
pub fn san_part(cbn: &str) -> Result<&str, ReplayError> {
    match cbn.split_once('_') {
        Some((_, san)) if !san.is_empty() => Ok(san),
        _ => Err(ReplayError::BadEncoding(cbn.to_string())),
    }
}
