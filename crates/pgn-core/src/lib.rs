//! Rules-side logic for exporting live broadcast games: move-encoding
//! decode, clock formatting, SAN replay, and PGN rendering. No I/O here.

pub mod cbn;
pub mod clock;
pub mod error;
pub mod pgn;
pub mod replay;
