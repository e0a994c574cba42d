//! SAN-by-SAN replay of a game through shakmaty.

use shakmaty::san::San;
use shakmaty::{Chess, Position};

use crate::error::ReplayError;
use crate::pgn::{AnnotatedMove, PgnGame};

/// Rules-aware accumulator: applies SAN moves in ply order from the
/// standard initial position and keeps the annotated move list.
pub struct GameReplay {
    pos: Chess,
    moves: Vec<AnnotatedMove>,
}

impl GameReplay {
    pub fn new() -> Self {
        Self {
            pos: Chess::default(),
            moves: Vec::new(),
        }
    }

    /// Apply one SAN move to the current position. The stored SAN is
    /// re-rendered from the resolved move, so disambiguation and
    /// check/mate suffixes come out canonical even when the input
    /// omits them.
    pub fn play_san(&mut self, san_str: &str) -> Result<(), ReplayError> {
        let san: San = san_str
            .parse()
            .map_err(|_| ReplayError::InvalidSan(san_str.to_string()))?;
        let mv = san
            .to_move(&self.pos)
            .map_err(|_| ReplayError::IllegalMove {
                san: san_str.to_string(),
                ply: self.moves.len() + 1,
            })?;

        let canonical = San::from_move(&self.pos, mv.clone()).to_string();
        self.pos.play_unchecked(mv);
        let suffix = if self.pos.is_checkmate() {
            "#"
        } else if self.pos.is_check() {
            "+"
        } else {
            ""
        };

        self.moves.push(AnnotatedMove {
            san: format!("{canonical}{suffix}"),
            comment: None,
        });
        Ok(())
    }

    /// Attach a comment to the move just applied. No-op before the first
    /// move has been played.
    pub fn comment_last(&mut self, comment: String) {
        if let Some(last) = self.moves.last_mut() {
            last.comment = Some(comment);
        }
    }

    pub fn position(&self) -> &Chess {
        &self.pos
    }

    /// Consume the replay into a headerless game ready for tagging.
    pub fn finish(self) -> PgnGame {
        PgnGame::from_moves(self.moves)
    }
}

impl Default for GameReplay {
    fn default() -> Self {
        Self::new()
    }
}
