use crate::types::Color;
use thiserror::Error;

/// Errors surfaced by the game state controller and engines.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum GameError {
    /// The attempted move fails a rules-engine check. The GUI swallows this
    /// and keeps the current selection; library callers get it explicitly.
    #[error("illegal move from square {from} to square {to}")]
    IllegalMove { from: u8, to: u8 },

    /// The side to move has zero legal moves, which loses immediately in
    /// this variant.
    #[error("{side} has no legal moves")]
    NoLegalMoves { side: Color },
}
