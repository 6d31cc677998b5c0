pub mod board;
pub mod error;
pub mod game;
pub mod movegen;
pub mod rules;
pub mod types;
pub mod vuln;

// Re-export core game logic (not engine-specific)
pub use board::*;
pub use error::GameError;
pub use game::{ClickOutcome, GameState};
pub use movegen::*;
pub use rules::{is_legal_move, path_clear};
pub use types::*;
pub use vuln::{vulnerability_for, VulnerabilityInfo};

/// Trait implemented by the computer opponents.
///
/// Keeps move selection swappable behind one seam: the controller hands an
/// engine the current board and the side to move, and gets back either a
/// move or the fact that none exists (which loses the game for that side).
pub trait Engine: Send {
    /// Pick a move for `color` on `board`.
    ///
    /// # Errors
    /// `GameError::NoLegalMoves` when `color` cannot move at all.
    fn select_move(&mut self, board: &Board, color: Color) -> Result<Move, GameError>;

    /// Returns the engine's display name
    fn name(&self) -> &str;

    /// Reset internal state for a new game
    fn new_game(&mut self) {}
}
