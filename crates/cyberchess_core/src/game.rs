//! Game state management for a single CyberChess session.

use crate::{
    board::Board,
    error::GameError,
    rules::is_legal_move,
    types::{Color, PieceKind},
};

/// Owns the mutable state of one game: board, turn, captures, and outcome.
///
/// Moves either fully apply (board update, capture bookkeeping, turn flip)
/// or are rejected before any mutation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameState {
    /// Current position
    pub board: Board,
    /// Side to move
    pub side_to_move: Color,
    /// Currently selected square (White-side move input)
    pub selected: Option<u8>,
    /// Piece types White has captured, in capture order
    pub white_captures: Vec<PieceKind>,
    /// Piece types Black has captured, in capture order
    pub black_captures: Vec<PieceKind>,
    /// Most recently captured piece type; overwritten on every capture
    pub last_capture: Option<PieceKind>,
    /// Has the game ended?
    pub game_over: bool,
    /// The winning side, once the game is over
    pub winner: Option<Color>,
}

/// What a square click did to the game state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ClickOutcome {
    /// A White piece is now selected
    Selected(u8),
    /// The selected square was clicked again
    Deselected,
    /// A move was applied; `capture` is the piece type taken, if any
    Moved { capture: Option<PieceKind> },
    /// The click changed nothing
    Ignored,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

impl GameState {
    pub fn new() -> Self {
        Self {
            board: Board::startpos(),
            side_to_move: Color::White,
            selected: None,
            white_captures: Vec::new(),
            black_captures: Vec::new(),
            last_capture: None,
            game_over: false,
            winner: None,
        }
    }

    /// Restore the starting position and clear selection, captures, and
    /// outcome. Full reinitialization.
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// Validate and apply a move for the side to move.
    ///
    /// Returns the captured piece type, if any. Capturing a King ends the
    /// game in favor of the capturing side; the turn still flips on that
    /// final move, but no further moves are accepted.
    pub fn apply_move(&mut self, from: u8, to: u8) -> Result<Option<PieceKind>, GameError> {
        if self.game_over {
            return Err(GameError::IllegalMove { from, to });
        }
        let piece = match self.board.piece_at(from) {
            Some(p) if p.color == self.side_to_move => p,
            _ => return Err(GameError::IllegalMove { from, to }),
        };
        if !is_legal_move(&self.board, from, to, piece) {
            return Err(GameError::IllegalMove { from, to });
        }

        let captured = self.board.piece_at(to);
        if let Some(captured) = captured {
            self.last_capture = Some(captured.kind);
            match piece.color {
                Color::White => self.white_captures.push(captured.kind),
                Color::Black => self.black_captures.push(captured.kind),
            }
            if captured.kind == PieceKind::King {
                self.game_over = true;
                self.winner = Some(piece.color);
            }
        }

        self.board.set_piece(to, Some(piece));
        self.board.set_piece(from, None);
        self.side_to_move = self.side_to_move.other();

        Ok(captured.map(|p| p.kind))
    }

    /// Record an immediate loss for `side`, the no-legal-moves rule: a side
    /// that cannot move loses rather than drawing.
    pub fn forfeit(&mut self, side: Color) {
        self.game_over = true;
        self.winner = Some(side.other());
    }

    /// The White-side selection flow for a square click.
    ///
    /// Clicks are ignored while the game is over or it is not White's turn.
    /// Clicking the selected square deselects it; a legal destination applies
    /// the move; another White piece switches the selection; anything else
    /// keeps the current selection so the player can try a different target.
    pub fn handle_click(&mut self, clicked: u8) -> ClickOutcome {
        if self.game_over || self.side_to_move != Color::White {
            return ClickOutcome::Ignored;
        }

        let Some(from) = self.selected else {
            return self.try_select(clicked);
        };

        if from == clicked {
            self.selected = None;
            return ClickOutcome::Deselected;
        }

        if let Ok(capture) = self.apply_move(from, clicked) {
            self.selected = None;
            return ClickOutcome::Moved { capture };
        }

        match self.try_select(clicked) {
            ClickOutcome::Selected(s) => ClickOutcome::Selected(s),
            _ => ClickOutcome::Ignored, // keep current selection
        }
    }

    fn try_select(&mut self, clicked: u8) -> ClickOutcome {
        match self.board.piece_at(clicked) {
            Some(p) if p.color == Color::White => {
                self.selected = Some(clicked);
                ClickOutcome::Selected(clicked)
            }
            _ => ClickOutcome::Ignored,
        }
    }
}

#[cfg(test)]
#[path = "game_tests.rs"]
mod game_tests;
