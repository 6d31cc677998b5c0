use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Color {
    White,
    Black,
}

impl Color {
    pub fn other(self) -> Color {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Color::White => write!(f, "White"),
            Color::Black => write!(f, "Black"),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Piece {
    pub color: Color,
    pub kind: PieceKind,
}

/// A from/to pair plus the identity of the piece that moves.
/// The captured piece, if any, is read off the board when the move is applied.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Move {
    pub from: u8, // 0..63
    pub to: u8,   // 0..63
    pub piece: Piece,
}

impl Move {
    pub fn new(from: u8, to: u8, piece: Piece) -> Self {
        Self { from, to, piece }
    }
}

// Helpers. Squares are row-major with row 0 on Black's side of the board
// and row 7 on White's; column 0 is the left edge from White's seat.
pub fn row_of(sq: u8) -> i8 {
    (sq / 8) as i8
}
pub fn col_of(sq: u8) -> i8 {
    (sq % 8) as i8
}
pub fn sq(row: i8, col: i8) -> Option<u8> {
    if (0..8).contains(&row) && (0..8).contains(&col) {
        Some((row as u8) * 8 + (col as u8))
    } else {
        None
    }
}
