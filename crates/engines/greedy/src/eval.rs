//! Static move scoring for the greedy opponent.

use cyberchess_core::{col_of, row_of, Board, Move, PieceKind};
use rand::Rng;

/// Exchange value of a piece type. The King's value dwarfs everything else
/// so a King capture is always taken when available.
pub fn piece_value(kind: PieceKind) -> i32 {
    match kind {
        PieceKind::Pawn => 1,
        PieceKind::Knight => 3,
        PieceKind::Bishop => 3,
        PieceKind::Rook => 5,
        PieceKind::Queen => 9,
        PieceKind::King => 100,
    }
}

/// The four central squares (rows 3-4, columns 3-4) get a small bonus.
pub fn is_center(sq: u8) -> bool {
    (3..=4).contains(&row_of(sq)) && (3..=4).contains(&col_of(sq))
}

/// Score a candidate move: ten times the captured piece's value, plus two
/// for landing on a center square, plus a uniform jitter in [0, 3) that
/// breaks up play among near-equal moves.
pub fn score_move<R: Rng>(board: &Board, mv: &Move, rng: &mut R) -> f64 {
    let mut score = 0.0;

    if let Some(captured) = board.piece_at(mv.to) {
        score += 10.0 * piece_value(captured.kind) as f64;
    }
    if is_center(mv.to) {
        score += 2.0;
    }

    score + rng.gen_range(0.0..3.0)
}

#[cfg(test)]
#[path = "eval_tests.rs"]
mod eval_tests;
