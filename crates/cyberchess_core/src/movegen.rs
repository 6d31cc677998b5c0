use crate::{board::Board, rules::is_legal_move, types::*};

/// Generate all legal moves for `color`, returning a freshly allocated vector.
pub fn legal_moves(board: &Board, color: Color) -> Vec<Move> {
    let mut out = Vec::with_capacity(64);
    legal_moves_into(board, color, &mut out);
    out
}

/// Generate all legal moves for `color` into the provided buffer, reusing it
/// across calls.
///
/// Origins and destinations are both scanned in row-major order, so the
/// output is sorted by (from, to). Downstream selection keeps the first of
/// any equally-scored moves, which makes that ordering observable.
pub fn legal_moves_into(board: &Board, color: Color, out: &mut Vec<Move>) {
    out.clear();
    for from in 0..64u8 {
        let pc = match board.piece_at(from) {
            Some(p) if p.color == color => p,
            _ => continue,
        };
        for to in 0..64u8 {
            if is_legal_move(board, from, to, pc) {
                out.push(Move::new(from, to, pc));
            }
        }
    }
}

#[cfg(test)]
#[path = "movegen_tests.rs"]
mod movegen_tests;
