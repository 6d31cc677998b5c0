//! Greedy CyberChess Opponent
//!
//! A single-ply engine: generate every legal move, score each with a static
//! heuristic (capture value, center control, random jitter), and play the
//! highest scorer. There is no search tree and no lookahead.

use cyberchess_core::{legal_moves_into, Board, Color, Engine, GameError, Move};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

pub mod eval;

use eval::score_move;


/// The computer opponent.
///
/// The random jitter in the score makes normal play non-reproducible; the
/// random source is injectable so tests can pin it down with a seed.
#[derive(Debug, Clone)]
pub struct GreedyEngine<R: Rng = StdRng> {
    rng: R,
    buf: Vec<Move>,
}

impl GreedyEngine<StdRng> {
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_entropy())
    }

    /// A reproducible engine: the same seed on the same position always
    /// picks the same move.
    pub fn from_seed(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }
}

impl Default for GreedyEngine<StdRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> GreedyEngine<R> {
    pub fn with_rng(rng: R) -> Self {
        Self {
            rng,
            buf: Vec::with_capacity(64),
        }
    }
}

impl<R: Rng + Send> Engine for GreedyEngine<R> {
    fn select_move(&mut self, board: &Board, color: Color) -> Result<Move, GameError> {
        legal_moves_into(board, color, &mut self.buf);
        if self.buf.is_empty() {
            return Err(GameError::NoLegalMoves { side: color });
        }

        // Left-to-right scan over the generated order; ties keep the first
        // move seen.
        let mut best = self.buf[0];
        let mut best_score = f64::NEG_INFINITY;
        for &mv in &self.buf {
            let score = score_move(board, &mv, &mut self.rng);
            if score > best_score {
                best_score = score;
                best = mv;
            }
        }

        Ok(best)
    }

    fn name(&self) -> &str {
        "Greedy v1.0"
    }
}
