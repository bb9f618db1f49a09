//! Dark-square invariant: pieces live on playable squares only.

use super::Invariant;
use crate::board::Board;
use tracing::warn;

/// Invariant: every occupied square is dark.
///
/// The starting layout only uses dark squares and legal step/jump
/// geometry preserves square color, so no reachable game state violates
/// this. The validator never re-checks it; this invariant is where the
/// guarantee is actually verified.
pub struct DarkSquaresInvariant;

impl Invariant<Board> for DarkSquaresInvariant {
    fn holds(board: &Board) -> bool {
        for piece in board.pieces() {
            if !piece.cell().is_dark() {
                warn!(id = %piece.id(), cell = %piece.cell(), "piece on a light square");
                return false;
            }
        }
        true
    }

    fn description() -> &'static str {
        "Every occupied square is dark (playable)"
    }
}
