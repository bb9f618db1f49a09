//! Roster count invariant: cached counts match the registry.

use super::Invariant;
use crate::board::{Board, STARTING_PIECES};
use crate::types::Color;
use strum::IntoEnumIterator;
use tracing::warn;

/// Invariant: the per-color live counts reported by the board equal the
/// number of pieces of that color actually on it, and never exceed the
/// starting roster size.
///
/// The counts are maintained incrementally on place and remove; replaying
/// the registry is what keeps them honest.
pub struct RosterCountsInvariant;

impl Invariant<Board> for RosterCountsInvariant {
    fn holds(board: &Board) -> bool {
        for color in Color::iter() {
            let counted = board.pieces().filter(|p| p.color() == color).count();
            let reported = board.remaining(color) as usize;

            if counted != reported {
                warn!(%color, counted, reported, "roster count out of sync");
                return false;
            }
            if counted > STARTING_PIECES as usize {
                warn!(%color, counted, "more pieces than the starting roster");
                return false;
            }
        }
        true
    }

    fn description() -> &'static str {
        "Per-color live counts match the piece registry"
    }
}
