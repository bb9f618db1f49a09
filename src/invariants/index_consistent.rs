//! Index consistency invariant: cell map and id index agree.

use super::Invariant;
use crate::board::Board;
use tracing::warn;

/// Invariant: every piece's recorded square matches the occupancy map,
/// and every occupied square resolves back to its piece by id.
///
/// This is the "at most one piece per cell" guarantee in structural form:
/// the cell-keyed map cannot hold two pieces on one square, so agreement
/// between the map and the id index is what remains to verify.
pub struct IndexConsistentInvariant;

impl Invariant<Board> for IndexConsistentInvariant {
    fn holds(board: &Board) -> bool {
        for piece in board.pieces() {
            // The piece found through the id index must be the one the
            // occupancy map holds at its recorded square.
            match board.cell_of(piece.id()) {
                Ok(cell) if cell == piece.cell() => {}
                _ => {
                    warn!(id = %piece.id(), "id index disagrees with occupancy map");
                    return false;
                }
            }
            if board.piece_at(piece.cell()) != Some(piece.id()) {
                warn!(id = %piece.id(), "occupancy lookup does not return the resident piece");
                return false;
            }
        }
        true
    }

    fn description() -> &'static str {
        "Cell map and id index agree; one piece per square"
    }
}
