//! Jump geometry.

use crate::cell::Cell;

/// The midpoint square of a two-cell diagonal jump from `source` to
/// `dest`, or `None` if the geometry is not a jump.
///
/// This only classifies the shape of the move; whether the midpoint
/// actually holds an enemy piece is checked against the board.
pub fn jump_midpoint(source: Cell, dest: Cell) -> Option<Cell> {
    let (dc, dr) = source.delta(dest);
    if dc.abs() == 2 && dr.abs() == 2 {
        source.midpoint(dest)
    } else {
        None
    }
}
