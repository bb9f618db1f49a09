//! Simple-step geometry.

use crate::cell::Cell;

/// Whether `dest` is exactly one square diagonally from `source`,
/// in any of the four directions.
pub fn is_simple_step(source: Cell, dest: Cell) -> bool {
    let (dc, dr) = source.delta(dest);
    dc.abs() == 1 && dr.abs() == 1
}
