//! Board coordinates for the 10x10 draughts grid.

use serde::{Deserialize, Serialize};

/// Number of columns (and rows) on the board.
pub const BOARD_SPAN: i16 = 10;

/// A square on the board, identified by column and row in `[0, 9]`.
///
/// Construction is fallible: a `Cell` always lies on the board. Raw
/// coordinates coming from a drag release may not, so callers go through
/// [`Cell::new`] and treat `None` as an out-of-bounds destination.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Cell {
    col: u8,
    row: u8,
}

impl Cell {
    /// Creates a cell if both coordinates are within the board.
    pub fn new(col: i16, row: i16) -> Option<Self> {
        if (0..BOARD_SPAN).contains(&col) && (0..BOARD_SPAN).contains(&row) {
            Some(Self {
                col: col as u8,
                row: row as u8,
            })
        } else {
            None
        }
    }

    /// Column index (0-9).
    pub fn col(&self) -> u8 {
        self.col
    }

    /// Row index (0-9).
    pub fn row(&self) -> u8 {
        self.row
    }

    /// Whether this is a dark (playable) square.
    ///
    /// The checkerboard offset pattern places pieces only on squares where
    /// column plus row is odd: odd rows start at column 0, even rows at
    /// column 1.
    pub fn is_dark(&self) -> bool {
        (self.col + self.row) % 2 == 1
    }

    /// Signed (column, row) delta from `self` to `dest`.
    pub fn delta(&self, dest: Cell) -> (i16, i16) {
        (
            dest.col as i16 - self.col as i16,
            dest.row as i16 - self.row as i16,
        )
    }

    /// The cell halfway between `self` and `dest`.
    ///
    /// Only defined when both deltas are even, which for legal geometry
    /// means a two-cell diagonal jump.
    pub fn midpoint(&self, dest: Cell) -> Option<Cell> {
        let (dc, dr) = self.delta(dest);
        if dc % 2 != 0 || dr % 2 != 0 {
            return None;
        }
        Cell::new(self.col as i16 + dc / 2, self.row as i16 + dr / 2)
    }

    /// The dark squares of one row, left to right.
    pub fn dark_squares_in_row(row: u8) -> impl Iterator<Item = Cell> {
        (0..BOARD_SPAN)
            .filter_map(move |col| Cell::new(col, row as i16))
            .filter(Cell::is_dark)
    }
}

impl std::fmt::Display for Cell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.col, self.row)
    }
}
