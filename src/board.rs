//! Board occupancy state.
//!
//! The board is the single source of truth for piece positions: a mapping
//! from occupied squares to pieces, with an id index and cached per-color
//! live counts on top. It answers "what occupies cell C?" and performs
//! relocation and removal; it does not judge legality (the rules module
//! does that).

use crate::action::{MoveError, RejectReason};
use crate::cell::Cell;
use crate::types::{Color, Piece, PieceId};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};
use tracing::{debug, instrument};

/// Pieces of one color at game start.
pub const STARTING_PIECES: u8 = 20;

/// Authoritative occupancy and piece registry.
///
/// Replaces the classic pair of per-color piece lists with one map keyed
/// by cell, so occupancy lookups and color lookups share a single source
/// of truth. Counts are maintained incrementally and observable through
/// [`Board::remaining`] for a "pieces left" display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<Piece>", into = "Vec<Piece>")]
pub struct Board {
    by_cell: BTreeMap<Cell, Piece>,
    index: HashMap<PieceId, Cell>,
    black_left: u8,
    white_left: u8,
    next_id: u32,
}

impl Board {
    /// Creates a board with no pieces.
    pub fn empty() -> Self {
        Self {
            by_cell: BTreeMap::new(),
            index: HashMap::new(),
            black_left: 0,
            white_left: 0,
            next_id: 0,
        }
    }

    /// Creates a board with the standard 20/20 starting layout:
    /// black on the dark squares of rows 0-3, white on rows 6-9.
    #[instrument]
    pub fn standard() -> Self {
        let mut board = Self::empty();
        board.reset();
        board
    }

    /// Clears the board and lays out a new game.
    ///
    /// Fresh ids are issued for every piece; ids from before the reset
    /// become unknown rather than silently pointing at new pieces.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        self.by_cell.clear();
        self.index.clear();
        self.black_left = 0;
        self.white_left = 0;
        for row in 0..4 {
            for cell in Cell::dark_squares_in_row(row) {
                self.place(Color::Black, cell)
                    .expect("starting squares are distinct");
            }
        }
        for row in 6..10 {
            for cell in Cell::dark_squares_in_row(row) {
                self.place(Color::White, cell)
                    .expect("starting squares are distinct");
            }
        }
    }

    /// Puts a new piece on the board, issuing its id.
    ///
    /// Refuses an occupied square. Square color is deliberately not
    /// checked here so invariant tests can construct corrupt layouts;
    /// every reachable game state only ever places on dark squares.
    pub fn place(&mut self, color: Color, cell: Cell) -> Result<PieceId, MoveError> {
        if self.by_cell.contains_key(&cell) {
            return Err(RejectReason::DestinationOccupied(cell).into());
        }
        let id = PieceId(self.next_id);
        self.next_id += 1;
        self.by_cell.insert(cell, Piece::new(id, color, cell));
        self.index.insert(id, cell);
        match color {
            Color::Black => self.black_left += 1,
            Color::White => self.white_left += 1,
        }
        Ok(id)
    }

    /// The piece occupying a square, if any. No side effects.
    pub fn piece_at(&self, cell: Cell) -> Option<PieceId> {
        self.by_cell.get(&cell).map(Piece::id)
    }

    /// The color of a piece.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::UnknownPiece`] if the id is not on the board.
    pub fn color_of(&self, id: PieceId) -> Result<Color, MoveError> {
        self.piece(id).map(|p| p.color())
    }

    /// The square a piece currently occupies.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::UnknownPiece`] if the id is not on the board.
    pub fn cell_of(&self, id: PieceId) -> Result<Cell, MoveError> {
        self.index
            .get(&id)
            .copied()
            .ok_or(MoveError::UnknownPiece(id))
    }

    /// Moves a piece's recorded square. No legality check: callers go
    /// through the validator, which guarantees the destination is free.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::UnknownPiece`] if the id is not on the board.
    #[instrument(skip(self))]
    pub fn relocate(&mut self, id: PieceId, dest: Cell) -> Result<(), MoveError> {
        let source = self.cell_of(id)?;
        debug_assert!(
            !self.by_cell.contains_key(&dest),
            "relocate onto occupied square"
        );
        let mut piece = self
            .by_cell
            .remove(&source)
            .ok_or(MoveError::UnknownPiece(id))?;
        piece.set_cell(dest);
        self.by_cell.insert(dest, piece);
        self.index.insert(id, dest);
        debug!(%id, %source, %dest, "piece relocated");
        Ok(())
    }

    /// Deletes a piece from the board and its color's roster, decrementing
    /// that color's live count.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::UnknownPiece`] if the id is not on the board.
    #[instrument(skip(self))]
    pub fn remove(&mut self, id: PieceId) -> Result<Piece, MoveError> {
        let cell = self.cell_of(id)?;
        let piece = self
            .by_cell
            .remove(&cell)
            .ok_or(MoveError::UnknownPiece(id))?;
        self.index.remove(&id);
        match piece.color() {
            Color::Black => self.black_left -= 1,
            Color::White => self.white_left -= 1,
        }
        debug!(%id, %cell, color = %piece.color(), "piece removed");
        Ok(piece)
    }

    /// Live pieces left for one color.
    pub fn remaining(&self, color: Color) -> u8 {
        match color {
            Color::Black => self.black_left,
            Color::White => self.white_left,
        }
    }

    /// All live pieces, ordered by square.
    pub fn pieces(&self) -> impl Iterator<Item = &Piece> {
        self.by_cell.values()
    }

    /// Total live pieces of both colors.
    pub fn len(&self) -> usize {
        self.by_cell.len()
    }

    /// Whether the board holds no pieces.
    pub fn is_empty(&self) -> bool {
        self.by_cell.is_empty()
    }

    pub(crate) fn piece(&self, id: PieceId) -> Result<&Piece, MoveError> {
        let cell = self
            .index
            .get(&id)
            .copied()
            .ok_or(MoveError::UnknownPiece(id))?;
        self.by_cell.get(&cell).ok_or(MoveError::UnknownPiece(id))
    }

    #[cfg(test)]
    pub(crate) fn corrupt_index(&mut self, id: PieceId, cell: Cell) {
        self.index.insert(id, cell);
    }

    /// Formats the board as a human-readable grid (`b`, `w`, `.` for empty
    /// dark squares, space for light squares).
    pub fn display(&self) -> String {
        let mut out = String::new();
        for row in 0..10 {
            for col in 0..10 {
                let cell = Cell::new(col, row).expect("grid coordinates are on the board");
                let symbol = match self.by_cell.get(&cell).map(Piece::color) {
                    Some(Color::Black) => 'b',
                    Some(Color::White) => 'w',
                    None if cell.is_dark() => '.',
                    None => ' ',
                };
                out.push(symbol);
            }
            if row < 9 {
                out.push('\n');
            }
        }
        out
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::standard()
    }
}

// Serde representation: the piece list alone determines the board.
impl From<Vec<Piece>> for Board {
    fn from(pieces: Vec<Piece>) -> Self {
        let mut board = Board::empty();
        for piece in pieces {
            board.by_cell.insert(piece.cell(), piece);
            board.index.insert(piece.id(), piece.cell());
            match piece.color() {
                Color::Black => board.black_left += 1,
                Color::White => board.white_left += 1,
            }
            board.next_id = board.next_id.max(piece.id().0 + 1);
        }
        board
    }
}

impl From<Board> for Vec<Piece> {
    fn from(board: Board) -> Self {
        board.by_cell.into_values().collect()
    }
}
