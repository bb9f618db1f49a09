//! Core domain types for draughts.

use crate::cell::Cell;
use serde::{Deserialize, Serialize};

/// Piece color, which also identifies the side playing it.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::EnumIter, strum::Display,
)]
pub enum Color {
    /// Black pieces, starting on rows 0-3.
    Black,
    /// White pieces, starting on rows 6-9.
    White,
}

impl Color {
    /// Returns the opposing color.
    pub fn opponent(self) -> Self {
        match self {
            Color::Black => Color::White,
            Color::White => Color::Black,
        }
    }
}

/// Opaque identifier for a piece.
///
/// Ids are issued by the board when pieces are placed and stay stable
/// across relocations. A front end holds ids, never `Piece` values.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
)]
#[display("#{_0}")]
pub struct PieceId(pub(crate) u32);

/// A live piece: identity, color, and current square.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Piece {
    id: PieceId,
    color: Color,
    cell: Cell,
}

impl Piece {
    pub(crate) fn new(id: PieceId, color: Color, cell: Cell) -> Self {
        Self { id, color, cell }
    }

    /// The piece's identifier.
    pub fn id(&self) -> PieceId {
        self.id
    }

    /// The piece's color.
    pub fn color(&self) -> Color {
        self.color
    }

    /// The square the piece currently occupies.
    pub fn cell(&self) -> Cell {
        self.cell
    }

    pub(crate) fn set_cell(&mut self, cell: Cell) {
        self.cell = cell;
    }
}
