//! First-class move types for draughts.
//!
//! A drag gesture produces a [`MoveAttempt`]: the piece, the source square
//! recorded at drag begin, and the raw destination coordinates from the
//! release point. The attempt is evaluated once and discarded; nothing
//! about it is persisted.

use crate::cell::Cell;
use crate::types::PieceId;
use serde::{Deserialize, Serialize};

/// A proposed move, carried from drag begin to drag end.
///
/// The destination is kept as raw signed coordinates because a release
/// point snapped to the nearest square may land off the board entirely.
/// Bounds checking is the validator's first step, not the caller's job.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    derive_new::new,
    derive_getters::Getters,
)]
pub struct MoveAttempt {
    /// The piece being moved.
    piece: PieceId,
    /// Square the piece occupied when the drag began.
    source: Cell,
    /// Raw destination column, possibly off the board.
    dest_col: i16,
    /// Raw destination row, possibly off the board.
    dest_row: i16,
}

impl std::fmt::Display for MoveAttempt {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} from {} to ({}, {})",
            self.piece, self.source, self.dest_col, self.dest_row
        )
    }
}

/// Result of an accepted move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MoveOutcome {
    /// A one-cell diagonal step; nothing was captured.
    Stepped {
        /// Where the piece now sits.
        to: Cell,
    },
    /// A two-cell diagonal jump over an enemy piece.
    Captured {
        /// Where the piece now sits.
        to: Cell,
        /// The piece removed from the midpoint square.
        removed: PieceId,
    },
}

impl MoveOutcome {
    /// The square the moving piece ended on.
    pub fn destination(&self) -> Cell {
        match self {
            MoveOutcome::Stepped { to } => *to,
            MoveOutcome::Captured { to, .. } => *to,
        }
    }

    /// The captured piece, if the move was a jump.
    pub fn captured(&self) -> Option<PieceId> {
        match self {
            MoveOutcome::Stepped { .. } => None,
            MoveOutcome::Captured { removed, .. } => Some(*removed),
        }
    }
}

/// Why a proposed move was turned down.
///
/// Rejections are expected and frequent: the only required reaction is
/// snapping the piece back to its source square. The variants exist so
/// tests and logs can tell the conditions apart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum RejectReason {
    /// Destination lies outside the 10x10 grid.
    #[display("destination ({col}, {row}) is off the board")]
    OutOfBounds {
        /// Raw destination column.
        col: i16,
        /// Raw destination row.
        row: i16,
    },
    /// Destination square already holds a piece of either color.
    #[display("destination {_0} is occupied")]
    DestinationOccupied(Cell),
    /// Neither a one-cell nor a two-cell diagonal move.
    #[display("not a diagonal step or jump")]
    NotDiagonal,
    /// Two-cell diagonal with nothing to jump over.
    #[display("no piece to jump at {_0}")]
    NoPieceToJump(Cell),
    /// Two-cell diagonal over a piece of the mover's own color.
    #[display("own piece at {_0} cannot be jumped")]
    OwnPieceInPath(Cell),
}

/// Error raised when validating or applying a move.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::From)]
pub enum MoveError {
    /// The piece id is not on the board. Fatal to the calling operation:
    /// a front end that only uses ids issued by the board never sees this.
    #[display("unknown piece {_0}")]
    #[from(skip)]
    UnknownPiece(PieceId),

    /// The move was refused; the board is unchanged and the piece should
    /// snap back to its source square.
    #[display("move rejected: {_0}")]
    Rejected(RejectReason),

    /// A board invariant was violated (postcondition failure).
    #[display("invariant violation: {_0}")]
    InvariantViolation(String),
}

impl std::error::Error for MoveError {}

impl MoveError {
    /// Whether this is an ordinary rejection rather than a fault.
    pub fn is_rejection(&self) -> bool {
        matches!(self, MoveError::Rejected(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejection_classification() {
        let err = MoveError::from(RejectReason::NotDiagonal);
        assert!(err.is_rejection());
        assert!(!MoveError::UnknownPiece(PieceId(7)).is_rejection());
    }

    #[test]
    fn test_outcome_accessors() {
        let to = Cell::new(0, 5).unwrap();
        let step = MoveOutcome::Stepped { to };
        assert_eq!(step.destination(), to);
        assert_eq!(step.captured(), None);

        let jump = MoveOutcome::Captured {
            to,
            removed: PieceId(3),
        };
        assert_eq!(jump.captured(), Some(PieceId(3)));
    }
}
