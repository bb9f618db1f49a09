//! Move legality rules for draughts.
//!
//! Pure geometry predicates live in [`step`] and [`jump`]; the ordered
//! validation policy that combines them with board occupancy lives in
//! [`evaluate_move`]. Rules are separated from board storage so they can
//! be composed into the contract system.
//!
//! Turn order is deliberately not part of the rules: the validator never
//! asks whose turn it is, and either side may move any piece. This gap is
//! inherited from the reference behavior, not an oversight.

pub mod jump;
pub mod step;

pub use jump::jump_midpoint;
pub use step::is_simple_step;

use crate::action::{MoveAttempt, MoveError, MoveOutcome, RejectReason};
use crate::board::Board;
use crate::cell::Cell;
use tracing::instrument;

/// Evaluates a proposed move against the board, in policy order:
/// bounds, occupancy, simple step, jump.
///
/// On success the returned [`MoveOutcome`] says where the piece lands
/// and, for a jump, which piece must be removed. The board is not
/// mutated here; applying the outcome is the game's job.
///
/// # Errors
///
/// [`MoveError::UnknownPiece`] if the attempt names an id that is not on
/// the board; [`MoveError::Rejected`] for every refused geometry.
#[instrument(skip(board), fields(attempt = %attempt))]
pub fn evaluate_move(board: &Board, attempt: &MoveAttempt) -> Result<MoveOutcome, MoveError> {
    let mover = board.color_of(*attempt.piece())?;
    let source = *attempt.source();

    let dest = Cell::new(*attempt.dest_col(), *attempt.dest_row()).ok_or(
        RejectReason::OutOfBounds {
            col: *attempt.dest_col(),
            row: *attempt.dest_row(),
        },
    )?;

    if board.piece_at(dest).is_some() {
        return Err(RejectReason::DestinationOccupied(dest).into());
    }

    if is_simple_step(source, dest) {
        return Ok(MoveOutcome::Stepped { to: dest });
    }

    if let Some(mid) = jump_midpoint(source, dest) {
        return match board.piece_at(mid) {
            None => Err(RejectReason::NoPieceToJump(mid).into()),
            Some(jumped) if board.color_of(jumped)? == mover => {
                Err(RejectReason::OwnPieceInPath(mid).into())
            }
            Some(jumped) => Ok(MoveOutcome::Captured {
                to: dest,
                removed: jumped,
            }),
        };
    }

    Err(RejectReason::NotDiagonal.into())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Color;

    fn cell(col: i16, row: i16) -> Cell {
        Cell::new(col, row).unwrap()
    }

    #[test]
    fn test_policy_order_bounds_before_geometry() {
        let mut board = Board::empty();
        let id = board.place(Color::Black, cell(1, 2)).unwrap();

        let attempt = MoveAttempt::new(id, cell(1, 2), 12, 2);
        assert!(matches!(
            evaluate_move(&board, &attempt),
            Err(MoveError::Rejected(RejectReason::OutOfBounds { col: 12, row: 2 }))
        ));
    }

    #[test]
    fn test_occupied_destination_rejected_at_any_distance() {
        let mut board = Board::empty();
        let id = board.place(Color::Black, cell(1, 2)).unwrap();
        board.place(Color::Black, cell(5, 8)).unwrap();

        // Same color, nowhere near a legal delta: occupancy wins.
        let attempt = MoveAttempt::new(id, cell(1, 2), 5, 8);
        assert!(matches!(
            evaluate_move(&board, &attempt),
            Err(MoveError::Rejected(RejectReason::DestinationOccupied(_)))
        ));
    }

    #[test]
    fn test_empty_midpoint_rejected() {
        let mut board = Board::empty();
        let id = board.place(Color::Black, cell(2, 3)).unwrap();

        let attempt = MoveAttempt::new(id, cell(2, 3), 0, 5);
        assert!(matches!(
            evaluate_move(&board, &attempt),
            Err(MoveError::Rejected(RejectReason::NoPieceToJump(_)))
        ));
    }

    #[test]
    fn test_own_color_midpoint_rejected() {
        let mut board = Board::empty();
        let id = board.place(Color::Black, cell(2, 3)).unwrap();
        board.place(Color::Black, cell(1, 4)).unwrap();

        let attempt = MoveAttempt::new(id, cell(2, 3), 0, 5);
        assert!(matches!(
            evaluate_move(&board, &attempt),
            Err(MoveError::Rejected(RejectReason::OwnPieceInPath(_)))
        ));
    }

    #[test]
    fn test_jump_identifies_captured_piece() {
        let mut board = Board::empty();
        let black = board.place(Color::Black, cell(2, 3)).unwrap();
        let white = board.place(Color::White, cell(1, 4)).unwrap();

        let attempt = MoveAttempt::new(black, cell(2, 3), 0, 5);
        let outcome = evaluate_move(&board, &attempt).unwrap();
        assert_eq!(outcome.captured(), Some(white));
        assert_eq!(outcome.destination(), cell(0, 5));
    }

    #[test]
    fn test_unknown_piece_is_fatal() {
        let board = Board::empty();
        let attempt = MoveAttempt::new(crate::types::PieceId(42), cell(1, 2), 0, 3);
        assert!(matches!(
            evaluate_move(&board, &attempt),
            Err(MoveError::UnknownPiece(_))
        ));
    }
}
