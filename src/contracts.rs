//! Contract-based validation for draughts moves.
//!
//! Contracts define correctness through preconditions and postconditions,
//! formalizing the Hoare-style reasoning: {P} action {Q}.

use crate::action::{MoveAttempt, MoveError, RejectReason};
use crate::board::Board;
use crate::cell::Cell;
use crate::invariants::{DraughtsInvariants, InvariantSet};
use crate::rules;
use tracing::instrument;

// ─────────────────────────────────────────────────────────────
//  Contract Trait
// ─────────────────────────────────────────────────────────────

/// A contract defines preconditions and postconditions for state transitions.
///
/// - Precondition: {P(state, action)} - must hold before applying action
/// - Postcondition: {Q(before, after)} - must hold after applying action
pub trait Contract<S, A> {
    /// Checks preconditions before applying the action.
    fn pre(state: &S, action: &A) -> Result<(), MoveError>;

    /// Checks postconditions after applying the action.
    ///
    /// This verifies that the transition maintained system invariants.
    fn post(before: &S, after: &S) -> Result<(), MoveError>;
}

// ─────────────────────────────────────────────────────────────
//  Move Preconditions
// ─────────────────────────────────────────────────────────────

/// Precondition: The moving piece must be on the board.
pub struct PieceKnown;

impl PieceKnown {
    /// Checks the precondition.
    #[instrument(skip(board))]
    pub fn check(attempt: &MoveAttempt, board: &Board) -> Result<(), MoveError> {
        board.color_of(*attempt.piece()).map(|_| ())
    }
}

/// Precondition: The destination must lie within the board.
pub struct DestinationOnBoard;

impl DestinationOnBoard {
    /// Checks the precondition.
    #[instrument]
    pub fn check(attempt: &MoveAttempt) -> Result<(), MoveError> {
        Cell::new(*attempt.dest_col(), *attempt.dest_row())
            .map(|_| ())
            .ok_or_else(|| {
                RejectReason::OutOfBounds {
                    col: *attempt.dest_col(),
                    row: *attempt.dest_row(),
                }
                .into()
            })
    }
}

/// Precondition: The destination square must be free.
pub struct DestinationFree;

impl DestinationFree {
    /// Checks the precondition. The destination must already be on the
    /// board; call [`DestinationOnBoard`] first.
    #[instrument(skip(board))]
    pub fn check(attempt: &MoveAttempt, board: &Board) -> Result<(), MoveError> {
        let dest = Cell::new(*attempt.dest_col(), *attempt.dest_row()).ok_or(
            RejectReason::OutOfBounds {
                col: *attempt.dest_col(),
                row: *attempt.dest_row(),
            },
        )?;
        if board.piece_at(dest).is_some() {
            Err(RejectReason::DestinationOccupied(dest).into())
        } else {
            Ok(())
        }
    }
}

/// Composite precondition: the full ordered move policy.
///
/// Bounds, then occupancy, then step-or-jump geometry. There is no
/// turn-order precondition: either side may move any piece, matching the
/// reference behavior (a documented gap, not a feature).
pub struct LegalMove;

impl LegalMove {
    /// Validates all preconditions for a move.
    #[instrument(skip(board))]
    pub fn check(attempt: &MoveAttempt, board: &Board) -> Result<(), MoveError> {
        rules::evaluate_move(board, attempt).map(|_| ())
    }
}

// ─────────────────────────────────────────────────────────────
//  Move Contract (Pre + Post)
// ─────────────────────────────────────────────────────────────

/// Contract for move actions.
///
/// Preconditions: the ordered move policy ([`LegalMove`]).
/// Postconditions: board invariants hold after the mutation.
pub struct MoveContract;

impl Contract<Board, MoveAttempt> for MoveContract {
    fn pre(board: &Board, action: &MoveAttempt) -> Result<(), MoveError> {
        LegalMove::check(action, board)
    }

    fn post(_before: &Board, after: &Board) -> Result<(), MoveError> {
        DraughtsInvariants::check_all(after).map_err(|violations| {
            let descriptions = violations
                .iter()
                .map(|v| v.description.as_str())
                .collect::<Vec<_>>()
                .join("; ");
            MoveError::InvariantViolation(format!("Postcondition failed: {}", descriptions))
        })
    }
}
