//! Phase-specific typestate structs for a draughts game.
//!
//! Setup owns an adjustable board; starting the game yields the playing
//! phase. Draughts as modelled here never finishes on its own (no win
//! detection is in scope), so the playing phase mutates in place instead
//! of consuming itself on every move.

use crate::action::{MoveAttempt, MoveError, MoveOutcome};
use crate::board::Board;
use crate::cell::Cell;
use crate::contracts::{Contract, MoveContract};
use crate::rules;
use crate::types::{Color, Piece, PieceId};
use tracing::{info, instrument};

// ─────────────────────────────────────────────────────────────
//  Setup Phase
// ─────────────────────────────────────────────────────────────

/// Game in setup phase - the board can still be arranged.
///
/// [`GameSetup::standard`] gives the 20/20 starting layout; [`GameSetup::new`]
/// starts from an empty board for custom positions (mostly tests and
/// problem setups).
#[derive(Debug, Clone)]
pub struct GameSetup {
    board: Board,
}

impl GameSetup {
    /// Creates a setup phase with an empty board.
    #[instrument]
    pub fn new() -> Self {
        Self {
            board: Board::empty(),
        }
    }

    /// Creates a setup phase with the standard starting layout.
    #[instrument]
    pub fn standard() -> Self {
        Self {
            board: Board::standard(),
        }
    }

    /// Puts a piece on the board, returning its id.
    ///
    /// # Errors
    ///
    /// Rejects an occupied square.
    pub fn place(&mut self, color: Color, cell: Cell) -> Result<PieceId, MoveError> {
        self.board.place(color, cell)
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Starts the game (consumes setup, returns the playing phase).
    #[instrument(skip(self))]
    pub fn start(self) -> GameInProgress {
        GameInProgress { board: self.board }
    }
}

impl Default for GameSetup {
    fn default() -> Self {
        Self::standard()
    }
}

// ─────────────────────────────────────────────────────────────
//  Playing Phase
// ─────────────────────────────────────────────────────────────

/// Game in progress - accepts move attempts.
///
/// There is no turn tracking: the validator never asks whose turn it is
/// and either side may move any piece. This mirrors the reference
/// behavior and is deliberate; see the crate docs.
#[derive(Debug, Clone)]
pub struct GameInProgress {
    board: Board,
}

impl GameInProgress {
    /// Evaluates and applies one move attempt.
    ///
    /// Runs the move contract, then applies the accepted outcome: a
    /// capture removes the jumped piece before the mover relocates. A
    /// rejected attempt leaves the board byte-for-byte unchanged.
    ///
    /// Contract enforcement:
    /// - Preconditions checked always (the ordered move policy)
    /// - Postconditions (board invariants) checked in debug builds
    #[instrument(skip(self), fields(attempt = %attempt))]
    pub fn make_move(&mut self, attempt: MoveAttempt) -> Result<MoveOutcome, MoveError> {
        MoveContract::pre(&self.board, &attempt)?;
        let outcome = rules::evaluate_move(&self.board, &attempt)?;

        #[cfg(debug_assertions)]
        let before = self.board.clone();

        if let MoveOutcome::Captured { removed, .. } = outcome {
            self.board.remove(removed)?;
        }
        self.board.relocate(*attempt.piece(), outcome.destination())?;

        #[cfg(debug_assertions)]
        MoveContract::post(&before, &self.board)?;

        Ok(outcome)
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// All live pieces, for an initial-layout draw.
    pub fn pieces(&self) -> impl Iterator<Item = &Piece> {
        self.board.pieces()
    }

    /// Live pieces left for one color.
    pub fn remaining(&self, color: Color) -> u8 {
        self.board.remaining(color)
    }

    /// Restores the standard starting layout ("new game").
    ///
    /// All previously issued piece ids become unknown.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        info!("resetting board to the starting layout");
        self.board.reset();
    }
}
