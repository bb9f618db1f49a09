//! Strictly Draughts - pure draughts (checkers) game logic
//!
//! This library holds the board state and move validator behind a
//! mouse-driven drag-and-drop front end. The front end is an external
//! collaborator: it implements [`BoardRenderer`] and feeds press/release
//! events through a [`DragSession`]; the core answers with accepted
//! outcomes or rejections to revert.
//!
//! # Rules in scope
//!
//! A move is a one-cell diagonal step onto a free square, or a two-cell
//! diagonal jump over an enemy piece, which is captured. Nothing else:
//! no turn alternation (either side may move any piece - a deliberate
//! gap inherited from the reference behavior), no mandatory captures,
//! no multi-jump chains, no kings, no win detection.
//!
//! # Example
//!
//! ```
//! use strictly_draughts::{Cell, Color, GameSetup, MoveAttempt, MoveOutcome};
//!
//! # fn example() -> Result<(), strictly_draughts::MoveError> {
//! let mut setup = GameSetup::new();
//! let black = setup.place(Color::Black, Cell::new(2, 3).unwrap())?;
//! setup.place(Color::White, Cell::new(1, 4).unwrap())?;
//!
//! let mut game = setup.start();
//! let outcome = game.make_move(MoveAttempt::new(
//!     black,
//!     Cell::new(2, 3).unwrap(),
//!     0,
//!     5,
//! ))?;
//! assert!(matches!(outcome, MoveOutcome::Captured { .. }));
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod action;
mod board;
mod cell;
mod contracts;
mod game;
mod invariants;
mod renderer;
mod rules;
mod types;

// Crate-level exports - Domain types
pub use cell::{BOARD_SPAN, Cell};
pub use types::{Color, Piece, PieceId};

// Crate-level exports - Board state
pub use board::{Board, STARTING_PIECES};

// Crate-level exports - Moves
pub use action::{MoveAttempt, MoveError, MoveOutcome, RejectReason};
pub use rules::{evaluate_move, is_simple_step, jump_midpoint};

// Crate-level exports - Contracts and invariants
pub use contracts::{
    Contract, DestinationFree, DestinationOnBoard, LegalMove, MoveContract, PieceKnown,
};
pub use invariants::{
    DarkSquaresInvariant, DraughtsInvariants, IndexConsistentInvariant, Invariant, InvariantSet,
    InvariantViolation, RosterCountsInvariant,
};

// Crate-level exports - Game phases and the renderer seam
pub use game::{GameInProgress, GameSetup};
pub use renderer::{BoardRenderer, DragSession, DragStart};
