//! The seam between the game core and a front end.
//!
//! Any UI layer (immediate-mode, retained-mode, web canvas) drives the
//! core through the same protocol: report a press, report a release
//! snapped to the nearest square, and draw what the core says. The core
//! never draws; the renderer never judges legality.

use crate::action::{MoveAttempt, MoveError, MoveOutcome};
use crate::cell::Cell;
use crate::game::GameInProgress;
use crate::types::{Color, Piece, PieceId};
use tracing::{debug, instrument, warn};

/// Drawing and bookkeeping primitives a front end must provide.
///
/// Callbacks are fired by [`DragSession`] after the board has already
/// been mutated, so a renderer can always redraw from the callback
/// arguments alone.
pub trait BoardRenderer {
    /// A full layout to draw, after session start or a new game.
    fn board_reset(&mut self, pieces: &[Piece]);

    /// A piece settled on a new square.
    fn piece_moved(&mut self, id: PieceId, to: Cell);

    /// A captured piece left the board.
    fn piece_removed(&mut self, id: PieceId);

    /// A rejected drag: snap the piece back to its source square.
    fn piece_reverted(&mut self, id: PieceId, at: Cell);

    /// Remaining-piece counters changed.
    fn counts_changed(&mut self, black: u8, white: u8);
}

/// A pending move: the value carried from drag begin to drag end.
///
/// Obtained from [`DragSession::press`] and handed back to
/// [`DragSession::release`]. Making this an explicit value (rather than
/// a "currently dragged piece" slot on the session) means an interleaved
/// or abandoned drag cannot corrupt shared state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_getters::Getters)]
pub struct DragStart {
    /// The piece being dragged.
    piece: PieceId,
    /// Where it was when the drag began.
    source: Cell,
}

/// Drives drag-and-drop input through the validator and keeps a renderer
/// in sync with the board.
///
/// Motion events between press and release never reach the core; the
/// piece's recorded square stays its drag-begin source until a release
/// is accepted.
#[derive(Debug)]
pub struct DragSession<R> {
    game: GameInProgress,
    renderer: R,
}

impl<R: BoardRenderer> DragSession<R> {
    /// Wraps a game, immediately feeding the renderer the initial layout
    /// and counters.
    #[instrument(skip(game, renderer))]
    pub fn new(game: GameInProgress, renderer: R) -> Self {
        let mut session = Self { game, renderer };
        session.announce_layout();
        session
    }

    /// The underlying game.
    pub fn game(&self) -> &GameInProgress {
        &self.game
    }

    /// The renderer.
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    /// Records a drag begin: captures the piece's current square.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::UnknownPiece`] for an id the board did not
    /// issue (or one already captured).
    #[instrument(skip(self))]
    pub fn press(&self, piece: PieceId) -> Result<DragStart, MoveError> {
        let source = self.game.board().cell_of(piece)?;
        debug!(%piece, %source, "drag started");
        Ok(DragStart { piece, source })
    }

    /// Completes a drag: validates the release square and applies or
    /// reverts.
    ///
    /// `col`/`row` are the release coordinates snapped to the nearest
    /// square by the renderer; they may lie off the board. On acceptance
    /// the renderer is told where the piece settled and, for a capture,
    /// which piece to erase. On rejection the renderer is told to snap
    /// the piece back to its source.
    ///
    /// # Errors
    ///
    /// Passes through the validator's [`MoveError`]; rejections have
    /// already triggered the revert callback when this returns.
    #[instrument(skip(self), fields(piece = %start.piece, source = %start.source))]
    pub fn release(
        &mut self,
        start: DragStart,
        col: i16,
        row: i16,
    ) -> Result<MoveOutcome, MoveError> {
        let attempt = MoveAttempt::new(start.piece, start.source, col, row);
        match self.game.make_move(attempt) {
            Ok(outcome) => {
                self.renderer.piece_moved(start.piece, outcome.destination());
                if let Some(removed) = outcome.captured() {
                    self.renderer.piece_removed(removed);
                    self.announce_counts();
                }
                Ok(outcome)
            }
            Err(err) if err.is_rejection() => {
                debug!(%err, "move rejected, reverting");
                self.renderer.piece_reverted(start.piece, start.source);
                Err(err)
            }
            Err(err) => {
                warn!(%err, "move failed");
                Err(err)
            }
        }
    }

    /// Starts a new game: restores the starting layout and redraws.
    #[instrument(skip(self))]
    pub fn new_game(&mut self) {
        self.game.reset();
        self.announce_layout();
    }

    fn announce_layout(&mut self) {
        let pieces: Vec<Piece> = self.game.pieces().copied().collect();
        self.renderer.board_reset(&pieces);
        self.announce_counts();
    }

    fn announce_counts(&mut self) {
        self.renderer.counts_changed(
            self.game.remaining(Color::Black),
            self.game.remaining(Color::White),
        );
    }
}
