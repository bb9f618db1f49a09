//! Tests for the move validator: the ordered policy and its edge cases.

use strictly_draughts::{
    Cell, Color, GameInProgress, GameSetup, MoveAttempt, MoveError, MoveOutcome, RejectReason,
};

fn cell(col: i16, row: i16) -> Cell {
    Cell::new(col, row).unwrap()
}

fn standard_game() -> GameInProgress {
    GameSetup::standard().start()
}

#[test]
fn test_simple_step_into_open_row() {
    // Fresh board: black at (1,2) wants (0,3), but (0,3) starts occupied
    // by black. Vacate it with a legal step first, then take it.
    let mut game = standard_game();
    let blocker = game.board().piece_at(cell(0, 3)).unwrap();
    game.make_move(MoveAttempt::new(blocker, cell(0, 3), 1, 4))
        .unwrap();

    let mover = game.board().piece_at(cell(1, 2)).unwrap();
    let outcome = game
        .make_move(MoveAttempt::new(mover, cell(1, 2), 0, 3))
        .unwrap();

    assert_eq!(outcome, MoveOutcome::Stepped { to: cell(0, 3) });
    assert_eq!(outcome.captured(), None);
    assert_eq!(game.board().piece_at(cell(0, 3)), Some(mover));
    assert_eq!(game.board().cell_of(mover).unwrap(), cell(0, 3));
}

#[test]
fn test_accepted_steps_are_exactly_one_diagonal() {
    let mut setup = GameSetup::new();
    let id = setup.place(Color::Black, cell(4, 5)).unwrap();
    let mut game = setup.start();

    let outcome = game
        .make_move(MoveAttempt::new(id, cell(4, 5), 5, 6))
        .unwrap();

    let source = cell(4, 5);
    let (dc, dr) = source.delta(outcome.destination());
    assert_eq!((dc.abs(), dr.abs()), (1, 1));
    assert_eq!(game.board().len(), 1);
}

#[test]
fn test_black_jumps_white_and_captures() {
    // Scenario: black at (2,3) jumps to (0,5) over white at (1,4).
    let mut setup = GameSetup::new();
    let black = setup.place(Color::Black, cell(2, 3)).unwrap();
    let white = setup.place(Color::White, cell(1, 4)).unwrap();
    let mut game = setup.start();

    let outcome = game
        .make_move(MoveAttempt::new(black, cell(2, 3), 0, 5))
        .unwrap();

    assert_eq!(
        outcome,
        MoveOutcome::Captured {
            to: cell(0, 5),
            removed: white
        }
    );
    assert_eq!(game.board().piece_at(cell(1, 4)), None);
    assert_eq!(game.board().piece_at(cell(0, 5)), Some(black));
    assert_eq!(game.remaining(Color::White), 0);
    assert_eq!(game.remaining(Color::Black), 1);
}

#[test]
fn test_destination_off_the_board_is_rejected() {
    // Scenario: destination (12,2) is outside the 0-9 range.
    let mut game = standard_game();
    let id = game.board().piece_at(cell(9, 2)).unwrap();
    let before = game.board().clone();

    let err = game
        .make_move(MoveAttempt::new(id, cell(9, 2), 12, 2))
        .unwrap_err();

    assert!(matches!(
        err,
        MoveError::Rejected(RejectReason::OutOfBounds { col: 12, row: 2 })
    ));
    assert_eq!(game.board(), &before);
}

#[test]
fn test_occupied_destination_rejected_regardless_of_color_or_distance() {
    let mut game = standard_game();
    let id = game.board().piece_at(cell(1, 2)).unwrap();

    // Same color, adjacent.
    let err = game
        .make_move(MoveAttempt::new(id, cell(1, 2), 0, 3))
        .unwrap_err();
    assert!(matches!(
        err,
        MoveError::Rejected(RejectReason::DestinationOccupied(_))
    ));

    // Opposite color, far away.
    let err = game
        .make_move(MoveAttempt::new(id, cell(1, 2), 2, 7))
        .unwrap_err();
    assert!(matches!(
        err,
        MoveError::Rejected(RejectReason::DestinationOccupied(_))
    ));
}

#[test]
fn test_jump_over_empty_square_is_rejected() {
    // Scenario: two-cell diagonal with nothing in between.
    let mut setup = GameSetup::new();
    let id = setup.place(Color::Black, cell(2, 3)).unwrap();
    let mut game = setup.start();
    let before = game.board().clone();

    let err = game
        .make_move(MoveAttempt::new(id, cell(2, 3), 4, 5))
        .unwrap_err();

    assert!(matches!(
        err,
        MoveError::Rejected(RejectReason::NoPieceToJump(_))
    ));
    // No capture, no relocation.
    assert_eq!(game.board(), &before);
}

#[test]
fn test_jump_over_own_color_is_rejected() {
    let mut setup = GameSetup::new();
    let mover = setup.place(Color::White, cell(5, 6)).unwrap();
    setup.place(Color::White, cell(4, 5)).unwrap();
    let mut game = setup.start();

    let err = game
        .make_move(MoveAttempt::new(mover, cell(5, 6), 3, 4))
        .unwrap_err();

    assert!(matches!(
        err,
        MoveError::Rejected(RejectReason::OwnPieceInPath(_))
    ));
    assert_eq!(game.remaining(Color::White), 2);
}

#[test]
fn test_straight_and_long_moves_are_rejected() {
    let mut setup = GameSetup::new();
    let id = setup.place(Color::Black, cell(4, 5)).unwrap();
    let mut game = setup.start();

    for (col, row) in [(4, 6), (6, 5), (7, 8), (5, 7)] {
        let err = game
            .make_move(MoveAttempt::new(id, cell(4, 5), col, row))
            .unwrap_err();
        assert!(
            matches!(err, MoveError::Rejected(RejectReason::NotDiagonal)),
            "({col}, {row}) should be a geometry rejection"
        );
    }
    assert_eq!(game.board().cell_of(id).unwrap(), cell(4, 5));
}

#[test]
fn test_no_turn_enforcement() {
    // Either side may move at any time; two black moves in a row and a
    // white move are all accepted.
    let mut game = standard_game();

    let b1 = game.board().piece_at(cell(0, 3)).unwrap();
    game.make_move(MoveAttempt::new(b1, cell(0, 3), 1, 4))
        .unwrap();

    let b2 = game.board().piece_at(cell(4, 3)).unwrap();
    game.make_move(MoveAttempt::new(b2, cell(4, 3), 5, 4))
        .unwrap();

    let w = game.board().piece_at(cell(2, 7)).unwrap();
    game.make_move(MoveAttempt::new(w, cell(2, 7), 1, 6))
        .unwrap_err();
    // (1,6) is occupied by white at start; pick an open square instead.
    let w = game.board().piece_at(cell(1, 6)).unwrap();
    game.make_move(MoveAttempt::new(w, cell(1, 6), 2, 5))
        .unwrap();
}

#[test]
fn test_unknown_piece_after_capture_is_fatal_not_rejection() {
    let mut setup = GameSetup::new();
    let black = setup.place(Color::Black, cell(2, 3)).unwrap();
    let white = setup.place(Color::White, cell(1, 4)).unwrap();
    let mut game = setup.start();

    game.make_move(MoveAttempt::new(black, cell(2, 3), 0, 5))
        .unwrap();

    // The captured id no longer exists; moving it is a fault, not a
    // revert-and-continue rejection.
    let err = game
        .make_move(MoveAttempt::new(white, cell(1, 4), 0, 5))
        .unwrap_err();
    assert!(matches!(err, MoveError::UnknownPiece(_)));
    assert!(!err.is_rejection());
}
