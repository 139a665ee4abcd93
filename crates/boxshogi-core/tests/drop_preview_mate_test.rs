//! Preview drop-mate rule played through `Game`

use boxshogi_core::{
    Board, Game, GameStatus, IllegalDrop, Piece, PieceKind, RuleConfig, RuleError, Side, Square,
};

fn sq(row: u8, col: u8) -> Square {
    Square::new(row, col)
}

fn place(board: &mut Board, row: u8, col: u8, kind: PieceKind, owner: Side) {
    board.set(sq(row, col), Some(Piece::new(kind, owner)));
}

/// Upper drive on (4,0) hemmed in, Lower holding one preview, Lower to move
///
/// The Lower Shield on (2,1) covers (3,0) and (3,1); the Governance on
/// (2,3) covers (4,1). The preview is won on the first move.
fn hemmed_drive_game() -> Game {
    let mut board = Board::new(5);
    place(&mut board, 4, 0, PieceKind::Drive, Side::Upper);
    place(&mut board, 2, 2, PieceKind::Preview, Side::Upper);
    place(&mut board, 2, 1, PieceKind::Shield, Side::Lower);
    place(&mut board, 2, 3, PieceKind::Governance, Side::Lower);
    place(&mut board, 1, 3, PieceKind::Notes, Side::Lower);
    place(&mut board, 0, 4, PieceKind::Drive, Side::Lower);

    let mut game = Game::from_position(board, Side::Lower, RuleConfig::default()).unwrap();
    assert_eq!(game.make_move(sq(2, 1), sq(2, 2), false), Ok(GameStatus::InProgress));
    assert_eq!(game.player(Side::Lower).captured(), &[Piece::new(PieceKind::Preview, Side::Lower)]);

    // (4,1) is covered, so the drive steps up and is chased back
    assert_eq!(game.make_move(sq(4, 0), sq(3, 0), false), Ok(GameStatus::InProgress));
    assert_eq!(game.make_move(sq(2, 2), sq(2, 1), false), Ok(GameStatus::Check));
    assert_eq!(game.make_move(sq(3, 0), sq(4, 0), false), Ok(GameStatus::InProgress));
    game
}

#[test]
fn test_preview_drop_mate_rejected() {
    let mut game = hemmed_drive_game();
    assert_eq!(game.side_to_move(), Side::Lower);

    assert_eq!(
        game.make_drop('p', sq(3, 0)),
        Err(RuleError::Drop(IllegalDrop::PreviewMate(sq(3, 0))))
    );
    // Rejection keeps the turn and the pool
    assert_eq!(game.side_to_move(), Side::Lower);
    assert_eq!(game.player(Side::Lower).captured().len(), 1);

    // Not a check, but the drive is still left without a safe step
    assert_eq!(
        game.make_drop('p', sq(1, 0)),
        Err(RuleError::Drop(IllegalDrop::PreviewMate(sq(1, 0))))
    );
    assert_eq!(game.player(Side::Lower).captured().len(), 1);
}

#[test]
fn test_preview_drop_check_with_escape_allowed() {
    let mut game = hemmed_drive_game();
    // Free (4,1) and let the drive take it
    game.make_move(sq(2, 3), sq(0, 1), false).unwrap();
    game.make_move(sq(4, 0), sq(4, 1), false).unwrap();

    // Check from (3,1); the drive can still retreat to (4,0)
    assert_eq!(game.make_drop('p', sq(3, 1)), Ok(GameStatus::Check));
    let responses = game.legal_responses();
    assert!(responses.contains_move(sq(4, 1), sq(4, 0)));
    assert!(!responses.contains_move(sq(4, 1), sq(3, 1)));
}
