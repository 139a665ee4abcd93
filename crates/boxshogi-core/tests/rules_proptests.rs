//! Property tests for rule validation and speculative enumeration

use boxshogi_core::{Board, Game, Player, RuleConfig, Side, Square};
use proptest::prelude::*;
use rand::{Rng, SeedableRng};
use rand_xoshiro::Xoshiro256PlusPlus;

fn arb_square() -> impl Strategy<Value = Square> {
    (0u8..5, 0u8..5).prop_map(|(row, col)| Square::new(row, col))
}

fn arb_side() -> impl Strategy<Value = Side> {
    prop::sample::select(Side::ALL.to_vec())
}

/// A position a few random plies after the start
fn scrambled_game(seed: u64, plies: usize) -> Game {
    let mut game = Game::new(RuleConfig::default());
    let mut rng = Xoshiro256PlusPlus::seed_from_u64(seed);
    for _ in 0..plies {
        if game.status().is_over() {
            break;
        }
        let moves = game.legal_responses().moves;
        if moves.is_empty() {
            break;
        }
        let (&to, &from) = moves.iter().nth(rng.random_range(0..moves.len())).unwrap();
        if game.make_move(from, to, false).is_err() {
            break;
        }
    }
    game
}

proptest! {
    #![proptest_config(ProptestConfig { cases: 64, .. ProptestConfig::default() })]

    /// A rejected move leaves both the board and the player untouched
    #[test]
    fn prop_rejected_move_is_atomic(
        from in arb_square(),
        to in arb_square(),
        promote in any::<bool>(),
        side in arb_side(),
    ) {
        let mut board = Board::standard();
        let drive = board.find_drive(side).unwrap();
        let mut player = Player::new(side, drive);
        let board_before = board.clone();
        let player_before = player.clone();

        match player.move_piece(&mut board, from, to, promote) {
            Ok(()) => {
                prop_assert_eq!(player.move_count(), 1);
                prop_assert!(board.is_empty_at(from));
                prop_assert_eq!(board.get(to).map(|p| p.owner), Some(side));
            }
            Err(_) => {
                prop_assert_eq!(&board, &board_before);
                prop_assert_eq!(&player, &player_before);
            }
        }
    }

    /// Check detection only reads: a copy of the board gives the same answer
    #[test]
    fn prop_check_is_pure(seed in any::<u64>(), plies in 0usize..12, at in arb_square()) {
        let game = scrambled_game(seed, plies);
        let board = game.board().clone();
        for side in Side::ALL {
            let player = game.player(side);
            prop_assert_eq!(player.check(game.board(), Some(at)), player.check(&board, Some(at)));
            prop_assert_eq!(player.check(game.board(), None), player.is_in_check());
        }
        prop_assert_eq!(game.board(), &board);
    }

    /// Enumerating responses never changes the real position
    #[test]
    fn prop_escape_enumeration_is_isolated(seed in any::<u64>(), plies in 0usize..12) {
        let game = scrambled_game(seed, plies);
        let before = game.clone();
        let side = game.side_to_move();
        let escapes = game.player(side).find_escape_moves(game.board(), game.player(side.opposite()));

        prop_assert_eq!(game.board(), before.board());
        prop_assert_eq!(game.player(side), before.player(side));
        prop_assert_eq!(game.player(side.opposite()), before.player(side.opposite()));

        // Every drive escape is also reported by the drive-only query
        let drive = game.player(side).drive_location();
        let drive_only = game.player(side).checkmate(game.board());
        for (to, from) in &escapes.moves {
            if *from == drive {
                prop_assert!(drive_only.contains(to));
            }
        }
    }
}
