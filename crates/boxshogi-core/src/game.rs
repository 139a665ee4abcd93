//! Game controller
//!
//! Drives one game sequentially: alternates turns, enforces that a player
//! in check answers it, and detects checkmate and the move-limit draw.

use crate::board::{BOARD_SIZE, Board};
use crate::config::RuleConfig;
use crate::error::{IllegalDrop, IllegalMove, RuleError};
use crate::player::{DropAttempt, EscapeMoves, Player};
use crate::types::{Side, Square};
use log::{debug, info};

/// State of the game after the last action
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    /// The side to move is in check and has at least one response
    Check,
    Checkmate { winner: Side },
    /// Both players used up the move limit
    Draw,
}

impl GameStatus {
    #[inline]
    pub fn is_over(self) -> bool {
        matches!(self, GameStatus::Checkmate { .. } | GameStatus::Draw)
    }
}

/// A single game
#[derive(Clone, Debug)]
pub struct Game {
    board: Board,
    /// Indexed by `Side::index`
    players: [Player; 2],
    turn: Side,
    /// Moves and drops made by both sides
    turns: u32,
    status: GameStatus,
    rules: RuleConfig,
}

impl Game {
    /// Standard starting position, Lower to move
    pub fn new(rules: RuleConfig) -> Self {
        let last = BOARD_SIZE - 1;
        Game {
            board: Board::standard(),
            players: [
                Player::with_rules(Side::Lower, Square::new(0, 0), rules),
                Player::with_rules(Side::Upper, Square::new(last, last), rules),
            ],
            turn: Side::Lower,
            turns: 0,
            status: GameStatus::InProgress,
            rules,
        }
    }

    /// Start from an arbitrary position; `None` when a side has no drive
    pub fn from_position(board: Board, turn: Side, rules: RuleConfig) -> Option<Self> {
        let lower = board.find_drive(Side::Lower)?;
        let upper = board.find_drive(Side::Upper)?;
        let mut game = Game {
            board,
            players: [
                Player::with_rules(Side::Lower, lower, rules),
                Player::with_rules(Side::Upper, upper, rules),
            ],
            turn,
            turns: 0,
            status: GameStatus::InProgress,
            rules,
        };
        for player in &mut game.players {
            player.refresh_check(&game.board);
        }
        if game.players[turn.index()].is_in_check() {
            game.status = GameStatus::Check;
        }
        Some(game)
    }

    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[inline]
    pub fn player(&self, side: Side) -> &Player {
        &self.players[side.index()]
    }

    #[inline]
    pub fn side_to_move(&self) -> Side {
        self.turn
    }

    #[inline]
    pub fn status(&self) -> GameStatus {
        self.status
    }

    #[inline]
    pub fn turns(&self) -> u32 {
        self.turns
    }

    /// Every legal response of the side to move
    pub fn legal_responses(&self) -> EscapeMoves {
        let active = &self.players[self.turn.index()];
        let passive = &self.players[self.turn.opposite().index()];
        active.find_escape_moves(&self.board, passive)
    }

    /// Move a piece for the side to move
    pub fn make_move(
        &mut self,
        from: Square,
        to: Square,
        promote: bool,
    ) -> Result<GameStatus, RuleError> {
        self.ensure_running()?;
        let mover = self.turn;
        let (active, _) = split_players(&mut self.players, mover);

        if active.is_in_check() && !move_answers_check(active, &self.board, from, to, promote) {
            return Err(IllegalMove::IgnoresCheck { from, to }.into());
        }

        let takes_drive = self
            .board
            .get(to)
            .is_some_and(|p| p.is_drive() && p.owner != mover);
        active.move_piece(&mut self.board, from, to, promote)?;

        Ok(self.finish_turn(takes_drive))
    }

    /// Drop a pool piece for the side to move
    pub fn make_drop(&mut self, ch: char, to: Square) -> Result<GameStatus, RuleError> {
        self.ensure_running()?;
        let (active, passive) = split_players(&mut self.players, self.turn);

        if active.is_in_check() {
            let answers = match active.try_drop(&self.board, ch, to, passive) {
                DropAttempt::Accepted(after) => !active.check(&after, None),
                DropAttempt::Rejected(reason) => return Err(reason.into()),
            };
            if !answers {
                return Err(IllegalDrop::IgnoresCheck { piece: ch, square: to }.into());
            }
        }

        active.drop_piece(&mut self.board, ch, to, passive)?;
        Ok(self.finish_turn(false))
    }

    fn ensure_running(&self) -> Result<(), RuleError> {
        if self.status.is_over() {
            return Err(RuleError::GameOver);
        }
        Ok(())
    }

    fn finish_turn(&mut self, took_drive: bool) -> GameStatus {
        let mover = self.turn;
        self.turns += 1;

        let (active, passive) = split_players(&mut self.players, mover);
        active.refresh_check(&self.board);
        let in_check = passive.refresh_check(&self.board);

        let status = if took_drive
            || (in_check && passive.find_escape_moves(&self.board, active).is_empty())
        {
            GameStatus::Checkmate { winner: mover }
        } else if self.turns >= self.rules.move_limit.saturating_mul(2) {
            GameStatus::Draw
        } else if in_check {
            GameStatus::Check
        } else {
            GameStatus::InProgress
        };

        self.status = status;
        self.turn = mover.opposite();
        if status.is_over() {
            info!("game over after {} turns: {:?}", self.turns, status);
        } else {
            debug!("turn {}: {:?} to move, {:?}", self.turns, self.turn, status);
        }
        status
    }
}

/// Mutable access to the side to act and the other side at once
fn split_players(players: &mut [Player; 2], side: Side) -> (&mut Player, &mut Player) {
    let [lower, upper] = players;
    match side {
        Side::Lower => (lower, upper),
        Side::Upper => (upper, lower),
    }
}

/// Whether the move is legal and leaves the mover's drive unattacked
///
/// Runs on copies of the player and the board, like the escape enumerator.
fn move_answers_check(
    player: &Player,
    board: &Board,
    from: Square,
    to: Square,
    promote: bool,
) -> bool {
    let mut trial_player = player.clone();
    let mut trial_board = board.clone();
    trial_player.move_piece(&mut trial_board, from, to, promote).is_ok()
        && !trial_player.check(&trial_board, None)
}
