//! Player module
//!
//! A `Player` is one side of the game. It owns the captured pool and the
//! cached drive square, and provides the rules engine for its side:
//! validating and executing moves and drops, detecting check, and
//! enumerating responses to check.
//!
//! ## Module Structure
//! - `pool` - Captured pool (capture / free)
//! - `validation` - Move, drive-safety and drop validation
//! - `execution` - Move and drop execution
//! - `threat` - Check detection
//! - `escape` - King escapes and full response enumeration
//!
//! The board is never owned by a player; every operation borrows it.
//! Speculative simulations clone the board (and, for drops, the player),
//! so the authoritative state is never touched by an explored branch.

// Private modules
mod escape;
mod execution;
mod pool;
mod threat;
mod validation;


use crate::board::Board;
use crate::config::RuleConfig;
use crate::types::{Piece, Side, Square};
use log::warn;

pub use self::escape::{DropAttempt, DropResponse, EscapeMoves};

/// One side of the game
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Player {
    side: Side,
    /// Completed moves; drops are not counted
    move_count: u32,
    /// Cached result of the last `refresh_check`
    in_check: bool,
    /// Authoritative square of this side's drive piece
    drive_location: Square,
    /// Captured pieces in capture order, already demoted and owned by `side`
    captured: Vec<Piece>,
    rules: RuleConfig,
}

impl Player {
    /// Create a player whose drive stands on `drive_location`
    pub fn new(side: Side, drive_location: Square) -> Self {
        Self::with_rules(side, drive_location, RuleConfig::default())
    }

    pub fn with_rules(side: Side, drive_location: Square, rules: RuleConfig) -> Self {
        Player {
            side,
            move_count: 0,
            in_check: false,
            drive_location,
            captured: Vec::new(),
            rules,
        }
    }

    #[inline]
    pub fn side(&self) -> Side {
        self.side
    }

    #[inline]
    pub fn move_count(&self) -> u32 {
        self.move_count
    }

    #[inline]
    pub fn is_in_check(&self) -> bool {
        self.in_check
    }

    #[inline]
    pub fn drive_location(&self) -> Square {
        self.drive_location
    }

    #[inline]
    pub fn rules(&self) -> &RuleConfig {
        &self.rules
    }

    /// Recompute and cache whether the drive is attacked
    pub fn refresh_check(&mut self, board: &Board) -> bool {
        self.in_check = self.check(board, None);
        self.in_check
    }

    /// Compare the cached drive square against a full board scan
    pub fn verify_drive_location(&self, board: &Board) -> bool {
        let found = board.find_drive(self.side);
        if found != Some(self.drive_location) {
            warn!(
                "drive cache drift for {:?}: cached={} board={:?}",
                self.side, self.drive_location, found
            );
            return false;
        }
        true
    }
}
