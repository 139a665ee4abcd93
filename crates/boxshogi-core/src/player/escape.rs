//! King escapes and full response enumeration
//!
//! Every candidate is tried on its own board copy; drops additionally run
//! against a copy of the player so the candidate's pool removal is thrown
//! away with the branch.

use std::collections::{BTreeMap, BTreeSet};

use crate::board::Board;
use crate::error::IllegalDrop;
use crate::types::{Piece, Square};
use log::{debug, trace, warn};

use super::Player;

/// A legal drop answering the current position
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DropResponse {
    pub piece: Piece,
    pub square: Square,
}

/// Outcome of a speculative drop
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DropAttempt {
    /// The drop is legal; holds the board after it
    Accepted(Board),
    /// The drop broke a rule; not a response
    Rejected(IllegalDrop),
}

/// Every legal response of a player
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EscapeMoves {
    pub drops: BTreeSet<DropResponse>,
    /// destination → source, covering drive and teammate moves
    pub moves: BTreeMap<Square, Square>,
}

impl EscapeMoves {
    /// No move and no drop: the position is checkmate when in check
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.drops.is_empty() && self.moves.is_empty()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.drops.len() + self.moves.len()
    }

    pub fn contains_move(&self, from: Square, to: Square) -> bool {
        self.moves.get(&to) == Some(&from)
    }

    /// Drop lookup by drop character, ignoring case
    pub fn contains_drop(&self, ch: char, square: Square) -> bool {
        self.drops.iter().any(|drop| {
            drop.square == square && drop.piece.variant_char().eq_ignore_ascii_case(&ch)
        })
    }

    pub fn into_parts(self) -> (BTreeSet<DropResponse>, BTreeMap<Square, Square>) {
        (self.drops, self.moves)
    }
}

impl Player {
    /// Drive destinations that are not attacked after the move
    ///
    /// An empty set means the drive itself cannot move; teammate moves and
    /// drops are not considered here.
    pub fn checkmate(&self, board: &Board) -> BTreeSet<Square> {
        self.safe_drive_moves(board).into_iter().collect()
    }

    /// All legal responses: drive moves, teammate moves and drops
    ///
    /// Drive candidates are filtered twice: by simulation, and against every
    /// square an opposing piece can currently reach. Teammate moves with the
    /// same destination overwrite each other and any drive move there.
    pub fn find_escape_moves(&self, board: &Board, opponent: &Player) -> EscapeMoves {
        let drive = self.drive_location;
        let mut drive_moves: BTreeMap<Square, Square> = self
            .safe_drive_moves(board)
            .into_iter()
            .map(|to| (to, drive))
            .collect();

        let mut banned = BTreeSet::new();
        let mut team_moves = BTreeMap::new();
        let mut drops = BTreeSet::new();

        // Pool pieces are demoted and owned by us, so equal pieces give equal drops.
        let mut pool: Vec<Piece> = self.captured.clone();
        pool.sort();
        pool.dedup();

        for sq in board.squares() {
            match board.get(sq) {
                Some(piece) if piece.owner != self.side => {
                    banned.extend(piece.possible_moves(board, sq));
                }
                Some(piece) => {
                    if sq == drive {
                        continue;
                    }
                    for to in piece.possible_moves(board, sq) {
                        let mut trial = board.clone();
                        trial.move_piece(sq, to, false);
                        if !self.check(&trial, None) {
                            team_moves.insert(to, sq);
                        }
                    }
                }
                None => {
                    for &candidate in &pool {
                        match self.try_drop(board, candidate.variant_char(), sq, opponent) {
                            DropAttempt::Accepted(after) => {
                                if !self.check(&after, None) {
                                    drops.insert(DropResponse { piece: candidate, square: sq });
                                }
                            }
                            DropAttempt::Rejected(reason) => {
                                trace!("skip drop {:?} at {}: {}", candidate.kind, sq, reason);
                            }
                        }
                    }
                }
            }
        }

        drive_moves.retain(|to, _| !banned.contains(to));
        drive_moves.extend(team_moves);

        debug!(
            "{:?} responses: {} moves, {} drops",
            self.side,
            drive_moves.len(),
            drops.len()
        );
        EscapeMoves {
            drops,
            moves: drive_moves,
        }
    }

    /// Drop `ch` on `to` using copies of this player and the board
    pub fn try_drop(&self, board: &Board, ch: char, to: Square, opponent: &Player) -> DropAttempt {
        let mut trial_player = self.clone();
        let mut trial_board = board.clone();
        match trial_player.drop_piece(&mut trial_board, ch, to, opponent) {
            Ok(()) => DropAttempt::Accepted(trial_board),
            Err(reason) => DropAttempt::Rejected(reason),
        }
    }

    fn safe_drive_moves(&self, board: &Board) -> Vec<Square> {
        let from = self.drive_location;
        let Some(drive) = board.get(from).filter(|p| p.is_drive() && p.owner == self.side) else {
            warn!("{:?} drive not found at cached square {}", self.side, from);
            return Vec::new();
        };

        drive
            .possible_moves(board, from)
            .into_iter()
            .filter(|&to| {
                let mut trial = board.clone();
                trial.move_piece(from, to, false);
                !self.check(&trial, Some(to))
            })
            .collect()
    }
}
