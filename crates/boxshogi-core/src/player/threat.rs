//! Check detection

use crate::board::Board;
use crate::types::Square;

use super::Player;

impl Player {
    /// Whether any opposing piece can reach `at`
    ///
    /// `at` defaults to the cached drive square. Scans every square and asks
    /// each opposing piece for its destinations, so a call costs at most
    /// N² geometry evaluations.
    pub fn check(&self, board: &Board, at: Option<Square>) -> bool {
        let target = at.unwrap_or(self.drive_location);
        board.pieces().any(|(sq, piece)| {
            piece.owner != self.side && piece.possible_moves(board, sq).contains(&target)
        })
    }
}
