//! Move and drop execution
//!
//! Both operations validate completely before the first mutation, so a
//! rejected request leaves the board and the player untouched.

use crate::board::Board;
use crate::error::{IllegalDrop, IllegalMove};
use crate::types::Square;
use log::debug;

use super::Player;

impl Player {
    /// Move a piece on the board
    ///
    /// An opposing piece on `to` changes owner and enters this player's
    /// pool. A Preview reaching the promotion row promotes even when
    /// `promote` is false.
    pub fn move_piece(
        &mut self,
        board: &mut Board,
        from: Square,
        to: Square,
        promote: bool,
    ) -> Result<(), IllegalMove> {
        let piece = self.validate_move(board, from, to, promote)?;
        self.validate_drive_check(board, from, to)?;

        let promote = promote || piece.must_promote(to, board.size());
        let displaced = board.move_piece(from, to, promote);

        if piece.is_drive() {
            self.drive_location = to;
        }

        if let Some(mut taken) = displaced {
            taken.switch_owner();
            self.capture(Some(taken))?;
            debug!("{:?} captured {:?} at {}", self.side, taken.kind, to);
        }

        self.move_count += 1;
        debug!(
            "{:?} moved {:?} {} -> {}{} (move {})",
            self.side,
            piece.kind,
            from,
            to,
            if promote { " promoting" } else { "" },
            self.move_count
        );
        Ok(())
    }

    /// Drop a pool piece matching `ch` onto `to`
    pub fn drop_piece(
        &mut self,
        board: &mut Board,
        ch: char,
        to: Square,
        opponent: &Player,
    ) -> Result<(), IllegalDrop> {
        self.validate_drop(board, ch, to, opponent)?;

        let piece = self.free(ch)?;
        board.set(to, Some(piece));
        debug!("{:?} dropped {:?} at {}", self.side, piece.kind, to);
        Ok(())
    }
}
