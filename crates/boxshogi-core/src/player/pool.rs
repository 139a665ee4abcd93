//! Captured pool

use crate::error::{IllegalDrop, IllegalMove};
use crate::types::Piece;

use super::Player;

impl Player {
    /// Add a captured piece to the pool
    ///
    /// The piece must already belong to this player. It is demoted before
    /// being stored. `None` (an empty destination square) is rejected.
    pub fn capture(&mut self, piece: Option<Piece>) -> Result<(), IllegalMove> {
        let Some(mut piece) = piece else {
            return Err(IllegalMove::NothingToCapture);
        };
        debug_assert_eq!(piece.owner, self.side, "captured piece must change owner first");
        piece.demote();
        self.captured.push(piece);
        Ok(())
    }

    /// Remove and return the first pool piece matching `ch`, ignoring case
    pub fn free(&mut self, ch: char) -> Result<Piece, IllegalDrop> {
        let index = self.pool_index(ch).ok_or(IllegalDrop::NotInPool(ch))?;
        Ok(self.captured.remove(index))
    }

    /// Captured pieces in capture order
    #[inline]
    pub fn captured(&self) -> &[Piece] {
        &self.captured
    }

    pub(super) fn pool_index(&self, ch: char) -> Option<usize> {
        self.captured
            .iter()
            .position(|piece| piece.variant_char().eq_ignore_ascii_case(&ch))
    }
}
