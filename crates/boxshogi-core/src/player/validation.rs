//! Move and drop validation
//!
//! All checks here are pure reads. Each validator returns the first failing
//! rule in a fixed order, so callers can rely on which error wins when a
//! request breaks several rules at once.

use crate::board::Board;
use crate::error::{IllegalDrop, IllegalMove};
use crate::types::{Piece, PieceKind, Square};

use super::Player;

impl Player {
    /// Validate a board move and return the moving piece
    ///
    /// Order: occupied source, ownership, reachability, no self-capture,
    /// then promotion eligibility.
    pub fn validate_move(
        &self,
        board: &Board,
        from: Square,
        to: Square,
        promote: bool,
    ) -> Result<Piece, IllegalMove> {
        let piece = board.get(from).ok_or(IllegalMove::EmptySource(from))?;

        if piece.owner != self.side {
            return Err(IllegalMove::NotOwner {
                square: from,
                owner: piece.owner,
            });
        }

        if !piece.possible_moves(board, from).contains(&to) {
            return Err(IllegalMove::Unreachable { from, to });
        }

        if board.get(to).is_some_and(|occupant| occupant.owner == self.side) {
            return Err(IllegalMove::SelfCapture(to));
        }

        if promote && !piece.may_promote(from, to, board.size()) {
            return Err(IllegalMove::InvalidPromotion { from, to });
        }

        Ok(piece)
    }

    /// Reject a drive move that lands on an attacked square
    ///
    /// Only runs while the drive is not already attacked on `from`. Escapes
    /// from check are filtered by `find_escape_moves` instead, unless
    /// `RuleConfig::strict_drive_safety` is set.
    pub fn validate_drive_check(
        &self,
        board: &Board,
        from: Square,
        to: Square,
    ) -> Result<(), IllegalMove> {
        if !board.get(from).is_some_and(Piece::is_drive) {
            return Ok(());
        }
        if !self.rules.strict_drive_safety && self.check(board, Some(from)) {
            return Ok(());
        }

        let mut trial = board.clone();
        trial.move_piece(from, to, false);
        if self.check(&trial, Some(to)) {
            return Err(IllegalMove::IntoCheck(to));
        }
        Ok(())
    }

    /// Validate a drop and return the pool piece that would be placed
    ///
    /// Order: on-board destination, preview column exclusivity, preview
    /// promotion row, empty destination, non-empty pool, matching pool
    /// piece, then the preview drop-mate prohibition. The last one rejects
    /// any preview drop after which the opponent's drive has no safe step.
    pub fn validate_drop(
        &self,
        board: &Board,
        ch: char,
        to: Square,
        opponent: &Player,
    ) -> Result<Piece, IllegalDrop> {
        if !board.contains(to) {
            return Err(IllegalDrop::OffBoard(to));
        }

        if PieceKind::from_char(ch).is_some_and(PieceKind::is_preview) {
            let column_taken = (0..board.size()).any(|row| {
                board
                    .get(Square::new(row, to.col))
                    .is_some_and(|p| p.is_plain_preview() && p.owner == self.side)
            });
            if column_taken {
                return Err(IllegalDrop::PreviewInColumn(to.col));
            }

            if to.row == self.side.promotion_row(board.size()) {
                return Err(IllegalDrop::PromotionZone(to));
            }
        }

        if !board.is_empty_at(to) {
            return Err(IllegalDrop::Occupied(to));
        }

        if self.captured.is_empty() {
            return Err(IllegalDrop::EmptyPool);
        }

        let piece = self
            .pool_index(ch)
            .map(|index| self.captured[index])
            .ok_or(IllegalDrop::NotInPool(ch))?;

        if piece.kind.is_preview() && leaves_drive_no_escape(board, piece, to, opponent) {
            return Err(IllegalDrop::PreviewMate(to));
        }

        Ok(piece)
    }
}

/// Whether placing `piece` on `to` leaves the opponent's drive no safe step
///
/// Check is not required: taking the last escape square is enough. Works on
/// a board copy; the opponent is only borrowed immutably.
fn leaves_drive_no_escape(board: &Board, piece: Piece, to: Square, opponent: &Player) -> bool {
    let mut trial = board.clone();
    trial.set(to, Some(piece));
    opponent.checkmate(&trial).is_empty()
}
