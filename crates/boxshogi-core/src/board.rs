//! Board representation and basic manipulation
//!
//! The board is a square grid of `Option<Piece>` stored row-major. It owns
//! its pieces by value, so `Clone` yields a fully independent copy that a
//! speculative simulation can mutate freely.

use crate::types::{Piece, PieceKind, Side, Square};

/// Size of the standard Box Shogi board
pub const BOARD_SIZE: u8 = 5;

/// Board representation
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    size: u8,
    cells: Vec<Option<Piece>>,
}

impl Board {
    /// Create empty board of `size` × `size`
    pub fn new(size: u8) -> Self {
        debug_assert!(size > 0, "board size must be positive");
        Board {
            size,
            cells: vec![None; size as usize * size as usize],
        }
    }

    /// Standard starting position
    ///
    /// ```text
    /// row 4:  N G R S D
    /// row 3:  . . . . P
    /// row 2:  . . . . .
    /// row 1:  p . . . .
    /// row 0:  d s r g n
    /// ```
    pub fn standard() -> Self {
        use PieceKind::*;

        let mut board = Board::new(BOARD_SIZE);
        let back_rank = [Drive, Shield, Relay, Governance, Notes];
        for (col, kind) in back_rank.into_iter().enumerate() {
            let col = col as u8;
            board.set(Square::new(0, col), Some(Piece::new(kind, Side::Lower)));
            let mirrored = Square::new(BOARD_SIZE - 1, BOARD_SIZE - 1 - col);
            board.set(mirrored, Some(Piece::new(kind, Side::Upper)));
        }
        board.set(Square::new(1, 0), Some(Piece::new(Preview, Side::Lower)));
        board.set(
            Square::new(BOARD_SIZE - 2, BOARD_SIZE - 1),
            Some(Piece::new(Preview, Side::Upper)),
        );
        board
    }

    #[inline]
    pub fn size(&self) -> u8 {
        self.size
    }

    #[inline]
    pub fn contains(&self, sq: Square) -> bool {
        sq.row < self.size && sq.col < self.size
    }

    /// Piece on square; `None` for empty or off-board squares
    #[inline]
    pub fn get(&self, sq: Square) -> Option<Piece> {
        if self.contains(sq) { self.cells[sq.index(self.size)] } else { None }
    }

    /// Place or clear a square
    ///
    /// # Panics
    /// Panics if `sq` is off the board.
    #[inline]
    pub fn set(&mut self, sq: Square, piece: Option<Piece>) {
        assert!(self.contains(sq), "square {sq} is off a {0}x{0} board", self.size);
        self.cells[sq.index(self.size)] = piece;
    }

    /// Remove and return the piece on `sq`
    #[inline]
    pub fn take(&mut self, sq: Square) -> Option<Piece> {
        if self.contains(sq) { self.cells[sq.index(self.size)].take() } else { None }
    }

    /// Whether `sq` is on the board and holds no piece
    #[inline]
    pub fn is_empty_at(&self, sq: Square) -> bool {
        self.contains(sq) && self.cells[sq.index(self.size)].is_none()
    }

    /// All squares in row-major order
    pub fn squares(&self) -> impl Iterator<Item = Square> + use<> {
        let size = self.size;
        (0..size).flat_map(move |row| (0..size).map(move |col| Square::new(row, col)))
    }

    /// Occupied squares with their pieces, row-major
    pub fn pieces(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        self.squares().filter_map(|sq| self.get(sq).map(|piece| (sq, piece)))
    }

    /// Move the piece on `from` to `to`, returning whatever stood on `to`
    ///
    /// No legality is checked here. `promote` is ignored for kinds that
    /// cannot promote.
    pub fn move_piece(&mut self, from: Square, to: Square, promote: bool) -> Option<Piece> {
        let Some(mut piece) = self.take(from) else {
            debug_assert!(false, "move_piece from empty square {from}");
            return None;
        };
        if promote && piece.kind.can_promote() {
            piece.promoted = true;
        }
        let displaced = self.get(to);
        self.set(to, Some(piece));
        displaced
    }

    /// Find the drive piece of `side` by scanning the whole board
    pub fn find_drive(&self, side: Side) -> Option<Square> {
        self.pieces()
            .find(|(_, piece)| piece.is_drive() && piece.owner == side)
            .map(|(sq, _)| sq)
    }
}

impl Default for Board {
    fn default() -> Self {
        Board::standard()
    }
}
