//! 駒種（PieceKind）と駒（Piece）

use super::{Side, Square};
use crate::board::Board;
use crate::movegen::{self, Destinations};

/// Piece kinds (6 types)
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum PieceKind {
    Drive = 0,      // d
    Notes = 1,      // n
    Governance = 2, // g
    Shield = 3,     // s
    Relay = 4,      // r
    Preview = 5,    // p
}

impl PieceKind {
    pub const ALL: [PieceKind; 6] = [
        PieceKind::Drive,
        PieceKind::Notes,
        PieceKind::Governance,
        PieceKind::Shield,
        PieceKind::Relay,
        PieceKind::Preview,
    ];

    /// Lowercase drop character
    #[inline]
    pub const fn base_char(self) -> char {
        match self {
            PieceKind::Drive => 'd',
            PieceKind::Notes => 'n',
            PieceKind::Governance => 'g',
            PieceKind::Shield => 's',
            PieceKind::Relay => 'r',
            PieceKind::Preview => 'p',
        }
    }

    /// Parse a drop character, ignoring case
    pub fn from_char(c: char) -> Option<PieceKind> {
        let lower = c.to_ascii_lowercase();
        PieceKind::ALL.into_iter().find(|kind| kind.base_char() == lower)
    }

    /// Check if piece kind can promote
    #[inline]
    pub const fn can_promote(self) -> bool {
        matches!(
            self,
            PieceKind::Notes | PieceKind::Governance | PieceKind::Relay | PieceKind::Preview
        )
    }

    #[inline]
    pub const fn is_drive(self) -> bool {
        matches!(self, PieceKind::Drive)
    }

    #[inline]
    pub const fn is_preview(self) -> bool {
        matches!(self, PieceKind::Preview)
    }
}

/// Piece on the board or in a captured pool
///
/// Pieces are plain values. Cloning a `Board` therefore copies every piece,
/// and a captured piece keeps its kind while owner and rank change.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Piece {
    pub kind: PieceKind,
    pub owner: Side,
    pub promoted: bool,
}

impl Piece {
    #[inline]
    pub const fn new(kind: PieceKind, owner: Side) -> Self {
        Piece {
            kind,
            owner,
            promoted: false,
        }
    }

    /// Create promoted piece
    #[inline]
    pub const fn promoted(kind: PieceKind, owner: Side) -> Self {
        Piece {
            kind,
            owner,
            promoted: true,
        }
    }

    /// Drop character; the case encodes the owner (Upper is uppercase)
    #[inline]
    pub fn variant_char(self) -> char {
        let c = self.kind.base_char();
        match self.owner {
            Side::Lower => c,
            Side::Upper => c.to_ascii_uppercase(),
        }
    }

    #[inline]
    pub const fn is_drive(self) -> bool {
        self.kind.is_drive()
    }

    /// Unpromoted Preview; promoted ones do not count for column exclusivity
    #[inline]
    pub const fn is_plain_preview(self) -> bool {
        self.kind.is_preview() && !self.promoted
    }

    /// Reset to base rank
    #[inline]
    pub fn demote(&mut self) {
        self.promoted = false;
    }

    #[inline]
    pub fn switch_owner(&mut self) {
        self.owner = self.owner.opposite();
    }

    /// Whether a move `from` → `to` may promote this piece
    pub fn may_promote(self, from: Square, to: Square, board_size: u8) -> bool {
        let zone = self.owner.promotion_row(board_size);
        self.kind.can_promote() && !self.promoted && (from.row == zone || to.row == zone)
    }

    /// A Preview reaching the promotion row has no further moves, so it promotes
    pub fn must_promote(self, to: Square, board_size: u8) -> bool {
        self.is_plain_preview() && to.row == self.owner.promotion_row(board_size)
    }

    /// Destinations reachable from `from` on `board`
    #[inline]
    pub fn possible_moves(self, board: &Board, from: Square) -> Destinations {
        movegen::destinations(self, board, from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_variant_char() {
        assert_eq!(Piece::new(PieceKind::Preview, Side::Lower).variant_char(), 'p');
        assert_eq!(Piece::new(PieceKind::Preview, Side::Upper).variant_char(), 'P');
        assert_eq!(Piece::promoted(PieceKind::Notes, Side::Upper).variant_char(), 'N');
        assert_eq!(Piece::new(PieceKind::Drive, Side::Lower).variant_char(), 'd');
    }

    #[test]
    fn test_from_char_ignores_case() {
        for kind in PieceKind::ALL {
            assert_eq!(PieceKind::from_char(kind.base_char()), Some(kind));
            assert_eq!(PieceKind::from_char(kind.base_char().to_ascii_uppercase()), Some(kind));
        }
        assert_eq!(PieceKind::from_char('x'), None);
        assert_eq!(PieceKind::from_char('+'), None);
    }

    #[test]
    fn test_demote_and_switch_owner() {
        let mut piece = Piece::promoted(PieceKind::Relay, Side::Upper);
        piece.demote();
        piece.switch_owner();
        assert_eq!(piece, Piece::new(PieceKind::Relay, Side::Lower));
    }

    #[test]
    fn test_may_promote() {
        let relay = Piece::new(PieceKind::Relay, Side::Lower);
        // Lower の成り段は 4 行目
        assert!(relay.may_promote(Square::new(3, 1), Square::new(4, 1), 5));
        assert!(relay.may_promote(Square::new(4, 1), Square::new(3, 0), 5));
        assert!(!relay.may_promote(Square::new(2, 1), Square::new(3, 1), 5));

        let shield = Piece::new(PieceKind::Shield, Side::Upper);
        assert!(!shield.may_promote(Square::new(1, 1), Square::new(0, 1), 5));

        let promoted = Piece::promoted(PieceKind::Notes, Side::Upper);
        assert!(!promoted.may_promote(Square::new(1, 1), Square::new(0, 1), 5));
    }

    #[test]
    fn test_must_promote() {
        let preview = Piece::new(PieceKind::Preview, Side::Upper);
        assert!(preview.must_promote(Square::new(0, 3), 5));
        assert!(!preview.must_promote(Square::new(1, 3), 5));
        assert!(!Piece::new(PieceKind::Relay, Side::Upper).must_promote(Square::new(0, 3), 5));
    }
}
