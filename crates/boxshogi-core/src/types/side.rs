//! 手番（Side）

/// Side of the board
///
/// `Lower` is created first, starts on row 0 and moves toward higher rows.
/// `Upper` starts on the last row and moves toward row 0.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Side {
    Lower = 0,
    Upper = 1,
}

impl Side {
    /// Both sides in creation order
    pub const ALL: [Side; 2] = [Side::Lower, Side::Upper];

    /// Get opposite side
    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            Side::Lower => Side::Upper,
            Side::Upper => Side::Lower,
        }
    }

    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    #[inline]
    pub const fn from_index(index: usize) -> Option<Side> {
        match index {
            0 => Some(Side::Lower),
            1 => Some(Side::Upper),
            _ => None,
        }
    }

    /// Row delta of one step forward
    #[inline]
    pub const fn forward(self) -> i8 {
        match self {
            Side::Lower => 1,
            Side::Upper => -1,
        }
    }

    /// Row where this side promotes and may not drop a Preview
    #[inline]
    pub const fn promotion_row(self, board_size: u8) -> u8 {
        match self {
            Side::Lower => board_size - 1,
            Side::Upper => 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_side_opposite() {
        assert_eq!(Side::Lower.opposite(), Side::Upper);
        assert_eq!(Side::Upper.opposite(), Side::Lower);
        assert_eq!(Side::Lower.opposite().opposite(), Side::Lower);
    }

    #[test]
    fn test_side_index() {
        for side in Side::ALL {
            assert_eq!(Side::from_index(side.index()), Some(side));
        }
        assert_eq!(Side::from_index(2), None);
    }

    #[test]
    fn test_promotion_row() {
        assert_eq!(Side::Lower.promotion_row(5), 4);
        assert_eq!(Side::Upper.promotion_row(5), 0);
        assert_eq!(Side::Lower.forward(), 1);
        assert_eq!(Side::Upper.forward(), -1);
    }
}
