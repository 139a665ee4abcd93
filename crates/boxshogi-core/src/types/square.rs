//! 座標（Square）

use std::fmt;

/// Square on the board as (row, column), both 0-indexed
///
/// A `Square` carries no board size; bounds are checked by `Board::contains`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Square {
    pub row: u8,
    pub col: u8,
}

impl Square {
    #[inline]
    pub const fn new(row: u8, col: u8) -> Self {
        Square { row, col }
    }

    /// Square shifted by (d_row, d_col), or `None` when it leaves `0..size`
    #[inline]
    pub fn offset(self, d_row: i8, d_col: i8, size: u8) -> Option<Square> {
        let row = self.row as i16 + d_row as i16;
        let col = self.col as i16 + d_col as i16;
        let limit = size as i16;
        if (0..limit).contains(&row) && (0..limit).contains(&col) {
            Some(Square::new(row as u8, col as u8))
        } else {
            None
        }
    }

    /// Index into a row-major cell array
    #[inline]
    pub const fn index(self, size: u8) -> usize {
        self.row as usize * size as usize + self.col as usize
    }
}

/// Display as column letter plus 1-based row (e.g. `(0, 0)` → "a1")
///
/// Squares past column `z` or row 255 print as raw `(row, col)`.
impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.col < 26, self.row.checked_add(1)) {
            (true, Some(rank)) => write!(f, "{}{}", (b'a' + self.col) as char, rank),
            _ => write!(f, "({}, {})", self.row, self.col),
        }
    }
}
