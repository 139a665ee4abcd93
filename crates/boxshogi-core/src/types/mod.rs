//! 基本型
//!
//! - `Side`: 手番（Lower / Upper）
//! - `Square`: 盤上の座標（行, 列）
//! - `PieceKind` / `Piece`: 駒種と駒

mod piece;
mod side;
mod square;

pub use piece::{Piece, PieceKind};
pub use side::Side;
pub use square::Square;
