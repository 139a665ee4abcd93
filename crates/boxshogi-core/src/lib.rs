//! # boxshogi-core
//!
//! Box Shogi（5×5 の持ち駒ありの将棋系ゲーム）のルール判定ライブラリ。
//!
//! ## モジュール構成
//!
//! - `types`: 基本型（Side, Square, PieceKind, Piece）
//! - `board`: 盤面表現
//! - `movegen`: 駒ごとの利き（移動可能マス）
//! - `player`: 手番側の合法性判定、王手判定、応手列挙、持ち駒
//! - `game`: 手番進行と終局判定
//! - `config`: ルール設定
//! - `error`: エラー型
//!
//! ```
//! use boxshogi_core::{Game, RuleConfig, Side, Square};
//!
//! let mut game = Game::new(RuleConfig::default());
//! // Lower drive steps diagonally forward from the corner.
//! game.make_move(Square::new(0, 0), Square::new(1, 1), false).unwrap();
//! assert_eq!(game.player(Side::Lower).drive_location(), Square::new(1, 1));
//! assert_eq!(game.side_to_move(), Side::Upper);
//! ```

pub mod board;
pub mod config;
pub mod error;
pub mod game;
pub mod movegen;
pub mod player;
pub mod types;

pub use board::{Board, BOARD_SIZE};
pub use config::RuleConfig;
pub use error::{ConfigError, IllegalDrop, IllegalMove, RuleError};
pub use game::{Game, GameStatus};
pub use player::{DropAttempt, DropResponse, EscapeMoves, Player};
pub use types::{Piece, PieceKind, Side, Square};
