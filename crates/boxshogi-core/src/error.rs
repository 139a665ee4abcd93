//! Error types for rule violations
//!
//! Every error here is an ordinary rules rejection; none of them signals a
//! broken engine state.

use crate::types::{Side, Square};

/// Move legality failures
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum IllegalMove {
    #[error("cannot move from empty square {0}")]
    EmptySource(Square),

    #[error("piece at {square} belongs to {owner:?}")]
    NotOwner { square: Square, owner: Side },

    #[error("{to} is not reachable from {from}")]
    Unreachable { from: Square, to: Square },

    /// Fourth validation step. Geometry never lists own-occupied squares,
    /// so `Unreachable` is reported first for those moves.
    #[error("cannot move onto own piece at {0}")]
    SelfCapture(Square),

    #[error("piece cannot promote on {from} -> {to}")]
    InvalidPromotion { from: Square, to: Square },

    #[error("cannot move drive into check at {0}")]
    IntoCheck(Square),

    #[error("cannot capture empty square")]
    NothingToCapture,

    /// The mover is in check and the move is not one of its escape responses
    #[error("{from} -> {to} does not answer check")]
    IgnoresCheck { from: Square, to: Square },
}

/// Drop legality failures
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum IllegalDrop {
    #[error("drop square {0} is off the board")]
    OffBoard(Square),

    #[error("column {0} already holds a preview")]
    PreviewInColumn(u8),

    #[error("cannot drop preview on promotion row at {0}")]
    PromotionZone(Square),

    #[error("cannot drop onto occupied square {0}")]
    Occupied(Square),

    #[error("cannot drop from empty captured pool")]
    EmptyPool,

    #[error("no '{0}' in captured pool")]
    NotInPool(char),

    #[error("preview drop at {0} would deliver checkmate")]
    PreviewMate(Square),

    /// The dropper is in check and the drop is not one of its escape responses
    #[error("drop of '{piece}' at {square} does not answer check")]
    IgnoresCheck { piece: char, square: Square },
}

/// Errors surfaced by `Game`
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum RuleError {
    #[error(transparent)]
    Move(#[from] IllegalMove),

    #[error(transparent)]
    Drop(#[from] IllegalDrop),

    #[error("game is already over")]
    GameOver,
}

/// Configuration loading errors
#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    #[error("invalid rule config: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("move_limit must be positive")]
    ZeroMoveLimit,
}
