//! Errors raised at the edges of the rules core.
//!
//! The rules themselves never fail: unknown squares and illegal queries yield
//! empty results. Errors only come from parsing text and from driving a
//! [`Game`](crate::Game) session with a move it cannot accept.

use thiserror::Error;

use crate::{GameOutcome, Side, Square};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("invalid square notation: {0:?}")]
    InvalidSquare(String),

    #[error("invalid move notation: {0:?}")]
    InvalidMove(String),

    #[error("invalid placement: {0}")]
    InvalidPlacement(String),
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("the game is already over ({0:?})")]
    GameOver(GameOutcome),

    #[error("no piece at {0}")]
    NoPieceAtSquare(Square),

    #[error("piece at {square} does not belong to {side}")]
    WrongSide { square: Square, side: Side },

    #[error("illegal move from {from} to {to}")]
    IllegalMove { from: Square, to: Square },
}
