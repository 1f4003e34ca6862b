use std::fmt;

use crate::rules::{has_any_legal_move, is_in_check};
use crate::{Board, PieceKind, Side};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameOutcome {
    Ongoing,
    /// The side to move is in check but can answer it.
    Check,
    Checkmate { winner: Side },
    /// The side to move has no legal move and is not in check. In this
    /// variant that side loses.
    StalemateLoss { winner: Side },
    /// The side to move has nothing left but its King.
    BareKing { winner: Side },
    RepetitionDraw,
    Resignation { winner: Side },
}

impl GameOutcome {
    pub fn is_terminal(self) -> bool {
        !matches!(self, GameOutcome::Ongoing | GameOutcome::Check)
    }

    pub fn winner(self) -> Option<Side> {
        match self {
            GameOutcome::Checkmate { winner }
            | GameOutcome::StalemateLoss { winner }
            | GameOutcome::BareKing { winner }
            | GameOutcome::Resignation { winner } => Some(winner),
            GameOutcome::Ongoing | GameOutcome::Check | GameOutcome::RepetitionDraw => None,
        }
    }
}

impl fmt::Display for GameOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameOutcome::Ongoing => write!(f, "in progress"),
            GameOutcome::Check => write!(f, "check"),
            GameOutcome::Checkmate { winner } => write!(f, "checkmate, {} wins", winner),
            GameOutcome::StalemateLoss { winner } => write!(f, "stalemate, {} wins", winner),
            GameOutcome::BareKing { winner } => write!(f, "bare king, {} wins", winner),
            GameOutcome::RepetitionDraw => write!(f, "draw by threefold repetition"),
            GameOutcome::Resignation { winner } => write!(f, "resignation, {} wins", winner),
        }
    }
}

/// True when `side` owns exactly one piece and it is its King.
pub fn is_bare_king(board: &Board, side: Side) -> bool {
    let mut own = board.pieces().filter(|(_, piece)| piece.side == side);
    matches!(
        (own.next(), own.next()),
        (Some((_, piece)), None) if piece.kind == PieceKind::King
    )
}

/// Classifies `board` from the point of view of `side`, the side to move.
///
/// A side without a legal move loses, in check or not. Failing that, a side
/// reduced to its bare King loses even though it could still move.
pub fn classify(board: &Board, side: Side) -> GameOutcome {
    let winner = side.opponent();
    let in_check = is_in_check(board, side);

    if !has_any_legal_move(board, side) {
        return if in_check {
            GameOutcome::Checkmate { winner }
        } else {
            GameOutcome::StalemateLoss { winner }
        };
    }

    if is_bare_king(board, side) {
        return GameOutcome::BareKing { winner };
    }

    if in_check {
        GameOutcome::Check
    } else {
        GameOutcome::Ongoing
    }
}

/// True when `board` has already been recorded twice, making it the third
/// occurrence. The side to move is not part of the comparison.
pub fn is_repetition(history: &[Board], board: &Board) -> bool {
    history.iter().filter(|&seen| seen == board).count() >= 2
}

/// Append-only record of committed positions, starting with the initial one.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct History {
    positions: Vec<Board>,
}

impl History {
    pub fn new(start: Board) -> Self {
        Self {
            positions: vec![start],
        }
    }

    pub fn push(&mut self, board: Board) {
        self.positions.push(board);
    }

    pub fn occurrences(&self, board: &Board) -> usize {
        self.positions.iter().filter(|&seen| seen == board).count()
    }

    /// See [`is_repetition`]; call before pushing `board`.
    pub fn is_repetition(&self, board: &Board) -> bool {
        is_repetition(&self.positions, board)
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }
}
