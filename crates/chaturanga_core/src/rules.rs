//! Attack detection and the self-check filter.
//!
//! A move is legal when the mover's King is not attacked on the resulting
//! board. Attacks are plain pseudo-legal reach, so a pawn only attacks a
//! diagonal square that is already occupied by an enemy piece. Because the
//! filter always inspects the board *after* the move, a King stepping onto a
//! pawn-covered square is still caught: the square is occupied by then.

use crate::moves::pseudo_legal_moves;
use crate::{Board, Move, Side, Square};

/// True when any piece of `by_side` can reach `square` by its movement
/// pattern. Off-board squares are never attacked.
pub fn is_attacked(board: &Board, square: Square, by_side: Side) -> bool {
    if !square.is_on_board() {
        return false;
    }

    board
        .pieces()
        .filter(|(_, piece)| piece.side == by_side)
        .any(|(origin, _)| pseudo_legal_moves(board, origin).contains(&square))
}

pub fn king_square(board: &Board, side: Side) -> Option<Square> {
    board.king_square(side)
}

/// A side without a King is never in check.
pub fn is_in_check(board: &Board, side: Side) -> bool {
    match board.king_square(side) {
        Some(king) => is_attacked(board, king, side.opponent()),
        None => false,
    }
}

/// Destinations of the piece on `origin` that do not leave its own King
/// attacked. Empty when `origin` is empty.
pub fn legal_moves(board: &Board, origin: Square) -> Vec<Square> {
    let Some(piece) = board.piece_at(origin) else {
        return Vec::new();
    };

    pseudo_legal_moves(board, origin)
        .into_iter()
        .filter(|&to| !is_in_check(&board.with_move(origin, to), piece.side))
        .collect()
}

/// Every legal move of `side`, origins in row-major order.
pub fn all_legal_moves(board: &Board, side: Side) -> Vec<Move> {
    board
        .pieces()
        .filter(|(_, piece)| piece.side == side)
        .flat_map(|(from, _)| {
            legal_moves(board, from)
                .into_iter()
                .map(move |to| Move::new(from, to))
        })
        .collect()
}

/// Stops at the first piece of `side` with a legal move.
pub fn has_any_legal_move(board: &Board, side: Side) -> bool {
    board
        .pieces()
        .filter(|(_, piece)| piece.side == side)
        .any(|(from, piece)| {
            pseudo_legal_moves(board, from)
                .into_iter()
                .any(|to| !is_in_check(&board.with_move(from, to), piece.side))
        })
}
