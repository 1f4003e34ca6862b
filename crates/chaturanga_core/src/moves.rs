use std::fmt;
use std::str::FromStr;

use crate::error::ParseError;
use crate::{Board, Piece, PieceKind, Square};

const ALL_DIRECTIONS: [(i8, i8); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

const ORTHOGONALS: [(i8, i8); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];

const DIAGONAL_JUMPS: [(i8, i8); 4] = [(-2, -2), (-2, 2), (2, -2), (2, 2)];

const HORSE_LEAPS: [(i8, i8); 8] = [
    (-2, -1),
    (-2, 1),
    (-1, -2),
    (-1, 2),
    (1, -2),
    (1, 2),
    (2, -1),
    (2, 1),
];

/// Farthest a General may slide along one direction.
const GENERAL_REACH: usize = 2;

/// A move carries no capture tag: a capture is whatever stands on `to`
/// when the move is applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    pub from: Square,
    pub to: Square,
}

impl Move {
    pub fn new(from: Square, to: Square) -> Self {
        Self { from, to }
    }

    /// The move that undoes this one on a board where it did not capture.
    pub fn reversed(self) -> Self {
        Self {
            from: self.to,
            to: self.from,
        }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.from, self.to)
    }
}

impl FromStr for Move {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || ParseError::InvalidMove(s.to_string());
        if s.len() != 4 || !s.is_ascii() {
            return Err(invalid());
        }
        let from = Square::from_algebraic(&s[..2]).ok_or_else(invalid)?;
        let to = Square::from_algebraic(&s[2..]).ok_or_else(invalid)?;
        Ok(Self { from, to })
    }
}

/// Destinations the piece on `origin` reaches by its movement pattern,
/// before excluding moves that leave its own King attacked.
///
/// Returns an empty list when `origin` is empty.
pub fn pseudo_legal_moves(board: &Board, origin: Square) -> Vec<Square> {
    match board.piece_at(origin) {
        Some(piece) => piece_moves(board, piece, origin),
        None => Vec::new(),
    }
}

fn piece_moves(board: &Board, piece: Piece, origin: Square) -> Vec<Square> {
    match piece.kind {
        PieceKind::King => step_moves(board, piece, origin, &ALL_DIRECTIONS),
        PieceKind::General => slide_moves(board, piece, origin, &ALL_DIRECTIONS, GENERAL_REACH),
        PieceKind::Elephant => {
            let mut moves = step_moves(board, piece, origin, &ALL_DIRECTIONS);
            moves.extend(step_moves(board, piece, origin, &DIAGONAL_JUMPS));
            moves
        }
        PieceKind::Horse => step_moves(board, piece, origin, &HORSE_LEAPS),
        PieceKind::Chariot => slide_moves(board, piece, origin, &ORTHOGONALS, 7),
        PieceKind::Pawn => pawn_moves(board, piece, origin),
    }
}

fn can_land(board: &Board, piece: Piece, target: Square) -> bool {
    board
        .piece_at(target)
        .map_or(true, |occupant| occupant.side != piece.side)
}

/// Single hops by each offset, ignoring anything in between.
fn step_moves(board: &Board, piece: Piece, origin: Square, offsets: &[(i8, i8)]) -> Vec<Square> {
    offsets
        .iter()
        .filter_map(|&(dr, dc)| origin.offset(dr, dc))
        .filter(|&target| can_land(board, piece, target))
        .collect()
}

/// Rays of at most `reach` squares, stopped by the first occupied square.
fn slide_moves(
    board: &Board,
    piece: Piece,
    origin: Square,
    directions: &[(i8, i8)],
    reach: usize,
) -> Vec<Square> {
    let mut moves = Vec::new();
    for &(dr, dc) in directions {
        let mut current = origin;
        for _ in 0..reach {
            let Some(next) = current.offset(dr, dc) else {
                break;
            };
            match board.piece_at(next) {
                Some(occupant) => {
                    if occupant.side != piece.side {
                        moves.push(next);
                    }
                    break;
                }
                None => moves.push(next),
            }
            current = next;
        }
    }
    moves
}

fn pawn_moves(board: &Board, piece: Piece, origin: Square) -> Vec<Square> {
    let mut moves = Vec::new();
    let forward = piece.side.forward();

    if let Some(ahead) = origin.offset(forward, 0) {
        if board.piece_at(ahead).is_none() {
            moves.push(ahead);
        }
    }

    // Diagonals count only when an enemy already stands there.
    for dc in [-1, 1] {
        if let Some(target) = origin.offset(forward, dc) {
            if board
                .piece_at(target)
                .is_some_and(|occupant| occupant.side != piece.side)
            {
                moves.push(target);
            }
        }
    }

    moves
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Side;

    fn sq(s: &str) -> Square {
        s.parse().unwrap()
    }

    fn lone(kind: PieceKind, side: Side, at: &str) -> Board {
        Board::empty().with_piece(sq(at), Some(Piece::new(kind, side)))
    }

    fn sorted(mut squares: Vec<Square>) -> Vec<Square> {
        squares.sort();
        squares
    }

    fn squares(names: &[&str]) -> Vec<Square> {
        sorted(names.iter().map(|n| sq(n)).collect())
    }

    #[test]
    fn king_steps_once_in_every_direction() {
        let board = lone(PieceKind::King, Side::First, "d4");
        assert_eq!(pseudo_legal_moves(&board, sq("d4")).len(), 8);

        let corner = lone(PieceKind::King, Side::First, "a1");
        assert_eq!(
            sorted(pseudo_legal_moves(&corner, sq("a1"))),
            squares(&["a2", "b1", "b2"])
        );
    }

    #[test]
    fn general_slides_up_to_two_squares_and_is_blocked() {
        let board = lone(PieceKind::General, Side::First, "d4");
        assert_eq!(pseudo_legal_moves(&board, sq("d4")).len(), 16);

        let blocked = board
            .with_piece(sq("d5"), Some(Piece::new(PieceKind::Pawn, Side::First)))
            .with_piece(sq("e5"), Some(Piece::new(PieceKind::Pawn, Side::Second)));
        let moves = pseudo_legal_moves(&blocked, sq("d4"));
        assert!(!moves.contains(&sq("d5")));
        assert!(!moves.contains(&sq("d6")));
        assert!(moves.contains(&sq("e5")));
        assert!(!moves.contains(&sq("f6")));
        assert_eq!(moves.len(), 13);
    }

    #[test]
    fn elephant_steps_and_jumps_diagonally_over_pieces() {
        let board = lone(PieceKind::Elephant, Side::First, "d4")
            .with_piece(sq("e5"), Some(Piece::new(PieceKind::Pawn, Side::First)))
            .with_piece(sq("b2"), Some(Piece::new(PieceKind::Pawn, Side::First)));
        let moves = pseudo_legal_moves(&board, sq("d4"));
        assert!(moves.contains(&sq("f6")), "jump ignores the piece on e5");
        assert!(!moves.contains(&sq("e5")));
        assert!(!moves.contains(&sq("b2")));
        assert!(moves.contains(&sq("b6")));
        assert!(moves.contains(&sq("f2")));
        assert!(!moves.contains(&sq("d6")), "no orthogonal jump");
        assert_eq!(moves.len(), 7 + 3);
    }

    #[test]
    fn horse_leaps_over_a_crowd() {
        let board = Board::new();
        assert_eq!(
            sorted(pseudo_legal_moves(&board, sq("b1"))),
            squares(&["a3", "c3"])
        );
    }

    #[test]
    fn chariot_slides_until_the_first_piece() {
        let board = lone(PieceKind::Chariot, Side::First, "a1")
            .with_piece(sq("a4"), Some(Piece::new(PieceKind::Horse, Side::Second)))
            .with_piece(sq("c1"), Some(Piece::new(PieceKind::Horse, Side::First)));
        assert_eq!(
            sorted(pseudo_legal_moves(&board, sq("a1"))),
            squares(&["a2", "a3", "a4", "b1"])
        );
    }

    #[test]
    fn pawn_captures_only_onto_enemies() {
        let board = lone(PieceKind::Pawn, Side::First, "e3")
            .with_piece(sq("d4"), Some(Piece::new(PieceKind::Horse, Side::Second)))
            .with_piece(sq("f4"), Some(Piece::new(PieceKind::Horse, Side::First)));
        assert_eq!(
            sorted(pseudo_legal_moves(&board, sq("e3"))),
            squares(&["d4", "e4"])
        );

        let blocked = board.with_piece(sq("e4"), Some(Piece::new(PieceKind::Pawn, Side::Second)));
        assert_eq!(pseudo_legal_moves(&blocked, sq("e3")), vec![sq("d4")]);
    }

    #[test]
    fn pawns_never_double_step() {
        let board = Board::new();
        assert_eq!(pseudo_legal_moves(&board, sq("e2")), vec![sq("e3")]);
        assert_eq!(pseudo_legal_moves(&board, sq("e7")), vec![sq("e6")]);
    }

    #[test]
    fn empty_origin_has_no_moves() {
        assert!(pseudo_legal_moves(&Board::new(), sq("e4")).is_empty());
    }

    #[test]
    fn move_notation_round_trips() {
        let mv: Move = "e2e3".parse().unwrap();
        assert_eq!(mv, Move::new(sq("e2"), sq("e3")));
        assert_eq!(mv.to_string(), "e2e3");
        assert_eq!(mv.reversed().to_string(), "e3e2");
        assert!("e2e9".parse::<Move>().is_err());
        assert!("e2".parse::<Move>().is_err());
    }
}
