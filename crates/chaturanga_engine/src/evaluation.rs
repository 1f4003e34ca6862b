use std::fmt;

use chaturanga_core::{classify, Board, PieceKind, Side, Square};

// Material values in centipawns (100 = 1 pawn)
const PAWN_VALUE: i32 = 100;
const HORSE_VALUE: i32 = 320;
const ELEPHANT_VALUE: i32 = 330;
const CHARIOT_VALUE: i32 = 500;
const GENERAL_VALUE: i32 = 900;
const KING_VALUE: i32 = 20000;

// Piece-square tables from White's side of the board: row 0 is the far
// (promotion) row, row 7 the home row. Black reads them mirrored row-wise.

// Pawns: push forward, hold the centre
const PAWN_TABLE: [[i32; 8]; 8] = [
    [0,  0,  0,  0,  0,  0,  0,  0],
    [50, 50, 50, 50, 50, 50, 50, 50],
    [10, 10, 20, 30, 30, 20, 10, 10],
    [5,  5, 10, 25, 25, 10,  5,  5],
    [0,  0,  0, 20, 20,  0,  0,  0],
    [5, -5,-10,  0,  0,-10, -5,  5],
    [5, 10, 10,-20,-20, 10, 10,  5],
    [0,  0,  0,  0,  0,  0,  0,  0]
];

// Horses are weak on the rim
const HORSE_TABLE: [[i32; 8]; 8] = [
    [-50,-40,-30,-30,-30,-30,-40,-50],
    [-40,-20,  0,  0,  0,  0,-20,-40],
    [-30,  0, 10, 15, 15, 10,  0,-30],
    [-30,  5, 15, 20, 20, 15,  5,-30],
    [-30,  0, 15, 20, 20, 15,  0,-30],
    [-30,  5, 10, 15, 15, 10,  5,-30],
    [-40,-20,  0,  5,  5,  0,-20,-40],
    [-50,-40,-30,-30,-30,-30,-40,-50]
];

// Elephants want the centre and the long diagonals
const ELEPHANT_TABLE: [[i32; 8]; 8] = [
    [-20,-10,-10,-10,-10,-10,-10,-20],
    [-10,  0,  0,  0,  0,  0,  0,-10],
    [-10,  0,  5, 10, 10,  5,  0,-10],
    [-10,  5,  5, 10, 10,  5,  5,-10],
    [-10,  0, 10, 10, 10, 10,  0,-10],
    [-10, 10, 10, 10, 10, 10, 10,-10],
    [-10,  5,  0,  0,  0,  0,  5,-10],
    [-20,-10,-10,-10,-10,-10,-10,-20]
];

// Chariots like the seventh row
const CHARIOT_TABLE: [[i32; 8]; 8] = [
    [ 0,  0,  0,  0,  0,  0,  0,  0],
    [ 5, 10, 10, 10, 10, 10, 10,  5],
    [-5,  0,  0,  0,  0,  0,  0, -5],
    [-5,  0,  0,  0,  0,  0,  0, -5],
    [-5,  0,  0,  0,  0,  0,  0, -5],
    [-5,  0,  0,  0,  0,  0,  0, -5],
    [-5,  0,  0,  0,  0,  0,  0, -5],
    [ 0,  0,  0,  5,  5,  0,  0,  0]
];

const GENERAL_TABLE: [[i32; 8]; 8] = [
    [-20,-10,-10, -5, -5,-10,-10,-20],
    [-10,  0,  0,  0,  0,  0,  0,-10],
    [-10,  0,  5,  5,  5,  5,  0,-10],
    [ -5,  0,  5,  5,  5,  5,  0, -5],
    [  0,  0,  5,  5,  5,  5,  0, -5],
    [-10,  5,  5,  5,  5,  5,  0,-10],
    [-10,  0,  5,  0,  0,  0,  0,-10],
    [-20,-10,-10, -5, -5,-10,-10,-20]
];

// The King stays home behind its pawns
const KING_TABLE: [[i32; 8]; 8] = [
    [-30,-40,-40,-50,-50,-40,-40,-30],
    [-30,-40,-40,-50,-50,-40,-40,-30],
    [-30,-40,-40,-50,-50,-40,-40,-30],
    [-30,-40,-40,-50,-50,-40,-40,-30],
    [-20,-30,-30,-40,-40,-30,-30,-20],
    [-10,-20,-20,-20,-20,-20,-20,-10],
    [ 20, 20,  0,  0,  0,  0, 20, 20],
    [ 20, 30, 10,  0,  0, 10, 30, 20]
];

/// A position value, always from White's point of view.
///
/// Won positions sit outside the numeric range: the derived ordering puts
/// `SecondWins` below every centipawn value and `FirstWins` above, so a
/// decided game dominates any material count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Score {
    SecondWins,
    Centipawns(i32),
    FirstWins,
}

impl Score {
    pub fn win_for(side: Side) -> Self {
        match side {
            Side::First => Score::FirstWins,
            Side::Second => Score::SecondWins,
        }
    }

    /// The worst value for `side`; the starting point of its search.
    pub fn worst_for(side: Side) -> Self {
        Self::win_for(side.opponent())
    }

    pub fn is_decisive(self) -> bool {
        !matches!(self, Score::Centipawns(_))
    }

    /// True when `self` is strictly better than `other` for `side`.
    pub fn better_for(self, other: Score, side: Side) -> bool {
        match side {
            Side::First => self > other,
            Side::Second => self < other,
        }
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Score::SecondWins => write!(f, "-inf"),
            Score::Centipawns(cp) => write!(f, "{:+}", cp),
            Score::FirstWins => write!(f, "+inf"),
        }
    }
}

/// Evaluates `board` with `side_to_move` about to play.
///
/// A decided position (checkmate, stalemate or bare King for the side to
/// move) returns the winner's saturating score; anything else is the
/// material and placement balance.
pub fn evaluate_position(board: &Board, side_to_move: Side) -> Score {
    if let Some(winner) = classify(board, side_to_move).winner() {
        return Score::win_for(winner);
    }
    Score::Centipawns(material_balance(board))
}

/// Material plus piece-square bonuses, White minus Black.
pub fn material_balance(board: &Board) -> i32 {
    board
        .pieces()
        .map(|(square, piece)| {
            let value = piece_value(piece.kind) + position_bonus(piece.kind, square, piece.side);
            match piece.side {
                Side::First => value,
                Side::Second => -value,
            }
        })
        .sum()
}

/// Base material value of a piece
pub fn piece_value(kind: PieceKind) -> i32 {
    match kind {
        PieceKind::Pawn => PAWN_VALUE,
        PieceKind::Horse => HORSE_VALUE,
        PieceKind::Elephant => ELEPHANT_VALUE,
        PieceKind::Chariot => CHARIOT_VALUE,
        PieceKind::General => GENERAL_VALUE,
        PieceKind::King => KING_VALUE,
    }
}

/// Placement bonus for `kind` on `square`; Black reads the table upside down.
pub fn position_bonus(kind: PieceKind, square: Square, side: Side) -> i32 {
    let row = match side {
        Side::First => square.row as usize,
        Side::Second => 7 - square.row as usize,
    };
    let col = square.col as usize;

    let table = match kind {
        PieceKind::Pawn => &PAWN_TABLE,
        PieceKind::Horse => &HORSE_TABLE,
        PieceKind::Elephant => &ELEPHANT_TABLE,
        PieceKind::Chariot => &CHARIOT_TABLE,
        PieceKind::General => &GENERAL_TABLE,
        PieceKind::King => &KING_TABLE,
    };

    table
        .get(row)
        .and_then(|cells| cells.get(col))
        .copied()
        .unwrap_or(0)
}
