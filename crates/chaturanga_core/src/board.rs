use std::fmt;
use std::str::FromStr;

use crate::error::ParseError;
use crate::{Piece, PieceKind, Side, Square};

const BACK_RANK: [PieceKind; 8] = [
    PieceKind::Chariot,
    PieceKind::Horse,
    PieceKind::Elephant,
    PieceKind::General,
    PieceKind::King,
    PieceKind::Elephant,
    PieceKind::Horse,
    PieceKind::Chariot,
];

/// An immutable 8x8 snapshot. Every update returns a new board, so a board
/// can be kept in a history and compared structurally.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Board {
    squares: [[Option<Piece>; 8]; 8],
}

impl Board {
    /// The starting layout: Black on rows 0-1, White on rows 6-7.
    pub fn new() -> Self {
        let mut squares = [[None; 8]; 8];

        for (col, &kind) in BACK_RANK.iter().enumerate() {
            squares[0][col] = Some(Piece::new(kind, Side::Second));
            squares[1][col] = Some(Piece::new(PieceKind::Pawn, Side::Second));
            squares[6][col] = Some(Piece::new(PieceKind::Pawn, Side::First));
            squares[7][col] = Some(Piece::new(kind, Side::First));
        }

        Self { squares }
    }

    pub fn initial() -> Self {
        Self::new()
    }

    pub fn empty() -> Self {
        Self {
            squares: [[None; 8]; 8],
        }
    }

    pub fn piece_at(&self, square: Square) -> Option<Piece> {
        self.squares
            .get(square.row as usize)
            .and_then(|row| row.get(square.col as usize))
            .copied()
            .flatten()
    }

    /// Returns a copy with `square` set to `piece`. Off-board squares are ignored.
    pub fn with_piece(&self, square: Square, piece: Option<Piece>) -> Self {
        let mut next = *self;
        if let Some(cell) = next
            .squares
            .get_mut(square.row as usize)
            .and_then(|row| row.get_mut(square.col as usize))
        {
            *cell = piece;
        }
        next
    }

    /// Returns a copy with the piece on `from` moved to `to`, capturing
    /// whatever stood there. A pawn reaching its last row becomes a General.
    /// An off-board destination leaves the board unchanged.
    pub fn with_move(&self, from: Square, to: Square) -> Self {
        if !to.is_on_board() {
            return *self;
        }
        let Some(mut piece) = self.piece_at(from) else {
            return *self;
        };

        if piece.kind == PieceKind::Pawn && to.row == piece.side.promotion_row() {
            piece.kind = PieceKind::General;
        }

        self.with_piece(from, None).with_piece(to, Some(piece))
    }

    /// Occupied squares in row-major order.
    pub fn pieces(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        Square::all().filter_map(move |square| self.piece_at(square).map(|piece| (square, piece)))
    }

    pub fn piece_count(&self, side: Side) -> usize {
        self.pieces().filter(|(_, piece)| piece.side == side).count()
    }

    pub fn king_square(&self, side: Side) -> Option<Square> {
        self.pieces()
            .find(|(_, piece)| piece.kind == PieceKind::King && piece.side == side)
            .map(|(square, _)| square)
    }

    /// Placement text, row 0 first: `rnegkenr/pppppppp/8/8/8/8/PPPPPPPP/RNEGKENR`.
    pub fn to_placement(&self) -> String {
        let mut text = String::with_capacity(72);
        for (row, cells) in self.squares.iter().enumerate() {
            let mut empty = 0;
            for cell in cells {
                match cell {
                    Some(piece) => {
                        if empty > 0 {
                            text.push(char::from(b'0' + empty));
                            empty = 0;
                        }
                        text.push(piece.letter());
                    }
                    None => empty += 1,
                }
            }
            if empty > 0 {
                text.push(char::from(b'0' + empty));
            }
            if row < 7 {
                text.push('/');
            }
        }
        text
    }

    pub fn from_placement(text: &str) -> Result<Self, ParseError> {
        let rows: Vec<&str> = text.trim().split('/').collect();
        if rows.len() != 8 {
            return Err(ParseError::InvalidPlacement(format!(
                "expected 8 rows, found {}",
                rows.len()
            )));
        }

        let mut board = Self::empty();
        for (row, row_text) in rows.iter().enumerate() {
            let mut col = 0usize;
            for c in row_text.chars() {
                if let Some(run) = c.to_digit(10) {
                    col += run as usize;
                } else {
                    let piece = Piece::from_letter(c).ok_or_else(|| {
                        ParseError::InvalidPlacement(format!("unknown piece letter {:?}", c))
                    })?;
                    if let Some(cell) = board.squares[row].get_mut(col) {
                        *cell = Some(piece);
                    }
                    col += 1;
                }
                if col > 8 {
                    break;
                }
            }
            if col != 8 {
                return Err(ParseError::InvalidPlacement(format!(
                    "row {} covers {} squares",
                    row, col
                )));
            }
        }

        Ok(board)
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl FromStr for Board {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Board::from_placement(s)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (row, cells) in self.squares.iter().enumerate() {
            write!(f, "{} ", 8 - row)?;
            for cell in cells {
                let c = cell.map(Piece::letter).unwrap_or('.');
                write!(f, " {}", c)?;
            }
            writeln!(f)?;
        }
        write!(f, "   a b c d e f g h")
    }
}

/// Applies a move to `board`, returning the successor position.
///
/// Callers are expected to pass a destination taken from
/// [`legal_moves`](crate::legal_moves); nothing is validated here.
pub fn apply_move(board: &Board, from: Square, to: Square) -> Board {
    board.with_move(from, to)
}
