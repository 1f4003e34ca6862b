use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    King,
    General,
    Elephant,
    Horse,
    Chariot,
    Pawn,
}

impl PieceKind {
    pub const ALL: [PieceKind; 6] = [
        PieceKind::King,
        PieceKind::General,
        PieceKind::Elephant,
        PieceKind::Horse,
        PieceKind::Chariot,
        PieceKind::Pawn,
    ];

    /// Lowercase letter used by the placement text.
    pub fn letter(self) -> char {
        match self {
            PieceKind::King => 'k',
            PieceKind::General => 'g',
            PieceKind::Elephant => 'e',
            PieceKind::Horse => 'n',
            PieceKind::Chariot => 'r',
            PieceKind::Pawn => 'p',
        }
    }

    pub fn from_letter(letter: char) -> Option<Self> {
        match letter.to_ascii_lowercase() {
            'k' => Some(PieceKind::King),
            'g' => Some(PieceKind::General),
            'e' => Some(PieceKind::Elephant),
            'n' => Some(PieceKind::Horse),
            'r' => Some(PieceKind::Chariot),
            'p' => Some(PieceKind::Pawn),
            _ => None,
        }
    }
}

/// The two players. `First` (white) moves up the board towards row 0,
/// `Second` (black) moves down towards row 7.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    First,
    Second,
}

impl Side {
    pub fn opponent(self) -> Self {
        match self {
            Side::First => Side::Second,
            Side::Second => Side::First,
        }
    }

    /// Row delta of a forward step.
    pub fn forward(self) -> i8 {
        match self {
            Side::First => -1,
            Side::Second => 1,
        }
    }

    /// Row on which this side's pawns promote.
    pub fn promotion_row(self) -> u8 {
        match self {
            Side::First => 0,
            Side::Second => 7,
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::First => write!(f, "White"),
            Side::Second => write!(f, "Black"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub kind: PieceKind,
    pub side: Side,
}

impl Piece {
    pub const fn new(kind: PieceKind, side: Side) -> Self {
        Self { kind, side }
    }

    /// Placement letter: uppercase for `First`, lowercase for `Second`.
    pub fn letter(self) -> char {
        match self.side {
            Side::First => self.kind.letter().to_ascii_uppercase(),
            Side::Second => self.kind.letter(),
        }
    }

    pub fn from_letter(letter: char) -> Option<Self> {
        let kind = PieceKind::from_letter(letter)?;
        let side = if letter.is_ascii_uppercase() {
            Side::First
        } else {
            Side::Second
        };
        Some(Self::new(kind, side))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn letters_round_trip_for_every_kind() {
        for kind in PieceKind::ALL {
            for side in [Side::First, Side::Second] {
                let piece = Piece::new(kind, side);
                assert_eq!(Piece::from_letter(piece.letter()), Some(piece));
            }
        }
        assert_eq!(Piece::from_letter('q'), None);
    }

    #[test]
    fn sides_mirror_direction() {
        assert_eq!(Side::First.opponent(), Side::Second);
        assert_eq!(Side::First.forward(), -Side::Second.forward());
        assert_eq!(Side::First.promotion_row(), 0);
        assert_eq!(Side::Second.promotion_row(), 7);
    }
}
