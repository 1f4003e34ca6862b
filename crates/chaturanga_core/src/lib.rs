// Rules of the game: board model, move generation, legality and outcomes
pub mod board;
pub mod error;
pub mod game;
pub mod moves;
pub mod outcome;
pub mod piece;
pub mod position;
pub mod rules;

// Re-export main types for convenience
pub use board::{apply_move, Board};
pub use error::{GameError, ParseError};
pub use game::{Game, PlayedMove};
pub use moves::{pseudo_legal_moves, Move};
pub use outcome::{classify, is_bare_king, is_repetition, GameOutcome, History};
pub use piece::{Piece, PieceKind, Side};
pub use position::Square;
pub use rules::{all_legal_moves, has_any_legal_move, is_attacked, is_in_check, king_square, legal_moves};
