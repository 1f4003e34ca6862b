use std::fmt;
use std::str::FromStr;

use chaturanga_core::{legal_moves, Board, Move, Side};
use log::warn;
use thiserror::Error;

use crate::search::{SearchLimits, SearchResult, Searcher};

const MIN_DEPTH: u8 = 1;
const MAX_DEPTH: u8 = 6;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown difficulty {0:?} (expected easy, medium or hard)")]
pub struct ParseDifficultyError(String);

/// Menu-level strength setting; each level is a fixed search depth.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Difficulty {
    Easy,
    #[default]
    Medium,
    Hard,
}

impl Difficulty {
    pub fn depth(self) -> u8 {
        match self {
            Difficulty::Easy => 1,
            Difficulty::Medium => 2,
            Difficulty::Hard => 3,
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Difficulty::Easy => write!(f, "easy"),
            Difficulty::Medium => write!(f, "medium"),
            Difficulty::Hard => write!(f, "hard"),
        }
    }
}

impl FromStr for Difficulty {
    type Err = ParseDifficultyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "easy" => Ok(Difficulty::Easy),
            "medium" => Ok(Difficulty::Medium),
            "hard" => Ok(Difficulty::Hard),
            _ => Err(ParseDifficultyError(s.to_string())),
        }
    }
}

/// The computer opponent: a searcher plus the limits it plays with.
pub struct ChessAI {
    max_depth: u8,
    max_nodes: Option<u64>,
    searcher: Searcher,
}

impl ChessAI {
    pub fn new(depth: u8) -> Self {
        Self::with_searcher(depth, Searcher::new())
    }

    /// An opponent whose choices between equal moves are reproducible.
    pub fn seeded(depth: u8, seed: u64) -> Self {
        Self::with_searcher(depth, Searcher::seeded(seed))
    }

    pub fn from_difficulty(difficulty: Difficulty) -> Self {
        Self::new(difficulty.depth())
    }

    fn with_searcher(depth: u8, searcher: Searcher) -> Self {
        ChessAI {
            max_depth: depth.clamp(MIN_DEPTH, MAX_DEPTH),
            max_nodes: None,
            searcher,
        }
    }

    pub fn depth(&self) -> u8 {
        self.max_depth
    }

    pub fn set_max_nodes(&mut self, max_nodes: Option<u64>) {
        self.max_nodes = max_nodes;
    }

    pub fn limits(&self) -> SearchLimits {
        SearchLimits {
            depth: self.max_depth,
            max_nodes: self.max_nodes,
        }
    }

    /// Full search report for `side` on `board`.
    pub fn analyse(&mut self, board: &Board, side: Side) -> SearchResult {
        let limits = self.limits();
        self.searcher.search(board, side, limits)
    }

    /// The move to play for `side`, or `None` when it has none.
    pub fn get_move(&mut self, board: &Board, side: Side) -> Option<Move> {
        let mv = self.analyse(board, side).best_move?;

        match board.piece_at(mv.from) {
            Some(piece) if piece.side == side && legal_moves(board, mv.from).contains(&mv.to) => {
                Some(mv)
            }
            _ => {
                warn!("search proposed {} which is not legal for {}", mv, side);
                None
            }
        }
    }
}

impl Default for ChessAI {
    fn default() -> Self {
        Self::from_difficulty(Difficulty::default())
    }
}
