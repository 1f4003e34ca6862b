pub mod ai;
pub mod evaluation;
pub mod search;

pub use ai::{ChessAI, Difficulty, ParseDifficultyError};
pub use evaluation::{evaluate_position, material_balance, Score};
pub use search::{find_best_move, SearchLimits, SearchResult, Searcher};
