// Depth-limited minimax with alpha-beta pruning
use chaturanga_core::{all_legal_moves, is_bare_king, Board, Move, Side};
use log::{debug, info, trace};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use std::time::Instant;

use crate::evaluation::{evaluate_position, Score};

/// How far a search may go. Both bounds are explicit so a search is
/// reproducible and its cost can be capped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchLimits {
    /// Plies to look ahead, counting the root move.
    pub depth: u8,
    /// Once this many nodes have been visited every further node is scored
    /// statically instead of expanded.
    pub max_nodes: Option<u64>,
}

impl SearchLimits {
    pub fn depth(depth: u8) -> Self {
        Self {
            depth,
            max_nodes: None,
        }
    }

    pub fn with_max_nodes(mut self, max_nodes: u64) -> Self {
        self.max_nodes = Some(max_nodes);
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchResult {
    pub best_move: Option<Move>,
    /// Value of the best move, White-positive.
    pub score: Score,
    pub nodes: u64,
    /// Every root move that reached `score`; `best_move` is drawn from these.
    pub candidates: Vec<Move>,
}

/// Runs searches. Owns the random source used to break ties between equally
/// valued root moves and the node counter of the current search.
pub struct Searcher {
    rng: StdRng,
    nodes: u64,
    node_limit: u64,
}

impl Searcher {
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_entropy())
    }

    /// A searcher whose tie-breaks are reproducible.
    pub fn seeded(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }

    fn with_rng(rng: StdRng) -> Self {
        Self {
            rng,
            nodes: 0,
            node_limit: u64::MAX,
        }
    }

    /// Picks a move for `side`. Each root move is scored by a full-window
    /// search one ply shallower; ties for the best score are broken at random.
    pub fn search(&mut self, board: &Board, side: Side, limits: SearchLimits) -> SearchResult {
        let start_time = Instant::now();
        self.nodes = 0;
        self.node_limit = limits.max_nodes.unwrap_or(u64::MAX);

        let moves = all_legal_moves(board, side);
        if moves.is_empty() {
            info!("{} has no legal move", side);
            return SearchResult {
                best_move: None,
                score: evaluate_position(board, side),
                nodes: 0,
                candidates: Vec::new(),
            };
        }

        let child_depth = limits.depth.saturating_sub(1);
        let mut best_score = Score::worst_for(side);
        let mut candidates = Vec::new();

        for mv in moves {
            let child = board.with_move(mv.from, mv.to);
            let score = self.minimax(
                &child,
                child_depth,
                Score::SecondWins,
                Score::FirstWins,
                side.opponent(),
            );
            debug!("{} {} scores {}", side, mv, score);

            if score.better_for(best_score, side) {
                best_score = score;
                candidates.clear();
                candidates.push(mv);
            } else if score == best_score {
                candidates.push(mv);
            }
        }

        let best_move = candidates.choose(&mut self.rng).copied();
        if best_score.is_decisive() {
            debug!("{} sees a forced result: {}", side, best_score);
        }
        info!(
            "depth {} search for {}: {:?} scores {} ({} tied, {} nodes, {:?})",
            limits.depth,
            side,
            best_move.map(|mv| mv.to_string()),
            best_score,
            candidates.len(),
            self.nodes,
            start_time.elapsed()
        );

        SearchResult {
            best_move,
            score: best_score,
            nodes: self.nodes,
            candidates,
        }
    }

    fn minimax(
        &mut self,
        board: &Board,
        depth: u8,
        mut alpha: Score,
        mut beta: Score,
        side: Side,
    ) -> Score {
        self.nodes += 1;

        if depth == 0 || self.nodes >= self.node_limit {
            return evaluate_position(board, side);
        }

        // Out of moves or down to the King: `side` has lost.
        let moves = all_legal_moves(board, side);
        if moves.is_empty() || is_bare_king(board, side) {
            return Score::win_for(side.opponent());
        }

        let mut best = Score::worst_for(side);
        for mv in moves {
            let child = board.with_move(mv.from, mv.to);
            let score = self.minimax(&child, depth - 1, alpha, beta, side.opponent());

            match side {
                Side::First => {
                    best = best.max(score);
                    alpha = alpha.max(score);
                }
                Side::Second => {
                    best = best.min(score);
                    beta = beta.min(score);
                }
            }

            if beta <= alpha {
                trace!("cutoff at depth {} after {}", depth, mv);
                break;
            }
        }

        best
    }
}

impl Default for Searcher {
    fn default() -> Self {
        Self::new()
    }
}

/// Best move for `side` searching `depth` plies, or `None` when `side` has
/// no legal move.
pub fn find_best_move(board: &Board, depth: u8, side: Side) -> Option<Move> {
    Searcher::new()
        .search(board, side, SearchLimits::depth(depth))
        .best_move
}
