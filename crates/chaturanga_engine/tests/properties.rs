use chaturanga_core::{all_legal_moves, apply_move, classify, Board, Side};
use chaturanga_engine::{SearchLimits, Searcher};
use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn random_position(seed: u64, plies: usize) -> (Board, Side) {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut board = Board::initial();
    let mut side = Side::First;
    for _ in 0..plies {
        if classify(&board, side).is_terminal() {
            break;
        }
        let moves = all_legal_moves(&board, side);
        let mv = moves[rng.gen_range(0..moves.len())];
        board = apply_move(&board, mv.from, mv.to);
        side = side.opponent();
    }
    (board, side)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(16))]

    #[test]
    fn chosen_move_is_always_legal(seed in any::<u64>(), plies in 0..50usize) {
        let (board, side) = random_position(seed, plies);
        let legal = all_legal_moves(&board, side);
        let result = Searcher::seeded(seed).search(&board, side, SearchLimits::depth(2));

        match result.best_move {
            Some(mv) => {
                prop_assert!(legal.contains(&mv));
                prop_assert!(result.candidates.contains(&mv));
            }
            None => prop_assert!(legal.is_empty()),
        }
        for candidate in &result.candidates {
            prop_assert!(legal.contains(candidate));
        }
    }

    #[test]
    fn node_budget_never_drops_the_move(seed in any::<u64>(), plies in 0..30usize, budget in 1..200u64) {
        let (board, side) = random_position(seed, plies);
        let result = Searcher::seeded(seed)
            .search(&board, side, SearchLimits::depth(3).with_max_nodes(budget));
        prop_assert_eq!(result.best_move.is_some(), !all_legal_moves(&board, side).is_empty());
    }
}
