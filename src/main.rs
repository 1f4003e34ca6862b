use chaturanga_core::{Game, GameOutcome, Side};
use chaturanga_engine::ChessAI;
use clap::Parser;
use log::{info, warn};
use rayon::prelude::*;
use std::time::Instant;

#[derive(Parser, Debug)]
#[command(
    name = "chaturanga",
    about = "Play computer-vs-computer games of the chaturanga variant"
)]
struct Args {
    /// Number of games to play (run in parallel)
    #[arg(long, default_value_t = 1)]
    games: usize,

    /// Search depth for White
    #[arg(long, default_value_t = 2)]
    white_depth: u8,

    /// Search depth for Black
    #[arg(long, default_value_t = 2)]
    black_depth: u8,

    /// Node budget per search (unlimited when omitted)
    #[arg(long)]
    max_nodes: Option<u64>,

    /// Stop a game after this many plies and call it unfinished
    #[arg(long, default_value_t = 200)]
    max_plies: usize,

    /// Base seed; game i uses seed + i for both sides' tie-breaks
    #[arg(long)]
    seed: Option<u64>,

    /// Print the board after every game
    #[arg(long)]
    show_board: bool,
}

struct GameReport {
    index: usize,
    outcome: GameOutcome,
    moves: Vec<String>,
    final_board: String,
}

fn opponent(depth: u8, max_nodes: Option<u64>, seed: Option<u64>) -> ChessAI {
    let mut ai = match seed {
        Some(seed) => ChessAI::seeded(depth, seed),
        None => ChessAI::new(depth),
    };
    ai.set_max_nodes(max_nodes);
    ai
}

fn play_game(index: usize, args: &Args) -> GameReport {
    let seed = args.seed.map(|s| s.wrapping_add(index as u64));
    let mut white = opponent(args.white_depth, args.max_nodes, seed);
    let mut black = opponent(args.black_depth, args.max_nodes, seed.map(|s| !s));
    let mut game = Game::new();

    while !game.is_over() && game.moves().len() < args.max_plies {
        let side = game.side_to_move();
        let ai = match side {
            Side::First => &mut white,
            Side::Second => &mut black,
        };
        let Some(mv) = ai.get_move(game.board(), side) else {
            warn!("game {}: {} found no move", index, side);
            break;
        };
        if let Err(err) = game.play(mv) {
            warn!("game {}: {} rejected: {}", index, mv, err);
            break;
        }
    }

    GameReport {
        index,
        outcome: game.outcome(),
        moves: game.moves().iter().map(|played| played.mv.to_string()).collect(),
        final_board: game.board().to_string(),
    }
}

fn main() {
    env_logger::init();
    let args = Args::parse();
    let start = Instant::now();

    info!(
        "playing {} game(s): white depth {}, black depth {}",
        args.games, args.white_depth, args.black_depth
    );

    let mut reports: Vec<GameReport> = (0..args.games)
        .into_par_iter()
        .map(|index| play_game(index, &args))
        .collect();
    reports.sort_by_key(|report| report.index);

    let (mut white_wins, mut black_wins, mut draws, mut unfinished) = (0, 0, 0, 0);
    for report in &reports {
        println!(
            "game {} ({} plies): {}",
            report.index + 1,
            report.moves.len(),
            report.outcome
        );
        println!("  {}", report.moves.join(" "));
        if args.show_board {
            println!("{}", report.final_board);
        }

        match report.outcome.winner() {
            Some(Side::First) => white_wins += 1,
            Some(Side::Second) => black_wins += 1,
            None if report.outcome == GameOutcome::RepetitionDraw => draws += 1,
            None => unfinished += 1,
        }
    }

    println!(
        "\nWhite {} - Black {} - draws {} - unfinished {} ({:?})",
        white_wins,
        black_wins,
        draws,
        unfinished,
        start.elapsed()
    );
}
