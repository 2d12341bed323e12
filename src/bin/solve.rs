use clap::Parser;
use eight_puzzle_solver::engine::Board;
use eight_puzzle_solver::heuristics::Heuristic;
use eight_puzzle_solver::solver::{solve, Algorithm, Outcome, SolverConfig};
use eight_puzzle_solver::utils::board_from_str_array;
use rand::rngs::SmallRng;
use rand::SeedableRng;
use std::fs;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Args {
    /// Search algorithm to run
    #[clap(short, long, value_enum)]
    algorithm: Algorithm,

    /// Heuristic override (defaults: GBFS/IDA* misplaced-tiles, A* Manhattan)
    #[clap(long, value_enum)]
    heuristic: Option<Heuristic>,

    /// Depth bound for DFS
    #[clap(long, default_value_t = 17)]
    max_depth: u32,

    /// Weight w in A*'s evaluation f = w*g + (1-w)*h
    #[clap(long, default_value_t = 1.0)]
    weight: f64,

    /// Number of random moves used to scramble the goal into a start state
    /// (ignored when a board file is given)
    #[clap(short, long, default_value_t = 4)]
    scramble: u32,

    /// Seed for the scramble
    #[clap(long, default_value_t = 0)]
    seed: u64,

    /// Drop states that were already generated earlier in the search
    #[clap(long)]
    dedupe: bool,

    /// Also try the move that undoes the previous one during expansion
    #[clap(long)]
    no_reversal_pruning: bool,

    /// Skip the permutation-parity solvability check
    #[clap(long)]
    no_solvability_check: bool,

    /// Abort after this many generated nodes (0 removes the cap)
    #[clap(long, default_value_t = 1_000_000)]
    node_budget: u64,

    /// Path to a start-board file (3 lines of 3 digits, 9 is the blank)
    board_file: Option<PathBuf>,
}

fn read_board_file(path: &PathBuf) -> Result<Board, String> {
    let content = fs::read_to_string(path).map_err(|e| format!("Failed to read file: {}", e))?;

    let lines: Vec<&str> = content
        .lines()
        .map(|s| s.trim())
        .filter(|s| !s.is_empty())
        .collect();

    board_from_str_array(&lines).map_err(|e| format!("Invalid board format: {}", e))
}

fn main() {
    let args = Args::parse();

    let goal = Board::goal();
    let start = match &args.board_file {
        Some(path) => read_board_file(path)
            .unwrap_or_else(|e| panic!("Failed to read board from {}: {}", path.display(), e)),
        None => {
            let mut rng = SmallRng::seed_from_u64(args.seed);
            goal.scrambled(args.scramble, &mut rng)
        }
    };

    println!("Goal state tile configuration:");
    println!("{}\n", goal);
    println!("Start state tile configuration:");
    println!("{}\n", start);

    let mut config = SolverConfig::new(args.algorithm);
    config.heuristic = args.heuristic;
    config.max_depth = args.max_depth;
    config.weight = args.weight;
    config.dedupe_states = args.dedupe;
    config.prune_reversals = !args.no_reversal_pruning;
    config.check_solvability = !args.no_solvability_check;
    config.node_budget = if args.node_budget == 0 {
        None
    } else {
        Some(args.node_budget)
    };

    println!("Searching with {}...\n", args.algorithm.name());

    let report = solve(&goal, &start, &config).unwrap_or_else(|e| panic!("Search failed: {}", e));

    match report.outcome {
        Outcome::Solved(solution) => {
            println!(
                "Goal state found at depth {} ({})",
                solution.moves.len(),
                if solution.moves.is_empty() {
                    "already solved".to_string()
                } else {
                    solution.moves_str()
                }
            );

            // Replay the path from the start, one board per move.
            let mut board = start;
            println!("\nPath to the goal state:");
            println!("{}\n", board);
            for dir in &solution.moves {
                let blank = board
                    .blank_position()
                    .expect("replayed board lost its blank");
                board = board.apply_move(blank, *dir);
                println!("move blank tile: {}", dir);
                println!("{}\n", board);
            }
        }
        Outcome::Exhausted => println!("No solution found: the frontier was exhausted."),
        Outcome::Unsolvable => {
            println!("No solution exists: start and goal have different permutation parity.")
        }
        Outcome::LimitExceeded => println!("Search limit exceeded before a solution was found."),
    }

    println!("\n{}", report.stats);
}
