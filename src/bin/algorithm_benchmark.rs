use eight_puzzle_solver::engine::Board;
use eight_puzzle_solver::solver::{solve, Algorithm, Outcome, SolverConfig};
use rand::rngs::SmallRng;
use rand::SeedableRng;
use std::collections::HashMap;

const NUM_SCRAMBLES: usize = 20;
const SCRAMBLE_DEPTH: u32 = 8;
const START_SEED: u64 = 0;

const ALGORITHMS: [Algorithm; 5] = [
    Algorithm::Bfs,
    Algorithm::Dfs,
    Algorithm::Gbfs,
    Algorithm::AStar,
    Algorithm::IdaStar,
];

fn main() {
    let goal = Board::goal();

    let mut path_lengths: HashMap<&'static str, Vec<usize>> = HashMap::new();
    let mut expanded_counts: HashMap<&'static str, Vec<u64>> = HashMap::new();
    for algorithm in &ALGORITHMS {
        path_lengths.insert(algorithm.name(), Vec::new());
        expanded_counts.insert(algorithm.name(), Vec::new());
    }

    println!(
        "Benchmarking {} algorithms on {} scrambles of depth {}...",
        ALGORITHMS.len(),
        NUM_SCRAMBLES,
        SCRAMBLE_DEPTH
    );

    for scramble_idx in 0..NUM_SCRAMBLES {
        let seed = START_SEED + scramble_idx as u64;
        let mut rng = SmallRng::seed_from_u64(seed);
        let start = goal.scrambled(SCRAMBLE_DEPTH, &mut rng);

        println!("\nScramble {} (seed {}):", scramble_idx, seed);

        for algorithm in &ALGORITHMS {
            let config = SolverConfig::new(*algorithm);
            let report = match solve(&goal, &start, &config) {
                Ok(report) => report,
                Err(e) => {
                    eprintln!("  {:<5} failed: {}", algorithm.name(), e);
                    continue;
                }
            };

            match report.outcome {
                Outcome::Solved(solution) => {
                    println!(
                        "  {:<5} moves: {:<3} expanded: {:<8} generated: {:<8} peak frontier: {:<7} time: {:?}",
                        algorithm.name(),
                        solution.moves.len(),
                        report.stats.nodes_expanded,
                        report.stats.nodes_generated,
                        report.stats.peak_frontier_size,
                        report.stats.elapsed
                    );
                    path_lengths
                        .get_mut(algorithm.name())
                        .expect("algorithm registered above")
                        .push(solution.moves.len());
                    expanded_counts
                        .get_mut(algorithm.name())
                        .expect("algorithm registered above")
                        .push(report.stats.nodes_expanded);
                }
                other => {
                    println!("  {:<5} no solution: {:?}", algorithm.name(), other);
                }
            }
        }
    }

    println!("\n--- Benchmark complete ---");
    println!("Scrambles evaluated: {}", NUM_SCRAMBLES);
    println!("\n--- Averages over solved instances ---");

    let mut sorted_averages: Vec<(&str, f64, f64)> = Vec::new();
    for algorithm in &ALGORITHMS {
        let lengths = &path_lengths[algorithm.name()];
        if lengths.is_empty() {
            println!("{:<5}: no instances solved", algorithm.name());
            continue;
        }
        let avg_len = lengths.iter().sum::<usize>() as f64 / lengths.len() as f64;
        let expanded = &expanded_counts[algorithm.name()];
        let avg_expanded = expanded.iter().sum::<u64>() as f64 / expanded.len() as f64;
        sorted_averages.push((algorithm.name(), avg_len, avg_expanded));
    }

    // Sort by average expanded nodes ascending: cheapest search first.
    sorted_averages.sort_by(|a, b| a.2.partial_cmp(&b.2).unwrap_or(std::cmp::Ordering::Equal));

    for (name, avg_len, avg_expanded) in sorted_averages {
        println!(
            "{:<5}: average path length = {:.2}, average nodes expanded = {:.1}",
            name, avg_len, avg_expanded
        );
    }
}
