//! # 8-Puzzle Solver Library
//!
//! This library provides the core puzzle mechanics for the 8-puzzle (the
//! 3x3 sliding-tile puzzle) and a search engine that explores it with five
//! classical algorithms: breadth-first search, depth-limited depth-first
//! search, greedy best-first search, A*, and iterative-deepening A*.
//!
//! It is used by two binaries:
//! - `solve`: runs one algorithm on one instance and prints the move
//!   sequence and search statistics.
//! - `algorithm_benchmark`: runs every algorithm over a set of scrambled
//!   boards and compares path lengths and statistics.
//!
//! ## Modules
//! - `engine`: the board representation (`Board`), blank moves
//!   (`Direction`), scrambling, and solvability checking.
//! - `heuristics`: the misplaced-tiles and Manhattan-distance estimates and
//!   the `Heuristic` selection enum.
//! - `solver`: the search-node arena, the frontier disciplines, the unified
//!   expansion loop behind all five algorithms, and search statistics.
//! - `utils`: parsing board layouts from text rows.

pub mod engine;
pub mod heuristics;
pub mod solver;
pub mod utils;
