//! Heuristic cost-to-go estimates for the 8-puzzle.
//!
//! Both heuristics are admissible for unit-cost moves, which is what makes
//! A* and IDA* return optimal paths when they rely on them.
use crate::engine::{Board, BLANK, N};
use clap::ValueEnum;

/// Counts the cells where `state` differs from `goal`.
///
/// Every mismatched cell is counted, including the cell holding the blank.
/// Counting the blank keeps the estimate consistent with the cell-wise goal
/// test: the count is zero exactly when the goal test succeeds.
///
/// # Arguments
/// * `goal`: the target layout.
/// * `state`: the layout to evaluate.
///
/// # Returns
/// The number of mismatched cells, `0..=9`.
///
/// # Examples
/// ```
/// use eight_puzzle_solver::engine::Board;
/// use eight_puzzle_solver::heuristics::misplaced_tiles;
/// let goal = Board::goal();
/// assert_eq!(misplaced_tiles(&goal, &goal), 0);
/// ```
pub fn misplaced_tiles(goal: &Board, state: &Board) -> u32 {
    let mut count = 0;
    for r in 0..N {
        for c in 0..N {
            if goal.tile(r, c) != state.tile(r, c) {
                count += 1;
            }
        }
    }
    count
}

/// Sums the Manhattan distances of every non-blank tile from its goal cell.
///
/// The blank is excluded: moving it is what the path cost already measures.
/// The sum is a lower bound on the number of moves to reach `goal`, since a
/// single move decreases at most one tile's distance by at most one.
///
/// # Arguments
/// * `goal`: the target layout.
/// * `state`: the layout to evaluate.
///
/// # Returns
/// The total Manhattan distance as `u32`.
pub fn manhattan_distance(goal: &Board, state: &Board) -> u32 {
    let mut total = 0;
    for r in 0..N {
        for c in 0..N {
            let v = state.tile(r, c);
            if v == BLANK {
                continue;
            }
            for gr in 0..N {
                for gc in 0..N {
                    if goal.tile(gr, gc) == v {
                        total += (r as i32 - gr as i32).unsigned_abs()
                            + (c as i32 - gc as i32).unsigned_abs();
                    }
                }
            }
        }
    }
    total
}

/// Selectable heuristic function.
///
/// Greedy best-first search defaults to [`Heuristic::MisplacedTiles`] and A*
/// to [`Heuristic::ManhattanDistance`]; both can be overridden through
/// `SolverConfig`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum Heuristic {
    /// Number of cells that differ from the goal, blank included.
    MisplacedTiles,
    /// Sum of per-tile Manhattan distances to the goal cells, blank excluded.
    ManhattanDistance,
}

impl Heuristic {
    /// Evaluates this heuristic for `state` against `goal`.
    pub fn evaluate(&self, goal: &Board, state: &Board) -> u32 {
        match self {
            Heuristic::MisplacedTiles => misplaced_tiles(goal, state),
            Heuristic::ManhattanDistance => manhattan_distance(goal, state),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::{Direction, DIRECTIONS};
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    #[test]
    fn test_both_heuristics_zero_at_goal() {
        let goal = Board::goal();
        assert_eq!(misplaced_tiles(&goal, &goal), 0);
        assert_eq!(manhattan_distance(&goal, &goal), 0);
    }

    #[test]
    fn test_misplaced_counts_blank_cell() {
        // One move away: the moved tile and the blank are both out of place.
        let goal = Board::goal();
        let state = goal.apply_move((2, 2), Direction::Left);
        assert_eq!(misplaced_tiles(&goal, &state), 2);
    }

    #[test]
    fn test_manhattan_excludes_blank() {
        // Same one-move state: only tile 8 is displaced, by one cell.
        let goal = Board::goal();
        let state = goal.apply_move((2, 2), Direction::Left);
        assert_eq!(manhattan_distance(&goal, &state), 1);
    }

    #[test]
    fn test_manhattan_distance_known_value() {
        let goal = Board::goal();
        // Tile 1 moved from (0,0) to (1,1) position, tile 5 to (0,0): each 2 away.
        let state = Board::from_grid([[5, 2, 3], [4, 1, 6], [7, 8, 9]]);
        assert_eq!(manhattan_distance(&goal, &state), 4);
    }

    #[test]
    fn test_manhattan_is_admissible_on_short_scrambles() {
        // Any state k moves from the goal must have distance <= k.
        let goal = Board::goal();
        for depth in 0..=6u32 {
            for seed in 0..20u64 {
                let mut rng = SmallRng::seed_from_u64(seed);
                let state = goal.scrambled(depth, &mut rng);
                assert!(
                    manhattan_distance(&goal, &state) <= depth,
                    "inadmissible estimate at depth {} seed {}",
                    depth,
                    seed
                );
            }
        }
    }

    #[test]
    fn test_manhattan_with_nonstandard_goal() {
        // Heuristics measure distance to the supplied goal, not to Board::goal().
        let goal = Board::goal().apply_move((2, 2), Direction::Up);
        assert_eq!(manhattan_distance(&goal, &goal), 0);
        assert_eq!(misplaced_tiles(&goal, &goal), 0);
    }

    #[test]
    fn test_heuristic_enum_dispatch() {
        let goal = Board::goal();
        let mut state = goal;
        for dir in DIRECTIONS {
            let blank = state.blank_position().unwrap();
            if Board::is_valid_move(blank, dir) {
                state = state.apply_move(blank, dir);
            }
        }
        assert_eq!(
            Heuristic::MisplacedTiles.evaluate(&goal, &state),
            misplaced_tiles(&goal, &state)
        );
        assert_eq!(
            Heuristic::ManhattanDistance.evaluate(&goal, &state),
            manhattan_distance(&goal, &state)
        );
    }
}
