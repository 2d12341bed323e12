//! Core puzzle engine for the 8-puzzle.
//!
//! This module defines the puzzle's fundamental components:
//! - `Board`: the 3x3 tile layout and methods for locating the blank,
//!   validating and applying moves, scrambling, and checking solvability.
//! - `Direction`: the four moves of the blank tile.
//!
//! Tiles are the values `1..=9`; the value `9` denotes the blank. Every
//! well-formed board contains each value exactly once.
use rand::Rng;
use std::fmt;

/// Side length of the puzzle. The board is always `N` x `N`.
pub const N: usize = 3;

/// Tile value that represents the blank.
pub const BLANK: u8 = 9;

/// A move of the blank tile.
///
/// The variant order (Left, Right, Up, Down) is also the order in which the
/// solver tries moves during expansion; changing it changes tie-breaking and
/// therefore the reported search statistics.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Move the blank one column to the left.
    Left,
    /// Move the blank one column to the right.
    Right,
    /// Move the blank one row up.
    Up,
    /// Move the blank one row down.
    Down,
}

/// All directions in expansion order.
pub const DIRECTIONS: [Direction; 4] = [
    Direction::Left,
    Direction::Right,
    Direction::Up,
    Direction::Down,
];

impl Direction {
    /// Returns the direction that exactly undoes this one.
    ///
    /// # Examples
    /// ```
    /// use eight_puzzle_solver::engine::Direction;
    /// assert_eq!(Direction::Left.opposite(), Direction::Right);
    /// assert_eq!(Direction::Up.opposite(), Direction::Down);
    /// ```
    pub fn opposite(&self) -> Direction {
        match self {
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
        }
    }

    /// Converts the direction to its single-character representation.
    pub fn to_char(&self) -> char {
        match self {
            Direction::Left => 'L',
            Direction::Right => 'R',
            Direction::Up => 'U',
            Direction::Down => 'D',
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Direction::Left => "left",
            Direction::Right => "right",
            Direction::Up => "up",
            Direction::Down => "down",
        };
        write!(f, "{}", name)
    }
}

/// The 3x3 tile layout.
///
/// A `Board` is an immutable value from the solver's point of view: applying
/// a move produces a new `Board` rather than mutating in place, so a search
/// node never aliases its parent's layout.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Board {
    grid: [[u8; N]; N],
}

impl Board {
    /// Creates the canonical goal layout: tiles `1..=8` in row-major order
    /// with the blank in the bottom-right corner.
    ///
    /// # Examples
    /// ```
    /// use eight_puzzle_solver::engine::{Board, BLANK};
    /// let goal = Board::goal();
    /// assert_eq!(goal.tile(0, 0), 1);
    /// assert_eq!(goal.tile(2, 2), BLANK);
    /// ```
    pub fn goal() -> Self {
        let mut grid = [[0u8; N]; N];
        for (r, row) in grid.iter_mut().enumerate() {
            for (c, cell) in row.iter_mut().enumerate() {
                *cell = (r * N + c + 1) as u8;
            }
        }
        Board { grid }
    }

    /// Creates a board from a predefined grid.
    ///
    /// The grid is not validated here; call [`Board::validate`] before
    /// handing the board to the solver.
    pub fn from_grid(grid: [[u8; N]; N]) -> Self {
        Board { grid }
    }

    /// Returns the tile value at row `r`, column `c`.
    ///
    /// # Panics
    /// Panics if `r` or `c` are outside `0..N`.
    pub fn tile(&self, r: usize, c: usize) -> u8 {
        self.grid[r][c]
    }

    /// Checks that the board is a permutation of `1..=9`.
    ///
    /// This is the precondition for every solver entry point: exactly one
    /// blank, every tile value present exactly once.
    pub fn validate(&self) -> Result<(), String> {
        let mut seen = [false; N * N];
        for r in 0..N {
            for c in 0..N {
                let v = self.grid[r][c];
                if !(1..=(N * N) as u8).contains(&v) {
                    return Err(format!("Tile value {} at ({}, {}) is out of range", v, r, c));
                }
                if seen[(v - 1) as usize] {
                    return Err(format!("Tile value {} appears more than once", v));
                }
                seen[(v - 1) as usize] = true;
            }
        }
        Ok(())
    }

    /// Locates the blank tile, scanning row-major.
    ///
    /// # Returns
    /// `Ok((row, col))` of the cell holding [`BLANK`], or `Err` if the board
    /// has no blank. The error case cannot occur for a validated board.
    pub fn blank_position(&self) -> Result<(usize, usize), String> {
        for r in 0..N {
            for c in 0..N {
                if self.grid[r][c] == BLANK {
                    return Ok((r, c));
                }
            }
        }
        Err("Board has no blank tile".to_string())
    }

    /// Returns whether moving the blank at `(row, col)` in `dir` stays on the
    /// board.
    pub fn is_valid_move(blank: (usize, usize), dir: Direction) -> bool {
        let (r, c) = blank;
        match dir {
            Direction::Left => c > 0,
            Direction::Right => c + 1 < N,
            Direction::Up => r > 0,
            Direction::Down => r + 1 < N,
        }
    }

    /// Returns a new board with the blank at `blank` swapped with its
    /// neighbor in `dir`.
    ///
    /// The caller must have checked [`Board::is_valid_move`] first; there is
    /// no bounds checking here.
    ///
    /// # Panics
    /// Panics on an invalid move (the neighbor index leaves the grid).
    pub fn apply_move(&self, blank: (usize, usize), dir: Direction) -> Board {
        let (r, c) = blank;
        let (nr, nc) = match dir {
            Direction::Left => (r, c - 1),
            Direction::Right => (r, c + 1),
            Direction::Up => (r - 1, c),
            Direction::Down => (r + 1, c),
        };
        let mut next = *self;
        next.grid[r][c] = next.grid[nr][nc];
        next.grid[nr][nc] = BLANK;
        next
    }

    /// Returns a scrambled copy of this board.
    ///
    /// Performs `depth` random valid moves of the blank, never undoing the
    /// immediately preceding move, so the result is reachable from this board
    /// in at most `depth` moves. A seeded `SmallRng` makes scrambles
    /// reproducible.
    ///
    /// # Examples
    /// ```
    /// use eight_puzzle_solver::engine::Board;
    /// use rand::rngs::SmallRng;
    /// use rand::SeedableRng;
    ///
    /// let mut rng = SmallRng::seed_from_u64(7);
    /// let scrambled = Board::goal().scrambled(4, &mut rng);
    /// assert!(scrambled.validate().is_ok());
    /// ```
    pub fn scrambled(&self, depth: u32, rng: &mut impl Rng) -> Board {
        let mut board = *self;
        let mut last_move: Option<Direction> = None;

        for _ in 0..depth {
            let blank = board
                .blank_position()
                .expect("scrambled() requires a board with a blank");

            let mut candidates: Vec<Direction> = Vec::with_capacity(4);
            for dir in DIRECTIONS {
                if last_move.map_or(false, |m| dir == m.opposite()) {
                    continue;
                }
                if Board::is_valid_move(blank, dir) {
                    candidates.push(dir);
                }
            }

            // At least two moves are always available on a 3x3 board.
            let chosen = candidates[rng.gen_range(0..candidates.len())];
            board = board.apply_move(blank, chosen);
            last_move = Some(chosen);
        }

        board
    }

    /// Counts inversions among the non-blank tiles in row-major order.
    fn inversions(&self) -> u32 {
        let tiles: Vec<u8> = self
            .grid
            .iter()
            .flatten()
            .copied()
            .filter(|&v| v != BLANK)
            .collect();

        let mut inversions = 0;
        for i in 0..tiles.len() {
            for j in (i + 1)..tiles.len() {
                if tiles[i] > tiles[j] {
                    inversions += 1;
                }
            }
        }
        inversions
    }

    /// Returns whether `other` is reachable from this board via blank moves.
    ///
    /// On an odd-width board a blank move never changes the parity of the
    /// tile permutation, so two layouts are mutually reachable exactly when
    /// their inversion counts have the same parity.
    pub fn same_parity(&self, other: &Board) -> bool {
        self.inversions() % 2 == other.inversions() % 2
    }
}

impl fmt::Display for Board {
    /// Formats the board with one row per line and the blank as a gap.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for r in 0..N {
            for c in 0..N {
                let v = self.grid[r][c];
                if v == BLANK {
                    write!(f, "  ")?;
                } else {
                    write!(f, "{} ", v)?;
                }
            }
            if r < N - 1 {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    #[test]
    fn test_goal_layout() {
        let goal = Board::goal();
        assert_eq!(goal.tile(0, 0), 1);
        assert_eq!(goal.tile(1, 1), 5);
        assert_eq!(goal.tile(2, 2), BLANK);
        assert!(goal.validate().is_ok());
    }

    #[test]
    fn test_blank_position_on_goal() {
        assert_eq!(Board::goal().blank_position(), Ok((2, 2)));
    }

    #[test]
    fn test_blank_position_anywhere() {
        // The blank must be found wherever it sits, and that cell must hold BLANK.
        let board = Board::from_grid([[1, 2, 3], [4, 9, 6], [7, 8, 5]]);
        let (r, c) = board.blank_position().unwrap();
        assert_eq!((r, c), (1, 1));
        assert_eq!(board.tile(r, c), BLANK);
    }

    #[test]
    fn test_validate_rejects_duplicate() {
        let board = Board::from_grid([[1, 1, 3], [4, 5, 6], [7, 8, 9]]);
        let err = board.validate().unwrap_err();
        assert!(err.contains("appears more than once"), "got: {}", err);
    }

    #[test]
    fn test_validate_rejects_out_of_range() {
        let board = Board::from_grid([[0, 2, 3], [4, 5, 6], [7, 8, 9]]);
        assert!(board.validate().is_err());
    }

    #[test]
    fn test_valid_moves_in_corner() {
        // Blank in bottom-right corner: only Left and Up stay on the board.
        assert!(Board::is_valid_move((2, 2), Direction::Left));
        assert!(Board::is_valid_move((2, 2), Direction::Up));
        assert!(!Board::is_valid_move((2, 2), Direction::Right));
        assert!(!Board::is_valid_move((2, 2), Direction::Down));
    }

    #[test]
    fn test_valid_moves_in_center() {
        for dir in DIRECTIONS {
            assert!(Board::is_valid_move((1, 1), dir));
        }
    }

    #[test]
    fn test_apply_move_swaps_blank() {
        let goal = Board::goal();
        let moved = goal.apply_move((2, 2), Direction::Left);
        assert_eq!(moved.tile(2, 2), 8);
        assert_eq!(moved.tile(2, 1), BLANK);
        // The original board is untouched.
        assert_eq!(goal.tile(2, 2), BLANK);
    }

    #[test]
    fn test_apply_move_round_trip() {
        // A move followed by its opposite restores the original layout.
        let board = Board::from_grid([[2, 9, 4], [3, 1, 6], [7, 5, 8]]);
        for dir in DIRECTIONS {
            let blank = board.blank_position().unwrap();
            if !Board::is_valid_move(blank, dir) {
                continue;
            }
            let moved = board.apply_move(blank, dir);
            let back = moved.apply_move(moved.blank_position().unwrap(), dir.opposite());
            assert_eq!(back, board, "round trip failed for {:?}", dir);
        }
    }

    #[test]
    fn test_scrambled_is_valid_and_reachable() {
        let mut rng = SmallRng::seed_from_u64(42);
        let goal = Board::goal();
        let scrambled = goal.scrambled(20, &mut rng);
        assert!(scrambled.validate().is_ok());
        assert!(scrambled.same_parity(&goal));
    }

    #[test]
    fn test_scrambled_determinism() {
        let goal = Board::goal();
        let a = goal.scrambled(10, &mut SmallRng::seed_from_u64(5));
        let b = goal.scrambled(10, &mut SmallRng::seed_from_u64(5));
        assert_eq!(a, b, "same seed must give the same scramble");
    }

    #[test]
    fn test_scrambled_zero_depth_is_identity() {
        let mut rng = SmallRng::seed_from_u64(0);
        let goal = Board::goal();
        assert_eq!(goal.scrambled(0, &mut rng), goal);
    }

    #[test]
    fn test_parity_detects_unsolvable_swap() {
        // Swapping two non-blank tiles flips permutation parity.
        let goal = Board::goal();
        let unsolvable = Board::from_grid([[2, 1, 3], [4, 5, 6], [7, 8, 9]]);
        assert!(unsolvable.validate().is_ok());
        assert!(!unsolvable.same_parity(&goal));
    }

    #[test]
    fn test_parity_preserved_by_moves() {
        let goal = Board::goal();
        let one_away = goal.apply_move((2, 2), Direction::Up);
        assert!(one_away.same_parity(&goal));
    }

    #[test]
    fn test_opposite_is_involutive() {
        for dir in DIRECTIONS {
            assert_eq!(dir.opposite().opposite(), dir);
        }
    }

    #[test]
    fn test_display_blank_as_gap() {
        let shown = format!("{}", Board::goal());
        assert!(shown.starts_with("1 2 3"));
        assert!(!shown.contains('9'), "blank must not be printed as a digit");
    }
}
