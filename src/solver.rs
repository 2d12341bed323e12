//! Graph-search engine for the 8-puzzle.
//!
//! Five algorithms share one expansion loop; they differ only in the
//! frontier's ordering discipline and in how nodes are scored:
//! - BFS: FIFO frontier, no heuristic. Optimal for unit-cost moves.
//! - DFS: LIFO frontier, depth-limited by `SolverConfig::max_depth`.
//! - Greedy best-first: frontier ordered by `h` alone.
//! - A*: frontier ordered by `f = w*g + (1-w)*h`.
//! - IDA*: iterative deepening on `f = g + h`, restarting from the root with
//!   a raised bound each iteration.
//!
//! Search nodes live in an arena (`Vec<SearchNode>`); parent links are arena
//! indices, and the frontier holds indices too, so dropping the arena tears
//! the whole search tree down at once. Each call to [`solve`] owns its own
//! frontier and arena; nothing is shared between calls.
use crate::engine::{Board, Direction, DIRECTIONS};
use crate::heuristics::Heuristic;
use clap::ValueEnum;
use rustc_hash::FxHashSet;
use std::fmt;
use std::time::{Duration, Instant};

/// The available search algorithms.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum Algorithm {
    /// Breadth-first search.
    Bfs,
    /// Depth-first search, limited by `SolverConfig::max_depth`.
    Dfs,
    /// Greedy best-first search.
    Gbfs,
    /// A* with a configurable weight on the path cost.
    AStar,
    /// Iterative-deepening A*.
    IdaStar,
}

impl Algorithm {
    /// Short display name, used by the binaries.
    pub fn name(&self) -> &'static str {
        match self {
            Algorithm::Bfs => "BFS",
            Algorithm::Dfs => "DFS",
            Algorithm::Gbfs => "GBFS",
            Algorithm::AStar => "A*",
            Algorithm::IdaStar => "IDA*",
        }
    }
}

/// Tuning knobs for a search. Obtain defaults via [`SolverConfig::new`].
#[derive(Clone, Debug)]
pub struct SolverConfig {
    /// Which algorithm to run.
    pub algorithm: Algorithm,
    /// Heuristic override. `None` selects the algorithm's default:
    /// misplaced tiles for GBFS and IDA*, Manhattan distance for A*.
    pub heuristic: Option<Heuristic>,
    /// Depth bound for DFS: a popped node whose path cost exceeds this is
    /// discarded without being goal-tested or expanded.
    pub max_depth: u32,
    /// Weight `w` in A*'s evaluation `f = w*g + (1-w)*h`.
    ///
    /// The default of 1.0 reduces A* to uniform-cost search, which is optimal
    /// for unit-cost moves. Any `w` keeping `f` at or above the true
    /// remaining cost preserves optimality; `w = 0.5` orders identically to
    /// the classic `g + h`.
    pub weight: f64,
    /// Skip the move that exactly undoes the move that created the current
    /// node. Cuts the branching factor from 4 to at most 3; longer cycles
    /// are still explored.
    pub prune_reversals: bool,
    /// Drop generated states that were already generated earlier in this
    /// search. Off by default: enabling it changes every reported statistic
    /// relative to the naive search.
    pub dedupe_states: bool,
    /// Reject start layouts whose permutation parity differs from the goal's
    /// before entering the expansion loop.
    pub check_solvability: bool,
    /// Abort with [`Outcome::LimitExceeded`] once this many nodes have been
    /// generated. `None` removes the cap.
    pub node_budget: Option<u64>,
    /// Cap on IDA* outer iterations, so an exhausted bound sequence cannot
    /// restart forever.
    pub max_idastar_iterations: u32,
}

impl SolverConfig {
    /// Default configuration for `algorithm`: depth bound 17, weight 1.0,
    /// reversal pruning on, deduplication off, solvability check on, a node
    /// budget of one million, and at most 100 IDA* iterations.
    pub fn new(algorithm: Algorithm) -> Self {
        SolverConfig {
            algorithm,
            heuristic: None,
            max_depth: 17,
            weight: 1.0,
            prune_reversals: true,
            dedupe_states: false,
            check_solvability: true,
            node_budget: Some(1_000_000),
            max_idastar_iterations: 100,
        }
    }

    /// The heuristic this configuration resolves to for its algorithm.
    pub fn effective_heuristic(&self) -> Heuristic {
        self.heuristic.unwrap_or(match self.algorithm {
            Algorithm::AStar => Heuristic::ManhattanDistance,
            _ => Heuristic::MisplacedTiles,
        })
    }
}

/// Counters describing how much work a search performed.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Nodes popped from the frontier (the root counts once).
    pub nodes_expanded: u64,
    /// Nodes created, including the root.
    pub nodes_generated: u64,
    /// Deepest path cost among generated nodes.
    pub max_depth: u32,
    /// Largest frontier size observed; a proxy for memory consumed.
    pub peak_frontier_size: usize,
    /// Wall-clock time for the whole call, IDA* restarts included.
    pub elapsed: Duration,
}

impl fmt::Display for SearchStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Nodes expanded:     {}", self.nodes_expanded)?;
        writeln!(f, "Nodes generated:    {}", self.nodes_generated)?;
        writeln!(f, "Max depth reached:  {}", self.max_depth)?;
        writeln!(f, "Peak frontier size: {}", self.peak_frontier_size)?;
        write!(f, "Elapsed time:       {:?}", self.elapsed)
    }
}

/// A root-to-goal move sequence.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Solution {
    /// Moves of the blank, in the order they must be applied to the start
    /// layout to reach the goal.
    pub moves: Vec<Direction>,
}

impl Solution {
    /// The moves as a compact string, e.g. `"RDL"`.
    pub fn moves_str(&self) -> String {
        self.moves.iter().map(|d| d.to_char()).collect()
    }
}

/// How a search ended.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Outcome {
    /// The goal was reached; the payload is the move sequence.
    Solved(Solution),
    /// The frontier emptied (or every IDA* bound was exhausted) without
    /// reaching the goal.
    Exhausted,
    /// The start layout's permutation parity rules out reaching the goal.
    /// Only produced when `SolverConfig::check_solvability` is on.
    Unsolvable,
    /// The node budget or the IDA* iteration cap was hit first.
    LimitExceeded,
}

/// The result of one [`solve`] call: how it ended plus the work counters.
#[derive(Clone, Debug)]
pub struct SearchReport {
    pub outcome: Outcome,
    pub stats: SearchStats,
}

/// Frontier ordering discipline; this is the only thing distinguishing the
/// pop order of the four frontier-based algorithms.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Discipline {
    /// Append to the tail, pop from the head (BFS).
    Fifo,
    /// Push to the head, pop from the head (DFS).
    Lifo,
    /// Keep sorted ascending by `h`; ties keep insertion order (GBFS).
    PriorityByH,
    /// Keep sorted ascending by `f`; ties keep insertion order (A*, IDA*).
    PriorityByF,
}

/// A search node stored in the arena.
///
/// `parent` is an arena index rather than a reference, so the whole tree is
/// freed by dropping the arena.
#[derive(Clone, Debug)]
struct SearchNode {
    board: Board,
    g: u32,
    h: u32,
    f: f64,
    moved: Option<Direction>,
    parent: Option<usize>,
}

/// The set of generated-but-not-expanded nodes, as arena indices in pop
/// order. All disciplines pop from the head; the priority disciplines keep
/// the queue pre-sorted at insertion time.
struct Frontier {
    discipline: Discipline,
    queue: std::collections::VecDeque<usize>,
}

impl Frontier {
    fn new(discipline: Discipline) -> Self {
        Frontier {
            discipline,
            queue: std::collections::VecDeque::new(),
        }
    }

    fn len(&self) -> usize {
        self.queue.len()
    }

    /// Inserts `idx` according to the discipline.
    ///
    /// The priority disciplines scan for the first entry with a strictly
    /// greater key and insert immediately before it, so earlier insertions
    /// win ties. This reproduces the deterministic tie-breaking the search
    /// statistics depend on.
    fn insert(&mut self, idx: usize, nodes: &[SearchNode]) {
        match self.discipline {
            Discipline::Fifo => self.queue.push_back(idx),
            Discipline::Lifo => self.queue.push_front(idx),
            Discipline::PriorityByH => {
                let key = nodes[idx].h;
                let pos = self
                    .queue
                    .iter()
                    .position(|&i| nodes[i].h > key)
                    .unwrap_or(self.queue.len());
                self.queue.insert(pos, idx);
            }
            Discipline::PriorityByF => {
                let key = nodes[idx].f;
                let pos = self
                    .queue
                    .iter()
                    .position(|&i| nodes[i].f > key)
                    .unwrap_or(self.queue.len());
                self.queue.insert(pos, idx);
            }
        }
    }

    fn pop(&mut self) -> Option<usize> {
        self.queue.pop_front()
    }
}

/// How a node's `h` and `f` are computed.
#[derive(Clone, Copy)]
enum Scoring {
    /// No heuristic; `h` and `f` stay zero (BFS, DFS).
    Uninformed,
    /// `f` mirrors `h` (GBFS orders by `h` anyway).
    Greedy(Heuristic),
    /// `f = w*g + (1-w)*h` (A*).
    Weighted { heuristic: Heuristic, weight: f64 },
    /// `f = g + h` exactly (IDA*).
    CostPlusHeuristic(Heuristic),
}

impl Scoring {
    fn evaluate(&self, goal: &Board, board: &Board, g: u32) -> (u32, f64) {
        match *self {
            Scoring::Uninformed => (0, 0.0),
            Scoring::Greedy(heuristic) => {
                let h = heuristic.evaluate(goal, board);
                (h, f64::from(h))
            }
            Scoring::Weighted { heuristic, weight } => {
                let h = heuristic.evaluate(goal, board);
                let f = weight * f64::from(g) + (1.0 - weight) * f64::from(h);
                (h, f)
            }
            Scoring::CostPlusHeuristic(heuristic) => {
                let h = heuristic.evaluate(goal, board);
                (h, f64::from(g + h))
            }
        }
    }
}

/// Bounds applied inside a single expansion run.
#[derive(Clone, Copy)]
struct RunLimits {
    /// Popped nodes with `g` beyond this are discarded unexpanded (DFS).
    depth_bound: Option<u32>,
    /// Generated children with `f` beyond this are pruned instead of
    /// inserted (IDA* inner runs).
    f_bound: Option<f64>,
}

/// Result of a single expansion run.
enum RunOutcome {
    Solved(Solution),
    /// The frontier emptied. `next_bound` is the smallest `f` among children
    /// pruned by the f-bound, if any; the IDA* driver restarts with it.
    Exhausted { next_bound: Option<f64> },
    LimitExceeded,
}

/// Searches for a move sequence taking `start` to `goal`.
///
/// # Arguments
/// * `goal`: the target layout.
/// * `start`: the initial layout.
/// * `config`: algorithm selection and tuning knobs.
///
/// # Returns
/// `Ok(SearchReport)` describing how the search ended, or `Err` if either
/// layout is not a valid permutation of `1..=9`. Unsolvable instances and
/// exceeded budgets are reported through [`Outcome`], not as errors.
///
/// # Examples
/// ```
/// use eight_puzzle_solver::engine::{Board, Direction};
/// use eight_puzzle_solver::solver::{solve, Algorithm, Outcome, SolverConfig};
///
/// let goal = Board::goal();
/// let start = goal.apply_move((2, 2), Direction::Left);
/// let report = solve(&goal, &start, &SolverConfig::new(Algorithm::Bfs)).unwrap();
/// match report.outcome {
///     Outcome::Solved(solution) => assert_eq!(solution.moves, vec![Direction::Right]),
///     other => panic!("expected a solution, got {:?}", other),
/// }
/// ```
pub fn solve(goal: &Board, start: &Board, config: &SolverConfig) -> Result<SearchReport, String> {
    goal.validate()
        .map_err(|e| format!("Invalid goal layout: {}", e))?;
    start
        .validate()
        .map_err(|e| format!("Invalid start layout: {}", e))?;

    let started = Instant::now();
    let mut stats = SearchStats::default();

    if config.check_solvability && !start.same_parity(goal) {
        stats.elapsed = started.elapsed();
        return Ok(SearchReport {
            outcome: Outcome::Unsolvable,
            stats,
        });
    }

    let heuristic = config.effective_heuristic();
    let outcome = match config.algorithm {
        Algorithm::Bfs => run_single(
            goal,
            start,
            Discipline::Fifo,
            Scoring::Uninformed,
            RunLimits {
                depth_bound: None,
                f_bound: None,
            },
            config,
            &mut stats,
        )?,
        Algorithm::Dfs => run_single(
            goal,
            start,
            Discipline::Lifo,
            Scoring::Uninformed,
            RunLimits {
                depth_bound: Some(config.max_depth),
                f_bound: None,
            },
            config,
            &mut stats,
        )?,
        Algorithm::Gbfs => run_single(
            goal,
            start,
            Discipline::PriorityByH,
            Scoring::Greedy(heuristic),
            RunLimits {
                depth_bound: None,
                f_bound: None,
            },
            config,
            &mut stats,
        )?,
        Algorithm::AStar => run_single(
            goal,
            start,
            Discipline::PriorityByF,
            Scoring::Weighted {
                heuristic,
                weight: config.weight,
            },
            RunLimits {
                depth_bound: None,
                f_bound: None,
            },
            config,
            &mut stats,
        )?,
        Algorithm::IdaStar => run_idastar(goal, start, heuristic, config, &mut stats)?,
    };

    stats.elapsed = started.elapsed();
    Ok(SearchReport { outcome, stats })
}

/// Runs one expansion loop to completion and maps its outcome.
fn run_single(
    goal: &Board,
    start: &Board,
    discipline: Discipline,
    scoring: Scoring,
    limits: RunLimits,
    config: &SolverConfig,
    stats: &mut SearchStats,
) -> Result<Outcome, String> {
    Ok(
        match run_expansion(goal, start, discipline, scoring, limits, config, stats)? {
            RunOutcome::Solved(solution) => Outcome::Solved(solution),
            RunOutcome::Exhausted { .. } => Outcome::Exhausted,
            RunOutcome::LimitExceeded => Outcome::LimitExceeded,
        },
    )
}

/// Iterative-deepening driver for IDA*.
///
/// The bound starts at the root's `f = h(start)`. Each iteration re-runs the
/// bounded expansion from scratch with a fresh arena and frontier; when an
/// iteration exhausts its frontier, the bound is raised to the smallest `f`
/// that was pruned and the search restarts. Statistics accumulate across
/// iterations.
fn run_idastar(
    goal: &Board,
    start: &Board,
    heuristic: Heuristic,
    config: &SolverConfig,
    stats: &mut SearchStats,
) -> Result<Outcome, String> {
    let scoring = Scoring::CostPlusHeuristic(heuristic);
    let mut bound = f64::from(heuristic.evaluate(goal, start));

    for _ in 0..config.max_idastar_iterations {
        let limits = RunLimits {
            depth_bound: None,
            f_bound: Some(bound),
        };
        match run_expansion(
            goal,
            start,
            Discipline::PriorityByF,
            scoring,
            limits,
            config,
            stats,
        )? {
            RunOutcome::Solved(solution) => return Ok(Outcome::Solved(solution)),
            RunOutcome::LimitExceeded => return Ok(Outcome::LimitExceeded),
            RunOutcome::Exhausted {
                next_bound: Some(next),
            } => bound = next,
            // Nothing was pruned: the reachable space within any bound is
            // fully explored and contains no goal.
            RunOutcome::Exhausted { next_bound: None } => return Ok(Outcome::Exhausted),
        }
    }

    Ok(Outcome::LimitExceeded)
}

/// The expansion loop shared by every algorithm.
///
/// Pops per the discipline, goal-tests the popped node, then generates one
/// child per valid, non-reversing move and inserts it. The DFS depth bound
/// discards a popped node entirely (no goal test, no children), which keeps
/// every returned path within the bound.
fn run_expansion(
    goal: &Board,
    start: &Board,
    discipline: Discipline,
    scoring: Scoring,
    limits: RunLimits,
    config: &SolverConfig,
    stats: &mut SearchStats,
) -> Result<RunOutcome, String> {
    let mut nodes: Vec<SearchNode> = Vec::new();
    let mut frontier = Frontier::new(discipline);
    let mut seen: FxHashSet<Board> = FxHashSet::default();
    let mut next_bound: Option<f64> = None;

    let (root_h, root_f) = scoring.evaluate(goal, start, 0);
    nodes.push(SearchNode {
        board: *start,
        g: 0,
        h: root_h,
        f: root_f,
        moved: None,
        parent: None,
    });
    frontier.insert(0, &nodes);
    stats.nodes_generated += 1;
    if config.dedupe_states {
        seen.insert(*start);
    }
    if frontier.len() > stats.peak_frontier_size {
        stats.peak_frontier_size = frontier.len();
    }

    while let Some(idx) = frontier.pop() {
        stats.nodes_expanded += 1;

        let (g, board, moved) = {
            let node = &nodes[idx];
            (node.g, node.board, node.moved)
        };

        // Beyond the depth bound: discard without goal test or expansion.
        if limits.depth_bound.map_or(false, |bound| g > bound) {
            continue;
        }

        if board == *goal {
            return Ok(RunOutcome::Solved(reconstruct_path(&nodes, idx)));
        }

        if let Some(budget) = config.node_budget {
            if stats.nodes_generated >= budget {
                return Ok(RunOutcome::LimitExceeded);
            }
        }

        let blank = board.blank_position()?;
        for dir in DIRECTIONS {
            if config.prune_reversals && moved.map_or(false, |m| dir == m.opposite()) {
                continue;
            }
            if !Board::is_valid_move(blank, dir) {
                continue;
            }

            let child_board = board.apply_move(blank, dir);
            if config.dedupe_states && !seen.insert(child_board) {
                continue;
            }

            let child_g = g + 1;
            let (child_h, child_f) = scoring.evaluate(goal, &child_board, child_g);

            if let Some(bound) = limits.f_bound {
                if child_f > bound {
                    next_bound = Some(next_bound.map_or(child_f, |m: f64| m.min(child_f)));
                    continue;
                }
            }

            stats.nodes_generated += 1;
            if child_g > stats.max_depth {
                stats.max_depth = child_g;
            }

            let child_idx = nodes.len();
            nodes.push(SearchNode {
                board: child_board,
                g: child_g,
                h: child_h,
                f: child_f,
                moved: Some(dir),
                parent: Some(idx),
            });
            frontier.insert(child_idx, &nodes);
        }

        if frontier.len() > stats.peak_frontier_size {
            stats.peak_frontier_size = frontier.len();
        }
    }

    Ok(RunOutcome::Exhausted { next_bound })
}

/// Walks parent links from the goal node back to the root, collecting each
/// node's move, then reverses into root-to-goal order.
fn reconstruct_path(nodes: &[SearchNode], goal_idx: usize) -> Solution {
    let mut moves = Vec::new();
    let mut current = goal_idx;
    while let Some(parent) = nodes[current].parent {
        if let Some(dir) = nodes[current].moved {
            moves.push(dir);
        }
        current = parent;
    }
    moves.reverse();
    Solution { moves }
}
