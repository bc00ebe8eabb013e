use crate::board::{Board, Move};
use crate::heuristic::{GoalIndex, Heuristic};
use log::{debug, trace};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashSet};

/// Counters describing one search run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchStats {
    /// Nodes popped from the frontier, stale duplicates included.
    pub nodes_expanded: usize,
    /// Largest frontier size observed at the start of an expansion step.
    pub max_frontier: usize,
}

/// One state along the solution path with its cost annotations.
///
/// `h` is the estimate computed when the node was created; it is never
/// recomputed afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PathStep {
    pub board: Board,
    pub g: u32,
    pub h: u32,
}

/// An optimal move sequence from the initial board to the goal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Solution {
    /// States from the initial board to the goal, inclusive.
    pub path: Vec<PathStep>,
    pub stats: SearchStats,
}

impl Solution {
    /// Number of moves from the initial board to the goal.
    pub fn depth(&self) -> u32 {
        self.path.last().map(|step| step.g).unwrap_or(0)
    }
}

/// Terminal result of one search invocation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum SearchOutcome {
    /// The goal was popped from the frontier.
    Solved(Solution),
    /// The frontier emptied without reaching the goal; the statistics of
    /// the full sweep are kept.
    Exhausted(SearchStats),
}

impl SearchOutcome {
    pub fn is_solved(&self) -> bool {
        matches!(self, SearchOutcome::Solved(_))
    }

    pub fn solution(&self) -> Option<&Solution> {
        match self {
            SearchOutcome::Solved(solution) => Some(solution),
            SearchOutcome::Exhausted(_) => None,
        }
    }

    pub fn stats(&self) -> &SearchStats {
        match self {
            SearchOutcome::Solved(solution) => &solution.stats,
            SearchOutcome::Exhausted(stats) => stats,
        }
    }
}

/// A created search node. The parent link is an index into the run's
/// node arena; links always point at strictly earlier entries, so the
/// ancestor chain cannot cycle.
#[derive(Debug, Clone)]
struct Node {
    board: Board,
    g: u32,
    h: u32,
    parent: Option<usize>,
}

/// Frontier entry, ordered so `BinaryHeap` pops the lowest `f` first
/// and, among equal `f`, the earliest-pushed entry.
#[derive(Debug, PartialEq, Eq)]
struct FrontierEntry {
    f: u32,
    seq: u64,
    node: usize,
}

impl Ord for FrontierEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .f
            .cmp(&self.f)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for FrontierEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Best-first search driver configured with one heuristic mode.
///
/// All working state lives inside [`Solver::solve`], so one solver value
/// can run any number of independent searches.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Solver {
    heuristic: Heuristic,
}

impl Solver {
    pub fn new(heuristic: Heuristic) -> Self {
        Solver { heuristic }
    }

    pub fn heuristic(&self) -> Heuristic {
        self.heuristic
    }

    /// Searches from `initial` to the canonical goal of the same side.
    ///
    /// Successors are pushed without consulting the visited set; stale
    /// frontier duplicates are discarded when popped instead. Every pop
    /// counts toward `nodes_expanded`, and the frontier size is sampled
    /// at the start of each iteration, so the reported statistics match
    /// the expansion order exactly and are reproducible run to run.
    ///
    /// An unsolvable board exhausts its reachable component and comes
    /// back as [`SearchOutcome::Exhausted`].
    pub fn solve(&self, initial: &Board) -> SearchOutcome {
        let side = initial.side();
        let goal = Board::goal(side);
        let index = GoalIndex::new(&goal);

        let mut arena: Vec<Node> = Vec::new();
        let mut frontier: BinaryHeap<FrontierEntry> = BinaryHeap::new();
        let mut visited: HashSet<Board> = HashSet::new();
        let mut seq: u64 = 0;

        let root_h = self.heuristic.estimate_indexed(initial, &index);
        arena.push(Node {
            board: initial.clone(),
            g: 0,
            h: root_h,
            parent: None,
        });
        frontier.push(FrontierEntry {
            f: root_h,
            seq,
            node: 0,
        });
        seq += 1;

        let mut stats = SearchStats {
            nodes_expanded: 0,
            max_frontier: 1,
        };
        debug!("{} searching a {}x{} board", self.heuristic, side, side);

        while let Some(entry) = frontier.pop() {
            // the popped entry still sat in the frontier when this
            // iteration began
            stats.max_frontier = stats.max_frontier.max(frontier.len() + 1);
            stats.nodes_expanded += 1;

            let (board, g, h) = {
                let node = &arena[entry.node];
                (node.board.clone(), node.g, node.h)
            };

            if !visited.insert(board.clone()) {
                // stale duplicate from a longer discovery path
                continue;
            }

            if board == goal {
                debug!(
                    "goal found at depth {} after {} expansions, max frontier {}",
                    g, stats.nodes_expanded, stats.max_frontier
                );
                return SearchOutcome::Solved(Solution {
                    path: reconstruct(&arena, entry.node),
                    stats,
                });
            }

            trace!("expanding g={} h={} frontier={}", g, h, frontier.len());

            for mv in Move::ALL {
                if let Some(next) = board.apply(mv) {
                    let next_h = self.heuristic.estimate_indexed(&next, &index);
                    arena.push(Node {
                        board: next,
                        g: g + 1,
                        h: next_h,
                        parent: Some(entry.node),
                    });
                    frontier.push(FrontierEntry {
                        f: g + 1 + next_h,
                        seq,
                        node: arena.len() - 1,
                    });
                    seq += 1;
                }
            }
        }

        debug!(
            "frontier exhausted after {} expansions, max frontier {}",
            stats.nodes_expanded, stats.max_frontier
        );
        SearchOutcome::Exhausted(stats)
    }
}

/// Walks parent indices back to the root, then reverses so the path
/// begins at the initial board.
fn reconstruct(arena: &[Node], goal_index: usize) -> Vec<PathStep> {
    let mut path = Vec::new();
    let mut cursor = Some(goal_index);
    while let Some(index) = cursor {
        let node = &arena[index];
        path.push(PathStep {
            board: node.board.clone(),
            g: node.g,
            h: node.h,
        });
        cursor = node.parent;
    }
    path.reverse();
    path
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog;

    fn board(rows: &[Vec<u8>]) -> Board {
        Board::from_rows(rows).unwrap()
    }

    #[test]
    fn test_already_solved_boundary() {
        for heuristic in Heuristic::ALL {
            let outcome = Solver::new(heuristic).solve(&Board::goal(3));
            let solution = outcome.solution().expect("solved input must solve");
            assert_eq!(solution.depth(), 0);
            assert_eq!(solution.path.len(), 1);
            assert_eq!(solution.stats.nodes_expanded, 1);
            assert_eq!(solution.stats.max_frontier, 1);
        }
    }

    #[test]
    fn test_one_move_from_goal() {
        let start = board(&[vec![1, 2, 3], vec![4, 5, 0], vec![7, 8, 6]]);
        for heuristic in Heuristic::ALL {
            let outcome = Solver::new(heuristic).solve(&start);
            let solution = outcome.solution().unwrap();
            assert_eq!(solution.depth(), 1, "under {}", heuristic);
            assert_eq!(solution.path.len(), 2);
            assert_eq!(solution.path[0].board, start);
            assert_eq!(solution.path[0].g, 0);
            assert!(solution.path[1].board.is_solved());
            assert_eq!(solution.path[1].h, 0);
        }
    }

    #[test]
    fn test_counting_semantics_pinned() {
        // hand-checked on the one-move board: uniform cost pops the
        // up-successor (pushed first among the three f=1 entries) before
        // the goal, while both informed modes pop the goal straight away
        let start = board(&[vec![1, 2, 3], vec![4, 5, 0], vec![7, 8, 6]]);

        let uniform = Solver::new(Heuristic::UniformCost).solve(&start);
        assert_eq!(uniform.stats().nodes_expanded, 3);
        assert_eq!(uniform.stats().max_frontier, 4);

        for heuristic in [Heuristic::MisplacedTile, Heuristic::ManhattanDistance] {
            let outcome = Solver::new(heuristic).solve(&start);
            assert_eq!(outcome.stats().nodes_expanded, 2, "under {}", heuristic);
            assert_eq!(outcome.stats().max_frontier, 3, "under {}", heuristic);
        }
    }

    #[test]
    fn test_path_is_a_legal_walk() {
        let start = catalog::premade(5).unwrap();
        let outcome = Solver::new(Heuristic::ManhattanDistance).solve(&start);
        let solution = outcome.solution().unwrap();

        assert_eq!(solution.path[0].board, start);
        assert!(solution.path.last().unwrap().board.is_solved());
        assert_eq!(solution.path.len() as u32, solution.depth() + 1);

        for pair in solution.path.windows(2) {
            assert_eq!(pair[1].g, pair[0].g + 1);
            let reachable = Move::ALL
                .iter()
                .filter_map(|&mv| pair[0].board.apply(mv))
                .any(|next| next == pair[1].board);
            assert!(reachable, "step g={} is not one legal move", pair[1].g);
        }
    }

    #[test]
    fn test_known_depths_manhattan() {
        for index in 0..catalog::PREMADE_COUNT {
            let premade = catalog::premade(index).unwrap();
            let expected = catalog::premade_depth(index).unwrap();
            let outcome = Solver::new(Heuristic::ManhattanDistance).solve(&premade);
            assert_eq!(
                outcome.solution().unwrap().depth(),
                expected,
                "premade {}",
                index
            );
        }
    }

    #[test]
    fn test_modes_agree_on_optimal_depth() {
        // uniform cost is the optimality reference; past depth 15 it
        // grinds, so stop at premade 6
        for index in 0..=6 {
            let premade = catalog::premade(index).unwrap();
            let expected = catalog::premade_depth(index).unwrap();
            for heuristic in Heuristic::ALL {
                let outcome = Solver::new(heuristic).solve(&premade);
                assert_eq!(
                    outcome.solution().unwrap().depth(),
                    expected,
                    "premade {} under {}",
                    index,
                    heuristic
                );
            }
        }
    }

    #[test]
    fn test_more_informed_expands_no_more() {
        for index in 0..=6 {
            let premade = catalog::premade(index).unwrap();
            let uniform = Solver::new(Heuristic::UniformCost).solve(&premade);
            let misplaced = Solver::new(Heuristic::MisplacedTile).solve(&premade);
            let manhattan = Solver::new(Heuristic::ManhattanDistance).solve(&premade);

            let by_uniform = uniform.stats().nodes_expanded;
            let by_misplaced = misplaced.stats().nodes_expanded;
            let by_manhattan = manhattan.stats().nodes_expanded;
            assert!(
                by_manhattan <= by_misplaced,
                "premade {}: manhattan {} > misplaced {}",
                index,
                by_manhattan,
                by_misplaced
            );
            assert!(
                by_misplaced <= by_uniform,
                "premade {}: misplaced {} > uniform {}",
                index,
                by_misplaced,
                by_uniform
            );
        }
    }

    #[test]
    fn test_deterministic_runs() {
        let start = catalog::premade(4).unwrap();
        for heuristic in Heuristic::ALL {
            let first = Solver::new(heuristic).solve(&start);
            let second = Solver::new(heuristic).solve(&start);
            assert_eq!(first, second, "under {}", heuristic);
        }
    }

    #[test]
    fn test_solver_is_reusable() {
        let solver = Solver::new(Heuristic::ManhattanDistance);
        let first = solver.solve(&catalog::premade(3).unwrap());
        let second = solver.solve(&catalog::premade(3).unwrap());
        assert_eq!(first, second);

        // a different side on the same solver value
        let other = solver.solve(&Board::goal(4));
        assert_eq!(other.solution().unwrap().depth(), 0);
    }

    #[test]
    fn test_unsolvable_exhausts_with_stats() {
        // 2x2 keeps the full sweep cheap enough to run for every mode
        let start = board(&[vec![2, 1], vec![3, 0]]);
        assert!(!start.is_solvable());
        for heuristic in Heuristic::ALL {
            let outcome = Solver::new(heuristic).solve(&start);
            assert!(!outcome.is_solved(), "under {}", heuristic);
            // the reachable component of a 2x2 board has 12 states, each
            // popped at least once
            assert!(outcome.stats().nodes_expanded >= 12);
            assert!(outcome.stats().max_frontier >= 2);
        }
    }

    #[test]
    fn test_unsolvable_sweeps_full_component() {
        let start = board(&[vec![2, 1, 3], vec![4, 5, 6], vec![7, 8, 0]]);
        assert!(!start.is_solvable());
        let outcome = Solver::new(Heuristic::ManhattanDistance).solve(&start);
        match outcome {
            SearchOutcome::Exhausted(stats) => {
                // half of 9! configurations are reachable, and each is
                // popped at least once before the frontier can empty
                assert!(stats.nodes_expanded >= 181_440);
            }
            SearchOutcome::Solved(_) => panic!("unsolvable board produced a path"),
        }
    }
}
