use crate::board::{Board, BLANK};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Cost-estimation strategy driving the best-first search.
///
/// All three estimates are admissible, so the search returns an optimal
/// path under any of them; they differ only in how many nodes it expands
/// along the way.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Heuristic {
    /// Always estimates 0, ordering the frontier purely by path cost.
    UniformCost,
    /// Counts non-blank tiles that sit outside their goal cell.
    MisplacedTile,
    /// Sums each non-blank tile's grid distance to its goal cell.
    ManhattanDistance,
}

impl Heuristic {
    /// All modes, from least to most informed.
    pub const ALL: [Heuristic; 3] = [
        Heuristic::UniformCost,
        Heuristic::MisplacedTile,
        Heuristic::ManhattanDistance,
    ];

    /// Estimated number of moves remaining from `board` to `goal`.
    pub fn estimate(&self, board: &Board, goal: &Board) -> u32 {
        self.estimate_indexed(board, &GoalIndex::new(goal))
    }

    /// Estimate against a pre-built goal index; the search engine builds
    /// the index once per run instead of per evaluation.
    pub(crate) fn estimate_indexed(&self, board: &Board, index: &GoalIndex) -> u32 {
        match self {
            Heuristic::UniformCost => 0,
            Heuristic::MisplacedTile => misplaced(board, index),
            Heuristic::ManhattanDistance => manhattan(board, index),
        }
    }
}

impl fmt::Display for Heuristic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Heuristic::UniformCost => "Uniform Cost Search",
            Heuristic::MisplacedTile => "A* Misplaced Tile",
            Heuristic::ManhattanDistance => "A* Manhattan Distance",
        };
        write!(f, "{}", name)
    }
}

/// Lookup table mapping each tile value to its goal cell.
pub(crate) struct GoalIndex {
    tiles: Vec<u8>,
    positions: Vec<(usize, usize)>,
}

impl GoalIndex {
    pub(crate) fn new(goal: &Board) -> GoalIndex {
        let side = goal.side();
        let mut positions = vec![(0, 0); side * side];
        for (i, &tile) in goal.tiles().iter().enumerate() {
            positions[tile as usize] = (i / side, i % side);
        }
        GoalIndex {
            tiles: goal.tiles().to_vec(),
            positions,
        }
    }
}

fn misplaced(board: &Board, index: &GoalIndex) -> u32 {
    board
        .tiles()
        .iter()
        .zip(&index.tiles)
        .filter(|&(&tile, &goal)| tile != BLANK && tile != goal)
        .count() as u32
}

fn manhattan(board: &Board, index: &GoalIndex) -> u32 {
    let side = board.side();
    let mut total = 0u32;
    for (i, &tile) in board.tiles().iter().enumerate() {
        if tile == BLANK {
            continue;
        }
        let (goal_row, goal_col) = index.positions[tile as usize];
        let row_dist = (i / side).abs_diff(goal_row);
        let col_dist = (i % side).abs_diff(goal_col);
        total += (row_dist + col_dist) as u32;
    }
    total
}
