//! Ready-made 3x3 boards graded by optimal solution depth.

use crate::board::Board;

/// Number of boards in the premade set.
pub const PREMADE_COUNT: usize = 10;

const PREMADES: [([[u8; 3]; 3], u32); PREMADE_COUNT] = [
    ([[1, 2, 3], [4, 5, 6], [7, 8, 0]], 0),
    ([[1, 2, 3], [4, 5, 0], [7, 8, 6]], 1),
    ([[1, 0, 3], [4, 2, 6], [7, 5, 8]], 3),
    ([[2, 3, 0], [1, 4, 5], [7, 8, 6]], 6),
    ([[1, 2, 3], [0, 5, 7], [4, 8, 6]], 9),
    ([[1, 2, 4], [7, 5, 3], [0, 8, 6]], 12),
    ([[7, 4, 3], [0, 2, 1], [8, 5, 6]], 15),
    ([[0, 6, 3], [1, 2, 7], [5, 4, 8]], 18),
    ([[8, 2, 6], [1, 7, 0], [5, 4, 3]], 21),
    ([[4, 6, 0], [1, 5, 8], [7, 2, 3]], 24),
];

/// The premade board graded `index` (0 = already solved, 9 = hardest),
/// or `None` past the end of the set.
pub fn premade(index: usize) -> Option<Board> {
    PREMADES.get(index).map(|(rows, _)| {
        let tiles = rows.iter().flatten().copied().collect();
        Board::from_parts(3, tiles)
    })
}

/// Optimal solution depth of the premade board at `index`.
pub fn premade_depth(index: usize) -> Option<u32> {
    PREMADES.get(index).map(|&(_, depth)| depth)
}
