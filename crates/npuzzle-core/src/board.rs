use serde::{Deserialize, Serialize};
use std::fmt;

/// Tile value used for the empty cell.
pub const BLANK: u8 = 0;

/// Largest supported side length (tiles are stored as `u8`, and 16x16
/// needs values up to 255).
pub const MAX_SIDE: usize = 16;

/// Error raised when a tile grid fails validation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardError {
    /// The rows do not form a square grid
    NotSquare { rows: usize, cols: usize },
    /// Side length outside the supported 2..=16 range
    UnsupportedSide(usize),
    /// A tile value does not belong to the puzzle's tile set
    TileOutOfRange { tile: u8, max: u8 },
    /// The same tile value appears more than once
    DuplicateTile(u8),
}

impl fmt::Display for BoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoardError::NotSquare { rows, cols } => {
                write!(f, "board is not square: {} rows but a row of {} cells", rows, cols)
            }
            BoardError::UnsupportedSide(side) => {
                write!(f, "side length {} is not supported (must be 2..={})", side, MAX_SIDE)
            }
            BoardError::TileOutOfRange { tile, max } => {
                write!(f, "tile {} is out of range (expected 0..={})", tile, max)
            }
            BoardError::DuplicateTile(tile) => {
                write!(f, "tile {} appears more than once", tile)
            }
        }
    }
}

impl std::error::Error for BoardError {}

pub type BoardResult<T> = Result<T, BoardError>;

/// A direction the blank can slide, in the fixed order successors are
/// generated: up, down, left, right.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Move {
    Up,
    Down,
    Left,
    Right,
}

impl Move {
    /// All moves in expansion order.
    pub const ALL: [Move; 4] = [Move::Up, Move::Down, Move::Left, Move::Right];

    /// Row/column offset applied to the blank's position.
    pub fn offset(self) -> (isize, isize) {
        match self {
            Move::Up => (-1, 0),
            Move::Down => (1, 0),
            Move::Left => (0, -1),
            Move::Right => (0, 1),
        }
    }

    /// The move that undoes this one.
    pub fn opposite(self) -> Move {
        match self {
            Move::Up => Move::Down,
            Move::Down => Move::Up,
            Move::Left => Move::Right,
            Move::Right => Move::Left,
        }
    }
}

/// A sliding-puzzle configuration: a square grid of tiles with one blank.
///
/// The grid is always a permutation of `0..side*side` with exactly one
/// blank (0), and the blank's flat index is cached so move generation is
/// O(1). Equality and ordering are cell-wise over the grid, which makes
/// `Board` usable directly as a deduplication key.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "Vec<Vec<u8>>", into = "Vec<Vec<u8>>")]
pub struct Board {
    side: usize,
    tiles: Vec<u8>,
    blank: usize,
}

impl Board {
    /// The canonical solved arrangement: tiles 1..side*side-1 in reading
    /// order with the blank in the bottom-right corner.
    ///
    /// # Panics
    ///
    /// Panics if `side` is outside `2..=MAX_SIDE`.
    pub fn goal(side: usize) -> Board {
        assert!(
            (2..=MAX_SIDE).contains(&side),
            "side length {} is not supported",
            side
        );
        // count can be 256, which u8 cannot hold; keep the range in
        // usize and cast per tile
        let count = side * side;
        let mut tiles: Vec<u8> = (1..count).map(|t| t as u8).collect();
        tiles.push(BLANK);
        Board {
            side,
            tiles,
            blank: count - 1,
        }
    }

    /// Builds a board from rows, validating shape and tile set.
    pub fn from_rows(rows: &[Vec<u8>]) -> BoardResult<Board> {
        let side = rows.len();
        for row in rows {
            if row.len() != side {
                return Err(BoardError::NotSquare {
                    rows: side,
                    cols: row.len(),
                });
            }
        }
        let tiles: Vec<u8> = rows.iter().flatten().copied().collect();
        Board::from_flat(side, tiles)
    }

    /// Builds a board from a row-major tile list, validating the tile set.
    pub fn from_flat(side: usize, tiles: Vec<u8>) -> BoardResult<Board> {
        if !(2..=MAX_SIDE).contains(&side) {
            return Err(BoardError::UnsupportedSide(side));
        }
        let count = side * side;
        if tiles.len() != count {
            return Err(BoardError::NotSquare {
                rows: side,
                cols: tiles.len() / side,
            });
        }
        let max = (count - 1) as u8;
        let mut seen = vec![false; count];
        let mut blank = count;
        for (i, &tile) in tiles.iter().enumerate() {
            if tile > max {
                return Err(BoardError::TileOutOfRange { tile, max });
            }
            if seen[tile as usize] {
                return Err(BoardError::DuplicateTile(tile));
            }
            seen[tile as usize] = true;
            if tile == BLANK {
                blank = i;
            }
        }
        // count values in 0..=max with no duplicates fill the range, so
        // the blank was necessarily seen
        Ok(Board { side, tiles, blank })
    }

    /// Builds a board from tiles already known to be a valid permutation.
    pub(crate) fn from_parts(side: usize, tiles: Vec<u8>) -> Board {
        debug_assert_eq!(tiles.len(), side * side);
        let blank = tiles
            .iter()
            .position(|&t| t == BLANK)
            .expect("a valid permutation contains the blank");
        Board { side, tiles, blank }
    }

    /// Side length of the square grid.
    pub fn side(&self) -> usize {
        self.side
    }

    /// Row-major tile values.
    pub fn tiles(&self) -> &[u8] {
        &self.tiles
    }

    /// The grid as owned rows.
    pub fn rows(&self) -> Vec<Vec<u8>> {
        self.tiles.chunks(self.side).map(|c| c.to_vec()).collect()
    }

    /// Tile value at the given cell.
    pub fn tile(&self, row: usize, col: usize) -> u8 {
        self.tiles[row * self.side + col]
    }

    /// The blank's (row, column) position.
    pub fn blank_position(&self) -> (usize, usize) {
        (self.blank / self.side, self.blank % self.side)
    }

    /// True when every tile sits in its canonical goal cell.
    pub fn is_solved(&self) -> bool {
        let count = self.tiles.len();
        self.tiles
            .iter()
            .enumerate()
            .all(|(i, &tile)| tile as usize == (i + 1) % count)
    }

    /// Slides the blank one step, returning the resulting board, or `None`
    /// when the move would leave the grid.
    pub fn apply(&self, mv: Move) -> Option<Board> {
        let (row, col) = self.blank_position();
        let (dr, dc) = mv.offset();
        let new_row = row as isize + dr;
        let new_col = col as isize + dc;
        if new_row < 0
            || new_col < 0
            || new_row >= self.side as isize
            || new_col >= self.side as isize
        {
            return None;
        }
        let target = new_row as usize * self.side + new_col as usize;
        let mut tiles = self.tiles.clone();
        tiles.swap(self.blank, target);
        Some(Board {
            side: self.side,
            tiles,
            blank: target,
        })
    }

    /// The moves that stay inside the grid from this position.
    pub fn legal_moves(&self) -> Vec<Move> {
        let (row, col) = self.blank_position();
        Move::ALL
            .iter()
            .copied()
            .filter(|mv| {
                let (dr, dc) = mv.offset();
                let new_row = row as isize + dr;
                let new_col = col as isize + dc;
                new_row >= 0
                    && new_col >= 0
                    && new_row < self.side as isize
                    && new_col < self.side as isize
            })
            .collect()
    }

    /// Whether the goal is reachable from this board, by inversion parity.
    ///
    /// For odd side lengths the board is solvable iff the inversion count
    /// over the non-blank tiles is even; for even side lengths it is
    /// solvable iff inversions plus the blank's row (from the top) is odd.
    pub fn is_solvable(&self) -> bool {
        let inversions = self.count_inversions();
        if self.side % 2 == 1 {
            inversions % 2 == 0
        } else {
            let (blank_row, _) = self.blank_position();
            (inversions + blank_row) % 2 == 1
        }
    }

    fn count_inversions(&self) -> usize {
        let mut inversions = 0;
        for i in 0..self.tiles.len() {
            if self.tiles[i] == BLANK {
                continue;
            }
            for j in (i + 1)..self.tiles.len() {
                if self.tiles[j] != BLANK && self.tiles[j] < self.tiles[i] {
                    inversions += 1;
                }
            }
        }
        inversions
    }
}

impl fmt::Display for Board {
    /// Renders one bracketed row per line, e.g. `[1, 2, 3]`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.tiles.chunks(self.side).enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "[")?;
            for (j, tile) in row.iter().enumerate() {
                if j > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{}", tile)?;
            }
            write!(f, "]")?;
        }
        Ok(())
    }
}

impl TryFrom<Vec<Vec<u8>>> for Board {
    type Error = BoardError;

    fn try_from(rows: Vec<Vec<u8>>) -> BoardResult<Board> {
        Board::from_rows(&rows)
    }
}

impl From<Board> for Vec<Vec<u8>> {
    fn from(board: Board) -> Self {
        board.rows()
    }
}
