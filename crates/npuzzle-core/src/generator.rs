use crate::board::{Board, Move};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

/// Produces random solvable boards.
pub struct Generator {
    rng: StdRng,
}

impl Generator {
    /// A generator seeded from system entropy.
    pub fn new() -> Self {
        Generator {
            rng: StdRng::from_entropy(),
        }
    }

    /// A generator with a fixed seed; every draw is reproducible.
    pub fn with_seed(seed: u64) -> Self {
        Generator {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// A uniformly random solvable board: shuffles the full tile set and
    /// redraws until the parity rule accepts the arrangement.
    ///
    /// # Panics
    ///
    /// Panics if `side` is outside the supported range, like [`Board::goal`].
    pub fn random(&mut self, side: usize) -> Board {
        let mut tiles = Board::goal(side).tiles().to_vec();
        loop {
            tiles.shuffle(&mut self.rng);
            let board = Board::from_parts(side, tiles.clone());
            if board.is_solvable() {
                return board;
            }
        }
    }

    /// A board scrambled by a random walk of `moves` legal blank moves
    /// from the goal, never undoing the preceding move. The result is
    /// solvable by construction, with optimal depth at most `moves`.
    ///
    /// # Panics
    ///
    /// Panics if `side` is outside the supported range, like [`Board::goal`].
    pub fn scramble(&mut self, side: usize, moves: usize) -> Board {
        let mut board = Board::goal(side);
        let mut last: Option<Move> = None;
        for _ in 0..moves {
            let options: Vec<Move> = board
                .legal_moves()
                .into_iter()
                .filter(|&mv| last != Some(mv.opposite()))
                .collect();
            let mv = *options
                .choose(&mut self.rng)
                .expect("a corner still offers one move besides backtracking");
            board = board.apply(mv).expect("legal moves stay on the board");
            last = Some(mv);
        }
        board
    }
}

impl Default for Generator {
    fn default() -> Self {
        Self::new()
    }
}
