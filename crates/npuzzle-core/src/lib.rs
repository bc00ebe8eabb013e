//! Core engine for the sliding-tile N-puzzle.
//!
//! [`Board`] carries a validated tile grid, [`Heuristic`] selects the
//! cost-estimation mode, and [`Solver`] runs best-first search and
//! returns the optimal path together with its search statistics. The
//! [`catalog`] module holds ten boards graded by optimal depth, and
//! [`Generator`] produces random solvable boards.

mod board;
pub mod catalog;
mod generator;
mod heuristic;
mod search;

pub use board::{Board, BoardError, BoardResult, Move, BLANK, MAX_SIDE};
pub use generator::Generator;
pub use heuristic::Heuristic;
pub use search::{PathStep, SearchOutcome, SearchStats, Solution, Solver};
