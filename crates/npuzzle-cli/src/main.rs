mod prompt;
mod report;

use clap::{Parser, ValueEnum};
use log::warn;
use npuzzle_core::{catalog, Board, Generator, Heuristic, Solver, MAX_SIDE};
use std::io;
use std::time::Instant;

/// Solves the sliding-tile N-puzzle with uniform-cost or A* search.
///
/// With no board flag the program runs the interactive flow: pick a
/// premade or custom puzzle, pick an algorithm, and watch the search.
#[derive(Debug, Parser)]
#[command(name = "npuzzle", version)]
struct Cli {
    /// Use one of the ten built-in boards, graded 0 (solved) to 9 (hardest)
    #[arg(
        short,
        long,
        value_name = "INDEX",
        value_parser = clap::value_parser!(u8).range(0..=9),
        conflicts_with_all = ["board", "random", "scramble"]
    )]
    premade: Option<u8>,

    /// Row-major tiles for a custom board, 0 as the blank,
    /// e.g. "1 2 3 4 5 0 7 8 6"
    #[arg(short, long, value_name = "TILES", conflicts_with_all = ["random", "scramble"])]
    board: Option<String>,

    /// Solve a uniformly random solvable board
    #[arg(short, long, conflicts_with = "scramble")]
    random: bool,

    /// Solve a board scrambled by a random walk of this many moves
    #[arg(short, long, value_name = "MOVES")]
    scramble: Option<usize>,

    /// Side length for --random and --scramble boards
    #[arg(
        long,
        default_value_t = 3,
        value_parser = clap::value_parser!(u64).range(2..=MAX_SIDE as u64),
        conflicts_with_all = ["premade", "board"]
    )]
    side: u64,

    /// Seed for --random and --scramble, for reproducible boards
    #[arg(long, conflicts_with_all = ["premade", "board"])]
    seed: Option<u64>,

    /// Search algorithm (prompted for in the interactive flow when omitted)
    #[arg(short, long, value_enum)]
    algorithm: Option<Algorithm>,

    /// Emit the outcome as a JSON document instead of the console report
    #[arg(long)]
    json: bool,

    /// Skip the step-by-step path printout, keeping the summary
    #[arg(short, long)]
    quiet: bool,
}

/// Heuristic modes accepted by --algorithm.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Algorithm {
    /// No heuristic; expand by path cost alone
    UniformCost,
    /// A* with the misplaced-tile count
    MisplacedTile,
    /// A* with summed Manhattan distances
    ManhattanDistance,
}

impl From<Algorithm> for Heuristic {
    fn from(algorithm: Algorithm) -> Self {
        match algorithm {
            Algorithm::UniformCost => Heuristic::UniformCost,
            Algorithm::MisplacedTile => Heuristic::MisplacedTile,
            Algorithm::ManhattanDistance => Heuristic::ManhattanDistance,
        }
    }
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> io::Result<()> {
    let interactive = cli.premade.is_none()
        && cli.board.is_none()
        && !cli.random
        && cli.scramble.is_none();

    let board = select_board(&cli)?;
    let heuristic = match cli.algorithm {
        Some(algorithm) => algorithm.into(),
        None if interactive => prompt::choose_algorithm()?,
        None => Heuristic::ManhattanDistance,
    };

    if !board.is_solvable() {
        warn!("this board fails the parity check; the search will sweep its whole component");
    }

    let solver = Solver::new(heuristic);
    let started = Instant::now();
    let outcome = solver.solve(&board);
    let elapsed_ms = started.elapsed().as_secs_f64() * 1000.0;

    if cli.json {
        report::print_json(heuristic, &outcome, elapsed_ms)
    } else {
        report::print_outcome(heuristic, &outcome, elapsed_ms, cli.quiet)
    }
}

fn select_board(cli: &Cli) -> io::Result<Board> {
    if let Some(index) = cli.premade {
        return catalog::premade(index as usize).ok_or_else(|| {
            io::Error::new(io::ErrorKind::InvalidInput, "premade index out of range")
        });
    }
    if let Some(ref tiles) = cli.board {
        return parse_board(tiles)
            .map_err(|message| io::Error::new(io::ErrorKind::InvalidInput, message));
    }

    let side = cli.side as usize;
    let mut generator = match cli.seed {
        Some(seed) => Generator::with_seed(seed),
        None => Generator::new(),
    };
    if cli.random {
        return Ok(generator.random(side));
    }
    if let Some(moves) = cli.scramble {
        return Ok(generator.scramble(side, moves));
    }

    prompt::choose_board()
}

/// Parses a row-major tile list such as "1 2 3 4 5 0 7 8 6" or
/// "1,2,3,4,5,0,7,8,6", inferring the side from the count.
fn parse_board(input: &str) -> Result<Board, String> {
    let mut tiles = Vec::new();
    for token in input
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|token| !token.is_empty())
    {
        let tile: u8 = token
            .parse()
            .map_err(|_| format!("'{}' is not a tile number", token))?;
        tiles.push(tile);
    }
    let side = (2..=MAX_SIDE)
        .find(|side| side * side == tiles.len())
        .ok_or_else(|| format!("{} tiles do not form a square board", tiles.len()))?;
    Board::from_flat(side, tiles).map_err(|err| err.to_string())
}
