//! Basic example of using the N-puzzle engine

use npuzzle_core::{Board, Generator, Heuristic, Solver};

fn main() {
    // Scramble a board with a short random walk
    println!("Scrambling a 3x3 board with 14 random moves...\n");
    let mut generator = Generator::with_seed(42);
    let board = generator.scramble(3, 14);

    println!("Scrambled board:");
    println!("{}", board);
    println!("Solvable: {}\n", board.is_solvable());

    // Compare the three search modes on the same board
    for heuristic in Heuristic::ALL {
        let solver = Solver::new(heuristic);
        let outcome = solver.solve(&board);
        if let Some(solution) = outcome.solution() {
            println!(
                "{}: depth {}, {} nodes expanded, max queue {}",
                heuristic,
                solution.depth(),
                solution.stats.nodes_expanded,
                solution.stats.max_frontier
            );
        } else {
            println!("{}: no solution found", heuristic);
        }
    }

    // Parse a board from rows
    println!("\n--- Solving a hand-written board ---\n");
    let rows = vec![vec![8, 2, 6], vec![1, 7, 0], vec![5, 4, 3]];
    if let Ok(board) = Board::from_rows(&rows) {
        println!("Parsed board:");
        println!("{}", board);

        let outcome = Solver::new(Heuristic::ManhattanDistance).solve(&board);
        if let Some(solution) = outcome.solution() {
            println!("Optimal solution depth: {}", solution.depth());
        }
    }
}
