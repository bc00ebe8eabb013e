//! Interactive puzzle and algorithm selection, re-asking on bad input.

use npuzzle_core::{catalog, Board, Heuristic};
use std::io::{self, BufRead, Write};

/// Asks for a premade or custom board on stdin.
pub fn choose_board() -> io::Result<Board> {
    let stdin = io::stdin();
    let mut reader = stdin.lock();
    read_board(&mut reader)
}

/// Asks for the search algorithm on stdin.
pub fn choose_algorithm() -> io::Result<Heuristic> {
    let stdin = io::stdin();
    let mut reader = stdin.lock();
    read_algorithm(&mut reader)
}

fn read_board<R: BufRead>(reader: &mut R) -> io::Result<Board> {
    loop {
        println!("Welcome! This is a program customized to solve an Eight Puzzle.");
        println!("To get started, please do either one of the following:");
        println!("> Type \"1\" to choose a premade initial puzzle.");
        println!("> Type \"2\" to create your own initial puzzle.");
        println!("Press ENTER once you have typed your choice.");
        match read_line(reader)?.trim() {
            "1" => return read_premade(reader),
            "2" => return read_custom(reader),
            _ => println!("Invalid input. Please try again.\n"),
        }
    }
}

fn read_premade<R: BufRead>(reader: &mut R) -> io::Result<Board> {
    loop {
        println!("You have chosen to use a premade initial puzzle.");
        println!("Please type in an integer from 0 to 9.");
        println!("The number inputted will determine the DIFFICULTY to solve the puzzle.");
        println!("Press ENTER once you have typed your choice.");
        if let Ok(index) = read_line(reader)?.trim().parse::<usize>() {
            if let Some(board) = catalog::premade(index) {
                println!();
                return Ok(board);
            }
        }
        println!("Invalid input. Please try again.\n");
    }
}

fn read_custom<R: BufRead>(reader: &mut R) -> io::Result<Board> {
    println!("You have chosen to create your own initial puzzle.");
    println!("Enter your puzzle one row at a time, separating each number with a space.");
    println!("The blank tile should be represented with \"0\".");
    println!("Press ENTER when you finish each row.");
    'entry: loop {
        let mut rows: Vec<Vec<u8>> = Vec::new();
        for row in 1..=3 {
            print!("Enter the numbers for row {}: ", row);
            io::stdout().flush()?;
            let line = read_line(reader)?;
            match line.split_whitespace().map(str::parse).collect() {
                Ok(tiles) => rows.push(tiles),
                Err(_) => {
                    println!("Invalid input. Please try again.\n");
                    continue 'entry;
                }
            }
        }
        match Board::from_rows(&rows) {
            Ok(board) => {
                println!();
                return Ok(board);
            }
            Err(err) => println!("That is not a valid puzzle: {}. Please try again.\n", err),
        }
    }
}

fn read_algorithm<R: BufRead>(reader: &mut R) -> io::Result<Heuristic> {
    loop {
        println!("Please select an ALGORITHM by typing the number corresponding to the following:");
        println!("\"1\" for Uniform Cost Search");
        println!("\"2\" for Misplaced Tile Heuristic");
        println!("\"3\" for Manhattan Distance Heuristic");
        let choice = match read_line(reader)?.trim() {
            "1" => Some(Heuristic::UniformCost),
            "2" => Some(Heuristic::MisplacedTile),
            "3" => Some(Heuristic::ManhattanDistance),
            _ => None,
        };
        match choice {
            Some(heuristic) => {
                println!();
                return Ok(heuristic);
            }
            None => println!("Invalid input. Please try again.\n"),
        }
    }
}

fn read_line<R: BufRead>(reader: &mut R) -> io::Result<String> {
    let mut line = String::new();
    if reader.read_line(&mut line)? == 0 {
        return Err(io::Error::new(
            io::ErrorKind::UnexpectedEof,
            "input ended before a choice was made",
        ));
    }
    Ok(line)
}
