//! Console and JSON rendering of a search outcome.

use crossterm::{
    execute,
    style::{Color, Print, ResetColor, SetForegroundColor},
};
use npuzzle_core::{Heuristic, PathStep, SearchOutcome, SearchStats};
use serde::Serialize;
use std::io::{self, Write};

/// Prints the step-by-step path (unless `quiet`), the summary lines, and
/// the elapsed time.
pub fn print_outcome(
    heuristic: Heuristic,
    outcome: &SearchOutcome,
    elapsed_ms: f64,
    quiet: bool,
) -> io::Result<()> {
    let mut stdout = io::stdout();
    match outcome {
        SearchOutcome::Solved(solution) => {
            if !quiet {
                print_path(&mut stdout, &solution.path)?;
            }
            execute!(
                stdout,
                SetForegroundColor(Color::Green),
                Print("Goal state!"),
                ResetColor,
                Print("\n\n")
            )?;
            writeln!(stdout, "Solution depth was {}", solution.depth())?;
            print_stats(&mut stdout, &solution.stats)?;
        }
        SearchOutcome::Exhausted(stats) => {
            execute!(
                stdout,
                SetForegroundColor(Color::Red),
                Print("Unfortunately, your puzzle is impossible to solve."),
                ResetColor,
                Print("\n\n")
            )?;
            print_stats(&mut stdout, stats)?;
        }
    }
    writeln!(stdout, "\nTime: {:.3} milliseconds", elapsed_ms)?;
    log::debug!("{} finished in {:.3} ms", heuristic, elapsed_ms);
    Ok(())
}

/// Prints the outcome as a single JSON document.
pub fn print_json(heuristic: Heuristic, outcome: &SearchOutcome, elapsed_ms: f64) -> io::Result<()> {
    let json = render_json(heuristic, outcome, elapsed_ms)?;
    println!("{}", json);
    Ok(())
}

fn print_path(stdout: &mut io::Stdout, path: &[PathStep]) -> io::Result<()> {
    for step in path {
        writeln!(
            stdout,
            "The best node to expand with a g(n) = {} and h(n) = {} is:",
            step.g, step.h
        )?;
        writeln!(stdout, "{}", step.board)?;
    }
    Ok(())
}

fn print_stats(stdout: &mut io::Stdout, stats: &SearchStats) -> io::Result<()> {
    writeln!(stdout, "Number of nodes expanded: {}", stats.nodes_expanded)?;
    writeln!(stdout, "Max queue size: {}", stats.max_frontier)?;
    Ok(())
}

#[derive(Debug, Serialize)]
struct JsonReport<'a> {
    algorithm: String,
    solved: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    depth: Option<u32>,
    stats: &'a SearchStats,
    elapsed_ms: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    path: Option<&'a [PathStep]>,
}

fn render_json(
    heuristic: Heuristic,
    outcome: &SearchOutcome,
    elapsed_ms: f64,
) -> Result<String, serde_json::Error> {
    let report = match outcome {
        SearchOutcome::Solved(solution) => JsonReport {
            algorithm: heuristic.to_string(),
            solved: true,
            depth: Some(solution.depth()),
            stats: &solution.stats,
            elapsed_ms,
            path: Some(&solution.path),
        },
        SearchOutcome::Exhausted(stats) => JsonReport {
            algorithm: heuristic.to_string(),
            solved: false,
            depth: None,
            stats,
            elapsed_ms,
            path: None,
        },
    };
    serde_json::to_string(&report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use npuzzle_core::{catalog, Board, Solver};

    #[test]
    fn test_json_solved_shape() {
        let start = catalog::premade(1).unwrap();
        let outcome = Solver::new(Heuristic::ManhattanDistance).solve(&start);
        let json = render_json(Heuristic::ManhattanDistance, &outcome, 0.25).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["algorithm"], "A* Manhattan Distance");
        assert_eq!(value["solved"], true);
        assert_eq!(value["depth"], 1);
        assert_eq!(value["stats"]["nodes_expanded"], 2);
        assert_eq!(value["stats"]["max_frontier"], 3);
        let path = value["path"].as_array().unwrap();
        assert_eq!(path.len(), 2);
        assert_eq!(path[0]["board"], serde_json::json!([[1, 2, 3], [4, 5, 0], [7, 8, 6]]));
        assert_eq!(path[1]["g"], 1);
    }

    #[test]
    fn test_json_exhausted_shape() {
        let start = Board::from_rows(&[vec![2, 1], vec![3, 0]]).unwrap();
        let outcome = Solver::new(Heuristic::UniformCost).solve(&start);
        let json = render_json(Heuristic::UniformCost, &outcome, 1.5).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["algorithm"], "Uniform Cost Search");
        assert_eq!(value["solved"], false);
        assert!(value.get("depth").is_none());
        assert!(value.get("path").is_none());
        assert!(value["stats"]["nodes_expanded"].as_u64().unwrap() >= 12);
    }
}
