//! The `kakuro` command line solver.
//!
//! Reads a puzzle grid from a file or standard input, validates it, and
//! reports whether it has no solution, a unique solution (printed as a
//! filled grid), or several (counted).

use std::{
    fs,
    io::{self, Read as _},
    path::{Path, PathBuf},
    process::ExitCode,
};

use clap::Parser;
use kakuro_core::{Grid, ParseError, StructureError};
use kakuro_solver::{Solutions, Solver};

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    /// Puzzle file to solve; reads standard input when omitted.
    #[arg(value_name = "FILE")]
    puzzle: Option<PathBuf>,
}

#[derive(Debug, derive_more::Display, derive_more::Error, derive_more::From)]
enum InputError {
    #[display("{_0}")]
    Parse(ParseError),
    #[display("{_0}")]
    Structure(StructureError),
}

fn main() -> ExitCode {
    better_panic::install();
    env_logger::init();

    let args = Args::parse();
    let input = match read_input(args.puzzle.as_deref()) {
        Ok(input) => input,
        Err(err) => {
            eprintln!("error: {err}");
            return ExitCode::FAILURE;
        }
    };

    match solve_report(&input) {
        Ok(report) => {
            print!("{report}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("invalid input: {err}");
            ExitCode::FAILURE
        }
    }
}

fn read_input(path: Option<&Path>) -> io::Result<String> {
    match path {
        Some(path) => fs::read_to_string(path),
        None => {
            println!("Enter the kakuro grid:");
            let mut input = String::new();
            io::stdin().read_to_string(&mut input)?;
            Ok(input)
        }
    }
}

/// Parses and solves the puzzle text, returning the user-facing report.
fn solve_report(input: &str) -> Result<String, InputError> {
    let grid: Grid = input.parse()?;
    grid.validate()?;
    log::info!(
        "solving a {}x{} grid with {} blank cells",
        grid.width(),
        grid.height(),
        grid.blank_count()
    );

    let solutions = Solver::new().solve(&grid);
    log::debug!("search finished with {} solutions", solutions.count);
    Ok(report(&grid, &solutions))
}

/// Maps a solve outcome to one of the three user-facing messages. The grid
/// is only rendered for a unique solution.
fn report(grid: &Grid, solutions: &Solutions) -> String {
    if solutions.count == 0 {
        "No solution exists.\n".to_string()
    } else if solutions.count == 1 {
        let first = solutions
            .first
            .as_ref()
            .expect("a counted solution is recorded");
        format!("The kakuro has a unique solution:\n{}", grid.filled(first))
    } else {
        format!("Total distinct solutions: {}\n", solutions.count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_no_solution() {
        let report = solve_report("X     10\\X\nX\\10  .").unwrap();
        assert_eq!(report, "No solution exists.\n");
    }

    #[test]
    fn test_report_unique_solution_renders_grid() {
        let report = solve_report("X    3\\X  7\\X\nX\\4  .    .\nX\\6  .    .").unwrap();
        assert_eq!(
            report,
            "The kakuro has a unique solution:\n\
             X     3\\X   7\\X  \n\
             X\\4   1     3    \n\
             X\\6   2     4    \n"
        );
    }

    #[test]
    fn test_report_multiple_solutions_counts_only() {
        let report = solve_report("X     11\\X  4\\X\nX\\10  .     .\nX\\5   .     .").unwrap();
        assert_eq!(report, "Total distinct solutions: 2\n");
    }

    #[test]
    fn test_report_rejects_bad_token() {
        let err = solve_report("X ?").unwrap_err();
        assert!(err.to_string().contains("unknown cell token"));
    }

    #[test]
    fn test_report_rejects_structural_violation() {
        let err = solve_report("X .").unwrap_err();
        assert!(err.to_string().contains("no sum header"));
    }
}
