//! Command-line driver for the gridlock sudoku engine.
//!
//! `gridlock solve` reads puzzle files, solves them in parallel (one board
//! per worker), and prints each solution with timing and search stats.
//! `gridlock generate` prints a fresh puzzle, reproducibly when seeded.

use std::{
    fs, io,
    path::{Path, PathBuf},
    process::ExitCode,
    time::{Duration, Instant},
};

use clap::{Parser, Subcommand};
use gridlock_core::{Board, ParseBoardError, Position};
use gridlock_generator::PuzzleGenerator;
use gridlock_solver::{BacktrackingSolver, SolveError, SolveStats};
use rayon::prelude::*;

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Solve one or more puzzle files.
    ///
    /// Characters outside `1`-`9` and `.` are ignored; the 81 that remain
    /// form the grid row by row.
    Solve {
        /// Puzzle files to solve.
        #[arg(required = true)]
        files: Vec<PathBuf>,
    },
    /// Generate a new puzzle.
    Generate {
        /// Number of filled cells to keep (clamped to 0-81).
        #[arg(long, default_value_t = 40)]
        clues: usize,
        /// Seed for reproducible generation.
        #[arg(long)]
        seed: Option<u64>,
        /// Print a grid with block separators instead of the flat line.
        #[arg(long)]
        pretty: bool,
    },
}

#[derive(Debug, derive_more::Display, derive_more::Error, derive_more::From)]
enum CliError {
    #[display("{_0}")]
    Io(#[error(source)] io::Error),
    #[display("{_0}")]
    Parse(#[error(source)] ParseBoardError),
    #[display("{_0}")]
    Solve(#[error(source)] SolveError),
    #[from(ignore)]
    #[display("expected 81 grid characters, found {count}")]
    BadGrid { count: usize },
}

struct Report {
    puzzle: Board,
    solution: Board,
    stats: SolveStats,
    elapsed: Duration,
}

fn main() -> ExitCode {
    better_panic::install();
    env_logger::init();

    match Args::parse().command {
        Command::Solve { files } => solve_files(&files),
        Command::Generate { clues, seed, pretty } => {
            generate(clues, seed, pretty);
            ExitCode::SUCCESS
        }
    }
}

fn solve_files(files: &[PathBuf]) -> ExitCode {
    let reports: Vec<_> = files
        .par_iter()
        .map(|path| (path, solve_file(path)))
        .collect();

    let mut failed = false;
    for (path, report) in reports {
        match report {
            Ok(report) => print_report(path, &report),
            Err(err) => {
                failed = true;
                eprintln!("{}: {err}", path.display());
            }
        }
    }
    if failed { ExitCode::FAILURE } else { ExitCode::SUCCESS }
}

fn solve_file(path: &Path) -> Result<Report, CliError> {
    let puzzle = read_board(path)?;
    let start = Instant::now();
    let (solution, stats) = BacktrackingSolver::new().solve_with_stats(puzzle.clone())?;
    let elapsed = start.elapsed();
    Ok(Report {
        puzzle,
        solution,
        stats,
        elapsed,
    })
}

/// Reads a board from a text file, silently dropping every character
/// outside the grid alphabet before parsing.
fn read_board(path: &Path) -> Result<Board, CliError> {
    let text = fs::read_to_string(path)?;
    let digits = filter_grid_chars(&text);
    log::debug!("{}: {} grid characters", path.display(), digits.len());
    if digits.len() != 81 {
        return Err(CliError::BadGrid { count: digits.len() });
    }
    Ok(digits.parse()?)
}

fn filter_grid_chars(text: &str) -> String {
    text.chars()
        .filter(|c| matches!(c, '1'..='9' | '.'))
        .collect()
}

fn print_report(path: &Path, report: &Report) {
    println!("{}", path.display());
    println!("{}", render(&report.puzzle));
    println!("{}", render(&report.solution));
    println!(
        "solved in {:?} ({} nodes, {} backtracks)",
        report.elapsed,
        report.stats.nodes(),
        report.stats.backtracks()
    );
    println!();
}

fn generate(clues: usize, seed: Option<u64>, pretty: bool) {
    let generator = PuzzleGenerator::new();
    let board = match seed {
        Some(seed) => generator.generate_seeded(clues, seed),
        None => generator.generate(clues, &mut rand::rng()),
    };
    log::debug!("generated board with {} clues", board.filled_count());
    if pretty {
        println!("{}", render(&board));
    } else {
        println!("{board}");
    }
}

/// Formats a board as a 9-line grid with 3×3 block separators.
fn render(board: &Board) -> String {
    let mut out = String::new();
    for row in 0..9 {
        if row == 3 || row == 6 {
            out.push_str("------+-------+------\n");
        }
        for col in 0..9 {
            if col > 0 {
                out.push(' ');
            }
            if col == 3 || col == 6 {
                out.push_str("| ");
            }
            out.push(board[Position::new(row, col)].to_char());
        }
        out.push('\n');
    }
    out
}
