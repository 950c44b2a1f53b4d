//! `npuzzle`: command-line driver for the sliding-tile solver.
//!
//! Reads a board from a file (or scrambles one by random blank slides),
//! runs the dual-frontier search, and prints the verdict, the optimal
//! move count, and the board sequence. `--json` emits a machine-readable
//! report instead.

#![forbid(unsafe_code)]

use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

use npuzzle_board::{Board, BoardError, MAX_DIMENSION};
use npuzzle_solver::Solver;

#[derive(Parser)]
#[command(name = "npuzzle", about = "Optimal sliding-tile puzzle solver")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Solve a board file: dimension first, then the tiles, 0 for the blank.
    Solve {
        file: PathBuf,
        /// Emit a JSON report instead of text.
        #[arg(long)]
        json: bool,
    },
    /// Scramble the goal board by random blank slides, then solve it.
    Scramble {
        #[arg(long, default_value_t = 3)]
        dim: usize,
        /// Number of random slides to apply.
        #[arg(long, default_value_t = 20)]
        moves: usize,
        /// Seed for reproducible scrambles; random when omitted.
        #[arg(long)]
        seed: Option<u64>,
        /// Emit a JSON report instead of text.
        #[arg(long)]
        json: bool,
    },
}

#[derive(Debug)]
enum CliError {
    Io { path: PathBuf, source: std::io::Error },
    Board(BoardError),
}

impl std::fmt::Display for CliError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io { path, source } => write!(f, "cannot read {}: {source}", path.display()),
            Self::Board(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Board(e) => Some(e),
        }
    }
}

impl From<BoardError> for CliError {
    fn from(e: BoardError) -> Self {
        Self::Board(e)
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(cli.command) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(command: Command) -> Result<(), CliError> {
    match command {
        Command::Solve { file, json } => {
            let board = load_board(&file)?;
            report(&board, json);
        }
        Command::Scramble {
            dim,
            moves,
            seed,
            json,
        } => {
            if dim < 2 {
                return Err(BoardError::DimensionTooSmall { dim }.into());
            }
            if dim > MAX_DIMENSION {
                return Err(BoardError::DimensionTooLarge {
                    dim,
                    max: MAX_DIMENSION,
                }
                .into());
            }
            let mut rng = seed.map_or_else(StdRng::from_entropy, StdRng::seed_from_u64);
            let board = scramble(dim, moves, &mut rng);
            report(&board, json);
        }
    }
    Ok(())
}

fn load_board(path: &Path) -> Result<Board, CliError> {
    let text = fs::read_to_string(path).map_err(|source| CliError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(text.parse()?)
}

/// Random-walk `steps` blank slides from the goal board. Never undoes the
/// previous slide, so short walks stay scrambled. The result is always
/// solvable.
fn scramble(dim: usize, steps: usize, rng: &mut StdRng) -> Board {
    let mut board = Board::goal(dim);
    let mut previous: Option<Board> = None;
    for _ in 0..steps {
        let choices: Vec<Board> = board
            .neighbors()
            .into_iter()
            .filter(|n| previous.as_ref() != Some(n))
            .collect();
        if let Some(next) = choices.choose(rng) {
            previous = Some(std::mem::replace(&mut board, next.clone()));
        }
    }
    board
}

fn report(board: &Board, json: bool) {
    let solver = Solver::new(board.clone());
    if json {
        println!("{}", json_report(board, &solver));
    } else {
        print_solution(&solver);
    }
}

fn print_solution(solver: &Solver<Board>) {
    let Some(path) = solver.solution() else {
        println!("Unsolvable puzzle");
        return;
    };
    println!("Minimum number of moves = {}", solver.moves());
    let boards: Vec<&Board> = path.collect();
    for (step, board) in boards.iter().enumerate() {
        if step > 0 {
            if let Some(dir) = boards[step - 1].direction_to(board) {
                println!("Move {step}: blank slides {dir}");
            }
        }
        println!("{board}");
    }
}

fn json_report(board: &Board, solver: &Solver<Board>) -> serde_json::Value {
    let boards: Option<Vec<Vec<Vec<u32>>>> = solver
        .solution()
        .map(|path| path.map(board_rows).collect());
    serde_json::json!({
        "dimension": board.dimension(),
        "solvable": solver.is_solvable(),
        "moves": solver.moves(),
        "boards": boards,
    })
}

fn board_rows(board: &Board) -> Vec<Vec<u32>> {
    let dim = board.dimension();
    (0..dim)
        .map(|row| (0..dim).map(|col| board.tile(row, col)).collect())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn scramble_yields_a_solvable_board() {
        let mut rng = StdRng::seed_from_u64(7);
        let board = scramble(3, 25, &mut rng);
        assert_eq!(board.dimension(), 3);
        let solver = Solver::new(board);
        assert!(solver.is_solvable(), "random walks from the goal stay solvable");
        assert!(solver.moves() <= 25);
    }

    #[test]
    fn scramble_is_reproducible_with_a_seed() {
        let a = scramble(3, 15, &mut StdRng::seed_from_u64(42));
        let b = scramble(3, 15, &mut StdRng::seed_from_u64(42));
        assert_eq!(a, b);
    }

    #[test]
    fn json_report_for_a_one_move_board() {
        let board: Board = "3  1 2 3  4 5 6  7 0 8".parse().unwrap();
        let solver = Solver::new(board.clone());
        let report = json_report(&board, &solver);
        assert_eq!(report["solvable"], true);
        assert_eq!(report["moves"], 1);
        assert_eq!(report["boards"].as_array().unwrap().len(), 2);
        assert_eq!(report["boards"][1][2][2], 0, "final board has the blank home");
    }

    #[test]
    fn json_report_for_an_unsolvable_board() {
        let board: Board = "3  1 2 3  4 5 6  8 7 0".parse().unwrap();
        let solver = Solver::new(board.clone());
        let report = json_report(&board, &solver);
        assert_eq!(report["solvable"], false);
        assert_eq!(report["moves"], -1);
        assert!(report["boards"].is_null());
    }

    #[test]
    fn scramble_rejects_out_of_range_dimensions() {
        let too_small = run(Command::Scramble {
            dim: 1,
            moves: 5,
            seed: Some(1),
            json: false,
        })
        .unwrap_err();
        assert!(matches!(
            too_small,
            CliError::Board(BoardError::DimensionTooSmall { dim: 1 })
        ));

        // Must be rejected before any goal-board allocation is attempted.
        let too_large = run(Command::Scramble {
            dim: 999_999_999_999,
            moves: 5,
            seed: Some(1),
            json: false,
        })
        .unwrap_err();
        assert!(matches!(
            too_large,
            CliError::Board(BoardError::DimensionTooLarge { .. })
        ));
    }

    #[test]
    fn load_board_reads_a_puzzle_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "3\n 0 1 3\n 4 2 5\n 7 8 6").unwrap();
        let board = load_board(file.path()).unwrap();
        assert_eq!(board.blank_position(), (0, 0));
    }

    #[test]
    fn load_board_reports_missing_file() {
        let err = load_board(Path::new("no/such/board.txt")).unwrap_err();
        assert!(matches!(err, CliError::Io { .. }));
    }

    #[test]
    fn load_board_reports_malformed_content() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "not a puzzle").unwrap();
        let err = load_board(file.path()).unwrap_err();
        assert!(matches!(err, CliError::Board(BoardError::Parse { .. })));
    }
}
