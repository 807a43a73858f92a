//! Klotski Solver
//!
//! Solves sliding-block puzzles by enumerating every reachable arrangement
//! and running a breadth-first search outwards from the solved ones. Prints
//! a shortest sequence of boards from the starting layout to a solution.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Args, Parser, Subcommand};
use tracing::{error, info};
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::EnvFilter;

use klotski::config::PuzzleConfig;
use klotski::error::PuzzleError;
use klotski::puzzles::{corner_puzzle, klotski_level, KLOTSKI_LEVELS};
use klotski::{PuzzleOps, Report};

/// Built-in level solved when none is given.
const DEFAULT_PRESET: &str = "level-19";

/// Key of the 2x2 demo puzzle.
const CORNER_PRESET: &str = "corner";

/// Finds shortest solutions to sliding-block puzzles.
#[derive(Parser)]
#[command(name = "klotski")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Print every board of a shortest solution.
    Solve(Source),
    /// Print the number of reachable states and the minimum number of moves.
    Count(Source),
    /// List the built-in puzzles.
    List,
}

/// Where the starting layout comes from.
#[derive(Args)]
struct Source {
    /// Built-in puzzle to solve.
    #[arg(short, long, default_value = DEFAULT_PRESET, conflicts_with = "file")]
    preset: String,

    /// TOML puzzle file to solve instead of a built-in puzzle.
    #[arg(short, long)]
    file: Option<PathBuf>,
}

impl Default for Source {
    fn default() -> Self {
        Self {
            preset: DEFAULT_PRESET.to_string(),
            file: None,
        }
    }
}

fn main() -> ExitCode {
    init_logging();
    let cli = Cli::parse();

    let result = match cli.command {
        Some(Command::Solve(source)) => run_solve(&source),
        Some(Command::Count(source)) => run_count(&source),
        Some(Command::List) => {
            run_list();
            Ok(())
        }
        None => run_solve(&Source::default()),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            ExitCode::FAILURE
        }
    }
}

/// Sends log events to stderr, filtered by `RUST_LOG` (default `info`).
fn init_logging() {
    let filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .from_env_lossy();

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

/// Resolves a puzzle from a file or a built-in name.
fn load(source: &Source) -> Result<Box<dyn PuzzleOps>, PuzzleError> {
    if let Some(path) = &source.file {
        info!(path = %path.display(), "Loading puzzle");
        return PuzzleConfig::load(path)?.into_ops();
    }
    if source.preset == CORNER_PRESET {
        return Ok(Box::new(corner_puzzle()?));
    }
    Ok(Box::new(klotski_level(&source.preset)?))
}

/// Solves the puzzle and prints the boards of a shortest solution.
fn run_solve(source: &Source) -> Result<(), Box<dyn std::error::Error>> {
    let puzzle = load(source)?;
    let report = puzzle.report()?;
    print!("{}", format_report(&report));
    info!(moves = report.moves(), "Solved {}", puzzle.name());
    Ok(())
}

/// Prints graph statistics without the solution boards.
fn run_count(source: &Source) -> Result<(), Box<dyn std::error::Error>> {
    let puzzle = load(source)?;
    let report = puzzle.report()?;
    println!("{}", puzzle.name());
    println!("{} reachable states", report.vertices);
    println!("{} solved states", report.goals);
    println!("{} moves", report.moves());
    Ok(())
}

/// Prints the built-in puzzle names.
fn run_list() {
    for preset in KLOTSKI_LEVELS {
        println!("{:<10} {}", preset.key, preset.name);
    }
    println!("{:<10} 2x2 demo", CORNER_PRESET);
}

/// Boards of the solution, one per step, separated by blank lines.
fn format_report(report: &Report) -> String {
    report.boards.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    use klotski::puzzles::Puzzle;

    #[test]
    fn test_strip_solution_output() {
        // a single block on a 3x1 strip has exactly one shortest path
        let puzzle = Puzzle::<3, 1, 3>::from_rows("Strip", &["A  "], ' ', &[(0, 2)]).unwrap();
        let report = puzzle.report().unwrap();
        assert_eq!(report.moves(), 2);

        let output = format_report(&report).replace(' ', ".");
        insta::assert_snapshot!(output.trim_end(), @r"
        A..

        .A.

        ..A
        ");
    }

    #[test]
    fn test_load_presets() {
        let source = Source::default();
        assert_eq!(load(&source).unwrap().name(), "Set 1 Level 19");

        let source = Source {
            preset: CORNER_PRESET.to_string(),
            file: None,
        };
        assert_eq!(load(&source).unwrap().name(), "Corner");

        let source = Source {
            preset: "nope".to_string(),
            file: None,
        };
        assert!(matches!(load(&source), Err(PuzzleError::UnknownPreset(_))));
    }

    #[test]
    fn test_load_file() {
        let source = Source {
            preset: DEFAULT_PRESET.to_string(),
            file: Some(PathBuf::from(concat!(
                env!("CARGO_MANIFEST_DIR"),
                "/puzzles/level-15.toml"
            ))),
        };
        assert_eq!(load(&source).unwrap().name(), "Set 1 Level 15");

        let source = Source {
            preset: DEFAULT_PRESET.to_string(),
            file: Some(PathBuf::from("does-not-exist.toml")),
        };
        assert!(matches!(load(&source), Err(PuzzleError::Io(_))));
    }

    #[test]
    fn test_cli_parses() {
        let cli = Cli::try_parse_from(["klotski", "solve", "--preset", "level-15"]).unwrap();
        assert!(matches!(cli.command, Some(Command::Solve(source)) if source.preset == "level-15"));

        assert!(Cli::try_parse_from(["klotski", "count", "-p", "corner", "-f", "x.toml"]).is_err());
        assert!(Cli::try_parse_from(["klotski"]).unwrap().command.is_none());
    }
}
