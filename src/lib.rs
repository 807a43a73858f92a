//! Klotski Solver Library
//!
//! Enumerates every arrangement reachable from a sliding-block layout, merging
//! arrangements that differ only by swapping interchangeable blocks, and finds
//! a shortest move sequence from each of them to a goal.

pub mod config;
pub mod error;
pub mod geometry;
pub mod graph;
pub mod grid;
pub mod puzzles;
pub mod solver;

use error::SolveError;
use grid::format_state;
use puzzles::Puzzle;

/// Summary of a solved puzzle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    /// Number of distinct canonical arrangements reachable from the start.
    pub vertices: usize,
    /// Number of reachable arrangements that are goals.
    pub goals: usize,
    /// Every board of a shortest solution, start first, formatted as rows.
    pub boards: Vec<String>,
}

impl Report {
    /// Minimum number of slides from the start to a goal.
    pub fn moves(&self) -> usize {
        self.boards.len().saturating_sub(1)
    }
}

/// Trait that erases compile-time board geometry for dynamic dispatch.
///
/// `WIDTH`, `HEIGHT` and `CELLS` are hidden behind the vtable, so callers can
/// work with any puzzle without turbofish.
pub trait PuzzleOps {
    fn name(&self) -> &str;
    fn format_initial(&self) -> String;
    fn report(&self) -> Result<Report, SolveError>;
}

impl<const WIDTH: usize, const HEIGHT: usize, const CELLS: usize> PuzzleOps
    for Puzzle<WIDTH, HEIGHT, CELLS>
{
    fn name(&self) -> &str {
        &self.name
    }

    fn format_initial(&self) -> String {
        format_state::<WIDTH, CELLS>(&self.initial)
    }

    fn report(&self) -> Result<Report, SolveError> {
        let exploration = self.explore()?;
        let boards = exploration
            .path()?
            .iter()
            .map(format_state::<WIDTH, CELLS>)
            .collect();

        Ok(Report {
            vertices: exploration.graph.len(),
            goals: exploration.solution.goals(),
            boards,
        })
    }
}
