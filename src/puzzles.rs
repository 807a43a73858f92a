//! Puzzle definitions and built-in layouts.
//!
//! A puzzle is a board geometry, a starting arrangement and a target region.
//! It is solved once some block covers every target cell.

use tracing::info_span;

use crate::error::{PuzzleError, SolveError};
use crate::geometry::coord_to_idx;
use crate::graph::{Graph, GraphBuilder};
use crate::grid::{parse_state, Labels, State};
use crate::solver::{solve, Solution};

/// A sliding-block puzzle with compile-time geometry.
///
/// - `WIDTH`, `HEIGHT`: board dimensions
/// - `CELLS`: total cells (must equal `WIDTH * HEIGHT`)
pub struct Puzzle<const WIDTH: usize, const HEIGHT: usize, const CELLS: usize> {
    pub name: String,
    /// Starting arrangement, as given (not necessarily canonical).
    pub initial: State<CELLS>,
    /// Cell indices a single block must cover.
    pub target: Vec<usize>,
}

/// Result of exploring a puzzle: the full graph and its next-step map.
pub struct Exploration<const CELLS: usize> {
    /// Canonical form of the starting arrangement.
    pub start: State<CELLS>,
    pub graph: Graph<CELLS>,
    pub solution: Solution<CELLS>,
}

impl<const CELLS: usize> Exploration<CELLS> {
    /// Shortest sequence of states from the start to a goal.
    pub fn path(&self) -> Result<Vec<State<CELLS>>, SolveError> {
        self.solution.path_from(&self.start)
    }
}

impl<const WIDTH: usize, const HEIGHT: usize, const CELLS: usize> Puzzle<WIDTH, HEIGHT, CELLS> {
    /// Creates a puzzle, validating the target region and that there is
    /// something to move.
    pub fn new(
        name: impl Into<String>,
        initial: State<CELLS>,
        target: &[(usize, usize)],
    ) -> Result<Self, PuzzleError> {
        const { assert!(WIDTH * HEIGHT == CELLS, "CELLS must equal WIDTH * HEIGHT") };

        if target.is_empty() {
            return Err(PuzzleError::EmptyTarget);
        }
        let target = target
            .iter()
            .map(|&(row, column)| {
                if row < HEIGHT && column < WIDTH {
                    Ok(coord_to_idx::<WIDTH>(row, column))
                } else {
                    Err(PuzzleError::TargetOutOfBounds {
                        row,
                        column,
                        width: WIDTH,
                        height: HEIGHT,
                    })
                }
            })
            .collect::<Result<Vec<_>, _>>()?;
        if Labels::gather(&initial).is_empty() {
            return Err(PuzzleError::NoBlocks);
        }

        Ok(Self {
            name: name.into(),
            initial,
            target,
        })
    }

    /// Parses a puzzle from `HEIGHT` rows of `WIDTH` characters.
    pub fn from_rows(
        name: impl Into<String>,
        rows: &[&str],
        empty: char,
        target: &[(usize, usize)],
    ) -> Result<Self, PuzzleError> {
        let initial = parse_state::<WIDTH, HEIGHT, CELLS>(rows, empty)?;
        Self::new(name, initial, target)
    }

    /// Returns true if one block covers the whole target region.
    #[inline]
    pub fn is_goal(&self, state: &State<CELLS>) -> bool {
        state.covers(&self.target)
    }

    /// Builds the reachable graph and solves it.
    pub fn explore(&self) -> Result<Exploration<CELLS>, SolveError> {
        let _span = info_span!("explore", puzzle = %self.name).entered();

        let builder = GraphBuilder::<WIDTH, HEIGHT, CELLS>::new(self.initial);
        let start = self.initial.canonical(builder.labels());
        let graph = builder.build()?;
        let solution = solve(&graph, |state| self.is_goal(state))?;

        Ok(Exploration {
            start,
            graph,
            solution,
        })
    }
}

/// A named built-in layout for the classic 4x5 board.
pub struct Preset {
    /// Short name used on the command line.
    pub key: &'static str,
    pub name: &'static str,
    pub rows: &'static [&'static str; KLOTSKI_HEIGHT],
}

/// Klotski board constants.
pub const KLOTSKI_WIDTH: usize = 4;
pub const KLOTSKI_HEIGHT: usize = 5;
pub const KLOTSKI_CELLS: usize = 20;

pub type KlotskiPuzzle = Puzzle<KLOTSKI_WIDTH, KLOTSKI_HEIGHT, KLOTSKI_CELLS>;

/// The 2x2 exit region at the bottom middle of the board, as (row, column).
pub const KLOTSKI_TARGET: &[(usize, usize)] = &[(3, 1), (3, 2), (4, 1), (4, 2)];

/// Built-in Klotski levels. Empty cells are spaces.
pub const KLOTSKI_LEVELS: &[Preset] = &[
    Preset {
        key: "level-15",
        name: "Set 1 Level 15",
        rows: &["0112", "0113", "4567", "4867", "  99"],
    },
    Preset {
        key: "level-18",
        name: "Set 1 Level 18",
        rows: &["1223", "1224", "5678", "5679", " aa "],
    },
    Preset {
        key: "level-19",
        name: "Set 1 Level 19",
        rows: &["1223", "1223", "4567", "899a", "8  a"],
    },
];

impl Preset {
    pub fn puzzle(&self) -> Result<KlotskiPuzzle, PuzzleError> {
        KlotskiPuzzle::from_rows(self.name, self.rows, ' ', KLOTSKI_TARGET)
    }
}

/// Looks up a built-in Klotski level by key.
pub fn klotski_level(key: &str) -> Result<KlotskiPuzzle, PuzzleError> {
    KLOTSKI_LEVELS
        .iter()
        .find(|preset| preset.key == key)
        .ok_or_else(|| PuzzleError::UnknownPreset(key.to_string()))?
        .puzzle()
}

/// Smallest useful puzzle: one 1x1 block in the top-left corner of a 2x2
/// board, to be moved to the bottom-right corner.
pub fn corner_puzzle() -> Result<Puzzle<2, 2, 4>, PuzzleError> {
    Puzzle::from_rows("Corner", &["A ", "  "], ' ', &[(1, 1)])
}
