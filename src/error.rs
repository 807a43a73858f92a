//! Error types for puzzle loading and solving.
//!
//! Two kinds of failure are kept apart:
//! - [`PuzzleError`] means the input was malformed and is reported to the user.
//! - [`SolveError`] means an internal invariant broke during graph building or
//!   solving. For a well-formed puzzle this indicates a logic bug, or a layout
//!   from which no goal can be reached.

use thiserror::Error;

/// Malformed puzzle input.
#[derive(Debug, Error)]
pub enum PuzzleError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("expected {expected} rows, found {found}")]
    RowCount { expected: usize, found: usize },

    #[error("row {row} has {found} cells, expected {expected}")]
    RowWidth {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("invalid label {label:?} at row {row}, column {column}")]
    InvalidLabel {
        label: char,
        row: usize,
        column: usize,
    },

    #[error("empty marker must be a single ASCII character, got {0:?}")]
    InvalidEmptyMarker(String),

    #[error("target cell ({row}, {column}) is outside the {width}x{height} board")]
    TargetOutOfBounds {
        row: usize,
        column: usize,
        width: usize,
        height: usize,
    },

    #[error("target region is empty")]
    EmptyTarget,

    #[error("board has no blocks")]
    NoBlocks,

    #[error("unsupported board geometry {width}x{height}")]
    UnsupportedGeometry { width: usize, height: usize },

    #[error("unknown preset {0:?}")]
    UnknownPreset(String),
}

/// Internal invariant violation during graph building or solving.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SolveError {
    #[error("state expanded twice during graph construction")]
    DuplicateVertex,

    #[error("next-step map covers {mapped} of {vertices} states; no goal is reachable from the rest")]
    IncompleteSolution { mapped: usize, vertices: usize },

    #[error("state is not part of the solved graph")]
    UnknownState,
}
