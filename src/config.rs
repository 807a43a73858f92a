//! Loading puzzle definitions from TOML files.
//!
//! ```toml
//! name = "Set 1 Level 19"
//! empty = " "
//! board = ["1223", "1223", "4567", "899a", "8  a"]
//! target = [[3, 1], [3, 2], [4, 1], [4, 2]]
//! ```
//!
//! Width and height are taken from `board`. `target` lists the (row, column)
//! cells a single block must cover. `empty` is optional and defaults to a
//! space.

use std::path::Path;

use serde::Deserialize;

use crate::error::PuzzleError;
use crate::puzzles::Puzzle;
use crate::PuzzleOps;

/// A puzzle definition as read from a file.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PuzzleConfig {
    pub name: String,

    /// Character marking empty cells in `board`.
    #[serde(default = "default_empty")]
    pub empty: String,

    /// One string per row.
    pub board: Vec<String>,

    /// Target cells as (row, column).
    pub target: Vec<(usize, usize)>,
}

fn default_empty() -> String {
    " ".to_string()
}

/// Expands to a match on (width, height) over the board sizes that can be
/// loaded at runtime.
macro_rules! with_geometry {
    ($config:expr, $(($width:literal, $height:literal)),* $(,)?) => {
        match ($config.width(), $config.height()) {
            $(
                ($width, $height) => Ok(Box::new(
                    $config.to_puzzle::<$width, $height, { $width * $height }>()?,
                ) as Box<dyn PuzzleOps>),
            )*
            (width, height) => Err(PuzzleError::UnsupportedGeometry { width, height }),
        }
    };
}

impl PuzzleConfig {
    /// Loads a puzzle definition from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, PuzzleError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Parses a puzzle definition from a TOML string.
    pub fn from_toml_str(s: &str) -> Result<Self, PuzzleError> {
        Ok(toml::from_str(s)?)
    }

    pub fn width(&self) -> usize {
        self.board.first().map_or(0, |row| row.chars().count())
    }

    pub fn height(&self) -> usize {
        self.board.len()
    }

    /// The empty-cell character; must be exactly one ASCII character.
    pub fn empty_marker(&self) -> Result<char, PuzzleError> {
        let mut chars = self.empty.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) if c.is_ascii() => Ok(c),
            _ => Err(PuzzleError::InvalidEmptyMarker(self.empty.clone())),
        }
    }

    /// Builds a puzzle with the given compile-time geometry.
    pub fn to_puzzle<const WIDTH: usize, const HEIGHT: usize, const CELLS: usize>(
        &self,
    ) -> Result<Puzzle<WIDTH, HEIGHT, CELLS>, PuzzleError> {
        let rows: Vec<&str> = self.board.iter().map(String::as_str).collect();
        Puzzle::from_rows(self.name.as_str(), &rows, self.empty_marker()?, &self.target)
    }

    /// Builds a puzzle for whichever supported geometry the board has.
    pub fn into_ops(self) -> Result<Box<dyn PuzzleOps>, PuzzleError> {
        with_geometry!(
            self,
            (1, 2),
            (2, 1),
            (2, 2),
            (2, 3),
            (3, 2),
            (3, 3),
            (3, 4),
            (4, 3),
            (4, 4),
            (4, 5),
            (5, 4),
            (5, 5),
            (5, 6),
            (6, 5),
            (6, 6),
        )
    }
}
