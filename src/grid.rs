//! Board arrangements and their canonical form.
//!
//! An arrangement is a flat row-major array with one byte per cell: either
//! [`EMPTY`] or a block label. A block is the set of cells sharing a label.
//! Blocks of the same shape are interchangeable, so arrangements that differ
//! only by a relabeling are collapsed to one canonical representative.

use crate::error::PuzzleError;
use crate::geometry::{neighbor, Direction};

/// Marker for an empty cell.
pub const EMPTY: u8 = b' ';

/// One arrangement of labels on a board with `CELLS` cells.
///
/// Used directly as the key of the state graph and the next-step map.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct State<const CELLS: usize>([u8; CELLS]);

/// The sorted set of block labels present in a puzzle.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Labels(Vec<u8>);

impl Labels {
    /// Collects the distinct non-empty labels of `state`, sorted.
    pub fn gather<const CELLS: usize>(state: &State<CELLS>) -> Self {
        let mut labels: Vec<u8> = state.0.iter().copied().filter(|&c| c != EMPTY).collect();
        labels.sort_unstable();
        labels.dedup();
        Self(labels)
    }

    pub fn iter(&self) -> impl Iterator<Item = u8> + '_ {
        self.0.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<const CELLS: usize> State<CELLS> {
    pub const fn new(cells: [u8; CELLS]) -> Self {
        Self(cells)
    }

    pub fn cells(&self) -> &[u8; CELLS] {
        &self.0
    }

    /// Indices of the cells occupied by `label`.
    pub fn cells_of(&self, label: u8) -> impl Iterator<Item = usize> + '_ {
        self.0
            .iter()
            .enumerate()
            .filter(move |&(_, &c)| c == label)
            .map(|(cell, _)| cell)
    }

    /// Relabels blocks in place so labels first appear in increasing order
    /// when scanning row-major.
    ///
    /// `labels` must be the full label set of the puzzle. The first `i` cells
    /// are kept canonical as the scan proceeds: `expected` is always the
    /// smallest label not yet seen, so any label below it was already placed,
    /// and a label above it is swapped with it from the current cell onwards.
    pub fn canonicalize(&mut self, labels: &Labels) {
        let mut remaining = labels.iter();
        let Some(mut expected) = remaining.next() else {
            return;
        };

        for i in 0..CELLS {
            let label = self.0[i];
            if label == EMPTY || label < expected {
                continue;
            }
            if label != expected {
                // neither label occurs before cell i
                for cell in &mut self.0[i..] {
                    if *cell == label {
                        *cell = expected;
                    } else if *cell == expected {
                        *cell = label;
                    }
                }
            }
            match remaining.next() {
                Some(next) => expected = next,
                None => break,
            }
        }
    }

    /// Returns the canonical form of this arrangement.
    #[inline]
    pub fn canonical(mut self, labels: &Labels) -> Self {
        self.canonicalize(labels);
        self
    }

    /// Slides block `label` one cell in `direction`.
    ///
    /// Returns `None` if the block is absent, touches the board edge in that
    /// direction, or would overlap another block.
    pub fn slide<const WIDTH: usize, const HEIGHT: usize>(
        &self,
        label: u8,
        direction: Direction,
    ) -> Option<Self> {
        let mut shifted = self.0;
        let mut found = false;
        for cell in self.cells_of(label) {
            shifted[cell] = EMPTY;
            found = true;
        }
        if !found {
            return None;
        }

        for cell in self.cells_of(label) {
            let next = neighbor::<WIDTH, HEIGHT>(direction, cell)?;
            let occupant = self.0[next];
            if occupant != EMPTY && occupant != label {
                return None;
            }
            shifted[next] = label;
        }

        Some(Self(shifted))
    }

    /// Returns true if every cell in `target` holds the same block.
    pub fn covers(&self, target: &[usize]) -> bool {
        let Some((&first, rest)) = target.split_first() else {
            return false;
        };
        let label = self.0[first];
        label != EMPTY && rest.iter().all(|&cell| self.0[cell] == label)
    }
}

/// Parses `HEIGHT` rows of `WIDTH` characters into an arrangement.
///
/// `empty` is the character used for empty cells in `rows`; every other
/// character must be printable ASCII and is used as a block label.
pub fn parse_state<const WIDTH: usize, const HEIGHT: usize, const CELLS: usize>(
    rows: &[&str],
    empty: char,
) -> Result<State<CELLS>, PuzzleError> {
    const { assert!(WIDTH * HEIGHT == CELLS, "CELLS must equal WIDTH * HEIGHT") };

    if rows.len() != HEIGHT {
        return Err(PuzzleError::RowCount {
            expected: HEIGHT,
            found: rows.len(),
        });
    }

    let mut cells = [EMPTY; CELLS];
    for (row, line) in rows.iter().enumerate() {
        let found = line.chars().count();
        if found != WIDTH {
            return Err(PuzzleError::RowWidth {
                row,
                expected: WIDTH,
                found,
            });
        }
        for (column, c) in line.chars().enumerate() {
            if c == empty {
                continue;
            }
            if !c.is_ascii_graphic() {
                return Err(PuzzleError::InvalidLabel {
                    label: c,
                    row,
                    column,
                });
            }
            cells[row * WIDTH + column] = c as u8;
        }
    }

    Ok(State(cells))
}

/// Formats an arrangement as one line of `WIDTH` characters per row.
pub fn format_state<const WIDTH: usize, const CELLS: usize>(state: &State<CELLS>) -> String {
    let mut output = String::with_capacity(CELLS + CELLS / WIDTH);
    for row in state.0.chunks(WIDTH) {
        output.extend(row.iter().map(|&c| char::from(c)));
        output.push('\n');
    }
    output
}
