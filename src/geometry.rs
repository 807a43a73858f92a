//! Directions and cell adjacency on a rectangular board.
//!
//! Cells are indexed row-major: `idx = row * WIDTH + column`.

use std::fmt;

/// One of the four directions a block can slide.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    Left,
    Right,
    Up,
    Down,
}

impl Direction {
    /// All directions, in the order moves are generated.
    pub const ALL: [Direction; 4] = [
        Direction::Left,
        Direction::Right,
        Direction::Up,
        Direction::Down,
    ];

    pub fn opposite(self) -> Self {
        match self {
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Direction::Left => "left",
            Direction::Right => "right",
            Direction::Up => "up",
            Direction::Down => "down",
        };
        f.write_str(name)
    }
}

/// Converts (row, column) to a linear cell index.
#[inline(always)]
pub const fn coord_to_idx<const WIDTH: usize>(row: usize, column: usize) -> usize {
    row * WIDTH + column
}

/// Converts a linear cell index to (row, column).
#[inline(always)]
pub const fn idx_to_coord<const WIDTH: usize>(cell_index: usize) -> (usize, usize) {
    (cell_index / WIDTH, cell_index % WIDTH)
}

/// Returns true if `cell` is one of the `direction`-most cells of the board.
#[inline]
pub const fn is_edge<const WIDTH: usize, const HEIGHT: usize>(
    direction: Direction,
    cell: usize,
) -> bool {
    match direction {
        Direction::Left => cell % WIDTH == 0,
        Direction::Right => cell % WIDTH == WIDTH - 1,
        Direction::Up => cell < WIDTH,
        Direction::Down => cell >= (HEIGHT - 1) * WIDTH,
    }
}

/// Returns the cell adjacent to `cell` in `direction`, or `None` on the edge.
#[inline]
pub const fn neighbor<const WIDTH: usize, const HEIGHT: usize>(
    direction: Direction,
    cell: usize,
) -> Option<usize> {
    if is_edge::<WIDTH, HEIGHT>(direction, cell) {
        return None;
    }
    Some(match direction {
        Direction::Left => cell - 1,
        Direction::Right => cell + 1,
        Direction::Up => cell - WIDTH,
        Direction::Down => cell + WIDTH,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_edges_on_klotski_board() {
        // 4x5 board: top row 0..4, bottom row 16..20
        assert!(is_edge::<4, 5>(Direction::Left, 8));
        assert!(is_edge::<4, 5>(Direction::Right, 11));
        assert!(is_edge::<4, 5>(Direction::Up, 3));
        assert!(is_edge::<4, 5>(Direction::Down, 16));
        assert!(!is_edge::<4, 5>(Direction::Down, 15));
        assert!(!is_edge::<4, 5>(Direction::Left, 9));
    }

    #[test]
    fn test_neighbor_is_inverse_of_opposite() {
        for cell in 0..20 {
            for direction in Direction::ALL {
                if let Some(next) = neighbor::<4, 5>(direction, cell) {
                    assert_eq!(
                        neighbor::<4, 5>(direction.opposite(), next),
                        Some(cell),
                        "{direction} from {cell} then back should return"
                    );
                }
            }
        }
    }

    #[test]
    fn test_neighbor_stays_in_row_or_column() {
        for cell in 0..20 {
            let (row, column) = idx_to_coord::<4>(cell);
            if let Some(next) = neighbor::<4, 5>(Direction::Right, cell) {
                assert_eq!(idx_to_coord::<4>(next), (row, column + 1));
            }
            if let Some(next) = neighbor::<4, 5>(Direction::Down, cell) {
                assert_eq!(idx_to_coord::<4>(next), (row + 1, column));
            }
        }
    }

    #[test]
    fn test_coordinate_conversion_roundtrip() {
        for idx in 0..20 {
            let (row, column) = idx_to_coord::<4>(idx);
            assert_eq!(coord_to_idx::<4>(row, column), idx);
        }
    }
}
