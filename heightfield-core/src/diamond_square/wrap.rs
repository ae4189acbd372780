//! Edge wrapping for diamond-step neighbor lookups.
//!
//! A diamond midpoint on the border of the grid has one neighbor outside it.
//! That neighbor is replaced by the cell `step` away from the opposite edge:
//!
//! | direction | in range when            | wrapped coordinate |
//! |-----------|--------------------------|--------------------|
//! | `Up`      | `coord >= step`          | `extent - step`    |
//! | `Down`    | `coord + step < extent`  | `step`             |
//! | `Left`    | `coord >= step`          | `extent - step`    |
//! | `Right`   | `coord + step < extent`  | `step`             |
//!
//! Vertical moves always use the grid height as `extent`. Horizontal moves
//! use the full width only while the current column lies in the right tile
//! of a rectangular grid; elsewhere they use the height, so the left tile
//! wraps onto itself like a square grid. In square mode width and height are
//! equal and the distinction disappears.

/// Direction of a neighbor lookup. `Up` is towards row `0`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Towards smaller `y`.
    Up,
    /// Towards larger `y`.
    Down,
    /// Towards smaller `x`.
    Left,
    /// Towards larger `x`.
    Right,
}

/// Grid shape seen by the wrap resolver for one column of sub-squares.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WrapLayout {
    /// Full grid width (`2h - 1` for rectangular grids).
    pub width: usize,
    /// Grid height, also the side of one square tile.
    pub height: usize,
    /// Whether the current column lies in the right tile of a rectangular grid.
    pub right_half: bool,
}

impl WrapLayout {
    /// Extent along the axis of `direction`.
    #[must_use]
    pub const fn extent(&self, direction: Direction) -> usize {
        match direction {
            Direction::Up | Direction::Down => self.height,
            Direction::Left | Direction::Right => {
                if self.right_half {
                    self.width
                } else {
                    self.height
                }
            }
        }
    }

    /// Coordinate `step` cells from `coord` towards `direction`, wrapped.
    #[must_use]
    pub const fn wrap_index(&self, coord: usize, step: usize, direction: Direction) -> usize {
        let extent = self.extent(direction);
        match direction {
            Direction::Up | Direction::Left => {
                if coord >= step {
                    coord - step
                } else {
                    extent - step
                }
            }
            Direction::Down | Direction::Right => {
                if coord + step < extent {
                    coord + step
                } else {
                    step
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SQUARE: WrapLayout = WrapLayout {
        width: 9,
        height: 9,
        right_half: false,
    };

    const RECT_LEFT: WrapLayout = WrapLayout {
        width: 17,
        height: 9,
        right_half: false,
    };

    const RECT_RIGHT: WrapLayout = WrapLayout {
        width: 17,
        height: 9,
        right_half: true,
    };

    #[test]
    fn in_range_moves_are_plain_offsets() {
        for layout in [SQUARE, RECT_LEFT, RECT_RIGHT] {
            assert_eq!(layout.wrap_index(4, 2, Direction::Up), 2);
            assert_eq!(layout.wrap_index(4, 2, Direction::Down), 6);
            assert_eq!(layout.wrap_index(4, 2, Direction::Left), 2);
            assert_eq!(layout.wrap_index(4, 2, Direction::Right), 6);
        }
    }

    #[test]
    fn square_truth_table() {
        assert_eq!(SQUARE.wrap_index(0, 2, Direction::Up), 7);
        assert_eq!(SQUARE.wrap_index(8, 2, Direction::Down), 2);
        assert_eq!(SQUARE.wrap_index(0, 2, Direction::Left), 7);
        assert_eq!(SQUARE.wrap_index(8, 2, Direction::Right), 2);
    }

    #[test]
    fn rectangular_left_tile_wraps_within_tile() {
        assert_eq!(RECT_LEFT.wrap_index(0, 4, Direction::Left), 5);
        assert_eq!(RECT_LEFT.wrap_index(8, 4, Direction::Right), 4);
        assert_eq!(RECT_LEFT.wrap_index(0, 4, Direction::Up), 5);
        assert_eq!(RECT_LEFT.wrap_index(8, 4, Direction::Down), 4);
    }

    #[test]
    fn rectangular_right_tile_wraps_across_full_width() {
        // Column 8 is the shared edge; in the right tile it has a real
        // neighbor at 12 instead of wrapping.
        assert_eq!(RECT_RIGHT.wrap_index(8, 4, Direction::Right), 12);
        assert_eq!(RECT_RIGHT.wrap_index(16, 4, Direction::Right), 4);
        assert_eq!(RECT_RIGHT.wrap_index(0, 4, Direction::Left), 13);
        // Vertical moves ignore the tile flag
        assert_eq!(RECT_RIGHT.wrap_index(0, 4, Direction::Up), 5);
        assert_eq!(RECT_RIGHT.wrap_index(8, 4, Direction::Down), 4);
    }
}
