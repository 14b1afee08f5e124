//! Mapping raw grid indices to maze coordinates

use tracing::{debug, warn};

use crate::Mode;

/// Cell position in the maze, row 0 at the bottom
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LogicalCoordinate {
    pub row: usize,
    pub col: usize,
}

/// Logical size of the maze and the rule for reaching it from raw indices
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dimensions {
    pub rows: usize,
    pub cols: usize,
    pub mode: Mode,
}

impl Dimensions {
    /// Resolve the logical size of a `height` x `width` token grid.
    ///
    /// Line mode expects `(2R+1) x (2C+1)` tokens. Other sizes are accepted
    /// and truncated by integer division.
    pub fn resolve(height: usize, width: usize, mode: Mode) -> Self {
        let dims = match mode {
            Mode::Line => {
                if height % 2 == 0 || width % 2 == 0 {
                    warn!(height, width, "line mode grid is not (2R+1)x(2C+1), truncating");
                }
                Self {
                    rows: height / 2,
                    cols: width / 2,
                    mode,
                }
            }
            Mode::Cell => Self {
                rows: height,
                cols: width,
                mode,
            },
        };
        debug!(rows = dims.rows, cols = dims.cols, %mode, "resolved maze dimensions");
        dims
    }

    /// Raw index (i, j) to maze coordinate, before the vertical flip
    pub fn to_logical(&self, i: usize, j: usize) -> LogicalCoordinate {
        match self.mode {
            Mode::Line => LogicalCoordinate { row: i / 2, col: j / 2 },
            Mode::Cell => LogicalCoordinate { row: i, col: j },
        }
    }

    /// Input rows run top-down, drawing rows bottom-up
    pub fn flip(&self, coord: LogicalCoordinate) -> LogicalCoordinate {
        LogicalCoordinate {
            row: self.rows - coord.row - 1,
            col: coord.col,
        }
    }

    /// Whether raw (i, j) holds cell content rather than wall scaffolding
    pub fn is_cell_position(&self, i: usize, j: usize) -> bool {
        match self.mode {
            Mode::Line => i % 2 == 1 && j % 2 == 1,
            Mode::Cell => true,
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::mode::{Dimensions, LogicalCoordinate};
    use crate::Mode;

    #[test]
    fn line_mode_halves_dimensions() {
        let dims = Dimensions::resolve(7, 9, Mode::Line);
        assert_eq!((dims.rows, dims.cols), (3, 4));
        assert_eq!(dims.to_logical(5, 3), LogicalCoordinate { row: 2, col: 1 });
    }

    #[test]
    fn line_mode_truncates_even_sizes() {
        let dims = Dimensions::resolve(4, 3, Mode::Line);
        assert_eq!((dims.rows, dims.cols), (2, 1));
    }

    #[test]
    fn cell_mode_is_identity() {
        let dims = Dimensions::resolve(2, 5, Mode::Cell);
        assert_eq!((dims.rows, dims.cols), (2, 5));
        assert_eq!(dims.to_logical(1, 4), LogicalCoordinate { row: 1, col: 4 });
        assert!(dims.is_cell_position(0, 0));
    }

    #[test]
    fn flip_puts_first_row_on_top() {
        let dims = Dimensions::resolve(3, 1, Mode::Cell);
        let top = dims.flip(dims.to_logical(0, 0));
        assert_eq!(top.row, 2);
        let bottom = dims.flip(dims.to_logical(2, 0));
        assert_eq!(bottom.row, 0);
    }

    #[test]
    fn cell_positions_in_line_mode() {
        let dims = Dimensions::resolve(5, 5, Mode::Line);
        assert!(dims.is_cell_position(1, 3));
        assert!(!dims.is_cell_position(0, 1));
        assert!(!dims.is_cell_position(2, 2));
    }
}
