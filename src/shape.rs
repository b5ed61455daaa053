//! Occupancy matrices and clockwise rotation

/// A rectangular matrix of occupied sub-cells, relative to its top-left corner
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Shape {
    rows: usize,
    cols: usize,
    /// Row-major occupancy
    cells: Vec<bool>,
}

impl Shape {
    /// Build a shape from 0/1 rows. Panics on an empty or ragged matrix.
    pub fn from_rows(rows: &[&[u8]]) -> Self {
        assert!(!rows.is_empty(), "shape needs at least one row");
        let cols = rows[0].len();
        assert!(cols > 0, "shape needs at least one column");
        assert!(
            rows.iter().all(|row| row.len() == cols),
            "shape rows must all have the same length"
        );

        Self {
            rows: rows.len(),
            cols,
            cells: rows.iter().flat_map(|row| row.iter().map(|&v| v != 0)).collect(),
        }
    }

    /// (rows, columns)
    pub fn dimensions(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Whether the sub-cell at (row, col) is occupied; out of range is empty
    pub fn is_filled(&self, row: usize, col: usize) -> bool {
        row < self.rows && col < self.cols && self.cells[row * self.cols + col]
    }

    /// Iterate the (row, col) offsets of every occupied sub-cell
    pub fn occupied(&self) -> impl Iterator<Item = (i32, i32)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, filled)| **filled)
            .map(|(i, _)| ((i / self.cols) as i32, (i % self.cols) as i32))
    }

    pub fn cell_count(&self) -> usize {
        self.cells.iter().filter(|c| **c).count()
    }

    /// Rotate 90° clockwise into a new matrix.
    ///
    /// Output row `c` is original column `c` read from the bottom row up,
    /// so the result has the row and column counts swapped.
    pub fn rotate(&self) -> Shape {
        let mut cells = Vec::with_capacity(self.cells.len());
        for c in 0..self.cols {
            for r in (0..self.rows).rev() {
                cells.push(self.cells[r * self.cols + c]);
            }
        }

        Shape {
            rows: self.cols,
            cols: self.rows,
            cells,
        }
    }
}

/// Free-function form of [`Shape::rotate`]
pub fn rotate(shape: &Shape) -> Shape {
    shape.rotate()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tetromino::TetrominoType;

    #[test]
    fn test_rotate_t_clockwise() {
        // ###      #.
        // .#.  ->  ##
        //          #.
        let t = TetrominoType::T.shape();
        let rotated = rotate(&t);
        assert_eq!(rotated, Shape::from_rows(&[&[0, 1], &[1, 1], &[0, 1]]));
    }

    #[test]
    fn test_rotate_i_swaps_dimensions() {
        let i = TetrominoType::I.shape();
        let rotated = i.rotate();
        assert_eq!(rotated.dimensions(), (4, 1));
        assert_eq!(rotated.occupied().count(), 4);
    }

    #[test]
    fn test_rotate_does_not_mutate_input() {
        let s = TetrominoType::S.shape();
        let before = s.clone();
        let _ = s.rotate();
        assert_eq!(s, before);
    }

    #[test]
    fn test_four_rotations_return_to_original() {
        for piece in TetrominoType::all() {
            let shape = piece.shape();
            let full_turn = shape.rotate().rotate().rotate().rotate();
            assert_eq!(full_turn, shape, "{}", piece.name());
        }
    }

    #[test]
    fn test_non_square_rotation_swaps_rows_and_cols() {
        for piece in TetrominoType::all() {
            let shape = piece.shape();
            let (rows, cols) = shape.dimensions();
            if rows != cols {
                assert_eq!(shape.rotate().dimensions(), (cols, rows));
            }
        }
    }

    #[test]
    fn test_occupied_offsets() {
        let j = TetrominoType::J.shape();
        let cells: Vec<_> = j.occupied().collect();
        assert_eq!(cells, vec![(0, 0), (1, 0), (1, 1), (1, 2)]);
    }

    #[test]
    #[should_panic]
    fn test_empty_shape_panics() {
        let _ = Shape::from_rows(&[]);
    }

    #[test]
    #[should_panic]
    fn test_ragged_shape_panics() {
        let _ = Shape::from_rows(&[&[1, 1], &[1]]);
    }
}
