//! Solved puzzle grids and their renderable form
//!
//! A [`SolutionGrid`] can only be built through [`SolutionGrid::new`], which
//! checks the shape invariant (`filled.len() == height`, every row
//! `width` long). Everything downstream can therefore rely on the shape
//! without re-checking it.

use serde::Serialize;

use crate::error::{Error, Result};

/// A solved nonogram: a rectangular matrix of filled/empty cells.
///
/// Immutable once constructed. A zero height or width is a valid, empty grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SolutionGrid {
    height: usize,
    width: usize,
    filled: Vec<Vec<bool>>,
}

impl SolutionGrid {
    /// Build a grid, rejecting any shape mismatch as [`Error::MalformedResponse`].
    pub fn new(height: usize, width: usize, filled: Vec<Vec<bool>>) -> Result<Self> {
        if filled.len() != height {
            return Err(Error::malformed(format!(
                "grid declares height {} but has {} rows",
                height,
                filled.len()
            )));
        }

        if let Some((row, cells)) = filled
            .iter()
            .enumerate()
            .find(|(_, cells)| cells.len() != width)
        {
            return Err(Error::malformed(format!(
                "row {} has {} cells, expected width {}",
                row,
                cells.len(),
                width
            )));
        }

        Ok(Self {
            height,
            width,
            filled,
        })
    }

    /// Build a grid whose dimensions are taken from the rows themselves.
    ///
    /// Width comes from the first row; ragged rows are still rejected.
    pub fn from_rows(filled: Vec<Vec<bool>>) -> Result<Self> {
        let height = filled.len();
        let width = filled.first().map_or(0, Vec::len);
        Self::new(height, width, filled)
    }

    /// An empty grid of the given size.
    pub fn blank(height: usize, width: usize) -> Self {
        Self {
            height,
            width,
            filled: vec![vec![false; width]; height],
        }
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn width(&self) -> usize {
        self.width
    }

    /// Number of cells (`height * width`).
    pub fn cell_count(&self) -> usize {
        self.height * self.width
    }

    pub fn is_empty(&self) -> bool {
        self.cell_count() == 0
    }

    pub fn rows(&self) -> &[Vec<bool>] {
        &self.filled
    }

    pub fn row(&self, row: usize) -> Option<&[bool]> {
        self.filled.get(row).map(Vec::as_slice)
    }

    /// Cell lookup; `None` outside the grid.
    pub fn is_filled(&self, row: usize, col: usize) -> Option<bool> {
        self.filled.get(row).and_then(|cells| cells.get(col)).copied()
    }

    /// Iterator over column `col`, top to bottom.
    pub fn column(&self, col: usize) -> impl Iterator<Item = bool> + '_ {
        self.filled.iter().filter_map(move |cells| cells.get(col).copied())
    }

    pub fn filled_count(&self) -> usize {
        self.filled
            .iter()
            .map(|cells| cells.iter().filter(|&&c| c).count())
            .sum()
    }
}

/// One cell of a grid, positioned for rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RenderCell {
    pub row_index: usize,
    pub col_index: usize,
    pub filled: bool,
}

/// Flatten a grid into cells in row-major order.
///
/// Row 0 comes first and, within a row, column 0 comes first, so the cell
/// at linear index `r * width + c` is `(r, c)`. Zero-sized grids yield an
/// empty vector.
pub fn to_renderable(grid: &SolutionGrid) -> Vec<RenderCell> {
    let mut cells = Vec::with_capacity(grid.cell_count());
    for (row_index, row) in grid.rows().iter().enumerate() {
        for (col_index, &filled) in row.iter().enumerate() {
            cells.push(RenderCell {
                row_index,
                col_index,
                filled,
            });
        }
    }
    cells
}

/// Validate raw response data and flatten it in one step.
///
/// Never returns a partial matrix: any shape violation is an error.
pub fn renderable_from_parts(
    height: usize,
    width: usize,
    filled: Vec<Vec<bool>>,
) -> Result<Vec<RenderCell>> {
    SolutionGrid::new(height, width, filled).map(|grid| to_renderable(&grid))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> SolutionGrid {
        SolutionGrid::new(
            3,
            5,
            vec![
                vec![true, false, true, false, true],
                vec![false, true, true, true, false],
                vec![true, true, false, false, false],
            ],
        )
        .unwrap()
    }

    #[test]
    fn test_renderable_length_matches_dimensions() {
        let grid = sample();
        let cells = to_renderable(&grid);
        assert_eq!(cells.len(), grid.height() * grid.width());
    }

    #[test]
    fn test_renderable_is_row_major() {
        let grid = sample();
        let cells = to_renderable(&grid);

        for r in 0..grid.height() {
            for c in 0..grid.width() {
                let cell = cells[r * grid.width() + c];
                assert_eq!(cell.row_index, r);
                assert_eq!(cell.col_index, c);
                assert_eq!(Some(cell.filled), grid.is_filled(r, c));
            }
        }
    }

    #[test]
    fn test_zero_height_is_empty_not_error() {
        let grid = SolutionGrid::new(0, 7, vec![]).unwrap();
        assert!(to_renderable(&grid).is_empty());
        assert!(grid.is_empty());
    }

    #[test]
    fn test_zero_width_is_empty_not_error() {
        let grid = SolutionGrid::new(2, 0, vec![vec![], vec![]]).unwrap();
        assert!(to_renderable(&grid).is_empty());
        assert_eq!(grid.height(), 2);
    }

    #[test]
    fn test_ragged_row_is_malformed() {
        let err = SolutionGrid::new(2, 3, vec![vec![true, false, true], vec![true, false]])
            .unwrap_err();
        assert!(matches!(err, Error::MalformedResponse { .. }));
        assert!(err.to_string().contains("row 1"));
    }

    #[test]
    fn test_height_mismatch_is_malformed() {
        let err = SolutionGrid::new(3, 1, vec![vec![true], vec![false]]).unwrap_err();
        assert!(matches!(err, Error::MalformedResponse { .. }));
    }

    #[test]
    fn test_renderable_from_parts_never_partial() {
        let result = renderable_from_parts(2, 2, vec![vec![true, true], vec![true]]);
        assert!(matches!(result, Err(Error::MalformedResponse { .. })));

        let cells = renderable_from_parts(1, 2, vec![vec![false, true]]).unwrap();
        assert_eq!(cells.len(), 2);
        assert!(cells[1].filled);
    }

    #[test]
    fn test_from_rows_infers_dimensions() {
        let grid = SolutionGrid::from_rows(vec![vec![true, false], vec![false, false]]).unwrap();
        assert_eq!((grid.height(), grid.width()), (2, 2));
        assert_eq!(grid.filled_count(), 1);

        let empty = SolutionGrid::from_rows(vec![]).unwrap();
        assert_eq!((empty.height(), empty.width()), (0, 0));
    }

    #[test]
    fn test_column_iterates_top_to_bottom() {
        let grid = sample();
        let col: Vec<bool> = grid.column(1).collect();
        assert_eq!(col, vec![false, true, true]);
    }

    #[test]
    fn test_out_of_bounds_lookup() {
        let grid = sample();
        assert_eq!(grid.is_filled(3, 0), None);
        assert_eq!(grid.is_filled(0, 5), None);
        assert!(grid.row(3).is_none());
    }
}
