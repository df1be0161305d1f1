//! Row and column clues derived from a solved grid
//!
//! A clue is the list of lengths of consecutive filled runs along a line.
//! An all-empty line has an empty clue.

use serde::Serialize;

use crate::grid::SolutionGrid;

/// Run-length clues for every row and column of a grid.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Clues {
    pub rows: Vec<Vec<usize>>,
    pub columns: Vec<Vec<usize>>,
}

impl Clues {
    pub fn from_grid(grid: &SolutionGrid) -> Self {
        let rows = grid
            .rows()
            .iter()
            .map(|cells| line_runs(cells.iter().copied()))
            .collect();
        let columns = (0..grid.width())
            .map(|col| line_runs(grid.column(col)))
            .collect();
        Self { rows, columns }
    }

    /// Widest row clue when rendered with [`format_clue`], in characters.
    pub fn row_label_width(&self) -> usize {
        self.rows
            .iter()
            .map(|clue| format_clue(clue).chars().count())
            .max()
            .unwrap_or(0)
    }

    /// Tallest column clue, in entries (an empty clue still takes one line).
    pub fn column_depth(&self) -> usize {
        self.columns
            .iter()
            .map(|clue| clue.len().max(1))
            .max()
            .unwrap_or(0)
    }
}

/// Lengths of consecutive `true` runs along one line.
pub fn line_runs(cells: impl IntoIterator<Item = bool>) -> Vec<usize> {
    let mut runs = Vec::new();
    let mut current = 0;
    for filled in cells {
        if filled {
            current += 1;
        } else if current > 0 {
            runs.push(current);
            current = 0;
        }
    }
    if current > 0 {
        runs.push(current);
    }
    runs
}

/// Space-separated clue; empty lines render as `0`.
pub fn format_clue(clue: &[usize]) -> String {
    if clue.is_empty() {
        return "0".to_string();
    }
    clue.iter()
        .map(usize::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_runs() {
        assert_eq!(line_runs([true, true, false, true]), vec![2, 1]);
        assert_eq!(line_runs([false, false]), Vec::<usize>::new());
        assert_eq!(line_runs([true, true, true]), vec![3]);
        assert_eq!(line_runs([]), Vec::<usize>::new());
    }

    #[test]
    fn test_clues_from_grid() {
        let grid = SolutionGrid::new(
            2,
            3,
            vec![vec![true, false, true], vec![true, true, false]],
        )
        .unwrap();

        let clues = Clues::from_grid(&grid);

        assert_eq!(clues.rows, vec![vec![1, 1], vec![2]]);
        assert_eq!(clues.columns, vec![vec![2], vec![1], vec![1]]);
        assert_eq!(clues.column_depth(), 1);
        assert_eq!(clues.row_label_width(), 3);
    }

    #[test]
    fn test_empty_grid_has_no_clues() {
        let grid = SolutionGrid::new(0, 0, vec![]).unwrap();
        let clues = Clues::from_grid(&grid);
        assert!(clues.rows.is_empty());
        assert!(clues.columns.is_empty());
        assert_eq!(clues.column_depth(), 0);
    }

    #[test]
    fn test_format_clue() {
        assert_eq!(format_clue(&[]), "0");
        assert_eq!(format_clue(&[3, 1, 2]), "3 1 2");
    }
}
