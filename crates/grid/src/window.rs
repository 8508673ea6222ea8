//! Spatial partitioning of a grid into chunk windows.

use std::ops::Range;

/// A rectangular spatial window `[row_start, row_end) x [col_start, col_end)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Window {
    row_start: usize,
    row_end: usize,
    col_start: usize,
    col_end: usize,
}

impl Window {
    /// Row index range.
    pub fn rows(&self) -> Range<usize> {
        self.row_start..self.row_end
    }

    /// Column index range.
    pub fn cols(&self) -> Range<usize> {
        self.col_start..self.col_end
    }

    /// Number of rows.
    pub fn n_rows(&self) -> usize {
        self.row_end - self.row_start
    }

    /// Number of columns.
    pub fn n_cols(&self) -> usize {
        self.col_end - self.col_start
    }
}

/// Splits an `n_rows x n_cols` grid into row-major windows of at most
/// `chunk_rows x chunk_cols`. Edge windows are smaller when the chunk size
/// does not divide the grid. Windows are disjoint and cover the grid.
///
/// Chunk sizes must be positive.
pub fn partition(
    n_rows: usize,
    n_cols: usize,
    chunk_rows: usize,
    chunk_cols: usize,
) -> Vec<Window> {
    assert!(chunk_rows > 0 && chunk_cols > 0, "chunk size must be positive");
    let capacity = n_rows.div_ceil(chunk_rows) * n_cols.div_ceil(chunk_cols);
    let mut windows = Vec::with_capacity(capacity);
    for row_start in (0..n_rows).step_by(chunk_rows) {
        for col_start in (0..n_cols).step_by(chunk_cols) {
            windows.push(Window {
                row_start,
                row_end: (row_start + chunk_rows).min(n_rows),
                col_start,
                col_end: (col_start + chunk_cols).min(n_cols),
            });
        }
    }
    windows
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exact_tiling() {
        let w = partition(50, 50, 25, 25);
        assert_eq!(w.len(), 4);
        assert!(w.iter().all(|w| w.n_rows() == 25 && w.n_cols() == 25));
    }

    #[test]
    fn ragged_edges() {
        let w = partition(7, 5, 3, 2);
        assert_eq!(w.len(), 3 * 3);
        assert_eq!(w[2].cols(), 4..5);
        assert_eq!(w[8].rows(), 6..7);
        assert_eq!(w[8].n_rows() * w[8].n_cols(), 1);
    }

    #[test]
    fn covers_every_cell_once() {
        let (n_rows, n_cols) = (11, 13);
        let mut hits = vec![0u8; n_rows * n_cols];
        for w in partition(n_rows, n_cols, 4, 5) {
            for r in w.rows() {
                for c in w.cols() {
                    hits[r * n_cols + c] += 1;
                }
            }
        }
        assert!(hits.iter().all(|&h| h == 1));
    }

    #[test]
    fn empty_grid() {
        assert!(partition(0, 10, 5, 5).is_empty());
    }

    #[test]
    fn chunk_larger_than_grid() {
        let w = partition(3, 2, 25, 25);
        assert_eq!(w.len(), 1);
        assert_eq!((w[0].rows(), w[0].cols()), (0..3, 0..2));
    }
}
