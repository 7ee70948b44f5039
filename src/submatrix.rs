//! Row/column exclusion for cost matrices and dual vectors
//!
//! Partitioning the search tree spawns child subproblems whose cost matrix
//! drops one row and one column of the parent's. Children own their data, so
//! exclusion always produces a fresh copy and never touches the input.

use nalgebra::{DMatrix, DVector};

/// Returns a copy of `m` with `row` and `col` removed.
///
/// All remaining entries keep their original relative order.
pub fn without_row_col(m: &DMatrix<f64>, row: usize, col: usize) -> DMatrix<f64> {
    debug_assert!(row < m.nrows() && col < m.ncols());
    m.clone().remove_row(row).remove_column(col)
}

/// Returns a copy of `v` with the entry at `index` removed.
pub fn without_entry(v: &DVector<f64>, index: usize) -> DVector<f64> {
    debug_assert!(index < v.len());
    v.clone().remove_row(index)
}
