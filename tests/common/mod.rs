//! Common test helpers for assignment enumeration tests

#![cfg(feature = "alloc")]
#![allow(dead_code)]

use nalgebra::DMatrix;
use rand::rngs::StdRng;
use rand::Rng;

/// Every injective row-to-column assignment of an n x m matrix (n <= m),
/// as (cost, assignment) pairs sorted by ascending cost.
pub fn brute_force_ranking(c: &DMatrix<f64>) -> Vec<(f64, Vec<usize>)> {
    let mut out = Vec::new();
    let mut used = vec![false; c.ncols()];
    let mut current = Vec::with_capacity(c.nrows());
    extend(c, &mut used, &mut current, 0.0, &mut out);
    out.sort_by(|a, b| a.0.partial_cmp(&b.0).unwrap());
    out
}

fn extend(
    c: &DMatrix<f64>,
    used: &mut Vec<bool>,
    current: &mut Vec<usize>,
    cost: f64,
    out: &mut Vec<(f64, Vec<usize>)>,
) {
    let row = current.len();
    if row == c.nrows() {
        out.push((cost, current.clone()));
        return;
    }
    for col in 0..c.ncols() {
        if used[col] {
            continue;
        }
        used[col] = true;
        current.push(col);
        extend(c, used, current, cost + c[(row, col)], out);
        current.pop();
        used[col] = false;
    }
}

/// Random cost matrix with entries drawn uniformly from `range`.
pub fn random_matrix(
    rng: &mut StdRng,
    rows: usize,
    cols: usize,
    range: core::ops::Range<f64>,
) -> DMatrix<f64> {
    DMatrix::from_fn(rows, cols, |_, _| rng.random_range(range.clone()))
}

/// The 10x10 association cost matrix from the reference test-suite.
pub fn association_costs() -> DMatrix<f64> {
    DMatrix::from_row_slice(
        10,
        10,
        &[
            7.0, 51.0, 52.0, 87.0, 38.0, 60.0, 74.0, 66.0, 0.0, 20.0, //
            50.0, 12.0, 0.0, 64.0, 8.0, 53.0, 0.0, 46.0, 76.0, 42.0, //
            27.0, 77.0, 0.0, 18.0, 22.0, 48.0, 44.0, 13.0, 0.0, 57.0, //
            62.0, 0.0, 3.0, 8.0, 5.0, 6.0, 14.0, 0.0, 26.0, 39.0, //
            0.0, 97.0, 0.0, 5.0, 13.0, 0.0, 41.0, 31.0, 62.0, 48.0, //
            79.0, 68.0, 0.0, 0.0, 15.0, 12.0, 17.0, 47.0, 35.0, 43.0, //
            76.0, 99.0, 48.0, 27.0, 34.0, 0.0, 0.0, 0.0, 28.0, 0.0, //
            0.0, 20.0, 9.0, 27.0, 46.0, 15.0, 84.0, 19.0, 3.0, 24.0, //
            56.0, 10.0, 45.0, 39.0, 0.0, 93.0, 67.0, 79.0, 19.0, 38.0, //
            27.0, 0.0, 39.0, 53.0, 46.0, 24.0, 69.0, 46.0, 23.0, 1.0,
        ],
    )
}
