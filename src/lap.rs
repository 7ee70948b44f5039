//! Linear assignment problem solver
//!
//! Shortest augmenting path solver for the minimum-cost bipartite assignment
//! problem, after Jonker & Volgenant (1987), "A shortest augmenting path
//! algorithm for dense and sparse linear assignment problems". Two greedy
//! column-reduction sweeps resolve most rows and tighten the dual potentials;
//! the rows left over each get a Dijkstra-like search over reduced costs that
//! ends in an augmenting path.
//!
//! The solver reports no errors. Forbidden pairings are encoded by setting
//! their cost to [`FORBIDDEN`]; an instance with no feasible assignment
//! resolves through at least one such edge, which callers detect by comparing
//! the total cost against the sentinel.

use alloc::{vec, vec::Vec};
use nalgebra::{DMatrix, DVector};

/// Cost marking a row/column pairing as forbidden.
///
/// Any total cost at or above this value means the assignment routed through
/// a forbidden edge, i.e. the instance is infeasible. The sentinel must
/// exceed the summed real cost of every feasible assignment the caller can
/// produce; costs approaching it will be misread as infeasible.
pub const FORBIDDEN: f64 = 300_000.0;

/// Solves the assignment problem for an `n`×`m` cost matrix, `n <= m`.
///
/// Returns the assignment (column of each row; every row is assigned) and
/// the dual potentials `(u, v)`. The duals satisfy complementary slackness:
/// `u[i] + v[j] <= c[(i, j)]` everywhere, with equality on assigned pairs.
///
/// Rows with no affordable column are assigned a [`FORBIDDEN`] edge rather
/// than reported as an error; see the module docs.
pub fn solve(c: &DMatrix<f64>) -> (Vec<usize>, DVector<f64>, DVector<f64>) {
    let n = c.nrows();
    let m = c.ncols();
    debug_assert!(n <= m, "cost matrix needs at least as many columns as rows");

    let mut x: Vec<Option<usize>> = vec![None; n];
    let mut y: Vec<Option<usize>> = vec![None; m];
    let mut u = DVector::zeros(n);
    let mut v = DVector::zeros(m);

    let mut free: Vec<usize> = (0..n).collect();
    let mut col: Vec<usize> = (0..m).collect();
    let mut d = vec![0.0_f64; m];
    let mut pred = vec![0_usize; m];

    // Column reduction, two sweeps. Each unassigned row claims its cheapest
    // column by reduced cost; a strict preference lowers that column's
    // potential by the gap to the runner-up, otherwise the previous owner is
    // bumped back into the pool (immediately in sweep order on a strict win,
    // into the next sweep on a tie).
    let mut f = n;
    let mut j2 = 0_usize;
    for _ in 0..2 {
        let mut k = 0;
        let f0 = f;
        f = 0;
        while k < f0 {
            let i = free[k];
            k += 1;
            let mut u1 = c[(i, 0)] - v[0];
            let mut u2 = FORBIDDEN;
            let mut j1 = 0_usize;
            for j in 1..m {
                let h = c[(i, j)] - v[j];
                if h < u2 {
                    if h >= u1 {
                        u2 = h;
                        j2 = j;
                    } else {
                        u2 = u1;
                        u1 = h;
                        j2 = j1;
                        j1 = j;
                    }
                }
            }
            let mut i1 = y[j1];
            if u1 < u2 {
                v[j1] -= u2 - u1;
            } else if i1.is_some() {
                j1 = j2;
                i1 = y[j1];
            }
            if let Some(bumped) = i1 {
                if u1 < u2 {
                    k -= 1;
                    free[k] = bumped;
                } else {
                    free[f] = bumped;
                    f += 1;
                }
                x[bumped] = None;
            }
            x[i] = Some(j1);
            y[j1] = Some(i);
        }
    }

    // Augmentation. For each leftover row, grow a frontier of columns in
    // ascending slack order. `col` is a working permutation: positions
    // [0, low) are priced, [low, up) are at the current minimum slack, and
    // [up, m) are unscanned. `last` remembers the frontier start of the final
    // rebuild so exactly the priced columns get their potentials updated.
    let f0 = f;
    for &i1 in free.iter().take(f0) {
        let mut low: usize = 0;
        let mut up = 0;
        let mut last = 0;
        let mut min = 0.0_f64;
        for j in 0..m {
            d[j] = c[(i1, j)] - v[j];
            pred[j] = i1;
        }
        let jaug = 'scan: loop {
            if up == low {
                // Rebuild the frontier with every column at the new minimum.
                last = low.saturating_sub(1);
                min = d[col[up]];
                up += 1;
                for k in up..m {
                    let j = col[k];
                    let h = d[j];
                    if h <= min {
                        if h < min {
                            up = low;
                            min = h;
                        }
                        col[k] = col[up];
                        col[up] = j;
                        up += 1;
                    }
                }
                for &j in &col[low..up] {
                    if y[j].is_none() {
                        break 'scan j;
                    }
                }
            }
            // Price one frontier column and relax through the row holding it.
            let j1 = col[low];
            low += 1;
            let i = y[j1].unwrap();
            let u1 = c[(i, j1)] - v[j1] - min;
            for k in up..m {
                let j = col[k];
                let h = c[(i, j)] - v[j] - u1;
                if h < d[j] {
                    d[j] = h;
                    pred[j] = i;
                    if h == min {
                        if y[j].is_none() {
                            break 'scan j;
                        }
                        col[k] = col[up];
                        col[up] = j;
                        up += 1;
                    }
                }
            }
        };
        for &j1 in &col[..last] {
            v[j1] += d[j1] - min;
        }
        // Flip assignments backwards along the predecessor chain.
        let mut j = jaug;
        loop {
            let i = pred[j];
            y[j] = Some(i);
            let next = x[i];
            x[i] = Some(j);
            if i == i1 {
                break;
            }
            j = next.unwrap();
        }
    }

    let assignment: Vec<usize> = x.into_iter().map(|j| j.unwrap()).collect();
    for (i, &j) in assignment.iter().enumerate() {
        u[i] = c[(i, j)] - v[j];
    }
    (assignment, u, v)
}

/// Total cost of `assignment` under the cost matrix `c`.
pub fn assignment_cost(c: &DMatrix<f64>, assignment: &[usize]) -> f64 {
    assignment
        .iter()
        .enumerate()
        .map(|(i, &j)| c[(i, j)])
        .sum()
}

/// Overwrites every entry of `c` above `threshold` with [`FORBIDDEN`].
///
/// Typical preprocessing for gated data association: pairings outside the
/// validation gate are priced out before the solver or enumerator runs.
pub fn forbid_above(c: &mut DMatrix<f64>, threshold: f64) {
    for e in c.iter_mut() {
        if *e > threshold {
            *e = FORBIDDEN;
        }
    }
}
