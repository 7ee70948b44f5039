//! Subproblem nodes of the ranked-assignment search tree
//!
//! Each node is a restricted assignment problem: the cost matrix with the
//! rows and columns of previously forced edges removed, plus whatever edges
//! the branch has forbidden. Nodes are plain values; partitioning copies the
//! parent's data, so a node in the queue can never be affected by work done
//! on its siblings.

use alloc::{vec, vec::Vec};
use core::cmp::Ordering;
use nalgebra::{DMatrix, DVector};

use crate::lap;
use crate::submatrix;

/// One node of the Murty search tree.
///
/// `total` carries the node's position in the search order: the parent's
/// cost plus a slack lower bound while unsolved, the exact resolved cost
/// after [`resolve`](Subproblem::resolve).
#[derive(Debug, Clone)]
pub(crate) struct Subproblem {
    /// Cost matrix restricted to the still-free rows and columns.
    cost: DMatrix<f64>,
    /// Row potentials for `cost`.
    u: DVector<f64>,
    /// Column potentials for `cost`.
    v: DVector<f64>,
    /// Cost committed by the edges forced on the path from the root.
    bound: f64,
    /// Bound-or-resolved cost; see the type docs.
    total: f64,
    solved: bool,
    /// Assignment of the full problem, in original indices.
    solution: Vec<usize>,
    /// Assignment of the local submatrix, set by the last resolve.
    local: Vec<usize>,
    /// Local row index -> original row index.
    row_map: Vec<usize>,
    /// Local column index -> original column index.
    col_map: Vec<usize>,
}

impl Subproblem {
    /// Root node covering the whole matrix.
    pub fn new(cost: DMatrix<f64>) -> Self {
        let (rows, cols) = cost.shape();
        Subproblem {
            u: DVector::zeros(rows),
            v: DVector::zeros(cols),
            bound: 0.0,
            total: 0.0,
            solved: false,
            solution: vec![0; rows],
            local: Vec::new(),
            row_map: (0..rows).collect(),
            col_map: (0..cols).collect(),
            cost,
        }
    }

    pub fn nrows(&self) -> usize {
        self.cost.nrows()
    }

    pub fn total(&self) -> f64 {
        self.total
    }

    pub fn is_solved(&self) -> bool {
        self.solved
    }

    /// Full-problem assignment. Meaningful only after a successful resolve.
    pub fn solution(&self) -> &[usize] {
        &self.solution
    }

    /// Runs the LAP solver on the submatrix and maps the result back into
    /// original indices. Returns `false` if the optimum runs through a
    /// forbidden edge, i.e. this branch has no feasible assignment.
    pub fn resolve(&mut self) -> bool {
        let (local, u, v) = lap::solve(&self.cost);
        self.u = u;
        self.v = v;
        self.total = self.bound;
        for (i, &j) in local.iter().enumerate() {
            self.solution[self.row_map[i]] = self.col_map[j];
            self.total += self.cost[(i, j)];
        }
        self.local = local;
        self.solved = true;
        self.total < lap::FORBIDDEN
    }

    /// Cheapest way out of the current assignment, per row.
    ///
    /// For each row of the last-resolved submatrix: the minimum reduced cost
    /// `c - u - v` over the columns other than the assigned one, a lower
    /// bound on the cost increase of reassigning that row. Entries are
    /// `(slack, row, assigned column)` in local indices, sorted descending
    /// with the tuple's lexicographic tie-break, which is the branching
    /// order used when partitioning.
    ///
    /// The scan seeds each row with column 0 before skipping the assigned
    /// column, so a row assigned to column 0 starts from its own tight edge
    /// (slack 0). With tied costs this can undercut the true second-best
    /// gap; a looser bound costs an extra lazy re-solve but never breaks
    /// the ranked order.
    pub fn slack_ordering(&self) -> Vec<(f64, usize, usize)> {
        debug_assert!(self.solved);
        let mut slack = Vec::with_capacity(self.cost.nrows());
        for i in 0..self.cost.nrows() {
            let assigned = self.local[i];
            let mut entry = (self.cost[(i, 0)] - self.u[i] - self.v[0], i, assigned);
            for j in 1..self.cost.ncols() {
                if j == assigned {
                    continue;
                }
                let h = self.cost[(i, j)] - self.u[i] - self.v[j];
                if h < entry.0 {
                    entry = (h, i, assigned);
                }
            }
            slack.push(entry);
        }
        slack.sort_unstable_by(|a, b| b.partial_cmp(a).unwrap_or(Ordering::Equal));
        slack
    }

    /// Child with edge `(row, col)` committed to the solution: the submatrix
    /// drops that row and column and the edge's cost moves into the bound.
    pub fn force(&self, row: usize, col: usize) -> Subproblem {
        let mut row_map = self.row_map.clone();
        let mut col_map = self.col_map.clone();
        row_map.remove(row);
        col_map.remove(col);
        Subproblem {
            cost: submatrix::without_row_col(&self.cost, row, col),
            u: submatrix::without_entry(&self.u, row),
            v: submatrix::without_entry(&self.v, col),
            bound: self.bound + self.cost[(row, col)],
            total: self.total,
            solved: false,
            solution: self.solution.clone(),
            local: Vec::new(),
            row_map,
            col_map,
        }
    }

    /// Sibling with edge `(row, col)` priced out. `slack` provisionally
    /// raises the cost estimate; the truth is re-established lazily by the
    /// next [`resolve`](Subproblem::resolve).
    pub fn forbid(&self, row: usize, col: usize, slack: f64) -> Subproblem {
        let mut cost = self.cost.clone();
        cost[(row, col)] = lap::FORBIDDEN;
        Subproblem {
            cost,
            u: self.u.clone(),
            v: self.v.clone(),
            bound: self.bound,
            total: self.total + slack,
            solved: false,
            solution: self.solution.clone(),
            local: Vec::new(),
            row_map: self.row_map.clone(),
            col_map: self.col_map.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::dmatrix;
    use num_traits::Float;

    #[test]
    fn test_resolve_root() {
        let mut root = Subproblem::new(dmatrix![
            4.0, 1.0, 3.0;
            2.0, 0.0, 5.0;
            3.0, 2.0, 2.0
        ]);
        assert!(!root.is_solved());
        assert!(root.resolve());
        assert!(root.is_solved());
        // Optimum is 0->1, 1->0, 2->2 at cost 5.
        assert!(Float::abs(root.total() - 5.0) < 1e-9);
        assert_eq!(root.solution(), [1, 0, 2]);
    }

    #[test]
    fn test_force_maps_back_to_original_indices() {
        let mut root = Subproblem::new(dmatrix![
            4.0, 1.0, 3.0;
            2.0, 0.0, 5.0;
            3.0, 2.0, 2.0
        ]);
        root.resolve();
        // Commit (0, 1); the child re-solves rows {1, 2} against columns {0, 2}.
        let mut child = root.force(0, 1);
        assert_eq!(child.nrows(), 2);
        assert!(child.resolve());
        assert!(Float::abs(child.total() - 5.0) < 1e-9);
        let sol = child.solution();
        assert_eq!(sol[0], 1);
        assert_eq!(sol[1], 0);
        assert_eq!(sol[2], 2);
    }

    #[test]
    fn test_forbid_bound_is_conservative() {
        let mut root = Subproblem::new(dmatrix![
            1.0, 10.0;
            10.0, 2.0
        ]);
        root.resolve();
        let order = root.slack_ordering();
        for &(slack, row, col) in &order {
            let estimate = root.total() + slack;
            let mut child = root.forbid(row, col, slack);
            assert!(Float::abs(child.total() - estimate) < 1e-9);
            if child.resolve() {
                // The provisional estimate never overshoots the re-solved truth.
                assert!(child.total() >= estimate - 1e-9);
            }
        }
    }

    #[test]
    fn test_slack_ordering_descends() {
        let mut root = Subproblem::new(dmatrix![
            0.0, 5.0, 9.0;
            6.0, 0.0, 4.0;
            3.0, 7.0, 0.0
        ]);
        root.resolve();
        let order = root.slack_ordering();
        assert_eq!(order.len(), 3);
        for w in order.windows(2) {
            assert!(w[0] >= w[1]);
        }
    }
}
