//! Ranked enumeration of assignments
//!
//! Murty's algorithm (Murty 1968, "An algorithm for ranking all the
//! assignments in order of increasing cost"): after drawing the optimal
//! assignment, the remaining solution space is split into disjoint
//! subproblems, one per assigned edge, by forbidding that edge while forcing
//! the edges ranked before it. Subproblems wait in a priority queue under a
//! slack-based lower bound and are only re-solved when they reach the front,
//! so successive draws come out in non-decreasing cost order with no more
//! LAP solves than the ranking actually needs.

use alloc::collections::BinaryHeap;
use alloc::vec::Vec;
use core::cmp::Ordering;
use nalgebra::DMatrix;

use crate::lap;
use crate::subproblem::Subproblem;
use crate::MurtyError;

// ============================================================================
// Solutions
// ============================================================================

/// One assignment drawn from the ranked enumeration.
#[derive(Debug, Clone, PartialEq)]
pub struct Solution {
    /// Total cost under the matrix the enumerator was built from.
    pub cost: f64,
    /// Column assigned to each row.
    pub assignment: Vec<usize>,
}

// ============================================================================
// Queue ordering
// ============================================================================

/// Heap wrapper turning `BinaryHeap` into the search order: cheapest
/// bound-or-resolved cost first, ties going to the node with more rows left
/// (more unresolved structure keeps the tree balanced).
#[derive(Debug)]
struct QueueEntry(Subproblem);

impl PartialEq for QueueEntry {
    fn eq(&self, other: &Self) -> bool {
        self.0.total() == other.0.total() && self.0.nrows() == other.0.nrows()
    }
}

impl Eq for QueueEntry {}

impl PartialOrd for QueueEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for QueueEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reversed on cost so the max-heap pops the cheapest node.
        other
            .0
            .total()
            .partial_cmp(&self.0.total())
            .unwrap_or(Ordering::Equal)
            .then_with(|| self.0.nrows().cmp(&other.0.nrows()))
    }
}

// ============================================================================
// Enumerator
// ============================================================================

/// Lazy ranked enumerator over the assignments of a cost matrix.
///
/// Construct once, then call [`draw`](Murty::draw) (or iterate) for
/// successive assignments in non-decreasing cost order. `None` means the
/// solution space is exhausted or nothing feasible remains; later calls
/// keep returning `None`.
///
/// # Example
///
/// ```
/// use nalgebra::dmatrix;
/// use murty::Murty;
///
/// let mut ranked = Murty::new(dmatrix![
///     4.0, 1.0, 3.0;
///     2.0, 0.0, 5.0;
///     3.0, 2.0, 2.0
/// ])
/// .unwrap();
///
/// let best = ranked.draw().unwrap();
/// assert_eq!(best.cost, 5.0);
/// assert_eq!(best.assignment, vec![1, 0, 2]);
/// assert!(ranked.draw().unwrap().cost >= best.cost);
/// ```
#[derive(Debug)]
pub struct Murty {
    queue: BinaryHeap<QueueEntry>,
    /// Added back to reported costs after shifting negative matrices.
    offset: f64,
}

impl Murty {
    /// Builds an enumerator over `cost`, which needs at least as many
    /// columns as rows.
    ///
    /// Negative entries are allowed: the matrix is shifted up by its
    /// minimum so every working cost stays non-negative relative to
    /// [`lap::FORBIDDEN`], and reported costs are shifted back.
    pub fn new(mut cost: DMatrix<f64>) -> Result<Self, MurtyError> {
        if cost.nrows() > cost.ncols() {
            return Err(MurtyError::MoreRowsThanColumns);
        }
        let min = cost.min();
        let mut offset = 0.0;
        if min < 0.0 {
            cost.add_scalar_mut(-min);
            offset = min * cost.nrows() as f64;
        }
        let mut queue = BinaryHeap::new();
        queue.push(QueueEntry(Subproblem::new(cost)));
        Ok(Murty { queue, offset })
    }

    /// Draws the next-best assignment, or `None` when nothing feasible
    /// remains.
    pub fn draw(&mut self) -> Option<Solution> {
        // Lazily resolve until the front of the queue holds a solved node.
        // A node whose re-solve crosses the sentinel is infeasible and is
        // dropped; its branch cannot contain further solutions.
        let node = loop {
            let mut entry = self.queue.pop()?;
            if entry.0.is_solved() {
                break entry.0;
            }
            if entry.0.resolve() {
                self.queue.push(entry);
            }
        };

        let cost = node.total() + self.offset;
        if cost >= lap::FORBIDDEN {
            return None;
        }
        let assignment = node.solution().to_vec();

        // Partition what is left of this node's solution space among its
        // children: walking the slack ordering, forbid each edge in a
        // sibling while forcing it in the node the remaining edges branch
        // from. The fully-forced tail is the assignment just drawn, so it
        // is dropped rather than queued.
        let order = node.slack_ordering();
        let mut working = node;
        for (rank, &(slack, _, _)) in order.iter().enumerate() {
            let (row, col) = partition_index(&order, rank);
            self.queue.push(QueueEntry(working.forbid(row, col, slack)));
            working = working.force(row, col);
        }

        Some(Solution { cost, assignment })
    }
}

impl Iterator for Murty {
    type Item = Solution;

    fn next(&mut self) -> Option<Solution> {
        self.draw()
    }
}

/// Maps `order[rank]`'s (row, col) onto the working node that has already
/// had the rows and columns of the earlier-ranked entries removed.
fn partition_index(order: &[(f64, usize, usize)], rank: usize) -> (usize, usize) {
    let (_, row, col) = order[rank];
    let mut i = row;
    let mut j = col;
    for &(_, r, c) in &order[..rank] {
        if r < row {
            i -= 1;
        }
        if c < col {
            j -= 1;
        }
    }
    (i, j)
}

/// Returns up to `k` ranked assignments of `cost`, cheapest first.
///
/// Shorthand for collecting from [`Murty`]; fewer than `k` solutions come
/// back when the space is exhausted first.
pub fn k_best(cost: DMatrix<f64>, k: usize) -> Result<Vec<Solution>, MurtyError> {
    Ok(Murty::new(cost)?.take(k).collect())
}
