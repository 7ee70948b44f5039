//! Murty: Ranked Assignments for Data Association
//!
//! Solutions to the linear assignment problem in non-decreasing cost order:
//! a Jonker-Volgenant shortest augmenting path solver paired with Murty's
//! partitioning scheme, drawn lazily one assignment at a time.
//!
//! # Features
//!
//! - **Ranked (k-best) enumeration**: every one-to-one row-to-column
//!   assignment exactly once, cheapest first, on demand
//! - **Dual potentials**: each solve certifies optimality via complementary
//!   slackness
//! - **Forbidden edges and negative costs**: gate infeasible pairings with a
//!   sentinel cost; negative matrices are shifted and reported unshifted
//! - **no_std support**: works with `alloc` in embedded environments

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(feature = "alloc")]
extern crate alloc;

#[cfg(feature = "alloc")]
pub mod lap;
#[cfg(feature = "alloc")]
pub mod ranked;
#[cfg(feature = "alloc")]
pub mod submatrix;

#[cfg(feature = "alloc")]
mod subproblem;

#[cfg(feature = "alloc")]
pub use ranked::{k_best, Murty, Solution};

#[cfg(feature = "alloc")]
pub mod prelude {
    pub use crate::lap::{assignment_cost, forbid_above, solve, FORBIDDEN};
    pub use crate::ranked::{k_best, Murty, Solution};
}

/// Error types for the library
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MurtyError {
    /// Cost matrix has more rows than columns; the solver needs a column
    /// for every row
    MoreRowsThanColumns,
}

#[cfg(feature = "std")]
impl std::error::Error for MurtyError {}

impl ::core::fmt::Display for MurtyError {
    fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
        match self {
            MurtyError::MoreRowsThanColumns => {
                write!(f, "cost matrix has more rows than columns")
            }
        }
    }
}

pub type Result<T> = ::core::result::Result<T, MurtyError>;
