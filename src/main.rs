//! Example usage of the murty library
//!
//! Walks the ranked assignments of a small track-to-measurement association
//! problem, then shows gating and negative log-likelihood costs.

use nalgebra::dmatrix;

use murty::prelude::*;

fn main() {
    println!("Murty: Ranked Assignment Enumeration");
    println!("====================================\n");

    // Association costs for three tracks against three measurements.
    let costs = dmatrix![
        4.0, 1.0, 3.0;
        2.0, 0.0, 5.0;
        3.0, 2.0, 2.0
    ];

    println!("Cost matrix:\n{}", costs);

    let (assignment, u, v) = solve(&costs);
    println!(
        "Optimal assignment {:?} at cost {}",
        assignment,
        assignment_cost(&costs, &assignment)
    );
    println!("Row potentials:    {:?}", u.as_slice());
    println!("Column potentials: {:?}\n", v.as_slice());

    println!("All assignments, ranked:");
    let ranked = Murty::new(costs).expect("three tracks, three measurements");
    for (rank, sol) in ranked.enumerate() {
        println!("  #{}: cost {:>4.1}  rows -> {:?}", rank + 1, sol.cost, sol.assignment);
    }

    // Gating: pairings outside the validation region are priced out and the
    // enumeration quietly skips every hypothesis using them.
    let mut gated = dmatrix![
        1.0, 80.0, 3.0;
        2.0, 0.0, 95.0;
        70.0, 2.0, 2.0
    ];
    forbid_above(&mut gated, 50.0);
    let kept = Murty::new(gated).expect("square matrix").count();
    println!("\nWith three pairings gated out, {} of 6 hypotheses remain", kept);

    // Negative entries (log-likelihood ratios) are handled by shifting.
    let loglik = dmatrix![
        -5.2, 1.3;
        2.1, -3.4
    ];
    println!("\nLog-likelihood association:");
    for sol in Murty::new(loglik).expect("square matrix") {
        println!("  cost {:>5.2}  rows -> {:?}", sol.cost, sol.assignment);
    }
}
