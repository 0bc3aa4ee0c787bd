//! Coloring algorithms for the Brooks coloring problem.

/// greedy coloring along a vertex order, capped at Δ(G)+1 colors
pub mod greedy;

/// Brooks coloring: strategy selection, cut vertex reconciliation and pair removal
pub mod brooks;
