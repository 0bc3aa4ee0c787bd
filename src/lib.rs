//! Constructive Brooks coloring of connected graphs

// #![warn(clippy::all, clippy::pedantic)]
// useful additional warnings if docs are missing, or crates imported but unused, etc.
#![warn(missing_debug_implementations)]
#![warn(missing_docs)]
#![warn(trivial_casts, trivial_numeric_casts)]
#![warn(unsafe_code)]
#![warn(unused_extern_crates)]
#![warn(variant_size_differences)]

// not sure if already by default in clippy
#![warn(clippy::similar_names)]
#![warn(clippy::shadow_unrelated)]
#![warn(clippy::shadow_same)]
#![warn(clippy::shadow_reuse)]


/// vertex and color types, solutions and checker
pub mod color;

/// undirected graph with soft vertex removal
pub mod graph;

/// errors of the coloring engine and of the instance readers
pub mod error;

/// articulation point detection (Tarjan low-link)
pub mod cut_vertex;

/// spanning tree vertex orderings
pub mod spanning_tree;

/// sides of a graph around a cut vertex
pub mod subgraph;

/// coloring step observers
pub mod observer;

/// read/write DIMACS formats
pub mod dimacs;

/// read/write JSON edge-list instances
pub mod edge_list;

/// graph families (cliques, cycles, circulants, random graphs...)
pub mod generators;

/// helper and utility methods for executables
pub mod util;

/// coloring algorithms
pub mod search;
