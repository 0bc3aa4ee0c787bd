use thiserror::Error;

use crate::color::VertexId;

/**
errors aborting a Brooks coloring. No partial coloring is returned when one of them occurs.

`EmptyGraph` and `Disconnected` are violated preconditions on the input. The other variants are
internal invariant violations: they cannot happen on a connected simple graph unless the
construction itself is broken.
*/
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BrooksError {
    /// the graph has no (active) vertex
    #[error("the graph has no vertex")]
    EmptyGraph,

    /// the graph is not connected
    #[error("Brooks coloring requires a connected graph")]
    Disconnected,

    /// the cut vertex does not separate two branches
    #[error("no second branch around cut vertex {0}")]
    MissingSecondBranch(VertexId),

    /// 2-connected Δ-regular graph without a (x,y,z) triple
    #[error("no vertex x with two non-adjacent neighbors y,z such that G-{{y,z}} is connected")]
    NoReducingTriple,

    /// every color of the palette is used by a neighbor of the vertex
    #[error("the {palette} available colors are all taken around vertex {vertex}")]
    ColorsExhausted {
        /// vertex that could not be colored
        vertex: VertexId,
        /// number of available colors (Δ(G)+1)
        palette: usize,
    },

    /// both branch colorings colored the same vertex (other than the cut vertex)
    #[error("vertex {0} belongs to both branches of the cut vertex")]
    BranchOverlap(VertexId),

    /// final coloring check: the vertex is not colored
    #[error("vertex {0} is not colored")]
    VertexNotColored(VertexId),

    /// final coloring check: the edge endpoints share a color
    #[error("vertices {0} and {1} are adjacent and share a color")]
    ConflictingEdge(VertexId, VertexId),
}


/** errors raised while reading or writing instances and solutions */
#[derive(Debug, Error)]
pub enum InstanceError {
    /// file system error
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON (de)serialization error
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    /// malformed DIMACS content
    #[error("unable to parse the instance: {0}")]
    Parse(String),

    /// an edge references a vertex outside of 0..n
    #[error("vertex {vertex} out of range (the graph has {n} vertices)")]
    VertexOutOfRange {
        /// vertex read
        vertex: usize,
        /// number of vertices declared
        n: usize,
    },

    /// edge (v,v)
    #[error("self-loop on vertex {0}")]
    SelfLoop(VertexId),

    /// edge given twice
    #[error("edge ({0},{1}) given twice")]
    DuplicateEdge(VertexId, VertexId),

    /// number of edges read differs from the header
    #[error("header announces {expected} edges, {found} were read")]
    EdgeCountMismatch {
        /// number of edges in the header
        expected: usize,
        /// number of edges read
        found: usize,
    },
}
