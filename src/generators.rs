use fastrand::Rng;

use crate::color::VertexId;
use crate::graph::Graph;

/// complete graph K_n
pub fn complete(n:usize) -> Graph {
    let mut g = Graph::new(n);
    for u in 0..n {
        for v in u+1..n {
            g.add_edge(u, v);
        }
    }
    g
}

/// cycle 0-1-...-(n-1)-0 (n ≥ 3)
pub fn cycle(n:usize) -> Graph {
    assert!(n >= 3, "a cycle needs at least 3 vertices (got {})", n);
    let mut g = path(n);
    g.add_edge(n-1, 0);
    g
}

/// path 0-1-...-(n-1)
pub fn path(n:usize) -> Graph {
    let mut g = Graph::new(n);
    for v in 1..n {
        g.add_edge(v-1, v);
    }
    g
}

/** circulant graph: i is adjacent to i ± d (mod n) for each offset d.
Offsets producing the same edge twice (d = n/2, d and n-d) add it once. */
pub fn circulant(n:usize, offsets:&[usize]) -> Graph {
    let mut g = Graph::new(n);
    for &d in offsets {
        if d % n == 0 { continue; }
        for u in 0..n {
            let v = (u+d) % n;
            if !g.has_edge(u, v) { g.add_edge(u, v); }
        }
    }
    g
}

/// Petersen graph: outer cycle 0..5, inner pentagram 5..10, spokes i - i+5
pub fn petersen() -> Graph {
    let mut edges:Vec<(VertexId,VertexId)> = Vec::new();
    for i in 0..5 {
        edges.push((i, (i+1) % 5));
        edges.push((i, i+5));
        edges.push((5+i, 5+(i+2) % 5));
    }
    Graph::from_edges(10, &edges)
}

/**
random connected graph: a random spanning tree (each vertex v > 0 is attached to a vertex < v),
then every other pair is added with probability p.
*/
pub fn random_connected(n:usize, p:f64, rng:&mut Rng) -> Graph {
    let mut g = Graph::new(n);
    for v in 1..n {
        g.add_edge(rng.usize(0..v), v);
    }
    for u in 0..n {
        for v in u+1..n {
            if !g.has_edge(u, v) && rng.f64() < p {
                g.add_edge(u, v);
            }
        }
    }
    g
}
