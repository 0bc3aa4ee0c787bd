use bit_set::BitSet;

use crate::color::VertexId;
use crate::graph::Graph;

/**
one side of a graph around a cut vertex.

Built by walking from the cut vertex through its neighbors, never re-entering the cut vertex and
never entering the branch (component of G - cut_vertex) of an excluded neighbor. The subgraph keeps
the vertex ids of the original graph and contains every original edge between two members. Two
subgraphs built from neighbors lying on the two sides of a cut vertex partition the edges incident
to it, and both contain the cut vertex.
*/
#[derive(Debug)]
pub struct Subgraph {
    /// vertex the branches are attached to
    cut_vertex: VertexId,
    /// edges of the branch (same vertex ids as the original graph)
    graph: Graph,
    /// vertices of the branch (cut vertex included)
    members: BitSet,
}

impl Subgraph {
    /// branches around cut_vertex, except the one containing the neighbor excluded
    pub fn new(original:&Graph, cut_vertex:VertexId, excluded:VertexId) -> Self {
        Self::excluding_all(original, cut_vertex, &[excluded])
    }

    /// branches around cut_vertex, except those containing one of the excluded neighbors
    pub fn excluding_all(original:&Graph, cut_vertex:VertexId, excluded:&[VertexId]) -> Self {
        let n = original.nb_vertices();
        // mark the excluded branches
        let mut forbidden = BitSet::with_capacity(n);
        forbidden.insert(cut_vertex);
        flood(original, excluded.iter().copied(), &mut forbidden);
        forbidden.remove(cut_vertex);
        // walk the remaining branches
        let mut members = BitSet::with_capacity(n);
        members.insert(cut_vertex);
        let starts:Vec<VertexId> = original.active_neighbors(cut_vertex)
            .filter(|v| !forbidden.contains(*v))
            .collect();
        flood(original, starts.into_iter(), &mut members);
        // copy the edges between members
        let mut graph = Graph::new(n);
        for u in members.iter() {
            for v in original.active_neighbors(u) {
                if u < v && members.contains(v) { graph.add_edge(u, v); }
            }
        }
        Self { cut_vertex, graph, members }
    }

    /// true iff v belongs to the subgraph
    pub fn contains(&self, v:VertexId) -> bool { self.members.contains(v) }

    /// vertex the branches are attached to
    pub fn cut_vertex(&self) -> VertexId { self.cut_vertex }

    /// edges of the subgraph
    pub fn graph(&self) -> &Graph { &self.graph }

    /// vertices of the subgraph (increasing order)
    pub fn members(&self) -> impl Iterator<Item=VertexId> + '_ { self.members.iter() }

    /// number of vertices in the subgraph
    pub fn len(&self) -> usize { self.members.len() }

    /// true if the subgraph has no vertex (never the case: the cut vertex is always a member)
    pub fn is_empty(&self) -> bool { self.members.is_empty() }
}

/// adds to `seen` every active vertex reachable from `starts` without crossing a vertex of `seen`
fn flood<I>(graph:&Graph, starts:I, seen:&mut BitSet) where I:Iterator<Item=VertexId> {
    let mut stack:Vec<VertexId> = Vec::new();
    for s in starts {
        if graph.is_active(s) && seen.insert(s) { stack.push(s); }
    }
    while let Some(u) = stack.pop() {
        for v in graph.active_neighbors(u) {
            if seen.insert(v) { stack.push(v); }
        }
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    fn bowtie() -> Graph {
        Graph::from_edges(5, &[(0,1),(0,2),(0,3),(0,4),(1,2),(3,4)])
    }

    #[test]
    fn test_bowtie_sides() {
        let g = bowtie();
        let side = Subgraph::new(&g, 0, 1);
        assert_eq!(side.members().collect::<Vec<_>>(), vec![0,3,4]);
        assert!(side.contains(0));
        assert!(!side.contains(1));
        assert!(!side.contains(2));
        assert_eq!(side.graph().edges(), vec![(0,3),(0,4),(3,4)]);
        let other = Subgraph::new(&g, 0, 3);
        assert_eq!(other.members().collect::<Vec<_>>(), vec![0,1,2]);
        assert_eq!(other.graph().edges(), vec![(0,1),(0,2),(1,2)]);
    }

    #[test]
    fn test_partition_of_incident_edges() {
        // three branches around 0: {1,2}, {3}, {4,5}
        let g = Graph::from_edges(6, &[(0,1),(1,2),(2,0),(0,3),(0,4),(4,5)]);
        let first = Subgraph::new(&g, 0, 1);
        assert_eq!(first.members().collect::<Vec<_>>(), vec![0,3,4,5]);
        let claimed:Vec<VertexId> = g.active_neighbors(0).filter(|v| first.contains(*v)).collect();
        assert_eq!(claimed, vec![3,4]);
        let second = Subgraph::excluding_all(&g, 0, &claimed);
        assert_eq!(second.members().collect::<Vec<_>>(), vec![0,1,2]);
        assert_eq!(first.graph().nb_edges() + second.graph().nb_edges(), g.nb_edges());
        for v in 1..6 {
            assert!(first.contains(v) != second.contains(v));
        }
    }

    #[test]
    fn test_without_cut_vertex_only_the_root_remains() {
        let g = Graph::from_edges(4, &[(0,1),(1,2),(2,3),(3,0)]);
        let side = Subgraph::new(&g, 0, 1);
        assert_eq!(side.len(), 1);
        assert_eq!(side.cut_vertex(), 0);
        assert_eq!(side.graph().nb_edges(), 0);
    }
}
