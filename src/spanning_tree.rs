use bit_set::BitSet;

use crate::color::VertexId;
use crate::graph::Graph;

/**
DFS spanning tree of a graph from a given root, and the vertex orderings it induces.

The post-order (`order`) is the coloring order used by the Brooks construction: each vertex appears
after all its tree descendants, so when a non-root vertex is colored its tree parent is not colored
yet. At most Δ(G)-1 of its neighbors are colored at this point, leaving a free color in [0, Δ(G)-1].
The root comes last.

Removed neighbors reached by the DFS are not entered: they produce a `None` entry in the order. The
order is padded with `None` up to the number of vertices of the graph.
*/
#[derive(Debug)]
pub struct SpanningTreeOrdering {
    /// root of the DFS
    root: VertexId,
    /// post-order of the DFS (None: removed vertex or unused position)
    order: Vec<Option<VertexId>>,
    /// pre-order of the DFS (each vertex appears after its tree parent)
    preorder: Vec<VertexId>,
    /// the spanning tree itself
    tree: Graph,
}

impl SpanningTreeOrdering {

    /// returns the first active vertex with a degree strictly lower than Δ(G)
    pub fn find_low_degree_root(graph:&Graph) -> Option<VertexId> {
        let max_degree = graph.max_degree();
        graph.active_vertices().find(|v| graph.degree(*v) < max_degree)
    }

    /** builds the ordering rooted at a vertex of degree < Δ(G).
    returns None if the graph is Δ-regular (no eligible root) */
    pub fn auto_root(graph:&Graph) -> Option<Self> {
        Self::find_low_degree_root(graph).map(|root| Self::with_root(graph, root))
    }

    /// builds the ordering from the given root
    pub fn with_root(graph:&Graph, root:VertexId) -> Self {
        let n = graph.nb_vertices();
        let mut visited = BitSet::with_capacity(n);
        let mut order:Vec<Option<VertexId>> = Vec::with_capacity(n);
        let mut preorder = Vec::new();
        let mut tree = Graph::new(n);
        visited.insert(root);
        if !graph.is_active(root) {
            order.push(None);
        } else {
            preorder.push(root);
            // (vertex, position of the next neighbor to explore)
            let mut stack:Vec<(VertexId,usize)> = vec![(root,0)];
            while let Some(frame) = stack.last_mut() {
                let u = frame.0;
                match graph.neighbors(u).get(frame.1) {
                    Some(&v) => {
                        frame.1 += 1;
                        if !visited.insert(v) { continue; }
                        if graph.is_active(v) {
                            tree.add_edge(u, v);
                            preorder.push(v);
                            stack.push((v,0));
                        } else { // removed vertex: ends the branch
                            order.push(None);
                        }
                    },
                    None => {
                        stack.pop();
                        order.push(Some(u));
                    }
                }
            }
        }
        order.resize(n, None);
        Self { root, order, preorder, tree }
    }

    /// root of the spanning tree
    pub fn root(&self) -> VertexId { self.root }

    /// post-order, including the `None` sentinels
    pub fn order(&self) -> &[Option<VertexId>] { &self.order }

    /// post-order, sentinels skipped
    pub fn vertices(&self) -> impl Iterator<Item=VertexId> + '_ {
        self.order.iter().flatten().copied()
    }

    /// pre-order of the spanning tree
    pub fn preorder(&self) -> &[VertexId] { &self.preorder }

    /// DFS spanning tree
    pub fn tree(&self) -> &Graph { &self.tree }
}


#[cfg(test)]
mod tests {
    use super::*;

    /// checks that every tree parent appears after its children in the post-order
    fn check_parents_after_children(ordering:&SpanningTreeOrdering) {
        let n = ordering.tree().nb_vertices();
        let mut position = vec![None ; n];
        for (i,v) in ordering.order().iter().enumerate() {
            if let Some(v) = v { position[*v] = Some(i); }
        }
        // in the pre-order, the parent of v is its tree neighbor seen before it
        let mut seen = BitSet::with_capacity(n);
        for v in ordering.preorder() {
            if *v != ordering.root() {
                let parent = ordering.tree().neighbors(*v).iter()
                    .find(|p| seen.contains(**p)).copied().unwrap();
                assert!(position[parent].unwrap() > position[*v].unwrap());
            }
            seen.insert(*v);
        }
        assert_eq!(ordering.vertices().last(), Some(ordering.root()));
    }

    #[test]
    fn test_path_post_order() {
        let g = Graph::from_edges(4, &[(0,1),(1,2),(2,3)]);
        let ordering = SpanningTreeOrdering::with_root(&g, 0);
        assert_eq!(ordering.order(), &[Some(3), Some(2), Some(1), Some(0)]);
        assert_eq!(ordering.preorder(), &[0,1,2,3]);
        assert_eq!(ordering.tree().nb_edges(), 3);
    }

    #[test]
    fn test_auto_root() {
        // star: center 0, the leaves have a lower degree
        let g = Graph::from_edges(4, &[(0,1),(0,2),(0,3)]);
        let ordering = SpanningTreeOrdering::auto_root(&g).unwrap();
        assert_eq!(ordering.root(), 1);
        assert_eq!(ordering.order(), &[Some(2), Some(3), Some(0), Some(1)]);
        check_parents_after_children(&ordering);
    }

    #[test]
    fn test_regular_graph_has_no_root() {
        let g = Graph::from_edges(4, &[(0,1),(1,2),(2,3),(3,0)]);
        assert!(SpanningTreeOrdering::auto_root(&g).is_none());
        assert_eq!(SpanningTreeOrdering::find_low_degree_root(&g), None);
    }

    #[test]
    fn test_removed_vertices_give_sentinels() {
        // square 0-1-2-3 plus diagonal 0-2, vertex 1 removed
        let mut g = Graph::from_edges(4, &[(0,1),(1,2),(2,3),(3,0),(0,2)]);
        g.remove_vertex(1);
        let ordering = SpanningTreeOrdering::with_root(&g, 0);
        assert_eq!(ordering.order(), &[None, Some(2), Some(3), Some(0)]);
        assert_eq!(ordering.vertices().collect::<Vec<_>>(), vec![2,3,0]);
        assert!(!ordering.tree().has_edge(0, 1));
        check_parents_after_children(&ordering);
    }

    #[test]
    fn test_unreached_positions_are_padded() {
        let g = Graph::from_edges(4, &[(0,1)]);
        let ordering = SpanningTreeOrdering::with_root(&g, 1);
        assert_eq!(ordering.order(), &[Some(0), Some(1), None, None]);
    }

    #[test]
    fn test_prism_parent_invariant() {
        let g = Graph::from_edges(6, &[
            (0,1),(1,2),(0,2),(3,4),(4,5),(3,5),(0,3),(1,4),(2,5)
        ]);
        for root in 0..6 {
            let ordering = SpanningTreeOrdering::with_root(&g, root);
            assert_eq!(ordering.vertices().count(), 6);
            check_parents_after_children(&ordering);
        }
    }
}
