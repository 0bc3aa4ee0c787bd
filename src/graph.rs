use std::collections::VecDeque;

use bit_set::BitSet;

use crate::color::VertexId;

/**
models a simple undirected graph on the vertices 0..n-1.

A vertex can be soft-removed (see `remove_vertex`): its own adjacency list is dropped, but the
lists of its neighbors still reference it. Traversals must therefore check `is_active` before
following an adjacency (`active_neighbors` does it).
*/
#[derive(Debug)]
pub struct Graph {
    /// nb vertices (active or removed)
    n: usize,
    /// adj_list[i]: list of vertices adjacent to i (None if i was removed)
    adj_list: Vec<Option<Vec<VertexId>>>,
}

impl Graph {
    /// creates a graph with n vertices and no edge
    pub fn new(n:usize) -> Self {
        Self { n, adj_list: vec![Some(Vec::new()) ; n] }
    }

    /// creates a graph with n vertices from an edge list
    pub fn from_edges(n:usize, edges:&[(VertexId,VertexId)]) -> Self {
        let mut res = Self::new(n);
        for (u,v) in edges {
            res.add_edge(*u, *v);
        }
        res
    }

    /// number of vertices (including removed ones)
    pub fn nb_vertices(&self) -> usize { self.n }

    /// number of vertices that were not removed
    pub fn nb_active_vertices(&self) -> usize {
        self.adj_list.iter().filter(|l| l.is_some()).count()
    }

    /// number of edges between active vertices
    pub fn nb_edges(&self) -> usize {
        self.edges().len()
    }

    /// true iff v was not removed
    pub fn is_active(&self, v:VertexId) -> bool {
        self.adj_list[v].is_some()
    }

    /// iterates over the vertices that were not removed
    pub fn active_vertices(&self) -> impl Iterator<Item=VertexId> + '_ {
        (0..self.n).filter(move |v| self.is_active(*v))
    }

    /** adjacency list of v, in edge insertion order. May reference removed vertices.
    Empty if v itself was removed. */
    pub fn neighbors(&self, v:VertexId) -> &[VertexId] {
        match &self.adj_list[v] {
            None => &[],
            Some(l) => l.as_slice(),
        }
    }

    /// neighbors of v that were not removed
    pub fn active_neighbors(&self, v:VertexId) -> impl Iterator<Item=VertexId> + '_ {
        self.neighbors(v).iter().copied().filter(move |u| self.is_active(*u))
    }

    /// size of the adjacency list of v
    pub fn degree(&self, v:VertexId) -> usize { self.neighbors(v).len() }

    /// adds the edge {u,v}. Does not check for duplicates.
    ///
    /// # Panics
    /// - if u == v (self-loops are not supported)
    /// - if u or v was removed
    pub fn add_edge(&mut self, u:VertexId, v:VertexId) {
        assert!(u != v, "add_edge: self-loop on vertex {}", u);
        assert!(
            self.is_active(u) && self.is_active(v),
            "add_edge: ({},{}) touches a removed vertex", u, v
        );
        if let Some(l) = &mut self.adj_list[u] { l.push(v); }
        if let Some(l) = &mut self.adj_list[v] { l.push(u); }
    }

    /// removes the edge {u,v} (both directions). Returns false if it does not exist
    pub fn remove_edge(&mut self, u:VertexId, v:VertexId) -> bool {
        if !self.is_active(u) || !self.is_active(v) || !self.has_edge(u, v) {
            return false;
        }
        for (a,b) in [(u,v), (v,u)].iter() {
            if let Some(l) = &mut self.adj_list[*a] {
                l.retain(|w| w != b);
            }
        }
        true
    }

    /// soft-removes v: clears its adjacency list, neighbors keep referencing it
    pub fn remove_vertex(&mut self, v:VertexId) {
        self.adj_list[v] = None;
    }

    /** independent copy holding the same active edges.
    Removed vertices are copied as isolated (active) vertices. */
    pub fn copy(&self) -> Self {
        let adj_list = (0..self.n).map(|v| {
            Some(self.active_neighbors(v).collect())
        }).collect();
        Self { n: self.n, adj_list }
    }

    /// true iff v is in the adjacency list of u (false if u was removed)
    pub fn has_edge(&self, u:VertexId, v:VertexId) -> bool {
        self.neighbors(u).contains(&v)
    }

    /// edges (u,v) with u < v between active vertices
    pub fn edges(&self) -> Vec<(VertexId,VertexId)> {
        let mut res = Vec::new();
        for u in self.active_vertices() {
            for v in self.active_neighbors(u) {
                if u < v { res.push((u,v)); }
            }
        }
        res
    }

    /// Δ(G): largest adjacency list among active vertices
    pub fn max_degree(&self) -> usize {
        self.active_vertices().map(|v| self.degree(v)).max().unwrap_or(0)
    }

    /// returns true if every active vertex is reachable from the first active vertex
    pub fn is_connected(&self) -> bool {
        let start = match self.active_vertices().next() {
            None => return true,
            Some(v) => v,
        };
        let mut visited = BitSet::with_capacity(self.n);
        visited.insert(start);
        let mut stack = vec![start];
        while let Some(u) = stack.pop() {
            for v in self.active_neighbors(u) {
                if visited.insert(v) { stack.push(v); }
            }
        }
        visited.len() == self.nb_active_vertices()
    }

    /// returns true if every active vertex is adjacent to all other active vertices
    pub fn is_clique(&self) -> bool {
        let k = self.nb_active_vertices();
        self.active_vertices().all(|v| self.active_neighbors(v).count() + 1 == k)
    }

    /** returns true if the graph is an odd cycle: Δ(G) = 2 and some edge joins two vertices with
    the same depth parity in a spanning forest (it closes an odd cycle). */
    pub fn is_odd_cycle(&self) -> bool {
        self.max_degree() == 2 && self.has_odd_cycle()
    }

    /// level-parity check over a BFS spanning forest
    fn has_odd_cycle(&self) -> bool {
        let mut level:Vec<Option<usize>> = vec![None ; self.n];
        for start in self.active_vertices() {
            if level[start].is_some() { continue; }
            level[start] = Some(0);
            let mut queue = VecDeque::new();
            queue.push_back(start);
            while let Some(u) = queue.pop_front() {
                let lu = level[u].unwrap_or(0);
                for v in self.active_neighbors(u) {
                    match level[v] {
                        None => {
                            level[v] = Some(lu+1);
                            queue.push_back(v);
                        },
                        Some(lv) => if lv % 2 == lu % 2 { return true },
                    }
                }
            }
        }
        false
    }

    /// print statistics of the graph
    pub fn display_statistics(&self) {
        println!("\t{} \t vertices", self.nb_active_vertices());
        println!("\t{} \t edges", self.nb_edges());
        let degrees:Vec<usize> = self.active_vertices().map(|v| self.degree(v)).collect();
        println!("\t{} \t min degree", degrees.iter().min().unwrap_or(&0));
        println!("\t{} \t max degree", degrees.iter().max().unwrap_or(&0));
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    fn cycle(n:usize) -> Graph {
        let edges:Vec<(usize,usize)> = (0..n).map(|i| (i, (i+1)%n)).collect();
        Graph::from_edges(n, &edges)
    }

    #[test]
    fn test_add_edge_symmetric() {
        let g = Graph::from_edges(3, &[(0,1),(1,2)]);
        assert!(g.has_edge(0,1));
        assert!(g.has_edge(1,0));
        assert!(!g.has_edge(0,2));
        assert_eq!(g.neighbors(1), &[0,2]);
        assert_eq!(g.nb_edges(), 2);
        assert_eq!(g.max_degree(), 2);
    }

    #[test]
    #[should_panic]
    fn test_self_loop_rejected() {
        let mut g = Graph::new(2);
        g.add_edge(1, 1);
    }

    #[test]
    #[should_panic(expected = "touches a removed vertex")]
    fn test_edge_to_removed_vertex_rejected() {
        let mut g = Graph::new(3);
        g.remove_vertex(2);
        g.add_edge(0, 2);
    }

    #[test]
    fn test_remove_edge() {
        let mut g = Graph::from_edges(3, &[(0,1),(1,2)]);
        assert!(g.remove_edge(1, 0));
        assert!(!g.has_edge(0,1));
        assert!(!g.has_edge(1,0));
        assert!(!g.remove_edge(0, 1));
        assert!(!g.is_connected());
    }

    #[test]
    fn test_soft_removal_keeps_references() {
        let mut g = Graph::from_edges(3, &[(0,1),(1,2),(0,2)]);
        g.remove_vertex(2);
        assert!(!g.is_active(2));
        assert!(g.neighbors(2).is_empty());
        // 0 still references 2, but it is not an active neighbor
        assert_eq!(g.neighbors(0), &[1,2]);
        assert_eq!(g.active_neighbors(0).collect::<Vec<_>>(), vec![1]);
        assert_eq!(g.edges(), vec![(0,1)]);
        assert!(!g.has_edge(2, 0));
        assert!(g.is_clique());
    }

    #[test]
    fn test_copy_is_independent() {
        let mut g = Graph::from_edges(4, &[(0,1),(1,2),(2,3)]);
        g.remove_vertex(3);
        let mut c = g.copy();
        assert!(c.is_active(3));
        assert!(c.neighbors(3).is_empty());
        assert_eq!(c.neighbors(2), &[1]);
        c.add_edge(0, 2);
        assert!(!g.has_edge(0, 2));
    }

    #[test]
    fn test_is_connected() {
        assert!(Graph::new(1).is_connected());
        assert!(!Graph::new(2).is_connected());
        let mut g = Graph::from_edges(4, &[(0,1),(1,2),(2,3)]);
        assert!(g.is_connected());
        g.remove_vertex(1);
        assert!(!g.is_connected());
        g.remove_vertex(0);
        assert!(g.is_connected());
    }

    #[test]
    fn test_is_clique() {
        let k4 = Graph::from_edges(4, &[(0,1),(0,2),(0,3),(1,2),(1,3),(2,3)]);
        assert!(k4.is_clique());
        assert!(Graph::new(1).is_clique());
        assert!(!cycle(4).is_clique());
    }

    #[test]
    fn test_is_odd_cycle() {
        assert!(cycle(3).is_odd_cycle());
        assert!(cycle(5).is_odd_cycle());
        assert!(!cycle(4).is_odd_cycle());
        assert!(!cycle(6).is_odd_cycle());
        // a path is not a cycle
        assert!(!Graph::from_edges(3, &[(0,1),(1,2)]).is_odd_cycle());
        // odd cycle with a chord: Δ = 3
        let mut g = cycle(5);
        g.add_edge(0, 2);
        assert!(!g.is_odd_cycle());
    }
}
