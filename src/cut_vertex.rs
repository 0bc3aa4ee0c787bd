use std::cmp::min;

use bit_set::BitSet;

use crate::color::VertexId;
use crate::graph::Graph;

/**
finds articulation points (cut vertices) of a connected graph (Tarjan's low-link DFS).

The DFS starts at the first active vertex and uses an explicit stack.
 - a non-root vertex u is a cut vertex if some tree child c satisfies low[c] >= disc[u]
 - the root is a cut vertex iff it has more than one tree child
*/
#[derive(Debug)]
pub struct CutVertexFinder<'a> {
    /// graph to explore (assumed connected)
    graph: &'a Graph,
    /// disc[v]: discovery time of v
    disc: Vec<usize>,
    /// low[v]: smallest discovery time reachable from the subtree of v with one back edge
    low: Vec<usize>,
    /// parent[v]: DFS tree parent of v
    parent: Vec<Option<VertexId>>,
    /// vertices already discovered
    visited: BitSet,
    /// next discovery time
    time: usize,
}

impl<'a> CutVertexFinder<'a> {
    /// creates the finder (the DFS state is scoped to one detection call)
    pub fn new(graph:&'a Graph) -> Self {
        let n = graph.nb_vertices();
        Self {
            graph,
            disc: vec![0 ; n],
            low: vec![0 ; n],
            parent: vec![None ; n],
            visited: BitSet::with_capacity(n),
            time: 0,
        }
    }

    /// returns the first cut vertex found by the DFS, None if the graph is 2-connected
    pub fn find(mut self) -> Option<VertexId> {
        self.search(true).iter().next()
    }

    /// returns all cut vertices (increasing order)
    pub fn find_all(mut self) -> Vec<VertexId> {
        self.search(false).iter().collect()
    }

    fn enter(&mut self, v:VertexId) {
        self.visited.insert(v);
        self.disc[v] = self.time;
        self.low[v] = self.time;
        self.time += 1;
    }

    /// runs the DFS, stops after the first cut vertex if first_only
    fn search(&mut self, first_only:bool) -> BitSet {
        let graph = self.graph;
        let mut res = BitSet::with_capacity(graph.nb_vertices());
        let root = match graph.active_vertices().next() {
            None => return res,
            Some(v) => v,
        };
        let mut root_children = 0;
        self.enter(root);
        // (vertex, position of the next neighbor to explore)
        let mut stack:Vec<(VertexId,usize)> = vec![(root,0)];
        while let Some(frame) = stack.last_mut() {
            let u = frame.0;
            match graph.neighbors(u).get(frame.1) {
                Some(&v) => {
                    frame.1 += 1;
                    if !graph.is_active(v) || self.parent[u] == Some(v) { continue; }
                    if self.visited.contains(v) { // back edge
                        self.low[u] = min(self.low[u], self.disc[v]);
                    } else { // tree edge
                        self.parent[v] = Some(u);
                        if u == root {
                            root_children += 1;
                            if root_children > 1 && res.insert(root) && first_only {
                                return res;
                            }
                        }
                        self.enter(v);
                        stack.push((v,0));
                    }
                },
                None => { // u is finished
                    stack.pop();
                    if let Some(p) = self.parent[u] {
                        self.low[p] = min(self.low[p], self.low[u]);
                        if p != root && self.low[u] >= self.disc[p] && res.insert(p) && first_only {
                            return res;
                        }
                    }
                }
            }
        }
        res
    }
}
