/*
Implements:
 - reading and writing graphs in the JSON edge-list format: {"n": 4, "edges": [[0,1],[1,2]]}
 - conversion to a Graph (0-based vertex ids, validated)
*/
use std::fs;

use serde::{Serialize, Deserialize};

use crate::color::VertexId;
use crate::error::InstanceError;
use crate::graph::Graph;

/** data structure to represent a JSON edge-list instance */
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EdgeListInstance {
    /// number of vertices
    n: usize,
    /// edges (0-based endpoints)
    edges: Vec<(VertexId,VertexId)>,
}

impl EdgeListInstance {
    /** reads an instance from a file. */
    pub fn from_file(filename:&str) -> Result<Self, InstanceError> {
        let str = fs::read_to_string(filename)?;
        Self::from_json(&str)
    }

    /** reads an instance from a JSON string. */
    pub fn from_json(content:&str) -> Result<Self, InstanceError> {
        Ok(serde_json::from_str(content)?)
    }

    /** edge list of a graph (active vertices only) */
    pub fn from_graph(graph:&Graph) -> Self {
        Self { n: graph.nb_vertices(), edges: graph.edges() }
    }

    /** JSON encoding of the instance */
    pub fn to_json(&self) -> Result<String, InstanceError> {
        Ok(serde_json::to_string(self)?)
    }

    /** writes the instance into a file */
    pub fn write(&self, filename:&str) -> Result<(), InstanceError> {
        fs::write(filename, self.to_json()?)?;
        Ok(())
    }

    /// number of vertices
    pub fn n(&self) -> usize { self.n }

    /// edges of the instance
    pub fn edges(&self) -> &[(VertexId,VertexId)] { &self.edges }

    /** converts to a graph. Fails on out of range ids, self-loops and duplicate edges. */
    pub fn to_graph(&self) -> Result<Graph, InstanceError> {
        let mut graph = Graph::new(self.n);
        for &(u,v) in &self.edges {
            for &w in &[u,v] {
                if w >= self.n {
                    return Err(InstanceError::VertexOutOfRange { vertex: w, n: self.n });
                }
            }
            if u == v { return Err(InstanceError::SelfLoop(u)); }
            if graph.has_edge(u, v) {
                return Err(InstanceError::DuplicateEdge(u.min(v), u.max(v)));
            }
            graph.add_edge(u, v);
        }
        Ok(graph)
    }
}

/// reads a JSON edge-list instance file as a graph
pub fn read_from_file(filename:&str) -> Result<Graph, InstanceError> {
    EdgeListInstance::from_file(filename)?.to_graph()
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_json() {
        let inst = EdgeListInstance::from_json(r#"{"n": 4, "edges": [[0,1],[1,2],[2,3]]}"#).unwrap();
        assert_eq!(inst.n(), 4);
        let g = inst.to_graph().unwrap();
        assert_eq!(g.edges(), vec![(0,1),(1,2),(2,3)]);
    }

    #[test]
    fn test_from_graph() {
        let g = Graph::from_edges(3, &[(0,1),(1,2)]);
        let inst = EdgeListInstance::from_graph(&g);
        assert_eq!(inst.edges(), &[(0,1),(1,2)]);
        assert_eq!(inst.to_json().unwrap(), r#"{"n":3,"edges":[[0,1],[1,2]]}"#);
    }

    #[test]
    fn test_invalid_json() {
        assert!(matches!(
            EdgeListInstance::from_json(r#"{"n": 2, "edges": [[0]]}"#),
            Err(InstanceError::Json(_))
        ));
        let out_of_range = EdgeListInstance::from_json(r#"{"n": 2, "edges": [[0,2]]}"#).unwrap();
        assert!(matches!(
            out_of_range.to_graph(),
            Err(InstanceError::VertexOutOfRange { vertex: 2, n: 2 })
        ));
        let self_loop = EdgeListInstance::from_json(r#"{"n": 2, "edges": [[1,1]]}"#).unwrap();
        assert!(matches!(self_loop.to_graph(), Err(InstanceError::SelfLoop(1))));
        let duplicate = EdgeListInstance::from_json(r#"{"n": 2, "edges": [[0,1],[1,0]]}"#).unwrap();
        assert!(matches!(duplicate.to_graph(), Err(InstanceError::DuplicateEdge(0,1))));
    }
}
