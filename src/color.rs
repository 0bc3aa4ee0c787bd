use crate::graph::Graph;

/** Vertex Id */
pub type VertexId = usize;

/** Color index (colors are numbered from 0) */
pub type Color = usize;

/** Coloring: colors[v] is the color of v, or None if v is not colored (yet). */
pub type Coloring = Vec<Option<Color>>;

/** Solution of a graph coloring problem
(represented as a partition).
*/
pub type Solution = Vec<Vec<VertexId>>;

/// number of colors used by a coloring: max(color)+1 (0 if nothing is colored)
pub fn nb_colors(colors:&[Option<Color>]) -> usize {
    colors.iter().flatten().max().map_or(0, |c| c+1)
}

/// converts a coloring to its partition form (one class per color). Uncolored vertices are skipped.
pub fn to_partition(colors:&[Option<Color>]) -> Solution {
    let mut res = vec![vec![] ; nb_colors(colors)];
    for (v,c) in colors.iter().enumerate() {
        if let Some(c) = c { res[*c].push(v); }
    }
    res
}

/** result of a checker call */
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckerResult {
    /// the solution is a proper coloring using this number of colors
    Ok(usize),
    /// the vertex appears in two color classes
    VertexAddedTwice(VertexId),
    /// the (active) vertex is not colored
    VertexNotColored(VertexId),
    /// both endpoints of this edge share a color
    ConflictingEdge(VertexId, VertexId),
}

/**
checks a solution given as a partition.
returns the number of colors if the solution is feasible
*/
pub fn checker(graph:&Graph, sol:&[Vec<VertexId>]) -> CheckerResult {
    let mut colors:Coloring = vec![None ; graph.nb_vertices()];
    for (c,class) in sol.iter().enumerate() {
        for v in class {
            if colors[*v].is_some() {
                return CheckerResult::VertexAddedTwice(*v);  // already added
            }
            colors[*v] = Some(c);
        }
    }
    match check_coloring(graph, &colors) {
        CheckerResult::Ok(_) => CheckerResult::Ok(sol.len()),
        res => res,
    }
}

/**
checks a coloring: every active vertex is colored and no active edge is conflicting.
returns the number of colors if the coloring is proper
*/
pub fn check_coloring(graph:&Graph, colors:&[Option<Color>]) -> CheckerResult {
    for v in graph.active_vertices() {
        if colors[v].is_none() { return CheckerResult::VertexNotColored(v); }
    }
    for (u,v) in graph.edges() {
        if colors[u] == colors[v] { return CheckerResult::ConflictingEdge(u, v); }
    }
    CheckerResult::Ok(nb_colors(colors))
}


#[cfg(test)]
mod tests {
    use super::*;

    fn triangle() -> Graph {
        Graph::from_edges(3, &[(0,1),(1,2),(0,2)])
    }

    #[test]
    fn test_nb_colors() {
        assert_eq!(nb_colors(&[]), 0);
        assert_eq!(nb_colors(&[None, None]), 0);
        assert_eq!(nb_colors(&[Some(0), Some(2), None]), 3);
    }

    #[test]
    fn test_to_partition() {
        let sol = to_partition(&[Some(1), Some(0), Some(1), None]);
        assert_eq!(sol, vec![vec![1], vec![0,2]]);
    }

    #[test]
    fn test_checker_ok() {
        assert_eq!(checker(&triangle(), &[vec![0], vec![1], vec![2]]), CheckerResult::Ok(3));
    }

    #[test]
    fn test_checker_errors() {
        let g = triangle();
        assert_eq!(checker(&g, &[vec![0,1], vec![2]]), CheckerResult::ConflictingEdge(0,1));
        assert_eq!(checker(&g, &[vec![0], vec![1], vec![0,2]]), CheckerResult::VertexAddedTwice(0));
        assert_eq!(checker(&g, &[vec![0], vec![1]]), CheckerResult::VertexNotColored(2));
    }

    #[test]
    fn test_check_coloring_ignores_removed_vertices() {
        let mut g = triangle();
        g.remove_vertex(2);
        assert_eq!(check_coloring(&g, &[Some(0), Some(1), None]), CheckerResult::Ok(2));
    }
}
