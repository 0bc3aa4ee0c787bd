use log::debug;

use crate::color::{
    check_coloring, nb_colors, to_partition, CheckerResult, Coloring, Solution, VertexId
};
use crate::cut_vertex::CutVertexFinder;
use crate::error::BrooksError;
use crate::graph::Graph;
use crate::observer::ColoringObserver;
use crate::search::greedy::GreedyPainter;
use crate::spanning_tree::SpanningTreeOrdering;
use crate::subgraph::Subgraph;

/** graphs for which Brooks' bound does not hold (they need Δ(G)+1 colors) */
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Obstruction {
    /// complete graph
    Clique,
    /// cycle of odd length
    OddCycle,
}

/**
coloring strategy, chosen from the structure of the graph (see `Strategy::classify`).
*/
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strategy {
    /// clique or odd cycle: greedy in natural order, Δ(G)+1 colors
    Obstruction(Obstruction),
    /// Δ(G) < 3 (path or even cycle): greedy along a DFS, at most 2 colors
    LowMaxDegree,
    /// greedy along the spanning tree post-order rooted at a vertex of degree < Δ(G)
    LowDegreeRoot(VertexId),
    /// Δ-regular graph with a cut vertex: each side is colored from the cut vertex, then merged
    CutVertex(VertexId),
    /** 2-connected Δ-regular graph: y and z (non-adjacent neighbors of x, G-{y,z} connected)
    share color 0, the rest is colored along the spanning tree of G-{y,z} rooted at x */
    PairRemoval {
        /// root of the spanning tree, colored last
        x: VertexId,
        /// first pre-colored neighbor of x
        y: VertexId,
        /// second pre-colored neighbor of x
        z: VertexId,
    },
}

impl Strategy {
    /// selects the strategy for a graph. Tests are done in this order:
    /// 1. clique or odd cycle
    /// 2. Δ(G) < 3
    /// 3. vertex of degree < Δ(G)
    /// 4. cut vertex
    /// 5. pair removal (the triple always exists on the remaining graphs)
    ///
    /// returns an error if the graph is empty or not connected.
    pub fn classify(graph:&Graph) -> Result<Self, BrooksError> {
        check_preconditions(graph)?;
        if graph.is_clique() {
            return Ok(Strategy::Obstruction(Obstruction::Clique));
        }
        if graph.is_odd_cycle() {
            return Ok(Strategy::Obstruction(Obstruction::OddCycle));
        }
        if graph.max_degree() < 3 {
            return Ok(Strategy::LowMaxDegree);
        }
        if let Some(root) = SpanningTreeOrdering::find_low_degree_root(graph) {
            return Ok(Strategy::LowDegreeRoot(root));
        }
        if let Some(c) = CutVertexFinder::new(graph).find() {
            return Ok(Strategy::CutVertex(c));
        }
        find_reducing_triple(graph)
            .map(|(x,y,z)| Strategy::PairRemoval { x, y, z })
            .ok_or(BrooksError::NoReducingTriple)
    }

    /// short name of the strategy
    pub fn name(&self) -> &'static str {
        match self {
            Strategy::Obstruction(Obstruction::Clique) => "clique",
            Strategy::Obstruction(Obstruction::OddCycle) => "odd_cycle",
            Strategy::LowMaxDegree => "low_max_degree",
            Strategy::LowDegreeRoot(_) => "low_degree_root",
            Strategy::CutVertex(_) => "cut_vertex",
            Strategy::PairRemoval { .. } => "pair_removal",
        }
    }

    /// prefix of the messages sent to the observer
    fn context(&self) -> String {
        match self {
            Strategy::Obstruction(Obstruction::Clique) =>
                "the graph is a clique, greedy coloring: ".to_string(),
            Strategy::Obstruction(Obstruction::OddCycle) =>
                "the graph is an odd cycle, greedy coloring: ".to_string(),
            Strategy::LowMaxDegree =>
                "max degree lower than 3, coloring along a DFS: ".to_string(),
            Strategy::LowDegreeRoot(root) =>
                format!("spanning tree rooted at low degree vertex {}: ", root),
            Strategy::CutVertex(c) =>
                format!("cut vertex {}: ", c),
            Strategy::PairRemoval { x, y, z } =>
                format!("removing neighbors {} and {} of vertex {}: ", y, z, x),
        }
    }
}

/// the graph must be non-empty and connected
fn check_preconditions(graph:&Graph) -> Result<(), BrooksError> {
    if graph.nb_active_vertices() == 0 {
        return Err(BrooksError::EmptyGraph);
    }
    if !graph.is_connected() {
        return Err(BrooksError::Disconnected);
    }
    Ok(())
}

/**
finds (x,y,z) such that y and z are non-adjacent neighbors of x and G-{y,z} is connected.
Such a triple exists in every 2-connected Δ-regular graph (Δ ≥ 3) that is not a clique.
*/
pub fn find_reducing_triple(graph:&Graph) -> Option<(VertexId,VertexId,VertexId)> {
    for x in graph.active_vertices() {
        let neighbors:Vec<VertexId> = graph.active_neighbors(x).collect();
        for (i,&y) in neighbors.iter().enumerate() {
            for &z in &neighbors[i+1..] {
                if graph.has_edge(y, z) { continue; }
                let mut reduced = graph.copy();
                reduced.remove_vertex(y);
                reduced.remove_vertex(z);
                if reduced.is_connected() {
                    return Some((x,y,z));
                }
            }
        }
    }
    None
}

/**
merges the colorings of the two sides of a cut vertex.

If the cut vertex received different colors, the side with the lower maximum color (the second one
on ties) is shifted: color -> (color + shift) mod (other side's max color + 1), where shift brings
the cut vertex to its color on the other side. The shift is a rotation of the other side's palette,
so the shifted side stays proper. Then each vertex takes the color of the side that colored it.
*/
pub fn reconcile(cut_vertex:VertexId, first:Coloring, second:Coloring) -> Result<Coloring, BrooksError> {
    let in_first = first[cut_vertex].ok_or(BrooksError::VertexNotColored(cut_vertex))?;
    let in_second = second[cut_vertex].ok_or(BrooksError::VertexNotColored(cut_vertex))?;
    // (shifted side, kept side, cut vertex color in each)
    let (mut lower, higher, from, to) = if nb_colors(&first) < nb_colors(&second) {
        (first, second, in_first, in_second)
    } else {
        (second, first, in_second, in_first)
    };
    if from != to {
        let modulus = nb_colors(&higher);
        debug!("cut vertex {}: shifting colors by {} modulo {}", cut_vertex, to as i64 - from as i64, modulus);
        for c in lower.iter_mut().flatten() {
            *c = (*c + (modulus - from) + to) % modulus;
        }
    }
    lower.iter().zip(higher.iter()).enumerate().map(|(v,colors)| {
        match colors {
            (Some(a), Some(b)) if v == cut_vertex && a == b => Ok(Some(*a)),
            (Some(_), Some(_)) => Err(BrooksError::BranchOverlap(v)),
            (a, b) => Ok(a.or(*b)),
        }
    }).collect()
}

/** result of a Brooks coloring */
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BrooksSolution {
    /// strategy used
    strategy: Strategy,
    /// Δ(G)
    max_degree: usize,
    /// colors[v]: color of v (None for removed vertices)
    colors: Coloring,
    /// number of colors used (max color + 1)
    nb_colors: usize,
    /// vertices in the order they were colored
    visit_order: Vec<VertexId>,
}

impl BrooksSolution {
    /// strategy used
    pub fn strategy(&self) -> Strategy { self.strategy }

    /// Δ(G) of the colored graph
    pub fn max_degree(&self) -> usize { self.max_degree }

    /// color of each vertex
    pub fn colors(&self) -> &[Option<usize>] { &self.colors }

    /// number of colors used
    pub fn nb_colors(&self) -> usize { self.nb_colors }

    /// vertices in the order they were colored
    pub fn visit_order(&self) -> &[VertexId] { &self.visit_order }

    /// partition form (one class per color)
    pub fn to_partition(&self) -> Solution { to_partition(&self.colors) }
}

/**
constructive Brooks coloring of a connected graph.

Colors every connected simple graph with at most Δ(G) colors, unless it is a clique or an odd
cycle (Δ(G)+1 colors).
*/
#[derive(Debug)]
pub struct ColoringEngine<'g> {
    /// graph to color (never modified, copies are used for vertex removals)
    graph: &'g Graph,
    /// Δ(G)
    max_degree: usize,
}

impl<'g> ColoringEngine<'g> {
    /// creates the engine
    pub fn new(graph:&'g Graph) -> Self {
        Self { graph, max_degree: graph.max_degree() }
    }

    /// strategy the engine will use on this graph
    pub fn classify(&self) -> Result<Strategy, BrooksError> {
        Strategy::classify(self.graph)
    }

    /// classifies the graph and colors it
    pub fn run(&self, observer:&mut dyn ColoringObserver) -> Result<BrooksSolution, BrooksError> {
        let strategy = self.classify()?;
        debug!("strategy: {:?} (Δ(G) = {})", strategy, self.max_degree);
        self.execute(strategy, observer)
    }

    /** colors the graph with a given strategy.
    The result is checked (proper and complete) before `on_complete` is called. */
    pub fn execute(&self, strategy:Strategy, observer:&mut dyn ColoringObserver) -> Result<BrooksSolution, BrooksError> {
        check_preconditions(self.graph)?;
        let context = strategy.context();
        let (colors, visit_order) = match strategy {
            Strategy::Obstruction(_) => {
                self.color_in_order(self.graph, self.graph.active_vertices(), &context, observer)?
            },
            Strategy::LowMaxDegree => {
                let root = self.graph.active_vertices()
                    .min_by_key(|v| self.graph.degree(*v))
                    .ok_or(BrooksError::EmptyGraph)?;
                let ordering = SpanningTreeOrdering::with_root(self.graph, root);
                self.color_in_order(self.graph, ordering.preorder().iter().copied(), &context, observer)?
            },
            Strategy::LowDegreeRoot(root) => {
                let ordering = SpanningTreeOrdering::with_root(self.graph, root);
                self.color_in_order(self.graph, ordering.vertices(), &context, observer)?
            },
            Strategy::CutVertex(c) => self.color_around_cut_vertex(c, observer)?,
            Strategy::PairRemoval { x, y, z } => {
                self.color_by_pair_removal(x, y, z, &context, observer)?
            },
        };
        match check_coloring(self.graph, &colors) {
            CheckerResult::Ok(_) => {},
            CheckerResult::VertexNotColored(v) => return Err(BrooksError::VertexNotColored(v)),
            CheckerResult::ConflictingEdge(u,v) => return Err(BrooksError::ConflictingEdge(u,v)),
            CheckerResult::VertexAddedTwice(v) => return Err(BrooksError::BranchOverlap(v)),
        }
        let nb_colors = nb_colors(&colors);
        observer.on_complete(nb_colors);
        Ok(BrooksSolution { strategy, max_degree: self.max_degree, colors, nb_colors, visit_order })
    }

    /// greedy coloring of graph following order, with a fresh coloring
    fn color_in_order<I>(&self, graph:&Graph, order:I, context:&str, observer:&mut dyn ColoringObserver)
    -> Result<(Coloring, Vec<VertexId>), BrooksError> where I:IntoIterator<Item=VertexId> {
        let mut painter = GreedyPainter::new(self.graph.nb_vertices(), self.max_degree, observer);
        painter.paint_all(graph, order, context)?;
        Ok(painter.finish())
    }

    /** splits the graph around c: the first side excludes the branch of c's first neighbor x, the
    second side is made of the branches the first one did not claim. Each side is colored along its
    spanning tree rooted at c (c has a degree < Δ(G) in both), then both colorings are reconciled.
    */
    fn color_around_cut_vertex(&self, c:VertexId, observer:&mut dyn ColoringObserver)
    -> Result<(Coloring, Vec<VertexId>), BrooksError> {
        let graph = self.graph;
        let x = graph.active_neighbors(c).next().ok_or(BrooksError::MissingSecondBranch(c))?;
        let first = Subgraph::new(graph, c, x);
        let claimed:Vec<VertexId> = graph.active_neighbors(c).filter(|v| first.contains(*v)).collect();
        let y = *claimed.first().ok_or(BrooksError::MissingSecondBranch(c))?;
        let second = Subgraph::excluding_all(graph, c, &claimed);
        debug!(
            "cut vertex {}: side of {} has {} vertices, side of {} has {} vertices",
            c, y, first.len(), x, second.len()
        );
        let (first_colors, first_order) = self.color_side(&first, observer)?;
        let (second_colors, second_order) = self.color_side(&second, observer)?;
        let colors = reconcile(c, first_colors, second_colors)?;
        observer.on_color_assigned(&colors, &format!("cut vertex {}: merging both sides", c));
        let visit_order = first_order.into_iter()
            .chain(second_order.into_iter().filter(|v| *v != c))
            .collect();
        Ok((colors, visit_order))
    }

    /// colors one side of a cut vertex, from the cut vertex
    fn color_side(&self, side:&Subgraph, observer:&mut dyn ColoringObserver)
    -> Result<(Coloring, Vec<VertexId>), BrooksError> {
        let c = side.cut_vertex();
        let ordering = SpanningTreeOrdering::with_root(side.graph(), c);
        let context = format!("cut vertex {}, side of {} vertices: ", c, side.len());
        self.color_in_order(side.graph(), ordering.vertices(), &context, observer)
    }

    /** y and z get color 0. The other vertices are colored along the spanning tree of G-{y,z}
    rooted at x, the colors of their neighbors being read in G (y and z included). x comes last and
    sees y and z with the same color: a color in [0, Δ(G)-1] is left for it. */
    fn color_by_pair_removal(&self, x:VertexId, y:VertexId, z:VertexId, context:&str, observer:&mut dyn ColoringObserver)
    -> Result<(Coloring, Vec<VertexId>), BrooksError> {
        let mut reduced = self.graph.copy();
        reduced.remove_vertex(y);
        reduced.remove_vertex(z);
        let ordering = SpanningTreeOrdering::with_root(&reduced, x);
        let mut painter = GreedyPainter::new(self.graph.nb_vertices(), self.max_degree, observer);
        painter.assign(y, 0, context);
        painter.assign(z, 0, context);
        painter.paint_all(self.graph, ordering.vertices(), context)?;
        Ok(painter.finish())
    }
}

/// colors a connected graph with at most Δ(G) colors (Δ(G)+1 for cliques and odd cycles)
pub fn brooks_coloring(graph:&Graph, observer:&mut dyn ColoringObserver) -> Result<BrooksSolution, BrooksError> {
    ColoringEngine::new(graph).run(observer)
}
