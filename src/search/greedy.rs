use bit_set::BitSet;

use crate::color::{Color, Coloring, VertexId};
use crate::error::BrooksError;
use crate::graph::Graph;
use crate::observer::ColoringObserver;

/**
returns the smallest color in [0, max_degree] not used by an active neighbor of v.
returns None if the Δ(G)+1 colors are all taken.
*/
pub fn first_available_color(graph:&Graph, colors:&[Option<Color>], v:VertexId, max_degree:usize) -> Option<Color> {
    let mut taken = BitSet::with_capacity(max_degree+1);
    for u in graph.active_neighbors(v) {
        if let Some(c) = colors[u] { taken.insert(c); }
    }
    (0..=max_degree).find(|c| !taken.contains(*c))
}

/**
colors vertices one at a time with the first available color (capped at Δ(G)), following a given
order, and reports every assignment to the observer.

Owns a fresh coloring: each strategy invocation creates its own painter.
*/
pub(crate) struct GreedyPainter<'o> {
    /// Δ(G): colors are taken in [0, max_degree]
    max_degree: usize,
    /// colors[v]: color of v
    colors: Coloring,
    /// vertices in the order they were colored
    visit_order: Vec<VertexId>,
    /// receives the coloring steps
    observer: &'o mut dyn ColoringObserver,
}

impl<'o> GreedyPainter<'o> {
    /// creates a painter with all n vertices uncolored
    pub(crate) fn new(n:usize, max_degree:usize, observer:&'o mut dyn ColoringObserver) -> Self {
        Self { max_degree, colors: vec![None ; n], visit_order: Vec::new(), observer }
    }

    /// colors v with c, regardless of its neighbors (used to pre-color vertices)
    pub(crate) fn assign(&mut self, v:VertexId, c:Color, context:&str) {
        debug_assert!(self.colors[v].is_none(), "vertex {} colored twice", v);
        self.colors[v] = Some(c);
        self.visit_order.push(v);
        self.observer.on_color_assigned(
            &self.colors,
            &format!("{}coloring vertex {} with color {}", context, v, c)
        );
    }

    /// colors v with the first color not used by its neighbors in graph
    pub(crate) fn paint(&mut self, graph:&Graph, v:VertexId, context:&str) -> Result<Color, BrooksError> {
        let c = first_available_color(graph, &self.colors, v, self.max_degree)
            .ok_or(BrooksError::ColorsExhausted { vertex: v, palette: self.max_degree+1 })?;
        self.assign(v, c, context);
        Ok(c)
    }

    /// colors every vertex of order (in this order)
    pub(crate) fn paint_all<I>(&mut self, graph:&Graph, order:I, context:&str) -> Result<(), BrooksError>
    where I:IntoIterator<Item=VertexId> {
        for v in order {
            self.paint(graph, v, context)?;
        }
        Ok(())
    }

    /// returns (coloring, visit order)
    pub(crate) fn finish(self) -> (Coloring, Vec<VertexId>) {
        (self.colors, self.visit_order)
    }
}
