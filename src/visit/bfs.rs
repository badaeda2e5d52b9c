use std::marker::PhantomData;

use super::{
    raw::{Queue, RawVisit, TraversalCollection},
    Search, VisitSet,
};
use crate::core::{Graphable, VertexType};

/// Breadth-first search.
///
/// The callback is invoked when a vertex is discovered for the first time,
/// that is, when it is enqueued. Every vertex is enqueued at most once.
pub struct Bfs<'a, V, E, G, F> {
    graph: &'a G,
    raw: RawVisit<V, Queue<V>>,
    on_visit: F,
    ty: PhantomData<fn() -> E>,
}

impl<'a, V, E, G, F> Bfs<'a, V, E, G, F>
where
    V: VertexType,
    G: Graphable<V, E>,
    F: FnMut(&V),
{
    pub fn new(graph: &'a G, on_visit: F) -> Self {
        Self {
            graph,
            raw: RawVisit::new(graph.vertex_count()),
            on_visit,
            ty: PhantomData,
        }
    }
}

impl<'a, V, E, G, F> Search<V> for Bfs<'a, V, E, G, F>
where
    V: VertexType,
    G: Graphable<V, E>,
    F: FnMut(&V),
{
    fn search(&mut self, start: &V) {
        let graph = self.graph;

        if !graph.contains_vertex(start) {
            log::debug!("breadth-first search from absent vertex {:?}", start);
            return;
        }

        if !self.raw.visited.visit(start.clone()) {
            return;
        }

        (self.on_visit)(start);
        self.raw.collection.push(start.clone());

        while let Some(vertex) = self.raw.collection.pop() {
            for neighbor in graph.adjacent(&vertex) {
                if self.raw.visited.visit(neighbor.clone()) {
                    (self.on_visit)(neighbor);
                    self.raw.collection.push(neighbor.clone());
                }
            }
        }
    }

    fn is_visited(&self, vertex: &V) -> bool {
        self.raw.visited.is_visited(vertex)
    }

    fn visit(&mut self, vertex: V) -> bool {
        self.raw.visited.visit(vertex)
    }

    fn visited_count(&self) -> usize {
        self.raw.visited.visited_count()
    }

    fn reset(&mut self) {
        self.raw.reset();
    }
}
