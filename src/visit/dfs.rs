use std::marker::PhantomData;

use super::{
    raw::{RawVisit, Stack, TraversalCollection},
    Search, VisitSet,
};
use crate::core::{Graphable, VertexType};

/// When the [`Dfs`] callback is invoked for a vertex.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Order {
    /// When the vertex is discovered, before any of its neighbors.
    #[default]
    Pre,
    /// When all vertices reachable from the vertex have been processed.
    Post,
}

/// Depth-first search.
///
/// The traversal keeps a stack of vertices on the current path, each with the
/// lazy iterator over its remaining neighbors. The vertices are therefore
/// visited in the same order as a recursive implementation would visit them.
pub struct Dfs<'a, V, E, G, F>
where
    V: VertexType + 'a,
    G: Graphable<V, E> + 'a,
{
    graph: &'a G,
    raw: RawVisit<V, Stack<(V, G::AdjacentIter<'a>)>>,
    order: Order,
    on_visit: F,
    ty: PhantomData<fn() -> E>,
}

impl<'a, V, E, G, F> Dfs<'a, V, E, G, F>
where
    V: VertexType + 'a,
    G: Graphable<V, E> + 'a,
    F: FnMut(&V),
{
    pub fn new(graph: &'a G, order: Order, on_visit: F) -> Self {
        Self {
            graph,
            raw: RawVisit::new(graph.vertex_count()),
            order,
            on_visit,
            ty: PhantomData,
        }
    }

    pub fn order(&self) -> Order {
        self.order
    }
}

impl<'a, V, E, G, F> Search<V> for Dfs<'a, V, E, G, F>
where
    V: VertexType + 'a,
    G: Graphable<V, E> + 'a,
    F: FnMut(&V),
{
    fn search(&mut self, start: &V) {
        let graph = self.graph;

        if !graph.contains_vertex(start) {
            log::debug!("depth-first search from absent vertex {:?}", start);
            return;
        }

        if !self.raw.visited.visit(start.clone()) {
            return;
        }

        if self.order == Order::Pre {
            (self.on_visit)(start);
        }

        self.raw
            .collection
            .push((start.clone(), graph.adjacent(start)));

        while let Some((_, neighbors)) = self.raw.collection.top_mut() {
            match neighbors.next() {
                Some(next) => {
                    if self.raw.visited.visit(next.clone()) {
                        if self.order == Order::Pre {
                            (self.on_visit)(next);
                        }

                        self.raw
                            .collection
                            .push((next.clone(), graph.adjacent(next)));
                    }
                }
                None => {
                    if let Some((vertex, _)) = self.raw.collection.pop() {
                        if self.order == Order::Post {
                            (self.on_visit)(&vertex);
                        }
                    }
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
