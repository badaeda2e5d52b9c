use std::{
    collections::hash_map::{Keys, Values},
    iter::Flatten,
    option,
};

use rustc_hash::FxHashMap;

use crate::core::{
    error::{AddEdgeError, AddEdgeErrorKind},
    marker::Direction,
    Edge, Graphable, VertexType,
};

type OutEdges<V, E> = FxHashMap<V, Edge<V, E>>;

/// Adjacency list storage.
///
/// Every vertex owns a map from destination vertices to the edges going
/// there. Outgoing queries touch only the vertex's own map, incoming queries
/// scan all vertices.
#[derive(Debug, Clone)]
pub struct AdjList<V, E> {
    vertices: FxHashMap<V, OutEdges<V, E>>,
    n_edges: usize,
}

impl<V, E> AdjList<V, E> {
    pub fn new() -> Self {
        Self {
            vertices: FxHashMap::default(),
            n_edges: 0,
        }
    }

    pub fn with_capacity(vertex_capacity: usize) -> Self {
        Self {
            vertices: FxHashMap::with_capacity_and_hasher(vertex_capacity, Default::default()),
            n_edges: 0,
        }
    }
}

impl<V, E> Default for AdjList<V, E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V: VertexType, E> Graphable<V, E> for AdjList<V, E> {
    type VerticesIter<'a> = Keys<'a, V, OutEdges<V, E>>
    where
        Self: 'a,
        V: 'a;

    type AdjacentIter<'a> = Flatten<option::IntoIter<Keys<'a, V, Edge<V, E>>>>
    where
        Self: 'a,
        V: 'a;

    type EdgesIter<'a> = EdgesIter<'a, V, E>
    where
        Self: 'a,
        V: 'a,
        E: 'a;

    type EdgesFromIter<'a> = Flatten<option::IntoIter<Values<'a, V, Edge<V, E>>>>
    where
        Self: 'a,
        V: 'a,
        E: 'a;

    fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    fn vertices(&self) -> Self::VerticesIter<'_> {
        self.vertices.keys()
    }

    fn contains_vertex(&self, vertex: &V) -> bool {
        self.vertices.contains_key(vertex)
    }

    fn add_vertex(&mut self, vertex: V) -> bool {
        if self.vertices.contains_key(&vertex) {
            return false;
        }

        self.vertices.insert(vertex, FxHashMap::default());
        true
    }

    fn remove_vertex(&mut self, vertex: &V) -> bool {
        let Some(outgoing) = self.vertices.remove(vertex) else {
            return false;
        };

        // A self-loop lived in the removed map, so it is counted here and
        // cannot be found again below.
        self.n_edges -= outgoing.len();

        for edges in self.vertices.values_mut() {
            if edges.remove(vertex).is_some() {
                self.n_edges -= 1;
            }
        }

        true
    }

    fn adjacent(&self, vertex: &V) -> Self::AdjacentIter<'_> {
        self.vertices
            .get(vertex)
            .map(|edges| edges.keys())
            .into_iter()
            .flatten()
    }

    fn edge_count(&self) -> usize {
        self.n_edges
    }

    fn edges(&self) -> Self::EdgesIter<'_> {
        EdgesIter {
            vertices: self.vertices.values(),
            current: None,
        }
    }

    fn edges_from(&self, vertex: &V) -> Self::EdgesFromIter<'_> {
        self.vertices
            .get(vertex)
            .map(|edges| edges.values())
            .into_iter()
            .flatten()
    }

    fn edge(&self, from: &V, to: &V) -> Option<&Edge<V, E>> {
        self.vertices.get(from)?.get(to)
    }

    fn try_add_edge(
        &mut self,
        edge: Edge<V, E>,
    ) -> Result<Option<Edge<V, E>>, AddEdgeError<V, E>> {
        let has_destination = self.vertices.contains_key(edge.to());

        let Some(outgoing) = self.vertices.get_mut(edge.from()) else {
            log::debug!("rejected edge {:?} -> {:?}: source absent", edge.from(), edge.to());
            return Err(AddEdgeError::new(edge, AddEdgeErrorKind::SourceAbsent));
        };

        if !has_destination {
            log::debug!(
                "rejected edge {:?} -> {:?}: destination absent",
                edge.from(),
                edge.to()
            );
            return Err(AddEdgeError::new(edge, AddEdgeErrorKind::DestinationAbsent));
        }

        let replaced = outgoing.insert(edge.to().clone(), edge);

        if replaced.is_none() {
            self.n_edges += 1;
        }

        Ok(replaced)
    }

    fn remove_edge(&mut self, from: &V, to: &V) -> Option<Edge<V, E>> {
        let edge = self.vertices.get_mut(from)?.remove(to)?;
        self.n_edges -= 1;
        Some(edge)
    }

    fn degree_directed(&self, vertex: &V, dir: Direction) -> usize {
        match dir {
            Direction::Outgoing => self.vertices.get(vertex).map_or(0, |edges| edges.len()),
            Direction::Incoming => self
                .vertices
                .values()
                .filter(|edges| edges.contains_key(vertex))
                .count(),
        }
    }

    fn clear(&mut self) {
        self.vertices.clear();
        self.n_edges = 0;
    }

    fn clear_edges(&mut self) {
        for edges in self.vertices.values_mut() {
            edges.clear();
        }

        self.n_edges = 0;
    }
}

/// Iterator over all edges of an [`AdjList`], vertex by vertex.
pub struct EdgesIter<'a, V, E> {
    vertices: Values<'a, V, OutEdges<V, E>>,
    current: Option<Values<'a, V, Edge<V, E>>>,
}

impl<'a, V, E> Iterator for EdgesIter<'a, V, E> {
    type Item = &'a Edge<V, E>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(edge) = self.current.as_mut().and_then(Iterator::next) {
                return Some(edge);
            }

            self.current = Some(self.vertices.next()?.values());
        }
    }
}
