use std::{fmt::Debug, hash::Hash};

use super::{edge::Edge, error::AddEdgeError, marker::Direction};

/// Requirements on the type of vertices.
///
/// Vertices are identified by their value. They must be totally ordered and
/// hashable so that storages can key their internal maps by them.
pub trait VertexType: Clone + Ord + Hash + Debug {}

impl<T> VertexType for T where T: Clone + Ord + Hash + Debug {}

/// The storage contract shared by all graph representations.
///
/// A storage is always capable of directed storage: an edge from `a` to `b`
/// is a different entry than an edge from `b` to `a`. Symmetry of undirected
/// graphs is a policy of the [`Graph`](crate::graph::Graph) facade, not of the
/// storage.
///
/// The vertices form a set and there is at most one edge per ordered pair of
/// vertices. Adding an edge for a pair that already has one replaces it.
///
/// All iterators are lazy and borrow the storage. Enumeration order is
/// unspecified, but stays the same as long as the storage is not mutated.
///
/// A storage does no internal synchronization. Mutating calls require
/// exclusive access, which is what `&mut self` enforces.
///
/// Deep copy is provided by [`Clone`]. The copy shares nothing with the
/// original.
pub trait Graphable<V: VertexType, E> {
    type VerticesIter<'a>: Iterator<Item = &'a V>
    where
        Self: 'a,
        V: 'a;

    type AdjacentIter<'a>: Iterator<Item = &'a V>
    where
        Self: 'a,
        V: 'a;

    type EdgesIter<'a>: Iterator<Item = &'a Edge<V, E>>
    where
        Self: 'a,
        V: 'a,
        E: 'a;

    type EdgesFromIter<'a>: Iterator<Item = &'a Edge<V, E>>
    where
        Self: 'a,
        V: 'a,
        E: 'a;

    /// Returns the number of vertices.
    fn vertex_count(&self) -> usize;

    fn vertices(&self) -> Self::VerticesIter<'_>;

    fn contains_vertex(&self, vertex: &V) -> bool;

    /// Adds the vertex to the vertex set.
    ///
    /// Adding a vertex that is already present is a no-op. Returns `true` if
    /// the vertex was not present before.
    fn add_vertex(&mut self, vertex: V) -> bool;

    /// Removes the vertex together with all edges incident to it, in both
    /// directions. Returns `false` if there was no such vertex.
    fn remove_vertex(&mut self, vertex: &V) -> bool;

    /// Returns the destinations of all edges going out of the vertex.
    ///
    /// Empty for a vertex that does not exist.
    fn adjacent(&self, vertex: &V) -> Self::AdjacentIter<'_>;

    /// Returns the number of stored (directed) edges.
    fn edge_count(&self) -> usize {
        self.edges().count()
    }

    fn edges(&self) -> Self::EdgesIter<'_>;

    /// Returns all edges going out of the vertex.
    ///
    /// Empty for a vertex that does not exist.
    fn edges_from(&self, vertex: &V) -> Self::EdgesFromIter<'_>;

    fn edge(&self, from: &V, to: &V) -> Option<&Edge<V, E>>;

    fn contains_edge(&self, from: &V, to: &V) -> bool {
        self.edge(from, to).is_some()
    }

    /// Inserts the edge.
    ///
    /// Both endpoints must already be present, otherwise the edge is returned
    /// in the error and the storage is not modified. If there already was an
    /// edge between the endpoints, it is replaced and returned.
    fn try_add_edge(
        &mut self,
        edge: Edge<V, E>,
    ) -> Result<Option<Edge<V, E>>, AddEdgeError<V, E>>;

    /// Inserts the edge.
    ///
    /// # Panics
    ///
    /// Panics if any of the endpoints is not present. See
    /// [`try_add_edge`](Graphable::try_add_edge) for the fallible variant.
    fn add_edge(&mut self, edge: Edge<V, E>) -> Option<Edge<V, E>> {
        match self.try_add_edge(edge) {
            Ok(replaced) => replaced,
            Err(error) => panic!("{error}"),
        }
    }

    fn remove_edge(&mut self, from: &V, to: &V) -> Option<Edge<V, E>>;

    /// Returns the number of edges incident to the vertex in given direction.
    ///
    /// Zero for a vertex that does not exist.
    fn degree_directed(&self, vertex: &V, dir: Direction) -> usize;

    /// Returns the number of edges ending in the vertex.
    fn in_degree(&self, vertex: &V) -> usize {
        self.degree_directed(vertex, Direction::Incoming)
    }

    /// Returns the number of edges starting in the vertex.
    fn out_degree(&self, vertex: &V) -> usize {
        self.degree_directed(vertex, Direction::Outgoing)
    }

    /// Removes all vertices and edges.
    fn clear(&mut self);

    /// Removes all edges, keeping the vertices.
    fn clear_edges(&mut self);
}
