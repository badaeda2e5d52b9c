//! The directed/undirected graph facade over a [storage](crate::storage).

use std::{
    fmt,
    io::{self, Write},
    marker::PhantomData,
};

use crate::{
    algo::{self, toposort},
    core::{AddEdgeError, Direction, Edge, Graphable, VertexType},
    export::{Export, ListFormat},
    storage::AdjList,
    visit::{Bfs, Dfs, Order, Search},
};

/// A graph with a fixed directedness over an interchangeable storage.
///
/// The storage itself always stores directed edges. An undirected graph keeps
/// the storage symmetric: every edge `a → b` has its mirror `b → a`, carrying
/// its own copy of the label. Self-loops are stored once.
///
/// Consequently, the edge count and the edge enumeration of an undirected
/// graph include both directions of every non-loop edge, and the
/// [`degree`](Graph::degree) of a vertex is always the sum of its in-degree
/// and out-degree.
///
/// # Examples
///
/// ```
/// use graphva::Graph;
///
/// let mut graph = Graph::<_, u32>::new_undirected();
///
/// graph.extend_with_vertices(["Prague", "Brno", "Vienna"]);
/// graph.add_edge("Prague", "Brno", 205);
/// graph.add_edge("Brno", "Vienna", 145);
///
/// assert!(graph.contains_edge(&"Vienna", &"Brno"));
/// assert!(graph.is_connected());
/// assert!(!graph.is_cyclic());
/// ```
#[derive(Debug)]
pub struct Graph<V, E, S = AdjList<V, E>> {
    storage: S,
    directed: bool,
    ty: PhantomData<fn() -> (V, E)>,
}

impl<V: VertexType, E> Graph<V, E> {
    pub fn new_directed() -> Self {
        Self::new_directed_in(AdjList::new())
    }

    pub fn new_undirected() -> Self
    where
        E: Clone,
    {
        Self::new_undirected_in(AdjList::new())
    }
}

impl<V, E, S> Graph<V, E, S>
where
    V: VertexType,
    S: Graphable<V, E>,
{
    pub fn new_directed_in(storage: S) -> Self {
        Self {
            storage,
            directed: true,
            ty: PhantomData,
        }
    }

    /// Creates an undirected graph over given storage.
    ///
    /// Edges of the storage that do not have their mirror get one.
    pub fn new_undirected_in(mut storage: S) -> Self
    where
        E: Clone,
    {
        let missing = storage
            .edges()
            .filter(|edge| !storage.contains_edge(edge.to(), edge.from()))
            .map(Edge::reversed)
            .collect::<Vec<_>>();

        for edge in missing {
            storage.add_edge(edge);
        }

        Self {
            storage,
            directed: false,
            ty: PhantomData,
        }
    }

    pub fn new_in(storage: S, directed: bool) -> Self
    where
        E: Clone,
    {
        if directed {
            Self::new_directed_in(storage)
        } else {
            Self::new_undirected_in(storage)
        }
    }

    pub fn is_directed(&self) -> bool {
        self.directed
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn into_storage(self) -> S {
        self.storage
    }

    /// Returns the number of vertices.
    pub fn vertex_count(&self) -> usize {
        self.storage.vertex_count()
    }

    pub fn is_empty(&self) -> bool {
        self.storage.vertex_count() == 0
    }

    /// Returns the number of stored edges.
    ///
    /// For an undirected graph, both directions of an edge are counted.
    pub fn edge_count(&self) -> usize {
        self.storage.edge_count()
    }

    pub fn vertices(&self) -> S::VerticesIter<'_> {
        self.storage.vertices()
    }

    pub fn contains_vertex(&self, vertex: &V) -> bool {
        self.storage.contains_vertex(vertex)
    }

    /// Adds the vertex. Returns `false` if it was already present.
    pub fn add_vertex(&mut self, vertex: V) -> bool {
        self.storage.add_vertex(vertex)
    }

    pub fn extend_with_vertices<I>(&mut self, iter: I)
    where
        I: IntoIterator<Item = V>,
    {
        for vertex in iter {
            self.storage.add_vertex(vertex);
        }
    }

    /// Removes the vertex and all its incident edges.
    pub fn remove_vertex(&mut self, vertex: &V) -> bool {
        self.storage.remove_vertex(vertex)
    }

    pub fn adjacent(&self, vertex: &V) -> S::AdjacentIter<'_> {
        self.storage.adjacent(vertex)
    }

    pub fn edges(&self) -> S::EdgesIter<'_> {
        self.storage.edges()
    }

    pub fn edges_from(&self, vertex: &V) -> S::EdgesFromIter<'_> {
        self.storage.edges_from(vertex)
    }

    pub fn edge(&self, from: &V, to: &V) -> Option<&Edge<V, E>> {
        self.storage.edge(from, to)
    }

    pub fn contains_edge(&self, from: &V, to: &V) -> bool {
        self.storage.contains_edge(from, to)
    }

    /// Adds an edge between two existing vertices.
    ///
    /// In an undirected graph, the mirror edge is added too, with a clone of
    /// the label. If there already was an edge, it is replaced and its label
    /// is returned.
    ///
    /// If any of the endpoints is missing, nothing is added and the edge is
    /// returned in the error.
    pub fn try_add_edge(
        &mut self,
        from: V,
        to: V,
        label: E,
    ) -> Result<Option<E>, AddEdgeError<V, E>>
    where
        E: Clone,
    {
        let edge = Edge::new(from, to, label);
        let mirror = (!self.directed && !edge.is_loop()).then(|| edge.reversed());

        let replaced = self.storage.try_add_edge(edge)?;

        if let Some(mirror) = mirror {
            // Both endpoints are known to exist at this point.
            self.storage.add_edge(mirror);
        }

        Ok(replaced.map(Edge::into_label))
    }

    /// Adds an edge between two existing vertices.
    ///
    /// # Panics
    ///
    /// Panics if any of the endpoints does not exist. See
    /// [`try_add_edge`](Graph::try_add_edge) for the fallible variant.
    pub fn add_edge(&mut self, from: V, to: V, label: E) -> Option<E>
    where
        E: Clone,
    {
        match self.try_add_edge(from, to, label) {
            Ok(replaced) => replaced,
            Err(error) => panic!("{error}"),
        }
    }

    /// Adds all edges, adding their endpoints as vertices first if needed.
    pub fn extend_with_edges<I>(&mut self, iter: I)
    where
        I: IntoIterator<Item = (V, V, E)>,
        E: Clone,
    {
        for (from, to, label) in iter {
            self.storage.add_vertex(from.clone());
            self.storage.add_vertex(to.clone());
            self.add_edge(from, to, label);
        }
    }

    /// Removes the edge and returns its label. In an undirected graph, both
    /// directions are removed.
    pub fn remove_edge(&mut self, from: &V, to: &V) -> Option<E> {
        let removed = self.storage.remove_edge(from, to);

        if self.directed {
            return removed.map(Edge::into_label);
        }

        let mirror = self.storage.remove_edge(to, from);
        removed.or(mirror).map(Edge::into_label)
    }

    pub fn in_degree(&self, vertex: &V) -> usize {
        self.storage.in_degree(vertex)
    }

    pub fn out_degree(&self, vertex: &V) -> usize {
        self.storage.out_degree(vertex)
    }

    /// Returns the sum of in-degree and out-degree of the vertex.
    pub fn degree(&self, vertex: &V) -> usize {
        Direction::all()
            .into_iter()
            .map(|dir| self.storage.degree_directed(vertex, dir))
            .sum()
    }

    pub fn clear(&mut self) {
        self.storage.clear();
    }

    pub fn clear_edges(&mut self) {
        self.storage.clear_edges();
    }

    /// Runs a breadth-first search from `start`, invoking the callback for
    /// every reachable vertex.
    pub fn bfs<F>(&self, start: &V, on_visit: F)
    where
        F: FnMut(&V),
    {
        Bfs::new(&self.storage, on_visit).search(start);
    }

    /// Runs a depth-first search from `start`, invoking the callback for every
    /// reachable vertex at the time given by `order`.
    pub fn dfs<F>(&self, start: &V, order: Order, on_visit: F)
    where
        F: FnMut(&V),
    {
        Dfs::new(&self.storage, order, on_visit).search(start);
    }

    /// See [`algo::is_connected`].
    pub fn is_connected(&self) -> bool {
        algo::is_connected(&self.storage)
    }

    /// See [`algo::is_cyclic`].
    pub fn is_cyclic(&self) -> bool {
        algo::is_cyclic(self)
    }

    /// See [`algo::toposort`].
    pub fn toposort(&self) -> Result<Vec<V>, toposort::Error<V>> {
        algo::toposort(self)
    }

    /// Writes the graph in the format of the given exporter.
    pub fn export<X, W>(&self, exporter: &X, out: &mut W) -> io::Result<()>
    where
        X: Export<Self>,
        W: Write,
    {
        exporter.export(self, out)
    }
}

impl<V: VertexType, E, S: Graphable<V, E> + Default> Default for Graph<V, E, S> {
    fn default() -> Self {
        Self {
            storage: S::default(),
            directed: false,
            ty: PhantomData,
        }
    }
}

impl<V, E, S: Clone> Clone for Graph<V, E, S> {
    fn clone(&self) -> Self {
        Self {
            storage: self.storage.clone(),
            directed: self.directed,
            ty: PhantomData,
        }
    }
}

/// Renders the graph in the [list format](ListFormat).
impl<V, E, S> fmt::Display for Graph<V, E, S>
where
    V: VertexType + fmt::Display,
    S: Graphable<V, E>,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for line in ListFormat.lines(self) {
            writeln!(f, "{line}")?;
        }

        Ok(())
    }
}
