use std::slice;

use rustc_hash::FxHashMap;

use crate::{
    common::matrix::Matrix,
    core::{
        error::{AddEdgeError, AddEdgeErrorKind},
        marker::Direction,
        Edge, Graphable, VertexType,
    },
};

/// Adjacency matrix storage.
///
/// Vertices are assigned dense indices `0..vertex_count` in insertion order.
/// The edge from `a` to `b` lives in the cell at row `index(a)` and column
/// `index(b)`. Removing a vertex moves the last vertex into the freed index,
/// so the index space stays compact.
#[derive(Debug, Clone)]
pub struct AdjMatrix<V, E> {
    matrix: Matrix<Edge<V, E>>,
    vertices: Vec<V>,
    indices: FxHashMap<V, usize>,
    n_edges: usize,
}

impl<V, E> AdjMatrix<V, E> {
    pub fn new() -> Self {
        Self::with_capacity(8)
    }

    pub fn with_capacity(vertex_capacity: usize) -> Self {
        Self {
            matrix: Matrix::with_capacity(vertex_capacity),
            vertices: Vec::with_capacity(vertex_capacity),
            indices: FxHashMap::with_capacity_and_hasher(vertex_capacity, Default::default()),
            n_edges: 0,
        }
    }

    /// Returns the number of vertices the storage can hold without
    /// reallocating the matrix.
    pub fn capacity(&self) -> usize {
        self.matrix.capacity()
    }
}

impl<V: VertexType, E> AdjMatrix<V, E> {
    /// Returns the current dense index of the vertex.
    ///
    /// The index of a vertex may change when another vertex is removed.
    pub fn index_of(&self, vertex: &V) -> Option<usize> {
        self.indices.get(vertex).copied()
    }
}

impl<V, E> Default for AdjMatrix<V, E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V: VertexType, E> Graphable<V, E> for AdjMatrix<V, E> {
    type VerticesIter<'a> = slice::Iter<'a, V>
    where
        Self: 'a,
        V: 'a;

    type AdjacentIter<'a> = AdjacentIter<'a, V, E>
    where
        Self: 'a,
        V: 'a;

    type EdgesIter<'a> = EdgesIter<'a, V, E>
    where
        Self: 'a,
        V: 'a,
        E: 'a;

    type EdgesFromIter<'a> = EdgesFromIter<'a, V, E>
    where
        Self: 'a,
        V: 'a,
        E: 'a;

    fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    fn vertices(&self) -> Self::VerticesIter<'_> {
        self.vertices.iter()
    }

    fn contains_vertex(&self, vertex: &V) -> bool {
        self.indices.contains_key(vertex)
    }

    fn add_vertex(&mut self, vertex: V) -> bool {
        if self.indices.contains_key(&vertex) {
            return false;
        }

        let index = self.vertices.len();
        self.matrix.ensure_capacity(index + 1);
        self.indices.insert(vertex.clone(), index);
        self.vertices.push(vertex);
        true
    }

    fn remove_vertex(&mut self, vertex: &V) -> bool {
        let Some(index) = self.indices.remove(vertex) else {
            return false;
        };

        // Remove incident edges.
        for i in 0..self.vertices.len() {
            if self.matrix.remove(index, i).is_some() {
                self.n_edges -= 1;
            }

            if self.matrix.remove(i, index).is_some() {
                self.n_edges -= 1;
            }
        }

        self.vertices.swap_remove(index);

        // Relocate the edges of the last vertex, if it is going to replace the
        // removed vertex.
        if index < self.vertices.len() {
            let last = self.vertices.len();

            log::trace!("relocating matrix row and column {} to {}", last, index);

            for i in 0..last {
                self.matrix.relocate((last, i), (index, i));
                self.matrix.relocate((i, last), (i, index));
            }

            // Handle self-loops.
            self.matrix.relocate((last, last), (index, index));

            if let Some(moved) = self.indices.get_mut(&self.vertices[index]) {
                *moved = index;
            }
        }

        true
    }

    fn adjacent(&self, vertex: &V) -> Self::AdjacentIter<'_> {
        AdjacentIter {
            inner: self.edges_from(vertex),
        }
    }

    fn edge_count(&self) -> usize {
        self.n_edges
    }

    fn edges(&self) -> Self::EdgesIter<'_> {
        EdgesIter {
            matrix: &self.matrix,
            len: self.vertices.len(),
            row: 0,
            col: 0,
        }
    }

    fn edges_from(&self, vertex: &V) -> Self::EdgesFromIter<'_> {
        EdgesFromIter {
            matrix: &self.matrix,
            len: self.vertices.len(),
            row: self.index_of(vertex),
            col: 0,
        }
    }

    fn edge(&self, from: &V, to: &V) -> Option<&Edge<V, E>> {
        let row = self.index_of(from)?;
        let col = self.index_of(to)?;
        self.matrix.get(row, col)
    }

    fn try_add_edge(
        &mut self,
        edge: Edge<V, E>,
    ) -> Result<Option<Edge<V, E>>, AddEdgeError<V, E>> {
        let Some(row) = self.index_of(edge.from()) else {
            log::debug!("rejected edge {:?} -> {:?}: source absent", edge.from(), edge.to());
            return Err(AddEdgeError::new(edge, AddEdgeErrorKind::SourceAbsent));
        };

        let Some(col) = self.index_of(edge.to()) else {
            log::debug!(
                "rejected edge {:?} -> {:?}: destination absent",
                edge.from(),
                edge.to()
            );
            return Err(AddEdgeError::new(edge, AddEdgeErrorKind::DestinationAbsent));
        };

        let replaced = self.matrix.insert(row, col, edge);

        if replaced.is_none() {
            self.n_edges += 1;
        }

        Ok(replaced)
    }

    fn remove_edge(&mut self, from: &V, to: &V) -> Option<Edge<V, E>> {
        let row = self.index_of(from)?;
        let col = self.index_of(to)?;
        let edge = self.matrix.remove(row, col)?;
        self.n_edges -= 1;
        Some(edge)
    }

    fn degree_directed(&self, vertex: &V, dir: Direction) -> usize {
        let Some(index) = self.index_of(vertex) else {
            return 0;
        };

        let len = self.vertices.len();

        match dir {
            Direction::Outgoing => (0..len)
                .filter(|&col| self.matrix.get(index, col).is_some())
                .count(),
            Direction::Incoming => (0..len)
                .filter(|&row| self.matrix.get(row, index).is_some())
                .count(),
        }
    }

    fn clear(&mut self) {
        self.matrix.clear();
        self.vertices.clear();
        self.indices.clear();
        self.n_edges = 0;
    }

    fn clear_edges(&mut self) {
        self.matrix.clear();
        self.n_edges = 0;
    }
}

/// Lazy row-major scan over all edges of an [`AdjMatrix`].
///
/// The cursor always points at the next cell to inspect, so the iterator does
/// no work until asked for the next edge. An exhausted iterator stays
/// exhausted, a new scan needs a new call to
/// [`edges`](Graphable::edges). The borrow of the storage rules out mutation
/// during the scan.
pub struct EdgesIter<'a, V, E> {
    matrix: &'a Matrix<Edge<V, E>>,
    len: usize,
    row: usize,
    col: usize,
}

impl<'a, V, E> Iterator for EdgesIter<'a, V, E> {
    type Item = &'a Edge<V, E>;

    fn next(&mut self) -> Option<Self::Item> {
        while self.row < self.len {
            while self.col < self.len {
                let col = self.col;
                self.col += 1;

                if let Some(edge) = self.matrix.get(self.row, col) {
                    return Some(edge);
                }
            }

            self.row += 1;
            self.col = 0;
        }

        None
    }
}

/// Lazy scan over a single row of an [`AdjMatrix`].
pub struct EdgesFromIter<'a, V, E> {
    matrix: &'a Matrix<Edge<V, E>>,
    len: usize,
    row: Option<usize>,
    col: usize,
}

impl<'a, V, E> Iterator for EdgesFromIter<'a, V, E> {
    type Item = &'a Edge<V, E>;

    fn next(&mut self) -> Option<Self::Item> {
        let row = self.row?;

        while self.col < self.len {
            let col = self.col;
            self.col += 1;

            if let Some(edge) = self.matrix.get(row, col) {
                return Some(edge);
            }
        }

        None
    }
}

pub struct AdjacentIter<'a, V, E> {
    inner: EdgesFromIter<'a, V, E>,
}

impl<'a, V, E> Iterator for AdjacentIter<'a, V, E> {
    type Item = &'a V;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(Edge::to)
    }
}
