use std::collections::BTreeSet;

use thiserror::Error;

use crate::{
    core::{marker::Direction, Graphable, VertexType},
    graph::Graph,
};

pub fn create_complete<S>(vertex_count: usize, directed: bool) -> Graph<usize, (), S>
where
    S: Graphable<usize, ()> + Default,
{
    let mut graph = Graph::new_in(S::default(), directed);

    graph.extend_with_vertices(0..vertex_count);

    for u in 0..vertex_count {
        for v in 0..vertex_count {
            if u == v {
                continue;
            }

            if !directed && v > u {
                break;
            }

            graph.add_edge(u, v, ());
        }
    }

    graph
}

pub fn create_path<S>(vertex_count: usize, directed: bool) -> Graph<usize, (), S>
where
    S: Graphable<usize, ()> + Default,
{
    let mut graph = Graph::new_in(S::default(), directed);

    graph.extend_with_vertices(0..vertex_count);

    for v in 1..vertex_count {
        graph.add_edge(v - 1, v, ());
    }

    graph
}

fn degree_dir(dir: Direction) -> &'static str {
    match dir {
        Direction::Outgoing => "out",
        Direction::Incoming => "in",
    }
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConsistencyCheckError {
    #[error("vertices iterator count ({0}) is not equal to vertex count ({1})")]
    VerticesVertexCountMismatch(usize, usize),
    #[error("edges iterator count ({0}) is not equal to edge count ({1})")]
    EdgesEdgeCountMismatch(usize, usize),
    #[error("edge {0} references a vertex that does not exist")]
    DanglingEdge(String),
    #[error("edge {0} is not found by a lookup of its endpoints")]
    EdgeLookupMismatch(String),
    #[error("adjacent count ({0}) of vertex {2} is not equal to its out-degree ({1})")]
    AdjacentOutDegreeMismatch(usize, usize, String),
    #[error("sum of {} degrees ({0}) is not equal to edge count ({1})", degree_dir(*.2))]
    HandshakingLemmaDirected(usize, usize, Direction),
    #[error("edge {0} does not have its mirror")]
    MissingMirror(String),
}

pub fn check_consistency<V, E, G>(graph: &G) -> Result<(), ConsistencyCheckError>
where
    V: VertexType,
    G: Graphable<V, E>,
{
    fn cmp<F, E>(actual: usize, expected: usize, error: F) -> Result<(), E>
    where
        F: FnOnce(usize, usize) -> E,
    {
        if actual == expected {
            Ok(())
        } else {
            Err(error(actual, expected))
        }
    }

    cmp(
        graph.vertices().count(),
        graph.vertex_count(),
        ConsistencyCheckError::VerticesVertexCountMismatch,
    )?;

    let edge_count = graph.edge_count();

    cmp(
        graph.edges().count(),
        edge_count,
        ConsistencyCheckError::EdgesEdgeCountMismatch,
    )?;

    for edge in graph.edges() {
        let (from, to) = edge.endpoints();

        if !graph.contains_vertex(from) || !graph.contains_vertex(to) {
            return Err(ConsistencyCheckError::DanglingEdge(format!("{from:?} -> {to:?}")));
        }

        let found = graph
            .edge(from, to)
            .map_or(false, |found| found.endpoints() == (from, to));

        if !found {
            return Err(ConsistencyCheckError::EdgeLookupMismatch(format!(
                "{from:?} -> {to:?}"
            )));
        }
    }

    for vertex in graph.vertices() {
        let out_degree = graph.out_degree(vertex);

        cmp(graph.adjacent(vertex).count(), out_degree, |actual, expected| {
            let vertex = format!("{vertex:?}");
            ConsistencyCheckError::AdjacentOutDegreeMismatch(actual, expected, vertex)
        })?;
    }

    fn handshaking_lemma_directed(
        dir: Direction,
    ) -> impl FnOnce(usize, usize) -> ConsistencyCheckError {
        move |actual, expected| {
            ConsistencyCheckError::HandshakingLemmaDirected(actual, expected, dir)
        }
    }

    // https://en.wikipedia.org/wiki/Handshaking_lemma
    for dir in Direction::all() {
        let deg_sum = graph
            .vertices()
            .map(|vertex| graph.degree_directed(vertex, dir))
            .sum::<usize>();

        cmp(deg_sum, edge_count, handshaking_lemma_directed(dir))?;
    }

    Ok(())
}

/// Checks that every edge has its mirror, as required in undirected graphs.
pub fn check_symmetry<V, E, G>(graph: &G) -> Result<(), ConsistencyCheckError>
where
    V: VertexType,
    G: Graphable<V, E>,
{
    match graph
        .edges()
        .find(|edge| !graph.contains_edge(edge.to(), edge.from()))
    {
        Some(edge) => Err(ConsistencyCheckError::MissingMirror(format!(
            "{:?} -> {:?}",
            edge.from(),
            edge.to()
        ))),
        None => Ok(()),
    }
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum EquivalenceCheckError {
    #[error("vertex counts differ ({0} vs {1})")]
    VertexCount(usize, usize),
    #[error("edge counts differ ({0} vs {1})")]
    EdgeCount(usize, usize),
    #[error("vertex {0} is present only in one of the graphs")]
    Vertex(String),
    #[error("edge {0} is present only in one of the graphs or with different labels")]
    Edge(String),
    #[error("adjacent vertices of {0} differ")]
    Adjacent(String),
    #[error("{} degrees of {0} differ", degree_dir(*.1))]
    Degree(String, Direction),
}

/// Checks that two storages hold the same graph, regardless of their
/// representation.
pub fn check_equivalence<V, E, G1, G2>(lhs: &G1, rhs: &G2) -> Result<(), EquivalenceCheckError>
where
    V: VertexType,
    E: PartialEq,
    G1: Graphable<V, E>,
    G2: Graphable<V, E>,
{
    if lhs.vertex_count() != rhs.vertex_count() {
        return Err(EquivalenceCheckError::VertexCount(
            lhs.vertex_count(),
            rhs.vertex_count(),
        ));
    }

    if lhs.edge_count() != rhs.edge_count() {
        return Err(EquivalenceCheckError::EdgeCount(
            lhs.edge_count(),
            rhs.edge_count(),
        ));
    }

    if let Some(vertex) = lhs.vertices().find(|vertex| !rhs.contains_vertex(vertex)) {
        return Err(EquivalenceCheckError::Vertex(format!("{vertex:?}")));
    }

    for from in lhs.vertices() {
        for to in lhs.vertices() {
            let same = match (lhs.edge(from, to), rhs.edge(from, to)) {
                (Some(lhs), Some(rhs)) => lhs.label() == rhs.label(),
                (None, None) => true,
                _ => false,
            };

            if !same {
                return Err(EquivalenceCheckError::Edge(format!("{from:?} -> {to:?}")));
            }
        }

        let adjacent_lhs = lhs.adjacent(from).collect::<BTreeSet<_>>();
        let adjacent_rhs = rhs.adjacent(from).collect::<BTreeSet<_>>();

        if adjacent_lhs != adjacent_rhs {
            return Err(EquivalenceCheckError::Adjacent(format!("{from:?}")));
        }

        for dir in Direction::all() {
            if lhs.degree_directed(from, dir) != rhs.degree_directed(from, dir) {
                return Err(EquivalenceCheckError::Degree(format!("{from:?}"), dir));
            }
        }
    }

    Ok(())
}
