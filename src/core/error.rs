use std::fmt;

use thiserror::Error;

use super::edge::Edge;

/// Edge insertion was rejected because an endpoint is not in the graph.
///
/// The rejected edge is handed back so the caller keeps ownership of its
/// label. The storage is left exactly as it was before the call.
#[derive(Debug, Error, PartialEq)]
#[error("adding edge failed: {kind}")]
pub struct AddEdgeError<V, E> {
    pub edge: Edge<V, E>,
    pub kind: AddEdgeErrorKind,
}

impl<V, E> AddEdgeError<V, E> {
    pub fn new(edge: Edge<V, E>, kind: AddEdgeErrorKind) -> Self {
        Self { edge, kind }
    }

    pub fn into_edge(self) -> Edge<V, E> {
        self.edge
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AddEdgeErrorKind {
    SourceAbsent,
    DestinationAbsent,
}

impl fmt::Display for AddEdgeErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let reason = match self {
            AddEdgeErrorKind::SourceAbsent => "source does not exist",
            AddEdgeErrorKind::DestinationAbsent => "destination does not exist",
        };
        f.write_str(reason)
    }
}

/// A bounded auxiliary structure (such as a priority queue used by weighted
/// algorithms layered on top of a graph) ran out of capacity.
///
/// The graph core never produces this error itself.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[error("heap at capacity ({capacity})")]
pub struct CapacityError {
    pub capacity: usize,
}

impl CapacityError {
    pub fn new(capacity: usize) -> Self {
        Self { capacity }
    }
}
