//! Check whether a directed graph contains a [cycle].
//!
//! [cycle]: https://en.wikipedia.org/wiki/Cycle_(graph_theory)
//!
//! # Examples
//!
//! ```
//! use graphva::{algo::is_cyclic, Graph};
//!
//! let mut graph = Graph::<_, ()>::new_directed();
//!
//! graph.extend_with_edges([("a", "b", ()), ("b", "c", ()), ("c", "d", ())]);
//! assert!(!is_cyclic(&graph));
//!
//! graph.add_edge("d", "a", ());
//! assert!(is_cyclic(&graph));
//! ```

use crate::{
    core::{Graphable, VertexType},
    graph::Graph,
};

use super::toposort::{self, toposort};

/// Returns `true` if the directed graph contains a cycle.
///
/// Undirected graphs are never reported as cyclic. Use
/// [`toposort`](super::toposort()) directly to distinguish an undirected graph
/// from a cyclic one.
pub fn is_cyclic<V, E, S>(graph: &Graph<V, E, S>) -> bool
where
    V: VertexType,
    S: Graphable<V, E>,
{
    if !graph.is_directed() {
        return false;
    }

    match toposort(graph) {
        Ok(_) => false,
        Err(toposort::Error::Cycle { .. }) => true,
        Err(toposort::Error::NotDirected) => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::AdjMatrix;

    #[test]
    fn triangle() {
        let mut graph = Graph::<_, ()>::new_directed();
        graph.extend_with_edges([(1, 2, ()), (2, 3, ())]);

        assert!(!graph.is_cyclic());

        graph.add_edge(3, 1, ());
        assert!(graph.is_cyclic());
    }

    #[test]
    fn self_loop() {
        let mut graph = Graph::<_, (), _>::new_directed_in(AdjMatrix::<i32, ()>::new());
        graph.extend_with_edges([(1, 1, ())]);

        assert!(is_cyclic(&graph));
    }

    #[test]
    fn cycle_in_second_component() {
        let mut graph = Graph::<_, ()>::new_directed();
        graph.extend_with_edges([(1, 2, ()), (3, 4, ()), (4, 5, ()), (5, 3, ())]);

        assert!(graph.is_cyclic());
    }

    #[test]
    fn undirected_never_cyclic() {
        let mut graph = Graph::<_, ()>::new_undirected();
        graph.extend_with_edges([(1, 2, ()), (2, 3, ()), (3, 1, ())]);

        assert!(!graph.is_cyclic());
    }
}
