//! Check whether all vertices are reachable from a single vertex.
//!
//! The check is a single pre-order depth-first search started from an
//! arbitrary vertex, following outgoing edges. The graph is considered
//! connected if the search reaches every vertex.
//!
//! For undirected graphs, this is the usual notion of connectivity. For
//! directed graphs, it is weaker than strong connectivity and also depends on
//! which vertex is picked as the start: a directed path `a → b → c` is
//! connected when the search starts in `a`, but not when it starts in `c`.
//! The start vertex is unspecified, so callers should not rely on the result
//! for directed graphs that are not strongly connected.
//!
//! # Examples
//!
//! ```
//! use graphva::{algo::is_connected, Graph};
//!
//! let mut graph = Graph::<_, ()>::new_undirected();
//!
//! graph.extend_with_edges([(1, 2, ()), (3, 4, ())]);
//! assert!(!is_connected(graph.storage()));
//!
//! graph.add_edge(2, 3, ());
//! assert!(is_connected(graph.storage()));
//! ```

use crate::{
    core::{Graphable, VertexType},
    visit::{Dfs, Order, Search},
};

/// Returns `true` if a depth-first search from an arbitrary vertex visits all
/// vertices. An empty graph is not connected.
pub fn is_connected<V, E, G>(graph: &G) -> bool
where
    V: VertexType,
    G: Graphable<V, E>,
{
    let Some(start) = graph.vertices().next() else {
        return false;
    };

    let mut dfs = Dfs::new(graph, Order::Pre, |_: &V| {});
    dfs.search(start);

    dfs.visited_count() == graph.vertex_count()
}
