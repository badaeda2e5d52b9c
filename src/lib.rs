//! Directed and undirected graphs over interchangeable storages.
//!
//! A [`Graph`] is a thin facade over a storage implementing the
//! [`Graphable`](core::Graphable) contract. Two storages are provided,
//! [`AdjList`](storage::AdjList) (the default) and
//! [`AdjMatrix`](storage::AdjMatrix). The facade adds the directedness on top:
//! an undirected graph stores every edge in both directions.
//!
//! # Examples
//!
//! ```
//! use graphva::{storage::AdjMatrix, visit::Order, Graph};
//!
//! let mut graph = Graph::new_directed_in(AdjMatrix::new());
//!
//! graph.extend_with_edges([("shirt", "tie", ()), ("tie", "jacket", ())]);
//! graph.add_vertex("socks");
//!
//! assert_eq!(graph.toposort().map(|order| order.len()), Ok(4));
//! assert!(!graph.is_cyclic());
//! assert!(!graph.is_connected());
//!
//! let mut visited = Vec::new();
//! graph.dfs(&"shirt", Order::Pre, |v| visited.push(*v));
//! assert_eq!(visited, vec!["shirt", "tie", "jacket"]);
//! ```

pub mod algo;
pub mod common;
pub mod core;
pub mod export;
pub mod graph;
pub mod infra;
pub mod storage;
pub mod visit;

#[doc(inline)]
pub use graph::Graph;

pub mod prelude {
    pub use crate::{
        core::{Direction, Edge, Graphable},
        export::Export,
        graph::Graph,
        storage::{AdjList, AdjMatrix},
        visit::{Order, Search},
    };
}
