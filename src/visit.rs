//! Graph traversals with a per-vertex callback.
//!
//! A search is constructed from a storage and a callback. Calling
//! [`search`](Search::search) traverses everything reachable from the given
//! vertex along outgoing edges and invokes the callback exactly once for every
//! vertex it visits. Vertices visited by an earlier `search` on the same
//! instance are not visited again, so calling `search` for several start
//! vertices covers a union of their reachable sets.
//!
//! All traversal implementations in this module are **iterative**, that is,
//! they don't use recursion and are not limited by the size of the program
//! stack.
//!
//! Neighbors are discovered in the adjacency enumeration order of the storage.
//! That order is unspecified and should not be relied upon.
//!
//! Starting a search from a vertex that is not in the graph visits nothing.
//!
//! # Examples
//!
//! ```
//! use graphva::{
//!     visit::{Dfs, Order, Search},
//!     Graph,
//! };
//!
//! let mut graph = Graph::<_, ()>::new_directed();
//!
//! graph.extend_with_vertices([1, 2, 3]);
//! graph.extend_with_edges([(1, 2, ()), (2, 3, ())]);
//!
//! let mut post_order = Vec::new();
//! Dfs::new(graph.storage(), Order::Post, |v: &i32| post_order.push(*v)).search(&1);
//!
//! assert_eq!(post_order, vec![3, 2, 1]);
//! ```

pub mod bfs;
pub mod dfs;

pub(crate) mod raw;
mod visit_set;

#[doc(inline)]
pub use self::{
    bfs::Bfs,
    dfs::{Dfs, Order},
    visit_set::VisitSet,
};

/// Common interface of the traversal implementations.
pub trait Search<V> {
    /// Traverses the graph from given vertex, invoking the callback for every
    /// newly visited vertex.
    fn search(&mut self, start: &V);

    fn is_visited(&self, vertex: &V) -> bool;

    /// Marks the vertex as visited without invoking the callback.
    ///
    /// Returns `true` if the vertex was not visited before. Marking an already
    /// visited vertex has no effect. A vertex marked before a search acts as a
    /// barrier that the search does not pass through.
    fn visit(&mut self, vertex: V) -> bool;

    /// Returns the number of vertices visited so far.
    fn visited_count(&self) -> usize;

    /// Forgets all visited vertices.
    fn reset(&mut self);
}
