//! Find a [topologically sorted] collection of vertices on a [directed acyclic
//! graph] (DAG).
//!
//! The sort is a depth-first traversal started from every vertex that has not
//! been finished yet, so disconnected graphs are covered entirely. Every
//! vertex is in one of three states: unvisited, in progress (on the current
//! path) or done. An edge leading into an in-progress vertex closes a cycle
//! and aborts the sort. Otherwise, the vertices in reverse order of being
//! done form a topological order.
//!
//! The exact order in which the vertices are reported depends on the vertex
//! and adjacency enumeration order of the storage. It is deterministic for a
//! given storage state, but should not be relied upon otherwise.
//!
//! [topologically sorted]: https://en.wikipedia.org/wiki/Topological_sorting
//! [directed acyclic graph]:
//!     https://en.wikipedia.org/wiki/Directed_acyclic_graph
//!
//! # Examples
//!
//! ```
//! use graphva::{algo::toposort, Graph};
//!
//! let mut dependency_tree = Graph::<_, ()>::new_directed();
//!
//! // Edge direction in "must be compiled before" relation.
//! dependency_tree.extend_with_edges([
//!     ("cargo_credential", "cargo", ()),
//!     ("serde", "cargo_credential", ()),
//!     ("serde_json", "cargo_credential", ()),
//!     ("serde", "serde_json", ()),
//!     ("time", "cargo_credential", ()),
//!     ("libc", "time", ()),
//!     ("serde", "time", ()),
//!     ("cargo_util", "cargo", ()),
//!     ("libc", "cargo_util", ()),
//! ]);
//!
//! for package in toposort(&dependency_tree).unwrap() {
//!     // Compile package
//! }
//! ```

use fixedbitset::FixedBitSet;
use rustc_hash::FxHashMap;
use thiserror::Error;

use crate::{
    core::{Graphable, VertexType},
    graph::Graph,
    visit::VisitSet,
};

/// The error encountered during a [`toposort`] run.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error<V> {
    /// Topological order is defined only for directed graphs.
    #[error("graph is undirected")]
    NotDirected,

    /// The graph contains a cycle.
    ///
    /// Graphs with cycles don't have a topological order. The reported edge
    /// is the one that closed the cycle.
    #[error("graph contains cycle through edge {from:?} -> {to:?}")]
    Cycle { from: V, to: V },
}

/// Returns the vertices of a directed graph in topological order, that is,
/// for every edge `a → b`, `a` precedes `b`.
pub fn toposort<V, E, S>(graph: &Graph<V, E, S>) -> Result<Vec<V>, Error<V>>
where
    V: VertexType,
    S: Graphable<V, E>,
{
    if !graph.is_directed() {
        log::debug!("topological sort refused on undirected graph");
        return Err(Error::NotDirected);
    }

    let storage = graph.storage();

    let vertices = storage.vertices().collect::<Vec<_>>();
    let indices = vertices
        .iter()
        .enumerate()
        .map(|(index, vertex)| (*vertex, index))
        .collect::<FxHashMap<_, _>>();

    let mut in_progress = FixedBitSet::with_capacity(vertices.len());
    let mut done = FixedBitSet::with_capacity(vertices.len());
    let mut finished = Vec::with_capacity(vertices.len());
    let mut stack = Vec::new();

    for (root, vertex) in vertices.iter().enumerate() {
        if done.is_visited(&root) {
            continue;
        }

        in_progress.visit(root);
        stack.push((root, storage.adjacent(vertex)));

        while let Some((current, neighbors)) = stack.last_mut() {
            let current = *current;

            match neighbors.next() {
                Some(next) => {
                    let Some(&next_index) = indices.get(next) else {
                        continue;
                    };

                    if done.is_visited(&next_index) {
                        continue;
                    }

                    if in_progress.is_visited(&next_index) {
                        log::debug!(
                            "topological sort found cycle through edge {:?} -> {:?}",
                            vertices[current],
                            next
                        );

                        return Err(Error::Cycle {
                            from: vertices[current].clone(),
                            to: next.clone(),
                        });
                    }

                    in_progress.visit(next_index);
                    stack.push((next_index, storage.adjacent(next)));
                }
                None => {
                    stack.pop();
                    done.visit(current);
                    finished.push(vertices[current].clone());
                }
            }
        }
    }

    finished.reverse();
    Ok(finished)
}
