//! Strategies generating random graphs for property-based tests.
//!
//! Vertices are `0..n` for a random `n` up to the given maximum. Edges are
//! drawn uniformly among these vertices, self-loops included.

use proptest::{collection::vec, prelude::*};

use crate::graph::Graph;

type Structure = (u32, Vec<(u32, u32, u8)>);

fn structure(max_vertices: u32) -> impl Strategy<Value = Structure> {
    (0..=max_vertices).prop_flat_map(|n| {
        // The vertex range must not be empty, but no edge is generated for an
        // empty graph anyway.
        let bound = n.max(1);
        let edges = vec((0..bound, 0..bound, any::<u8>()), 0..=2 * n as usize);

        (Just(n), edges)
    })
}

fn build((n, edges): Structure, directed: bool) -> Graph<u32, u8> {
    let mut graph = if directed {
        Graph::new_directed()
    } else {
        Graph::new_undirected()
    };

    graph.extend_with_vertices(0..n);

    for (from, to, label) in edges {
        graph.add_edge(from, to, label);
    }

    graph
}

pub fn graph_directed(max_vertices: u32) -> impl Strategy<Value = Graph<u32, u8>> {
    structure(max_vertices).prop_map(|structure| build(structure, true))
}

/// Directed graphs whose edges always go from a lower vertex to a higher one.
pub fn graph_directed_acyclic(max_vertices: u32) -> impl Strategy<Value = Graph<u32, u8>> {
    structure(max_vertices).prop_map(|(n, edges)| {
        let edges = edges
            .into_iter()
            .filter(|(from, to, _)| from != to)
            .map(|(from, to, label)| (from.min(to), from.max(to), label))
            .collect();

        build((n, edges), true)
    })
}

pub fn graph_undirected(max_vertices: u32) -> impl Strategy<Value = Graph<u32, u8>> {
    structure(max_vertices).prop_map(|structure| build(structure, false))
}
