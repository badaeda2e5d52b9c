//! Human-readable renderings of a graph.
//!
//! An exporter only needs read access to the graph: its vertices, the
//! adjacency of each vertex and whether it is directed. Vertices are written
//! in ascending order so that the output does not depend on the storage.

use std::{
    fmt::Display,
    io::{self, Write},
};

use rustc_hash::FxHashMap;

use crate::{
    core::{Graphable, VertexType},
    graph::Graph,
};

pub trait Export<G> {
    fn export<W: Write>(&self, graph: &G, out: &mut W) -> io::Result<()>;

    fn to_string(&self, graph: &G) -> String {
        let mut buf = Vec::new();
        self.export(graph, &mut buf).expect("writing to vec does not fail");

        String::from_utf8(buf).expect("exported format is text format")
    }
}

/// One line per vertex, listing its adjacent vertices.
///
/// Directed graphs use `v → a, b`, undirected graphs use `v : a, b`.
#[derive(Debug, Clone, Copy, Default)]
pub struct ListFormat;

impl ListFormat {
    pub fn lines<V, E, S>(&self, graph: &Graph<V, E, S>) -> Vec<String>
    where
        V: VertexType + Display,
        S: Graphable<V, E>,
    {
        let separator = if graph.is_directed() { " → " } else { " : " };

        let mut vertices = graph.vertices().collect::<Vec<_>>();
        vertices.sort_unstable();

        vertices
            .into_iter()
            .map(|vertex| {
                let mut adjacent = graph.adjacent(vertex).collect::<Vec<_>>();
                adjacent.sort_unstable();

                let adjacent = adjacent
                    .iter()
                    .map(ToString::to_string)
                    .collect::<Vec<_>>()
                    .join(", ");

                format!("{vertex}{separator}{adjacent}")
            })
            .collect()
    }
}

impl<V, E, S> Export<Graph<V, E, S>> for ListFormat
where
    V: VertexType + Display,
    S: Graphable<V, E>,
{
    fn export<W: Write>(&self, graph: &Graph<V, E, S>, out: &mut W) -> io::Result<()> {
        for line in self.lines(graph) {
            writeln!(out, "{line}")?;
        }

        Ok(())
    }
}

/// [Graphviz](https://graphviz.org/) DOT language.
///
/// Mirrored edges of an undirected graph are written once.
pub struct Dot<V, E> {
    name: String,
    get_vertex_label: Box<dyn Fn(&V) -> String>,
    get_edge_label: Box<dyn Fn(&E) -> String>,
}

impl<V, E> Dot<V, E> {
    pub fn new<FV, FE>(name: Option<String>, get_vertex_label: FV, get_edge_label: FE) -> Self
    where
        FV: Fn(&V) -> String + 'static,
        FE: Fn(&E) -> String + 'static,
    {
        Self {
            name: name.unwrap_or_else(|| String::from("G")),
            get_vertex_label: Box::new(get_vertex_label),
            get_edge_label: Box::new(get_edge_label),
        }
    }
}

impl<V: Display, E: Display> Dot<V, E> {
    pub fn with_display(name: Option<String>) -> Self {
        Self::new(name, |v| format!("{v}"), |e| format!("{e}"))
    }
}

impl<V, E, S> Export<Graph<V, E, S>> for Dot<V, E>
where
    V: VertexType,
    S: Graphable<V, E>,
{
    fn export<W: Write>(&self, graph: &Graph<V, E, S>, out: &mut W) -> io::Result<()> {
        let (keyword, line) = if graph.is_directed() {
            ("digraph", "->")
        } else {
            ("graph", "--")
        };

        writeln!(out, "{keyword} {} {{", self.name)?;

        let mut vertices = graph.vertices().collect::<Vec<_>>();
        vertices.sort_unstable();

        let indexer = vertices
            .iter()
            .enumerate()
            .map(|(index, vertex)| (*vertex, index))
            .collect::<FxHashMap<_, _>>();

        for (index, vertex) in vertices.iter().enumerate() {
            writeln!(
                out,
                "    v{index} [label={:?}];",
                (self.get_vertex_label)(vertex)
            )?;
        }

        for vertex in vertices.iter() {
            let mut edges = graph.edges_from(vertex).collect::<Vec<_>>();
            edges.sort_unstable_by(|lhs, rhs| lhs.to().cmp(rhs.to()));

            for edge in edges {
                if !graph.is_directed() && edge.to() < edge.from() {
                    continue;
                }

                writeln!(
                    out,
                    "    v{} {line} v{} [label={:?}];",
                    indexer[edge.from()],
                    indexer[edge.to()],
                    (self.get_edge_label)(edge.label())
                )?;
            }
        }

        writeln!(out, "}}")?;

        Ok(())
    }
}
