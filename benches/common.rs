#![allow(dead_code)]

use fastrand::Rng;
use graphva::{core::Graphable, Graph};

pub const RANDOM_SEED: u64 = 0xef6f79ed30ba75a;

/// Generates edges of a random graph with given edge probability, skipping
/// the non-edges geometrically instead of flipping a coin for every pair.
///
/// Every generated edge goes from a higher vertex to a lower one.
pub struct RandomEdges {
    v: usize,
    w: usize,
    n: usize,
    p: f32,
}

impl RandomEdges {
    pub fn new(vertex_count: usize, p: f32) -> Self {
        Self {
            v: 1,
            w: usize::MAX,
            n: vertex_count,
            p,
        }
    }

    pub fn next_edge(&mut self, rng: &mut Rng) -> Option<(u32, u32)> {
        let Self { v, w, n, p } = self;

        if *v >= *n {
            return None;
        }

        let r = rng.f32();
        *w = w.wrapping_add(1) + ((1.0 - r).log10() / (1.0 - *p).log10()).floor() as usize;

        while *w >= *v && *v < *n {
            *w -= *v;
            *v += 1;
        }

        if *v < *n {
            Some((*v as u32, *w as u32))
        } else {
            None
        }
    }
}

pub fn random_graph<S>(
    vertex_count: usize,
    density: f32,
    directed: bool,
    rng: &mut Rng,
) -> Graph<u32, f32, S>
where
    S: Graphable<u32, f32> + Default,
{
    let mut graph = Graph::new_in(S::default(), directed);

    graph.extend_with_vertices(0..vertex_count as u32);

    let mut edges = RandomEdges::new(vertex_count, density);

    while let Some((u, v)) = edges.next_edge(rng) {
        graph.add_edge(u, v, rng.f32());
    }

    graph
}
