mod common;

use common::{random_graph, RANDOM_SEED};
use fastrand::Rng;
use graphva::{
    core::Graphable,
    storage::{AdjList, AdjMatrix},
    Graph,
};

fn main() {
    divan::main();
}

#[divan::bench(consts = [100, 1000], types = [AdjList<u32, f32>, AdjMatrix<u32, f32>], args = [0.05, 0.5, 0.95])]
fn toposort_random<const N: usize, S>(bencher: divan::Bencher, density: f32)
where
    S: Graphable<u32, f32> + Default + Sync,
{
    let graph: Graph<u32, f32, S> =
        random_graph(N, density, true, &mut Rng::with_seed(RANDOM_SEED));

    bencher.bench(|| graph.toposort());
}

#[divan::bench(consts = [100, 1000], types = [AdjList<u32, f32>, AdjMatrix<u32, f32>])]
fn is_cyclic_path<const N: usize, S>(bencher: divan::Bencher)
where
    S: Graphable<u32, f32> + Default + Sync,
{
    let mut graph = Graph::<u32, f32, S>::new_in(S::default(), true);

    graph.extend_with_edges((1..N as u32).map(|v| (v - 1, v, 1.0)));

    bencher.bench(|| graph.is_cyclic());
}
