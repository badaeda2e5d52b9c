use std::fmt;

use arbitrary::{Arbitrary, Unstructured};

use crate::{
    core::{Graphable, VertexType},
    graph::Graph,
};

/// Position in the sorted list of the graph's current vertices, taken
/// modulo the vertex count.
#[derive(Debug, Arbitrary, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Index(pub usize);

impl Index {
    pub fn get(&self, m: usize) -> Option<usize> {
        if m > 0 {
            Some(self.0 % m)
        } else {
            None
        }
    }

    fn pick<V: Clone>(&self, vertices: &[V]) -> Option<V> {
        self.get(vertices.len()).map(|i| vertices[i].clone())
    }
}

#[derive(Debug, Arbitrary, Clone)]
pub enum MutOp<V, E> {
    AddVertex(V),
    RemoveVertex(Index),
    Clear,
    AddEdge(Index, Index, E),
    RemoveEdge(Index, Index),
    ClearEdges,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MutOpResult<V, E> {
    AddVertex(bool),
    RemoveVertex(Option<V>),
    Clear,
    AddEdge(Option<(V, V, Option<E>)>),
    RemoveEdge(Option<E>),
    ClearEdges,
}

fn sorted_vertices<V, E, S>(graph: &Graph<V, E, S>) -> Vec<V>
where
    V: VertexType,
    S: Graphable<V, E>,
{
    let mut vertices = graph.vertices().cloned().collect::<Vec<_>>();
    vertices.sort_unstable();
    vertices
}

impl<V: VertexType, E: Clone> MutOp<V, E> {
    /// Applies the operation on the graph.
    ///
    /// Vertices are resolved through the sorted list of current vertices so
    /// that the same sequence produces the same graph in every storage. Edge
    /// operations on a graph without vertices do nothing.
    pub fn apply<S>(self, graph: &mut Graph<V, E, S>) -> MutOpResult<V, E>
    where
        S: Graphable<V, E>,
    {
        match self {
            MutOp::AddVertex(vertex) => MutOpResult::AddVertex(graph.add_vertex(vertex)),
            MutOp::RemoveVertex(index) => {
                let removed = index
                    .pick(&sorted_vertices(graph))
                    .filter(|vertex| graph.remove_vertex(vertex));
                MutOpResult::RemoveVertex(removed)
            }
            MutOp::Clear => {
                graph.clear();
                MutOpResult::Clear
            }
            MutOp::AddEdge(from, to, label) => {
                let vertices = sorted_vertices(graph);
                let added = from.pick(&vertices).zip(to.pick(&vertices)).map(|(from, to)| {
                    let replaced = graph.add_edge(from.clone(), to.clone(), label);
                    (from, to, replaced)
                });
                MutOpResult::AddEdge(added)
            }
            MutOp::RemoveEdge(from, to) => {
                let vertices = sorted_vertices(graph);
                let removed = from
                    .pick(&vertices)
                    .zip(to.pick(&vertices))
                    .and_then(|(from, to)| graph.remove_edge(&from, &to));
                MutOpResult::RemoveEdge(removed)
            }
            MutOp::ClearEdges => {
                graph.clear_edges();
                MutOpResult::ClearEdges
            }
        }
    }
}

pub struct MutOpsSeq<V, E>(pub Vec<MutOp<V, E>>);

impl<V, E> IntoIterator for MutOpsSeq<V, E> {
    type Item = MutOp<V, E>;
    type IntoIter = std::vec::IntoIter<MutOp<V, E>>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<V: VertexType, E: Clone + fmt::Debug> MutOpsSeq<V, E> {
    /// Applies the sequence and prints the equivalent calls on concrete
    /// vertices, so that a fuzz finding can be turned into a regular test.
    pub fn replay<S>(self, graph: &mut Graph<V, E, S>)
    where
        S: Graphable<V, E>,
    {
        println!("let mut graph; // directed: {}", graph.is_directed());
        println!();

        for op in self {
            let vertices = sorted_vertices(graph);

            match &op {
                MutOp::AddVertex(vertex) => println!("graph.add_vertex({vertex:?});"),
                MutOp::RemoveVertex(index) => {
                    if let Some(vertex) = index.pick(&vertices) {
                        println!("graph.remove_vertex(&{vertex:?});");
                    }
                }
                MutOp::Clear => println!("graph.clear();"),
                MutOp::AddEdge(from, to, label) => {
                    if let Some((from, to)) = from.pick(&vertices).zip(to.pick(&vertices)) {
                        println!("graph.add_edge({from:?}, {to:?}, {label:?});");
                    }
                }
                MutOp::RemoveEdge(from, to) => {
                    if let Some((from, to)) = from.pick(&vertices).zip(to.pick(&vertices)) {
                        println!("graph.remove_edge(&{from:?}, &{to:?});");
                    }
                }
                MutOp::ClearEdges => println!("graph.clear_edges();"),
            }

            op.apply(graph);
        }

        println!();
        println!("check_consistency(graph.storage()).unwrap();");
    }
}

impl<V: fmt::Debug, E: fmt::Debug> fmt::Debug for MutOpsSeq<V, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "MutOpsSeq(vec![")?;

        for op in self.0.iter() {
            writeln!(f, "    MutOp::{:?},", op)?;
        }

        writeln!(f, "])")?;
        writeln!(f, ".replay(&mut graph);")?;
        writeln!(f)?;
        writeln!(f, "// use `cargo test fuzz_replay_mut_ops_seq`")
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
enum OpKind {
    AddVertex,
    AddEdge,
    RemoveVertex,
    RemoveEdge,
    Clear,
    ClearEdges,
}

/// Relative likelihood of every operation kind at one point of a sequence.
#[derive(Debug, Clone, Copy)]
struct OpWeights([(OpKind, f64); 6]);

impl OpWeights {
    /// `vertex_fill` and `edge_fill` say how close the graph is to its target
    /// size, `progress` how much of the input has been consumed. All are in
    /// `0..=1`.
    fn new(vertex_fill: f64, edge_fill: f64, progress: f64) -> Self {
        // Growth dominates early, churn takes over as the graph fills up and
        // the input runs out. Edges keep being added longer than vertices.
        let vertex_pressure = (vertex_fill + progress) / 2.0;
        let edge_pressure = (2.0 * edge_fill + progress) / 3.0;

        Self([
            (OpKind::AddVertex, 1.0 - 0.8 * vertex_pressure),
            (OpKind::AddEdge, 1.0 - 0.7 * edge_pressure),
            (OpKind::RemoveVertex, 0.3 * vertex_pressure),
            (OpKind::RemoveEdge, 0.4 * edge_pressure),
            (OpKind::Clear, 0.01),
            (OpKind::ClearEdges, 0.01),
        ])
    }

    fn choose(&self, u: &mut Unstructured<'_>) -> arbitrary::Result<OpKind> {
        let total = self.0.iter().map(|(_, weight)| weight).sum::<f64>();
        let point = f64::from(u.int_in_range(0..=u16::MAX)?) / f64::from(u16::MAX) * total;

        let mut acc = 0.0;
        for (kind, weight) in self.0 {
            acc += weight;

            if point <= acc {
                return Ok(kind);
            }
        }

        // Rounding may leave the accumulated sum a hair below the point.
        Ok(self.0[self.0.len() - 1].0)
    }
}

impl<'a, V, E> Arbitrary<'a> for MutOpsSeq<V, E>
where
    V: Arbitrary<'a>,
    E: Arbitrary<'a>,
{
    fn arbitrary(u: &mut Unstructured<'a>) -> arbitrary::Result<Self> {
        let target_vertices = u.int_in_range(8..=512usize)?;
        let target_edges = target_vertices * u.int_in_range(1..=8usize)?;

        let input_len = u.len();

        let mut vertices = 0usize;
        let mut edges = 0usize;
        let mut seq = Vec::new();

        while !u.is_empty() {
            let weights = OpWeights::new(
                (vertices as f64 / target_vertices as f64).min(1.0),
                (edges as f64 / target_edges as f64).min(1.0),
                (input_len - u.len()) as f64 / input_len as f64,
            );

            // A malformed operation ends the sequence.
            let Ok(op) = weights.choose(u).and_then(|kind| arbitrary_op(u, kind)) else {
                break;
            };

            // Estimates only, an operation may turn out to be a no-op.
            match op {
                MutOp::AddVertex(_) => vertices += 1,
                MutOp::RemoveVertex(_) => vertices = vertices.saturating_sub(1),
                MutOp::Clear => {
                    vertices = 0;
                    edges = 0;
                }
                MutOp::AddEdge(_, _, _) => edges += 1,
                MutOp::RemoveEdge(_, _) => edges = edges.saturating_sub(1),
                MutOp::ClearEdges => edges = 0,
            }

            seq.push(op);
        }

        Ok(MutOpsSeq(seq))
    }
}

fn arbitrary_op<'a, V, E>(
    u: &mut Unstructured<'a>,
    kind: OpKind,
) -> arbitrary::Result<MutOp<V, E>>
where
    V: Arbitrary<'a>,
    E: Arbitrary<'a>,
{
    let op = match kind {
        OpKind::AddVertex => MutOp::AddVertex(u.arbitrary()?),
        OpKind::AddEdge => MutOp::AddEdge(u.arbitrary()?, u.arbitrary()?, u.arbitrary()?),
        OpKind::RemoveVertex => MutOp::RemoveVertex(u.arbitrary()?),
        OpKind::RemoveEdge => MutOp::RemoveEdge(u.arbitrary()?, u.arbitrary()?),
        OpKind::Clear => MutOp::Clear,
        OpKind::ClearEdges => MutOp::ClearEdges,
    };

    Ok(op)
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use fastrand::Rng;

    use super::*;
    use crate::{
        infra::testing::{check_consistency, check_equivalence, check_symmetry},
        storage::{AdjList, AdjMatrix},
    };

    #[test]
    fn apply_resolves_sorted_vertices() {
        let mut graph = Graph::<i8, i8>::new_undirected();

        assert_eq!(
            MutOp::AddEdge(Index(0), Index(1), 5).apply(&mut graph),
            MutOpResult::AddEdge(None)
        );

        for vertex in [30, 10, 20] {
            MutOp::AddVertex(vertex).apply(&mut graph);
        }

        assert_eq!(
            MutOp::AddEdge(Index(0), Index(4), 5).apply(&mut graph),
            MutOpResult::AddEdge(Some((10, 20, None)))
        );
        assert!(graph.contains_edge(&20, &10));

        assert_eq!(
            MutOp::RemoveVertex(Index(5)).apply(&mut graph),
            MutOpResult::RemoveVertex(Some(30))
        );
        assert_eq!(
            MutOp::RemoveEdge(Index(1), Index(0)).apply(&mut graph),
            MutOpResult::RemoveEdge(Some(5))
        );
        assert_eq!(graph.edge_count(), 0);
    }

    #[test]
    fn random_sequences_keep_storages_consistent() {
        let mut raw = vec![0; 2000];

        for seed in [1, 5, 17] {
            let mut rng = Rng::with_seed(seed);
            rng.fill(&mut raw);

            let mut u = Unstructured::new(&raw);
            let seq: MutOpsSeq<i8, i8> = u.arbitrary().unwrap();

            let mut graph = Graph::new_directed_in(AdjMatrix::new());
            for op in seq {
                op.apply(&mut graph);
            }

            check_consistency(graph.storage()).unwrap();
        }
    }

    #[test]
    fn random_sequences_agree_across_storages() {
        let mut raw = vec![0; 4000];

        for directed in [true, false] {
            for seed in [2, 11, 29, 64, 101] {
                let mut rng = Rng::with_seed(seed);
                rng.fill(&mut raw);

                let mut u = Unstructured::new(&raw);
                let seq: MutOpsSeq<i8, i8> = u.arbitrary().unwrap();

                let mut adj_list = Graph::new_in(AdjList::new(), directed);
                let mut adj_matrix = Graph::new_in(AdjMatrix::new(), directed);

                for op in seq {
                    let list_result = op.clone().apply(&mut adj_list);
                    let matrix_result = op.apply(&mut adj_matrix);

                    assert_eq!(list_result, matrix_result);
                    check_equivalence(adj_list.storage(), adj_matrix.storage()).unwrap();
                    check_consistency(adj_matrix.storage()).unwrap();

                    if !directed {
                        check_symmetry(adj_list.storage()).unwrap();
                        check_symmetry(adj_matrix.storage()).unwrap();
                    }
                }

                // Orders may differ, the outcome may not.
                assert_eq!(adj_list.toposort().is_ok(), adj_matrix.toposort().is_ok());
                assert_eq!(adj_list.is_cyclic(), adj_matrix.is_cyclic());
            }
        }
    }

    #[test]
    fn mut_ops_seq_arbitrary_sanity() {
        let mut frequency = HashMap::<_, usize>::new();
        let mut position = HashMap::<_, Vec<f64>>::new();

        let mut total = 0;

        for size in [500, 1000, 5000, 10000] {
            let mut raw = vec![0; size];

            for seed in [0, 3, 7, 13, 23, 42, 69, 123, 666, 1024] {
                let mut rng = Rng::with_seed(seed);
                rng.fill(&mut raw);

                let mut u = Unstructured::new(&raw);
                let seq: MutOpsSeq<i8, i8> = u.arbitrary().unwrap();

                let count = seq.0.len();
                total += count;

                for (i, op) in seq.into_iter().enumerate() {
                    let kind = match op {
                        MutOp::AddVertex(_) => OpKind::AddVertex,
                        MutOp::RemoveVertex(_) => OpKind::RemoveVertex,
                        MutOp::Clear => OpKind::Clear,
                        MutOp::AddEdge(_, _, _) => OpKind::AddEdge,
                        MutOp::RemoveEdge(_, _) => OpKind::RemoveEdge,
                        MutOp::ClearEdges => OpKind::ClearEdges,
                    };

                    *frequency.entry(kind).or_default() += 1;
                    position
                        .entry(kind)
                        .or_default()
                        .push(i as f64 / count as f64);
                }
            }
        }

        let frequency = frequency
            .into_iter()
            .map(|(key, value)| (key, value as f64 / total as f64))
            .collect::<HashMap<_, _>>();
        let position = position
            .into_iter()
            .map(|(key, values)| {
                let count = values.len();
                (key, values.into_iter().sum::<f64>() / count as f64)
            })
            .collect::<HashMap<_, _>>();

        let get = |map: &HashMap<OpKind, f64>, kind| map.get(&kind).copied().unwrap_or_default();

        let adding = get(&frequency, OpKind::AddVertex) + get(&frequency, OpKind::AddEdge);
        let removing = get(&frequency, OpKind::RemoveVertex) + get(&frequency, OpKind::RemoveEdge);

        assert!(adding > removing, "adding {adding}, removing {removing}");
        assert!(get(&frequency, OpKind::Clear) < 0.03);
        assert!(get(&frequency, OpKind::ClearEdges) < 0.03);

        // Additions lean towards the beginning, removals towards the end.
        assert!(get(&position, OpKind::AddVertex) < get(&position, OpKind::RemoveVertex));
        assert!(get(&position, OpKind::AddEdge) < get(&position, OpKind::RemoveEdge));
    }

    #[test]
    #[ignore = "placeholder for fuzz findings"]
    fn fuzz_replay_mut_ops_seq() {
        #[allow(unused_imports)]
        use crate::storage::*;

        // Replace with graph type under test.
        let mut graph = Graph::<i8, i8, _>::new_undirected_in(AdjMatrix::new());

        MutOpsSeq(vec![
            MutOp::AddVertex(0),
            MutOp::AddEdge(Index(0), Index(0), 0),
            MutOp::ClearEdges,
            MutOp::RemoveEdge(Index(0), Index(0)),
        ])
        .replay(&mut graph);

        panic!("check_consistency is required for reproduction");
    }
}
