//! Implementations of the [`Graphable`](crate::core::Graphable) storage
//! contract.
//!
//! A _storage_ is the concrete representation of a graph. On top of a
//! storage, there is the [`Graph`](crate::graph::Graph) facade which adds the
//! directed/undirected semantics. Both storages behave identically under the
//! contract, they differ only in their complexity profiles.
//!
//! # Storages and their properties
//!
//! The available storages are:
//!
//! * [Adjacency list](adj_list)
//! * [Adjacency matrix](adj_matrix)
//!
//! The **adjacency list** provides cheap storage, fast vertex and edge
//! insertion and fast queries on outgoing edges. The **adjacency matrix**
//! provides constant-time edge lookup, insertion and removal at the cost of
//! quadratic memory and row/column scans for neighbor queries.
//!
//! |                   | **[AdjList]** | **[AdjMatrix]** |
//! |-------------------|---------------|-----------------|
//! | add vertex        | _O*(1)_       | _O*(V)_         |
//! | remove vertex     | _O(V)_        | _O(V)_          |
//! | add/remove edge   | _O(1)_        | _O(1)_          |
//! | lookup edge       | _O(1)_        | _O(1)_          |
//! | adjacent vertices | _O(d)_        | _O(V)_          |
//! | out-degree        | _O(1)_        | _O(V)_          |
//! | in-degree         | _O(V)_        | _O(V)_          |
//! | all edges         | _O(V + E)_    | _O(V²)_         |
//! | space             | _O(V + E)_    | _O(V²)_         |
//!
//! * _V_ – vertex count
//! * _E_ – edge count
//! * _d_ – out-degree of the vertex
//! * _O*(..)_ – amortized complexity

pub mod adj_list;
pub mod adj_matrix;

#[doc(inline)]
pub use self::{adj_list::AdjList, adj_matrix::AdjMatrix};

#[cfg(test)]
pub(crate) mod tests {
    use std::collections::BTreeSet;

    use assert_matches::assert_matches;

    use crate::{
        core::{AddEdgeError, AddEdgeErrorKind, Direction, Edge, Graphable},
        infra::testing::check_consistency,
    };

    fn sorted<'a>(iter: impl Iterator<Item = &'a i32>) -> Vec<i32> {
        let mut vec = iter.copied().collect::<Vec<_>>();
        vec.sort_unstable();
        vec
    }

    pub fn test_basic<S>()
    where
        S: Graphable<i32, &'static str> + Default,
    {
        let mut storage = S::default();

        for v in 0..4 {
            assert!(storage.add_vertex(v));
        }

        storage.add_edge(Edge::new(0, 1, "a"));
        storage.add_edge(Edge::new(0, 2, "b"));
        storage.add_edge(Edge::new(0, 3, "c"));
        storage.add_edge(Edge::new(2, 1, "d"));
        storage.add_edge(Edge::new(2, 3, "e"));

        assert_eq!(storage.remove_edge(&0, &3), Some(Edge::new(0, 3, "c")));
        assert!(storage.remove_vertex(&1));

        assert_eq!(storage.vertex_count(), 3);
        assert_eq!(storage.vertices().count(), storage.vertex_count());

        assert_eq!(storage.edge_count(), 2);
        assert_eq!(storage.edges().count(), storage.edge_count());

        assert!(storage.contains_edge(&0, &2));
        assert!(storage.contains_edge(&2, &3));
        assert!(!storage.contains_edge(&2, &0));

        let mut out_deg = storage
            .vertices()
            .map(|v| storage.out_degree(v))
            .collect::<Vec<_>>();

        let mut in_deg = storage
            .vertices()
            .map(|v| storage.in_degree(v))
            .collect::<Vec<_>>();

        out_deg.sort_unstable();
        in_deg.sort_unstable();

        assert_eq!(out_deg, vec![0, 1, 1]);
        assert_eq!(in_deg, vec![0, 1, 1]);

        check_consistency(&storage).unwrap();

        storage.clear_edges();
        assert_eq!(storage.edge_count(), 0);
        assert_eq!(storage.vertex_count(), 3);

        storage.add_edge(Edge::new(0, 2, "f"));
        assert_eq!(storage.edge_count(), 1);

        storage.clear();
        assert_eq!(storage.vertex_count(), 0);
        assert_eq!(storage.edge_count(), 0);
        assert_eq!(storage.edges().count(), 0);
    }

    pub fn test_add_vertex_idempotent<S>()
    where
        S: Graphable<i32, &'static str> + Default,
    {
        let mut storage = S::default();

        assert!(storage.add_vertex(7));
        storage.add_edge(Edge::new(7, 7, "loop"));

        assert!(!storage.add_vertex(7));

        assert_eq!(storage.vertex_count(), 1);
        assert!(storage.contains_edge(&7, &7));
    }

    pub fn test_absent_endpoints<S>()
    where
        S: Graphable<i32, &'static str> + Default,
    {
        let mut storage = S::default();

        storage.add_vertex(1);

        assert_matches!(
            storage.try_add_edge(Edge::new(0, 1, "x")),
            Err(AddEdgeError {
                kind: AddEdgeErrorKind::SourceAbsent,
                ..
            })
        );

        let error = storage.try_add_edge(Edge::new(1, 2, "y")).unwrap_err();
        assert_eq!(error.kind, AddEdgeErrorKind::DestinationAbsent);
        assert_eq!(error.into_edge().into_label(), "y");

        // A rejected insertion must not leave anything behind.
        assert_eq!(storage.vertex_count(), 1);
        assert_eq!(storage.edge_count(), 0);
        assert_eq!(storage.out_degree(&1), 0);
        assert!(!storage.contains_vertex(&0));
        assert!(!storage.contains_vertex(&2));
    }

    pub fn test_replace_edge<S>()
    where
        S: Graphable<i32, &'static str> + Default,
    {
        let mut storage = S::default();

        storage.add_vertex(0);
        storage.add_vertex(1);

        assert_eq!(storage.add_edge(Edge::new(0, 1, "old")), None);
        assert_eq!(
            storage.add_edge(Edge::new(0, 1, "new")),
            Some(Edge::new(0, 1, "old"))
        );

        assert_eq!(storage.edge_count(), 1);
        assert_eq!(storage.edge(&0, &1).map(Edge::label), Some(&"new"));
        assert_eq!(storage.edge(&1, &0), None);
    }

    pub fn test_remove_vertex_incident<S>()
    where
        S: Graphable<i32, &'static str> + Default,
    {
        let mut storage = S::default();

        for v in 0..5 {
            storage.add_vertex(v);
        }

        storage.add_edge(Edge::new(0, 2, "a"));
        storage.add_edge(Edge::new(2, 1, "b"));
        storage.add_edge(Edge::new(3, 2, "c"));
        storage.add_edge(Edge::new(2, 2, "d"));
        storage.add_edge(Edge::new(4, 0, "e"));
        storage.add_edge(Edge::new(1, 3, "f"));

        assert!(storage.remove_vertex(&2));
        assert!(!storage.remove_vertex(&2));

        assert!(!storage.contains_vertex(&2));
        assert_eq!(storage.vertex_count(), 4);
        assert_eq!(storage.edge_count(), 2);

        assert!(storage
            .edges()
            .all(|edge| edge.from() != &2 && edge.to() != &2));

        assert_eq!(storage.out_degree(&0), 0);
        assert_eq!(storage.in_degree(&1), 0);
        assert_eq!(storage.out_degree(&3), 0);
        assert!(storage.contains_edge(&4, &0));
        assert!(storage.contains_edge(&1, &3));

        check_consistency(&storage).unwrap();

        // The vertex can be added again and starts without any edges.
        storage.add_vertex(2);
        assert_eq!(storage.in_degree(&2), 0);
        assert_eq!(storage.out_degree(&2), 0);
        assert_eq!(storage.adjacent(&2).count(), 0);
    }

    pub fn test_adjacent<S>()
    where
        S: Graphable<i32, &'static str> + Default,
    {
        let mut storage = S::default();

        for v in 0..4 {
            storage.add_vertex(v);
        }

        storage.add_edge(Edge::new(0, 1, "a"));
        storage.add_edge(Edge::new(0, 3, "b"));
        storage.add_edge(Edge::new(3, 0, "c"));
        storage.add_edge(Edge::new(2, 2, "d"));

        assert_eq!(sorted(storage.adjacent(&0)), vec![1, 3]);
        assert_eq!(sorted(storage.adjacent(&1)), Vec::<i32>::new());
        assert_eq!(sorted(storage.adjacent(&2)), vec![2]);
        assert_eq!(sorted(storage.adjacent(&3)), vec![0]);

        let from_zero = storage
            .edges_from(&0)
            .map(|edge| *edge.label())
            .collect::<BTreeSet<_>>();
        assert_eq!(from_zero, BTreeSet::from(["a", "b"]));

        assert!(storage.edges_from(&0).all(|edge| edge.from() == &0));

        // Enumeration order is stable while the storage is not mutated.
        let first = storage.adjacent(&0).copied().collect::<Vec<_>>();
        let second = storage.adjacent(&0).copied().collect::<Vec<_>>();
        assert_eq!(first, second);

        assert_eq!(storage.degree_directed(&2, Direction::Incoming), 1);
        assert_eq!(storage.degree_directed(&2, Direction::Outgoing), 1);
    }

    pub fn test_absent_vertex_queries<S>()
    where
        S: Graphable<i32, &'static str> + Default,
    {
        let mut storage = S::default();

        storage.add_vertex(0);
        storage.add_vertex(1);
        storage.add_edge(Edge::new(0, 1, "a"));

        assert_eq!(storage.adjacent(&42).count(), 0);
        assert_eq!(storage.edges_from(&42).count(), 0);
        assert_eq!(storage.in_degree(&42), 0);
        assert_eq!(storage.out_degree(&42), 0);
        assert_eq!(storage.edge(&0, &42), None);
        assert_eq!(storage.edge(&42, &1), None);
        assert_eq!(storage.remove_edge(&42, &1), None);
        assert_eq!(storage.remove_edge(&1, &0), None);
        assert_eq!(storage.edge_count(), 1);
    }

    pub fn test_copy_independent<S>()
    where
        S: Graphable<i32, &'static str> + Default + Clone,
    {
        let mut original = S::default();

        original.add_vertex(0);
        original.add_vertex(1);
        original.add_edge(Edge::new(0, 1, "a"));

        let mut copy = original.clone();

        copy.add_vertex(2);
        copy.add_edge(Edge::new(1, 2, "b"));
        copy.remove_edge(&0, &1);

        assert_eq!(original.vertex_count(), 2);
        assert_eq!(original.edge_count(), 1);
        assert!(original.contains_edge(&0, &1));
        assert!(!original.contains_vertex(&2));

        assert_eq!(copy.vertex_count(), 3);
        assert_eq!(copy.edge_count(), 1);
        assert!(copy.contains_edge(&1, &2));
    }
}
