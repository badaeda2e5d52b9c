use std::cmp::Ordering;

/// A directed arc between two vertices carrying a label.
///
/// The label is owned by the edge. An undirected
/// [`Graph`](crate::graph::Graph) stores two edges for every connection, one
/// per direction, each holding its own copy of the label (see
/// [`Edge::reversed`]).
///
/// Edges are ordered by their label first and by their endpoints second, so
/// that sorting a collection of edges sorts them by weight.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Edge<V, E> {
    from: V,
    to: V,
    label: E,
}

impl<V, E> Edge<V, E> {
    pub fn new(from: V, to: V, label: E) -> Self {
        Self { from, to, label }
    }

    /// The source vertex.
    pub fn from(&self) -> &V {
        &self.from
    }

    /// The destination vertex.
    pub fn to(&self) -> &V {
        &self.to
    }

    pub fn endpoints(&self) -> (&V, &V) {
        (&self.from, &self.to)
    }

    pub fn label(&self) -> &E {
        &self.label
    }

    pub fn label_mut(&mut self) -> &mut E {
        &mut self.label
    }

    pub fn into_label(self) -> E {
        self.label
    }

    pub fn into_parts(self) -> (V, V, E) {
        (self.from, self.to, self.label)
    }

    pub fn is_loop(&self) -> bool
    where
        V: PartialEq,
    {
        self.from == self.to
    }

    /// Returns the edge in the opposite direction with a copy of the label.
    #[must_use]
    pub fn reversed(&self) -> Self
    where
        V: Clone,
        E: Clone,
    {
        Self {
            from: self.to.clone(),
            to: self.from.clone(),
            label: self.label.clone(),
        }
    }
}

impl<V: Ord, E: Ord> PartialOrd for Edge<V, E> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<V: Ord, E: Ord> Ord for Edge<V, E> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.label
            .cmp(&other.label)
            .then_with(|| self.from.cmp(&other.from))
            .then_with(|| self.to.cmp(&other.to))
    }
}
