use std::collections::VecDeque;

use rustc_hash::FxHashSet;

use super::VisitSet;

pub trait TraversalCollection<T>: Default {
    fn push(&mut self, value: T);
    fn pop(&mut self) -> Option<T>;
}

pub struct Queue<T>(pub VecDeque<T>);

impl<T> Default for Queue<T> {
    fn default() -> Self {
        Self(VecDeque::new())
    }
}

impl<T> TraversalCollection<T> for Queue<T> {
    fn push(&mut self, value: T) {
        self.0.push_back(value);
    }

    fn pop(&mut self) -> Option<T> {
        self.0.pop_front()
    }
}

pub struct Stack<T>(pub Vec<T>);

impl<T> Stack<T> {
    pub fn top_mut(&mut self) -> Option<&mut T> {
        self.0.last_mut()
    }
}

impl<T> Default for Stack<T> {
    fn default() -> Self {
        Self(Vec::new())
    }
}

impl<T> TraversalCollection<T> for Stack<T> {
    fn push(&mut self, value: T) {
        self.0.push(value);
    }

    fn pop(&mut self) -> Option<T> {
        self.0.pop()
    }
}

/// State shared by the traversals: the pending work and the visited vertices.
pub struct RawVisit<V, C> {
    pub collection: C,
    pub visited: FxHashSet<V>,
}

impl<V, C> RawVisit<V, C>
where
    V: std::hash::Hash + Eq,
    C: Default,
{
    pub fn new(count_hint: usize) -> Self {
        Self {
            collection: C::default(),
            visited: FxHashSet::with_capacity_and_hasher(count_hint, Default::default()),
        }
    }

    pub fn reset(&mut self) {
        self.collection = C::default();
        self.visited.reset_visited();
    }
}
