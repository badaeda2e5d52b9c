use std::{
    collections::{BTreeSet, HashSet},
    hash::{BuildHasher, Hash},
};

use fixedbitset::FixedBitSet;

/// Bookkeeping of already visited items during a traversal.
pub trait VisitSet<T> {
    /// Marks the item as visited. Returns `true` if it was not visited before.
    fn visit(&mut self, item: T) -> bool;
    fn is_visited(&self, item: &T) -> bool;
    fn visited_count(&self) -> usize;
    fn reset_visited(&mut self);
}

impl<T: Ord> VisitSet<T> for BTreeSet<T> {
    fn visit(&mut self, item: T) -> bool {
        self.insert(item)
    }

    fn is_visited(&self, item: &T) -> bool {
        self.contains(item)
    }

    fn visited_count(&self) -> usize {
        self.len()
    }

    fn reset_visited(&mut self) {
        self.clear();
    }
}

impl<T: Hash + Eq, S: BuildHasher> VisitSet<T> for HashSet<T, S> {
    fn visit(&mut self, item: T) -> bool {
        self.insert(item)
    }

    fn is_visited(&self, item: &T) -> bool {
        self.contains(item)
    }

    fn visited_count(&self) -> usize {
        self.len()
    }

    fn reset_visited(&mut self) {
        self.clear()
    }
}

/// Visit set over dense indices.
impl VisitSet<usize> for FixedBitSet {
    fn visit(&mut self, index: usize) -> bool {
        if self.len() <= index {
            self.grow(index + 1);
        }
        !self.put(index)
    }

    fn is_visited(&self, index: &usize) -> bool {
        self.contains(*index)
    }

    fn visited_count(&self) -> usize {
        self.count_ones(..)
    }

    fn reset_visited(&mut self) {
        self.clear()
    }
}
