//! The quick union variant, see [`QuickUnion`].
//!
//! [`QuickUnion`]: struct.QuickUnion.html

use {
    log::trace,
    crate::disjoint_sets::UnionFind,
};

/// Disjoint sets stored as a forest of parent links without any balancing.
///
/// `union` always puts the root of the first set below the root of the second set.
/// The trees can degenerate into chains so both `find` and `union` take `O(n)` time
/// in the worst case.
#[derive(Clone, Debug)]
pub struct QuickUnion {
    /// The parent of each element, roots are their own parent.
    parent: Vec<usize>,
    count: usize,
}

impl UnionFind for QuickUnion {
    fn new(len: usize) -> Self {
        Self {
            parent: (0 .. len).collect(),
            count: len,
        }
    }

    #[inline]
    fn len(&self) -> usize {
        self.parent.len()
    }

    #[inline]
    fn count(&self) -> usize {
        self.count
    }

    fn find(&self, mut index: usize) -> usize {
        while index != self.parent[index] {
            index = self.parent[index];
        }

        index
    }

    fn union(&mut self, first_index: usize, second_index: usize) {
        let i = self.find(first_index);
        let j = self.find(second_index);

        if i == j {
            return
        }

        self.parent[i] = j;
        self.count -= 1;
        trace!("quick union: attached root {} below {}, {} sets left", i, j, self.count);
    }
}
