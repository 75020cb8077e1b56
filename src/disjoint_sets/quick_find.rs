//! The quick find variant, see [`QuickFind`].
//!
//! [`QuickFind`]: struct.QuickFind.html

use {
    log::trace,
    crate::disjoint_sets::UnionFind,
};

/// Disjoint sets that store the set identifier of every element directly.
///
/// `find` is a single lookup but `union` has to relabel every member of one of the sets,
/// which takes `O(n)` time no matter how the sets look.
///
/// # Examples
///
/// ```
/// use unionsum::{QuickFind, UnionFind};
///
/// let mut sets = QuickFind::new(3);
/// sets.union(0, 2);
///
/// assert_eq!(sets.find(0), sets.find(2));
/// assert_eq!(sets.count(), 2);
/// ```
#[derive(Clone, Debug)]
pub struct QuickFind {
    /// The set identifier of each element.
    id: Vec<usize>,
    count: usize,
}

impl UnionFind for QuickFind {
    fn new(len: usize) -> Self {
        Self {
            id: (0 .. len).collect(),
            count: len,
        }
    }

    #[inline]
    fn len(&self) -> usize {
        self.id.len()
    }

    #[inline]
    fn count(&self) -> usize {
        self.count
    }

    #[inline]
    fn find(&self, index: usize) -> usize {
        self.id[index]
    }

    fn union(&mut self, first_index: usize, second_index: usize) {
        let first_id = self.find(first_index);
        let second_id = self.find(second_index);

        if first_id == second_id {
            return
        }

        // Every member of the first set moves to the second set.
        for id in self.id.iter_mut().filter(|id| **id == first_id) {
            *id = second_id;
        }

        self.count -= 1;
        trace!("quick find: relabeled set {} as {}, {} sets left", first_id, second_id, self.count);
    }
}
