//! The weighted quick union variant, see [`WeightedQuickUnion`].
//!
//! [`WeightedQuickUnion`]: struct.WeightedQuickUnion.html

use {
    log::trace,
    crate::disjoint_sets::{
        UnionFind,
        metadata::{
            self,
            Metadata,
        },
    },
};

/// Disjoint sets stored as a forest where `union` adds the smaller tree below the larger one.
///
/// Keeping the trees balanced this way bounds their height by `log(n)`
/// so `find` and `union` take `O(log n)` time.
/// When both trees have the same size the tree of the first index goes below the
/// root of the second index.
///
/// # Examples
///
/// ```
/// use unionsum::{UnionFind, WeightedQuickUnion};
///
/// let mut sets = WeightedQuickUnion::new(4);
/// sets.union(0, 1);
/// sets.union(2, 1);
///
/// assert_eq!(sets.len_of_set(2), 3);
/// assert!(sets.is_singleton(3));
/// ```
#[derive(Clone, Debug)]
pub struct WeightedQuickUnion {
    /// The metadata of each element.
    meta: Vec<Metadata>,
    count: usize,
}

impl UnionFind for WeightedQuickUnion {
    fn new(len: usize) -> Self {
        Self {
            meta: (0 .. len).map(Metadata::new).collect(),
            count: len,
        }
    }

    #[inline]
    fn len(&self) -> usize {
        self.meta.len()
    }

    #[inline]
    fn count(&self) -> usize {
        self.count
    }

    #[inline]
    fn find(&self, index: usize) -> usize {
        metadata::find_root(&self.meta, index)
    }

    fn union(&mut self, first_index: usize, second_index: usize) {
        let i = self.find(first_index);
        let j = self.find(second_index);

        if i == j {
            return
        }

        metadata::link_roots(&self.meta, i, j);
        self.count -= 1;
        trace!("weighted quick union: joined roots {} and {}, {} sets left", i, j, self.count);
    }

    #[inline]
    fn len_of_set(&self, index: usize) -> usize {
        self.meta[self.find(index)].size()
    }
}
