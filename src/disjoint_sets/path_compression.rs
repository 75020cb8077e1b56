//! The weighted quick union variant with path compression,
//! see [`WeightedQuickUnionPathCompression`].
//!
//! [`WeightedQuickUnionPathCompression`]: struct.WeightedQuickUnionPathCompression.html

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

/// Disjoint sets with weighted union and full path compression.
///
/// Every `find` makes each element it passes point directly to the root.
/// Together with the weighted union this gives an amortized complexity of `O(α(n))`
/// per operation where `α` is the inverse Ackermann function.
/// The `α(n)` has value below 5 for any `n` that can be written in the observable universe.
///
/// The parents are stored in cells so the compression also happens when calling
/// `find` or `connected` through a shared reference.
///
/// # Examples
///
/// ```
/// use unionsum::{UnionFind, WeightedQuickUnionPathCompression};
///
/// let mut sets = WeightedQuickUnionPathCompression::new(10);
/// for &(p, q) in &[(4, 3), (3, 8), (6, 5), (9, 4), (2, 1), (8, 9),
///                  (5, 0), (7, 2), (6, 1), (1, 0), (6, 7)] {
///     sets.union(p, q);
/// }
///
/// assert_eq!(sets.count(), 2);
/// assert!(sets.connected(3, 9));
/// assert!(!sets.connected(3, 0));
/// ```
#[derive(Clone, Debug)]
pub struct WeightedQuickUnionPathCompression {
    /// The metadata of each element.
    meta: Vec<Metadata>,
    count: usize,
}

impl UnionFind for WeightedQuickUnionPathCompression {
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

    fn find(&self, index: usize) -> usize {
        let root = metadata::find_root(&self.meta, index);

        // We walk the path a second time and point every element on it to the root.
        let mut current = index;
        while current != root {
            let next = self.meta[current].parent();
            self.meta[current].set_parent(root);
            current = next;
        }

        root
    }

    fn union(&mut self, first_index: usize, second_index: usize) {
        let i = self.find(first_index);
        let j = self.find(second_index);

        if i == j {
            return
        }

        metadata::link_roots(&self.meta, i, j);
        self.count -= 1;
        trace!("path compression: joined roots {} and {}, {} sets left", i, j, self.count);
    }

    #[inline]
    fn len_of_set(&self, index: usize) -> usize {
        self.meta[self.find(index)].size()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parents(sets: &WeightedQuickUnionPathCompression) -> Vec<usize> {
        sets.meta.iter().map(Metadata::parent).collect()
    }

    /// Builds the chain `0 -> 1 -> ... -> len - 1` by hand.
    fn chain(len: usize) -> WeightedQuickUnionPathCompression {
        let sets = WeightedQuickUnionPathCompression::new(len);

        for index in 0 .. len - 1 {
            sets.meta[index].set_parent(index + 1);
        }
        sets.meta[len - 1].set_size(len);

        WeightedQuickUnionPathCompression {
            count: 1,
            ..sets
        }
    }

    #[test]
    fn find_points_whole_path_to_root() {
        let sets = chain(5);

        assert_eq!(sets.find(0), 4);
        assert_eq!(parents(&sets), vec![4, 4, 4, 4, 4]);
    }

    #[test]
    fn find_leaves_other_branches_alone() {
        let sets = chain(5);

        assert_eq!(sets.find(2), 4);
        assert_eq!(parents(&sets), vec![1, 2, 4, 4, 4]);
    }

    #[test]
    fn long_chain_does_not_overflow_the_stack() {
        let len = 1_000_000;
        let sets = chain(len);

        assert_eq!(sets.find(0), len - 1);
        assert_eq!(sets.meta[len / 2].parent(), len - 1);
    }

    #[test]
    fn connected_compresses_through_shared_reference() {
        let sets = chain(4);
        let shared = &sets;

        assert!(shared.connected(0, 1));
        assert_eq!(parents(&sets), vec![3, 3, 3, 3]);
    }

    #[test]
    fn equal_sizes_attach_first_root_below_second_root() {
        let mut sets = WeightedQuickUnionPathCompression::new(4);
        sets.union(0, 1);
        sets.union(2, 3);
        sets.union(1, 3);

        assert_eq!(parents(&sets), vec![1, 3, 3, 3]);
        assert_eq!(sets.len_of_set(0), 4);
    }
}
