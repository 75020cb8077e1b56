//! Contains the [disjoint-sets/union-find] variants.
//!
//! All four structures implement the [`UnionFind`] trait and answer every query the same
//! way, they only differ in how the sets are stored and so in what each operation costs:
//!
//! | variant                               | `union`   | `find`    |
//! |---------------------------------------|-----------|-----------|
//! | [`QuickFind`]                         | `O(n)`    | `O(1)`    |
//! | [`QuickUnion`]                        | `O(n)`    | `O(n)`    |
//! | [`WeightedQuickUnion`]                | `O(log n)`| `O(log n)`|
//! | [`WeightedQuickUnionPathCompression`] | `O(α(n))` | `O(α(n))` |
//!
//! [disjoint-sets/union-find]: https://en.wikipedia.org/wiki/Disjoint-set_data_structure
//! [`UnionFind`]: trait.UnionFind.html
//! [`QuickFind`]: struct.QuickFind.html
//! [`QuickUnion`]: struct.QuickUnion.html
//! [`WeightedQuickUnion`]: struct.WeightedQuickUnion.html
//! [`WeightedQuickUnionPathCompression`]: struct.WeightedQuickUnionPathCompression.html

use {
    std::convert::TryFrom,
    bit_vec::BitVec,
    crate::error::{
        Error,
        Result,
    },
};

/// Implements `Arbitrary` for the given disjoint sets.
///
/// A value is generated by picking a number of elements and then joining a random
/// amount of random pairs.
#[cfg(feature = "proptest")]
macro_rules! arbitrary_union_find {
    ($($sets: ty),*) => {
        $(
            impl proptest::arbitrary::Arbitrary for $sets {
                type Parameters = ();
                type Strategy = proptest::strategy::BoxedStrategy<Self>;

                fn arbitrary_with(_params: ()) -> Self::Strategy {
                    use proptest::prelude::*;

                    (1usize ..= 64).prop_flat_map(|len| {
                        proptest::collection::vec((0 .. len, 0 .. len), 0 ..= 2 * len)
                            .prop_map(move |pairs| {
                                let mut sets = <$sets as UnionFind>::new(len);

                                for (first_index, second_index) in pairs {
                                    sets.union(first_index, second_index);
                                }

                                sets
                            })
                    }).boxed()
                }
            }
        )*
    };
}

mod metadata;
pub mod quick_find;
pub mod quick_union;
pub mod weighted_quick_union;
pub mod path_compression;

pub use self::{
    quick_find::QuickFind,
    quick_union::QuickUnion,
    weighted_quick_union::WeightedQuickUnion,
    path_compression::WeightedQuickUnionPathCompression,
};

/// The operations shared by every disjoint-sets variant.
///
/// A structure holds the elements `0 .. len` which each start in their own set.
/// Sets are joined with `union` and never split again, so `count` only goes down.
///
/// The plain methods panic on an index that is out of bounds, just like indexing a slice.
/// The `try_` methods check their arguments first and return an [`Error`] instead.
///
/// # Examples
///
/// ```
/// use unionsum::{UnionFind, WeightedQuickUnionPathCompression};
///
/// let mut sets = WeightedQuickUnionPathCompression::new(4);
/// sets.union(0, 1);
/// sets.union(2, 3);
///
/// assert!(sets.connected(1, 0));
/// assert!(!sets.connected(1, 2));
/// assert_eq!(sets.count(), 2);
/// ```
///
/// [`Error`]: ../error/enum.Error.html
pub trait UnionFind {
    /// Creates `len` elements that each have their own set.
    fn new(len: usize) -> Self where Self: Sized;

    /// Returns the amount of elements, this never changes after construction.
    fn len(&self) -> usize;

    /// Returns the amount of disjoint sets.
    ///
    /// This starts at `len` and goes down by one for every `union` that joins two
    /// different sets.
    fn count(&self) -> usize;

    /// Gives the representative of the set that `index` belongs to.
    ///
    /// Two indices share a set exactly when their representatives are equal.
    ///
    /// # Panics
    ///
    /// If `index` is out of bounds.
    fn find(&self, index: usize) -> usize;

    /// Joins the sets of `first_index` and `second_index`.
    ///
    /// Nothing happens if they already share a set.
    ///
    /// # Panics
    ///
    /// If `first_index` or `second_index` is out of bounds.
    fn union(&mut self, first_index: usize, second_index: usize);

    /// Returns `true` if there are no elements.
    #[inline]
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns `true` if `first_index` and `second_index` are in the same set.
    ///
    /// # Panics
    ///
    /// If `first_index` or `second_index` is out of bounds.
    #[inline]
    fn connected(&self, first_index: usize, second_index: usize) -> bool {
        self.find(first_index) == self.find(second_index)
    }

    /// Returns the amount of elements in the set of `index`.
    ///
    /// # Panics
    ///
    /// If `index` is out of bounds.
    fn len_of_set(&self, index: usize) -> usize {
        let root = self.find(index);

        (0 .. self.len()).filter(|&i| self.find(i) == root).count()
    }

    /// Returns `true` if `index` is the only element of its set.
    ///
    /// # Panics
    ///
    /// If `index` is out of bounds.
    #[inline]
    fn is_singleton(&self, index: usize) -> bool {
        self.len_of_set(index) == 1
    }

    /// Returns the elements of every set.
    ///
    /// The sets are ordered by their smallest element and the elements of each set are
    /// in increasing order.
    ///
    /// # Examples
    ///
    /// ```
    /// use unionsum::{QuickUnion, UnionFind};
    ///
    /// let mut sets = QuickUnion::new(5);
    /// sets.union(3, 0);
    /// sets.union(4, 1);
    ///
    /// assert_eq!(sets.components(), vec![vec![0, 3], vec![1, 4], vec![2]]);
    /// ```
    fn components(&self) -> Vec<Vec<usize>> {
        let len = self.len();
        // Marks the representatives of the sets that already have a slot.
        let mut done = BitVec::from_elem(len, false);
        let mut slot = vec![0; len];
        let mut components = Vec::with_capacity(self.count());

        for index in 0 .. len {
            let root = self.find(index);

            if !done[root] {
                done.set(root, true);
                slot[root] = components.len();
                components.push(Vec::new());
            }

            components[slot[root]].push(index);
        }

        components
    }

    /// Creates `len` elements like `new` but accepts a signed size.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidSize`] if `len` is negative.
    ///
    /// [`Error::InvalidSize`]: ../error/enum.Error.html#variant.InvalidSize
    fn try_new(len: isize) -> Result<Self> where Self: Sized {
        usize::try_from(len)
            .map(Self::new)
            .map_err(|_| Error::InvalidSize(len))
    }

    /// Returns an error if `index` is not below `len`.
    #[inline]
    fn check_index(&self, index: usize) -> Result<()> {
        let len = self.len();

        if index < len {
            Ok(())
        } else {
            Err(Error::IndexOutOfRange { index, len })
        }
    }

    /// The checked version of `find`.
    fn try_find(&self, index: usize) -> Result<usize> {
        self.check_index(index)?;

        Ok(self.find(index))
    }

    /// The checked version of `union`.
    ///
    /// Both indices are checked before anything is changed.
    fn try_union(&mut self, first_index: usize, second_index: usize) -> Result<()> {
        self.check_index(first_index)?;
        self.check_index(second_index)?;

        self.union(first_index, second_index);

        Ok(())
    }

    /// The checked version of `connected`.
    fn try_connected(&self, first_index: usize, second_index: usize) -> Result<bool> {
        self.check_index(first_index)?;
        self.check_index(second_index)?;

        Ok(self.connected(first_index, second_index))
    }
}

#[cfg(feature = "proptest")]
arbitrary_union_find!(
    QuickFind,
    QuickUnion,
    WeightedQuickUnion,
    WeightedQuickUnionPathCompression
);
