//! Two families of classic algorithms: [disjoint-sets/union-find] for incremental
//! connectivity and three-sum enumeration for triplets that add up to a target.
//!
//! The disjoint sets come in four variants that all implement [`UnionFind`].
//! Each keeps the elements `0 .. n` partitioned in sets that can be joined with `union`.
//! You can check if elements share a set with `connected` and the amount of sets is
//! available through `count`.
//! The variants escalate from [`QuickFind`] with its `O(n)` union to
//! [`WeightedQuickUnionPathCompression`] whose operations have an amortized complexity of
//! `O(α(n))` where 'α' is the inverse Ackermann function.
//!
//! This can be used for example to keep track of the connected components of an undirected
//! graph, or to determine whether adding an edge between two vertices would result in a cycle.
//!
//! The three-sum strategies implement [`ThreeSum`] and report either the positions or the
//! distinct values of every triplet. [`enumerate_triplets`] picks a strategy at run time.
//!
//! ```
//! use unionsum::{BruteForce, ThreeSum, UnionFind, ValueTriplet, WeightedQuickUnion};
//!
//! let mut sets = WeightedQuickUnion::new(3);
//! sets.union(0, 2);
//! assert_eq!(sets.count(), 2);
//!
//! let triplets = BruteForce.value_triplets(&[-1, 0, 1, 2, -1, -4], 0);
//! assert_eq!(triplets, vec![ValueTriplet::new(-1, -1, 2), ValueTriplet::new(-1, 0, 1)]);
//! ```
//!
//! The `proptest` feature, which is enabled by default, implements `Arbitrary` for the
//! disjoint sets.
//!
//! [disjoint-sets/union-find]: https://en.wikipedia.org/wiki/Disjoint-set_data_structure
//! [`UnionFind`]: disjoint_sets/trait.UnionFind.html
//! [`QuickFind`]: disjoint_sets/struct.QuickFind.html
//! [`WeightedQuickUnionPathCompression`]: disjoint_sets/struct.WeightedQuickUnionPathCompression.html
//! [`ThreeSum`]: three_sum/trait.ThreeSum.html
//! [`enumerate_triplets`]: three_sum/fn.enumerate_triplets.html

/// Creates disjoint sets of the given type and joins the given pairs.
///
/// There are two forms of the `disjoint_sets!` macro:
///
/// - Create `len` elements that each have their own set:
///
/// ```
/// # #[macro_use]
/// # extern crate unionsum;
/// use unionsum::{QuickFind, UnionFind};
///
/// # fn main() {
/// let sets = disjoint_sets![QuickFind; 3];
///
/// assert_eq!(sets.count(), 3);
/// # }
/// ```
///
/// - Create `len` elements and join each of the listed pairs in order:
///
/// ```
/// # #[macro_use]
/// # extern crate unionsum;
/// use unionsum::{QuickUnion, UnionFind};
///
/// # fn main() {
/// let sets = disjoint_sets![QuickUnion; 5; (0, 1), (3, 4), (1, 0)];
///
/// assert!(sets.connected(1, 0));
/// assert!(sets.connected(4, 3));
/// assert_eq!(sets.count(), 3);
/// # }
/// ```
#[macro_export]
macro_rules! disjoint_sets {
    ($sets: ty; $len: expr; $(($first: expr, $second: expr)),* $(,)*) => {
        {
            let mut sets = <$sets as $crate::UnionFind>::new($len);

            $(
                $crate::UnionFind::union(&mut sets, $first, $second);
            )*

            sets
        }
    };
    ($sets: ty; $len: expr) => {
        <$sets as $crate::UnionFind>::new($len)
    };
}

pub mod error;
pub mod disjoint_sets;
pub mod three_sum;

pub use {
    error::{
        Error,
        Result,
    },
    disjoint_sets::{
        UnionFind,
        QuickFind,
        QuickUnion,
        WeightedQuickUnion,
        WeightedQuickUnionPathCompression,
    },
    three_sum::{
        enumerate_triplets,
        BruteForce,
        HashComplement,
        IndexTriplet,
        Mode,
        Options,
        SortedTwoPointer,
        Strategy,
        ThreeSum,
        Triplets,
        ValueTriplet,
    },
};
