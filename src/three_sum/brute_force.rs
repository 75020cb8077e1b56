//! The exhaustive strategy, see [`BruteForce`].
//!
//! [`BruteForce`]: struct.BruteForce.html

use {
    std::collections::BTreeSet,
    crate::three_sum::{
        self,
        IndexTriplet,
        ThreeSum,
        ValueTriplet,
    },
};

/// Tries every triple of positions `i < j < k`.
///
/// This takes `O(n³)` time and no memory besides the result.
/// In index mode every matching triple of positions is reported as `(i, j, k)`, even when
/// other positions hold the same values.
/// In value mode the triplets are returned in increasing order.
///
/// # Examples
///
/// ```
/// use unionsum::{BruteForce, IndexTriplet, ThreeSum};
///
/// let nums = [0, 0, 0, 0];
///
/// assert_eq!(BruteForce.index_triplets(&nums, 0).len(), 4);
/// assert_eq!(BruteForce.value_triplets(&nums, 0).len(), 1);
/// assert_eq!(BruteForce.index_triplets(&nums, 0)[0], IndexTriplet(0, 1, 2));
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct BruteForce;

impl BruteForce {
    /// Calls `found` for every `i < j < k` whose values add up to `target`.
    fn for_each_triple<F>(nums: &[i64], target: i64, mut found: F) where
        F: FnMut(usize, usize, usize),
    {
        let target = i128::from(target);
        let len = nums.len();

        for i in 0 .. len {
            for j in i + 1 .. len {
                for k in j + 1 .. len {
                    if three_sum::sum(nums[i], nums[j], nums[k]) == target {
                        found(i, j, k);
                    }
                }
            }
        }
    }
}

impl ThreeSum for BruteForce {
    fn index_triplets(&self, nums: &[i64], target: i64) -> Vec<IndexTriplet> {
        let mut triplets = Vec::new();

        Self::for_each_triple(nums, target, |i, j, k| {
            triplets.push(IndexTriplet(i, j, k));
        });

        triplets
    }

    fn value_triplets(&self, nums: &[i64], target: i64) -> Vec<ValueTriplet> {
        let mut triplets = BTreeSet::new();

        Self::for_each_triple(nums, target, |i, j, k| {
            triplets.insert(ValueTriplet::new(nums[i], nums[j], nums[k]));
        });

        triplets.into_iter().collect()
    }
}
