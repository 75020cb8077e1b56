//! The sorting strategy, see [`SortedTwoPointer`].
//!
//! [`SortedTwoPointer`]: struct.SortedTwoPointer.html

use {
    std::cmp::Ordering,
    crate::three_sum::{
        self,
        IndexTriplet,
        ThreeSum,
        ValueTriplet,
    },
};

/// Sorts a copy of the input and closes in on each pivot from both ends.
///
/// For every pivot the remaining pair is found with one inward scan, so this takes
/// `O(n log n + n²)` time and `O(n)` memory for the sorted copy.
///
/// A pivot with the same value as the previous pivot is skipped, and after a match both
/// ends step past any run of equal values.
/// Because of this each combination of values is reported once, also in index mode.
/// An index triplet is reported as `(pivot, left, right)` in terms of the original positions.
/// Equal values keep their original order when sorted, so of several equal values the
/// first one is the one that is used as pivot.
///
/// # Examples
///
/// ```
/// use unionsum::{IndexTriplet, SortedTwoPointer, ThreeSum};
///
/// let nums = [-1, 0, 1, 2, -1, -4];
///
/// assert_eq!(
///     SortedTwoPointer.index_triplets(&nums, 0),
///     vec![IndexTriplet(0, 4, 3), IndexTriplet(0, 1, 2)],
/// );
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct SortedTwoPointer;

impl SortedTwoPointer {
    /// Calls `found` with the sorted positions of every distinct match.
    fn scan<F>(sorted: &[i64], target: i64, mut found: F) where
        F: FnMut(usize, usize, usize),
    {
        let target = i128::from(target);
        let len = sorted.len();

        for i in 0 .. len.saturating_sub(2) {
            if i > 0 && sorted[i] == sorted[i - 1] {
                continue
            }

            let mut left = i + 1;
            let mut right = len - 1;

            while left < right {
                match Ord::cmp(&three_sum::sum(sorted[i], sorted[left], sorted[right]), &target) {
                    Ordering::Equal => {
                        found(i, left, right);

                        // We skip the pairs with the same values.
                        while left < right && sorted[left] == sorted[left + 1] {
                            left += 1;
                        }
                        while left < right && sorted[right] == sorted[right - 1] {
                            right -= 1;
                        }

                        left += 1;
                        right -= 1;
                    },
                    Ordering::Less => left += 1,
                    Ordering::Greater => right -= 1,
                }
            }
        }
    }
}

impl ThreeSum for SortedTwoPointer {
    fn index_triplets(&self, nums: &[i64], target: i64) -> Vec<IndexTriplet> {
        // The original positions in the order of their values, equal values keep their order.
        let mut order: Vec<usize> = (0 .. nums.len()).collect();
        order.sort_by_key(|&index| nums[index]);

        let sorted: Vec<i64> = order.iter().map(|&index| nums[index]).collect();
        let mut triplets = Vec::new();

        Self::scan(&sorted, target, |i, left, right| {
            triplets.push(IndexTriplet(order[i], order[left], order[right]));
        });

        triplets
    }

    fn value_triplets(&self, nums: &[i64], target: i64) -> Vec<ValueTriplet> {
        let mut sorted = nums.to_vec();
        sorted.sort_unstable();

        let mut triplets = Vec::new();

        Self::scan(&sorted, target, |i, left, right| {
            triplets.push(ValueTriplet::new(sorted[i], sorted[left], sorted[right]));
        });

        triplets
    }
}
