//! The hashing strategy, see [`HashComplement`].
//!
//! [`HashComplement`]: struct.HashComplement.html

use {
    std::{
        convert::TryFrom,
        collections::{
            hash_map,
            BTreeSet,
            HashMap,
            HashSet,
        },
    },
    crate::three_sum::{
        IndexTriplet,
        ThreeSum,
        ValueTriplet,
    },
};

/// For every pivot looks up the value that is still missing among the values seen so far.
///
/// This takes `O(n²)` time and `O(n)` memory for the values seen after the pivot.
///
/// In index mode a triplet is only reported the first time its combination of values is
/// found. It is reported as `(i, k, j)` where `i` is the pivot, `j` the current position and
/// `k` the first position after the pivot holding the missing value.
/// Unlike the other strategies these positions are in the order of their roles and `k` can
/// be larger or smaller than what the other strategies would report.
/// In value mode the triplets are returned in increasing order.
///
/// # Examples
///
/// ```
/// use unionsum::{HashComplement, IndexTriplet, ThreeSum};
///
/// let nums = [-1, 0, 1, 2, -1, -4];
///
/// assert_eq!(
///     HashComplement.index_triplets(&nums, 0),
///     vec![IndexTriplet(0, 1, 2), IndexTriplet(0, 3, 4)],
/// );
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct HashComplement;

/// Returns the value that completes `a` and `b` to `target`, if it fits an `i64`.
#[inline]
fn complement(target: i64, a: i64, b: i64) -> Option<i64> {
    i64::try_from(i128::from(target) - i128::from(a) - i128::from(b)).ok()
}

impl ThreeSum for HashComplement {
    fn index_triplets(&self, nums: &[i64], target: i64) -> Vec<IndexTriplet> {
        let len = nums.len();
        let mut reported = HashSet::new();
        let mut triplets = Vec::new();

        for i in 0 .. len.saturating_sub(2) {
            // The first position after the pivot of each value.
            let mut first_seen = HashMap::new();

            for j in i + 1 .. len {
                let found = complement(target, nums[i], nums[j])
                    .and_then(|value| first_seen.get(&value).copied());

                if let Some(k) = found {
                    if reported.insert(ValueTriplet::new(nums[i], nums[j], nums[k])) {
                        triplets.push(IndexTriplet(i, k, j));
                    }
                }

                if let hash_map::Entry::Vacant(vacant) = first_seen.entry(nums[j]) {
                    vacant.insert(j);
                }
            }
        }

        triplets
    }

    fn value_triplets(&self, nums: &[i64], target: i64) -> Vec<ValueTriplet> {
        let len = nums.len();
        let mut triplets = BTreeSet::new();

        for i in 0 .. len.saturating_sub(2) {
            let mut seen = HashSet::new();

            for j in i + 1 .. len {
                if let Some(value) = complement(target, nums[i], nums[j]) {
                    if seen.contains(&value) {
                        triplets.insert(ValueTriplet::new(nums[i], nums[j], value));
                    }
                }

                seen.insert(nums[j]);
            }
        }

        triplets.into_iter().collect()
    }
}

#[cfg(test)]
mod tests {
    use {
        super::*,
        pretty_assertions::assert_eq,
    };

    #[test]
    fn reports_each_value_triplet_once() {
        let nums = [-1, 0, 1, 2, -1, -4];

        assert_eq!(
            HashComplement.value_triplets(&nums, 0),
            vec![ValueTriplet::new(-1, -1, 2), ValueTriplet::new(-1, 0, 1)],
        );
    }

    #[test]
    fn reports_pivot_complement_current() {
        let nums = [2, 5, -3, 1];

        // The pivot 2 at 0 and -3 at 2 need 1, which is only seen later at 3.
        // At 3 the missing value is -3 which was seen at 2.
        assert_eq!(HashComplement.index_triplets(&nums, 0), vec![IndexTriplet(0, 2, 3)]);
    }

    #[test]
    fn complement_uses_first_position_after_pivot() {
        let nums = [-2, 1, 1, 1];

        // Both later 1s complete the pivot with the first 1 but only the first match counts.
        assert_eq!(HashComplement.index_triplets(&nums, 0), vec![IndexTriplet(0, 1, 2)]);
    }

    #[test]
    fn first_position_is_not_overwritten() {
        let nums = [0, 3, 3, -3];

        // The missing 3 was seen at 1 and at 2, the first one is kept.
        assert_eq!(HashComplement.index_triplets(&nums, 0), vec![IndexTriplet(0, 1, 3)]);
    }

    #[test]
    fn value_triplets_are_deduplicated_across_pivots() {
        let nums = [0, 0, 0, 0];

        assert_eq!(HashComplement.value_triplets(&nums, 0), vec![ValueTriplet::new(0, 0, 0)]);
        assert_eq!(HashComplement.index_triplets(&nums, 0), vec![IndexTriplet(0, 1, 2)]);
    }

    #[test]
    fn complement_outside_i64_is_never_found() {
        let nums = [i64::MIN, i64::MIN, i64::MAX, i64::MIN];

        assert!(HashComplement.index_triplets(&nums, 0).is_empty());
        assert!(HashComplement.value_triplets(&nums, 0).is_empty());
    }

    #[test]
    fn short_input_has_no_triplets() {
        let inputs: [&[i64]; 3] = [&[], &[0], &[0, 0]];

        for &nums in &inputs {
            assert!(HashComplement.index_triplets(nums, 0).is_empty());
            assert!(HashComplement.value_triplets(nums, 0).is_empty());
        }
    }
}
