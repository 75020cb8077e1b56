//! Finds all triplets in a sequence of integers that add up to a target.
//!
//! There are three strategies which implement [`ThreeSum`]:
//!
//! - [`BruteForce`] tries every triple of positions in `O(n³)` time.
//! - [`SortedTwoPointer`] sorts the input and scans inward from both ends in `O(n²)` time.
//! - [`HashComplement`] looks up the missing third value in a map in `O(n²)` time.
//!
//! For the same input all three find the same set of value triplets.
//! Their index triplets may differ, since each has its own rule for which positions
//! it reports when values repeat.
//!
//! All sums are computed as `i128` so no input can make them overflow.
//!
//! [`ThreeSum`]: trait.ThreeSum.html
//! [`BruteForce`]: struct.BruteForce.html
//! [`SortedTwoPointer`]: struct.SortedTwoPointer.html
//! [`HashComplement`]: struct.HashComplement.html

use {
    std::fmt,
    log::{
        debug,
        warn,
    },
    crate::error::{
        Error,
        Result,
    },
};

mod triplet;
pub mod brute_force;
pub mod two_pointer;
pub mod hash_complement;

pub use self::{
    triplet::{
        IndexTriplet,
        ValueTriplet,
        Mode,
        Triplets,
    },
    brute_force::BruteForce,
    two_pointer::SortedTwoPointer,
    hash_complement::HashComplement,
};

/// Returns `a + b + c` without any chance of overflow.
#[inline]
pub(crate) fn sum(a: i64, b: i64, c: i64) -> i128 {
    i128::from(a) + i128::from(b) + i128::from(c)
}

/// A strategy to enumerate the triplets of a sequence that add up to a target.
///
/// # Examples
///
/// ```
/// use unionsum::{HashComplement, ThreeSum, ValueTriplet};
///
/// let nums = [-1, 0, 1, 2, -1, -4];
///
/// assert_eq!(
///     HashComplement.value_triplets(&nums, 0),
///     vec![ValueTriplet::new(-1, -1, 2), ValueTriplet::new(-1, 0, 1)],
/// );
/// ```
pub trait ThreeSum {
    /// Returns position triplets whose values add up to `target`.
    fn index_triplets(&self, nums: &[i64], target: i64) -> Vec<IndexTriplet>;

    /// Returns every distinct combination of values that adds up to `target` once.
    fn value_triplets(&self, nums: &[i64], target: i64) -> Vec<ValueTriplet>;

    /// Returns the triplets in the given `mode`.
    fn enumerate(&self, nums: &[i64], target: i64, mode: Mode) -> Triplets {
        match mode {
            Mode::Index => Triplets::Index(self.index_triplets(nums, target)),
            Mode::Value => Triplets::Value(self.value_triplets(nums, target)),
        }
    }
}

/// Selects one of the strategies at run time.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Strategy {
    BruteForce,
    SortedTwoPointer,
    HashComplement,
}

impl Strategy {
    /// Every strategy, from the slowest to the fastest.
    pub const ALL: [Strategy; 3] = [
        Strategy::BruteForce,
        Strategy::SortedTwoPointer,
        Strategy::HashComplement,
    ];

    /// Returns the implementation of this strategy.
    pub fn as_three_sum(self) -> &'static dyn ThreeSum {
        match self {
            Strategy::BruteForce => &BruteForce,
            Strategy::SortedTwoPointer => &SortedTwoPointer,
            Strategy::HashComplement => &HashComplement,
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(match self {
            Strategy::BruteForce => "brute force",
            Strategy::SortedTwoPointer => "sorted two pointer",
            Strategy::HashComplement => "hash complement",
        })
    }
}

/// The settings of [`enumerate_triplets`].
///
/// [`enumerate_triplets`]: fn.enumerate_triplets.html
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Options {
    /// The value the triplets have to add up to.
    pub target: i64,
    /// Whether positions or values are reported.
    pub mode: Mode,
    /// The longest input the brute force strategy accepts, `None` for no limit.
    pub brute_force_limit: Option<usize>,
}

impl Options {
    /// Returns these options with a different target.
    pub fn target(self, target: i64) -> Self {
        Self { target, ..self }
    }

    /// Returns these options with a different mode.
    pub fn mode(self, mode: Mode) -> Self {
        Self { mode, ..self }
    }

    /// Returns these options with a limit on the brute force input length.
    pub fn brute_force_limit(self, limit: usize) -> Self {
        Self { brute_force_limit: Some(limit), ..self }
    }
}

/// Enumerates the triplets of `nums` with the given `strategy`.
///
/// # Errors
///
/// Returns [`Error::ResourceExhaustion`] if `strategy` is `BruteForce` and `nums` is longer
/// than `options.brute_force_limit`. Nothing is enumerated in that case.
///
/// # Examples
///
/// ```
/// use unionsum::{enumerate_triplets, Mode, Options, Strategy, Triplets, ValueTriplet};
///
/// let nums = [0, 1, 2, -1, -2];
/// let options = Options::default().mode(Mode::Value);
///
/// let triplets = enumerate_triplets(Strategy::SortedTwoPointer, &nums, &options)?;
///
/// assert_eq!(
///     triplets,
///     Triplets::Value(vec![ValueTriplet::new(-2, 0, 2), ValueTriplet::new(-1, 0, 1)]),
/// );
/// # Ok::<(), unionsum::Error>(())
/// ```
///
/// [`Error::ResourceExhaustion`]: ../error/enum.Error.html#variant.ResourceExhaustion
pub fn enumerate_triplets(strategy: Strategy, nums: &[i64], options: &Options) -> Result<Triplets> {
    if let (Strategy::BruteForce, Some(limit)) = (strategy, options.brute_force_limit) {
        if nums.len() > limit {
            warn!("refusing brute force enumeration of {} elements, the limit is {}", nums.len(), limit);
            return Err(Error::ResourceExhaustion { len: nums.len(), limit })
        }
    }

    let triplets = strategy.as_three_sum().enumerate(nums, options.target, options.mode);
    debug!(
        "{} found {} triplets in {} elements for target {}",
        strategy, triplets.len(), nums.len(), options.target,
    );

    Ok(triplets)
}
