//! The results of a three-sum enumeration.

use std::fmt;

/// Three positions into the input whose values add up to the target.
///
/// Which of several index triplets with the same values is reported, and in what order
/// the positions appear, depends on the strategy that found it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct IndexTriplet(pub usize, pub usize, pub usize);

impl IndexTriplet {
    /// Returns the positions in the order they were reported.
    #[inline]
    pub fn indices(&self) -> [usize; 3] {
        [self.0, self.1, self.2]
    }

    /// Returns `true` if no position occurs twice.
    #[inline]
    pub fn is_distinct(&self) -> bool {
        self.0 != self.1 && self.0 != self.2 && self.1 != self.2
    }

    /// Returns `true` if all positions are in bounds and their values add up to `target`.
    ///
    /// # Examples
    ///
    /// ```
    /// use unionsum::IndexTriplet;
    ///
    /// let nums = [3, -1, 5, -2];
    ///
    /// assert!(IndexTriplet(0, 1, 3).sums_to(&nums, 0));
    /// assert!(!IndexTriplet(0, 1, 2).sums_to(&nums, 0));
    /// assert!(!IndexTriplet(0, 1, 4).sums_to(&nums, 0));
    /// ```
    pub fn sums_to(&self, nums: &[i64], target: i64) -> bool {
        let mut sum = 0;

        for &index in &self.indices() {
            match nums.get(index) {
                Some(&value) => sum += i128::from(value),
                None => return false,
            }
        }

        sum == i128::from(target)
    }
}

impl fmt::Display for IndexTriplet {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({}, {}, {})", self.0, self.1, self.2)
    }
}

/// Three values that add up to the target, stored in increasing order.
///
/// Because the values are always sorted, two triplets are equal exactly when they
/// contain the same values as a multiset.
///
/// # Examples
///
/// ```
/// use unionsum::ValueTriplet;
///
/// let triplet = ValueTriplet::new(2, -1, -1);
///
/// assert_eq!(triplet.values(), [-1, -1, 2]);
/// assert_eq!(triplet, ValueTriplet::new(-1, 2, -1));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ValueTriplet([i64; 3]);

impl ValueTriplet {
    /// Creates the triplet of `a`, `b` and `c` in increasing order.
    pub fn new(a: i64, b: i64, c: i64) -> Self {
        let mut values = [a, b, c];
        values.sort_unstable();

        ValueTriplet(values)
    }

    /// Returns the values in increasing order.
    #[inline]
    pub fn values(&self) -> [i64; 3] {
        self.0
    }

    /// Returns the sum of the values, this can not overflow.
    #[inline]
    pub fn sum(&self) -> i128 {
        self.0.iter().map(|&value| i128::from(value)).sum()
    }
}

impl From<(i64, i64, i64)> for ValueTriplet {
    #[inline]
    fn from((a, b, c): (i64, i64, i64)) -> Self {
        Self::new(a, b, c)
    }
}

impl fmt::Display for ValueTriplet {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({}, {}, {})", self.0[0], self.0[1], self.0[2])
    }
}

/// Chooses whether positions or values are reported.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Mode {
    /// Report positions, see [`IndexTriplet`].
    ///
    /// [`IndexTriplet`]: struct.IndexTriplet.html
    Index,
    /// Report each distinct combination of values once, see [`ValueTriplet`].
    ///
    /// [`ValueTriplet`]: struct.ValueTriplet.html
    Value,
}

impl Default for Mode {
    fn default() -> Self {
        Mode::Index
    }
}

/// The triplets found by an enumeration in the requested [`Mode`].
///
/// [`Mode`]: enum.Mode.html
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Triplets {
    Index(Vec<IndexTriplet>),
    Value(Vec<ValueTriplet>),
}

impl Triplets {
    /// Returns the amount of triplets.
    pub fn len(&self) -> usize {
        match self {
            Triplets::Index(triplets) => triplets.len(),
            Triplets::Value(triplets) => triplets.len(),
        }
    }

    /// Returns `true` if no triplet was found.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the mode these triplets were found in.
    pub fn mode(&self) -> Mode {
        match self {
            Triplets::Index(_) => Mode::Index,
            Triplets::Value(_) => Mode::Value,
        }
    }
}
