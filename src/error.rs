//! The error type shared by the checked operations of this crate.

/// A violated precondition of one of the checked operations.
///
/// Every variant is reported before any state is changed, so a failed call
/// leaves the structure it was called on exactly as it was.
#[derive(thiserror::Error, Clone, Debug, PartialEq, Eq)]
pub enum Error {
    /// A disjoint set was requested with a negative amount of elements.
    #[error("a disjoint set can not have a negative size, got {0}")]
    InvalidSize(isize),
    /// An index outside of `0 .. len` was given to a disjoint set.
    #[error("index {index} is out of range for {len} elements")]
    IndexOutOfRange {
        index: usize,
        len: usize,
    },
    /// The brute force enumeration was refused because the input is too long.
    #[error("brute force enumeration of {len} elements exceeds the limit of {limit}")]
    ResourceExhaustion {
        len: usize,
        limit: usize,
    },
}

pub type Result<T> = std::result::Result<T, Error>;
