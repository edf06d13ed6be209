use alloc::vec::Vec;

pub use self::iter::{IntoIter, Iter, Ranges};
pub(crate) use self::interval::Interval;

mod arbitrary;
mod fmt;
mod interval;

// Order of these modules matters as it determines the `impl` blocks order in
// the docs
mod inherent;
mod iter;
#[cfg(feature = "serde")]
mod serde;

/// A set of `i64` values stored as sorted, disjoint half-open intervals.
///
/// Stored intervals never overlap and never touch: two intervals with
/// `first.end == second.start` would describe one contiguous block and are
/// always fused. Mutations keep that shape, so the memory footprint scales
/// with the number of contiguous blocks, not with the number of values.
///
/// # Examples
///
/// ```rust
/// use interval_set::IntervalSet;
///
/// let mut set = IntervalSet::new();
///
/// // cover the primes below 10
/// set.add(2, 4).unwrap();
/// set.add(5, 6).unwrap();
/// set.add(7, 8).unwrap();
/// assert_eq!(set.len(), 4);
/// assert_eq!(set.iter().collect::<Vec<i64>>(), [2, 3, 5, 7]);
/// ```
#[derive(PartialEq, Eq)]
pub struct IntervalSet {
    intervals: Vec<Interval>,
}
