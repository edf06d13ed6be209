//! This crate provides an [`IntervalSet`], a set of `i64` values stored as
//! sorted, disjoint half-open intervals `[start, end)` rather than as
//! individual elements.
//!
//! Adding a range merges it with every stored interval it overlaps or
//! touches; removing a range truncates, deletes, or splits the intervals it
//! intersects. Both operations locate their work with binary searches and
//! never look at the integers inside a range, so covering a billion values
//! costs the same as covering three.
//!
//! # Examples
//!
//! ```rust
//! use interval_set::IntervalSet;
//!
//! let mut set = IntervalSet::new();
//!
//! set.add(1, 5).unwrap();
//! set.add(10, 20).unwrap();
//! // [20, 21) touches [10, 20), so the two fuse into one interval
//! set.add(20, 21).unwrap();
//! assert_eq!(set.ranges().collect::<Vec<_>>(), [1..5, 10..21]);
//!
//! // carve a hole out of the middle of [10, 21)
//! set.remove(15, 17).unwrap();
//! assert_eq!(set.ranges().collect::<Vec<_>>(), [1..5, 10..15, 17..21]);
//!
//! assert!(set.contains(14));
//! assert!(!set.contains(15));
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![warn(missing_docs)]
#![warn(variant_size_differences)]

extern crate alloc;

use core::fmt;

pub use crate::set::{IntervalSet, IntoIter, Iter, Ranges};

mod set;

/// An error returned when a range's bounds are inverted.
///
/// Every range-taking operation requires `start <= end`; a pair with
/// `start > end` describes no set of integers and is rejected before any
/// mutation takes place.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidRangeError {
    start: i64,
    end: i64,
}

impl InvalidRangeError {
    /// The start bound of the rejected range.
    pub fn start(&self) -> i64 {
        self.start
    }

    /// The end bound of the rejected range.
    pub fn end(&self) -> i64 {
        self.end
    }
}

impl fmt::Display for InvalidRangeError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "range start ({}) is greater than its end ({})", self.start, self.end)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for InvalidRangeError {}

/// An error type returned when the ranges given to a bulk constructor are
/// not sorted and disjoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NonSortedRanges {
    valid_until: u64,
}

impl NonSortedRanges {
    /// Returns the number of ranges that were appended before the
    /// out-of-order range was reached.
    pub fn valid_until(&self) -> u64 {
        self.valid_until
    }
}

impl fmt::Display for NonSortedRanges {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "ranges are sorted and disjoint up to the {}th range", self.valid_until())
    }
}

#[cfg(feature = "std")]
impl std::error::Error for NonSortedRanges {}
