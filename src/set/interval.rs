use core::cmp::Ordering;
use core::ops::Range;

use crate::InvalidRangeError;

/// This interval is exclusive of end.
#[derive(PartialEq, Eq, PartialOrd, Ord, Copy, Clone, Debug)]
pub(crate) struct Interval {
    pub start: i64,
    pub end: i64,
}

impl IntoIterator for Interval {
    type Item = i64;
    type IntoIter = Range<i64>;

    fn into_iter(self) -> Self::IntoIter {
        self.start..self.end
    }
}

impl IntoIterator for &'_ Interval {
    type Item = i64;
    type IntoIter = Range<i64>;

    fn into_iter(self) -> Self::IntoIter {
        self.start..self.end
    }
}

/// Where `value` sits relative to `iv`: inside it, or on which side of it.
pub(crate) fn cmp_value_interval(value: i64, iv: Interval) -> Ordering {
    if value < iv.start {
        Ordering::Less
    } else if value >= iv.end {
        Ordering::Greater
    } else {
        Ordering::Equal
    }
}

impl Interval {
    pub fn new(start: i64, end: i64) -> Interval {
        debug_assert!(start < end);
        Interval { start, end }
    }

    /// Checks a caller-supplied pair of bounds. Inverted bounds are an
    /// error, equal bounds are a valid empty range (`None`).
    pub fn try_from_bounds(start: i64, end: i64) -> Result<Option<Interval>, InvalidRangeError> {
        match start.cmp(&end) {
            Ordering::Less => Ok(Some(Interval::new(start, end))),
            Ordering::Equal => Ok(None),
            Ordering::Greater => Err(InvalidRangeError { start, end }),
        }
    }

    pub fn contains_interval(&self, interval: &Interval) -> bool {
        self.start <= interval.start && interval.end <= self.end
    }

    pub fn len(&self) -> u64 {
        width(self.start, self.end)
    }
}

/// The number of integers in `[start, end)`. Exact for `start <= end`:
/// casting both bounds to `u64` offsets them by the same amount, so the
/// wrapped difference is the true count even when it does not fit in `i64`.
pub(crate) fn width(start: i64, end: i64) -> u64 {
    debug_assert!(start <= end);
    (end as u64).wrapping_sub(start as u64)
}
