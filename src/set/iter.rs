use alloc::vec;
use alloc::vec::Vec;
use core::iter::FusedIterator;
use core::ops::Range;
use core::slice;

use crate::set::interval::width;
use crate::set::Interval;
use crate::{IntervalSet, NonSortedRanges};

/// An iterator for `IntervalSet`.
#[derive(Clone)]
pub struct Iter<'a> {
    front: Option<Range<i64>>,
    intervals: slice::Iter<'a, Interval>,
    back: Option<Range<i64>>,
}

/// An iterator for `IntervalSet`.
#[derive(Clone)]
pub struct IntoIter {
    front: Option<Range<i64>>,
    intervals: vec::IntoIter<Interval>,
    back: Option<Range<i64>>,
}

/// An iterator over the intervals of an `IntervalSet` as half-open
/// `Range<i64>` values.
#[derive(Clone)]
pub struct Ranges<'a> {
    inner: slice::Iter<'a, Interval>,
}

#[inline]
fn and_then_or_clear<T, U>(opt: &mut Option<T>, f: impl FnOnce(&mut T) -> Option<U>) -> Option<U> {
    let x = f(opt.as_mut()?);
    if x.is_none() {
        *opt = None;
    }
    x
}

impl Iter<'_> {
    fn new(intervals: &[Interval]) -> Iter {
        Iter { front: None, intervals: intervals.iter(), back: None }
    }
}

impl IntoIter {
    fn new(intervals: Vec<Interval>) -> IntoIter {
        IntoIter { front: None, intervals: intervals.into_iter(), back: None }
    }
}

fn size_hint_impl(
    front: &Option<Range<i64>>,
    intervals: &impl AsRef<[Interval]>,
    back: &Option<Range<i64>>,
) -> (usize, Option<usize>) {
    let first_size = front.as_ref().map_or(0, |r| width(r.start, r.end));
    let last_size = back.as_ref().map_or(0, |r| width(r.start, r.end));
    // The pieces are disjoint parts of one set, whose cardinality always
    // fits in a u64, so summing cannot overflow.
    let mut size = first_size + last_size;
    for interval in intervals.as_ref() {
        size += interval.len();
    }
    match usize::try_from(size) {
        Ok(size) => (size, Some(size)),
        Err(_) => (usize::MAX, None),
    }
}

impl Iterator for Iter<'_> {
    type Item = i64;

    fn next(&mut self) -> Option<i64> {
        loop {
            if let Some(x) = and_then_or_clear(&mut self.front, Iterator::next) {
                return Some(x);
            }
            self.front = match self.intervals.next() {
                Some(inner) => Some(inner.into_iter()),
                None => return and_then_or_clear(&mut self.back, Iterator::next),
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        size_hint_impl(&self.front, &self.intervals, &self.back)
    }

    fn count(self) -> usize
    where
        Self: Sized,
    {
        let mut count = self.front.map_or(0, |r| width(r.start, r.end));
        count += self.intervals.map(|interval| interval.len()).sum::<u64>();
        count += self.back.map_or(0, |r| width(r.start, r.end));
        usize::try_from(count).unwrap_or(usize::MAX)
    }

    fn nth(&mut self, n: usize) -> Option<Self::Item> {
        let mut n = n as u64;
        let nth_advance = |r: &mut Range<i64>| {
            let len = width(r.start, r.end);
            if n < len {
                r.nth(n as usize)
            } else {
                n -= len;
                None
            }
        };
        if let Some(x) = and_then_or_clear(&mut self.front, nth_advance) {
            return Some(x);
        }
        for interval in self.intervals.by_ref() {
            let len = interval.len();
            if n < len {
                let mut front_iter = interval.into_iter();
                let result = front_iter.nth(n as usize);
                self.front = Some(front_iter);
                return result;
            }
            n -= len;
        }
        and_then_or_clear(&mut self.back, |r| {
            let len = width(r.start, r.end);
            if n < len {
                r.nth(n as usize)
            } else {
                None
            }
        })
    }
}

impl DoubleEndedIterator for Iter<'_> {
    fn next_back(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(x) = and_then_or_clear(&mut self.back, DoubleEndedIterator::next_back) {
                return Some(x);
            }
            self.back = match self.intervals.next_back() {
                Some(inner) => Some(inner.into_iter()),
                None => {
                    return and_then_or_clear(&mut self.front, DoubleEndedIterator::next_back)
                }
            }
        }
    }

    fn nth_back(&mut self, n: usize) -> Option<Self::Item> {
        let mut n = n as u64;
        let nth_back_advance = |r: &mut Range<i64>| {
            let len = width(r.start, r.end);
            if n < len {
                r.nth_back(n as usize)
            } else {
                n -= len;
                None
            }
        };
        if let Some(x) = and_then_or_clear(&mut self.back, nth_back_advance) {
            return Some(x);
        }
        for interval in self.intervals.by_ref().rev() {
            let len = interval.len();
            if n < len {
                let mut back_iter = interval.into_iter();
                let result = back_iter.nth_back(n as usize);
                self.back = Some(back_iter);
                return result;
            }
            n -= len;
        }
        and_then_or_clear(&mut self.front, |r| {
            let len = width(r.start, r.end);
            if n < len {
                r.nth_back(n as usize)
            } else {
                None
            }
        })
    }
}

#[cfg(target_pointer_width = "64")]
impl ExactSizeIterator for Iter<'_> {}
impl FusedIterator for Iter<'_> {}

impl Iterator for IntoIter {
    type Item = i64;

    fn next(&mut self) -> Option<i64> {
        loop {
            if let Some(x) = and_then_or_clear(&mut self.front, Iterator::next) {
                return Some(x);
            }
            match self.intervals.next() {
                Some(inner) => self.front = Some(inner.into_iter()),
                None => return and_then_or_clear(&mut self.back, Iterator::next),
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        size_hint_impl(&self.front, &self.intervals, &self.back)
    }

    fn count(self) -> usize
    where
        Self: Sized,
    {
        let mut count = self.front.map_or(0, |r| width(r.start, r.end));
        count += self.intervals.map(|interval| interval.len()).sum::<u64>();
        count += self.back.map_or(0, |r| width(r.start, r.end));
        usize::try_from(count).unwrap_or(usize::MAX)
    }

    fn nth(&mut self, n: usize) -> Option<Self::Item> {
        let mut n = n as u64;
        let nth_advance = |r: &mut Range<i64>| {
            let len = width(r.start, r.end);
            if n < len {
                r.nth(n as usize)
            } else {
                n -= len;
                None
            }
        };
        if let Some(x) = and_then_or_clear(&mut self.front, nth_advance) {
            return Some(x);
        }
        for interval in self.intervals.by_ref() {
            let len = interval.len();
            if n < len {
                let mut front_iter = interval.into_iter();
                let result = front_iter.nth(n as usize);
                self.front = Some(front_iter);
                return result;
            }
            n -= len;
        }
        and_then_or_clear(&mut self.back, |r| {
            let len = width(r.start, r.end);
            if n < len {
                r.nth(n as usize)
            } else {
                None
            }
        })
    }
}

impl DoubleEndedIterator for IntoIter {
    fn next_back(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(x) = and_then_or_clear(&mut self.back, DoubleEndedIterator::next_back) {
                return Some(x);
            }
            match self.intervals.next_back() {
                Some(inner) => self.back = Some(inner.into_iter()),
                None => {
                    return and_then_or_clear(&mut self.front, DoubleEndedIterator::next_back)
                }
            }
        }
    }

    fn nth_back(&mut self, n: usize) -> Option<Self::Item> {
        let mut n = n as u64;
        let nth_back_advance = |r: &mut Range<i64>| {
            let len = width(r.start, r.end);
            if n < len {
                r.nth_back(n as usize)
            } else {
                n -= len;
                None
            }
        };
        if let Some(x) = and_then_or_clear(&mut self.back, nth_back_advance) {
            return Some(x);
        }
        for interval in self.intervals.by_ref().rev() {
            let len = interval.len();
            if n < len {
                let mut back_iter = interval.into_iter();
                let result = back_iter.nth_back(n as usize);
                self.back = Some(back_iter);
                return result;
            }
            n -= len;
        }
        and_then_or_clear(&mut self.front, |r| {
            let len = width(r.start, r.end);
            if n < len {
                r.nth_back(n as usize)
            } else {
                None
            }
        })
    }
}

#[cfg(target_pointer_width = "64")]
impl ExactSizeIterator for IntoIter {}
impl FusedIterator for IntoIter {}

impl Iterator for Ranges<'_> {
    type Item = Range<i64>;

    fn next(&mut self) -> Option<Range<i64>> {
        self.inner.next().map(|iv| iv.start..iv.end)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl DoubleEndedIterator for Ranges<'_> {
    fn next_back(&mut self) -> Option<Range<i64>> {
        self.inner.next_back().map(|iv| iv.start..iv.end)
    }
}

impl ExactSizeIterator for Ranges<'_> {}
impl FusedIterator for Ranges<'_> {}

impl IntervalSet {
    /// Iterator over each value stored in the set, guarantees values are
    /// ordered by value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use interval_set::IntervalSet;
    ///
    /// let set = IntervalSet::from([1..3, 7..9]);
    /// let mut iter = set.iter();
    ///
    /// assert_eq!(iter.next(), Some(1));
    /// assert_eq!(iter.next(), Some(2));
    /// assert_eq!(iter.next(), Some(7));
    /// assert_eq!(iter.next(), Some(8));
    /// assert_eq!(iter.next(), None);
    /// ```
    pub fn iter(&self) -> Iter {
        Iter::new(&self.intervals)
    }

    /// Iterator over the stored intervals as half-open `Range<i64>` values,
    /// ordered by start and guaranteed disjoint.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use interval_set::IntervalSet;
    ///
    /// let mut set = IntervalSet::new();
    /// set.add(10, 20).unwrap();
    /// set.add(1, 5).unwrap();
    ///
    /// assert_eq!(set.ranges().collect::<Vec<_>>(), [1..5, 10..20]);
    /// ```
    pub fn ranges(&self) -> Ranges {
        Ranges { inner: self.intervals.iter() }
    }
}

impl<'a> IntoIterator for &'a IntervalSet {
    type Item = i64;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Iter<'a> {
        self.iter()
    }
}

impl IntoIterator for IntervalSet {
    type Item = i64;
    type IntoIter = IntoIter;

    fn into_iter(self) -> IntoIter {
        IntoIter::new(self.intervals)
    }
}

impl<const N: usize> From<[Range<i64>; N]> for IntervalSet {
    fn from(arr: [Range<i64>; N]) -> Self {
        IntervalSet::from_iter(arr)
    }
}

impl FromIterator<Range<i64>> for IntervalSet {
    fn from_iter<I: IntoIterator<Item = Range<i64>>>(iterator: I) -> IntervalSet {
        let mut set = IntervalSet::new();
        set.extend(iterator);
        set
    }
}

impl<'a> FromIterator<&'a Range<i64>> for IntervalSet {
    fn from_iter<I: IntoIterator<Item = &'a Range<i64>>>(iterator: I) -> IntervalSet {
        let mut set = IntervalSet::new();
        set.extend(iterator);
        set
    }
}

impl Extend<Range<i64>> for IntervalSet {
    /// Adds multiple ranges, fusing overlapping or touching ones.
    ///
    /// The ranges don't have to be sorted or disjoint; empty and inverted
    /// ranges cover nothing and are skipped.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use interval_set::IntervalSet;
    ///
    /// let mut set = IntervalSet::new();
    /// set.extend([10..20, 1..4, 18..25, 7..7]);
    /// assert_eq!(set.ranges().collect::<Vec<_>>(), [1..4, 10..25]);
    /// ```
    fn extend<I: IntoIterator<Item = Range<i64>>>(&mut self, ranges: I) {
        for range in ranges {
            if range.start < range.end {
                self.insert_interval(Interval::new(range.start, range.end));
            }
        }
    }
}

impl<'a> Extend<&'a Range<i64>> for IntervalSet {
    /// Adds multiple ranges, fusing overlapping or touching ones.
    ///
    /// The ranges don't have to be sorted or disjoint; empty and inverted
    /// ranges cover nothing and are skipped.
    fn extend<I: IntoIterator<Item = &'a Range<i64>>>(&mut self, ranges: I) {
        self.extend(ranges.into_iter().cloned());
    }
}

impl IntervalSet {
    /// Create the set from a sorted iterator of ranges. Ranges must be
    /// ascending and disjoint: each must start at or after the previous one
    /// ends. Empty ranges are skipped.
    ///
    /// Returns `Ok` with the requested `IntervalSet`, `Err` with the number
    /// of ranges that were correctly appended before failure.
    ///
    /// # Example: Create a set from an ordered list of ranges.
    ///
    /// ```rust
    /// use interval_set::IntervalSet;
    ///
    /// let set = IntervalSet::from_sorted_ranges([1..5, 5..7, 10..20]).unwrap();
    ///
    /// assert_eq!(set.ranges().collect::<Vec<_>>(), [1..7, 10..20]);
    /// ```
    ///
    /// # Example: Try to create a set from a non-ordered list of ranges.
    ///
    /// ```rust
    /// use interval_set::IntervalSet;
    ///
    /// let error = IntervalSet::from_sorted_ranges([10..20, 1..5]).unwrap_err();
    ///
    /// assert_eq!(error.valid_until(), 1);
    /// ```
    pub fn from_sorted_ranges<I: IntoIterator<Item = Range<i64>>>(
        iterator: I,
    ) -> Result<IntervalSet, NonSortedRanges> {
        let mut set = IntervalSet::new();
        set.append(iterator).map(|_| set)
    }

    /// Extend the set with a sorted iterator of ranges.
    ///
    /// Each range must start at or after the end of the set; a range touching
    /// the stored maximum extends the last interval. Empty ranges are
    /// skipped. If a range doesn't satisfy this requirement, it is not added
    /// and the append operation is stopped.
    ///
    /// Returns `Ok` with the number of non-empty ranges appended to the set,
    /// `Err` with the number of ranges we effectively appended before an
    /// error occurred.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use interval_set::IntervalSet;
    ///
    /// let mut set = IntervalSet::new();
    /// assert_eq!(set.append([0..5, 7..10]), Ok(2));
    ///
    /// assert_eq!(set.ranges().collect::<Vec<_>>(), [0..5, 7..10]);
    /// ```
    pub fn append<I: IntoIterator<Item = Range<i64>>>(
        &mut self,
        iterator: I,
    ) -> Result<u64, NonSortedRanges> {
        let mut count = 0;

        for range in iterator {
            if range.start == range.end {
                continue;
            }
            if !self.push(range.start, range.end) {
                return Err(NonSortedRanges { valid_until: count });
            }
            count += 1;
        }

        Ok(count)
    }
}
