use alloc::vec::Vec;

use crate::set::interval::{cmp_value_interval, Interval};
use crate::{IntervalSet, InvalidRangeError};

impl IntervalSet {
    /// Creates an empty `IntervalSet`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use interval_set::IntervalSet;
    /// let set = IntervalSet::new();
    /// ```
    pub fn new() -> IntervalSet {
        IntervalSet { intervals: Vec::new() }
    }

    /// Adds the half-open range `[start, end)` to the set.
    ///
    /// Every stored interval that overlaps or touches the new range is fused
    /// with it into a single interval. Adding an empty range (`start == end`)
    /// changes nothing; an inverted range (`start > end`) is rejected and the
    /// set is left untouched.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use interval_set::IntervalSet;
    ///
    /// let mut set = IntervalSet::new();
    /// set.add(1, 5).unwrap();
    /// set.add(10, 20).unwrap();
    ///
    /// // touching ranges fuse
    /// set.add(20, 21).unwrap();
    /// // overlapping ranges fuse too
    /// set.add(3, 8).unwrap();
    /// assert_eq!(set.ranges().collect::<Vec<_>>(), [1..8, 10..21]);
    ///
    /// assert!(set.add(5, 2).is_err());
    /// ```
    #[inline]
    pub fn add(&mut self, start: i64, end: i64) -> Result<(), InvalidRangeError> {
        if let Some(interval) = Interval::try_from_bounds(start, end)? {
            self.insert_interval(interval);
        }
        Ok(())
    }

    /// Removes the half-open range `[start, end)` from the set.
    ///
    /// Stored intervals are truncated, deleted, or split in two as needed.
    /// Removing a range that intersects nothing is a no-op, as is removing an
    /// empty range; an inverted range (`start > end`) is rejected and the set
    /// is left untouched.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use interval_set::IntervalSet;
    ///
    /// let mut set = IntervalSet::new();
    /// set.add(1, 8).unwrap();
    /// set.add(10, 21).unwrap();
    ///
    /// // carve a hole: [10, 21) splits in two
    /// set.remove(15, 17).unwrap();
    /// assert_eq!(set.ranges().collect::<Vec<_>>(), [1..8, 10..15, 17..21]);
    ///
    /// // one call may truncate and delete several intervals
    /// set.remove(3, 19).unwrap();
    /// assert_eq!(set.ranges().collect::<Vec<_>>(), [1..3, 19..21]);
    /// ```
    #[inline]
    pub fn remove(&mut self, start: i64, end: i64) -> Result<(), InvalidRangeError> {
        if let Some(interval) = Interval::try_from_bounds(start, end)? {
            self.remove_interval(interval);
        }
        Ok(())
    }

    /// Returns `true` if `value` is covered by the set.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use interval_set::IntervalSet;
    ///
    /// let mut set = IntervalSet::new();
    /// set.add(1, 3).unwrap();
    /// assert_eq!(set.contains(0), false);
    /// assert_eq!(set.contains(1), true);
    /// assert_eq!(set.contains(2), true);
    /// assert_eq!(set.contains(3), false);
    /// ```
    #[inline]
    pub fn contains(&self, value: i64) -> bool {
        self.intervals.binary_search_by(|iv| cmp_value_interval(value, *iv).reverse()).is_ok()
    }

    /// Returns `true` if every value of the half-open range `[start, end)` is
    /// covered by the set.
    ///
    /// # Examples
    ///
    /// ```
    /// use interval_set::IntervalSet;
    ///
    /// let mut set = IntervalSet::new();
    /// // An empty range is always contained
    /// assert!(set.contains_range(7, 7));
    ///
    /// set.add(1, 100).unwrap();
    /// assert!(set.contains_range(1, 100));
    /// assert!(set.contains_range(2, 100));
    /// // 0 is not contained
    /// assert!(!set.contains_range(0, 2));
    /// // 100 is not contained
    /// assert!(!set.contains_range(1, 101));
    /// ```
    #[inline]
    pub fn contains_range(&self, start: i64, end: i64) -> bool {
        if start >= end {
            // Empty/Invalid ranges are always contained
            return true;
        }
        // The stored intervals are separated by uncovered values, so a fully
        // covered range fits inside a single one of them.
        match self.intervals.binary_search_by(|iv| cmp_value_interval(start, *iv).reverse()) {
            Ok(loc) => self.intervals[loc].contains_interval(&Interval::new(start, end)),
            Err(_) => false,
        }
    }

    /// Pushes the range `[start, end)` in the set only if it begins at or
    /// after the current maximum.
    ///
    /// Returns whether the range was appended. A range touching the stored
    /// maximum extends the last interval; an empty or inverted range is never
    /// appended.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use interval_set::IntervalSet;
    ///
    /// let mut set = IntervalSet::new();
    /// assert!(set.push(1, 3));
    /// // touching the end of the set extends the last interval
    /// assert!(set.push(3, 5));
    /// // starting below the end of the set is refused
    /// assert_eq!(set.push(2, 4), false);
    ///
    /// assert_eq!(set.ranges().collect::<Vec<_>>(), [1..5]);
    /// ```
    #[inline]
    pub fn push(&mut self, start: i64, end: i64) -> bool {
        if start >= end {
            return false;
        }
        match self.intervals.last_mut() {
            Some(last) if start < last.end => false,
            Some(last) if start == last.end => {
                last.end = end;
                true
            }
            _otherwise => {
                self.intervals.push(Interval::new(start, end));
                true
            }
        }
    }

    /// Clears all integers in this set.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use interval_set::IntervalSet;
    ///
    /// let mut set = IntervalSet::new();
    /// set.add(1, 5).unwrap();
    /// assert_eq!(set.contains(1), true);
    /// set.clear();
    /// assert_eq!(set.contains(1), false);
    /// ```
    #[inline]
    pub fn clear(&mut self) {
        self.intervals.clear();
    }

    /// Returns `true` if there are no integers in this set.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use interval_set::IntervalSet;
    ///
    /// let mut set = IntervalSet::new();
    /// assert_eq!(set.is_empty(), true);
    ///
    /// set.add(3, 4).unwrap();
    /// assert_eq!(set.is_empty(), false);
    /// ```
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.intervals.is_empty()
    }

    /// Returns the number of distinct integers covered by the set.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use interval_set::IntervalSet;
    ///
    /// let mut set = IntervalSet::new();
    /// assert_eq!(set.len(), 0);
    ///
    /// set.add(3, 4).unwrap();
    /// assert_eq!(set.len(), 1);
    ///
    /// set.add(3, 4).unwrap();
    /// set.add(4, 6).unwrap();
    /// assert_eq!(set.len(), 3);
    /// ```
    #[inline]
    pub fn len(&self) -> u64 {
        self.intervals.iter().map(|interval| interval.len()).sum()
    }

    /// Returns the minimum value in the set (if the set is non-empty).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use interval_set::IntervalSet;
    ///
    /// let mut set = IntervalSet::new();
    /// assert_eq!(set.min(), None);
    ///
    /// set.add(3, 5).unwrap();
    /// assert_eq!(set.min(), Some(3));
    /// ```
    #[inline]
    pub fn min(&self) -> Option<i64> {
        self.intervals.first().map(|iv| iv.start)
    }

    /// Returns the maximum value in the set (if the set is non-empty).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use interval_set::IntervalSet;
    ///
    /// let mut set = IntervalSet::new();
    /// assert_eq!(set.max(), None);
    ///
    /// // the end bound is exclusive
    /// set.add(3, 5).unwrap();
    /// assert_eq!(set.max(), Some(4));
    /// ```
    #[inline]
    pub fn max(&self) -> Option<i64> {
        self.intervals.last().map(|iv| iv.end - 1)
    }

    /// Fuses `new` with the contiguous run of stored intervals it overlaps
    /// or touches.
    pub(crate) fn insert_interval(&mut self, new: Interval) {
        // Participants of the run satisfy `iv.end >= new.start` and
        // `iv.start <= new.end`. Starts and ends are co-sorted, so both
        // predicates are prefix-monotone and partition_point applies.
        let lo = self.intervals.partition_point(|iv| iv.end < new.start);
        let hi = self.intervals.partition_point(|iv| iv.start <= new.end);
        if lo == hi {
            // no overlap: `new` lands between its neighbours untouched
            self.intervals.insert(lo, new);
        } else {
            let start = self.intervals[lo].start.min(new.start);
            let end = self.intervals[hi - 1].end.max(new.end);
            self.intervals[lo] = Interval::new(start, end);
            self.intervals.drain(lo + 1..hi);
        }
        debug_assert!(self.is_normalized());
    }

    /// Deletes every value of `gone` from the stored intervals, truncating
    /// or splitting the ones at the run's edges.
    pub(crate) fn remove_interval(&mut self, gone: Interval) {
        // Strict overlap only: an interval merely touching `gone` keeps all
        // of its values.
        let lo = self.intervals.partition_point(|iv| iv.end <= gone.start);
        let hi = self.intervals.partition_point(|iv| iv.start < gone.end);
        if lo == hi {
            return;
        }
        // Participants form a contiguous run; only the first can keep values
        // below the removal and only the last can keep values above it.
        let first = self.intervals[lo];
        let last = self.intervals[hi - 1];
        let left = if first.start < gone.start {
            Some(Interval::new(first.start, gone.start))
        } else {
            None
        };
        let right =
            if last.end > gone.end { Some(Interval::new(gone.end, last.end)) } else { None };
        match (left, right) {
            (None, None) => {
                self.intervals.drain(lo..hi);
            }
            (Some(left), None) => {
                self.intervals[lo] = left;
                self.intervals.drain(lo + 1..hi);
            }
            (None, Some(right)) => {
                self.intervals[hi - 1] = right;
                self.intervals.drain(lo..hi - 1);
            }
            (Some(left), Some(right)) => {
                if lo == hi - 1 {
                    // interior removal splits one interval in two
                    self.intervals[lo] = left;
                    self.intervals.insert(hi, right);
                } else {
                    self.intervals[lo] = left;
                    self.intervals[hi - 1] = right;
                    self.intervals.drain(lo + 1..hi - 1);
                }
            }
        }
        debug_assert!(self.is_normalized());
    }

    /// Checks the stored shape: non-empty intervals, ascending, separated by
    /// at least one uncovered value.
    pub(crate) fn is_normalized(&self) -> bool {
        self.intervals.iter().all(|iv| iv.start < iv.end)
            && self.intervals.windows(2).all(|pair| pair[0].end < pair[1].start)
    }
}

impl Default for IntervalSet {
    fn default() -> IntervalSet {
        IntervalSet::new()
    }
}

impl Clone for IntervalSet {
    fn clone(&self) -> Self {
        IntervalSet { intervals: self.intervals.clone() }
    }

    fn clone_from(&mut self, other: &Self) {
        self.intervals.clone_from(&other.intervals);
    }
}

#[cfg(test)]
mod tests {
    use proptest::collection::vec;
    use proptest::prelude::*;

    use super::*;

    fn iset(pairs: &[(i64, i64)]) -> IntervalSet {
        IntervalSet { intervals: pairs.iter().map(|&(s, e)| Interval::new(s, e)).collect() }
    }

    #[test]
    fn add_to_empty() {
        let mut set = IntervalSet::new();
        set.add(1, 5).unwrap();
        assert_eq!(set, iset(&[(1, 5)]));
    }

    #[test]
    fn add_disjoint_before() {
        let mut set = iset(&[(10, 20)]);
        set.add(1, 5).unwrap();
        assert_eq!(set, iset(&[(1, 5), (10, 20)]));
    }

    #[test]
    fn add_disjoint_after() {
        let mut set = iset(&[(10, 20)]);
        set.add(30, 40).unwrap();
        assert_eq!(set, iset(&[(10, 20), (30, 40)]));
    }

    #[test]
    fn add_disjoint_between() {
        let mut set = iset(&[(1, 5), (30, 40)]);
        set.add(10, 20).unwrap();
        assert_eq!(set, iset(&[(1, 5), (10, 20), (30, 40)]));
    }

    #[test]
    fn add_touching_start() {
        let mut set = iset(&[(10, 20)]);
        set.add(5, 10).unwrap();
        assert_eq!(set, iset(&[(5, 20)]));
    }

    #[test]
    fn add_touching_end() {
        let mut set = iset(&[(10, 20)]);
        set.add(20, 25).unwrap();
        assert_eq!(set, iset(&[(10, 25)]));
    }

    #[test]
    fn add_touching_both() {
        let mut set = iset(&[(1, 5), (10, 20)]);
        set.add(5, 10).unwrap();
        assert_eq!(set, iset(&[(1, 20)]));
    }

    #[test]
    fn add_overlap_start() {
        let mut set = iset(&[(10, 20)]);
        set.add(5, 12).unwrap();
        assert_eq!(set, iset(&[(5, 20)]));
    }

    #[test]
    fn add_overlap_end() {
        let mut set = iset(&[(10, 20)]);
        set.add(18, 25).unwrap();
        assert_eq!(set, iset(&[(10, 25)]));
    }

    #[test]
    fn add_subset_is_noop() {
        let mut set = iset(&[(10, 20)]);
        set.add(12, 15).unwrap();
        assert_eq!(set, iset(&[(10, 20)]));
    }

    #[test]
    fn add_superset() {
        let mut set = iset(&[(10, 20)]);
        set.add(5, 25).unwrap();
        assert_eq!(set, iset(&[(5, 25)]));
    }

    #[test]
    fn add_bridging_several() {
        let mut set = iset(&[(1, 5), (10, 20), (30, 40), (50, 60)]);
        set.add(5, 30).unwrap();
        assert_eq!(set, iset(&[(1, 40), (50, 60)]));
    }

    #[test]
    fn add_empty_is_noop() {
        let mut set = iset(&[(10, 20)]);
        set.add(7, 7).unwrap();
        set.add(10, 10).unwrap();
        set.add(15, 15).unwrap();
        assert_eq!(set, iset(&[(10, 20)]));
    }

    #[test]
    fn add_inverted_is_rejected() {
        let mut set = iset(&[(10, 20)]);
        let err = set.add(5, 2).unwrap_err();
        assert_eq!((err.start(), err.end()), (5, 2));
        assert_eq!(set, iset(&[(10, 20)]));
    }

    #[test]
    fn add_extreme_bounds() {
        let mut set = IntervalSet::new();
        set.add(i64::MIN, i64::MIN + 1).unwrap();
        set.add(i64::MAX - 1, i64::MAX).unwrap();
        assert_eq!(set, iset(&[(i64::MIN, i64::MIN + 1), (i64::MAX - 1, i64::MAX)]));
        assert_eq!(set.min(), Some(i64::MIN));
        assert_eq!(set.max(), Some(i64::MAX - 1));
    }

    #[test]
    fn remove_from_empty() {
        let mut set = IntervalSet::new();
        set.remove(1, 5).unwrap();
        assert_eq!(set, IntervalSet::new());
    }

    #[test]
    fn remove_entire() {
        let mut set = iset(&[(1, 5), (10, 20)]);
        set.remove(10, 20).unwrap();
        assert_eq!(set, iset(&[(1, 5)]));
    }

    #[test]
    fn remove_superset_of_interval() {
        let mut set = iset(&[(10, 20)]);
        set.remove(5, 25).unwrap();
        assert_eq!(set, IntervalSet::new());
    }

    #[test]
    fn remove_left_part() {
        let mut set = iset(&[(10, 20)]);
        set.remove(5, 15).unwrap();
        assert_eq!(set, iset(&[(15, 20)]));
    }

    #[test]
    fn remove_right_part() {
        let mut set = iset(&[(10, 20)]);
        set.remove(15, 25).unwrap();
        assert_eq!(set, iset(&[(10, 15)]));
    }

    #[test]
    fn remove_interior_splits() {
        let mut set = iset(&[(10, 20)]);
        set.remove(12, 17).unwrap();
        assert_eq!(set, iset(&[(10, 12), (17, 20)]));
    }

    #[test]
    fn remove_across_several() {
        let mut set = iset(&[(1, 8), (10, 21), (30, 40)]);
        set.remove(3, 19).unwrap();
        assert_eq!(set, iset(&[(1, 3), (19, 21), (30, 40)]));
    }

    #[test]
    fn remove_everything() {
        let mut set = iset(&[(1, 8), (10, 21), (30, 40)]);
        set.remove(0, 50).unwrap();
        assert_eq!(set, IntervalSet::new());
    }

    #[test]
    fn remove_touching_is_noop() {
        let mut set = iset(&[(10, 20)]);
        set.remove(5, 10).unwrap();
        set.remove(20, 25).unwrap();
        assert_eq!(set, iset(&[(10, 20)]));
    }

    #[test]
    fn remove_in_gap_is_noop() {
        let mut set = iset(&[(1, 5), (10, 20)]);
        set.remove(6, 9).unwrap();
        assert_eq!(set, iset(&[(1, 5), (10, 20)]));
    }

    #[test]
    fn remove_empty_is_noop() {
        let mut set = iset(&[(10, 20)]);
        set.remove(15, 15).unwrap();
        assert_eq!(set, iset(&[(10, 20)]));
    }

    #[test]
    fn remove_inverted_is_rejected() {
        let mut set = iset(&[(10, 20)]);
        let err = set.remove(19, 11).unwrap_err();
        assert_eq!((err.start(), err.end()), (19, 11));
        assert_eq!(set, iset(&[(10, 20)]));
    }

    #[test]
    fn contains_hits_and_misses() {
        let set = iset(&[(1, 5), (10, 20)]);
        assert!(!set.contains(0));
        assert!(set.contains(1));
        assert!(set.contains(4));
        assert!(!set.contains(5));
        assert!(!set.contains(9));
        assert!(set.contains(10));
        assert!(set.contains(19));
        assert!(!set.contains(20));
    }

    #[test]
    fn contains_range_cases() {
        let set = iset(&[(1, 5), (10, 20)]);
        assert!(set.contains_range(1, 5));
        assert!(set.contains_range(2, 4));
        assert!(set.contains_range(10, 20));
        assert!(!set.contains_range(0, 5));
        assert!(!set.contains_range(1, 6));
        // spans the uncovered gap
        assert!(!set.contains_range(1, 20));
        assert!(!set.contains_range(5, 10));
        // empty ranges are contained anywhere
        assert!(set.contains_range(7, 7));
        assert!(set.contains_range(100, 100));
    }

    #[test]
    fn cardinality_and_extrema() {
        let set = iset(&[(1, 5), (10, 20)]);
        assert_eq!(set.len(), 14);
        assert_eq!(set.min(), Some(1));
        assert_eq!(set.max(), Some(19));

        let empty = IntervalSet::new();
        assert_eq!(empty.len(), 0);
        assert_eq!(empty.min(), None);
        assert_eq!(empty.max(), None);
    }

    #[test]
    fn clone_from_reuses_allocation() {
        let source = iset(&[(1, 5), (10, 20)]);
        let mut target = iset(&[(7, 8)]);
        target.clone_from(&source);
        assert_eq!(target, source);
    }

    proptest! {
        #[test]
        fn add_matches_plain_range(
            lo in -300i64..=300,
            len in 0i64..=100,
            checks in vec(-500i64..=500, 100),
        ) {
            let (start, end) = (lo, lo + len);
            let mut set = IntervalSet::new();
            set.add(start, end).unwrap();

            for i in checks {
                let set_has = set.contains(i);
                let range_has = (start..end).contains(&i);
                prop_assert_eq!(
                    set_has, range_has,
                    "value {} in set={} and range={}", i, set_has, range_has
                );
            }
        }
    }
}
