use alloc::vec::Vec;
use core::fmt;
use core::ops::Range;

use crate::IntervalSet;

impl fmt::Debug for IntervalSet {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        // Sized by interval count, not cardinality: a single interval can
        // cover nearly every i64.
        if self.ranges().len() < 16 {
            write!(f, "IntervalSet<{:?}>", self.ranges().collect::<Vec<Range<i64>>>())
        } else {
            write!(
                f,
                "IntervalSet<{:?} values in {:?} intervals between {:?} and {:?}>",
                self.len(),
                self.ranges().len(),
                self.min().unwrap(),
                self.max().unwrap()
            )
        }
    }
}

#[cfg(test)]
mod test {
    use crate::IntervalSet;

    #[cfg(not(feature = "std"))]
    use alloc::format;

    #[test]
    fn debug_lists_small_sets() {
        let set = IntervalSet::from([1..5, 10..21]);
        assert_eq!(format!("{:?}", set), "IntervalSet<[1..5, 10..21]>");
        assert_eq!(format!("{:?}", IntervalSet::new()), "IntervalSet<[]>");
    }

    #[test]
    fn debug_summarizes_large_sets() {
        let set: IntervalSet = (0..20).map(|i| (i * 10)..(i * 10 + 5)).collect();
        assert_eq!(
            format!("{:?}", set),
            "IntervalSet<100 values in 20 intervals between 0 and 194>"
        );
    }
}
