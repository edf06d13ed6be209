#[cfg(test)]
mod test {
    use crate::set::Interval;
    use crate::IntervalSet;
    use proptest::collection::btree_set;
    use proptest::prelude::*;

    #[cfg(not(feature = "std"))]
    use alloc::vec::Vec;

    impl IntervalSet {
        prop_compose! {
            /// Any valid set: distinct sorted boundaries taken pairwise give
            /// intervals that are non-empty, ascending, and separated by at
            /// least one uncovered value.
            pub(crate) fn arbitrary()(bounds in btree_set(-1000i64..=1000, 0..=32usize)) -> IntervalSet {
                let bounds: Vec<i64> = bounds.into_iter().collect();
                let intervals =
                    bounds.chunks_exact(2).map(|pair| Interval::new(pair[0], pair[1])).collect();
                IntervalSet { intervals }
            }
        }
    }
}
