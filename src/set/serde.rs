use serde::de::SeqAccess;
use serde::de::Visitor;
use serde::ser::SerializeSeq;
use serde::Deserialize;
use serde::Deserializer;
use serde::Serialize;

use crate::set::Interval;
use crate::IntervalSet;

impl<'de> Deserialize<'de> for IntervalSet {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct SetVisitor;

        impl<'de> Visitor<'de> for SetVisitor {
            type Value = IntervalSet;

            fn expecting(&self, formatter: &mut core::fmt::Formatter) -> core::fmt::Result {
                formatter.write_str("a sequence of (start, end) interval pairs")
            }

            // The stored shape is validated here: a deserialized set upholds
            // the same invariants as one built through `add`.
            fn visit_seq<A>(self, mut seq: A) -> Result<IntervalSet, A::Error>
            where
                A: SeqAccess<'de>,
            {
                let mut intervals: Vec<Interval> = Vec::new();
                while let Some((start, end)) = seq.next_element::<(i64, i64)>()? {
                    if start >= end {
                        return Err(serde::de::Error::custom(format!(
                            "interval [{start}, {end}) is empty or inverted"
                        )));
                    }
                    if let Some(last) = intervals.last() {
                        if start <= last.end {
                            return Err(serde::de::Error::custom(format!(
                                "interval [{start}, {end}) overlaps or touches [{}, {})",
                                last.start, last.end
                            )));
                        }
                    }
                    intervals.push(Interval::new(start, end));
                }
                Ok(IntervalSet { intervals })
            }
        }

        deserializer.deserialize_seq(SetVisitor)
    }
}

impl Serialize for IntervalSet {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        let mut seq = serializer.serialize_seq(Some(self.intervals.len()))?;
        for iv in &self.intervals {
            seq.serialize_element(&(iv.start, iv.end))?;
        }
        seq.end()
    }
}
