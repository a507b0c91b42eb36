use rayon::prelude::*;
use std::cmp::Reverse;
use std::fmt;

use crate::record::BigramRecord;

/// A frequency table is a sequence of bigram records sorted by count,
/// highest first.
///
/// Records sharing a count keep their relative input order.
#[derive(Clone, PartialEq, Eq)]
pub struct FrequencyTable {
    records: Box<[BigramRecord]>,
}

impl FrequencyTable {
    /// Creates a new frequency table from `records` in `O(n log n)` time.
    ///
    /// Rayon's stable merge sort falls back to a sequential algorithm for
    /// small inputs, so there is no parallelism overhead to worry about.
    pub fn new<S>(src: S) -> Self
    where
        S: Into<Vec<BigramRecord>>,
    {
        let mut records = src.into();
        records.par_sort_by_key(|record| Reverse(record.count));

        FrequencyTable {
            records: records.into(),
        }
    }

    /// Consumes the table and returns the sorted records.
    pub fn into_records(self) -> Box<[BigramRecord]> {
        self.records
    }

    #[inline]
    pub fn records(&self) -> &[BigramRecord] {
        &self.records
    }

    /// Returns the number of bigram types in the table.
    #[inline]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns `true` iff `self.len() == 0`.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn iter(&self) -> std::slice::Iter<'_, BigramRecord> {
        self.records.iter()
    }

    /// Checks if the table is sorted by descending count. This is always
    /// true for tables built with [`FrequencyTable::new`].
    pub fn is_sorted(&self) -> bool {
        self.records
            .par_windows(2)
            .all(|pair| pair[0].count >= pair[1].count)
    }

    /// Sum of all counts. Summed in `u128`, so a table of `u64` counts
    /// cannot overflow it.
    pub fn total(&self) -> u128 {
        self.records.iter().map(|record| record.count as u128).sum()
    }

    /// The highest count in the table, `None` when the table is empty.
    pub fn max_count(&self) -> Option<u64> {
        self.records.first().map(|record| record.count)
    }

    /// Returns every record whose count equals the maximum, in table order.
    ///
    /// ```
    /// use bigramstats::{BigramRecord, FrequencyTable};
    ///
    /// let table = FrequencyTable::new(vec![
    ///     BigramRecord::new("x y", 1),
    ///     BigramRecord::new("y z", 3),
    ///     BigramRecord::new("z w", 3),
    /// ]);
    /// let top: Vec<_> = table.most_frequent().iter().map(|r| r.gram.as_str()).collect();
    /// assert_eq!(top, ["y z", "z w"]);
    /// ```
    pub fn most_frequent(&self) -> &[BigramRecord] {
        let max = match self.max_count() {
            Some(max) => max,
            None => return &[],
        };
        let n = self
            .records
            .iter()
            .take_while(|record| record.count == max)
            .count();
        &self.records[..n]
    }

    /// Walks the table from the most frequent record downward, consuming
    /// records while the remaining `threshold` is still positive, and
    /// returns how many were consumed.
    ///
    /// A zero threshold consumes nothing. If the records run out first the
    /// result is the table length.
    pub fn threshold_types(&self, threshold: u128) -> usize {
        let mut remaining = threshold;
        let mut types = 0;
        for record in self.records.iter() {
            if remaining == 0 {
                break;
            }
            remaining = remaining.saturating_sub(record.count as u128);
            types += 1;
        }
        types
    }
}

impl fmt::Debug for FrequencyTable {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "\n-----------------------------------------")?;
        writeln!(f, "FREQUENCY TABLE")?;
        for (rank, record) in self.records.iter().enumerate() {
            writeln!(f, "rank[{}] {:?} {}", rank, record.gram, record.count)?;
        }
        writeln!(f, "-----------------------------------------")
    }
}
