use crate::record::BigramRecord;
use crate::table::FrequencyTable;

/// Share of all occurrences that the threshold walk has to reach,
/// expressed as a whole percentage.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ThresholdFraction {
    percent: u8,
}

impl ThresholdFraction {
    pub const DEFAULT_PERCENT: u8 = 10;

    /// Returns `None` for percentages above 100.
    pub fn from_percent(percent: u8) -> Option<Self> {
        (percent <= 100).then_some(Self { percent })
    }

    pub fn percent(&self) -> u8 {
        self.percent
    }

    /// The threshold for `total` occurrences, rounded down.
    ///
    /// ```
    /// use bigramstats::ThresholdFraction;
    ///
    /// let ten = ThresholdFraction::default();
    /// assert_eq!(ten.of(20), 2);
    /// assert_eq!(ten.of(9), 0);
    /// ```
    pub fn of(&self, total: u128) -> u128 {
        let percent = self.percent as u128;
        // floor(total * percent / 100) without forming the product.
        total / 100 * percent + total % 100 * percent / 100
    }
}

impl Default for ThresholdFraction {
    fn default() -> Self {
        Self {
            percent: Self::DEFAULT_PERCENT,
        }
    }
}

/// Aggregate statistics derived from a [`FrequencyTable`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SummaryStats<'a> {
    /// Sum of all counts.
    pub total: u128,
    /// Every record sharing the maximum count, in table order.
    pub most_frequent: &'a [BigramRecord],
    pub fraction: ThresholdFraction,
    /// `fraction` of `total`, rounded down.
    pub threshold: u128,
    /// Number of highest-frequency types needed to reach `threshold`.
    pub threshold_types: usize,
}

impl<'a> SummaryStats<'a> {
    /// Derives the statistics for `table`, whose counts sum to `total`.
    pub fn new(table: &'a FrequencyTable, total: u128, fraction: ThresholdFraction) -> Self {
        let threshold = fraction.of(total);
        SummaryStats {
            total,
            most_frequent: table.most_frequent(),
            fraction,
            threshold,
            threshold_types: table.threshold_types(threshold),
        }
    }

    pub fn max_count(&self) -> Option<u64> {
        self.most_frequent.first().map(|record| record.count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_fraction_is_ten_percent() {
        assert_eq!(ThresholdFraction::default().percent(), 10);
    }

    #[test]
    fn ten_percent_is_floor_of_tenth() {
        let ten = ThresholdFraction::default();
        for total in [0, 1, 9, 10, 19, 20, 99, 101, 12_345] {
            assert_eq!(ten.of(total), total / 10);
        }
    }

    #[test]
    fn fraction_of_large_totals() {
        let ten = ThresholdFraction::default();
        assert_eq!(ten.of(u64::MAX as u128), u64::MAX as u128 / 10);
        assert_eq!(ten.of(u128::MAX), u128::MAX / 10);
        let all = ThresholdFraction::from_percent(100).unwrap();
        assert_eq!(all.of(u128::MAX), u128::MAX);
        let none = ThresholdFraction::from_percent(0).unwrap();
        assert_eq!(none.of(u128::MAX), 0);
    }

    #[test]
    fn rejects_percent_above_hundred() {
        assert!(ThresholdFraction::from_percent(101).is_none());
        assert!(ThresholdFraction::from_percent(0).is_some());
    }

    #[test]
    fn summary_of_small_table() {
        let table = FrequencyTable::new(vec![
            BigramRecord::new("the dog", 5),
            BigramRecord::new("a cat", 5),
            BigramRecord::new("dog ran", 2),
            BigramRecord::new("cat sat", 8),
        ]);
        let stats = SummaryStats::new(&table, 20, ThresholdFraction::default());
        assert_eq!(stats.total, 20);
        assert_eq!(stats.threshold, 2);
        assert_eq!(stats.threshold_types, 1);
        assert_eq!(stats.max_count(), Some(8));
    }

    #[test]
    fn summary_of_empty_table() {
        let table = FrequencyTable::new(Vec::new());
        let stats = SummaryStats::new(&table, 0, ThresholdFraction::default());
        assert_eq!(stats.total, 0);
        assert_eq!(stats.max_count(), None);
        assert!(stats.most_frequent.is_empty());
        assert_eq!(stats.threshold_types, 0);
    }
}
