use std::fmt;
use std::io::{self, Write};

use crate::stats::SummaryStats;
use crate::table::FrequencyTable;

/// Human-readable output of an analysis run.
#[derive(Clone, Debug)]
pub enum Report<'a> {
    /// Total count, co-maximal bigrams and the threshold type count.
    Summary(SummaryStats<'a>),
    /// Every record in descending count order.
    SortOnly(&'a FrequencyTable),
}

impl Report<'_> {
    pub fn write_to<W: Write>(&self, out: &mut W) -> io::Result<()> {
        write!(out, "{}", self)
    }
}

impl fmt::Display for Report<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Report::Summary(stats) => {
                writeln!(f, "1. The total number of bigrams: \t{}", stats.total)?;
                writeln!(f, "2. The most common bigram:")?;
                for record in stats.most_frequent {
                    writeln!(f, "{}", record)?;
                }
                writeln!(
                    f,
                    "3. The number of bigrams required to add up to {}% of all bigrams: \t{}",
                    stats.fraction.percent(),
                    stats.threshold_types
                )
            }
            Report::SortOnly(table) => {
                for record in table.iter() {
                    writeln!(f, "{}", record)?;
                }
                Ok(())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::BigramRecord;
    use crate::stats::ThresholdFraction;

    #[test]
    fn summary_layout() {
        let table = FrequencyTable::new(vec![
            BigramRecord::new("x y", 1),
            BigramRecord::new("y z", 1),
            BigramRecord::new("z w", 1),
        ]);
        let stats = SummaryStats::new(&table, 3, ThresholdFraction::default());
        assert_eq!(
            Report::Summary(stats).to_string(),
            "1. The total number of bigrams: \t3\n\
             2. The most common bigram:\n\
             x y\t1\n\
             y z\t1\n\
             z w\t1\n\
             3. The number of bigrams required to add up to 10% of all bigrams: \t0\n"
        );
    }

    #[test]
    fn sort_only_layout() {
        let table = FrequencyTable::new(vec![
            BigramRecord::new("a b", 3),
            BigramRecord::new("c d", 9),
        ]);
        assert_eq!(Report::SortOnly(&table).to_string(), "c d\t9\na b\t3\n");
    }

    #[test]
    fn sort_only_of_empty_table_is_empty() {
        let table = FrequencyTable::new(Vec::new());
        assert_eq!(Report::SortOnly(&table).to_string(), "");
    }

    #[test]
    fn write_to_matches_display() {
        let table = FrequencyTable::new(vec![BigramRecord::new("a b", 3)]);
        let report = Report::SortOnly(&table);
        let mut out = Vec::new();
        report.write_to(&mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), report.to_string());
    }
}
