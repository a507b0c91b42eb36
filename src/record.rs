use std::fmt;

use crate::error::MalformedReason;

/// Handler of a pair of a bigram and its count.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct BigramRecord {
    pub gram: String,
    pub count: u64,
}

impl BigramRecord {
    pub fn new<S: Into<String>>(gram: S, count: u64) -> Self {
        Self {
            gram: gram.into(),
            count,
        }
    }

    /// Parses a single `<bigram>\t<count>` line without its line terminator.
    ///
    /// The bigram is kept verbatim; the count may carry surrounding
    /// whitespace.
    ///
    /// ```
    /// use bigramstats::BigramRecord;
    ///
    /// let record = BigramRecord::from_line("the dog\t5").unwrap();
    /// assert_eq!(record, BigramRecord::new("the dog", 5));
    /// assert!(BigramRecord::from_line("badline").is_err());
    /// ```
    pub fn from_line(line: &str) -> Result<Self, MalformedReason> {
        let (gram, count) = line.split_once('\t').ok_or(MalformedReason::MissingTab)?;
        if count.contains('\t') {
            return Err(MalformedReason::TooManyFields);
        }

        let count = count.trim();
        if count.starts_with('-') {
            return Err(MalformedReason::NegativeCount(count.to_string()));
        }
        let count = count
            .parse::<u64>()
            .map_err(|_| MalformedReason::InvalidCount(count.to_string()))?;

        Ok(Self::new(gram, count))
    }
}

impl fmt::Display for BigramRecord {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}\t{}", self.gram, self.count)
    }
}
