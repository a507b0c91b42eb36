mod flate2;
mod plain;
mod zstd;

use std::path::Path;
use std::str::FromStr;

use crate::error::Result;
use crate::record::BigramRecord;

pub use crate::loader::flate2::GzFileLoader;
pub use crate::loader::plain::{FileLoader, TextLoader};
pub use crate::loader::zstd::ZstdFileLoader;

/// Loader for a bigram counts table.
pub trait RecordSource {
    type Iter: Iterator<Item = Result<BigramRecord>>;

    /// Returns an iterator over fallible BigramRecords.
    fn iter(&self) -> Result<Self::Iter>;
}

/// File formats supported.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InputFormat {
    Plain,
    Gzip,
    Zstd,
}

impl InputFormat {
    /// Guesses the format from the file extension, defaulting to plain text.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Self {
        match path.as_ref().extension().and_then(|s| s.to_str()) {
            Some("gz") => Self::Gzip,
            Some("zst") => Self::Zstd,
            _ => Self::Plain,
        }
    }
}

impl FromStr for InputFormat {
    type Err = &'static str;

    fn from_str(fmt: &str) -> Result<Self, Self::Err> {
        match fmt {
            "plain" => Ok(Self::Plain),
            "gzip" => Ok(Self::Gzip),
            "zstd" => Ok(Self::Zstd),
            _ => Err("Invalid format, expected one of: plain, gzip, zstd"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_from_extension() {
        assert_eq!(InputFormat::from_path("part-00000"), InputFormat::Plain);
        assert_eq!(InputFormat::from_path("counts.txt"), InputFormat::Plain);
        assert_eq!(InputFormat::from_path("counts.txt.gz"), InputFormat::Gzip);
        assert_eq!(InputFormat::from_path("counts.zst"), InputFormat::Zstd);
    }

    #[test]
    fn format_from_str() {
        assert_eq!("gzip".parse::<InputFormat>(), Ok(InputFormat::Gzip));
        assert_eq!("zstd".parse::<InputFormat>(), Ok(InputFormat::Zstd));
        assert_eq!("plain".parse::<InputFormat>(), Ok(InputFormat::Plain));
        assert!("bzip2".parse::<InputFormat>().is_err());
    }
}
