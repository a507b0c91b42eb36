use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use flate2::read::MultiGzDecoder;

use crate::error::Result;
use crate::loader::RecordSource;
use crate::parser::RecordParser;

/// Loader for gzip-compressed count files, including concatenated members.
pub struct GzFileLoader {
    filepath: PathBuf,
}

impl GzFileLoader {
    pub fn new<P>(filepath: P) -> Self
    where
        P: AsRef<Path>,
    {
        Self {
            filepath: PathBuf::from(filepath.as_ref()),
        }
    }
}

impl RecordSource for GzFileLoader {
    type Iter = RecordParser<MultiGzDecoder<File>>;

    fn iter(&self) -> Result<RecordParser<MultiGzDecoder<File>>> {
        let reader = MultiGzDecoder::new(File::open(&self.filepath)?);
        Ok(RecordParser::new(BufReader::new(reader)))
    }
}
