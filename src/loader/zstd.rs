use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use zstd::stream::read::Decoder;

use crate::error::Result;
use crate::loader::RecordSource;
use crate::parser::RecordParser;

type ZstdReader = Decoder<'static, BufReader<File>>;

pub struct ZstdFileLoader {
    filepath: PathBuf,
}

impl ZstdFileLoader {
    pub fn new<P>(filepath: P) -> Self
    where
        P: AsRef<Path>,
    {
        Self {
            filepath: PathBuf::from(filepath.as_ref()),
        }
    }
}

impl RecordSource for ZstdFileLoader {
    type Iter = RecordParser<ZstdReader>;

    fn iter(&self) -> Result<RecordParser<ZstdReader>> {
        let reader = Decoder::new(File::open(&self.filepath)?)?;
        Ok(RecordParser::new(BufReader::new(reader)))
    }
}
