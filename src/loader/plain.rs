use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::loader::RecordSource;
use crate::parser::RecordParser;

/// Loader for an uncompressed count file, one `<bigram>\t<count>` record
/// per line.
pub struct FileLoader {
    filepath: PathBuf,
}

impl FileLoader {
    pub fn new<P>(filepath: P) -> Self
    where
        P: AsRef<Path>,
    {
        Self {
            filepath: PathBuf::from(filepath.as_ref()),
        }
    }
}

impl RecordSource for FileLoader {
    type Iter = RecordParser<File>;

    fn iter(&self) -> Result<RecordParser<File>> {
        let reader = BufReader::new(File::open(&self.filepath)?);
        Ok(RecordParser::new(reader))
    }
}

/// Loader over counts already held in memory.
pub struct TextLoader<'a> {
    text: &'a [u8],
}

impl<'a> TextLoader<'a> {
    pub const fn new(text: &'a [u8]) -> Self {
        Self { text }
    }
}

impl<'a> RecordSource for TextLoader<'a> {
    type Iter = RecordParser<&'a [u8]>;

    fn iter(&self) -> Result<RecordParser<&'a [u8]>> {
        let reader = BufReader::new(self.text);
        Ok(RecordParser::new(reader))
    }
}
