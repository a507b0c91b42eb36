use std::io::{BufRead, BufReader, Read};

use crate::error::{Error, Result};
use crate::record::BigramRecord;

/// Parser for a `<bigram>\t<count>` counts stream.
///
/// Yields one record per non-empty line. Errors carry the 1-based line
/// number they were found on.
pub struct RecordParser<R: Read> {
    reader: BufReader<R>,
    line_no: usize,
    buf: String,
}

impl<R: Read> RecordParser<R> {
    pub fn new(reader: BufReader<R>) -> Self {
        Self {
            reader,
            line_no: 0,
            buf: String::new(),
        }
    }
}

impl<R: Read> Iterator for RecordParser<R> {
    type Item = Result<BigramRecord>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            self.buf.clear();
            match self.reader.read_line(&mut self.buf) {
                Ok(0) => return None,
                Ok(_) => self.line_no += 1,
                Err(e) => return Some(Err(e.into())),
            }

            let line = self.buf.strip_suffix('\n').unwrap_or(self.buf.as_str());
            let line = line.strip_suffix('\r').unwrap_or(line);
            if line.is_empty() {
                continue;
            }

            return Some(
                BigramRecord::from_line(line).map_err(|reason| Error::MalformedRecord {
                    line: self.line_no,
                    content: line.to_string(),
                    reason,
                }),
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::MalformedReason;

    fn parse(text: &str) -> Vec<Result<BigramRecord>> {
        RecordParser::new(BufReader::new(text.as_bytes())).collect()
    }

    #[test]
    fn parses_every_line() {
        let records = parse("the dog\t5\na cat\t5\n")
            .into_iter()
            .collect::<Result<Vec<_>>>()
            .unwrap();
        assert_eq!(
            records,
            vec![BigramRecord::new("the dog", 5), BigramRecord::new("a cat", 5)]
        );
    }

    #[test]
    fn handles_crlf_and_missing_final_newline() {
        let records = parse("a b\t1\r\nc d\t2")
            .into_iter()
            .collect::<Result<Vec<_>>>()
            .unwrap();
        assert_eq!(
            records,
            vec![BigramRecord::new("a b", 1), BigramRecord::new("c d", 2)]
        );
    }

    #[test]
    fn skips_empty_lines() {
        let records = parse("\na b\t1\n\n\r\nc d\t2\n\n");
        assert_eq!(records.len(), 2);
    }

    #[test]
    fn empty_input_yields_nothing() {
        assert!(parse("").is_empty());
    }

    #[test]
    fn reports_line_number_of_bad_record() {
        let records = parse("a b\t1\n\nbadline\n");
        match &records[1] {
            Err(Error::MalformedRecord {
                line,
                content,
                reason,
            }) => {
                assert_eq!(*line, 3);
                assert_eq!(content, "badline");
                assert_eq!(*reason, MalformedReason::MissingTab);
            }
            other => panic!("expected a malformed record, got {:?}", other),
        }
    }

    #[test]
    fn invalid_utf8_is_an_io_error() {
        let bytes: &[u8] = b"a b\t1\n\xff\xfe\t2\n";
        let records: Vec<_> = RecordParser::new(BufReader::new(bytes)).collect();
        assert!(records[0].is_ok());
        assert!(matches!(records[1], Err(Error::Io(_))));
    }
}
