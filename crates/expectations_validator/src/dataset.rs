//! Delimited row source.
//!
//! Reads a header line followed by data records and yields each record as
//! a [`Row`]. Records shorter than the header simply lack the trailing
//! fields; extra trailing values are ignored.

use crate::{Result, ValidationError};
use csv::StringRecord;
use expectations_core::Row;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use tracing::debug;

/// Field separator of the input data.
pub const DEFAULT_DELIMITER: u8 = b'|';

/// Iterator over the rows of a delimited file.
///
/// # Example
///
/// ```rust
/// use expectations_validator::DelimitedReader;
///
/// let data = "status|age\nOK|5\nFAIL|200\n";
/// let reader = DelimitedReader::new(data.as_bytes()).unwrap();
///
/// let rows: Vec<_> = reader.collect::<Result<_, _>>().unwrap();
/// assert_eq!(rows.len(), 2);
/// assert_eq!(rows[1]["status"], "FAIL");
/// ```
pub struct DelimitedReader<R> {
    reader: csv::Reader<R>,
    headers: Vec<String>,
}

impl DelimitedReader<File> {
    /// Opens a pipe-delimited file.
    pub fn open(path: &Path) -> Result<Self> {
        Self::open_with_delimiter(path, DEFAULT_DELIMITER)
    }

    /// Opens a file with a custom delimiter.
    pub fn open_with_delimiter(path: &Path, delimiter: u8) -> Result<Self> {
        let file = File::open(path).map_err(|e| ValidationError::io(path, e))?;
        Self::with_delimiter(file, delimiter)
    }
}

impl<R: Read> DelimitedReader<R> {
    /// Wraps a pipe-delimited reader.
    pub fn new(reader: R) -> Result<Self> {
        Self::with_delimiter(reader, DEFAULT_DELIMITER)
    }

    /// Wraps a reader with a custom delimiter. The header line is read
    /// immediately.
    pub fn with_delimiter(reader: R, delimiter: u8) -> Result<Self> {
        let mut reader = csv::ReaderBuilder::new()
            .delimiter(delimiter)
            .has_headers(true)
            .flexible(true)
            .from_reader(reader);

        let headers: Vec<String> = reader.headers()?.iter().map(str::to_string).collect();
        debug!("Input headers: {:?}", headers);

        Ok(Self { reader, headers })
    }

    /// Field names from the header line.
    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    fn to_row(&self, record: &StringRecord) -> Row {
        self.headers
            .iter()
            .zip(record.iter())
            .map(|(name, value)| (name.clone(), value.to_string()))
            .collect()
    }
}

impl<R: Read> Iterator for DelimitedReader<R> {
    type Item = Result<Row>;

    fn next(&mut self) -> Option<Self::Item> {
        let mut record = StringRecord::new();
        match self.reader.read_record(&mut record) {
            Ok(true) => Some(Ok(self.to_row(&record))),
            Ok(false) => None,
            Err(e) => Some(Err(e.into())),
        }
    }
}
