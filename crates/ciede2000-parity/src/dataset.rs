//! Verification dataset files
//!
//! One record per line, seven comma separated fields and no header:
//!
//! ```text
//! L1,a1,b1,L2,a2,b2,deltaE
//! ```
//!
//! Every field is the shortest decimal text that round-trips the `f64`.

use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::{Path, PathBuf};

use ciede2000_core::Lab;
use csv::{ReaderBuilder, StringRecord, Terminator, Trim, WriterBuilder};

use crate::error::{Error, Result};

/// Number of fields in one record
pub const FIELD_COUNT: usize = 7;

/// File name of the dataset produced by implementation `tag`
pub fn dataset_file_name(tag: &str) -> String {
    format!("values-{tag}.txt")
}

/// Conventional location of the dataset of implementation `tag`:
/// `<data_dir>/<tag>/values-<tag>.txt`
pub fn dataset_path(data_dir: impl AsRef<Path>, tag: &str) -> PathBuf {
    data_dir.as_ref().join(tag).join(dataset_file_name(tag))
}

/// A color pair with its expected ΔE2000
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TestRecord {
    pub source: Lab,
    pub target: Lab,
    pub delta_e: f64,
}

impl TestRecord {
    pub fn new(source: Lab, target: Lab, delta_e: f64) -> Self {
        Self {
            source,
            target,
            delta_e,
        }
    }

    /// Fields in file order
    pub fn to_fields(&self) -> [f64; FIELD_COUNT] {
        [
            self.source.l,
            self.source.a,
            self.source.b,
            self.target.l,
            self.target.a,
            self.target.b,
            self.delta_e,
        ]
    }

    pub fn from_fields(fields: [f64; FIELD_COUNT]) -> Self {
        Self {
            source: Lab::new(fields[0], fields[1], fields[2]),
            target: Lab::new(fields[3], fields[4], fields[5]),
            delta_e: fields[6],
        }
    }

    /// Parse one CSV row, describing what is wrong on failure
    pub fn from_csv(row: &StringRecord) -> std::result::Result<Self, String> {
        if row.len() != FIELD_COUNT {
            return Err(format!(
                "expected {} fields, found {}",
                FIELD_COUNT,
                row.len()
            ));
        }

        let mut fields = [0.0; FIELD_COUNT];
        for (i, (slot, text)) in fields.iter_mut().zip(row.iter()).enumerate() {
            *slot = text
                .parse()
                .map_err(|_| format!("field {} is not a number: {:?}", i + 1, text))?;
        }
        Ok(Self::from_fields(fields))
    }
}

/// A record read from a dataset, or why it could not be read
#[derive(Debug, Clone, PartialEq)]
pub enum Entry {
    Record(TestRecord),
    Malformed { reason: String, line: u64 },
}

/// Sequential reader over a dataset
pub struct DatasetReader<R: Read> {
    inner: csv::Reader<R>,
    row: StringRecord,
}

impl DatasetReader<BufReader<File>> {
    /// Open a dataset file; a missing file is [`Error::DatasetNotFound`]
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| match e.kind() {
            std::io::ErrorKind::NotFound => Error::DatasetNotFound(path.to_path_buf()),
            _ => Error::Io(e),
        })?;
        Ok(Self::new(BufReader::new(file)))
    }
}

impl<R: Read> DatasetReader<R> {
    pub fn new(reader: R) -> Self {
        let inner = ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .trim(Trim::All)
            .from_reader(reader);
        Self {
            inner,
            row: StringRecord::new(),
        }
    }

    /// Read the next entry, `None` at end of file
    ///
    /// Text that is not valid CSV/UTF-8 is reported as a malformed entry;
    /// only genuine I/O failures are errors.
    pub fn next_entry(&mut self) -> Result<Option<Entry>> {
        match self.inner.read_record(&mut self.row) {
            Ok(false) => Ok(None),
            Ok(true) => {
                let line = self.row.position().map_or(0, |p| p.line());
                Ok(Some(match TestRecord::from_csv(&self.row) {
                    Ok(record) => Entry::Record(record),
                    Err(reason) => Entry::Malformed { reason, line },
                }))
            }
            Err(e) if e.is_io_error() => Err(Error::Csv(e)),
            Err(e) => {
                let line = e.position().map_or(0, |p| p.line());
                Ok(Some(Entry::Malformed {
                    reason: e.to_string(),
                    line,
                }))
            }
        }
    }

    /// The raw fields of the last row read
    pub fn last_row(&self) -> &StringRecord {
        &self.row
    }
}

/// Writer producing the dataset text format
pub struct DatasetWriter<W: Write> {
    inner: csv::Writer<W>,
}

impl DatasetWriter<BufWriter<File>> {
    /// Create (or truncate) a dataset file
    pub fn create(path: impl AsRef<Path>) -> Result<Self> {
        let file = File::create(path)?;
        Ok(Self::new(BufWriter::new(file)))
    }
}

impl<W: Write> DatasetWriter<W> {
    pub fn new(writer: W) -> Self {
        let inner = WriterBuilder::new()
            .has_headers(false)
            .terminator(Terminator::Any(b'\n'))
            .from_writer(writer);
        Self { inner }
    }

    pub fn write(&mut self, record: &TestRecord) -> Result<()> {
        self.inner
            .write_record(record.to_fields().iter().map(|v| v.to_string()))?;
        Ok(())
    }

    /// Flush buffered records and return the underlying writer
    pub fn finish(mut self) -> Result<W> {
        self.inner.flush()?;
        self.inner
            .into_inner()
            .map_err(|e| Error::Io(std::io::Error::new(e.error().kind(), e.to_string())))
    }
}
