//! Dataset comparison
//!
//! Every record of a dataset is recomputed with the evaluator under test.
//! The first record that disagrees, or cannot be read, ends the comparison
//! so that the diagnostic points at exactly one record.

use std::fmt;
use std::io::Read;
use std::path::{Path, PathBuf};

use rayon::prelude::*;
use serde::Serialize;

use crate::dataset::{DatasetReader, Entry, dataset_path};
use crate::error::Result;
use crate::evaluator::DeltaE;
use crate::progress::{Progress, Silent};
use crate::stats::{DatasetStats, StatsBuilder};

/// Largest absolute difference accepted between two implementations
pub const TOLERANCE: f64 = 1e-10;

/// True when both values are finite and within [`TOLERANCE`]
#[inline]
pub fn agrees(expected: f64, actual: f64) -> bool {
    expected.is_finite() && actual.is_finite() && (actual - expected).abs() <= TOLERANCE
}

/// Outcome of comparing one dataset
///
/// Indices are 0-based record positions in the dataset.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Verdict {
    /// Every record agreed
    Passed { records: usize },
    /// A recomputed value differs from the stored one or is not finite
    Mismatch {
        index: usize,
        expected: f64,
        actual: f64,
    },
    /// A record could not be parsed
    Malformed {
        index: usize,
        line: u64,
        reason: String,
    },
}

impl Verdict {
    pub fn is_pass(&self) -> bool {
        matches!(self, Verdict::Passed { .. })
    }

    /// Index of the offending record, if any
    pub fn failed_index(&self) -> Option<usize> {
        match self {
            Verdict::Passed { .. } => None,
            Verdict::Mismatch { index, .. } | Verdict::Malformed { index, .. } => Some(*index),
        }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Verdict::Passed { records } => {
                write!(f, "{} records agree within {:e}", records, TOLERANCE)
            }
            Verdict::Mismatch {
                index,
                expected,
                actual,
            } => write!(
                f,
                "Error on record {}: expected {}, got {}",
                index, expected, actual
            ),
            Verdict::Malformed {
                index,
                line,
                reason,
            } => write!(
                f,
                "Malformed record {} (line {}): {}",
                index, line, reason
            ),
        }
    }
}

/// Verdict and statistics of the records that were checked
#[derive(Debug, Clone, Serialize)]
pub struct Comparison {
    pub verdict: Verdict,
    pub stats: DatasetStats,
}

/// Compare every record readable from `reader`
pub fn compare<R, E, P>(reader: R, evaluator: &E, progress: &mut P) -> Result<Comparison>
where
    R: Read,
    E: DeltaE + ?Sized,
    P: Progress + ?Sized,
{
    compare_dataset(DatasetReader::new(reader), evaluator, progress)
}

/// Compare the dataset file at `path`
///
/// A missing file is [`crate::Error::DatasetNotFound`].
pub fn compare_file<E, P>(path: impl AsRef<Path>, evaluator: &E, progress: &mut P) -> Result<Comparison>
where
    E: DeltaE + ?Sized,
    P: Progress + ?Sized,
{
    let path = path.as_ref();
    tracing::info!(path = %path.display(), "comparing dataset");
    let reader = DatasetReader::open(path)?;
    compare_dataset(reader, evaluator, progress)
}

/// Compare records from an already opened dataset
pub fn compare_dataset<R, E, P>(
    mut reader: DatasetReader<R>,
    evaluator: &E,
    progress: &mut P,
) -> Result<Comparison>
where
    R: Read,
    E: DeltaE + ?Sized,
    P: Progress + ?Sized,
{
    let mut stats = StatsBuilder::new();
    let mut index = 0;

    let verdict = loop {
        let record = match reader.next_entry()? {
            None => break Verdict::Passed { records: index },
            Some(Entry::Record(record)) => record,
            Some(Entry::Malformed { reason, line }) => {
                tracing::debug!(index, line, %reason, "malformed record");
                break Verdict::Malformed {
                    index,
                    line,
                    reason,
                };
            }
        };
        stats.push(reader.last_row(), record.delta_e);

        let actual = evaluator.delta_e(record.source, record.target);
        if !agrees(record.delta_e, actual) {
            tracing::debug!(
                index,
                source = %record.source,
                target = %record.target,
                expected = record.delta_e,
                actual,
                "mismatch"
            );
            break Verdict::Mismatch {
                index,
                expected: record.delta_e,
                actual,
            };
        }

        index += 1;
        progress.tick(index);
    };
    progress.finish(index);

    Ok(Comparison {
        verdict,
        stats: stats.finish(),
    })
}

/// Comparison of the dataset published by one implementation
#[derive(Debug)]
pub struct TagComparison {
    pub tag: String,
    pub path: PathBuf,
    pub outcome: Result<Comparison>,
}

/// Compare the datasets of several implementations concurrently
///
/// Each dataset is still read sequentially; results keep the order of `tags`.
pub fn compare_tags<E>(data_dir: impl AsRef<Path>, tags: &[String], evaluator: &E) -> Vec<TagComparison>
where
    E: DeltaE + Sync + ?Sized,
{
    let data_dir = data_dir.as_ref();
    tags.par_iter()
        .map(|tag| {
            let path = dataset_path(data_dir, tag);
            let outcome = compare_file(&path, evaluator, &mut Silent);
            TagComparison {
                tag: tag.clone(),
                path,
                outcome,
            }
        })
        .collect()
}
