//! JSON reports of comparison runs

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::compare::{TagComparison, Verdict};
use crate::error::{Error, Result};
use crate::stats::DatasetStats;

/// Serializable summary of one dataset comparison
#[derive(Debug, Clone, Serialize)]
pub struct ComparisonReport {
    pub tag: String,
    pub path: PathBuf,
    pub found: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub verdict: Option<Verdict>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stats: Option<DatasetStats>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl From<&TagComparison> for ComparisonReport {
    fn from(run: &TagComparison) -> Self {
        let mut report = Self {
            tag: run.tag.clone(),
            path: run.path.clone(),
            found: true,
            verdict: None,
            stats: None,
            error: None,
        };
        match &run.outcome {
            Ok(comparison) => {
                report.verdict = Some(comparison.verdict.clone());
                report.stats = Some(comparison.stats.clone());
            }
            Err(Error::DatasetNotFound(_)) => report.found = false,
            Err(e) => report.error = Some(e.to_string()),
        }
        report
    }
}

/// Write reports as pretty-printed JSON
pub fn write_json<W: Write>(writer: W, reports: &[ComparisonReport]) -> Result<()> {
    serde_json::to_writer_pretty(writer, reports)?;
    Ok(())
}

/// Write reports to a file at `path`
pub fn write_json_file(path: impl AsRef<Path>, reports: &[ComparisonReport]) -> Result<()> {
    let mut writer = BufWriter::new(File::create(path)?);
    write_json(&mut writer, reports)?;
    writeln!(writer)?;
    writer.flush()?;
    Ok(())
}
