//! Per-invocation merge report.

use serde::{Serialize, Serializer};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// What happened to one input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "camelCase")]
pub enum FileOutcome {
    /// All pages of the file were appended.
    Merged {
        /// Number of pages appended.
        pages: usize,
    },
    /// The file could not be read and was left out.
    Skipped {
        /// Why it was skipped.
        reason: String,
    },
}

impl FileOutcome {
    /// Whether the file made it into the output.
    pub fn is_merged(&self) -> bool {
        matches!(self, Self::Merged { .. })
    }
}

/// Outcome for one input path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FileReport {
    /// Input path, as given or as resolved from the folder.
    pub path: PathBuf,

    /// What happened to it.
    #[serde(flatten)]
    pub outcome: FileOutcome,
}

/// Result of one merge invocation.
///
/// `files` lists every input in processing order. The output was written if
/// and only if [`MergeReport::success`] is true.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MergeReport {
    /// Per-file outcomes, in processing order.
    pub files: Vec<FileReport>,

    /// Total pages in the output document.
    pub total_pages: usize,

    /// Where the output was written, if it was.
    pub output: Option<PathBuf>,

    /// Size of the written output in bytes (0 if nothing was written).
    pub bytes_written: u64,

    /// Wall time of the whole invocation.
    #[serde(rename = "elapsedSeconds", serialize_with = "serialize_secs")]
    pub elapsed: Duration,
}

impl MergeReport {
    /// True iff the output file was written.
    pub fn success(&self) -> bool {
        self.output.is_some()
    }

    /// Number of inputs whose pages were merged.
    pub fn merged_count(&self) -> usize {
        self.files.iter().filter(|f| f.outcome.is_merged()).count()
    }

    /// Number of inputs that were skipped.
    pub fn skipped_count(&self) -> usize {
        self.files.len() - self.merged_count()
    }

    /// Inputs that were skipped, with the reason.
    pub fn skipped(&self) -> impl Iterator<Item = (&Path, &str)> {
        self.files.iter().filter_map(|f| match &f.outcome {
            FileOutcome::Skipped { reason } => Some((f.path.as_path(), reason.as_str())),
            FileOutcome::Merged { .. } => None,
        })
    }

    /// Whether every input was merged.
    pub fn all_merged(&self) -> bool {
        self.skipped_count() == 0
    }
}

fn serialize_secs<S: Serializer>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_f64(duration.as_secs_f64())
}
