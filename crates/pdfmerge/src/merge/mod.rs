//! PDF merging operations.
//!
//! - [`PageAccumulator`] builds the output document page by page
//! - [`Merger`] drives inputs through it one file at a time
//! - [`MergeReport`] records what happened to each input
//!
//! # Examples
//!
//! ```no_run
//! use pdfmerge::config::MergeOptions;
//! use pdfmerge::merge;
//! use std::path::{Path, PathBuf};
//!
//! # fn example() -> pdfmerge::Result<()> {
//! let inputs = vec![PathBuf::from("cover.pdf"), PathBuf::from("body.pdf")];
//! let report = merge::merge_files(&inputs, Path::new("book.pdf"), &MergeOptions::default())?;
//! for (path, reason) in report.skipped() {
//!     eprintln!("skipped {}: {reason}", path.display());
//! }
//! # Ok(())
//! # }
//! ```

pub mod accumulator;
pub mod merger;
pub mod report;

pub use accumulator::PageAccumulator;
pub use merger::Merger;
pub use report::{FileOutcome, FileReport, MergeReport};

use crate::config::MergeOptions;
use crate::error::Result;
use std::path::{Path, PathBuf};

/// Merge every PDF in `folder` into `output`.
///
/// Convenience function that creates a merger and performs the merge.
/// See [`Merger::merge_by_folder`].
pub fn merge_by_folder(folder: &Path, output: &Path, options: &MergeOptions) -> Result<MergeReport> {
    Merger::with_options(options.clone()).merge_by_folder(folder, output)
}

/// Merge `paths`, in order, into `output`.
///
/// Convenience function that creates a merger and performs the merge.
/// See [`Merger::merge_files`].
pub fn merge_files(paths: &[PathBuf], output: &Path, options: &MergeOptions) -> Result<MergeReport> {
    Merger::with_options(options.clone()).merge_files(paths, output)
}
