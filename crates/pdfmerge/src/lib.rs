//! pdfmerge - Merge a folder or an ordered list of PDF files into one document.
//!
//! Two entry points cover the two ways inputs are chosen:
//!
//! - **Folder mode** ([`merge_by_folder`]): every `.pdf` directly inside a
//!   folder, sorted by file name, with a previous output left out so the
//!   command can be re-run in place
//! - **List mode** ([`merge_files`]): exactly the given paths, in the given
//!   order
//!
//! Inputs are processed one at a time. A file that cannot be read is logged
//! and skipped; the rest are still merged. The outcome of each input is
//! returned in a [`MergeReport`].
//!
//! # Examples
//!
//! ## Folder Merge
//!
//! ```no_run
//! use pdfmerge::{MergeOptions, merge_by_folder};
//! use std::path::Path;
//!
//! # fn example() -> pdfmerge::Result<()> {
//! let report = merge_by_folder(
//!     Path::new("scans"),
//!     Path::new("merged_output.pdf"),
//!     &MergeOptions::default(),
//! )?;
//! println!(
//!     "Merged {} of {} files ({} pages)",
//!     report.merged_count(),
//!     report.files.len(),
//!     report.total_pages
//! );
//! # Ok(())
//! # }
//! ```
//!
//! ## Using Individual Components
//!
//! ```no_run
//! use pdfmerge::io::{PdfReader, PdfWriter};
//! use pdfmerge::merge::PageAccumulator;
//! use std::path::Path;
//!
//! # fn example() -> pdfmerge::Result<()> {
//! let reader = PdfReader::new();
//! let mut accumulator = PageAccumulator::new();
//! accumulator.append(reader.open(Path::new("a.pdf"))?)?;
//! accumulator.append(reader.open(Path::new("b.pdf"))?)?;
//!
//! let mut document = accumulator.finish();
//! PdfWriter::new().write(&mut document, Path::new("out.pdf"))?;
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod config;
pub mod error;
pub mod io;
pub mod merge;
pub mod resolve;

#[cfg(test)]
pub(crate) mod test_support;

// Re-export commonly used types
pub use config::{MergeOptions, SortOrder};
pub use error::{PdfMergeError, Result};
pub use merge::{FileOutcome, FileReport, MergeReport, Merger, merge_by_folder, merge_files};
pub use resolve::InputResolver;

/// Library version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name.
pub const NAME: &str = env!("CARGO_PKG_NAME");
