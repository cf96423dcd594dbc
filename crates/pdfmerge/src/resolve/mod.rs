//! Input resolution for folder mode.
//!
//! Turns a directory into the ordered list of PDF files to merge:
//!
//! - only direct entries, no recursion
//! - `.pdf` extension matched ignoring case
//! - sorted with an explicit comparator (see [`order`])
//! - the output file, when it lives in the same folder, removed by name
//!
//! # Examples
//!
//! ```no_run
//! use pdfmerge::resolve::InputResolver;
//! use std::path::Path;
//!
//! # fn example() -> pdfmerge::Result<()> {
//! let resolver = InputResolver::new();
//! let inputs = resolver.resolve(Path::new("scans"), Some(Path::new("merged.pdf")))?;
//! for path in &inputs {
//!     println!("{}", path.display());
//! }
//! # Ok(())
//! # }
//! ```

pub mod order;

use std::cmp::Ordering;
use std::ffi::OsStr;
use std::fmt;
use std::io;
use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::config::SortOrder;
use crate::error::{PdfMergeError, Result};
use order::NameComparator;

/// Lists and orders the PDF files of a folder.
pub struct InputResolver {
    comparator: NameComparator,
}

impl InputResolver {
    /// Resolver using case-insensitive alphabetical order.
    pub fn new() -> Self {
        Self::with_order(SortOrder::Alphabetical)
    }

    /// Resolver using one of the built-in orders.
    pub fn with_order(order: SortOrder) -> Self {
        Self {
            comparator: order.comparator(),
        }
    }

    /// Resolver using a caller-supplied comparator over file names.
    pub fn with_comparator<F>(comparator: F) -> Self
    where
        F: Fn(&str, &str) -> Ordering + Send + Sync + 'static,
    {
        Self {
            comparator: Box::new(comparator),
        }
    }

    /// List the PDF files directly inside `folder`, sorted.
    ///
    /// When `exclude` is given, the entry whose file name equals
    /// `exclude`'s file name is dropped. Only the name is compared, so a
    /// relative and an absolute spelling of the same output both match.
    ///
    /// An empty result is not an error here.
    ///
    /// # Errors
    ///
    /// - [`PdfMergeError::DirectoryNotFound`] if `folder` does not exist
    /// - [`PdfMergeError::NotADirectory`] if it is not a directory
    /// - [`PdfMergeError::Io`] if the listing itself fails
    pub fn resolve(&self, folder: &Path, exclude: Option<&Path>) -> Result<Vec<PathBuf>> {
        if !folder.try_exists()? {
            return Err(PdfMergeError::directory_not_found(folder));
        }
        if !folder.is_dir() {
            return Err(PdfMergeError::not_a_directory(folder));
        }

        let excluded_name = exclude.and_then(Path::file_name);

        let mut names = Vec::new();
        for entry in WalkDir::new(folder).min_depth(1).max_depth(1) {
            let entry = entry.map_err(io::Error::from)?;

            // `Path::is_file` follows symlinks; a dangling link is just skipped.
            if !has_pdf_extension(entry.path()) || !entry.path().is_file() {
                continue;
            }

            let name = entry.file_name();
            if excluded_name == Some(name) {
                tracing::debug!(file = %name.to_string_lossy(), "excluding output file from inputs");
                continue;
            }

            names.push(name.to_os_string());
        }

        names.sort_by(|a, b| (self.comparator)(&a.to_string_lossy(), &b.to_string_lossy()));

        tracing::debug!(
            folder = %folder.display(),
            count = names.len(),
            "resolved folder inputs"
        );

        Ok(names.into_iter().map(|name| folder.join(name)).collect())
    }
}

impl Default for InputResolver {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for InputResolver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InputResolver").finish_non_exhaustive()
    }
}

/// Whether `path` ends in `.pdf`, ignoring ASCII case.
pub fn has_pdf_extension(path: &Path) -> bool {
    path.extension()
        .and_then(OsStr::to_str)
        .is_some_and(|ext| ext.eq_ignore_ascii_case("pdf"))
}
