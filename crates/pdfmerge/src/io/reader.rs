//! PDF loading.
//!
//! [`PdfReader::open`] reads the whole file into memory and closes it before
//! returning, so a [`LoadedPdf`] never holds an OS file handle. Dropping the
//! value releases everything it owns.
//!
//! # Examples
//!
//! ```no_run
//! use pdfmerge::io::PdfReader;
//! use std::path::Path;
//!
//! # fn example() -> pdfmerge::Result<()> {
//! let loaded = PdfReader::new().open(Path::new("document.pdf"))?;
//! println!("{} has {} pages", loaded.path.display(), loaded.page_count());
//! # Ok(())
//! # }
//! ```

use lopdf::{Document, ObjectId};
use std::path::{Path, PathBuf};

use crate::error::{PdfMergeError, Result};

/// A PDF input opened for reading.
#[derive(Debug)]
pub struct LoadedPdf {
    /// The parsed document.
    pub document: Document,

    /// Path it was loaded from.
    pub path: PathBuf,
}

impl LoadedPdf {
    /// Number of pages in the document.
    pub fn page_count(&self) -> usize {
        self.document.get_pages().len()
    }

    /// Page object ids in document order.
    pub fn page_ids(&self) -> Vec<ObjectId> {
        self.document.get_pages().into_values().collect()
    }
}

/// Opens PDF inputs.
#[derive(Debug, Clone, Default)]
pub struct PdfReader;

impl PdfReader {
    /// Create a new reader.
    pub fn new() -> Self {
        Self
    }

    /// Open and parse a single PDF.
    ///
    /// # Errors
    ///
    /// Every failure, whether the file is missing, unreadable, not a PDF,
    /// structurally broken or encrypted, is reported as
    /// [`PdfMergeError::UnreadableInput`] carrying the path and the cause.
    pub fn open(&self, path: &Path) -> Result<LoadedPdf> {
        let document = Document::load(path).map_err(|err| {
            let reason = err.to_string();
            let lower = reason.to_lowercase();
            if lower.contains("encrypt") || lower.contains("password") {
                PdfMergeError::unreadable_input(path, format!("encrypted document ({reason})"))
            } else {
                PdfMergeError::unreadable_input(path, reason)
            }
        })?;

        if document.is_encrypted() {
            return Err(PdfMergeError::unreadable_input(
                path,
                "encrypted document; decrypt it first (e.g. 'qpdf --decrypt')",
            ));
        }

        Ok(LoadedPdf {
            document,
            path: path.to_path_buf(),
        })
    }
}
