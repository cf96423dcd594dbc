//! PDF writing.
//!
//! By default the document is written to a temporary file next to the
//! destination and then renamed over it, so the output path never holds a
//! half-written PDF and a failed write leaves the previous file (or nothing)
//! in place.
//!
//! # Examples
//!
//! ```no_run
//! use pdfmerge::io::PdfWriter;
//! use lopdf::Document;
//! use std::path::Path;
//!
//! # fn example(mut doc: Document) -> pdfmerge::Result<()> {
//! let stats = PdfWriter::new().write(&mut doc, Path::new("output.pdf"))?;
//! println!("Wrote {}", stats.format_file_size());
//! # Ok(())
//! # }
//! ```

use lopdf::Document;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use crate::error::{PdfMergeError, Result};

/// Options for writing PDF files.
#[derive(Debug, Clone)]
pub struct WriteOptions {
    /// Write to a temporary file first, then rename it into place.
    pub atomic: bool,

    /// Buffer size for writing (in bytes).
    pub buffer_size: usize,
}

impl Default for WriteOptions {
    fn default() -> Self {
        Self {
            atomic: true,
            buffer_size: 8192,
        }
    }
}

/// Statistics about a write operation.
#[derive(Debug, Clone)]
pub struct WriteStatistics {
    /// Time taken to write the file.
    pub write_time: Duration,

    /// Size of the written file in bytes.
    pub file_size: u64,

    /// Path where the file was written.
    pub output_path: PathBuf,
}

impl WriteStatistics {
    /// Format file size as human-readable string.
    pub fn format_file_size(&self) -> String {
        format_file_size(self.file_size)
    }
}

/// PDF writer with configurable behavior.
#[derive(Debug, Clone, Default)]
pub struct PdfWriter {
    options: WriteOptions,
}

impl PdfWriter {
    /// Create a new PDF writer with default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a writer with custom options.
    pub fn with_options(options: WriteOptions) -> Self {
        Self { options }
    }

    /// Create a writer that writes straight to the destination.
    pub fn non_atomic() -> Self {
        Self::with_options(WriteOptions {
            atomic: false,
            ..Default::default()
        })
    }

    /// Serialize `doc` to `path`, replacing any existing file.
    ///
    /// The parent directory must already exist.
    ///
    /// # Errors
    ///
    /// - [`PdfMergeError::FailedToCreateOutput`] if the file (or the
    ///   temporary file) cannot be created
    /// - [`PdfMergeError::FailedToWrite`] if serialization, flushing or the
    ///   final rename fails
    pub fn write(&self, doc: &mut Document, path: &Path) -> Result<WriteStatistics> {
        let start = Instant::now();

        if self.options.atomic {
            self.write_atomic(doc, path)?;
        } else {
            self.write_in_place(doc, path)?;
        }

        let file_size = std::fs::metadata(path).map(|m| m.len()).unwrap_or(0);

        Ok(WriteStatistics {
            write_time: start.elapsed(),
            file_size,
            output_path: path.to_path_buf(),
        })
    }

    fn write_in_place(&self, doc: &mut Document, path: &Path) -> Result<()> {
        let file =
            std::fs::File::create(path).map_err(|source| PdfMergeError::FailedToCreateOutput {
                path: path.to_path_buf(),
                source,
            })?;

        let mut writer = BufWriter::with_capacity(self.options.buffer_size, file);
        serialize(doc, &mut writer, path)
    }

    fn write_atomic(&self, doc: &mut Document, path: &Path) -> Result<()> {
        let dir = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };

        let mut temp = tempfile::Builder::new()
            .prefix(".pdfmerge-")
            .suffix(".part")
            .tempfile_in(dir)
            .map_err(|source| PdfMergeError::FailedToCreateOutput {
                path: path.to_path_buf(),
                source,
            })?;

        {
            let mut writer = BufWriter::with_capacity(self.options.buffer_size, temp.as_file_mut());
            serialize(doc, &mut writer, path)?;
        }

        // The temporary file is deleted on drop if persisting fails.
        temp.persist(path)
            .map_err(|err| PdfMergeError::FailedToWrite {
                path: path.to_path_buf(),
                source: err.error,
            })?;

        Ok(())
    }
}

fn serialize<W: Write>(doc: &mut Document, writer: &mut BufWriter<W>, path: &Path) -> Result<()> {
    doc.save_to(writer)
        .map_err(|err| PdfMergeError::FailedToWrite {
            path: path.to_path_buf(),
            source: std::io::Error::other(err),
        })?;

    writer.flush().map_err(|source| PdfMergeError::FailedToWrite {
        path: path.to_path_buf(),
        source,
    })
}

/// Format file size as human-readable string.
fn format_file_size(size: u64) -> String {
    const KB: u64 = 1024;
    const MB: u64 = KB * 1024;
    const GB: u64 = MB * 1024;

    if size >= GB {
        format!("{:.2} GB", size as f64 / GB as f64)
    } else if size >= MB {
        format!("{:.2} MB", size as f64 / MB as f64)
    } else if size >= KB {
        format!("{:.2} KB", size as f64 / KB as f64)
    } else {
        format!("{size} bytes")
    }
}
