//! Merge engine.
//!
//! Processes inputs strictly one after another, in the order given. Each
//! input is opened, its pages are appended to a [`PageAccumulator`], and the
//! document is released before the next input is opened. An input that
//! cannot be read is logged and skipped; it never aborts the batch.

use std::path::{Path, PathBuf};
use std::time::Instant;

use crate::config::MergeOptions;
use crate::error::{PdfMergeError, Result};
use crate::io::{PdfReader, PdfWriter};
use crate::merge::accumulator::PageAccumulator;
use crate::merge::report::{FileOutcome, FileReport, MergeReport};
use crate::resolve::InputResolver;

/// PDF merger that concatenates whole documents.
#[derive(Debug)]
pub struct Merger {
    /// Lists folder inputs.
    resolver: InputResolver,

    /// Opens each input.
    reader: PdfReader,

    /// Writes the merged document.
    writer: PdfWriter,

    options: MergeOptions,
}

impl Merger {
    /// Create a merger with default options.
    pub fn new() -> Self {
        Self::with_options(MergeOptions::default())
    }

    /// Create a merger with the given options.
    pub fn with_options(options: MergeOptions) -> Self {
        Self {
            resolver: InputResolver::with_order(options.order),
            reader: PdfReader::new(),
            writer: PdfWriter::with_options(options.write.clone()),
            options,
        }
    }

    /// Replace the folder resolver, e.g. to inject a custom name order.
    pub fn with_resolver(mut self, resolver: InputResolver) -> Self {
        self.resolver = resolver;
        self
    }

    /// Options this merger was built with.
    pub fn options(&self) -> &MergeOptions {
        &self.options
    }

    /// Where folder mode writes its output.
    ///
    /// A relative `output` is placed inside `folder`; an absolute one is
    /// used unchanged.
    pub fn folder_output_path(folder: &Path, output: &Path) -> PathBuf {
        if output.is_absolute() {
            output.to_path_buf()
        } else {
            folder.join(output)
        }
    }

    /// Ordered inputs folder mode would merge, without merging anything.
    ///
    /// # Errors
    ///
    /// Same as [`InputResolver::resolve`].
    pub fn folder_inputs(&self, folder: &Path, output: &Path) -> Result<Vec<PathBuf>> {
        let output = Self::folder_output_path(folder, output);
        let exclude = (self.options.exclude_output && lies_in(folder, &output))
            .then_some(output.as_path());
        self.resolver.resolve(folder, exclude)
    }

    /// Merge every PDF in `folder` into `output`.
    ///
    /// Inputs are ordered by the configured sort order. With
    /// `exclude_output` set (the default), a previous output sitting
    /// directly in the folder is never merged into the new one. An output
    /// placed anywhere else excludes nothing.
    ///
    /// # Errors
    ///
    /// - [`PdfMergeError::DirectoryNotFound`] / [`PdfMergeError::NotADirectory`]
    /// - [`PdfMergeError::NoInputs`] if the folder holds no eligible PDF;
    ///   nothing is written
    /// - any error of [`Merger::merge_files`]
    ///
    /// # Examples
    ///
    /// ```no_run
    /// # use pdfmerge::merge::Merger;
    /// # use std::path::Path;
    /// # fn example() -> pdfmerge::Result<()> {
    /// let report = Merger::new().merge_by_folder(Path::new("scans"), Path::new("merged.pdf"))?;
    /// println!("{} pages", report.total_pages);
    /// # Ok(())
    /// # }
    /// ```
    pub fn merge_by_folder(&self, folder: &Path, output: &Path) -> Result<MergeReport> {
        let inputs = self.folder_inputs(folder, output)?;

        if inputs.is_empty() {
            tracing::warn!(folder = %folder.display(), "no PDF files found");
            return Err(PdfMergeError::no_inputs(format!("'{}'", folder.display())));
        }

        tracing::info!(
            folder = %folder.display(),
            count = inputs.len(),
            "found PDF files to merge"
        );

        self.merge_files(&inputs, &Self::folder_output_path(folder, output))
    }

    /// Merge `paths`, in exactly this order, into `output`.
    ///
    /// No sorting or deduplication happens here. Unreadable inputs are
    /// recorded as skipped. The output is written (overwriting any existing
    /// file) only if at least one page was merged; otherwise the report
    /// comes back with `success() == false` and the filesystem is untouched.
    ///
    /// # Errors
    ///
    /// - [`PdfMergeError::NoInputs`] if `paths` is empty
    /// - [`PdfMergeError::FailedToCreateOutput`] / [`PdfMergeError::FailedToWrite`]
    ///   if the output cannot be written
    #[tracing::instrument(
        name = "merge",
        skip_all,
        fields(inputs = paths.len(), output = %output.display())
    )]
    pub fn merge_files(&self, paths: &[PathBuf], output: &Path) -> Result<MergeReport> {
        if paths.is_empty() {
            return Err(PdfMergeError::no_inputs("the supplied file list"));
        }

        let start = Instant::now();
        let mut accumulator = PageAccumulator::new();
        let mut files = Vec::with_capacity(paths.len());

        for (idx, path) in paths.iter().enumerate() {
            let outcome = self.append_file(&mut accumulator, path);

            match &outcome {
                FileOutcome::Merged { pages } => tracing::info!(
                    file = %path.display(),
                    pages,
                    "[{}/{}] added",
                    idx + 1,
                    paths.len()
                ),
                FileOutcome::Skipped { reason } => tracing::warn!(
                    file = %path.display(),
                    reason = %reason,
                    "[{}/{}] could not add, skipping",
                    idx + 1,
                    paths.len()
                ),
            }

            files.push(FileReport {
                path: path.clone(),
                outcome,
            });
        }

        let total_pages = accumulator.page_count();
        if accumulator.is_empty() {
            tracing::warn!("no pages merged; output not written");
            return Ok(MergeReport {
                files,
                total_pages,
                output: None,
                bytes_written: 0,
                elapsed: start.elapsed(),
            });
        }

        let mut document = accumulator.finish();
        let stats = self.writer.write(&mut document, output)?;

        tracing::info!(
            output = %output.display(),
            pages = total_pages,
            size = %stats.format_file_size(),
            "wrote merged document"
        );

        Ok(MergeReport {
            files,
            total_pages,
            output: Some(output.to_path_buf()),
            bytes_written: stats.file_size,
            elapsed: start.elapsed(),
        })
    }

    /// Open one input and move its pages into the accumulator.
    ///
    /// The loaded document lives only for the duration of this call.
    fn append_file(&self, accumulator: &mut PageAccumulator, path: &Path) -> FileOutcome {
        let appended = self
            .reader
            .open(path)
            .and_then(|loaded| accumulator.append(loaded));

        match appended {
            Ok(pages) => FileOutcome::Merged { pages },
            Err(PdfMergeError::UnreadableInput { reason, .. }) => FileOutcome::Skipped { reason },
            Err(err) => FileOutcome::Skipped {
                reason: err.to_string(),
            },
        }
    }
}

/// Whether `path` names an entry directly inside `folder`.
fn lies_in(folder: &Path, path: &Path) -> bool {
    let Some(parent) = path.parent() else {
        return false;
    };
    if parent == folder {
        return true;
    }

    match (parent.canonicalize(), folder.canonicalize()) {
        (Ok(parent), Ok(folder)) => parent == folder,
        _ => false,
    }
}

impl Default for Merger {
    fn default() -> Self {
        Self::new()
    }
}
