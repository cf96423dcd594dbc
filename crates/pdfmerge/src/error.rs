//! Error types for pdfmerge.
//!
//! Errors fall into two groups:
//!
//! - **Fatal**: the invocation stops and no output is written
//!   (missing directory, empty input set, output write failures).
//! - **Recoverable**: a single input could not be read. The merge engine
//!   records it as skipped and carries on with the next file.

use std::io;
use std::path::PathBuf;

/// Result type alias for pdfmerge operations.
pub type Result<T> = std::result::Result<T, PdfMergeError>;

/// Main error type for pdfmerge operations.
#[derive(Debug, thiserror::Error)]
pub enum PdfMergeError {
    /// The folder to scan does not exist.
    #[error("No such directory: {}", path.display())]
    DirectoryNotFound {
        /// Folder that was requested.
        path: PathBuf,
    },

    /// The folder to scan exists but is not a directory.
    #[error("Not a directory: {}", path.display())]
    NotADirectory {
        /// Path that was requested.
        path: PathBuf,
    },

    /// There was nothing to merge.
    #[error("No PDF files found in {origin}")]
    NoInputs {
        /// Where the inputs were expected to come from.
        origin: String,
    },

    /// An input file could not be opened or parsed as a PDF.
    #[error("Could not read PDF: {}\n  Reason: {reason}", path.display())]
    UnreadableInput {
        /// Path of the offending input.
        path: PathBuf,
        /// Why it could not be read.
        reason: String,
    },

    /// The output file could not be created.
    #[error("Failed to create output file: {}\n  Reason: {source}", path.display())]
    FailedToCreateOutput {
        /// Output path.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// The merged document could not be written to the output file.
    #[error("Failed to write to output file: {}\n  Reason: {source}", path.display())]
    FailedToWrite {
        /// Output path.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// Invalid configuration value.
    #[error("Invalid configuration: {message}")]
    InvalidConfig {
        /// What is wrong with it.
        message: String,
    },

    /// Generic I/O error.
    #[error("I/O error: {source}")]
    Io {
        /// Underlying I/O error.
        #[from]
        source: io::Error,
    },
}

impl PdfMergeError {
    /// Create a DirectoryNotFound error.
    pub fn directory_not_found(path: impl Into<PathBuf>) -> Self {
        Self::DirectoryNotFound { path: path.into() }
    }

    /// Create a NotADirectory error.
    pub fn not_a_directory(path: impl Into<PathBuf>) -> Self {
        Self::NotADirectory { path: path.into() }
    }

    /// Create a NoInputs error.
    pub fn no_inputs(origin: impl Into<String>) -> Self {
        Self::NoInputs {
            origin: origin.into(),
        }
    }

    /// Create an UnreadableInput error.
    pub fn unreadable_input(path: impl Into<PathBuf>, reason: impl Into<String>) -> Self {
        Self::UnreadableInput {
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Create an InvalidConfig error.
    pub fn invalid_config(message: impl Into<String>) -> Self {
        Self::InvalidConfig {
            message: message.into(),
        }
    }

    /// Errors the merge engine skips over instead of aborting the batch.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, Self::UnreadableInput { .. })
    }

    /// Errors that always end the invocation without output.
    pub fn is_fatal(&self) -> bool {
        !self.is_recoverable()
    }

    /// Process exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::InvalidConfig { .. } => 1,
            Self::DirectoryNotFound { .. } | Self::NotADirectory { .. } => 2,
            Self::NoInputs { .. } | Self::UnreadableInput { .. } => 3,
            Self::FailedToCreateOutput { .. } | Self::FailedToWrite { .. } | Self::Io { .. } => 5,
        }
    }
}
