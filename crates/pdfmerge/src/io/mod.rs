//! PDF file I/O.
//!
//! - [`PdfReader`] opens one input at a time as an owned [`LoadedPdf`]
//! - [`PdfWriter`] serializes the merged document, atomically by default

pub mod reader;
pub mod writer;

pub use reader::{LoadedPdf, PdfReader};
pub use writer::{PdfWriter, WriteOptions, WriteStatistics};
