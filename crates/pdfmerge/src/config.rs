//! Configuration for merge operations.
//!
//! Everything here is plain data with sensible defaults; nothing is read
//! from or persisted to disk.

use serde::Serialize;
use std::str::FromStr;

use crate::error::PdfMergeError;
use crate::io::WriteOptions;
use crate::resolve::order::{self, NameComparator};

/// Order in which folder inputs are merged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum SortOrder {
    /// Case-insensitive lexicographic order of file names.
    #[default]
    Alphabetical,
    /// Numbers inside file names compare by value (`2` before `10`).
    Natural,
}

impl SortOrder {
    /// Comparator implementing this order.
    pub fn comparator(self) -> NameComparator {
        match self {
            Self::Alphabetical => Box::new(order::case_insensitive),
            Self::Natural => Box::new(order::natural),
        }
    }

    /// Name accepted by [`FromStr`].
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Alphabetical => "alpha",
            Self::Natural => "natural",
        }
    }
}

impl FromStr for SortOrder {
    type Err = PdfMergeError;

    /// Parse a sort order: `alpha`/`alphabetical` or `natural`, any case.
    fn from_str(s: &str) -> crate::Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "alpha" | "alphabetical" => Ok(Self::Alphabetical),
            "natural" => Ok(Self::Natural),
            _ => Err(PdfMergeError::invalid_config(format!(
                "Invalid sort order: {s}. Must be one of: alpha, natural"
            ))),
        }
    }
}

/// Options shared by both merge entry points.
#[derive(Debug, Clone)]
pub struct MergeOptions {
    /// Folder mode only: leave the output file out of the inputs.
    pub exclude_output: bool,

    /// Folder mode only: how discovered files are ordered.
    pub order: SortOrder,

    /// How the merged document is written.
    pub write: WriteOptions,
}

impl Default for MergeOptions {
    fn default() -> Self {
        Self {
            exclude_output: true,
            order: SortOrder::default(),
            write: WriteOptions::default(),
        }
    }
}
