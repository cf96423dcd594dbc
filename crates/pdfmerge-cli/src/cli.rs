//! CLI argument parsing for pdfmerge.
//!
//! This module defines the command-line interface structure using `clap`.
//! It is also compiled into `build.rs` to render the man page, so it only
//! depends on `clap` and the `pdfmerge` library.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use pdfmerge::config::{MergeOptions, SortOrder};

/// Default output file name in folder mode.
pub const DEFAULT_OUTPUT: &str = "merged_output.pdf";

/// Merge PDF files into a single document.
///
/// Either merge every PDF found directly inside a folder (sorted by file
/// name), or merge an explicit list of files in the order given. Files that
/// cannot be read are reported and skipped.
#[derive(Parser, Debug)]
#[command(name = "pdfmerge")]
#[command(version)]
#[command(about = "Merge a folder or an ordered list of PDF files into a single document", long_about = None)]
#[command(author)]
#[command(arg_required_else_help = true)]
pub struct Cli {
    /// What to merge
    #[command(subcommand)]
    pub command: Command,

    /// Verbose output - show resolver decisions and per-file details
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress all non-error output
    ///
    /// Only errors and warnings will be printed.
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Print the merge report as JSON on stdout
    #[arg(long, global = true)]
    pub json: bool,

    /// Dry run - list the inputs that would be merged, write nothing
    #[arg(short = 'n', long, global = true)]
    pub dry_run: bool,
}

/// Input selection modes.
#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Command {
    /// Merge every PDF directly inside a folder
    ///
    /// Files are merged in file name order. Subdirectories are not
    /// searched. A relative output path is placed inside the folder, and an
    /// existing output is left out of the inputs so the command can be
    /// re-run.
    ///
    /// Examples:
    ///   pdfmerge folder
    ///   pdfmerge folder scans -o book.pdf --order natural
    Folder {
        /// Folder to scan
        #[arg(value_name = "DIR", default_value = ".")]
        dir: PathBuf,

        /// Output PDF file path
        #[arg(short, long, value_name = "FILE", default_value = DEFAULT_OUTPUT)]
        output: PathBuf,

        /// Merge a file named like the output too, if the folder holds one
        #[arg(long)]
        include_output: bool,

        /// File name order: alpha (case-insensitive) or natural (2 before 10)
        #[arg(long, value_name = "ORDER", env = "PDFMERGE_ORDER", default_value = "alpha")]
        order: SortOrder,
    },

    /// Merge the given files in the order provided
    ///
    /// Glob patterns are expanded by pdfmerge as well, for shells that do
    /// not expand them.
    ///
    /// Examples:
    ///   pdfmerge files cover.pdf body.pdf -o book.pdf
    ///   pdfmerge files 'chapter*.pdf' -o book.pdf
    Files {
        /// Input PDF files to merge (in order)
        #[arg(required = true, value_name = "FILE")]
        inputs: Vec<PathBuf>,

        /// Output PDF file path
        #[arg(short, long, value_name = "FILE")]
        output: PathBuf,
    },
}

impl Cli {
    /// Merge options for the selected command.
    pub fn merge_options(&self) -> MergeOptions {
        match &self.command {
            Command::Folder {
                include_output,
                order,
                ..
            } => MergeOptions {
                exclude_output: !include_output,
                order: *order,
                ..Default::default()
            },
            Command::Files { .. } => MergeOptions::default(),
        }
    }
}
