//! pdfmerge - Merge PDF files into a single document.
//!
//! Command-line front end for the `pdfmerge` library.

mod cli;
mod logger;
mod output;

use clap::Parser;
use serde::Serialize;
use std::io;
use std::path::{Path, PathBuf};
use std::process;

use crate::cli::{Cli, Command};
use crate::logger::Verbosity;
use crate::output::{OutputFormatter, display_inputs, display_report};
use pdfmerge::error::{PdfMergeError, Result};
use pdfmerge::{MergeReport, Merger};

/// Exit status when the run completed but no page was merged.
const EXIT_NOTHING_MERGED: i32 = 3;

fn main() {
    let cli = Cli::parse();

    logger::init(Verbosity::from_flags(cli.quiet, cli.verbose));

    match run(&cli) {
        Ok(0) => {}
        Ok(code) => process::exit(code),
        Err(err) => {
            eprintln!("Error: {err}");
            process::exit(err.exit_code());
        }
    }
}

/// Main application logic. Returns the process exit status.
fn run(cli: &Cli) -> Result<i32> {
    // JSON mode keeps stdout for the report alone.
    let formatter = if cli.json {
        OutputFormatter::new(true, false)
    } else {
        OutputFormatter::new(cli.quiet, cli.verbose)
    };

    let merger = Merger::with_options(cli.merge_options());

    let report = match &cli.command {
        Command::Folder { dir, output, .. } => {
            let inputs = merger.folder_inputs(dir, output)?;
            if inputs.is_empty() {
                return Err(PdfMergeError::no_inputs(format!("'{}'", dir.display())));
            }

            display_inputs(&formatter, &inputs);
            if cli.dry_run {
                let output = Merger::folder_output_path(dir, output);
                return dry_run(&formatter, cli.json, &inputs, &output);
            }

            formatter.blank_line();
            merger.merge_by_folder(dir, output)?
        }
        Command::Files { inputs, output } => {
            let inputs = expand_inputs(inputs)?;

            display_inputs(&formatter, &inputs);
            if cli.dry_run {
                return dry_run(&formatter, cli.json, &inputs, output);
            }

            formatter.blank_line();
            merger.merge_files(&inputs, output)?
        }
    };

    if cli.json {
        print_json(&report)?;
    } else {
        display_report(&formatter, &report);
    }

    Ok(exit_status(&report))
}

fn exit_status(report: &MergeReport) -> i32 {
    if report.success() {
        0
    } else {
        EXIT_NOTHING_MERGED
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct DryRunReport<'a> {
    dry_run: bool,
    inputs: &'a [PathBuf],
    output: &'a Path,
}

fn dry_run(
    formatter: &OutputFormatter,
    json: bool,
    inputs: &[PathBuf],
    output: &Path,
) -> Result<i32> {
    if json {
        print_json(&DryRunReport {
            dry_run: true,
            inputs,
            output,
        })?;
    } else {
        formatter.blank_line();
        formatter.success("Dry run completed successfully");
        formatter.info(&format!("  Output would be: {}", output.display()));
        formatter.info("  Run without --dry-run to create the merged PDF");
    }
    Ok(0)
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value).map_err(io::Error::from)?;
    println!("{json}");
    Ok(())
}

/// Expand glob patterns among the inputs, keeping their position.
///
/// Arguments without glob metacharacters are taken literally. A pattern
/// with no match is kept as is, so it shows up as a skipped input instead
/// of silently vanishing.
fn expand_inputs(inputs: &[PathBuf]) -> Result<Vec<PathBuf>> {
    let mut expanded = Vec::with_capacity(inputs.len());

    for input in inputs {
        let Some(pattern) = input.to_str().filter(|s| is_glob_pattern(s)) else {
            expanded.push(input.clone());
            continue;
        };

        let paths = glob::glob(pattern).map_err(|err| {
            PdfMergeError::invalid_config(format!("Invalid glob pattern '{pattern}': {err}"))
        })?;

        let mut matched = Vec::new();
        for entry in paths {
            matched.push(entry.map_err(glob::GlobError::into_error)?);
        }

        if matched.is_empty() {
            tracing::debug!(pattern, "glob matched nothing; keeping it literally");
            expanded.push(input.clone());
        } else {
            expanded.extend(matched);
        }
    }

    Ok(expanded)
}

fn is_glob_pattern(s: &str) -> bool {
    s.contains(['*', '?', '['])
}
