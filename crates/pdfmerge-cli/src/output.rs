//! User-facing output.
//!
//! Status lines go to stdout with a ✓/⚠/✗/→ prefix, colored when stdout is
//! a terminal. Errors go to stderr. In `--json` mode nothing but the report
//! is written to stdout, so the formatter is built quiet.

use std::io::{self, IsTerminal};
use std::path::Path;

use pdfmerge::{FileOutcome, MergeReport};

/// Level of output message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageLevel {
    /// Informational message.
    Info,
    /// Success message.
    Success,
    /// Warning message.
    Warning,
    /// Error message.
    Error,
    /// Debug/verbose message.
    Debug,
}

impl MessageLevel {
    fn prefix(self) -> &'static str {
        match self {
            Self::Info => "",
            Self::Success => "✓ ",
            Self::Warning => "⚠ ",
            Self::Error => "✗ ",
            Self::Debug => "→ ",
        }
    }

    fn color_code(self) -> &'static str {
        match self {
            Self::Info => "",
            Self::Success => "\x1b[32m",
            Self::Warning => "\x1b[33m",
            Self::Error => "\x1b[31m",
            Self::Debug => "\x1b[36m",
        }
    }
}

/// Output formatter with configurable verbosity.
#[derive(Debug)]
pub struct OutputFormatter {
    /// Whether to suppress non-error output.
    quiet: bool,
    /// Whether to show verbose output.
    verbose: bool,
    /// Whether to use colored output.
    colored: bool,
}

impl OutputFormatter {
    /// Create a new output formatter.
    pub fn new(quiet: bool, verbose: bool) -> Self {
        Self {
            quiet,
            verbose,
            colored: io::stdout().is_terminal() && std::env::var_os("NO_COLOR").is_none(),
        }
    }

    /// Print an informational message. Suppressed in quiet mode.
    pub fn info(&self, message: &str) {
        if !self.quiet {
            println!("{}", self.render(MessageLevel::Info, message));
        }
    }

    /// Print a success message. Suppressed in quiet mode.
    pub fn success(&self, message: &str) {
        if !self.quiet {
            println!("{}", self.render(MessageLevel::Success, message));
        }
    }

    /// Print a warning message, even in quiet mode.
    pub fn warning(&self, message: &str) {
        println!("{}", self.render(MessageLevel::Warning, message));
    }

    /// Print an error message to stderr.
    pub fn error(&self, message: &str) {
        eprintln!("{}", self.render(MessageLevel::Error, message));
    }

    /// Print a message only in verbose mode.
    pub fn debug(&self, message: &str) {
        if self.verbose {
            println!("{}", self.render(MessageLevel::Debug, message));
        }
    }

    /// Print a labelled value. Only shown in verbose mode.
    pub fn detail(&self, label: &str, value: &str) {
        if self.verbose {
            println!("  {label}: {value}");
        }
    }

    /// Print a numbered list item. Suppressed in quiet mode.
    pub fn list_item(&self, index: usize, message: &str) {
        if !self.quiet {
            println!("  {index}. {message}");
        }
    }

    /// Print a blank line. Suppressed in quiet mode.
    pub fn blank_line(&self) {
        if !self.quiet {
            println!();
        }
    }

    /// Check if verbose output should be shown.
    pub fn is_verbose(&self) -> bool {
        self.verbose
    }

    /// Format a message with its level prefix.
    fn render(&self, level: MessageLevel, message: &str) -> String {
        let prefix = level.prefix();
        let color_code = level.color_code();

        if self.colored && !color_code.is_empty() {
            format!("{color_code}{prefix}{message}\x1b[0m")
        } else {
            format!("{prefix}{message}")
        }
    }
}

impl Default for OutputFormatter {
    fn default() -> Self {
        Self::new(false, false)
    }
}

/// Print the numbered list of inputs about to be merged.
pub fn display_inputs(formatter: &OutputFormatter, inputs: &[impl AsRef<Path>]) {
    formatter.info(&format!("Found {} PDF file(s) to merge:", inputs.len()));
    for (idx, path) in inputs.iter().enumerate() {
        formatter.list_item(idx + 1, &display_name(path.as_ref()));
    }
}

/// Print per-file outcomes and the closing summary of a merge.
pub fn display_report(formatter: &OutputFormatter, report: &MergeReport) {
    for file in &report.files {
        let name = display_name(&file.path);
        match &file.outcome {
            FileOutcome::Merged { pages } => {
                formatter.success(&format!("Added {name} ({pages} {})", plural(*pages, "page")))
            }
            FileOutcome::Skipped { reason } => {
                formatter.warning(&format!("Could not add {name}, skipping: {reason}"))
            }
        }
    }

    formatter.blank_line();
    match &report.output {
        Some(output) => formatter.success(&summary_line(report, output)),
        None => formatter.error("No pages were merged; output not written"),
    }

    if formatter.is_verbose() {
        formatter.detail("Output size", &format!("{} bytes", report.bytes_written));
        formatter.detail(
            "Elapsed",
            &format!("{:.2}s", report.elapsed.as_secs_f64()),
        );
    }
}

/// "Merged X of Y files (Z pages) into OUT".
pub fn summary_line(report: &MergeReport, output: &Path) -> String {
    format!(
        "Merged {} of {} {} ({} {}) into {}",
        report.merged_count(),
        report.files.len(),
        plural(report.files.len(), "file"),
        report.total_pages,
        plural(report.total_pages, "page"),
        output.display()
    )
}

/// File name if there is one, else the whole path.
fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

fn plural(count: usize, word: &str) -> String {
    if count == 1 {
        word.to_string()
    } else {
        format!("{word}s")
    }
}
