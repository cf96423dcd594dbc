//! Diagnostic logging setup.
//!
//! Library events go to stderr through `tracing-subscriber`. `RUST_LOG`
//! takes precedence; otherwise the level follows `--quiet` / `--verbose`.

use tracing_subscriber::EnvFilter;

/// How chatty the process should be.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verbosity {
    /// `--quiet`
    Quiet,
    /// No flag.
    Normal,
    /// `--verbose`
    Verbose,
}

impl Verbosity {
    /// Verbosity from the two CLI flags.
    pub fn from_flags(quiet: bool, verbose: bool) -> Self {
        match (quiet, verbose) {
            (true, _) => Self::Quiet,
            (false, true) => Self::Verbose,
            (false, false) => Self::Normal,
        }
    }

    /// Default filter directive when `RUST_LOG` is not set.
    ///
    /// Skipped files are already reported on stdout from the merge report,
    /// so only `--verbose` lets library events through.
    pub fn default_directive(self) -> &'static str {
        match self {
            Self::Quiet | Self::Normal => "error",
            Self::Verbose => "pdfmerge=debug,warn",
        }
    }
}

/// Install the global subscriber.
///
/// Safe to call more than once; later calls are no-ops.
pub fn init(verbosity: Verbosity) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(verbosity.default_directive()));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .try_init();
}
