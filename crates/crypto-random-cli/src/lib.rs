//! Crypto Random CLI — command-line shell over `crypto-random-core`.
//!
//! [`run`] owns argument parsing, output formatting and exit status. It
//! takes its entropy source and output streams as parameters; the binary
//! passes `OsEntropy` and the real stdio handles.

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod input;
pub mod logging;

use std::ffi::OsString;
use std::io::{self, Write};
use std::process::ExitCode;

use clap::error::ErrorKind;
use clap::{CommandFactory, Parser};
use crypto_random_core::entropy::EntropySource;
use tracing::{debug, error, warn};

use crate::cli::Cli;

/// Process outcome of one invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitStatus {
    /// Exit code 0.
    Success,
    /// Exit code 1.
    Failure,
}

impl ExitStatus {
    /// The numeric process exit code.
    #[must_use]
    pub fn code(self) -> u8 {
        match self {
            Self::Success => 0,
            Self::Failure => 1,
        }
    }
}

impl From<ExitStatus> for ExitCode {
    fn from(status: ExitStatus) -> Self {
        Self::from(status.code())
    }
}

/// Parses `args` (program name first), runs the command and writes the
/// result.
///
/// Help and version requests print to `out` and succeed. Parse errors and
/// command failures print to `err` and fail; on failure nothing is written
/// to `out`.
pub fn run<I, T>(
    args: I,
    source: &mut dyn EntropySource,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> ExitStatus
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let cli = match Cli::try_parse_from(args) {
        Ok(cli) => cli,
        Err(parse_error) => return report_parse_error(&parse_error, out, err),
    };
    debug!(command = ?cli.command, "parsed command line");

    match commands::execute(&cli.command, source) {
        Ok(lines) => match write_lines(out, &lines) {
            Ok(()) => ExitStatus::Success,
            Err(e) => {
                error!(error = %e, "failed to write output");
                ExitStatus::Failure
            }
        },
        Err(e) => {
            error!(error = %e, fatal = e.is_fatal(), "command failed");
            let _ = writeln!(err, "error: {e}");
            ExitStatus::Failure
        }
    }
}

fn report_parse_error(
    parse_error: &clap::Error,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> ExitStatus {
    match parse_error.kind() {
        ErrorKind::DisplayHelp
        | ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand
        | ErrorKind::DisplayVersion => {
            let _ = write!(out, "{}", parse_error.render());
            ExitStatus::Success
        }
        ErrorKind::InvalidSubcommand => {
            warn!("unrecognized command");
            let _ = write!(err, "{}", parse_error.render());
            let _ = write!(err, "\n{}", Cli::command().render_help());
            ExitStatus::Failure
        }
        kind => {
            warn!(?kind, "rejected command line");
            let _ = write!(err, "{}", parse_error.render());
            ExitStatus::Failure
        }
    }
}

fn write_lines(out: &mut dyn Write, lines: &[String]) -> io::Result<()> {
    for line in lines {
        writeln!(out, "{line}")?;
    }
    out.flush()
}
