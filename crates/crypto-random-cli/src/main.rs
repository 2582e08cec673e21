//! crypto-random entry point.

use std::io;
use std::process::ExitCode;

use crypto_random_cli::config::Config;
use crypto_random_cli::error::AppError;
use crypto_random_cli::logging::init_logging;
use crypto_random_cli::{ExitStatus, run};
use crypto_random_core::entropy::OsEntropy;

fn main() -> ExitCode {
    match try_main() {
        Ok(status) => status.into(),
        Err(e) => {
            eprintln!("error: {e}");
            ExitStatus::Failure.into()
        }
    }
}

fn try_main() -> Result<ExitStatus, AppError> {
    let config = Config::from_env()?;
    init_logging(&config)?;
    tracing::debug!(?config, "starting crypto-random");

    let mut source = OsEntropy;
    let mut stdout = io::stdout().lock();
    let mut stderr = io::stderr().lock();
    Ok(run(std::env::args_os(), &mut source, &mut stdout, &mut stderr))
}
