//! Shared test helpers for CLI integration tests.
#![allow(dead_code)]

use std::process::{Command, Output};

use crypto_random_cli::{ExitStatus, run};
use crypto_random_core::entropy::EntropySource;

/// Captured result of one in-process invocation.
pub struct RunOutput {
    pub status: ExitStatus,
    pub stdout: String,
    pub stderr: String,
}

impl RunOutput {
    /// Non-empty stdout lines.
    pub fn lines(&self) -> Vec<&str> {
        self.stdout.lines().filter(|l| !l.is_empty()).collect()
    }
}

/// Run the CLI in-process with `args` (program name excluded) and the given
/// entropy source.
pub fn run_with(source: &mut dyn EntropySource, args: &[&str]) -> RunOutput {
    let mut stdout = Vec::new();
    let mut stderr = Vec::new();
    let argv = std::iter::once("crypto-random").chain(args.iter().copied());
    let status = run(argv, source, &mut stdout, &mut stderr);

    RunOutput {
        status,
        stdout: String::from_utf8(stdout).unwrap(),
        stderr: String::from_utf8(stderr).unwrap(),
    }
}

/// Run the compiled `crypto-random` binary with `args`.
pub fn run_binary(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_crypto-random"))
        .args(args)
        .env_remove("RUST_LOG")
        .env_remove("CRYPTO_RANDOM_LOG_FORMAT")
        .output()
        .unwrap()
}

/// Stdout of a finished process as UTF-8.
pub fn stdout_of(output: &Output) -> String {
    String::from_utf8(output.stdout.clone()).unwrap()
}

/// Stderr of a finished process as UTF-8.
pub fn stderr_of(output: &Output) -> String {
    String::from_utf8(output.stderr.clone()).unwrap()
}
