//! Command-line grammar.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

const EXAMPLES: &str = "\
Examples:
  crypto-random int 100
  crypto-random float
  crypto-random shuffle addresses.txt
  crypto-random winners addresses.txt 10";

/// Top-level arguments.
#[derive(Debug, Parser)]
#[command(
    name = "crypto-random",
    version,
    about = "Cryptographically secure randomness for crypto / Web3 tooling",
    arg_required_else_help = true,
    after_help = EXAMPLES
)]
pub struct Cli {
    /// The operation to perform.
    #[command(subcommand)]
    pub command: Command,
}

/// One invocation performs exactly one of these.
///
/// Numeric arguments are taken as wide signed integers so that zero and
/// negative values reach validation and get a precise message instead of a
/// generic parse error.
#[derive(Debug, Clone, PartialEq, Eq, Subcommand)]
pub enum Command {
    /// Print a random integer in [0, maxExclusive)
    Int {
        /// Exclusive upper bound, between 1 and 2^64 - 1
        #[arg(value_name = "maxExclusive", allow_negative_numbers = true)]
        max_exclusive: i128,
    },

    /// Print a random float in [0, 1)
    Float,

    /// Shuffle lines from a file and print them
    Shuffle {
        /// Text file with one entry per line
        file: PathBuf,
    },

    /// Pick COUNT random unique lines from a file
    Winners {
        /// Text file with one entry per line
        file: PathBuf,
        /// Number of winners to draw
        #[arg(allow_negative_numbers = true)]
        count: i128,
    },
}
