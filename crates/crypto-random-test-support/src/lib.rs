//! Shared test doubles and fixtures for crypto-random.

mod entropy;
mod files;

pub use entropy::{ConstantEntropy, FailingEntropy, SequenceEntropy};
pub use files::TempLineFile;
