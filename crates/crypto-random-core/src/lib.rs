//! Crypto Random Core — secure randomness primitives.
//!
//! Everything here draws from an injected [`entropy::EntropySource`]. The
//! production source is [`entropy::OsEntropy`]; there is no seeded or
//! non-secure fallback anywhere in this crate.

pub mod entropy;
pub mod error;
pub mod random;
pub mod selector;
pub mod shuffle;

pub use entropy::{EntropySource, OsEntropy};
pub use error::RandomError;
pub use random::{random_float, random_int};
pub use selector::pick_winners;
pub use shuffle::{shuffle, shuffle_in_place};
