//! Local-only secret generation: passwords, PINs, and passphrases.
//!
//! Everything here runs on-device against the OS CSPRNG. The generation
//! engines are pure functions of a configuration plus a [`rand::RandomSource`]
//! capability; the [`history`] store is a bounded, persisted log that callers
//! feed after generation.

mod error;
pub mod engines;
pub mod history;
pub mod rand;

pub use error::Error;

/// Result type for the library.
pub type Result<T> = std::result::Result<T, Error>;
