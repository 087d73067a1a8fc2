//! Generation errors.
//!
//! Configuration problems are typed, never encoded as sentinel output
//! strings, so a caller can never copy or record an error message as if it
//! were a generated secret.

use thiserror::Error;

/// Errors raised by the generation engines.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    /// No character class selected, or every character was excluded.
    #[error("character pool is empty; select at least one character class")]
    EmptyPool,

    /// No-repeat mode cannot produce more characters than the pool holds.
    #[error(
        "requested length {length} exceeds the {pool} distinct characters available without repeats"
    )]
    LengthExceedsPool {
        /// Requested password length.
        length: usize,
        /// Number of distinct characters in the effective pool.
        pool: usize,
    },

    /// The no-repeat fill loop ran out of unused characters mid-fill.
    #[error("character pool exhausted after {filled} of {length} characters")]
    InsufficientPool {
        /// Characters produced before the pool ran dry.
        filled: usize,
        /// Requested password length.
        length: usize,
    },
}
