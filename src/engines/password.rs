//! Password engine.

use crate::rand::{RandomSource, sampler};
use crate::{Error, Result};

use super::charset::{self, PoolConfig};
use super::{GeneratedSecret, SecretKind, entropy_estimate};

/// Password generation configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PasswordConfig {
    /// Number of characters to generate.
    pub length: usize,
    pub pool: PoolConfig,
    /// Guarantee at least one character from every selected class that
    /// survives exclusion.
    pub must_include_each_class: bool,
    /// Best effort: swap a letter into the first position.
    pub starts_with_letter: bool,
}

impl Default for PasswordConfig {
    fn default() -> Self {
        Self {
            length: 16,
            pool: PoolConfig::default(),
            must_include_each_class: true,
            starts_with_letter: false,
        }
    }
}

impl PasswordConfig {
    /// 16 characters, all classes, ambiguous excluded.
    pub fn balanced() -> Self {
        Self {
            length: 16,
            starts_with_letter: true,
            ..Default::default()
        }
    }

    /// 32 characters, otherwise as [`balanced`](Self::balanced).
    pub fn strong() -> Self {
        Self {
            length: 32,
            ..Self::balanced()
        }
    }

    /// 64 characters with no repeated characters.
    pub fn paranoid() -> Self {
        Self {
            length: 64,
            pool: PoolConfig {
                no_repeats: true,
                ..Default::default()
            },
            ..Self::balanced()
        }
    }
}

/// Generate a password.
///
/// Fails with [`Error::EmptyPool`] when no characters survive the pool
/// configuration, and [`Error::LengthExceedsPool`] when no-repeat mode asks
/// for more characters than the pool holds.
pub fn generate<R: RandomSource + ?Sized>(
    rng: &mut R,
    config: &PasswordConfig,
) -> Result<GeneratedSecret> {
    let pool = charset::build(&config.pool);
    if pool.is_empty() {
        return Err(Error::EmptyPool);
    }
    if config.pool.no_repeats && config.length > pool.len() {
        return Err(Error::LengthExceedsPool {
            length: config.length,
            pool: pool.len(),
        });
    }

    let mut out: Vec<u8> = Vec::with_capacity(config.length);

    // One character from each selected class that survives exclusion. A
    // fully excluded class contributes nothing; that is not an error.
    if config.must_include_each_class {
        for class in charset::selected_classes(&config.pool) {
            let surviving: Vec<u8> = class
                .iter()
                .copied()
                .filter(|c| pool.contains(c))
                .collect();
            if !surviving.is_empty() {
                out.push(sampler::choose(rng, &surviving));
            }
        }
    }

    while out.len() < config.length {
        if config.pool.no_repeats {
            let unused: Vec<u8> = pool
                .iter()
                .copied()
                .filter(|c| !out.contains(c))
                .collect();
            if unused.is_empty() {
                // Unreachable while the length check above holds, but an
                // exhausted pool must never silently shorten the result.
                return Err(Error::InsufficientPool {
                    filled: out.len(),
                    length: config.length,
                });
            }
            out.push(sampler::choose(rng, &unused));
        } else {
            out.push(sampler::choose(rng, &pool));
        }
    }

    // Must-include characters sit at the front until shuffled.
    sampler::shuffle(rng, &mut out);

    if config.starts_with_letter
        && !out.is_empty()
        && !out[0].is_ascii_alphabetic()
        && let Some(i) = out.iter().position(|c| c.is_ascii_alphabetic())
    {
        out.swap(0, i);
    }

    // Must-include may overshoot when length < number of selected classes.
    out.truncate(config.length);

    let entropy = entropy_estimate(config.length, pool.len());
    // Safety: pool characters are all ASCII
    let value = unsafe { String::from_utf8_unchecked(out) };
    Ok(GeneratedSecret::new(value, SecretKind::Password, Some(entropy)))
}
