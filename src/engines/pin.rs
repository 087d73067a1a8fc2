//! PIN engine: fixed-length numeric strings.

use crate::rand::{RandomSource, sampler};

use super::charset::DIGITS;
use super::{GeneratedSecret, SecretKind, entropy_estimate};

/// Generate a PIN of `length` digits, each independently uniform over 0-9.
pub fn generate<R: RandomSource + ?Sized>(rng: &mut R, length: usize) -> GeneratedSecret {
    let bytes: Vec<u8> = (0..length).map(|_| sampler::choose(rng, DIGITS)).collect();
    let entropy = entropy_estimate(length, DIGITS.len());
    // Safety: digits are ASCII
    let value = unsafe { String::from_utf8_unchecked(bytes) };
    GeneratedSecret::new(value, SecretKind::Pin, Some(entropy))
}
