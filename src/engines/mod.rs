//! Secret generation engines and shared output types.

pub mod charset;
pub mod passphrase;
pub mod password;
pub mod pin;

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

pub use charset::PoolConfig;
pub use passphrase::PassphraseConfig;
pub use password::PasswordConfig;

/// Kind of generated secret.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SecretKind {
    Password,
    Pin,
    Passphrase,
}

impl std::fmt::Display for SecretKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SecretKind::Password => write!(f, "Password"),
            SecretKind::Pin => write!(f, "PIN"),
            SecretKind::Passphrase => write!(f, "Passphrase"),
        }
    }
}

/// A generated secret with its metadata. Immutable once produced.
#[derive(Debug, Clone)]
pub struct GeneratedSecret {
    /// The secret itself.
    pub value: String,
    pub kind: SecretKind,
    /// Search-space estimate in bits; `None` where no meaningful estimate
    /// exists (passphrases after capitalization/suffix rules).
    pub entropy_bits: Option<u32>,
    /// When the secret was generated.
    pub created: OffsetDateTime,
}

impl GeneratedSecret {
    pub(crate) fn new(value: String, kind: SecretKind, entropy_bits: Option<u32>) -> Self {
        Self {
            value,
            kind,
            entropy_bits,
            created: OffsetDateTime::now_utc(),
        }
    }
}

/// Human label for an entropy estimate.
pub fn strength_label(entropy_bits: u32) -> &'static str {
    match entropy_bits {
        0..40 => "Weak",
        40..60 => "Moderate",
        60..80 => "Strong",
        80..100 => "Very Strong",
        _ => "Insane",
    }
}

/// `floor(length * log2(pool_size))`, or 0 when the pool makes the estimate
/// meaningless (size <= 1).
pub(crate) fn entropy_estimate(length: usize, pool_size: usize) -> u32 {
    let bits = length as f64 * (pool_size as f64).log2();
    if bits.is_finite() && bits > 0.0 {
        bits.floor() as u32
    } else {
        0
    }
}
