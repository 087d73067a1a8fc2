//! Character classes and effective-pool construction.

/// Lowercase roman letters.
pub const LOWERCASE: &[u8] = b"abcdefghijklmnopqrstuvwxyz";
/// Uppercase roman letters.
pub const UPPERCASE: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";
/// Numeric digits.
pub const DIGITS: &[u8] = b"0123456789";
/// Punctuation and symbol characters.
pub const SYMBOLS: &[u8] = b"!@#$%^&*()_+-=[]{}|;:'\",.<>/?~";
/// Visually confusable characters, optionally excluded.
pub const AMBIGUOUS: &[u8] = b"O0lI|";

/// Character-pool configuration: selected classes and exclusion rules.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PoolConfig {
    pub lowercase: bool,
    pub uppercase: bool,
    pub digits: bool,
    pub symbols: bool,
    /// Strip the [`AMBIGUOUS`] set from the pool.
    pub exclude_ambiguous: bool,
    /// Further characters to strip, user supplied.
    pub exclude_custom: Vec<u8>,
    /// Each character may appear at most once in the output.
    pub no_repeats: bool,
}

impl Default for PoolConfig {
    fn default() -> Self {
        Self {
            lowercase: true,
            uppercase: true,
            digits: true,
            symbols: true,
            exclude_ambiguous: true,
            exclude_custom: Vec::new(),
            no_repeats: false,
        }
    }
}

/// Class byte sets selected by `config`, in fixed order.
pub fn selected_classes(config: &PoolConfig) -> Vec<&'static [u8]> {
    let mut classes = Vec::with_capacity(4);
    if config.lowercase {
        classes.push(LOWERCASE);
    }
    if config.uppercase {
        classes.push(UPPERCASE);
    }
    if config.digits {
        classes.push(DIGITS);
    }
    if config.symbols {
        classes.push(SYMBOLS);
    }
    classes
}

/// Build the effective pool: union of selected classes minus exclusions.
///
/// An empty result is a valid value; the password engine turns it into
/// [`crate::Error::EmptyPool`].
pub fn build(config: &PoolConfig) -> Vec<u8> {
    let mut pool: Vec<u8> = Vec::new();
    for class in selected_classes(config) {
        pool.extend_from_slice(class);
    }

    if config.exclude_ambiguous {
        pool.retain(|c| !AMBIGUOUS.contains(c));
    }
    if !config.exclude_custom.is_empty() {
        pool.retain(|c| !config.exclude_custom.contains(c));
    }

    // Classes are disjoint so this is normally a no-op, but no-repeat
    // sampling depends on the pool holding distinct characters.
    if config.no_repeats {
        let mut seen = [false; 256];
        pool.retain(|&c| {
            let dup = seen[c as usize];
            seen[c as usize] = true;
            !dup
        });
    }

    pool
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classes_are_disjoint() {
        let all = [LOWERCASE, UPPERCASE, DIGITS, SYMBOLS];
        for (i, a) in all.iter().enumerate() {
            for b in &all[i + 1..] {
                assert!(!a.iter().any(|c| b.contains(c)));
            }
        }
    }

    #[test]
    fn full_pool_size() {
        let config = PoolConfig {
            exclude_ambiguous: false,
            ..Default::default()
        };
        let pool = build(&config);
        assert_eq!(pool.len(), 26 + 26 + 10 + SYMBOLS.len());
    }

    #[test]
    fn ambiguous_exclusion_strips_each_member() {
        let pool = build(&PoolConfig::default());
        for c in AMBIGUOUS {
            assert!(!pool.contains(c), "pool retained ambiguous {:?}", *c as char);
        }
        assert_eq!(pool.len(), 26 + 26 + 10 + SYMBOLS.len() - AMBIGUOUS.len());
    }

    #[test]
    fn custom_exclusion_applies_after_classes() {
        let config = PoolConfig {
            exclude_custom: b"abcXYZ".to_vec(),
            ..Default::default()
        };
        let pool = build(&config);
        for c in b"abcXYZ" {
            assert!(!pool.contains(c));
        }
    }

    #[test]
    fn no_class_selected_yields_empty_pool() {
        let config = PoolConfig {
            lowercase: false,
            uppercase: false,
            digits: false,
            symbols: false,
            ..Default::default()
        };
        assert!(build(&config).is_empty());
    }

    #[test]
    fn everything_excluded_yields_empty_pool() {
        let config = PoolConfig {
            lowercase: true,
            uppercase: false,
            digits: false,
            symbols: false,
            exclude_ambiguous: false,
            exclude_custom: LOWERCASE.to_vec(),
            no_repeats: false,
        };
        assert!(build(&config).is_empty());
    }

    #[test]
    fn no_repeats_pool_is_distinct() {
        let config = PoolConfig {
            no_repeats: true,
            ..Default::default()
        };
        let pool = build(&config);
        let mut deduped = pool.clone();
        deduped.sort_unstable();
        deduped.dedup();
        assert_eq!(pool.len(), deduped.len());
    }
}
