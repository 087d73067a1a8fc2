//! Parsed command-line state.

/// Which generator (or history action) to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Command {
    #[default]
    Password,
    Pin,
    Phrase,
    History,
    ClearHistory,
}

#[derive(Debug, Default)]
pub struct CliFlags {
    pub command: Command,
    pub help: bool,
    pub version: bool,
    pub quiet: bool,
    pub clipboard: bool,
    pub no_history: bool,
    /// How many secrets to generate.
    pub number: Option<usize>,

    // Password options
    pub length: Option<usize>,
    pub preset: Option<String>,
    pub no_lower: bool,
    pub no_upper: bool,
    pub no_digits: bool,
    pub no_symbols: bool,
    pub allow_ambiguous: bool,
    pub exclude: Option<String>,
    pub no_repeat: bool,
    pub letter_first: bool,
    /// Drop the at-least-one-per-class guarantee.
    pub any_class: bool,

    // Passphrase options
    pub words: Option<usize>,
    pub separator: Option<String>,
    pub no_caps: bool,
    pub no_number: bool,
    pub symbol: bool,
}
