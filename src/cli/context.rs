//! CLI context: wires flags, engines, history, and clipboard together.

use copypasta::{ClipboardContext, ClipboardProvider};
use time::OffsetDateTime;
use zeroize::Zeroize;

use passforge::engines::{
    self, PassphraseConfig, PasswordConfig, SecretKind, strength_label,
};
use passforge::history::{FileBackend, HistoryStore};
use passforge::rand::SystemSource;

use super::flags::{CliFlags, Command};
use super::{print_help, prompts};

/// Early exit - not an error, just done.
pub struct Done;

pub struct Context {
    flags: CliFlags,
    history: HistoryStore,
    clipboard: Option<ClipboardContext>,
}

impl Context {
    /// Parse arguments and load history. Returns the parse error message on
    /// failure.
    pub fn new(args: &[String]) -> Result<Self, String> {
        let flags = super::parse(args).map_err(|e| e.to_string())?;
        let history = HistoryStore::open(Box::new(FileBackend::default()));
        Ok(Self {
            flags,
            history,
            clipboard: None,
        })
    }

    /// Run the CLI. Returns `Err(Done)` for early exits.
    pub fn run(&mut self) -> Result<(), Done> {
        self.handle_info_flags()?;
        prompts::set_quiet(self.flags.quiet);
        self.handle_history()?;
        self.setup_clipboard();
        self.generate_output();
        Ok(())
    }

    fn handle_info_flags(&self) -> Result<(), Done> {
        if self.flags.help {
            print_help();
            return Err(Done);
        }
        if self.flags.version {
            println!("passforge {}", env!("CARGO_PKG_VERSION"));
            return Err(Done);
        }
        Ok(())
    }

    fn handle_history(&mut self) -> Result<(), Done> {
        match self.flags.command {
            Command::History => {
                if self.history.is_empty() {
                    println!("(no history)");
                } else {
                    let now = OffsetDateTime::now_utc();
                    for entry in self.history.entries() {
                        println!(
                            "{:<10} {:>16}  {}",
                            entry.kind.to_string(),
                            entry.time_ago(now),
                            entry.value
                        );
                    }
                }
                Err(Done)
            }
            Command::ClearHistory => {
                self.history.clear();
                prompts::history_cleared();
                Err(Done)
            }
            _ => Ok(()),
        }
    }

    fn setup_clipboard(&mut self) {
        if !self.flags.clipboard {
            return;
        }
        match ClipboardContext::new() {
            Ok(ctx) => self.clipboard = Some(ctx),
            Err(_) => {
                if !prompts::clipboard_fallback_prompt() {
                    std::process::exit(0);
                }
            }
        }
    }

    fn password_config(&self) -> PasswordConfig {
        let mut config = match self.flags.preset.as_deref() {
            Some("balanced") => PasswordConfig::balanced(),
            Some("strong") => PasswordConfig::strong(),
            Some("paranoid") => PasswordConfig::paranoid(),
            _ => PasswordConfig::default(),
        };
        if let Some(length) = self.flags.length {
            config.length = length;
        }
        if self.flags.no_lower {
            config.pool.lowercase = false;
        }
        if self.flags.no_upper {
            config.pool.uppercase = false;
        }
        if self.flags.no_digits {
            config.pool.digits = false;
        }
        if self.flags.no_symbols {
            config.pool.symbols = false;
        }
        if self.flags.allow_ambiguous {
            config.pool.exclude_ambiguous = false;
        }
        if let Some(ref exclude) = self.flags.exclude {
            config.pool.exclude_custom = exclude.bytes().collect();
        }
        if self.flags.no_repeat {
            config.pool.no_repeats = true;
        }
        if self.flags.letter_first {
            config.starts_with_letter = true;
        }
        if self.flags.any_class {
            config.must_include_each_class = false;
        }
        config
    }

    fn passphrase_config(&self) -> PassphraseConfig {
        let mut config = PassphraseConfig::default();
        if let Some(words) = self.flags.words {
            config.word_count = words;
        }
        if let Some(ref separator) = self.flags.separator {
            config.separator = separator.clone();
        }
        if self.flags.no_caps {
            config.capitalize = false;
        }
        if self.flags.no_number {
            config.append_number = false;
        }
        if self.flags.symbol {
            config.append_symbol = true;
        }
        config
    }

    fn generate_output(&mut self) {
        let count = self.flags.number.unwrap_or(1).max(1);
        let mut rng = SystemSource;
        let mut for_clipboard = String::new();

        for _ in 0..count {
            let secret = match self.flags.command {
                Command::Password => {
                    let config = self.password_config();
                    if config.length == 0 {
                        prompts::error("Length must be at least 1");
                        std::process::exit(1);
                    }
                    match engines::password::generate(&mut rng, &config) {
                        Ok(secret) => secret,
                        Err(e) => {
                            prompts::error(&e.to_string());
                            std::process::exit(1);
                        }
                    }
                }
                Command::Pin => {
                    let length = self.flags.length.unwrap_or(4);
                    if length == 0 {
                        prompts::error("PIN length must be at least 1");
                        std::process::exit(1);
                    }
                    engines::pin::generate(&mut rng, length)
                }
                Command::Phrase => engines::passphrase::generate(&mut rng, &self.passphrase_config()),
                Command::History | Command::ClearHistory => unreachable!("handled earlier"),
            };

            if self.clipboard.is_some() {
                for_clipboard.push_str(&secret.value);
                for_clipboard.push('\n');
            } else {
                println!("{}", secret.value);
            }

            if secret.kind == SecretKind::Password
                && let Some(bits) = secret.entropy_bits
            {
                prompts::strength(bits, strength_label(bits));
            }

            if !self.flags.no_history {
                self.history.record(&secret);
            }
        }

        if let Some(ref mut ctx) = self.clipboard {
            match ctx.set_contents(for_clipboard.clone()) {
                Ok(_) => {
                    // Force the clipboard to materialize, then wipe the copy.
                    if let Ok(mut retrieved) = ctx.get_contents() {
                        retrieved.zeroize();
                    }
                    prompts::clipboard_copied();
                }
                Err(e) => {
                    prompts::error(&format!("Clipboard error: {e}"));
                }
            }
            for_clipboard.zeroize();
        }
    }
}
