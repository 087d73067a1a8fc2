//! Stderr messaging and quiet-mode gating for the CLI.

use std::io::Write;
use std::sync::atomic::{AtomicBool, Ordering};

// ANSI color codes
const RED: &str = "\x1b[31m";
const RESET: &str = "\x1b[0m";

/// Suppresses warnings and informational output when set.
static QUIET: AtomicBool = AtomicBool::new(false);

pub fn set_quiet(quiet: bool) {
    QUIET.store(quiet, Ordering::SeqCst);
}

pub fn quiet() -> bool {
    QUIET.load(Ordering::Relaxed)
}

fn is_interactive() -> bool {
    unsafe { libc::isatty(0) == 1 }
}

/// Skip interactive prompts in quiet mode or when stdin is not a tty.
fn skip_prompt() -> bool {
    quiet() || !is_interactive()
}

/// Error to stderr (red), never suppressed.
pub fn error(msg: &str) {
    eprintln!("{RED}{msg}{RESET}");
}

/// Strength summary after a password, suppressed in quiet mode.
pub fn strength(bits: u32, label: &str) {
    if !quiet() {
        eprintln!("Strength: {bits} bits ({label})");
    }
}

/// Clipboard confirmation, suppressed in quiet mode.
pub fn clipboard_copied() {
    if !quiet() {
        eprintln!("Copied to clipboard.");
    }
}

/// Prompt when the clipboard is unavailable. Returns true to fall back to
/// terminal output, false to abort. Non-interactive runs fall back silently.
pub fn clipboard_fallback_prompt() -> bool {
    if skip_prompt() {
        return true;
    }

    eprint!("Clipboard unavailable. Print to terminal instead? [Y/n]: ");
    let _ = std::io::stderr().flush();

    let mut input = String::new();
    if std::io::stdin().read_line(&mut input).is_ok() {
        let input = input.trim().to_lowercase();
        if input.is_empty() || input == "y" || input == "yes" {
            return true;
        }
    } else {
        return true;
    }

    eprintln!("Aborted.");
    false
}

/// History-cleared confirmation, suppressed in quiet mode.
pub fn history_cleared() {
    if !quiet() {
        eprintln!("History cleared.");
    }
}
