//! Hand-rolled argument parsing.

use super::flags::{CliFlags, Command};

/// Upper bound for `-l`; well above the 64 the paranoid preset reaches.
const MAX_LENGTH: usize = 1024;
/// Upper bound for `-w`; the word list wraps, but a phrase this long is a typo.
const MAX_WORDS: usize = 128;
/// Upper bound for `-n`.
const MAX_COUNT: usize = 1_000_000;

#[derive(Debug, PartialEq, Eq)]
pub enum ParseError {
    InvalidNumber(String),
    NumberTooLarge(String, usize),
    MissingValue(String),
    UnknownArg(String),
    UnknownPreset(String),
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ParseError::InvalidNumber(s) => write!(f, "Invalid number: {}", s),
            ParseError::NumberTooLarge(s, max) => {
                write!(f, "Number too large: {} (max {})", s, max)
            }
            ParseError::MissingValue(s) => write!(f, "Missing value for: {}", s),
            ParseError::UnknownArg(s) => write!(f, "Unknown argument: {}", s),
            ParseError::UnknownPreset(s) => {
                write!(f, "Unknown preset: {} (balanced, strong, paranoid)", s)
            }
        }
    }
}

pub fn parse(args: &[String]) -> Result<CliFlags, ParseError> {
    let mut flags = CliFlags::default();
    let mut i = 1;

    // Optional leading subcommand.
    if i < args.len() {
        match args[i].as_str() {
            "password" => {
                flags.command = Command::Password;
                i += 1;
            }
            "pin" => {
                flags.command = Command::Pin;
                i += 1;
            }
            "phrase" | "passphrase" => {
                flags.command = Command::Phrase;
                i += 1;
            }
            "history" => {
                flags.command = Command::History;
                i += 1;
                if i < args.len() && args[i] == "clear" {
                    flags.command = Command::ClearHistory;
                    i += 1;
                }
            }
            _ => {}
        }
    }

    while i < args.len() {
        match args[i].as_str() {
            "-h" | "--help" => flags.help = true,
            "-v" | "--version" => flags.version = true,
            "-q" | "--quiet" => flags.quiet = true,
            "-b" | "--board" => flags.clipboard = true,
            "--no-history" => flags.no_history = true,
            "--no-lower" => flags.no_lower = true,
            "--no-upper" => flags.no_upper = true,
            "--no-digits" => flags.no_digits = true,
            "--no-symbols" => flags.no_symbols = true,
            "--allow-ambiguous" => flags.allow_ambiguous = true,
            "--no-repeat" => flags.no_repeat = true,
            "--letter-first" => flags.letter_first = true,
            "--any-class" => flags.any_class = true,
            "--no-caps" => flags.no_caps = true,
            "--no-number" => flags.no_number = true,
            "--symbol" => flags.symbol = true,
            "-l" | "--length" => flags.length = Some(parse_number(args, &mut i, MAX_LENGTH)?),
            "-n" | "--number" => flags.number = Some(parse_number(args, &mut i, MAX_COUNT)?),
            "-w" | "--words" => flags.words = Some(parse_number(args, &mut i, MAX_WORDS)?),
            "--separator" => flags.separator = Some(take_value(args, &mut i)?),
            "--exclude" => flags.exclude = Some(take_value(args, &mut i)?),
            "--preset" => {
                let value = take_value(args, &mut i)?;
                match value.as_str() {
                    "balanced" | "strong" | "paranoid" => flags.preset = Some(value),
                    _ => return Err(ParseError::UnknownPreset(value)),
                }
            }
            arg => return Err(ParseError::UnknownArg(arg.to_string())),
        }
        i += 1;
    }

    Ok(flags)
}

fn take_value(args: &[String], i: &mut usize) -> Result<String, ParseError> {
    let flag = args[*i].clone();
    *i += 1;
    if *i < args.len() {
        Ok(args[*i].clone())
    } else {
        Err(ParseError::MissingValue(flag))
    }
}

fn parse_number(args: &[String], i: &mut usize, max: usize) -> Result<usize, ParseError> {
    let value = take_value(args, i)?;
    let parsed: usize = value
        .parse()
        .map_err(|_| ParseError::InvalidNumber(value.clone()))?;
    if parsed > max {
        return Err(ParseError::NumberTooLarge(value, max));
    }
    Ok(parsed)
}
