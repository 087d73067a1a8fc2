//! Command-line interface.

mod context;
mod flags;
mod parse;
pub mod prompts;

pub use context::Context;
pub use parse::parse;

/// Run the CLI with the given arguments.
pub fn run(args: Vec<String>) {
    let mut context = match Context::new(&args) {
        Ok(context) => context,
        Err(msg) => {
            prompts::error(&msg);
            eprintln!("Try 'passforge --help'.");
            std::process::exit(2);
        }
    };
    let _ = context.run();
}

pub fn print_help() {
    println!(
        "\
passforge {version} - local-only secret generator

USAGE:
    passforge [password] [OPTIONS]     generate a password (default)
    passforge pin [OPTIONS]            generate a numeric PIN
    passforge phrase [OPTIONS]         generate a passphrase
    passforge history                  list generated secrets
    passforge history clear            forget all history

PASSWORD OPTIONS:
    -l, --length <N>       characters to generate (default 16)
        --preset <NAME>    balanced | strong | paranoid
        --no-lower         drop a-z
        --no-upper         drop A-Z
        --no-digits        drop 0-9
        --no-symbols       drop punctuation
        --allow-ambiguous  keep O 0 l I |
        --exclude <CHARS>  drop specific characters
        --no-repeat        never repeat a character
        --letter-first     start with a letter when possible
        --any-class        drop the one-per-class guarantee

PIN OPTIONS:
    -l, --length <N>       digits to generate (default 4)

PHRASE OPTIONS:
    -w, --words <N>        words to use (default 4)
        --separator <S>    joiner between words (default -)
        --no-caps          keep words lowercase
        --no-number        no trailing digit
        --symbol           append a random symbol

GENERAL:
    -n, --number <N>       how many secrets to generate
    -b, --board            copy to clipboard instead of stdout
        --no-history       do not record this generation
    -q, --quiet            suppress warnings and extra output
    -h, --help             show this help
    -v, --version          show version",
        version = env!("CARGO_PKG_VERSION")
    );
}
