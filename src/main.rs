use std::{fs, process::ExitCode};

use ceval::run;
use clap::Parser;
use tracing::warn;
use tracing_subscriber::EnvFilter;

/// ceval evaluates a small C-like language of integer expressions and
/// statements and prints the resulting value.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Tells ceval to read the program from a file instead of the argument.
    #[arg(short, long)]
    file: bool,

    /// Do not print the result; only the exit status reports success.
    #[arg(short, long)]
    quiet: bool,

    /// Compare the result with this value, printing `code => value` on a
    /// match and exiting with status 1 on a mismatch.
    #[arg(short, long, allow_negative_numbers = true)]
    expect: Option<i64>,

    /// The program, or the path of a file holding it with `--file`.
    #[arg(allow_hyphen_values = true)]
    contents: String,
}

fn main() -> ExitCode {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt().with_env_filter(filter)
                             .with_writer(std::io::stderr)
                             .with_target(false)
                             .init();

    let args = Args::parse();

    let source = if args.file {
        match fs::read_to_string(&args.contents) {
            Ok(source) => source,
            Err(e) => {
                eprintln!("Failed to read the input file '{}'. Perhaps this file does not exist? ({e})",
                          &args.contents);
                return ExitCode::FAILURE;
            },
        }
    } else {
        args.contents
    };

    let value = match run(&source) {
        Ok(value) => value,
        Err(e) => {
            eprintln!("{e}");
            return ExitCode::FAILURE;
        },
    };

    match args.expect {
        Some(expected) => match check_expectation(&source, expected, value) {
            Ok(line) => {
                if !args.quiet {
                    println!("{line}");
                }
                ExitCode::SUCCESS
            },
            Err(line) => {
                warn!(expected, actual = value, "result mismatch");
                println!("{line}");
                ExitCode::FAILURE
            },
        },
        None => {
            if !args.quiet {
                println!("{value}");
            }
            ExitCode::SUCCESS
        },
    }
}

/// Compares a program's result with the value passed to `--expect`.
///
/// Returns `Ok` with `program => value` on a match and `Err` with
/// `program => expected expected but got actual` otherwise.
fn check_expectation(program: &str, expected: i64, actual: i64) -> Result<String, String> {
    let program = program.trim();
    if expected == actual {
        Ok(format!("{program} => {actual}"))
    } else {
        Err(format!("{program} => {expected} expected but got {actual}"))
    }
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::{Args, check_expectation};

    #[test]
    fn matching_result_reports_the_value() {
        assert_eq!(check_expectation("5 + 6 * 7", 47, 47),
                   Ok("5 + 6 * 7 => 47".to_string()));
        assert_eq!(check_expectation("  int a; a=3; a;\n", 3, 3),
                   Ok("int a; a=3; a; => 3".to_string()));
    }

    #[test]
    fn mismatch_reports_both_values() {
        assert_eq!(check_expectation("(3 + 5) / 2", 5, 4),
                   Err("(3 + 5) / 2 => 5 expected but got 4".to_string()));
    }

    #[test]
    fn negative_values() {
        assert_eq!(check_expectation("-10 + 5", -5, -5),
                   Ok("-10 + 5 => -5".to_string()));
        assert_eq!(check_expectation("-3", -3, 3),
                   Err("-3 => -3 expected but got 3".to_string()));
    }

    #[test]
    fn negative_expectation_and_program_parse() {
        let args = Args::try_parse_from(["ceval", "-e", "-5", "-10 + 5"]).unwrap();
        assert_eq!(args.expect, Some(-5));
        assert_eq!(args.contents, "-10 + 5");
        assert!(!args.file);
    }
}
