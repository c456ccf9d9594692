//! minmean - minimum and mean of numbers on standard input
//!
//! Reads one number per line from stdin and prints two lines to stdout:
//! the minimum, then the arithmetic mean, each rounded to two decimals.
//!
//! Exit codes:
//!   0 - Success
//!   1 - Malformed line, empty input, or I/O failure (nothing is printed)

mod analysis;
mod cli;
mod error;
mod models;
mod report;

use anyhow::{Context, Result};
use cli::Args;
use std::io::{self, BufRead, Write};
use tracing::{debug, error, info};
use tracing_subscriber::FmtSubscriber;

fn main() {
    let args = Args::parse_args();

    if let Err(e) = args.validate() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }

    init_logging(&args);

    info!("minmean v{}", env!("CARGO_PKG_VERSION"));
    debug!("Arguments: {:?}", args);

    let stdin = io::stdin();
    let stdout = io::stdout();

    if let Err(e) = run_cli(stdin.lock(), stdout.lock()) {
        error!("Aggregation failed: {:#}", e);
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

/// Initialize logging based on verbosity settings.
///
/// Logs go to stderr; stdout carries only the result.
fn init_logging(args: &Args) {
    let subscriber = FmtSubscriber::builder()
        .with_max_level(args.log_level())
        .with_writer(io::stderr)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .compact()
        .finish();

    if let Err(e) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("Warning: failed to set tracing subscriber: {}", e);
    }
}

/// Aggregate `input` and write the summary to `output`.
///
/// The whole input is consumed before anything is written, so a failure
/// leaves `output` untouched.
fn run_cli<R: BufRead, W: Write>(input: R, output: W) -> Result<()> {
    let summary = analysis::run(input).context("Failed to aggregate input")?;
    debug!("Summary: {:?}", summary);

    report::write_summary(output, &summary).context("Failed to write result")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn run_to_string(input: &str) -> (Result<()>, String) {
        let mut out = Vec::new();
        let result = run_cli(Cursor::new(input), &mut out);
        (result, String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_three_values() {
        let (result, out) = run_to_string("1.0\n2.0\n3.0\n");
        assert!(result.is_ok());
        assert_eq!(out, "1.0\n2.0\n");
    }

    #[test]
    fn test_rounding() {
        let (result, out) = run_to_string("3.333\n3.334\n");
        assert!(result.is_ok());
        assert_eq!(out, "3.33\n3.33\n");
    }

    #[test]
    fn test_single_value() {
        let (result, out) = run_to_string("5");
        assert!(result.is_ok());
        assert_eq!(out, "5.0\n5.0\n");
    }

    #[test]
    fn test_non_integral_mean() {
        let (result, out) = run_to_string("1\n2\n");
        assert!(result.is_ok());
        assert_eq!(out, "1.0\n1.5\n");
    }

    #[test]
    fn test_empty_input_prints_nothing() {
        let (result, out) = run_to_string("");
        let err = result.unwrap_err();
        assert!(format!("{:#}", err).contains("no input"));
        assert!(out.is_empty());
    }

    #[test]
    fn test_bad_line_prints_nothing() {
        let (result, out) = run_to_string("1.0\n2.0\nabc\n4.0\n");
        let err = result.unwrap_err();
        let msg = format!("{:#}", err);
        assert!(msg.contains("line 3"));
        assert!(msg.contains("abc"));
        assert!(out.is_empty());
    }

    #[test]
    fn test_idempotent() {
        let input = "0.1\n0.2\n0.3\n-7.125\n";
        assert_eq!(run_to_string(input).1, run_to_string(input).1);
    }

    #[test]
    fn test_permutation() {
        let (_, forward) = run_to_string("9.75\n-1.5\n3.25\n");
        let (_, shuffled) = run_to_string("3.25\n9.75\n-1.5\n");
        assert_eq!(forward, shuffled);
        assert_eq!(forward, "-1.5\n3.83\n");
    }

    #[test]
    fn test_permutation_with_cancelling_values() {
        let (_, first) = run_to_string("1e16\n-1e16\n1\n");
        let (_, second) = run_to_string("1e16\n1\n-1e16\n");
        assert_eq!(first, "-1e+16\n0.33\n");
        assert_eq!(second, first);
    }

    #[test]
    fn test_mean_near_float_limit() {
        let (result, out) = run_to_string("1.7e308\n1.7e308\n");
        assert!(result.is_ok());
        assert_eq!(out, "1.7e+308\n1.7e+308\n");
    }
}
