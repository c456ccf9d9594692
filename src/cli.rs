//! Command-line interface argument parsing.
//!
//! The computation takes no options; the parser only provides `--help`,
//! `--version` and log verbosity.

use clap::Parser;

/// minmean - minimum and mean of numbers read from standard input
///
/// Reads one number per line from stdin and prints the minimum and the
/// arithmetic mean, each rounded to two decimal places.
///
/// Examples:
///   printf '1.0\n2.0\n3.0\n' | minmean
///   minmean < values.txt
#[derive(Parser, Debug, Clone, Default)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Enable verbose logging output (stderr)
    #[arg(short, long)]
    pub verbose: bool,

    /// Only log errors
    #[arg(short, long)]
    pub quiet: bool,
}

impl Args {
    /// Parse command-line arguments.
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Validate the parsed arguments.
    pub fn validate(&self) -> Result<(), String> {
        if self.verbose && self.quiet {
            return Err("Cannot use both --verbose and --quiet".to_string());
        }

        Ok(())
    }

    /// Returns the log level based on verbosity settings.
    pub fn log_level(&self) -> tracing::Level {
        if self.quiet {
            tracing::Level::ERROR
        } else if self.verbose {
            tracing::Level::DEBUG
        } else {
            tracing::Level::WARN
        }
    }
}
