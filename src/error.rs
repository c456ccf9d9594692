//! Error types for reading and aggregating numeric input.

use thiserror::Error;

/// Why a single piece of text is not an acceptable number.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValueError {
    /// The text does not match the numeric grammar.
    #[error("not a decimal number")]
    Malformed,
    /// The text is well-formed but its magnitude does not fit in an `f64`.
    #[error("number is out of range")]
    OutOfRange,
}

/// Fatal errors raised while aggregating an input stream.
#[derive(Debug, Error)]
pub enum AggregateError {
    /// A line could not be interpreted as a real number.
    #[error("line {line}: could not convert {content:?} to a number")]
    Parse {
        /// 1-indexed line number.
        line: usize,
        /// Line content with surrounding whitespace stripped.
        content: String,
        #[source]
        source: ValueError,
    },

    /// The stream contained no lines at all.
    #[error("no input: at least one number is required")]
    EmptyInput,

    /// Reading the stream failed (including invalid UTF-8).
    #[error("failed to read input")]
    Io(#[from] std::io::Error),
}
