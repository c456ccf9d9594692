//! Minimum/mean aggregation over a line-oriented numeric stream.
//!
//! Reading is split from reduction: every line is parsed into the value list
//! first, and only a fully read, non-empty list is reduced.

use crate::analysis::parse::parse_value;
use crate::analysis::summation::exact_sum;
use crate::error::AggregateError;
use crate::models::Summary;
use std::io::BufRead;
use tracing::debug;

/// Read every line of `reader` and parse it as a number.
///
/// Stops at the first line that is not a number.
pub fn collect_values<R: BufRead>(reader: R) -> Result<Vec<f64>, AggregateError> {
    let mut values = Vec::new();

    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        let value = parse_value(&line).map_err(|source| AggregateError::Parse {
            line: index + 1,
            content: line.trim().to_string(),
            source,
        })?;
        values.push(value);
    }

    debug!("Read {} values", values.len());
    Ok(values)
}

/// Smallest value, or `None` for an empty slice.
pub fn minimum(values: &[f64]) -> Option<f64> {
    values.iter().copied().reduce(f64::min)
}

/// Arithmetic mean, or `None` for an empty slice.
///
/// The sum is exact and correctly rounded, so the result does not depend on
/// the order of `values`. When `n * max|v|` could exceed `f64::MAX`, each
/// value is divided by `n` before summing so the total stays in range.
pub fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    let count = values.len() as f64;
    let largest = values.iter().fold(0.0_f64, |acc, v| acc.max(v.abs()));

    if largest <= f64::MAX / count {
        Some(exact_sum(values.iter().copied()) / count)
    } else {
        debug!("Sum may overflow, averaging scaled values");
        Some(exact_sum(values.iter().map(|v| v / count)))
    }
}

/// Reduce a fully read value list into its rounded summary.
pub fn summarize(values: &[f64]) -> Result<Summary, AggregateError> {
    let (Some(min), Some(avg)) = (minimum(values), mean(values)) else {
        return Err(AggregateError::EmptyInput);
    };

    debug!("Raw minimum {}, raw mean {}", min, avg);
    Ok(Summary::from_raw(min, avg))
}

/// Read, parse and reduce a whole stream.
pub fn run<R: BufRead>(reader: R) -> Result<Summary, AggregateError> {
    let values = collect_values(reader)?;
    summarize(&values)
}
