//! Analysis modules.
//!
//! Parsing of individual lines lives in `parse`; reduction of the parsed
//! values into a summary lives in `aggregator`, on top of the exact sum in
//! `summation`.

pub mod aggregator;
pub mod parse;
pub mod summation;

pub use aggregator::*;
