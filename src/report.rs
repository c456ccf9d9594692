//! Output of the aggregation result.

use crate::models::{Decimal, Summary};
use std::io::{self, Write};

/// Render the summary as its two output lines.
pub fn render_summary(summary: &Summary) -> String {
    format!("{}\n{}\n", Decimal(summary.minimum), Decimal(summary.mean))
}

/// Write the minimum and then the mean, one per line.
pub fn write_summary<W: Write>(mut out: W, summary: &Summary) -> io::Result<()> {
    out.write_all(render_summary(summary).as_bytes())?;
    out.flush()
}
