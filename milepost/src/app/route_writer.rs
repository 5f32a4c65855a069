use super::MilepostAppError;
use itertools::Itertools;
use log::warn;
use milepost_core::algorithm::search::SearchSummary;
use milepost_core::model::network::Graph;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// writes the route as one line of 1-based vertex ids interleaved with
/// parenthesized arc costs:
///
/// ```text
/// u1 - (w1) - u2 - (w2) - ... - uk
/// ```
///
/// an empty result logs a diagnostic and writes nothing.
pub fn write_route(
    path: &Path,
    graph: &Graph,
    summary: &SearchSummary,
) -> Result<(), MilepostAppError> {
    if !summary.found() {
        warn!("no path found; {} not written", path.display());
        return Ok(());
    }
    let mut out = BufWriter::new(File::create(path)?);
    write!(out, "{}", summary.path[0].external())?;
    for (u, v) in summary.path.iter().tuple_windows() {
        let w = graph.arc_weight(*u, *v).ok_or_else(|| {
            MilepostAppError::BuildFailure(format!("route hop ({}, {}) is not an arc", u, v))
        })?;
        write!(out, " - ({}) - {}", w, v.external())?;
    }
    writeln!(out)?;
    out.flush()?;
    Ok(())
}
