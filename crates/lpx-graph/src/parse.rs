//! Edge-record parsing.
//!
//! Input is line-oriented text: `<source>, <destination>, <weight>` with
//! integer endpoints and a real-valued weight. Blank lines are ignored in
//! both modes. In [`ParseMode::Lenient`] (the default) a line that does not
//! parse as exactly three valid fields is dropped and traced at debug level;
//! in [`ParseMode::Strict`] the first such line aborts parsing with its
//! 1-based line number.

use tracing::debug;

use crate::edge::Edge;
use crate::error::{GraphError, GraphResult};

/// How malformed records are treated.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ParseMode {
    /// Drop malformed records and keep going. Compatibility behavior.
    #[default]
    Lenient,
    /// Fail on the first malformed record.
    Strict,
}

/// Parse a single record into an edge.
///
/// Requires exactly three comma-separated fields. Each field is trimmed of
/// surrounding whitespace. Weights that parse but are NaN or infinite are
/// rejected so downstream ordering comparisons stay total.
fn parse_record(line: &str) -> Option<Edge> {
    let mut fields = line.split(',');
    let from = fields.next()?.trim().parse::<i64>().ok()?;
    let to = fields.next()?.trim().parse::<i64>().ok()?;
    let weight = fields.next()?.trim().parse::<f64>().ok()?;
    if fields.next().is_some() || !weight.is_finite() {
        return None;
    }
    Some(Edge::new(from, to, weight))
}

/// Parse edge-list text into a sequence of edges.
///
/// Duplicate records are preserved as distinct edges. In lenient mode this
/// never fails; in strict mode it returns [`GraphError::MalformedRecord`]
/// for the first bad line.
pub fn parse_edges(input: &str, mode: ParseMode) -> GraphResult<Vec<Edge>> {
    let mut edges = Vec::new();
    for (index, raw) in input.lines().enumerate() {
        let line = raw.trim();
        if line.is_empty() {
            continue;
        }
        match parse_record(line) {
            Some(edge) => edges.push(edge),
            None => match mode {
                ParseMode::Lenient => {
                    debug!(line = index + 1, content = %line, "skipping malformed edge record");
                }
                ParseMode::Strict => {
                    return Err(GraphError::MalformedRecord {
                        line: index + 1,
                        content: line.to_string(),
                    });
                }
            },
        }
    }
    debug!(edges = edges.len(), "edge list parsed");
    Ok(edges)
}
