use crate::Cost;
use std::io;
use thiserror::Error;

/// Errors that can occur while loading a Campus Map
#[derive(Error, Debug)]
pub enum LoadError {
    /// The source could not be read
    #[error("failed to read the campus map: {0}")]
    Io(#[from] io::Error),
    /// A line describing a Segment is malformed
    #[error("line {line}: {reason}")]
    Parse {
        /// the 1-based line number
        line: usize,
        /// what is wrong with the line
        reason: String,
    },
    /// A Segment was well-formed, but the Graph rejected it
    #[error("line {line}: {source}")]
    Graph {
        /// the 1-based line number
        line: usize,
        /// the rejection
        source: crate::Error,
    },
}

/// One directed connection between two Locations, as described by a line of the Map.
#[derive(Clone, Debug, PartialEq)]
pub struct Segment {
    /// the Location the Segment starts at
    pub from: String,
    /// the Location the Segment leads to
    pub to: String,
    /// the travel time in seconds
    pub seconds: Cost,
}

const ARROW: &str = "->";
const SECONDS: &str = "seconds=";

/// Parses one line of a Campus Map in DOT notation.
///
/// Only lines containing `->` describe Segments. They have the form
/// `"Source" -> "Destination" [seconds=123.4];`, with any further attributes ignored.
/// All other lines (the `digraph` header, braces, Node declarations, comments, ...) return
/// `Ok(None)`.
///
/// ## Examples
/// ```
/// use campus_pathfinding::campus::{parse_edge_line, Segment};
///
/// let segment = parse_edge_line(r#"  "Memorial Union" -> "Science Hall" [seconds=112.5];"#, 1);
/// assert_eq!(
///     segment.unwrap(),
///     Some(Segment {
///         from: "Memorial Union".to_string(),
///         to: "Science Hall".to_string(),
///         seconds: 112.5,
///     })
/// );
///
/// assert!(parse_edge_line("digraph Campus {", 1).unwrap().is_none());
/// assert!(parse_edge_line(r#""A" -> "B" [seconds=fast];"#, 7).is_err());
/// ```
pub fn parse_edge_line(line: &str, line_number: usize) -> Result<Option<Segment>, LoadError> {
    let trimmed = line.trim_start();
    if !line.contains(ARROW) || trimmed.starts_with("//") || trimmed.starts_with('#') {
        return Ok(None);
    }
    let error = |reason: &str| LoadError::Parse {
        line: line_number,
        reason: reason.to_string(),
    };

    // "A" -> "B" [..] splits into ["", A, " -> ", B, " [..]"]
    let mut parts = line.splitn(5, '"');
    let (from, arrow, to, rest) = match (
        parts.next(),
        parts.next(),
        parts.next(),
        parts.next(),
        parts.next(),
    ) {
        (Some(_), Some(from), Some(arrow), Some(to), Some(rest)) => (from, arrow, to, rest),
        _ => return Err(error("expected two quoted Locations")),
    };
    if !arrow.contains(ARROW) {
        return Err(error("expected `->` between the Locations"));
    }

    let value = rest
        .find(SECONDS)
        .map(|start| &rest[start + SECONDS.len()..])
        .ok_or_else(|| error("missing `seconds` attribute"))?;
    let end = value
        .find(|c: char| c == ']' || c == ',' || c == ';' || c.is_whitespace())
        .unwrap_or(value.len());
    let seconds: Cost = value[..end]
        .trim_matches('"')
        .parse()
        .map_err(|_| error(&format!("invalid travel time `{}`", &value[..end])))?;

    Ok(Some(Segment {
        from: from.to_string(),
        to: to.to_string(),
        seconds,
    }))
}
