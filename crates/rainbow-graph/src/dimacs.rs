//! Loader for the DIMACS edge-list exchange format.
//!
//! ```text
//! c comment lines start with 'c'
//! p edge 4 4
//! e 1 2
//! e 2 3
//! e 3 4
//! e 4 1
//! ```
//!
//! The problem line declares the vertex and edge counts (its format word is
//! not interpreted). Edge endpoints are 1-indexed. Undirected duplicates
//! such as `e 1 2` followed by `e 2 1` are read once.

use std::path::Path;

use rainbow_core::errors::{ErrorInfo, RcError};
use tracing::{debug, warn};

use crate::graph::{is_adjacent, Graph, MAX_VERTICES};

/// Reads and parses a DIMACS file.
pub fn read_dimacs<P: AsRef<Path>>(path: P) -> Result<Graph, RcError> {
    let path = path.as_ref();
    let text = std::fs::read_to_string(path).map_err(|err| {
        RcError::Parse(
            ErrorInfo::new("io", err.to_string()).with_context("path", path.display()),
        )
    })?;
    parse_dimacs(&text).map_err(|err| match err {
        RcError::Parse(info) => RcError::Parse(info.with_context("path", path.display())),
        other => other,
    })
}

/// Parses DIMACS text into a [`Graph`].
pub fn parse_dimacs(text: &str) -> Result<Graph, RcError> {
    let mut graph: Option<Graph> = None;
    let mut declared_edges = 0usize;

    for (idx, raw) in text.lines().enumerate() {
        let line_no = idx + 1;
        let mut tokens = raw.split_whitespace();
        let Some(tag) = tokens.next() else {
            continue;
        };
        match tag {
            "c" => continue,
            "p" => {
                if graph.is_some() {
                    return Err(parse_error(
                        "duplicate-problem-line",
                        "only one problem line is allowed",
                        line_no,
                    ));
                }
                let _format = tokens.next();
                let (Some(n), Some(m)) = (
                    tokens.next().and_then(|tok| tok.parse::<usize>().ok()),
                    tokens.next().and_then(|tok| tok.parse::<usize>().ok()),
                ) else {
                    return Err(parse_error(
                        "bad-problem-line",
                        "expected `p <format> <vertices> <edges>`",
                        line_no,
                    ));
                };
                if n > MAX_VERTICES {
                    return Err(RcError::Graph(
                        ErrorInfo::new("vertex-capacity", "graphs are limited to 64 vertices")
                            .with_context("requested", n)
                            .with_context("line", line_no),
                    ));
                }
                graph = Some(Graph::new(n)?);
                declared_edges = m;
            }
            "e" => {
                let Some(current) = graph.as_mut() else {
                    return Err(parse_error(
                        "edge-before-problem",
                        "edge line appears before the problem line",
                        line_no,
                    ));
                };
                let (Some(u), Some(v)) = (
                    tokens.next().and_then(|tok| tok.parse::<usize>().ok()),
                    tokens.next().and_then(|tok| tok.parse::<usize>().ok()),
                ) else {
                    return Err(parse_error(
                        "bad-edge-line",
                        "expected `e <u> <v>` with 1-indexed vertices",
                        line_no,
                    ));
                };
                if u == 0 || v == 0 {
                    return Err(parse_error(
                        "bad-edge-line",
                        "DIMACS vertices are numbered from 1",
                        line_no,
                    ));
                }
                let (u, v) = (u - 1, v - 1);
                if is_adjacent(current, u, v) {
                    debug!(line = line_no, u, v, "skipping repeated edge");
                    continue;
                }
                current
                    .add_edge(u, v)
                    .map_err(|err| match err {
                        RcError::Graph(info) => RcError::Graph(info.with_context("line", line_no)),
                        other => other,
                    })?;
            }
            // other line kinds (n, x, ..) carry nothing for us
            _ => continue,
        }
    }

    let graph = graph.ok_or_else(|| {
        RcError::Parse(ErrorInfo::new(
            "missing-problem-line",
            "no `p` line declares the vertex count",
        ))
    })?;
    if graph.num_edges() != declared_edges {
        warn!(
            declared = declared_edges,
            read = graph.num_edges(),
            "edge count differs from problem line"
        );
    }
    Ok(graph)
}

/// Renders a graph in DIMACS form, edges in insertion order.
pub fn to_dimacs(graph: &Graph) -> String {
    let mut out = format!("p edge {} {}\n", graph.num_vertices(), graph.num_edges());
    for (u, v) in graph.normalized_edges() {
        out.push_str(&format!("e {} {}\n", u + 1, v + 1));
    }
    out
}

fn parse_error(code: &str, message: &str, line: usize) -> RcError {
    RcError::Parse(ErrorInfo::new(code, message).with_context("line", line))
}
