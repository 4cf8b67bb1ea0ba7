//! DIMACS `.clq`/`.col` instance reader.
//!
//! The format: lines starting with `c` are comments, a single
//! `p edge <|V|> <|E|>` line declares the instance, and `e <u> <v>` lines
//! declare undirected edges with 1-based vertex ids. Duplicate edge lines are
//! tolerated, but the total number of `e` lines must match the declared edge
//! count.

use crate::error::{CliqueError, Result};
use crate::topology::SimpleGraph;
use std::path::Path;

/// Parse a DIMACS instance from a string.
///
/// # Example
///
/// ```
/// use cliquer::io::parse_dimacs;
/// use cliquer::topology::Graph;
///
/// let graph = parse_dimacs("c a triangle\np edge 3 3\ne 1 2\ne 2 3\ne 1 3\n").unwrap();
/// assert_eq!(graph.num_vertices(), 3);
/// assert_eq!(graph.num_edges(), 3);
/// ```
pub fn parse_dimacs(input: &str) -> Result<SimpleGraph> {
    let mut declared: Option<(usize, usize)> = None;
    let mut edges: Vec<(usize, usize)> = Vec::new();
    let mut edge_lines = 0usize;

    for (index, raw) in input.lines().enumerate() {
        let lineno = index + 1;
        let line = raw.trim();
        if line.is_empty() || line.starts_with('c') {
            continue;
        }
        let mut tokens = line.split_whitespace();
        match tokens.next() {
            Some("p") => {
                // `p edge <n> <m>`; the format token is not interpreted.
                let parsed = (|| {
                    tokens.next()?;
                    let n = tokens.next()?.parse::<usize>().ok()?;
                    let m = tokens.next()?.parse::<usize>().ok()?;
                    Some((n, m))
                })();
                match parsed {
                    Some(header) => declared = Some(header),
                    None => {
                        return Err(CliqueError::Parse {
                            line: lineno,
                            content: raw.to_string(),
                        })
                    }
                }
            }
            Some("e") => {
                let (num_vertices, _) = declared.ok_or(CliqueError::MissingProblemLine)?;
                let parsed = (|| {
                    let u = tokens.next()?.parse::<usize>().ok()?;
                    let v = tokens.next()?.parse::<usize>().ok()?;
                    Some((u, v))
                })();
                let (u, v) = parsed.ok_or_else(|| CliqueError::Parse {
                    line: lineno,
                    content: raw.to_string(),
                })?;
                if u < 1 || v < 1 || u > num_vertices || v > num_vertices || u == v {
                    return Err(CliqueError::InvalidEdge {
                        line: lineno,
                        u,
                        v,
                        num_vertices,
                    });
                }
                edge_lines += 1;
                edges.push((u - 1, v - 1));
            }
            _ => {
                return Err(CliqueError::Parse {
                    line: lineno,
                    content: raw.to_string(),
                })
            }
        }
    }

    let (num_vertices, num_edges) = declared.ok_or(CliqueError::MissingProblemLine)?;
    if edge_lines != num_edges {
        return Err(CliqueError::EdgeCountMismatch {
            declared: num_edges,
            found: edge_lines,
        });
    }
    Ok(SimpleGraph::new(num_vertices, edges))
}

/// Read a DIMACS instance from a file.
pub fn read_dimacs<P: AsRef<Path>>(path: P) -> Result<SimpleGraph> {
    let contents = std::fs::read_to_string(path.as_ref()).map_err(|e| CliqueError::Io {
        path: path.as_ref().display().to_string(),
        message: e.to_string(),
    })?;
    parse_dimacs(&contents)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::topology::Graph;

    #[test]
    fn test_parse_triangle() {
        let graph = parse_dimacs("p edge 3 3\ne 1 2\ne 2 3\ne 1 3\n").unwrap();
        assert_eq!(graph.num_vertices(), 3);
        assert_eq!(graph.num_edges(), 3);
        assert!(graph.has_edge(0, 2));
    }

    #[test]
    fn test_comments_and_blank_lines_ignored() {
        let input = "c DIMACS sample\nc second comment\n\np edge 2 1\ne 1 2\n";
        let graph = parse_dimacs(input).unwrap();
        assert_eq!(graph.num_vertices(), 2);
        assert_eq!(graph.num_edges(), 1);
    }

    #[test]
    fn test_arbitrary_whitespace() {
        let graph = parse_dimacs("p   edge\t 3   2\ne  1\t2\ne 2   3\n").unwrap();
        assert_eq!(graph.num_edges(), 2);
    }

    #[test]
    fn test_duplicate_edges_counted_but_collapsed() {
        // three `e` lines, two distinct edges; header must count lines
        let graph = parse_dimacs("p edge 3 3\ne 1 2\ne 2 1\ne 2 3\n").unwrap();
        assert_eq!(graph.num_edges(), 2);
    }

    #[test]
    fn test_edge_count_mismatch_is_fatal() {
        let err = parse_dimacs("p edge 3 3\ne 1 2\n").unwrap_err();
        assert_eq!(
            err,
            CliqueError::EdgeCountMismatch {
                declared: 3,
                found: 1
            }
        );
    }

    #[test]
    fn test_missing_problem_line() {
        assert_eq!(
            parse_dimacs("e 1 2\n").unwrap_err(),
            CliqueError::MissingProblemLine
        );
        assert_eq!(
            parse_dimacs("c only comments\n").unwrap_err(),
            CliqueError::MissingProblemLine
        );
    }

    #[test]
    fn test_invalid_edges() {
        let err = parse_dimacs("p edge 3 1\ne 1 4\n").unwrap_err();
        assert!(matches!(err, CliqueError::InvalidEdge { u: 1, v: 4, .. }));

        let err = parse_dimacs("p edge 3 1\ne 2 2\n").unwrap_err();
        assert!(matches!(err, CliqueError::InvalidEdge { u: 2, v: 2, .. }));
    }

    #[test]
    fn test_unparseable_line() {
        let err = parse_dimacs("p edge 2 1\nq 1 2\n").unwrap_err();
        assert!(matches!(err, CliqueError::Parse { line: 2, .. }));

        let err = parse_dimacs("p edge two 1\n").unwrap_err();
        assert!(matches!(err, CliqueError::Parse { line: 1, .. }));
    }
}
