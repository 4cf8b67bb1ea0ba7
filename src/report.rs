//! Per-instance result records.
//!
//! One record per solved instance: heuristic time, search time, clique size
//! and the clique itself in 1-based DIMACS vertex ids. Records render as a
//! text table and serialize to JSON.

use crate::error::{CliqueError, Result};
use crate::search::SearchOutcome;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

/// Result row for one instance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportRecord {
    pub instance: String,
    pub heuristic_secs: f64,
    pub search_secs: f64,
    pub clique_size: i64,
    /// Clique members as 1-based DIMACS vertex ids.
    pub clique_vertices: Vec<usize>,
}

impl ReportRecord {
    /// Build a record from a search outcome, translating vertex ids to the
    /// 1-based DIMACS convention.
    pub fn new(instance: impl Into<String>, heuristic_secs: f64, outcome: &SearchOutcome) -> Self {
        Self {
            instance: instance.into(),
            heuristic_secs,
            search_secs: outcome.duration.as_secs_f64(),
            clique_size: outcome.size,
            clique_vertices: outcome.clique.iter().map(|&v| v + 1).collect(),
        }
    }
}

/// Render records as an aligned text table.
pub fn render_table(records: &[ReportRecord]) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "{:<24} {:>14} {:>12} {:>7}  {}\n",
        "Instance", "Heuristic, s", "Search, s", "Clique", "Vertices"
    ));
    for record in records {
        let vertices = record
            .clique_vertices
            .iter()
            .map(|v| v.to_string())
            .collect::<Vec<_>>()
            .join(" ");
        out.push_str(&format!(
            "{:<24} {:>14.3} {:>12.3} {:>7}  {}\n",
            record.instance,
            record.heuristic_secs,
            record.search_secs,
            record.clique_size,
            vertices
        ));
    }
    out
}

/// Write records as pretty-printed JSON.
pub fn write_json<P: AsRef<Path>>(path: P, records: &[ReportRecord]) -> Result<()> {
    let file = File::create(path.as_ref()).map_err(|e| CliqueError::Io {
        path: path.as_ref().display().to_string(),
        message: e.to_string(),
    })?;
    serde_json::to_writer_pretty(BufWriter::new(file), records)
        .map_err(|e| CliqueError::Serialization(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn sample() -> ReportRecord {
        let outcome = SearchOutcome {
            clique: vec![0, 2, 4],
            size: 3,
            nodes: 17,
            timed_out: false,
            duration: Duration::from_millis(1500),
        };
        ReportRecord::new("toy.clq", 0.25, &outcome)
    }

    #[test]
    fn test_vertices_are_one_based() {
        let record = sample();
        assert_eq!(record.clique_vertices, vec![1, 3, 5]);
        assert_eq!(record.clique_size, 3);
    }

    #[test]
    fn test_table_contains_all_columns() {
        let table = render_table(&[sample()]);
        assert!(table.contains("Instance"));
        assert!(table.contains("toy.clq"));
        assert!(table.contains("1 3 5"));
    }

    #[test]
    fn test_json_roundtrip() {
        let record = sample();
        let json = serde_json::to_string(&record).unwrap();
        let restored: ReportRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, record);
    }
}
