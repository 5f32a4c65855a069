use super::MilepostAppError;
use milepost_core::algorithm::search::{SearchAlgorithm, SearchSummary};
use serde::Serialize;
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

/// one JSON record per executed algorithm, for downstream benchmark
/// tooling.
#[derive(Serialize)]
struct RunRecord {
    timestamp: String,
    algorithm: String,
    source: u64,
    target: u64,
    /// absent when no path exists
    cost: Option<u64>,
    expansions: u64,
    elapsed_ms: u64,
    expansions_per_sec: f64,
    path_vertices: usize,
}

pub fn write_summary(
    path: &Path,
    source: u64,
    target: u64,
    results: &[(SearchAlgorithm, SearchSummary)],
) -> Result<(), MilepostAppError> {
    let timestamp = chrono::Local::now().to_rfc3339();
    let records: Vec<RunRecord> = results
        .iter()
        .map(|(algorithm, summary)| RunRecord {
            timestamp: timestamp.clone(),
            algorithm: algorithm.to_string(),
            source,
            target,
            cost: summary.cost.reached(),
            expansions: summary.expansions,
            elapsed_ms: summary.elapsed_ms,
            expansions_per_sec: summary.throughput(),
            path_vertices: summary.path.len(),
        })
        .collect();
    let out = BufWriter::new(File::create(path)?);
    serde_json::to_writer_pretty(out, &records)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use milepost_core::model::network::VertexId;
    use milepost_core::model::unit::Cost;

    #[test]
    fn test_summary_records() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("summary.json");
        let results = vec![
            (
                SearchAlgorithm::AStar,
                SearchSummary {
                    path: vec![VertexId(0), VertexId(1)],
                    cost: Cost::new(42),
                    expansions: 2,
                    elapsed_ms: 1,
                },
            ),
            (
                SearchAlgorithm::Dijkstra,
                SearchSummary {
                    path: vec![],
                    cost: Cost::INFINITY,
                    expansions: 9,
                    elapsed_ms: 1,
                },
            ),
        ];
        write_summary(&out, 1, 2, &results).unwrap();

        let parsed: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(&out).unwrap()).unwrap();
        let records = parsed.as_array().unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0]["algorithm"], "astar");
        assert_eq!(records[0]["cost"], 42);
        assert_eq!(records[0]["path_vertices"], 2);
        assert_eq!(records[1]["algorithm"], "dijkstra");
        assert!(records[1]["cost"].is_null());
        assert_eq!(records[1]["expansions"], 9);
    }
}
