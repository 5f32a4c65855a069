use super::{AppConfig, MilepostAppError};
use log::{info, warn};
use milepost_core::algorithm::search::{SearchAlgorithm, SearchEngine, SearchSummary};
use milepost_core::model::network::{Graph, GraphConfig, VertexId};
use milepost_core::util::geo::haversine;

/// one loaded road network plus the configuration needed to query it.
/// the graph is parsed once at construction; queries borrow it through
/// a fresh [`SearchEngine`] per call.
pub struct MilepostApp {
    config: AppConfig,
    graph: Graph,
}

impl MilepostApp {
    pub fn new(config: AppConfig, graph_config: &GraphConfig) -> Result<MilepostApp, MilepostAppError> {
        let graph = Graph::try_from(graph_config)?;
        Ok(MilepostApp { config, graph })
    }

    pub fn graph(&self) -> &Graph {
        &self.graph
    }

    /// translates a pair of 1-based DIMACS vertex ids into internal ids,
    /// rejecting ids outside `[1, n]`.
    pub fn endpoints(&self, source: u64, target: u64) -> Result<(VertexId, VertexId), MilepostAppError> {
        let n = self.graph.n() as u64;
        for id in [source, target] {
            if id == 0 || id > n {
                return Err(MilepostAppError::ArgError(format!(
                    "vertex id {} outside the valid range [1, {}]",
                    id, n
                )));
            }
        }
        Ok((VertexId((source - 1) as u32), VertexId((target - 1) as u32)))
    }

    /// runs the requested algorithm(s) for one query. `Both` runs A*
    /// first and Dijkstra second over the same engine, warning when the
    /// costs diverge, which would indicate a miscalibrated estimate.
    pub fn run(
        &self,
        algorithm: SearchAlgorithm,
        source: VertexId,
        target: VertexId,
    ) -> Result<Vec<(SearchAlgorithm, SearchSummary)>, MilepostAppError> {
        if let Ok(crow_flight) =
            haversine::haversine_distance_meters(self.graph.coord(source), self.graph.coord(target))
        {
            info!(
                "query {} -> {}: straight-line distance {:.1} km",
                source.external(),
                target.external(),
                crow_flight / 1000.0
            );
        }

        let mut engine = SearchEngine::new(
            &self.graph,
            self.config.heuristic_config(),
            self.config.queue.width,
        )?;

        let mut results: Vec<(SearchAlgorithm, SearchSummary)> = Vec::new();
        if matches!(algorithm, SearchAlgorithm::AStar | SearchAlgorithm::Both) {
            let summary = engine.run(source, target)?;
            log_summary(SearchAlgorithm::AStar, &summary);
            results.push((SearchAlgorithm::AStar, summary));
        }
        if matches!(algorithm, SearchAlgorithm::Dijkstra | SearchAlgorithm::Both) {
            let summary = engine.run_dijkstra(source, target)?;
            log_summary(SearchAlgorithm::Dijkstra, &summary);
            results.push((SearchAlgorithm::Dijkstra, summary));
        }

        if let [(_, astar), (_, dijkstra)] = results.as_slice() {
            if astar.cost != dijkstra.cost {
                warn!(
                    "a* cost {} diverges from dijkstra cost {}; the distance estimate is not admissible for this dataset",
                    astar.cost, dijkstra.cost
                );
            }
        }
        Ok(results)
    }
}

fn log_summary(algorithm: SearchAlgorithm, summary: &SearchSummary) {
    if summary.found() {
        info!(
            "{}: cost {}, {} vertices on route, {} expansions in {} ms ({:.0} expansions/sec)",
            algorithm,
            summary.cost,
            summary.path.len(),
            summary.expansions,
            summary.elapsed_ms,
            summary.throughput()
        );
    } else {
        info!(
            "{}: no path exists; {} expansions in {} ms",
            algorithm, summary.expansions, summary.elapsed_ms
        );
    }
}
