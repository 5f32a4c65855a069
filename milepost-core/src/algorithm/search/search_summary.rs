use crate::model::network::VertexId;
use crate::model::unit::Cost;
use serde::Serialize;

/// the outcome of one shortest-path query: the optimal-cost route (empty
/// when the target is unreachable) together with the run's performance
/// counters.
#[derive(Debug, Clone, Serialize)]
pub struct SearchSummary {
    /// vertices from source to target inclusive; empty when no path exists
    pub path: Vec<VertexId>,
    /// total path cost, [`Cost::INFINITY`] when no path exists
    pub cost: Cost,
    /// vertices closed by the search
    pub expansions: u64,
    /// wall time from state reset through path reconstruction
    pub elapsed_ms: u64,
}

impl SearchSummary {
    pub fn found(&self) -> bool {
        !self.path.is_empty()
    }

    /// closed vertices per second of search wall time
    pub fn throughput(&self) -> f64 {
        let seconds = (self.elapsed_ms.max(1) as f64) / 1000.0;
        self.expansions as f64 / seconds
    }
}
