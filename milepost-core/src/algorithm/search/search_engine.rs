use super::backtrack::{self, NO_PARENT};
use super::{
    BucketQueue, CostEstimate, Equirectangular, HeuristicConfig, SearchError, SearchSummary,
    ZeroEstimate,
};
use crate::model::network::{Graph, VertexId};
use crate::model::unit::Cost;
use std::time::Instant;

/// tentative-distance sentinel for a vertex the search has not reached
const UNREACHED: u64 = u64::MAX;

/// Unified single-source single-target shortest-path driver.
///
/// One relaxation loop serves both renditions: [`SearchEngine::run`]
/// plugs in the equirectangular lower bound (A*), and
/// [`SearchEngine::run_dijkstra`] the null estimate. The engine borrows
/// the graph immutably for its lifetime and owns the frontier queue, the
/// tentative-distance array `g`, the `parent` array, and the `closed`
/// bitmap, all sized to the vertex count. State is reset in place at the
/// start of every query, so one engine serves any number of sequential
/// queries without reallocating.
///
/// Vertices move `unseen -> open -> closed`; an open vertex may sit in
/// the queue several times, once per improvement, and stale entries are
/// discarded at pop time against the `closed` bitmap. Under a consistent
/// estimate each vertex closes at most once, and the sequence of keys at
/// which vertices close is non-decreasing.
#[derive(Debug)]
pub struct SearchEngine<'g> {
    graph: &'g Graph,
    heuristic: HeuristicConfig,
    queue: BucketQueue,
    g: Vec<u64>,
    parent: Vec<u32>,
    closed: Vec<u8>,
    expansions: u64,
}

impl<'g> SearchEngine<'g> {
    pub fn new(
        graph: &'g Graph,
        heuristic: HeuristicConfig,
        queue_width: usize,
    ) -> Result<SearchEngine<'g>, SearchError> {
        heuristic.validate()?;
        if queue_width == 0 {
            return Err(SearchError::BuildError(String::from(
                "queue width must be positive",
            )));
        }
        let n = graph.n();
        Ok(SearchEngine {
            graph,
            heuristic,
            queue: BucketQueue::new(queue_width),
            g: vec![UNREACHED; n],
            parent: vec![NO_PARENT; n],
            closed: vec![0; n],
            expansions: 0,
        })
    }

    pub fn with_defaults(graph: &'g Graph) -> Result<SearchEngine<'g>, SearchError> {
        SearchEngine::new(graph, HeuristicConfig::default(), BucketQueue::DEFAULT_WIDTH)
    }

    /// A* from `start` to `goal` under the engine's calibrated
    /// equirectangular estimate.
    pub fn run(&mut self, start: VertexId, goal: VertexId) -> Result<SearchSummary, SearchError> {
        self.check_bounds(start)?;
        self.check_bounds(goal)?;
        let estimate = Equirectangular::new(self.graph.coord(goal), &self.heuristic);
        self.search(start, goal, &estimate)
    }

    /// Dijkstra from `start` to `goal`: the same loop under the null
    /// estimate.
    pub fn run_dijkstra(
        &mut self,
        start: VertexId,
        goal: VertexId,
    ) -> Result<SearchSummary, SearchError> {
        self.check_bounds(start)?;
        self.check_bounds(goal)?;
        self.search(start, goal, &ZeroEstimate)
    }

    fn check_bounds(&self, v: VertexId) -> Result<(), SearchError> {
        if v.as_usize() >= self.graph.n() {
            return Err(SearchError::VertexOutOfBounds(v, self.graph.n()));
        }
        Ok(())
    }

    fn reset(&mut self) {
        self.g.fill(UNREACHED);
        self.parent.fill(NO_PARENT);
        self.closed.fill(0);
        self.queue.clear();
        self.expansions = 0;
    }

    fn search(
        &mut self,
        start: VertexId,
        goal: VertexId,
        estimate: &impl CostEstimate,
    ) -> Result<SearchSummary, SearchError> {
        let timer = Instant::now();
        self.reset();
        let graph = self.graph;

        self.g[start.as_usize()] = 0;
        self.queue.push(start.0, estimate.estimate(graph.coord(start)));

        while let Some(u) = self.queue.pop() {
            let ui = u as usize;
            if self.closed[ui] != 0 {
                continue;
            }
            self.closed[ui] = 1;
            self.expansions += 1;
            if u == goal.0 {
                break;
            }
            let g_u = self.g[ui];
            for (v, w) in graph.out_arcs(VertexId(u)) {
                let vi = v.as_usize();
                if self.closed[vi] != 0 {
                    continue;
                }
                let new_g = g_u + u64::from(w);
                if new_g < self.g[vi] {
                    self.g[vi] = new_g;
                    self.parent[vi] = u;
                    self.queue.push(v.0, new_g + estimate.estimate(graph.coord(v)));
                }
            }
        }

        // an open goal always pops eventually, so queue exhaustion
        // implies the goal was never reached
        let reached = self.g[goal.as_usize()] != UNREACHED;
        let path = backtrack::reconstruct(start, goal, &self.parent, reached)?;
        let cost = if reached {
            Cost::new(self.g[goal.as_usize()])
        } else {
            Cost::INFINITY
        };
        let summary = SearchSummary {
            path,
            cost,
            expansions: self.expansions,
            elapsed_ms: timer.elapsed().as_millis() as u64,
        };
        log::debug!(
            "search {} -> {}: cost {}, {} expansions in {} ms",
            start,
            goal,
            summary.cost,
            summary.expansions,
            summary.elapsed_ms
        );
        Ok(summary)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use geo::coord;

    fn two_vertex_graph() -> Graph {
        Graph::new(
            vec![0, 1, 1],
            vec![1],
            vec![10],
            vec![coord! { x: 0, y: 0 }; 2],
        )
        .unwrap()
    }

    #[test]
    fn test_endpoint_bounds_are_checked() {
        let graph = two_vertex_graph();
        let mut engine = SearchEngine::with_defaults(&graph).unwrap();
        let err = engine.run(VertexId(0), VertexId(2)).unwrap_err();
        assert!(matches!(err, SearchError::VertexOutOfBounds(VertexId(2), 2)));
        let err = engine.run_dijkstra(VertexId(9), VertexId(0)).unwrap_err();
        assert!(matches!(err, SearchError::VertexOutOfBounds(VertexId(9), 2)));
    }

    #[test]
    fn test_zero_queue_width_rejected() {
        let graph = two_vertex_graph();
        let err = SearchEngine::new(&graph, HeuristicConfig::default(), 0).unwrap_err();
        assert!(matches!(err, SearchError::BuildError(_)));
    }

    #[test]
    fn test_invalid_heuristic_rejected() {
        let graph = two_vertex_graph();
        let config = HeuristicConfig {
            scale: 1.0,
            safety: 1.0,
        };
        let err = SearchEngine::new(&graph, config, BucketQueue::DEFAULT_WIDTH).unwrap_err();
        assert!(matches!(err, SearchError::BuildError(_)));
    }

    #[test]
    fn test_same_query_twice_is_identical() {
        let graph = two_vertex_graph();
        let mut engine = SearchEngine::with_defaults(&graph).unwrap();
        let first = engine.run(VertexId(0), VertexId(1)).unwrap();
        let second = engine.run(VertexId(0), VertexId(1)).unwrap();
        assert_eq!(first.path, second.path);
        assert_eq!(first.cost, second.cost);
        assert_eq!(first.expansions, second.expansions);
    }

    #[test]
    fn test_engine_reuse_across_distinct_queries() {
        let graph = two_vertex_graph();
        let mut engine = SearchEngine::with_defaults(&graph).unwrap();
        let forward = engine.run(VertexId(0), VertexId(1)).unwrap();
        assert_eq!(forward.cost, Cost::new(10));
        // no arc back; prior state must not leak into this query
        let backward = engine.run(VertexId(1), VertexId(0)).unwrap();
        assert!(!backward.found());
        assert_eq!(backward.cost, Cost::INFINITY);
        let again = engine.run(VertexId(0), VertexId(1)).unwrap();
        assert_eq!(again.cost, Cost::new(10));
    }
}
