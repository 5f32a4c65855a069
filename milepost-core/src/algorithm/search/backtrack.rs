use super::SearchError;
use crate::model::network::{Graph, VertexId};
use crate::model::unit::Cost;

/// parent-array sentinel for "no predecessor"
pub(crate) const NO_PARENT: u32 = u32::MAX;

/// reconstructs the route from a filled parent array by walking from the
/// target up to the root of the shortest-path tree, then reversing.
/// `reached` is the caller's knowledge of whether the target was settled;
/// when false the route is empty.
pub(crate) fn reconstruct(
    start: VertexId,
    goal: VertexId,
    parent: &[u32],
    reached: bool,
) -> Result<Vec<VertexId>, SearchError> {
    if !reached {
        return Ok(vec![]);
    }
    let mut route: Vec<VertexId> = Vec::new();
    let mut current = goal.0;
    loop {
        route.push(VertexId(current));
        if current == start.0 {
            break;
        }
        current = parent[current as usize];
        if current == NO_PARENT {
            return Err(SearchError::InternalError(format!(
                "parent chain from {} broke before reaching {}",
                goal, start
            )));
        }
        if route.len() > parent.len() {
            return Err(SearchError::InternalError(format!(
                "parent chain from {} cycles without reaching {}",
                goal, start
            )));
        }
    }
    route.reverse();
    Ok(route)
}

/// total cost along a reconstructed route, resolving each hop through
/// the graph's arc table. used to cross-check that a route's arc costs
/// sum to the search's reported distance.
pub fn route_cost(graph: &Graph, route: &[VertexId]) -> Result<Cost, SearchError> {
    route
        .windows(2)
        .map(|hop| {
            graph.arc_weight(hop[0], hop[1]).map(Cost::from).ok_or_else(|| {
                SearchError::InternalError(format!("route hop ({}, {}) is not an arc", hop[0], hop[1]))
            })
        })
        .sum()
}
