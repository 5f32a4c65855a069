use super::SearchError;
use serde::{Deserialize, Serialize};
use std::{fmt::Display, str::FromStr};

/// which rendition of the unified search driver a query runs. `Both`
/// runs A* and then Dijkstra over the same engine, which doubles as an
/// empirical admissibility check on the distance estimate.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchAlgorithm {
    AStar,
    Dijkstra,
    Both,
}

impl SearchAlgorithm {
    pub fn to_str(&self) -> &'static str {
        use SearchAlgorithm as A;
        match self {
            A::AStar => "astar",
            A::Dijkstra => "dijkstra",
            A::Both => "both",
        }
    }
}

impl Display for SearchAlgorithm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_str())
    }
}

impl FromStr for SearchAlgorithm {
    type Err = SearchError;

    fn from_str(input: &str) -> Result<SearchAlgorithm, Self::Err> {
        use SearchAlgorithm as A;
        match input.to_lowercase().as_str() {
            "astar" | "a*" | "a star" => Ok(A::AStar),
            "dijkstra" => Ok(A::Dijkstra),
            "both" => Ok(A::Both),
            _ => Err(SearchError::BuildError(format!(
                "unknown search algorithm '{}', expected astar, dijkstra, or both",
                input
            ))),
        }
    }
}
