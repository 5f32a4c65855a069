use super::SearchError;
use crate::util::geo::equirectangular::{
    cos_latitude, microdegree_distance, METERS_PER_MICRODEGREE,
};
use crate::util::geo::MicroCoord;
use serde::{Deserialize, Serialize};

/// lower-bound estimator of the remaining cost to a fixed goal, the
/// pluggable seam between the A* and Dijkstra renditions of the search
/// loop. implementations must be admissible for the search to return
/// optimal paths, and consistent for each vertex to close exactly once.
pub trait CostEstimate {
    /// a lower bound, in arc-weight units, on the cost of any path from
    /// a vertex at `from` to the goal
    fn estimate(&self, from: MicroCoord) -> u64;
}

/// calibration of the distance estimate against the dataset's weight
/// unit.
///
/// `scale` converts one microdegree of latitude into weight units;
/// `safety` shrinks the estimate to absorb the flat-projection error so
/// it stays below the true shortest-path cost. both are configuration,
/// fixed at engine construction.
#[derive(Serialize, Deserialize, Clone, Copy, Debug)]
pub struct HeuristicConfig {
    pub scale: f64,
    pub safety: f64,
}

impl HeuristicConfig {
    pub const MAX_SAFETY: f64 = 0.999;
    pub const DEFAULT_SAFETY: f64 = 0.99;

    /// calibration for datasets with arc weights in decimeters, such as
    /// the USA-road-d networks
    pub fn decimeters() -> HeuristicConfig {
        HeuristicConfig {
            scale: METERS_PER_MICRODEGREE * 10.0,
            safety: Self::DEFAULT_SAFETY,
        }
    }

    /// calibration for datasets with arc weights in meters
    pub fn meters() -> HeuristicConfig {
        HeuristicConfig {
            scale: METERS_PER_MICRODEGREE,
            safety: Self::DEFAULT_SAFETY,
        }
    }

    pub fn validate(&self) -> Result<(), SearchError> {
        if !self.scale.is_finite() || self.scale <= 0.0 {
            return Err(SearchError::BuildError(format!(
                "heuristic scale must be positive, found {}",
                self.scale
            )));
        }
        if !(self.safety > 0.0 && self.safety <= Self::MAX_SAFETY) {
            return Err(SearchError::BuildError(format!(
                "heuristic safety factor must lie in (0, {}], found {}",
                Self::MAX_SAFETY,
                self.safety
            )));
        }
        Ok(())
    }
}

impl Default for HeuristicConfig {
    fn default() -> Self {
        HeuristicConfig::decimeters()
    }
}

/// the null estimate; turns the driver into plain Dijkstra
pub struct ZeroEstimate;

impl CostEstimate for ZeroEstimate {
    fn estimate(&self, _from: MicroCoord) -> u64 {
        0
    }
}

/// admissible equirectangular distance to a fixed goal, in weight units.
///
/// the cosine of the goal latitude is computed once per query; each call
/// is two integer subtractions, a multiply-add, and a square root.
pub struct Equirectangular {
    goal: MicroCoord,
    cos_lat_goal: f64,
    factor: f64,
}

impl Equirectangular {
    pub fn new(goal: MicroCoord, config: &HeuristicConfig) -> Equirectangular {
        Equirectangular {
            goal,
            cos_lat_goal: cos_latitude(goal.y),
            factor: config.scale * config.safety,
        }
    }
}

impl CostEstimate for Equirectangular {
    fn estimate(&self, from: MicroCoord) -> u64 {
        let microdegrees = microdegree_distance(from, self.goal, self.cos_lat_goal);
        (microdegrees * self.factor) as u64
    }
}
