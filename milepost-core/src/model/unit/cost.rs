use derive_more::{Add, Sum};
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// accumulated path cost in the weight unit of the dataset (decimeters
/// for the USA-road-d networks). individual arc weights fit in 32 bits;
/// sums are carried in 64 bits so continent-scale paths cannot overflow.
#[derive(
    Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord, Add, Sum, Serialize, Deserialize,
)]
pub struct Cost(pub u64);

impl Cost {
    /// zero cost, the unit of the addition operation
    pub const ZERO: Cost = Cost(0);

    /// sentinel for an unreached vertex, larger than any path cost
    pub const INFINITY: Cost = Cost(u64::MAX);

    pub fn new(value: u64) -> Cost {
        Cost(value)
    }

    pub fn as_u64(&self) -> u64 {
        self.0
    }

    /// the cost if it denotes a reached vertex, else None
    pub fn reached(&self) -> Option<u64> {
        if *self == Cost::INFINITY {
            None
        } else {
            Some(self.0)
        }
    }
}

impl From<u64> for Cost {
    fn from(value: u64) -> Self {
        Cost(value)
    }
}

impl From<u32> for Cost {
    fn from(value: u32) -> Self {
        Cost(u64::from(value))
    }
}

impl Display for Cost {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if *self == Cost::INFINITY {
            write!(f, "unreachable")
        } else {
            write!(f, "{}", self.0)
        }
    }
}
