use serde::{Deserialize, Serialize};
use std::{cmp::Ordering, fmt::Display};

/// 0-based internal vertex identifier. DIMACS inputs use 1-based ids,
/// translated once at the parsing boundary. 32 bits cover the US-road
/// scale networks and keep the CSR arrays compact.
#[derive(Copy, Clone, Serialize, Deserialize, PartialEq, Eq, Hash, Debug, Default)]
pub struct VertexId(pub u32);

impl VertexId {
    pub fn as_usize(&self) -> usize {
        self.0 as usize
    }

    /// the 1-based id this vertex carries in DIMACS text form
    pub fn external(&self) -> u64 {
        u64::from(self.0) + 1
    }
}

impl PartialOrd for VertexId {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for VertexId {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.cmp(&other.0)
    }
}

impl Display for VertexId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
