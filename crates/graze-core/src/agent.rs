use core::fmt::{self, Debug};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Anything that can own a turn and a random stream.
///
/// Turn order follows `Ord`; `stable_id` seeds the per-turn generator and cadence offset.
pub trait AgentId: Copy + Ord + Eq + Debug {
    fn stable_id(self) -> u64;
}

impl AgentId for u64 {
    fn stable_id(self) -> u64 {
        self
    }
}

/// Sheep ids are handed out in spawn order and never reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct SheepId(pub u64);

impl AgentId for SheepId {
    fn stable_id(self) -> u64 {
        self.0
    }
}

impl fmt::Display for SheepId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "sheep#{}", self.0)
    }
}
