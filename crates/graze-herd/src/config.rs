#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct HerdConfig {
    pub max_health: u8,
    /// Health a sheep is left with after breeding.
    pub breed_health: u8,
    /// Starting health of a spawned sheep.
    pub spawn_health: u8,
    pub think_every_ticks: u32,
    /// Regrow food every N ticks; `0` disables regrowth.
    pub regrow_every_ticks: u32,
    /// Place a sheep on every spawn request instead of leaving it to the observer.
    pub spawn_on_request: bool,
}

impl Default for HerdConfig {
    fn default() -> Self {
        Self {
            max_health: 10,
            breed_health: 5,
            spawn_health: 5,
            think_every_ticks: 1,
            regrow_every_ticks: 0,
            spawn_on_request: true,
        }
    }
}
