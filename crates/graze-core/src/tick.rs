use crate::{rng, AgentId, SplitMix64};

/// Per-tick input to the herd scheduler.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TickContext {
    pub tick: u64,
    /// Run seed; the same seed replays the same run.
    pub seed: u64,
}

impl TickContext {
    pub fn new(tick: u64, seed: u64) -> Self {
        Self { tick, seed }
    }

    /// Generator for one sheep's turn on this tick. Same `(seed, tick, agent, stream)` always
    /// yields the same sequence.
    pub fn rng_for_agent<A: AgentId>(&self, agent: A, stream: u64) -> SplitMix64 {
        let seed = rng::derive_seed(self.seed ^ rng::mix64(self.tick), agent.stable_id(), stream);
        SplitMix64::new(seed)
    }
}
