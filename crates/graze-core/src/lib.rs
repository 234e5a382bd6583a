//! Deterministic, engine-agnostic primitives for the graze simulation.

#![cfg_attr(docsrs, feature(doc_cfg))]
#![forbid(unsafe_code)]

pub mod agent;
pub mod observe;
pub mod pos;
pub mod rng;
pub mod tick;

pub use agent::{AgentId, SheepId};
pub use observe::{HerdObserver, NullObserver};
pub use pos::{Direction, GridPos};
pub use rng::{DeterministicRng, SplitMix64};
pub use tick::TickContext;
