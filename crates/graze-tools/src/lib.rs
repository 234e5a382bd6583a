//! Tooling primitives for the graze simulation.
//!
//! This crate is intentionally lightweight and engine-agnostic. Rendering of visited or chosen
//! tiles belongs to whoever consumes the recorded events.

#![cfg_attr(docsrs, feature(doc_cfg))]
#![forbid(unsafe_code)]

pub mod trace;

pub use trace::{
    TraceEvent, TraceLog, TraceObserver, TraceSink, VecTraceSink, PATH_CHOSEN, POSITION_CHANGED,
    SPAWN_REQUESTED, TILE_VISITED,
};
