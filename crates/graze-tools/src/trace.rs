#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use std::borrow::Cow;

use graze_core::{GridPos, HerdObserver, SheepId};

pub const SPAWN_REQUESTED: &str = "spawn_requested";
pub const POSITION_CHANGED: &str = "position_changed";
pub const TILE_VISITED: &str = "tile_visited";
pub const PATH_CHOSEN: &str = "path_chosen";

/// A small, allocation-friendly trace event.
///
/// This is intentionally "dumb data" so it can be recorded during simulation and later rendered
/// by tooling.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TraceEvent {
    pub tick: u64,
    pub tag: Cow<'static, str>,
    pub at: GridPos,
    pub sheep: Option<SheepId>,
    pub from: Option<GridPos>,
}

impl TraceEvent {
    pub fn new(tick: u64, tag: impl Into<Cow<'static, str>>, at: GridPos) -> Self {
        Self {
            tick,
            tag: tag.into(),
            at,
            sheep: None,
            from: None,
        }
    }

    pub fn with_sheep(mut self, sheep: SheepId) -> Self {
        self.sheep = Some(sheep);
        self
    }

    pub fn with_from(mut self, from: GridPos) -> Self {
        self.from = Some(from);
        self
    }
}

pub trait TraceSink {
    fn emit(&mut self, event: TraceEvent);
}

#[derive(Debug, Default)]
pub struct VecTraceSink {
    pub events: Vec<TraceEvent>,
}

impl VecTraceSink {
    pub fn tagged<'a>(&'a self, tag: &'a str) -> impl Iterator<Item = &'a TraceEvent> + 'a {
        self.events.iter().filter(move |e| e.tag == tag)
    }

    pub fn count(&self, tag: &str) -> usize {
        self.tagged(tag).count()
    }

    pub fn clear(&mut self) {
        self.events.clear();
    }
}

impl TraceSink for VecTraceSink {
    fn emit(&mut self, event: TraceEvent) {
        self.events.push(event);
    }
}

#[derive(Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TraceLog {
    pub events: Vec<TraceEvent>,
}

impl TraceLog {
    pub fn push(&mut self, event: TraceEvent) {
        self.events.push(event);
    }
}

impl TraceSink for TraceLog {
    fn emit(&mut self, event: TraceEvent) {
        self.push(event);
    }
}

/// Turns every herd notification into a [`TraceEvent`] stamped with the current tick.
#[derive(Debug, Default)]
pub struct TraceObserver<S: TraceSink> {
    sink: S,
    tick: u64,
}

impl<S: TraceSink> TraceObserver<S> {
    pub fn new(sink: S) -> Self {
        Self { sink, tick: 0 }
    }

    pub fn set_tick(&mut self, tick: u64) {
        self.tick = tick;
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }

    pub fn into_sink(self) -> S {
        self.sink
    }
}

impl<S: TraceSink> HerdObserver for TraceObserver<S> {
    fn spawn_requested(&mut self, parent: SheepId, at: GridPos) {
        self.sink
            .emit(TraceEvent::new(self.tick, SPAWN_REQUESTED, at).with_sheep(parent));
    }

    fn position_changed(&mut self, sheep: SheepId, from: GridPos, to: GridPos) {
        self.sink.emit(
            TraceEvent::new(self.tick, POSITION_CHANGED, to)
                .with_sheep(sheep)
                .with_from(from),
        );
    }

    fn tile_visited(&mut self, at: GridPos) {
        self.sink.emit(TraceEvent::new(self.tick, TILE_VISITED, at));
    }

    fn path_chosen(&mut self, at: GridPos) {
        self.sink.emit(TraceEvent::new(self.tick, PATH_CHOSEN, at));
    }
}
