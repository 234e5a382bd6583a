use crate::{GridPos, SheepId};

/// Outbound notifications produced by the simulation core.
///
/// Every hook defaults to a no-op; the core never depends on an observer doing anything.
pub trait HerdObserver {
    /// A breeding sheep asks for a new sheep at `at`.
    fn spawn_requested(&mut self, _parent: SheepId, _at: GridPos) {}

    /// A move was committed.
    fn position_changed(&mut self, _sheep: SheepId, _from: GridPos, _to: GridPos) {}

    /// Search popped `at` off the frontier.
    fn tile_visited(&mut self, _at: GridPos) {}

    /// Path reconstruction walked through `at`.
    fn path_chosen(&mut self, _at: GridPos) {}
}

#[derive(Debug, Default, Clone, Copy)]
pub struct NullObserver;

impl HerdObserver for NullObserver {}

impl<T: HerdObserver + ?Sized> HerdObserver for &mut T {
    fn spawn_requested(&mut self, parent: SheepId, at: GridPos) {
        (**self).spawn_requested(parent, at);
    }

    fn position_changed(&mut self, sheep: SheepId, from: GridPos, to: GridPos) {
        (**self).position_changed(sheep, from, to);
    }

    fn tile_visited(&mut self, at: GridPos) {
        (**self).tile_visited(at);
    }

    fn path_chosen(&mut self, at: GridPos) {
        (**self).path_chosen(at);
    }
}
