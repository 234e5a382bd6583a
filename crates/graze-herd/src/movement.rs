use graze_core::{GridPos, HerdObserver};
use graze_grid::GridWorld;
use tracing::{debug, error};

use crate::{HerdError, Sheep};

/// The single place occupancy moves between tiles.
#[derive(Debug, Default, Clone, Copy)]
pub struct MovementResolver;

impl MovementResolver {
    /// Move `sheep` onto `to`, transferring occupancy and notifying `observer`.
    ///
    /// `to` must be walkable and unoccupied; callers filter candidates first. Violations panic in
    /// debug builds. In release builds the move is refused and `Ok(false)` is returned with the
    /// grid untouched.
    pub fn commit_move(
        grid: &mut GridWorld,
        sheep: &mut Sheep,
        to: GridPos,
        observer: &mut dyn HerdObserver,
    ) -> Result<bool, HerdError> {
        let from = sheep.pos();
        // Both ends are checked before either flag changes.
        grid.tile_at(from)?;
        let target = grid.tile_at(to)?;
        let acceptable = target.is_passable() && !target.is_occupied();
        debug_assert!(
            acceptable,
            "{} tried to move onto {} (passable={}, occupied={})",
            sheep.id(),
            to,
            target.is_passable(),
            target.is_occupied()
        );
        if !acceptable {
            error!(sheep = %sheep.id(), %from, %to, "refused move onto blocked tile");
            return Ok(false);
        }

        grid.set_occupied(to, true)?;
        grid.set_occupied(from, false)?;
        sheep.set_pos(to);
        observer.position_changed(sheep.id(), from, to);
        debug!(sheep = %sheep.id(), %from, %to, "moved");
        Ok(true)
    }
}
