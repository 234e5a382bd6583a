//! Sheep behaviour on a shared [`graze_grid::GridWorld`].
//!
//! Each tick a sheep evaluates, in strict order: breed, follow its commanded path, seek food,
//! seek a companion. [`Herd`] runs those turns one sheep at a time so every read-decide-commit
//! sequence sees the grid left by the previous sheep.

#![cfg_attr(docsrs, feature(doc_cfg))]
#![forbid(unsafe_code)]

pub mod bias;
pub mod config;
pub mod error;
pub mod herd;
pub mod movement;
pub mod policy;
pub mod scan;
pub mod sheep;

pub use bias::{candidate_moves, BiasMask};
pub use config::HerdConfig;
pub use error::{HerdError, InvariantViolation};
pub use herd::{Herd, TickReport};
pub use movement::MovementResolver;
pub use policy::{decide, Decision};
pub use scan::{find_companion, find_food, SCAN_OFFSETS};
pub use sheep::{Cadence, Sheep};
