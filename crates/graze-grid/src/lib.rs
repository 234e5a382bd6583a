//! Tile grid shared by every sheep: occupancy, passability, edible levels, and edge costs.

#![cfg_attr(docsrs, feature(doc_cfg))]
#![forbid(unsafe_code)]

pub mod error;
pub mod grid;
pub mod tile;

pub use error::GridError;
pub use grid::{GridWorld, Neighbors, DEFAULT_MAX_EDIBLE};
pub use tile::{Tile, DEFAULT_EDGE_COST};
