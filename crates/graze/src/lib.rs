//! Umbrella crate that re-exports the `graze-*` building blocks.
//!
//! A host usually needs [`grid`] to build a pasture, [`herd`] to populate and tick it, and
//! [`tools`] to record what happened.

#![cfg_attr(docsrs, feature(doc_cfg))]
#![forbid(unsafe_code)]

#[cfg(feature = "core")]
#[cfg_attr(docsrs, doc(cfg(feature = "core")))]
pub use graze_core as core;

#[cfg(feature = "grid")]
#[cfg_attr(docsrs, doc(cfg(feature = "grid")))]
pub use graze_grid as grid;

#[cfg(feature = "nav")]
#[cfg_attr(docsrs, doc(cfg(feature = "nav")))]
pub use graze_nav as nav;

#[cfg(feature = "herd")]
#[cfg_attr(docsrs, doc(cfg(feature = "herd")))]
pub use graze_herd as herd;

#[cfg(feature = "tools")]
#[cfg_attr(docsrs, doc(cfg(feature = "tools")))]
pub use graze_tools as tools;
