//! Shortest-path search over a [`graze_grid::GridWorld`].
//!
//! Both searches return a predecessor map; callers turn it into a [`ForwardPath`] with
//! [`reconstruct`].

#![cfg_attr(docsrs, feature(doc_cfg))]
#![forbid(unsafe_code)]

mod frontier;
pub mod path;
pub mod search;

pub use path::{reconstruct, ForwardPath};
pub use search::{heuristic_search, search, uniform_cost, SearchAlgorithm, SearchResult};
