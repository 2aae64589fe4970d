#![deny(missing_docs)]

//! Generic node/edge graph used to model dollar game boards.
//!
//! [`Graph`] stores payloads of any type under integer node ids and keeps a
//! flat collection of weighted edges. It answers adjacency and connectivity
//! questions and reports the genus (`edges - nodes + 1`) of connected graphs.

mod config;
mod graph;
mod hash;
mod ids;

pub use config::GraphConfig;
pub use graph::{Edge, Graph};
pub use hash::structural_hash;
