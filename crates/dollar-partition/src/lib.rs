#![deny(missing_docs)]

//! Centrally weighted random partitions of an integer sum.
//!
//! [`RandomPartition::find_random_set`] produces `count` integers from an
//! inclusive range that add up to an exact target. Values are drawn by
//! recursively splitting the count in half and choosing each half's share of
//! the sum with a bounded Gaussian, which favours balanced splits over
//! extreme ones.

mod config;
mod gaussian;
mod partition;

pub use config::PartitionConfig;
pub use gaussian::BoundedGaussian;
pub use partition::{is_feasible, RandomPartition};
