use dollar_core::errors::{ErrorInfo, GameError};
use serde::{Deserialize, Serialize};

use crate::gaussian::BoundedGaussian;

/// Tuning knobs for [`RandomPartition`](crate::RandomPartition).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PartitionConfig {
    /// Symmetric cap applied to Gaussian samples, in standard deviations.
    /// Smaller values flatten the weighting towards uniform.
    #[serde(default = "default_gaussian_bound")]
    pub gaussian_bound: f64,
}

fn default_gaussian_bound() -> f64 {
    BoundedGaussian::DEFAULT_BOUND
}

impl Default for PartitionConfig {
    fn default() -> Self {
        Self {
            gaussian_bound: default_gaussian_bound(),
        }
    }
}

impl PartitionConfig {
    /// Checks that the Gaussian bound is finite and strictly positive.
    pub fn validate(&self) -> Result<(), GameError> {
        if !self.gaussian_bound.is_finite() || self.gaussian_bound <= 0.0 {
            return Err(GameError::Config(
                ErrorInfo::new("invalid-bound", "gaussian bound must be finite and positive")
                    .with_context("gaussian_bound", self.gaussian_bound),
            ));
        }
        Ok(())
    }
}
