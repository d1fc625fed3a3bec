use serde::{Deserialize, Serialize};

/// Percentile, out of 100, each [`crate::PriorityBucket`] samples from the
/// sorted-ascending fee rates in the window.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct PercentileConfig {
    pub low: u8,
    pub medium: u8,
    pub high: u8,
}

impl Default for PercentileConfig {
    fn default() -> Self {
        PercentileConfig {
            low: 10,
            medium: 20,
            high: 30,
        }
    }
}

/// In-process configuration for [`crate::FeeEstimator`].
///
/// Deserializable so the host node's configuration loader can populate this
/// from a `[fee_estimator]` table in its own TOML file; this crate itself
/// never reads a file.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct FeeEstimatorConfig {
    /// Maximum number of distinct blocks represented in the window.
    pub recent_blocks_num: u64,
    /// Maximum number of samples admitted per block.
    pub tx_sample_size: u64,
    /// Percentile overrides for {low, medium, high}.
    pub percentiles: PercentileConfig,
    /// Iteration cap for the fee solver's fixed-point loop.
    pub max_solver_iterations: u32,
}

impl Default for FeeEstimatorConfig {
    fn default() -> Self {
        FeeEstimatorConfig {
            recent_blocks_num: 10,
            tx_sample_size: 3,
            percentiles: PercentileConfig::default(),
            max_solver_iterations: 8,
        }
    }
}
