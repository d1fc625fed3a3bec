use crate::bucket::PriorityBucket;
use crate::config::FeeEstimatorConfig;
use crate::fee_rate::FeeRate;
use crate::window::SampleWindow;

/// Maps `horizon_seconds` onto a bucket, then delegates to
/// [`estimate_rate_for_bucket`].
pub(crate) fn estimate_rate(
    window: &SampleWindow,
    config: &FeeEstimatorConfig,
    horizon_seconds: u64,
) -> FeeRate {
    estimate_rate_for_bucket(window, config, PriorityBucket::for_horizon(horizon_seconds))
}

/// Returns the configured percentile of the window's sorted-ascending fee
/// rates for `bucket`, or the [`FeeRate::MIN`] sentinel if the window is
/// empty.
///
/// No interpolation: `idx = floor(p/100 * len)`, clamped to the last valid
/// index.
pub(crate) fn estimate_rate_for_bucket(
    window: &SampleWindow,
    config: &FeeEstimatorConfig,
    bucket: PriorityBucket,
) -> FeeRate {
    let mut rates: Vec<u64> = window.samples().map(|s| s.fee_rate.as_u64()).collect();
    if rates.is_empty() {
        return FeeRate::MIN;
    }
    rates.sort_unstable();

    let percentile = match bucket {
        PriorityBucket::Low => config.percentiles.low,
        PriorityBucket::Medium => config.percentiles.medium,
        PriorityBucket::High => config.percentiles.high,
    };

    let idx = (percentile as usize * rates.len()) / 100;
    let idx = idx.min(rates.len() - 1);
    FeeRate::from_u64(rates[idx])
}
