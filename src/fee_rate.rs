use std::fmt;

/// Fee per unit of serialized transaction size, rounded up.
///
/// The minimum representable rate is 1; there is no zero rate, since a rate
/// of zero would mean "free to include" which the estimator never reports
/// (see the default-rate sentinel in [`crate::FeeEstimator::estimate_rate`]).
#[derive(Clone, Copy, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct FeeRate(u64);

impl FeeRate {
    /// The sentinel returned when there is no sample to estimate from.
    pub const MIN: FeeRate = FeeRate(1);

    /// Computes `ceil(fee / size)`.
    ///
    /// # Panics
    ///
    /// Panics if `size` is zero: a zero-size transaction is not a valid
    /// input to fee-rate calculation.
    pub fn calculate(fee: u64, size: u64) -> FeeRate {
        assert!(size > 0, "cannot compute a fee rate for a zero-size transaction");
        let rate = fee.div_ceil(size);
        FeeRate(rate.max(1))
    }

    /// Wraps a precomputed rate value as-is, without the `/size` division.
    pub fn from_u64(rate: u64) -> FeeRate {
        FeeRate(rate.max(1))
    }

    pub fn as_u64(self) -> u64 {
        self.0
    }
}

impl fmt::Display for FeeRate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn calculate_rounds_up() {
        assert_eq!(FeeRate::calculate(10, 3).as_u64(), 4);
        assert_eq!(FeeRate::calculate(9, 3).as_u64(), 3);
    }

    #[test]
    fn calculate_floors_at_one() {
        assert_eq!(FeeRate::calculate(0, 100).as_u64(), 1);
    }

    #[test]
    #[should_panic]
    fn calculate_rejects_zero_size() {
        let _ = FeeRate::calculate(10, 0);
    }
}
