/// Fee-rate priority bucket a target confirmation horizon maps onto.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum PriorityBucket {
    /// Horizon >= 300s: tolerant of delay, prices at the bottom of the
    /// included distribution.
    Low,
    /// 60s <= horizon < 300s.
    Medium,
    /// Horizon < 60s: wants the next block or two.
    High,
}

impl PriorityBucket {
    /// Maps a target horizon, in seconds, onto a bucket.
    pub fn for_horizon(horizon_seconds: u64) -> PriorityBucket {
        if horizon_seconds >= 300 {
            PriorityBucket::Low
        } else if horizon_seconds >= 60 {
            PriorityBucket::Medium
        } else {
            PriorityBucket::High
        }
    }
}
