use thiserror::Error;

/// Errors surfaced across the estimator's construction and query interface.
///
/// Per-block processing errors are not part of this enum: they are
/// swallowed with a log line by [`crate::window::SampleWindow`] rather than
/// propagated, since a malformed block the chain already accepted must not
/// block chain progress.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EstimatorError {
    /// A construction or query argument was out of range: a zero-valued
    /// window parameter, or an empty output list passed to `estimate_fee`.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// The wallet could not select enough inputs to cover the outputs plus
    /// fee. Propagated verbatim from the wallet collaborator.
    #[error("insufficient funds")]
    InsufficientFunds,

    /// The wallet failed to build a draft transaction for a reason other
    /// than insufficient funds (e.g. the account is locked).
    #[error("wallet error: {0}")]
    Wallet(String),
}
