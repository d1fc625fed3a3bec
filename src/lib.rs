//! Sliding-window fee-rate estimator for a UTXO-style node.
//!
//! The estimator watches blocks as they connect to and disconnect from the
//! active chain, keeps a bounded window of fee-rate samples drawn from
//! transactions the local mempool had already seen, and answers two
//! questions: what fee rate should a transaction pay to confirm within a
//! given time horizon, and what absolute fee should a concrete pending
//! spend attach to hit that rate once coin selection has settled on a
//! transaction size.
//!
//! This crate does not touch chain storage, mempool admission, or wallet
//! key management: it consumes those as collaborators through the traits in
//! [`collaborators`].

mod bucket;
mod collaborators;
mod config;
mod error;
mod estimator;
mod fee_rate;
mod hash;
mod sample;
mod solver;
mod window;

#[cfg(test)]
mod tests;

pub use bucket::PriorityBucket;
pub use collaborators::{Block, ChainSource, Draft, MempoolSnapshot, Output, Transaction, WalletDraftSource};
pub use config::FeeEstimatorConfig;
pub use error::EstimatorError;
pub use fee_rate::FeeRate;
pub use hash::BlockHash;
pub use sample::Sample;
pub use window::SampleWindow;

use std::sync::Arc;

/// The estimator's public surface: owns the [`SampleWindow`] and holds
/// non-owning references to the chain and wallet collaborators needed to
/// rebuild the window on startup and to solve for an absolute fee.
///
/// `FeeEstimator` is not `Sync`-guarded internally; per the single-threaded
/// cooperative scheduling model it is intended to be driven exclusively from
/// the chain's event-delivery executor (see `on_connect`/`on_disconnect`).
pub struct FeeEstimator<C, W> {
    window: SampleWindow,
    config: FeeEstimatorConfig,
    chain: Arc<C>,
    wallet: Arc<W>,
}

impl<C, W> FeeEstimator<C, W>
where
    C: ChainSource,
    W: WalletDraftSource,
{
    /// Builds a fresh, empty estimator. Fails if `config` carries a
    /// zero-valued window parameter (see [`FeeEstimatorConfig`]).
    pub fn new(
        config: FeeEstimatorConfig,
        chain: Arc<C>,
        wallet: Arc<W>,
    ) -> Result<Self, EstimatorError> {
        let window = SampleWindow::init(config.recent_blocks_num, config.tx_sample_size)?;
        Ok(Self {
            window,
            config,
            chain,
            wallet,
        })
    }

    /// Replays the recent chain suffix into the window. Best-effort: blocks
    /// the chain can't supply are skipped rather than failing setup.
    pub async fn setup<M>(&mut self, mempool: &M) -> Result<(), EstimatorError>
    where
        M: MempoolSnapshot,
    {
        self.window.setup(self.chain.as_ref(), mempool).await
    }

    /// Delivers a newly connected block to the window.
    pub fn on_connect<B, M>(&mut self, block: &B, mempool: &M)
    where
        B: collaborators::Block,
        M: MempoolSnapshot,
    {
        self.window.on_connect(block, mempool);
    }

    /// Delivers a detaching block to the window.
    pub fn on_disconnect<B>(&mut self, block: &B)
    where
        B: collaborators::Block,
    {
        self.window.on_disconnect(block);
    }

    /// Current number of retained samples.
    pub fn size(&self) -> usize {
        self.window.size()
    }

    /// Estimates the fee rate a transaction should pay to be included
    /// within `horizon_seconds`.
    pub fn estimate_rate(&self, horizon_seconds: u64) -> FeeRate {
        estimator::estimate_rate(&self.window, &self.config, horizon_seconds)
    }

    /// Estimates the fee rate for an explicit priority bucket, bypassing
    /// the horizon-to-bucket mapping.
    pub fn estimate_rate_for_bucket(&self, bucket: PriorityBucket) -> FeeRate {
        estimator::estimate_rate_for_bucket(&self.window, &self.config, bucket)
    }

    /// Solves for the absolute fee a pending spend should attach to confirm
    /// within `horizon_seconds`, by fixed-point iteration against the
    /// wallet's coin selection.
    pub async fn estimate_fee(
        &self,
        horizon_seconds: u64,
        source_account: &W::Account,
        outputs: &[Output],
    ) -> Result<u64, EstimatorError> {
        let rate = self.estimate_rate(horizon_seconds);
        solver::estimate_fee(
            self.wallet.as_ref(),
            rate,
            source_account,
            outputs,
            self.config.max_solver_iterations,
        )
        .await
    }
}
