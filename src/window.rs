use log::{debug, warn};
use std::collections::VecDeque;

use crate::collaborators::{Block, ChainSource, MempoolSnapshot};
use crate::error::EstimatorError;
use crate::fee_rate::FeeRate;
use crate::hash::BlockHash;
use crate::sample::Sample;

/// A bounded, ordered sliding window over recent fee-rate samples.
///
/// Samples are stored oldest-first in a single contiguous deque, keyed by
/// insertion order. Tail-deletion by block hash (on disconnect) is O(window
/// size), which is acceptable given the small caps this is designed around.
#[derive(Clone, Debug)]
pub struct SampleWindow {
    samples: VecDeque<Sample>,
    recent_blocks_num: u64,
    tx_sample_size: u64,
}

impl SampleWindow {
    /// Builds a fresh, empty window. Neither parameter may be zero.
    pub fn init(recent_blocks_num: u64, tx_sample_size: u64) -> Result<Self, EstimatorError> {
        if recent_blocks_num == 0 {
            return Err(EstimatorError::InvalidArgument(
                "recent_blocks_num must be positive".to_owned(),
            ));
        }
        if tx_sample_size == 0 {
            return Err(EstimatorError::InvalidArgument(
                "tx_sample_size must be positive".to_owned(),
            ));
        }
        Ok(SampleWindow {
            samples: VecDeque::new(),
            recent_blocks_num,
            tx_sample_size,
        })
    }

    /// Current number of retained samples.
    pub fn size(&self) -> usize {
        self.samples.len()
    }

    /// Read-only view of the retained samples, oldest-first.
    pub fn samples(&self) -> impl Iterator<Item = &Sample> {
        self.samples.iter()
    }

    /// Replays the recent chain suffix into the window using the current
    /// mempool. Best-effort: the chain collaborator already omits blocks it
    /// can't supply, so there is nothing further to skip here.
    pub async fn setup<C, M>(&mut self, chain: &C, mempool: &M) -> Result<(), EstimatorError>
    where
        C: ChainSource,
        M: MempoolSnapshot,
    {
        for block in chain.recent_blocks(self.recent_blocks_num).await {
            self.on_connect(&block, mempool);
        }
        Ok(())
    }

    /// Admits samples from a newly attached block and enforces the
    /// distinct-block cap.
    pub fn on_connect<B, M>(&mut self, block: &B, mempool: &M)
    where
        B: Block,
        M: MempoolSnapshot,
    {
        let block_hash = block.hash();
        let txs = block.transactions();

        // The transaction at index 0 is the coinbase-equivalent reward and
        // carries no market signal; skip it by position, not by fee value.
        //
        // A zero-size transaction is malformed, but the chain has already
        // accepted it; per the error-handling policy (EstimatorError's
        // doc comment), this is swallowed with a log line rather than
        // propagated or allowed to panic the process.
        let mut candidates: Vec<FeeRate> = txs
            .iter()
            .skip(1)
            .filter(|tx| mempool.contains(&tx.hash()))
            .filter(|tx| {
                let ok = tx.size() > 0;
                if !ok {
                    warn!(
                        "block {block_hash:?} contains a zero-size transaction, skipping it"
                    );
                }
                ok
            })
            .map(|tx| FeeRate::calculate(tx.fee(), tx.size()))
            .collect();
        candidates.sort();

        let admit = (self.tx_sample_size as usize).min(candidates.len());
        if admit == 0 {
            debug!("block {block_hash:?} contributed no fee-rate samples");
            return;
        }

        for fee_rate in candidates.into_iter().take(admit) {
            self.samples.push_back(Sample::new(block_hash, fee_rate));
        }
        debug!("block {block_hash:?} contributed {admit} fee-rate samples");

        self.evict_oldest_while_over_cap();
    }

    fn evict_oldest_while_over_cap(&mut self) {
        while self.distinct_block_count() > self.recent_blocks_num {
            let Some(oldest) = self.samples.front().map(|s| s.block_hash) else {
                break;
            };
            while self.samples.front().map(|s| s.block_hash) == Some(oldest) {
                self.samples.pop_front();
            }
        }
    }

    fn distinct_block_count(&self) -> u64 {
        let mut count = 0u64;
        let mut last: Option<BlockHash> = None;
        for sample in &self.samples {
            if last != Some(sample.block_hash) {
                count += 1;
                last = Some(sample.block_hash);
            }
        }
        count
    }

    /// Removes every sample belonging to `block` from the tail of the
    /// window. A no-op unless the tail's last sample actually belongs to
    /// `block` — disconnects must arrive in LIFO order matching connects,
    /// so anything else indicates the caller is out of order and this is
    /// treated defensively rather than corrupting the window.
    pub fn on_disconnect<B>(&mut self, block: &B)
    where
        B: Block,
    {
        let block_hash = block.hash();
        match self.samples.back() {
            Some(sample) if sample.block_hash == block_hash => {}
            _ => return,
        }
        while self.samples.back().map(|s| s.block_hash) == Some(block_hash) {
            self.samples.pop_back();
        }
        debug!("disconnected block {block_hash:?}, window now has {} samples", self.size());
    }
}
