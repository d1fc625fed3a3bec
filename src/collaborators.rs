use crate::error::EstimatorError;
use crate::hash::{BlockHash, TxHash};

/// A transaction as seen inside a connected block.
///
/// The estimator only needs enough of a transaction to compute a fee rate
/// and to check mempool membership; it never inspects inputs, outputs, or
/// scripts.
pub trait Transaction {
    fn hash(&self) -> TxHash;
    fn fee(&self) -> u64;
    fn size(&self) -> u64;
}

/// A connected or detached block, as delivered by the chain's event stream.
///
/// The coinbase-equivalent reward transaction is always at index 0;
/// `transactions()` returns the full block-order list including it, and
/// callers that want the market-data-bearing transactions must skip index
/// 0 themselves (see [`crate::window::SampleWindow::on_connect`]).
pub trait Block {
    type Tx: Transaction;

    fn hash(&self) -> BlockHash;
    fn transactions(&self) -> &[Self::Tx];
}

/// A read-only snapshot of the node's mempool, valid for the duration of a
/// single `on_connect` call.
///
/// Implementations must be cheap: this is a borrowed view or an `Arc` clone
/// of one, never a fresh I/O round-trip.
pub trait MempoolSnapshot {
    fn contains(&self, tx_hash: &TxHash) -> bool;
}

/// The chain, as consumed to rebuild the window on startup.
///
/// Reads are modeled as async because, unlike `on_connect`/`on_disconnect`
/// which operate on data the chain already pushed to the estimator, `setup`
/// pulls historical blocks from storage.
#[async_trait::async_trait]
pub trait ChainSource: Send + Sync {
    type Block: Block;

    /// Returns up to `n` most recently connected blocks, in increasing
    /// height order. Blocks that cannot be loaded are simply omitted.
    async fn recent_blocks(&self, n: u64) -> Vec<Self::Block>;
}

/// One output of a pending spend the wallet is asked to draft.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Output {
    pub recipient: String,
    pub amount: u64,
    pub memo: String,
}

/// Size of a draft transaction the wallet built for a candidate fee.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Draft {
    pub size: u64,
}

/// The wallet, as consumed by the fee solver's fixed-point loop.
///
/// Coin selection is assumed deterministic given `(account, outputs, fee)`
/// under stable UTXO state, so calling this repeatedly with the converged
/// fee is safe and cheap from the estimator's point of view.
#[async_trait::async_trait]
pub trait WalletDraftSource: Send + Sync {
    type Account: Sync;

    /// Builds a draft transaction covering `outputs` plus `fee`, sourced
    /// from `account`, and returns its serialized size.
    async fn create_draft(
        &self,
        account: &Self::Account,
        outputs: &[Output],
        fee: u64,
    ) -> Result<Draft, EstimatorError>;
}
