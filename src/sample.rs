use crate::fee_rate::FeeRate;
use crate::hash::BlockHash;

/// A single retained observation: the fee rate of a transaction the node's
/// mempool had already seen, tagged with the block that confirmed it.
///
/// Samples carry the block hash so they can be dropped in bulk on
/// disconnect; they deliberately do not carry the transaction hash, since
/// nothing downstream needs to identify the transaction again.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Sample {
    pub block_hash: BlockHash,
    pub fee_rate: FeeRate,
}

impl Sample {
    pub fn new(block_hash: BlockHash, fee_rate: FeeRate) -> Self {
        Sample {
            block_hash,
            fee_rate,
        }
    }
}
