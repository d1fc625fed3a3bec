use log::warn;

use crate::collaborators::{Output, WalletDraftSource};
use crate::error::EstimatorError;
use crate::fee_rate::FeeRate;

/// Solves for the absolute fee a pending spend should attach, by asking the
/// wallet to draft a candidate transaction at the current `rate` and
/// iterating until the fee implied by the draft's size matches the fee the
/// draft was built with.
///
/// `outputs` must be non-empty. The loop carries `fee` from iteration to
/// iteration and is capped at `max_iterations`; a wallet that never
/// converges gets the last computed fee rather than an error, which only
/// ever overpays by `rate * delta_size` and never underpays.
pub(crate) async fn estimate_fee<W>(
    wallet: &W,
    rate: FeeRate,
    source_account: &W::Account,
    outputs: &[Output],
    max_iterations: u32,
) -> Result<u64, EstimatorError>
where
    W: WalletDraftSource,
{
    if outputs.is_empty() {
        return Err(EstimatorError::InvalidArgument(
            "outputs must not be empty".to_owned(),
        ));
    }

    let mut fee = 0u64;
    for _ in 0..max_iterations {
        let draft = wallet.create_draft(source_account, outputs, fee).await?;
        let new_fee = rate.as_u64() * draft.size;
        if new_fee == fee {
            return Ok(fee);
        }
        fee = new_fee;
    }

    warn!("fee solver did not converge within {max_iterations} iterations, returning last iterate {fee}");
    Ok(fee)
}
