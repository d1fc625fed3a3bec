//! End-to-end scenarios S1-S7.

use std::sync::Arc;

use crate::config::FeeEstimatorConfig;
use crate::tests::doubles::{FakeBlock, FakeChain, FakeMempool, FakeTransaction, ScriptedWallet};
use crate::{FeeEstimator, Output};

fn config(recent_blocks_num: u64, tx_sample_size: u64) -> FeeEstimatorConfig {
    FeeEstimatorConfig {
        recent_blocks_num,
        tx_sample_size,
        ..FeeEstimatorConfig::default()
    }
}

fn estimator(
    recent_blocks_num: u64,
    tx_sample_size: u64,
) -> FeeEstimator<FakeChain, ScriptedWallet> {
    let chain = Arc::new(FakeChain::new(vec![]));
    let wallet = Arc::new(ScriptedWallet::new(|_fee| Ok(1)));
    FeeEstimator::new(config(recent_blocks_num, tx_sample_size), chain, wallet).unwrap()
}

#[test]
fn s1_single_sample_window() {
    let mut est = estimator(1, 1);
    let mempool = FakeMempool::containing(&[1]);
    let block = FakeBlock::new(0xA, vec![FakeTransaction::new(1, 10, 5)]);

    est.on_connect(&block, &mempool);

    assert_eq!(est.estimate_rate(60).as_u64(), 2); // ceil(10/5)
}

#[test]
fn s2_eviction() {
    let mut est = estimator(1, 1);
    let mempool = FakeMempool::containing(&[1, 2]);
    let a = FakeBlock::new(0xA, vec![FakeTransaction::new(1, 10, 1)]);
    let b = FakeBlock::new(0xB, vec![FakeTransaction::new(2, 9, 1)]);

    est.on_connect(&a, &mempool);
    est.on_connect(&b, &mempool);

    assert_eq!(est.size(), 1);
    assert_eq!(est.estimate_rate(60).as_u64(), 9);
}

#[test]
fn s3_retention_under_higher_cap() {
    let mut est = estimator(2, 1);
    let mempool = FakeMempool::containing(&[1, 2]);
    let a = FakeBlock::new(0xA, vec![FakeTransaction::new(1, 10, 1)]);
    let b = FakeBlock::new(0xB, vec![FakeTransaction::new(2, 9, 1)]);

    est.on_connect(&a, &mempool);
    est.on_connect(&b, &mempool);

    assert_eq!(est.size(), 2);
}

#[test]
fn s4_per_block_cap() {
    let mut est = estimator(2, 2);
    let mempool = FakeMempool::containing(&[1, 2, 3, 4]);
    let a = FakeBlock::new(0xA, vec![FakeTransaction::new(1, 10, 1)]);
    let b = FakeBlock::new(
        0xB,
        vec![
            FakeTransaction::new(2, 10, 1),
            FakeTransaction::new(3, 20, 1),
            FakeTransaction::new(4, 30, 1),
        ],
    );

    est.on_connect(&a, &mempool);
    est.on_connect(&b, &mempool);

    // 1 sample from A plus 2 (of 3, capped) from B; A is not evicted since
    // both blocks fit under recent_blocks_num=2.
    assert_eq!(est.size(), 3);
}

#[test]
fn s5_mempool_filter() {
    let mut est = estimator(1, 1);
    let mempool = FakeMempool::containing(&[]);
    let block = FakeBlock::new(0xA, vec![FakeTransaction::new(1, 10, 1)]);

    est.on_connect(&block, &mempool);

    assert_eq!(est.size(), 0);
}

#[test]
fn s6_disconnect() {
    let mut est = estimator(2, 1);
    let mempool = FakeMempool::containing(&[1, 2]);
    let a = FakeBlock::new(0xA, vec![FakeTransaction::new(1, 10, 1)]);
    let b = FakeBlock::new(0xB, vec![FakeTransaction::new(2, 9, 1)]);

    est.on_connect(&a, &mempool);
    est.on_connect(&b, &mempool);
    est.on_disconnect(&b);

    assert_eq!(est.size(), 1);
    assert_eq!(est.estimate_rate(60).as_u64(), 10);
}

#[tokio::test]
async fn s7_fee_estimation_for_pending_spend_converges_immediately() {
    let chain = Arc::new(FakeChain::new(vec![]));
    // Draft size is a constant 1, so for rate r the fixed point is r * 1 = r.
    let wallet = Arc::new(ScriptedWallet::new(|_fee| Ok(1)));
    let mut est = FeeEstimator::new(config(1, 1), chain, wallet).unwrap();

    let mempool = FakeMempool::containing(&[1]);
    let block = FakeBlock::new(0xA, vec![FakeTransaction::new(1, 10, 1)]); // rate 10
    est.on_connect(&block, &mempool);
    assert_eq!(est.estimate_rate(20).as_u64(), 10);

    let outputs = vec![Output {
        recipient: "addr".to_owned(),
        amount: 5,
        memo: "test".to_owned(),
    }];
    let fee = est.estimate_fee(20, "acct", &outputs).await.unwrap();

    assert_eq!(fee, 10);
}
