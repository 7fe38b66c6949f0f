use crate::{block::BlockFees, verifier::OrderingReport};
use anyhow::Error;
use futures_util::future;
use tracing::debug;

/// Source of blocks to check.
pub trait ChainReader {
    /// Fee view of the block with the given number, including every
    /// transaction's fee fields.
    fn get_block_fees(
        &self,
        block_number: u64,
    ) -> impl Future<Output = Result<BlockFees, Error>> + Send;
    fn get_latest_block_number(&self) -> impl Future<Output = Result<u64, Error>> + Send;
}

/// Fetches the block and checks whether its transactions are sorted by
/// priority fee. A failed fetch is returned as an error, never as `false`.
pub async fn is_ordered_block<R: ChainReader>(
    reader: &R,
    block_number: u64,
) -> Result<bool, Error> {
    Ok(check_block(reader, block_number).await?.is_ordered())
}

pub async fn check_block<R: ChainReader>(
    reader: &R,
    block_number: u64,
) -> Result<OrderingReport, Error> {
    let block = reader.get_block_fees(block_number).await?;
    debug!(
        "Block {}: base fee {}, {} transactions",
        block.number,
        block.base_fee_per_gas,
        block.transactions.len()
    );
    Ok(OrderingReport::new(&block))
}

/// Checks every block concurrently. Results come back in the order of
/// `block_numbers`, each with its own outcome.
pub async fn check_blocks<R: ChainReader + Sync>(
    reader: &R,
    block_numbers: &[u64],
) -> Vec<(u64, Result<OrderingReport, Error>)> {
    let checks = block_numbers.iter().map(|&block_number| async move {
        (block_number, check_block(reader, block_number).await)
    });
    future::join_all(checks).await
}
