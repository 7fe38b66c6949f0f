use crate::shared::alloy_tools::create_alloy_provider_without_wallet;
use alloy::{
    eips::BlockNumberOrTag,
    providers::{DynProvider, Provider},
};
use anyhow::Error;
use ordering::{BlockFees, ChainReader, TxFeeSchema};
use serde::Deserialize;

/// Subset of an `eth_getBlockByNumber` response with full transaction objects.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RpcBlock {
    #[serde(with = "alloy::serde::quantity")]
    pub number: u64,
    #[serde(default, with = "alloy::serde::quantity::opt")]
    pub base_fee_per_gas: Option<u128>,
    pub transactions: Vec<RpcTransaction>,
}

/// Fee fields of a transaction object. Which of them are present decides the
/// fee schema, so they are kept optional instead of decoding a typed envelope.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RpcTransaction {
    #[serde(default, with = "alloy::serde::quantity::opt")]
    pub gas_price: Option<u128>,
    #[serde(default, with = "alloy::serde::quantity::opt")]
    pub max_priority_fee_per_gas: Option<u128>,
    #[serde(default, with = "alloy::serde::quantity::opt")]
    pub max_fee_per_gas: Option<u128>,
}

impl From<RpcTransaction> for TxFeeSchema {
    fn from(tx: RpcTransaction) -> Self {
        TxFeeSchema::classify(tx.gas_price, tx.max_priority_fee_per_gas, tx.max_fee_per_gas)
    }
}

impl From<RpcBlock> for BlockFees {
    fn from(block: RpcBlock) -> Self {
        BlockFees::new(
            block.number,
            block.base_fee_per_gas,
            block.transactions.into_iter().map(Into::into).collect(),
        )
    }
}

pub struct RpcChainReader {
    provider: DynProvider,
}

impl RpcChainReader {
    pub async fn new(url: &str) -> Result<Self, Error> {
        let provider = create_alloy_provider_without_wallet(url)
            .await
            .map_err(|e| anyhow::anyhow!("Failed to create chain reader provider: {e}"))?;
        Ok(Self::with_provider(provider))
    }

    pub fn with_provider(provider: DynProvider) -> Self {
        Self { provider }
    }
}

impl ChainReader for RpcChainReader {
    async fn get_block_fees(&self, block_number: u64) -> Result<BlockFees, Error> {
        // Raw call, so that transaction types unknown to alloy still decode
        let block: Option<RpcBlock> = self
            .provider
            .raw_request(
                "eth_getBlockByNumber".into(),
                (BlockNumberOrTag::Number(block_number), true),
            )
            .await
            .map_err(|e| anyhow::anyhow!("Failed to get block {block_number}: {e}"))?;

        let block = block.ok_or_else(|| anyhow::anyhow!("Block {block_number} not found"))?;
        if block.number != block_number {
            return Err(anyhow::anyhow!(
                "Requested block {block_number}, node returned block {}",
                block.number
            ));
        }
        Ok(block.into())
    }

    async fn get_latest_block_number(&self) -> Result<u64, Error> {
        self.provider
            .get_block_number()
            .await
            .map_err(|e| anyhow::anyhow!("Failed to get latest block number: {e}"))
    }
}
