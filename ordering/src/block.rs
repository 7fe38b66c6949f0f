use crate::fee::TxFeeSchema;
use alloy::primitives::I256;

/// Fee view of a block: its base fee and the fee schema of every transaction,
/// in the order the block producer included them.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BlockFees {
    pub number: u64,
    /// Zero for blocks mined before the London fork.
    pub base_fee_per_gas: u128,
    pub transactions: Vec<TxFeeSchema>,
}

impl BlockFees {
    pub fn new(
        number: u64,
        base_fee_per_gas: Option<u128>,
        transactions: Vec<TxFeeSchema>,
    ) -> Self {
        Self {
            number,
            base_fee_per_gas: base_fee_per_gas.unwrap_or_default(),
            transactions,
        }
    }

    pub fn priority_fees(&self) -> Vec<I256> {
        self.transactions
            .iter()
            .map(|tx| tx.priority_fee(self.base_fee_per_gas))
            .collect()
    }
}
