use alloy::{
    consensus::Transaction as _,
    primitives::{I256, U256},
    rpc::types::Transaction,
};

/// Fee fields of a transaction, classified by the fee market it was priced in.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TxFeeSchema {
    /// Pre-London pricing: the whole gas price is offered to the block producer.
    Legacy { gas_price: u128 },
    /// EIP-1559 pricing with an explicit tip cap and an absolute fee cap.
    DynamicFee {
        max_priority_fee_per_gas: u128,
        max_fee_per_gas: u128,
    },
    /// No recognised fee fields. Ranks with a priority fee of zero.
    Unknown,
}

impl TxFeeSchema {
    /// Classifies a transaction from the fee fields present on it.
    ///
    /// Both EIP-1559 caps must be present for the dynamic fee schema, otherwise
    /// a gas price makes it legacy. A transaction with neither is `Unknown`.
    pub fn classify(
        gas_price: Option<u128>,
        max_priority_fee_per_gas: Option<u128>,
        max_fee_per_gas: Option<u128>,
    ) -> Self {
        match (max_priority_fee_per_gas, max_fee_per_gas, gas_price) {
            (Some(max_priority_fee_per_gas), Some(max_fee_per_gas), _) => Self::DynamicFee {
                max_priority_fee_per_gas,
                max_fee_per_gas,
            },
            (_, _, Some(gas_price)) => Self::Legacy { gas_price },
            _ => Self::Unknown,
        }
    }

    /// Fee per gas the block producer receives on top of `base_fee`.
    ///
    /// Legacy transactions below the base fee give a negative value, which is kept
    /// as is so that they rank below every transaction paying a tip.
    pub fn priority_fee(&self, base_fee: u128) -> I256 {
        let base_fee = to_signed(base_fee);
        match *self {
            Self::DynamicFee {
                max_priority_fee_per_gas,
                max_fee_per_gas,
            } => to_signed(max_priority_fee_per_gas).min(to_signed(max_fee_per_gas) - base_fee),
            Self::Legacy { gas_price } => to_signed(gas_price) - base_fee,
            Self::Unknown => I256::ZERO,
        }
    }
}

impl From<&Transaction> for TxFeeSchema {
    fn from(tx: &Transaction) -> Self {
        let max_priority_fee_per_gas = tx.max_priority_fee_per_gas();
        // max_fee_per_gas falls back to the gas price on legacy envelopes,
        // so it only counts as present together with a tip cap
        let max_fee_per_gas = max_priority_fee_per_gas.map(|_| tx.max_fee_per_gas());
        Self::classify(tx.gas_price(), max_priority_fee_per_gas, max_fee_per_gas)
    }
}

// Every u128 fits in the positive half of I256, so the differences above never overflow.
fn to_signed(value: u128) -> I256 {
    I256::from_raw(U256::from(value))
}
