use crate::block::BlockFees;
use alloy::primitives::I256;

/// Priority fees of a block in inclusion order, with the first place where
/// the order breaks.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OrderingReport {
    pub block_number: u64,
    pub fees: Vec<I256>,
    /// Index `i` such that `fees[i] < fees[i + 1]`, if any.
    pub first_violation: Option<usize>,
}

impl OrderingReport {
    pub fn new(block: &BlockFees) -> Self {
        let fees = block.priority_fees();
        // Equal neighbours are fine, only a rising fee breaks the order
        let first_violation = fees.windows(2).position(|pair| pair[0] < pair[1]);
        Self {
            block_number: block.number,
            fees,
            first_violation,
        }
    }

    pub fn is_ordered(&self) -> bool {
        self.first_violation.is_none()
    }
}

/// Returns true when the block's transactions are sorted by non-increasing
/// priority fee. An empty block is ordered.
pub fn is_ordered(block: &BlockFees) -> bool {
    OrderingReport::new(block).is_ordered()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fee::TxFeeSchema;

    fn legacy_block(base_fee: u128, gas_prices: &[u128]) -> BlockFees {
        BlockFees::new(
            1,
            Some(base_fee),
            gas_prices
                .iter()
                .map(|&gas_price| TxFeeSchema::Legacy { gas_price })
                .collect(),
        )
    }

    #[test]
    fn test_empty_block_is_ordered() {
        let block = BlockFees::new(1, Some(30), vec![]);
        assert!(is_ordered(&block));
        assert_eq!(OrderingReport::new(&block).first_violation, None);
    }

    #[test]
    fn test_single_transaction_is_ordered() {
        assert!(is_ordered(&legacy_block(30, &[10])));
    }

    #[test]
    fn test_ties_are_ordered() {
        assert!(is_ordered(&legacy_block(0, &[50, 50])));
        assert!(is_ordered(&legacy_block(0, &[70, 50, 50, 30, 30])));
    }

    #[test]
    fn test_rising_fee_is_a_violation() {
        let block = legacy_block(0, &[50, 70, 30]);
        assert!(!is_ordered(&block));

        let report = OrderingReport::new(&block);
        assert_eq!(report.first_violation, Some(0));
        assert!(!report.is_ordered());

        let report = OrderingReport::new(&legacy_block(0, &[90, 50, 50, 60]));
        assert_eq!(report.first_violation, Some(2));
    }

    #[test]
    fn test_mixed_schema_block() {
        let block = BlockFees::new(
            1,
            Some(20),
            vec![
                TxFeeSchema::Legacy { gas_price: 90 },
                TxFeeSchema::DynamicFee {
                    max_priority_fee_per_gas: 40,
                    max_fee_per_gas: 100,
                },
            ],
        );
        assert!(is_ordered(&block));

        let reversed = BlockFees {
            transactions: block.transactions.iter().rev().copied().collect(),
            ..block.clone()
        };
        assert!(!is_ordered(&reversed));
    }

    #[test]
    fn test_unknown_transaction_last_keeps_order() {
        let mut block = legacy_block(10, &[90, 50, 30]);
        block.transactions.push(TxFeeSchema::Unknown);
        assert!(is_ordered(&block));

        // Zero ranks above a legacy transaction paying less than the base fee
        block.transactions.push(TxFeeSchema::Legacy { gas_price: 5 });
        assert!(is_ordered(&block));

        block.transactions.insert(0, TxFeeSchema::Unknown);
        assert!(!is_ordered(&block));
    }

    #[test]
    fn test_verdict_depends_on_base_fee() {
        // 60 - 40 = 20 legacy tip against a dynamic tip capped at 10 by max fee
        let block = |base_fee| {
            BlockFees::new(
                1,
                Some(base_fee),
                vec![
                    TxFeeSchema::Legacy { gas_price: 60 },
                    TxFeeSchema::DynamicFee {
                        max_priority_fee_per_gas: 30,
                        max_fee_per_gas: 50,
                    },
                ],
            )
        };
        assert!(is_ordered(&block(40)));
        // 60 - 10 = 50 legacy tip against a dynamic tip of min(30, 40) = 30
        assert!(is_ordered(&block(10)));
        // 60 - 0 = 60 against min(70, 100) = 70
        let mut reordered = block(0);
        reordered.transactions[1] = TxFeeSchema::DynamicFee {
            max_priority_fee_per_gas: 70,
            max_fee_per_gas: 100,
        };
        assert!(!is_ordered(&reordered));
    }

    #[test]
    fn test_is_deterministic() {
        let block = legacy_block(5, &[50, 70, 30]);
        let first = OrderingReport::new(&block);
        for _ in 0..10 {
            assert_eq!(OrderingReport::new(&block), first);
        }
    }
}
