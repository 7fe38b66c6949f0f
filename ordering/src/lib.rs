// Priority fee ordering checks for execution layer blocks
pub mod block;
pub mod chain_reader;
pub mod fee;
pub mod verifier;

pub use block::BlockFees;
pub use chain_reader::{ChainReader, check_block, check_blocks, is_ordered_block};
pub use fee::TxFeeSchema;
pub use verifier::{OrderingReport, is_ordered};
