pub mod chain_reader;
pub mod contract_reader;
