use alloy::primitives::Address;
use anyhow::Error;
use std::{path::PathBuf, str::FromStr};
use tracing::info;

const DEFAULT_LONDON_FORK_BLOCK: u64 = 12965000;
const DEFAULT_SAMPLE_BLOCKS: u64 = 5;

#[derive(Clone, Debug)]
pub struct Config {
    pub execution_rpc_url: String,
    pub london_fork_block: u64,
    pub sample_blocks: u64,
    pub contract: Option<ContractConfig>,
}

/// Contract whose on-chain values are read after the blocks are checked.
#[derive(Clone, Debug)]
pub struct ContractConfig {
    pub rpc_url: String,
    pub address: Address,
    pub abi_path: PathBuf,
    pub admin_address: Address,
    pub owner_address: Address,
}

impl Config {
    pub fn read_env_variables() -> Result<Self, Error> {
        // Load environment variables from .env file
        dotenvy::dotenv().ok();

        let config = Self::from_lookup(|name| std::env::var(name).ok())?;

        info!(
            "Startup config:\nexecution_rpc_url: {}\nlondon_fork_block: {}\nsample_blocks: {}\ncontract: {}",
            config.execution_rpc_url,
            config.london_fork_block,
            config.sample_blocks,
            config
                .contract
                .as_ref()
                .map_or("not configured".to_string(), |c| format!(
                    "{} via {} (abi: {})",
                    c.address,
                    c.rpc_url,
                    c.abi_path.display()
                )),
        );

        Ok(config)
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, Error> {
        let execution_rpc_url = lookup("EXECUTION_RPC_URL")
            .ok_or_else(|| anyhow::anyhow!("EXECUTION_RPC_URL env var not found"))?;

        let london_fork_block = lookup("LONDON_FORK_BLOCK")
            .unwrap_or(DEFAULT_LONDON_FORK_BLOCK.to_string())
            .parse::<u64>()
            .map_err(|_| anyhow::anyhow!("LONDON_FORK_BLOCK must be a number"))?;

        let sample_blocks = lookup("SAMPLE_BLOCKS")
            .unwrap_or(DEFAULT_SAMPLE_BLOCKS.to_string())
            .parse::<u64>()
            .map_err(|_| anyhow::anyhow!("SAMPLE_BLOCKS must be a number"))
            .and_then(|val| {
                if val == 0 {
                    return Err(anyhow::anyhow!("SAMPLE_BLOCKS must be a positive number"));
                }
                Ok(val)
            })?;

        let contract = match lookup("CONTRACT_ADDRESS") {
            Some(address) => Some(ContractConfig::from_lookup(&address, &lookup)?),
            None => None,
        };

        Ok(Self {
            execution_rpc_url,
            london_fork_block,
            sample_blocks,
            contract,
        })
    }
}

impl ContractConfig {
    fn from_lookup(
        address: &str,
        lookup: &impl Fn(&str) -> Option<String>,
    ) -> Result<Self, Error> {
        let required = |name: &str| {
            lookup(name).ok_or_else(|| {
                anyhow::anyhow!("{name} env var not found, it is required with CONTRACT_ADDRESS")
            })
        };
        let parse_address = |name: &str, value: &str| {
            Address::from_str(value)
                .map_err(|e| anyhow::anyhow!("{name} is not a valid address: {e}"))
        };

        Ok(Self {
            rpc_url: required("CONTRACT_RPC_URL")?,
            address: parse_address("CONTRACT_ADDRESS", address)?,
            abi_path: PathBuf::from(required("CONTRACT_ABI_PATH")?),
            admin_address: parse_address("ADMIN_ADDRESS", &required("ADMIN_ADDRESS")?)?,
            owner_address: parse_address("OWNER_ADDRESS", &required("OWNER_ADDRESS")?)?,
        })
    }
}
