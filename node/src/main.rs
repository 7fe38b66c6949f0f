mod cli;

use anyhow::Error;
use clap::Parser;
use cli::Args;
use common::{
    l1::{
        chain_reader::RpcChainReader,
        contract_reader::{self, ContractReader},
    },
    shared::alloy_tools::create_alloy_provider_without_wallet,
    utils::config::{Config, ContractConfig},
};
use ordering::{ChainReader, OrderingReport, check_blocks};
use rand::Rng;
use tracing::{error, info, warn};

#[tokio::main]
async fn main() -> Result<(), Error> {
    common::utils::logging::init_logging();

    info!(
        "🚀 Starting block ordering checker v{}",
        env!("CARGO_PKG_VERSION")
    );

    let args = Args::parse();
    let config = Config::read_env_variables()?;

    let chain_reader = RpcChainReader::new(&config.execution_rpc_url).await?;
    let latest_block = chain_reader.get_latest_block_number().await?;
    if latest_block <= config.london_fork_block {
        return Err(anyhow::anyhow!(
            "The chain never got past the London hard fork: latest block {latest_block}, fork block {}",
            config.london_fork_block
        ));
    }

    let block_numbers = if args.blocks.is_empty() {
        let samples = args.samples.unwrap_or(config.sample_blocks);
        sample_block_numbers(&mut rand::rng(), samples, latest_block)
    } else {
        args.blocks
    };

    info!(
        "Checking {} blocks, latest block {latest_block}",
        block_numbers.len()
    );
    for (block_number, result) in check_blocks(&chain_reader, &block_numbers).await {
        match result {
            Ok(report) => info!("{}", describe(&report)),
            Err(e) => error!("Failed to check block {block_number}: {e}"),
        }
    }

    if let Some(contract_config) = &config.contract {
        read_contract_values(contract_config).await?;
    }

    Ok(())
}

fn sample_block_numbers(rng: &mut impl Rng, samples: u64, latest_block: u64) -> Vec<u64> {
    (0..samples)
        .map(|_| rng.random_range(1..=latest_block))
        .collect()
}

fn describe(report: &OrderingReport) -> String {
    match report.first_violation {
        None => format!("Block {} is ordered", report.block_number),
        Some(index) => format!(
            "Block {} is not ordered: transaction {} pays {} but transaction {} pays {}",
            report.block_number,
            index,
            report.fees[index],
            index + 1,
            report.fees[index + 1]
        ),
    }
}

async fn read_contract_values(config: &ContractConfig) -> Result<(), Error> {
    let abi = contract_reader::load_abi(&config.abi_path)?;
    let provider = create_alloy_provider_without_wallet(&config.rpc_url).await?;
    let reader = ContractReader::new(provider, config.address, abi);

    let values = reader
        .contract_values(config.admin_address, config.owner_address)
        .await?;
    match values.merkle_root {
        Some(root) => info!("Contract {} merkle root: {root}", config.address),
        None => warn!("Contract {} has no merkle root", config.address),
    }
    info!(
        "Admin {} has default admin role: {}",
        config.admin_address, values.has_role
    );
    info!("Prime of owner {}: {}", config.owner_address, values.prime);

    Ok(())
}
