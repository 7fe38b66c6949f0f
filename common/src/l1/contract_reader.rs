use alloy::{
    contract::{ContractInstance, Interface},
    dyn_abi::DynSolValue,
    json_abi::JsonAbi,
    primitives::{Address, B256, U256},
    providers::DynProvider,
};
use anyhow::Error;
use serde_json::Value;
use std::path::Path;
use tracing::{debug, warn};

/// Values read from the contract for one admin and one owner address.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContractValues {
    pub merkle_root: Option<B256>,
    pub has_role: bool,
    pub prime: U256,
}

/// Reads an ABI file holding either a raw ABI array or a build artifact with an `abi` key.
pub fn load_abi(path: &Path) -> Result<JsonAbi, Error> {
    let data = std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read ABI file {}: {e}", path.display()))?;
    parse_abi(&data)
}

pub fn parse_abi(data: &str) -> Result<JsonAbi, Error> {
    let abi = match serde_json::from_str::<Value>(data)? {
        abi @ Value::Array(_) => abi,
        Value::Object(mut artifact) => artifact
            .remove("abi")
            .ok_or_else(|| anyhow::anyhow!("ABI not found or improperly formatted"))?,
        _ => return Err(anyhow::anyhow!("ABI not found or improperly formatted")),
    };
    serde_json::from_value(abi).map_err(|e| anyhow::anyhow!("Failed to parse ABI: {e}"))
}

pub struct ContractReader {
    contract: ContractInstance<DynProvider>,
}

impl ContractReader {
    pub fn new(provider: DynProvider, address: Address, abi: JsonAbi) -> Self {
        Self {
            contract: ContractInstance::new(address, provider, Interface::new(abi)),
        }
    }

    pub async fn default_admin_role(&self) -> Result<B256, Error> {
        let output = self
            .contract
            .function("DEFAULT_ADMIN_ROLE", &[])?
            .call()
            .await
            .map_err(|e| anyhow::anyhow!("Failed to call DEFAULT_ADMIN_ROLE: {e}"))?;
        first_word(&output)
            .ok_or_else(|| anyhow::anyhow!("DEFAULT_ADMIN_ROLE did not return a bytes32 value"))
    }

    pub async fn has_role(&self, role: B256, account: Address) -> Option<bool> {
        let output = self
            .call_optional(
                "hasRole",
                &[DynSolValue::FixedBytes(role, 32), DynSolValue::Address(account)],
            )
            .await?;
        output.first()?.as_bool()
    }

    pub async fn prime_by_owner(&self, owner: Address) -> Option<U256> {
        let output = self
            .call_optional("getPrimeByOwner", &[DynSolValue::Address(owner)])
            .await?;
        output.first()?.as_uint().map(|(prime, _)| prime)
    }

    pub async fn merkle_root(&self) -> Option<B256> {
        let output = self.call_optional("merkleRoot", &[]).await?;
        first_word(&output)
    }

    /// Reads the merkle root, whether `admin` holds the default admin role and
    /// the prime registered for `owner`. Functions the contract does not offer
    /// fall back to `None`, `false` and zero.
    pub async fn contract_values(
        &self,
        admin: Address,
        owner: Address,
    ) -> Result<ContractValues, Error> {
        let default_admin_role = self.default_admin_role().await?;

        Ok(ContractValues {
            has_role: self
                .has_role(default_admin_role, admin)
                .await
                .unwrap_or(false),
            prime: self.prime_by_owner(owner).await.unwrap_or(U256::ZERO),
            merkle_root: self.merkle_root().await,
        })
    }

    /// Calls `name` if the ABI declares it. A missing function, a revert or a
    /// transport error all yield `None`.
    async fn call_optional(&self, name: &str, args: &[DynSolValue]) -> Option<Vec<DynSolValue>> {
        let call = match self.contract.function(name, args) {
            Ok(call) => call,
            Err(e) => {
                debug!("Contract function {name} is not available: {e}");
                return None;
            }
        };
        call.call()
            .await
            .inspect_err(|e| warn!("Call to {name} failed: {e}"))
            .ok()
    }
}

fn first_word(output: &[DynSolValue]) -> Option<B256> {
    match output.first()? {
        DynSolValue::FixedBytes(word, 32) => Some(*word),
        _ => None,
    }
}
