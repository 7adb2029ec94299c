//! Wrapper for the GovernanceBuilder contract.

use std::path::Path;

use alloy::dyn_abi::DynSolValue;
use alloy::providers::Provider;
use alloy::rpc::types::Filter;
use alloy_primitives::{Address, B256};
use tracing::info;

use crate::binding::Binding;
use crate::codec;
use crate::error::{ContractError, Result};
use crate::events::{self, TransactionOutcome};
use crate::provider::HttpProvider;

/// Addresses of the contract suite produced by one governance build.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContractSuite {
    pub governance: Address,
    pub storage: Address,
    pub meta: Address,
    pub timelock: Address,
}

/// Fluent client for the GovernanceBuilder contract.
///
/// A build produces a whole contract suite; the terminal
/// [`build`](Self::build) returns the governance address and
/// [`discover_contract`](Self::discover_contract) recovers the full suite
/// from a historical build transaction.
pub struct GovernanceBuilder {
    binding: Binding,
}

impl GovernanceBuilder {
    /// Descriptor file for this contract type.
    pub const DESCRIPTOR: &'static str = "GovernanceBuilder.json";

    /// Event emitted when a governance suite is created.
    const CREATED_EVENT: &'static str = "GovernanceContractCreated";

    /// Bind the builder at a deployed address.
    pub fn new(abi_dir: &Path, address: Address, provider: HttpProvider) -> Result<Self> {
        let binding = Binding::bind(abi_dir, Self::DESCRIPTOR, address, provider)?;
        Ok(Self { binding })
    }

    /// Get the contract name.
    pub async fn name(&self) -> Result<String> {
        codec::as_string(&self.binding.call_one("name", &[]).await?)
    }

    /// Get the contract version.
    pub async fn version(&self) -> Result<u64> {
        codec::as_u64(&self.binding.call_one("version", &[]).await?)
    }

    /// Reset the governance builder to its default state.
    pub async fn a_governance(&self) -> Result<&Self> {
        info!("aGovernance()");
        self.binding.send("aGovernance", &[]).await?;
        Ok(self)
    }

    /// Set the community name. Encoded to its fixed-width representation
    /// before transmission.
    pub async fn with_name(&self, name: &str) -> Result<&Self> {
        info!(name, "withName()");
        let encoded = codec::encode_short_name(name)?;
        self.binding
            .send("withName", &[DynSolValue::FixedBytes(encoded, 32)])
            .await?;
        Ok(self)
    }

    /// Set the community url.
    pub async fn with_url(&self, url: &str) -> Result<&Self> {
        info!(url, "withUrl()");
        self.binding
            .send("withUrl", &[DynSolValue::String(url.to_string())])
            .await?;
        Ok(self)
    }

    /// Set the community description.
    pub async fn with_description(&self, description: &str) -> Result<&Self> {
        info!(description, "withDescription()");
        self.binding
            .send(
                "withDescription",
                &[DynSolValue::String(description.to_string())],
            )
            .await?;
        Ok(self)
    }

    /// Add a community supervisor. May be called repeatedly; each supervisor
    /// is added.
    pub async fn with_supervisor(&self, supervisor: Address) -> Result<&Self> {
        info!(%supervisor, "withSupervisor()");
        self.binding
            .send("withSupervisor", &[DynSolValue::Address(supervisor)])
            .await?;
        Ok(self)
    }

    /// Set the community class contract address.
    pub async fn with_community_class_address(&self, community_class: Address) -> Result<&Self> {
        info!(%community_class, "withCommunityClassAddress()");
        self.binding
            .send(
                "withCommunityClassAddress",
                &[DynSolValue::Address(community_class)],
            )
            .await?;
        Ok(self)
    }

    /// Finalize the configured governance suite.
    ///
    /// Returns the governance address carried by the
    /// `GovernanceContractCreated` event.
    pub async fn build(&self) -> Result<Address> {
        info!("building governance");
        let outcome = self.binding.send("build", &[]).await?;
        let governance = self
            .binding
            .event_field(&outcome, Self::CREATED_EVENT, "governance")?;
        codec::as_address(&governance)
    }

    /// Recover the contract suite created by a previous build transaction.
    ///
    /// Queries the creation event over the block bearing the transaction.
    pub async fn discover_contract(&self, tx_hash: B256) -> Result<ContractSuite> {
        let tx = self
            .binding
            .provider()
            .get_transaction_by_hash(tx_hash)
            .await
            .map_err(|e| ContractError::Remote(format!("cannot fetch {tx_hash}: {e}")))?
            .ok_or_else(|| ContractError::Remote(format!("unknown transaction: {tx_hash}")))?;
        let block = tx.block_number.ok_or_else(|| {
            ContractError::Remote(format!("block not known for transaction: {tx_hash}"))
        })?;

        let event = self.binding.event(Self::CREATED_EVENT)?;
        let filter = Filter::new()
            .address(self.binding.address())
            .event_signature(event.selector())
            .from_block(block)
            .to_block(block);
        let logs = self
            .binding
            .provider()
            .get_logs(&filter)
            .await
            .map_err(|e| ContractError::Remote(format!("log query failed: {e}")))?;

        let outcome = TransactionOutcome::new(tx_hash, true, logs);
        let suite = ContractSuite {
            governance: codec::as_address(&events::extract_field(
                &outcome,
                event,
                "governance",
            )?)?,
            storage: codec::as_address(&events::extract_field(&outcome, event, "_storage")?)?,
            meta: codec::as_address(&events::extract_field(&outcome, event, "metaStorage")?)?,
            timelock: codec::as_address(&events::extract_field(&outcome, event, "timeLock")?)?,
        };
        info!(
            governance = %suite.governance,
            storage = %suite.storage,
            meta = %suite.meta,
            timelock = %suite.timelock,
            "discovered contract suite"
        );
        Ok(suite)
    }
}
