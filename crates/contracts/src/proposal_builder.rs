//! Wrapper for the ProposalBuilder contract.

use std::path::Path;

use alloy::dyn_abi::DynSolValue;
use alloy_primitives::{Address, Bytes, U256};
use tracing::info;

use crate::binding::Binding;
use crate::codec;
use crate::error::Result;
use crate::provider::HttpProvider;

/// Fluent client for the ProposalBuilder contract.
///
/// Unlike the other builders the terminal [`build`](Self::build) produces a
/// proposal id rather than an address.
pub struct ProposalBuilder {
    binding: Binding,
}

impl ProposalBuilder {
    /// Descriptor file for this contract type.
    pub const DESCRIPTOR: &'static str = "ProposalBuilder.json";

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

    /// Reset the proposal builder to its default state.
    pub async fn a_proposal(&self) -> Result<&Self> {
        info!("aProposal()");
        self.binding.send("aProposal", &[]).await?;
        Ok(self)
    }

    /// Add a choice to the proposal. The choice name is a short-name field.
    pub async fn with_choice(
        &self,
        name: &str,
        description: &str,
        transaction_id: u64,
    ) -> Result<&Self> {
        info!(name, description, transaction_id, "withChoice()");
        let encoded = codec::encode_short_name(name)?;
        self.binding
            .send(
                "withChoice",
                &[
                    DynSolValue::FixedBytes(encoded, 32),
                    DynSolValue::String(description.to_string()),
                    DynSolValue::Uint(U256::from(transaction_id), 256),
                ],
            )
            .await?;
        Ok(self)
    }

    /// Attach a transaction to the proposal.
    pub async fn with_transaction(
        &self,
        target: Address,
        value: U256,
        signature: &str,
        calldata: Bytes,
        schedule_time: u64,
    ) -> Result<&Self> {
        info!(%target, %value, signature, schedule_time, "withTransaction()");
        self.binding
            .send(
                "withTransaction",
                &[
                    DynSolValue::Address(target),
                    DynSolValue::Uint(value, 256),
                    DynSolValue::String(signature.to_string()),
                    DynSolValue::Bytes(calldata.to_vec()),
                    DynSolValue::Uint(U256::from(schedule_time), 256),
                ],
            )
            .await?;
        Ok(self)
    }

    /// Set the proposal description and url.
    pub async fn with_description(&self, description: &str, url: &str) -> Result<&Self> {
        info!(description, url, "withDescription()");
        self.binding
            .send(
                "withDescription",
                &[
                    DynSolValue::String(description.to_string()),
                    DynSolValue::String(url.to_string()),
                ],
            )
            .await?;
        Ok(self)
    }

    /// Attach named metadata to the proposal. The key is a short-name field.
    pub async fn with_meta(&self, name: &str, value: &str) -> Result<&Self> {
        info!(name, value, "withMeta()");
        let encoded = codec::encode_short_name(name)?;
        self.binding
            .send(
                "withMeta",
                &[
                    DynSolValue::FixedBytes(encoded, 32),
                    DynSolValue::String(value.to_string()),
                ],
            )
            .await?;
        Ok(self)
    }

    /// Set the quorum required for the proposal.
    pub async fn with_quorum(&self, quorum: u64) -> Result<&Self> {
        info!(quorum, "withQuorum()");
        self.binding
            .send("withQuorum", &[DynSolValue::Uint(U256::from(quorum), 256)])
            .await?;
        Ok(self)
    }

    /// Set the delay before voting starts, in epoch seconds.
    pub async fn with_delay(&self, delay: u64) -> Result<&Self> {
        info!(delay, "withDelay()");
        self.binding
            .send("withDelay", &[DynSolValue::Uint(U256::from(delay), 256)])
            .await?;
        Ok(self)
    }

    /// Set the voting duration, in epoch seconds.
    pub async fn with_duration(&self, duration: u64) -> Result<&Self> {
        info!(duration, "withDuration()");
        self.binding
            .send(
                "withDuration",
                &[DynSolValue::Uint(U256::from(duration), 256)],
            )
            .await?;
        Ok(self)
    }

    /// Finalize the configured proposal.
    ///
    /// Returns the id carried by the `ProposalBuild` event.
    pub async fn build(&self) -> Result<u64> {
        info!("building proposal");
        let outcome = self.binding.send("build", &[]).await?;
        let proposal_id = self
            .binding
            .event_field(&outcome, "ProposalBuild", "proposalId")?;
        codec::as_u64(&proposal_id)
    }
}
