//! Wrapper for the vote Storage contract.

use std::path::Path;

use alloy::dyn_abi::DynSolValue;
use alloy_primitives::{Address, U256};

use crate::binding::Binding;
use crate::codec;
use crate::error::{ContractError, Result};
use crate::provider::HttpProvider;

/// The parameterization of one choice on a choice vote.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Choice {
    pub name: String,
    pub description: String,
    pub transaction_id: u64,
    pub vote_count: u64,
}

/// Read-only client for the vote Storage contract.
pub struct Storage {
    binding: Binding,
}

impl Storage {
    /// Descriptor file for this contract type.
    pub const DESCRIPTOR: &'static str = "Storage.json";

    /// Bind the storage contract at a deployed address.
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

    /// Get the quorum required for the vote to pass.
    pub async fn quorum_required(&self, proposal_id: u64) -> Result<u64> {
        self.read_u64("quorumRequired", proposal_id).await
    }

    /// Get the delay before voting opens, in seconds.
    pub async fn vote_delay(&self, proposal_id: u64) -> Result<u64> {
        self.read_u64("voteDelay", proposal_id).await
    }

    /// Get the voting duration, in seconds.
    pub async fn vote_duration(&self, proposal_id: u64) -> Result<u64> {
        self.read_u64("voteDuration", proposal_id).await
    }

    /// Get the vote start time, in epoch seconds.
    pub async fn start_time(&self, proposal_id: u64) -> Result<u64> {
        self.read_u64("startTime", proposal_id).await
    }

    /// Get the vote end time, in epoch seconds.
    pub async fn end_time(&self, proposal_id: u64) -> Result<u64> {
        self.read_u64("endTime", proposal_id).await
    }

    /// Get the winning choice for a choice vote.
    pub async fn get_winning_choice(&self, proposal_id: u64) -> Result<u64> {
        self.read_u64("getWinningChoice", proposal_id).await
    }

    /// Get the number of choices on a choice vote.
    pub async fn choice_count(&self, proposal_id: u64) -> Result<u64> {
        self.read_u64("choiceCount", proposal_id).await
    }

    /// Get the parameterization for a specific choice. The stored name is a
    /// short-name field and is decoded back to text.
    pub async fn get_choice(&self, proposal_id: u64, choice_id: u64) -> Result<Choice> {
        let values = self
            .binding
            .call(
                "getChoice",
                &[
                    DynSolValue::Uint(U256::from(proposal_id), 256),
                    DynSolValue::Uint(U256::from(choice_id), 256),
                ],
            )
            .await?;
        let [name, description, transaction_id, vote_count] = values.as_slice() else {
            return Err(ContractError::Decoding(format!(
                "getChoice returned {} values, expected four",
                values.len()
            )));
        };
        Ok(Choice {
            name: codec::decode_short_name(&codec::as_word(name)?)?,
            description: codec::as_string(description)?,
            transaction_id: codec::as_u64(transaction_id)?,
            vote_count: codec::as_u64(vote_count)?,
        })
    }

    async fn read_u64(&self, method: &str, proposal_id: u64) -> Result<u64> {
        let value = self
            .binding
            .call_one(method, &[DynSolValue::Uint(U256::from(proposal_id), 256)])
            .await?;
        codec::as_u64(&value)
    }
}
