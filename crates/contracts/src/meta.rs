//! Wrapper for the MetaStorage contract.

use std::path::Path;

use alloy::dyn_abi::DynSolValue;
use alloy_primitives::{Address, U256};

use crate::binding::Binding;
use crate::codec;
use crate::error::{ContractError, Result};
use crate::provider::HttpProvider;

/// One element of arbitrary metadata stored on a proposal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetaValue {
    pub name: String,
    pub value: String,
}

/// Read-only client for the MetaStorage contract.
pub struct Meta {
    binding: Binding,
}

impl Meta {
    /// Descriptor file for this contract type.
    pub const DESCRIPTOR: &'static str = "MetaStorage.json";

    /// Bind the metadata store at a deployed address.
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

    /// Get the community name, decoded from its fixed-width representation.
    pub async fn community(&self) -> Result<String> {
        let word = codec::as_word(&self.binding.call_one("community", &[]).await?)?;
        codec::decode_short_name(&word)
    }

    /// Get the community description.
    pub async fn description(&self) -> Result<String> {
        codec::as_string(&self.binding.call_one("description", &[]).await?)
    }

    /// Get the community url.
    pub async fn url(&self) -> Result<String> {
        codec::as_string(&self.binding.call_one("url", &[]).await?)
    }

    /// Get the description of a vote by id.
    pub async fn get_description(&self, proposal_id: u64) -> Result<String> {
        let value = self
            .binding
            .call_one(
                "description",
                &[DynSolValue::Uint(U256::from(proposal_id), 256)],
            )
            .await?;
        codec::as_string(&value)
    }

    /// Get the url of a vote by id.
    pub async fn get_url(&self, proposal_id: u64) -> Result<String> {
        let value = self
            .binding
            .call_one("url", &[DynSolValue::Uint(U256::from(proposal_id), 256)])
            .await?;
        codec::as_string(&value)
    }

    /// Get one metadata element stored on a vote. The stored name is a
    /// short-name field and is decoded back to text.
    pub async fn get(&self, proposal_id: u64, meta_id: u64) -> Result<MetaValue> {
        let values = self
            .binding
            .call(
                "get",
                &[
                    DynSolValue::Uint(U256::from(proposal_id), 256),
                    DynSolValue::Uint(U256::from(meta_id), 256),
                ],
            )
            .await?;
        let [name, value] = values.as_slice() else {
            return Err(ContractError::Decoding(format!(
                "get returned {} values, expected two",
                values.len()
            )));
        };
        Ok(MetaValue {
            name: codec::decode_short_name(&codec::as_word(name)?)?,
            value: codec::as_string(value)?,
        })
    }

    /// Get the number of metadata elements stored on a vote.
    pub async fn meta_count(&self, proposal_id: u64) -> Result<u64> {
        let value = self
            .binding
            .call_one(
                "metaCount",
                &[DynSolValue::Uint(U256::from(proposal_id), 256)],
            )
            .await?;
        codec::as_u64(&value)
    }
}
