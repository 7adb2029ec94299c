//! Entry point binding the whole contract suite.

use std::path::{Path, PathBuf};

use alloy_primitives::Address;

use crate::community_builder::CommunityBuilder;
use crate::error::Result;
use crate::governance::Governance;
use crate::governance_builder::GovernanceBuilder;
use crate::meta::Meta;
use crate::proposal_builder::ProposalBuilder;
use crate::provider::{self, HttpProvider};
use crate::storage::Storage;
use crate::treasury::Treasury;
use crate::treasury_builder::TreasuryBuilder;

/// Client for the Collective Governance contract suite.
///
/// Owns the descriptor directory and one wallet-backed provider, and vends
/// wrappers bound to deployed addresses. All wrappers created from one client
/// share the provider and signing credentials.
#[derive(Debug, Clone)]
pub struct Collective {
    abi_dir: PathBuf,
    provider: HttpProvider,
    signer_address: Address,
}

impl Collective {
    /// Connect to an RPC endpoint with signing credentials.
    ///
    /// An invalid private key or RPC url fails with
    /// [`crate::ContractError::Configuration`].
    pub fn new(abi_dir: impl Into<PathBuf>, rpc_url: &str, private_key: &str) -> Result<Self> {
        let (provider, signer_address) = provider::connect(rpc_url, private_key)?;
        Ok(Self {
            abi_dir: abi_dir.into(),
            provider,
            signer_address,
        })
    }

    /// The address transactions are signed with.
    pub fn signer_address(&self) -> Address {
        self.signer_address
    }

    /// The directory interface descriptors are loaded from.
    pub fn abi_dir(&self) -> &Path {
        &self.abi_dir
    }

    /// Bind a community builder at the given address.
    pub fn community_builder(&self, address: Address) -> Result<CommunityBuilder> {
        CommunityBuilder::new(&self.abi_dir, address, self.provider.clone())
    }

    /// Bind a governance builder at the given address.
    pub fn governance_builder(&self, address: Address) -> Result<GovernanceBuilder> {
        GovernanceBuilder::new(&self.abi_dir, address, self.provider.clone())
    }

    /// Bind a proposal builder at the given address.
    pub fn proposal_builder(&self, address: Address) -> Result<ProposalBuilder> {
        ProposalBuilder::new(&self.abi_dir, address, self.provider.clone())
    }

    /// Bind a treasury builder at the given address.
    pub fn treasury_builder(&self, address: Address) -> Result<TreasuryBuilder> {
        TreasuryBuilder::new(&self.abi_dir, address, self.provider.clone())
    }

    /// Bind a governance contract at the given address.
    pub fn governance(&self, address: Address) -> Result<Governance> {
        Governance::new(&self.abi_dir, address, self.provider.clone())
    }

    /// Bind a vote storage contract at the given address.
    pub fn storage(&self, address: Address) -> Result<Storage> {
        Storage::new(&self.abi_dir, address, self.provider.clone())
    }

    /// Bind a metadata storage contract at the given address.
    pub fn meta(&self, address: Address) -> Result<Meta> {
        Meta::new(&self.abi_dir, address, self.provider.clone())
    }

    /// Bind a treasury contract at the given address.
    pub fn treasury(&self, address: Address) -> Result<Treasury> {
        Treasury::new(&self.abi_dir, address, self.provider.clone())
    }
}
