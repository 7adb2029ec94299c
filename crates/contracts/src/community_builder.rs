//! Wrapper for the CommunityBuilder contract.

use std::path::Path;

use alloy::dyn_abi::DynSolValue;
use alloy_primitives::{Address, U256};
use tracing::info;

use crate::binding::Binding;
use crate::codec;
use crate::error::Result;
use crate::provider::HttpProvider;

/// Fluent client for the CommunityBuilder contract.
///
/// Configuration accumulates remotely; each call is independently confirmed
/// and the terminal [`build`](Self::build) extracts the created community
/// class address from the `CommunityClassCreated` event. Sequencing rules are
/// enforced by the contract, not locally.
pub struct CommunityBuilder {
    binding: Binding,
}

impl CommunityBuilder {
    /// Descriptor file for this contract type.
    pub const DESCRIPTOR: &'static str = "CommunityBuilder.json";

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

    /// Reset the community builder to its default state.
    pub async fn a_community(&self) -> Result<&Self> {
        info!("aCommunity()");
        self.binding.send("aCommunity", &[]).await?;
        Ok(self)
    }

    /// Configure an open community.
    pub async fn as_open_community(&self) -> Result<&Self> {
        info!("asOpenCommunity()");
        self.binding.send("asOpenCommunity", &[]).await?;
        Ok(self)
    }

    /// Configure a pool community.
    pub async fn as_pool_community(&self) -> Result<&Self> {
        info!("asPoolCommunity()");
        self.binding.send("asPoolCommunity", &[]).await?;
        Ok(self)
    }

    /// Configure an ERC-721 community for the given token project.
    pub async fn as_erc721_community(&self, project: Address) -> Result<&Self> {
        info!(%project, "asErc721Community()");
        self.binding
            .send("asErc721Community", &[DynSolValue::Address(project)])
            .await?;
        Ok(self)
    }

    /// Configure a closed ERC-721 community requiring a token threshold to
    /// propose.
    pub async fn as_closed_erc721_community(
        &self,
        project: Address,
        token_threshold: u64,
    ) -> Result<&Self> {
        info!(%project, token_threshold, "asClosedErc721Community()");
        self.binding
            .send(
                "asClosedErc721Community",
                &[
                    DynSolValue::Address(project),
                    DynSolValue::Uint(U256::from(token_threshold), 256),
                ],
            )
            .await?;
        Ok(self)
    }

    /// Append an authorized voter for a pool community.
    pub async fn with_voter(&self, voter: Address) -> Result<&Self> {
        info!(%voter, "withVoter()");
        self.binding
            .send("withVoter", &[DynSolValue::Address(voter)])
            .await?;
        Ok(self)
    }

    /// Set the voting weight for each authorized voter.
    pub async fn with_weight(&self, weight: u64) -> Result<&Self> {
        info!(weight, "withWeight()");
        self.binding
            .send("withWeight", &[DynSolValue::Uint(U256::from(weight), 256)])
            .await?;
        Ok(self)
    }

    /// Set the minimum quorum for the community.
    pub async fn with_quorum(&self, quorum: u64) -> Result<&Self> {
        info!(quorum, "withQuorum()");
        self.binding
            .send("withQuorum", &[DynSolValue::Uint(U256::from(quorum), 256)])
            .await?;
        Ok(self)
    }

    /// Set the minimum vote delay, in epoch seconds.
    pub async fn with_minimum_vote_delay(&self, delay: u64) -> Result<&Self> {
        info!(delay, "withMinimumVoteDelay()");
        self.binding
            .send(
                "withMinimumVoteDelay",
                &[DynSolValue::Uint(U256::from(delay), 256)],
            )
            .await?;
        Ok(self)
    }

    /// Set the maximum vote delay, in epoch seconds.
    pub async fn with_maximum_vote_delay(&self, delay: u64) -> Result<&Self> {
        info!(delay, "withMaximumVoteDelay()");
        self.binding
            .send(
                "withMaximumVoteDelay",
                &[DynSolValue::Uint(U256::from(delay), 256)],
            )
            .await?;
        Ok(self)
    }

    /// Set the minimum vote duration, in epoch seconds.
    pub async fn with_minimum_vote_duration(&self, duration: u64) -> Result<&Self> {
        info!(duration, "withMinimumVoteDuration()");
        self.binding
            .send(
                "withMinimumVoteDuration",
                &[DynSolValue::Uint(U256::from(duration), 256)],
            )
            .await?;
        Ok(self)
    }

    /// Set the maximum vote duration, in epoch seconds.
    pub async fn with_maximum_vote_duration(&self, duration: u64) -> Result<&Self> {
        info!(duration, "withMaximumVoteDuration()");
        self.binding
            .send(
                "withMaximumVoteDuration",
                &[DynSolValue::Uint(U256::from(duration), 256)],
            )
            .await?;
        Ok(self)
    }

    /// Finalize the configured community class.
    ///
    /// Returns the address carried by the `CommunityClassCreated` event; a
    /// confirmed transaction that lacks the event is a build failure.
    pub async fn build(&self) -> Result<Address> {
        info!("building community class");
        let outcome = self.binding.send("build", &[]).await?;
        let class = self
            .binding
            .event_field(&outcome, "CommunityClassCreated", "class")?;
        codec::as_address(&class)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ContractError;
    use crate::provider;
    use std::fs;

    const TEST_PRIVATE_KEY: &str =
        "0xac0974bec39a17e36ba4a6b4d238ff944bacb478cbed5efcae784d7bf4f2ff80";

    #[test]
    fn test_construction_requires_descriptor() {
        let dir = std::env::temp_dir().join(format!(
            "collective-community-test-{}",
            std::process::id()
        ));
        fs::create_dir_all(&dir).unwrap();
        let (provider, _) = provider::connect("http://localhost:8545", TEST_PRIVATE_KEY).unwrap();

        let result = CommunityBuilder::new(&dir, Address::repeat_byte(0x42), provider.clone());
        assert!(matches!(result, Err(ContractError::Configuration(_))));

        fs::write(dir.join(CommunityBuilder::DESCRIPTOR), "[]").unwrap();
        let result = CommunityBuilder::new(&dir, Address::repeat_byte(0x42), provider);
        assert!(result.is_ok());
    }
}
