//! Wrapper for the Governance contract and its vote strategy surface.

use std::path::Path;

use alloy::dyn_abi::DynSolValue;
use alloy_primitives::{Address, Bytes, U256};
use tracing::{debug, info};

use crate::binding::Binding;
use crate::codec;
use crate::error::Result;
use crate::provider::HttpProvider;

/// Client for the Governance contract.
///
/// The deployed contract answers both the governance interface and the vote
/// strategy interface at the same address, so two descriptors are bound to
/// one address.
pub struct Governance {
    binding: Binding,
    strategy: Binding,
}

impl Governance {
    /// Descriptor file for the governance interface.
    pub const DESCRIPTOR: &'static str = "Governance.json";
    /// Descriptor file for the vote strategy interface.
    pub const STRATEGY_DESCRIPTOR: &'static str = "VoteStrategy.json";

    /// Bind the governance contract at a deployed address.
    pub fn new(abi_dir: &Path, address: Address, provider: HttpProvider) -> Result<Self> {
        let binding = Binding::bind(abi_dir, Self::DESCRIPTOR, address, provider.clone())?;
        let strategy = Binding::bind(abi_dir, Self::STRATEGY_DESCRIPTOR, address, provider)?;
        Ok(Self { binding, strategy })
    }

    /// Get the contract name.
    pub async fn name(&self) -> Result<String> {
        codec::as_string(&self.binding.call_one("name", &[]).await?)
    }

    /// Get the contract version.
    pub async fn version(&self) -> Result<u64> {
        codec::as_u64(&self.binding.call_one("version", &[]).await?)
    }

    /// Propose a new vote.
    ///
    /// Returns the id carried by the `ProposalCreated` event.
    pub async fn propose(&self) -> Result<u64> {
        debug!("propose new vote");
        let outcome = self.binding.send("propose", &[]).await?;
        let proposal_id = self
            .binding
            .event_field(&outcome, "ProposalCreated", "proposalId")?;
        codec::as_u64(&proposal_id)
    }

    /// Set a choice for a choice vote. The attached transaction executes if
    /// the choice wins.
    ///
    /// Returns the choice id carried by the `ProposalChoice` event.
    pub async fn add_choice(
        &self,
        proposal_id: u64,
        name: &str,
        description: &str,
        transaction_id: u64,
    ) -> Result<u64> {
        info!(proposal_id, name, description, transaction_id, "setChoice()");
        let encoded = codec::encode_short_name(name)?;
        let outcome = self
            .binding
            .send(
                "setChoice",
                &[
                    DynSolValue::Uint(U256::from(proposal_id), 256),
                    DynSolValue::FixedBytes(encoded, 32),
                    DynSolValue::String(description.to_string()),
                    DynSolValue::Uint(U256::from(transaction_id), 256),
                ],
            )
            .await?;
        let choice_id = self
            .binding
            .event_field(&outcome, "ProposalChoice", "_choiceId")?;
        codec::as_u64(&choice_id)
    }

    /// Attach a transaction to the vote.
    ///
    /// Returns the id carried by the `ProposalTransactionAttached` event.
    pub async fn attach_transaction(
        &self,
        proposal_id: u64,
        target: Address,
        value: U256,
        signature: &str,
        calldata: Bytes,
        eta_of_lock: u64,
    ) -> Result<u64> {
        debug!(proposal_id, %target, %value, signature, eta_of_lock, "attachTransaction()");
        let outcome = self
            .binding
            .send(
                "attachTransaction",
                &[
                    DynSolValue::Uint(U256::from(proposal_id), 256),
                    DynSolValue::Address(target),
                    DynSolValue::Uint(value, 256),
                    DynSolValue::String(signature.to_string()),
                    DynSolValue::Bytes(calldata.to_vec()),
                    DynSolValue::Uint(U256::from(eta_of_lock), 256),
                ],
            )
            .await?;
        let transaction_id =
            self.binding
                .event_field(&outcome, "ProposalTransactionAttached", "transactionId")?;
        codec::as_u64(&transaction_id)
    }

    /// Configure the specified vote with a minimum quorum.
    pub async fn configure(&self, proposal_id: u64, quorum: u64) -> Result<()> {
        debug!(proposal_id, quorum, "configure()");
        self.binding
            .send(
                "configure",
                &[
                    DynSolValue::Uint(U256::from(proposal_id), 256),
                    DynSolValue::Uint(U256::from(quorum), 256),
                ],
            )
            .await?;
        Ok(())
    }

    /// Configure the specified vote with quorum and delay settings.
    pub async fn configure_with_delay(
        &self,
        proposal_id: u64,
        quorum: u64,
        required_delay: u64,
        required_duration: u64,
    ) -> Result<()> {
        debug!(
            proposal_id,
            quorum, required_delay, required_duration, "configure()"
        );
        self.binding
            .send(
                "configure",
                &[
                    DynSolValue::Uint(U256::from(proposal_id), 256),
                    DynSolValue::Uint(U256::from(quorum), 256),
                    DynSolValue::Uint(U256::from(required_delay), 256),
                    DynSolValue::Uint(U256::from(required_duration), 256),
                ],
            )
            .await?;
        Ok(())
    }

    /// True if the vote is open.
    pub async fn is_open(&self, proposal_id: u64) -> Result<bool> {
        let value = self
            .binding
            .call_one("isOpen", &[DynSolValue::Uint(U256::from(proposal_id), 256)])
            .await?;
        codec::as_bool(&value)
    }

    /// Start voting.
    pub async fn start_vote(&self, proposal_id: u64) -> Result<()> {
        debug!(proposal_id, "startVote()");
        self.binding
            .send(
                "startVote",
                &[DynSolValue::Uint(U256::from(proposal_id), 256)],
            )
            .await?;
        Ok(())
    }

    /// End voting.
    pub async fn end_vote(&self, proposal_id: u64) -> Result<()> {
        debug!(proposal_id, "endVote()");
        self.binding
            .send("endVote", &[DynSolValue::Uint(U256::from(proposal_id), 256)])
            .await?;
        Ok(())
    }

    /// Cancel a vote before it starts.
    pub async fn cancel(&self, proposal_id: u64) -> Result<()> {
        debug!(proposal_id, "cancel()");
        self.binding
            .send("cancel", &[DynSolValue::Uint(U256::from(proposal_id), 256)])
            .await?;
        Ok(())
    }

    /// Veto the specified proposal.
    pub async fn veto(&self, proposal_id: u64) -> Result<()> {
        debug!(proposal_id, "veto()");
        self.strategy
            .send("veto", &[DynSolValue::Uint(U256::from(proposal_id), 256)])
            .await?;
        Ok(())
    }

    /// Vote in favor with all shares.
    pub async fn vote_for(&self, proposal_id: u64) -> Result<()> {
        debug!(proposal_id, "voteFor()");
        self.strategy
            .send("voteFor", &[DynSolValue::Uint(U256::from(proposal_id), 256)])
            .await?;
        Ok(())
    }

    /// Vote in favor with the named token.
    pub async fn vote_for_with_token(&self, proposal_id: u64, token_id: u64) -> Result<()> {
        debug!(proposal_id, token_id, "voteFor()");
        self.strategy
            .send(
                "voteFor",
                &[
                    DynSolValue::Uint(U256::from(proposal_id), 256),
                    DynSolValue::Uint(U256::from(token_id), 256),
                ],
            )
            .await?;
        Ok(())
    }

    /// Vote for a specific choice with all shares.
    pub async fn vote_choice(&self, proposal_id: u64, choice_id: u64) -> Result<()> {
        debug!(proposal_id, choice_id, "voteChoice()");
        self.strategy
            .send(
                "voteChoice",
                &[
                    DynSolValue::Uint(U256::from(proposal_id), 256),
                    DynSolValue::Uint(U256::from(choice_id), 256),
                ],
            )
            .await?;
        Ok(())
    }

    /// Vote against with all shares.
    pub async fn vote_against(&self, proposal_id: u64) -> Result<()> {
        debug!(proposal_id, "voteAgainst()");
        self.strategy
            .send(
                "voteAgainst",
                &[DynSolValue::Uint(U256::from(proposal_id), 256)],
            )
            .await?;
        Ok(())
    }

    /// Vote against with the named token.
    pub async fn vote_against_with_token(&self, proposal_id: u64, token_id: u64) -> Result<()> {
        debug!(proposal_id, token_id, "voteAgainst()");
        self.strategy
            .send(
                "voteAgainst",
                &[
                    DynSolValue::Uint(U256::from(proposal_id), 256),
                    DynSolValue::Uint(U256::from(token_id), 256),
                ],
            )
            .await?;
        Ok(())
    }

    /// Abstain with all shares.
    pub async fn abstain_from(&self, proposal_id: u64) -> Result<()> {
        debug!(proposal_id, "abstainFrom()");
        self.strategy
            .send(
                "abstainFrom",
                &[DynSolValue::Uint(U256::from(proposal_id), 256)],
            )
            .await?;
        Ok(())
    }

    /// Abstain with the named token.
    pub async fn abstain_with_token(&self, proposal_id: u64, token_id: u64) -> Result<()> {
        debug!(proposal_id, token_id, "abstainFrom()");
        self.strategy
            .send(
                "abstainFrom",
                &[
                    DynSolValue::Uint(U256::from(proposal_id), 256),
                    DynSolValue::Uint(U256::from(token_id), 256),
                ],
            )
            .await?;
        Ok(())
    }

    /// True if the given vote succeeded.
    pub async fn vote_succeeded(&self, proposal_id: u64) -> Result<bool> {
        let value = self
            .strategy
            .call_one(
                "getVoteSucceeded",
                &[DynSolValue::Uint(U256::from(proposal_id), 256)],
            )
            .await?;
        codec::as_bool(&value)
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
    fn test_construction_requires_both_descriptors() {
        let dir = std::env::temp_dir().join(format!(
            "collective-governance-test-{}",
            std::process::id()
        ));
        fs::create_dir_all(&dir).unwrap();
        let (provider, _) = provider::connect("http://localhost:8545", TEST_PRIVATE_KEY).unwrap();

        fs::write(dir.join(Governance::DESCRIPTOR), "[]").unwrap();
        let result = Governance::new(&dir, Address::repeat_byte(0x42), provider.clone());
        assert!(matches!(result, Err(ContractError::Configuration(_))));

        fs::write(dir.join(Governance::STRATEGY_DESCRIPTOR), "[]").unwrap();
        let result = Governance::new(&dir, Address::repeat_byte(0x42), provider);
        assert!(result.is_ok());
    }
}
