//! Wrapper for the TreasuryBuilder contract.

use std::path::Path;

use alloy::dyn_abi::DynSolValue;
use alloy_primitives::{Address, U256};
use tracing::info;

use crate::binding::Binding;
use crate::codec;
use crate::error::Result;
use crate::provider::HttpProvider;

/// Fluent client for the TreasuryBuilder contract.
pub struct TreasuryBuilder {
    binding: Binding,
}

impl TreasuryBuilder {
    /// Descriptor file for this contract type.
    pub const DESCRIPTOR: &'static str = "TreasuryBuilder.json";

    /// Bind the builder at a deployed address.
    pub fn new(abi_dir: &Path, address: Address, provider: HttpProvider) -> Result<Self> {
        let binding = Binding::bind(abi_dir, Self::DESCRIPTOR, address, provider)?;
        Ok(Self { binding })
    }

    /// Get the contract name.
    pub async fn name(&self) -> Result<String> {
        codec::as_string(&self.binding.call_one("name", &[]).await?)
    }

    /// Initialize a new treasury.
    pub async fn a_treasury(&self) -> Result<&Self> {
        info!("aTreasury()");
        self.binding.send("aTreasury", &[]).await?;
        Ok(self)
    }

    /// Set the minimum number of approvals required to execute a withdrawal.
    pub async fn with_minimum_approval_requirement(&self, approvals: u64) -> Result<&Self> {
        info!(approvals, "withMinimumApprovalRequirement()");
        self.binding
            .send(
                "withMinimumApprovalRequirement",
                &[DynSolValue::Uint(U256::from(approvals), 256)],
            )
            .await?;
        Ok(self)
    }

    /// Set the timelock delay for the treasury, in seconds.
    pub async fn with_time_lock_delay(&self, delay: u64) -> Result<&Self> {
        info!(delay, "withTimeLockDelay()");
        self.binding
            .send(
                "withTimeLockDelay",
                &[DynSolValue::Uint(U256::from(delay), 256)],
            )
            .await?;
        Ok(self)
    }

    /// Add an approver to the treasury.
    pub async fn with_approver(&self, approver: Address) -> Result<&Self> {
        info!(%approver, "withApprover()");
        self.binding
            .send("withApprover", &[DynSolValue::Address(approver)])
            .await?;
        Ok(self)
    }

    /// Finalize the configured treasury.
    ///
    /// Returns the address carried by the `TreasuryCreated` event.
    pub async fn build(&self) -> Result<Address> {
        info!("building treasury");
        let outcome = self.binding.send("build", &[]).await?;
        let treasury = self
            .binding
            .event_field(&outcome, "TreasuryCreated", "treasury")?;
        codec::as_address(&treasury)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::provider;
    use std::fs;

    const TEST_PRIVATE_KEY: &str =
        "0xac0974bec39a17e36ba4a6b4d238ff944bacb478cbed5efcae784d7bf4f2ff80";

    #[test]
    fn test_construction() {
        let dir = std::env::temp_dir().join(format!(
            "collective-treasurybuilder-test-{}",
            std::process::id()
        ));
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join(TreasuryBuilder::DESCRIPTOR), "[]").unwrap();
        let (provider, _) = provider::connect("http://localhost:8545", TEST_PRIVATE_KEY).unwrap();

        let builder = TreasuryBuilder::new(&dir, Address::repeat_byte(0x42), provider);
        assert!(builder.is_ok());
    }
}
