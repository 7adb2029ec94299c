//! Wrapper for the Treasury (Vault) contract.

use std::path::Path;

use alloy::dyn_abi::DynSolValue;
use alloy_primitives::{Address, Bytes, U256};
use tracing::info;

use crate::binding::Binding;
use crate::codec;
use crate::error::Result;
use crate::provider::HttpProvider;

/// Client for the Treasury contract.
///
/// Withdrawals are approved by a quorum of approvers, optionally in a single
/// transaction via [`approve_multi`](Self::approve_multi) with off-chain
/// signatures (see [`crate::signature`]).
pub struct Treasury {
    binding: Binding,
}

impl Treasury {
    /// Descriptor file for this contract type.
    pub const DESCRIPTOR: &'static str = "Vault.json";

    /// Bind the treasury at a deployed address.
    pub fn new(abi_dir: &Path, address: Address, provider: HttpProvider) -> Result<Self> {
        let binding = Binding::bind(abi_dir, Self::DESCRIPTOR, address, provider)?;
        Ok(Self { binding })
    }

    /// Deposit funds into the treasury.
    pub async fn deposit(&self, quantity: U256) -> Result<()> {
        info!(%quantity, "deposit()");
        self.binding
            .send_with_value("deposit", &[], quantity)
            .await?;
        Ok(())
    }

    /// Approve a withdrawal to the recipient.
    pub async fn approve(&self, to: Address, quantity: U256) -> Result<()> {
        info!(%to, %quantity, "approve()");
        self.binding
            .send(
                "approve",
                &[DynSolValue::Address(to), DynSolValue::Uint(quantity, 256)],
            )
            .await?;
        Ok(())
    }

    /// Approve a withdrawal and submit the collected approval signatures in a
    /// single transaction.
    pub async fn approve_multi(
        &self,
        to: Address,
        quantity: U256,
        schedule_time: u64,
        signatures: Vec<Bytes>,
    ) -> Result<()> {
        info!(%to, %quantity, schedule_time, signatures = signatures.len(), "approveMulti()");
        let signatures = signatures
            .into_iter()
            .map(|s| DynSolValue::Bytes(s.to_vec()))
            .collect();
        self.binding
            .send(
                "approveMulti",
                &[
                    DynSolValue::Address(to),
                    DynSolValue::Uint(quantity, 256),
                    DynSolValue::Uint(U256::from(schedule_time), 256),
                    DynSolValue::Array(signatures),
                ],
            )
            .await?;
        Ok(())
    }

    /// Withdraw available funds to the signer's account.
    pub async fn pay(&self) -> Result<()> {
        info!("pay()");
        self.binding.send("pay", &[]).await?;
        Ok(())
    }

    /// Withdraw available funds to the specified account.
    pub async fn transfer_to(&self, to: Address) -> Result<()> {
        info!(%to, "transferTo()");
        self.binding
            .send("transferTo", &[DynSolValue::Address(to)])
            .await?;
        Ok(())
    }

    /// Cancel the approval for the recipient.
    pub async fn cancel(&self, to: Address) -> Result<()> {
        info!(%to, "cancel()");
        self.binding
            .send("cancel", &[DynSolValue::Address(to)])
            .await?;
        Ok(())
    }

    /// Get the approved balance for the specified account.
    pub async fn balance(&self, account: Address) -> Result<U256> {
        let value = self
            .binding
            .call_one("balance", &[DynSolValue::Address(account)])
            .await?;
        codec::as_u256(&value)
    }

    /// Get the total balance held by the treasury.
    pub async fn treasury_balance(&self) -> Result<U256> {
        let value = self.binding.call_one("balance", &[]).await?;
        codec::as_u256(&value)
    }
}
