//! Generic contract binding.
//!
//! A [`Binding`] associates an interface descriptor, a deployed address, and a
//! wallet-backed provider, and exposes the two remote operations every
//! wrapper is built from: a read call and a confirmed write. Wrappers compose
//! a binding rather than inherit from it.

use std::path::Path;

use alloy::dyn_abi::{DynSolValue, FunctionExt, JsonAbiExt};
use alloy::json_abi::{Event, Function, JsonAbi};
use alloy::providers::Provider;
use alloy::rpc::types::TransactionRequest;
use alloy_primitives::{Address, U256};
use tracing::debug;

use crate::abi::load_descriptor;
use crate::error::{ContractError, Result};
use crate::events::{self, TransactionOutcome};
use crate::provider::HttpProvider;

/// A local proxy for one deployed contract instance.
///
/// Read-only after construction; all state the wrappers manipulate lives
/// remotely.
#[derive(Debug, Clone)]
pub struct Binding {
    name: String,
    address: Address,
    abi: JsonAbi,
    provider: HttpProvider,
}

impl Binding {
    /// Bind a named interface descriptor to a deployed address.
    ///
    /// Fails with [`ContractError::Configuration`] if the descriptor cannot
    /// be located or parsed.
    pub fn bind(
        abi_dir: &Path,
        descriptor_name: &str,
        address: Address,
        provider: HttpProvider,
    ) -> Result<Self> {
        let abi = load_descriptor(abi_dir, descriptor_name)?;
        debug!(descriptor = descriptor_name, %address, "bound contract");
        Ok(Self {
            name: descriptor_name.to_string(),
            address,
            abi,
            provider,
        })
    }

    /// The deployed address this binding points at.
    pub fn address(&self) -> Address {
        self.address
    }

    /// Resolve a method by name and argument count.
    ///
    /// Overloads are distinguished by arity, matching how the contracts
    /// declare them (for example `configure(uint256,uint256)` next to
    /// `configure(uint256,uint256,uint256,uint256)`).
    pub fn function(&self, method: &str, arity: usize) -> Result<&Function> {
        let overloads = self.abi.function(method).ok_or_else(|| {
            ContractError::Configuration(format!("{} has no method {method}", self.name))
        })?;
        overloads
            .iter()
            .find(|f| f.inputs.len() == arity)
            .ok_or_else(|| {
                ContractError::Configuration(format!(
                    "{}.{method} has no overload taking {arity} arguments",
                    self.name
                ))
            })
    }

    /// Look up an event declaration in the descriptor.
    pub fn event(&self, name: &str) -> Result<&Event> {
        self.abi
            .event(name)
            .and_then(|overloads| overloads.first())
            .ok_or_else(|| {
                ContractError::Configuration(format!(
                    "{} does not declare event {name}",
                    self.name
                ))
            })
    }

    /// Invoke a read method and decode its return values.
    pub async fn call(&self, method: &str, args: &[DynSolValue]) -> Result<Vec<DynSolValue>> {
        let function = self.function(method, args.len())?;
        let calldata = function
            .abi_encode_input(args)
            .map_err(|e| ContractError::Decoding(format!("cannot encode {method}: {e}")))?;

        let tx = TransactionRequest::default()
            .to(self.address)
            .input(calldata.into());

        let returned = self
            .provider
            .call(tx)
            .await
            .map_err(|e| ContractError::Remote(format!("{}.{method}: {e}", self.name)))?;

        function
            .abi_decode_output(&returned)
            .map_err(|e| ContractError::Decoding(format!("cannot decode {method} output: {e}")))
    }

    /// Invoke a read method that returns exactly one value.
    pub async fn call_one(&self, method: &str, args: &[DynSolValue]) -> Result<DynSolValue> {
        let mut values = self.call(method, args).await?;
        if values.len() != 1 {
            return Err(ContractError::Decoding(format!(
                "{method} returned {} values, expected one",
                values.len()
            )));
        }
        Ok(values.remove(0))
    }

    /// Submit a write method and wait for confirmation.
    pub async fn send(&self, method: &str, args: &[DynSolValue]) -> Result<TransactionOutcome> {
        self.send_with_value(method, args, U256::ZERO).await
    }

    /// Submit a payable write method carrying the given value.
    ///
    /// Waits for the receipt; a reverted transaction fails with
    /// [`ContractError::Remote`]. No retries, no local timeout.
    pub async fn send_with_value(
        &self,
        method: &str,
        args: &[DynSolValue],
        value: U256,
    ) -> Result<TransactionOutcome> {
        let function = self.function(method, args.len())?;
        let calldata = function
            .abi_encode_input(args)
            .map_err(|e| ContractError::Decoding(format!("cannot encode {method}: {e}")))?;

        let tx = TransactionRequest::default()
            .to(self.address)
            .input(calldata.into())
            .value(value);

        debug!(contract = %self.name, method, "sending transaction");
        let pending = self
            .provider
            .send_transaction(tx)
            .await
            .map_err(|e| ContractError::Remote(format!("{}.{method}: {e}", self.name)))?;

        let receipt = pending.get_receipt().await.map_err(|e| {
            ContractError::Remote(format!("{}.{method}: no receipt: {e}", self.name))
        })?;

        let outcome = TransactionOutcome::from_receipt(&receipt);
        if !outcome.succeeded() {
            return Err(ContractError::Remote(format!(
                "{}.{method} reverted in {}",
                self.name,
                outcome.transaction_hash()
            )));
        }
        debug!(tx = %outcome.transaction_hash(), "transaction confirmed");
        Ok(outcome)
    }

    /// Extract a named field from a named event in a transaction outcome.
    pub fn event_field(
        &self,
        outcome: &TransactionOutcome,
        event_name: &str,
        field_name: &str,
    ) -> Result<DynSolValue> {
        let event = self.event(event_name)?;
        events::extract_field(outcome, event, field_name)
    }

    /// The provider backing this binding.
    pub fn provider(&self) -> &HttpProvider {
        &self.provider
    }
}
