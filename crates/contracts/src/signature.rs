//! Off-chain approval signatures for treasury withdrawals.
//!
//! `Treasury::approve_multi` collects one signature per approver over the
//! hash of the scheduled transaction. The hash is the keccak256 of the
//! standard ABI encoding of `(address, uint256, string, bytes, uint256)`,
//! matching what the Vault contract recomputes on-chain.

use alloy::dyn_abi::DynSolValue;
use alloy::signers::{local::PrivateKeySigner, SignerSync};
use alloy_primitives::{keccak256, Address, Bytes, B256, U256};

use crate::error::{ContractError, Result};

/// A scheduled treasury transaction awaiting approval.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreasuryTransaction {
    pub target: Address,
    pub value: U256,
    pub signature: String,
    pub calldata: Bytes,
    pub schedule_time: u64,
}

/// Compute the hash an approver signs for the given transaction.
pub fn transaction_hash(transaction: &TreasuryTransaction) -> B256 {
    let encoded = DynSolValue::Tuple(vec![
        DynSolValue::Address(transaction.target),
        DynSolValue::Uint(transaction.value, 256),
        DynSolValue::String(transaction.signature.clone()),
        DynSolValue::Bytes(transaction.calldata.to_vec()),
        DynSolValue::Uint(U256::from(transaction.schedule_time), 256),
    ])
    .abi_encode_params();
    keccak256(encoded)
}

/// Sign a transaction hash, producing the 65-byte signature submitted through
/// `approve_multi`.
pub fn sign_transaction_hash(signer: &PrivateKeySigner, hash: B256) -> Result<Bytes> {
    let signature = signer
        .sign_hash_sync(&hash)
        .map_err(|e| ContractError::Configuration(format!("signing failed: {e}")))?;
    Ok(Bytes::from(signature.as_bytes().to_vec()))
}

#[cfg(test)]
mod tests {
    use super::*;

    const TEST_PRIVATE_KEY: &str =
        "0xac0974bec39a17e36ba4a6b4d238ff944bacb478cbed5efcae784d7bf4f2ff80";

    fn transaction(schedule_time: u64) -> TreasuryTransaction {
        TreasuryTransaction {
            target: Address::repeat_byte(0x42),
            value: U256::from(1_000_000u64),
            signature: "transferTo(address)".to_string(),
            calldata: Bytes::from(vec![0xde, 0xad, 0xbe, 0xef]),
            schedule_time,
        }
    }

    #[test]
    fn test_transaction_hash_is_deterministic() {
        assert_eq!(
            transaction_hash(&transaction(1_700_000_000)),
            transaction_hash(&transaction(1_700_000_000))
        );
    }

    #[test]
    fn test_transaction_hash_differs_by_field() {
        assert_ne!(
            transaction_hash(&transaction(1_700_000_000)),
            transaction_hash(&transaction(1_700_000_001))
        );
    }

    #[test]
    fn test_sign_transaction_hash_is_65_bytes() {
        let signer: PrivateKeySigner = TEST_PRIVATE_KEY.parse().unwrap();
        let hash = transaction_hash(&transaction(1_700_000_000));
        let signature = sign_transaction_hash(&signer, hash).unwrap();
        assert_eq!(signature.len(), 65);
    }
}
