//! Transaction outcomes and event field extraction.
//!
//! Every builder finishes by locating a creation event in the terminal
//! transaction's logs and pulling a named field out of it. Absence of the
//! event is a failure even when the transaction itself succeeded, because the
//! caller's intended result (a created address or id) cannot be recovered.

use alloy::dyn_abi::{DynSolValue, EventExt};
use alloy::json_abi::Event;
use alloy::rpc::types::{Log, TransactionReceipt};
use alloy_primitives::B256;

use crate::error::{ContractError, Result};

/// The confirmed result of a write call: a success flag plus the ordered
/// list of emitted events.
#[derive(Debug, Clone)]
pub struct TransactionOutcome {
    transaction_hash: B256,
    status: bool,
    logs: Vec<Log>,
}

impl TransactionOutcome {
    /// Create an outcome from raw parts.
    pub fn new(transaction_hash: B256, status: bool, logs: Vec<Log>) -> Self {
        Self {
            transaction_hash,
            status,
            logs,
        }
    }

    /// Create an outcome from a transaction receipt.
    pub fn from_receipt(receipt: &TransactionReceipt) -> Self {
        Self::new(
            receipt.transaction_hash,
            receipt.status(),
            receipt.inner.logs().to_vec(),
        )
    }

    /// The hash of the confirmed transaction.
    pub fn transaction_hash(&self) -> B256 {
        self.transaction_hash
    }

    /// Whether the transaction executed without reverting.
    pub fn succeeded(&self) -> bool {
        self.status
    }

    /// The events emitted by the transaction, in emission order.
    pub fn logs(&self) -> &[Log] {
        &self.logs
    }
}

/// Extract a named field from the first occurrence of an event in the outcome.
///
/// Linear scan over the outcome's logs for the event's selector. Fails with
/// [`ContractError::MissingEvent`] if no log matches, and with
/// [`ContractError::MissingField`] if the matched event does not declare the
/// field.
pub fn extract_field(
    outcome: &TransactionOutcome,
    event: &Event,
    field: &str,
) -> Result<DynSolValue> {
    let log = outcome
        .logs()
        .iter()
        .find(|log| log.inner.data.topics().first() == Some(&event.selector()))
        .ok_or_else(|| ContractError::MissingEvent(event.name.clone()))?;

    let decoded = event
        .decode_log(&log.inner.data)
        .map_err(|e| ContractError::Decoding(format!("cannot decode {}: {e}", event.name)))?;

    // Indexed and body values each appear in declaration order
    let mut indexed = decoded.indexed.iter();
    let mut body = decoded.body.iter();
    for input in &event.inputs {
        let value = if input.indexed {
            indexed.next()
        } else {
            body.next()
        };
        if input.name == field {
            return value.cloned().ok_or_else(|| ContractError::MissingField {
                event: event.name.clone(),
                field: field.to_string(),
            });
        }
    }

    Err(ContractError::MissingField {
        event: event.name.clone(),
        field: field.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy_primitives::{address, Address, LogData, U256};

    fn created_event() -> Event {
        serde_json::from_str(
            r#"{"type":"event","name":"GovernanceContractCreated","inputs":[
                {"name":"creator","type":"address","indexed":true},
                {"name":"governance","type":"address","indexed":false},
                {"name":"proposalId","type":"uint256","indexed":false}
            ],"anonymous":false}"#,
        )
        .unwrap()
    }

    fn emitted(event: &Event, creator: Address, governance: Address, id: u64) -> Log {
        let topics = vec![event.selector(), creator.into_word()];
        let body = DynSolValue::Tuple(vec![
            DynSolValue::Address(governance),
            DynSolValue::Uint(U256::from(id), 256),
        ])
        .abi_encode_params();
        Log {
            inner: alloy_primitives::Log {
                address: Address::repeat_byte(0x11),
                data: LogData::new_unchecked(topics, body.into()),
            },
            ..Default::default()
        }
    }

    fn outcome_with(logs: Vec<Log>) -> TransactionOutcome {
        TransactionOutcome::new(B256::repeat_byte(0xab), true, logs)
    }

    #[test]
    fn test_extract_body_field() {
        let event = created_event();
        let creator = address!("f39Fd6e51aad88F6F4ce6aB8827279cffFb92266");
        let governance = address!("BEEF01735c132Ada46AA9aA4c54623cAA92A64CB");
        let outcome = outcome_with(vec![emitted(&event, creator, governance, 7)]);

        let value = extract_field(&outcome, &event, "governance").unwrap();
        assert_eq!(value, DynSolValue::Address(governance));
    }

    #[test]
    fn test_extract_indexed_field() {
        let event = created_event();
        let creator = address!("f39Fd6e51aad88F6F4ce6aB8827279cffFb92266");
        let governance = address!("BEEF01735c132Ada46AA9aA4c54623cAA92A64CB");
        let outcome = outcome_with(vec![emitted(&event, creator, governance, 7)]);

        let value = extract_field(&outcome, &event, "creator").unwrap();
        assert_eq!(value, DynSolValue::Address(creator));
    }

    #[test]
    fn test_extract_numeric_field() {
        let event = created_event();
        let creator = Address::repeat_byte(0x01);
        let governance = Address::repeat_byte(0x02);
        let outcome = outcome_with(vec![emitted(&event, creator, governance, 110_571)]);

        let value = extract_field(&outcome, &event, "proposalId").unwrap();
        assert_eq!(crate::codec::as_u64(&value).unwrap(), 110_571);
    }

    #[test]
    fn test_missing_event() {
        let event = created_event();
        let outcome = outcome_with(vec![]);

        let result = extract_field(&outcome, &event, "governance");
        assert!(matches!(result, Err(ContractError::MissingEvent(_))));
    }

    #[test]
    fn test_unrelated_log_is_skipped() {
        let event = created_event();
        let unrelated = Log {
            inner: alloy_primitives::Log {
                address: Address::repeat_byte(0x22),
                data: LogData::new_unchecked(vec![B256::repeat_byte(0x99)], Vec::new().into()),
            },
            ..Default::default()
        };
        let outcome = outcome_with(vec![unrelated]);

        let result = extract_field(&outcome, &event, "governance");
        assert!(matches!(result, Err(ContractError::MissingEvent(_))));
    }

    #[test]
    fn test_missing_field() {
        let event = created_event();
        let creator = Address::repeat_byte(0x01);
        let governance = Address::repeat_byte(0x02);
        let outcome = outcome_with(vec![emitted(&event, creator, governance, 7)]);

        let result = extract_field(&outcome, &event, "timeLock");
        assert!(matches!(
            result,
            Err(ContractError::MissingField { event: _, field })
                if field == "timeLock"
        ));
    }

    #[test]
    fn test_first_matching_event_wins() {
        let event = created_event();
        let creator = Address::repeat_byte(0x01);
        let first = Address::repeat_byte(0x02);
        let second = Address::repeat_byte(0x03);
        let outcome = outcome_with(vec![
            emitted(&event, creator, first, 1),
            emitted(&event, creator, second, 2),
        ]);

        let value = extract_field(&outcome, &event, "governance").unwrap();
        assert_eq!(value, DynSolValue::Address(first));
    }

    #[test]
    fn test_outcome_accessors() {
        let outcome = TransactionOutcome::new(B256::repeat_byte(0xcd), false, vec![]);
        assert_eq!(outcome.transaction_hash(), B256::repeat_byte(0xcd));
        assert!(!outcome.succeeded());
        assert!(outcome.logs().is_empty());
    }
}
