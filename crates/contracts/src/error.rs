//! Error types for the contracts crate.

use thiserror::Error;

/// Errors that can occur when using contract wrappers.
#[derive(Debug, Error)]
pub enum ContractError {
    /// A descriptor, address, or credential was missing or invalid at bind time.
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// The transport or the remote contract rejected the call.
    #[error("Remote call failed: {0}")]
    Remote(String),

    /// A returned field could not be decoded to the expected type.
    #[error("Failed to decode value: {0}")]
    Decoding(String),

    /// An expected event was absent from a confirmed transaction.
    #[error("Event {0} not found in transaction outcome")]
    MissingEvent(String),

    /// A matched event did not carry the expected field.
    #[error("Event {event} has no field {field}")]
    MissingField { event: String, field: String },
}

/// Result type alias for contract operations.
pub type Result<T> = std::result::Result<T, ContractError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_configuration() {
        let error = ContractError::Configuration("descriptor not found".to_string());
        assert_eq!(
            error.to_string(),
            "Configuration error: descriptor not found"
        );
    }

    #[test]
    fn test_error_display_remote() {
        let error = ContractError::Remote("execution reverted".to_string());
        assert_eq!(error.to_string(), "Remote call failed: execution reverted");
    }

    #[test]
    fn test_error_display_decoding() {
        let error = ContractError::Decoding("expected a whole number".to_string());
        assert_eq!(
            error.to_string(),
            "Failed to decode value: expected a whole number"
        );
    }

    #[test]
    fn test_error_display_missing_event() {
        let error = ContractError::MissingEvent("TreasuryCreated".to_string());
        assert_eq!(
            error.to_string(),
            "Event TreasuryCreated not found in transaction outcome"
        );
    }

    #[test]
    fn test_error_display_missing_field() {
        let error = ContractError::MissingField {
            event: "GovernanceContractCreated".to_string(),
            field: "governance".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Event GovernanceContractCreated has no field governance"
        );
    }
}
