//! Field encoding between native values and contract representations.
//!
//! The contract suite stores "short names" (community names, choice names,
//! metadata keys) as fixed-width `bytes32` values. This module handles that
//! encoding plus the whole-number and typed-value decoding used by every
//! wrapper when it unpacks a call result or an event field.

use alloy::dyn_abi::DynSolValue;
use alloy_primitives::{hex, Address, B256, U256};

use crate::error::{ContractError, Result};

/// Encode a short name to its fixed-width `bytes32` representation.
///
/// Plain text is taken as UTF-8 bytes, right-padded with zeros. A value
/// already prefixed with `0x` is parsed as hex, so re-encoding an encoded
/// value is idempotent. Anything longer than 32 bytes fails with
/// [`ContractError::Decoding`].
pub fn encode_short_name(name: &str) -> Result<B256> {
    let bytes: Vec<u8> = match name.strip_prefix("0x") {
        Some(stripped) => hex::decode(stripped)
            .map_err(|e| ContractError::Decoding(format!("invalid hex short name: {e}")))?,
        None => name.as_bytes().to_vec(),
    };
    if bytes.len() > 32 {
        return Err(ContractError::Decoding(format!(
            "short name exceeds 32 bytes: {name}"
        )));
    }
    let mut word = B256::ZERO;
    word.0[..bytes.len()].copy_from_slice(&bytes);
    Ok(word)
}

/// Decode a fixed-width `bytes32` short name back to text.
///
/// Trailing zero padding is stripped before decoding.
pub fn decode_short_name(word: &B256) -> Result<String> {
    let end = word.0.iter().rposition(|b| *b != 0).map_or(0, |i| i + 1);
    String::from_utf8(word.0[..end].to_vec())
        .map_err(|_| ContractError::Decoding("short name is not valid UTF-8".to_string()))
}

/// Parse a textual numeric field to a whole number.
pub fn parse_int(text: &str) -> Result<u64> {
    text.trim()
        .parse::<u64>()
        .map_err(|_| ContractError::Decoding(format!("expected a whole number, got {text:?}")))
}

/// Decode a whole number from a returned value.
///
/// Accepts an unsigned word or, for providers that surface numbers as decimal
/// strings, a textual value.
pub fn as_u64(value: &DynSolValue) -> Result<u64> {
    match value {
        DynSolValue::Uint(u, _) => u64::try_from(*u)
            .map_err(|_| ContractError::Decoding(format!("value does not fit in u64: {u}"))),
        DynSolValue::String(s) => parse_int(s),
        other => Err(unexpected("unsigned integer", other)),
    }
}

/// Decode an unsigned 256-bit value.
pub fn as_u256(value: &DynSolValue) -> Result<U256> {
    match value {
        DynSolValue::Uint(u, _) => Ok(*u),
        other => Err(unexpected("unsigned integer", other)),
    }
}

/// Decode an address value.
pub fn as_address(value: &DynSolValue) -> Result<Address> {
    match value {
        DynSolValue::Address(a) => Ok(*a),
        other => Err(unexpected("address", other)),
    }
}

/// Decode a string value.
pub fn as_string(value: &DynSolValue) -> Result<String> {
    match value {
        DynSolValue::String(s) => Ok(s.clone()),
        other => Err(unexpected("string", other)),
    }
}

/// Decode a boolean value.
pub fn as_bool(value: &DynSolValue) -> Result<bool> {
    match value {
        DynSolValue::Bool(b) => Ok(*b),
        other => Err(unexpected("bool", other)),
    }
}

/// Decode a fixed-width word, used for short-name fields.
pub fn as_word(value: &DynSolValue) -> Result<B256> {
    match value {
        DynSolValue::FixedBytes(word, _) => Ok(*word),
        other => Err(unexpected("fixed bytes", other)),
    }
}

fn unexpected(expected: &str, got: &DynSolValue) -> ContractError {
    ContractError::Decoding(format!("expected {expected}, got {got:?}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_name_round_trip() {
        let word = encode_short_name("quorum").unwrap();
        assert_eq!(decode_short_name(&word).unwrap(), "quorum");
    }

    #[test]
    fn test_short_name_is_right_padded() {
        let word = encode_short_name("quorum").unwrap();
        assert_eq!(&word.0[..6], b"quorum");
        assert!(word.0[6..].iter().all(|b| *b == 0));
    }

    #[test]
    fn test_short_name_reencoding_is_idempotent() {
        let word = encode_short_name("quorum").unwrap();
        let reencoded = encode_short_name(&format!("0x{}", hex::encode(word.0))).unwrap();
        assert_eq!(reencoded, word);
    }

    #[test]
    fn test_short_name_hex_form_matches_text_form() {
        // "quorum" as hex, without padding
        let word = encode_short_name("0x71756f72756d").unwrap();
        assert_eq!(word, encode_short_name("quorum").unwrap());
    }

    #[test]
    fn test_short_name_too_long() {
        let name = "a".repeat(33);
        assert!(matches!(
            encode_short_name(&name),
            Err(ContractError::Decoding(_))
        ));
    }

    #[test]
    fn test_short_name_exactly_32_bytes() {
        let name = "b".repeat(32);
        let word = encode_short_name(&name).unwrap();
        assert_eq!(decode_short_name(&word).unwrap(), name);
    }

    #[test]
    fn test_decode_short_name_all_zero() {
        assert_eq!(decode_short_name(&B256::ZERO).unwrap(), "");
    }

    #[test]
    fn test_decode_short_name_invalid_utf8() {
        let mut word = B256::ZERO;
        word.0[0] = 0xff;
        word.0[1] = 0xfe;
        assert!(matches!(
            decode_short_name(&word),
            Err(ContractError::Decoding(_))
        ));
    }

    #[test]
    fn test_parse_int_valid() {
        assert_eq!(parse_int("110571").unwrap(), 110_571);
    }

    #[test]
    fn test_parse_int_empty() {
        assert!(matches!(parse_int(""), Err(ContractError::Decoding(_))));
    }

    #[test]
    fn test_parse_int_not_a_number() {
        assert!(matches!(parse_int("NONE"), Err(ContractError::Decoding(_))));
    }

    #[test]
    fn test_as_u64_from_uint() {
        let value = DynSolValue::Uint(U256::from(42u64), 256);
        assert_eq!(as_u64(&value).unwrap(), 42);
    }

    #[test]
    fn test_as_u64_from_string() {
        let value = DynSolValue::String("110571".to_string());
        assert_eq!(as_u64(&value).unwrap(), 110_571);
    }

    #[test]
    fn test_as_u64_overflow() {
        let value = DynSolValue::Uint(U256::MAX, 256);
        assert!(matches!(as_u64(&value), Err(ContractError::Decoding(_))));
    }

    #[test]
    fn test_as_address_wrong_variant() {
        let value = DynSolValue::Bool(true);
        assert!(matches!(
            as_address(&value),
            Err(ContractError::Decoding(_))
        ));
    }

    #[test]
    fn test_as_string_and_bool() {
        assert_eq!(
            as_string(&DynSolValue::String("hello".to_string())).unwrap(),
            "hello"
        );
        assert!(as_bool(&DynSolValue::Bool(true)).unwrap());
    }

    #[test]
    fn test_as_word_round_trips_short_name() {
        let word = encode_short_name("governance").unwrap();
        let value = DynSolValue::FixedBytes(word, 32);
        assert_eq!(
            decode_short_name(&as_word(&value).unwrap()).unwrap(),
            "governance"
        );
    }
}
