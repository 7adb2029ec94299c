//! Interface descriptor loading.
//!
//! Each contract type has a named descriptor file (a JSON ABI) under a
//! configured directory. Descriptors are consumed, never produced, by this
//! crate. Both a bare ABI array and a compiler artifact object with a
//! top-level `"abi"` key are accepted.

use std::fs;
use std::path::Path;

use alloy::json_abi::JsonAbi;
use serde_json::Value;
use tracing::debug;

use crate::error::{ContractError, Result};

/// Load a named interface descriptor from the configured directory.
///
/// Fails with [`ContractError::Configuration`] if the file cannot be read or
/// does not contain a JSON ABI.
pub fn load_descriptor(abi_dir: &Path, name: &str) -> Result<JsonAbi> {
    let path = abi_dir.join(name);
    debug!(path = %path.display(), "loading interface descriptor");
    let text = fs::read_to_string(&path).map_err(|e| {
        ContractError::Configuration(format!("cannot read descriptor {}: {e}", path.display()))
    })?;
    parse_descriptor(&text)
        .map_err(|e| ContractError::Configuration(format!("descriptor {name} is invalid: {e}")))
}

fn parse_descriptor(text: &str) -> std::result::Result<JsonAbi, serde_json::Error> {
    let value: Value = serde_json::from_str(text)?;
    // Compiler artifacts nest the ABI under an "abi" key
    match value {
        Value::Object(mut map) if map.contains_key("abi") => {
            serde_json::from_value(map.remove("abi").unwrap_or(Value::Null))
        }
        other => serde_json::from_value(other),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    const NAME_AND_BUILD: &str = r#"[
        {"type":"function","name":"name","inputs":[],"outputs":[{"name":"","type":"string"}],"stateMutability":"view"},
        {"type":"function","name":"build","inputs":[],"outputs":[],"stateMutability":"nonpayable"},
        {"type":"event","name":"TreasuryCreated","inputs":[{"name":"treasury","type":"address","indexed":false}],"anonymous":false}
    ]"#;

    fn temp_abi_dir(tag: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!(
            "collective-abi-test-{}-{tag}",
            std::process::id()
        ));
        fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn test_load_bare_abi_array() {
        let dir = temp_abi_dir("bare");
        fs::write(dir.join("TreasuryBuilder.json"), NAME_AND_BUILD).unwrap();

        let abi = load_descriptor(&dir, "TreasuryBuilder.json").unwrap();
        assert!(abi.function("name").is_some());
        assert!(abi.event("TreasuryCreated").is_some());
    }

    #[test]
    fn test_load_compiler_artifact() {
        let dir = temp_abi_dir("artifact");
        let artifact = format!(r#"{{"contractName":"TreasuryBuilder","abi":{NAME_AND_BUILD}}}"#);
        fs::write(dir.join("TreasuryBuilder.json"), artifact).unwrap();

        let abi = load_descriptor(&dir, "TreasuryBuilder.json").unwrap();
        assert!(abi.function("build").is_some());
    }

    #[test]
    fn test_load_missing_descriptor() {
        let dir = temp_abi_dir("missing");
        let result = load_descriptor(&dir, "NoSuchContract.json");
        assert!(matches!(result, Err(ContractError::Configuration(_))));
    }

    #[test]
    fn test_load_invalid_json() {
        let dir = temp_abi_dir("invalid");
        fs::write(dir.join("Broken.json"), "not json at all").unwrap();
        let result = load_descriptor(&dir, "Broken.json");
        assert!(matches!(result, Err(ContractError::Configuration(_))));
    }
}
