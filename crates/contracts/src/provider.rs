//! Provider type definitions and connection helpers for contract wrappers.

use alloy::{
    network::{Ethereum, EthereumWallet},
    providers::{
        fillers::{
            BlobGasFiller, ChainIdFiller, FillProvider, GasFiller, JoinFill, NonceFiller,
            WalletFiller,
        },
        Identity, ProviderBuilder, RootProvider,
    },
    signers::local::PrivateKeySigner,
};
use alloy_primitives::Address;

use crate::error::{ContractError, Result};

/// The recommended fillers type from `ProviderBuilder::new()`.
pub type RecommendedFillers =
    JoinFill<GasFiller, JoinFill<BlobGasFiller, JoinFill<NonceFiller, ChainIdFiller>>>;

/// The concrete provider type used by all contract wrappers.
/// This matches what `ProviderBuilder::new().wallet(wallet).connect_http(url)` returns.
pub type HttpProvider = FillProvider<
    JoinFill<JoinFill<Identity, RecommendedFillers>, WalletFiller<EthereumWallet>>,
    RootProvider<Ethereum>,
    Ethereum,
>;

/// Connect a wallet-backed HTTP provider.
///
/// Returns the provider together with the signer's address. An unparseable
/// private key or RPC url fails with [`ContractError::Configuration`].
pub fn connect(rpc_url: &str, private_key: &str) -> Result<(HttpProvider, Address)> {
    let signer: PrivateKeySigner = private_key
        .parse()
        .map_err(|_| ContractError::Configuration("invalid private key".to_string()))?;
    let signer_address = signer.address();
    let wallet = EthereumWallet::from(signer);

    let url: url::Url = rpc_url
        .parse()
        .map_err(|e| ContractError::Configuration(format!("invalid RPC url: {e}")))?;

    let provider = ProviderBuilder::new().wallet(wallet).connect_http(url);

    Ok((provider, signer_address))
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy_primitives::address;

    // Anvil's default account 0 private key
    const TEST_PRIVATE_KEY: &str =
        "0xac0974bec39a17e36ba4a6b4d238ff944bacb478cbed5efcae784d7bf4f2ff80";
    const EXPECTED_SIGNER_ADDRESS: Address = address!("f39Fd6e51aad88F6F4ce6aB8827279cffFb92266");

    #[test]
    fn test_connect_derives_signer_address() {
        let (_, signer) = connect("http://localhost:8545", TEST_PRIVATE_KEY).unwrap();
        assert_eq!(signer, EXPECTED_SIGNER_ADDRESS);
    }

    #[test]
    fn test_connect_invalid_private_key() {
        let result = connect("http://localhost:8545", "not-a-valid-key");
        assert!(matches!(result, Err(ContractError::Configuration(_))));
    }

    #[test]
    fn test_connect_invalid_rpc_url() {
        let private_key = "0x0123456789abcdef0123456789abcdef0123456789abcdef0123456789abcdef";
        let result = connect("not a valid url", private_key);
        assert!(matches!(result, Err(ContractError::Configuration(_))));
    }
}
