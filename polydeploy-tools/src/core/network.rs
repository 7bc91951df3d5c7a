// Copyright 2025-2026, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

//! Network profiles and RPC endpoint checks.

use url::Url;

use super::{account::Credential, config::ConfigurationError};

/// Profile used when nothing else selects one.
pub const DEFAULT_NETWORK: &str = "localhost";

/// Endpoint of a local development node.
pub const DEFAULT_ENDPOINT: &str = "http://127.0.0.1:8545";

/// First account of the standard local development mnemonic. Never holds real funds.
pub const DEV_PRIVATE_KEY: &str =
    "0xac0974bec39a17e36ba4a6b4d238ff944bacb478cbed5efcae784d7bf4f2ff80";

/// Display unit used when a profile does not name one.
pub const DEFAULT_SYMBOL: &str = "ETH";

#[derive(Debug, thiserror::Error)]
pub enum NetworkError {
    #[error("rpc error: {0}")]
    Rpc(#[from] alloy::transports::RpcError<alloy::transports::TransportErrorKind>),
}

/// A fully resolved network profile: every `${VAR}` placeholder has been expanded.
#[derive(Debug, Clone)]
pub struct NetworkConfig {
    pub name: String,
    pub url: String,
    pub accounts: Vec<Credential>,
    pub chain_id: Option<u64>,
    pub symbol: String,
}

impl NetworkConfig {
    /// The built-in profile for a local development node.
    pub fn localhost() -> Self {
        Self {
            name: DEFAULT_NETWORK.to_string(),
            url: DEFAULT_ENDPOINT.to_string(),
            accounts: vec![Credential::PrivateKey(DEV_PRIVATE_KEY.to_string())],
            chain_id: None,
            symbol: DEFAULT_SYMBOL.to_string(),
        }
    }

    /// Checks that the profile can be used, returning the parsed endpoint.
    ///
    /// A profile needs a reachable-looking HTTP(S) endpoint and at least one credential.
    pub fn validate(&self) -> Result<Url, ConfigurationError> {
        if self.accounts.is_empty() {
            return Err(ConfigurationError::NoCredentials {
                network: self.name.clone(),
            });
        }
        check_endpoint(&self.name, &self.url)
    }

    /// Host of the endpoint, safe to print (paths often embed API keys).
    pub fn endpoint_host(&self) -> Option<String> {
        let url = Url::parse(&self.url).ok()?;
        let host = url.host_str()?;
        Some(match url.port() {
            Some(port) => format!("{host}:{port}"),
            None => host.to_string(),
        })
    }
}

/// Parses an RPC endpoint, accepting only HTTP(S) URLs.
pub fn check_endpoint(network: &str, endpoint: &str) -> Result<Url, ConfigurationError> {
    let endpoint = endpoint.trim();
    if endpoint.is_empty() {
        return Err(ConfigurationError::MissingEndpoint {
            network: network.to_string(),
        });
    }
    let url = Url::parse(endpoint).map_err(|err| ConfigurationError::InvalidEndpoint {
        network: network.to_string(),
        reason: err.to_string(),
    })?;
    match url.scheme() {
        "http" | "https" => Ok(url),
        scheme => Err(ConfigurationError::InvalidEndpoint {
            network: network.to_string(),
            reason: format!("unsupported scheme `{scheme}`, expected http or https"),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile(url: &str, accounts: Vec<Credential>) -> NetworkConfig {
        NetworkConfig {
            name: "matic".to_string(),
            url: url.to_string(),
            accounts,
            chain_id: Some(137),
            symbol: "MATIC".to_string(),
        }
    }

    #[test]
    fn localhost_is_usable() {
        let url = NetworkConfig::localhost().validate().unwrap();
        assert_eq!(url.as_str(), "http://127.0.0.1:8545/");
    }

    #[test]
    fn rejects_empty_endpoint() {
        let network = profile("  ", vec![Credential::PrivateKey(DEV_PRIVATE_KEY.into())]);
        assert!(matches!(
            network.validate(),
            Err(ConfigurationError::MissingEndpoint { .. })
        ));
    }

    #[test]
    fn rejects_non_http_endpoints() {
        for url in ["wss://polygon.example/ws", "not a url"] {
            let network = profile(url, vec![Credential::PrivateKey(DEV_PRIVATE_KEY.into())]);
            assert!(matches!(
                network.validate(),
                Err(ConfigurationError::InvalidEndpoint { .. })
            ));
        }
    }

    #[test]
    fn requires_a_credential() {
        let network = profile("https://polygon.example/v2/key", vec![]);
        assert!(matches!(
            network.validate(),
            Err(ConfigurationError::NoCredentials { .. })
        ));
    }

    #[test]
    fn endpoint_host_hides_path() {
        let network = profile("https://polygon-mainnet.example.com/v2/secret", vec![]);
        assert_eq!(
            network.endpoint_host().as_deref(),
            Some("polygon-mainnet.example.com")
        );
        assert_eq!(
            NetworkConfig::localhost().endpoint_host().as_deref(),
            Some("127.0.0.1:8545")
        );
    }
}
