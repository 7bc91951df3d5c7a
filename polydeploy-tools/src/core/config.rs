// Copyright 2025-2026, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

//! Project configuration file.
//!
//! A project describes its networks in a TOML file, by default [`FILENAME`]:
//!
//! ```toml
//! default_network = "matic"
//! contract = "Emperor"
//!
//! [networks.matic]
//! url = "${ALCHEMY_MATIC_URL}"
//! accounts = ["0x${MATIC_PRIVATE_KEY}"]
//! chain_id = 137
//! symbol = "MATIC"
//! ```
//!
//! String values may reference environment variables as `${NAME}`. Placeholders are expanded
//! only for the profile being resolved, so a profile whose variables are unset does not break
//! the others.

use std::{
    collections::BTreeMap,
    fs,
    path::{Path, PathBuf},
    sync::LazyLock,
};

use regex::Regex;
use serde::Deserialize;

use super::{
    account::Credential,
    network::{NetworkConfig, DEFAULT_NETWORK, DEFAULT_SYMBOL},
};

/// Default configuration filename, looked up in the working directory.
pub const FILENAME: &str = "polydeploy.toml";

/// Default directory for compiled contract artifacts.
pub const DEFAULT_ARTIFACTS_DIR: &str = "artifacts";

static ENV_PLACEHOLDER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\$\{([A-Za-z_][A-Za-z0-9_]*)\}").expect("placeholder pattern is valid")
});

#[derive(Debug, thiserror::Error)]
pub enum ConfigurationError {
    #[error("could not read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("invalid configuration: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("unknown network `{name}` (available: {available})")]
    UnknownNetwork { name: String, available: String },
    #[error("environment variable `{var}` used by network `{network}` is not set")]
    MissingEnvVar { var: String, network: String },
    #[error("network `{network}` has no RPC endpoint")]
    MissingEndpoint { network: String },
    #[error("network `{network}` has an invalid RPC endpoint: {reason}")]
    InvalidEndpoint { network: String, reason: String },
    #[error("network `{network}` has no accounts configured")]
    NoCredentials { network: String },
    #[error("network `{network}` expects chain id {expected} but the endpoint reports {actual}")]
    ChainIdMismatch {
        network: String,
        expected: u64,
        actual: u64,
    },
    #[error("no contract selected, pass --contract or set `contract` in the configuration")]
    NoContract,
    #[error("invalid constructor: {0}")]
    InvalidConstructor(String),
}

/// Contents of the configuration file.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ProjectConfig {
    /// Network used when none is selected explicitly.
    pub default_network: Option<String>,
    /// Contract deployed when none is selected explicitly.
    pub contract: Option<String>,
    /// Directory of compiled artifacts, relative to the working directory.
    pub artifacts: Option<PathBuf>,
    #[serde(default)]
    pub networks: BTreeMap<String, NetworkProfile>,
}

/// A network entry as written in the file, before placeholder expansion.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NetworkProfile {
    pub url: String,
    #[serde(default)]
    pub accounts: Vec<String>,
    pub chain_id: Option<u64>,
    pub symbol: Option<String>,
}

impl ProjectConfig {
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigurationError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| ConfigurationError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&text)
    }

    /// Loads the file at `path` if it exists, or an empty configuration otherwise.
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, ConfigurationError> {
        let path = path.as_ref();
        if path.exists() {
            Self::load(path)
        } else {
            debug!(@grey, "no configuration at {}, using defaults", path.display());
            Ok(Self::default())
        }
    }

    pub fn parse(text: &str) -> Result<Self, ConfigurationError> {
        Ok(toml::from_str(text)?)
    }

    pub fn artifacts_dir(&self) -> PathBuf {
        self.artifacts
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_ARTIFACTS_DIR))
    }

    /// Name of the network to use: the explicit selection, the file's default, or `localhost`.
    pub fn selected_network<'a>(&'a self, name: Option<&'a str>) -> &'a str {
        name.or(self.default_network.as_deref())
            .unwrap_or(DEFAULT_NETWORK)
    }

    /// All network names, including the built-in `localhost` profile.
    pub fn network_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.networks.keys().map(String::as_str).collect();
        if !self.networks.contains_key(DEFAULT_NETWORK) {
            names.push(DEFAULT_NETWORK);
            names.sort_unstable();
        }
        names
    }

    /// Resolves a network profile, expanding `${VAR}` placeholders through `env`.
    pub fn network(
        &self,
        name: Option<&str>,
        env: &impl Fn(&str) -> Option<String>,
    ) -> Result<NetworkConfig, ConfigurationError> {
        let name = self.selected_network(name);
        let Some(profile) = self.networks.get(name) else {
            if name == DEFAULT_NETWORK {
                return Ok(NetworkConfig::localhost());
            }
            return Err(ConfigurationError::UnknownNetwork {
                name: name.to_string(),
                available: self.network_names().join(", "),
            });
        };

        let url = interpolate(&profile.url, name, env)?;
        let accounts = profile
            .accounts
            .iter()
            .map(|account| interpolate(account, name, env).map(Credential::PrivateKey))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(NetworkConfig {
            name: name.to_string(),
            url,
            accounts,
            chain_id: profile.chain_id,
            symbol: profile
                .symbol
                .clone()
                .unwrap_or_else(|| DEFAULT_SYMBOL.to_string()),
        })
    }
}

/// Expands every `${VAR}` in `text`. An unset variable is an error, never an empty string.
fn interpolate(
    text: &str,
    network: &str,
    env: &impl Fn(&str) -> Option<String>,
) -> Result<String, ConfigurationError> {
    let mut expanded = String::with_capacity(text.len());
    let mut last = 0;
    for caps in ENV_PLACEHOLDER.captures_iter(text) {
        let (Some(placeholder), Some(var)) = (caps.get(0), caps.get(1)) else {
            continue;
        };
        let value = env(var.as_str()).ok_or_else(|| ConfigurationError::MissingEnvVar {
            var: var.as_str().to_string(),
            network: network.to_string(),
        })?;
        expanded.push_str(&text[last..placeholder.start()]);
        expanded.push_str(&value);
        last = placeholder.end();
    }
    expanded.push_str(&text[last..]);
    Ok(expanded)
}
