// Copyright 2025-2026, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

use std::path::PathBuf;

use polydeploy_tools::core::{
    account::Credential,
    config::{ConfigurationError, ProjectConfig, FILENAME},
    network::NetworkConfig,
};

/// Reads a process environment variable. Only the CLI looks at the environment.
pub fn env_var(key: &str) -> Option<String> {
    std::env::var(key).ok()
}

#[derive(Debug, clap::Args)]
pub struct ConfigArgs {
    /// Project configuration file [default: polydeploy.toml, if present]
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,
    /// Network profile to use
    #[arg(short, long, env = "DEPLOY_NETWORK")]
    network: Option<String>,
}

impl ConfigArgs {
    /// Loads the project configuration. An explicitly given file must exist.
    pub fn project(&self) -> Result<ProjectConfig, ConfigurationError> {
        match &self.config {
            Some(path) => ProjectConfig::load(path),
            None => ProjectConfig::load_or_default(FILENAME),
        }
    }

    pub fn network_name(&self) -> Option<&str> {
        self.network.as_deref()
    }

    /// Resolves the selected network, with credentials from `auth` taking precedence.
    pub fn network(
        &self,
        project: &ProjectConfig,
        auth: &AuthArgs,
    ) -> Result<NetworkConfig, ConfigurationError> {
        let mut network = project.network(self.network_name(), &env_var)?;
        if let Some(credential) = auth.credential() {
            network.accounts = vec![credential];
        }
        Ok(network)
    }
}

#[derive(Debug, clap::Args)]
pub struct AuthArgs {
    /// File path to a text file containing a hex-encoded private key
    #[arg(long, conflicts_with_all = ["private_key", "keystore_path"])]
    private_key_path: Option<PathBuf>,
    /// Private key as a hex string. Warning: this exposes your key to shell history
    #[arg(long, conflicts_with = "keystore_path")]
    private_key: Option<String>,
    /// Path to an Ethereum wallet keystore file (e.g. clef)
    #[arg(long)]
    keystore_path: Option<PathBuf>,
    /// Keystore password file
    #[arg(long, requires = "keystore_path")]
    keystore_password_path: Option<PathBuf>,
}

impl AuthArgs {
    /// The credential given on the command line, if any.
    pub fn credential(&self) -> Option<Credential> {
        if let Some(key) = &self.private_key {
            return Some(Credential::PrivateKey(key.clone()));
        }
        if let Some(path) = &self.private_key_path {
            return Some(Credential::PrivateKeyFile(path.clone()));
        }
        self.keystore_path
            .as_ref()
            .map(|path| Credential::Keystore {
                path: path.clone(),
                password_file: self.keystore_password_path.clone(),
            })
    }
}
