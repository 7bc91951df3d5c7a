// Copyright 2025-2026, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

//! Account credentials and signers.

use std::{fmt, fs, path::PathBuf};

use alloy::{
    primitives::B256,
    signers::local::{LocalSigner, PrivateKeySigner},
};

use super::{config::ConfigurationError, network::NetworkConfig};
use crate::utils::decode0x;

const PRIVATE_KEY_LENGTH: usize = 32;

#[derive(Debug, thiserror::Error)]
pub enum CredentialError {
    #[error("malformed private key: {0}")]
    MalformedKey(String),
    #[error("could not read private key file {}: {source}", .path.display())]
    KeyFile {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("could not open keystore {}: {source}", .path.display())]
    Keystore {
        path: PathBuf,
        source: alloy::signers::local::LocalSignerError,
    },
}

/// Where a signing key comes from.
#[derive(Clone)]
pub enum Credential {
    /// Hex-encoded private key, with or without `0x`.
    PrivateKey(String),
    /// Text file containing a hex-encoded private key.
    PrivateKeyFile(PathBuf),
    /// Encrypted JSON keystore, with an optional file holding its password.
    Keystore {
        path: PathBuf,
        password_file: Option<PathBuf>,
    },
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PrivateKey(_) => f.write_str("PrivateKey(<redacted>)"),
            Self::PrivateKeyFile(path) => f.debug_tuple("PrivateKeyFile").field(path).finish(),
            Self::Keystore {
                path,
                password_file,
            } => f
                .debug_struct("Keystore")
                .field("path", path)
                .field("password_file", password_file)
                .finish(),
        }
    }
}

impl Credential {
    /// Derives the signer for this credential. Touches only the local file system.
    pub fn signer(&self) -> Result<PrivateKeySigner, CredentialError> {
        match self {
            Self::PrivateKey(key) => parse_private_key(key),
            Self::PrivateKeyFile(path) => {
                let key = fs::read_to_string(path).map_err(|source| CredentialError::KeyFile {
                    path: path.clone(),
                    source,
                })?;
                parse_private_key(&key)
            }
            Self::Keystore {
                path,
                password_file,
            } => {
                let password = match password_file {
                    Some(file) => fs::read_to_string(file)
                        .map_err(|source| CredentialError::KeyFile {
                            path: file.clone(),
                            source,
                        })?
                        .trim_end_matches(['\r', '\n'])
                        .to_string(),
                    None => String::new(),
                };
                LocalSigner::decrypt_keystore(path, password).map_err(|source| {
                    CredentialError::Keystore {
                        path: path.clone(),
                        source,
                    }
                })
            }
        }
    }
}

/// Resolves the signer for the first credential of a network.
pub fn primary_signer(network: &NetworkConfig) -> crate::Result<PrivateKeySigner> {
    let credential = network
        .accounts
        .first()
        .ok_or_else(|| ConfigurationError::NoCredentials {
            network: network.name.clone(),
        })?;
    Ok(credential.signer()?)
}

fn parse_private_key(key: &str) -> Result<PrivateKeySigner, CredentialError> {
    let bytes = decode0x(key).map_err(|err| CredentialError::MalformedKey(err.to_string()))?;
    if bytes.len() != PRIVATE_KEY_LENGTH {
        return Err(CredentialError::MalformedKey(format!(
            "expected {} bytes, got {}",
            PRIVATE_KEY_LENGTH,
            bytes.len()
        )));
    }
    PrivateKeySigner::from_bytes(&B256::from_slice(&bytes))
        .map_err(|err| CredentialError::MalformedKey(err.to_string()))
}

#[cfg(test)]
mod tests {
    use alloy::primitives::address;

    use super::*;
    use crate::{core::network::DEV_PRIVATE_KEY, Error};

    #[test]
    fn parses_dev_key() {
        let signer = Credential::PrivateKey(DEV_PRIVATE_KEY.to_string())
            .signer()
            .unwrap();
        assert_eq!(
            signer.address(),
            address!("f39Fd6e51aad88F6F4ce6aB8827279cffFb92266")
        );
    }

    #[test]
    fn accepts_key_without_prefix() {
        let key = DEV_PRIVATE_KEY.trim_start_matches("0x").to_string();
        assert!(Credential::PrivateKey(key).signer().is_ok());
    }

    #[test]
    fn rejects_malformed_keys() {
        let zero = format!("0x{}", "00".repeat(32));
        for key in ["", "0x1234", "0xnothex", "0x0x1234", zero.as_str()] {
            let err = Credential::PrivateKey(key.to_string()).signer().unwrap_err();
            assert!(matches!(err, CredentialError::MalformedKey(_)), "{key}");
        }
    }

    #[test]
    fn reads_key_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("key.txt");
        fs::write(&path, format!("{DEV_PRIVATE_KEY}\n")).unwrap();
        let signer = Credential::PrivateKeyFile(path).signer().unwrap();
        assert_eq!(
            signer.address(),
            address!("f39Fd6e51aad88F6F4ce6aB8827279cffFb92266")
        );

        let missing = Credential::PrivateKeyFile(dir.path().join("missing.txt"));
        assert!(matches!(
            missing.signer(),
            Err(CredentialError::KeyFile { .. })
        ));
    }

    #[test]
    fn debug_output_redacts_keys() {
        let credential = Credential::PrivateKey(DEV_PRIVATE_KEY.to_string());
        assert!(!format!("{credential:?}").contains("ac0974"));
    }

    #[test]
    fn primary_signer_needs_an_account() {
        let mut network = NetworkConfig::localhost();
        network.accounts.clear();
        assert!(matches!(
            primary_signer(&network),
            Err(Error::Configuration(ConfigurationError::NoCredentials { .. }))
        ));
    }
}
