// Copyright 2025-2026, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

use crate::core::{
    account::CredentialError, artifact::ArtifactError, config::ConfigurationError,
    deployment::TransactionError, network::NetworkError,
};

pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Every way a run can fail.
///
/// None of these are retried; they propagate to the entry point and end the run.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("configuration error: {0}")]
    Configuration(#[from] ConfigurationError),
    #[error("network error: {0}")]
    Network(#[from] NetworkError),
    #[error("credential error: {0}")]
    Credential(#[from] CredentialError),
    #[error("artifact error: {0}")]
    Artifact(#[from] ArtifactError),
    #[error("transaction error: {0}")]
    Transaction(#[from] TransactionError),
}
