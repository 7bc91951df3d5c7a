// Copyright 2025-2026, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

//! Signer resolution and balance report.

use alloy::{
    primitives::U256,
    signers::{local::PrivateKeySigner, Signer},
};

use crate::{
    core::{
        account::primary_signer, client::DeploymentClient, config::ConfigurationError,
        network::NetworkConfig,
    },
    utils::{color::DebugColor, format_balance},
    Result,
};

/// The signer of a run, bound to the endpoint's chain.
#[derive(Debug)]
pub struct Account {
    pub signer: PrivateKeySigner,
    pub chain_id: u64,
    pub balance: U256,
}

/// Prints the primary account of `network` and its balance.
pub async fn accounts(network: &NetworkConfig, client: &impl DeploymentClient) -> Result<Account> {
    let account = resolve_account(network, client).await?;
    greyln!(
        "account: {}",
        account.signer.address().to_checksum(None).lavender()
    );
    greyln!(
        "balance: {}",
        format_balance(account.balance, &network.symbol)
    );
    Ok(account)
}

/// Validates the profile, derives the signer, then queries the chain.
///
/// The signer is derived before the first request so that a bad credential never reaches the
/// network.
pub(crate) async fn resolve_account(
    network: &NetworkConfig,
    client: &impl DeploymentClient,
) -> Result<Account> {
    network.validate()?;
    let signer = primary_signer(network)?;
    let address = signer.address();
    debug!(@grey, "signer address: {}", address.debug_lavender());

    let chain_id = client.chain_id().await?;
    if let Some(expected) = network.chain_id {
        if expected != chain_id {
            return Err(ConfigurationError::ChainIdMismatch {
                network: network.name.clone(),
                expected,
                actual: chain_id,
            }
            .into());
        }
    }
    let signer = signer.with_chain_id(Some(chain_id));

    let balance = client.balance(address).await?;
    if balance.is_zero() {
        warn!(@yellow, "account {address} has no funds on {}", network.name);
    }
    Ok(Account {
        signer,
        chain_id,
        balance,
    })
}
