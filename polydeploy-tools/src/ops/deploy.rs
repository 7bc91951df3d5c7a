// Copyright 2025-2026, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

//! Contract deployment.

use std::path::PathBuf;

use alloy::primitives::U256;

use super::accounts::resolve_account;
use crate::{
    core::{
        artifact::ArtifactStore,
        client::DeploymentClient,
        config::DEFAULT_ARTIFACTS_DIR,
        deployment::{encode_constructor_args, Confirmation, Deployment, DeploymentRequest},
        network::NetworkConfig,
    },
    utils::{color::DebugColor, format_balance},
    Result,
};

/// Everything one deployment run needs, resolved up front.
#[derive(Debug, Clone)]
pub struct DeployConfig {
    pub network: NetworkConfig,
    /// Root of the compiled artifacts.
    pub artifacts: PathBuf,
    /// Bare (`Token`) or fully qualified (`contracts/Token.sol:Token`) contract name.
    pub contract: String,
    pub constructor_args: Vec<String>,
    /// Wei sent to the constructor.
    pub constructor_value: U256,
    pub confirmation: Confirmation,
}

impl DeployConfig {
    pub fn new(network: NetworkConfig, contract: impl Into<String>) -> Self {
        Self {
            network,
            artifacts: PathBuf::from(DEFAULT_ARTIFACTS_DIR),
            contract: contract.into(),
            constructor_args: Vec::new(),
            constructor_value: U256::ZERO,
            confirmation: Confirmation::default(),
        }
    }
}

/// Deploys one new instance of the configured contract.
///
/// Every call submits a fresh transaction; nothing records or deduplicates earlier deployments.
pub async fn deploy(config: &DeployConfig, client: &impl DeploymentClient) -> Result<Deployment> {
    let account = resolve_account(&config.network, client).await?;
    let from = account.signer.address();
    greyln!(
        "deploying contracts with the account: {}",
        from.to_checksum(None).lavender()
    );
    greyln!(
        "account balance: {}",
        format_balance(account.balance, &config.network.symbol)
    );

    let artifact = ArtifactStore::new(&config.artifacts).load(&config.contract)?;
    let contract = artifact.fully_qualified_name();
    debug!(@grey, "resolved artifact {contract}");
    let mut code = artifact.creation_code()?.to_vec();
    code.extend(encode_constructor_args(
        artifact.constructor(),
        &config.constructor_args,
        config.constructor_value,
    )?);

    let nonce = client.nonce(from).await?;
    let request = DeploymentRequest::new(from, nonce, code).with_value(config.constructor_value);
    let expected_address = request.contract_address();
    let tx_hash = client.submit(&account.signer, request).await?;
    info!(@grey, "deployment tx hash: {}", tx_hash.debug_lavender());

    let (address, receipt) = match config.confirmation {
        Confirmation::Submitted => (expected_address, None),
        Confirmation::Mined {
            confirmations,
            timeout,
        } => {
            debug!(@grey, "waiting for {confirmations} confirmation(s)");
            let receipt = client
                .wait_for_receipt(tx_hash, confirmations, timeout)
                .await?;
            let address = receipt.deployed_address()?;
            if address != expected_address {
                warn!(
                    @yellow,
                    "contract landed at {address}, expected {expected_address}"
                );
            }
            debug!(@grey, "gas used: {}", receipt.gas_used);
            (address, Some(receipt))
        }
    };

    mintln!(
        "{} deployed: {}",
        artifact.contract_name,
        address.to_checksum(None)
    );
    Ok(Deployment {
        contract,
        deployer: from,
        address,
        tx_hash,
        receipt,
    })
}
