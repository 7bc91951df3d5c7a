// Copyright 2025-2026, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

//! The JSON-RPC boundary.
//!
//! Operations talk to the chain only through [`DeploymentClient`], which keeps them independent of
//! the transport and lets tests substitute a mock network.

use std::time::Duration;

use alloy::{
    network::EthereumWallet,
    primitives::{Address, TxHash, U256},
    providers::{
        PendingTransactionBuilder, PendingTransactionError, Provider, ProviderBuilder, RootProvider,
    },
    signers::local::PrivateKeySigner,
    transports::{RpcError, TransportErrorKind},
};
use async_trait::async_trait;

use super::{
    deployment::{DeploymentReceipt, DeploymentRequest, TransactionError},
    network::{NetworkConfig, NetworkError},
};
use crate::{utils::color::DebugColor, Result};

/// Chain access needed to deploy a contract.
///
/// Every call is a single round-trip; nothing is retried.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait DeploymentClient: Send + Sync {
    /// Chain id reported by the endpoint.
    async fn chain_id(&self) -> Result<u64>;

    /// Balance of `address` in wei.
    async fn balance(&self, address: Address) -> Result<U256>;

    /// Next nonce for `address`, counting pending transactions.
    async fn nonce(&self, address: Address) -> Result<u64>;

    /// Signs `request` with `signer` and submits it, returning once the node accepts it.
    async fn submit(&self, signer: &PrivateKeySigner, request: DeploymentRequest)
        -> Result<TxHash>;

    /// Waits until `tx_hash` is mined with `confirmations` blocks on top.
    async fn wait_for_receipt(
        &self,
        tx_hash: TxHash,
        confirmations: u64,
        timeout: Option<Duration>,
    ) -> Result<DeploymentReceipt>;
}

/// [`DeploymentClient`] over an HTTP JSON-RPC endpoint.
#[derive(Clone)]
pub struct RpcClient {
    provider: RootProvider,
}

impl RpcClient {
    /// Creates a client for the network's endpoint. No request is made until the first call.
    pub fn new(network: &NetworkConfig) -> Result<Self> {
        let url = network.validate()?;
        debug!(@grey, "using network {}", network.name);
        Ok(Self {
            provider: RootProvider::new_http(url),
        })
    }
}

#[async_trait]
impl DeploymentClient for RpcClient {
    async fn chain_id(&self) -> Result<u64> {
        Ok(self
            .provider
            .get_chain_id()
            .await
            .map_err(NetworkError::from)?)
    }

    async fn balance(&self, address: Address) -> Result<U256> {
        Ok(self
            .provider
            .get_balance(address)
            .await
            .map_err(NetworkError::from)?)
    }

    async fn nonce(&self, address: Address) -> Result<u64> {
        Ok(self
            .provider
            .get_transaction_count(address)
            .pending()
            .await
            .map_err(NetworkError::from)?)
    }

    async fn submit(
        &self,
        signer: &PrivateKeySigner,
        request: DeploymentRequest,
    ) -> Result<TxHash> {
        let provider = ProviderBuilder::new()
            .wallet(EthereumWallet::from(signer.clone()))
            .connect_provider(self.provider.clone());
        let pending = provider
            .send_transaction(request.into_transaction_request())
            .await
            .map_err(submission_error)?;
        let tx_hash = *pending.tx_hash();
        debug!(@grey, "sent deploy tx: {}", tx_hash.debug_lavender());
        Ok(tx_hash)
    }

    async fn wait_for_receipt(
        &self,
        tx_hash: TxHash,
        confirmations: u64,
        timeout: Option<Duration>,
    ) -> Result<DeploymentReceipt> {
        let receipt = PendingTransactionBuilder::new(self.provider.clone(), tx_hash)
            .with_required_confirmations(confirmations)
            .with_timeout(timeout)
            .get_receipt()
            .await
            .map_err(|err| receipt_error(tx_hash, err))?;
        Ok(DeploymentReceipt {
            tx_hash,
            success: receipt.status(),
            contract_address: receipt.contract_address,
            block_number: receipt.block_number,
            gas_used: receipt.gas_used,
        })
    }
}

/// A JSON-RPC error response means the node looked at the transaction and refused it; anything
/// else never reached that point.
fn submission_error(err: RpcError<TransportErrorKind>) -> crate::Error {
    if err.is_error_resp() {
        TransactionError::Rejected(err.to_string()).into()
    } else {
        NetworkError::from(err).into()
    }
}

/// Losing the endpoint while waiting is a network failure; a timeout or a dropped watch means the
/// transaction itself did not complete.
fn receipt_error(tx_hash: TxHash, err: PendingTransactionError) -> crate::Error {
    match err {
        PendingTransactionError::TransportError(err) => NetworkError::from(err).into(),
        err => TransactionError::FailedToComplete {
            tx_hash,
            reason: err.to_string(),
        }
        .into(),
    }
}

#[cfg(test)]
mod tests {
    use alloy::{providers::WatchTxError, rpc::json_rpc::ErrorPayload};

    use super::*;
    use crate::Error;

    #[test]
    fn node_errors_are_rejections() {
        let payload = ErrorPayload {
            code: -32000,
            message: "insufficient funds for gas * price + value".into(),
            data: None,
        };
        let err = submission_error(RpcError::ErrorResp(payload));
        assert!(matches!(
            err,
            Error::Transaction(TransactionError::Rejected(ref msg)) if msg.contains("insufficient funds")
        ));
    }

    #[test]
    fn transport_errors_are_network_errors() {
        let err = submission_error(TransportErrorKind::backend_gone());
        assert!(matches!(err, Error::Network(_)));
    }

    #[test]
    fn lost_endpoint_while_waiting_is_a_network_error() {
        let err = receipt_error(
            TxHash::repeat_byte(1),
            PendingTransactionError::TransportError(TransportErrorKind::backend_gone()),
        );
        assert!(matches!(err, Error::Network(_)));
    }

    #[test]
    fn receipt_timeout_is_a_transaction_error() {
        let tx_hash = TxHash::repeat_byte(1);
        let err = receipt_error(tx_hash, PendingTransactionError::TxWatcher(WatchTxError::Timeout));
        assert!(matches!(
            err,
            Error::Transaction(TransactionError::FailedToComplete { tx_hash: hash, .. }) if hash == tx_hash
        ));
    }

    #[tokio::test]
    async fn new_validates_endpoint() {
        let mut network = NetworkConfig::localhost();
        assert!(RpcClient::new(&network).is_ok());
        network.url = "ftp://example.com".to_string();
        assert!(matches!(
            RpcClient::new(&network),
            Err(Error::Configuration(_))
        ));
    }
}
