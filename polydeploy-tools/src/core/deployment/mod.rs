// Copyright 2025-2026, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

//! Contract deployment transactions.

use std::time::Duration;

use alloy::primitives::{Address, TxHash};

use crate::utils::color::DebugColor;

pub use constructor::encode_constructor_args;
pub use request::DeploymentRequest;

mod constructor;
mod request;

/// How long a deployment waits before its address is reported.
///
/// With [`Confirmation::Submitted`] the address is derived from the sender and nonce and is only
/// a promise: the transaction may still be dropped or revert. [`Confirmation::Mined`] reports the
/// address from the receipt, which guarantees code exists there.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Confirmation {
    Submitted,
    Mined {
        confirmations: u64,
        timeout: Option<Duration>,
    },
}

impl Confirmation {
    /// Zero confirmations means not waiting for the receipt at all.
    pub fn new(confirmations: u64, timeout: Option<Duration>) -> Self {
        if confirmations == 0 {
            Self::Submitted
        } else {
            Self::Mined {
                confirmations,
                timeout,
            }
        }
    }
}

impl Default for Confirmation {
    fn default() -> Self {
        Self::Mined {
            confirmations: 1,
            timeout: None,
        }
    }
}

/// The parts of a transaction receipt a deployment cares about.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeploymentReceipt {
    pub tx_hash: TxHash,
    pub success: bool,
    pub contract_address: Option<Address>,
    pub block_number: Option<u64>,
    pub gas_used: u64,
}

impl DeploymentReceipt {
    /// Address of the created contract, if the transaction succeeded in creating one.
    pub fn deployed_address(&self) -> Result<Address, TransactionError> {
        if !self.success {
            return Err(TransactionError::Reverted {
                tx_hash: self.tx_hash,
            });
        }
        self.contract_address
            .ok_or(TransactionError::MissingReceiptAddress {
                tx_hash: self.tx_hash,
            })
    }
}

/// A contract instance created by one run.
#[derive(Debug, Clone)]
pub struct Deployment {
    /// Fully qualified name of the deployed artifact.
    pub contract: String,
    pub deployer: Address,
    pub address: Address,
    pub tx_hash: TxHash,
    /// Present when the run waited for the transaction to be mined.
    pub receipt: Option<DeploymentReceipt>,
}

#[derive(Debug, thiserror::Error)]
pub enum TransactionError {
    #[error("deploy tx rejected: {0}")]
    Rejected(String),
    #[error("deploy tx reverted {}", .tx_hash.debug_red())]
    Reverted { tx_hash: TxHash },
    #[error("deploy tx {} has no contract address in its receipt", .tx_hash.debug_red())]
    MissingReceiptAddress { tx_hash: TxHash },
    #[error("deploy tx {} failed to complete: {reason}", .tx_hash.debug_red())]
    FailedToComplete { tx_hash: TxHash, reason: String },
}
