// Copyright 2025-2026, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

use alloy::{
    network::TransactionBuilder,
    primitives::{Address, Bytes, U256},
    rpc::types::TransactionRequest,
};

/// Contract creation transaction, pinned to a nonce so the resulting address is known up front.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeploymentRequest {
    from: Address,
    nonce: u64,
    code: Bytes,
    value: U256,
}

impl DeploymentRequest {
    /// `code` is the creation bytecode followed by the ABI-encoded constructor arguments.
    pub fn new(from: Address, nonce: u64, code: impl Into<Bytes>) -> Self {
        Self {
            from,
            nonce,
            code: code.into(),
            value: U256::ZERO,
        }
    }

    /// Ether forwarded to a payable constructor.
    pub fn with_value(mut self, value: U256) -> Self {
        self.value = value;
        self
    }

    pub fn from(&self) -> Address {
        self.from
    }

    pub fn nonce(&self) -> u64 {
        self.nonce
    }

    pub fn code(&self) -> &Bytes {
        &self.code
    }

    pub fn value(&self) -> U256 {
        self.value
    }

    /// The `CREATE` address: derived from the sender and nonce only.
    pub fn contract_address(&self) -> Address {
        self.from.create(self.nonce)
    }

    /// Gas and fees are left for the provider to fill in.
    pub fn into_transaction_request(self) -> TransactionRequest {
        TransactionRequest::default()
            .with_from(self.from)
            .with_nonce(self.nonce)
            .with_value(self.value)
            .with_deploy_code(self.code)
    }
}

#[cfg(test)]
mod tests {
    use alloy::primitives::{address, TxKind};

    use super::*;

    const DEV_ADDRESS: Address = address!("f39Fd6e51aad88F6F4ce6aB8827279cffFb92266");

    #[test]
    fn predicts_create_address() {
        let first = DeploymentRequest::new(DEV_ADDRESS, 0, vec![0x60, 0x80]);
        let second = DeploymentRequest::new(DEV_ADDRESS, 1, vec![0x60, 0x80]);
        assert_eq!(
            first.contract_address(),
            address!("5FbDB2315678afecb367f032d93F642f64180aa3")
        );
        assert_eq!(
            second.contract_address(),
            address!("e7f1725E7734CE288F8367e1Bb143E90bb3F0512")
        );
    }

    #[test]
    fn builds_creation_transaction() {
        let value = U256::from(5);
        let tx = DeploymentRequest::new(DEV_ADDRESS, 9, vec![0x60, 0x80])
            .with_value(value)
            .into_transaction_request();
        assert_eq!(tx.from, Some(DEV_ADDRESS));
        assert_eq!(tx.nonce, Some(9));
        assert_eq!(tx.value, Some(value));
        assert_eq!(tx.to, Some(TxKind::Create));
        assert_eq!(tx.input.input().map(|b| b.to_vec()), Some(vec![0x60, 0x80]));
    }
}
