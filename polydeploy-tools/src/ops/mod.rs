// Copyright 2025-2026, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

pub use accounts::{accounts, Account};
pub use deploy::{deploy, DeployConfig};
pub use networks::{networks, print_networks, NetworkStatus, NetworkSummary};

mod accounts;
mod deploy;
mod networks;
