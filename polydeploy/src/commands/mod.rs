// Copyright 2025-2026, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

use crate::error::PolydeployResult;

mod accounts;
pub mod deploy;
mod networks;

#[derive(Debug, clap::Subcommand)]
pub enum Command {
    /// Print the deploying account and its balance
    #[clap(visible_alias = "a")]
    Accounts(accounts::Args),
    /// Deploy a new instance of a compiled contract
    #[clap(visible_alias = "d")]
    Deploy(deploy::Args),
    /// List configured networks
    #[clap(visible_alias = "n")]
    Networks(networks::Args),
}

pub async fn exec(cmd: Command) -> PolydeployResult {
    match cmd {
        Command::Accounts(args) => accounts::exec(args).await,
        Command::Deploy(args) => deploy::exec(args).await,
        Command::Networks(args) => networks::exec(args),
    }
}
