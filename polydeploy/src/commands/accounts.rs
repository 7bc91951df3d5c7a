// Copyright 2025-2026, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

use polydeploy_tools::{core::client::RpcClient, ops};

use crate::{
    common_args::{AuthArgs, ConfigArgs},
    error::PolydeployResult,
};

#[derive(Debug, clap::Args)]
pub struct Args {
    #[command(flatten)]
    config: ConfigArgs,
    /// Wallet source to use.
    #[command(flatten)]
    auth: AuthArgs,
}

pub async fn exec(args: Args) -> PolydeployResult {
    let project = args.config.project()?;
    let network = args.config.network(&project, &args.auth)?;
    let client = RpcClient::new(&network)?;
    ops::accounts(&network, &client).await?;
    Ok(())
}
