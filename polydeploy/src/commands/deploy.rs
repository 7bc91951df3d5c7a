// Copyright 2025-2026, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

use std::{path::PathBuf, time::Duration};

use alloy::primitives::{utils::parse_ether, U256};
use polydeploy_tools::{
    core::{client::RpcClient, config::ConfigurationError, deployment::Confirmation},
    ops::{self, DeployConfig},
};

use crate::{
    common_args::{AuthArgs, ConfigArgs},
    error::PolydeployResult,
};

#[derive(Debug, clap::Args)]
pub struct Args {
    /// Contract to deploy, by name or as `contracts/Name.sol:Name`.
    #[arg(long)]
    contract: Option<String>,
    /// Directory of compiled artifacts [default: artifacts]
    #[arg(long, value_name = "DIR")]
    artifacts: Option<PathBuf>,
    /// The constructor arguments.
    #[arg(
        long,
        num_args(0..),
        value_name = "ARGS",
        allow_hyphen_values = true,
    )]
    constructor_args: Vec<String>,
    /// The amount of Ether sent to the contract through the constructor.
    #[arg(long, value_parser = parse_ether, default_value = "0")]
    constructor_value: U256,
    /// Blocks to wait for after the deployment is mined. With 0 the address is reported as soon
    /// as the transaction is accepted.
    #[arg(long, default_value_t = 1)]
    confirmations: u64,
    /// Seconds to wait for the receipt before giving up.
    #[arg(long, value_name = "SECS")]
    timeout: Option<u64>,

    #[command(flatten)]
    config: ConfigArgs,
    /// Wallet source to use.
    #[command(flatten)]
    auth: AuthArgs,
}

pub async fn exec(args: Args) -> PolydeployResult {
    let project = args.config.project()?;
    let network = args.config.network(&project, &args.auth)?;
    let contract = args
        .contract
        .or_else(|| project.contract.clone())
        .ok_or(ConfigurationError::NoContract)?;
    let client = RpcClient::new(&network)?;

    let config = DeployConfig {
        network,
        artifacts: args.artifacts.unwrap_or_else(|| project.artifacts_dir()),
        contract,
        constructor_args: args.constructor_args,
        constructor_value: args.constructor_value,
        confirmation: Confirmation::new(args.confirmations, args.timeout.map(Duration::from_secs)),
    };
    ops::deploy(&config, &client).await?;
    Ok(())
}
