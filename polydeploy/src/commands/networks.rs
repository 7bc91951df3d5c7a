// Copyright 2025-2026, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

use polydeploy_tools::ops;

use crate::{
    common_args::{env_var, ConfigArgs},
    error::PolydeployResult,
};

#[derive(Debug, clap::Args)]
pub struct Args {
    #[command(flatten)]
    config: ConfigArgs,
}

pub fn exec(args: Args) -> PolydeployResult {
    let project = args.config.project()?;
    let summaries = ops::networks(&project, args.config.network_name(), &env_var);
    ops::print_networks(&summaries);
    Ok(())
}
