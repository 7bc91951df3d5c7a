// Copyright 2025-2026, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

//! CLI for `polydeploy`.

use std::process::ExitCode;

use clap::Parser;

mod commands;
mod common_args;
mod error;
mod utils;

#[derive(Debug, Parser)]
#[command(name = "polydeploy")]
#[command(about = "Deploy compiled contracts to Polygon and other EVM networks", long_about = None)]
#[command(args_conflicts_with_subcommands = true)]
#[command(propagate_version = true)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Option<commands::Command>,

    /// Deployment options, used when no subcommand is given.
    #[command(flatten)]
    deploy: commands::deploy::Args,

    /// Whether to print debug info.
    #[arg(long, global = true)]
    verbose: bool,
}

fn main() -> ExitCode {
    // A missing .env file is fine
    dotenv::dotenv().ok();
    let args = Cli::parse();

    let log_level = if args.verbose {
        log::Level::Debug
    } else {
        log::Level::Info
    };
    simple_logger::init_with_level(log_level).expect("setting up logger");

    // No subcommand deploys
    let command = args
        .command
        .unwrap_or(commands::Command::Deploy(args.deploy));

    // Build async runtime and block on command execution
    let result = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .map_err(Into::into)
        .and_then(|rt| rt.block_on(commands::exec(command)));

    // Report any error and return proper exit code
    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            utils::print_error(&err);
            err.exit_code()
        }
    }
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn bare_invocation_takes_deploy_options() {
        let cli = Cli::try_parse_from(["polydeploy", "--network", "amoy", "--contract", "Token"])
            .unwrap();
        assert!(cli.command.is_none());
    }

    #[test]
    fn subcommands_parse() {
        for args in [
            &["polydeploy", "accounts", "--network", "amoy"][..],
            &["polydeploy", "networks"],
            &["polydeploy", "deploy", "--confirmations", "0", "--verbose"],
        ] {
            let cli = Cli::try_parse_from(args).unwrap();
            assert!(cli.command.is_some(), "{args:?}");
        }
    }
}
