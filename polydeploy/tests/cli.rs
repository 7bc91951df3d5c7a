// Copyright 2025-2026, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

use std::{fs, path::Path};

use assert_cmd::Command;
use predicates::{prelude::*, str::contains};

const DEV_KEY: &str = "0xac0974bec39a17e36ba4a6b4d238ff944bacb478cbed5efcae784d7bf4f2ff80";
const UNSET_VAR: &str = "POLYDEPLOY_TEST_UNSET_ENDPOINT";

fn project(config: &str) -> tempfile::TempDir {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("polydeploy.toml"), config).unwrap();
    dir
}

fn polydeploy(dir: &Path) -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("polydeploy"));
    cmd.current_dir(dir)
        .env_remove("DEPLOY_NETWORK")
        .env_remove(UNSET_VAR);
    cmd
}

fn dead_network() -> String {
    format!(
        r#"
        default_network = "dead"
        contract = "Emperor"

        [networks.dead]
        url = "http://127.0.0.1:1"
        accounts = ["{DEV_KEY}"]
        chain_id = 137
        symbol = "MATIC"
        "#
    )
}

#[test]
fn unreachable_endpoint_exits_with_network_error() {
    let dir = project(&dead_network());
    polydeploy(dir.path())
        .assert()
        .code(1)
        .stderr(contains("network error"))
        .stdout(contains("deployed:").not());
}

#[test]
fn deploy_subcommand_matches_default_invocation() {
    let dir = project(&dead_network());
    polydeploy(dir.path())
        .arg("deploy")
        .assert()
        .code(1)
        .stderr(contains("network error"));
}

#[test]
fn malformed_key_is_a_credential_error() {
    let dir = project(&dead_network());
    polydeploy(dir.path())
        .args(["deploy", "--private-key", "0x1234"])
        .assert()
        .code(1)
        .stderr(contains("credential error"));
}

#[test]
fn unset_variable_is_a_configuration_error() {
    let dir = project(&format!(
        r#"
        default_network = "matic"

        [networks.matic]
        url = "${{{UNSET_VAR}}}"
        accounts = ["{DEV_KEY}"]
        "#
    ));
    polydeploy(dir.path())
        .arg("--contract")
        .arg("Emperor")
        .assert()
        .code(1)
        .stderr(contains("configuration error").and(contains(UNSET_VAR)));
}

#[test]
fn network_is_selected_from_environment() {
    let dir = project(&dead_network());
    polydeploy(dir.path())
        .env("DEPLOY_NETWORK", "ghost")
        .assert()
        .code(1)
        .stderr(contains("unknown network `ghost`"));
}

#[test]
fn missing_contract_is_a_configuration_error() {
    let dir = project("");
    polydeploy(dir.path())
        .assert()
        .code(1)
        .stderr(contains("no contract selected"));
}

#[test]
fn explicit_config_must_exist() {
    let dir = tempfile::tempdir().unwrap();
    polydeploy(dir.path())
        .args(["networks", "--config", "missing.toml"])
        .assert()
        .code(1)
        .stderr(contains("could not read missing.toml"));
}

#[test]
fn networks_lists_profiles_without_secrets() {
    let dir = project(&dead_network());
    polydeploy(dir.path())
        .arg("networks")
        .assert()
        .success()
        .stdout(
            contains("dead")
                .and(contains("localhost"))
                .and(contains("127.0.0.1:1"))
                .and(contains(&DEV_KEY[2..]).not()),
        );
}
