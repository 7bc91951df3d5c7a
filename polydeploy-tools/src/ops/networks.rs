// Copyright 2025-2026, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

use crate::core::config::ProjectConfig;

/// One configured network as seen from the current environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NetworkSummary {
    pub name: String,
    /// Whether this network would be used by a run with the same selection.
    pub selected: bool,
    pub status: NetworkStatus,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NetworkStatus {
    /// The profile resolves and validates. Nothing has been sent to the endpoint.
    Ready {
        host: Option<String>,
        chain_id: Option<u64>,
        accounts: usize,
        symbol: String,
    },
    /// The profile cannot be used as is.
    Unavailable(String),
}

/// Resolves every network of `project` without touching any endpoint.
pub fn networks(
    project: &ProjectConfig,
    selected: Option<&str>,
    env: &impl Fn(&str) -> Option<String>,
) -> Vec<NetworkSummary> {
    let selected = project.selected_network(selected);
    project
        .network_names()
        .into_iter()
        .map(|name| {
            let status = match project
                .network(Some(name), env)
                .and_then(|network| network.validate().map(|_| network))
            {
                Ok(network) => NetworkStatus::Ready {
                    host: network.endpoint_host(),
                    chain_id: network.chain_id,
                    accounts: network.accounts.len(),
                    symbol: network.symbol,
                },
                Err(err) => NetworkStatus::Unavailable(err.to_string()),
            };
            NetworkSummary {
                name: name.to_string(),
                selected: name == selected,
                status,
            }
        })
        .collect()
}

pub fn print_networks(summaries: &[NetworkSummary]) {
    for summary in summaries {
        let marker = if summary.selected { "*" } else { " " };
        match &summary.status {
            NetworkStatus::Ready {
                host,
                chain_id,
                accounts,
                symbol,
            } => {
                let host = host.as_deref().unwrap_or("?");
                let chain_id = chain_id.map_or("any".to_string(), |id| id.to_string());
                mintln!(
                    "{marker} {} {} chain id {} {} account(s) {}",
                    summary.name,
                    host,
                    chain_id,
                    accounts,
                    symbol
                );
            }
            NetworkStatus::Unavailable(reason) => {
                greyln!(
                    "{marker} {} {}",
                    summary.name.lavender(),
                    reason.red()
                );
            }
        }
    }
}
