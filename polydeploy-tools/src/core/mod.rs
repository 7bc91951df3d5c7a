// Copyright 2025-2026, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

pub mod account;
pub mod artifact;
pub mod client;
pub mod config;
pub mod deployment;
pub mod network;
