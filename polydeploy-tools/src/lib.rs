// Copyright 2025-2026, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

//! Tools for deploying contracts to EVM networks.
//!
//! The [`ops`] module holds the user-facing operations: [`ops::deploy`] runs the whole
//! deployment sequence and [`ops::accounts`] stops after reporting the signer. Both take an
//! explicit [`ops::DeployConfig`] and a [`core::client::DeploymentClient`], so nothing here reads
//! process-wide state.

#[macro_use]
mod macros;

pub mod core;
pub(crate) mod error;
pub mod ops;

pub mod utils;

pub use error::{Error, Result};
