// Copyright 2025-2026, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

use std::fmt;
use std::process::ExitCode;

use polydeploy_tools::core::config::ConfigurationError;

pub type PolydeployResult = Result<(), PolydeployError>;

#[derive(Debug)]
pub struct PolydeployError {
    error: eyre::Error,
    exit_code: ExitCode,
}

impl PolydeployError {
    pub fn exit_code(&self) -> ExitCode {
        self.exit_code
    }
}

impl fmt::Display for PolydeployError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        self.error.fmt(f)
    }
}

impl From<std::io::Error> for PolydeployError {
    fn from(err: std::io::Error) -> Self {
        Self {
            error: err.into(),
            exit_code: ExitCode::FAILURE,
        }
    }
}

impl From<eyre::Error> for PolydeployError {
    fn from(error: eyre::Error) -> Self {
        Self {
            error,
            exit_code: ExitCode::FAILURE,
        }
    }
}

impl From<polydeploy_tools::Error> for PolydeployError {
    fn from(err: polydeploy_tools::Error) -> Self {
        Self {
            error: err.into(),
            exit_code: ExitCode::FAILURE,
        }
    }
}

impl From<ConfigurationError> for PolydeployError {
    fn from(err: ConfigurationError) -> Self {
        polydeploy_tools::Error::from(err).into()
    }
}
