// Copyright 2025-2026, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

//! Compiled contract artifacts.
//!
//! Artifacts follow the Hardhat layout: one JSON file per contract at
//! `<root>/<source path>/<ContractName>.json`, e.g. `artifacts/contracts/Token.sol/Token.json`.
//! Debug files (`*.dbg.json`) and the `build-info` directory are ignored.
//!
//! A contract can be named either by its bare name (`Token`) or fully qualified
//! (`contracts/Token.sol:Token`). A bare name must match exactly one artifact.

use std::{
    collections::BTreeMap,
    fs,
    path::{Path, PathBuf},
};

use alloy::{
    json_abi::{Constructor, JsonAbi},
    primitives::Bytes,
};
use glob::Pattern;
use serde::Deserialize;

use crate::utils::decode0x;

const BUILD_INFO_DIR: &str = "build-info";

#[derive(Debug, thiserror::Error)]
pub enum ArtifactError {
    #[error("artifacts directory {} does not exist, compile the contracts first", .0.display())]
    MissingDirectory(PathBuf),
    #[error("`{0}` is not a valid contract name")]
    InvalidName(String),
    #[error("artifact for contract `{0}` not found")]
    NotFound(String),
    #[error("contract name `{name}` is ambiguous, use one of: {candidates}")]
    Ambiguous { name: String, candidates: String },
    #[error("could not read artifact {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("malformed artifact {}: {source}", .path.display())]
    Malformed {
        path: PathBuf,
        source: serde_json::Error,
    },
    #[error("artifact search failed: {0}")]
    Search(#[from] glob::GlobError),
    #[error("contract `{0}` is abstract or an interface and cannot be deployed")]
    Abstract(String),
    #[error("contract `{name}` must be linked to libraries before deployment: {libraries}")]
    UnlinkedLibraries { name: String, libraries: String },
    #[error("contract `{name}` has invalid bytecode: {source}")]
    InvalidBytecode {
        name: String,
        source: hex::FromHexError,
    },
}

/// A compiled contract: creation bytecode plus its ABI.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContractArtifact {
    pub contract_name: String,
    pub source_name: String,
    pub abi: JsonAbi,
    pub bytecode: String,
    /// Source file → library name → placeholder offsets.
    #[serde(default)]
    pub link_references: BTreeMap<String, BTreeMap<String, serde_json::Value>>,
}

impl ContractArtifact {
    /// `source:Name`, unique within a project.
    pub fn fully_qualified_name(&self) -> String {
        format!("{}:{}", self.source_name, self.contract_name)
    }

    pub fn constructor(&self) -> Option<&Constructor> {
        self.abi.constructor()
    }

    /// Creation bytecode, checked to be deployable as-is.
    pub fn creation_code(&self) -> Result<Bytes, ArtifactError> {
        let code = self.bytecode.trim();
        if code.is_empty() || code == "0x" {
            return Err(ArtifactError::Abstract(self.fully_qualified_name()));
        }
        if !self.link_references.is_empty() || code.contains("__") {
            let libraries = self
                .link_references
                .iter()
                .flat_map(|(source, libs)| libs.keys().map(move |lib| format!("{source}:{lib}")))
                .collect::<Vec<_>>();
            return Err(ArtifactError::UnlinkedLibraries {
                name: self.fully_qualified_name(),
                libraries: if libraries.is_empty() {
                    "unknown".to_string()
                } else {
                    libraries.join(", ")
                },
            });
        }
        decode0x(code)
            .map(Bytes::from)
            .map_err(|source| ArtifactError::InvalidBytecode {
                name: self.fully_qualified_name(),
                source,
            })
    }
}

/// Looks up artifacts below a root directory.
#[derive(Debug, Clone)]
pub struct ArtifactStore {
    root: PathBuf,
}

impl ArtifactStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Resolves a bare or fully qualified contract name to its artifact.
    pub fn load(&self, name: &str) -> Result<ContractArtifact, ArtifactError> {
        if !self.root.is_dir() {
            return Err(ArtifactError::MissingDirectory(self.root.clone()));
        }
        match name.rsplit_once(':') {
            Some((source, contract)) => self.load_qualified(name, source, contract),
            None => self.load_bare(name),
        }
    }

    fn load_qualified(
        &self,
        name: &str,
        source: &str,
        contract: &str,
    ) -> Result<ContractArtifact, ArtifactError> {
        check_identifier(contract)?;
        if source.is_empty() || Path::new(source).is_absolute() || source.contains("..") {
            return Err(ArtifactError::InvalidName(name.to_string()));
        }
        let path = self.root.join(source).join(format!("{contract}.json"));
        if !path.is_file() {
            return Err(ArtifactError::NotFound(name.to_string()));
        }
        let artifact = read_artifact(&path)?;
        if artifact.contract_name != contract {
            return Err(ArtifactError::NotFound(name.to_string()));
        }
        Ok(artifact)
    }

    fn load_bare(&self, name: &str) -> Result<ContractArtifact, ArtifactError> {
        check_identifier(name)?;
        let pattern = format!(
            "{}/**/{}.json",
            Pattern::escape(&self.root.to_string_lossy()),
            name
        );
        let mut found = Vec::new();
        // The pattern is built from an escaped root and a checked identifier.
        let paths = glob::glob(&pattern).map_err(|_| ArtifactError::InvalidName(name.into()))?;
        for path in paths {
            let path = path?;
            if is_build_info(&self.root, &path) {
                continue;
            }
            let artifact = read_artifact(&path)?;
            if artifact.contract_name == name {
                found.push(artifact);
            }
        }
        debug!(@grey, "found {} artifact(s) named {name}", found.len());

        match found.len() {
            0 => Err(ArtifactError::NotFound(name.to_string())),
            1 => Ok(found.remove(0)),
            _ => {
                let mut candidates: Vec<_> =
                    found.iter().map(|a| a.fully_qualified_name()).collect();
                candidates.sort();
                Err(ArtifactError::Ambiguous {
                    name: name.to_string(),
                    candidates: candidates.join(", "),
                })
            }
        }
    }
}

fn read_artifact(path: &Path) -> Result<ContractArtifact, ArtifactError> {
    let text = fs::read_to_string(path).map_err(|source| ArtifactError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&text).map_err(|source| ArtifactError::Malformed {
        path: path.to_path_buf(),
        source,
    })
}

fn is_build_info(root: &Path, path: &Path) -> bool {
    path.strip_prefix(root)
        .ok()
        .and_then(|rel| rel.components().next())
        .is_some_and(|first| first.as_os_str() == BUILD_INFO_DIR)
}

/// Solidity identifiers: letters, digits, `_` and `$`, not starting with a digit.
fn check_identifier(name: &str) -> Result<(), ArtifactError> {
    let mut chars = name.chars();
    let valid = chars
        .next()
        .is_some_and(|c| c.is_ascii_alphabetic() || c == '_' || c == '$')
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '$');
    if valid {
        Ok(())
    } else {
        Err(ArtifactError::InvalidName(name.to_string()))
    }
}
