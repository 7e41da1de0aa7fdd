//! Initial store contents.

use std::path::{Path, PathBuf};

use thiserror::Error;

use storeapi_core::DomainError;
use storeapi_inventory::{Item, ItemPayload};

/// Seed shipped with the binary.
pub const DEFAULT_SEED: &str = include_str!("../seed/store.json");

#[derive(Debug, Error)]
pub enum SeedError {
    #[error("failed to read seed file {path}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("seed is not a JSON array of items")]
    Parse(#[from] serde_json::Error),

    #[error("seed entry #{index} is invalid: {source}")]
    InvalidItem {
        index: usize,
        #[source]
        source: DomainError,
    },
}

/// Load the seed from `path`, or the built-in one when `None`.
pub fn load_seed(path: Option<&Path>) -> Result<Vec<Item>, SeedError> {
    match path {
        Some(path) => {
            let raw = std::fs::read_to_string(path).map_err(|source| SeedError::Read {
                path: path.to_path_buf(),
                source,
            })?;
            tracing::info!(path = %path.display(), "loading seed file");
            parse_seed(&raw)
        }
        None => parse_seed(DEFAULT_SEED),
    }
}

/// Parse a JSON array of items. Entries go through the same strict
/// validation as client payloads.
pub fn parse_seed(raw: &str) -> Result<Vec<Item>, SeedError> {
    let payloads: Vec<ItemPayload> = serde_json::from_str(raw)?;

    payloads
        .iter()
        .enumerate()
        .map(|(index, payload)| {
            payload
                .to_item()
                .map_err(|source| SeedError::InvalidItem { index, source })
        })
        .collect()
}
