//! Runtime configuration, read from the environment once at startup.

use std::net::{Ipv4Addr, SocketAddr};
use std::num::ParseIntError;
use std::path::PathBuf;

use thiserror::Error;

pub const DEFAULT_BASE_URL: &str = "http://localhost";
pub const DEFAULT_PORT: u16 = 8080;
pub const DEFAULT_DOCS_PATH: &str = "/api-docs";

/// Paths owned by the item routes; the docs endpoint may not shadow them.
const RESERVED_PATHS: &[&str] = &["/", "/items", "/item", "/reset", "/health"];

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("PORT must be a TCP port number, got {value:?}")]
    InvalidPort {
        value: String,
        #[source]
        source: ParseIntError,
    },

    #[error("SWAGGER_URL {0:?} must start with '/', contain no ':', '*' or whitespace, and not clash with an API route")]
    InvalidDocsPath(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    /// Public base URL (scheme + host), used in the banner and OpenAPI servers.
    pub base_url: String,
    pub port: u16,
    /// Path the OpenAPI document is served at.
    pub docs_path: String,
    /// JSON seed file; the built-in seed is used when unset.
    pub seed_path: Option<PathBuf>,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            port: DEFAULT_PORT,
            docs_path: DEFAULT_DOCS_PATH.to_string(),
            seed_path: None,
        }
    }
}

impl ApiConfig {
    /// Read `BASE_URL`, `PORT`, `SWAGGER_URL` and `STORE_SEED_PATH`.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a config from an arbitrary key lookup (empty values count as unset).
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let mut config = Self::default();

        match get("BASE_URL") {
            Some(url) => config.base_url = url.trim().trim_end_matches('/').to_string(),
            None => tracing::info!("BASE_URL not set; using {DEFAULT_BASE_URL}"),
        }

        match get("PORT") {
            Some(raw) => {
                config.port = raw
                    .trim()
                    .parse()
                    .map_err(|source| ConfigError::InvalidPort { value: raw.clone(), source })?;
            }
            None => tracing::info!("PORT not set; using {DEFAULT_PORT}"),
        }

        if let Some(path) = get("SWAGGER_URL") {
            config.docs_path = validate_docs_path(path.trim())?;
        }

        config.seed_path = get("STORE_SEED_PATH").map(PathBuf::from);

        Ok(config)
    }

    pub fn bind_addr(&self) -> SocketAddr {
        SocketAddr::from((Ipv4Addr::UNSPECIFIED, self.port))
    }

    /// Absolute URL of the OpenAPI document.
    pub fn docs_url(&self) -> String {
        format!("{}:{}{}", self.base_url, self.port, self.docs_path)
    }

    /// Plaintext landing page.
    pub fn welcome_banner(&self) -> String {
        format!(
            "Welcome to the store!\nAll information about API is here: {}",
            self.docs_url()
        )
    }
}

fn validate_docs_path(path: &str) -> Result<String, ConfigError> {
    let invalid = !path.starts_with('/')
        || path.contains([':', '*'])
        || path.chars().any(char::is_whitespace)
        || RESERVED_PATHS.contains(&path)
        || path.starts_with("/item/");

    if invalid {
        return Err(ConfigError::InvalidDocsPath(path.to_string()));
    }
    Ok(path.to_string())
}
