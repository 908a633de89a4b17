//! Authorization verifier configuration.
//!
//! Key material can come from an environment variable or a file; the
//! environment variable wins when both are set. Keys are PEM-encoded:
//! PKCS#8 for the service private key, SPKI for the issuer public key.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Configuration for the authorization verifier.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthConfig {
    /// Whether token verification is enforced. When false the verifier is
    /// built in insecure mode and no key material is resolved.
    #[serde(default = "default_true")]
    pub secure: bool,

    /// Environment variable containing the service private key (PKCS#8 PEM).
    #[serde(default)]
    pub private_key_env: Option<String>,

    /// Path to the service private key file (PKCS#8 PEM).
    #[serde(default)]
    pub private_key_file: Option<PathBuf>,

    /// Environment variable containing the issuer public key (SPKI PEM).
    #[serde(default)]
    pub issuer_key_env: Option<String>,

    /// Path to the issuer public key file (SPKI PEM).
    #[serde(default)]
    pub issuer_key_file: Option<PathBuf>,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            secure: true,
            private_key_env: None,
            private_key_file: None,
            issuer_key_env: None,
            issuer_key_file: None,
        }
    }
}

impl AuthConfig {
    /// Load the configuration from a YAML file.
    pub fn from_yaml_file(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path)?;
        Ok(serde_yaml::from_str(&text)?)
    }

    /// Resolve the service private key PEM from environment or file.
    pub fn resolve_private_key(&self) -> Result<Option<String>, std::io::Error> {
        resolve(&self.private_key_env, &self.private_key_file)
    }

    /// Resolve the issuer public key PEM from environment or file.
    pub fn resolve_issuer_key(&self) -> Result<Option<String>, std::io::Error> {
        resolve(&self.issuer_key_env, &self.issuer_key_file)
    }
}

fn resolve(
    env_var: &Option<String>,
    file: &Option<PathBuf>,
) -> Result<Option<String>, std::io::Error> {
    if let Some(name) = env_var {
        if let Ok(pem) = std::env::var(name) {
            return Ok(Some(pem));
        }
    }

    if let Some(path) = file {
        if path.exists() {
            let pem = std::fs::read_to_string(path)?;
            return Ok(Some(pem.trim().to_string()));
        }
    }

    Ok(None)
}

/// Errors raised while loading configuration files.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse config file: {0}")]
    Parse(#[from] serde_yaml::Error),
}

fn default_true() -> bool {
    true
}
