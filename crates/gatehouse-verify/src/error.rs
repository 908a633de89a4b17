//! Error types for verifier construction.

use thiserror::Error;

/// Errors that can occur while building a [`Verifier`](crate::Verifier).
///
/// These are all construction-time failures. Once a verifier exists,
/// `verify` never returns an error; every per-request failure is folded
/// into an [`Outcome`](crate::Outcome).
#[derive(Debug, Error)]
pub enum AuthError {
    /// Failed to parse the service private key.
    #[error("failed to parse private key: {0}")]
    InvalidPrivateKey(String),

    /// Failed to parse the issuer public key.
    #[error("failed to parse issuer public key: {0}")]
    InvalidPublicKey(String),

    /// Secure mode requested but a key could not be resolved.
    #[error("secure mode requires {0}, but none was configured")]
    MissingKeyMaterial(&'static str),

    /// IO error reading key material.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
