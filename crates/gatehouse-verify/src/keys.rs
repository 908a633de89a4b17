//! Key material loading for the verifier.
//!
//! The service private key is PKCS#8 PEM; the issuer public key is SPKI
//! PEM. Both are parsed eagerly so a bad key fails construction rather
//! than the first request.

use crate::error::AuthError;
use rsa::pkcs8::{DecodePrivateKey, DecodePublicKey};
use rsa::{RsaPrivateKey, RsaPublicKey};
use std::path::Path;

/// Parse a service private key from PKCS#8 PEM text.
pub fn load_private_key_pem(pem: &str) -> Result<RsaPrivateKey, AuthError> {
    RsaPrivateKey::from_pkcs8_pem(pem.trim())
        .map_err(|e| AuthError::InvalidPrivateKey(e.to_string()))
}

/// Parse an issuer public key from SPKI PEM text.
pub fn load_issuer_key_pem(pem: &str) -> Result<RsaPublicKey, AuthError> {
    RsaPublicKey::from_public_key_pem(pem.trim())
        .map_err(|e| AuthError::InvalidPublicKey(e.to_string()))
}

/// Load a service private key from a PEM file.
pub fn load_private_key_file(path: &Path) -> Result<RsaPrivateKey, AuthError> {
    let pem = std::fs::read_to_string(path)?;
    load_private_key_pem(&pem)
}

/// Load an issuer public key from a PEM file.
pub fn load_issuer_key_file(path: &Path) -> Result<RsaPublicKey, AuthError> {
    let pem = std::fs::read_to_string(path)?;
    load_issuer_key_pem(&pem)
}
