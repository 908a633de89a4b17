//! # gatehouse-verify
//!
//! Request-authorization verification for Gatehouse services.
//!
//! This crate provides functionality for:
//! - Loading RSA key material (service private key, issuer public key)
//! - Verifying detached issuer signatures over encrypted tokens
//! - Decrypting tokens and checking the claims inside against the caller
//! - Mapping every decision onto an HTTP-renderable [`Outcome`]
//!
//! ## Verification model
//!
//! Each inbound request carries two opaque base64 strings issued by a
//! trusted authority:
//!
//! | Artifact | Produced with | Checked with |
//! |-----------|------------------------------|--------------------------|
//! | **Token** | issuer encrypts claims with the service public key | service private key (decrypt) |
//! | **Signature** | issuer signs the token ciphertext | issuer public key (RSASSA-PKCS1-v1.5/SHA-256) |
//!
//! The transport layer authenticates the caller before the verifier runs;
//! the verifier's job is to tie the token's subject to that peer identity
//! and to enforce the token's expiry. A call is authorized only when the
//! signature, the decryption, the identity match, and the expiry check all
//! hold at once.
//!
//! The verifier holds its keys immutably for the process lifetime, so it
//! can be shared across request-handling threads without locking.

pub mod claims;
pub mod error;
pub mod keys;
pub mod outcome;
pub mod verify;

pub use claims::TokenClaims;
pub use error::AuthError;
pub use keys::{load_issuer_key_file, load_issuer_key_pem, load_private_key_file, load_private_key_pem};
pub use outcome::{ErrorBody, Outcome};
pub use verify::{NoPayload, Verifier};
