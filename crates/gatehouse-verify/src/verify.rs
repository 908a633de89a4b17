//! The authorization verifier.

use crate::claims::{TokenClaims, leading_segment};
use crate::error::AuthError;
use crate::keys;
use crate::outcome::Outcome;
use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use chrono::Utc;
use gatehouse_core::AuthConfig;
use rsa::pkcs1v15::{Signature, VerifyingKey};
use rsa::pkcs8::EncodePublicKey;
use rsa::signature::Verifier as _;
use rsa::{Pkcs1v15Encrypt, RsaPrivateKey, RsaPublicKey};
use sha2::Sha256;
use std::borrow::Cow;
use tracing::{info, warn};

/// Closure type to pass as `None` when a call carries no payload producer.
pub type NoPayload = fn() -> anyhow::Result<()>;

/// Verifies that an inbound request's token matches the transport-verified
/// peer identity and has not expired.
///
/// Keys are loaded once at construction and never mutated, so one verifier
/// can be shared across request-handling threads without locking.
pub struct Verifier {
    mode: Mode,
}

enum Mode {
    /// Security disabled deployment-wide: every call is pre-authorized.
    Insecure,
    /// Full verification with the service and issuer key material.
    Secure {
        private_key: RsaPrivateKey,
        verifying_key: VerifyingKey<Sha256>,
    },
}

impl Verifier {
    /// A verifier for deployments with security disabled end-to-end.
    /// Every call is treated as authorized; no key material is touched.
    pub fn insecure() -> Self {
        Self {
            mode: Mode::Insecure,
        }
    }

    /// A verifier holding the service private key (token decryption) and
    /// the trusted issuer public key (signature verification).
    ///
    /// The PKCS#1-v1.5/SHA-256 verifying key is built here, once, so the
    /// per-request path does no crypto setup.
    pub fn secure(private_key: RsaPrivateKey, issuer_key: RsaPublicKey) -> Self {
        if let Ok(der) = issuer_key.to_public_key_der() {
            info!(
                key_base64 = %STANDARD.encode(der.as_bytes()),
                "issuer public key loaded"
            );
        }

        Self {
            mode: Mode::Secure {
                private_key,
                verifying_key: VerifyingKey::<Sha256>::new(issuer_key),
            },
        }
    }

    /// Build a verifier from configuration, resolving key material from
    /// environment variables or files.
    ///
    /// Fails fast when secure mode is requested but either key is missing
    /// or unparsable.
    pub fn from_config(config: &AuthConfig) -> Result<Self, AuthError> {
        if !config.secure {
            return Ok(Self::insecure());
        }

        let private_pem = config
            .resolve_private_key()?
            .ok_or(AuthError::MissingKeyMaterial("a service private key"))?;
        let issuer_pem = config
            .resolve_issuer_key()?
            .ok_or(AuthError::MissingKeyMaterial("an issuer public key"))?;

        Ok(Self::secure(
            keys::load_private_key_pem(&private_pem)?,
            keys::load_issuer_key_pem(&issuer_pem)?,
        ))
    }

    /// Decide whether the request is authorized.
    ///
    /// `peer_identity` is trusted as given: the transport layer has
    /// already authenticated the caller. `token` and `signature` are
    /// untrusted base64 text and are rejected gracefully when malformed.
    ///
    /// `on_authorized` is invoked at most once, only after successful
    /// authorization; its failure is caught and folded into
    /// [`Outcome::Internal`] rather than escaping. This is the single
    /// entry point for calls with and without a payload producer — pass
    /// `None::<NoPayload>` when there is nothing to produce.
    pub fn verify<T, F>(
        &self,
        peer_identity: &str,
        token: &str,
        signature: &str,
        on_authorized: Option<F>,
    ) -> Outcome<T>
    where
        F: FnOnce() -> anyhow::Result<T>,
    {
        match &self.mode {
            Mode::Insecure => run_producer(on_authorized),
            Mode::Secure {
                private_key,
                verifying_key,
            } => verify_secure(
                private_key,
                verifying_key,
                peer_identity,
                token,
                signature,
                on_authorized,
            ),
        }
    }
}

fn verify_secure<T, F>(
    private_key: &RsaPrivateKey,
    verifying_key: &VerifyingKey<Sha256>,
    peer_identity: &str,
    token: &str,
    signature: &str,
    on_authorized: Option<F>,
) -> Outcome<T>
where
    F: FnOnce() -> anyhow::Result<T>,
{
    let caller_name = leading_segment(peer_identity);

    let token_bytes = match STANDARD.decode(normalize(token).as_bytes()) {
        Ok(bytes) => bytes,
        Err(e) => {
            warn!(error = %e, "token is not valid base64");
            return Outcome::Internal(format!("token base64 decoding failed: {e}"));
        }
    };
    let signature_bytes = match STANDARD.decode(normalize(signature).as_bytes()) {
        Ok(bytes) => bytes,
        Err(e) => {
            warn!(error = %e, "signature is not valid base64");
            return Outcome::Internal(format!("signature base64 decoding failed: {e}"));
        }
    };

    // The signature covers the token ciphertext, not the plaintext. A
    // malformed signature is the same refusal as a wrong one.
    let verified = Signature::try_from(signature_bytes.as_slice())
        .and_then(|sig| verifying_key.verify(&token_bytes, &sig));
    if verified.is_err() {
        return Outcome::Unauthorized("token validation failed".to_string());
    }

    let plaintext = match private_key.decrypt(Pkcs1v15Encrypt, &token_bytes) {
        Ok(plaintext) => plaintext,
        Err(e) => {
            warn!(error = %e, "token decryption failed");
            return Outcome::Internal(format!("token decryption failed: {e}"));
        }
    };

    let claims: TokenClaims = match serde_json::from_slice(&plaintext) {
        Ok(claims) => claims,
        Err(e) => {
            warn!(error = %e, "token claims are not valid JSON");
            return Outcome::Internal(format!("token claims parsing failed: {e}"));
        }
    };

    let token_name = claims.subject_name();
    if !caller_name.eq_ignore_ascii_case(token_name) {
        warn!(
            caller = caller_name,
            subject = token_name,
            "token subject does not match peer identity"
        );
        return Outcome::Forbidden("permission denied".to_string());
    }

    if !claims.is_usable_at(Utc::now().timestamp_millis()) {
        return Outcome::Unauthorized("authorization token has expired".to_string());
    }

    run_producer(on_authorized)
}

fn run_producer<T, F>(on_authorized: Option<F>) -> Outcome<T>
where
    F: FnOnce() -> anyhow::Result<T>,
{
    match on_authorized {
        None => Outcome::Authorized(None),
        Some(producer) => match producer() {
            Ok(payload) => Outcome::Authorized(Some(payload)),
            Err(e) => {
                warn!(error = %e, "authorized payload producer failed");
                Outcome::Internal(format!("payload producer failed: {e}"))
            }
        },
    }
}

/// Undo URL/whitespace mangling of base64 `+` characters in transit.
fn normalize(encoded: &str) -> Cow<'_, str> {
    if encoded.contains(' ') {
        Cow::Owned(encoded.replace(' ', "+"))
    } else {
        Cow::Borrowed(encoded)
    }
}
