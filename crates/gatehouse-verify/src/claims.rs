//! Token claims and identity-name handling.

use serde::{Deserialize, Serialize};

/// Claims carried inside a decrypted token.
///
/// The wire form uses compact single-letter field names:
/// `{"c": "<subject>.<rest>", "e": <expiry epoch millis>}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenClaims {
    /// Subject identity, `<name>.<rest>` — only the leading segment is
    /// significant for authorization.
    #[serde(rename = "c")]
    pub subject: String,

    /// Expiry as epoch milliseconds; `0` means the token never expires.
    #[serde(rename = "e")]
    pub expires_at_ms: i64,
}

impl TokenClaims {
    /// The leading dot-segment of the subject (the whole subject when it
    /// contains no dot).
    pub fn subject_name(&self) -> &str {
        leading_segment(&self.subject)
    }

    /// Whether the token is still valid at `now_ms`.
    pub fn is_usable_at(&self, now_ms: i64) -> bool {
        self.expires_at_ms == 0 || self.expires_at_ms > now_ms
    }
}

/// The part of an identity string before its first `.`.
///
/// Peer identities and token subjects share the `<name>.<rest>` convention;
/// authorization compares only the `<name>` parts.
pub fn leading_segment(identity: &str) -> &str {
    identity.split('.').next().unwrap_or(identity)
}
