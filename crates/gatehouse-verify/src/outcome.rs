//! Verification outcomes and their HTTP rendering.

use serde::Serialize;

/// The decision produced by a single `verify` call.
///
/// Exactly one variant per call; the verifier keeps no state between
/// calls. `T` is the payload type produced by the caller-supplied
/// `on_authorized` closure, `()` when there is none.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome<T = ()> {
    /// The caller is who it claims to be and the token has not expired.
    /// Carries the producer's payload when one was supplied.
    Authorized(Option<T>),

    /// Signature verification failed, or the token has expired.
    Unauthorized(String),

    /// The token's subject does not match the peer identity.
    Forbidden(String),

    /// Decoding, decryption, parsing, or the payload producer failed.
    /// The detail is logged server-side; the rendered body stays generic.
    Internal(String),
}

impl<T> Outcome<T> {
    /// The HTTP status the embedding layer should respond with.
    ///
    /// Identity mismatch maps to 401 rather than 403 on purpose: deployed
    /// consumers of this protocol treat every authorization refusal as
    /// 401, and changing the mapping would break them. The `Forbidden`
    /// variant is kept distinct so embedders can still tell the cases
    /// apart.
    pub fn http_status(&self) -> u16 {
        match self {
            Outcome::Authorized(_) => 200,
            Outcome::Unauthorized(_) | Outcome::Forbidden(_) => 401,
            Outcome::Internal(_) => 500,
        }
    }

    /// The structured error body for non-authorized outcomes.
    pub fn error_body(&self) -> Option<ErrorBody> {
        match self {
            Outcome::Authorized(_) => None,
            Outcome::Unauthorized(message) | Outcome::Forbidden(message) => Some(ErrorBody {
                message: message.clone(),
                code: 401,
                kind: Some(ErrorBody::KIND_AUTH.to_string()),
            }),
            Outcome::Internal(_) => Some(ErrorBody {
                message: "Internal Server Error".to_string(),
                code: 500,
                kind: None,
            }),
        }
    }

    /// Whether this outcome authorizes the request.
    pub fn is_authorized(&self) -> bool {
        matches!(self, Outcome::Authorized(_))
    }
}

/// The JSON error body rendered for refused requests:
/// `{"message": ..., "code": ..., "type": "AUTH"}`.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct ErrorBody {
    pub message: String,
    pub code: u16,

    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
}

impl ErrorBody {
    /// Marker for authorization refusals, as opposed to internal faults.
    pub const KIND_AUTH: &'static str = "AUTH";
}
