//! Error taxonomy for token issuance and verification.
//!
//! Messages may name a missing claim or the expiration fact, which aids
//! legitimate debugging without weakening the scheme. They never contain
//! secret bytes, signature bytes, or claim values.

use thiserror::Error;

/// Errors that can occur while minting or verifying a token.
///
/// Verification distinguishes a bad signature from a structurally broken
/// token, but callers at an authorization boundary should treat both as
/// "reject the request". [`TokenError::Expired`] is the one kind that
/// means "was valid, no longer is".
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TokenError {
    /// No signing secret was available. Issuance and verification both
    /// refuse to proceed with an empty secret.
    #[error("signing secret is not configured")]
    MissingSecret,

    /// Issuance input failed validation (empty identifier, non-positive
    /// TTL). Never produced by verification.
    #[error("invalid claims: {0}")]
    InvalidClaims(String),

    /// The token could not be parsed: wrong segment count, oversized
    /// input, undecodable base64, unparsable claims payload, or a missing
    /// required claim field.
    #[error("malformed token: {0}")]
    Malformed(String),

    /// The recomputed HMAC did not match the signature segment. A token
    /// signed with a different secret is indistinguishable from a
    /// tampered one.
    #[error("token signature mismatch")]
    InvalidSignature,

    /// Structurally and cryptographically valid, but past its expiration.
    #[error("token expired at {exp} (unix seconds)")]
    Expired {
        /// The `exp` claim of the rejected token.
        exp: i64,
    },
}

/// Result type alias using [`TokenError`]
pub type Result<T> = std::result::Result<T, TokenError>;
