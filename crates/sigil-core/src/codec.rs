//! Token encoding, signing, and verification.
//!
//! Wire format, reproduced bit-for-bit for interoperability with any
//! verifier expecting this shape:
//!
//! ```text
//! <base64url(header_json)>.<base64url(claims_json)>.<base64url(hmac_sha256_sig)>
//! ```
//!
//! The header bytes are exactly `{"alg":"HS256","typ":"JWT"}` and the
//! signature is HMAC-SHA256 over the ASCII bytes of
//! `<header_b64>.<claims_b64>`. Base64url segments carry no padding.
//!
//! Issuance and verification are pure functions of their arguments and
//! the wall clock; nothing is persisted and no state is shared, so calls
//! may run fully in parallel without coordination. Each clock-dependent
//! operation has an `_at` variant taking an explicit `now` so boundary
//! conditions can be tested without wall-clock dependence.

use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine as _};
use ring::hmac;
use serde::Serialize;

use crate::claims::{Claims, Role};
use crate::error::TokenError;
use crate::secret::{ExposeSecret, SecretString};

/// Maximum allowed token size in bytes (4KB).
///
/// Oversized input is rejected BEFORE base64 decoding or any
/// cryptographic work, so a hostile caller cannot burn CPU or memory by
/// presenting a multi-megabyte "token". Typical tokens in this format are
/// 250-400 bytes; 4KB leaves room for long opaque identifiers.
pub const MAX_TOKEN_SIZE_BYTES: usize = 4096;

#[derive(Serialize)]
struct Header<'a> {
    alg: &'a str,
    typ: &'a str,
}

const HEADER: Header<'static> = Header {
    alg: "HS256",
    typ: "JWT",
};

/// Mint a signed token for `(tenant_id, user_id, role)` with the current
/// wall clock as `iat` and a lifetime of `ttl_secs`.
///
/// The output is a self-contained bearer token; whoever presents it gets
/// whatever `role` grants, so it should travel only over trusted
/// channels.
///
/// # Errors
///
/// - [`TokenError::MissingSecret`] if `secret` is empty — absence of a
///   configured secret is a configuration error, never a zero-key default
/// - [`TokenError::InvalidClaims`] if `tenant_id` or `user_id` is empty,
///   or `ttl_secs` is not positive
pub fn issue(
    tenant_id: &str,
    user_id: &str,
    role: Role,
    secret: &SecretString,
    ttl_secs: i64,
) -> Result<String, TokenError> {
    issue_at(
        tenant_id,
        user_id,
        role,
        secret,
        ttl_secs,
        chrono::Utc::now().timestamp(),
    )
}

/// Deterministic issuance against an explicit `now` timestamp.
///
/// Prefer [`issue`] in production code. This variant exists so that
/// expiry boundaries can be unit-tested without wall-clock dependence.
///
/// # Errors
///
/// Same as [`issue`].
pub fn issue_at(
    tenant_id: &str,
    user_id: &str,
    role: Role,
    secret: &SecretString,
    ttl_secs: i64,
    now: i64,
) -> Result<String, TokenError> {
    if secret.expose_secret().is_empty() {
        return Err(TokenError::MissingSecret);
    }
    if tenant_id.is_empty() {
        return Err(TokenError::InvalidClaims(
            "tenant_id must not be empty".to_string(),
        ));
    }
    if user_id.is_empty() {
        return Err(TokenError::InvalidClaims(
            "user_id must not be empty".to_string(),
        ));
    }
    if ttl_secs <= 0 {
        return Err(TokenError::InvalidClaims(format!(
            "ttl must be positive, got {ttl_secs}"
        )));
    }
    let exp = now.checked_add(ttl_secs).ok_or_else(|| {
        TokenError::InvalidClaims(format!("ttl {ttl_secs} overflows the timestamp range"))
    })?;

    let claims = Claims {
        tenant_id: tenant_id.to_string(),
        user_id: user_id.to_string(),
        role,
        iat: now,
        exp,
    };

    encode(&claims, secret)
}

fn encode(claims: &Claims, secret: &SecretString) -> Result<String, TokenError> {
    let header_json = serde_json::to_vec(&HEADER)
        .map_err(|e| TokenError::InvalidClaims(format!("header serialization failed: {e}")))?;
    let claims_json = serde_json::to_vec(claims)
        .map_err(|e| TokenError::InvalidClaims(format!("claims serialization failed: {e}")))?;

    let signing_input = format!(
        "{}.{}",
        URL_SAFE_NO_PAD.encode(header_json),
        URL_SAFE_NO_PAD.encode(claims_json)
    );

    let key = hmac::Key::new(hmac::HMAC_SHA256, secret.expose_secret().as_bytes());
    let tag = hmac::sign(&key, signing_input.as_bytes());

    Ok(format!(
        "{signing_input}.{}",
        URL_SAFE_NO_PAD.encode(tag.as_ref())
    ))
}

/// Verify a token against the current wall clock and return its claims.
///
/// Validation runs in strict order:
///
/// 1. Size guard (`MAX_TOKEN_SIZE_BYTES`), before any decoding
/// 2. Segment split — exactly three dot-separated segments
/// 3. Signature — HMAC-SHA256 recomputed over the first two segments and
///    compared in constant time (`ring::hmac::verify`), never via `==`
/// 4. Claims decode and parse, including presence of every required
///    field and a recognized `role`
/// 5. Expiration — checked only AFTER the signature verifies, so an
///    attacker cannot learn the expiration status of a forged token
///
/// The boundary is pinned: `exp == now` is still valid, `exp < now` is
/// expired.
///
/// # Errors
///
/// - [`TokenError::MissingSecret`] if `secret` is empty
/// - [`TokenError::Malformed`] for wrong segment count, oversized input,
///   undecodable base64, unparsable claims, or a missing claim field
/// - [`TokenError::InvalidSignature`] if the HMAC does not match — a
///   wrong secret is indistinguishable from tampering
/// - [`TokenError::Expired`] for a cryptographically valid token past its
///   `exp`
pub fn verify(token: &str, secret: &SecretString) -> Result<Claims, TokenError> {
    verify_at(token, secret, chrono::Utc::now().timestamp())
}

/// Deterministic verification against an explicit `now` timestamp.
///
/// Prefer [`verify`] in production code. This variant exists so that
/// expiry boundaries can be unit-tested without wall-clock dependence.
///
/// # Errors
///
/// Same as [`verify`].
pub fn verify_at(token: &str, secret: &SecretString, now: i64) -> Result<Claims, TokenError> {
    if secret.expose_secret().is_empty() {
        return Err(TokenError::MissingSecret);
    }

    // Size guard before any decoding
    if token.len() > MAX_TOKEN_SIZE_BYTES {
        tracing::debug!(
            target: "sigil.codec",
            token_size = token.len(),
            max_size = MAX_TOKEN_SIZE_BYTES,
            "token rejected: size exceeds maximum allowed"
        );
        return Err(TokenError::Malformed(
            "token exceeds maximum allowed size".to_string(),
        ));
    }

    // Token format: header.claims.signature
    let parts: Vec<&str> = token.split('.').collect();
    let &[header_b64, claims_b64, sig_b64] = parts.as_slice() else {
        tracing::debug!(
            target: "sigil.codec",
            segments = parts.len(),
            "token rejected: wrong segment count"
        );
        return Err(TokenError::Malformed(format!(
            "expected 3 dot-separated segments, found {}",
            parts.len()
        )));
    };

    let sig = URL_SAFE_NO_PAD.decode(sig_b64).map_err(|e| {
        tracing::debug!(target: "sigil.codec", error = %e, "token rejected: signature segment is not base64url");
        TokenError::Malformed("signature segment is not valid base64url".to_string())
    })?;

    // Signature check comes before any claims decoding. ring's verify
    // recomputes the HMAC and compares via constant-time equality.
    let signing_input = format!("{header_b64}.{claims_b64}");
    let key = hmac::Key::new(hmac::HMAC_SHA256, secret.expose_secret().as_bytes());
    hmac::verify(&key, signing_input.as_bytes(), &sig).map_err(|_| {
        tracing::debug!(target: "sigil.codec", "token rejected: signature mismatch");
        TokenError::InvalidSignature
    })?;

    let claims_json = URL_SAFE_NO_PAD.decode(claims_b64).map_err(|e| {
        tracing::debug!(target: "sigil.codec", error = %e, "token rejected: claims segment is not base64url");
        TokenError::Malformed("claims segment is not valid base64url".to_string())
    })?;

    // Typed deserialization covers both parse failures and missing
    // required fields; serde names the missing field in its message.
    let claims: Claims = serde_json::from_slice(&claims_json).map_err(|e| {
        tracing::debug!(target: "sigil.codec", error = %e, "token rejected: claims payload did not parse");
        TokenError::Malformed(format!("claims payload did not parse: {e}"))
    })?;

    if claims.is_expired_at(now) {
        tracing::debug!(
            target: "sigil.codec",
            exp = claims.exp,
            now = now,
            "token rejected: expired"
        );
        return Err(TokenError::Expired { exp: claims.exp });
    }

    Ok(claims)
}
