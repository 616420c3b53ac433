//! Tenant-scoped bearer token issuance and verification.
//!
//! This crate mints and validates compact signed tokens carrying
//! tenant/user/role claims with a bounded lifetime. Tokens use the standard
//! JWT HS256 wire format (`header.claims.signature`, base64url without
//! padding, HMAC-SHA256 over the first two segments) and are safe to place
//! in an `Authorization: Bearer` header.
//!
//! # Security
//!
//! - Signatures are compared in constant time (`ring::hmac::verify`)
//! - Tokens are size-checked BEFORE any decoding (DoS prevention)
//! - Expiration is checked only AFTER the signature verifies, so a forged
//!   token never learns its own expiration status
//! - Secrets are held in [`secret::SecretString`] and redacted from all
//!   `Debug` and tracing output
//!
//! # Usage
//!
//! ```rust
//! use sigil_core::{issue, verify, Role};
//! use sigil_core::secret::SecretString;
//!
//! let secret = SecretString::from("signing-secret");
//! let token = issue("tenant-1", "user-1", Role::Viewer, &secret, 3600)?;
//! let claims = verify(&token, &secret)?;
//! assert_eq!(claims.role, Role::Viewer);
//! # Ok::<(), sigil_core::TokenError>(())
//! ```

#![warn(clippy::pedantic)]

/// Module for the claims model and well-known identifiers
pub mod claims;

/// Module for token encoding, signing, and verification
pub mod codec;

/// Module for the token error taxonomy
pub mod error;

/// Module for secret types that prevent accidental logging
pub mod secret;

pub use claims::{Claims, Role, DEFAULT_TENANT_ID, DEFAULT_TTL_SECS, DEFAULT_USER_ID};
pub use codec::{issue, issue_at, verify, verify_at, MAX_TOKEN_SIZE_BYTES};
pub use error::TokenError;
