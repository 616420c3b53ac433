//! Claims model and well-known identifiers.
//!
//! A [`Claims`] value is the payload of a token: which tenant it is scoped
//! to, which principal it asserts, what permission level it grants, and
//! the window in which it is valid. Claims are immutable once encoded
//! into a token; changing any field means minting a new token.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::{uuid, Uuid};

use crate::error::TokenError;

/// Well-known tenant identifier used by tooling and tests when no
/// explicit tenant is supplied (the root tenant).
pub const DEFAULT_TENANT_ID: Uuid = uuid!("00000000-0000-0000-0000-000000000001");

/// Well-known principal identifier used by tooling and tests when no
/// explicit user is supplied (the root tenant's founding principal).
pub const DEFAULT_USER_ID: Uuid = uuid!("00000000-0000-0000-0000-000000000001");

/// Default token lifetime in seconds (24 hours).
pub const DEFAULT_TTL_SECS: i64 = 86_400;

/// Permission level carried by a token.
///
/// The set is closed: any other string in the `role` claim is a
/// malformed-claims condition at verification time. Issuance is typed and
/// cannot produce an unrecognized role; CLI input is rejected at the
/// parse boundary via [`FromStr`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    /// Full access across the tenant.
    Founder,
    /// Scoped administrative access.
    BrandAdmin,
    /// Read-only access.
    Viewer,
}

impl Role {
    /// All recognized roles, in privilege order.
    pub const ALL: [Role; 3] = [Role::Founder, Role::BrandAdmin, Role::Viewer];

    /// The wire string for this role, as it appears in the `role` claim.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Role::Founder => "founder",
            Role::BrandAdmin => "brand_admin",
            Role::Viewer => "viewer",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = TokenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "founder" => Ok(Role::Founder),
            "brand_admin" => Ok(Role::BrandAdmin),
            "viewer" => Ok(Role::Viewer),
            other => Err(TokenError::InvalidClaims(format!(
                "unrecognized role {other:?} (expected founder, brand_admin, or viewer)"
            ))),
        }
    }
}

/// Token claims structure.
///
/// Serializes to JSON with exactly the keys `tenant_id`, `user_id`,
/// `role`, `iat`, `exp`, in that order — the wire shape every verifier of
/// this format expects.
///
/// # Security
///
/// The `user_id` field identifies the authenticated principal and is
/// redacted in `Debug` output so it cannot reach logs via `{:?}`.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Tenant the token is scoped to (opaque; a UUID in practice).
    pub tenant_id: String,

    /// Authenticated principal — redacted in `Debug` output.
    pub user_id: String,

    /// Permission level granted for the token's lifetime.
    pub role: Role,

    /// Issued-at timestamp (Unix epoch seconds).
    pub iat: i64,

    /// Expiration timestamp (Unix epoch seconds).
    pub exp: i64,
}

impl fmt::Debug for Claims {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Claims")
            .field("tenant_id", &self.tenant_id)
            .field("user_id", &"[REDACTED]")
            .field("role", &self.role)
            .field("iat", &self.iat)
            .field("exp", &self.exp)
            .finish()
    }
}

impl Claims {
    /// Lifetime the token was minted with, in seconds.
    #[must_use]
    pub fn ttl(&self) -> i64 {
        self.exp - self.iat
    }

    /// Whether the token is expired at the given timestamp.
    ///
    /// The boundary is pinned: `exp == now` is still valid, `exp < now`
    /// is expired.
    #[must_use]
    pub fn is_expired_at(&self, now: i64) -> bool {
        self.exp < now
    }
}
