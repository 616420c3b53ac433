//! Secret types for protecting the signing key from accidental logging.
//!
//! This module re-exports types from the [`secrecy`] crate. Use
//! [`SecretString`] for every signing secret that enters the process,
//! whether from a flag, an environment variable, or a test fixture.
//!
//! `SecretString` implements `Debug` with redaction, so any struct that
//! derives `Debug` while holding one gets safe logging behavior for free,
//! and the value is zeroized when dropped. Access to the actual bytes
//! requires an explicit [`ExposeSecret::expose_secret`] call, which keeps
//! every use of key material grep-able.
//!
//! # Example
//!
//! ```rust
//! use sigil_core::secret::{ExposeSecret, SecretString};
//!
//! let secret = SecretString::from("hunter2");
//! assert!(!format!("{secret:?}").contains("hunter2"));
//! assert_eq!(secret.expose_secret(), "hunter2");
//! ```

// Re-export the main types from secrecy
pub use secrecy::{ExposeSecret, SecretString};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_debug_is_redacted() {
        let secret = SecretString::from("hunter2");
        let debug_str = format!("{secret:?}");

        assert!(debug_str.contains("REDACTED"));
        assert!(!debug_str.contains("hunter2"));
    }

    #[test]
    fn test_expose_secret_returns_inner_value() {
        let secret = SecretString::from("signing-key-123");
        assert_eq!(secret.expose_secret(), "signing-key-123");
    }

    #[test]
    fn test_struct_with_secret_is_safe() {
        #[allow(dead_code)]
        #[derive(Debug)]
        struct IssueRequest {
            tenant: String,
            secret: SecretString,
        }

        let req = IssueRequest {
            tenant: "tenant-1".to_string(),
            secret: SecretString::from("super-secret"),
        };

        let debug_str = format!("{req:?}");

        assert!(debug_str.contains("tenant-1"));
        assert!(debug_str.contains("REDACTED"));
        assert!(!debug_str.contains("super-secret"));
    }
}
