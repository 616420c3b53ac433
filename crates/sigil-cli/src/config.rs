//! Signing secret resolution.
//!
//! Resolution order: explicit `--secret` flag, else the `SIGIL_SECRET`
//! environment variable. Absence of both is a fatal configuration error;
//! the CLI never proceeds with an empty or default secret.

use std::collections::HashMap;

use sigil_core::secret::SecretString;
use sigil_core::TokenError;

/// Environment variable supplying the default signing secret.
pub const SECRET_ENV_VAR: &str = "SIGIL_SECRET";

/// Resolve the signing secret from the process environment.
///
/// # Errors
///
/// Returns [`TokenError::MissingSecret`] when neither the flag nor the
/// environment variable provides a non-empty value.
pub fn resolve_secret_from_env(flag: Option<String>) -> Result<SecretString, TokenError> {
    resolve_secret(flag, &std::env::vars().collect())
}

/// Resolve the signing secret from a variable map (for testing).
///
/// # Errors
///
/// Same as [`resolve_secret_from_env`].
pub fn resolve_secret(
    flag: Option<String>,
    vars: &HashMap<String, String>,
) -> Result<SecretString, TokenError> {
    flag.or_else(|| vars.get(SECRET_ENV_VAR).cloned())
        .filter(|s| !s.is_empty())
        .map(SecretString::from)
        .ok_or(TokenError::MissingSecret)
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use sigil_core::secret::ExposeSecret;

    #[test]
    fn test_flag_takes_precedence_over_env() {
        let vars = HashMap::from([(SECRET_ENV_VAR.to_string(), "env-secret".to_string())]);

        let secret = resolve_secret(Some("flag-secret".to_string()), &vars).unwrap();
        assert_eq!(secret.expose_secret(), "flag-secret");
    }

    #[test]
    fn test_env_used_when_no_flag() {
        let vars = HashMap::from([(SECRET_ENV_VAR.to_string(), "env-secret".to_string())]);

        let secret = resolve_secret(None, &vars).unwrap();
        assert_eq!(secret.expose_secret(), "env-secret");
    }

    #[test]
    fn test_missing_both_is_config_error() {
        let result = resolve_secret(None, &HashMap::new());
        assert_eq!(result.err(), Some(TokenError::MissingSecret));
    }

    #[test]
    fn test_empty_values_are_rejected() {
        // An empty flag value must not shadow the error, and an empty
        // env value is as fatal as a missing one.
        let vars = HashMap::from([(SECRET_ENV_VAR.to_string(), String::new())]);

        let result = resolve_secret(Some(String::new()), &vars);
        assert_eq!(result.err(), Some(TokenError::MissingSecret));
    }
}
