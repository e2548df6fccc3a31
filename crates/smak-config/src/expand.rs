//! Environment variable expansion for configuration strings.

use crate::ConfigError;

/// Expand `${VAR}` and `${VAR:-default}` references in a string.
///
/// Bare `$VAR` is left alone, so values without `${` are returned unchanged.
pub(crate) fn expand_env(value: &str, field: &str) -> Result<String, ConfigError> {
    if !value.contains("${") {
        return Ok(value.to_owned());
    }

    shellexpand::env_with_context(value, |var| -> Result<Option<String>, LookupError> {
        std::env::var(var).map(Some).map_err(|_| LookupError {
            var_name: var.to_owned(),
        })
    })
    .map(std::borrow::Cow::into_owned)
    .map_err(|e| ConfigError::EnvVar {
        field: field.to_owned(),
        message: format!("${{{0}}} not set", e.cause.var_name),
    })
}

/// Optional variant of [`expand_env`].
pub(crate) fn expand_env_opt(
    value: Option<&String>,
    field: &str,
) -> Result<Option<String>, ConfigError> {
    value.map(|v| expand_env(v, field)).transpose()
}

struct LookupError {
    var_name: String,
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_expand_var() {
        // SAFETY: test runs single-threaded per test function
        unsafe {
            std::env::set_var("SMAK_TEST_EXPAND_VAR", "photos");
        }
        let result = expand_env("/srv/${SMAK_TEST_EXPAND_VAR}", "portfolio.dir").unwrap();
        assert_eq!(result, "/srv/photos");
        unsafe {
            std::env::remove_var("SMAK_TEST_EXPAND_VAR");
        }
    }

    #[test]
    fn test_expand_default() {
        // SAFETY: test runs single-threaded per test function
        unsafe {
            std::env::remove_var("SMAK_TEST_EXPAND_UNSET");
        }
        let result = expand_env("${SMAK_TEST_EXPAND_UNSET:-site}", "site.root").unwrap();
        assert_eq!(result, "site");
    }

    #[test]
    fn test_expand_missing_var() {
        // SAFETY: test runs single-threaded per test function
        unsafe {
            std::env::remove_var("SMAK_TEST_EXPAND_MISSING");
        }
        let err = expand_env("${SMAK_TEST_EXPAND_MISSING}", "server.host").unwrap_err();

        assert!(matches!(err, ConfigError::EnvVar { .. }));
        assert!(err.to_string().contains("SMAK_TEST_EXPAND_MISSING"));
        assert!(err.to_string().contains("server.host"));
    }

    #[test]
    fn test_values_without_braces_unchanged() {
        assert_eq!(expand_env("%title% | $HOME", "title.format").unwrap(), "%title% | $HOME");
    }

    #[test]
    fn test_expand_opt() {
        assert_eq!(expand_env_opt(None, "x").unwrap(), None);
        assert_eq!(
            expand_env_opt(Some(&"plain".to_owned()), "x").unwrap(),
            Some("plain".to_owned())
        );
    }
}
