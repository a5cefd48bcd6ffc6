use std::env::VarError;

use thiserror::Error;

/// Why an environment variable could not be read.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum EnvVarError {
    /// The variable is not set.
    #[error("Missing environment variable: {0}")]
    Missing(String),

    /// The variable is set but its value is not valid unicode.
    #[error("Environment variable {0} is not valid unicode")]
    NotUnicode(String),
}

impl EnvVarError {
    /// Name of the variable that failed to load.
    pub fn name(&self) -> &str {
        match self {
            EnvVarError::Missing(name) | EnvVarError::NotUnicode(name) => name,
        }
    }
}

/// Reads an environment variable, returning a structured error if it can't be used.
///
/// This is a thin wrapper around `std::env::var` that keeps the variable
/// name in the error, so callers can log or report it without extra plumbing.
///
/// # Arguments
/// * `name` - The name of the environment variable to read.
pub fn get_env_var(name: &str) -> Result<String, EnvVarError> {
    std::env::var(name).map_err(|e| match e {
        VarError::NotPresent => EnvVarError::Missing(name.to_string()),
        VarError::NotUnicode(_) => EnvVarError::NotUnicode(name.to_string()),
    })
}

#[cfg(test)]
mod tests {
    use serial_test::serial;

    use super::*;

    #[test]
    #[serial]
    fn test_get_env_var_present() {
        // SAFETY: serialised with every other test touching the environment.
        unsafe { std::env::set_var("SHARED_UTILS_TEST_VAR", "value") };
        assert_eq!(get_env_var("SHARED_UTILS_TEST_VAR").unwrap(), "value");
        unsafe { std::env::remove_var("SHARED_UTILS_TEST_VAR") };
    }

    #[test]
    #[serial]
    fn test_get_env_var_missing() {
        unsafe { std::env::remove_var("SHARED_UTILS_TEST_VAR") };
        let err = get_env_var("SHARED_UTILS_TEST_VAR").unwrap_err();
        assert_eq!(err, EnvVarError::Missing("SHARED_UTILS_TEST_VAR".to_string()));
        assert_eq!(err.name(), "SHARED_UTILS_TEST_VAR");
        assert_eq!(
            err.to_string(),
            "Missing environment variable: SHARED_UTILS_TEST_VAR"
        );
    }
}
