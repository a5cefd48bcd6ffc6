//! Loading the KAMIS certification pair from the environment.

use secrecy::{ExposeSecret, SecretString};
use shared_utils::env::get_env_var;
use tracing::debug;

/// Environment variable holding the KAMIS certification id.
pub const CERT_ID_VAR: &str = "KAMIS_CERT_ID";

/// Environment variable holding the KAMIS certification key.
pub const CERT_KEY_VAR: &str = "KAMIS_CERT_KEY";

/// The (id, key) pair KAMIS uses to authenticate every request.
///
/// The key is kept as a [`SecretString`], so `Debug` output never shows it.
#[derive(Debug)]
pub struct CertificationPair {
    cert_id: String,
    cert_key: SecretString,
}

impl CertificationPair {
    pub fn new(cert_id: impl Into<String>, cert_key: impl Into<String>) -> Self {
        Self {
            cert_id: cert_id.into(),
            cert_key: SecretString::from(cert_key.into()),
        }
    }

    /// Reads the pair from `KAMIS_CERT_ID` and `KAMIS_CERT_KEY`.
    ///
    /// Nothing is validated here. A variable that is missing or unreadable
    /// becomes an empty string, and the API is left to reject it.
    pub fn from_env() -> Self {
        Self::new(read_or_empty(CERT_ID_VAR), read_or_empty(CERT_KEY_VAR))
    }

    pub fn cert_id(&self) -> &str {
        &self.cert_id
    }

    pub fn cert_key(&self) -> &str {
        self.cert_key.expose_secret()
    }
}

fn read_or_empty(name: &str) -> String {
    get_env_var(name).unwrap_or_else(|err| {
        debug!("{err}; passing an empty value to the API");
        String::new()
    })
}
