//! API key and base URL a client is bound to.

use crate::{Error, Result};
use std::fmt;

/// The reselling portal's production endpoint.
pub const DEFAULT_BASE_URL: &str = "https://reselling-portal.de/api/";

/// API key and base URL, fixed for the lifetime of a client.
///
/// Only emptiness is checked here. A base URL that does not parse surfaces as
/// a transport failure on the first request.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    api_key: String,
    base_url: String,
}

impl Credentials {
    /// # Errors
    ///
    /// Returns [`Error::ConfigurationError`] if either value is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use exbil_cloud::Credentials;
    ///
    /// let credentials = Credentials::new("key", "https://reselling-portal.de/api/").unwrap();
    /// assert_eq!(credentials.api_key(), "key");
    ///
    /// assert!(Credentials::new("", "https://reselling-portal.de/api/").is_err());
    /// ```
    pub fn new(api_key: impl Into<String>, base_url: impl Into<String>) -> Result<Self> {
        let api_key = api_key.into();
        let base_url = base_url.into();

        if api_key.trim().is_empty() {
            return Err(Error::ConfigurationError("API key must not be empty".to_string()));
        }
        if base_url.trim().is_empty() {
            return Err(Error::ConfigurationError("Base URL must not be empty".to_string()));
        }

        Ok(Self { api_key, base_url })
    }

    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

// Keep the key out of logs.
impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("api_key", &"<redacted>")
            .field("base_url", &self.base_url)
            .finish()
    }
}
