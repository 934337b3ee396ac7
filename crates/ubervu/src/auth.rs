//! Query-string authentication
//!
//! The uberVU API authenticates every call with an `(email, apikey)` pair sent
//! as query parameters. There is no token exchange or request signing.

use secrecy::{ExposeSecret, SecretString};
use url::Url;

use crate::error::{Error, Result};

/// Query parameter carrying the account email.
pub const EMAIL_PARAM: &str = "email";

/// Query parameter carrying the API key.
pub const API_KEY_PARAM: &str = "apikey";

/// Immutable credential pair attached to every request.
#[derive(Debug, Clone)]
pub struct Credentials {
    email: String,
    api_key: SecretString,
}

impl Credentials {
    /// Create credentials, rejecting empty values.
    pub fn new(email: impl Into<String>, api_key: SecretString) -> Result<Self> {
        let email = email.into();
        if email.trim().is_empty() {
            return Err(Error::Configuration("email cannot be empty".to_string()));
        }
        if api_key.expose_secret().trim().is_empty() {
            return Err(Error::Configuration("API key cannot be empty".to_string()));
        }

        Ok(Self { email, api_key })
    }

    /// Account email.
    pub fn email(&self) -> &str {
        &self.email
    }

    /// Append the `email` and `apikey` query parameters to a URL.
    pub fn apply_to_url(&self, url: &mut Url) {
        url.query_pairs_mut()
            .append_pair(EMAIL_PARAM, &self.email)
            .append_pair(API_KEY_PARAM, self.api_key.expose_secret());
    }
}
