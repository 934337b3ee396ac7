//! Configuration for the uberVU client

use secrecy::SecretString;
use std::time::Duration;

/// Default per-request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(60);

/// Configuration for the uberVU client.
///
/// Every field is optional until the client is built; [`Client::from_config`]
/// rejects a configuration with a missing email, API key or base URL.
///
/// [`Client::from_config`]: crate::Client::from_config
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Account email, sent as the `email` query parameter
    pub email: Option<String>,

    /// API key, sent as the `apikey` query parameter
    pub api_key: Option<SecretString>,

    /// Base URL for the API, e.g. `https://api.ubervu.com/front-api/v1`
    pub base_url: Option<String>,

    /// Per-request timeout
    pub timeout: Duration,

    /// User agent override
    pub user_agent: Option<String>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            email: None,
            api_key: None,
            base_url: None,
            timeout: DEFAULT_TIMEOUT,
            user_agent: None,
        }
    }
}

impl ClientConfig {
    /// Create a configuration from the three required parameters.
    pub fn new(
        email: impl Into<String>,
        api_key: impl Into<String>,
        base_url: impl Into<String>,
    ) -> Self {
        Self {
            email: Some(email.into()),
            api_key: Some(SecretString::new(api_key.into().into_boxed_str())),
            base_url: Some(base_url.into()),
            ..Default::default()
        }
    }

    /// Load configuration from environment variables.
    ///
    /// A `.env` file in the working directory is loaded first if present.
    /// This will look for:
    /// - `UBERVU_EMAIL` for the account email
    /// - `UBERVU_API_KEY` for the API key
    /// - `UBERVU_BASE_URL` for the API base URL
    /// - `UBERVU_TIMEOUT` for request timeout (in seconds)
    #[cfg(feature = "env")]
    pub fn from_env() -> Result<Self, crate::error::Error> {
        use std::env;

        dotenvy::dotenv().ok();

        let mut config = Self::default();

        if let Ok(email) = env::var("UBERVU_EMAIL") {
            config.email = Some(email);
        }

        if let Ok(api_key) = env::var("UBERVU_API_KEY") {
            config.api_key = Some(SecretString::new(api_key.into_boxed_str()));
        }

        if let Ok(base_url) = env::var("UBERVU_BASE_URL") {
            config.base_url = Some(base_url);
        }

        if let Ok(timeout_str) = env::var("UBERVU_TIMEOUT") {
            let timeout_secs = timeout_str.parse::<u64>().map_err(|_| {
                crate::error::Error::Configuration(format!(
                    "UBERVU_TIMEOUT must be a number of seconds, got '{}'",
                    timeout_str
                ))
            })?;
            config.timeout = Duration::from_secs(timeout_secs);
        }

        Ok(config)
    }

    /// Merge this configuration with another, with the other taking precedence.
    pub fn merge(mut self, other: ClientConfig) -> Self {
        if other.email.is_some() {
            self.email = other.email;
        }
        if other.api_key.is_some() {
            self.api_key = other.api_key;
        }
        if other.base_url.is_some() {
            self.base_url = other.base_url;
        }
        if other.timeout != DEFAULT_TIMEOUT {
            self.timeout = other.timeout;
        }
        if other.user_agent.is_some() {
            self.user_agent = other.user_agent;
        }

        self
    }
}
