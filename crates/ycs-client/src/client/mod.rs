//! Status API client.
//!
//! Provides a sync HTTP client for the public status API. All settings are
//! fixed when the client is built; the client itself is immutable and can be
//! shared between threads.

mod incidents;
mod rate_limit;
mod services;

pub use incidents::IncidentsRequest;

use std::time::Duration;

use serde::de::DeserializeOwned;
use tracing::{debug, info, warn};
use ureq::Agent;

use crate::consts::DEFAULT_API_URL;
use crate::error::RequestError;
use rate_limit::RateLimiter;

/// Default HTTP timeout in seconds.
const DEFAULT_TIMEOUT: u64 = 30;

/// Library user agent, reported on every request.
const USER_AGENT: &str = concat!("ycs/", env!("CARGO_PKG_VERSION"));

/// Status API client.
pub struct Client {
    agent: Agent,
    api_url: String,
    user_agent: String,
    limiter: Option<RateLimiter>,
}

impl Client {
    /// Create a client with default settings.
    #[must_use]
    pub fn new() -> Self {
        ClientBuilder::new().build()
    }

    /// Start configuring a client.
    #[must_use]
    pub fn builder() -> ClientBuilder {
        ClientBuilder::new()
    }

    /// API base URL requests are sent to.
    #[must_use]
    pub fn api_url(&self) -> &str {
        &self.api_url
    }

    /// User agent sent with requests.
    #[must_use]
    pub fn user_agent(&self) -> &str {
        &self.user_agent
    }

    /// Send a GET request and decode the JSON response.
    fn get_json<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        query: &[(&str, String)],
    ) -> Result<T, RequestError> {
        if let Some(limiter) = &self.limiter {
            limiter.acquire();
        }

        let url = format!("{}{}", self.api_url, endpoint);
        info!("GET {}", url);
        debug!("Query: {:?}", query);

        let mut request = self
            .agent
            .get(&url)
            .header("Accept", "application/json")
            .header("User-Agent", &self.user_agent);
        for (key, value) in query {
            request = request.query(key, value);
        }

        let response = request.call().map_err(RequestError::Transport)?;
        let status = response.status().as_u16();
        if status > 299 {
            warn!("API returned status {} for {}", status, url);
            return Err(RequestError::Status(status));
        }

        let body = response
            .into_body()
            .read_to_string()
            .map_err(RequestError::Body)?;
        Ok(serde_json::from_str(&body)?)
    }
}

impl std::fmt::Debug for Client {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Client")
            .field("api_url", &self.api_url)
            .field("user_agent", &self.user_agent)
            .field("limiter", &self.limiter)
            .finish_non_exhaustive()
    }
}

impl Default for Client {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for [`Client`].
///
/// # Example
///
/// ```
/// use std::time::Duration;
/// use ycs_client::Client;
///
/// let client = Client::builder()
///     .user_agent("status-bot", "1.2.3")
///     .rate_limit(5.0)
///     .timeout(Duration::from_secs(10))
///     .build();
/// assert!(client.user_agent().starts_with("status-bot/1.2.3 (ycs/"));
/// ```
#[derive(Debug, Clone)]
pub struct ClientBuilder {
    api_url: String,
    app: Option<(String, String)>,
    timeout: Duration,
    rate_limit: f64,
}

impl ClientBuilder {
    fn new() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_owned(),
            app: None,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT),
            rate_limit: 0.0,
        }
    }

    /// Override the API base URL.
    #[must_use]
    pub fn api_url(mut self, url: &str) -> Self {
        url.trim_end_matches('/').clone_into(&mut self.api_url);
        self
    }

    /// Identify the calling application in the user agent.
    ///
    /// The result is `app/version (ycs/<library version>)`. An empty app
    /// name keeps the library user agent alone.
    #[must_use]
    pub fn user_agent(mut self, app: &str, version: &str) -> Self {
        self.app = (!app.is_empty()).then(|| (app.to_owned(), version.to_owned()));
        self
    }

    /// Limit outgoing requests per second. Zero or negative disables limiting.
    #[must_use]
    pub fn rate_limit(mut self, rps: f64) -> Self {
        self.rate_limit = rps;
        self
    }

    /// Whole-request timeout. Zero disables the timeout.
    #[must_use]
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Build the client.
    #[must_use]
    pub fn build(self) -> Client {
        let timeout = (!self.timeout.is_zero()).then_some(self.timeout);
        let agent = Agent::config_builder()
            .timeout_global(timeout)
            .http_status_as_error(false)
            .build()
            .into();

        let user_agent = match &self.app {
            Some((app, version)) if version.is_empty() => format!("{app} ({USER_AGENT})"),
            Some((app, version)) => format!("{app}/{version} ({USER_AGENT})"),
            None => USER_AGENT.to_owned(),
        };

        Client {
            agent,
            api_url: self.api_url,
            user_agent,
            limiter: RateLimiter::new(self.rate_limit),
        }
    }
}
