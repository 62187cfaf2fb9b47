//! Public client surface + builder.
//!
//! The backend exposes a single base URL (deployment-provided, usually via the
//! `BIODESK_BASE_URL` environment variable); every endpoint is resolved
//! relative to it.

use std::env;
use std::time::Duration;

use reqwest::Client;
use url::Url;

use crate::core::BdError;

/// Environment variable holding the deployment's API base URL.
pub const BASE_URL_ENV: &str = "BIODESK_BASE_URL";

const USER_AGENT: &str = concat!("biodesk/", env!("CARGO_PKG_VERSION"));

/// Handle to the Biodesk backend. Cheap to clone; clones share the underlying
/// connection pool.
#[derive(Debug, Clone)]
pub struct BdClient {
    http: Client,
    base_api: Url,
}

impl BdClient {
    /// Create a new builder.
    pub fn builder() -> BdClientBuilder {
        BdClientBuilder::default()
    }

    /// Build a client from `BIODESK_BASE_URL` alone.
    ///
    /// # Errors
    ///
    /// Returns [`BdError::Config`] if the variable is unset and
    /// [`BdError::Url`] if its value does not parse.
    pub fn from_env() -> Result<Self, BdError> {
        Self::builder().build()
    }

    /* -------- internal getters used by the API modules -------- */

    pub(crate) fn http(&self) -> &Client {
        &self.http
    }

    /// Resolve an endpoint path against the configured base URL.
    pub(crate) fn endpoint(&self, path: &str) -> Result<Url, BdError> {
        Ok(self.base_api.join(path)?)
    }
}

/* ----------------------- Builder ----------------------- */

#[derive(Debug, Default)]
pub struct BdClientBuilder {
    base_url: Option<Url>,
    user_agent: Option<String>,
    timeout: Option<Duration>,
    connect_timeout: Option<Duration>,
}

impl BdClientBuilder {
    /// Override the API base URL (e.g. `https://deployment.example.com/api/`).
    /// Takes precedence over `BIODESK_BASE_URL`.
    #[must_use]
    pub fn base_url(mut self, url: Url) -> Self {
        self.base_url = Some(url);
        self
    }

    /// Override the User-Agent.
    #[must_use]
    pub fn user_agent(mut self, ua: impl Into<String>) -> Self {
        self.user_agent = Some(ua.into());
        self
    }

    /// Set a global request timeout (overall). Default: none.
    #[must_use]
    pub fn timeout(mut self, dur: Duration) -> Self {
        self.timeout = Some(dur);
        self
    }

    /// Set a connect timeout. Default: none.
    #[must_use]
    pub fn connect_timeout(mut self, dur: Duration) -> Self {
        self.connect_timeout = Some(dur);
        self
    }

    /// # Errors
    ///
    /// Returns [`BdError::Config`] when no base URL is configured, and
    /// [`BdError::Http`]/[`BdError::Url`] when the HTTP client or URL cannot
    /// be constructed.
    pub fn build(self) -> Result<BdClient, BdError> {
        let mut base_api = match self.base_url {
            Some(url) => url,
            None => match env::var(BASE_URL_ENV) {
                Ok(raw) => Url::parse(&raw)?,
                Err(_) => {
                    return Err(BdError::Config(format!(
                        "no base URL: set {BASE_URL_ENV} or use BdClientBuilder::base_url"
                    )));
                }
            },
        };

        // Url::join drops the last path segment unless the base ends in '/'.
        if !base_api.path().ends_with('/') {
            let normalized = format!("{}/", base_api.path());
            base_api.set_path(&normalized);
        }

        let mut httpb = reqwest::Client::builder()
            .user_agent(self.user_agent.as_deref().unwrap_or(USER_AGENT));

        if let Some(t) = self.timeout {
            httpb = httpb.timeout(t);
        }
        if let Some(ct) = self.connect_timeout {
            httpb = httpb.connect_timeout(ct);
        }

        Ok(BdClient {
            http: httpb.build()?,
            base_api,
        })
    }
}
