//! Validated, immutable configuration for the lookup clients.
//!
//! # Design
//! A `Config` is built once at startup and handed to clients by reference.
//! Construction is the only place credentials are checked, so a missing key
//! fails fast before any lookup is attempted. Where the values come from
//! (file, environment) is the caller's business.

use std::time::Duration;

use url::{form_urlencoded, Url};

use crate::error::LookupError;

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Credentials and endpoints for the OMDb API and, optionally, TMDb.
#[derive(Debug, Clone)]
pub struct Config {
    omdb_api_key: String,
    omdb_endpoint: String,
    timeout: Duration,
    tmdb: Option<TmdbConfig>,
}

/// How requests to TMDb are authenticated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TmdbAuth {
    /// Appended as `?api_key=<key>`.
    ApiKey(String),
    /// Sent as `Authorization: Bearer <token>`.
    Bearer(String),
}

#[derive(Debug, Clone)]
pub struct TmdbConfig {
    endpoint: String,
    auth: TmdbAuth,
}

impl Config {
    pub fn new(api_key: &str, endpoint: &str) -> Result<Self, LookupError> {
        let api_key = api_key.trim();
        let endpoint = endpoint.trim();
        if api_key.is_empty() {
            return Err(LookupError::config("OMDb API key is missing"));
        }
        if endpoint.is_empty() {
            return Err(LookupError::config("OMDb endpoint is missing"));
        }
        check_url(endpoint)?;
        Ok(Self {
            omdb_api_key: api_key.to_string(),
            omdb_endpoint: endpoint.to_string(),
            timeout: DEFAULT_TIMEOUT,
            tmdb: None,
        })
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Result<Self, LookupError> {
        if timeout.is_zero() {
            return Err(LookupError::config("timeout must be greater than zero"));
        }
        self.timeout = timeout;
        Ok(self)
    }

    pub fn with_tmdb(mut self, tmdb: TmdbConfig) -> Self {
        self.tmdb = Some(tmdb);
        self
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    pub fn endpoint(&self) -> &str {
        &self.omdb_endpoint
    }

    pub fn tmdb(&self) -> Option<&TmdbConfig> {
        self.tmdb.as_ref()
    }

    /// The endpoint with the API key attached and a trailing `&`, ready for
    /// `build_url` to append `t=...`.
    pub fn base_endpoint(&self) -> String {
        let endpoint = &self.omdb_endpoint;
        let separator = if endpoint.ends_with('?') || endpoint.ends_with('&') {
            ""
        } else if endpoint.contains('?') {
            "&"
        } else {
            "?"
        };
        let key: String = form_urlencoded::byte_serialize(self.omdb_api_key.as_bytes()).collect();
        format!("{endpoint}{separator}apikey={key}&")
    }
}

impl TmdbConfig {
    pub fn new(endpoint: &str, auth: TmdbAuth) -> Result<Self, LookupError> {
        let endpoint = endpoint.trim().trim_end_matches('/');
        if endpoint.is_empty() {
            return Err(LookupError::config("TMDb endpoint is missing"));
        }
        if check_url(endpoint)?.query().is_some() {
            return Err(LookupError::config(
                "TMDb endpoint must not carry a query string",
            ));
        }
        let secret = match &auth {
            TmdbAuth::ApiKey(s) | TmdbAuth::Bearer(s) => s,
        };
        if secret.trim().is_empty() {
            return Err(LookupError::config("TMDb credential is missing"));
        }
        Ok(Self {
            endpoint: endpoint.to_string(),
            auth,
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    pub fn auth(&self) -> &TmdbAuth {
        &self.auth
    }
}

fn check_url(endpoint: &str) -> Result<Url, LookupError> {
    let url = Url::parse(endpoint)
        .map_err(|e| LookupError::config(format!("endpoint {endpoint:?} is not a valid URL: {e}")))?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(LookupError::config(format!(
            "unsupported endpoint scheme {:?}",
            url.scheme()
        )));
    }
    // Anything appended after a fragment never reaches the server.
    if url.fragment().is_some() {
        return Err(LookupError::config(format!(
            "endpoint {endpoint:?} must not contain a fragment"
        )));
    }
    Ok(url)
}
