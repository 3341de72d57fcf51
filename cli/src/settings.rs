//! Settings loaded from an optional TOML file plus `FLICKER_*` environment
//! overrides, then validated into a `flicker_core::Config`.
//!
//! ```toml
//! [apis]
//! omdb_api_key = "..."
//! tmdb_bearer_token = "..."
//!
//! [endpoints]
//! omdb_endpoint = "https://www.omdbapi.com/"
//! tmdb_endpoint = "https://api.themoviedb.org/3/movie"
//!
//! [http]
//! timeout_secs = 10
//! ```
//!
//! `FLICKER_APIS__OMDB_API_KEY=...` overrides `apis.omdb_api_key`.

use std::path::Path;
use std::time::Duration;

use config::{ConfigError, Environment, File, FileFormat};
use flicker_core::config::DEFAULT_TIMEOUT;
use flicker_core::{Config, LookupError, TmdbAuth, TmdbConfig};
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone, Default)]
pub struct Settings {
    #[serde(default)]
    pub apis: ApisConfig,
    #[serde(default)]
    pub endpoints: EndpointsConfig,
    #[serde(default)]
    pub http: HttpConfig,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct ApisConfig {
    pub omdb_api_key: Option<String>,
    pub tmdb_api_key: Option<String>,
    pub tmdb_bearer_token: Option<String>,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct EndpointsConfig {
    pub omdb_endpoint: Option<String>,
    pub tmdb_endpoint: Option<String>,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct HttpConfig {
    pub timeout_secs: Option<u64>,
}

impl Settings {
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        Self::load_with_env(path, environment())
    }

    pub fn load_with_env(path: &Path, env: Environment) -> Result<Self, ConfigError> {
        config::Config::builder()
            .add_source(File::from(path).format(FileFormat::Toml).required(false))
            .add_source(env)
            .build()?
            .try_deserialize()
    }

    /// Validate into the core configuration. Missing OMDb credentials fail
    /// here, before any lookup is attempted.
    pub fn into_config(self) -> Result<Config, LookupError> {
        let timeout = self.timeout()?;
        let tmdb = match self.endpoints.tmdb_endpoint {
            Some(_) => Some(self.tmdb_config()?),
            None => None,
        };

        let api_key = self.apis.omdb_api_key.unwrap_or_default();
        let endpoint = self.endpoints.omdb_endpoint.unwrap_or_default();
        let mut config = Config::new(&api_key, &endpoint)?.with_timeout(timeout)?;
        if let Some(tmdb) = tmdb {
            config = config.with_tmdb(tmdb);
        }
        Ok(config)
    }

    /// The TMDb section on its own; OMDb settings are not required.
    pub fn tmdb_config(&self) -> Result<TmdbConfig, LookupError> {
        let endpoint = self
            .endpoints
            .tmdb_endpoint
            .as_deref()
            .ok_or_else(|| LookupError::config("tmdb_endpoint is not configured"))?;
        let bearer = self.apis.tmdb_bearer_token.as_ref().filter(|t| !t.trim().is_empty());
        let key = self.apis.tmdb_api_key.as_ref().filter(|k| !k.trim().is_empty());
        let auth = match (bearer, key) {
            (Some(token), _) => TmdbAuth::Bearer(token.clone()),
            (None, Some(key)) => TmdbAuth::ApiKey(key.clone()),
            (None, None) => {
                return Err(LookupError::config(
                    "tmdb_endpoint is set but neither tmdb_api_key nor tmdb_bearer_token is",
                ))
            }
        };
        TmdbConfig::new(endpoint, auth)
    }

    pub fn timeout(&self) -> Result<Duration, LookupError> {
        match self.http.timeout_secs {
            Some(0) => Err(LookupError::config("timeout must be greater than zero")),
            Some(secs) => Ok(Duration::from_secs(secs)),
            None => Ok(DEFAULT_TIMEOUT),
        }
    }
}

fn environment() -> Environment {
    Environment::with_prefix("FLICKER")
        .prefix_separator("_")
        .separator("__")
}
