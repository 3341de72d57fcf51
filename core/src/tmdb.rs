//! Movie-by-id lookups against TMDb.
//!
//! Same build/parse split as `OmdbClient`, with two ways to authenticate:
//! an `api_key` query parameter or a bearer token header.

use tracing::{debug, warn};
use url::form_urlencoded;

use crate::config::{Config, TmdbAuth, TmdbConfig};
use crate::decode::decode;
use crate::error::LookupError;
use crate::http::{HttpRequest, HttpResponse, Transport, UreqTransport};
use crate::types::LookupResponse;

#[derive(Debug, Clone)]
pub struct TmdbClient<T> {
    config: TmdbConfig,
    transport: T,
}

impl TmdbClient<UreqTransport> {
    /// Fails with `Config` when no TMDb section was configured.
    pub fn from_config(config: &Config) -> Result<Self, LookupError> {
        let tmdb = config
            .tmdb()
            .ok_or_else(|| LookupError::config("TMDb is not configured"))?;
        Ok(Self::new(tmdb.clone(), UreqTransport::new(config.timeout())))
    }
}

impl<T: Transport> TmdbClient<T> {
    pub fn new(config: TmdbConfig, transport: T) -> Self {
        Self { config, transport }
    }

    pub fn build_movie(&self, id: u64) -> HttpRequest {
        let url = format!("{}/{id}", self.config.endpoint());
        match self.config.auth() {
            TmdbAuth::ApiKey(key) => {
                let key: String = form_urlencoded::byte_serialize(key.as_bytes()).collect();
                HttpRequest::get(format!("{url}?api_key={key}"))
            }
            TmdbAuth::Bearer(token) => HttpRequest {
                url,
                headers: vec![
                    ("authorization".to_string(), format!("Bearer {token}")),
                    ("accept".to_string(), "application/json".to_string()),
                ],
            },
        }
    }

    pub fn parse_movie(&self, response: HttpResponse) -> Result<LookupResponse, LookupError> {
        if !response.is_success() {
            warn!(status = response.status, "TMDb returned non-success status");
        }
        decode(&response.body)
    }

    pub fn movie(&self, id: u64) -> Result<LookupResponse, LookupError> {
        debug!(id, "fetching TMDb movie");
        let response = self.transport.get(&self.build_movie(id))?;
        self.parse_movie(response)
    }
}
