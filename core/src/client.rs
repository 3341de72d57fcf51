//! Title lookup pipeline for the OMDb API.
//!
//! # Design
//! `OmdbClient` holds the key-bearing base endpoint and a `Transport`, and
//! carries no mutable state between calls. A lookup is split into
//! `build_lookup` (pure, produces an `HttpRequest`) and `parse_lookup` (pure,
//! consumes an `HttpResponse`); `lookup` glues them to one transport call.
//! Argument errors are raised by `build_lookup`, so a bad title never reaches
//! the network.

use tracing::{debug, warn};

use crate::config::Config;
use crate::decode::decode;
use crate::error::LookupError;
use crate::http::{HttpRequest, HttpResponse, Transport, UreqTransport};
use crate::query::{build_url, LookupRequest, MediaType};
use crate::types::LookupResponse;

/// Stateless client for title lookups.
#[derive(Debug, Clone)]
pub struct OmdbClient<T> {
    base_endpoint: String,
    transport: T,
}

impl OmdbClient<UreqTransport> {
    /// Client using a `ureq` transport with the configured timeout.
    pub fn from_config(config: &Config) -> Self {
        Self::new(config, UreqTransport::new(config.timeout()))
    }
}

impl<T: Transport> OmdbClient<T> {
    pub fn new(config: &Config, transport: T) -> Self {
        Self {
            base_endpoint: config.base_endpoint(),
            transport,
        }
    }

    pub fn build_lookup(&self, request: &LookupRequest) -> Result<HttpRequest, LookupError> {
        build_url(&self.base_endpoint, request).map(HttpRequest::get)
    }

    /// Decode the body regardless of status; a non-2xx JSON body is returned
    /// for the caller to inspect.
    pub fn parse_lookup(&self, response: HttpResponse) -> Result<LookupResponse, LookupError> {
        if !response.is_success() {
            warn!(status = response.status, "upstream returned non-success status");
        }
        decode(&response.body)
    }

    pub fn execute(&self, request: &LookupRequest) -> Result<LookupResponse, LookupError> {
        let http_request = self.build_lookup(request)?;
        debug!(
            title = %request.title,
            year = request.year.as_deref().unwrap_or(""),
            media_type = request.media_type.map(|m| m.as_str()).unwrap_or(""),
            "looking up title"
        );
        let response = self.transport.get(&http_request)?;
        self.parse_lookup(response)
    }

    /// One end-to-end lookup from loosely typed arguments. Empty or
    /// whitespace-only `year` and `media_type` strings mean "not given".
    pub fn lookup(
        &self,
        title: &str,
        year: Option<&str>,
        media_type: Option<&str>,
    ) -> Result<LookupResponse, LookupError> {
        let mut request = LookupRequest::new(title);
        if let Some(year) = year {
            request = request.year(year);
        }
        if let Some(media_type) = media_type.filter(|m| !m.trim().is_empty()) {
            request = request.media_type(media_type.parse::<MediaType>()?);
        }
        self.execute(&request)
    }
}
