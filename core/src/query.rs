//! Query Builder: turns a title/year/type triple into an OMDb request URL.
//!
//! Parameters are always appended in the order `t`, `y`, `type` so the output
//! is deterministic for a given input.

use std::fmt;
use std::str::FromStr;

use url::form_urlencoded;

use crate::error::LookupError;

/// The `type` filter accepted by the API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MediaType {
    Movie,
    Series,
    Episode,
}

impl MediaType {
    pub fn as_str(&self) -> &'static str {
        match self {
            MediaType::Movie => "movie",
            MediaType::Series => "series",
            MediaType::Episode => "episode",
        }
    }
}

impl fmt::Display for MediaType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MediaType {
    type Err = LookupError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "movie" => Ok(MediaType::Movie),
            "series" => Ok(MediaType::Series),
            "episode" => Ok(MediaType::Episode),
            other => Err(LookupError::invalid_argument(format!(
                "unknown media type {other:?}, expected movie, series or episode"
            ))),
        }
    }
}

/// One title lookup, independent of credentials and endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LookupRequest {
    pub title: String,
    pub year: Option<String>,
    pub media_type: Option<MediaType>,
}

impl LookupRequest {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            year: None,
            media_type: None,
        }
    }

    /// An empty or whitespace-only string is treated as "no year".
    pub fn year(mut self, year: impl Into<String>) -> Self {
        let year = year.into();
        self.year = if year.trim().is_empty() { None } else { Some(year) };
        self
    }

    pub fn media_type(mut self, media_type: MediaType) -> Self {
        self.media_type = Some(media_type);
        self
    }
}

/// Append the lookup parameters to `base_endpoint`.
///
/// `base_endpoint` is used unchanged and must already end so that `t=...`
/// can follow it, e.g. `http://www.omdbapi.com/?apikey=KEY&`.
pub fn build_url(base_endpoint: &str, request: &LookupRequest) -> Result<String, LookupError> {
    if request.title.trim().is_empty() {
        return Err(LookupError::invalid_argument("title required"));
    }

    let mut url = String::with_capacity(base_endpoint.len() + request.title.len() + 24);
    url.push_str(base_endpoint);
    url.push_str("t=");
    url.extend(form_urlencoded::byte_serialize(request.title.as_bytes()));

    if let Some(year) = request.year.as_deref().filter(|y| !y.trim().is_empty()) {
        validate_year(year)?;
        url.push_str("&y=");
        url.push_str(year);
    }

    if let Some(media_type) = request.media_type {
        url.push_str("&type=");
        url.push_str(media_type.as_str());
    }

    Ok(url)
}

fn validate_year(year: &str) -> Result<(), LookupError> {
    if year.len() == 4 && year.bytes().all(|b| b.is_ascii_digit()) {
        Ok(())
    } else {
        Err(LookupError::invalid_argument(format!(
            "year must be a four-digit number, got {year:?}"
        )))
    }
}
