//! Decoded response types.
//!
//! # Design
//! The API family returns one flat JSON object whose fields vary by media
//! type, so `LookupResponse` keeps the object as-is and lets callers read
//! named fields. A missing field is `None`, never an error. `MovieSummary`
//! is an optional typed view over the common fields.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A decoded JSON object, unchanged from the wire.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LookupResponse {
    fields: Map<String, Value>,
}

impl LookupResponse {
    pub fn new(fields: Map<String, Value>) -> Self {
        Self { fields }
    }

    pub fn get(&self, field: &str) -> Option<&Value> {
        self.fields.get(field)
    }

    /// The field as a string, if present and a JSON string.
    pub fn get_str(&self, field: &str) -> Option<&str> {
        self.fields.get(field).and_then(Value::as_str)
    }

    pub fn title(&self) -> Option<&str> {
        self.get_str("Title")
    }

    pub fn year(&self) -> Option<&str> {
        self.get_str("Year")
    }

    /// `false` only when the upstream explicitly answered `"Response":"False"`.
    pub fn is_success(&self) -> bool {
        !matches!(self.get_str("Response"), Some(r) if r.eq_ignore_ascii_case("false"))
    }

    /// The upstream's error message for a semantic failure
    /// (`{"Response":"False","Error":"Movie not found!"}`).
    pub fn api_error(&self) -> Option<&str> {
        if self.is_success() {
            return None;
        }
        Some(self.get_str("Error").unwrap_or("unknown API error"))
    }

    pub fn fields(&self) -> &Map<String, Value> {
        &self.fields
    }

    pub fn into_inner(self) -> Map<String, Value> {
        self.fields
    }

    /// Typed view over the commonly used fields. Fields that are missing or
    /// not strings come back as `None`.
    pub fn summary(&self) -> MovieSummary {
        let field = |name: &str| self.get_str(name).map(str::to_string);
        MovieSummary {
            title: field("Title"),
            year: field("Year"),
            rated: field("Rated"),
            released: field("Released"),
            runtime: field("Runtime"),
            genre: field("Genre"),
            director: field("Director"),
            plot: field("Plot"),
            imdb_id: field("imdbID"),
            media_type: field("Type"),
        }
    }
}

/// Commonly used fields of a title lookup.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct MovieSummary {
    pub title: Option<String>,
    pub year: Option<String>,
    pub rated: Option<String>,
    pub released: Option<String>,
    pub runtime: Option<String>,
    pub genre: Option<String>,
    pub director: Option<String>,
    pub plot: Option<String>,
    pub imdb_id: Option<String>,
    pub media_type: Option<String>,
}
