//! Synchronous client core for OMDb-style movie lookups.
//!
//! # Overview
//! A lookup runs through three stateless stages: the Query Builder turns
//! title/year/type into a URL, the `Transport` performs one GET with a
//! bounded timeout, and the Response Decoder turns the body into a field map.
//!
//! # Design
//! - `Config` is validated once and passed by reference; there is no global
//!   state, so tests inject fake endpoints and credentials freely.
//! - Each client splits a call into `build_*` (produces request) and
//!   `parse_*` (consumes response), so the I/O boundary is explicit and the
//!   `Transport` trait is the only thing that touches the network.
//! - Errors are returned at every stage; nothing here exits the process or
//!   retries.
//! - Upstream "not found" / "invalid key" answers are valid JSON objects and
//!   come back as data. `LookupResponse::api_error` reports them.

pub mod client;
pub mod config;
pub mod decode;
pub mod error;
pub mod http;
pub mod query;
pub mod tmdb;
pub mod types;

pub use client::OmdbClient;
pub use config::{Config, TmdbAuth, TmdbConfig};
pub use decode::decode;
pub use error::LookupError;
pub use http::{HttpRequest, HttpResponse, Transport, UreqTransport};
pub use query::{build_url, LookupRequest, MediaType};
pub use tmdb::TmdbClient;
pub use types::{LookupResponse, MovieSummary};
