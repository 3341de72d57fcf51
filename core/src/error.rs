//! Error types for the movie lookup client.
//!
//! # Design
//! Each variant maps to the stage of the pipeline that raised it, so callers
//! can tell "never reached the network" (`Config`, `InvalidArgument`) apart
//! from "the network failed" (`Transport`) and "the upstream answered with
//! something that is not a JSON object" (`Decode`).
//!
//! A `{"Response":"False","Error":"..."}` body is a valid response and does
//! not produce an error here; see `LookupResponse::api_error`.

use thiserror::Error;

/// Errors returned by the Query Builder, Transport and Response Decoder.
#[derive(Error, Debug)]
pub enum LookupError {
    /// A required credential or endpoint is missing or malformed.
    #[error("invalid configuration: {0}")]
    Config(String),

    /// A lookup argument was rejected before any request was issued.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// The request could not be completed (DNS, connect, timeout, body read).
    #[error("request to {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// The response body is not a JSON object.
    #[error("could not decode response: {message} (body starts with {body_prefix:?})")]
    Decode { message: String, body_prefix: String },
}

impl LookupError {
    pub fn config(message: impl Into<String>) -> Self {
        LookupError::Config(message.into())
    }

    pub fn invalid_argument(message: impl Into<String>) -> Self {
        LookupError::InvalidArgument(message.into())
    }

    pub fn transport(
        url: impl Into<String>,
        source: impl Into<Box<dyn std::error::Error + Send + Sync>>,
    ) -> Self {
        LookupError::Transport {
            url: url.into(),
            source: source.into(),
        }
    }
}
