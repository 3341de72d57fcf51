//! Verify lookups against JSON test vectors stored in `test-vectors/`.
//!
//! Each case describes lookup arguments, the expected URL, a simulated
//! response, and either the expected decoded fields or the expected error
//! kind. Decoded fields are compared as JSON values, not raw strings.

use std::cell::RefCell;

use flicker_core::{
    build_url, Config, HttpRequest, HttpResponse, LookupError, LookupRequest, MediaType,
    OmdbClient, Transport,
};

/// Replays the simulated response of the current case and remembers the URL.
struct Replay {
    response: HttpResponse,
    seen: RefCell<Vec<String>>,
}

impl Transport for Replay {
    fn get(&self, request: &HttpRequest) -> Result<HttpResponse, LookupError> {
        self.seen.borrow_mut().push(request.url.clone());
        Ok(self.response.clone())
    }
}

fn request_from(input: &serde_json::Value) -> LookupRequest {
    let mut req = LookupRequest::new(input["title"].as_str().unwrap());
    if let Some(year) = input["year"].as_str() {
        req = req.year(year);
    }
    if let Some(media_type) = input["type"].as_str() {
        req = req.media_type(media_type.parse::<MediaType>().unwrap());
    }
    req
}

fn error_kind(err: &LookupError) -> &'static str {
    match err {
        LookupError::Config(_) => "config",
        LookupError::InvalidArgument(_) => "invalid_argument",
        LookupError::Transport { .. } => "transport",
        LookupError::Decode { .. } => "decode",
    }
}

#[test]
fn lookup_test_vectors() {
    let raw = include_str!("../../test-vectors/lookup.json");
    let vectors: serde_json::Value = serde_json::from_str(raw).unwrap();
    let base = vectors["base_endpoint"].as_str().unwrap();
    let config = Config::new("KEY", "http://example/").unwrap();
    assert_eq!(config.base_endpoint(), base);

    for case in vectors["cases"].as_array().unwrap() {
        let name = case["name"].as_str().unwrap();
        let request = request_from(&case["input"]);

        let sim = &case["simulated_response"];
        let replay = Replay {
            response: HttpResponse {
                status: sim["status"].as_u64().unwrap_or(200) as u16,
                headers: Vec::new(),
                body: sim["body"].as_str().unwrap_or("").as_bytes().to_vec(),
            },
            seen: RefCell::new(Vec::new()),
        };
        let client = OmdbClient::new(&config, &replay);

        // Verify build
        if let Some(expected_url) = case["expected_url"].as_str() {
            assert_eq!(build_url(base, &request).unwrap(), expected_url, "{name}: url");
        }

        // Verify the whole pipeline
        let result = client.execute(&request);
        match case["expected_error"].as_str() {
            Some(kind) => {
                let err = result.expect_err(name);
                assert_eq!(error_kind(&err), kind, "{name}: error kind");
                if kind == "invalid_argument" {
                    assert!(replay.seen.borrow().is_empty(), "{name}: no request expected");
                }
            }
            None => {
                let decoded = result.unwrap();
                let fields = serde_json::to_value(&decoded).unwrap();
                assert_eq!(fields, case["expected_fields"], "{name}: decoded fields");
                assert_eq!(
                    replay.seen.borrow().as_slice(),
                    [case["expected_url"].as_str().unwrap().to_string()],
                    "{name}: requested url"
                );
            }
        }
    }
}
