// Copyright 2026 the Scribble Select Authors
// SPDX-License-Identifier: Apache-2.0

//! Handwriting recognition client.
//!
//! Posts a captured ink image (PNG bytes) as base64 JSON to a configurable
//! recognition endpoint and reads back the recognized text. Per the service
//! contract, failure is representable as a plain value:
//! [`HandwritingClient::recognize_or_empty`] returns an empty string so the
//! host can treat "nothing recognized" and "service down" identically.

use super::{RecognizerPort, ServiceError};
use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use serde::{Deserialize, Serialize};
use std::time::Duration;

#[derive(Debug, Serialize)]
struct RecognizeRequest {
    /// Base64-encoded image bytes
    image: String,
}

#[derive(Debug, Deserialize)]
struct RecognizeResponse {
    #[serde(default)]
    text: String,
}

/// Blocking client for a handwriting/image-OCR endpoint.
pub struct HandwritingClient {
    http: reqwest::blocking::Client,
    endpoint: String,
}

impl HandwritingClient {
    /// Client posting to `endpoint`.
    pub fn new(endpoint: impl Into<String>) -> Self {
        // Same panic contract as `Client::new()`: construction only fails
        // when the TLS backend can't initialize
        let http = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(15))
            .build()
            .expect("failed to build HTTP client");
        Self {
            http,
            endpoint: endpoint.into(),
        }
    }

    /// Recognize, returning an empty string on any failure.
    pub fn recognize_or_empty(&self, image: &[u8]) -> String {
        match self.recognize(image) {
            Ok(text) => text,
            Err(err) => {
                tracing::warn!("handwriting recognition failed: {err}");
                String::new()
            }
        }
    }
}

impl RecognizerPort for HandwritingClient {
    fn recognize(&self, image: &[u8]) -> Result<String, ServiceError> {
        tracing::info!("recognizing {} byte image", image.len());

        let body = RecognizeRequest {
            image: STANDARD.encode(image),
        };
        let response: RecognizeResponse = self
            .http
            .post(&self.endpoint)
            .json(&body)
            .send()?
            .error_for_status()?
            .json()?;

        Ok(response.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn client_construction_succeeds() {
        // Builder with timeout must construct, same as Client::new() would
        let _ = HandwritingClient::new("http://127.0.0.1:1/recognize");
    }

    #[test]
    fn request_encodes_image_as_base64() {
        let body = RecognizeRequest {
            image: STANDARD.encode(b"ink"),
        };
        let json = serde_json::to_string(&body).unwrap();
        assert_eq!(json, r#"{"image":"aW5r"}"#);
    }

    #[test]
    fn response_defaults_missing_text_to_empty() {
        let parsed: RecognizeResponse = serde_json::from_str("{}").unwrap();
        assert_eq!(parsed.text, "");
    }

    #[test]
    fn unreachable_endpoint_yields_empty() {
        let client = HandwritingClient::new("http://127.0.0.1:1/recognize");
        assert_eq!(client.recognize_or_empty(b"ink"), "");
    }
}
