// Copyright 2026 the Scribble Select Authors
// SPDX-License-Identifier: Apache-2.0

//! MyMemory translation client.
//!
//! A thin blocking HTTP wrapper over the public MyMemory endpoint
//! (`GET /get?q=...&langpair=ja|<code>`). Errors never reach the UI as
//! exceptions: [`MyMemoryClient::translate_or_sentinel`] substitutes the
//! sentinel string the host displays in its result card.
//!
//! Multi-language fan-out is sequential with a fixed pause between
//! requests. The public endpoint rate-limits, so rate-friendliness wins
//! over latency here; hosts that bring their own keyed service can pass a
//! zero delay.

use super::{ServiceError, TargetLanguage, TranslatorPort};
use crate::settings;
use serde::Deserialize;
use std::time::Duration;

/// Sentinel shown in place of a failed translation.
pub const TRANSLATION_ERROR_SENTINEL: &str = "翻訳エラー";

const DEFAULT_BASE_URL: &str = "https://api.mymemory.translated.net/get";

/// Source language for all requests (the prototype translates Japanese).
const SOURCE_LANG: &str = "ja";

#[derive(Debug, Deserialize)]
struct MyMemoryResponse {
    #[serde(rename = "responseData")]
    response_data: MyMemoryResponseData,
}

#[derive(Debug, Deserialize)]
struct MyMemoryResponseData {
    #[serde(rename = "translatedText")]
    translated_text: Option<String>,
}

/// Blocking client for the MyMemory translation API.
pub struct MyMemoryClient {
    http: reqwest::blocking::Client,
    base_url: String,
    request_delay: Duration,
}

impl MyMemoryClient {
    /// Client against the public endpoint with the default inter-request
    /// delay.
    pub fn new() -> Self {
        Self::with_base_url(DEFAULT_BASE_URL)
    }

    /// Client against a custom endpoint (testing, proxies).
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        // Same panic contract as `Client::new()`: construction only fails
        // when the TLS backend can't initialize
        let http = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(15))
            .build()
            .expect("failed to build HTTP client");
        Self {
            http,
            base_url: base_url.into(),
            request_delay: Duration::from_millis(
                settings::services::TRANSLATE_REQUEST_DELAY_MS,
            ),
        }
    }

    /// Override the pause between sequential requests.
    pub fn with_request_delay(mut self, delay: Duration) -> Self {
        self.request_delay = delay;
        self
    }

    /// Translate, substituting the error sentinel on any failure.
    pub fn translate_or_sentinel(&self, text: &str, target_lang: &str) -> String {
        match self.translate(text, target_lang) {
            Ok(translated) => translated,
            Err(err) => {
                tracing::warn!("translation to {target_lang} failed: {err}");
                TRANSLATION_ERROR_SENTINEL.to_string()
            }
        }
    }

    /// Translate into every language in `targets`, sequentially, pausing
    /// between requests. Failures yield the sentinel per language rather
    /// than aborting the batch.
    pub fn translate_all(
        &self,
        text: &str,
        targets: &[TargetLanguage],
    ) -> Vec<(TargetLanguage, String)> {
        let mut results = Vec::with_capacity(targets.len());
        for (i, lang) in targets.iter().enumerate() {
            if i > 0 && !self.request_delay.is_zero() {
                std::thread::sleep(self.request_delay);
            }
            results.push((*lang, self.translate_or_sentinel(text, lang.code)));
        }
        results
    }
}

impl TranslatorPort for MyMemoryClient {
    fn translate(&self, text: &str, target_lang: &str) -> Result<String, ServiceError> {
        tracing::info!("translating {} chars to {target_lang}", text.chars().count());

        let langpair = format!("{SOURCE_LANG}|{target_lang}");
        let response: MyMemoryResponse = self
            .http
            .get(&self.base_url)
            .query(&[("q", text), ("langpair", langpair.as_str())])
            .send()?
            .error_for_status()?
            .json()?;

        match response.response_data.translated_text {
            Some(translated) if !translated.is_empty() => Ok(translated),
            _ => Err(ServiceError::BadResponse(
                "empty translatedText in response".to_string(),
            )),
        }
    }
}

impl Default for MyMemoryClient {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn client_construction_succeeds() {
        // Builder with timeout must construct, same as Client::new() would
        let _ = MyMemoryClient::new().with_request_delay(Duration::ZERO);
    }

    #[test]
    fn response_deserializes() {
        let json = r#"{
            "responseData": { "translatedText": "Thank you", "match": 0.98 },
            "responseStatus": 200
        }"#;
        let parsed: MyMemoryResponse = serde_json::from_str(json).unwrap();
        assert_eq!(
            parsed.response_data.translated_text.as_deref(),
            Some("Thank you")
        );
    }

    #[test]
    fn response_tolerates_missing_text() {
        let json = r#"{ "responseData": {} }"#;
        let parsed: MyMemoryResponse = serde_json::from_str(json).unwrap();
        assert!(parsed.response_data.translated_text.is_none());
    }

    #[test]
    fn unreachable_endpoint_yields_sentinel() {
        // Closed local port: connection refused, no real traffic
        let client = MyMemoryClient::with_base_url("http://127.0.0.1:1/get")
            .with_request_delay(Duration::ZERO);
        let result = client.translate_or_sentinel("ありがとう", "en");
        assert_eq!(result, TRANSLATION_ERROR_SENTINEL);
    }

    #[test]
    fn translate_all_covers_every_target() {
        let client = MyMemoryClient::with_base_url("http://127.0.0.1:1/get")
            .with_request_delay(Duration::ZERO);
        let results = client.translate_all("ありがとう", &super::super::TARGET_LANGUAGES);

        assert_eq!(results.len(), 5);
        for (lang, text) in &results {
            assert!(!lang.code.is_empty());
            assert_eq!(text, TRANSLATION_ERROR_SENTINEL);
        }
    }
}
