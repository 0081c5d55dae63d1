// Copyright 2026 the Scribble Select Authors
// SPDX-License-Identifier: Apache-2.0

//! External service boundary: translation and handwriting recognition.
//!
//! These are the excluded collaborators the selection core hands its
//! resolved text (or captured ink) to. Both are modeled as port traits with
//! HTTP-backed implementations; both expose an infallible variant that
//! collapses errors into a plain value (sentinel string / empty string) so
//! UI callers never need an error path just to display a result.

pub mod recognize;
pub mod translate;

pub use recognize::HandwritingClient;
pub use translate::MyMemoryClient;

use thiserror::Error;

/// Errors from the HTTP service clients.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// Transport or HTTP-status failure
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The service answered but the payload was unusable
    #[error("unexpected response: {0}")]
    BadResponse(String),
}

/// Translate text into a target language.
pub trait TranslatorPort {
    /// Translate `text` into the language identified by `target_lang`
    /// (ISO 639-1 code).
    fn translate(&self, text: &str, target_lang: &str) -> Result<String, ServiceError>;
}

/// Recognize text from a handwriting/ink image.
pub trait RecognizerPort {
    /// Recognize text in the given encoded image bytes.
    fn recognize(&self, image: &[u8]) -> Result<String, ServiceError>;
}

/// A translation target offered to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TargetLanguage {
    /// ISO 639-1 code passed to the translator
    pub code: &'static str,
    /// Display name (Japanese UI labels, matching the host)
    pub name: &'static str,
}

/// The demonstrated translation targets.
pub const TARGET_LANGUAGES: [TargetLanguage; 5] = [
    TargetLanguage { code: "en", name: "英語" },
    TargetLanguage { code: "ko", name: "韓国語" },
    TargetLanguage { code: "zh", name: "中国語" },
    TargetLanguage { code: "es", name: "スペイン語" },
    TargetLanguage { code: "fr", name: "フランス語" },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn target_languages_are_distinct() {
        for (i, a) in TARGET_LANGUAGES.iter().enumerate() {
            for b in &TARGET_LANGUAGES[i + 1..] {
                assert_ne!(a.code, b.code);
            }
        }
    }
}
