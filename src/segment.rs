// Copyright 2026 the Scribble Select Authors
// SPDX-License-Identifier: Apache-2.0

//! Segment model: turning raw text into selectable units.
//!
//! A `Segment` is a run of characters treated as one selectable unit. When a
//! morphological tokenizer is available (injected via [`SegmenterPort`]),
//! segments approximate phrase boundaries: a segment closes after a particle
//! or auxiliary-verb token, after sentence punctuation, and at the final
//! token. Without a tokenizer the model degrades to one segment per
//! character.
//!
//! Segments always partition the text: concatenating `segment.text` in order
//! reproduces the input exactly. The whole list is rebuilt on every text
//! change; there is no incremental update, which keeps index arithmetic
//! trivially consistent with the tile layout.

use anyhow::Result;

/// Sentence punctuation that forces a segment boundary
const BOUNDARY_PUNCTUATION: [char; 4] = ['、', '。', '！', '？'];

/// Part-of-speech tags that close a segment (particle, auxiliary verb).
///
/// These are the tags emitted by the common Japanese morphological
/// analyzers (MeCab / kuromoji lineage), which is what hosts are expected
/// to adapt behind [`SegmenterPort`].
const BOUNDARY_POS: [&str; 2] = ["助詞", "助動詞"];

/// A single token produced by an external morphological tokenizer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// The token's text as it appears in the input
    pub surface_form: String,
    /// Coarse part-of-speech tag (e.g. "助詞" for particles)
    pub part_of_speech: String,
    /// Finer-grained part-of-speech tag; unused by segmentation today but
    /// part of the tokenizer contract
    pub part_of_speech_detail: String,
}

impl Token {
    /// Create a token with an empty detail tag.
    pub fn new(surface_form: impl Into<String>, part_of_speech: impl Into<String>) -> Self {
        Self {
            surface_form: surface_form.into(),
            part_of_speech: part_of_speech.into(),
            part_of_speech_detail: String::new(),
        }
    }

    fn is_boundary(&self) -> bool {
        if BOUNDARY_POS.contains(&self.part_of_speech.as_str()) {
            return true;
        }
        let mut chars = self.surface_form.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => BOUNDARY_PUNCTUATION.contains(&c),
            _ => false,
        }
    }
}

/// Trait for providing tokenization from any external morphological analyzer.
///
/// Implementations may be arbitrarily unreliable: the builder treats any
/// error as "tokenizer unavailable" and falls back to per-character
/// segmentation, so failures never reach the caller.
pub trait SegmenterPort {
    /// Tokenize `text` into an ordered token stream covering it end to end.
    fn tokenize(&self, text: &str) -> Result<Vec<Token>>;
}

/// A contiguous run of characters treated as one selectable unit.
///
/// `indices` are positions in the full text's character sequence (not byte
/// offsets), unique and ascending. `start`/`end` are the first and last of
/// those positions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment {
    /// Character indices belonging to this segment, ascending
    pub indices: Vec<usize>,
    /// The segment's text
    pub text: String,
    /// First character index
    pub start: usize,
    /// Last character index
    pub end: usize,
}

impl Segment {
    /// Whether this segment owns the given character index.
    pub fn contains_index(&self, index: usize) -> bool {
        index >= self.start && index <= self.end && self.indices.contains(&index)
    }
}

/// Build the segment list for `text`.
///
/// Uses `segmenter` when supplied; on tokenizer failure, or when the token
/// stream doesn't cover the text exactly, falls back to one segment per
/// character. Empty text yields an empty list.
pub fn build_segments(text: &str, segmenter: Option<&dyn SegmenterPort>) -> Vec<Segment> {
    if text.is_empty() {
        return Vec::new();
    }

    if let Some(port) = segmenter {
        match port.tokenize(text) {
            Ok(tokens) => {
                if let Some(segments) = segments_from_tokens(text, &tokens) {
                    return segments;
                }
                tracing::warn!(
                    "tokenizer output does not cover the text; falling back to per-character segments"
                );
            }
            Err(err) => {
                tracing::warn!(
                    "tokenizer failed ({err}); falling back to per-character segments"
                );
            }
        }
    }

    per_character_segments(text)
}

/// One segment per character (the degraded granularity).
fn per_character_segments(text: &str) -> Vec<Segment> {
    text.chars()
        .enumerate()
        .map(|(i, ch)| Segment {
            indices: vec![i],
            text: ch.to_string(),
            start: i,
            end: i,
        })
        .collect()
}

/// Accumulate tokens into phrase-ish segments.
///
/// Returns `None` when the tokens don't reproduce the text's character
/// sequence exactly, which would break the partition invariant.
fn segments_from_tokens(text: &str, tokens: &[Token]) -> Option<Vec<Segment>> {
    let char_count = text.chars().count();
    let token_chars: usize = tokens.iter().map(|t| t.surface_form.chars().count()).sum();
    if token_chars != char_count {
        return None;
    }
    let rebuilt: String = tokens.iter().map(|t| t.surface_form.as_str()).collect();
    if rebuilt != text {
        return None;
    }

    let mut segments = Vec::new();
    let mut indices = Vec::new();
    let mut buf = String::new();
    let mut cursor = 0usize;

    for (pos, token) in tokens.iter().enumerate() {
        for ch in token.surface_form.chars() {
            indices.push(cursor);
            buf.push(ch);
            cursor += 1;
        }

        let last = pos + 1 == tokens.len();
        if (token.is_boundary() || last)
            && let (Some(&start), Some(&end)) = (indices.first(), indices.last())
        {
            segments.push(Segment {
                indices: std::mem::take(&mut indices),
                text: std::mem::take(&mut buf),
                start,
                end,
            });
        }
    }

    Some(segments)
}

/// Find the position (in `segments`) of the segment owning `char_index`.
pub fn owning_segment(segments: &[Segment], char_index: usize) -> Option<usize> {
    segments.iter().position(|s| s.contains_index(char_index))
}
