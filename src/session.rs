// Copyright 2026 the Scribble Select Authors
// SPDX-License-Identifier: Apache-2.0

//! The scribble session: one owner for all selection-core state.
//!
//! `ScribbleSession` holds the text, its segment model, the tile layout,
//! the selection set, and the in-flight gesture. Hosts feed it pointer and
//! text events and read back the selection; it performs no I/O and never
//! suspends, so it lives happily inside a single-threaded UI event loop.
//! In a multi-threaded host, confine the session to one task — none of the
//! underlying algorithms tolerate concurrent mutation.
//!
//! State transitions:
//! - text or width change → segments and tiles fully rebuilt, selection
//!   cleared (old indices would be meaningless)
//! - pointer down/move/up → gesture capture, then classification; accepted
//!   scribbles toggle the touched units
//! - tap → direct toggle of one unit, no capture involved
//! - commit (delete/replace) or explicit clear → selection emptied

use crate::gesture::{GestureClass, GesturePhase, GestureRecorder, classify_with_threshold};
use crate::layout::{self, Granularity, Tile};
use crate::segment::{Segment, SegmenterPort, build_segments};
use crate::selection::{Selection, apply_scribble, apply_tap};
use crate::settings;
use kurbo::Point;
use std::collections::BTreeSet;

/// Event-driven selection core for one text surface.
pub struct ScribbleSession {
    text: String,
    container_width: f64,
    mode: Granularity,
    scribble_threshold: f64,
    segmenter: Option<Box<dyn SegmenterPort>>,
    segments: Vec<Segment>,
    tiles: Vec<Tile>,
    selection: Selection,
    recorder: GestureRecorder,
}

impl ScribbleSession {
    /// Create an empty session for a container of `width` px.
    pub fn new(width: f64) -> Self {
        Self {
            text: String::new(),
            container_width: width,
            mode: Granularity::default(),
            scribble_threshold: settings::gesture::SCRIBBLE_THRESHOLD,
            segmenter: None,
            segments: Vec::new(),
            tiles: Vec::new(),
            selection: Selection::new(),
            recorder: GestureRecorder::new(),
        }
    }

    /// Attach a tokenizer port. Takes effect on the next text change.
    pub fn with_segmenter(mut self, segmenter: Box<dyn SegmenterPort>) -> Self {
        self.segmenter = Some(segmenter);
        self
    }

    /// Override the scribble acceptance threshold (default 2.0; lower is
    /// more sensitive).
    pub fn with_scribble_threshold(mut self, threshold: f64) -> Self {
        self.scribble_threshold = threshold;
        self
    }

    // ========================================================================
    // TEXT & LAYOUT
    // ========================================================================

    /// Replace the text, rebuilding segments and tiles and clearing the
    /// selection.
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
        self.rebuild();
    }

    /// Append a text delta (e.g. from incremental speech results).
    pub fn append_text(&mut self, delta: &str) {
        if delta.is_empty() {
            return;
        }
        self.text.push_str(delta);
        self.rebuild();
    }

    /// Update the container width (host resize), relaying out tiles.
    /// The selection survives: indices are unaffected by layout.
    pub fn resize(&mut self, width: f64) {
        self.container_width = width;
        self.tiles = layout::layout_tiles(&self.text, width, self.mode);
    }

    /// Switch between segment and character granularity. The selection is
    /// cleared because its indices change meaning.
    pub fn set_mode(&mut self, mode: Granularity) {
        if self.mode == mode {
            return;
        }
        self.mode = mode;
        self.selection.clear();
        self.tiles = layout::layout_tiles(&self.text, self.container_width, mode);
    }

    fn rebuild(&mut self) {
        self.selection.clear();
        self.recorder.cancel();
        self.segments = build_segments(&self.text, self.segmenter.as_deref());
        self.tiles = layout::layout_tiles(&self.text, self.container_width, self.mode);
        tracing::debug!(
            "rebuilt: {} chars, {} segments, {} tiles",
            self.text.chars().count(),
            self.segments.len(),
            self.tiles.len()
        );
    }

    // ========================================================================
    // POINTER EVENTS
    // ========================================================================

    /// Pointer down over the interaction surface.
    pub fn pointer_down(&mut self, point: Point) {
        self.recorder.begin(point);
    }

    /// Pointer move while (possibly) capturing.
    pub fn pointer_move(&mut self, point: Point) {
        self.recorder.record(point);
    }

    /// Pointer up: finalize capture, classify, and apply the selection on
    /// an accepted scribble. Returns the classification when a gesture was
    /// in progress.
    pub fn pointer_up(&mut self) -> Option<GestureClass> {
        let path = self.recorder.finish()?;
        let class = classify_with_threshold(&path, self.scribble_threshold);

        if class.is_scribble() {
            apply_scribble(
                &mut self.selection,
                path.points(),
                &self.tiles,
                &self.segments,
                self.mode,
            );
            tracing::debug!("scribble applied; {} selected", self.selection.len());
        }

        Some(class)
    }

    /// Pointer left the surface: treated exactly like pointer up, so a
    /// release outside the overlay can't leave the session capturing.
    pub fn pointer_leave(&mut self) -> Option<GestureClass> {
        self.pointer_up()
    }

    /// Whether a gesture is currently being captured.
    pub fn is_capturing(&self) -> bool {
        self.recorder.phase() == GesturePhase::Capturing
    }

    /// The in-flight path, for hosts that render ink feedback.
    pub fn current_path(&self) -> &[Point] {
        self.recorder.path().points()
    }

    /// Direct tap on a tile: toggles its owning unit without capture.
    pub fn tap(&mut self, point: Point) {
        apply_tap(
            &mut self.selection,
            point,
            &self.tiles,
            &self.segments,
            self.mode,
        );
    }

    // ========================================================================
    // SELECTION ACCESS
    // ========================================================================

    /// The current selection set.
    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    /// Drop the selection (the explicit cancel action).
    pub fn clear_selection(&mut self) {
        self.selection.clear();
    }

    /// Character indices covered by the selection, ascending.
    pub fn selected_char_indices(&self) -> BTreeSet<usize> {
        match self.mode {
            Granularity::Segment if !self.segments.is_empty() => self
                .selection
                .iter()
                .filter_map(|seg| self.segments.get(seg))
                .flat_map(|seg| seg.indices.iter().copied())
                .collect(),
            _ => self.selection.iter().collect(),
        }
    }

    /// The selected text, concatenated in index order. What downstream
    /// actions (translate, delete, edit) consume.
    pub fn selected_text(&self) -> String {
        let indices = self.selected_char_indices();
        self.text
            .chars()
            .enumerate()
            .filter(|(i, _)| indices.contains(i))
            .map(|(_, ch)| ch)
            .collect()
    }

    /// Anchor point for confirm buttons, below the selected tiles.
    pub fn selection_anchor(&self) -> Option<Point> {
        layout::selection_anchor(&self.tiles, &self.selected_char_indices())
    }

    // ========================================================================
    // COMMITS
    // ========================================================================

    /// Delete the selected characters, returning the removed text.
    /// Rebuilds the model; the selection is consumed.
    pub fn delete_selection(&mut self) -> String {
        let indices = self.selected_char_indices();
        if indices.is_empty() {
            return String::new();
        }

        let mut removed = String::new();
        let mut kept = String::new();
        for (i, ch) in self.text.chars().enumerate() {
            if indices.contains(&i) {
                removed.push(ch);
            } else {
                kept.push(ch);
            }
        }

        self.text = kept;
        self.rebuild();
        removed
    }

    /// Replace the selected characters with `replacement`, inserted at the
    /// position of the first selected character. Returns the replaced text.
    pub fn replace_selection(&mut self, replacement: &str) -> String {
        let indices = self.selected_char_indices();
        let first = match indices.iter().next() {
            Some(&i) => i,
            None => return String::new(),
        };

        let mut removed = String::new();
        let mut rebuilt = String::new();
        for (i, ch) in self.text.chars().enumerate() {
            if i == first {
                rebuilt.push_str(replacement);
            }
            if indices.contains(&i) {
                removed.push(ch);
            } else {
                rebuilt.push(ch);
            }
        }

        self.text = rebuilt;
        self.rebuild();
        removed
    }

    // ========================================================================
    // READ ACCESS
    // ========================================================================

    /// The full text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// The current segment list.
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// The current tile layout.
    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    /// The active granularity.
    pub fn mode(&self) -> Granularity {
        self.mode
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::segment::Token;
    use anyhow::Result;

    struct PhraseSegmenter;

    impl SegmenterPort for PhraseSegmenter {
        fn tokenize(&self, text: &str) -> Result<Vec<Token>> {
            match text {
                "これは本です。" => Ok(vec![
                    Token::new("これ", "代名詞"),
                    Token::new("は", "助詞"),
                    Token::new("本", "名詞"),
                    Token::new("です", "助動詞"),
                    Token::new("。", "補助記号"),
                ]),
                _ => anyhow::bail!("unknown text"),
            }
        }
    }

    /// Drive a zig-zag scribble over the given tiles' centers, satisfying
    /// the curvature threshold.
    fn scribble_over(session: &mut ScribbleSession, tile_range: std::ops::Range<usize>) {
        let centers: Vec<Point> = session.tiles()[tile_range]
            .iter()
            .map(|t| t.center)
            .collect();
        let first = centers[0];
        let last = *centers.last().unwrap();

        session.pointer_down(first);
        // Sweep right, back, and right again: stroke ≈ 3× net displacement
        for p in &centers {
            session.pointer_move(*p);
        }
        for p in centers.iter().rev() {
            session.pointer_move(*p);
        }
        for p in &centers {
            session.pointer_move(*p);
        }
        let class = session.pointer_up().unwrap();
        assert!(
            class.is_scribble(),
            "test gesture over {first:?}..{last:?} should classify as scribble: {class:?}"
        );
    }

    #[test]
    fn fallback_segmentation_end_to_end() {
        crate::test_logging::init();
        let mut session = ScribbleSession::new(800.0);
        session.set_text("ありがとう");

        assert_eq!(session.segments().len(), 5);
        for (i, seg) in session.segments().iter().enumerate() {
            assert_eq!(seg.text.chars().count(), 1);
            assert_eq!(seg.start, i);
        }

        scribble_over(&mut session, 0..3);
        assert_eq!(
            session.selected_char_indices(),
            BTreeSet::from([0, 1, 2])
        );
        assert_eq!(session.selected_text(), "ありが");
    }

    #[test]
    fn tokenized_segmentation_end_to_end() {
        crate::test_logging::init();
        let mut session =
            ScribbleSession::new(800.0).with_segmenter(Box::new(PhraseSegmenter));
        session.set_text("これは本です。");

        let texts: Vec<&str> = session.segments().iter().map(|s| s.text.as_str()).collect();
        assert_eq!(texts, ["これは", "本です", "。"]);

        // Touching just the particle は selects its whole segment
        session.tap(session.tiles()[2].center);
        assert_eq!(session.selected_text(), "これは");
    }

    #[test]
    fn straight_drag_changes_nothing() {
        let mut session = ScribbleSession::new(800.0);
        session.set_text("ありがとう");

        let start = session.tiles()[0].center;
        let end = session.tiles()[4].center;
        session.pointer_down(start);
        session.pointer_move(start.midpoint(end));
        session.pointer_move(end);
        let class = session.pointer_up().unwrap();

        assert!(!class.is_scribble());
        assert!(session.selection().is_empty());
    }

    #[test]
    fn scribble_twice_restores_selection() {
        let mut session = ScribbleSession::new(800.0);
        session.set_text("ありがとう");

        scribble_over(&mut session, 0..3);
        let selected = session.selection().clone();
        assert!(!selected.is_empty());

        scribble_over(&mut session, 0..3);
        assert!(session.selection().is_empty());
    }

    #[test]
    fn text_mutation_clears_selection_and_gesture() {
        let mut session = ScribbleSession::new(800.0);
        session.set_text("ありがとう");
        scribble_over(&mut session, 0..3);
        assert!(!session.selection().is_empty());

        session.set_text("こんにちは");
        assert!(session.selection().is_empty());
        assert!(!session.is_capturing());
    }

    #[test]
    fn pointer_leave_finalizes_capture() {
        let mut session = ScribbleSession::new(800.0);
        session.set_text("あい");

        session.pointer_down(Point::new(0.0, 0.0));
        session.pointer_move(Point::new(10.0, 10.0));
        let class = session.pointer_leave();

        assert!(class.is_some());
        assert!(!session.is_capturing());
        // And a later stray up is a no-op
        assert!(session.pointer_up().is_none());
    }

    #[test]
    fn delete_selection_removes_characters() {
        let mut session = ScribbleSession::new(800.0);
        session.set_text("ありがとう");
        scribble_over(&mut session, 0..3);

        let removed = session.delete_selection();
        assert_eq!(removed, "ありが");
        assert_eq!(session.text(), "とう");
        assert!(session.selection().is_empty());
        assert_eq!(session.segments().len(), 2);
    }

    #[test]
    fn replace_selection_inserts_at_first_index() {
        let mut session = ScribbleSession::new(800.0);
        session.set_text("ありがとう");
        scribble_over(&mut session, 2..4);

        let removed = session.replace_selection("??");
        assert_eq!(removed, "がと");
        assert_eq!(session.text(), "あり??う");
        assert!(session.selection().is_empty());
    }

    #[test]
    fn commits_with_no_selection_are_noops() {
        let mut session = ScribbleSession::new(800.0);
        session.set_text("あい");
        assert_eq!(session.delete_selection(), "");
        assert_eq!(session.replace_selection("x"), "");
        assert_eq!(session.text(), "あい");
    }

    #[test]
    fn mode_switch_clears_selection() {
        let mut session = ScribbleSession::new(800.0);
        session.set_text("あいう");
        session.tap(session.tiles()[0].center);
        assert!(!session.selection().is_empty());

        session.set_mode(Granularity::Character);
        assert!(session.selection().is_empty());
    }

    #[test]
    fn resize_preserves_selection() {
        let mut session = ScribbleSession::new(800.0);
        session.set_text("あいう");
        session.tap(session.tiles()[1].center);

        session.resize(400.0);
        assert!(session.selection().contains(1));
    }

    #[test]
    fn selection_anchor_tracks_selected_tiles() {
        let mut session = ScribbleSession::new(800.0);
        session.set_text("あいう");
        assert!(session.selection_anchor().is_none());

        session.tap(session.tiles()[1].center);
        let anchor = session.selection_anchor().unwrap();
        assert!(anchor.y > session.tiles()[1].center.y);
    }

    #[test]
    fn append_text_extends_and_resets() {
        let mut session = ScribbleSession::new(800.0);
        session.set_text("あり");
        session.append_text("がとう");
        assert_eq!(session.text(), "ありがとう");
        assert_eq!(session.segments().len(), 5);
    }
}
