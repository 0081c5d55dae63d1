// Copyright 2026 the Scribble Select Authors
// SPDX-License-Identifier: Apache-2.0

//! Gesture capture: recording a pointer path during a drag.
//!
//! The recorder is a tiny state machine, `Idle → Capturing → Idle`. Pointer
//! down enters `Capturing`; each move appends a point, subject to a minimum
//! movement delta that filters hardware jitter; pointer up (or leaving the
//! surface) finalizes the capture and hands the finished path to the caller
//! for classification. The recorder always returns to `Idle` afterward, so
//! a gesture can never wedge the state machine.
//!
//! At most one gesture is active at a time: a second pointer down while
//! capturing is ignored.

pub mod classifier;

pub use classifier::{GestureClass, RejectReason, classify, classify_with_threshold};

use crate::settings;
use kurbo::Point;

/// An ordered pointer path in overlay-local coordinates.
///
/// Ephemeral: built during one drag, consumed by classification, then
/// dropped whatever the outcome.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PointerPath {
    points: Vec<Point>,
}

impl PointerPath {
    /// Create an empty path.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a path from raw points. Mostly useful in tests and for hosts
    /// that capture points themselves.
    pub fn from_points(points: Vec<Point>) -> Self {
        Self { points }
    }

    /// Append a point, dropping it if it moved less than `min_delta` from
    /// the previous one.
    pub fn push(&mut self, point: Point, min_delta: f64) {
        if let Some(last) = self.points.last()
            && last.distance(point) < min_delta
        {
            return;
        }
        self.points.push(point);
    }

    /// Number of recorded points.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Whether no points have been recorded.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// The recorded points, in capture order.
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Straight-line distance between the first and last point.
    /// Zero for paths with fewer than two points.
    pub fn straight_distance(&self) -> f64 {
        match (self.points.first(), self.points.last()) {
            (Some(first), Some(last)) if self.points.len() >= 2 => first.distance(*last),
            _ => 0.0,
        }
    }

    /// Total length along the path (sum of consecutive point distances).
    pub fn stroke_length(&self) -> f64 {
        self.points
            .windows(2)
            .map(|pair| pair[0].distance(pair[1]))
            .sum()
    }
}

/// Capture phase of the gesture state machine.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum GesturePhase {
    /// No gesture in progress
    #[default]
    Idle,
    /// Pointer is down, accumulating path points
    Capturing,
}

/// Records a pointer path between pointer-down and pointer-up.
#[derive(Debug, Default)]
pub struct GestureRecorder {
    phase: GesturePhase,
    path: PointerPath,
}

impl GestureRecorder {
    /// Create an idle recorder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current capture phase.
    pub fn phase(&self) -> GesturePhase {
        self.phase
    }

    /// The path captured so far (hosts render this as ink feedback).
    pub fn path(&self) -> &PointerPath {
        &self.path
    }

    /// Start capturing at `point`. Ignored if a gesture is already in
    /// progress (a second pointer while dragging).
    pub fn begin(&mut self, point: Point) {
        if self.phase == GesturePhase::Capturing {
            tracing::debug!("pointer down while capturing; ignored");
            return;
        }
        self.phase = GesturePhase::Capturing;
        self.path = PointerPath::new();
        self.path.push(point, 0.0);
        tracing::debug!("gesture capture started at ({:.1}, {:.1})", point.x, point.y);
    }

    /// Record a pointer move. No-op while idle.
    pub fn record(&mut self, point: Point) {
        if self.phase != GesturePhase::Capturing {
            return;
        }
        self.path.push(point, settings::gesture::MIN_MOVE_DELTA);
    }

    /// Finish the capture and return the recorded path, resetting to idle.
    ///
    /// Returns `None` when no gesture was in progress. Pointer-leave is
    /// handled identically to pointer-up by calling this, so releasing
    /// outside the surface can never leave the recorder stuck capturing.
    pub fn finish(&mut self) -> Option<PointerPath> {
        if self.phase != GesturePhase::Capturing {
            return None;
        }
        self.phase = GesturePhase::Idle;
        let path = std::mem::take(&mut self.path);
        tracing::debug!("gesture capture finished with {} points", path.len());
        Some(path)
    }

    /// Drop any in-progress capture without producing a path.
    pub fn cancel(&mut self) {
        self.phase = GesturePhase::Idle;
        self.path = PointerPath::new();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn begin_record_finish_round_trip() {
        let mut rec = GestureRecorder::new();
        assert_eq!(rec.phase(), GesturePhase::Idle);

        rec.begin(Point::new(0.0, 0.0));
        assert_eq!(rec.phase(), GesturePhase::Capturing);

        rec.record(Point::new(10.0, 0.0));
        rec.record(Point::new(20.0, 0.0));

        let path = rec.finish().unwrap();
        assert_eq!(path.len(), 3);
        assert_eq!(rec.phase(), GesturePhase::Idle);
    }

    #[test]
    fn finish_while_idle_yields_nothing() {
        let mut rec = GestureRecorder::new();
        assert!(rec.finish().is_none());
    }

    #[test]
    fn second_pointer_down_is_ignored() {
        let mut rec = GestureRecorder::new();
        rec.begin(Point::new(0.0, 0.0));
        rec.record(Point::new(5.0, 0.0));

        // A second down must not restart the path
        rec.begin(Point::new(100.0, 100.0));
        let path = rec.finish().unwrap();
        assert_eq!(path.points()[0], Point::new(0.0, 0.0));
    }

    #[test]
    fn moves_while_idle_are_dropped() {
        let mut rec = GestureRecorder::new();
        rec.record(Point::new(5.0, 5.0));
        assert!(rec.path().is_empty());
    }

    #[test]
    fn jitter_below_delta_is_filtered() {
        let mut path = PointerPath::new();
        path.push(Point::new(0.0, 0.0), 0.0);
        path.push(Point::new(0.1, 0.0), 0.5);
        path.push(Point::new(0.2, 0.0), 0.5);
        assert_eq!(path.len(), 1);

        path.push(Point::new(1.0, 0.0), 0.5);
        assert_eq!(path.len(), 2);
    }

    #[test]
    fn path_metrics() {
        let path = PointerPath::from_points(vec![
            Point::new(0.0, 0.0),
            Point::new(30.0, 40.0),
            Point::new(0.0, 0.0),
        ]);
        assert_eq!(path.stroke_length(), 100.0);
        assert_eq!(path.straight_distance(), 0.0);
    }

    #[test]
    fn cancel_discards_capture() {
        let mut rec = GestureRecorder::new();
        rec.begin(Point::new(0.0, 0.0));
        rec.cancel();
        assert_eq!(rec.phase(), GesturePhase::Idle);
        assert!(rec.finish().is_none());
    }
}
