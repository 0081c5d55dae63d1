// Copyright 2026 the Scribble Select Authors
// SPDX-License-Identifier: Apache-2.0

//! Scribble-vs-straight-line classification via the curvature ratio.
//!
//! The discriminant is a single pass over the path: stroke length divided
//! by the straight-line distance between endpoints. A straight drag scores
//! exactly 1.0; any genuine back-and-forth scribble inflates stroke length
//! relative to net displacement. Paths are accepted as scribbles at a ratio
//! of [`settings::gesture::SCRIBBLE_THRESHOLD`] (2.0) and up.
//!
//! An earlier per-vertex angle-counting variant existed and was abandoned;
//! the ratio test is cheaper and proved more consistent.

use super::PointerPath;
use crate::settings;

/// Why a path was not accepted as a scribble.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RejectReason {
    /// Fewer points than [`settings::gesture::MIN_POINTS`]
    TooFewPoints,
    /// Endpoints closer than [`settings::gesture::MIN_STRAIGHT_DISTANCE`].
    /// Also covers coincident endpoints, which would otherwise divide by
    /// zero in the ratio.
    TooShort,
    /// Ratio below the scribble threshold (an ordinary straight drag)
    TooStraight,
}

/// Outcome of classifying a captured path.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GestureClass {
    /// Intentional scribble-select gesture
    Scribble {
        /// The measured ratio, for host debugging/telemetry
        curvature_ratio: f64,
    },
    /// Not a selection gesture; the selection must not change
    Rejected(RejectReason),
}

impl GestureClass {
    /// Whether the path was accepted as a scribble.
    pub fn is_scribble(&self) -> bool {
        matches!(self, Self::Scribble { .. })
    }
}

/// Classify with the default threshold.
pub fn classify(path: &PointerPath) -> GestureClass {
    classify_with_threshold(path, settings::gesture::SCRIBBLE_THRESHOLD)
}

/// Classify `path`, accepting at `threshold` and above.
///
/// The default threshold is 2.0; lower values increase sensitivity at the
/// cost of misreading straight drags as scribbles.
pub fn classify_with_threshold(path: &PointerPath, threshold: f64) -> GestureClass {
    if path.len() < settings::gesture::MIN_POINTS {
        return GestureClass::Rejected(RejectReason::TooFewPoints);
    }

    let straight = path.straight_distance();
    // straight == 0.0 (closed loop) falls through here too, guarding the
    // division below
    if straight < settings::gesture::MIN_STRAIGHT_DISTANCE {
        return GestureClass::Rejected(RejectReason::TooShort);
    }

    let ratio = path.stroke_length() / straight;
    tracing::debug!(
        "classify: {} points, straight={:.1}, ratio={:.2}, threshold={:.2}",
        path.len(),
        straight,
        ratio,
        threshold
    );

    if ratio >= threshold {
        GestureClass::Scribble {
            curvature_ratio: ratio,
        }
    } else {
        GestureClass::Rejected(RejectReason::TooStraight)
    }
}
