// Copyright 2026 the Scribble Select Authors
// SPDX-License-Identifier: Apache-2.0

//! Tuning constants for the selection core.
//!
//! This module holds non-visual behavioral settings. Anything a host UI
//! might theme (colors, stroke widths) is deliberately absent: rendering
//! belongs to the host, not this crate.

// ============================================================================
// GESTURE SETTINGS
// ============================================================================
/// Minimum number of captured points for a path to be classifiable
const GESTURE_MIN_POINTS: usize = 3;

/// Minimum straight-line distance (px) between path endpoints.
/// Anything shorter is noise or a tap, never a scribble.
const GESTURE_MIN_STRAIGHT_DISTANCE: f64 = 20.0;

/// Curvature-ratio threshold for accepting a path as a scribble.
///
/// The ratio is stroke length divided by endpoint distance. A perfectly
/// straight drag scores 1.0; back-and-forth scribbling inflates stroke
/// length relative to net displacement. Lowering this value increases
/// sensitivity (more gentle scribbles accepted, more straight drags
/// misread).
const SCRIBBLE_THRESHOLD: f64 = 2.0;

/// Minimum pointer movement (px) before a new point is recorded.
/// Suppresses jitter from high-frequency pointer hardware.
const MIN_MOVE_DELTA: f64 = 0.5;

// ============================================================================
// TILE LAYOUT SETTINGS
// ============================================================================
/// Tile size bounds in segment mode (px)
const TILE_SEGMENT_MIN_SIZE: f64 = 32.0;
const TILE_SEGMENT_MAX_SIZE: f64 = 52.0;

/// Tile size bounds in character mode (px)
const TILE_CHARACTER_MIN_SIZE: f64 = 24.0;
const TILE_CHARACTER_MAX_SIZE: f64 = 44.0;

/// Fixed spacing between adjacent tiles (px)
const TILE_SPACING: f64 = 4.0;

/// Line height as a multiple of the tile size
const LINE_HEIGHT_FACTOR: f64 = 1.5;

// ============================================================================
// SELECTION SETTINGS
// ============================================================================
/// Extra padding (px) around a tile's box when hit testing a path point
const HIT_PADDING: f64 = 8.0;

/// Step (px) used to densify a path before hit testing, so fast drags
/// don't skip over tiles between two sampled points
const DENSIFY_STEP: f64 = 1.0;

/// Vertical offset (px) below the selection's lowest tile for the
/// confirm-button anchor
const ANCHOR_OFFSET_Y: f64 = 20.0;

// ============================================================================
// SERVICE SETTINGS
// ============================================================================
/// Pause between sequential translation requests (ms).
/// The public MyMemory endpoint rate-limits aggressive clients.
const TRANSLATE_REQUEST_DELAY_MS: u64 = 500;

// ============================================================================
// PUBLIC API - Don't edit below this line unless you know what you're doing
// ============================================================================

/// Gesture capture and classification settings
pub mod gesture {
    /// Minimum point count for classification
    pub const MIN_POINTS: usize = super::GESTURE_MIN_POINTS;

    /// Minimum endpoint distance (px)
    pub const MIN_STRAIGHT_DISTANCE: f64 = super::GESTURE_MIN_STRAIGHT_DISTANCE;

    /// Default curvature-ratio acceptance threshold
    pub const SCRIBBLE_THRESHOLD: f64 = super::SCRIBBLE_THRESHOLD;

    /// Minimum movement delta (px) between recorded points
    pub const MIN_MOVE_DELTA: f64 = super::MIN_MOVE_DELTA;
}

/// Tile layout settings
pub mod tiles {
    /// Segment-mode tile size bounds
    pub mod segment {
        pub const MIN_SIZE: f64 = super::super::TILE_SEGMENT_MIN_SIZE;
        pub const MAX_SIZE: f64 = super::super::TILE_SEGMENT_MAX_SIZE;
    }

    /// Character-mode tile size bounds
    pub mod character {
        pub const MIN_SIZE: f64 = super::super::TILE_CHARACTER_MIN_SIZE;
        pub const MAX_SIZE: f64 = super::super::TILE_CHARACTER_MAX_SIZE;
    }

    /// Inter-tile spacing (px)
    pub const SPACING: f64 = super::TILE_SPACING;

    /// Line height as a multiple of tile size
    pub const LINE_HEIGHT_FACTOR: f64 = super::LINE_HEIGHT_FACTOR;
}

/// Selection mapping settings
pub mod selection {
    /// Hit-test padding around a tile (px)
    pub const HIT_PADDING: f64 = super::HIT_PADDING;

    /// Path densification step (px)
    pub const DENSIFY_STEP: f64 = super::DENSIFY_STEP;

    /// Confirm-anchor offset below the selection (px)
    pub const ANCHOR_OFFSET_Y: f64 = super::ANCHOR_OFFSET_Y;
}

/// External service settings
pub mod services {
    /// Delay between sequential translation requests (ms)
    pub const TRANSLATE_REQUEST_DELAY_MS: u64 = super::TRANSLATE_REQUEST_DELAY_MS;
}
