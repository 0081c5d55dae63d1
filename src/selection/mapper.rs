// Copyright 2026 the Scribble Select Authors
// SPDX-License-Identifier: Apache-2.0

//! Selection mapping: from an accepted gesture path to toggled indices.
//!
//! The path is densified by linear interpolation first, so a fast drag
//! whose samples straddle a tile still touches it. Every densified point is
//! then tested against every tile's padded bounding box; touched character
//! indices are expanded to their owning segments (in segment mode) and each
//! distinct hit is toggled in the selection set.
//!
//! The scan is O(points × tiles). At the tens-to-low-hundreds of characters
//! this core serves, brute force beats anything cleverer.

use super::Selection;
use crate::layout::{Granularity, Tile};
use crate::segment::{Segment, owning_segment};
use crate::settings;
use kurbo::Point;
use std::collections::BTreeSet;

/// Resample `points` so consecutive samples are at most `step` px apart.
///
/// Purely a hit-testing aid; classification always sees the raw path.
pub fn densify(points: &[Point], step: f64) -> Vec<Point> {
    if points.len() < 2 || step <= 0.0 {
        return points.to_vec();
    }

    let mut dense = Vec::with_capacity(points.len());
    for pair in points.windows(2) {
        let (a, b) = (pair[0], pair[1]);
        dense.push(a);
        let dist = a.distance(b);
        if dist > step {
            let n = (dist / step).floor() as usize;
            for k in 1..=n {
                let t = k as f64 * step / dist;
                if t < 1.0 {
                    dense.push(a.lerp(b, t));
                }
            }
        }
    }
    dense.push(points[points.len() - 1]);
    dense
}

/// Character indices of every tile touched by any of `points`.
pub fn touched_char_indices(points: &[Point], tiles: &[Tile]) -> BTreeSet<usize> {
    let padding = settings::selection::HIT_PADDING;
    let mut touched = BTreeSet::new();
    for tile in tiles {
        let rect = tile.hit_rect(padding);
        if points.iter().any(|p| rect.contains(*p)) {
            touched.insert(tile.index);
        }
    }
    touched
}

/// Apply an accepted scribble path to the selection.
///
/// In segment mode each distinct touched segment is toggled whole; in
/// character mode each touched character index is toggled directly.
/// Characters without an owning segment (stale indices from a text
/// mutation racing an in-flight gesture) are skipped.
pub fn apply_scribble(
    selection: &mut Selection,
    path_points: &[Point],
    tiles: &[Tile],
    segments: &[Segment],
    mode: Granularity,
) {
    let dense = densify(path_points, settings::selection::DENSIFY_STEP);
    let touched = touched_char_indices(&dense, tiles);
    if touched.is_empty() {
        return;
    }
    toggle_touched(selection, &touched, segments, mode);
}

/// Toggle the unit under a direct tap, bypassing path capture.
///
/// Padded hit boxes of adjacent tiles overlap, so a tap can land in more
/// than one box; the tile with the nearest center wins.
pub fn apply_tap(
    selection: &mut Selection,
    point: Point,
    tiles: &[Tile],
    segments: &[Segment],
    mode: Granularity,
) {
    let padding = settings::selection::HIT_PADDING;
    let mut closest: Option<(usize, f64)> = None;

    for tile in tiles {
        if !tile.hit_rect(padding).contains(point) {
            continue;
        }
        let dist = tile.center.distance(point);
        match closest {
            Some((_, best)) if best <= dist => {}
            _ => closest = Some((tile.index, dist)),
        }
    }

    if let Some((index, _)) = closest {
        toggle_touched(selection, &BTreeSet::from([index]), segments, mode);
    }
}

fn toggle_touched(
    selection: &mut Selection,
    touched_chars: &BTreeSet<usize>,
    segments: &[Segment],
    mode: Granularity,
) {
    match mode {
        Granularity::Segment if !segments.is_empty() => {
            let mut touched_segments = BTreeSet::new();
            for &char_index in touched_chars {
                match owning_segment(segments, char_index) {
                    Some(seg) => {
                        touched_segments.insert(seg);
                    }
                    None => {
                        tracing::debug!("no owning segment for char {char_index}; skipped");
                    }
                }
            }
            for seg in touched_segments {
                selection.toggle(seg);
            }
        }
        // Character mode, or no segments to expand into: toggle characters
        // directly as their own pseudo-segments
        _ => {
            for &char_index in touched_chars {
                selection.toggle(char_index);
            }
        }
    }
}
