// Copyright 2026 the Scribble Select Authors
// SPDX-License-Identifier: Apache-2.0

//! Tile layout: computing an on-screen position for every character.
//!
//! Every visible character gets a square `Tile` (center + edge length) in
//! overlay-local coordinates. A single tile size is shared by the whole
//! text, chosen so the longest line fits the container width and clamped to
//! the mode's size bounds. Newlines emit no tile but still consume a
//! character index, so `Tile.index` always agrees with the character
//! positions used by the segment model.
//!
//! Layout is a full recompute on every text or width change. No incremental
//! placement; at the tens-to-low-hundreds of characters this core targets,
//! that is never the bottleneck.

use crate::settings;
use kurbo::{Point, Rect};
use std::collections::BTreeSet;

/// Which granularity the selection operates at.
///
/// Segment mode expands touched characters to their owning segment;
/// character mode treats every character as its own selectable unit. The
/// tile size bounds also differ between modes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Granularity {
    /// Select whole segments (phrases when a tokenizer is present)
    #[default]
    Segment,
    /// Select individual characters
    Character,
}

impl Granularity {
    /// Tile size bounds (min, max) for this mode.
    pub fn size_bounds(&self) -> (f64, f64) {
        match self {
            Self::Segment => (
                settings::tiles::segment::MIN_SIZE,
                settings::tiles::segment::MAX_SIZE,
            ),
            Self::Character => (
                settings::tiles::character::MIN_SIZE,
                settings::tiles::character::MAX_SIZE,
            ),
        }
    }
}

/// The computed screen position and size for one character.
#[derive(Debug, Clone, PartialEq)]
pub struct Tile {
    /// The character this tile displays
    pub ch: char,
    /// Position in the full text's character sequence
    pub index: usize,
    /// Tile center in overlay-local coordinates
    pub center: Point,
    /// Edge length of the square tile
    pub size: f64,
}

impl Tile {
    /// The box a path point must fall in to touch this tile.
    pub fn hit_rect(&self, padding: f64) -> Rect {
        let half = self.size / 2.0 + padding;
        Rect::new(
            self.center.x - half,
            self.center.y - half,
            self.center.x + half,
            self.center.y + half,
        )
    }
}

/// Compute the shared tile size for `text` in a container of `width` px.
///
/// The size is the largest `s` such that the longest line's `n` tiles plus
/// `(n - 1)` fixed spacings fit in `width`, clamped to the mode's bounds.
pub fn shared_tile_size(text: &str, width: f64, mode: Granularity) -> f64 {
    let (min, max) = mode.size_bounds();
    let longest = text
        .split('\n')
        .map(|line| line.chars().count())
        .max()
        .unwrap_or(0);
    if longest == 0 {
        return max;
    }
    let n = longest as f64;
    let fit = (width - (n - 1.0) * settings::tiles::SPACING) / n;
    fit.clamp(min, max)
}

/// Lay out one tile per visible character of `text`.
///
/// Newline characters advance to the next line and consume an index but
/// emit no tile.
pub fn layout_tiles(text: &str, width: f64, mode: Granularity) -> Vec<Tile> {
    let size = shared_tile_size(text, width, mode);
    let line_height = size * settings::tiles::LINE_HEIGHT_FACTOR;
    let advance = size + settings::tiles::SPACING;

    let mut tiles = Vec::new();
    let mut x = size / 2.0;
    let mut y = size / 2.0;

    for (index, ch) in text.chars().enumerate() {
        if ch == '\n' {
            x = size / 2.0;
            y += line_height;
            continue;
        }
        tiles.push(Tile {
            ch,
            index,
            center: Point::new(x, y),
            size,
        });
        x += advance;
    }

    tiles
}

/// Anchor point for host confirm buttons: centered horizontally over the
/// selected tiles, a fixed offset below the lowest one.
///
/// `selected_chars` are character indices; indices without a tile (stale
/// after a text mutation) are skipped. Returns `None` when the selection
/// touches no tile.
pub fn selection_anchor(tiles: &[Tile], selected_chars: &BTreeSet<usize>) -> Option<Point> {
    let mut min_x = f64::INFINITY;
    let mut max_x = f64::NEG_INFINITY;
    let mut max_y = f64::NEG_INFINITY;
    let mut hit = false;

    for tile in tiles {
        if !selected_chars.contains(&tile.index) {
            continue;
        }
        min_x = min_x.min(tile.center.x);
        max_x = max_x.max(tile.center.x);
        max_y = max_y.max(tile.center.y);
        hit = true;
    }

    if hit {
        Some(Point::new(
            (min_x + max_x) / 2.0,
            max_y + settings::selection::ANCHOR_OFFSET_Y,
        ))
    } else {
        None
    }
}
