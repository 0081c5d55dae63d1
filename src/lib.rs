// Copyright 2026 the Scribble Select Authors
// SPDX-License-Identifier: Apache-2.0

//! Scribble-select: gesture-driven text selection for segmented text.
//!
//! The crate turns a freehand pointer path into a discrete set of selected
//! text units. Text is segmented into selectable chunks (phrases via an
//! injected tokenizer, or single characters as the fallback), laid out as
//! one tile per character, and a drag over the tiles is classified as an
//! intentional "scribble select" or an accidental straight drag using the
//! curvature ratio of the path. Accepted scribbles toggle the touched
//! units in the selection set.
//!
//! Pipeline, per event:
//!
//! ```text
//! text change   → segment::build_segments → layout::layout_tiles
//! pointer drag  → gesture::GestureRecorder → gesture::classify
//! accepted path → selection::apply_scribble → Selection
//! commit        → session::ScribbleSession::{selected_text, delete, replace}
//! ```
//!
//! [`session::ScribbleSession`] owns all of this state and is the intended
//! entry point for hosts; the per-stage modules are public for hosts that
//! need only one stage. The [`services`] module holds the downstream
//! translation and handwriting-recognition HTTP clients the resolved
//! selection is handed to.

pub mod gesture;
pub mod layout;
pub mod segment;
pub mod selection;
pub mod services;
pub mod session;
pub mod settings;

pub use gesture::{GestureClass, GestureRecorder, PointerPath, RejectReason};
pub use layout::{Granularity, Tile};
pub use segment::{Segment, SegmenterPort, Token};
pub use selection::Selection;
pub use session::ScribbleSession;
