#![forbid(unsafe_code)]

//! Drag/keyboard resize engine for adaptive layout controls.
//!
//! The engine is split the same way the controls are layered in a host UI:
//!
//! - [`sizer`] - the abstract interaction controller: a deterministic
//!   drag-session state machine that normalizes pointer and keyboard input
//!   into cumulative, increment-snapped, flow-mirrored deltas and forwards
//!   them through the [`sizer::SizerTarget`] capability trait.
//! - [`grid`] - the track model a grid host shares with the engine: indexed
//!   column/row tracks with min/max bounds and fixed vs. proportional
//!   sizing modes.
//! - [`grid_sizer`] - the grid specialization: resolves which adjacent
//!   track pair a drag affects, validates constraints, and commits sizes.
//! - [`content`] - a single-dimension target for sizers that resize an
//!   element directly instead of grid tracks.
//!
//! Everything is host-agnostic and synchronous: the host adapter feeds
//! semantic events in (see `sash-core`) and reads mutated sizing modes
//! back out. No layout pass, rendering, or event loop lives here.

pub mod content;
pub mod grid;
pub mod grid_sizer;
pub mod sizer;

pub use content::{ContentResizer, DimensionBounds};
pub use grid::{GridAxis, GridModel, GridModelError, Track, TrackPair, TrackSizing};
pub use grid_sizer::{
    DragBaseline, GridSizer, HorizontalAlignment, ResizeBehavior, ResizeDirection, SizerPlacement,
    VerticalAlignment, resolve_behavior, resolve_direction, track_pair,
};
pub use sizer::{
    Cursor, Orientation, SizerConfig, SizerConfigError, SizerController, SizerEffect,
    SizerNoopReason, SizerState, SizerTarget, SizerTransition, SizerVisualState, snap_to_increment,
};
