#![forbid(unsafe_code)]

//! Host-agnostic primitives shared by Sash sizer controls.
//!
//! This crate holds the pieces that do not depend on any particular layout
//! model: pixel-space geometry and the semantic input-event vocabulary a
//! host adapter translates raw framework events into. Keeping these types
//! free of layout logic lets the resize engine be driven and replayed in
//! tests without a real UI host.

pub mod event;
pub mod geometry;

pub use event::{FlowDirection, SizerInputEvent, SizerKey};
pub use geometry::{Size, Vector};
