//! Semantic input events for sizer controls.
//!
//! A host adapter translates its framework's raw pointer/keyboard events
//! into this vocabulary before handing them to the resize engine. The
//! events are deliberately framework-free and serializable so interaction
//! sequences can be captured and replayed in tests.
//!
//! # Design Notes
//!
//! - Manipulation deltas carry the *cumulative* translation from the
//!   manipulation origin, never a per-event increment.
//! - Keys are limited to the four directional keys a sizer reacts to;
//!   everything else is filtered out by the host adapter.

use serde::{Deserialize, Serialize};

use crate::geometry::Vector;

/// Ambient text-flow direction of the host surface.
///
/// Right-to-left flow mirrors horizontal drag deltas so that dragging
/// toward a pane always grows the pane the user expects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FlowDirection {
    #[default]
    LeftToRight,
    RightToLeft,
}

/// Directional keys a sizer responds to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SizerKey {
    Left,
    Right,
    Up,
    Down,
}

/// One semantic input event delivered to a sizer control.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum SizerInputEvent {
    /// Pointer entered the control's bounds.
    PointerEntered,
    /// Pointer left the control's bounds.
    PointerExited,
    /// Pointer pressed on the control (capture acquired by the host).
    PointerPressed,
    /// Pointer released without a manipulation having completed.
    PointerReleased,
    /// A drag manipulation started.
    ManipulationStarted,
    /// The pointer moved during a manipulation.
    ManipulationDelta {
        /// Cumulative translation since `ManipulationStarted`.
        cumulative: Vector,
    },
    /// The manipulation completed normally.
    ManipulationCompleted,
    /// The manipulation was canceled by the host (capture lost, escape).
    ManipulationCanceled,
    /// A directional key was pressed.
    KeyDown { key: SizerKey },
    /// The control's enabled state changed.
    EnabledChanged { enabled: bool },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn events_round_trip_through_serde() {
        let events = [
            SizerInputEvent::PointerPressed,
            SizerInputEvent::ManipulationDelta {
                cumulative: Vector::new(12.5, -3.0),
            },
            SizerInputEvent::KeyDown {
                key: SizerKey::Right,
            },
            SizerInputEvent::EnabledChanged { enabled: false },
        ];
        for event in events {
            let json = serde_json::to_string(&event).expect("serialize");
            let back: SizerInputEvent = serde_json::from_str(&json).expect("deserialize");
            assert_eq!(back, event);
        }
    }

    #[test]
    fn event_tag_is_snake_case() {
        let json = serde_json::to_string(&SizerInputEvent::ManipulationStarted).expect("serialize");
        assert!(json.contains("manipulation_started"));
    }
}
