//! Abstract sizer interaction controller.
//!
//! [`SizerController`] turns semantic input events into normalized resize
//! deltas and forwards them to a [`SizerTarget`] (the thing that actually
//! moves layout space around: today a grid-track pair, see
//! [`crate::grid_sizer`], or a single owned dimension, see
//! [`crate::content`]).
//!
//! Deltas are always *cumulative* from the session baseline. A rejected
//! delta does not end the session; a later cumulative delta may become
//! valid again as the pointer moves back.
//!
//! ```text
//! Idle -> Pressed -> Dragging -> Idle
//!    \--> Idle (release/cancel from Pressed)
//! ```
//!
//! Keyboard presses short-circuit the lifecycle entirely: each key press is
//! one complete session (`on_drag_starting`, one delta, implicit
//! completion) that never leaves `Idle`.

use std::fmt;

use sash_core::{FlowDirection, SizerInputEvent, SizerKey, Vector};
use serde::{Deserialize, Serialize};

/// Visual axis of the splitter bar.
///
/// Intentionally inverted relative to movement: a `Vertical` bar moves
/// horizontally (resizing columns), a `Horizontal` bar moves vertically
/// (resizing rows).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Orientation {
    #[default]
    Vertical,
    Horizontal,
}

/// Pointer cursor resolved from the orientation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Cursor {
    /// West-east resize arrows (vertical bar, horizontal movement).
    SizeWestEast,
    /// North-south resize arrows (horizontal bar, vertical movement).
    SizeNorthSouth,
}

const fn cursor_for(orientation: Orientation) -> Cursor {
    match orientation {
        Orientation::Vertical => Cursor::SizeWestEast,
        Orientation::Horizontal => Cursor::SizeNorthSouth,
    }
}

/// Sizer configuration surface.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SizerConfig {
    orientation: Orientation,
    drag_increment: f64,
    keyboard_increment: f64,
    is_thumb_visible: bool,
}

impl Default for SizerConfig {
    fn default() -> Self {
        Self {
            orientation: Orientation::Vertical,
            drag_increment: 1.0,
            keyboard_increment: 8.0,
            is_thumb_visible: true,
        }
    }
}

impl SizerConfig {
    /// Current orientation.
    #[must_use]
    pub const fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Pointer snap unit in pixels.
    #[must_use]
    pub const fn drag_increment(&self) -> f64 {
        self.drag_increment
    }

    /// Per-key-press step in pixels.
    #[must_use]
    pub const fn keyboard_increment(&self) -> f64 {
        self.keyboard_increment
    }

    /// Whether the visual thumb is shown. Visual-only.
    #[must_use]
    pub const fn is_thumb_visible(&self) -> bool {
        self.is_thumb_visible
    }

    /// Cursor for the current orientation.
    #[must_use]
    pub const fn cursor(&self) -> Cursor {
        cursor_for(self.orientation)
    }

    /// Set the orientation, returning the newly resolved cursor.
    pub fn set_orientation(&mut self, orientation: Orientation) -> Cursor {
        self.orientation = orientation;
        cursor_for(orientation)
    }

    /// Set the pointer snap unit. Must be finite and > 0.
    pub fn set_drag_increment(&mut self, increment: f64) -> Result<(), SizerConfigError> {
        validate_increment(increment)?;
        self.drag_increment = increment;
        Ok(())
    }

    /// Set the keyboard step. Must be finite and > 0.
    pub fn set_keyboard_increment(&mut self, increment: f64) -> Result<(), SizerConfigError> {
        validate_increment(increment)?;
        self.keyboard_increment = increment;
        Ok(())
    }

    /// Show or hide the visual thumb.
    pub fn set_thumb_visible(&mut self, visible: bool) {
        self.is_thumb_visible = visible;
    }
}

/// Configuration errors.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SizerConfigError {
    NonPositiveIncrement { increment: f64 },
}

impl fmt::Display for SizerConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonPositiveIncrement { increment } => {
                write!(f, "increment must be finite and > 0 (got {increment})")
            }
        }
    }
}

impl std::error::Error for SizerConfigError {}

fn validate_increment(increment: f64) -> Result<(), SizerConfigError> {
    if !increment.is_finite() || increment <= 0.0 {
        return Err(SizerConfigError::NonPositiveIncrement { increment });
    }
    Ok(())
}

/// Snap a cumulative offset to a multiple of `increment`.
///
/// Truncates toward zero rather than flooring so snapping is symmetric for
/// positive and negative offsets.
#[must_use]
pub fn snap_to_increment(value: f64, increment: f64) -> f64 {
    (value / increment).trunc() * increment
}

/// The resize capability a sizer controller drives.
///
/// `on_drag_starting` is invoked exactly once per session, before any delta,
/// and must capture whatever baseline the target needs: every subsequent
/// delta is cumulative from that baseline, never incremental.
pub trait SizerTarget {
    /// A session is starting; capture the baseline.
    fn on_drag_starting(&mut self);

    /// Apply a cumulative horizontal delta. Returns whether anything changed.
    fn on_drag_horizontal(&mut self, delta: f64) -> bool;

    /// Apply a cumulative vertical delta. Returns whether anything changed.
    fn on_drag_vertical(&mut self, delta: f64) -> bool;
}

/// Drag-session lifecycle state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SizerState {
    Idle,
    /// Pointer down, manipulation not yet started.
    Pressed,
    /// Manipulation in progress; keyboard input is gated.
    Dragging,
}

/// Explicit no-op diagnostics for events that are safely ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SizerNoopReason {
    Disabled,
    SessionAlreadyActive,
    IdleWithoutActiveSession,
    PointerDragGatesKeyboard,
    KeyOffAxis,
}

/// Effect emitted by one lifecycle step.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "effect", rename_all = "snake_case")]
pub enum SizerEffect {
    Pressed,
    Released,
    DragStarted,
    DragDelta {
        delta: f64,
        applied: bool,
    },
    Committed,
    Canceled {
        /// Whether restoring the baseline mutated the target.
        restored: bool,
    },
    KeyboardApplied {
        delta: f64,
        applied: bool,
    },
    HoverChanged {
        hovered: bool,
    },
    EnabledChanged {
        enabled: bool,
    },
    Noop {
        reason: SizerNoopReason,
    },
}

/// One state-machine transition with deterministic telemetry fields.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SizerTransition {
    pub transition_id: u64,
    pub from: SizerState,
    pub to: SizerState,
    pub effect: SizerEffect,
}

/// Visual state group names, derived from controller state.
///
/// Side-effect notifications only; not part of the resize algorithm's
/// correctness surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SizerVisualState {
    pub common: &'static str,
    pub orientation: &'static str,
    pub thumb: &'static str,
}

/// Runtime lifecycle machine for sizer interactions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SizerController {
    config: SizerConfig,
    flow: FlowDirection,
    state: SizerState,
    enabled: bool,
    hovered: bool,
    transition_counter: u64,
}

impl Default for SizerController {
    fn default() -> Self {
        Self::new(SizerConfig::default())
    }
}

impl SizerController {
    /// Construct an enabled controller in `Idle`.
    #[must_use]
    pub const fn new(config: SizerConfig) -> Self {
        Self {
            config,
            flow: FlowDirection::LeftToRight,
            state: SizerState::Idle,
            enabled: true,
            hovered: false,
            transition_counter: 0,
        }
    }

    /// Current lifecycle state.
    #[must_use]
    pub const fn state(&self) -> SizerState {
        self.state
    }

    /// Current configuration.
    #[must_use]
    pub const fn config(&self) -> &SizerConfig {
        &self.config
    }

    /// Mutable configuration access for the validated setters.
    pub fn config_mut(&mut self) -> &mut SizerConfig {
        &mut self.config
    }

    /// Whether the control accepts interaction.
    #[must_use]
    pub const fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Ambient text-flow direction used for horizontal mirroring.
    #[must_use]
    pub const fn flow_direction(&self) -> FlowDirection {
        self.flow
    }

    /// Update the ambient text-flow direction.
    ///
    /// Takes effect on the next normalized delta; an in-flight session keeps
    /// producing cumulative deltas under the new flow, which matches hosts
    /// that flip flow only between interactions.
    pub fn set_flow_direction(&mut self, flow: FlowDirection) {
        self.flow = flow;
    }

    /// Visual state group names for the current controller state.
    #[must_use]
    pub const fn visual_state(&self) -> SizerVisualState {
        let common = if !self.enabled {
            "Disabled"
        } else {
            match self.state {
                SizerState::Pressed | SizerState::Dragging => "Pressed",
                SizerState::Idle => {
                    if self.hovered {
                        "PointerOver"
                    } else {
                        "Normal"
                    }
                }
            }
        };
        let orientation = match self.config.orientation() {
            Orientation::Vertical => "Vertical",
            Orientation::Horizontal => "Horizontal",
        };
        let thumb = if self.config.is_thumb_visible() {
            "Visible"
        } else {
            "Collapsed"
        };
        SizerVisualState {
            common,
            orientation,
            thumb,
        }
    }

    /// Unconditionally reset to `Idle`, restoring the target's baseline if a
    /// drag was in progress.
    ///
    /// Safety valve for host cleanup paths (control unloaded, capture lost
    /// without a cancel event). Returns `None` if already idle.
    pub fn force_cancel(&mut self, target: &mut dyn SizerTarget) -> Option<SizerTransition> {
        let from = self.state;
        match from {
            SizerState::Idle => None,
            SizerState::Pressed | SizerState::Dragging => {
                let restored = from == SizerState::Dragging && self.dispatch(target, 0.0);
                self.state = SizerState::Idle;
                Some(self.transition(from, SizerEffect::Canceled { restored }))
            }
        }
    }

    /// Apply one semantic input event, producing a transition record.
    pub fn handle_event(
        &mut self,
        event: &SizerInputEvent,
        target: &mut dyn SizerTarget,
    ) -> SizerTransition {
        let from = self.state;
        let effect = match *event {
            SizerInputEvent::EnabledChanged { enabled } => {
                self.enabled = enabled;
                if !enabled {
                    self.hovered = false;
                    if self.state != SizerState::Idle {
                        // Disabling mid-session is a cancel: restore the
                        // baseline before going idle.
                        if self.state == SizerState::Dragging {
                            self.dispatch(target, 0.0);
                        }
                        self.state = SizerState::Idle;
                    }
                }
                SizerEffect::EnabledChanged { enabled }
            }
            _ if !self.enabled => SizerEffect::Noop {
                reason: SizerNoopReason::Disabled,
            },
            SizerInputEvent::PointerEntered => {
                self.hovered = true;
                SizerEffect::HoverChanged { hovered: true }
            }
            SizerInputEvent::PointerExited => {
                self.hovered = false;
                SizerEffect::HoverChanged { hovered: false }
            }
            SizerInputEvent::PointerPressed => match self.state {
                SizerState::Idle => {
                    self.state = SizerState::Pressed;
                    SizerEffect::Pressed
                }
                SizerState::Pressed | SizerState::Dragging => SizerEffect::Noop {
                    reason: SizerNoopReason::SessionAlreadyActive,
                },
            },
            SizerInputEvent::PointerReleased => match self.state {
                SizerState::Pressed => {
                    self.state = SizerState::Idle;
                    SizerEffect::Released
                }
                SizerState::Idle => SizerEffect::Noop {
                    reason: SizerNoopReason::IdleWithoutActiveSession,
                },
                // Completion is driven by the manipulation events.
                SizerState::Dragging => SizerEffect::Noop {
                    reason: SizerNoopReason::SessionAlreadyActive,
                },
            },
            SizerInputEvent::ManipulationStarted => match self.state {
                SizerState::Idle | SizerState::Pressed => {
                    target.on_drag_starting();
                    self.state = SizerState::Dragging;
                    SizerEffect::DragStarted
                }
                SizerState::Dragging => SizerEffect::Noop {
                    reason: SizerNoopReason::SessionAlreadyActive,
                },
            },
            SizerInputEvent::ManipulationDelta { cumulative } => match self.state {
                SizerState::Dragging => {
                    let delta = self.pointer_delta(cumulative);
                    let applied = self.dispatch(target, delta);
                    #[cfg(feature = "tracing")]
                    if !applied {
                        tracing::debug!(delta, "resize delta rejected");
                    }
                    SizerEffect::DragDelta { delta, applied }
                }
                SizerState::Idle | SizerState::Pressed => SizerEffect::Noop {
                    reason: SizerNoopReason::IdleWithoutActiveSession,
                },
            },
            SizerInputEvent::ManipulationCompleted => match self.state {
                SizerState::Dragging => {
                    self.state = SizerState::Idle;
                    SizerEffect::Committed
                }
                SizerState::Idle | SizerState::Pressed => SizerEffect::Noop {
                    reason: SizerNoopReason::IdleWithoutActiveSession,
                },
            },
            SizerInputEvent::ManipulationCanceled => match self.state {
                SizerState::Dragging => {
                    // Cumulative delta zero restores the baseline exactly.
                    let restored = self.dispatch(target, 0.0);
                    self.state = SizerState::Idle;
                    SizerEffect::Canceled { restored }
                }
                SizerState::Pressed => {
                    self.state = SizerState::Idle;
                    SizerEffect::Canceled { restored: false }
                }
                SizerState::Idle => SizerEffect::Noop {
                    reason: SizerNoopReason::IdleWithoutActiveSession,
                },
            },
            SizerInputEvent::KeyDown { key } => match self.state {
                SizerState::Idle => match self.keyboard_delta(key) {
                    Some(delta) => {
                        // One key press is a complete session: start, one
                        // delta, implicit completion.
                        target.on_drag_starting();
                        let applied = self.dispatch(target, delta);
                        SizerEffect::KeyboardApplied { delta, applied }
                    }
                    None => SizerEffect::Noop {
                        reason: SizerNoopReason::KeyOffAxis,
                    },
                },
                SizerState::Pressed | SizerState::Dragging => SizerEffect::Noop {
                    reason: SizerNoopReason::PointerDragGatesKeyboard,
                },
            },
        };

        self.transition(from, effect)
    }

    fn transition(&mut self, from: SizerState, effect: SizerEffect) -> SizerTransition {
        self.transition_counter = self.transition_counter.saturating_add(1);
        let transition = SizerTransition {
            transition_id: self.transition_counter,
            from,
            to: self.state,
            effect,
        };
        #[cfg(feature = "tracing")]
        tracing::trace!(?transition, "sizer transition");
        transition
    }

    /// Normalize a cumulative pointer translation into a signed scalar.
    fn pointer_delta(&self, cumulative: Vector) -> f64 {
        let raw = match self.config.orientation() {
            Orientation::Vertical => cumulative.x,
            Orientation::Horizontal => cumulative.y,
        };
        self.mirror(snap_to_increment(raw, self.config.drag_increment()))
    }

    /// Normalize one key press, or `None` when the key is off-axis.
    fn keyboard_delta(&self, key: SizerKey) -> Option<f64> {
        let step = self.config.keyboard_increment();
        match (self.config.orientation(), key) {
            (Orientation::Vertical, SizerKey::Left) => Some(self.mirror(-step)),
            (Orientation::Vertical, SizerKey::Right) => Some(self.mirror(step)),
            (Orientation::Horizontal, SizerKey::Up) => Some(-step),
            (Orientation::Horizontal, SizerKey::Down) => Some(step),
            _ => None,
        }
    }

    /// Invert horizontal-axis deltas under right-to-left flow.
    fn mirror(&self, delta: f64) -> f64 {
        match (self.config.orientation(), self.flow) {
            (Orientation::Vertical, FlowDirection::RightToLeft) => -delta,
            _ => delta,
        }
    }

    fn dispatch(&self, target: &mut dyn SizerTarget, delta: f64) -> bool {
        match self.config.orientation() {
            Orientation::Vertical => target.on_drag_horizontal(delta),
            Orientation::Horizontal => target.on_drag_vertical(delta),
        }
    }
}
