//! Grid-track resize target.
//!
//! [`GridSizer`] is the grid specialization of [`crate::sizer::SizerTarget`]:
//! it decides which two adjacent tracks a drag affects (policy resolution),
//! validates proposed sizes against bounds and the content floor, and
//! commits new sizes choosing between absolute and proportional assignment.
//!
//! Policy resolution runs exactly once per session, in `on_drag_starting`,
//! and is frozen for the session's duration even if alignment inputs change
//! mid-drag. The sibling always receives the exact negation of the target's
//! change, so total space across the pair is conserved.

use sash_core::Size;
use serde::{Deserialize, Serialize};

use crate::grid::{GridAxis, GridModel, TrackPair};
use crate::sizer::SizerTarget;

/// Horizontal alignment of the control within its cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HorizontalAlignment {
    Left,
    Center,
    Right,
    #[default]
    Stretch,
}

/// Vertical alignment of the control within its cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VerticalAlignment {
    Top,
    Center,
    Bottom,
    #[default]
    Stretch,
}

/// Read-only per-frame snapshot of the control as measured by the host.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct SizerPlacement {
    /// Column index the control occupies.
    pub column: usize,
    /// Row index the control occupies.
    pub row: usize,
    pub horizontal_alignment: HorizontalAlignment,
    pub vertical_alignment: VerticalAlignment,
    /// Measured size of the control itself. Doubles as the content floor:
    /// a track may never shrink to or below the splitter living in it.
    pub size: Size,
}

/// Which grid axis a resize affects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResizeDirection {
    /// Resolved once at drag start from alignment and aspect ratio.
    #[default]
    Auto,
    Columns,
    Rows,
}

/// How the target/sibling indices relate to the control's own track.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResizeBehavior {
    /// Resolved once at drag start from the resolved axis's alignment.
    #[default]
    BasedOnAlignment,
    CurrentAndNext,
    PreviousAndCurrent,
    PreviousAndNext,
}

/// Resolve `Auto` into a concrete axis. First match wins:
/// non-stretch horizontal alignment, non-stretch vertical alignment, then
/// aspect ratio (`width <= height` means columns).
#[must_use]
pub fn resolve_direction(direction: ResizeDirection, placement: &SizerPlacement) -> GridAxis {
    match direction {
        ResizeDirection::Columns => GridAxis::Columns,
        ResizeDirection::Rows => GridAxis::Rows,
        ResizeDirection::Auto => {
            if placement.horizontal_alignment != HorizontalAlignment::Stretch {
                GridAxis::Columns
            } else if placement.vertical_alignment != VerticalAlignment::Stretch {
                GridAxis::Rows
            } else if placement.size.width <= placement.size.height {
                GridAxis::Columns
            } else {
                GridAxis::Rows
            }
        }
    }
}

/// Resolve `BasedOnAlignment` into a concrete behavior using the resolved
/// axis's alignment: start-edge picks the previous pair, end-edge the next,
/// stretch/center straddles the control.
#[must_use]
pub fn resolve_behavior(
    behavior: ResizeBehavior,
    axis: GridAxis,
    placement: &SizerPlacement,
) -> ResizeBehavior {
    match behavior {
        ResizeBehavior::BasedOnAlignment => match axis {
            GridAxis::Columns => match placement.horizontal_alignment {
                HorizontalAlignment::Left => ResizeBehavior::PreviousAndCurrent,
                HorizontalAlignment::Right => ResizeBehavior::CurrentAndNext,
                HorizontalAlignment::Center | HorizontalAlignment::Stretch => {
                    ResizeBehavior::PreviousAndNext
                }
            },
            GridAxis::Rows => match placement.vertical_alignment {
                VerticalAlignment::Top => ResizeBehavior::PreviousAndCurrent,
                VerticalAlignment::Bottom => ResizeBehavior::CurrentAndNext,
                VerticalAlignment::Center | VerticalAlignment::Stretch => {
                    ResizeBehavior::PreviousAndNext
                }
            },
        },
        concrete => concrete,
    }
}

/// Compute the target/sibling pair for a concrete behavior relative to the
/// control's own track index.
///
/// Returns `None` when the behavior is still unresolved or the previous
/// index would underflow.
#[must_use]
pub fn track_pair(behavior: ResizeBehavior, index: usize) -> Option<TrackPair> {
    match behavior {
        ResizeBehavior::CurrentAndNext => Some(TrackPair {
            target: index,
            sibling: index.checked_add(1)?,
        }),
        ResizeBehavior::PreviousAndNext => Some(TrackPair {
            target: index.checked_sub(1)?,
            sibling: index.checked_add(1)?,
        }),
        ResizeBehavior::PreviousAndCurrent => Some(TrackPair {
            target: index.checked_sub(1)?,
            sibling: index,
        }),
        ResizeBehavior::BasedOnAlignment => None,
    }
}

/// Measured sizes of the pair at session start. All deltas are cumulative
/// offsets from this snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DragBaseline {
    pub target: f64,
    pub sibling: f64,
}

/// Per-session resolution, frozen in `on_drag_starting`.
#[derive(Debug, Clone, Copy, PartialEq)]
struct GridSession {
    axis: GridAxis,
    pair: TrackPair,
    baseline: DragBaseline,
}

/// Resize target that redistributes space between two adjacent grid tracks.
///
/// Borrows the [`GridModel`] mutably for the control's lifetime so ownership
/// and mutation rights stay explicit; the host hands over the *effective*
/// container (after any `parent_level` ancestor walk it performs).
#[derive(Debug)]
pub struct GridSizer<'g> {
    grid: &'g mut GridModel,
    placement: SizerPlacement,
    resize_direction: ResizeDirection,
    resize_behavior: ResizeBehavior,
    parent_level: u32,
    session: Option<GridSession>,
}

impl<'g> GridSizer<'g> {
    /// Create a sizer over the given container with default policy.
    #[must_use]
    pub fn new(grid: &'g mut GridModel, placement: SizerPlacement) -> Self {
        Self {
            grid,
            placement,
            resize_direction: ResizeDirection::default(),
            resize_behavior: ResizeBehavior::default(),
            parent_level: 0,
            session: None,
        }
    }

    /// Override the resize direction.
    #[must_use]
    pub fn resize_direction(mut self, direction: ResizeDirection) -> Self {
        self.resize_direction = direction;
        self
    }

    /// Override the resize behavior.
    #[must_use]
    pub fn resize_behavior(mut self, behavior: ResizeBehavior) -> Self {
        self.resize_behavior = behavior;
        self
    }

    /// Ancestor-walk depth the host used to pick the effective container.
    ///
    /// Carried as configuration only; the walk itself is the host's job and
    /// happens before the `GridModel` is handed over.
    #[must_use]
    pub fn parent_level(mut self, level: u32) -> Self {
        self.parent_level = level;
        self
    }

    /// Configured ancestor-walk depth.
    #[must_use]
    pub const fn configured_parent_level(&self) -> u32 {
        self.parent_level
    }

    /// Read-only view of the borrowed container.
    #[must_use]
    pub fn grid(&self) -> &GridModel {
        self.grid
    }

    /// The frozen axis and pair of the current session, if resolved.
    #[must_use]
    pub fn session_pair(&self) -> Option<(GridAxis, TrackPair)> {
        self.session.map(|session| (session.axis, session.pair))
    }

    /// Validate and commit one cumulative delta along `axis`.
    ///
    /// All-or-nothing: if either proposed size violates bounds or the
    /// content floor the whole delta is rejected and nothing is mutated.
    fn apply(&mut self, axis: GridAxis, delta: f64) -> bool {
        let Some(session) = self.session else {
            return false;
        };
        if session.axis != axis {
            return false;
        }
        let floor = match axis {
            GridAxis::Columns => self.placement.size.width,
            GridAxis::Rows => self.placement.size.height,
        };
        let proposed_target = session.baseline.target + delta;
        let proposed_sibling = session.baseline.sibling - delta;

        let pair = session.pair;
        let tracks = self.grid.tracks_mut(axis);
        let target = tracks[pair.target];
        let sibling = tracks[pair.sibling];
        if !target.permits(proposed_target, floor) || !sibling.permits(proposed_sibling, floor) {
            return false;
        }

        match (target.is_proportional(), sibling.is_proportional()) {
            (false, false) => {
                let changed_target = tracks[pair.target].set_absolute(proposed_target, floor);
                let changed_sibling = tracks[pair.sibling].set_absolute(proposed_sibling, floor);
                changed_target || changed_sibling
            }
            // The layout engine redistributes freed space among proportional
            // tracks on its own; only the non-proportional side needs an
            // explicit assignment.
            (true, false) => tracks[pair.sibling].set_absolute(proposed_sibling, floor),
            (false, true) => tracks[pair.target].set_absolute(proposed_target, floor),
            (true, true) => {
                // Express both sizes as star weights on a 1:1 weight-to-pixel
                // basis, then pin every other proportional track on the axis
                // to its measured size so it cannot silently absorb the
                // redistribution.
                let mut changed = tracks[pair.target].set_weight(proposed_target);
                changed |= tracks[pair.sibling].set_weight(proposed_sibling);
                for (index, track) in tracks.iter_mut().enumerate() {
                    if index != pair.target && index != pair.sibling && track.is_proportional() {
                        changed |= track.set_weight(track.measured());
                    }
                }
                changed
            }
        }
    }
}

impl SizerTarget for GridSizer<'_> {
    fn on_drag_starting(&mut self) {
        self.session = None;
        let axis = resolve_direction(self.resize_direction, &self.placement);
        let behavior = resolve_behavior(self.resize_behavior, axis, &self.placement);
        let index = match axis {
            GridAxis::Columns => self.placement.column,
            GridAxis::Rows => self.placement.row,
        };
        let Some(pair) = track_pair(behavior, index) else {
            return;
        };
        if !self.grid.pair_in_bounds(axis, pair) {
            return;
        }
        let tracks = self.grid.tracks(axis);
        self.session = Some(GridSession {
            axis,
            pair,
            baseline: DragBaseline {
                target: tracks[pair.target].measured(),
                sibling: tracks[pair.sibling].measured(),
            },
        });
    }

    fn on_drag_horizontal(&mut self, delta: f64) -> bool {
        self.apply(GridAxis::Columns, delta)
    }

    fn on_drag_vertical(&mut self, delta: f64) -> bool {
        self.apply(GridAxis::Rows, delta)
    }
}
