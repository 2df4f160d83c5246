//! Grid track model mutated by the resize engine.
//!
//! This is the engine-facing view of a grid container: an indexed list of
//! column and row tracks, each carrying its current measured size, optional
//! min/max bounds, and a sizing mode. The host hands the engine a mutable
//! `GridModel` (after any ancestor walk it performs itself) and reads the
//! mutated sizing modes back into its own layout pass.
//!
//! Validation and assignment primitives live on [`Track`]; the policy of
//! *which* tracks to touch lives in [`crate::grid_sizer`].

use std::fmt;

use serde::{Deserialize, Serialize};

/// Which axis of the grid a resize operates on.
///
/// Distinct from the splitter bar's visual orientation: a vertical bar
/// resizes columns, a horizontal bar resizes rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GridAxis {
    Columns,
    Rows,
}

/// How a track's size is expressed to the host layout engine.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum TrackSizing {
    /// An absolute size in pixels.
    Fixed { pixels: f64 },
    /// A star weight relative to the other proportional tracks on the axis.
    Proportional { weight: f64 },
}

/// One layout row or column.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Track {
    sizing: TrackSizing,
    measured: f64,
    min: Option<f64>,
    max: Option<f64>,
}

impl Track {
    /// Create a fixed-size track whose measured size equals its pixel size.
    pub fn fixed(pixels: f64) -> Result<Self, GridModelError> {
        validate_extent(pixels)?;
        Ok(Self {
            sizing: TrackSizing::Fixed { pixels },
            measured: pixels,
            min: None,
            max: None,
        })
    }

    /// Create a proportional track with the given weight and measured size.
    ///
    /// The measured size is whatever the host's last layout pass produced
    /// for this track; the engine never derives it from the weight.
    pub fn proportional(weight: f64, measured: f64) -> Result<Self, GridModelError> {
        if !weight.is_finite() || weight <= 0.0 {
            return Err(GridModelError::NonPositiveWeight { weight });
        }
        validate_extent(measured)?;
        Ok(Self {
            sizing: TrackSizing::Proportional { weight },
            measured,
            min: None,
            max: None,
        })
    }

    /// Attach min/max bounds, replacing any existing bounds.
    ///
    /// `None` leaves the corresponding side unbounded.
    pub fn with_bounds(
        mut self,
        min: Option<f64>,
        max: Option<f64>,
    ) -> Result<Self, GridModelError> {
        if let Some(min) = min {
            validate_extent(min)?;
        }
        if let Some(max) = max {
            validate_extent(max)?;
        }
        if let (Some(lo), Some(hi)) = (min, max)
            && lo > hi
        {
            return Err(GridModelError::InvalidBounds { min: lo, max: hi });
        }
        self.min = min;
        self.max = max;
        Ok(self)
    }

    /// Current sizing mode.
    #[must_use]
    pub const fn sizing(&self) -> TrackSizing {
        self.sizing
    }

    /// Last measured size in pixels.
    #[must_use]
    pub const fn measured(&self) -> f64 {
        self.measured
    }

    /// Lower bound, if any.
    #[must_use]
    pub const fn min(&self) -> Option<f64> {
        self.min
    }

    /// Upper bound, if any.
    #[must_use]
    pub const fn max(&self) -> Option<f64> {
        self.max
    }

    /// Whether this track is proportionally sized.
    #[must_use]
    pub const fn is_proportional(&self) -> bool {
        matches!(self.sizing, TrackSizing::Proportional { .. })
    }

    /// Check a proposed size against bounds and the content floor.
    ///
    /// The floor is strict: a track may never shrink to or below the
    /// splitter bar that lives in it.
    #[must_use]
    pub fn permits(&self, proposed: f64, floor: f64) -> bool {
        if !proposed.is_finite() {
            return false;
        }
        if let Some(min) = self.min
            && proposed < min
        {
            return false;
        }
        if let Some(max) = self.max
            && proposed > max
        {
            return false;
        }
        proposed > floor
    }

    /// Clamp a value into this track's bounds.
    #[must_use]
    pub fn clamp(&self, value: f64) -> f64 {
        let value = match self.min {
            Some(min) => value.max(min),
            None => value,
        };
        match self.max {
            Some(max) => value.min(max),
            None => value,
        }
    }

    /// Commit an absolute pixel size.
    ///
    /// The value is clamped into bounds first; the content floor is
    /// re-checked after clamping and still rejects. On success the track
    /// becomes `Fixed` and its measured size mirrors the assignment, so the
    /// model stays observable without a host layout pass.
    ///
    /// Returns whether the track actually changed.
    pub fn set_absolute(&mut self, proposed: f64, floor: f64) -> bool {
        if !proposed.is_finite() {
            return false;
        }
        let clamped = self.clamp(proposed);
        if clamped <= floor {
            return false;
        }
        let next = TrackSizing::Fixed { pixels: clamped };
        let changed = self.sizing != next || self.measured != clamped;
        self.sizing = next;
        self.measured = clamped;
        changed
    }

    /// Commit a star weight, leaving the measured size for the host's next
    /// layout pass to update.
    ///
    /// Returns whether the sizing mode actually changed.
    pub fn set_weight(&mut self, weight: f64) -> bool {
        if !weight.is_finite() || weight <= 0.0 {
            return false;
        }
        let next = TrackSizing::Proportional { weight };
        let changed = self.sizing != next;
        self.sizing = next;
        changed
    }
}

/// The two adjacent tracks one resize session operates on.
///
/// Resolved exactly once per drag session and held for its duration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrackPair {
    /// Index of the track that receives the drag delta.
    pub target: usize,
    /// Index of the track that receives the exact negation.
    pub sibling: usize,
}

/// The engine-facing view of a grid container.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct GridModel {
    columns: Vec<Track>,
    rows: Vec<Track>,
}

impl GridModel {
    /// Create a model from explicit track lists.
    #[must_use]
    pub fn new(columns: Vec<Track>, rows: Vec<Track>) -> Self {
        Self { columns, rows }
    }

    /// Tracks along one axis.
    #[must_use]
    pub fn tracks(&self, axis: GridAxis) -> &[Track] {
        match axis {
            GridAxis::Columns => &self.columns,
            GridAxis::Rows => &self.rows,
        }
    }

    /// Mutable tracks along one axis.
    pub fn tracks_mut(&mut self, axis: GridAxis) -> &mut [Track] {
        match axis {
            GridAxis::Columns => &mut self.columns,
            GridAxis::Rows => &mut self.rows,
        }
    }

    /// Whether both pair indices address real tracks on the axis.
    #[must_use]
    pub fn pair_in_bounds(&self, axis: GridAxis, pair: TrackPair) -> bool {
        let len = self.tracks(axis).len();
        pair.target < len && pair.sibling < len
    }
}

/// Track/model construction errors.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GridModelError {
    NonFiniteExtent { value: f64 },
    NegativeExtent { value: f64 },
    NonPositiveWeight { weight: f64 },
    InvalidBounds { min: f64, max: f64 },
}

impl fmt::Display for GridModelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonFiniteExtent { value } => {
                write!(f, "track extent must be finite (got {value})")
            }
            Self::NegativeExtent { value } => {
                write!(f, "track extent must be >= 0 (got {value})")
            }
            Self::NonPositiveWeight { weight } => {
                write!(f, "proportional weight must be > 0 (got {weight})")
            }
            Self::InvalidBounds { min, max } => {
                write!(f, "track bounds are inverted (min {min} > max {max})")
            }
        }
    }
}

impl std::error::Error for GridModelError {}

fn validate_extent(value: f64) -> Result<(), GridModelError> {
    if !value.is_finite() {
        return Err(GridModelError::NonFiniteExtent { value });
    }
    if value < 0.0 {
        return Err(GridModelError::NegativeExtent { value });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_track_mirrors_measured_size() {
        let track = Track::fixed(120.0).expect("valid track");
        assert_eq!(track.measured(), 120.0);
        assert_eq!(track.sizing(), TrackSizing::Fixed { pixels: 120.0 });
    }

    #[test]
    fn non_positive_weight_is_rejected() {
        let err = Track::proportional(0.0, 100.0).expect_err("zero weight should fail");
        assert_eq!(err, GridModelError::NonPositiveWeight { weight: 0.0 });
    }

    #[test]
    fn inverted_bounds_are_rejected() {
        let err = Track::fixed(50.0)
            .expect("valid track")
            .with_bounds(Some(80.0), Some(40.0))
            .expect_err("inverted bounds should fail");
        assert_eq!(
            err,
            GridModelError::InvalidBounds {
                min: 80.0,
                max: 40.0
            }
        );
    }

    #[test]
    fn permits_is_strict_at_the_floor() {
        let track = Track::fixed(100.0).expect("valid track");
        assert!(track.permits(16.5, 16.0));
        assert!(!track.permits(16.0, 16.0));
        assert!(!track.permits(f64::NAN, 16.0));
    }

    #[test]
    fn permits_honors_bounds() {
        let track = Track::fixed(100.0)
            .expect("valid track")
            .with_bounds(Some(40.0), Some(200.0))
            .expect("valid bounds");
        assert!(!track.permits(39.9, 0.0));
        assert!(!track.permits(200.1, 0.0));
        assert!(track.permits(40.0, 0.0));
    }

    #[test]
    fn set_absolute_clamps_then_rechecks_floor() {
        let mut track = Track::fixed(100.0)
            .expect("valid track")
            .with_bounds(Some(10.0), None)
            .expect("valid bounds");
        // Clamped up to min 10, which is still at or below the floor of 16.
        assert!(!track.set_absolute(4.0, 16.0));
        assert_eq!(track.measured(), 100.0);

        assert!(track.set_absolute(250.0, 16.0));
        assert_eq!(track.measured(), 250.0);
    }

    #[test]
    fn set_absolute_reports_no_change_for_same_value() {
        let mut track = Track::fixed(100.0).expect("valid track");
        assert!(!track.set_absolute(100.0, 0.0));
    }

    #[test]
    fn pair_bounds_check() {
        let model = GridModel::new(
            vec![
                Track::fixed(100.0).expect("valid"),
                Track::fixed(100.0).expect("valid"),
            ],
            Vec::new(),
        );
        assert!(model.pair_in_bounds(GridAxis::Columns, TrackPair { target: 0, sibling: 1 }));
        assert!(!model.pair_in_bounds(GridAxis::Columns, TrackPair { target: 1, sibling: 2 }));
        assert!(!model.pair_in_bounds(GridAxis::Rows, TrackPair { target: 0, sibling: 0 }));
    }

    #[test]
    fn model_round_trips_through_serde() {
        let model = GridModel::new(
            vec![
                Track::fixed(100.0).expect("valid"),
                Track::proportional(1.0, 240.0)
                    .expect("valid")
                    .with_bounds(Some(50.0), None)
                    .expect("valid bounds"),
            ],
            vec![Track::fixed(32.0).expect("valid")],
        );
        let json = serde_json::to_string(&model).expect("serialize");
        let back: GridModel = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(back, model);
    }
}
