//! Single-dimension resize target.
//!
//! [`ContentResizer`] adjusts one owned width/height pair instead of grid
//! tracks: the variant used when a sizer controls an arbitrary element's
//! size directly (a collapsible side panel, an inline preview). Unlike the
//! grid variant it clamps into bounds rather than rejecting, since there is
//! no sibling whose space must be conserved.

use sash_core::Size;
use serde::{Deserialize, Serialize};

use crate::sizer::SizerTarget;

/// Per-dimension bounds. `max` of `None` means unbounded.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DimensionBounds {
    pub min: f64,
    pub max: Option<f64>,
}

impl Default for DimensionBounds {
    fn default() -> Self {
        Self { min: 0.0, max: None }
    }
}

impl DimensionBounds {
    fn clamp(&self, value: f64) -> f64 {
        let value = value.max(self.min);
        match self.max {
            Some(max) => value.min(max),
            None => value,
        }
    }
}

/// Resize target that owns the dimensions it resizes.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ContentResizer {
    size: Size,
    width_bounds: DimensionBounds,
    height_bounds: DimensionBounds,
    /// Invert drag direction for end-docked content, where growing means
    /// dragging toward the start edge.
    pub is_drag_inverted: bool,
    baseline: Option<Size>,
}

impl ContentResizer {
    /// Create a resizer with the given starting size.
    #[must_use]
    pub fn new(size: Size) -> Self {
        Self {
            size,
            ..Self::default()
        }
    }

    /// Attach width bounds.
    #[must_use]
    pub fn width_bounds(mut self, bounds: DimensionBounds) -> Self {
        self.width_bounds = bounds;
        self
    }

    /// Attach height bounds.
    #[must_use]
    pub fn height_bounds(mut self, bounds: DimensionBounds) -> Self {
        self.height_bounds = bounds;
        self
    }

    /// Current size.
    #[must_use]
    pub const fn size(&self) -> Size {
        self.size
    }

    fn effective(&self, delta: f64) -> f64 {
        if self.is_drag_inverted { -delta } else { delta }
    }
}

impl SizerTarget for ContentResizer {
    fn on_drag_starting(&mut self) {
        self.baseline = Some(self.size);
    }

    fn on_drag_horizontal(&mut self, delta: f64) -> bool {
        let Some(baseline) = self.baseline else {
            return false;
        };
        let proposed = baseline.width + self.effective(delta);
        if !proposed.is_finite() {
            return false;
        }
        let clamped = self.width_bounds.clamp(proposed);
        let changed = clamped != self.size.width;
        self.size.width = clamped;
        changed
    }

    fn on_drag_vertical(&mut self, delta: f64) -> bool {
        let Some(baseline) = self.baseline else {
            return false;
        };
        let proposed = baseline.height + self.effective(delta);
        if !proposed.is_finite() {
            return false;
        }
        let clamped = self.height_bounds.clamp(proposed);
        let changed = clamped != self.size.height;
        self.size.height = clamped;
        changed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deltas_are_cumulative_from_the_baseline() {
        let mut resizer = ContentResizer::new(Size::new(200.0, 100.0));
        resizer.on_drag_starting();

        assert!(resizer.on_drag_horizontal(30.0));
        assert!(resizer.on_drag_horizontal(10.0));
        assert_eq!(resizer.size().width, 210.0);
    }

    #[test]
    fn clamps_instead_of_rejecting() {
        let mut resizer = ContentResizer::new(Size::new(200.0, 100.0)).width_bounds(
            DimensionBounds {
                min: 150.0,
                max: Some(260.0),
            },
        );
        resizer.on_drag_starting();

        assert!(resizer.on_drag_horizontal(-500.0));
        assert_eq!(resizer.size().width, 150.0);
        assert!(resizer.on_drag_horizontal(500.0));
        assert_eq!(resizer.size().width, 260.0);
        // Clamped to the same value again: nothing changed.
        assert!(!resizer.on_drag_horizontal(600.0));
    }

    #[test]
    fn inverted_drag_flips_growth_direction() {
        let mut resizer = ContentResizer::new(Size::new(200.0, 100.0));
        resizer.is_drag_inverted = true;
        resizer.on_drag_starting();

        assert!(resizer.on_drag_horizontal(-40.0));
        assert_eq!(resizer.size().width, 240.0);
    }

    #[test]
    fn no_baseline_means_no_op() {
        let mut resizer = ContentResizer::new(Size::new(200.0, 100.0));
        assert!(!resizer.on_drag_horizontal(10.0));
        assert_eq!(resizer.size().width, 200.0);
    }

    #[test]
    fn vertical_axis_uses_height_bounds() {
        let mut resizer = ContentResizer::new(Size::new(200.0, 100.0)).height_bounds(
            DimensionBounds {
                min: 80.0,
                max: None,
            },
        );
        resizer.on_drag_starting();

        assert!(resizer.on_drag_vertical(-50.0));
        assert_eq!(resizer.size().height, 80.0);
    }
}
