//! Pixel-space geometric primitives.
//!
//! Uses `f64` device-independent pixels throughout, matching what desktop
//! layout hosts report for measured sizes and pointer translations.

use serde::{Deserialize, Serialize};

/// A measured extent in device-independent pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Size {
    /// Horizontal extent.
    pub width: f64,
    /// Vertical extent.
    pub height: f64,
}

impl Size {
    /// Create a new size.
    #[inline]
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Check if either extent is zero or negative.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }

    /// Check that both extents are finite (not NaN or infinite).
    #[inline]
    pub fn is_finite(&self) -> bool {
        self.width.is_finite() && self.height.is_finite()
    }
}

/// A cumulative pointer translation since manipulation start.
///
/// Always measured from the manipulation origin, never per-event. Hosts
/// that only deliver incremental deltas must accumulate before forwarding.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Vector {
    /// Signed horizontal offset (positive = toward the end edge in LTR).
    pub x: f64,
    /// Signed vertical offset (positive = downward).
    pub y: f64,
}

impl Vector {
    /// Create a new translation vector.
    #[inline]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Check that both components are finite.
    #[inline]
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}
