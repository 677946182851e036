//! Candidate size normalization.
//!
//! User input arrives as anything from a bare number to a full rectangle.
//! [`SizeSpec`] records which fields were actually supplied, and
//! [`SizeSpec::resolve`] fills the missing ones from the region's
//! minimum-size floor. Presence is tagged, never inferred from the value:
//! an explicit `0.0` is a supplied field and survives resolution.

use serde::{Deserialize, Serialize};

use crate::Rect;

/// A candidate size with per-field presence.
///
/// Absent fields fall back to the minimum-size floor during
/// [`resolve`](Self::resolve); supplied values pass through untouched. No
/// clamping happens here - that is the boundary resolver's job.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct SizeSpec {
    /// X of the top-left corner, if supplied.
    pub x: Option<f32>,
    /// Y of the top-left corner, if supplied.
    pub y: Option<f32>,
    /// Width, if supplied.
    pub w: Option<f32>,
    /// Height, if supplied.
    pub h: Option<f32>,
}

impl SizeSpec {
    /// Create an empty spec with every field absent.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the x coordinate.
    #[must_use]
    pub const fn with_x(mut self, x: f32) -> Self {
        self.x = Some(x);
        self
    }

    /// Set the y coordinate.
    #[must_use]
    pub const fn with_y(mut self, y: f32) -> Self {
        self.y = Some(y);
        self
    }

    /// Set the width.
    #[must_use]
    pub const fn with_w(mut self, w: f32) -> Self {
        self.w = Some(w);
        self
    }

    /// Set the height.
    #[must_use]
    pub const fn with_h(mut self, h: f32) -> Self {
        self.h = Some(h);
        self
    }

    /// Fill absent fields from `floor`, producing a concrete rectangle.
    #[must_use]
    pub fn resolve(&self, floor: &Rect) -> Rect {
        Rect {
            x: self.x.unwrap_or(floor.x),
            y: self.y.unwrap_or(floor.y),
            w: self.w.unwrap_or(floor.w),
            h: self.h.unwrap_or(floor.h),
        }
    }
}

impl From<f32> for SizeSpec {
    /// A bare number means a uniform `w = h = n` size, position unspecified.
    fn from(n: f32) -> Self {
        Self::new().with_w(n).with_h(n)
    }
}

impl From<Rect> for SizeSpec {
    fn from(rect: Rect) -> Self {
        Self {
            x: Some(rect.x),
            y: Some(rect.y),
            w: Some(rect.w),
            h: Some(rect.h),
        }
    }
}
