//! Boundary resolution for candidate crop rectangles.
//!
//! Turns an arbitrary candidate into a rectangle that respects the canvas
//! bounds and the active shape/ratio constraints. Each policy lives in its
//! own named function so it can be replaced without touching callers.

use serde::{Deserialize, Serialize};

use crate::{Rect, ShapeVariant};

/// How the candidate is being manipulated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResolveMode {
    /// Corner-driven resize: full clamp plus shape/ratio snapping.
    Resize,
    /// Translate-only drag: position is clamped, size is never altered.
    Drag,
}

/// Resolve a candidate rectangle against the canvas bounds.
///
/// In [`ResolveMode::Drag`] only the translation is clamped - a drag must
/// never resize, so ratio and shape snapping are skipped entirely. In
/// [`ResolveMode::Resize`] both corners are clamped independently, then the
/// shape variant and aspect ratio are re-applied within the clamped box.
#[must_use]
pub fn resolve(
    candidate: Rect,
    width: f32,
    height: f32,
    mode: ResolveMode,
    shape: ShapeVariant,
    aspect_ratio: Option<f32>,
) -> Rect {
    if mode == ResolveMode::Drag {
        return clamp_translation(candidate, width, height);
    }

    // The ratio fit looks at the south-east y exactly as the corner clamp
    // saw it, independent of the north-west corner.
    let clamped_se_y = candidate.south_east().y.min(height);
    let clamped = clamp_corners(candidate, width, height);

    if shape.forces_uniform() {
        return snap_uniform(clamped);
    }
    match aspect_ratio {
        Some(ratio) => fit_aspect(clamped, ratio, width, height, clamped_se_y),
        None => clamped,
    }
}

/// Clamp only the position; the size is left untouched.
///
/// Checks run in a fixed order: left edge, top edge, right overflow, bottom
/// overflow. A region larger than the canvas ends up anchored at the far
/// edge with a negative origin - the one sanctioned exception to the
/// in-bounds invariant.
#[must_use]
pub fn clamp_translation(candidate: Rect, width: f32, height: f32) -> Rect {
    let mut rect = candidate;
    if rect.x < 0.0 {
        rect.x = 0.0;
    }
    if rect.y < 0.0 {
        rect.y = 0.0;
    }
    if rect.x + rect.w > width {
        rect.x = width - rect.w;
    }
    if rect.y + rect.h > height {
        rect.y = height - rect.h;
    }
    rect
}

/// Clamp the two corners independently and rebuild the extent.
///
/// The north-west corner is clamped into the canvas, the south-east corner
/// is capped at the canvas bounds, and width/height are rebuilt from the
/// difference, floored at zero. The rectangle can shrink from either side
/// but is never repositioned to fit.
#[must_use]
pub fn clamp_corners(candidate: Rect, width: f32, height: f32) -> Rect {
    let nw_x = candidate.x.clamp(0.0, width);
    let nw_y = candidate.y.clamp(0.0, height);
    let se = candidate.south_east();
    let se_x = se.x.min(width);
    let se_y = se.y.min(height);
    Rect::new(nw_x, nw_y, (se_x - nw_x).max(0.0), (se_y - nw_y).max(0.0))
}

/// Snap to equal width and height, keeping the smaller extent.
///
/// Anchored at the already-clamped top-left corner, so the result stays in
/// bounds.
#[must_use]
pub fn snap_uniform(rect: Rect) -> Rect {
    let side = rect.w.min(rect.h);
    Rect { w: side, h: side, ..rect }
}

/// Re-fit a clamped rectangle to a fixed aspect ratio.
///
/// When the ratio-derived height fits under the canvas and the candidate's
/// south-east y was strictly inside the canvas, the clamped extent already
/// honors the ratio and is returned as-is. Otherwise height-fit
/// (`w = h * ratio`) is tried first, falling back to width-fit
/// (`h = w / ratio`) when the refitted width would overflow the canvas.
/// The width-fit fallback can push the south-east corner back past the
/// canvas height; callers treat the result as authoritative.
#[must_use]
pub fn fit_aspect(rect: Rect, ratio: f32, width: f32, height: f32, clamped_se_y: f32) -> Rect {
    let height_with_ratio = rect.w / ratio;
    if height_with_ratio < height && clamped_se_y < height {
        rect
    } else if rect.h * ratio <= width {
        Rect {
            w: rect.h * ratio,
            ..rect
        }
    } else {
        Rect {
            h: rect.w / ratio,
            ..rect
        }
    }
}
