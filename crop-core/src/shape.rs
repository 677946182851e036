//! Crop shape variants.

use serde::{Deserialize, Serialize};

/// The shape of the crop selection.
///
/// `Circle` is represented and constrained identically to `Square` - the
/// engine tracks the bounding box; circular rendering is the surface's
/// concern.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShapeVariant {
    /// Free rectangle, optionally with a fixed aspect ratio.
    #[default]
    Rectangle,
    /// Square selection (`w == h`).
    Square,
    /// Circular selection, constrained via its bounding square.
    Circle,
}

impl ShapeVariant {
    /// Whether this variant forces equal width and height.
    #[must_use]
    pub const fn forces_uniform(self) -> bool {
        matches!(self, Self::Square | Self::Circle)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_uniform_variants() {
        assert!(ShapeVariant::Square.forces_uniform());
        assert!(ShapeVariant::Circle.forces_uniform());
        assert!(!ShapeVariant::Rectangle.forces_uniform());
    }

    #[test]
    fn test_wire_names() {
        let json = serde_json::to_string(&ShapeVariant::Circle).expect("serialize");
        assert_eq!(json, "\"circle\"");
    }
}
