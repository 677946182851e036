//! The rendering seam.
//!
//! The engine computes geometry; a [`CanvasSurface`] owns the pixel
//! dimensions and draws whatever rectangle it is handed. Keeping the seam
//! here means surfaces can be swapped or mocked without touching constraint
//! logic.

use serde::{Deserialize, Serialize};

use crate::{CropResult, Point, Rect};

/// Supported image formats for the crop source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ImageFormat {
    /// PNG image.
    Png,
    /// JPEG image.
    Jpeg,
    /// SVG vector image.
    Svg,
    /// WebP image.
    WebP,
}

/// Opaque handle to the bitmap being cropped.
///
/// The engine never inspects pixels; the handle is passed through to the
/// surface on [`draw`](crate::CropRegion::draw).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageHandle {
    /// Image source URI or base64 data.
    pub src: String,
    /// Image format.
    pub format: ImageFormat,
}

impl ImageHandle {
    /// Create a new handle.
    #[must_use]
    pub fn new(src: impl Into<String>, format: ImageFormat) -> Self {
        Self {
            src: src.into(),
            format,
        }
    }
}

/// The canvas the crop region lives on.
///
/// The region reads dimensions on every constraint pass and forwards
/// explicit render calls; it never mutates the canvas.
pub trait CanvasSurface {
    /// Current canvas dimensions as `(width, height)` in pixels.
    fn dimensions(&self) -> (f32, f32);

    /// Render the crop overlay.
    ///
    /// # Errors
    ///
    /// Returns an error if the surface fails to draw.
    fn render(
        &mut self,
        image: Option<&ImageHandle>,
        center: Point,
        area: Rect,
    ) -> CropResult<()>;
}
