//! Headless canvas surface for tests and non-graphical hosts.

use std::cell::Cell;
use std::rc::Rc;

use crop_core::{CanvasSurface, CropResult, ImageHandle, Point, Rect};

/// Default canvas width in pixels.
const DEFAULT_WIDTH: f32 = 800.0;

/// Default canvas height in pixels.
const DEFAULT_HEIGHT: f32 = 600.0;

/// A surface that tracks dimensions and frame counts without drawing.
///
/// Cloning shares the underlying state, so a handle kept by the caller
/// observes resizes and draw calls made through the clone handed to the
/// region.
#[derive(Debug, Clone)]
pub struct HeadlessSurface {
    dimensions: Rc<Cell<(f32, f32)>>,
    frames: Rc<Cell<u64>>,
}

impl HeadlessSurface {
    /// Create a surface with the given dimensions.
    #[must_use]
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            dimensions: Rc::new(Cell::new((width, height))),
            frames: Rc::new(Cell::new(0)),
        }
    }

    /// Number of render calls so far.
    #[must_use]
    pub fn frame_count(&self) -> u64 {
        self.frames.get()
    }

    /// Change the canvas dimensions.
    ///
    /// The region reads dimensions on every constraint pass, so a resize
    /// takes effect on its next state change.
    pub fn resize(&self, width: f32, height: f32) {
        self.dimensions.set((width, height));
        tracing::debug!("Headless surface resized to {width}x{height}");
    }
}

impl Default for HeadlessSurface {
    fn default() -> Self {
        Self::new(DEFAULT_WIDTH, DEFAULT_HEIGHT)
    }
}

impl CanvasSurface for HeadlessSurface {
    fn dimensions(&self) -> (f32, f32) {
        self.dimensions.get()
    }

    fn render(&mut self, image: Option<&ImageHandle>, center: Point, area: Rect) -> CropResult<()> {
        let (width, height) = self.dimensions.get();
        tracing::trace!(
            "Headless render: area ({}, {}) {}x{} center ({}, {}) image={} viewport {}x{}",
            area.x,
            area.y,
            area.w,
            area.h,
            center.x,
            center.y,
            image.is_some(),
            width,
            height
        );
        self.frames.set(self.frames.get() + 1);
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::float_cmp)]
mod tests {
    use super::*;

    #[test]
    fn test_default_dimensions() {
        let surface = HeadlessSurface::default();
        assert_eq!(surface.dimensions(), (800.0, 600.0));
        assert_eq!(surface.frame_count(), 0);
    }

    #[test]
    fn test_clones_share_state() {
        let surface = HeadlessSurface::new(300.0, 300.0);
        let mut clone = surface.clone();

        clone
            .render(None, Point::new(50.0, 50.0), Rect::new(0.0, 0.0, 100.0, 100.0))
            .expect("render");
        assert_eq!(surface.frame_count(), 1);

        surface.resize(640.0, 480.0);
        assert_eq!(clone.dimensions(), (640.0, 480.0));
    }
}
