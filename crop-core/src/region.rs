//! The crop region and its constraint pipeline.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::bounds::{self, ResolveMode};
use crate::{
    CanvasSurface, CropError, CropEvent, CropResult, EventBus, ImageHandle, Point, Rect,
    ShapeVariant, SizeSpec,
};

/// Unique identifier for a crop region, used for log correlation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RegionId(Uuid);

impl RegionId {
    /// Create a new unique region ID.
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Create from an existing UUID.
    #[must_use]
    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }
}

impl Default for RegionId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for RegionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Constructor-time defaults for a crop region.
///
/// The only configuration the engine has; there is no config file and no
/// runtime reconfiguration beyond the region's own setters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegionConfig {
    /// Initial region rectangle.
    pub initial_size: Rect,
    /// Minimum-size substitution floor.
    pub min_size: Rect,
    /// Fixed aspect ratio for rectangle regions.
    pub aspect_ratio: Option<f32>,
    /// Shape of the selection.
    pub shape: ShapeVariant,
}

impl Default for RegionConfig {
    fn default() -> Self {
        Self {
            initial_size: Rect::new(0.0, 0.0, 200.0, 200.0),
            min_size: Rect::new(0.0, 0.0, 80.0, 80.0),
            aspect_ratio: None,
            shape: ShapeVariant::Rectangle,
        }
    }
}

impl RegionConfig {
    /// Validate the configuration.
    ///
    /// # Errors
    ///
    /// Returns [`CropError::InvalidAspectRatio`] if the ratio is not a
    /// positive finite number.
    pub fn validate(&self) -> CropResult<()> {
        if let Some(ratio) = self.aspect_ratio {
            validate_ratio(ratio)?;
        }
        Ok(())
    }
}

fn validate_ratio(ratio: f32) -> CropResult<()> {
    if ratio.is_finite() && ratio > 0.0 {
        Ok(())
    } else {
        Err(CropError::InvalidAspectRatio(ratio))
    }
}

/// A user-manipulable crop selection over an image canvas.
///
/// Owns the region rectangle and re-establishes the boundary, shape, and
/// ratio constraints on every state change. The canvas surface and the
/// event bus are injected at construction; the region reads canvas
/// dimensions, never mutates them, and only publishes to the bus.
///
/// Position and size are one value: the region's [`Rect`].
pub struct CropRegion {
    id: RegionId,
    size: Rect,
    min_size: Rect,
    aspect_ratio: Option<f32>,
    shape: ShapeVariant,
    image: Option<ImageHandle>,
    dragging: bool,
    surface: Box<dyn CanvasSurface>,
    bus: Box<dyn EventBus>,
}

impl CropRegion {
    /// Create a region with default configuration: a 200x200 rectangle at
    /// the origin with an 80x80 minimum floor.
    #[must_use]
    pub fn new(surface: Box<dyn CanvasSurface>, bus: Box<dyn EventBus>) -> Self {
        Self::build(surface, bus, RegionConfig::default())
    }

    /// Create a region with custom configuration.
    ///
    /// The initial rectangle runs through the full constraint pipeline, so
    /// the region is in bounds and shape/ratio conformant from birth.
    ///
    /// # Errors
    ///
    /// Returns [`CropError::InvalidAspectRatio`] if the configured ratio is
    /// not a positive finite number.
    pub fn with_config(
        surface: Box<dyn CanvasSurface>,
        bus: Box<dyn EventBus>,
        config: RegionConfig,
    ) -> CropResult<Self> {
        config.validate()?;
        Ok(Self::build(surface, bus, config))
    }

    fn build(
        surface: Box<dyn CanvasSurface>,
        bus: Box<dyn EventBus>,
        config: RegionConfig,
    ) -> Self {
        let mut region = Self {
            id: RegionId::new(),
            size: config.initial_size,
            min_size: config.min_size,
            aspect_ratio: config.aspect_ratio,
            shape: config.shape,
            image: None,
            dragging: false,
            surface,
            bus,
        };
        region.reapply_constraints();
        region
    }

    /// The region's identifier.
    #[must_use]
    pub fn id(&self) -> RegionId {
        self.id
    }

    /// The image being cropped, if one has been attached.
    #[must_use]
    pub fn image(&self) -> Option<&ImageHandle> {
        self.image.as_ref()
    }

    /// Attach or detach the image being cropped.
    pub fn set_image(&mut self, image: Option<ImageHandle>) {
        self.image = image;
    }

    /// The current region rectangle.
    #[must_use]
    pub fn size(&self) -> Rect {
        self.size
    }

    /// Alias of [`size`](Self::size): position and size are the same value.
    #[must_use]
    pub fn position(&self) -> Rect {
        self.size
    }

    /// The minimum-size substitution floor.
    #[must_use]
    pub fn min_size(&self) -> Rect {
        self.min_size
    }

    /// The fixed aspect ratio, if one is set.
    #[must_use]
    pub fn aspect_ratio(&self) -> Option<f32> {
        self.aspect_ratio
    }

    /// The shape of the selection.
    #[must_use]
    pub fn shape(&self) -> ShapeVariant {
        self.shape
    }

    /// Whether the region is in translate-only drag mode.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    /// Toggle translate-only drag mode.
    ///
    /// Mode transitions are driven externally by pointer handlers; the
    /// region itself only changes how the next candidate is resolved.
    pub fn set_dragging(&mut self, dragging: bool) {
        self.dragging = dragging;
    }

    /// The south-east (bottom-right) corner of the region.
    #[must_use]
    pub fn south_east_bound(&self) -> Point {
        self.size.south_east()
    }

    /// The center point of the region.
    #[must_use]
    pub fn center_point(&self) -> Point {
        self.size.center()
    }

    /// Set the region rectangle from a candidate size.
    ///
    /// The candidate is normalized against the minimum-size floor, the
    /// aspect-ratio rule is applied when one is set (`h = w / ratio`,
    /// overriding any supplied height), and the result is resolved against
    /// the canvas bounds. Emits no events; callers that need notification
    /// publish explicitly.
    pub fn set_size(&mut self, spec: impl Into<SizeSpec>) {
        let mut candidate = spec.into().resolve(&self.min_size);
        if let Some(ratio) = self.aspect_ratio {
            candidate.h = candidate.w / ratio;
        }
        let (width, height) = self.surface.dimensions();
        let mode = if self.dragging {
            ResolveMode::Drag
        } else {
            ResolveMode::Resize
        };
        self.size = bounds::resolve(candidate, width, height, mode, self.shape, self.aspect_ratio);
        tracing::debug!(
            "Region {} set to ({}, {}) {}x{}",
            self.id,
            self.size.x,
            self.size.y,
            self.size.w,
            self.size.h
        );
    }

    /// Set the region from its north-west and south-east corners.
    ///
    /// An inverted pair (se above or left of nw) yields a negative extent
    /// that degrades gracefully through the resolver; it is never rejected.
    pub fn set_size_by_corners(&mut self, north_west: Point, south_east: Point) {
        self.set_size(Rect::new(
            north_west.x,
            north_west.y,
            south_east.x - north_west.x,
            south_east.y - north_west.y,
        ));
    }

    /// Move the region so its center lands on `point`, keeping the extent.
    ///
    /// Publishes [`CropEvent::AreaResize`] then [`CropEvent::AreaMove`], in
    /// that order; consumers may rely on resize being observed first.
    pub fn set_center_point(&mut self, point: Point) {
        let current = self.size;
        self.set_size(Rect::new(
            point.x - current.w / 2.0,
            point.y - current.h / 2.0,
            current.w,
            current.h,
        ));
        self.bus.publish(CropEvent::AreaResize);
        self.bus.publish(CropEvent::AreaMove);
    }

    /// Replace the minimum-size floor and re-anchor the region to it.
    ///
    /// Absent fields of the spec fall back to the current floor. The region
    /// is immediately re-set to the new floor through the full pipeline.
    pub fn set_min_size(&mut self, spec: impl Into<SizeSpec>) {
        self.min_size = spec.into().resolve(&self.min_size);
        tracing::debug!(
            "Region {} minimum floor set to {}x{}",
            self.id,
            self.min_size.w,
            self.min_size.h
        );
        self.set_size(self.min_size);
    }

    /// Set or clear the fixed aspect ratio.
    ///
    /// A `Some` ratio re-resolves the current rectangle so the `h = w / ratio`
    /// rule holds immediately, not merely on the next size change.
    ///
    /// # Errors
    ///
    /// Returns [`CropError::InvalidAspectRatio`] if the ratio is not a
    /// positive finite number; the region is left unchanged.
    pub fn set_aspect_ratio(&mut self, ratio: Option<f32>) -> CropResult<()> {
        if let Some(r) = ratio {
            validate_ratio(r)?;
        }
        self.aspect_ratio = ratio;
        if ratio.is_some() {
            self.reapply_constraints();
        }
        Ok(())
    }

    /// Change the shape of the selection.
    ///
    /// Square and circle snap the current rectangle to `w == h` immediately.
    pub fn set_shape(&mut self, shape: ShapeVariant) {
        self.shape = shape;
        self.reapply_constraints();
    }

    /// Set the x position directly, bypassing boundary resolution.
    ///
    /// The position can leave the canvas through this path; callers own the
    /// consequences. Use [`set_size`](Self::set_size) for checked moves.
    pub fn set_x_unclamped(&mut self, x: f32) {
        self.size.x = x;
    }

    /// Set the y position directly, bypassing boundary resolution.
    ///
    /// The position can leave the canvas through this path; callers own the
    /// consequences. Use [`set_size`](Self::set_size) for checked moves.
    pub fn set_y_unclamped(&mut self, y: f32) {
        self.size.y = y;
    }

    /// Draw the crop overlay.
    ///
    /// A pass-through to [`CanvasSurface::render`] with the current image,
    /// center point, and rectangle. Called once per explicit invocation,
    /// never automatically.
    ///
    /// # Errors
    ///
    /// Propagates [`CropError::Render`] from the surface.
    pub fn draw(&mut self) -> CropResult<()> {
        tracing::trace!("Region {} draw", self.id);
        self.surface
            .render(self.image.as_ref(), self.size.center(), self.size)
    }

    /// Run the current rectangle through the resize-path pipeline.
    ///
    /// Used when a constraint (shape, ratio) changes without a new
    /// candidate; always resolves in resize mode so snapping applies even
    /// mid-drag.
    fn reapply_constraints(&mut self) {
        let mut candidate = self.size;
        if let Some(ratio) = self.aspect_ratio {
            candidate.h = candidate.w / ratio;
        }
        let (width, height) = self.surface.dimensions();
        self.size = bounds::resolve(
            candidate,
            width,
            height,
            ResolveMode::Resize,
            self.shape,
            self.aspect_ratio,
        );
    }
}
