//! Integration tests driving the crop engine through the surface seam.
//!
//! Exercises resize and drag flows, constraint snapping, event ordering,
//! and the draw pass-through against a [`HeadlessSurface`].

#![allow(clippy::float_cmp)]

use crop_core::{
    CropEvent, CropRegion, ImageFormat, ImageHandle, Point, Rect, RecordingBus, RegionConfig,
    ShapeVariant, SizeSpec,
};
use crop_renderer::HeadlessSurface;

/// Region over a shared surface handle, discarding events.
fn region_on(surface: &HeadlessSurface) -> CropRegion {
    CropRegion::new(Box::new(surface.clone()), Box::new(crop_core::NullBus))
}

/// Region over a shared surface handle, recording events.
fn region_with_bus(surface: &HeadlessSurface, bus: &RecordingBus) -> CropRegion {
    CropRegion::new(Box::new(surface.clone()), Box::new(bus.clone()))
}

// ==========================================================================
// Resize flows
// ==========================================================================

#[test]
fn test_out_of_bounds_candidate_shrinks_to_canvas() {
    let surface = HeadlessSurface::new(300.0, 300.0);
    let mut region = region_on(&surface);

    region.set_size(Rect::new(-50.0, -50.0, 100.0, 100.0));
    assert_eq!(region.size(), Rect::new(0.0, 0.0, 50.0, 50.0));

    region.set_size(Rect::new(250.0, 250.0, 100.0, 100.0));
    assert_eq!(region.size(), Rect::new(250.0, 250.0, 50.0, 50.0));
}

#[test]
fn test_square_region_stays_uniform_across_resizes() {
    let surface = HeadlessSurface::new(400.0, 300.0);
    let mut region = region_on(&surface);
    region.set_shape(ShapeVariant::Square);

    for candidate in [
        Rect::new(0.0, 0.0, 200.0, 100.0),
        Rect::new(150.0, 150.0, 300.0, 300.0),
        Rect::new(-20.0, 10.0, 90.0, 250.0),
    ] {
        region.set_size(candidate);
        let size = region.size();
        assert_eq!(size.w, size.h, "square after {candidate:?}");
    }
}

#[test]
fn test_corner_drive_with_fixed_ratio() {
    let surface = HeadlessSurface::new(300.0, 300.0);
    let mut region = region_on(&surface);
    region.set_aspect_ratio(Some(2.0)).expect("valid ratio");

    // A degenerate zero-height corner pair: the ratio derives the height.
    region.set_size_by_corners(Point::new(10.0, 10.0), Point::new(210.0, 10.0));
    assert_eq!(region.size(), Rect::new(10.0, 10.0, 200.0, 100.0));
}

#[test]
fn test_min_size_floor_fills_absent_fields() {
    let surface = HeadlessSurface::new(300.0, 300.0);
    let mut region = region_on(&surface);

    region.set_min_size(SizeSpec::new().with_w(150.0).with_h(150.0));
    assert_eq!(region.size(), Rect::new(0.0, 0.0, 150.0, 150.0));

    // An empty spec resolves entirely to the new floor.
    region.set_size(SizeSpec::new());
    assert_eq!(region.size(), Rect::new(0.0, 0.0, 150.0, 150.0));
}

// ==========================================================================
// Drag flows
// ==========================================================================

#[test]
fn test_drag_session_translates_without_resizing() {
    let surface = HeadlessSurface::new(300.0, 300.0);
    let bus = RecordingBus::new();
    let mut region = region_with_bus(&surface, &bus);
    region.set_size(SizeSpec::new().with_w(100.0).with_h(100.0));

    // Pointer down: translate-only mode.
    region.set_dragging(true);
    region.set_center_point(Point::new(20.0, 20.0));
    region.set_center_point(Point::new(290.0, 290.0));
    region.set_dragging(false);

    // Both moves clamped, size never altered.
    assert_eq!(region.size(), Rect::new(200.0, 200.0, 100.0, 100.0));
    assert_eq!(
        bus.events(),
        vec![
            CropEvent::AreaResize,
            CropEvent::AreaMove,
            CropEvent::AreaResize,
            CropEvent::AreaMove,
        ]
    );
}

#[test]
fn test_release_restores_full_resolution() {
    let surface = HeadlessSurface::new(300.0, 300.0);
    let mut region = region_on(&surface);
    region.set_shape(ShapeVariant::Square);
    region.set_dragging(true);

    // Dragging skips shape snapping entirely.
    region.set_size(Rect::new(10.0, 10.0, 200.0, 100.0));
    assert_eq!(region.size(), Rect::new(10.0, 10.0, 200.0, 100.0));

    region.set_dragging(false);
    region.set_size(region.size());
    let size = region.size();
    assert_eq!(size.w, size.h);
}

// ==========================================================================
// Live canvas resizes
// ==========================================================================

#[test]
fn test_surface_resize_applies_on_next_change() {
    let surface = HeadlessSurface::new(300.0, 300.0);
    let mut region = region_on(&surface);
    region.set_size(Rect::new(0.0, 0.0, 250.0, 250.0));
    assert_eq!(region.size(), Rect::new(0.0, 0.0, 250.0, 250.0));

    // Dimensions are read live on every constraint pass.
    surface.resize(200.0, 200.0);
    region.set_size(region.size());
    assert_eq!(region.size(), Rect::new(0.0, 0.0, 200.0, 200.0));
}

// ==========================================================================
// Draw pass-through
// ==========================================================================

#[test]
fn test_draw_renders_once_per_call() {
    let surface = HeadlessSurface::new(300.0, 300.0);
    let mut region = region_on(&surface);
    region.set_image(Some(ImageHandle::new("photo.jpg", ImageFormat::Jpeg)));

    assert_eq!(surface.frame_count(), 0);
    region.set_size(SizeSpec::new().with_w(100.0).with_h(100.0));
    // Geometry changes never draw by themselves.
    assert_eq!(surface.frame_count(), 0);

    region.draw().expect("draw");
    region.draw().expect("draw");
    assert_eq!(surface.frame_count(), 2);
}

// ==========================================================================
// Configuration
// ==========================================================================

#[test]
fn test_custom_config_round_trip() {
    let surface = HeadlessSurface::new(640.0, 480.0);
    let config = RegionConfig {
        initial_size: Rect::new(20.0, 20.0, 320.0, 160.0),
        min_size: Rect::new(0.0, 0.0, 40.0, 40.0),
        aspect_ratio: Some(2.0),
        shape: ShapeVariant::Rectangle,
    };
    let region = CropRegion::with_config(
        Box::new(surface.clone()),
        Box::new(crop_core::NullBus),
        config,
    )
    .expect("valid config");

    assert_eq!(region.size(), Rect::new(20.0, 20.0, 320.0, 160.0));
    assert_eq!(region.min_size(), Rect::new(0.0, 0.0, 40.0, 40.0));
    assert_eq!(region.aspect_ratio(), Some(2.0));
}
