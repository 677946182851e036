//! # Crop Core
//!
//! Constraint engine for an interactive crop region over an image canvas.
//! Computes a valid region from arbitrary user input - out of bounds,
//! non-square, sub-minimum - without ever touching pixels.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │                 crop-core                   │
//! ├──────────────────┬──────────────────────────┤
//! │  CropRegion      │  Boundary Resolver       │
//! │  - Rect state    │  - translation clamp     │
//! │  - min-size floor│  - two-corner clamp      │
//! │  - drag / resize │  - shape/ratio snapping  │
//! ├──────────────────┼──────────────────────────┤
//! │  CanvasSurface   │  EventBus                │
//! │  - dimensions    │  - area-resize           │
//! │  - render seam   │  - area-move             │
//! └──────────────────┴──────────────────────────┘
//! ```

#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod bounds;
pub mod error;
pub mod event;
pub mod geometry;
pub mod region;
pub mod shape;
pub mod size;
pub mod surface;

pub use bounds::ResolveMode;
pub use error::{CropError, CropResult};
pub use event::{CropEvent, EventBus, NullBus, RecordingBus};
pub use geometry::{Point, Rect};
pub use region::{CropRegion, RegionConfig, RegionId};
pub use shape::ShapeVariant;
pub use size::SizeSpec;
pub use surface::{CanvasSurface, ImageFormat, ImageHandle};

/// Crop core version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
