//! # Crop Renderer
//!
//! Reference [`CanvasSurface`](crop_core::CanvasSurface) implementations
//! for the crop-region engine.
//!
//! The engine never touches pixels; a surface owns the canvas dimensions
//! and draws whatever rectangle it is handed. The surface here stops short
//! of rasterizing: [`HeadlessSurface`] logs draw calls and counts frames,
//! which is enough for tests, headless hosts, and wiring checks.

#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod headless;

pub use headless::HeadlessSurface;
