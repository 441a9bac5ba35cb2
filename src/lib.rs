// Released under MIT License.
// Copyright (c) 2026 mdshot_rs developers

//! # mdshot_rs: validated still-image rendering of molecular dynamics snapshots
//!
//! `mdshot_rs` is a thin, validated call-through into an external molecular
//! dynamics visualization engine. It loads an atomistic snapshot file (or a
//! wildcard-matched series of frames), optionally applies an ordered chain of
//! analysis modifiers, positions an orthographic camera, renders one still
//! image to disk with one of two offline ray-tracing backends, and tears the
//! transient scene state down.
//!
//! The engine itself (file-format parsers, structure classification, mesh
//! extraction, ray tracers) is not part of this crate. It is reached through
//! the [`RenderEngine`](crate::engine::RenderEngine) trait; bindings to a
//! concrete engine implement the trait, and this crate contributes typed
//! parameters, eager validation, camera placement, guaranteed scene teardown,
//! and reporting.
//!
//! ## Usage
//!
//! Run
//!
//! ```bash
//! $ cargo add mdshot_rs
//! ```
//!
//! Import the crate in your Rust code:
//! ```
//! use mdshot_rs::prelude::*;
//! ```
//!
//! ## Examples
//!
//! #### Rendering a frame of a snapshot series
//!
//! Render frame 3 of the files matching `model/friction_*.xyz` (the `*`
//! stands for the numeric frame index) with the Tachyon backend.
//!
//! ```no_run
//! use mdshot_rs::prelude::*;
//! use std::error::Error;
//!
//! fn render(engine: &mut impl RenderEngine<Modifier = String>) -> Result<(), Box<dyn Error>> {
//!     let mut request = RenderRequest::new("model/friction_*.xyz", "picture/result.png")
//!         .with_frame(3)
//!         .with_fov(80.0)
//!         .with_camera_direction([2.0, 1.0, -1.0])
//!         // print a summary of the render to standard output
//!         .with_report_printer(ReportPrinter::new());
//!
//!     let report = request.render(engine, None)?;
//!     assert_eq!(report.frame(), 3);
//!
//!     Ok(())
//! }
//! ```
//!
//! #### Selecting and tuning the rendering backend
//!
//! Each backend carries a typed parameter set with the engine's documented
//! defaults. Parameters can be set in code or loaded from a yaml preset file.
//!
//! ```no_run
//! use mdshot_rs::prelude::*;
//! use std::error::Error;
//!
//! fn main() -> Result<(), Box<dyn Error>> {
//!     // raise the sample count of the OSPRay backend;
//!     // presets can also be loaded with `OsprayParams::from_file`
//!     let params = OsprayParams {
//!         samples_per_pixel: 8,
//!         ..Default::default()
//!     };
//!
//!     let request = RenderRequest::new("model/friction_0.xyz", "picture/result.png")
//!         .with_settings(RendererSettings::Ospray(params));
//!
//!     Ok(())
//! }
//! ```
//!
//! #### Placing the camera
//!
//! By default the camera is placed at the center of the simulation cell.
//! An explicit position, including the origin, is used verbatim.
//!
//! ```no_run
//! use mdshot_rs::prelude::*;
//!
//! let request = RenderRequest::new("model/friction_0.xyz", "picture/result.png")
//!     .with_camera_position(CameraPosition::Explicit(
//!         Vector3D::new(41.2418, 45.5132, 47.5879),
//!     ))
//!     .with_camera_direction([-0.940175, -0.316321, 0.126538])
//!     .with_fov(51.8483);
//! ```
//!
//! ## Limitations
//! - Only one render call may be in flight per engine at a time; the engine's
//!   scene is process-wide mutable state. The `&mut` receivers enforce this
//!   within a process.
//! - There is no retry, cancellation, or timeout mechanism; a render runs to
//!   completion or returns an error.

pub mod engine;
pub mod errors;
pub mod files;
pub mod input;
pub mod render;
pub mod report;
pub mod structures;
#[cfg(test)]
mod test_utilities;

/// Reexported basic structures of the `mdshot_rs` crate.
pub mod prelude {
    pub use crate::engine::{RenderEngine, RenderTarget, ScenePipeline};
    pub use crate::files::ImageFormat;
    pub use crate::input::{FrameSeries, InputPath};
    pub use crate::render::camera::{Camera, CameraPosition};
    pub use crate::render::ospray::OsprayParams;
    pub use crate::render::request::{ImageSize, RenderRequest};
    pub use crate::render::settings::{RendererKind, RendererSettings};
    pub use crate::render::tachyon::TachyonParams;
    pub use crate::report::{RenderReport, ReportPrinter};
    pub use crate::structures::cell::SimCell;
    pub use crate::structures::color::Color;
    pub use crate::structures::vector3d::Vector3D;
}
