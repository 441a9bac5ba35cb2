// Released under MIT License.
// Copyright (c) 2026 mdshot_rs developers

//! Implementation of the RenderRequest structure and its validation.

use std::path::Path;

use getset::{CopyGetters, Getters};
use serde::{Deserialize, Serialize};

use crate::errors::{RenderError, ValidateRenderError};
use crate::files::ImageFormat;
use crate::input::{FrameSeries, InputPath};
use crate::render::camera::CameraPosition;
use crate::render::settings::RendererSettings;
use crate::report::ReportPrinter;
use crate::structures::{color::Color, vector3d::Vector3D};

/// Size of the rendered image in pixels. Both dimensions must be greater than 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageSize {
    pub width: u32,
    pub height: u32,
}

impl ImageSize {
    /// Create a new `ImageSize` structure.
    #[inline]
    pub fn new(width: u32, height: u32) -> Self {
        ImageSize { width, height }
    }

    /// Check that both dimensions of the image are greater than 1.
    pub fn validate(&self) -> Result<(), ValidateRenderError> {
        if self.width <= 1 || self.height <= 1 {
            return Err(ValidateRenderError::InvalidSize(self.width, self.height));
        }

        Ok(())
    }
}

impl From<(u32, u32)> for ImageSize {
    #[inline]
    fn from((width, height): (u32, u32)) -> Self {
        ImageSize { width, height }
    }
}

/// Full configuration of one render call.
///
/// Constructed with [`RenderRequest::new`] which fills in the default values,
/// adjusted using the `with_*` methods, and executed with
/// [`RenderRequest::render`](RenderRequest::render). All fields are validated
/// eagerly at the start of the render call, before the engine is touched.
/// A request can be reused for repeated renders.
///
/// ## Example
/// ```no_run
/// use mdshot_rs::prelude::*;
///
/// let mut request = RenderRequest::new("model/friction_*.xyz", "picture/result.png")
///     .with_frame(3)
///     .with_fov(80.0)
///     .with_camera_direction([2.0, 1.0, -1.0]);
/// ```
#[derive(Getters, CopyGetters)]
pub struct RenderRequest {
    /// Path to the input trajectory. May contain one `*` wildcard.
    #[getset(get = "pub")]
    pub(crate) input: InputPath,
    /// Path the rendered image is written to.
    pub(crate) output: Box<Path>,
    /// Size of the rendered image. Default: 800x600.
    #[getset(get_copy = "pub")]
    pub(crate) size: ImageSize,
    /// Background color of the rendered image. Default: white.
    #[getset(get_copy = "pub")]
    pub(crate) background: Color,
    /// Index of the frame to render. Default: 0.
    #[getset(get_copy = "pub")]
    pub(crate) frame: usize,
    /// Should the outline of the simulation cell be visible in the image?
    /// Default: false.
    #[getset(get_copy = "pub")]
    pub(crate) cell_visible: bool,
    /// Orthographic field of view of the camera. Default: 100.
    #[getset(get_copy = "pub")]
    pub(crate) fov: f32,
    /// Viewing direction of the camera. Default: (2, 1, -1).
    #[getset(get_copy = "pub")]
    pub(crate) camera_direction: Vector3D,
    /// Position of the camera. Default: `CameraPosition::Auto`, i.e. the
    /// center of the simulation cell.
    #[getset(get_copy = "pub")]
    pub(crate) camera_position: CameraPosition,
    /// Parameters of the selected rendering backend.
    /// Default: Tachyon renderer with default parameters.
    #[getset(get = "pub")]
    pub(crate) settings: RendererSettings,
    /// Printer the render report is written to. Default: none (silent).
    pub(crate) printer: Option<ReportPrinter>,
}

impl RenderRequest {
    /// Create a new `RenderRequest` structure with default parameters.
    ///
    /// The default values of the `RenderRequest` parameters.
    /// - `size`: `800x600` pixels
    /// - `background`: white
    /// - `frame`: `0`
    /// - `cell_visible`: `false` (simulation cell outline is not rendered)
    /// - `fov`: `100.0`
    /// - `camera_direction`: `(2, 1, -1)`
    /// - `camera_position`: `CameraPosition::Auto` (center of the simulation cell)
    /// - `settings`: Tachyon renderer with its default parameters
    /// - `printer`: none (no report is printed)
    ///
    /// You can set custom values for any of the parameters by using
    /// `with_%PARAMETER()` method when constructing the `RenderRequest`.
    pub fn new(input: impl AsRef<Path>, output: impl AsRef<Path>) -> Self {
        RenderRequest {
            input: InputPath::new(input),
            output: Box::from(output.as_ref()),
            size: ImageSize::new(800, 600),
            background: Color::WHITE,
            frame: 0,
            cell_visible: false,
            fov: 100.0,
            camera_direction: Vector3D::new(2.0, 1.0, -1.0),
            camera_position: CameraPosition::Auto,
            settings: RendererSettings::default(),
            printer: None,
        }
    }

    /// Get the path the rendered image is written to.
    #[inline]
    pub fn output(&self) -> &Path {
        &self.output
    }

    /// Create new `RenderRequest` with specific value for `size`.
    pub fn with_size(mut self, size: impl Into<ImageSize>) -> Self {
        self.size = size.into();
        self
    }

    /// Create new `RenderRequest` with specific value for `background`.
    pub fn with_background(mut self, background: impl Into<Color>) -> Self {
        self.background = background.into();
        self
    }

    /// Create new `RenderRequest` with specific value for `frame`.
    pub fn with_frame(mut self, frame: usize) -> Self {
        self.frame = frame;
        self
    }

    /// Create new `RenderRequest` with specific value for `cell_visible`.
    pub fn with_cell_visible(mut self, cell_visible: bool) -> Self {
        self.cell_visible = cell_visible;
        self
    }

    /// Create new `RenderRequest` with specific value for `fov`.
    pub fn with_fov(mut self, fov: f32) -> Self {
        self.fov = fov;
        self
    }

    /// Create new `RenderRequest` with specific value for `camera_direction`.
    pub fn with_camera_direction(mut self, direction: impl Into<Vector3D>) -> Self {
        self.camera_direction = direction.into();
        self
    }

    /// Create new `RenderRequest` with specific value for `camera_position`.
    pub fn with_camera_position(mut self, position: CameraPosition) -> Self {
        self.camera_position = position;
        self
    }

    /// Create new `RenderRequest` with specific renderer `settings`.
    pub fn with_settings(mut self, settings: RendererSettings) -> Self {
        self.settings = settings;
        self
    }

    /// Create new `RenderRequest` with a `ReportPrinter` that the render
    /// report will be printed to.
    pub fn with_report_printer(mut self, printer: ReportPrinter) -> Self {
        self.printer = Some(printer);
        self
    }

    /// Validate all fields of the request and resolve the input path.
    ///
    /// The checks run in a fixed order: input path, output path extension,
    /// image size, background color, renderer parameters, camera direction,
    /// camera position, field of view. The first failing check aborts the
    /// whole render call; no engine state exists at that point and nothing
    /// has been written to disk.
    pub fn validate(&self) -> Result<FrameSeries, RenderError> {
        let series = self.input.resolve()?;

        if ImageFormat::from_name(&self.output) == ImageFormat::Unknown {
            return Err(ValidateRenderError::UnsupportedImageFormat(self.output.clone()).into());
        }

        self.size.validate()?;
        self.background.validate()?;
        self.settings.validate()?;

        if !self.camera_direction.is_finite() || self.camera_direction.is_zero() {
            return Err(ValidateRenderError::InvalidCameraDirection(self.camera_direction).into());
        }

        if let CameraPosition::Explicit(position) = self.camera_position {
            if !position.is_finite() {
                return Err(ValidateRenderError::InvalidCameraPosition(position).into());
            }
        }

        if !self.fov.is_finite() || self.fov < 0.0 {
            return Err(ValidateRenderError::InvalidFov(self.fov).into());
        }

        Ok(series)
    }
}

/******************************/
/*         UNIT TESTS         */
/******************************/
