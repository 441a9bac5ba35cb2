// Released under MIT License.
// Copyright (c) 2026 mdshot_rs developers

//! Implementation of RenderReport and ReportPrinter structures.

use std::fmt;
use std::io::Write;
use std::path::Path;

use colored::Colorize;
use getset::CopyGetters;

use crate::render::settings::RendererKind;
use crate::structures::vector3d::Vector3D;

/// Summary of one completed render call.
#[derive(Debug, Clone, PartialEq, CopyGetters)]
pub struct RenderReport {
    /// Total number of frames found in the input.
    #[getset(get_copy = "pub")]
    total_frames: usize,
    /// Index of the frame that was rendered.
    #[getset(get_copy = "pub")]
    frame: usize,
    /// Backend that produced the image.
    #[getset(get_copy = "pub")]
    renderer: RendererKind,
    /// Position of the camera that was actually used for the render,
    /// i.e. the resolved position, not the requested one.
    #[getset(get_copy = "pub")]
    camera_position: Vector3D,
    /// Viewing direction of the camera.
    #[getset(get_copy = "pub")]
    camera_direction: Vector3D,
    /// Path the image was written to.
    output: Box<Path>,
}

impl RenderReport {
    /// Create a new `RenderReport` structure.
    pub fn new(
        total_frames: usize,
        frame: usize,
        renderer: RendererKind,
        camera_position: Vector3D,
        camera_direction: Vector3D,
        output: impl AsRef<Path>,
    ) -> Self {
        RenderReport {
            total_frames,
            frame,
            renderer,
            camera_position,
            camera_direction,
            output: Box::from(output.as_ref()),
        }
    }

    /// Get the path the image was written to.
    #[inline]
    pub fn output(&self) -> &Path {
        &self.output
    }

    /// One-line summary of the render: frame count, rendered frame, backend.
    pub fn summary(&self) -> String {
        format!(
            "A total of {} frames were found, and frame {} was rendered using {}.",
            self.total_frames, self.frame, self.renderer
        )
    }

    /// One-line summary of the camera placement used for the render.
    pub fn camera_summary(&self) -> String {
        format!(
            "The position of the camera was {} and its direction was {}.",
            self.camera_position, self.camera_direction
        )
    }
}

impl fmt::Display for RenderReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}\n{}", self.summary(), self.camera_summary())
    }
}

/// Structure handling printing of render reports.
/// Constructed using `ReportPrinter::new()` and associated with a render
/// request using `RenderRequest::with_report_printer()`.
pub struct ReportPrinter {
    /// Stream to write the reports to.
    output: Box<dyn Write>,
    /// If true, the output will be colored. Default: true.
    colored: bool,
}

impl ReportPrinter {
    /// Create an instance of `ReportPrinter` with default parameters.
    ///
    /// The default values of the `ReportPrinter` parameters.
    /// - `output`: `std::io::stdout()` (stream to write the reports to)
    /// - `colored`: `true` (should the output be colored?)
    ///
    /// You can set custom values for any of the parameters by using
    /// `with_%PARAMETER()` method when constructing the `ReportPrinter`.
    ///
    /// ## Examples
    /// By default, `ReportPrinter` prints to standard output.
    /// However, you can also let it print into a file.
    /// ```no_run
    /// use mdshot_rs::prelude::*;
    ///
    /// let file = std::fs::File::create("renders.log").unwrap();
    /// let printer = ReportPrinter::new()
    ///     .with_output(Box::from(file))
    ///     // turning off colored output which does not make sense for a file
    ///     .with_colored(false);
    /// ```
    pub fn new() -> Self {
        ReportPrinter {
            output: Box::from(std::io::stdout()),
            colored: true,
        }
    }

    /// Create new `ReportPrinter` with specific `output` stream.
    pub fn with_output(mut self, stream: Box<dyn Write>) -> Self {
        self.output = stream;
        self
    }

    /// Create new `ReportPrinter` with specific value for `colored`.
    pub fn with_colored(mut self, colored: bool) -> Self {
        self.colored = colored;
        self
    }

    /// Print a render report to the output stream.
    pub fn print(&mut self, report: &RenderReport) {
        if self.colored {
            write!(self.output, "[{}]   ", "RENDERED".green()).expect(
                "FATAL MDSHOT ERROR | ReportPrinter::print (1) | Could not write to `ReportPrinter` stream.",
            );
        } else {
            write!(self.output, "[{}]   ", "RENDERED").expect(
                "FATAL MDSHOT ERROR | ReportPrinter::print (2) | Could not write to `ReportPrinter` stream.",
            );
        }

        writeln!(self.output, "{}", report.summary()).expect(
            "FATAL MDSHOT ERROR | ReportPrinter::print (3) | Could not write to `ReportPrinter` stream.",
        );
        writeln!(self.output, "{:13}{}", "", report.camera_summary()).expect(
            "FATAL MDSHOT ERROR | ReportPrinter::print (4) | Could not write to `ReportPrinter` stream.",
        );

        self.output.flush().expect(
            "FATAL MDSHOT ERROR | ReportPrinter::print (5) | Could not flush `ReportPrinter` stream.",
        );
    }
}

impl Default for ReportPrinter {
    fn default() -> Self {
        Self::new()
    }
}

/******************************/
/*         UNIT TESTS         */
/******************************/
