// Released under MIT License.
// Copyright (c) 2026 mdshot_rs developers

//! Orchestration of one render-to-file call.

pub mod camera;
pub mod ospray;
pub mod request;
pub mod settings;
pub mod tachyon;

use crate::engine::{RenderEngine, RenderTarget, ScenePipeline};
use crate::errors::{RenderError, ValidateRenderError};
use crate::files::ImageFormat;
use crate::render::camera::Camera;
use crate::render::request::RenderRequest;
use crate::report::RenderReport;

impl RenderRequest {
    /// Render one still image through the given engine and write it to the
    /// output path of the request.
    ///
    /// The call validates every field of the request first; a validation
    /// failure aborts before any engine state is created. The optional
    /// `modifiers` are appended to the imported pipeline in the given order
    /// and evaluated once before the scene is built; passing `None` skips
    /// the analysis step entirely, while passing an empty list is an error.
    ///
    /// The pipeline is detached from the engine's scene and discarded when
    /// the call returns, whether it succeeded or failed, so repeated calls
    /// do not accumulate scene state.
    ///
    /// ## Returns
    /// `RenderReport` describing the completed render, or `RenderError` if
    /// validation or any engine step failed. Engine errors are propagated
    /// unmodified.
    ///
    /// ## Example
    /// ```no_run
    /// use mdshot_rs::prelude::*;
    /// # use mdshot_rs::errors::RenderError;
    /// # fn render_with(engine: &mut impl RenderEngine<Modifier = String>) -> Result<(), RenderError> {
    ///
    /// let mut request = RenderRequest::new("model/friction_*.xyz", "picture/result.png")
    ///     .with_frame(3)
    ///     .with_fov(80.0)
    ///     .with_report_printer(ReportPrinter::new());
    ///
    /// // render frame 3 of the series without applying any modifiers
    /// let report = request.render(engine, None)?;
    /// assert_eq!(report.frame(), 3);
    /// # Ok(())
    /// # }
    /// ```
    pub fn render<E: RenderEngine>(
        &mut self,
        engine: &mut E,
        modifiers: Option<Vec<E::Modifier>>,
    ) -> Result<RenderReport, RenderError> {
        let series = self.validate()?;

        if let Some(modifiers) = &modifiers {
            if modifiers.is_empty() {
                return Err(ValidateRenderError::EmptyModifiers.into());
            }
        }

        let pipeline = engine.import(&series)?;
        // teardown is the guard's responsibility from this point on
        let mut scene = ScenePipeline::new(engine, pipeline);

        if let Some(modifiers) = modifiers {
            for modifier in modifiers {
                scene.append_modifier(modifier)?;
            }
            scene.evaluate()?;
        }

        let total_frames = scene.n_frames();

        scene.add_to_scene()?;
        scene.set_cell_visible(self.cell_visible);

        let cell = scene.evaluate()?;
        let camera = Camera::new(
            self.camera_position.resolve(&cell),
            self.camera_direction,
            self.fov,
        );

        let target = RenderTarget {
            path: &self.output,
            format: ImageFormat::from_name(&self.output),
            size: self.size,
            background: self.background,
            frame: self.frame,
        };

        scene.render(&camera, &target, &self.settings)?;
        drop(scene);

        let report = RenderReport::new(
            total_frames,
            self.frame,
            self.settings.kind(),
            camera.position(),
            camera.direction(),
            &self.output,
        );

        if let Some(printer) = self.printer.as_mut() {
            printer.print(&report);
        }

        Ok(report)
    }
}

/******************************/
/*         UNIT TESTS         */
/******************************/
