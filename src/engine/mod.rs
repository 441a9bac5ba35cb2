// Released under MIT License.
// Copyright (c) 2026 mdshot_rs developers

//! Capability contract of the external rendering engine.
//!
//! `mdshot_rs` does not parse trajectory files or trace rays itself. All of
//! that is delegated to a rendering engine reached through the [`RenderEngine`]
//! trait; this crate only validates parameters and drives the engine through
//! a fixed call sequence. Bindings to a concrete engine implement the trait.

use std::path::Path;

use crate::errors::EngineError;
use crate::files::ImageFormat;
use crate::input::FrameSeries;
use crate::render::camera::Camera;
use crate::render::request::ImageSize;
use crate::render::settings::RendererSettings;
use crate::structures::{cell::SimCell, color::Color};

/// Description of the image a render call should produce.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderTarget<'a> {
    /// Path the image is written to.
    pub path: &'a Path,
    /// Format of the image, detected from the extension of `path`.
    pub format: ImageFormat,
    /// Width and height of the image in pixels.
    pub size: ImageSize,
    /// Background color of the image.
    pub background: Color,
    /// Index of the frame to render.
    pub frame: usize,
}

/// Contract implemented by bindings to a rendering engine.
///
/// The engine owns a single process-wide scene; only one pipeline is expected
/// to be attached to it at a time. The orchestration in
/// [`RenderRequest::render`](crate::render::request::RenderRequest::render)
/// guarantees symmetric attach/detach around every render call.
pub trait RenderEngine {
    /// Engine-side state of an imported, frame-indexed dataset plus the
    /// modifiers to apply before each evaluation.
    type Pipeline;
    /// Opaque transformation step appended to a pipeline. Never inspected
    /// by this crate.
    type Modifier;

    /// Import a frame series into a new pipeline.
    fn import(&mut self, series: &FrameSeries) -> Result<Self::Pipeline, EngineError>;

    /// Append a modifier to the end of the pipeline's modifier list.
    fn append_modifier(
        &mut self,
        pipeline: &mut Self::Pipeline,
        modifier: Self::Modifier,
    ) -> Result<(), EngineError>;

    /// Evaluate the pipeline with all currently appended modifiers and
    /// report the extents of the simulation cell at the computed state.
    fn evaluate(&mut self, pipeline: &mut Self::Pipeline) -> Result<SimCell, EngineError>;

    /// Get the total number of frames available in the pipeline's source.
    fn n_frames(&mut self, pipeline: &Self::Pipeline) -> usize;

    /// Attach the output of the pipeline to the renderable scene.
    fn add_to_scene(&mut self, pipeline: &mut Self::Pipeline) -> Result<(), EngineError>;

    /// Set the visibility of the simulation cell outline in the scene.
    fn set_cell_visible(&mut self, pipeline: &mut Self::Pipeline, visible: bool);

    /// Render one still image of the scene as seen by `camera` using the
    /// selected backend and write it to the target path.
    fn render(
        &mut self,
        pipeline: &mut Self::Pipeline,
        camera: &Camera,
        target: &RenderTarget,
        settings: &RendererSettings,
    ) -> Result<(), EngineError>;

    /// Detach the output of the pipeline from the renderable scene.
    /// Detaching a pipeline that is not attached must be a no-op.
    fn remove_from_scene(&mut self, pipeline: &mut Self::Pipeline);

    /// Release all engine-side state of the pipeline.
    fn discard(&mut self, pipeline: Self::Pipeline);
}

/// Scoped handle to a pipeline that lives in the engine's scene.
///
/// On drop the pipeline is detached from the scene and discarded, on every
/// exit path. This is what keeps repeated render calls in one process from
/// accumulating scene state, even when the engine fails mid-render.
pub struct ScenePipeline<'a, E: RenderEngine> {
    engine: &'a mut E,
    pipeline: Option<E::Pipeline>,
}

impl<'a, E: RenderEngine> ScenePipeline<'a, E> {
    /// Take ownership of an imported pipeline. From this point on, scene
    /// teardown is the guard's responsibility.
    pub fn new(engine: &'a mut E, pipeline: E::Pipeline) -> Self {
        ScenePipeline {
            engine,
            pipeline: Some(pipeline),
        }
    }

    /// Append a modifier to the pipeline.
    pub fn append_modifier(&mut self, modifier: E::Modifier) -> Result<(), EngineError> {
        let ScenePipeline { engine, pipeline } = self;
        engine.append_modifier(
            pipeline.as_mut().expect(
                "FATAL MDSHOT ERROR | ScenePipeline::append_modifier | Pipeline already discarded.",
            ),
            modifier,
        )
    }

    /// Evaluate the pipeline and read the extents of the simulation cell.
    pub fn evaluate(&mut self) -> Result<SimCell, EngineError> {
        let ScenePipeline { engine, pipeline } = self;
        engine.evaluate(pipeline.as_mut().expect(
            "FATAL MDSHOT ERROR | ScenePipeline::evaluate | Pipeline already discarded.",
        ))
    }

    /// Get the total number of frames available in the pipeline's source.
    pub fn n_frames(&mut self) -> usize {
        let ScenePipeline { engine, pipeline } = self;
        engine.n_frames(pipeline.as_ref().expect(
            "FATAL MDSHOT ERROR | ScenePipeline::n_frames | Pipeline already discarded.",
        ))
    }

    /// Attach the output of the pipeline to the renderable scene.
    pub fn add_to_scene(&mut self) -> Result<(), EngineError> {
        let ScenePipeline { engine, pipeline } = self;
        engine.add_to_scene(pipeline.as_mut().expect(
            "FATAL MDSHOT ERROR | ScenePipeline::add_to_scene | Pipeline already discarded.",
        ))
    }

    /// Set the visibility of the simulation cell outline.
    pub fn set_cell_visible(&mut self, visible: bool) {
        let ScenePipeline { engine, pipeline } = self;
        engine.set_cell_visible(
            pipeline.as_mut().expect(
                "FATAL MDSHOT ERROR | ScenePipeline::set_cell_visible | Pipeline already discarded.",
            ),
            visible,
        );
    }

    /// Render one still image of the scene.
    pub fn render(
        &mut self,
        camera: &Camera,
        target: &RenderTarget,
        settings: &RendererSettings,
    ) -> Result<(), EngineError> {
        let ScenePipeline { engine, pipeline } = self;
        engine.render(
            pipeline.as_mut().expect(
                "FATAL MDSHOT ERROR | ScenePipeline::render | Pipeline already discarded.",
            ),
            camera,
            target,
            settings,
        )
    }
}

impl<E: RenderEngine> Drop for ScenePipeline<'_, E> {
    /// Detach the pipeline from the scene and discard it.
    fn drop(&mut self) {
        if let Some(mut pipeline) = self.pipeline.take() {
            self.engine.remove_from_scene(&mut pipeline);
            self.engine.discard(pipeline);
        }
    }
}

/******************************/
/*         UNIT TESTS         */
/******************************/
