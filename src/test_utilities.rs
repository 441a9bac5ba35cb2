// Released under MIT License.
// Copyright (c) 2026 mdshot_rs developers

//! Small structures for testing purposes.

#[cfg(test)]
pub(crate) mod utilities {
    use crate::engine::{RenderEngine, RenderTarget};
    use crate::errors::EngineError;
    use crate::input::FrameSeries;
    use crate::render::camera::Camera;
    use crate::render::settings::{RendererKind, RendererSettings};
    use crate::structures::cell::SimCell;

    /// One operation issued to the engine, in the order of issue.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub(crate) enum EngineOp {
        Import,
        AppendModifier,
        Evaluate,
        NFrames,
        AddToScene,
        SetCellVisible(bool),
        Render,
        RemoveFromScene,
        Discard,
    }

    /// Pipeline state tracked by the `RecordingEngine`.
    pub(crate) struct RecordedPipeline {
        n_frames: usize,
        attached: bool,
    }

    /// Engine that records every operation issued to it instead of rendering.
    /// A successful render writes stub bytes to the target path so tests can
    /// check that an output file was produced.
    pub(crate) struct RecordingEngine {
        cell: SimCell,
        ops: Vec<EngineOp>,
        n_live_pipelines: usize,
        n_attached: usize,
        fail_render: bool,
        last_camera: Option<Camera>,
        last_backend: Option<RendererKind>,
    }

    impl RecordingEngine {
        /// Create an engine whose pipeline evaluation reports the given cell.
        pub(crate) fn new(cell: SimCell) -> Self {
            RecordingEngine {
                cell,
                ops: Vec::new(),
                n_live_pipelines: 0,
                n_attached: 0,
                fail_render: false,
                last_camera: None,
                last_backend: None,
            }
        }

        /// Create an engine whose render step always fails.
        pub(crate) fn failing_render(cell: SimCell) -> Self {
            RecordingEngine {
                fail_render: true,
                ..RecordingEngine::new(cell)
            }
        }

        /// Get the operations issued to the engine so far.
        pub(crate) fn ops(&self) -> &[EngineOp] {
            &self.ops
        }

        /// Get the number of pipelines currently attached to the scene.
        pub(crate) fn n_attached(&self) -> usize {
            self.n_attached
        }

        /// Get the number of pipelines that have not been discarded yet.
        pub(crate) fn n_live_pipelines(&self) -> usize {
            self.n_live_pipelines
        }

        /// Get the camera used by the most recent render call.
        pub(crate) fn last_camera(&self) -> Option<Camera> {
            self.last_camera
        }

        /// Get the backend used by the most recent render call.
        pub(crate) fn last_backend(&self) -> Option<RendererKind> {
            self.last_backend
        }
    }

    impl RenderEngine for RecordingEngine {
        type Pipeline = RecordedPipeline;
        type Modifier = String;

        fn import(&mut self, series: &FrameSeries) -> Result<Self::Pipeline, EngineError> {
            self.ops.push(EngineOp::Import);
            self.n_live_pipelines += 1;

            Ok(RecordedPipeline {
                n_frames: series.n_files(),
                attached: false,
            })
        }

        fn append_modifier(
            &mut self,
            _pipeline: &mut Self::Pipeline,
            _modifier: Self::Modifier,
        ) -> Result<(), EngineError> {
            self.ops.push(EngineOp::AppendModifier);
            Ok(())
        }

        fn evaluate(&mut self, _pipeline: &mut Self::Pipeline) -> Result<SimCell, EngineError> {
            self.ops.push(EngineOp::Evaluate);
            Ok(self.cell)
        }

        fn n_frames(&mut self, pipeline: &Self::Pipeline) -> usize {
            self.ops.push(EngineOp::NFrames);
            pipeline.n_frames
        }

        fn add_to_scene(&mut self, pipeline: &mut Self::Pipeline) -> Result<(), EngineError> {
            self.ops.push(EngineOp::AddToScene);
            pipeline.attached = true;
            self.n_attached += 1;
            Ok(())
        }

        fn set_cell_visible(&mut self, _pipeline: &mut Self::Pipeline, visible: bool) {
            self.ops.push(EngineOp::SetCellVisible(visible));
        }

        fn render(
            &mut self,
            _pipeline: &mut Self::Pipeline,
            camera: &Camera,
            target: &RenderTarget,
            settings: &RendererSettings,
        ) -> Result<(), EngineError> {
            self.ops.push(EngineOp::Render);
            self.last_camera = Some(*camera);
            self.last_backend = Some(settings.kind());

            if self.fail_render {
                return Err(EngineError(String::from("Renderer failed.")));
            }

            std::fs::write(target.path, b"stub image bytes")
                .map_err(|error| EngineError(error.to_string()))
        }

        fn remove_from_scene(&mut self, pipeline: &mut Self::Pipeline) {
            self.ops.push(EngineOp::RemoveFromScene);
            if pipeline.attached {
                pipeline.attached = false;
                self.n_attached -= 1;
            }
        }

        fn discard(&mut self, _pipeline: Self::Pipeline) {
            self.ops.push(EngineOp::Discard);
            self.n_live_pipelines -= 1;
        }
    }
}
