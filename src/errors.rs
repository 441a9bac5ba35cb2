// Released under MIT License.
// Copyright (c) 2026 mdshot_rs developers

use crate::structures::vector3d::Vector3D;
use std::path::Path;
use thiserror::Error;

/// Errors that can occur when validating the fields of a render request.
#[derive(Error, Debug, PartialEq)]
pub enum ValidateRenderError {
    #[error("Image size `{0}x{1}` is invalid. Both dimensions must be greater than 1.")]
    InvalidSize(u32, u32),
    #[error("Background color component `{0}` has value `{1}` which is outside the range [0, 1].")]
    InvalidColor(char, f32),
    #[error("Camera direction `{0}` is invalid. All components must be finite and at least one must be nonzero.")]
    InvalidCameraDirection(Vector3D),
    #[error("Camera position `{0}` is invalid. All components must be finite.")]
    InvalidCameraPosition(Vector3D),
    #[error("Field of view `{0}` is invalid. It must be a finite non-negative number.")]
    InvalidFov(f32),
    #[error("File `{0}` does not have a supported image extension.")]
    UnsupportedImageFormat(Box<Path>),
    #[error("At least one modifier must be provided.")]
    EmptyModifiers,
}

/// Errors that can occur when resolving an input path to a frame series.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ResolveInputError {
    #[error("File `{0}` was not found.")]
    FileNotFound(Box<Path>),
    #[error("No file matches the pattern `{0}`.")]
    PatternNotFound(Box<Path>),
    #[error("Pattern `{0}` contains more than one wildcard.")]
    MultipleWildcards(Box<Path>),
    #[error("Pattern `{0}` contains a wildcard outside of the file name.")]
    WildcardOutsideFileName(Box<Path>),
}

/// Errors that can occur when parsing a renderer name.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ParseRendererError {
    #[error("Renderer `{0}` is not supported. Only `TR` and `OSPR` are supported.")]
    UnknownRenderer(String),
}

/// Errors that can occur when validating renderer parameters.
#[derive(Error, Debug, PartialEq)]
pub enum ValidateParamsError {
    #[error("Renderer parameter `{0}` has invalid value `{1}`. It must be a finite non-negative number.")]
    InvalidValue(&'static str, f32),
    #[error("Renderer parameter `{0}` has value `{1}` which is outside the range [{2}, {3}].")]
    OutOfRange(&'static str, f32, f32, f32),
}

/// Errors that can occur when loading renderer parameters from a yaml preset file.
#[derive(Error, Debug)]
pub enum ParsePresetError {
    #[error("File `{0}` was not found.")]
    FileNotFound(Box<Path>),
    #[error("Could not parse yaml content.")]
    CouldNotParseYaml(#[source] serde_yaml::Error),
}

/// Error raised by the rendering engine. The message is produced by the engine
/// and is propagated unmodified.
#[derive(Error, Debug, PartialEq, Eq, Clone)]
#[error("{0}")]
pub struct EngineError(pub String);

/// Errors that can occur when performing a render call.
#[derive(Error, Debug, PartialEq)]
pub enum RenderError {
    #[error("{0}")]
    InvalidRequest(#[from] ValidateRenderError),
    #[error("{0}")]
    InvalidInput(#[from] ResolveInputError),
    #[error("{0}")]
    InvalidParams(#[from] ValidateParamsError),
    #[error("{0}")]
    Engine(#[from] EngineError),
}
