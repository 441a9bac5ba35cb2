// Released under MIT License.
// Copyright (c) 2026 mdshot_rs developers

//! Renderer backend selection and the typed renderer parameter sets.

use std::fmt;
use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::{ParsePresetError, ParseRendererError, ValidateParamsError};
use crate::render::ospray::OsprayParams;
use crate::render::tachyon::TachyonParams;

/// Rendering backends supported by the engine. Both are offline ray tracers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RendererKind {
    /// Tachyon parallel ray tracer.
    Tachyon,
    /// OSPRay scientific ray tracer.
    Ospray,
}

impl RendererKind {
    /// Get the numeric backend id of the renderer as used by the engine.
    #[inline]
    pub fn backend_id(&self) -> u32 {
        match self {
            RendererKind::Tachyon => 2,
            RendererKind::Ospray => 3,
        }
    }

    /// Get the full name of the renderer.
    #[inline]
    pub fn name(&self) -> &'static str {
        match self {
            RendererKind::Tachyon => "TachyonRenderer",
            RendererKind::Ospray => "OSPRayRenderer",
        }
    }
}

impl FromStr for RendererKind {
    type Err = ParseRendererError;

    /// Parse a renderer selector. `TR` selects the Tachyon renderer,
    /// `OSPR` selects the OSPRay renderer. Any other string is an error.
    fn from_str(string: &str) -> Result<Self, Self::Err> {
        match string {
            "TR" => Ok(RendererKind::Tachyon),
            "OSPR" => Ok(RendererKind::Ospray),
            other => Err(ParseRendererError::UnknownRenderer(other.to_owned())),
        }
    }
}

impl fmt::Display for RendererKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Parameter set of the selected rendering backend.
/// The two backends have disjoint parameter vocabularies; every parameter is
/// typed and carries the engine's documented default value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum RendererSettings {
    Tachyon(TachyonParams),
    Ospray(OsprayParams),
}

impl RendererSettings {
    /// Get the backend these settings belong to.
    #[inline]
    pub fn kind(&self) -> RendererKind {
        match self {
            RendererSettings::Tachyon(_) => RendererKind::Tachyon,
            RendererSettings::Ospray(_) => RendererKind::Ospray,
        }
    }

    /// Check that every parameter of the set is inside its documented bounds.
    pub fn validate(&self) -> Result<(), ValidateParamsError> {
        match self {
            RendererSettings::Tachyon(params) => params.validate(),
            RendererSettings::Ospray(params) => params.validate(),
        }
    }
}

impl Default for RendererSettings {
    /// Default settings use the Tachyon renderer with its default parameters.
    fn default() -> Self {
        RendererSettings::Tachyon(TachyonParams::default())
    }
}

/// Read the content of a yaml preset file into a string.
pub(crate) fn load_yaml_to_string(filename: impl AsRef<Path>) -> Result<String, ParsePresetError> {
    std::fs::read_to_string(filename.as_ref())
        .map_err(|_| ParsePresetError::FileNotFound(Box::from(filename.as_ref())))
}

/// Check that the value of a renderer parameter is a finite non-negative number.
pub(crate) fn check_non_negative(
    name: &'static str,
    value: f32,
) -> Result<(), ValidateParamsError> {
    if !value.is_finite() || value < 0.0 {
        return Err(ValidateParamsError::InvalidValue(name, value));
    }

    Ok(())
}

/// Check that the value of a renderer parameter is inside the closed range [min, max].
pub(crate) fn check_range(
    name: &'static str,
    value: f32,
    min: f32,
    max: f32,
) -> Result<(), ValidateParamsError> {
    if !value.is_finite() || value < min || value > max {
        return Err(ValidateParamsError::OutOfRange(name, value, min, max));
    }

    Ok(())
}

/******************************/
/*         UNIT TESTS         */
/******************************/

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_tachyon() {
        assert_eq!("TR".parse::<RendererKind>().unwrap(), RendererKind::Tachyon);
    }

    #[test]
    fn parse_ospray() {
        assert_eq!("OSPR".parse::<RendererKind>().unwrap(), RendererKind::Ospray);
    }

    #[test]
    fn parse_unknown() {
        assert_eq!(
            "OpenGL".parse::<RendererKind>(),
            Err(ParseRendererError::UnknownRenderer(String::from("OpenGL")))
        );

        assert_eq!(
            "tr".parse::<RendererKind>(),
            Err(ParseRendererError::UnknownRenderer(String::from("tr")))
        );
    }

    #[test]
    fn backend_ids() {
        assert_eq!(RendererKind::Tachyon.backend_id(), 2);
        assert_eq!(RendererKind::Ospray.backend_id(), 3);
    }

    #[test]
    fn names() {
        assert_eq!(RendererKind::Tachyon.to_string(), "TachyonRenderer");
        assert_eq!(RendererKind::Ospray.to_string(), "OSPRayRenderer");
    }

    #[test]
    fn settings_kind() {
        assert_eq!(
            RendererSettings::Tachyon(TachyonParams::default()).kind(),
            RendererKind::Tachyon
        );
        assert_eq!(
            RendererSettings::Ospray(OsprayParams::default()).kind(),
            RendererKind::Ospray
        );
    }

    #[test]
    fn settings_default() {
        assert_eq!(
            RendererSettings::default(),
            RendererSettings::Tachyon(TachyonParams::default())
        );
    }

    #[test]
    fn check_non_negative_bounds() {
        check_non_negative("aperture", 0.0).unwrap();
        check_non_negative("aperture", 0.5).unwrap();

        assert_eq!(
            check_non_negative("aperture", -0.5),
            Err(ValidateParamsError::InvalidValue("aperture", -0.5))
        );
        assert!(check_non_negative("aperture", f32::NAN).is_err());
    }

    #[test]
    fn check_range_bounds() {
        check_range("sky_albedo", 0.0, 0.0, 1.0).unwrap();
        check_range("sky_albedo", 1.0, 0.0, 1.0).unwrap();

        assert_eq!(
            check_range("sky_albedo", 1.1, 0.0, 1.0),
            Err(ValidateParamsError::OutOfRange("sky_albedo", 1.1, 0.0, 1.0))
        );
        assert!(check_range("sky_turbidity", f32::INFINITY, 1.0, 10.0).is_err());
    }
}
