// Released under MIT License.
// Copyright (c) 2026 mdshot_rs developers

//! Parameters of the Tachyon rendering backend.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::errors::{ParsePresetError, ValidateParamsError};
use crate::render::settings::{check_non_negative, load_yaml_to_string};

/// Tuning parameters of the Tachyon renderer.
/// The default values are the engine's documented defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TachyonParams {
    /// Enable ambient occlusion shading, mimicking omnidirectional diffuse
    /// lighting such as an overcast sky.
    pub ambient_occlusion: bool,
    /// Brightness of the sky light source used for ambient occlusion.
    pub ambient_occlusion_brightness: f32,
    /// Number of Monte Carlo samples used to compute ambient occlusion.
    /// More samples give smoother shading at a higher rendering cost.
    pub ambient_occlusion_samples: u32,
    /// Enable supersampling to reduce aliasing effects.
    pub antialiasing: bool,
    /// Number of supersampling rays generated per pixel.
    pub antialiasing_samples: u32,
    /// Aperture of the camera, used for depth-of-field rendering.
    pub aperture: f32,
    /// Enable depth-of-field rendering.
    pub depth_of_field: bool,
    /// Enable the directional light source placed behind the camera.
    pub direct_light: bool,
    /// Brightness of the directional light source.
    pub direct_light_intensity: f32,
    /// Focal length of the camera, used for depth-of-field rendering.
    pub focal_length: f32,
    /// Enable shadows cast by the directional light source.
    pub shadows: bool,
}

impl Default for TachyonParams {
    fn default() -> Self {
        TachyonParams {
            ambient_occlusion: true,
            ambient_occlusion_brightness: 0.8,
            ambient_occlusion_samples: 12,
            antialiasing: true,
            antialiasing_samples: 12,
            aperture: 0.01,
            depth_of_field: false,
            direct_light: true,
            direct_light_intensity: 0.9,
            focal_length: 40.0,
            shadows: true,
        }
    }
}

impl TachyonParams {
    /// Load Tachyon parameters from a yaml preset file.
    /// Parameters missing from the file keep their default values.
    ///
    /// ## Example
    /// A preset file raising the direct light intensity and disabling shadows:
    /// ```yaml
    /// ---
    /// direct_light_intensity: 1.2
    /// shadows: false
    /// ...
    /// ```
    pub fn from_file(filename: impl AsRef<Path>) -> Result<Self, ParsePresetError> {
        TachyonParams::from_yaml(&load_yaml_to_string(filename)?)
    }

    /// Parse Tachyon parameters from a yaml string.
    pub fn from_yaml(yaml: &str) -> Result<Self, ParsePresetError> {
        serde_yaml::from_str(yaml).map_err(ParsePresetError::CouldNotParseYaml)
    }

    /// Check that every parameter is inside its documented bounds.
    pub fn validate(&self) -> Result<(), ValidateParamsError> {
        check_non_negative(
            "ambient_occlusion_brightness",
            self.ambient_occlusion_brightness,
        )?;
        check_non_negative("aperture", self.aperture)?;
        check_non_negative("direct_light_intensity", self.direct_light_intensity)?;
        check_non_negative("focal_length", self.focal_length)?;

        Ok(())
    }
}

/******************************/
/*         UNIT TESTS         */
/******************************/
