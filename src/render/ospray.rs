// Released under MIT License.
// Copyright (c) 2026 mdshot_rs developers

//! Parameters of the OSPRay rendering backend.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::errors::{ParsePresetError, ValidateParamsError};
use crate::render::settings::{check_non_negative, check_range, load_yaml_to_string};

/// Tuning parameters of the OSPRay renderer.
/// The default values are the engine's documented defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct OsprayParams {
    /// Radiance of the ambient light surrounding the scene.
    pub ambient_brightness: f32,
    /// Enable the ambient light illuminating the scene from infinity
    /// with a constant radiance.
    pub ambient_light_enabled: bool,
    /// Aperture radius controlling how blurred out-of-focus objects appear
    /// when `dof_enabled` is set.
    pub aperture: f32,
    /// Apply a denoising filter to the rendered image to reduce the Monte
    /// Carlo noise inherent to stochastic ray tracing.
    pub denoising_enabled: bool,
    /// Apparent size (angle in radians) of the default directional light
    /// source. Values greater than zero produce soft shadows.
    pub direct_light_angular_diameter: f32,
    /// Enable the default directional light source placed behind the camera,
    /// pointing roughly along the viewing direction.
    pub direct_light_enabled: bool,
    /// Intensity of the default directional light source.
    pub direct_light_intensity: f32,
    /// Enable the depth-of-field effect (focal blur).
    pub dof_enabled: bool,
    /// Only objects at exactly this distance from the camera appear sharp
    /// when `dof_enabled` is set.
    pub focal_length: f32,
    /// Specular Phong exponent of the default material,
    /// usually between 2.0 and 10000.
    pub material_shininess: f32,
    /// Specular reflectivity of the default material.
    pub material_specular_brightness: f32,
    /// Maximum number of recursion steps during ray tracing. Larger depths
    /// are only needed when rendering semi-transparent objects.
    pub max_ray_recursion: u32,
    /// Number of iterations of the progressive refinement loop.
    pub refinement_iterations: u32,
    /// Number of ray-tracing samples computed per pixel. Larger values
    /// reduce aliasing artifacts.
    pub samples_per_pixel: u32,
    /// Ground reflectance affecting the sky-sun light source.
    /// Valid range is [0, 1].
    pub sky_albedo: f32,
    /// Intensity of the sky-sun light source.
    pub sky_brightness: f32,
    /// Enable the sky-sun light source mimicking outdoor lighting.
    pub sky_light_enabled: bool,
    /// Atmospheric turbidity affecting the sky-sun light source.
    /// Valid range is [1, 10].
    pub sky_turbidity: f32,
}

impl Default for OsprayParams {
    fn default() -> Self {
        OsprayParams {
            ambient_brightness: 0.8,
            ambient_light_enabled: true,
            aperture: 0.5,
            denoising_enabled: true,
            direct_light_angular_diameter: 10f32.to_radians(),
            direct_light_enabled: true,
            direct_light_intensity: 1.0,
            dof_enabled: false,
            focal_length: 40.0,
            material_shininess: 10.0,
            material_specular_brightness: 0.02,
            max_ray_recursion: 10,
            refinement_iterations: 4,
            samples_per_pixel: 2,
            sky_albedo: 0.3,
            sky_brightness: 2.0,
            sky_light_enabled: false,
            sky_turbidity: 3.0,
        }
    }
}

impl OsprayParams {
    /// Load OSPRay parameters from a yaml preset file.
    /// Parameters missing from the file keep their default values.
    pub fn from_file(filename: impl AsRef<Path>) -> Result<Self, ParsePresetError> {
        OsprayParams::from_yaml(&load_yaml_to_string(filename)?)
    }

    /// Parse OSPRay parameters from a yaml string.
    pub fn from_yaml(yaml: &str) -> Result<Self, ParsePresetError> {
        serde_yaml::from_str(yaml).map_err(ParsePresetError::CouldNotParseYaml)
    }

    /// Check that every parameter is inside its documented bounds.
    pub fn validate(&self) -> Result<(), ValidateParamsError> {
        check_non_negative("ambient_brightness", self.ambient_brightness)?;
        check_non_negative("aperture", self.aperture)?;
        check_non_negative(
            "direct_light_angular_diameter",
            self.direct_light_angular_diameter,
        )?;
        check_non_negative("direct_light_intensity", self.direct_light_intensity)?;
        check_non_negative("focal_length", self.focal_length)?;
        check_non_negative("material_shininess", self.material_shininess)?;
        check_non_negative(
            "material_specular_brightness",
            self.material_specular_brightness,
        )?;
        check_range("sky_albedo", self.sky_albedo, 0.0, 1.0)?;
        check_non_negative("sky_brightness", self.sky_brightness)?;
        check_range("sky_turbidity", self.sky_turbidity, 1.0, 10.0)?;

        Ok(())
    }
}

/******************************/
/*         UNIT TESTS         */
/******************************/
