// Released under MIT License.
// Copyright (c) 2026 mdshot_rs developers

//! Implementation of the Color structure and its methods.

use serde::{Deserialize, Serialize};

use crate::errors::ValidateRenderError;

/// RGB color with components in the range [0, 1].
/// Used as the background color of the rendered image.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl Color {
    /// White. The default background of a rendered image.
    pub const WHITE: Color = Color {
        r: 1.0,
        g: 1.0,
        b: 1.0,
    };

    /// Black.
    pub const BLACK: Color = Color {
        r: 0.0,
        g: 0.0,
        b: 0.0,
    };

    /// Create a new `Color` structure.
    #[inline]
    pub fn new(r: f32, g: f32, b: f32) -> Self {
        Color { r, g, b }
    }

    /// Check that every component of the color is inside the range [0, 1].
    ///
    /// ## Returns
    /// `Ok` if the color is valid, `ValidateRenderError::InvalidColor` naming
    /// the first offending component otherwise.
    pub fn validate(&self) -> Result<(), ValidateRenderError> {
        for (name, value) in [('r', self.r), ('g', self.g), ('b', self.b)] {
            if !value.is_finite() || !(0.0..=1.0).contains(&value) {
                return Err(ValidateRenderError::InvalidColor(name, value));
            }
        }

        Ok(())
    }
}

impl From<[f32; 3]> for Color {
    #[inline]
    fn from(arr: [f32; 3]) -> Self {
        Color::new(arr[0], arr[1], arr[2])
    }
}

/******************************/
/*         UNIT TESTS         */
/******************************/
