// Released under MIT License.
// Copyright (c) 2026 mdshot_rs developers

//! Camera placement for the rendered image.

use crate::structures::{cell::SimCell, vector3d::Vector3D};

/// Position of the virtual camera.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CameraPosition {
    /// Place the camera at the geometric center of the simulation cell.
    Auto,
    /// Place the camera at the given point. The origin is a valid position.
    Explicit(Vector3D),
}

impl CameraPosition {
    /// Resolve the camera position against the extents of the simulation cell.
    /// `Auto` resolves to the center of the cell; an explicit position is used
    /// verbatim, regardless of the cell size.
    #[inline]
    pub fn resolve(&self, cell: &SimCell) -> Vector3D {
        match self {
            CameraPosition::Auto => cell.center(),
            CameraPosition::Explicit(position) => *position,
        }
    }
}

impl From<[f32; 3]> for CameraPosition {
    fn from(arr: [f32; 3]) -> Self {
        CameraPosition::Explicit(arr.into())
    }
}

/// Orthographic camera with a resolved position.
/// Constructed by the render orchestration and passed to the engine.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    position: Vector3D,
    direction: Vector3D,
    fov: f32,
}

impl Camera {
    /// Create a new orthographic `Camera` structure.
    pub fn new(position: Vector3D, direction: Vector3D, fov: f32) -> Self {
        Camera {
            position,
            direction,
            fov,
        }
    }

    /// Get the position of the camera.
    #[inline]
    pub fn position(&self) -> Vector3D {
        self.position
    }

    /// Get the viewing direction of the camera.
    #[inline]
    pub fn direction(&self) -> Vector3D {
        self.direction
    }

    /// Get the orthographic field of view of the camera.
    #[inline]
    pub fn fov(&self) -> f32 {
        self.fov
    }
}

/******************************/
/*         UNIT TESTS         */
/******************************/
