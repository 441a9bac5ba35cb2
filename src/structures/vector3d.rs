// Released under MIT License.
// Copyright (c) 2026 mdshot_rs developers

//! Implementation of methods for three-dimensional vector.

use std::fmt;
use std::ops::{Deref, DerefMut};

use nalgebra::base::Vector3;

/// Describes the orientation of the camera view or a position of a point in space.
/// Implemented using `nalgebra`'s Vector3.
#[derive(Debug, PartialEq, Clone, Copy)]
pub struct Vector3D(pub(crate) Vector3<f32>);

impl From<[f32; 3]> for Vector3D {
    #[inline]
    fn from(arr: [f32; 3]) -> Self {
        Vector3D(Vector3::new(arr[0], arr[1], arr[2]))
    }
}

/// Allows accessing fields of `Vector3D` as `.x`, `.y`, and `.z`.
pub struct Vector3Raw {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Deref for Vector3D {
    type Target = Vector3Raw;

    #[inline]
    fn deref(&self) -> &Self::Target {
        unsafe { &*(self.0.as_ptr() as *const Vector3Raw) }
    }
}

impl DerefMut for Vector3D {
    #[inline]
    fn deref_mut(&mut self) -> &mut Self::Target {
        unsafe { &mut *(self.0.as_mut_ptr() as *mut Vector3Raw) }
    }
}

impl Vector3D {
    /// Create a new `Vector3D` structure.
    #[inline]
    pub fn new(x: f32, y: f32, z: f32) -> Self {
        Vector3D(Vector3::new(x, y, z))
    }

    /// Calculate length of the vector.
    ///
    /// ## Example
    /// ```
    /// # use mdshot_rs::prelude::*;
    /// # use float_cmp::assert_approx_eq;
    /// #
    /// let vector = Vector3D::new(1.0, 2.0, 3.0);
    /// assert_approx_eq!(f32, vector.len(), 3.741657);
    /// ```
    #[inline]
    pub fn len(&self) -> f32 {
        self.0.magnitude()
    }

    /// Convert vector to unit vector.
    ///
    /// ## Notes
    /// - Returns itself when applied to a null vector.
    #[inline]
    pub fn to_unit(self) -> Vector3D {
        Vector3D(self.0.normalize())
    }

    /// Check whether all components of the vector are zero.
    ///
    /// ## Example
    /// ```
    /// # use mdshot_rs::prelude::*;
    /// #
    /// assert!(Vector3D::new(0.0, 0.0, 0.0).is_zero());
    /// assert!(!Vector3D::new(0.0, 1.0, 0.0).is_zero());
    /// ```
    #[inline]
    pub fn is_zero(&self) -> bool {
        self.x == 0.0 && self.y == 0.0 && self.z == 0.0
    }

    /// Check whether all components of the vector are finite numbers.
    #[inline]
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
    }
}

impl fmt::Display for Vector3D {
    /// Format the vector as `[x, y, z]`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}, {}]", self.x, self.y, self.z)
    }
}

/******************************/
/*         UNIT TESTS         */
/******************************/

#[cfg(test)]
mod tests {
    use super::*;
    use float_cmp::assert_approx_eq;

    #[test]
    fn new() {
        let vector = Vector3D::new(2.0, 1.0, -1.0);

        assert_approx_eq!(f32, vector.x, 2.0);
        assert_approx_eq!(f32, vector.y, 1.0);
        assert_approx_eq!(f32, vector.z, -1.0);
    }

    #[test]
    fn from_array() {
        let vector = Vector3D::from([41.2418, 45.5132, 47.5879]);

        assert_approx_eq!(f32, vector.x, 41.2418);
        assert_approx_eq!(f32, vector.y, 45.5132);
        assert_approx_eq!(f32, vector.z, 47.5879);
    }

    #[test]
    fn len() {
        let vector = Vector3D::new(2.0, 1.0, -1.0);

        assert_approx_eq!(f32, vector.len(), 2.449_489_8);
    }

    #[test]
    fn to_unit() {
        let vector = Vector3D::new(1.0, 2.0, 3.0).to_unit();

        assert_approx_eq!(f32, vector.x, 0.2672612);
        assert_approx_eq!(f32, vector.y, 0.5345225);
        assert_approx_eq!(f32, vector.z, 0.8017837);
        assert_approx_eq!(f32, vector.len(), 1.0);
    }

    #[test]
    fn is_zero() {
        assert!(Vector3D::new(0.0, 0.0, 0.0).is_zero());
        assert!(!Vector3D::new(0.0, 0.0, 0.1).is_zero());
        assert!(!Vector3D::new(2.0, 1.0, -1.0).is_zero());
    }

    #[test]
    fn is_finite() {
        assert!(Vector3D::new(2.0, 1.0, -1.0).is_finite());
        assert!(!Vector3D::new(f32::NAN, 1.0, -1.0).is_finite());
        assert!(!Vector3D::new(2.0, f32::INFINITY, -1.0).is_finite());
        assert!(!Vector3D::new(2.0, 1.0, f32::NEG_INFINITY).is_finite());
    }

    #[test]
    fn display() {
        let vector = Vector3D::new(2.0, 1.0, -1.0);

        assert_eq!(vector.to_string(), "[2, 1, -1]");
    }

    #[test]
    fn mutate_through_deref() {
        let mut vector = Vector3D::new(1.0, 2.0, 3.0);
        vector.x = 4.0;
        vector.z = -3.0;

        assert_approx_eq!(f32, vector.x, 4.0);
        assert_approx_eq!(f32, vector.y, 2.0);
        assert_approx_eq!(f32, vector.z, -3.0);
    }
}
