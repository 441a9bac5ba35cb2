// Released under MIT License.
// Copyright (c) 2026 mdshot_rs developers

//! Implementation of the SimCell structure and its methods.

use crate::structures::vector3d::Vector3D;

/// Diagonal extents of the simulation cell as reported by the rendering engine
/// after pipeline evaluation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SimCell {
    /// Length of the cell along the x-axis.
    pub lx: f32,
    /// Length of the cell along the y-axis.
    pub ly: f32,
    /// Length of the cell along the z-axis.
    pub lz: f32,
}

impl From<[f32; 3]> for SimCell {
    /// Convert 3-member array of axis lengths to SimCell structure.
    #[inline]
    fn from(arr: [f32; 3]) -> Self {
        SimCell {
            lx: arr[0],
            ly: arr[1],
            lz: arr[2],
        }
    }
}

impl SimCell {
    /// Create a new `SimCell` structure from the lengths of the cell along each axis.
    #[inline]
    pub fn new(lx: f32, ly: f32, lz: f32) -> Self {
        SimCell { lx, ly, lz }
    }

    /// Get the geometric center of the cell, i.e. the point at half of the cell
    /// extent along each axis. This is the default camera position.
    ///
    /// ## Example
    /// ```
    /// # use mdshot_rs::prelude::*;
    /// # use float_cmp::assert_approx_eq;
    /// #
    /// let cell = SimCell::new(40.0, 60.0, 80.0);
    /// let center = cell.center();
    ///
    /// assert_approx_eq!(f32, center.x, 20.0);
    /// assert_approx_eq!(f32, center.y, 30.0);
    /// assert_approx_eq!(f32, center.z, 40.0);
    /// ```
    #[inline]
    pub fn center(&self) -> Vector3D {
        Vector3D::new(self.lx / 2.0, self.ly / 2.0, self.lz / 2.0)
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
    fn from_array() {
        let cell = SimCell::from([82.4836, 91.0264, 95.1758]);

        assert_approx_eq!(f32, cell.lx, 82.4836);
        assert_approx_eq!(f32, cell.ly, 91.0264);
        assert_approx_eq!(f32, cell.lz, 95.1758);
    }

    #[test]
    fn center() {
        let cell = SimCell::from([82.4836, 91.0264, 95.1758]);
        let center = cell.center();

        assert_approx_eq!(f32, center.x, 41.2418);
        assert_approx_eq!(f32, center.y, 45.5132);
        assert_approx_eq!(f32, center.z, 47.5879);
    }

    #[test]
    fn center_empty_cell() {
        let cell = SimCell::new(0.0, 0.0, 0.0);

        assert!(cell.center().is_zero());
    }
}
