//! 3D transformation utilities

use crate::point::{centroid, Point3d, Vector3d};
use nalgebra::{Isometry3, Matrix3, Matrix4, Point3, UnitQuaternion, Vector3};
use serde::{Deserialize, Serialize};

/// A homogeneous 3D transformation that can be applied to points and geometries
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Transform3D {
    pub matrix: Matrix4<f64>,
}

impl Transform3D {
    /// Create an identity transformation
    pub fn identity() -> Self {
        Self {
            matrix: Matrix4::identity(),
        }
    }

    /// Create a translation transformation
    pub fn translation(translation: Vector3<f64>) -> Self {
        Self {
            matrix: Matrix4::new_translation(&translation),
        }
    }

    /// Create a rotation transformation from a quaternion
    pub fn rotation(rotation: UnitQuaternion<f64>) -> Self {
        Self {
            matrix: rotation.to_homogeneous(),
        }
    }

    /// Create a scaling transformation
    pub fn scaling(scale: Vector3<f64>) -> Self {
        Self {
            matrix: Matrix4::new_nonuniform_scaling(&scale),
        }
    }

    /// Create a uniform scaling transformation
    pub fn uniform_scaling(scale: f64) -> Self {
        Self {
            matrix: Matrix4::new_scaling(scale),
        }
    }

    /// Create a transformation from translation and rotation
    pub fn from_translation_rotation(
        translation: Vector3<f64>,
        rotation: UnitQuaternion<f64>,
    ) -> Self {
        let isometry = Isometry3::from_parts(translation.into(), rotation);
        Self {
            matrix: isometry.to_homogeneous(),
        }
    }

    /// Apply the transformation to a point.
    ///
    /// The point is lifted to homogeneous coordinates and the result is
    /// normalized by the homogeneous component; a zero homogeneous component
    /// leaves the point unchanged.
    pub fn transform_point(&self, point: &Point3<f64>) -> Point3<f64> {
        let homogeneous = self.matrix * point.to_homogeneous();
        Point3::from_homogeneous(homogeneous).unwrap_or(*point)
    }

    /// Apply the linear part of the transformation to a vector
    pub fn transform_vector(&self, vector: &Vector3<f64>) -> Vector3<f64> {
        self.matrix.fixed_view::<3, 3>(0, 0) * vector
    }

    /// Compose this transformation with another
    pub fn compose(self, other: Self) -> Self {
        Self {
            matrix: self.matrix * other.matrix,
        }
    }

    /// Get the inverse transformation
    pub fn inverse(self) -> Option<Self> {
        self.matrix.try_inverse().map(|matrix| Self { matrix })
    }

    /// Check if this is approximately the identity transformation
    pub fn is_identity(&self, epsilon: f64) -> bool {
        (self.matrix - Matrix4::identity()).norm() < epsilon
    }
}

impl Default for Transform3D {
    fn default() -> Self {
        Self::identity()
    }
}

impl std::ops::Mul for Transform3D {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        self.compose(rhs)
    }
}

impl From<Matrix4<f64>> for Transform3D {
    fn from(matrix: Matrix4<f64>) -> Self {
        Self { matrix }
    }
}

impl From<Isometry3<f64>> for Transform3D {
    fn from(isometry: Isometry3<f64>) -> Self {
        Self {
            matrix: isometry.to_homogeneous(),
        }
    }
}

/// Applies `transform` to every point in the slice.
pub(crate) fn transform_points(transform: &Transform3D, points: &mut [Point3d]) {
    for point in points.iter_mut() {
        *point = transform.transform_point(point);
    }
}

/// Shifts every point by `translation`, or by whatever shift moves the
/// centroid onto `translation` when `relative` is `false`.
pub(crate) fn translate_points(translation: &Vector3d, points: &mut [Point3d], relative: bool) {
    let shift = if relative {
        *translation
    } else {
        *translation - centroid(points).coords
    };
    for point in points.iter_mut() {
        *point += shift;
    }
}

/// Scales every point about the centroid (`center`) or about the origin.
pub(crate) fn scale_points(scale: f64, points: &mut [Point3d], center: bool) {
    let anchor = if center {
        centroid(points)
    } else {
        Point3d::origin()
    };
    for point in points.iter_mut() {
        *point = anchor + (*point - anchor) * scale;
    }
}

/// Rotates every point about the centroid (`center`) or about the origin.
pub(crate) fn rotate_points(rotation: &Matrix3<f64>, points: &mut [Point3d], center: bool) {
    let anchor = if center {
        centroid(points)
    } else {
        Point3d::origin()
    };
    for point in points.iter_mut() {
        *point = anchor + rotation * (*point - anchor);
    }
}
