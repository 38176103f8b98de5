//! Core traits for linecrate

use crate::bounding_box::{AxisAlignedBoundingBox, OrientedBoundingBox};
use crate::point::{Point3d, Vector3d};
use crate::transform::Transform3D;
use nalgebra::Matrix3;

/// Tags the concrete shape behind a [`Geometry3D`] value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GeometryType {
    PointCloud,
    LineSet,
    TriangleMesh,
    TetraMesh,
    AxisAlignedBoundingBox,
    OrientedBoundingBox,
}

/// Common contract for 3D geometries.
///
/// Queries on empty geometry fall back to zero values instead of failing:
/// bounds and centers of an empty point set are the origin, and the fitted
/// bounding boxes are zero boxes.
pub trait Geometry3D {
    /// The type tag of the concrete geometry
    fn geometry_type(&self) -> GeometryType;

    /// Returns `true` iff the geometry carries no coordinate data
    fn is_empty(&self) -> bool;

    /// Componentwise minimum of the geometry coordinates
    fn min_bound(&self) -> Point3d;

    /// Componentwise maximum of the geometry coordinates
    fn max_bound(&self) -> Point3d;

    /// Center of the geometry coordinates
    fn center(&self) -> Point3d;

    /// Fit an axis-aligned bounding box to the geometry coordinates
    fn axis_aligned_bounding_box(&self) -> AxisAlignedBoundingBox;

    /// Fit an oriented bounding box to the geometry coordinates
    fn oriented_bounding_box(&self) -> OrientedBoundingBox;
}

/// Trait for geometries whose coordinates can be transformed in place.
///
/// Only coordinate data moves; topology (line and cell indices) and colors
/// are unaffected by every operation here.
pub trait Transformable {
    /// Apply a homogeneous transformation to the coordinates
    fn transform(&mut self, transform: &Transform3D);

    /// Add `translation` to the coordinates, or move their centroid onto
    /// `translation` when `relative` is `false`
    fn translate(&mut self, translation: &Vector3d, relative: bool);

    /// Scale the coordinates about their centroid (`center`) or the origin
    fn scale(&mut self, scale: f64, center: bool);

    /// Rotate the coordinates about their centroid (`center`) or the origin
    fn rotate(&mut self, rotation: &Matrix3<f64>, center: bool);
}
