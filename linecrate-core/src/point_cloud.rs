//! Point cloud data structures

use crate::bounding_box::{AxisAlignedBoundingBox, OrientedBoundingBox};
use crate::point::{self, Point3d, Vector3d};
use crate::traits::{Geometry3D, GeometryType, Transformable};
use crate::transform::{
    rotate_points, scale_points, transform_points, translate_points, Transform3D,
};
use nalgebra::Matrix3;
use serde::{Deserialize, Serialize};

/// A collection of points of type `T`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PointCloud<T> {
    pub points: Vec<T>,
}

/// A point cloud over 3D points
pub type PointCloud3d = PointCloud<Point3d>;

impl<T> PointCloud<T> {
    /// Create a new empty point cloud
    pub fn new() -> Self {
        Self { points: Vec::new() }
    }

    /// Create a point cloud with pre-allocated capacity
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            points: Vec::with_capacity(capacity),
        }
    }

    /// Create a point cloud from a vector of points
    pub fn from_points(points: Vec<T>) -> Self {
        Self { points }
    }

    /// Get the number of points
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Check if the point cloud is empty
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Add a point to the cloud
    pub fn push(&mut self, point: T) {
        self.points.push(point);
    }

    /// Get an iterator over the points
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.points.iter()
    }

    /// Get a mutable iterator over the points
    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, T> {
        self.points.iter_mut()
    }

    /// Remove all points
    pub fn clear(&mut self) {
        self.points.clear();
    }
}

impl<T> Default for PointCloud<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> std::ops::Index<usize> for PointCloud<T> {
    type Output = T;

    fn index(&self, index: usize) -> &Self::Output {
        &self.points[index]
    }
}

impl<T> IntoIterator for PointCloud<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a PointCloud<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}

impl<T> FromIterator<T> for PointCloud<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            points: iter.into_iter().collect(),
        }
    }
}

impl<T> Extend<T> for PointCloud<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.points.extend(iter);
    }
}

impl Geometry3D for PointCloud3d {
    fn geometry_type(&self) -> GeometryType {
        GeometryType::PointCloud
    }

    fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    fn min_bound(&self) -> Point3d {
        point::min_bound(&self.points)
    }

    fn max_bound(&self) -> Point3d {
        point::max_bound(&self.points)
    }

    fn center(&self) -> Point3d {
        point::centroid(&self.points)
    }

    fn axis_aligned_bounding_box(&self) -> AxisAlignedBoundingBox {
        AxisAlignedBoundingBox::from_points(&self.points)
    }

    fn oriented_bounding_box(&self) -> OrientedBoundingBox {
        OrientedBoundingBox::from_points(&self.points)
    }
}

impl Transformable for PointCloud3d {
    fn transform(&mut self, transform: &Transform3D) {
        transform_points(transform, &mut self.points);
    }

    fn translate(&mut self, translation: &Vector3d, relative: bool) {
        translate_points(translation, &mut self.points, relative);
    }

    fn scale(&mut self, scale: f64, center: bool) {
        scale_points(scale, &mut self.points, center);
    }

    fn rotate(&mut self, rotation: &Matrix3<f64>, center: bool) {
        rotate_points(rotation, &mut self.points, center);
    }
}
