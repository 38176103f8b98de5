//! Axis-aligned and oriented bounding boxes

use crate::point::{self, Point3d, Vector3d};
use crate::traits::{Geometry3D, GeometryType};
use nalgebra::Matrix3;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// An axis-aligned box described by its two extreme corners
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AxisAlignedBoundingBox {
    pub min_bound: Point3d,
    pub max_bound: Point3d,
}

impl AxisAlignedBoundingBox {
    /// Create a box from its extreme corners
    pub fn new(min_bound: Point3d, max_bound: Point3d) -> Self {
        Self {
            min_bound,
            max_bound,
        }
    }

    /// Fit the smallest axis-aligned box enclosing `points`.
    ///
    /// An empty input yields the zero box at the origin.
    pub fn from_points(points: &[Point3d]) -> Self {
        if points.is_empty() {
            log::warn!("fitting an axis-aligned bounding box to an empty point set");
            return Self::new(Point3d::origin(), Point3d::origin());
        }
        Self::new(point::min_bound(points), point::max_bound(points))
    }

    /// Side lengths of the box
    pub fn extent(&self) -> Vector3d {
        self.max_bound - self.min_bound
    }

    /// Half of the side lengths
    pub fn half_extent(&self) -> Vector3d {
        self.extent() * 0.5
    }

    /// Midpoint of the box
    pub fn center(&self) -> Point3d {
        Point3d::from((self.min_bound.coords + self.max_bound.coords) * 0.5)
    }

    /// Volume of the box
    pub fn volume(&self) -> f64 {
        self.extent().product()
    }

    /// The eight corners of the box in fixed order: the min corner, its
    /// displacements along x, y and z, the max corner, and its displacements
    /// along x, y and z:
    ///
    /// ```text
    /// 0: (min.x, min.y, min.z)    4: (max.x, max.y, max.z)
    /// 1: (max.x, min.y, min.z)    5: (min.x, max.y, max.z)
    /// 2: (min.x, max.y, min.z)    6: (max.x, min.y, max.z)
    /// 3: (min.x, min.y, max.z)    7: (max.x, max.y, min.z)
    /// ```
    pub fn corner_points(&self) -> [Point3d; 8] {
        let min = self.min_bound;
        let max = self.max_bound;
        [
            min,
            Point3d::new(max.x, min.y, min.z),
            Point3d::new(min.x, max.y, min.z),
            Point3d::new(min.x, min.y, max.z),
            max,
            Point3d::new(min.x, max.y, max.z),
            Point3d::new(max.x, min.y, max.z),
            Point3d::new(max.x, max.y, min.z),
        ]
    }
}

impl Geometry3D for AxisAlignedBoundingBox {
    fn geometry_type(&self) -> GeometryType {
        GeometryType::AxisAlignedBoundingBox
    }

    fn is_empty(&self) -> bool {
        self.volume() <= 0.0
    }

    fn min_bound(&self) -> Point3d {
        self.min_bound
    }

    fn max_bound(&self) -> Point3d {
        self.max_bound
    }

    fn center(&self) -> Point3d {
        AxisAlignedBoundingBox::center(self)
    }

    fn axis_aligned_bounding_box(&self) -> AxisAlignedBoundingBox {
        *self
    }

    fn oriented_bounding_box(&self) -> OrientedBoundingBox {
        OrientedBoundingBox::from_axis_aligned(self)
    }
}

/// A box with an arbitrary orientation, described by its center, a rotation
/// and the full side lengths along the rotated axes
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OrientedBoundingBox {
    pub center: Point3d,
    pub rotation: Matrix3<f64>,
    pub extent: Vector3d,
}

impl OrientedBoundingBox {
    /// Create a box from its center, rotation and full side lengths
    pub fn new(center: Point3d, rotation: Matrix3<f64>, extent: Vector3d) -> Self {
        Self {
            center,
            rotation,
            extent,
        }
    }

    /// The axis-aligned box reinterpreted as an oriented box with identity
    /// rotation
    pub fn from_axis_aligned(bounding_box: &AxisAlignedBoundingBox) -> Self {
        Self::new(
            bounding_box.center(),
            Matrix3::identity(),
            bounding_box.extent(),
        )
    }

    /// Fit an oriented box to `points` along their principal axes.
    ///
    /// The axes are the eigenvectors of the point covariance sorted by
    /// decreasing eigenvalue, with the third axis replaced by the cross
    /// product of the first two so the frame is right-handed. Extents come
    /// from the spread of the points projected into that frame. Degenerate
    /// inputs (collinear or coplanar sets) produce zero extents along the
    /// flat axes; an empty input yields the zero box at the origin.
    pub fn from_points(points: &[Point3d]) -> Self {
        if points.is_empty() {
            log::warn!("fitting an oriented bounding box to an empty point set");
            return Self::new(Point3d::origin(), Matrix3::identity(), Vector3d::zeros());
        }

        let mean = point::centroid(points);
        let mut covariance = Matrix3::zeros();
        for point in points {
            let offset = point - mean;
            covariance += offset * offset.transpose();
        }
        covariance /= points.len() as f64;

        let eigen = covariance.symmetric_eigen();
        let mut order = [0usize, 1, 2];
        order.sort_by(|&a, &b| {
            eigen.eigenvalues[b]
                .partial_cmp(&eigen.eigenvalues[a])
                .unwrap_or(Ordering::Equal)
        });
        let major = eigen.eigenvectors.column(order[0]).normalize();
        let minor = eigen.eigenvectors.column(order[1]).normalize();
        let rotation = Matrix3::from_columns(&[major, minor, major.cross(&minor)]);

        let mut local_min = Vector3d::repeat(f64::INFINITY);
        let mut local_max = Vector3d::repeat(f64::NEG_INFINITY);
        for point in points {
            let local = rotation.transpose() * (point - mean);
            local_min.x = local_min.x.min(local.x);
            local_min.y = local_min.y.min(local.y);
            local_min.z = local_min.z.min(local.z);
            local_max.x = local_max.x.max(local.x);
            local_max.y = local_max.y.max(local.y);
            local_max.z = local_max.z.max(local.z);
        }

        Self::new(
            mean + rotation * ((local_min + local_max) * 0.5),
            rotation,
            local_max - local_min,
        )
    }

    /// Volume of the box
    pub fn volume(&self) -> f64 {
        self.extent.product()
    }

    /// The eight corners of the box in fixed order. With the rotated
    /// half-axes `x`, `y`, `z` the corners relative to the center are:
    ///
    /// ```text
    /// 0: -x -y -z    4: +x +y +z
    /// 1: +x -y -z    5: -x +y +z
    /// 2: -x +y -z    6: +x -y +z
    /// 3: -x -y +z    7: +x +y -z
    /// ```
    pub fn corner_points(&self) -> [Point3d; 8] {
        let x = self.rotation * Vector3d::new(self.extent.x * 0.5, 0.0, 0.0);
        let y = self.rotation * Vector3d::new(0.0, self.extent.y * 0.5, 0.0);
        let z = self.rotation * Vector3d::new(0.0, 0.0, self.extent.z * 0.5);
        let center = self.center;
        [
            center - x - y - z,
            center + x - y - z,
            center - x + y - z,
            center - x - y + z,
            center + x + y + z,
            center - x + y + z,
            center + x - y + z,
            center + x + y - z,
        ]
    }
}

impl Geometry3D for OrientedBoundingBox {
    fn geometry_type(&self) -> GeometryType {
        GeometryType::OrientedBoundingBox
    }

    fn is_empty(&self) -> bool {
        self.volume() <= 0.0
    }

    fn min_bound(&self) -> Point3d {
        point::min_bound(&self.corner_points())
    }

    fn max_bound(&self) -> Point3d {
        point::max_bound(&self.corner_points())
    }

    fn center(&self) -> Point3d {
        self.center
    }

    fn axis_aligned_bounding_box(&self) -> AxisAlignedBoundingBox {
        AxisAlignedBoundingBox::from_points(&self.corner_points())
    }

    fn oriented_bounding_box(&self) -> OrientedBoundingBox {
        *self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use nalgebra::Rotation3;

    fn unit_box() -> AxisAlignedBoundingBox {
        AxisAlignedBoundingBox::new(Point3d::origin(), Point3d::new(1.0, 1.0, 1.0))
    }

    #[test]
    fn test_aabb_fit_takes_componentwise_extrema() {
        let points = vec![
            Point3d::new(1.0, -1.0, 2.0),
            Point3d::new(-3.0, 4.0, 0.0),
            Point3d::new(2.0, 1.0, -1.0),
        ];
        let bounding_box = AxisAlignedBoundingBox::from_points(&points);

        assert_eq!(bounding_box.min_bound, Point3d::new(-3.0, -1.0, -1.0));
        assert_eq!(bounding_box.max_bound, Point3d::new(2.0, 4.0, 2.0));
    }

    #[test]
    fn test_aabb_fit_of_empty_set_is_zero_box() {
        let bounding_box = AxisAlignedBoundingBox::from_points(&[]);

        assert_eq!(bounding_box.min_bound, Point3d::origin());
        assert_eq!(bounding_box.max_bound, Point3d::origin());
        assert!(bounding_box.is_empty());
    }

    #[test]
    fn test_aabb_measurements() {
        let bounding_box =
            AxisAlignedBoundingBox::new(Point3d::new(-1.0, 0.0, 1.0), Point3d::new(1.0, 4.0, 2.0));

        assert_relative_eq!(bounding_box.extent(), Vector3d::new(2.0, 4.0, 1.0));
        assert_relative_eq!(bounding_box.half_extent(), Vector3d::new(1.0, 2.0, 0.5));
        assert_relative_eq!(bounding_box.center(), Point3d::new(0.0, 2.0, 1.5));
        assert_relative_eq!(bounding_box.volume(), 8.0);
    }

    #[test]
    fn test_aabb_corner_order_displaces_min_along_each_axis() {
        let corners = unit_box().corner_points();

        assert_eq!(corners[0], Point3d::new(0.0, 0.0, 0.0));
        assert_eq!(corners[1], Point3d::new(1.0, 0.0, 0.0));
        assert_eq!(corners[2], Point3d::new(0.0, 1.0, 0.0));
        assert_eq!(corners[3], Point3d::new(0.0, 0.0, 1.0));
        assert_eq!(corners[4], Point3d::new(1.0, 1.0, 1.0));
        assert_eq!(corners[5], Point3d::new(0.0, 1.0, 1.0));
        assert_eq!(corners[6], Point3d::new(1.0, 0.0, 1.0));
        assert_eq!(corners[7], Point3d::new(1.0, 1.0, 0.0));
    }

    #[test]
    fn test_aabb_of_single_point_is_degenerate() {
        let point = Point3d::new(1.0, 2.0, 3.0);
        let bounding_box = AxisAlignedBoundingBox::from_points(&[point]);

        assert_eq!(bounding_box.min_bound, point);
        assert_eq!(bounding_box.max_bound, point);
        assert!(bounding_box.is_empty());
    }

    #[test]
    fn test_obb_from_axis_aligned_keeps_center_and_extent() {
        let oriented = OrientedBoundingBox::from_axis_aligned(&unit_box());

        assert_relative_eq!(oriented.center, Point3d::new(0.5, 0.5, 0.5));
        assert_relative_eq!(oriented.extent, Vector3d::new(1.0, 1.0, 1.0));
        assert_eq!(oriented.rotation, Matrix3::identity());
        assert_relative_eq!(oriented.volume(), 1.0);
    }

    #[test]
    fn test_obb_fit_recovers_grid_extents() {
        // Cartesian grid with distinct variances per axis, so the principal
        // axes are the coordinate axes up to sign.
        let mut points = Vec::new();
        for x in 0..6 {
            for y in 0..3 {
                for z in 0..2 {
                    points.push(Point3d::new(x as f64, y as f64, z as f64));
                }
            }
        }
        let oriented = OrientedBoundingBox::from_points(&points);

        let mut extents = [oriented.extent.x, oriented.extent.y, oriented.extent.z];
        extents.sort_by(|a, b| b.partial_cmp(a).unwrap());
        assert_relative_eq!(extents[0], 5.0, epsilon = 1e-9);
        assert_relative_eq!(extents[1], 2.0, epsilon = 1e-9);
        assert_relative_eq!(extents[2], 1.0, epsilon = 1e-9);
        assert_relative_eq!(oriented.center, Point3d::new(2.5, 1.0, 0.5), epsilon = 1e-9);
        assert_relative_eq!(oriented.volume(), 10.0, epsilon = 1e-9);
    }

    #[test]
    fn test_obb_fit_of_empty_set_is_zero_box() {
        let oriented = OrientedBoundingBox::from_points(&[]);

        assert_eq!(oriented.center, Point3d::origin());
        assert_eq!(oriented.rotation, Matrix3::identity());
        assert_eq!(oriented.extent, Vector3d::zeros());
        assert!(oriented.is_empty());
    }

    #[test]
    fn test_obb_fit_of_collinear_points_has_zero_cross_extents() {
        let points: Vec<_> = (0..5)
            .map(|i| Point3d::new(i as f64, i as f64, 0.0))
            .collect();
        let oriented = OrientedBoundingBox::from_points(&points);

        let mut extents = [oriented.extent.x, oriented.extent.y, oriented.extent.z];
        extents.sort_by(|a, b| b.partial_cmp(a).unwrap());
        assert_relative_eq!(extents[0], 32.0_f64.sqrt(), epsilon = 1e-9);
        assert_relative_eq!(extents[1], 0.0, epsilon = 1e-9);
        assert_relative_eq!(extents[2], 0.0, epsilon = 1e-9);
    }

    #[test]
    fn test_obb_corners_of_identity_rotation_match_aabb_corners() {
        let oriented = OrientedBoundingBox::from_axis_aligned(&unit_box());
        let corners = oriented.corner_points();

        assert_relative_eq!(corners[0], Point3d::new(0.0, 0.0, 0.0));
        assert_relative_eq!(corners[1], Point3d::new(1.0, 0.0, 0.0));
        assert_relative_eq!(corners[2], Point3d::new(0.0, 1.0, 0.0));
        assert_relative_eq!(corners[3], Point3d::new(0.0, 0.0, 1.0));
        assert_relative_eq!(corners[4], Point3d::new(1.0, 1.0, 1.0));
    }

    #[test]
    fn test_rotated_obb_bounds_derive_from_corners() {
        let rotation = Rotation3::from_axis_angle(&nalgebra::Vector3::z_axis(), std::f64::consts::FRAC_PI_4);
        let oriented = OrientedBoundingBox::new(
            Point3d::origin(),
            rotation.into_inner(),
            Vector3d::new(2.0, 2.0, 2.0),
        );

        // A unit cube rotated by 45 degrees about z spans sqrt(2) in x and y.
        let expected = std::f64::consts::SQRT_2;
        assert_relative_eq!(oriented.min_bound(), Point3d::new(-expected, -expected, -1.0), epsilon = 1e-12);
        assert_relative_eq!(oriented.max_bound(), Point3d::new(expected, expected, 1.0), epsilon = 1e-12);

        let axis_aligned = oriented.axis_aligned_bounding_box();
        assert_relative_eq!(axis_aligned.min_bound, oriented.min_bound(), epsilon = 1e-12);
        assert_relative_eq!(axis_aligned.max_bound, oriented.max_bound(), epsilon = 1e-12);
    }
}
