//! Point types and shared point-set helpers

use nalgebra::{Point3, Vector3};

/// A 3D point with double precision coordinates
pub type Point3d = Point3<f64>;

/// A 3D vector with double precision components
pub type Vector3d = Vector3<f64>;

/// Componentwise minimum over a point set; the origin if the set is empty.
pub fn min_bound(points: &[Point3d]) -> Point3d {
    let mut min = match points.first() {
        Some(first) => *first,
        None => return Point3d::origin(),
    };
    for point in &points[1..] {
        min.x = min.x.min(point.x);
        min.y = min.y.min(point.y);
        min.z = min.z.min(point.z);
    }
    min
}

/// Componentwise maximum over a point set; the origin if the set is empty.
pub fn max_bound(points: &[Point3d]) -> Point3d {
    let mut max = match points.first() {
        Some(first) => *first,
        None => return Point3d::origin(),
    };
    for point in &points[1..] {
        max.x = max.x.max(point.x);
        max.y = max.y.max(point.y);
        max.z = max.z.max(point.z);
    }
    max
}

/// Arithmetic mean of a point set; the origin if the set is empty.
pub fn centroid(points: &[Point3d]) -> Point3d {
    if points.is_empty() {
        return Point3d::origin();
    }
    let sum = points
        .iter()
        .fold(Vector3d::zeros(), |acc, point| acc + point.coords);
    Point3d::from(sum / points.len() as f64)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_bounds_of_point_set() {
        let points = vec![
            Point3d::new(1.0, -2.0, 3.0),
            Point3d::new(-1.0, 5.0, 0.5),
            Point3d::new(0.0, 0.0, -4.0),
        ];

        assert_eq!(min_bound(&points), Point3d::new(-1.0, -2.0, -4.0));
        assert_eq!(max_bound(&points), Point3d::new(1.0, 5.0, 3.0));
    }

    #[test]
    fn test_bounds_of_empty_set_fall_back_to_origin() {
        assert_eq!(min_bound(&[]), Point3d::origin());
        assert_eq!(max_bound(&[]), Point3d::origin());
        assert_eq!(centroid(&[]), Point3d::origin());
    }

    #[test]
    fn test_centroid_is_arithmetic_mean() {
        let points = vec![
            Point3d::new(0.0, 0.0, 0.0),
            Point3d::new(2.0, 0.0, 0.0),
            Point3d::new(0.0, 2.0, 0.0),
            Point3d::new(0.0, 0.0, 2.0),
        ];

        assert_relative_eq!(centroid(&points), Point3d::new(0.5, 0.5, 0.5));
    }

    #[test]
    fn test_single_point_bounds_are_the_point() {
        let points = vec![Point3d::new(1.5, 2.5, 3.5)];

        assert_eq!(min_bound(&points), points[0]);
        assert_eq!(max_bound(&points), points[0]);
        assert_eq!(centroid(&points), points[0]);
    }
}
