//! Line set geometry: 3D points joined by indexed, optionally colored segments

use crate::bounding_box::{AxisAlignedBoundingBox, OrientedBoundingBox};
use crate::error::{Error, Result};
use crate::mesh::{TetraMesh, TriangleMesh};
use crate::point::{self, Point3d, Vector3d};
use crate::point_cloud::PointCloud3d;
use crate::traits::{Geometry3D, GeometryType, Transformable};
use crate::transform::{
    rotate_points, scale_points, transform_points, translate_points, Transform3D,
};
use nalgebra::Matrix3;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::ops::{Add, AddAssign};

/// Wireframe edges over an 8-corner box enumeration: the bottom face ring,
/// the top face ring, then the four pillars joining them.
const BOX_WIREFRAME_EDGES: [[usize; 2]; 12] = [
    [0, 1],
    [1, 7],
    [7, 2],
    [2, 0],
    [3, 6],
    [6, 4],
    [4, 5],
    [5, 3],
    [0, 3],
    [1, 6],
    [7, 4],
    [2, 5],
];

/// A set of 3D points joined pairwise by indexed line segments
///
/// `lines` holds ordered pairs of indices into `points`; `colors` is parallel
/// to `lines` when present (RGB in [0, 1] by convention). Indices are not
/// validated on construction; [`LineSet::line_coordinate`] checks them on
/// access.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineSet {
    pub points: Vec<Point3d>,
    pub lines: Vec<[usize; 2]>,
    pub colors: Vec<Vector3d>,
}

impl LineSet {
    /// Create a new empty line set
    pub fn new() -> Self {
        Self {
            points: Vec::new(),
            lines: Vec::new(),
            colors: Vec::new(),
        }
    }

    /// Create a line set from point and line lists, with no colors
    pub fn from_points_and_lines(points: Vec<Point3d>, lines: Vec<[usize; 2]>) -> Self {
        Self {
            points,
            lines,
            colors: Vec::new(),
        }
    }

    /// Get the number of points
    pub fn point_count(&self) -> usize {
        self.points.len()
    }

    /// Get the number of lines
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Check if the set contains any points
    pub fn has_points(&self) -> bool {
        !self.points.is_empty()
    }

    /// Check if the set contains any lines; lines without points do not count
    pub fn has_lines(&self) -> bool {
        self.has_points() && !self.lines.is_empty()
    }

    /// Check if every line carries a color
    pub fn has_colors(&self) -> bool {
        self.has_lines() && self.colors.len() == self.lines.len()
    }

    /// Check if the set has no points
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Remove all points, lines and colors
    pub fn clear(&mut self) -> &mut Self {
        self.points.clear();
        self.lines.clear();
        self.colors.clear();
        self
    }

    /// Componentwise minimum over all points, the origin when empty
    pub fn min_bound(&self) -> Point3d {
        point::min_bound(&self.points)
    }

    /// Componentwise maximum over all points, the origin when empty
    pub fn max_bound(&self) -> Point3d {
        point::max_bound(&self.points)
    }

    /// Arithmetic mean of all points, the origin when empty
    pub fn center(&self) -> Point3d {
        point::centroid(&self.points)
    }

    /// Fit an axis-aligned bounding box to the points
    pub fn axis_aligned_bounding_box(&self) -> AxisAlignedBoundingBox {
        AxisAlignedBoundingBox::from_points(&self.points)
    }

    /// Fit an oriented bounding box to the points
    pub fn oriented_bounding_box(&self) -> OrientedBoundingBox {
        OrientedBoundingBox::from_points(&self.points)
    }

    /// Apply a homogeneous transform to every point, normalizing by the
    /// homogeneous component. Lines and colors are unaffected.
    pub fn transform(&mut self, transform: &Transform3D) -> &mut Self {
        transform_points(transform, &mut self.points);
        self
    }

    /// Translate every point by `translation` when `relative`, otherwise
    /// move the center onto `translation`
    pub fn translate(&mut self, translation: &Vector3d, relative: bool) -> &mut Self {
        translate_points(translation, &mut self.points, relative);
        self
    }

    /// Scale the points about their centroid when `center`, otherwise about
    /// the origin
    pub fn scale(&mut self, scale: f64, center: bool) -> &mut Self {
        scale_points(scale, &mut self.points, center);
        self
    }

    /// Rotate the points about their centroid when `center`, otherwise about
    /// the origin
    pub fn rotate(&mut self, rotation: &Matrix3<f64>, center: bool) -> &mut Self {
        rotate_points(rotation, &mut self.points, center);
        self
    }

    /// Give every line the same color, discarding prior colors.
    ///
    /// Components outside [0, 1] are clamped with a warning.
    pub fn paint_uniform_color(&mut self, color: Vector3d) -> &mut Self {
        let mut painted = color;
        if color.min() < 0.0 || color.max() > 1.0 {
            log::warn!(
                "color [{}, {}, {}] lies outside [0, 1], clamping",
                color.x,
                color.y,
                color.z
            );
            painted = Vector3d::new(
                color.x.clamp(0.0, 1.0),
                color.y.clamp(0.0, 1.0),
                color.z.clamp(0.0, 1.0),
            );
        }
        self.colors.clear();
        self.colors.resize(self.lines.len(), painted);
        self
    }

    /// Get the endpoint coordinates of line `line_index`.
    ///
    /// # Returns
    /// The two endpoints in stored order, or `Error::IndexOutOfRange` when
    /// the line index or either of its point indices is out of range.
    pub fn line_coordinate(&self, line_index: usize) -> Result<(Point3d, Point3d)> {
        let line = self.lines.get(line_index).ok_or(Error::IndexOutOfRange {
            kind: "line",
            index: line_index,
            len: self.lines.len(),
        })?;
        let endpoint = |index: usize| {
            self.points
                .get(index)
                .copied()
                .ok_or(Error::IndexOutOfRange {
                    kind: "point",
                    index,
                    len: self.points.len(),
                })
        };
        Ok((endpoint(line[0])?, endpoint(line[1])?))
    }

    /// Build a line set connecting corresponding points of two clouds.
    ///
    /// Each pair `(a, b)` contributes a fresh copy of `cloud0[a]` and
    /// `cloud1[b]` plus the line joining them, so the result has twice as
    /// many points as lines. Coincident source points are not shared and
    /// line order matches correspondence order.
    ///
    /// # Returns
    /// The connecting line set, or `Error::IndexOutOfRange` when a
    /// correspondence index exceeds its cloud.
    pub fn from_point_cloud_correspondences(
        cloud0: &PointCloud3d,
        cloud1: &PointCloud3d,
        correspondences: &[(usize, usize)],
    ) -> Result<Self> {
        let mut points = Vec::with_capacity(correspondences.len() * 2);
        let mut lines = Vec::with_capacity(correspondences.len());
        for (pair_index, &(source, target)) in correspondences.iter().enumerate() {
            let start = cloud0
                .points
                .get(source)
                .copied()
                .ok_or(Error::IndexOutOfRange {
                    kind: "correspondence",
                    index: source,
                    len: cloud0.len(),
                })?;
            let end = cloud1
                .points
                .get(target)
                .copied()
                .ok_or(Error::IndexOutOfRange {
                    kind: "correspondence",
                    index: target,
                    len: cloud1.len(),
                })?;
            points.push(start);
            points.push(end);
            lines.push([2 * pair_index, 2 * pair_index + 1]);
        }
        Ok(Self {
            points,
            lines,
            colors: Vec::new(),
        })
    }

    /// Build the 12-edge wireframe of an oriented bounding box over its 8
    /// corners in the box's documented corner order
    pub fn from_oriented_bounding_box(bounding_box: &OrientedBoundingBox) -> Self {
        Self {
            points: bounding_box.corner_points().to_vec(),
            lines: BOX_WIREFRAME_EDGES.to_vec(),
            colors: Vec::new(),
        }
    }

    /// Build the 12-edge wireframe of an axis-aligned bounding box over its
    /// 8 corners in the box's documented corner order
    pub fn from_axis_aligned_bounding_box(bounding_box: &AxisAlignedBoundingBox) -> Self {
        Self {
            points: bounding_box.corner_points().to_vec(),
            lines: BOX_WIREFRAME_EDGES.to_vec(),
            colors: Vec::new(),
        }
    }

    /// Build a line set from the unique undirected edges of a triangle mesh.
    ///
    /// Vertices are copied with their indexing intact. Each face contributes
    /// its three edges; edges shared between faces appear once, in first-seen
    /// traversal order with the orientation of their first appearance.
    pub fn from_triangle_mesh(mesh: &TriangleMesh) -> Self {
        let mut lines = Vec::new();
        let mut seen = HashSet::with_capacity(mesh.faces.len() * 3);
        for face in &mesh.faces {
            insert_edge(&mut lines, &mut seen, face[0], face[1]);
            insert_edge(&mut lines, &mut seen, face[1], face[2]);
            insert_edge(&mut lines, &mut seen, face[2], face[0]);
        }
        Self {
            points: mesh.vertices.clone(),
            lines,
            colors: Vec::new(),
        }
    }

    /// Build a line set from the unique undirected edges of a tetrahedral
    /// mesh.
    ///
    /// Each tetrahedron contributes all six vertex pairs, deduplicated and
    /// ordered the same way as [`LineSet::from_triangle_mesh`].
    pub fn from_tetra_mesh(mesh: &TetraMesh) -> Self {
        let mut lines = Vec::new();
        let mut seen = HashSet::with_capacity(mesh.tetras.len() * 6);
        for tetra in &mesh.tetras {
            insert_edge(&mut lines, &mut seen, tetra[0], tetra[1]);
            insert_edge(&mut lines, &mut seen, tetra[1], tetra[2]);
            insert_edge(&mut lines, &mut seen, tetra[2], tetra[0]);
            insert_edge(&mut lines, &mut seen, tetra[0], tetra[3]);
            insert_edge(&mut lines, &mut seen, tetra[1], tetra[3]);
            insert_edge(&mut lines, &mut seen, tetra[2], tetra[3]);
        }
        Self {
            points: mesh.vertices.clone(),
            lines,
            colors: Vec::new(),
        }
    }
}

/// Record the edge `a`-`b` unless its undirected key was already seen
fn insert_edge(
    lines: &mut Vec<[usize; 2]>,
    seen: &mut HashSet<(usize, usize)>,
    a: usize,
    b: usize,
) {
    if seen.insert((a.min(b), a.max(b))) {
        lines.push([a, b]);
    }
}

impl Default for LineSet {
    fn default() -> Self {
        Self::new()
    }
}

impl AddAssign<&LineSet> for LineSet {
    /// Append another line set: points are appended, incoming lines are
    /// re-based past the prior point count. Colors survive only when the
    /// 1:1 color/line pairing holds for the combined set; anything else
    /// drops them.
    fn add_assign(&mut self, rhs: &LineSet) {
        if rhs.is_empty() {
            return;
        }
        let point_offset = self.points.len();
        let line_offset = self.lines.len();
        if (!self.has_lines() || self.has_colors()) && rhs.has_colors() {
            self.colors.resize(line_offset, Vector3d::zeros());
            self.colors.extend_from_slice(&rhs.colors);
        } else {
            self.colors.clear();
        }
        self.points.extend_from_slice(&rhs.points);
        self.lines.extend(
            rhs.lines
                .iter()
                .map(|line| [line[0] + point_offset, line[1] + point_offset]),
        );
    }
}

impl Add<&LineSet> for &LineSet {
    type Output = LineSet;

    fn add(self, rhs: &LineSet) -> LineSet {
        let mut combined = self.clone();
        combined += rhs;
        combined
    }
}

impl Geometry3D for LineSet {
    fn geometry_type(&self) -> GeometryType {
        GeometryType::LineSet
    }

    fn is_empty(&self) -> bool {
        LineSet::is_empty(self)
    }

    fn min_bound(&self) -> Point3d {
        LineSet::min_bound(self)
    }

    fn max_bound(&self) -> Point3d {
        LineSet::max_bound(self)
    }

    fn center(&self) -> Point3d {
        LineSet::center(self)
    }

    fn axis_aligned_bounding_box(&self) -> AxisAlignedBoundingBox {
        LineSet::axis_aligned_bounding_box(self)
    }

    fn oriented_bounding_box(&self) -> OrientedBoundingBox {
        LineSet::oriented_bounding_box(self)
    }
}

impl Transformable for LineSet {
    fn transform(&mut self, transform: &Transform3D) {
        LineSet::transform(self, transform);
    }

    fn translate(&mut self, translation: &Vector3d, relative: bool) {
        LineSet::translate(self, translation, relative);
    }

    fn scale(&mut self, scale: f64, center: bool) {
        LineSet::scale(self, scale, center);
    }

    fn rotate(&mut self, rotation: &Matrix3<f64>, center: bool) {
        LineSet::rotate(self, rotation, center);
    }
}
