//! Mesh data structures whose edges can be extracted as line sets

use crate::bounding_box::{AxisAlignedBoundingBox, OrientedBoundingBox};
use crate::point::{self, Point3d, Vector3d};
use crate::traits::{Geometry3D, GeometryType, Transformable};
use crate::transform::{
    rotate_points, scale_points, transform_points, translate_points, Transform3D,
};
use nalgebra::Matrix3;
use serde::{Deserialize, Serialize};

/// A triangle mesh with vertices and faces
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TriangleMesh {
    pub vertices: Vec<Point3d>,
    pub faces: Vec<[usize; 3]>,
}

/// A tetrahedral mesh with vertices and tetrahedra
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TetraMesh {
    pub vertices: Vec<Point3d>,
    pub tetras: Vec<[usize; 4]>,
}

impl TriangleMesh {
    /// Create a new empty mesh
    pub fn new() -> Self {
        Self {
            vertices: Vec::new(),
            faces: Vec::new(),
        }
    }

    /// Create a mesh from vertices and faces
    pub fn from_vertices_and_faces(vertices: Vec<Point3d>, faces: Vec<[usize; 3]>) -> Self {
        Self { vertices, faces }
    }

    /// Get the number of vertices
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Get the number of faces
    pub fn face_count(&self) -> usize {
        self.faces.len()
    }

    /// Check if the mesh has no vertices
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Add a vertex to the mesh, returning its index
    pub fn add_vertex(&mut self, vertex: Point3d) -> usize {
        let index = self.vertices.len();
        self.vertices.push(vertex);
        index
    }

    /// Add a face to the mesh
    pub fn add_face(&mut self, face: [usize; 3]) {
        self.faces.push(face);
    }

    /// Clear the mesh
    pub fn clear(&mut self) {
        self.vertices.clear();
        self.faces.clear();
    }
}

impl Default for TriangleMesh {
    fn default() -> Self {
        Self::new()
    }
}

impl TetraMesh {
    /// Create a new empty mesh
    pub fn new() -> Self {
        Self {
            vertices: Vec::new(),
            tetras: Vec::new(),
        }
    }

    /// Create a mesh from vertices and tetrahedra
    pub fn from_vertices_and_tetras(vertices: Vec<Point3d>, tetras: Vec<[usize; 4]>) -> Self {
        Self { vertices, tetras }
    }

    /// Get the number of vertices
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Get the number of tetrahedra
    pub fn tetra_count(&self) -> usize {
        self.tetras.len()
    }

    /// Check if the mesh has no vertices
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Add a vertex to the mesh, returning its index
    pub fn add_vertex(&mut self, vertex: Point3d) -> usize {
        let index = self.vertices.len();
        self.vertices.push(vertex);
        index
    }

    /// Add a tetrahedron to the mesh
    pub fn add_tetra(&mut self, tetra: [usize; 4]) {
        self.tetras.push(tetra);
    }

    /// Clear the mesh
    pub fn clear(&mut self) {
        self.vertices.clear();
        self.tetras.clear();
    }
}

impl Default for TetraMesh {
    fn default() -> Self {
        Self::new()
    }
}

impl Geometry3D for TriangleMesh {
    fn geometry_type(&self) -> GeometryType {
        GeometryType::TriangleMesh
    }

    fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    fn min_bound(&self) -> Point3d {
        point::min_bound(&self.vertices)
    }

    fn max_bound(&self) -> Point3d {
        point::max_bound(&self.vertices)
    }

    fn center(&self) -> Point3d {
        point::centroid(&self.vertices)
    }

    fn axis_aligned_bounding_box(&self) -> AxisAlignedBoundingBox {
        AxisAlignedBoundingBox::from_points(&self.vertices)
    }

    fn oriented_bounding_box(&self) -> OrientedBoundingBox {
        OrientedBoundingBox::from_points(&self.vertices)
    }
}

impl Transformable for TriangleMesh {
    fn transform(&mut self, transform: &Transform3D) {
        transform_points(transform, &mut self.vertices);
    }

    fn translate(&mut self, translation: &Vector3d, relative: bool) {
        translate_points(translation, &mut self.vertices, relative);
    }

    fn scale(&mut self, scale: f64, center: bool) {
        scale_points(scale, &mut self.vertices, center);
    }

    fn rotate(&mut self, rotation: &Matrix3<f64>, center: bool) {
        rotate_points(rotation, &mut self.vertices, center);
    }
}

impl Geometry3D for TetraMesh {
    fn geometry_type(&self) -> GeometryType {
        GeometryType::TetraMesh
    }

    fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    fn min_bound(&self) -> Point3d {
        point::min_bound(&self.vertices)
    }

    fn max_bound(&self) -> Point3d {
        point::max_bound(&self.vertices)
    }

    fn center(&self) -> Point3d {
        point::centroid(&self.vertices)
    }

    fn axis_aligned_bounding_box(&self) -> AxisAlignedBoundingBox {
        AxisAlignedBoundingBox::from_points(&self.vertices)
    }

    fn oriented_bounding_box(&self) -> OrientedBoundingBox {
        OrientedBoundingBox::from_points(&self.vertices)
    }
}

impl Transformable for TetraMesh {
    fn transform(&mut self, transform: &Transform3D) {
        transform_points(transform, &mut self.vertices);
    }

    fn translate(&mut self, translation: &Vector3d, relative: bool) {
        translate_points(translation, &mut self.vertices, relative);
    }

    fn scale(&mut self, scale: f64, center: bool) {
        scale_points(scale, &mut self.vertices, center);
    }

    fn rotate(&mut self, rotation: &Matrix3<f64>, center: bool) {
        rotate_points(rotation, &mut self.vertices, center);
    }
}
