//! Core data structures and traits for linecrate
//!
//! This crate provides the line-set geometry model: 3D points joined by
//! indexed line segments with optional per-line colors, together with the
//! point cloud, mesh and bounding-box types that line sets are built from.

pub mod point;
pub mod point_cloud;
pub mod mesh;
pub mod line_set;
pub mod bounding_box;
pub mod traits;
pub mod transform;
pub mod error;

pub use point::*;
pub use point_cloud::*;
pub use mesh::*;
pub use line_set::*;
pub use bounding_box::*;
pub use traits::*;
pub use transform::*;
pub use error::*;

/// Re-export commonly used types from nalgebra
pub use nalgebra::{Isometry3, Matrix3, Matrix4, Point3, UnitQuaternion, Vector3};

// Type aliases for easier imports
pub type Point = Point3d;
pub type Mesh = TriangleMesh;
