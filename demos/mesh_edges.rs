//! Mesh edge extraction example for linecrate
//!
//! This example demonstrates turning mesh connectivity into line sets:
//! - Unique-edge extraction from a triangle mesh
//! - Unique-edge extraction from a tetrahedral mesh
//! - Combining the extracted wireframes

use linecrate_core::{LineSet, Mesh, TetraMesh};
use nalgebra::{Point3, Vector3};

fn main() -> anyhow::Result<()> {
    env_logger::init();

    println!("Mesh Edge Extraction Example");
    println!("============================");

    // 1. Triangle mesh edges
    println!("\n1. Triangle Mesh");
    println!("----------------");
    let strip = build_quad_strip(6);
    println!(
        "✓ Built strip with {} vertices and {} faces",
        strip.vertex_count(),
        strip.face_count()
    );
    let mut strip_edges = LineSet::from_triangle_mesh(&strip);
    println!(
        "✓ Extracted {} unique edges from {} face edge slots",
        strip_edges.line_count(),
        strip.face_count() * 3
    );
    println!(
        "  - {} edge slots were shared between adjacent faces",
        strip.face_count() * 3 - strip_edges.line_count()
    );

    // 2. Tetrahedral mesh edges
    println!("\n2. Tetrahedral Mesh");
    println!("-------------------");
    let pair = build_tetra_pair();
    println!(
        "✓ Built pair with {} vertices and {} tetrahedra",
        pair.vertex_count(),
        pair.tetra_count()
    );
    let tetra_edges = LineSet::from_tetra_mesh(&pair);
    println!(
        "✓ Extracted {} unique edges from {} tetrahedron edge slots",
        tetra_edges.line_count(),
        pair.tetra_count() * 6
    );

    // 3. Combine and paint
    println!("\n3. Combined Wireframe");
    println!("---------------------");
    strip_edges.paint_uniform_color(Vector3::new(0.2, 0.4, 1.0));
    let mut combined = &strip_edges + &tetra_edges;
    println!(
        "✓ Union holds {} points and {} lines (colors kept: {})",
        combined.point_count(),
        combined.line_count(),
        combined.has_colors()
    );
    combined.paint_uniform_color(Vector3::new(0.2, 0.4, 1.0));
    println!("✓ Repainted all {} lines", combined.colors.len());

    println!("\n✅ Mesh edge extraction example completed successfully!");
    Ok(())
}

/// A strip of quads in the XY plane, each split into two triangles
fn build_quad_strip(quads: usize) -> Mesh {
    let mut mesh = Mesh::new();
    for i in 0..=quads {
        mesh.add_vertex(Point3::new(i as f64, 0.0, 0.0));
        mesh.add_vertex(Point3::new(i as f64, 1.0, 0.0));
    }
    for i in 0..quads {
        let base = 2 * i;
        mesh.add_face([base, base + 2, base + 1]);
        mesh.add_face([base + 1, base + 2, base + 3]);
    }
    mesh
}

/// Two tetrahedra sharing a triangular face
fn build_tetra_pair() -> TetraMesh {
    let mut mesh = TetraMesh::new();
    mesh.add_vertex(Point3::new(0.0, 0.0, 0.0));
    mesh.add_vertex(Point3::new(1.0, 0.0, 0.0));
    mesh.add_vertex(Point3::new(0.5, 1.0, 0.0));
    mesh.add_vertex(Point3::new(0.5, 0.5, 1.0));
    mesh.add_vertex(Point3::new(0.5, 0.5, -1.0));
    mesh.add_tetra([0, 1, 2, 3]);
    mesh.add_tetra([0, 1, 2, 4]);
    mesh
}
