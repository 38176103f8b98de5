//! Box wireframe example for linecrate
//!
//! This example demonstrates bounding-volume derivation:
//! - Fitting axis-aligned and oriented boxes to a synthetic point cloud
//! - Turning both boxes into 12-edge wireframe line sets
//! - Painting and combining the wireframes

use linecrate_core::{Geometry3D, LineSet, PointCloud3d};
use nalgebra::{Point3, UnitQuaternion, Vector3};
use rand::Rng;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    println!("Box Wireframe Example");
    println!("=====================");

    let cloud = create_tilted_slab();
    println!("✓ Created sample point cloud with {} points", cloud.len());

    // 1. Axis-aligned bounding box
    println!("\n1. Axis-aligned Bounding Box");
    println!("----------------------------");
    let axis_aligned = cloud.axis_aligned_bounding_box();
    println!(
        "✓ Fitted box from ({:.2}, {:.2}, {:.2}) to ({:.2}, {:.2}, {:.2})",
        axis_aligned.min_bound.x,
        axis_aligned.min_bound.y,
        axis_aligned.min_bound.z,
        axis_aligned.max_bound.x,
        axis_aligned.max_bound.y,
        axis_aligned.max_bound.z
    );
    println!("  - Volume: {:.3}", axis_aligned.volume());

    let mut frame = LineSet::from_axis_aligned_bounding_box(&axis_aligned);
    frame.paint_uniform_color(Vector3::new(0.9, 0.1, 0.1));
    println!(
        "✓ Built wireframe with {} points and {} lines (colored: {})",
        frame.point_count(),
        frame.line_count(),
        frame.has_colors()
    );

    // 2. Oriented bounding box
    println!("\n2. Oriented Bounding Box");
    println!("------------------------");
    let oriented = cloud.oriented_bounding_box();
    println!(
        "✓ Fitted box centered at ({:.2}, {:.2}, {:.2})",
        oriented.center.x, oriented.center.y, oriented.center.z
    );
    println!(
        "  - Extent: [{:.3}, {:.3}, {:.3}]",
        oriented.extent.x, oriented.extent.y, oriented.extent.z
    );
    println!(
        "  - Volume: {:.3} ({:.1}% of the axis-aligned volume)",
        oriented.volume(),
        100.0 * oriented.volume() / axis_aligned.volume()
    );

    let mut tilted_frame = LineSet::from_oriented_bounding_box(&oriented);
    tilted_frame.paint_uniform_color(Vector3::new(0.1, 0.9, 0.1));

    // 3. Both wireframes in one line set
    println!("\n3. Combined Wireframes");
    println!("----------------------");
    let combined = &frame + &tilted_frame;
    println!(
        "✓ Combined into {} points and {} lines (colored: {})",
        combined.point_count(),
        combined.line_count(),
        combined.has_colors()
    );
    for line_index in [0, 12] {
        let (start, end) = combined.line_coordinate(line_index)?;
        println!(
            "  - Line {}: ({:.2}, {:.2}, {:.2}) -> ({:.2}, {:.2}, {:.2})",
            line_index, start.x, start.y, start.z, end.x, end.y, end.z
        );
    }

    println!("\n✅ Box wireframe example completed successfully!");
    Ok(())
}

/// A slab of grid points rotated off the coordinate axes, with a little jitter
fn create_tilted_slab() -> PointCloud3d {
    let rotation = UnitQuaternion::from_axis_angle(&Vector3::z_axis(), 0.5);
    let mut rng = rand::thread_rng();
    let mut cloud = PointCloud3d::with_capacity(20 * 8 * 4);

    for i in 0..20 {
        for j in 0..8 {
            for k in 0..4 {
                let grid = Point3::new(i as f64 * 0.25, j as f64 * 0.25, k as f64 * 0.25);
                let jitter = Vector3::new(
                    rng.gen_range(-0.01..0.01),
                    rng.gen_range(-0.01..0.01),
                    rng.gen_range(-0.01..0.01),
                );
                cloud.push(rotation * grid + jitter);
            }
        }
    }

    cloud
}
