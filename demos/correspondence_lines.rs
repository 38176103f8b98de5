//! Correspondence lines example for linecrate
//!
//! This example demonstrates connecting matched points of two clouds:
//! - A random source cloud and a perturbed copy of it
//! - Line-set construction from index correspondences
//! - Absolute translation and centroid-anchored scaling

use linecrate_core::{LineSet, PointCloud3d};
use nalgebra::{Point3, Vector3};
use rand::Rng;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    println!("Correspondence Lines Example");
    println!("============================");

    // 1. Two matched clouds
    println!("\n1. Building Matched Clouds");
    println!("--------------------------");
    let source = create_random_cloud(40);
    let target = perturb_cloud(&source, 0.05);
    println!("✓ Source cloud: {} points", source.len());
    println!("✓ Target cloud: {} points (perturbed copy)", target.len());

    // 2. Pair every other point with its counterpart
    let correspondences: Vec<(usize, usize)> = (0..source.len())
        .step_by(2)
        .map(|index| (index, index))
        .collect();
    println!("\n2. Connecting {} Correspondences", correspondences.len());
    println!("--------------------------------");
    let mut lines =
        LineSet::from_point_cloud_correspondences(&source, &target, &correspondences)?;
    println!(
        "✓ Line set has {} points and {} lines",
        lines.point_count(),
        lines.line_count()
    );
    let (start, end) = lines.line_coordinate(0)?;
    println!("  - First pair spans {:.4} units", (end - start).norm());

    let bogus =
        LineSet::from_point_cloud_correspondences(&source, &target, &[(source.len(), 0)]);
    if let Err(error) = bogus {
        println!("  - Out-of-range pairing rejected: {}", error);
    }

    // 3. Reposition the whole bundle
    println!("\n3. Repositioning");
    println!("----------------");
    lines
        .translate(&Vector3::new(0.0, 0.0, 2.0), false)
        .scale(0.5, true);
    let center = lines.center();
    println!(
        "✓ Center moved to ({:.2}, {:.2}, {:.2}), then scaled in place",
        center.x, center.y, center.z
    );
    let bounds = lines.axis_aligned_bounding_box();
    println!(
        "  - Bounds: ({:.2}, {:.2}, {:.2}) to ({:.2}, {:.2}, {:.2})",
        bounds.min_bound.x,
        bounds.min_bound.y,
        bounds.min_bound.z,
        bounds.max_bound.x,
        bounds.max_bound.y,
        bounds.max_bound.z
    );

    println!("\n✅ Correspondence lines example completed successfully!");
    Ok(())
}

fn create_random_cloud(count: usize) -> PointCloud3d {
    let mut rng = rand::thread_rng();
    (0..count)
        .map(|_| {
            Point3::new(
                rng.gen_range(-1.0..1.0),
                rng.gen_range(-1.0..1.0),
                rng.gen_range(-1.0..1.0),
            )
        })
        .collect()
}

fn perturb_cloud(cloud: &PointCloud3d, amplitude: f64) -> PointCloud3d {
    let mut rng = rand::thread_rng();
    let mut perturbed = PointCloud3d::with_capacity(cloud.len());
    perturbed.extend(cloud.iter().map(|point| {
        point
            + Vector3::new(
                rng.gen_range(-amplitude..amplitude),
                rng.gen_range(-amplitude..amplitude),
                rng.gen_range(-amplitude..amplitude),
            )
    }));
    perturbed
}
