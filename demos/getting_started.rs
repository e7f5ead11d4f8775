//! Build a balanced insertion order for a point cloud, load it into an
//! octree, and print a few shape statistics.
//!
//! Run with: `cargo run --example getting_started`

use octavo::{Octree, Point, Result, build_order};

fn main() -> Result<()> {
    env_logger::init();

    // A deterministic cloud with distinct values on every axis.
    let n = 500i64;
    let points: Vec<Point> = (0..n)
        .map(|i| Point::new((i * 233) % n, (i * 389) % n, (i * 433) % n))
        .collect();

    let order = build_order(&points)?;
    println!("ordered {} points", order.len());

    let mut tree = Octree::new();
    for point in &order {
        tree.insert(*point, ())?;
    }

    println!("octree holds {} points at depth {}", tree.len(), tree.depth());

    let probe = points[0];
    println!("probe {probe} present: {}", tree.contains(&probe));

    if let Some(root) = tree.root() {
        println!("root pivot {} (subtree sizes per octant):", root.key());
        for octant in 0..octavo::OCTANT_COUNT {
            let size = root.child(octant).map_or(0, |c| c.subtree_size());
            println!("  octant {octant}: {size}");
        }
    }

    Ok(())
}
