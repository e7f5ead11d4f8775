//! Shape-balanced octant trees over 3D integer coordinates.
//!
//! An [`Octree`] routes every point to one of eight children per node and
//! never rebalances, so its shape is fixed by insertion order alone.
//! [`build_order`] computes, in O(n log n), an order for an unordered batch
//! of points that keeps sibling-octant populations bounded (empirically
//! within 7:1 of each other), using per-axis percentile bands over
//! order-statistics trees instead of ever sorting the batch in 3D.
//!
//! ```rust
//! use octavo::{Octree, Point, build_order};
//!
//! let points = vec![
//!     Point::new(3, 3, 3),
//!     Point::new(1, 5, 2),
//!     Point::new(4, 3, 1),
//!     Point::new(5, 4, 0),
//! ];
//!
//! let mut tree = Octree::new();
//! for point in build_order(&points)? {
//!     tree.insert(point, "occupied")?;
//! }
//! assert_eq!(tree.len(), 4);
//! assert!(tree.contains(&Point::new(4, 3, 1)));
//! # Ok::<(), octavo::OctavoError>(())
//! ```

pub mod balance;
pub mod error;
pub mod octree;
pub mod percentile;
pub mod rank_tree;
pub mod types;

pub use balance::{OrderBuilder, build_order};
pub use error::{OctavoError, Result};
pub use octree::{OCTANT_COUNT, OctNode, Octree, octant_index};
pub use percentile::Percentiles;
pub use rank_tree::RankTree;
pub use types::{BalanceConfig, Point};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Common imports
pub mod prelude {
    pub use crate::{BalanceConfig, OctavoError, Octree, OrderBuilder, Point, Result, build_order};
}
