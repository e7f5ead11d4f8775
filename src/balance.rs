//! Balanced insertion-order construction.
//!
//! An [`Octree`](crate::octree::Octree) never rebalances, so its shape is
//! decided entirely by the order points are inserted in. This module
//! computes such an order for an unordered batch: pick a pivot near the
//! 3D center of the working set, emit it, split the remainder into eight
//! octant buckets around it, and recurse bucket by bucket. Feeding the
//! emitted sequence into a fresh octree keeps sibling-octant populations
//! within a small constant ratio of each other.
//!
//! Centering never sorts the working set in 3D. Each step builds three
//! scratch [`Percentiles`] indices (full point, y, z), trims the outer
//! 12.5% per end of each axis, and scans the primary band for the first
//! point whose y and z both fall inside the secondary bands. Populating
//! the indices is O(n) inserts of O(log n) each and every bucket shrinks
//! by at least the pivot, so the whole build is O(n log n).
//!
//! The scratch indices are locals of each recursion step. Sibling
//! recursions share no state; the output is reassembled in fixed bucket
//! order 0..8, so the build is deterministic for a given input order.

use log::{debug, trace};
use rustc_hash::FxHashSet;

use crate::error::{OctavoError, Result};
use crate::octree::{OCTANT_COUNT, octant_index};
use crate::percentile::Percentiles;
use crate::types::{BalanceConfig, Point};

/// Compute a balanced insertion order with the default configuration.
///
/// See [`OrderBuilder::build`] for the contract.
pub fn build_order(points: &[Point]) -> Result<Vec<Point>> {
    OrderBuilder::new().build(points)
}

/// Recursive pivot-selection/partitioning driver.
#[derive(Debug, Clone, Default)]
pub struct OrderBuilder {
    config: BalanceConfig,
}

impl OrderBuilder {
    /// Builder with the default [`BalanceConfig`].
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder with an explicit configuration.
    pub fn with_config(config: BalanceConfig) -> Self {
        Self { config }
    }

    /// The active configuration.
    pub fn config(&self) -> &BalanceConfig {
        &self.config
    }

    /// Compute the insertion order for `points`.
    ///
    /// The output is a permutation of the input; inserting it left to
    /// right into a fresh octree yields the balanced shape. The caller
    /// contract matches the trees': points must be pairwise distinct, and
    /// on any working set large enough to be partitioned, values on the y
    /// and z axes must not repeat (they key scratch indices directly, so
    /// a repeat surfaces as [`OctavoError::DuplicateKey`]). A working set
    /// whose central bands contain no common candidate fails with
    /// [`OctavoError::PivotSelection`].
    pub fn build(&self, points: &[Point]) -> Result<Vec<Point>> {
        let mut seen = FxHashSet::default();
        for point in points {
            if !seen.insert(*point) {
                return Err(OctavoError::duplicate(point));
            }
        }

        debug!(
            "ordering {} points (leaf bucket {}, trim {}%)",
            points.len(),
            self.config.leaf_bucket,
            self.config.trim_pct
        );
        let mut order = Vec::with_capacity(points.len());
        self.partition(points.to_vec(), &mut order)?;
        Ok(order)
    }

    fn partition(&self, set: Vec<Point>, order: &mut Vec<Point>) -> Result<()> {
        // Below the leaf threshold the 8-way fan-out alone bounds the
        // remaining imbalance; emit as-is.
        if set.len() < self.config.leaf_bucket {
            order.extend(set);
            return Ok(());
        }

        let pivot = self.select_pivot(&set)?;
        trace!("pivot {pivot} for working set of {}", set.len());
        order.push(pivot);

        let mut buckets: [Vec<Point>; OCTANT_COUNT] = std::array::from_fn(|_| Vec::new());
        for point in set {
            if point == pivot {
                continue;
            }
            buckets[octant_index(&pivot, &point)].push(point);
        }
        for bucket in buckets {
            self.partition(bucket, order)?;
        }
        Ok(())
    }

    /// Pick a point near the center of mass of `set` on all three axes at
    /// once: the first point, in ascending primary order, of the trimmed
    /// x band whose y and z coordinates fall inside the trimmed y and z
    /// bands.
    fn select_pivot(&self, set: &[Point]) -> Result<Point> {
        let trim = self.config.trim_pct;

        let mut by_point: Percentiles<Point> = Percentiles::new();
        let mut by_y: Percentiles<i64> = Percentiles::new();
        let mut by_z: Percentiles<i64> = Percentiles::new();
        for point in set {
            by_point.add(*point)?;
            by_y.add(point.y)?;
            by_z.add(point.z)?;
        }

        let xband = by_point.band(trim, trim)?;
        let yband = by_y.band(trim, trim)?;
        let zband = by_z.band(trim, trim)?;

        let (y_lo, y_hi) = band_bounds(&yband)?;
        let (z_lo, z_hi) = band_bounds(&zband)?;

        xband
            .into_iter()
            .find(|p| (y_lo..=y_hi).contains(&p.y) && (z_lo..=z_hi).contains(&p.z))
            .ok_or_else(|| {
                OctavoError::PivotSelection(format!(
                    "no point in the central x band lies within y [{y_lo}, {y_hi}] \
                     and z [{z_lo}, {z_hi}]"
                ))
            })
    }
}

fn band_bounds(band: &[i64]) -> Result<(i64, i64)> {
    match (band.first(), band.last()) {
        (Some(lo), Some(hi)) => Ok((*lo, *hi)),
        _ => Err(OctavoError::PivotSelection(
            "secondary-axis band is empty".to_string(),
        )),
    }
}
