//! Core types and configuration for octavo.

use serde::{Deserialize, Serialize};

/// A point on the 3D integer grid.
///
/// Equality is componentwise. The derived ordering is lexicographic by
/// `(x, y, z)`, which is the ordering the balancer's primary-axis index
/// relies on.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Point {
    pub x: i64,
    pub y: i64,
    pub z: i64,
}

impl Point {
    /// Create a new point.
    pub const fn new(x: i64, y: i64, z: i64) -> Self {
        Self { x, y, z }
    }
}

impl std::fmt::Debug for Point {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {}, {})", self.x, self.y, self.z)
    }
}

impl std::fmt::Display for Point {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {}, {})", self.x, self.y, self.z)
    }
}

impl From<(i64, i64, i64)> for Point {
    fn from((x, y, z): (i64, i64, i64)) -> Self {
        Self { x, y, z }
    }
}

/// Tuning knobs for [`OrderBuilder`](crate::balance::OrderBuilder).
///
/// Serializable so a harness can load it from JSON alongside its own
/// configuration.
///
/// # Example
///
/// ```rust
/// use octavo::BalanceConfig;
///
/// let config = BalanceConfig::default();
/// assert_eq!(config.leaf_bucket, 18);
///
/// let json = r#"{ "leaf_bucket": 24 }"#;
/// let config: BalanceConfig = serde_json::from_str(json).unwrap();
/// assert_eq!(config.leaf_bucket, 24);
/// assert_eq!(config.trim_pct, 12.5);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BalanceConfig {
    /// Working sets smaller than this are emitted as-is instead of being
    /// partitioned further; the 8-way fan-out already bounds imbalance at
    /// this size.
    #[serde(default = "BalanceConfig::default_leaf_bucket")]
    pub leaf_bucket: usize,

    /// Percentage trimmed from each end of every axis distribution when
    /// extracting the central band a pivot is drawn from.
    #[serde(default = "BalanceConfig::default_trim_pct")]
    pub trim_pct: f64,
}

impl BalanceConfig {
    const fn default_leaf_bucket() -> usize {
        18
    }

    const fn default_trim_pct() -> f64 {
        12.5
    }

    /// Adjust the leaf-bucket threshold.
    pub fn with_leaf_bucket(mut self, leaf_bucket: usize) -> Self {
        assert!(leaf_bucket >= 2, "Leaf bucket threshold must be at least 2");
        self.leaf_bucket = leaf_bucket;
        self
    }

    /// Adjust the per-end trim percentage.
    pub fn with_trim_pct(mut self, trim_pct: f64) -> Self {
        assert!(
            (0.0..50.0).contains(&trim_pct),
            "Trim percentage must be in [0, 50)"
        );
        self.trim_pct = trim_pct;
        self
    }
}

impl Default for BalanceConfig {
    fn default() -> Self {
        Self {
            leaf_bucket: Self::default_leaf_bucket(),
            trim_pct: Self::default_trim_pct(),
        }
    }
}
