//! Error types for octavo operations.

use thiserror::Error;

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, OctavoError>;

/// All errors surfaced by octavo.
///
/// Every variant is a precondition or contract violation on the caller's
/// side; none are transient, and no operation retries internally.
#[derive(Error, Debug)]
pub enum OctavoError {
    /// The key being inserted is already present in the tree.
    #[error("duplicate key: {0}")]
    DuplicateKey(String),

    /// The key being looked up or removed is not present.
    #[error("key not found: {0}")]
    KeyNotFound(String),

    /// A percentile band was requested on an index holding no elements.
    #[error("percentile index is empty")]
    EmptyIndex,

    /// A rank query fell outside the valid `1..=len` range.
    #[error("rank {rank} out of range for {len} element(s)")]
    RankOutOfRange { rank: usize, len: usize },

    /// No point in the primary-axis band satisfied both secondary-axis
    /// bounds, so no pivot could be chosen for this partition step.
    #[error("no pivot candidate: {0}")]
    PivotSelection(String),
}

impl OctavoError {
    /// Build a `DuplicateKey` error from any debug-printable key.
    pub(crate) fn duplicate(key: impl std::fmt::Debug) -> Self {
        OctavoError::DuplicateKey(format!("{key:?}"))
    }

    /// Build a `KeyNotFound` error from any debug-printable key.
    pub(crate) fn not_found(key: impl std::fmt::Debug) -> Self {
        OctavoError::KeyNotFound(format!("{key:?}"))
    }
}
