//! The error type shared by all index structures in this crate. Errors are detected
//! at the point of construction or call and surfaced to the caller; inputs are never
//! silently clamped or defaulted.

use thiserror::Error;

/// Errors returned by index construction and queries. Since all structures in this
/// crate perform pure in-memory computation, none of these conditions is transient
/// and retrying an operation never helps.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// An index or query bound lies outside the interval covered by the structure.
    #[error("index {index} out of range [{start}, {end})")]
    IndexOutOfRange {
        /// The offending index.
        index: i64,
        /// Inclusive lower bound of the valid interval.
        start: i64,
        /// Exclusive upper bound of the valid interval.
        end: i64,
    },

    /// The edge list passed to [`LcaIndex::new`][crate::LcaIndex::new] does not
    /// describe a single tree rooted at the designated root.
    #[error("invalid tree structure: {reason}")]
    InvalidTreeStructure {
        /// Short description of the structural defect.
        reason: &'static str,
    },

    /// The structure was asked to index an empty input (a zero-length array or a
    /// zero-node tree), for which no valid query exists.
    #[error("cannot build an index over empty input")]
    EmptyInput,
}
