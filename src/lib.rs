#![warn(missing_docs)]

//! This crate provides a collection of static, build-once/query-many index structures
//! for offline range and ancestor queries. The structures precompute answers during a
//! one-shot construction and answer queries in O(log n) or O(1) time afterwards.
//!
//! # Data structures
//!  - [Segment Tree][segment_tree::SegmentTree] supporting point updates and associative
//!    range aggregation over a fixed integer interval. The only structure that can be
//!    modified after creation.
//!  - [Sparse Table][sparse_table::SparseTable] supporting constant-time range minimum
//!    queries over an immutable array after O(n log n) preprocessing.
//!  - [LCA Index][lca::LcaIndex] supporting logarithmic-time lowest-common-ancestor
//!    queries and constant-time ancestor tests over a fixed rooted tree, using
//!    Euler-tour timestamps and binary lifting.
//!
//! # Error handling
//! All fallible operations return a [`Result`] with the crate-wide [`Error`] type.
//! Bounds violations and malformed tree input are reported to the caller, never
//! silently clamped or defaulted. Construction either fully succeeds or fails before
//! any query is possible.
//!
//! # Concurrency
//! [`SparseTable`] and [`LcaIndex`] are immutable after construction and can be shared
//! read-only across threads without synchronization. [`SegmentTree`] requires external
//! mutual exclusion for concurrent updates: exclusive access must be held for the whole
//! update so readers never observe a partially recombined tree.

pub use crate::error::Error;
pub use crate::lca::LcaIndex;
pub use crate::segment_tree::SegmentTree;
pub use crate::sparse_table::SparseTable;

pub mod error;
pub mod lca;
pub mod segment_tree;
pub mod sparse_table;
