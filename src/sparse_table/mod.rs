//! A sparse-table range-minimum index. It precomputes the minimum of every
//! power-of-two-length window and answers queries from two overlapping windows, which
//! is safe because minimum is idempotent. This leads to constant-time queries and
//! O(n log n) space overhead; the precomputation runs in O(n log n) time. The structure
//! is fully immutable after construction, there is no update operation.

use crate::Error;
use std::cmp::min;
use std::mem::size_of;
use std::ops::{Bound, Deref, RangeBounds};

/// A static range-minimum index over an immutable array of `u64` values.
///
/// Queries use **1-indexed inclusive** bounds; [`SparseTable::query_range`] adapts
/// ordinary 0-based Rust ranges. Since no update operation exists, the structure can
/// be shared read-only across threads without synchronization.
///
/// # Example
/// ```rust
/// use rangelift::SparseTable;
///
/// let table = SparseTable::new(vec![4, 2, 9, 1, 7]).unwrap();
///
/// assert_eq!(table.query(2, 4).unwrap(), 1);
/// assert_eq!(table.query(1, 2).unwrap(), 2);
/// assert_eq!(table.query_range(0..2).unwrap(), 2);
/// ```
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SparseTable {
    data: Vec<u64>,

    // log_table[len] = floor(log2(len)) for 1 <= len <= data.len(), so queries never
    // compute logarithms at lookup time.
    log_table: Vec<u32>,

    // The window minima are stored in a one-dimensional array, where the j'th element
    // of each row i is the minimum of the window [i, i + 2^j). Flattening the rows
    // avoids a second level of pointer chasing compared to a two-dimensional array.
    table: Vec<u64>,
    row_length: usize,
}

impl SparseTable {
    /// Builds the range-minimum index for the given data in O(n log n) time, using
    /// O(n log n) space. Every row of the window table doubles the window length of
    /// the previous one, combining two overlapping half-windows.
    ///
    /// # Errors
    /// Returns [`Error::EmptyInput`] if `data` is empty.
    pub fn new(data: Vec<u64>) -> Result<Self, Error> {
        if data.is_empty() {
            return Err(Error::EmptyInput);
        }
        let len = data.len();

        let mut log_table = vec![0u32; len + 1];
        for i in 2..=len {
            log_table[i] = log_table[i / 2] + 1;
        }

        let row_length = log_table[len] as usize + 1;
        let mut table = vec![0u64; len * row_length];
        for i in 0..len {
            table[i * row_length] = data[i];
        }
        for j in 1..row_length {
            let offset = 1usize << (j - 1);
            for i in 0..=len - (1 << j) {
                table[i * row_length + j] = min(
                    table[i * row_length + j - 1],
                    table[(i + offset) * row_length + j - 1],
                );
            }
        }

        Ok(Self {
            data,
            log_table,
            table,
            row_length,
        })
    }

    /// Returns the minimum of the inclusive, **1-indexed** range `[l, r]` in O(1)
    /// time. The two precomputed windows of length `2^floor(log2(r - l + 1))` anchored
    /// at both ends cover the range exactly once with possible overlap.
    ///
    /// # Errors
    /// Returns [`Error::IndexOutOfRange`] unless `1 <= l <= r <= self.len()`.
    pub fn query(&self, l: usize, r: usize) -> Result<u64, Error> {
        let len = self.data.len();
        if l < 1 || l > len {
            return Err(Error::IndexOutOfRange {
                index: l as i64,
                start: 1,
                end: len as i64 + 1,
            });
        }
        if r < l || r > len {
            return Err(Error::IndexOutOfRange {
                index: r as i64,
                start: l as i64,
                end: len as i64 + 1,
            });
        }

        let (l, r) = (l - 1, r - 1);
        let k = self.log_table[r - l + 1] as usize;
        Ok(min(
            self.table[l * self.row_length + k],
            self.table[(r + 1 - (1 << k)) * self.row_length + k],
        ))
    }

    /// Convenience adapter for [`SparseTable::query`] over ordinary 0-based Rust
    /// ranges.
    ///
    /// # Example
    /// ```rust
    /// use rangelift::SparseTable;
    /// let table = SparseTable::new(vec![5, 4, 3, 2, 1]).unwrap();
    /// assert_eq!(table.query_range(0..3).unwrap(), 3);
    /// assert_eq!(table.query_range(0..=3).unwrap(), 2);
    /// assert_eq!(table.query_range(2..).unwrap(), 1);
    /// ```
    ///
    /// # Errors
    /// Returns [`Error::IndexOutOfRange`] if the range is empty, exceeds the data
    /// length, or carries a bound that overflows when converted to an inclusive
    /// 1-indexed position (e.g. `..=usize::MAX`).
    pub fn query_range<R: RangeBounds<usize>>(&self, range: R) -> Result<u64, Error> {
        let overflow = || Error::IndexOutOfRange {
            index: i64::MAX,
            start: 1,
            end: self.data.len() as i64 + 1,
        };
        let start = match range.start_bound() {
            Bound::Included(i) => *i,
            Bound::Excluded(i) => i.checked_add(1).ok_or_else(overflow)?,
            Bound::Unbounded => 0,
        };
        let end = match range.end_bound() {
            Bound::Included(i) => i.checked_add(1).ok_or_else(overflow)?,
            Bound::Excluded(i) => *i,
            Bound::Unbounded => self.data.len(),
        };
        self.query(start.checked_add(1).ok_or_else(overflow)?, end)
    }

    /// Returns the number of elements in the indexed array.
    #[must_use]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns true if the indexed array is empty. Construction rejects empty input,
    /// so this is always false.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Returns the amount of memory used by this data structure in bytes. This does
    /// not include space allocated but not in use (e.g. unused capacity of vectors).
    #[must_use]
    pub fn heap_size(&self) -> usize {
        self.data.len() * size_of::<u64>()
            + self.log_table.len() * size_of::<u32>()
            + self.table.len() * size_of::<u64>()
    }
}

/// Implements Deref to delegate to the underlying data. This allows the user to use
/// indexing syntax on the index to access the original values, as well as iterators,
/// etc.
impl Deref for SparseTable {
    type Target = Vec<u64>;

    fn deref(&self) -> &Self::Target {
        &self.data
    }
}

impl TryFrom<Vec<u64>> for SparseTable {
    type Error = Error;

    fn try_from(data: Vec<u64>) -> Result<Self, Error> {
        Self::new(data)
    }
}
