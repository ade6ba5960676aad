//! An iterative segment tree supporting point updates and associative range aggregation
//! over a fixed integer interval. The tree is non-lazy: every update eagerly recombines
//! the ancestor chain of the touched leaf, so queries never defer work. Construction is
//! O(n), updates and queries are O(log n).

use crate::Error;
use std::fmt;
use std::mem::size_of;

/// Lowest set bit of `x`. An aligned block of `lowbit(pos)` leaves starting at leaf
/// position `pos` is covered by exactly one tree node, which is what makes the
/// two-pointer query walk work.
fn lowbit(x: usize) -> usize {
    x & x.wrapping_neg()
}

/// A segment tree over the inclusive integer interval `[from, to]`, generic over the
/// aggregate value type and a caller-supplied combine function. The combine function
/// MUST be associative together with the supplied identity element
/// (`combine(&identity, &x) == x == combine(&x, &identity)`); it need not be
/// commutative, because queries always fold operands in left-to-right positional order.
///
/// The covered interval is rounded up to the next power of two, so indices between
/// `to + 1` and `from + capacity - 1` are addressable as well; they hold the identity
/// until updated.
///
/// This is the only structure in this crate that can be mutated after construction.
/// Concurrent updates require external mutual exclusion for the whole update call.
///
/// # Example
/// ```rust
/// use rangelift::SegmentTree;
///
/// let mut tree = SegmentTree::new(0, 4, 0u64, |a, b| *a.max(b)).unwrap();
/// for (i, v) in [5, 3, 8, 1, 9].into_iter().enumerate() {
///     tree.update(i as i64, v).unwrap();
/// }
///
/// assert_eq!(tree.query(0, 4).unwrap(), 9);
/// tree.update(2, 10).unwrap();
/// assert_eq!(tree.query(0, 4).unwrap(), 10);
/// assert_eq!(tree.query(0, 1).unwrap(), 5);
/// ```
#[derive(Clone)]
pub struct SegmentTree<T, F> {
    from: i64,
    capacity: usize,
    // storage[capacity..2 * capacity] are leaves, storage[1..capacity] are internal
    // nodes combined from their two children, storage[0] is unused.
    storage: Vec<T>,
    identity: T,
    combine: F,
}

impl<T: Clone, F: Fn(&T, &T) -> T> SegmentTree<T, F> {
    /// Creates a segment tree covering the inclusive interval `[from, to]`, with every
    /// position initialized to `identity`. The interval length is rounded up to the
    /// next power of two. Negative bounds are supported; positions are offset into
    /// zero-based storage internally.
    ///
    /// # Errors
    /// Returns [`Error::EmptyInput`] if `to < from`.
    pub fn new(from: i64, to: i64, identity: T, combine: F) -> Result<Self, Error> {
        if to < from {
            return Err(Error::EmptyInput);
        }
        let capacity = ((to - from) as usize + 1).next_power_of_two();
        Ok(Self {
            from,
            capacity,
            storage: vec![identity.clone(); 2 * capacity],
            identity,
            combine,
        })
    }

    /// Maps an external index into its leaf position in storage, or reports the
    /// violated bounds.
    fn leaf_position(&self, index: i64) -> Result<usize, Error> {
        let end = self.from + self.capacity as i64;
        if index < self.from || index >= end {
            return Err(Error::IndexOutOfRange {
                index,
                start: self.from,
                end,
            });
        }
        Ok((index - self.from) as usize + self.capacity)
    }

    /// Replaces (never increments) the value at `index` and recombines all ancestors
    /// of the touched leaf, so subsequent queries observe the new value immediately.
    ///
    /// # Errors
    /// Returns [`Error::IndexOutOfRange`] if `index` lies outside
    /// `[from, from + capacity)`.
    pub fn update(&mut self, index: i64, value: T) -> Result<(), Error> {
        let mut node = self.leaf_position(index)?;
        self.storage[node] = value;
        node /= 2;
        while node > 0 {
            self.storage[node] =
                (self.combine)(&self.storage[2 * node], &self.storage[2 * node + 1]);
            node /= 2;
        }
        Ok(())
    }

    /// Returns the aggregate of the inclusive range `[from, to]` in O(log n) time.
    /// An empty range (`to < from`) yields the identity element.
    ///
    /// The walk advances two leaf pointers towards each other, consuming at each step
    /// the largest aligned block that still fits inside the remaining range: the block
    /// of `lowbit(pos)` leaves starting at position `pos` is stored at node
    /// `pos / lowbit(pos)`. Blocks cut off the left end accumulate left-to-right,
    /// blocks cut off the right end are prepended right-to-left, so a non-commutative
    /// combine still sees all operands in positional order.
    ///
    /// # Errors
    /// Returns [`Error::IndexOutOfRange`] if either bound of a non-empty range lies
    /// outside `[from, from + capacity)`.
    pub fn query(&self, from: i64, to: i64) -> Result<T, Error> {
        if to < from {
            return Ok(self.identity.clone());
        }
        let mut lo = self.leaf_position(from)?;
        // exclusive right pointer
        let mut hi = self.leaf_position(to)? + 1;

        let mut left = self.identity.clone();
        let mut right = self.identity.clone();

        while lo + lowbit(lo) <= hi {
            left = (self.combine)(&left, &self.storage[lo / lowbit(lo)]);
            lo += lowbit(lo);
        }
        while hi - lowbit(hi) >= lo {
            let size = lowbit(hi);
            hi -= size;
            right = (self.combine)(&self.storage[hi / size], &right);
        }

        Ok((self.combine)(&left, &right))
    }

    /// Returns a reference to the current value at `index` without aggregation.
    ///
    /// # Errors
    /// Returns [`Error::IndexOutOfRange`] if `index` lies outside
    /// `[from, from + capacity)`.
    pub fn get(&self, index: i64) -> Result<&T, Error> {
        let node = self.leaf_position(index)?;
        Ok(&self.storage[node])
    }

    /// Returns the number of positions covered by the tree. This is the requested
    /// interval length rounded up to the next power of two.
    #[must_use]
    pub fn len(&self) -> usize {
        self.capacity
    }

    /// Returns false; a successfully constructed tree always covers at least one
    /// position.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Returns the half-open interval `[from, from + capacity)` of addressable
    /// positions.
    #[must_use]
    pub fn bounds(&self) -> std::ops::Range<i64> {
        self.from..self.from + self.capacity as i64
    }

    /// Returns a reference to the identity element supplied at construction.
    #[must_use]
    pub fn identity(&self) -> &T {
        &self.identity
    }

    /// Returns the amount of memory used by the aggregate storage in bytes. This does
    /// not include space allocated but not in use.
    #[must_use]
    pub fn heap_size(&self) -> usize {
        self.storage.len() * size_of::<T>()
    }
}

/// Implemented manually since the combine function has no debug representation.
impl<T: fmt::Debug, F> fmt::Debug for SegmentTree<T, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SegmentTree")
            .field("from", &self.from)
            .field("capacity", &self.capacity)
            .field("storage", &self.storage)
            .finish_non_exhaustive()
    }
}
