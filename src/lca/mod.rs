//! A lowest-common-ancestor index over a fixed rooted tree. Construction performs a
//! single Euler tour assigning every node an entry and exit timestamp, which reduces
//! ancestor tests to an interval-containment check in O(1), and fills a binary-lifting
//! table of 2^b-step ancestor pointers, which answers LCA queries in O(log n). The tree
//! must not change after construction; the structure is fully immutable.

use crate::Error;
use std::mem::size_of;

/// An index answering lowest-common-ancestor and ancestor-containment queries over a
/// fixed rooted tree. Nodes are identified by the integers `1..=n`; the tree is given
/// as an undirected edge list plus a designated root.
///
/// Construction is O(n log n); it rejects edge lists that do not describe a single
/// tree rooted at the given root (disconnected input, cycles, duplicate edges,
/// self-loops). The
/// Euler tour uses an explicit stack, so path-shaped trees of any size are safe to
/// index.
///
/// # Example
/// ```rust
/// use rangelift::LcaIndex;
///
/// let index = LcaIndex::new(5, &[(1, 2), (1, 3), (2, 4), (2, 5)], 1).unwrap();
///
/// assert_eq!(index.lca(4, 5).unwrap(), 2);
/// assert_eq!(index.lca(4, 3).unwrap(), 1);
/// assert!(index.is_ancestor(1, 5).unwrap());
/// assert!(!index.is_ancestor(3, 5).unwrap());
/// ```
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LcaIndex {
    root: usize,

    // number of doubling levels, ceil(log2(n)) + 1, sized from the actual node count
    levels: usize,

    // immediate parent per node, parent[root] == root; slot 0 is unused
    parent: Vec<usize>,

    // Euler-tour entry and exit counters; a node a is an ancestor of c iff
    // enter[a] <= enter[c] && exit[a] >= exit[c]. Entry counters start at 1, so 0
    // doubles as the unvisited marker during construction.
    enter: Vec<u32>,
    exit: Vec<u32>,

    // The 2^b-step ancestor pointers are stored in a one-dimensional array, where the
    // b'th element of each row v is the 2^b-th ancestor of v, saturating at the root's
    // self-loop. Flattening the rows avoids a second level of pointer chasing compared
    // to a two-dimensional array.
    jumps: Vec<usize>,
}

impl LcaIndex {
    /// Builds the ancestor index for the tree over nodes `1..=node_count` described by
    /// the undirected `edges`, rooted at `root`. The number of doubling levels is
    /// computed from the actual node count, never from a fixed constant.
    ///
    /// # Errors
    /// Returns [`Error::EmptyInput`] if `node_count` is zero, and
    /// [`Error::InvalidTreeStructure`] if `root` or an edge endpoint is not a valid
    /// node identifier, if an edge connects a node to itself or closes a cycle, or if
    /// a node is unreachable from the root.
    ///
    /// # Panics
    /// This function will panic if the input is larger than 2^31 - 1 nodes; the Euler
    /// tour issues two `u32` timestamps per node.
    pub fn new(node_count: usize, edges: &[(usize, usize)], root: usize) -> Result<Self, Error> {
        if node_count == 0 {
            return Err(Error::EmptyInput);
        }
        assert!(node_count < 1 << 31, "input too large for lca index");
        if root < 1 || root > node_count {
            return Err(Error::InvalidTreeStructure {
                reason: "root is not a valid node identifier",
            });
        }

        let mut adjacency = vec![Vec::new(); node_count + 1];
        for &(u, v) in edges {
            if u < 1 || u > node_count || v < 1 || v > node_count {
                return Err(Error::InvalidTreeStructure {
                    reason: "edge endpoint is not a valid node identifier",
                });
            }
            // a self-loop on the root would slip past the tour's parent-skip below,
            // because the root's parent sentinel is itself
            if u == v {
                return Err(Error::InvalidTreeStructure {
                    reason: "edge connects a node to itself",
                });
            }
            adjacency[u].push(v);
            adjacency[v].push(u);
        }

        let mut parent = vec![0usize; node_count + 1];
        let mut enter = vec![0u32; node_count + 1];
        let mut exit = vec![0u32; node_count + 1];

        // Euler tour with an explicit stack; a recursive traversal would overflow the
        // call stack on deep path-shaped trees. Each node is pushed a second time
        // behind its children to receive its exit timestamp.
        let mut time = 0u32;
        let mut stack = vec![(root, root, false)];
        while let Some((node, par, children_done)) = stack.pop() {
            if children_done {
                time += 1;
                exit[node] = time;
                continue;
            }
            if enter[node] != 0 {
                // reached an already-entered node through a second path
                return Err(Error::InvalidTreeStructure {
                    reason: "edge list contains a cycle",
                });
            }
            parent[node] = par;
            time += 1;
            enter[node] = time;
            stack.push((node, par, true));
            for &next in &adjacency[node] {
                if next != par {
                    stack.push((next, node, false));
                }
            }
        }

        if enter[1..].iter().any(|&t| t == 0) {
            return Err(Error::InvalidTreeStructure {
                reason: "node unreachable from root",
            });
        }

        let levels = node_count.next_power_of_two().trailing_zeros() as usize + 1;
        let mut jumps = vec![0usize; (node_count + 1) * levels];
        for v in 1..=node_count {
            jumps[v * levels] = parent[v];
        }
        for b in 1..levels {
            for v in 1..=node_count {
                let halfway = jumps[v * levels + b - 1];
                jumps[v * levels + b] = jumps[halfway * levels + b - 1];
            }
        }

        Ok(Self {
            root,
            levels,
            parent,
            enter,
            exit,
            jumps,
        })
    }

    /// Returns the lowest common ancestor of `x` and `y` in O(log n) time. If one node
    /// is an ancestor of the other (including `x == y`), that node is returned.
    /// Otherwise the walk climbs from `x` using the largest jumps whose destination is
    /// still not an ancestor of `y`; the answer is the immediate parent of the final
    /// position, which sits just below the LCA.
    ///
    /// # Errors
    /// Returns [`Error::IndexOutOfRange`] if `x` or `y` is not a valid node
    /// identifier.
    pub fn lca(&self, x: usize, y: usize) -> Result<usize, Error> {
        self.check_node(x)?;
        self.check_node(y)?;

        if self.contains(x, y) {
            return Ok(x);
        }
        if self.contains(y, x) {
            return Ok(y);
        }

        let mut current = x;
        for b in (0..self.levels).rev() {
            let candidate = self.jumps[current * self.levels + b];
            if !self.contains(candidate, y) {
                current = candidate;
            }
        }
        Ok(self.jumps[current * self.levels])
    }

    /// Returns true if `a` is an ancestor of `c`, in O(1) time. Every node is an
    /// ancestor of itself.
    ///
    /// # Errors
    /// Returns [`Error::IndexOutOfRange`] if `a` or `c` is not a valid node
    /// identifier.
    pub fn is_ancestor(&self, a: usize, c: usize) -> Result<bool, Error> {
        self.check_node(a)?;
        self.check_node(c)?;
        Ok(self.contains(a, c))
    }

    /// Returns the immediate parent of `node`, or `None` for the root.
    ///
    /// # Errors
    /// Returns [`Error::IndexOutOfRange`] if `node` is not a valid node identifier.
    pub fn parent(&self, node: usize) -> Result<Option<usize>, Error> {
        self.check_node(node)?;
        if node == self.root {
            Ok(None)
        } else {
            Ok(Some(self.parent[node]))
        }
    }

    /// Returns the root node the index was built with.
    #[must_use]
    pub fn root(&self) -> usize {
        self.root
    }

    /// Returns the number of nodes in the indexed tree.
    #[must_use]
    pub fn len(&self) -> usize {
        self.parent.len() - 1
    }

    /// Returns true if the tree has no nodes. Construction rejects empty input, so
    /// this is always false.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the number of binary-lifting levels, `ceil(log2(n)) + 1` for `n`
    /// nodes.
    #[must_use]
    pub fn levels(&self) -> usize {
        self.levels
    }

    /// Returns the amount of memory used by this data structure in bytes. This does
    /// not include space allocated but not in use (e.g. unused capacity of vectors).
    #[must_use]
    pub fn heap_size(&self) -> usize {
        self.parent.len() * size_of::<usize>()
            + self.enter.len() * size_of::<u32>()
            + self.exit.len() * size_of::<u32>()
            + self.jumps.len() * size_of::<usize>()
    }

    /// Euler-tour interval containment; both nodes must be valid.
    fn contains(&self, a: usize, c: usize) -> bool {
        self.enter[a] <= self.enter[c] && self.exit[a] >= self.exit[c]
    }

    fn check_node(&self, node: usize) -> Result<(), Error> {
        if node < 1 || node >= self.parent.len() {
            return Err(Error::IndexOutOfRange {
                index: node as i64,
                start: 1,
                end: self.parent.len() as i64,
            });
        }
        Ok(())
    }
}
