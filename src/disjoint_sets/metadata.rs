use std::cell::Cell;

/// The position of an element in the forest of a `DisjointSet`.
///
/// For each element in the `DisjointSet` we store a `Metadata`.
#[cfg(not(feature = "compact"))]
#[derive(Clone, Debug, Default)]
pub(crate) struct Metadata {
    /// The parent of the element in its subsets tree.
    /// These form an upside down tree where each child has the index of its parent.
    parent: Cell<usize>,
    /// A maximum to the height of the tree, only used for roots.
    rank: Cell<usize>,
}

#[cfg(not(feature = "compact"))]
impl Metadata {
    /// Create a new `Metadata` for a singleton element with the given index.
    pub(crate) fn new(index: usize) -> Self {
        Self {
            parent: Cell::new(index),
            rank: Cell::new(0),
        }
    }

    /// Return the `parent` variable.
    pub(crate) fn parent(&self) -> usize {
        self.parent.get()
    }

    /// Set the `parent` variable.
    pub(crate) fn set_parent(&self, value: usize) {
        self.parent.set(value);
    }

    /// Return the `rank` variable.
    pub(crate) fn rank(&self) -> usize {
        self.rank.get()
    }

    /// Set the `rank` variable.
    pub(crate) fn set_rank(&self, value: usize) {
        self.rank.set(value);
    }
}

// A tree of rank n holds at least 2 ^ n elements, so the rank of any tree is below the
// amount of bits in a `usize`. That rank fits in log2(USIZE_BITS) bits which we take from
// the bottom of the parent.
#[cfg(feature = "compact")]
const RANK_BITS: u32 = usize::BITS.trailing_zeros();
#[cfg(feature = "compact")]
const MASK: usize = (1 << RANK_BITS) - 1;
#[cfg(feature = "compact")]
pub(crate) const MAX: usize = (1 << (usize::BITS - RANK_BITS)) - 1;

/// The position of an element in the forest of a `DisjointSet`.
///
/// For each element in the `DisjointSet` we store a `Metadata`.
/// The rank is stored in the lowest bits of the parent.
#[cfg(feature = "compact")]
#[derive(Clone, Debug, Default)]
pub(crate) struct Metadata {
    parent: Cell<usize>,
}

#[cfg(feature = "compact")]
impl Metadata {
    /// Create a new `Metadata` for a singleton element with the given index.
    ///
    /// # Panics
    ///
    /// Panics if the index is above the maximum amount of elements a `DisjointSet` can store
    /// with the compact representation.
    pub(crate) fn new(index: usize) -> Self {
        if index > MAX {
            panic!("A DisjointSet can only hold {} elements.", MAX)
        }

        Self {
            parent: Cell::new(index << RANK_BITS),
        }
    }

    /// Return the `parent` variable.
    pub(crate) fn parent(&self) -> usize {
        self.parent.get() >> RANK_BITS
    }

    /// Set the `parent` variable.
    pub(crate) fn set_parent(&self, value: usize) {
        let old = self.parent.get();
        self.parent.set((old & MASK) | (value << RANK_BITS));
    }

    /// Return the `rank` variable.
    pub(crate) fn rank(&self) -> usize {
        self.parent.get() & MASK
    }

    /// Set the `rank` variable.
    pub(crate) fn set_rank(&self, value: usize) {
        let old = self.parent.get();
        self.parent.set((old & !MASK) | (value & MASK));
    }
}
