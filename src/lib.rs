//! A [disjoint-sets/union-find] implementation over the elements `0 .. n` that keeps
//! user-defined properties for every subset.
//!
//! The main struct of this crate is [`DisjointSet<P, E>`].
//! The elements each start in their own subset and these subsets can be joined with the
//! `union` method.
//! You can check if elements share a subset with the `is_connected` method, list the subsets
//! with `subsets` and `subset`, and read the properties of a subset with `subset_props`.
//! The `union` and `is_connected` methods are extremely fast and have an amortized complexity
//! of `O(α(n))` where 'α' is the inverse Ackermann function.
//!
//! Every subset carries properties of type `P`.
//! When two subsets are merged a reducer combines their properties, together with optional
//! properties of type `E` describing the edge that joined them.
//! This can be used for example to track the heaviest edge of every component while running
//! Kruskal's algorithm, or to collect the labels of the elements in a cluster.
//!
//! For each element we store two additional `usize` values.
//! A more compact implementation is included that stores the rank in the lowest bits of the
//! parent so it only needs one.
//! This is a feature and can be enabled by adding the following to your `Cargo.toml` file:
//! ```toml
//! [dependencies.subset-props]
//! version = "0.1"
//! features = ["compact"]
//! ```
//!
//! [disjoint-sets/union-find]: https://en.wikipedia.org/wiki/Disjoint-set_data_structure
//! [`DisjointSet<P, E>`]: struct.DisjointSet.html

extern crate bit_vec;
#[cfg(feature = "rayon")]
extern crate rayon;

/// A convenient macro to create a `BitVec` similar to `vec!`.
macro_rules! bit_vec {
    ($element: expr; $len: expr) => {
        ::bit_vec::BitVec::from_elem($len, $element)
    };
}

mod error;
pub mod disjoint_sets;

pub use {
    disjoint_sets::{
        DisjointSet,
        InitialProps,
        Reducer,
    },
    error::IndexOutOfRange,
};
