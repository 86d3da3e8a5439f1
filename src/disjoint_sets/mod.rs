//! Contains the implementation of the [disjoint-sets/union-find].
//!
//! [disjoint-sets/union-find]: https://en.wikipedia.org/wiki/Disjoint-set_data_structure

mod metadata;
mod initial_props;
pub mod disjoint_set;

pub use self::{
    disjoint_set::{
        DisjointSet,
        Reducer,
    },
    initial_props::InitialProps,
};
