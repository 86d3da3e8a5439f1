//! The error returned when an element is not part of a `DisjointSet`.

use std::{
    error,
    fmt,
};

/// An element index that does not lie in `0 .. len`.
///
/// The `try_*` methods of [`DisjointSet`] return this error.
/// All other methods panic with its message instead.
///
/// [`DisjointSet`]: struct.DisjointSet.html
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct IndexOutOfRange {
    /// The index that was given.
    pub index: usize,
    /// The amount of elements in the `DisjointSet`.
    pub len: usize,
}

impl fmt::Display for IndexOutOfRange {
    fn fmt(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        write!(formatter, "index {} is out of range for {} elements", self.index, self.len)
    }
}

impl error::Error for IndexOutOfRange {}

/// Returns the value or panics with the message of the error.
#[track_caller]
pub(crate) fn unwrap_index<T>(result: Result<T, IndexOutOfRange>) -> T {
    match result {
        Ok(value) => value,
        Err(error) => panic!("{}", error),
    }
}
