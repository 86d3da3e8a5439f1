use std::fmt;

/// The properties every subset of a new `DisjointSet` starts out with.
///
/// This is resolved once when the `DisjointSet` is constructed.
///
/// # Examples
///
/// ```
/// use subset_props::{DisjointSet, InitialProps};
///
/// let fixed = DisjointSet::with_initial_props(3, InitialProps::Fixed(vec!['a']));
/// assert_eq!(fixed.subset_props(2), &vec!['a']);
///
/// let per_index = DisjointSet::with_initial_props(3, InitialProps::per_index(|i| i * 10));
/// assert_eq!(*per_index.subset_props(2), 20);
/// ```
pub enum InitialProps<P> {
    /// Every element gets its own clone of this value.
    Fixed(P),
    /// The properties of element `i` are given by calling this function with `i`.
    PerIndex(Box<dyn FnMut(usize) -> P>),
}

impl<P> InitialProps<P> {
    /// Wraps an initializer in `InitialProps::PerIndex`.
    pub fn per_index<F>(initializer: F) -> Self where
        F: FnMut(usize) -> P + 'static,
    {
        InitialProps::PerIndex(Box::new(initializer))
    }

    /// Gives the properties of the elements `0 .. len` in order.
    pub(crate) fn resolve(self, len: usize) -> Vec<P> where P: Clone {
        match self {
            InitialProps::Fixed(props) => vec![props; len],
            InitialProps::PerIndex(mut initializer) => (0 .. len).map(|i| initializer(i)).collect(),
        }
    }
}

impl<P> fmt::Debug for InitialProps<P> where P: fmt::Debug {
    fn fmt(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        match self {
            InitialProps::Fixed(props) => formatter.debug_tuple("Fixed").field(props).finish(),
            InitialProps::PerIndex(_) => formatter.write_str("PerIndex(..)"),
        }
    }
}
