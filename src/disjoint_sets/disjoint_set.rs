//! A [disjoint-sets/union-find] implementation that keeps properties for each subset.
//!
//! See [`DisjointSet<P, E>`] for more information.
//!
//! [disjoint-sets/union-find]: https://en.wikipedia.org/wiki/Disjoint-set_data_structure
//! [`DisjointSet<P, E>`]: struct.DisjointSet.html

use {
    std::{
        fmt,
        cmp::Ordering,
        collections::HashMap,
        iter::FromIterator,
    },
    crate::{
        disjoint_sets::{
            initial_props::InitialProps,
            metadata::Metadata,
        },
        error::{
            unwrap_index,
            IndexOutOfRange,
        },
    },
};
#[cfg(feature = "rayon")]
use rayon::prelude::*;
#[cfg(feature = "proptest")]
use proptest::prelude::*;

/// Combines the properties of two subsets that are merged by a union.
///
/// It is called as `reducer(surviving, absorbed, edge)` where `surviving` are the properties of
/// the root that stays a root and `absorbed` those of the root that is placed below it.
pub type Reducer<P, E> = Box<dyn FnMut(P, P, Option<E>) -> P + Send>;

/// A [disjoint-sets/union-find] structure over the elements `0 .. len` where every subset
/// carries properties of type `P`.
///
/// Initially each element has its own subset, these can be joined with the `union` method.
/// When a reducer is attached with `with_reducer` every union that merges two subsets
/// combines their properties, optionally using properties of type `E` that describe the edge
/// that caused the union.
///
/// The `union` and `is_connected` methods have an amortized complexity of `O(α(n))` where
/// 'α' is the inverse Ackermann function.
///
/// `find` compresses paths through a `Cell`, so a `DisjointSet` is not `Sync`.
/// Wrap it in a single `Mutex` to share it between threads.
///
/// # Examples
///
/// ```
/// use subset_props::{DisjointSet, InitialProps};
///
/// #[derive(Clone, Debug, PartialEq)]
/// struct MaxWeight(u32);
///
/// let mut set = DisjointSet::with_initial_props(4, InitialProps::Fixed(MaxWeight(0)))
///     .with_reducer(|surviving: MaxWeight, absorbed: MaxWeight, edge: Option<u32>| {
///         MaxWeight(surviving.0.max(absorbed.0).max(edge.unwrap_or(0)))
///     });
///
/// set.union_with_edge(0, 1, 3);
/// set.union_with_edge(1, 2, 7);
///
/// assert!(set.is_connected(0, 2));
/// assert_eq!(set.subset_props(0), &MaxWeight(7));
/// assert_eq!(set.subset_props(3), &MaxWeight(0));
/// assert_eq!(set.subsets(), vec![vec![0, 1, 2], vec![3]]);
/// ```
///
/// [disjoint-sets/union-find]: https://en.wikipedia.org/wiki/Disjoint-set_data_structure
pub struct DisjointSet<P, E = ()> {
    /// The properties of each subset stored at its root.
    /// A root that is absorbed by a union with a reducer has its entry cleared.
    props: Vec<Option<P>>,
    /// The metadata for each element, this vec will always have the same size as `props`.
    meta: Vec<Metadata>,
    /// The amount of roots in `meta`.
    num_subsets: usize,
    reducer: Option<Reducer<P, E>>,
}

/// Creates a [`DisjointSet`] of singletons.
///
/// - `disjoint_set![props; len]` gives every one of the `len` elements a clone of `props`.
/// - `disjoint_set![a, b, c]` gives element `i` the `i`-th properties.
///
/// ```
/// # #[macro_use]
/// # extern crate subset_props;
/// #
/// # fn main() {
/// let repeated = disjoint_set![0u8; 3];
/// assert_eq!(repeated.len(), 3);
///
/// let listed = disjoint_set!['a', 'b', 'c'];
/// assert_eq!(*listed.subset_props(1), 'b');
/// assert_eq!(listed.num_subsets(), 3);
/// # }
/// ```
///
/// [`DisjointSet`]: struct.DisjointSet.html
#[macro_export]
macro_rules! disjoint_set {
    ($props: expr; $len: expr) => {
        $crate::DisjointSet::with_initial_props($len, $crate::InitialProps::Fixed($props))
    };
    ($($props: expr),*) => {
        <$crate::DisjointSet<_>>::from(vec![$($props),*])
    };
    ($($props: expr,)*) => {
        $crate::disjoint_set![$($props),*]
    };
}

impl<P> DisjointSet<P> {
    /// Constructs a `DisjointSet<P>` of `len` singletons that each start with `P::default()`.
    ///
    /// No reducer is attached so unions leave the properties untouched.
    ///
    /// # Examples
    ///
    /// ```
    /// use subset_props::DisjointSet;
    ///
    /// let set: DisjointSet<Vec<u8>> = DisjointSet::new(5);
    ///
    /// assert_eq!(set.num_subsets(), 5);
    /// assert!(set.subset_props(4).is_empty());
    /// ```
    pub fn new(len: usize) -> Self where P: Default {
        Self::from_props((0 .. len).map(|_| P::default()).collect())
    }

    /// Constructs a `DisjointSet<P>` of `len` singletons with the given initial properties.
    ///
    /// # Examples
    ///
    /// ```
    /// use subset_props::{DisjointSet, InitialProps};
    ///
    /// let set = DisjointSet::with_initial_props(6, InitialProps::per_index(|i| i % 2 == 0));
    ///
    /// assert!(*set.subset_props(4));
    /// assert!(!*set.subset_props(5));
    /// ```
    pub fn with_initial_props(len: usize, initial: InitialProps<P>) -> Self where P: Clone {
        Self::from_props(initial.resolve(len))
    }

    fn from_props(props: Vec<P>) -> Self {
        let len = props.len();
        log::debug!("creating a disjoint set of {} elements", len);

        Self {
            props: props.into_iter().map(Some).collect(),
            meta: (0 .. len).map(Metadata::new).collect(),
            num_subsets: len,
            reducer: None,
        }
    }
}

impl<P, E> DisjointSet<P, E> {
    /// Attaches the reducer that combines properties on every union that merges two subsets.
    ///
    /// This is meant to be called directly after construction and fixes the type of the edge
    /// properties to those taken by `reducer`.
    /// Unions that happened before are not reduced again.
    ///
    /// The reducer is called after the trees are joined, so if it panics the subsets stay
    /// merged and the properties of the merged subset are lost.
    /// Any later call to `subset_props` for that subset will panic.
    pub fn with_reducer<D, F>(self, reducer: F) -> DisjointSet<P, D> where
        F: FnMut(P, P, Option<D>) -> P + Send + 'static,
    {
        log::debug!("attaching a reducer to a disjoint set of {} elements", self.len());

        DisjointSet {
            props: self.props,
            meta: self.meta,
            num_subsets: self.num_subsets,
            reducer: Some(Box::new(reducer)),
        }
    }

    /// Returns the amount of elements.
    #[inline]
    pub fn len(&self) -> usize {
        self.meta.len()
    }

    /// Returns `true` if there are no elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.meta.is_empty()
    }

    /// Returns the amount of subsets.
    ///
    /// This is kept up to date by `union` and is returned in `O(1)` time.
    ///
    /// # Examples
    ///
    /// ```
    /// use subset_props::DisjointSet;
    ///
    /// let mut set: DisjointSet<()> = DisjointSet::new(4);
    ///
    /// set.union(0, 1);
    /// set.union(1, 0);
    /// set.union(2, 2);
    ///
    /// assert_eq!(set.num_subsets(), 3);
    /// ```
    #[inline]
    pub fn num_subsets(&self) -> usize {
        self.num_subsets
    }

    /// Gives the root of the subset that `index` belongs to.
    ///
    /// Every element on the path to the root is linked directly to the root, so the tree
    /// changes shape while the subsets stay the same.
    /// This method will be executed in `O(α(n))` amortized time.
    ///
    /// # Panics
    ///
    /// If `index` is out of bounds.
    ///
    /// # Examples
    ///
    /// ```
    /// use subset_props::DisjointSet;
    ///
    /// let mut set: DisjointSet<()> = DisjointSet::new(3);
    /// assert_eq!(set.find(2), 2);
    ///
    /// let root = set.union(1, 2);
    /// assert_eq!(set.find(2), root);
    /// assert_eq!(set.find(1), root);
    /// ```
    #[track_caller]
    pub fn find(&self, index: usize) -> usize {
        unwrap_index(self.try_find(index))
    }

    /// Gives the root of the subset that `index` belongs to, or an error if `index` is out
    /// of bounds.
    pub fn try_find(&self, index: usize) -> Result<usize, IndexOutOfRange> {
        self.check_index(index)?;

        Ok(self.find_root(index))
    }

    /// Returns `true` if `first_index` and `second_index` are in the same subset.
    ///
    /// # Panics
    ///
    /// If `first_index` or `second_index` are out of bounds.
    ///
    /// # Examples
    ///
    /// ```
    /// use subset_props::DisjointSet;
    ///
    /// let mut set: DisjointSet<()> = DisjointSet::new(4);
    ///
    /// set.union(1, 3);
    /// set.union(0, 1);
    ///
    /// assert!(set.is_connected(0, 3));
    /// assert!(!set.is_connected(0, 2));
    /// assert!(set.is_connected(2, 2));
    /// ```
    #[inline]
    #[track_caller]
    pub fn is_connected(&self, first_index: usize, second_index: usize) -> bool {
        self.find(first_index) == self.find(second_index)
    }

    /// Returns `true` if `first_index` and `second_index` are in different subsets.
    ///
    /// # Panics
    ///
    /// If `first_index` or `second_index` are out of bounds.
    #[inline]
    #[track_caller]
    pub fn other_sets(&self, first_index: usize, second_index: usize) -> bool {
        self.find(first_index) != self.find(second_index)
    }

    /// Joins the subsets of `first_index` and `second_index` and returns the new root.
    ///
    /// The root of the tree with the lower rank is placed below the other root.
    /// When the ranks are equal the root of `first_index` stays the root.
    /// If both are already in the same subset nothing changes and the reducer is not called.
    ///
    /// # Panics
    ///
    /// If `first_index` or `second_index` is out of bounds.
    ///
    /// # Examples
    ///
    /// ```
    /// use subset_props::DisjointSet;
    ///
    /// let mut set: DisjointSet<()> = DisjointSet::new(4);
    ///
    /// assert_eq!(set.union(1, 2), 1);
    /// // The tree of 1 is higher so it stays the root.
    /// assert_eq!(set.union(3, 2), 1);
    /// assert_eq!(set.num_subsets(), 2);
    /// ```
    #[track_caller]
    pub fn union(&mut self, first_index: usize, second_index: usize) -> usize {
        unwrap_index(self.merge(first_index, second_index, None))
    }

    /// Joins the subsets of `first_index` and `second_index` and passes `edge` to the reducer.
    ///
    /// See `union` for more information.
    ///
    /// # Panics
    ///
    /// If `first_index` or `second_index` is out of bounds.
    #[track_caller]
    pub fn union_with_edge(&mut self, first_index: usize, second_index: usize, edge: E) -> usize {
        unwrap_index(self.merge(first_index, second_index, Some(edge)))
    }

    /// Like `union` but returns an error if an index is out of bounds.
    ///
    /// Nothing is changed when an error is returned.
    pub fn try_union(&mut self, first_index: usize, second_index: usize)
        -> Result<usize, IndexOutOfRange>
    {
        self.merge(first_index, second_index, None)
    }

    /// Like `union_with_edge` but returns an error if an index is out of bounds.
    ///
    /// Nothing is changed when an error is returned.
    pub fn try_union_with_edge(&mut self, first_index: usize, second_index: usize, edge: E)
        -> Result<usize, IndexOutOfRange>
    {
        self.merge(first_index, second_index, Some(edge))
    }

    /// Returns all subsets.
    ///
    /// Every subset is sorted and the subsets are sorted by their smallest element.
    /// This is computed on every call in `O(n α(n))` time.
    ///
    /// # Examples
    ///
    /// ```
    /// use subset_props::DisjointSet;
    ///
    /// let mut set: DisjointSet<()> = DisjointSet::new(5);
    ///
    /// set.union(4, 1);
    /// set.union(3, 0);
    ///
    /// assert_eq!(set.subsets(), vec![vec![0, 3], vec![1, 4], vec![2]]);
    /// ```
    pub fn subsets(&self) -> Vec<Vec<usize>> {
        let mut done = bit_vec![false; self.len()];
        // The position in `subsets` of the subset with a given root.
        let mut positions = vec![0; self.len()];
        let mut subsets: Vec<Vec<usize>> = Vec::with_capacity(self.num_subsets);

        // Visiting the indices in order keeps each subset sorted and
        // orders the subsets by their smallest element.
        for i in 0 .. self.len() {
            let root = self.find_root(i);

            if done[root] {
                subsets[positions[root]].push(i);
            } else {
                done.set(root, true);
                positions[root] = subsets.len();
                subsets.push(vec![i]);
            }
        }

        subsets
    }

    /// Returns the sorted elements of the subset that `index` belongs to.
    ///
    /// This checks every element and takes `O(n α(n))` time.
    ///
    /// # Panics
    ///
    /// If `index` is out of bounds.
    ///
    /// # Examples
    ///
    /// ```
    /// use subset_props::DisjointSet;
    ///
    /// let mut set: DisjointSet<()> = DisjointSet::new(5);
    ///
    /// set.union(4, 1);
    /// set.union(0, 4);
    ///
    /// assert_eq!(set.subset(1), vec![0, 1, 4]);
    /// assert_eq!(set.subset(3), vec![3]);
    /// ```
    #[track_caller]
    pub fn subset(&self, index: usize) -> Vec<usize> {
        let root = self.find(index);

        (0 .. self.len()).filter(|&i| self.find_root(i) == root).collect()
    }

    /// Returns the properties of the subset that `index` belongs to.
    ///
    /// # Panics
    ///
    /// If `index` is out of bounds or if the properties were lost to a panicking reducer.
    ///
    /// # Examples
    ///
    /// ```
    /// use subset_props::{DisjointSet, InitialProps};
    ///
    /// let mut set = DisjointSet::with_initial_props(3, InitialProps::per_index(|i| i as u32))
    ///     .with_reducer(|surviving: u32, absorbed: u32, _: Option<()>| surviving + absorbed);
    ///
    /// set.union(1, 2);
    ///
    /// assert_eq!(*set.subset_props(0), 0);
    /// assert_eq!(*set.subset_props(2), 3);
    /// ```
    #[track_caller]
    pub fn subset_props(&self, index: usize) -> &P {
        unwrap_index(self.try_subset_props(index))
    }

    /// Like `subset_props` but returns an error if `index` is out of bounds.
    ///
    /// # Panics
    ///
    /// If the properties were lost to a panicking reducer.
    pub fn try_subset_props(&self, index: usize) -> Result<&P, IndexOutOfRange> {
        let root = self.try_find(index)?;

        match &self.props[root] {
            Some(props) => Ok(props),
            None => panic!("the properties of the subset of {} were lost to a panicking reducer", index),
        }
    }

    /// Returns a mutable reference to the properties of the subset that `index` belongs to.
    ///
    /// # Panics
    ///
    /// If `index` is out of bounds or if the properties were lost to a panicking reducer.
    ///
    /// # Examples
    ///
    /// ```
    /// use subset_props::DisjointSet;
    ///
    /// let mut set: DisjointSet<Vec<&str>> = DisjointSet::new(3);
    ///
    /// set.union(0, 2);
    /// set.subset_props_mut(2).push("label");
    ///
    /// assert_eq!(set.subset_props(0), &vec!["label"]);
    /// assert!(set.subset_props(1).is_empty());
    /// ```
    #[track_caller]
    pub fn subset_props_mut(&mut self, index: usize) -> &mut P {
        let root = self.find(index);

        match &mut self.props[root] {
            Some(props) => props,
            None => panic!("the properties of the subset of {} were lost to a panicking reducer", index),
        }
    }

    fn check_index(&self, index: usize) -> Result<(), IndexOutOfRange> {
        if index < self.len() {
            Ok(())
        } else {
            Err(IndexOutOfRange { index, len: self.len() })
        }
    }

    /// Gives the root of `index` while compressing the path to it.
    ///
    /// The recursion depth is bounded by the rank of the root which is below the amount
    /// of bits in a `usize`.
    fn find_root(&self, index: usize) -> usize {
        let parent = self.meta[index].parent();

        // If the node is its own parent we have found the root.
        if parent == index {
            index
        } else {
            let root = self.find_root(parent);

            // We update the parent to the root for a lower tree.
            self.meta[index].set_parent(root);

            root
        }
    }

    fn merge(&mut self, first_index: usize, second_index: usize, edge: Option<E>)
        -> Result<usize, IndexOutOfRange>
    {
        let i = self.try_find(first_index)?;
        let j = self.try_find(second_index)?;

        if i == j {
            return Ok(i)
        }

        // We add to the tree with the highest rank.
        let (root, absorbed) = match Ord::cmp(&self.meta[i].rank(), &self.meta[j].rank()) {
            Ordering::Less => (j, i),
            Ordering::Equal => {
                // The first tree becomes larger.
                self.meta[i].set_rank(self.meta[i].rank() + 1);
                (i, j)
            },
            Ordering::Greater => (i, j),
        };

        self.meta[absorbed].set_parent(root);
        self.num_subsets -= 1;

        if let Some(reducer) = self.reducer.as_mut() {
            let surviving_props = self.props[root].take();
            let absorbed_props = self.props[absorbed].take();

            // Lost properties stay lost.
            if let (Some(surviving_props), Some(absorbed_props)) = (surviving_props, absorbed_props) {
                self.props[root] = Some(reducer(surviving_props, absorbed_props, edge));
            }
        }

        log::trace!("merged subset {} into {}, {} subsets left", absorbed, root, self.num_subsets);

        Ok(root)
    }
}

impl<P, E> fmt::Debug for DisjointSet<P, E> where P: fmt::Debug {
    fn fmt(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        // We map the roots to `usize` names.
        let mut names = HashMap::with_capacity(self.num_subsets);
        let mut builder = formatter.debug_list();

        for i in 0 .. self.len() {
            let root = self.find_root(i);
            let new_name = names.len();
            let name = *names.entry(root).or_insert(new_name);

            match &self.props[root] {
                Some(props) => builder.entry(&format_args!("{:?} => {}", props, name)),
                None => builder.entry(&format_args!("_ => {}", name)),
            };
        }

        builder.finish()
    }
}

impl<P, E> PartialEq for DisjointSet<P, E> where P: PartialEq {
    fn eq(&self, other: &Self) -> bool {
        if self.len() != other.len() || self.num_subsets != other.num_subsets {
            return false
        }

        // We map the roots of self to the roots of other.
        let mut map = HashMap::with_capacity(self.num_subsets);

        for i in 0 .. self.len() {
            let self_root = self.find_root(i);
            let other_root = other.find_root(i);

            if let Some(&root) = map.get(&self_root) {
                // If we have seen this root we check if we have the same map.
                if root != other_root {
                    return false
                }
            } else {
                // The partition of other is now at least as coarse as that of self.
                // With the same amount of subsets they are equal.
                if self.props[self_root] != other.props[other_root] {
                    return false
                }

                map.insert(self_root, other_root);
            }
        }

        true
    }
}

impl<P, E> Eq for DisjointSet<P, E> where P: Eq {}

impl<P> From<Vec<P>> for DisjointSet<P> {
    fn from(props: Vec<P>) -> Self {
        Self::from_props(props)
    }
}

impl<P> FromIterator<P> for DisjointSet<P> {
    fn from_iter<I>(iter: I) -> Self where I: IntoIterator<Item = P> {
        Self::from_props(Vec::from_iter(iter))
    }
}

#[cfg(feature = "rayon")]
impl<P> FromParallelIterator<P> for DisjointSet<P> where P: Send {
    fn from_par_iter<I>(par_iter: I) -> Self where I: IntoParallelIterator<Item = P> {
        Self::from_props(par_iter.into_par_iter().collect())
    }
}

#[cfg(feature = "proptest")]
impl<P> Arbitrary for DisjointSet<P> where
    P: Arbitrary,
    P::Strategy: 'static,
{
    type Parameters = (proptest::collection::SizeRange, P::Parameters);
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with(params: Self::Parameters) -> Self::Strategy {
        use std::collections::hash_map;

        let (size_range, params) = params;
        let params = (size_range, (params, ()));

        (Vec::<(P, usize)>::arbitrary_with(params)).prop_map(|vec| {
            let (props, set_numbers): (Vec<P>, Vec<usize>) = vec.into_iter().unzip();
            let mut disjoint_set = Self::from_props(props);

            // We map a `set_number` to an `index` of that subset.
            let mut map = hash_map::HashMap::with_capacity(set_numbers.len());

            for (index, set_number) in set_numbers.into_iter().enumerate() {
                match map.entry(set_number.trailing_zeros()) {
                    hash_map::Entry::Occupied(occupied) => {
                        disjoint_set.union(index, *occupied.get());
                    },
                    hash_map::Entry::Vacant(vacant) => {
                        vacant.insert(index);
                    },
                }
            }

            disjoint_set
        }).boxed()
    }
}

#[cfg(test)]
mod tests {
    use {
        super::*,
        std::{
            collections::BTreeMap,
            panic::{
                self,
                AssertUnwindSafe,
            },
            sync::Mutex,
        },
    };

    #[derive(Clone, Debug, Default, PartialEq)]
    struct MaxWeight {
        max_weight: u32,
    }

    struct Weight {
        weight: u32,
    }

    type Labels = BTreeMap<&'static str, u32>;

    fn max_weight_set() -> DisjointSet<MaxWeight, Weight> {
        DisjointSet::with_initial_props(6, InitialProps::Fixed(MaxWeight { max_weight: 0 }))
            .with_reducer(|surviving: MaxWeight, absorbed: MaxWeight, edge: Option<Weight>| {
                let edge_weight = edge.map_or(0, |edge| edge.weight);

                MaxWeight {
                    max_weight: surviving.max_weight.max(absorbed.max_weight).max(edge_weight),
                }
            })
    }

    #[test]
    fn new_is_all_singletons() {
        let set: DisjointSet<MaxWeight> = DisjointSet::new(7);

        assert_eq!(set.len(), 7);
        assert_eq!(set.num_subsets(), 7);

        for i in 0 .. 7 {
            assert_eq!(set.find(i), i);
            assert_eq!(set.subset(i), vec![i]);
            assert_eq!(set.subset_props(i), &MaxWeight::default());
        }
    }

    #[test]
    fn empty() {
        let set: DisjointSet<()> = DisjointSet::new(0);

        assert!(set.is_empty());
        assert_eq!(set.num_subsets(), 0);
        assert!(set.subsets().is_empty());
        assert_eq!(set.try_find(0), Err(IndexOutOfRange { index: 0, len: 0 }));
    }

    #[test]
    fn classic_union_sequence() {
        let mut set: DisjointSet<()> = DisjointSet::new(10);

        for &(x, y) in &[(4, 3), (3, 8), (6, 5), (9, 4), (2, 1), (8, 9), (5, 0), (7, 2), (6, 1), (1, 0), (6, 7)] {
            set.union(x, y);
        }

        assert_eq!(set.num_subsets(), 2);

        for &i in &[1, 2, 5, 6, 7] {
            assert!(set.is_connected(0, i));
        }
        for &i in &[4, 8, 9] {
            assert!(set.is_connected(3, i));
        }
        assert!(!set.is_connected(0, 3));
        assert!(set.other_sets(0, 3));

        assert_eq!(set.subsets(), vec![vec![0, 1, 2, 5, 6, 7], vec![3, 4, 8, 9]]);
        assert_eq!(set.subset(2), vec![0, 1, 2, 5, 6, 7]);
        assert_eq!(set.subset(8), vec![3, 4, 8, 9]);
    }

    #[test]
    fn max_weight() {
        let mut set = max_weight_set();

        set.union_with_edge(0, 1, Weight { weight: 2 });
        set.union_with_edge(1, 2, Weight { weight: 4 });
        set.union_with_edge(3, 4, Weight { weight: 6 });

        assert_eq!(set.subset_props(0).max_weight, 4);
        assert_eq!(set.subset_props(3).max_weight, 6);
        assert_eq!(set.subset_props(5).max_weight, 0);
    }

    #[test]
    fn union_without_edge_uses_none() {
        let mut set = max_weight_set();

        set.union_with_edge(0, 1, Weight { weight: 5 });
        set.union(2, 1);

        assert_eq!(set.subset_props(2).max_weight, 5);
    }

    #[test]
    fn initial_props_fixed() {
        let set = DisjointSet::with_initial_props(5, InitialProps::Fixed(1));

        assert_eq!(*set.subset_props(1), 1);
        assert_eq!(*set.subset_props(3), 1);
    }

    #[test]
    fn initial_props_per_index() {
        let set = DisjointSet::with_initial_props(6, InitialProps::per_index(|i| i));

        assert_eq!(*set.subset_props(1), 1);
        assert_eq!(*set.subset_props(3), 3);
    }

    #[test]
    fn without_reducer() {
        let mut set = DisjointSet::with_initial_props(5, InitialProps::per_index(|i| i * 2));

        set.union(0, 1);
        set.union(0, 3);
        set.union(2, 4);

        assert!(set.is_connected(1, 3));
        assert!(set.is_connected(2, 4));
        assert!(!set.is_connected(0, 2));
        assert_eq!(set.subset(0), vec![0, 1, 3]);
        assert_eq!(set.subset(4), vec![2, 4]);

        // The roots keep the properties they started with.
        assert_eq!(*set.subset_props(1), 0);
        assert_eq!(*set.subset_props(4), 4);
    }

    #[test]
    fn without_reducer_props_stay_default() {
        let mut set: DisjointSet<Labels> = DisjointSet::new(5);

        assert!(set.subset_props(0).is_empty());
        set.union(1, 3);
        set.union(0, 3);
        assert!(set.subset_props(0).is_empty());
        assert!(set.subset_props(3).is_empty());
    }

    #[test]
    fn reducer_merges_maps() {
        let mut set = DisjointSet::<Labels>::new(5)
            .with_reducer(|mut surviving: Labels, absorbed: Labels, edge: Option<Labels>| {
                surviving.extend(absorbed);
                if let Some(edge) = edge {
                    surviving.extend(edge);
                }
                surviving
            });

        set.union_with_edge(0, 1, vec![("w", 10)].into_iter().collect());
        set.union_with_edge(0, 3, vec![("u", 2)].into_iter().collect());
        set.union_with_edge(1, 4, vec![("w", 5)].into_iter().collect());

        let expected: Labels = vec![("u", 2), ("w", 5)].into_iter().collect();
        assert_eq!(set.subset_props(1), &expected);
    }

    #[test]
    fn reducer_argument_order() {
        let mut set = DisjointSet::with_initial_props(4, InitialProps::per_index(|i| vec![i]))
            .with_reducer(|mut surviving: Vec<usize>, absorbed, edge: Option<usize>| {
                surviving.extend(absorbed);
                surviving.extend(edge);
                surviving
            });

        // Equal ranks, the root of the first index survives.
        assert_eq!(set.union_with_edge(0, 1, 10), 0);
        assert_eq!(set.subset_props(1), &vec![0, 1, 10]);

        // The root of the first index has the lower rank and is absorbed.
        assert_eq!(set.union_with_edge(2, 0, 20), 0);
        assert_eq!(set.subset_props(2), &vec![0, 1, 10, 2, 20]);
    }

    #[test]
    fn tie_break_and_rank() {
        let mut set: DisjointSet<()> = DisjointSet::new(5);

        assert_eq!(set.union(0, 1), 0);
        assert_eq!(set.union(3, 2), 3);
        // Both roots have rank 1.
        assert_eq!(set.union(2, 0), 3);
        // The root of 0 has rank 2 now.
        assert_eq!(set.union(4, 0), 3);
        assert_eq!(set.meta[3].rank(), 2);
        assert_eq!(set.meta[4].rank(), 0);
    }

    #[test]
    fn union_same_subset_is_inert() {
        let mut set = DisjointSet::with_initial_props(3, InitialProps::Fixed(0u32))
            .with_reducer(|surviving: u32, absorbed: u32, _: Option<()>| surviving + absorbed + 1);

        assert_eq!(set.union(1, 1), 1);
        assert_eq!(set.num_subsets(), 3);
        assert_eq!(*set.subset_props(1), 0);

        let root = set.union(0, 2);
        assert_eq!(*set.subset_props(0), 1);
        assert_eq!(set.union(2, 0), root);
        assert_eq!(set.union(0, 2), root);
        assert_eq!(set.num_subsets(), 2);
        // The reducer ran only once.
        assert_eq!(*set.subset_props(2), 1);
    }

    #[test]
    fn union_is_commutative_for_connectivity() {
        let pairs = [(0, 1), (2, 3), (1, 3), (4, 5)];
        let mut forward: DisjointSet<()> = DisjointSet::new(6);
        let mut backward: DisjointSet<()> = DisjointSet::new(6);

        for &(x, y) in &pairs {
            forward.union(x, y);
            backward.union(y, x);
        }

        for x in 0 .. 6 {
            for y in 0 .. 6 {
                assert_eq!(forward.is_connected(x, y), backward.is_connected(x, y));
            }
        }
        assert_eq!(forward.subsets(), backward.subsets());
    }

    #[test]
    fn find_compresses_paths() {
        let mut set: DisjointSet<()> = DisjointSet::new(4);

        set.union(0, 1);
        set.union(2, 3);
        set.union(0, 2);

        // 3 hangs below 2 which hangs below 0.
        assert_eq!(set.meta[3].parent(), 2);

        assert_eq!(set.find(3), 0);
        assert_eq!(set.meta[3].parent(), 0);
        assert_eq!(set.find(3), 0);
        assert_eq!(set.subset(3), vec![0, 1, 2, 3]);
    }

    #[test]
    fn absorbed_props_are_cleared() {
        let mut set = DisjointSet::with_initial_props(2, InitialProps::Fixed(1u8))
            .with_reducer(|surviving: u8, absorbed: u8, _: Option<()>| surviving + absorbed);

        set.union(0, 1);

        assert!(set.props[0].is_some());
        assert!(set.props[1].is_none());
        assert_eq!(*set.subset_props(1), 2);
    }

    #[test]
    fn subset_props_mut() {
        let mut set: DisjointSet<u32> = DisjointSet::new(3);

        set.union(2, 0);
        *set.subset_props_mut(0) += 7;

        assert_eq!(*set.subset_props(2), 7);
        assert_eq!(*set.subset_props(1), 0);
    }

    #[test]
    fn try_methods_report_out_of_range() {
        let mut set: DisjointSet<()> = DisjointSet::new(3);
        let error = IndexOutOfRange { index: 3, len: 3 };

        assert_eq!(set.try_find(3), Err(error));
        assert_eq!(set.try_union(0, 3), Err(error));
        assert_eq!(set.try_union_with_edge(3, 0, ()), Err(error));
        assert_eq!(set.try_subset_props(3), Err(error));

        // Nothing changed.
        assert_eq!(set.num_subsets(), 3);
        assert_eq!(set.try_union(0, 2), Ok(0));
    }

    #[test]
    fn error_message() {
        let error = IndexOutOfRange { index: 10, len: 10 };

        assert_eq!(error.to_string(), "index 10 is out of range for 10 elements");
    }

    #[test]
    #[should_panic(expected = "index 10 is out of range for 10 elements")]
    fn find_out_of_range_panics() {
        let set: DisjointSet<()> = DisjointSet::new(10);

        set.find(10);
    }

    #[test]
    #[should_panic(expected = "index 5 is out of range for 2 elements")]
    fn union_out_of_range_panics() {
        let mut set: DisjointSet<()> = DisjointSet::new(2);

        set.union(0, 5);
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn subset_out_of_range_panics() {
        let set: DisjointSet<()> = DisjointSet::new(2);

        set.subset(2);
    }

    #[test]
    fn panicking_reducer_keeps_the_merge() {
        let mut set = DisjointSet::with_initial_props(3, InitialProps::Fixed(0u8))
            .with_reducer(|_: u8, _: u8, _: Option<()>| -> u8 { panic!("reducer failed") });

        let result = panic::catch_unwind(AssertUnwindSafe(|| set.union(0, 1)));
        assert!(result.is_err());

        assert!(set.is_connected(0, 1));
        assert_eq!(set.num_subsets(), 2);
        assert_eq!(*set.subset_props(2), 0);

        let result = panic::catch_unwind(AssertUnwindSafe(|| *set.subset_props(1)));
        assert!(result.is_err());
    }

    #[test]
    fn from_iter() {
        let set: DisjointSet<char> = "abc".chars().collect();

        assert_eq!(set.len(), 3);
        assert_eq!(*set.subset_props(2), 'c');
        assert_eq!(set.num_subsets(), 3);
    }

    #[cfg(feature = "rayon")]
    #[test]
    fn from_par_iter() {
        let set: DisjointSet<usize> = (0 .. 100usize).into_par_iter().map(|i| i * i).collect();

        assert_eq!(set.len(), 100);
        assert_eq!(*set.subset_props(9), 81);
    }

    #[test]
    fn debug() {
        let mut set = disjoint_set!['a', 'b', 'c', 'd'];

        set.union(2, 0);
        set.union(3, 1);

        assert_eq!(format!("{:?}", set), "['c' => 0, 'd' => 1, 'c' => 0, 'd' => 1]");
    }

    #[test]
    fn eq_compares_partition_and_props() {
        let mut first = disjoint_set![0u8; 4];
        let mut second = disjoint_set![0u8; 4];

        first.union(0, 1);
        second.union(1, 0);
        assert_eq!(first, second);

        first.union(2, 3);
        assert_ne!(first, second);

        second.union(3, 2);
        assert_eq!(first, second);

        *second.subset_props_mut(3) = 1;
        assert_ne!(first, second);
    }

    #[test]
    fn can_be_shared_behind_a_mutex() {
        fn assert_sync<T: Sync>(_: &T) {}

        let set = Mutex::new(max_weight_set());
        assert_sync(&set);

        set.lock().unwrap().union_with_edge(0, 5, Weight { weight: 3 });
        assert_eq!(set.lock().unwrap().subset_props(5).max_weight, 3);
    }
}
