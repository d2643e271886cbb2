//! Unordered pairs of same-typed values.
//!
//! [`UnorderedPair`] is the element type of generated edge sets: swapping its
//! two components yields an equal value with an equal hash, so inserting
//! `(a, b)` and `(b, a)` into a `HashSet` keeps a single entry.

use std::{
    fmt,
    hash::{Hash, Hasher},
};

/// An undirected edge between two node indices in `[0, number_of_nodes)`.
pub type Edge = UnorderedPair<usize>;

/// Two values of the same type whose order carries no meaning.
///
/// Equality and hashing are symmetric. No ordering between the components is
/// exposed; [`first`](Self::first) and [`second`](Self::second) simply return
/// the values in construction order.
///
/// # Examples
/// ```
/// use std::collections::HashSet;
/// use randgraph_core::UnorderedPair;
///
/// assert_eq!(UnorderedPair::new(1, 2), UnorderedPair::new(2, 1));
///
/// let mut set = HashSet::new();
/// set.insert(UnorderedPair::new(3, 7));
/// assert!(!set.insert(UnorderedPair::new(7, 3)));
/// assert_eq!(set.len(), 1);
/// ```
#[derive(Clone, Copy, Debug)]
pub struct UnorderedPair<T> {
    first: T,
    second: T,
}

impl<T> UnorderedPair<T> {
    /// Creates a pair from two values.
    #[must_use]
    pub const fn new(first: T, second: T) -> Self {
        Self { first, second }
    }

    /// Returns the value supplied first.
    #[must_use]
    pub const fn first(&self) -> &T {
        &self.first
    }

    /// Returns the value supplied second.
    #[must_use]
    pub const fn second(&self) -> &T {
        &self.second
    }

    /// Consumes the pair and returns both values in construction order.
    #[must_use]
    pub fn into_inner(self) -> (T, T) {
        (self.first, self.second)
    }
}

impl<T: PartialEq> UnorderedPair<T> {
    /// Returns `true` when either component equals `value`.
    #[must_use]
    pub fn contains(&self, value: &T) -> bool {
        self.first == *value || self.second == *value
    }

    /// Returns `true` when both components are equal.
    #[must_use]
    pub fn is_loop(&self) -> bool {
        self.first == self.second
    }

    /// Returns the component opposite `value`, or `None` when `value` is not
    /// part of the pair.
    ///
    /// # Examples
    /// ```
    /// use randgraph_core::UnorderedPair;
    ///
    /// let pair = UnorderedPair::new(4, 9);
    /// assert_eq!(pair.other(&4), Some(&9));
    /// assert_eq!(pair.other(&9), Some(&4));
    /// assert_eq!(pair.other(&5), None);
    /// ```
    #[must_use]
    pub fn other(&self, value: &T) -> Option<&T> {
        if self.first == *value {
            Some(&self.second)
        } else if self.second == *value {
            Some(&self.first)
        } else {
            None
        }
    }
}

impl<T: PartialEq> PartialEq for UnorderedPair<T> {
    fn eq(&self, other: &Self) -> bool {
        (self.first == other.first && self.second == other.second)
            || (self.first == other.second && self.second == other.first)
    }
}

impl<T: Eq> Eq for UnorderedPair<T> {}

impl<T: Hash + Ord> Hash for UnorderedPair<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        // Hash in canonical order so swapped pairs collide.
        if self.first <= self.second {
            self.first.hash(state);
            self.second.hash(state);
        } else {
            self.second.hash(state);
            self.first.hash(state);
        }
    }
}

impl<T> From<(T, T)> for UnorderedPair<T> {
    fn from((first, second): (T, T)) -> Self {
        Self::new(first, second)
    }
}

impl<T: fmt::Display> fmt::Display for UnorderedPair<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.first, self.second)
    }
}
