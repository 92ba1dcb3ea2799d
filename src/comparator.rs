//! Orderings used to sort the keys of a [`SkipList`][crate::SkipList].
//!
//! A comparator answers a single question: does `a` strictly precede `b`?
//! The list has no separate notion of equality. Two keys are *equivalent*
//! when neither precedes the other, which is the same convention used by
//! ordered containers elsewhere.
//!
//! The comparator **must** be a strict weak ordering:
//!
//! - Irreflexive: `less(a, a)` is always `false`.
//! - Asymmetric: if `less(a, b)` then `!less(b, a)`.
//! - Transitive: if `less(a, b)` and `less(b, c)` then `less(a, c)`.
//! - Equivalence is transitive: if `a ~ b` and `b ~ c` then `a ~ c`.
//!
//! Violating these properties does not cause memory unsafety, but searches
//! and de-duplication will return meaningless results.

/// A strict weak ordering over keys of type `K`.
pub trait Comparator<K: ?Sized> {
    /// Returns `true` iff `a` strictly precedes `b`.
    #[must_use]
    fn less(&self, a: &K, b: &K) -> bool;

    /// Returns `true` iff neither key precedes the other.
    #[inline]
    #[must_use]
    fn equivalent(&self, a: &K, b: &K) -> bool {
        !self.less(a, b) && !self.less(b, a)
    }
}

/// Sorts keys in ascending order of their [`Ord`] implementation.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Ascending;

impl<K: Ord + ?Sized> Comparator<K> for Ascending {
    #[inline]
    fn less(&self, a: &K, b: &K) -> bool {
        a < b
    }
}

/// Sorts keys in descending order of their [`Ord`] implementation.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Descending;

impl<K: Ord + ?Sized> Comparator<K> for Descending {
    #[inline]
    fn less(&self, a: &K, b: &K) -> bool {
        a > b
    }
}

impl<K: ?Sized, F> Comparator<K> for F
where
    F: Fn(&K, &K) -> bool,
{
    #[inline]
    fn less(&self, a: &K, b: &K) -> bool {
        self(a, b)
    }
}
