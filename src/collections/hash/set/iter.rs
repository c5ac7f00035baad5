use std::hash::{BuildHasher, Hash};
use std::iter::{self, FusedIterator};

use super::ChainedHashSet;
use crate::collections::hash::map::{ChainedHashMap, IntoKeys, Keys};

impl<T: Hash + Eq, B: BuildHasher> IntoIterator for ChainedHashSet<T, B> {
    type Item = T;

    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter(self.inner.into_keys())
    }
}

/// An owning iterator over the items of a [`ChainedHashSet`], in bucket order.
pub struct IntoIter<T>(
    pub(crate) IntoKeys<T, ()>,
);

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.0.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.0.size_hint()
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> FusedIterator for IntoIter<T> {}

impl<'a, T: Hash + Eq, B: BuildHasher> IntoIterator for &'a ChainedHashSet<T, B> {
    type Item = &'a T;

    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        Iter(self.inner.keys())
    }
}

/// A borrowing iterator over the items of a [`ChainedHashSet`], in bucket order.
pub struct Iter<'a, T>(
    pub(crate) Keys<'a, T, ()>,
);

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.0.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.0.size_hint()
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> FusedIterator for Iter<'_, T> {}

/// The items of one set, kept or skipped depending on whether the backing map of another set has
/// them as keys. With `keep_shared` this is an intersection, otherwise a difference.
///
/// Each item costs one chain scan in the other set, so the whole pass is `O(n)` on average.
pub struct Membership<'a, T: Hash + Eq, B: BuildHasher> {
    pub(crate) items: Iter<'a, T>,
    pub(crate) other: &'a ChainedHashMap<T, (), B>,
    pub(crate) keep_shared: bool,
}

impl<'a, T: Hash + Eq, B: BuildHasher> Iterator for Membership<'a, T, B> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let other = self.other;
        let keep_shared = self.keep_shared;
        self.items.find(|item| other.contains_key(*item) == keep_shared)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        // Anywhere from none to all of the remaining items may be filtered out.
        (0, self.items.size_hint().1)
    }
}

impl<T: Hash + Eq, B: BuildHasher> FusedIterator for Membership<'_, T, B> {}

/// Every item of the first set, followed by the items of the second that the first lacks.
pub type Union<'a, T, B> = iter::Chain<Iter<'a, T>, Membership<'a, T, B>>;
