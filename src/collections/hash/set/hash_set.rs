use std::borrow::Borrow;
use std::fmt::{self, Debug, Display, Formatter};
use std::hash::{BuildHasher, Hash, RandomState};
use std::ops::{BitAnd, BitOr, Sub};

use super::{Iter, Membership, Union};
use crate::collections::hash::map::{ChainedHashMap, InsertError};

/// A set of unique values, stored as the keys of a [`ChainedHashMap`] with no values. It shares
/// the map's chaining and growth behavior.
#[derive(Clone)]
pub struct ChainedHashSet<T: Hash + Eq, B: BuildHasher = RandomState> {
    // Yay, we get to do the thing where unit type evaluates to a no-op.
    pub(crate) inner: ChainedHashMap<T, (), B>,
}

impl<T: Hash + Eq> ChainedHashSet<T> {
    pub fn new() -> ChainedHashSet<T> {
        ChainedHashSet {
            inner: ChainedHashMap::new(),
        }
    }
}

impl<T: Hash + Eq, B: BuildHasher> ChainedHashSet<T, B> {
    pub fn with_hasher(hasher: B) -> ChainedHashSet<T, B> {
        ChainedHashSet {
            inner: ChainedHashMap::with_hasher(hasher),
        }
    }

    pub const fn len(&self) -> usize {
        self.inner.len()
    }

    pub const fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    pub const fn bucket_count(&self) -> usize {
        self.inner.bucket_count()
    }

    /// Adds `item` to the set, returning true if it wasn't already present. An existing equal item
    /// is kept rather than replaced.
    ///
    /// # Panics
    /// Panics if the set needs to grow but the larger table can't be allocated.
    pub fn insert(&mut self, item: T) -> bool {
        self.inner.insert(item, ()).is_none()
    }

    /// Adds `item` to the set, reporting an absent item or a failed growth as an error instead.
    /// See [`ChainedHashMap::try_insert`].
    pub fn try_insert(&mut self, item: Option<T>) -> Result<bool, InsertError> {
        Ok(self.inner.try_insert(item, ())?.is_none())
    }

    /// Removes the item equal to `item`, returning true if there was one.
    pub fn remove<Q>(&mut self, item: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.inner.remove(item).is_some()
    }

    /// Removes and returns the item equal to `item`, if there is one.
    pub fn take<Q>(&mut self, item: &Q) -> Option<T>
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.inner.remove_entry(item).map(|e| e.0)
    }

    pub fn contains<Q>(&self, item: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.inner.contains_key(item)
    }

    pub fn clear(&mut self) {
        self.inner.clear()
    }

    pub fn iter(&self) -> Iter<'_, T> {
        self.into_iter()
    }

    /// Returns an iterator over the items in self that aren't in `other`.
    pub fn difference<'a>(&'a self, other: &'a ChainedHashSet<T, B>) -> Membership<'a, T, B> {
        self.filter_by(other, false)
    }

    /// Returns an iterator over the items that are in both self and `other`.
    pub fn intersection<'a>(&'a self, other: &'a ChainedHashSet<T, B>) -> Membership<'a, T, B> {
        self.filter_by(other, true)
    }

    /// Returns an iterator over the items in either self or `other`, without duplicates.
    pub fn union<'a>(&'a self, other: &'a ChainedHashSet<T, B>) -> Union<'a, T, B> {
        self.iter().chain(other.difference(self))
    }

    fn filter_by<'a>(
        &'a self,
        other: &'a ChainedHashSet<T, B>,
        keep_shared: bool,
    ) -> Membership<'a, T, B> {
        Membership {
            items: self.iter(),
            other: &other.inner,
            keep_shared,
        }
    }

    pub fn is_subset(&self, other: &ChainedHashSet<T, B>) -> bool {
        self.len() <= other.len() && self.difference(other).next().is_none()
    }

    pub fn is_superset(&self, other: &ChainedHashSet<T, B>) -> bool {
        other.is_subset(self)
    }
}

impl<T: Hash + Eq, B: BuildHasher + Default> Default for ChainedHashSet<T, B> {
    fn default() -> Self {
        ChainedHashSet::with_hasher(B::default())
    }
}

impl<T: Hash + Eq, B: BuildHasher> PartialEq for ChainedHashSet<T, B> {
    fn eq(&self, other: &Self) -> bool {
        self.inner == other.inner
    }
}

impl<T: Hash + Eq, B: BuildHasher> Eq for ChainedHashSet<T, B> {}

impl<T: Hash + Eq, B: BuildHasher + Default> FromIterator<T> for ChainedHashSet<T, B> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut set = ChainedHashSet::default();
        set.extend(iter);
        set
    }
}

impl<T: Hash + Eq, B: BuildHasher> Extend<T> for ChainedHashSet<T, B> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.insert(item);
        }
    }
}

impl<T: Hash + Eq + Clone, B: BuildHasher + Default> BitOr for &ChainedHashSet<T, B> {
    type Output = ChainedHashSet<T, B>;

    fn bitor(self, rhs: Self) -> Self::Output {
        self.union(rhs).cloned().collect()
    }
}

impl<T: Hash + Eq + Clone, B: BuildHasher + Default> BitAnd for &ChainedHashSet<T, B> {
    type Output = ChainedHashSet<T, B>;

    fn bitand(self, rhs: Self) -> Self::Output {
        self.intersection(rhs).cloned().collect()
    }
}

impl<T: Hash + Eq + Clone, B: BuildHasher + Default> Sub for &ChainedHashSet<T, B> {
    type Output = ChainedHashSet<T, B>;

    fn sub(self, rhs: Self) -> Self::Output {
        self.difference(rhs).cloned().collect()
    }
}

impl<T: Hash + Eq + Debug, B: BuildHasher + Debug> Debug for ChainedHashSet<T, B> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("ChainedHashSet")
            .field("contents", &DebugContents(self))
            .field("len", &self.len())
            .field("bucket_count", &self.bucket_count())
            .field("hasher", &self.inner.hasher)
            .finish()
    }
}

struct DebugContents<'a, T: Hash + Eq, B: BuildHasher>(&'a ChainedHashSet<T, B>);

impl<T: Hash + Eq + Debug, B: BuildHasher> Debug for DebugContents<'_, T, B> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "#")?;
        f.debug_set().entries(self.0.iter()).finish()
    }
}

impl<T: Hash + Eq + Display, B: BuildHasher> Display for ChainedHashSet<T, B> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "#{{")?;
        for (i, item) in self.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{item}")?;
        }
        write!(f, "}}")
    }
}
