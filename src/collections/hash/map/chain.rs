use std::borrow::Borrow;
use std::collections::TryReserveError;
use std::mem;
use std::slice;
use std::vec;

/// The entries that share a single bucket of a [`Table`](super::table::Table), in the order that
/// they were inserted.
///
/// A Chain doesn't know anything about hashing, it only compares keys for equality. It is the
/// responsibility of the owning map to ensure that keys within a Chain are unique.
#[derive(Clone)]
pub(crate) struct Chain<K, V> {
    entries: Vec<(K, V)>,
}

impl<K, V> Chain<K, V> {
    pub(crate) const fn new() -> Chain<K, V> {
        Chain {
            entries: Vec::new(),
        }
    }

    pub(crate) const fn len(&self) -> usize {
        self.entries.len()
    }

    pub(crate) const fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the position of the entry with a key equal to `key`, scanning linearly.
    pub(crate) fn find<Q>(&self, key: &Q) -> Option<usize>
    where
        K: Borrow<Q>,
        Q: Eq + ?Sized,
    {
        self.entries.iter().position(|(existing, _)| existing.borrow() == key)
    }

    /// Appends a new entry to the end of the Chain. The caller guarantees that `key` isn't already
    /// present.
    pub(crate) fn push(&mut self, key: K, value: V) {
        self.entries.push((key, value));
    }

    /// Overwrites the value at `pos`, returning the value that was replaced. The key is left as is.
    pub(crate) fn replace_at(&mut self, pos: usize, value: V) -> V {
        mem::replace(&mut self.entries[pos].1, value)
    }

    /// Removes the entry at `pos`, shifting later entries down so that their order is preserved.
    pub(crate) fn remove_at(&mut self, pos: usize) -> (K, V) {
        self.entries.remove(pos)
    }

    pub(crate) fn get_at(&self, pos: usize) -> (&K, &V) {
        let (key, value) = &self.entries[pos];
        (key, value)
    }

    pub(crate) fn get_mut_at(&mut self, pos: usize) -> &mut V {
        &mut self.entries[pos].1
    }

    /// Reserves room for exactly `additional` more entries, so that the following pushes can't
    /// fail to allocate.
    pub(crate) fn try_reserve_exact(&mut self, additional: usize) -> Result<(), TryReserveError> {
        self.entries.try_reserve_exact(additional)
    }

    pub(crate) fn clear(&mut self) {
        self.entries.clear();
    }

    pub(crate) fn iter(&self) -> slice::Iter<'_, (K, V)> {
        self.entries.iter()
    }

    pub(crate) fn iter_mut(&mut self) -> slice::IterMut<'_, (K, V)> {
        self.entries.iter_mut()
    }
}

impl<K, V> IntoIterator for Chain<K, V> {
    type Item = (K, V);

    type IntoIter = vec::IntoIter<(K, V)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}
