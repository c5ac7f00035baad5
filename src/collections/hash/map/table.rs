use std::num::NonZeroUsize;
use std::ops::{Index, IndexMut};
use std::slice;
use std::vec;

use super::chain::Chain;
use super::AllocFailure;

/// A fixed number of [`Chain`]s, addressed by bucket index.
///
/// A Table never changes its bucket count. Growing a map means building a new Table and moving
/// the entries across.
#[derive(Clone)]
pub(crate) struct Table<K, V> {
    buckets: Box<[Chain<K, V>]>,
    count: NonZeroUsize,
}

impl<K, V> Table<K, V> {
    /// Creates a Table with `count` empty buckets.
    ///
    /// # Panics
    /// Panics if the bucket array can't be allocated.
    pub(crate) fn with_buckets(count: NonZeroUsize) -> Table<K, V> {
        match Table::try_with_buckets(count) {
            Ok(table) => table,
            Err(error) => panic!("{}", error),
        }
    }

    /// Creates a Table with `count` empty buckets, reporting allocation failure instead of
    /// aborting.
    pub(crate) fn try_with_buckets(count: NonZeroUsize) -> Result<Table<K, V>, AllocFailure> {
        let mut buckets = Vec::new();
        buckets.try_reserve_exact(count.get())
            .map_err(|_| AllocFailure { buckets: count.get() })?;

        // Empty Chains don't allocate, so this can't fail after the reservation.
        buckets.resize_with(count.get(), Chain::new);

        Ok(Table {
            buckets: buckets.into_boxed_slice(),
            count,
        })
    }

    pub(crate) const fn bucket_count(&self) -> NonZeroUsize {
        self.count
    }

    pub(crate) fn clear(&mut self) {
        self.buckets.iter_mut().for_each(Chain::clear);
    }

    pub(crate) fn iter(&self) -> slice::Iter<'_, Chain<K, V>> {
        self.buckets.iter()
    }

    pub(crate) fn iter_mut(&mut self) -> slice::IterMut<'_, Chain<K, V>> {
        self.buckets.iter_mut()
    }
}

impl<K, V> Index<usize> for Table<K, V> {
    type Output = Chain<K, V>;

    fn index(&self, index: usize) -> &Self::Output {
        &self.buckets[index]
    }
}

impl<K, V> IndexMut<usize> for Table<K, V> {
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        &mut self.buckets[index]
    }
}

impl<K, V> IntoIterator for Table<K, V> {
    type Item = Chain<K, V>;

    type IntoIter = vec::IntoIter<Chain<K, V>>;

    fn into_iter(self) -> Self::IntoIter {
        self.buckets.into_vec().into_iter()
    }
}
