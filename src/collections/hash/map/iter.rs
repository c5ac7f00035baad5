use std::hash::{BuildHasher, Hash};
use std::iter::FusedIterator;
use std::{slice, vec};

use super::chain::Chain;
use super::ChainedHashMap;

impl<K: Hash + Eq, V, B: BuildHasher> IntoIterator for ChainedHashMap<K, V, B> {
    type Item = (K, V);

    type IntoIter = IntoIter<K, V>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter {
            len: self.len(),
            buckets: self.table.into_iter(),
            chain: Default::default(),
        }
    }
}

/// An owning iterator over the entries of a [`ChainedHashMap`], in bucket order.
pub struct IntoIter<K, V> {
    pub(crate) buckets: vec::IntoIter<Chain<K, V>>,
    pub(crate) chain: vec::IntoIter<(K, V)>,
    pub(crate) len: usize,
}

impl<K, V> Iterator for IntoIter<K, V> {
    type Item = (K, V);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(entry) = self.chain.next() {
                self.len -= 1;
                return Some(entry);
            }
            // Move on to the next bucket, stopping once there are none left.
            self.chain = self.buckets.next()?.into_iter();
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len, Some(self.len))
    }
}

impl<K, V> ExactSizeIterator for IntoIter<K, V> {}

impl<K, V> FusedIterator for IntoIter<K, V> {}

impl<'a, K: Hash + Eq, V, B: BuildHasher> IntoIterator for &'a mut ChainedHashMap<K, V, B> {
    type Item = (&'a K, &'a mut V);

    type IntoIter = IterMut<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        IterMut {
            len: self.len(),
            buckets: self.table.iter_mut(),
            chain: Default::default(),
        }
    }
}

/// An iterator over the entries of a [`ChainedHashMap`], with mutable access to the values only.
pub struct IterMut<'a, K, V> {
    pub(crate) buckets: slice::IterMut<'a, Chain<K, V>>,
    pub(crate) chain: slice::IterMut<'a, (K, V)>,
    pub(crate) len: usize,
}

impl<'a, K, V> Iterator for IterMut<'a, K, V> {
    type Item = (&'a K, &'a mut V);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some((key, value)) = self.chain.next() {
                self.len -= 1;
                return Some((&*key, value));
            }
            self.chain = self.buckets.next()?.iter_mut();
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len, Some(self.len))
    }
}

impl<K, V> ExactSizeIterator for IterMut<'_, K, V> {}

impl<K, V> FusedIterator for IterMut<'_, K, V> {}

impl<'a, K: Hash + Eq, V, B: BuildHasher> IntoIterator for &'a ChainedHashMap<K, V, B> {
    type Item = (&'a K, &'a V);

    type IntoIter = Iter<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        Iter {
            len: self.len(),
            buckets: self.table.iter(),
            chain: Default::default(),
        }
    }
}

/// A borrowing iterator over the entries of a [`ChainedHashMap`], in bucket order.
pub struct Iter<'a, K, V> {
    pub(crate) buckets: slice::Iter<'a, Chain<K, V>>,
    pub(crate) chain: slice::Iter<'a, (K, V)>,
    pub(crate) len: usize,
}

impl<'a, K, V> Iterator for Iter<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some((key, value)) = self.chain.next() {
                self.len -= 1;
                return Some((key, value));
            }
            self.chain = self.buckets.next()?.iter();
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len, Some(self.len))
    }
}

impl<K, V> ExactSizeIterator for Iter<'_, K, V> {}

impl<K, V> FusedIterator for Iter<'_, K, V> {}

impl<K, V> Clone for Iter<'_, K, V> {
    fn clone(&self) -> Self {
        Iter {
            buckets: self.buckets.clone(),
            chain: self.chain.clone(),
            len: self.len,
        }
    }
}

/// Implements the shared plumbing for an adaptor that projects each entry of an exact-size entry
/// iterator.
macro_rules! exact_adaptor {
    ($name:ident<$($lt:lifetime,)? K, V>, $item:ty, |$entry:ident| $project:expr) => {
        impl<$($lt,)? K, V> Iterator for $name<$($lt,)? K, V> {
            type Item = $item;

            fn next(&mut self) -> Option<Self::Item> {
                self.0.next().map(|$entry| $project)
            }

            fn size_hint(&self) -> (usize, Option<usize>) {
                self.0.size_hint()
            }
        }

        impl<$($lt,)? K, V> ExactSizeIterator for $name<$($lt,)? K, V> {}

        impl<$($lt,)? K, V> FusedIterator for $name<$($lt,)? K, V> {}
    };
}

pub struct IntoKeys<K, V>(
    pub(crate) IntoIter<K, V>
);

exact_adaptor!(IntoKeys<K, V>, K, |e| e.0);

pub struct Keys<'a, K, V>(
    pub(crate) Iter<'a, K, V>
);

exact_adaptor!(Keys<'a, K, V>, &'a K, |e| e.0);

pub struct IntoValues<K, V>(
    pub(crate) IntoIter<K, V>
);

exact_adaptor!(IntoValues<K, V>, V, |e| e.1);

pub struct ValuesMut<'a, K, V>(
    pub(crate) IterMut<'a, K, V>
);

exact_adaptor!(ValuesMut<'a, K, V>, &'a mut V, |e| e.1);

pub struct Values<'a, K, V>(
    pub(crate) Iter<'a, K, V>
);

exact_adaptor!(Values<'a, K, V>, &'a V, |e| e.1);
