use std::borrow::Borrow;
use std::fmt::{self, Debug, Display, Formatter};
use std::hash::{BuildHasher, Hash, RandomState};
use std::mem;
use std::num::NonZeroUsize;

use log::{debug, trace, warn};

use super::chain::Chain;
use super::growth::{self, INITIAL_BUCKETS};
use super::hasher::bucket_index;
use super::table::Table;
use super::{AllocFailure, InsertError, InvalidKey};
use super::{IntoKeys, IntoValues, Iter, Keys, Values, ValuesMut};

/// A map of keys to values which relies on the keys implementing [`Hash`], resolving collisions
/// with separate chaining.
///
/// Every bucket holds a chain of the entries that hash to it. The map starts with
/// [`INITIAL_BUCKETS`] buckets and doubles the count whenever the average chain length would
/// exceed the maximum load factor of 2. The bucket count never decreases, not even when entries
/// are removed.
///
/// It is a logic error for keys in a ChainedHashMap to be manipulated in a way that changes their
/// hash. Because of this, the API prevents mutable access to its keys.
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of items in the ChainedHashMap.
/// - `b`: The number of buckets in the ChainedHashMap.
///
/// | Method | Complexity |
/// |-|-|
/// | `len` | `O(1)` |
/// | `insert` | `O(1)`**, `O(n)` |
/// | `get` | `O(1)`* |
/// | `remove` | `O(1)`* |
/// | `contains_key` | `O(1)`* |
/// | `key_set` | `O(n + b)` |
///
/// \* Each of these scans a single chain, which is `O(1)` on average while the load factor is
/// bounded. If many keys collide, the chain (and the time taken) grows with them.
///
/// \** If the insertion pushes the load factor past the maximum, every entry is moved to a new
/// table, taking `O(n)`. \* applies as well.
#[derive(Clone)]
pub struct ChainedHashMap<K: Hash + Eq, V, B: BuildHasher = RandomState> {
    pub(crate) table: Table<K, V>,
    pub(crate) len: usize,
    pub(crate) hasher: B,
}

impl<K: Hash + Eq, V> ChainedHashMap<K, V> {
    /// Creates a new, empty ChainedHashMap with [`INITIAL_BUCKETS`] buckets, hashing with
    /// [`RandomState`].
    pub fn new() -> ChainedHashMap<K, V> {
        ChainedHashMap::with_hasher(RandomState::new())
    }
}

impl<K: Hash + Eq, V, B: BuildHasher> ChainedHashMap<K, V, B> {
    /// Creates a new, empty ChainedHashMap with [`INITIAL_BUCKETS`] buckets and the provided
    /// `hasher`.
    pub fn with_hasher(hasher: B) -> ChainedHashMap<K, V, B> {
        ChainedHashMap {
            table: Table::with_buckets(INITIAL_BUCKETS),
            len: 0,
            hasher,
        }
    }

    /// Returns the number of entries in the ChainedHashMap.
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the ChainedHashMap contains no entries.
    pub const fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the number of buckets currently backing the ChainedHashMap. This is never 0.
    pub const fn bucket_count(&self) -> usize {
        self.table.bucket_count().get()
    }

    /// Returns the average number of entries per bucket. After any operation completes, this is
    /// at most 2.
    pub fn load_factor(&self) -> f64 {
        self.len as f64 / self.bucket_count() as f64
    }

    /// Inserts the provided `key`-`value` pair into the ChainedHashMap, growing the table if
    /// required. If the key was already associated with a value, the previous value is returned.
    ///
    /// As with the standard library, the key isn't changed if it already exists.
    ///
    /// # Panics
    /// Panics if the table needs to grow but the larger table can't be allocated. Use
    /// [`try_insert`](ChainedHashMap::try_insert) to handle this case instead.
    pub fn insert(&mut self, key: K, value: V) -> Option<V> {
        match self.insert_or_grow(key, value) {
            Ok(previous) => previous,
            Err(error) => panic!("{}", error),
        }
    }

    /// Inserts the provided `key`-`value` pair, reporting failure rather than panicking. This is
    /// intended for callers holding a key that may be absent, such as one parsed from input.
    ///
    /// If `key` is None, [`InvalidKey`] is returned before anything is hashed.
    /// If the table can't grow, [`CapacityOverflow`](super::CapacityOverflow) or [`AllocFailure`]
    /// is returned and the map is left exactly as it was before the call. Otherwise, the result is the same as [`insert`](ChainedHashMap::insert).
    pub fn try_insert(&mut self, key: Option<K>, value: V) -> Result<Option<V>, InsertError> {
        let key = key.ok_or(InvalidKey)?;
        self.insert_or_grow(key, value)
    }

    /// Returns the entry for the provided `key` as a key-value pair or None if there is no entry.
    pub fn get_entry<Q>(&self, key: &Q) -> Option<(&K, &V)>
    where
        // We're introducing a new type parameter here, Q which represents a borrowed version of K
        // where equality and hashing carries over the borrow.
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let chain = &self.table[self.index_for(key)];
        let pos = chain.find(key)?;
        Some(chain.get_at(pos))
    }

    /// Returns a reference to the value associated with the provided `key` or None if the map
    /// contains no values for `key`.
    pub fn get<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.get_entry(key).map(|(_, v)| v)
    }

    /// Returns a mutable reference to the value associated with the provided `key` or None if the
    /// map contains no values for `key`.
    pub fn get_mut<Q>(&mut self, key: &Q) -> Option<&mut V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let index = self.index_for(key);
        let chain = &mut self.table[index];
        let pos = chain.find(key)?;
        Some(chain.get_mut_at(pos))
    }

    /// Returns true if there is a value associated with the provided `key`.
    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.table[self.index_for(key)].find(key).is_some()
    }

    /// Removes the entry associated with `key`, returning it if it exists. The table is never
    /// shrunk.
    pub fn remove_entry<Q>(&mut self, key: &Q) -> Option<(K, V)>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let index = self.index_for(key);
        let chain = &mut self.table[index];
        let pos = chain.find(key)?;

        self.len -= 1;
        Some(chain.remove_at(pos))
    }

    /// Removes the entry associated with `key`, returning the value if it exists.
    pub fn remove<Q>(&mut self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.remove_entry(key).map(|(_, v)| v)
    }

    /// Returns a snapshot of every key in the ChainedHashMap, in bucket order and then insertion
    /// order within each bucket. The keys are cloned, so the result is independent of the map.
    pub fn key_set(&self) -> Vec<K>
    where
        K: Clone,
    {
        let mut keys = Vec::with_capacity(self.len());
        keys.extend(self.keys().cloned());
        keys
    }

    /// Removes every entry from the ChainedHashMap, keeping the current bucket count.
    pub fn clear(&mut self) {
        self.table.clear();
        self.len = 0;
    }

    /// Returns an iterator over all key-value pairs in the ChainedHashMap, as references.
    pub fn iter(&self) -> Iter<'_, K, V> {
        self.into_iter()
    }

    /// Consumes self and returns an iterator over all contained keys.
    pub fn into_keys(self) -> IntoKeys<K, V> {
        IntoKeys(self.into_iter())
    }

    /// Returns an iterator over all keys in the ChainedHashMap, as references.
    pub fn keys(&self) -> Keys<'_, K, V> {
        Keys(self.iter())
    }

    /// Consumes self and returns an iterator over all contained values.
    pub fn into_values(self) -> IntoValues<K, V> {
        IntoValues(self.into_iter())
    }

    /// Returns an iterator over all values in the ChainedHashMap, as mutable references.
    pub fn values_mut(&mut self) -> ValuesMut<'_, K, V> {
        ValuesMut(self.into_iter())
    }

    /// Returns an iterator over all values in the ChainedHashMap, as references.
    pub fn values(&self) -> Values<'_, K, V> {
        Values(self.iter())
    }
}

impl<K: Hash + Eq, V, B: BuildHasher> ChainedHashMap<K, V, B> {
    /// Calculates the bucket that `key` belongs in, given the current table.
    pub(crate) fn index_for<H: Hash + ?Sized>(&self, key: &H) -> usize {
        bucket_index(&self.hasher, key, self.table.bucket_count())
    }

    /// Inserts a pair, growing the table first if the new entry would overload it. Growth happens
    /// before the entry is added so that a failed growth leaves the map untouched.
    pub(crate) fn insert_or_grow(&mut self, key: K, value: V) -> Result<Option<V>, InsertError> {
        let mut index = self.index_for(&key);

        if let Some(pos) = self.table[index].find(&key) {
            // Replace the value with the provided one.
            return Ok(Some(self.table[index].replace_at(pos, value)));
        }

        if growth::should_grow(self.len + 1, self.table.bucket_count()) {
            self.grow()?;
            // The bucket depends on the bucket count, which has just changed.
            index = self.index_for(&key);
        }

        self.table[index].push(key, value);
        self.len += 1;
        trace!("Appended entry to bucket {index}, chain length {}", self.table[index].len());

        Ok(None)
    }

    /// Grows the table by the growth factor.
    pub(crate) fn grow(&mut self) -> Result<(), InsertError> {
        let new_count = growth::grown_bucket_count(self.table.bucket_count())?;
        Ok(self.rehash(new_count)?)
    }

    /// Moves every entry into a new table with `new_count` buckets.
    ///
    /// All of the memory the new table needs is allocated before the first entry is moved. If any
    /// of it is unavailable, the existing table is kept as is and the failure is returned.
    pub(crate) fn rehash(&mut self, new_count: NonZeroUsize) -> Result<(), AllocFailure> {
        let old_count = self.bucket_count();
        debug!("Growing table from {old_count} to {new_count} buckets with {} entries", self.len);

        let new_table = self.allocate_table(new_count).inspect_err(|error| {
            warn!("Table growth abandoned: {error}");
        })?;

        // Replace the table first so that we can consume the old one.
        let old_table = mem::replace(&mut self.table, new_table);

        for (key, value) in old_table.into_iter().flatten() {
            let index = self.index_for(&key);
            // Every chain has been reserved to its final length, so this doesn't allocate.
            self.table[index].push(key, value);
        }

        debug!("Grew table from {old_count} to {new_count} buckets");
        Ok(())
    }

    /// Allocates a table with `new_count` buckets where each chain has exactly enough room for
    /// the current entries that will be moved into it.
    fn allocate_table(&self, new_count: NonZeroUsize) -> Result<Table<K, V>, AllocFailure> {
        let failure = AllocFailure { buckets: new_count.get() };

        let mut table = Table::try_with_buckets(new_count)?;

        let mut lengths: Vec<usize> = Vec::new();
        lengths.try_reserve_exact(new_count.get()).map_err(|_| failure)?;
        lengths.resize(new_count.get(), 0);

        for (key, _) in self.iter() {
            lengths[bucket_index(&self.hasher, key, new_count)] += 1;
        }

        for (chain, length) in table.iter_mut().zip(lengths) {
            if length > 0 {
                chain.try_reserve_exact(length).map_err(|_| failure)?;
            }
        }

        Ok(table)
    }
}

impl<K: Hash + Eq, V, B: BuildHasher + Default> Default for ChainedHashMap<K, V, B> {
    fn default() -> Self {
        ChainedHashMap::with_hasher(B::default())
    }
}

impl<K: Hash + Eq, V: PartialEq, B: BuildHasher> PartialEq for ChainedHashMap<K, V, B> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len()
            && self.iter().all(|(k, v)| other.get(k) == Some(v))
    }
}

impl<K: Hash + Eq, V: Eq, B: BuildHasher> Eq for ChainedHashMap<K, V, B> {}

impl<K: Hash + Eq, V, B: BuildHasher + Default> FromIterator<(K, V)> for ChainedHashMap<K, V, B> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = ChainedHashMap::with_hasher(B::default());
        map.extend(iter);
        map
    }
}

impl<K: Hash + Eq, V, B: BuildHasher> Extend<(K, V)> for ChainedHashMap<K, V, B> {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.insert(key, value);
        }
    }
}

impl<K: Hash + Eq + Debug, V: Debug, B: BuildHasher + Debug> Debug for ChainedHashMap<K, V, B> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("ChainedHashMap")
            .field("buckets", &BucketsDebug(&self.table))
            .field("len", &self.len)
            .field("bucket_count", &self.bucket_count())
            .field("hasher", &self.hasher)
            .finish()
    }
}

struct BucketsDebug<'a, K, V>(&'a Table<K, V>);

impl<K: Debug, V: Debug> Debug for BucketsDebug<'_, K, V> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.0.iter().map(ChainDebug)).finish()
    }
}

struct ChainDebug<'a, K, V>(&'a Chain<K, V>);

impl<K: Debug, V: Debug> Debug for ChainDebug<'_, K, V> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return write!(f, "-");
        }

        write!(f, "[")?;
        for (i, (k, v)) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "({k:?}: {v:?})")?;
        }
        write!(f, "]")
    }
}

impl<K: Hash + Eq + Debug, V: Debug, B: BuildHasher> Display for ChainedHashMap<K, V, B> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "#")?;
        f.debug_map().entries(self.iter()).finish()
    }
}
