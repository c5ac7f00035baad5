use std::hash::{BuildHasher, Hash};
use std::num::NonZeroUsize;

/// Calculates the bucket that `hashable` belongs in for a table of `bucket_count` buckets.
///
/// The hash produced by `hasher` is a `u64`, so it is never negative and can be reduced directly.
/// Recomputing the index with a different `bucket_count` is how entries are redistributed when a
/// map grows.
pub(crate) fn bucket_index<H, B>(hasher: &B, hashable: &H, bucket_count: NonZeroUsize) -> usize
where
    H: Hash + ?Sized,
    B: BuildHasher,
{
    let key_hash = hasher.hash_one(hashable);
    // The remainder is less than bucket_count, so it always fits back into a usize.
    (key_hash % bucket_count.get() as u64) as usize
}
