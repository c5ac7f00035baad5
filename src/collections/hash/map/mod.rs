//! A module containing [`ChainedHashMap`] and associtated types.
//!
//! The map resolves hash collisions by separate chaining: every bucket of its table holds a small
//! contiguous list of the entries that hash to it. Once the average chain length passes the
//! maximum load factor (see [`growth`]), the table is replaced by one with twice the buckets and
//! every entry is moved across. The table never shrinks.
//!
//! The other included types are for iteration, providing owned and borrowed iteration over
//! entries, keys or values in a map, and the errors reported by checked insertion.
//!
//! As a note, there is no mutable iterator over keys because mutating the keys of a map in place
//! would cause a logic error.
//!
//! [`ChainedHashMap`] is also re-exported under the parent module.

mod chain;
mod error;
pub mod growth;
mod hash_map;
mod hasher;
mod iter;
mod table;
mod tests;

pub use error::*;
pub use hash_map::*;
pub use iter::*;
