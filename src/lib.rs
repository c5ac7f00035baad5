//! A hash map written from scratch, resolving collisions with separate chaining and growing its
//! table as it fills.
//!
//! # Design
//! [`ChainedHashMap`](collections::hash::ChainedHashMap) owns a table of buckets, each of which
//! holds a short chain of the entries that hash to it. A key's bucket is its hash modulo the
//! current bucket count. Once the map holds more than two entries per bucket on average, a table
//! with twice as many buckets is built and every entry is moved into it. The table never shrinks.
//!
//! Nothing here is thread-safe by itself: mutation requires `&mut`, so callers that share a map
//! across threads need to put it behind a lock.
//!
//! # Error Handling
//! Looking up, or removing, a key that isn't present is a normal outcome and is reported with
//! [`None`], never an error. Insertion panics if the table can't grow, the same as the standard
//! library's collections, because users don't want to be forced to handle an error every time they
//! insert. Callers that do want to handle it, or that hold keys which may be absent, can use
//! `try_insert` instead, which returns a strongly typed error.
//!
//! When this crate employs errors via [`Result`]s, it does so using enums for static dispatch
//! rather than dynamic, with structs (often ZSTs) that implement [`Error`](std::error::Error).
//!
//! # Logging
//! Growth is reported through the [`log`] facade at `debug` level, and failed growth at `warn`.
//! The crate never installs a logger itself.
#![warn(clippy::missing_safety_doc)]
#![warn(clippy::undocumented_unsafe_blocks)]
#![warn(clippy::missing_const_for_fn)]
#![warn(clippy::missing_panics_doc)]
#![warn(clippy::unwrap_used)]
#![allow(clippy::module_inception)]

pub mod collections;

#[cfg(test)]
mod util;
