//! General-purpose collection types.
//!
//! # Purpose
//! These types exist to show how a hash-based associative container manages its own invariants
//! while it grows: how keys are spread over buckets, how collisions are chained and how the whole
//! table is rebuilt without losing an entry.

pub mod hash;
