//! Hash-based collections which resolve collisions by separate chaining.

pub mod map;
#[cfg(feature = "set")]
pub mod set;

#[doc(inline)]
pub use map::ChainedHashMap;
#[cfg(feature = "set")]
#[doc(inline)]
pub use set::ChainedHashSet;
