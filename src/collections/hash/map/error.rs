use std::error::Error;
use std::fmt::{self, Display, Formatter};

use derive_more::{Display, Error, From, IsVariant, TryInto};

/// A key that was absent was handed to an operation that requires one. There is no hash for a
/// missing key, so this is reported before any bucket is calculated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidKey;

impl Display for InvalidKey {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Unable to hash an absent key!")
    }
}

impl Error for InvalidKey {}

/// The Table for a growing map couldn't be allocated. The map is left as it was before growth
/// started.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AllocFailure {
    pub buckets: usize,
}

impl Display for AllocFailure {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Unable to allocate a table with {} buckets!", self.buckets)
    }
}

impl Error for AllocFailure {}

/// A growing map's bucket count can't be multiplied by the growth factor without overflowing
/// `usize`. `buckets` is the count that was being grown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CapacityOverflow {
    pub buckets: usize,
}

impl Display for CapacityOverflow {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Unable to grow a table of {} buckets without overflow!", self.buckets)
    }
}

impl Error for CapacityOverflow {}

/// The ways in which a checked insertion can fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error, From, TryInto, IsVariant)]
pub enum InsertError {
    InvalidKey(InvalidKey),
    CapacityOverflow(CapacityOverflow),
    AllocFailure(AllocFailure),
}
