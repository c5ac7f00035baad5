//! Helpers shared by the collections' tests.

pub mod hash;
pub mod logger;
