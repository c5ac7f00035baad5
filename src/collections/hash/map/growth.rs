//! The rule deciding when a map's Table is replaced with a larger one.
//!
//! The load factor is kept as a ratio of two integers so that the check never touches floating
//! point: a map grows once `len / bucket_count` exceeds `LOAD_FACTOR_NUMERATOR /
//! LOAD_FACTOR_DENOMINATOR`.

use std::num::NonZeroUsize;

use super::CapacityOverflow;

/// The number of buckets in the Table of a newly constructed map.
pub const INITIAL_BUCKETS: NonZeroUsize = non_zero(4);

/// The multiplier applied to the bucket count on every growth step.
pub const GROWTH_FACTOR: NonZeroUsize = non_zero(2);

pub const LOAD_FACTOR_NUMERATOR: usize = 2;
pub const LOAD_FACTOR_DENOMINATOR: usize = 1;

const fn non_zero(n: usize) -> NonZeroUsize {
    match NonZeroUsize::new(n) {
        Some(n) => n,
        None => panic!("Growth constants must be non-zero!"),
    }
}

/// Returns true when `len` entries spread over `bucket_count` buckets exceed the maximum load
/// factor.
pub(crate) const fn should_grow(len: usize, bucket_count: NonZeroUsize) -> bool {
    // Widen so that neither side can overflow for any pair of usizes.
    (len as u128) * (LOAD_FACTOR_DENOMINATOR as u128)
        > (bucket_count.get() as u128) * (LOAD_FACTOR_NUMERATOR as u128)
}

/// Calculates the bucket count that a Table with `bucket_count` buckets grows to, or reports that
/// the next count isn't representable.
pub(crate) const fn grown_bucket_count(
    bucket_count: NonZeroUsize,
) -> Result<NonZeroUsize, CapacityOverflow> {
    match bucket_count.checked_mul(GROWTH_FACTOR) {
        Some(count) => Ok(count),
        None => Err(CapacityOverflow { buckets: bucket_count.get() }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_threshold_is_strict() {
        let four = NonZeroUsize::new(4).unwrap();

        assert!(!should_grow(0, four));
        assert!(!should_grow(8, four), "A load factor of exactly 2.0 is allowed.");
        assert!(should_grow(9, four), "A load factor above 2.0 should trigger growth.");
    }

    #[test]
    fn test_no_overflow_near_max() {
        assert!(!should_grow(usize::MAX, NonZeroUsize::MAX));
        assert!(should_grow(usize::MAX, NonZeroUsize::new(usize::MAX / 4).unwrap()));
    }

    #[test]
    fn test_grown_bucket_count() {
        assert_eq!(grown_bucket_count(INITIAL_BUCKETS).map(NonZeroUsize::get), Ok(8));

        let half = NonZeroUsize::new(usize::MAX / 2 + 1).unwrap();
        assert_eq!(
            grown_bucket_count(half),
            Err(CapacityOverflow { buckets: usize::MAX / 2 + 1 }),
            "Doubling past usize::MAX should report the count that couldn't be doubled."
        );
        assert_eq!(
            grown_bucket_count(half).unwrap_err().to_string(),
            format!("Unable to grow a table of {} buckets without overflow!", usize::MAX / 2 + 1)
        );
    }
}
