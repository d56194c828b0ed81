//! Checked factorial arithmetic.
//!
//! Permutation counts grow as `n!`, which exceeds every fixed-width integer
//! almost immediately; this module provides the single overflow-aware
//! factorial used to size and validate rank computations.

/// Computes `n!` as a `u64`, or `None` if the product cannot be represented.
///
/// `0!` is `1`. The largest representable input is `20`; `21!` already
/// exceeds `u64::MAX`, so `factorial(21)` and beyond return `None`.
///
/// Callers must treat `None` as "the permutation count is too large for the
/// requested operation", never substitute a wrapped value.
///
/// # Examples
///
/// ```rust
/// use permutree::factorial::factorial;
///
/// assert_eq!(factorial(0), Some(1));
/// assert_eq!(factorial(5), Some(120));
/// assert_eq!(factorial(20), Some(2_432_902_008_176_640_000));
/// assert_eq!(factorial(21), None);
/// ```
#[must_use]
pub fn factorial(n: u64) -> Option<u64> {
    (1..=n).try_fold(1_u64, u64::checked_mul)
}

// =============================================================================
// Tests
// =============================================================================
