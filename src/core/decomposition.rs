//! Divisors, greatest common divisor and factorial.

use crate::utils::error::{Result, ToolkitError};

/// Every positive divisor of `n` in ascending order.
///
/// `n <= 0` yields an empty vector; this is a policy, not an error.
/// Divisors are found in complementary pairs `(k, n / k)` by trial
/// division up to `sqrt(n)`, so the search is O(sqrt(n)).
///
/// # Examples
/// ```
/// use numkit::core::decomposition::factors;
/// assert_eq!(factors(36), vec![1, 2, 3, 4, 6, 9, 12, 18, 36]);
/// assert!(factors(0).is_empty());
/// ```
pub fn factors(n: i64) -> Vec<i64> {
    if n <= 0 {
        return Vec::new();
    }

    let mut small = Vec::new();
    let mut large = Vec::new();
    let mut k = 1;
    while k <= n / k {
        if n % k == 0 {
            small.push(k);
            let pair = n / k;
            if pair != k {
                large.push(pair);
            }
        }
        k += 1;
    }

    // `small` ascends and `large` descends, so reversing `large` merges them in order.
    small.extend(large.into_iter().rev());
    small
}

/// Greatest common divisor by Euclid's algorithm on absolute values.
///
/// Returns `u64` so `gcd(i64::MIN, 0)` is representable. `gcd(0, 0) == 0`.
pub fn gcd(a: i64, b: i64) -> u64 {
    let (mut a, mut b) = (a.unsigned_abs(), b.unsigned_abs());
    while b != 0 {
        (a, b) = (b, a % b);
    }
    a
}

/// `n!`, failing with [`ToolkitError::Overflow`] once the result leaves `u64`.
pub fn factorial(n: u32) -> Result<u64> {
    (2..=u64::from(n))
        .try_fold(1u64, |acc, k| acc.checked_mul(k))
        .ok_or_else(|| ToolkitError::overflow("factorial", n))
}
