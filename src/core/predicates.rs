//! Boolean classification of integers.

/// Deterministic trial-division primality test.
///
/// Returns `false` for `n <= 1` (including negatives), `true` for 2 and 3,
/// `false` for any other even number, and otherwise checks odd divisors
/// from 3 up to `floor(sqrt(n))`.
///
/// # Complexity
/// Time: O(sqrt(n))
///
/// # Examples
/// ```
/// use numkit::core::predicates::is_prime;
/// assert!(is_prime(97));
/// assert!(!is_prime(91));
/// assert!(!is_prime(-7));
/// ```
pub fn is_prime(n: i64) -> bool {
    if n <= 1 {
        return false;
    }
    if n <= 3 {
        return true;
    }
    if n % 2 == 0 {
        return false;
    }
    // `i <= n / i` is `i * i <= n` without overflowing near i64::MAX.
    let mut i = 3;
    while i <= n / i {
        if n % i == 0 {
            return false;
        }
        i += 2;
    }
    true
}

/// Gregorian leap-year rule, applied proleptically to every year
/// including zero and negative years.
pub fn is_leap_year(year: i64) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}
