use numkit::{compound_interest, factors, gcd, is_leap_year, is_prime, simulate_dice_rolls, SeededRandom};
use proptest::prelude::*;

proptest! {
    #[test]
    fn every_factor_divides_n(n in 1i64..200_000) {
        let divisors = factors(n);
        prop_assert_eq!(divisors.first(), Some(&1));
        prop_assert_eq!(divisors.last(), Some(&n));
        for k in &divisors {
            prop_assert_eq!(n % k, 0);
        }
    }

    #[test]
    fn factors_are_strictly_ascending(n in 1i64..200_000) {
        let divisors = factors(n);
        prop_assert!(divisors.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn factors_are_pairing_closed(n in 1i64..200_000) {
        let divisors = factors(n);
        for k in &divisors {
            prop_assert!(divisors.binary_search(&(n / k)).is_ok(), "{} missing pair of {}", n, k);
        }
    }

    #[test]
    fn odd_factor_count_iff_perfect_square(root in 1i64..3_000, offset in 0i64..2) {
        let n = root * root + offset;
        let is_square = offset == 0;
        prop_assert_eq!(factors(n).len() % 2 == 1, is_square);
    }

    #[test]
    fn non_positive_has_no_factors(n in i64::MIN..=0) {
        prop_assert!(factors(n).is_empty());
    }

    #[test]
    fn prime_iff_exactly_two_factors(n in 2i64..100_000) {
        prop_assert_eq!(is_prime(n), factors(n).len() == 2);
    }

    #[test]
    fn non_positive_is_never_prime(n in i64::MIN..=1) {
        prop_assert!(!is_prime(n));
    }

    #[test]
    fn gcd_is_symmetric(a in any::<i64>(), b in any::<i64>()) {
        prop_assert_eq!(gcd(a, b), gcd(b, a));
    }

    #[test]
    fn gcd_with_zero_is_abs(a in any::<i64>()) {
        prop_assert_eq!(gcd(a, 0), a.unsigned_abs());
    }

    #[test]
    fn gcd_divides_both_and_is_greatest(a in -10_000i64..10_000, b in -10_000i64..10_000) {
        prop_assume!(a != 0 || b != 0);
        let g = gcd(a, b);
        prop_assert!(g > 0);
        prop_assert_eq!(a.unsigned_abs() % g, 0);
        prop_assert_eq!(b.unsigned_abs() % g, 0);
        let (x, y) = (a.unsigned_abs() / g, b.unsigned_abs() / g);
        prop_assert_eq!(gcd(x as i64, y as i64), 1);
    }

    #[test]
    fn leap_years_repeat_every_400(year in -100_000i64..100_000) {
        prop_assert_eq!(is_leap_year(year), is_leap_year(year + 400));
    }

    #[test]
    fn zero_rate_keeps_principal(principal in 0.0f64..1e9, years in 0u32..100, times in 1u32..366) {
        prop_assert_eq!(compound_interest(principal, 0.0, years, times).unwrap(), principal);
    }

    #[test]
    fn positive_rate_never_shrinks(principal in 0.0f64..1e6, rate in 0.0f64..0.5, years in 0u32..50) {
        let amount = compound_interest(principal, rate, years, 12).unwrap();
        prop_assert!(amount >= principal);
    }

    #[test]
    fn dice_counts_sum_to_rolls(seed in any::<u64>(), rolls in 0i64..2_000) {
        let mut rng = SeededRandom::new(seed);
        let table = simulate_dice_rolls(rolls, &mut rng);
        prop_assert_eq!(table.total(), rolls as u64);
        prop_assert!(table.iter().all(|(sum, count)| (2..=12).contains(&sum) && count > 0));
    }
}
