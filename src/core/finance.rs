//! Compound growth projections.

use crate::utils::error::Result;
use crate::utils::validation::{validate_finite, validate_non_negative, validate_positive_number};

pub const DEFAULT_TIMES_PER_YEAR: u32 = 1;

/// Final amount after compounding `principal` at annual `rate`.
///
/// Computes `principal * (1 + rate / times_per_year) ^ (times_per_year * years)`.
/// `rate` is a decimal fraction (0.05 for 5%) and may be negative to model
/// depreciation.
///
/// # Errors
/// [`ToolkitError::InvalidArgument`](crate::utils::error::ToolkitError::InvalidArgument)
/// when `times_per_year` is zero, `principal` is negative or not finite, or
/// `rate` is not finite.
///
/// # Examples
/// ```
/// use numkit::core::finance::compound_interest;
/// let amount = compound_interest(1000.0, 0.05, 3, 1).unwrap();
/// assert!((amount - 1157.625).abs() < 1e-9);
/// ```
pub fn compound_interest(principal: f64, rate: f64, years: u32, times_per_year: u32) -> Result<f64> {
    validate_positive_number("times_per_year", times_per_year, 1)?;
    validate_non_negative("principal", principal)?;
    validate_finite("rate", rate)?;

    let periods = f64::from(times_per_year);
    let growth = 1.0 + rate / periods;
    let amount = principal * growth.powf(periods * f64::from(years));

    tracing::debug!(principal, rate, years, times_per_year, amount, "compound interest");
    Ok(amount)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::error::ToolkitError;

    #[test]
    fn test_annual_compounding() {
        let amount = compound_interest(1000.0, 0.05, 3, DEFAULT_TIMES_PER_YEAR).unwrap();
        assert!((amount - 1157.625).abs() < 1e-9);
    }

    #[test]
    fn test_zero_rate_is_identity() {
        assert_eq!(compound_interest(1000.0, 0.0, 5, 1).unwrap(), 1000.0);
        assert_eq!(compound_interest(1000.0, 0.0, 5, 12).unwrap(), 1000.0);
    }

    #[test]
    fn test_zero_years_returns_principal() {
        assert_eq!(compound_interest(250.0, 0.07, 0, 4).unwrap(), 250.0);
    }

    #[test]
    fn test_monthly_compounding_beats_annual() {
        let annual = compound_interest(1000.0, 0.05, 10, 1).unwrap();
        let monthly = compound_interest(1000.0, 0.05, 10, 12).unwrap();
        assert!(monthly > annual);
        assert!((monthly - 1647.009497).abs() < 1e-5);
    }

    #[test]
    fn test_negative_rate_depreciates() {
        let amount = compound_interest(1000.0, -0.10, 2, 1).unwrap();
        assert!((amount - 810.0).abs() < 1e-9);
    }

    #[test]
    fn test_zero_times_per_year_is_rejected() {
        let err = compound_interest(1000.0, 0.05, 3, 0).unwrap_err();
        match err {
            ToolkitError::InvalidArgument { field, .. } => assert_eq!(field, "times_per_year"),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_invalid_principal_and_rate_are_rejected() {
        assert!(compound_interest(-1.0, 0.05, 3, 1).is_err());
        assert!(compound_interest(f64::NAN, 0.05, 3, 1).is_err());
        assert!(compound_interest(1000.0, f64::INFINITY, 3, 1).is_err());
    }
}
