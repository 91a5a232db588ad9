use crate::utils::error::{Result, ToolkitError};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

/// Rejects `value < min_value` as an invalid argument.
pub fn validate_positive_number(field_name: &str, value: u32, min_value: u32) -> Result<()> {
    if value < min_value {
        return Err(ToolkitError::invalid_argument(
            field_name,
            value,
            format!("Value must be at least {}", min_value),
        ));
    }
    Ok(())
}

pub fn validate_finite(field_name: &str, value: f64) -> Result<()> {
    if !value.is_finite() {
        return Err(ToolkitError::invalid_argument(
            field_name,
            value,
            "Value must be a finite number",
        ));
    }
    Ok(())
}

pub fn validate_non_negative(field_name: &str, value: f64) -> Result<()> {
    validate_finite(field_name, value)?;
    if value < 0.0 {
        return Err(ToolkitError::invalid_argument(
            field_name,
            value,
            "Value cannot be negative",
        ));
    }
    Ok(())
}

pub fn validate_range<T: PartialOrd + std::fmt::Display + Copy>(
    field_name: &str,
    value: T,
    min: T,
    max: T,
) -> Result<()> {
    if value < min || value > max {
        return Err(ToolkitError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be between {} and {}", min, max),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_positive_number() {
        assert!(validate_positive_number("times_per_year", 12, 1).is_ok());
        assert!(validate_positive_number("times_per_year", 0, 1).is_err());
    }

    #[test]
    fn test_validate_non_negative() {
        assert!(validate_non_negative("principal", 0.0).is_ok());
        assert!(validate_non_negative("principal", 1000.0).is_ok());
        assert!(validate_non_negative("principal", -0.01).is_err());
        assert!(validate_non_negative("principal", f64::NAN).is_err());
        assert!(validate_non_negative("principal", f64::INFINITY).is_err());
    }

    #[test]
    fn test_validate_range() {
        assert!(validate_range("simulation.display_limit", 10usize, 1, 11).is_ok());
        assert!(validate_range("simulation.display_limit", 0usize, 1, 11).is_err());
        assert!(validate_range("interest.decimals", 9u32, 0, 8).is_err());
    }
}
