//! Small numeric helpers for lists of readings.

use crate::domain::model::NumberSummary;

/// Count, sum, mean, median, min and max of `values`.
///
/// Returns `None` for an empty slice or when any value is NaN or infinite.
/// The median of an even-length list is the mean of the two middle values.
///
/// # Examples
/// ```
/// use numkit::core::summary::summarize;
/// let s = summarize(&[1.0, 4.0, 7.0, 10.0]).unwrap();
/// assert_eq!(s.mean, 5.5);
/// assert_eq!(s.median, 5.5);
/// ```
pub fn summarize(values: &[f64]) -> Option<NumberSummary> {
    if values.is_empty() || !values.iter().all(|v| v.is_finite()) {
        return None;
    }

    let mut sorted = values.to_vec();
    sorted.sort_by(f64::total_cmp);

    let count = sorted.len();
    let sum: f64 = sorted.iter().sum();
    let mid = count / 2;
    let median = if count % 2 == 0 {
        (sorted[mid - 1] + sorted[mid]) / 2.0
    } else {
        sorted[mid]
    };

    Some(NumberSummary {
        count,
        sum,
        mean: sum / count as f64,
        median,
        min: sorted[0],
        max: sorted[count - 1],
    })
}

pub fn fahrenheit_to_celsius(fahrenheit: f64) -> f64 {
    (fahrenheit - 32.0) * 5.0 / 9.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summarize_odd_length() {
        let s = summarize(&[3.0, 1.0, 2.0]).unwrap();
        assert_eq!(s.count, 3);
        assert_eq!(s.sum, 6.0);
        assert_eq!(s.mean, 2.0);
        assert_eq!(s.median, 2.0);
        assert_eq!(s.min, 1.0);
        assert_eq!(s.max, 3.0);
    }

    #[test]
    fn test_summarize_even_length_median() {
        let s = summarize(&[4.0, 1.0, 3.0, 2.0]).unwrap();
        assert_eq!(s.median, 2.5);
    }

    #[test]
    fn test_summarize_empty_and_non_finite() {
        assert_eq!(summarize(&[]), None);
        assert_eq!(summarize(&[1.0, f64::NAN]), None);
        assert_eq!(summarize(&[f64::NEG_INFINITY]), None);
    }

    #[test]
    fn test_fahrenheit_to_celsius() {
        assert_eq!(fahrenheit_to_celsius(32.0), 0.0);
        assert_eq!(fahrenheit_to_celsius(212.0), 100.0);
        assert!((fahrenheit_to_celsius(98.6) - 37.0).abs() < 1e-9);
    }
}
