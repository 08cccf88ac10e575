//! Null-skipping descriptive statistics
//!
//! Small numeric helpers shared by the aggregation and classification
//! stages. All of them operate on the present values only; callers filter
//! out nulls before handing a slice over.

/// Arithmetic mean; `None` for an empty slice
pub fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    Some(values.iter().sum::<f64>() / values.len() as f64)
}

/// Sample standard deviation (n-1 denominator)
///
/// Undefined for fewer than two values, following the convention that a
/// single sample carries no spread information.
pub fn sample_std(values: &[f64]) -> Option<f64> {
    if values.len() < 2 {
        return None;
    }

    let m = mean(values)?;
    let variance =
        values.iter().map(|v| (v - m).powi(2)).sum::<f64>() / (values.len() - 1) as f64;
    Some(variance.sqrt())
}

/// Median of the values; the mean of the middle two for even counts
pub fn median(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }

    let mut sorted = values.to_vec();
    sorted.sort_by(f64::total_cmp);

    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 0 {
        Some((sorted[mid - 1] + sorted[mid]) / 2.0)
    } else {
        Some(sorted[mid])
    }
}

/// Maximum of the values; `None` for an empty slice
pub fn max(values: &[f64]) -> Option<f64> {
    values.iter().copied().reduce(f64::max)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mean() {
        assert_eq!(mean(&[]), None);
        assert_eq!(mean(&[40.0]), Some(40.0));
        assert_eq!(mean(&[40.0, 20.0]), Some(30.0));
    }

    #[test]
    fn test_sample_std_degenerate_cases() {
        assert_eq!(sample_std(&[]), None);
        assert_eq!(sample_std(&[42.0]), None);
    }

    #[test]
    fn test_sample_std_uses_n_minus_one() {
        // Variance of {2, 4, 4, 4, 5, 5, 7, 9} with n-1 is 32/7
        let values = [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
        let expected = (32.0_f64 / 7.0).sqrt();
        assert!((sample_std(&values).unwrap() - expected).abs() < 1e-12);
    }

    #[test]
    fn test_median_odd_and_even() {
        assert_eq!(median(&[]), None);
        assert_eq!(median(&[5.0]), Some(5.0));
        assert_eq!(median(&[40.0, 15.0, 25.0]), Some(25.0));
        assert_eq!(median(&[1.0, 2.0, 3.0, 4.0]), Some(2.5));
    }

    #[test]
    fn test_median_tolerates_nan_input() {
        // NaN sorts to the high end under total order instead of aborting
        let result = median(&[2.0, f64::NAN, 4.0]);
        assert_eq!(result, Some(4.0));
    }

    #[test]
    fn test_max() {
        assert_eq!(max(&[]), None);
        assert_eq!(max(&[20.0, 40.0, 30.0]), Some(40.0));
    }
}
