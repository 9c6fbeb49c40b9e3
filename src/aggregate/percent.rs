/// Share of `target` in the sum of `values`, as a rounded whole percent.
///
/// Returns 0 when the sum is not positive.
pub fn percent_of_total(values: &[f64], target: f64) -> u32 {
    let total: f64 = values.iter().sum();
    share(total, target)
}

/// Percent share for every value, in input order.
pub fn percent_shares(values: &[f64]) -> Vec<u32> {
    let total: f64 = values.iter().sum();
    values.iter().map(|&v| share(total, v)).collect()
}

fn share(total: f64, target: f64) -> u32 {
    if total.is_nan() || total <= 0.0 {
        return 0;
    }
    let pct = (target / total * 100.0).round();
    if pct.is_finite() && pct > 0.0 { pct as u32 } else { 0 }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_value_is_full_share() {
        assert_eq!(percent_of_total(&[2.7], 2.7), 100);
    }

    #[test]
    fn test_rounding() {
        // 1/3 = 33.33 -> 33, 2/3 = 66.67 -> 67
        assert_eq!(percent_shares(&[1.0, 2.0]), vec![33, 67]);
        assert_eq!(percent_of_total(&[1.0, 1.0, 2.0], 1.0), 25);
    }

    #[test]
    fn test_zero_total() {
        assert_eq!(percent_of_total(&[0.0, 0.0], 0.0), 0);
        assert_eq!(percent_of_total(&[], 5.0), 0);
        assert_eq!(percent_shares(&[0.0, 0.0]), vec![0, 0]);
    }
}
