//! Time value of money
//!
//! Rates here are per-period percentages, not annual ones.

fn growth(rate: f64, periods: u32) -> f64 {
    (1.0 + rate / 100.0).powi(periods as i32)
}

/// Value after `periods` of compounding at `rate` percent per period
pub fn future_value(present_value: f64, rate: f64, periods: u32) -> f64 {
    present_value * growth(rate, periods)
}

/// Amount needed today to reach `future_value` after `periods`
pub fn present_value(future_value: f64, rate: f64, periods: u32) -> f64 {
    let factor = growth(rate, periods);
    if factor == 0.0 {
        return 0.0;
    }
    future_value / factor
}

/// Accumulated value of `payment` deposited at the end of every period
pub fn future_value_of_annuity(payment: f64, rate: f64, periods: u32) -> f64 {
    let r = rate / 100.0;
    if r == 0.0 {
        return payment * periods as f64;
    }
    payment * (growth(rate, periods) - 1.0) / r
}

/// Lump sum today equivalent to `payment` received at the end of every period
pub fn present_value_of_annuity(payment: f64, rate: f64, periods: u32) -> f64 {
    let r = rate / 100.0;
    if r == 0.0 {
        return payment * periods as f64;
    }
    let factor = growth(rate, periods);
    if factor == 0.0 {
        return 0.0;
    }
    payment * (1.0 - 1.0 / factor) / r
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_future_and_present_value_are_inverse() {
        let fv = future_value(1_000.0, 5.0, 10);
        assert!((fv - 1_628.894627).abs() < 1e-6);
        assert!((present_value(fv, 5.0, 10) - 1_000.0).abs() < 1e-9);
    }

    #[test]
    fn test_annuities() {
        let fv = future_value_of_annuity(100.0, 1.0, 12);
        assert!((fv - 1_268.250301).abs() < 1e-6);

        let pv = present_value_of_annuity(100.0, 1.0, 12);
        assert!((pv - 1_125.507747).abs() < 1e-6);
    }

    #[test]
    fn test_zero_rate() {
        assert_eq!(future_value(500.0, 0.0, 7), 500.0);
        assert_eq!(future_value_of_annuity(100.0, 0.0, 12), 1_200.0);
        assert_eq!(present_value_of_annuity(100.0, 0.0, 12), 1_200.0);
    }

    #[test]
    fn test_total_loss_rate() {
        assert_eq!(present_value(1_000.0, -100.0, 3), 0.0);
    }
}
