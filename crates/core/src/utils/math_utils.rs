use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// `part / whole * 100`, or zero when `whole` is not positive.
///
/// Every percentage in the engine goes through here so that an empty or
/// zero-valued portfolio yields zeros instead of a division error. A quotient
/// too large for `Decimal` also yields zero.
pub fn percent_of(part: Decimal, whole: Decimal) -> Decimal {
    if whole <= Decimal::ZERO {
        return Decimal::ZERO;
    }
    part.checked_div(whole)
        .and_then(|ratio| ratio.checked_mul(dec!(100)))
        .unwrap_or(Decimal::ZERO)
}

/// Absolute difference check used when comparing derived sums.
pub fn approx_eq(a: Decimal, b: Decimal, tolerance: Decimal) -> bool {
    (a - b).abs() <= tolerance
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_percent_of_regular_value() {
        assert_eq!(percent_of(dec!(100), dec!(2000)), dec!(5));
    }

    #[test]
    fn test_percent_of_guards_zero_and_negative_base() {
        assert_eq!(percent_of(dec!(100), Decimal::ZERO), Decimal::ZERO);
        assert_eq!(percent_of(dec!(100), dec!(-5)), Decimal::ZERO);
    }

    #[test]
    fn test_percent_of_overflow_yields_zero() {
        assert_eq!(percent_of(Decimal::MAX, Decimal::new(1, 28)), Decimal::ZERO);
        assert_eq!(percent_of(Decimal::MAX, dec!(0.5)), Decimal::ZERO);
    }

    #[test]
    fn test_approx_eq() {
        assert!(approx_eq(dec!(99.9999999), dec!(100), dec!(0.000001)));
        assert!(!approx_eq(dec!(99.9), dec!(100), dec!(0.000001)));
    }
}
