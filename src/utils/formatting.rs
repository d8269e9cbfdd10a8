use rust_decimal::Decimal;

/// Renders an amount without trailing fractional zeros, so `8000.00`
/// shows up as `8000` and `0.0125` stays as typed.
pub fn format_amount(amount: Decimal) -> String {
    amount.normalize().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn whole_amounts_drop_the_fraction() {
        assert_eq!(format_amount(Decimal::from_str_exact("8000.00").unwrap()), "8000");
    }

    #[test]
    fn fractional_amounts_keep_their_digits() {
        assert_eq!(format_amount(Decimal::from_str_exact("0.0125").unwrap()), "0.0125");
    }

    #[test]
    fn trailing_zeros_are_trimmed() {
        assert_eq!(format_amount(Decimal::from_str_exact("1.50").unwrap()), "1.5");
    }
}
