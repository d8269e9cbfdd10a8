use std::str::FromStr;

use rust_decimal::Decimal;

use crate::commands::{user_err, CommandError};

/// A strictly positive decimal amount or rate, parsed exactly.
///
/// Zero and negative values are rejected at the parsing boundary so the
/// handlers never see them.
pub struct PositiveDecimal(Decimal);

impl FromStr for PositiveDecimal {
    type Err = CommandError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();

        let value = Decimal::from_str_exact(s)
            .map_err(|_| user_err(format!("`{}` is not a valid number.", s.escape_default())))?;

        if value <= Decimal::ZERO {
            return Err(user_err(format!("`{value}` is not a positive number.")));
        }

        Ok(PositiveDecimal(value))
    }
}

impl From<PositiveDecimal> for Decimal {
    fn from(value: PositiveDecimal) -> Self {
        value.0
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use rust_decimal::Decimal;

    use crate::commands::arguments::positive_decimal::PositiveDecimal;

    #[test]
    fn whole_number() {
        assert_eq!(PositiveDecimal::from_str("100").unwrap().0, Decimal::from(100));
    }

    #[test]
    fn fractional_number_parses_exactly() {
        assert_eq!(
            PositiveDecimal::from_str("0.0125").unwrap().0,
            Decimal::new(125, 4)
        );
    }

    #[test]
    fn surrounding_whitespace_is_ignored() {
        assert_eq!(
            PositiveDecimal::from_str("  42.5 ").unwrap().0,
            Decimal::new(425, 1)
        );
    }

    #[test]
    fn zero_is_rejected() {
        assert!(PositiveDecimal::from_str("0").is_err());
    }

    #[test]
    fn negative_numbers_are_rejected() {
        assert!(PositiveDecimal::from_str("-3").is_err());
    }

    #[test]
    fn garbage_is_rejected() {
        assert!(PositiveDecimal::from_str("12,5 rupees").is_err());
    }

    #[test]
    fn empty_input_is_rejected() {
        assert!(PositiveDecimal::from_str("").is_err());
    }
}
