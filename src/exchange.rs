use std::fmt::Display;

use rust_decimal::Decimal;

use crate::models::RateSettings;

/// The two supported conversion paths.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    UsdtToInr,
    InrToUsdt,
}

impl Direction {
    /// Picks the multiplier this direction uses from the current settings.
    pub fn rate(&self, rates: RateSettings) -> Decimal {
        match self {
            Direction::UsdtToInr => rates.usdt_to_inr,
            Direction::InrToUsdt => rates.inr_to_usdt,
        }
    }

    pub fn input_currency(&self) -> &'static str {
        match self {
            Direction::UsdtToInr => "USDT",
            Direction::InrToUsdt => "INR",
        }
    }

    pub fn output_currency(&self) -> &'static str {
        match self {
            Direction::UsdtToInr => "INR",
            Direction::InrToUsdt => "USDT",
        }
    }
}

impl Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} → {}", self.input_currency(), self.output_currency())
    }
}

/// Applies the direction's current rate to the amount. Exact decimal
/// arithmetic, no rounding, no side effects. `None` when the product does
/// not fit in a `Decimal`.
pub fn convert(direction: Direction, amount: Decimal, rates: RateSettings) -> Option<Decimal> {
    amount.checked_mul(direction.rate(rates))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rates(usdt_to_inr: &str, inr_to_usdt: &str) -> RateSettings {
        RateSettings {
            usdt_to_inr: Decimal::from_str_exact(usdt_to_inr).unwrap(),
            inr_to_usdt: Decimal::from_str_exact(inr_to_usdt).unwrap(),
        }
    }

    #[test]
    fn usdt_to_inr_uses_the_usdt_rate() {
        let result = convert(Direction::UsdtToInr, Decimal::from(100), RateSettings::initial());

        assert_eq!(result, Some(Decimal::from(8000)));
    }

    #[test]
    fn inr_to_usdt_uses_the_inr_rate() {
        let result = convert(Direction::InrToUsdt, Decimal::from(100), RateSettings::initial());

        assert_eq!(result, Some(Decimal::from_str_exact("1.25").unwrap()));
    }

    #[test]
    fn updated_rates_apply_to_later_conversions() {
        let result = convert(Direction::UsdtToInr, Decimal::from(50), rates("85", "0.0117"));

        assert_eq!(result, Some(Decimal::from(4250)));
    }

    #[test]
    fn fractional_amounts_convert_exactly() {
        let amount = Decimal::from_str_exact("0.1").unwrap();

        let result = convert(Direction::InrToUsdt, amount, RateSettings::initial());

        assert_eq!(result, Some(Decimal::from_str_exact("0.00125").unwrap()));
    }

    #[test]
    fn an_overflowing_product_has_no_result() {
        let result = convert(Direction::UsdtToInr, Decimal::MAX, RateSettings::initial());

        assert_eq!(result, None);
    }

    #[test]
    fn currency_labels_match_the_direction() {
        assert_eq!(Direction::UsdtToInr.input_currency(), "USDT");
        assert_eq!(Direction::UsdtToInr.output_currency(), "INR");
        assert_eq!(Direction::InrToUsdt.input_currency(), "INR");
        assert_eq!(Direction::InrToUsdt.output_currency(), "USDT");
    }

    #[test]
    fn display_names_the_conversion_path() {
        assert_eq!(Direction::UsdtToInr.to_string(), "USDT → INR");
        assert_eq!(Direction::InrToUsdt.to_string(), "INR → USDT");
    }
}
