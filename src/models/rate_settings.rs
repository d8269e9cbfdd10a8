use rust_decimal::Decimal;

/// The two conversion multipliers. Exactly one persisted record exists.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RateSettings {
    pub usdt_to_inr: Decimal,
    pub inr_to_usdt: Decimal,
}

impl RateSettings {
    /// The rates seeded on first startup: 80 INR per USDT, 0.0125 USDT per INR.
    pub fn initial() -> RateSettings {
        RateSettings {
            usdt_to_inr: Decimal::new(80, 0),
            inr_to_usdt: Decimal::new(125, 4),
        }
    }
}
