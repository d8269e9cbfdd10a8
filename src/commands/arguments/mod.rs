mod positive_decimal;

pub use positive_decimal::PositiveDecimal;
