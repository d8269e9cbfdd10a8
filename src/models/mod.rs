mod rate_settings;
mod transaction;

pub mod types;

pub use rate_settings::RateSettings;
pub use transaction::{NewTransaction, Transaction, TransactionId, TransactionStats};
