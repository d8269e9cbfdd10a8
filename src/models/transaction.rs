use poise::serenity_prelude::UserId;
use rust_decimal::Decimal;

use crate::exchange::Direction;

use super::types::UtcDateTime;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct TransactionId(pub u64);

/// One recorded conversion. Immutable once written to the ledger.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Transaction {
    pub id: TransactionId,
    pub staff: UserId,
    pub direction: Direction,
    pub input_amount: Decimal,
    pub output_amount: Decimal,
    pub recorded_at: UtcDateTime,
}

#[derive(Debug)]
pub struct NewTransaction {
    pub staff: UserId,
    pub direction: Direction,
    pub input_amount: Decimal,
    pub output_amount: Decimal,
}

/// Aggregated ledger totals for one staff member.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TransactionStats {
    pub count: u64,
    pub total_input: Decimal,
    pub total_output: Decimal,
}

impl TransactionStats {
    pub fn empty() -> TransactionStats {
        TransactionStats {
            count: 0,
            total_input: Decimal::ZERO,
            total_output: Decimal::ZERO,
        }
    }
}
