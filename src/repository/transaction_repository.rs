use anyhow::anyhow;
use poise::serenity_prelude::UserId;
use rust_decimal::Decimal;
use sqlx::{FromRow, Pool, Sqlite};
use time::OffsetDateTime;

use crate::{
    exchange::Direction,
    models::{types::UtcDateTime, NewTransaction, Transaction, TransactionId, TransactionStats},
    repository::conversion::DBConvertible,
};

use super::conversion::{DBFromConversionError, DBToConversionError};

pub struct TransactionRepository {
    pool: Pool<Sqlite>,
}

impl TransactionRepository {
    pub fn new(pool: Pool<Sqlite>) -> TransactionRepository {
        TransactionRepository { pool }
    }

    /// Appends one immutable record to the ledger. The id comes from the
    /// database sequence and the timestamp is taken here, so concurrent
    /// appends still get distinct, increasing ids.
    pub async fn record(
        &self,
        new_transaction: &NewTransaction,
    ) -> Result<Transaction, anyhow::Error> {
        let mut transaction = self.pool.begin().await?;

        let recorded = {
            let staff_id = new_transaction.staff.to_db()?;
            let direction = new_transaction.direction.to_db()?;
            let input_amount = new_transaction.input_amount.to_db()?;
            let output_amount = new_transaction.output_amount.to_db()?;
            let recorded_at = UtcDateTime::from(OffsetDateTime::now_utc()).to_db()?;

            sqlx::query_as::<_, SqlTransaction>(
                r#"
                    INSERT INTO transactions (staff_id, direction, input_amount, output_amount, recorded_at)
                    VALUES ($1, $2, $3, $4, $5)
                    RETURNING id, staff_id, direction, input_amount, output_amount, recorded_at
                "#,
            )
            .bind(staff_id)
            .bind(direction)
            .bind(input_amount)
            .bind(output_amount)
            .bind(recorded_at)
            .fetch_one(&mut *transaction)
            .await?
        };

        transaction.commit().await?;

        Ok(Transaction::from_db(&recorded)?)
    }

    /// Totals over every record owned by the staff member. Sums are folded
    /// in exact decimal arithmetic rather than by SQLite, which would
    /// coerce the stored text amounts to floats. Fails if a total outgrows
    /// the decimal range instead of panicking mid-fold.
    pub async fn stats_for(&self, staff: UserId) -> Result<TransactionStats, anyhow::Error> {
        let mut transaction = self.pool.begin().await?;

        let amounts = sqlx::query_as::<_, SqlTransactionAmounts>(
            r#"
                SELECT input_amount, output_amount FROM transactions
                WHERE staff_id = $1
            "#,
        )
        .bind(staff.to_db()?)
        .fetch_all(&mut *transaction)
        .await?;

        transaction.commit().await?;

        let mut stats = TransactionStats::empty();

        for row in &amounts {
            stats.count += 1;
            stats.total_input = stats
                .total_input
                .checked_add(Decimal::from_db(&row.input_amount)?)
                .ok_or_else(|| anyhow!("The input total for staff {staff} overflows"))?;
            stats.total_output = stats
                .total_output
                .checked_add(Decimal::from_db(&row.output_amount)?)
                .ok_or_else(|| anyhow!("The output total for staff {staff} overflows"))?;
        }

        Ok(stats)
    }
}

#[derive(Debug, FromRow)]
pub struct SqlTransaction {
    id: i64,
    staff_id: i64,
    direction: String,
    input_amount: String,
    output_amount: String,
    recorded_at: String,
}

#[derive(Debug, FromRow)]
pub struct SqlTransactionAmounts {
    input_amount: String,
    output_amount: String,
}

impl DBConvertible for Transaction {
    type DBType = SqlTransaction;

    fn to_db(&self) -> Result<Self::DBType, DBToConversionError> {
        Ok(SqlTransaction {
            id: self.id.to_db()?,
            staff_id: self.staff.to_db()?,
            direction: self.direction.to_db()?,
            input_amount: self.input_amount.to_db()?,
            output_amount: self.output_amount.to_db()?,
            recorded_at: self.recorded_at.to_db()?,
        })
    }

    fn from_db(value: &Self::DBType) -> Result<Self, DBFromConversionError> {
        Ok(Transaction {
            id: TransactionId::from_db(&value.id)?,
            staff: UserId::from_db(&value.staff_id)?,
            direction: Direction::from_db(&value.direction)?,
            input_amount: Decimal::from_db(&value.input_amount)?,
            output_amount: Decimal::from_db(&value.output_amount)?,
            recorded_at: UtcDateTime::from_db(&value.recorded_at)?,
        })
    }
}
