use anyhow::anyhow;
use rust_decimal::Decimal;
use sqlx::{FromRow, Pool, Sqlite};

use crate::{models::RateSettings, repository::conversion::DBConvertible};

use super::conversion::{DBFromConversionError, DBToConversionError};

/// Fixed row id of the singleton settings record.
const SETTINGS_ROW_ID: i64 = 1;

pub struct RateRepository {
    pool: Pool<Sqlite>,
}

impl RateRepository {
    pub fn new(pool: Pool<Sqlite>) -> RateRepository {
        RateRepository { pool }
    }

    /// Seeds the default rates on first startup. Never overwrites values an
    /// admin has already set.
    pub async fn ensure_initialized(&self) -> Result<(), anyhow::Error> {
        let mut transaction = self.pool.begin().await?;

        {
            let defaults = RateSettings::initial().to_db()?;

            sqlx::query(
                r#"
                    INSERT INTO rate_settings (id, usdt_to_inr, inr_to_usdt)
                    VALUES ($1, $2, $3)
                    ON CONFLICT (id) DO NOTHING
                "#,
            )
            .bind(SETTINGS_ROW_ID)
            .bind(defaults.usdt_to_inr)
            .bind(defaults.inr_to_usdt)
            .execute(&mut *transaction)
            .await?;
        }

        transaction.commit().await?;

        Ok(())
    }

    pub async fn get_rates(&self) -> Result<RateSettings, anyhow::Error> {
        let mut transaction = self.pool.begin().await?;

        let settings = sqlx::query_as::<_, SqlRateSettings>(
            r#"
                SELECT usdt_to_inr, inr_to_usdt FROM rate_settings
                WHERE id = $1
            "#,
        )
        .bind(SETTINGS_ROW_ID)
        .fetch_optional(&mut *transaction)
        .await?;

        transaction.commit().await?;

        match settings {
            Some(settings) => Ok(RateSettings::from_db(&settings)?),
            None => Err(anyhow!("The rate settings row is missing")),
        }
    }

    /// Overwrites both rates in one atomic write. Upserts on the fixed row
    /// id, so a wiped settings table heals on the next admin write.
    pub async fn set_rates(&self, rates: RateSettings) -> Result<(), anyhow::Error> {
        let mut transaction = self.pool.begin().await?;

        {
            let rates = rates.to_db()?;

            sqlx::query(
                r#"
                    INSERT INTO rate_settings (id, usdt_to_inr, inr_to_usdt)
                    VALUES ($1, $2, $3)
                    ON CONFLICT (id) DO UPDATE SET usdt_to_inr = $2, inr_to_usdt = $3
                "#,
            )
            .bind(SETTINGS_ROW_ID)
            .bind(rates.usdt_to_inr)
            .bind(rates.inr_to_usdt)
            .execute(&mut *transaction)
            .await?;
        }

        transaction.commit().await?;

        Ok(())
    }
}

#[derive(Debug, FromRow)]
pub struct SqlRateSettings {
    usdt_to_inr: String,
    inr_to_usdt: String,
}

impl DBConvertible for RateSettings {
    type DBType = SqlRateSettings;

    fn to_db(&self) -> Result<Self::DBType, DBToConversionError> {
        Ok(SqlRateSettings {
            usdt_to_inr: self.usdt_to_inr.to_db()?,
            inr_to_usdt: self.inr_to_usdt.to_db()?,
        })
    }

    fn from_db(value: &Self::DBType) -> Result<Self, DBFromConversionError> {
        Ok(RateSettings {
            usdt_to_inr: Decimal::from_db(&value.usdt_to_inr)?,
            inr_to_usdt: Decimal::from_db(&value.inr_to_usdt)?,
        })
    }
}
