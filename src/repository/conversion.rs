use poise::serenity_prelude::UserId;
use rust_decimal::Decimal;
use thiserror::Error;
use time::{format_description::well_known::Iso8601, OffsetDateTime};

use crate::{
    exchange::Direction,
    models::{types::UtcDateTime, TransactionId},
};

pub trait DBConvertible: Sized {
    type DBType;

    fn to_db(&self) -> Result<Self::DBType, DBToConversionError>;

    fn from_db(value: &Self::DBType) -> Result<Self, DBFromConversionError>;
}

#[derive(Debug, Error)]
pub enum DBFromConversionError {
    #[error("Failed to parse datetime: {0}")]
    DateTime(#[from] time::error::Parse),
    #[error("Failed to parse decimal: {0}")]
    Decimal(#[from] rust_decimal::Error),
    #[error("Failed to parse enum variant: {0}")]
    NoSuchVariant(String),
}

#[derive(Debug, Error)]
pub enum DBToConversionError {
    #[error("Failed to format datetime")]
    DateTime(#[from] time::error::Format),
}

impl DBConvertible for UtcDateTime {
    type DBType = String;

    fn to_db(&self) -> Result<Self::DBType, DBToConversionError> {
        let string = OffsetDateTime::from(*self).format(&Iso8601::DEFAULT)?;
        Ok(string)
    }

    fn from_db(db_value: &Self::DBType) -> Result<Self, DBFromConversionError> {
        let datetime = OffsetDateTime::parse(db_value, &Iso8601::DEFAULT)?;
        Ok(UtcDateTime::from(datetime))
    }
}

impl DBConvertible for TransactionId {
    type DBType = i64;

    fn to_db(&self) -> Result<Self::DBType, DBToConversionError> {
        Ok(self.0 as _)
    }

    fn from_db(value: &Self::DBType) -> Result<Self, DBFromConversionError> {
        Ok(TransactionId(*value as _))
    }
}

impl DBConvertible for UserId {
    type DBType = i64;

    fn to_db(&self) -> Result<Self::DBType, DBToConversionError> {
        Ok(self.get() as _)
    }

    fn from_db(value: &Self::DBType) -> Result<Self, DBFromConversionError> {
        Ok(UserId::new(*value as _))
    }
}

impl DBConvertible for Decimal {
    type DBType = String;

    fn to_db(&self) -> Result<Self::DBType, DBToConversionError> {
        Ok(self.to_string())
    }

    fn from_db(value: &Self::DBType) -> Result<Self, DBFromConversionError> {
        Ok(Decimal::from_str_exact(value)?)
    }
}

impl DBConvertible for Direction {
    type DBType = String;

    fn to_db(&self) -> Result<Self::DBType, DBToConversionError> {
        Ok(match self {
            Direction::UsdtToInr => "UsdtToInr",
            Direction::InrToUsdt => "InrToUsdt",
        }
        .to_string())
    }

    fn from_db(value: &Self::DBType) -> Result<Self, DBFromConversionError> {
        match value.as_str() {
            "UsdtToInr" => Ok(Direction::UsdtToInr),
            "InrToUsdt" => Ok(Direction::InrToUsdt),

            unknown => Err(DBFromConversionError::NoSuchVariant(unknown.to_string())),
        }
    }
}
