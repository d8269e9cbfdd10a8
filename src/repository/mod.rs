mod conversion;
mod rate_repository;
mod transaction_repository;

pub use rate_repository::RateRepository;
pub use transaction_repository::TransactionRepository;

#[cfg(test)]
pub(crate) mod testing {
    use sqlx::{sqlite::SqlitePoolOptions, SqlitePool};

    /// A fresh in-memory database with the migrations applied. Capped to a
    /// single connection so every query sees the same memory database.
    pub async fn memory_pool() -> SqlitePool {
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect("sqlite::memory:")
            .await
            .expect("Connecting to an in-memory database should not fail");

        sqlx::migrate!("./migrations")
            .run(&pool)
            .await
            .expect("Migrations should apply to an empty database");

        pool
    }
}
