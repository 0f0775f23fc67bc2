use common::logger::LoggerError;
use sea_orm::DbErr;
use thiserror::Error;
use util::config::ConfigError;

#[derive(Debug, Error)]
pub enum SeedError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Logger(#[from] LoggerError),

    #[error("refusing to seed a production database; set SEED_ALLOW_PRODUCTION=true to override")]
    ProductionRefused,

    #[error("failed to connect to database: {0}")]
    Connect(DbErr),

    #[error("failed to begin transaction: {0}")]
    Begin(DbErr),

    #[error("failed to insert into {table}: {source}")]
    Insert { table: &'static str, source: DbErr },

    #[error("failed to commit: {0}")]
    Commit(DbErr),
}

impl SeedError {
    /// `map_err` adapter tagging a failed insert with its table.
    pub fn insert(table: &'static str) -> impl FnOnce(DbErr) -> SeedError {
        move |source| SeedError::Insert { table, source }
    }
}
