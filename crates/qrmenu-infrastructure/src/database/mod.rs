//! Database module (PostgreSQL adapters)

pub mod connection;
pub mod postgres;

use qrmenu_core::error::DomainError;
use tracing::error;

pub use connection::{create_pool, run_migrations};
pub use postgres::{
    PgCategoryRepository, PgDishRepository, PgMenuRepository, PgRestaurantRepository,
    PgSessionRepository, PgStoreHealth, PgUserRepository,
};

const UNDEFINED_TABLE: &str = "42P01";

/// Maps a driver error onto the domain taxonomy by SQLSTATE and error kind.
/// Unique violations are handled by the callers that expect them.
pub(crate) fn map_db_error(context: &str, e: sqlx::Error) -> DomainError {
    error!("Database error {}: {}", context, e);
    match &e {
        sqlx::Error::PoolTimedOut | sqlx::Error::PoolClosed | sqlx::Error::Io(_) => {
            DomainError::StoreUnavailable(e.to_string())
        }
        sqlx::Error::Database(db) if db.code().as_deref() == Some(UNDEFINED_TABLE) => {
            DomainError::StoreUnavailable("database schema is not initialized".to_string())
        }
        _ => DomainError::DatabaseError(e.to_string()),
    }
}

pub(crate) fn is_unique_violation(e: &sqlx::Error) -> bool {
    matches!(e, sqlx::Error::Database(db) if db.is_unique_violation())
}

pub(crate) fn is_foreign_key_violation(e: &sqlx::Error) -> bool {
    matches!(e, sqlx::Error::Database(db) if db.is_foreign_key_violation())
}
