//! Database pool wiring and the employee store operations.

use entity::employees;
use sea_orm::{ActiveModelTrait, Database, DatabaseConnection, DbErr, EntityTrait, Set};
use serde::Deserialize;
use thiserror::Error;
use tracing::debug;

/// Shared connection handle alias.
pub type DbPool = DatabaseConnection;

#[derive(Debug, Error)]
pub enum DbError {
    #[error("database error: {0}")]
    Orm(#[from] DbErr),
}

pub type DbResult<T> = Result<T, DbError>;

/// Environment-driven connection settings.
#[derive(Clone, Debug, Deserialize)]
pub struct DatabaseSettings {
    pub url: String,
}

impl DatabaseSettings {
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }

    /// Reads `DATABASE_URL`, defaulting to a file-backed store created on
    /// first use.
    pub fn from_env() -> Self {
        let url = std::env::var("DATABASE_URL")
            .unwrap_or_else(|_| "sqlite://employees.db?mode=rwc".to_string());
        Self { url }
    }

    /// Ephemeral store for tests; wiped when the connection closes.
    pub fn in_memory() -> Self {
        Self::new("sqlite::memory:")
    }
}

pub async fn connect(settings: &DatabaseSettings) -> DbResult<DbPool> {
    let pool = Database::connect(settings.url.as_str()).await?;
    debug!(url = %settings.url, "database connected");
    Ok(pool)
}

/// Returns every employee row. Order is whatever the store yields, which is
/// insertion order in practice.
pub async fn list_employees(pool: &DbPool) -> DbResult<Vec<employees::Model>> {
    employees::Entity::find().all(pool).await.map_err(Into::into)
}

pub async fn find_employee(pool: &DbPool, id: i32) -> DbResult<Option<employees::Model>> {
    employees::Entity::find_by_id(id)
        .one(pool)
        .await
        .map_err(Into::into)
}

/// Inserts a row; the store assigns the id.
pub async fn create_employee(
    pool: &DbPool,
    name: &str,
    department: &str,
) -> DbResult<employees::Model> {
    let model = employees::ActiveModel {
        name: Set(name.to_string()),
        department: Set(department.to_string()),
        ..Default::default()
    };
    let inserted = model.insert(pool).await?;
    debug!(id = inserted.id, "employee created");
    Ok(inserted)
}

/// Removes the row with the given id. Returns false when no such row exists.
pub async fn delete_employee(pool: &DbPool, id: i32) -> DbResult<bool> {
    let result = employees::Entity::delete_by_id(id).exec(pool).await?;
    Ok(result.rows_affected > 0)
}
