//! User resource operations. Each call goes straight through the shared
//! client and returns rows or the store's failure unchanged.

use crate::client::Db;
use crate::error::AppError;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, FromRow)]
pub struct User {
    pub id: Uuid,
    pub email: String,
    pub name: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct NewUser {
    pub email: String,
    #[serde(default)]
    pub name: Option<String>,
}

pub struct UserService;

impl UserService {
    /// List rows ordered by creation time. Limit defaults to 100, capped at
    /// 1000; offset defaults to 0.
    pub async fn list(
        db: &Db,
        limit: Option<u32>,
        offset: Option<u32>,
    ) -> Result<Vec<User>, AppError> {
        const DEFAULT_LIMIT: u32 = 100;
        let limit = limit.unwrap_or(DEFAULT_LIMIT).min(1000);
        let offset = offset.unwrap_or(0);
        let rows = sqlx::query_as::<_, User>(
            "SELECT id, email, name, created_at FROM users ORDER BY created_at, id LIMIT $1 OFFSET $2",
        )
        .bind(i64::from(limit))
        .bind(i64::from(offset))
        .fetch_all(db.pool())
        .await?;
        Ok(rows)
    }

    /// Fetch one row by primary key. Returns None when absent.
    pub async fn get(db: &Db, id: Uuid) -> Result<Option<User>, AppError> {
        let row = sqlx::query_as::<_, User>(
            "SELECT id, email, name, created_at FROM users WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(db.pool())
        .await?;
        Ok(row)
    }

    /// Insert one row and return it as stored.
    pub async fn create(db: &Db, new: &NewUser) -> Result<User, AppError> {
        tracing::debug!(email = %new.email, "insert user");
        let row = sqlx::query_as::<_, User>(
            "INSERT INTO users (email, name) VALUES ($1, $2) RETURNING id, email, name, created_at",
        )
        .bind(&new.email)
        .bind(new.name.as_deref())
        .fetch_one(db.pool())
        .await?;
        Ok(row)
    }
}
