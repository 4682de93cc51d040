//! PostgreSQL implementation of the device token repository.

use async_trait::async_trait;
use sqlx::{FromRow, PgPool};
use std::sync::Arc;

use crate::domain::entities::NotificationTarget;
use crate::domain::repositories::TokenRepository;
use crate::error::AppError;

#[derive(Debug, FromRow)]
struct TokenRow {
    fcm_token: Option<String>,
    platform: Option<String>,
}

/// PostgreSQL repository for `users_tokens`.
pub struct PgTokenRepository {
    pool: Arc<PgPool>,
}

impl PgTokenRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl TokenRepository for PgTokenRepository {
    async fn list_targets(&self) -> Result<Vec<NotificationTarget>, AppError> {
        let rows =
            sqlx::query_as::<_, TokenRow>("SELECT fcm_token, platform FROM users_tokens ORDER BY id")
                .fetch_all(self.pool.as_ref())
                .await?;

        Ok(rows
            .into_iter()
            .map(|r| NotificationTarget {
                token: r.fcm_token,
                platform: r.platform,
            })
            .collect())
    }
}
