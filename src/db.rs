use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{postgres::PgPoolOptions, types::Json, Executor, Pool, Postgres, Row};
use std::sync::Arc;
use uuid::Uuid;

use crate::entities::Share;
use crate::error::Error;

#[async_trait]
pub trait ShareStore {
    async fn insert_share(&self, share: &Share) -> Result<(), Error>;
    async fn find_share(&self, id: Uuid) -> Result<Option<Share>, Error>;
    async fn delete_share(&self, id: Uuid) -> Result<(), Error>;
    /// Deletes every share whose expiry lies before `now`, returning the count.
    async fn delete_expired_shares(&self, now: DateTime<Utc>) -> Result<u64, Error>;
}

pub type DynShareStore = Arc<dyn ShareStore + Send + Sync>;

#[derive(Clone, Debug)]
pub struct PgShareStore {
    pool: Pool<Postgres>,
}

impl PgShareStore {
    #[tracing::instrument(name = "PgShareStore::new", skip_all)]
    pub async fn new(db_uri: &str, max_connections: u32) -> Result<Self, Error> {
        let pool = PgPoolOptions::new()
            .max_connections(max_connections)
            .connect(db_uri)
            .await?;

        pool.execute("CREATE TABLE IF NOT EXISTS shares (id UUID PRIMARY KEY, expires_at TIMESTAMPTZ NOT NULL, data JSONB NOT NULL)")
            .await?;
        pool.execute("CREATE INDEX IF NOT EXISTS shares_expires_at ON shares (expires_at)")
            .await?;

        Ok(Self { pool })
    }
}

#[async_trait]
impl ShareStore for PgShareStore {
    #[tracing::instrument(skip(self, share), fields(id = %share.id))]
    async fn insert_share(&self, share: &Share) -> Result<(), Error> {
        let mut conn = self.pool.acquire().await?;

        conn.execute(
            sqlx::query("INSERT INTO shares (id, expires_at, data) VALUES ($1, $2, $3)")
                .bind(&share.id)
                .bind(&share.expires_at)
                .bind(Json(share)),
        )
        .await?;

        Ok(())
    }

    #[tracing::instrument(skip(self))]
    async fn find_share(&self, id: Uuid) -> Result<Option<Share>, Error> {
        let mut conn = self.pool.acquire().await?;

        let maybe_result = conn
            .fetch_optional(sqlx::query("SELECT data FROM shares WHERE id = $1").bind(&id))
            .await?;

        match maybe_result {
            Some(result) => {
                let Json(share): Json<Share> = result.try_get("data")?;
                Ok(Some(share))
            }
            None => Ok(None),
        }
    }

    #[tracing::instrument(skip(self))]
    async fn delete_share(&self, id: Uuid) -> Result<(), Error> {
        let mut conn = self.pool.acquire().await?;

        conn.execute(sqlx::query("DELETE FROM shares WHERE id = $1").bind(&id))
            .await?;

        Ok(())
    }

    #[tracing::instrument(skip(self))]
    async fn delete_expired_shares(&self, now: DateTime<Utc>) -> Result<u64, Error> {
        let mut conn = self.pool.acquire().await?;

        let result = conn
            .execute(sqlx::query("DELETE FROM shares WHERE expires_at < $1").bind(&now))
            .await?;

        Ok(result.rows_affected())
    }
}
