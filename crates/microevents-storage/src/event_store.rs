//! PostgreSQL implementation of EventStore
//!
//! Every mutation is one UPDATE statement keyed by id, so concurrent writers
//! to the same event are serialized by the row lock and the affected-row
//! count is exact.

use std::time::Duration;

use anyhow::Context;
use async_trait::async_trait;
use microevents_core::{Event, EventStore, NewEvent, StoreError};
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use tracing::{debug, error, instrument};

use crate::error::map_sqlx_error;
use crate::models::EventRow;

const SCHEMA: &str = include_str!("../migrations/0001_events.sql");

/// Connection pool settings
#[derive(Debug, Clone)]
pub struct PoolConfig {
    pub max_connections: u32,
    /// How long a request waits for a free connection before failing
    pub acquire_timeout: Duration,
}

impl Default for PoolConfig {
    fn default() -> Self {
        Self {
            max_connections: 10,
            acquire_timeout: Duration::from_secs(5),
        }
    }
}

/// PostgreSQL event store
///
/// # Example
///
/// ```ignore
/// use microevents_storage::{PgEventStore, PoolConfig};
///
/// let store = PgEventStore::connect("postgres://localhost/micro_events", &PoolConfig::default()).await?;
/// store.ensure_schema().await?;
/// ```
#[derive(Clone)]
pub struct PgEventStore {
    pool: PgPool,
}

impl PgEventStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Create a store from a database URL
    pub async fn connect(database_url: &str, config: &PoolConfig) -> anyhow::Result<Self> {
        let pool = PgPoolOptions::new()
            .max_connections(config.max_connections)
            .acquire_timeout(config.acquire_timeout)
            .connect(database_url)
            .await
            .context("Failed to connect to PostgreSQL")?;
        Ok(Self { pool })
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// Create the events table and index if they do not exist yet
    pub async fn ensure_schema(&self) -> anyhow::Result<()> {
        sqlx::raw_sql(SCHEMA)
            .execute(&self.pool)
            .await
            .context("Failed to create events schema")?;
        Ok(())
    }
}

#[async_trait]
impl EventStore for PgEventStore {
    #[instrument(skip(self, event), fields(event_id = %event.id, owner = event.owner))]
    async fn create(&self, event: NewEvent) -> Result<(), StoreError> {
        sqlx::query(
            r#"
            INSERT INTO events (id, owner, kind, status, message)
            VALUES ($1, $2, $3, $4, $5)
            "#,
        )
        .bind(&event.id)
        .bind(event.owner)
        .bind(&event.kind)
        .bind(&event.status)
        .bind(&event.message)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            error!("Failed to create event: {}", e);
            map_sqlx_error(e)
        })?;

        debug!("created event");
        Ok(())
    }

    #[instrument(skip(self))]
    async fn fetch_by_owner(&self, owner: i64) -> Result<Vec<Event>, StoreError> {
        let rows = sqlx::query_as::<_, EventRow>(
            r#"
            SELECT id, owner, kind, status, message, seen, created_at, updated_at
            FROM events
            WHERE owner = $1
            ORDER BY created_at, id
            "#,
        )
        .bind(owner)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            error!("Failed to fetch events: {}", e);
            map_sqlx_error(e)
        })?;

        debug!(count = rows.len(), "fetched events");
        Ok(rows.into_iter().map(Event::from).collect())
    }

    #[instrument(skip(self, message))]
    async fn change_status(
        &self,
        id: &str,
        status: &str,
        message: &str,
    ) -> Result<u64, StoreError> {
        let result = sqlx::query(
            r#"
            UPDATE events
            SET status = $2, message = $3, updated_at = GREATEST(updated_at, NOW())
            WHERE id = $1
            "#,
        )
        .bind(id)
        .bind(status)
        .bind(message)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            error!("Failed to change event status: {}", e);
            map_sqlx_error(e)
        })?;

        debug!(rows = result.rows_affected(), "changed event status");
        Ok(result.rows_affected())
    }

    #[instrument(skip(self))]
    async fn change_seen(&self, id: &str) -> Result<u64, StoreError> {
        let result = sqlx::query(
            r#"
            UPDATE events
            SET seen = TRUE, updated_at = GREATEST(updated_at, NOW())
            WHERE id = $1
            "#,
        )
        .bind(id)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            error!("Failed to mark event seen: {}", e);
            map_sqlx_error(e)
        })?;

        debug!(rows = result.rows_affected(), "marked event seen");
        Ok(result.rows_affected())
    }
}
