use async_trait::async_trait;
use chrono::NaiveDateTime;
use futures::TryStreamExt;
use sqlx::PgPool;

use crate::core::error::{AppError, Result};
use crate::features::infrastructure::models::{AssetRow, DatasetDescriptor};
use crate::features::infrastructure::services::RowAggregator;

/// Read-only access to the asset tables.
///
/// Each request issues exactly two reads against one dataset: the row scan
/// and the freshness lookup. They are independent and may run concurrently.
#[async_trait]
pub trait AssetStore: Send + Sync {
    /// Stream every row of the dataset into the aggregator, in store order
    async fn scan_rows(
        &self,
        dataset: &'static DatasetDescriptor,
        aggregator: &mut RowAggregator,
    ) -> Result<()>;

    /// Latest `last_updated` value of the dataset, `None` when empty or null
    async fn latest_update(
        &self,
        dataset: &'static DatasetDescriptor,
    ) -> Result<Option<NaiveDateTime>>;
}

/// PostgreSQL-backed store
pub struct PgAssetStore {
    pool: PgPool,
}

impl PgAssetStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AssetStore for PgAssetStore {
    async fn scan_rows(
        &self,
        dataset: &'static DatasetDescriptor,
        aggregator: &mut RowAggregator,
    ) -> Result<()> {
        let mut rows = sqlx::query_as::<_, AssetRow>(dataset.row_query).fetch(&self.pool);

        while let Some(row) = rows.try_next().await.map_err(|e| {
            tracing::error!("Failed to scan {} rows: {:?}", dataset.table, e);
            AppError::from(e)
        })? {
            aggregator.push(row);
        }

        Ok(())
    }

    async fn latest_update(
        &self,
        dataset: &'static DatasetDescriptor,
    ) -> Result<Option<NaiveDateTime>> {
        sqlx::query_scalar::<_, Option<NaiveDateTime>>(dataset.freshness_query)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to get {} last update: {:?}", dataset.table, e);
                AppError::from(e)
            })
    }
}
