#[cfg(test)]
use crate::core::error::Result;
#[cfg(test)]
use crate::features::infrastructure::models::{AssetRow, DatasetDescriptor, DatasetKind};
#[cfg(test)]
use crate::features::infrastructure::services::{AssetStore, RowAggregator};
#[cfg(test)]
use chrono::NaiveDateTime;
#[cfg(test)]
use std::collections::HashMap;
#[cfg(test)]
use std::sync::atomic::{AtomicUsize, Ordering};

/// Row with the given grouping fields and valid numeric columns
#[cfg(test)]
pub fn asset_row(id: i64, province: &str, regency: &str, status: &str) -> AssetRow {
    AssetRow {
        id: Some(id.to_string()),
        name: Some(format!("Site {}", id)),
        province: Some(province.to_string()),
        regency: Some(regency.to_string()),
        latitude: Some("-2.5489".to_string()),
        longitude: Some("118.0149".to_string()),
        status: Some(status.to_string()),
        network_type: None,
        service_type: None,
    }
}

/// Store serving fixed rows per dataset and counting the reads it receives
#[cfg(test)]
#[derive(Default)]
pub struct InMemoryAssetStore {
    rows: HashMap<DatasetKind, Vec<AssetRow>>,
    latest: HashMap<DatasetKind, NaiveDateTime>,
    fail: bool,
    queries: AtomicUsize,
}

#[cfg(test)]
impl InMemoryAssetStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_rows(mut self, kind: DatasetKind, rows: Vec<AssetRow>) -> Self {
        self.rows.insert(kind, rows);
        self
    }

    pub fn with_latest_update(mut self, kind: DatasetKind, timestamp: NaiveDateTime) -> Self {
        self.latest.insert(kind, timestamp);
        self
    }

    /// Every read fails as if the database were unreachable
    pub fn failing(mut self) -> Self {
        self.fail = true;
        self
    }

    /// Number of reads issued so far
    pub fn queries(&self) -> usize {
        self.queries.load(Ordering::SeqCst)
    }

    fn begin_query(&self) -> Result<()> {
        self.queries.fetch_add(1, Ordering::SeqCst);
        if self.fail {
            return Err(sqlx::Error::PoolTimedOut.into());
        }
        Ok(())
    }
}

#[cfg(test)]
#[async_trait::async_trait]
impl AssetStore for InMemoryAssetStore {
    async fn scan_rows(
        &self,
        dataset: &'static DatasetDescriptor,
        aggregator: &mut RowAggregator,
    ) -> Result<()> {
        self.begin_query()?;
        for row in self.rows.get(&dataset.kind).into_iter().flatten() {
            aggregator.push(row.clone());
        }
        Ok(())
    }

    async fn latest_update(
        &self,
        dataset: &'static DatasetDescriptor,
    ) -> Result<Option<NaiveDateTime>> {
        self.begin_query()?;
        Ok(self.latest.get(&dataset.kind).copied())
    }
}
