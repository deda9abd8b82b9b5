use std::sync::Arc;

use crate::core::error::Result;
use crate::features::infrastructure::dtos::{DatasetInfoDto, DatasetResponseDto};
use crate::features::infrastructure::models::DatasetKind;
use crate::features::infrastructure::services::{format_last_updated, AssetStore, RowAggregator};

/// Service assembling the map payload for one dataset
pub struct InfrastructureService {
    store: Arc<dyn AssetStore>,
}

impl InfrastructureService {
    pub fn new(store: Arc<dyn AssetStore>) -> Self {
        Self { store }
    }

    /// Load, aggregate and date-stamp one dataset.
    ///
    /// The row scan and the freshness lookup run concurrently; either failing
    /// aborts the whole request.
    pub async fn get_dataset(&self, kind: DatasetKind) -> Result<DatasetResponseDto> {
        let dataset = kind.descriptor();
        let mut aggregator = RowAggregator::new(dataset);

        let ((), latest) = tokio::try_join!(
            self.store.scan_rows(dataset, &mut aggregator),
            self.store.latest_update(dataset),
        )?;

        if aggregator.anomalies() > 0 {
            tracing::warn!(
                "{} rows in {} had non-numeric id or coordinates",
                aggregator.anomalies(),
                dataset.table
            );
        }

        let aggregation = aggregator.finish();

        Ok(DatasetResponseDto {
            point_data: aggregation.point_data,
            province_data: aggregation.province_data,
            last_updated: format_last_updated(latest),
            filters: aggregation.filters,
        })
    }

    /// Describe the datasets the map can switch between
    pub fn list_datasets(&self) -> Vec<DatasetInfoDto> {
        DatasetKind::ALL
            .iter()
            .map(|kind| kind.descriptor().into())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::error::AppError;
    use crate::shared::test_helpers::{asset_row, InMemoryAssetStore};
    use chrono::NaiveDate;

    #[tokio::test]
    async fn test_get_dataset_assembles_response() {
        let store = InMemoryAssetStore::new()
            .with_rows(
                DatasetKind::Bts,
                vec![
                    asset_row(1, "A", "X", "On Air"),
                    asset_row(2, "A", "X", "Dalam Pembangunan"),
                    asset_row(3, "B", "Y", "Unknown"),
                ],
            )
            .with_latest_update(
                DatasetKind::Bts,
                NaiveDate::from_ymd_opt(2024, 3, 3)
                    .unwrap()
                    .and_hms_opt(8, 0, 0)
                    .unwrap(),
            );
        let service = InfrastructureService::new(Arc::new(store));

        let response = service.get_dataset(DatasetKind::Bts).await.unwrap();

        assert_eq!(response.point_data.len(), 3);
        assert_eq!(response.province_data.len(), 2);
        assert_eq!(response.last_updated.as_deref(), Some("3 Maret 2024"));
        assert_eq!(response.filters.network_types, Some(Vec::new()));
    }

    #[tokio::test]
    async fn test_empty_dataset() {
        let service = InfrastructureService::new(Arc::new(InMemoryAssetStore::new()));

        let response = service.get_dataset(DatasetKind::Internet).await.unwrap();

        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "pointData": [],
                "provinceData": {},
                "lastUpdated": null,
                "filters": {"jenis_layanan": []}
            })
        );
    }

    #[tokio::test]
    async fn test_store_failure_aborts_request() {
        let store = InMemoryAssetStore::new()
            .with_rows(DatasetKind::Bts, vec![asset_row(1, "A", "X", "On Air")])
            .failing();
        let service = InfrastructureService::new(Arc::new(store));

        let result = service.get_dataset(DatasetKind::Bts).await;

        assert!(matches!(result, Err(AppError::StoreConnection(_))));
    }

    #[test]
    fn test_list_datasets() {
        let service = InfrastructureService::new(Arc::new(InMemoryAssetStore::new()));

        let datasets = service.list_datasets();

        assert_eq!(datasets.len(), 2);
        assert_eq!(datasets[0].kind, DatasetKind::Bts);
        assert_eq!(datasets[0].on_air_label, "On Air");
        assert_eq!(datasets[0].under_construction_label, "Dalam Pembangunan");
        assert!(datasets[0].has_network_type);
        assert_eq!(datasets[1].kind, DatasetKind::Internet);
        assert_eq!(datasets[1].on_air_label, "Aktif");
        assert!(!datasets[1].has_network_type);
    }
}
