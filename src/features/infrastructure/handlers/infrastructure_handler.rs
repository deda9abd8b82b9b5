use axum::{extract::State, Json};
use std::sync::Arc;

use crate::core::error::AppError;
use crate::core::extractor::AppQuery;
use crate::features::infrastructure::dtos::*;
use crate::features::infrastructure::models::DatasetKind;
use crate::features::infrastructure::services::InfrastructureService;
use crate::shared::constants::DEFAULT_DATASET_KIND;
use crate::shared::types::{ApiResponse, ErrorResponse, Meta};

// ============================================================================
// Map data
// ============================================================================

/// Get map points, province rollup, filter values and last update for one dataset
#[utoipa::path(
    get,
    path = "/api/data",
    tag = "Infrastructure",
    params(DatasetQueryParams),
    responses(
        (status = 200, description = "Map data for the dataset", body = DatasetResponseDto),
        (status = 400, description = "Unknown dataset type", body = ErrorResponse),
        (status = 500, description = "Database unreachable or query failed", body = ErrorResponse)
    )
)]
pub async fn get_dataset(
    State(service): State<Arc<InfrastructureService>>,
    AppQuery(params): AppQuery<DatasetQueryParams>,
) -> Result<Json<DatasetResponseDto>, AppError> {
    let kind = DatasetKind::parse(params.kind.as_deref().unwrap_or(DEFAULT_DATASET_KIND))?;
    let data = service.get_dataset(kind).await?;
    Ok(Json(data))
}

// ============================================================================
// Dataset catalogue
// ============================================================================

/// List the dataset kinds and their status labels
#[utoipa::path(
    get,
    path = "/api/datasets",
    tag = "Infrastructure",
    responses(
        (status = 200, description = "Available datasets", body = ApiResponse<Vec<DatasetInfoDto>>)
    )
)]
pub async fn list_datasets(
    State(service): State<Arc<InfrastructureService>>,
) -> Json<ApiResponse<Vec<DatasetInfoDto>>> {
    let datasets = service.list_datasets();
    let total = datasets.len() as i64;
    Json(ApiResponse::success(Some(datasets), None, Some(Meta { total })))
}
