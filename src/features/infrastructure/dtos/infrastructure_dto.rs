use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::features::infrastructure::models::{DatasetDescriptor, DatasetKind, StatusBucket};

// ============================================================================
// Query
// ============================================================================

/// Query params for the map data endpoint
#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
pub struct DatasetQueryParams {
    /// Dataset to load: `bts` (default) or `internet`
    #[serde(rename = "type")]
    #[param(example = "bts")]
    pub kind: Option<String>,
}

// ============================================================================
// Point features
// ============================================================================

/// One map marker. Field names are the contract the map front-end reads.
///
/// Unparsable coordinates are carried as `NaN` and serialize as `null`;
/// the front-end treats such markers as unplottable.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct PointFeatureDto {
    pub id: Option<i64>,
    #[serde(rename = "nama_situs")]
    pub name: Option<String>,
    #[serde(rename = "provinsi")]
    pub province: Option<String>,
    #[serde(rename = "kabupaten")]
    pub regency: Option<String>,
    pub lat: f64,
    pub lon: f64,
    pub status: Option<String>,
    /// Always null for the internet dataset
    #[serde(rename = "jaringan")]
    pub network_type: Option<String>,
    #[serde(rename = "jenis_layanan")]
    pub service_type: Option<String>,
}

// ============================================================================
// Province / regency rollup
// ============================================================================

/// Status counters for one province or regency
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct StatusTally {
    pub total: i64,
    #[serde(rename = "onAir")]
    pub on_air: i64,
    #[serde(rename = "dalamPembangunan")]
    pub under_construction: i64,
    /// Rows whose status maps to neither named bucket. Not part of the response.
    #[serde(skip)]
    pub other: i64,
}

impl StatusTally {
    pub fn record(&mut self, bucket: StatusBucket) {
        self.total += 1;
        match bucket {
            StatusBucket::OnAir => self.on_air += 1,
            StatusBucket::UnderConstruction => self.under_construction += 1,
            StatusBucket::Other => self.other += 1,
        }
    }
}

/// Province counters plus the regencies seen inside it, in first-seen order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, ToSchema)]
pub struct ProvinceAggregate {
    #[serde(flatten)]
    pub tally: StatusTally,
    #[schema(value_type = std::collections::HashMap<String, StatusTally>)]
    pub regencies: IndexMap<String, StatusTally>,
}

// ============================================================================
// Filters
// ============================================================================

/// Distinct categorical values for client-side filtering, sorted ascending
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, ToSchema)]
pub struct FilterSetDto {
    /// Present only for the bts dataset
    #[serde(rename = "jaringan", skip_serializing_if = "Option::is_none")]
    pub network_types: Option<Vec<String>>,
    #[serde(rename = "jenis_layanan")]
    pub service_types: Vec<String>,
}

// ============================================================================
// Response
// ============================================================================

/// Full map payload for one dataset
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DatasetResponseDto {
    pub point_data: Vec<PointFeatureDto>,
    #[schema(value_type = std::collections::HashMap<String, ProvinceAggregate>)]
    pub province_data: IndexMap<String, ProvinceAggregate>,
    /// e.g. "3 Maret 2024"; null when the dataset has no timestamp
    pub last_updated: Option<String>,
    pub filters: FilterSetDto,
}

/// Catalogue entry describing one dataset kind
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DatasetInfoDto {
    pub kind: DatasetKind,
    pub on_air_label: String,
    pub under_construction_label: String,
    pub has_network_type: bool,
}

impl From<&DatasetDescriptor> for DatasetInfoDto {
    fn from(d: &DatasetDescriptor) -> Self {
        Self {
            kind: d.kind,
            on_air_label: d.status_mapping.on_air.to_string(),
            under_construction_label: d.status_mapping.under_construction.to_string(),
            has_network_type: d.has_network_type,
        }
    }
}
